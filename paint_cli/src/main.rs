//! # Paintwise CLI Application
//!
//! Terminal front end for the painting cost estimator.
//!
//! ```text
//! paint_cli estimate --input job.json
//! paint_cli estimate --area 250 --json
//! paint_cli estimate --area 80 --brand dulux --gallon-price 60
//! paint_cli coating --brand nippon --gallon-price 85
//! paint_cli coating --vs 0.5 --dft 40 --method airless --temp 18 --rh 80
//! ```
//!
//! Without `--input` or `--area`, `estimate` asks for the area and prices the
//! default stage sequence with default rates.

use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, EnvFilter};

use paint_core::calculations::{CostResult, LaborRate, MaterialPricing};
use paint_core::coatings::brands::topcoat_coverage_for;
use paint_core::coatings::{ApplicationMethod, CoatingInput, CoatingReport};
use paint_core::project::EstimateInput;
use paint_core::units::Microns;
use paint_core::{CalcError, CalcResult};

/// Paintwise - painting cost estimation per square meter
#[derive(Parser, Debug)]
#[command(name = "paint_cli")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Price a painting job
    Estimate {
        /// JSON file with labor, material, project and business settings
        #[arg(short, long, env = "PAINTWISE_INPUT")]
        input: Option<PathBuf>,

        /// Area to paint (m²); overrides the area in the input file
        #[arg(short, long)]
        area: Option<f64>,

        /// Print only the JSON result
        #[arg(long)]
        json: bool,

        /// Refuse to estimate when the input fails validation
        #[arg(long)]
        strict: bool,

        /// Price materials with this brand's topcoat coverage per gallon
        #[arg(short, long, requires = "gallon_price")]
        brand: Option<String>,

        /// Gallon price for the brand given with --brand
        #[arg(long, requires = "brand")]
        gallon_price: Option<f64>,
    },

    /// Evaluate a coating's spread rate, consumption, price and dew point
    Coating {
        /// Volume solids as a fraction (0-1)
        #[arg(long, default_value_t = 0.4)]
        vs: f64,

        /// Dry film thickness (µm)
        #[arg(long, default_value_t = 35.0)]
        dft: f64,

        /// Application method (airless, roller, brush)
        #[arg(short, long, default_value = "roller")]
        method: ApplicationMethod,

        /// Price of one gallon
        #[arg(long, default_value_t = 70.0)]
        gallon_price: f64,

        /// Coverage of one gallon (m²)
        #[arg(long)]
        coverage: Option<f64>,

        /// Take the topcoat coverage from the brand catalogue instead
        /// (unknown brands use the default coverage)
        #[arg(short, long)]
        brand: Option<String>,

        /// Surface temperature (°C)
        #[arg(long, default_value_t = 30.0)]
        temp: f64,

        /// Relative humidity (%)
        #[arg(long, default_value_t = 55.0)]
        rh: f64,

        /// Print only the JSON report
        #[arg(long)]
        json: bool,
    },
}

impl Cli {
    fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}

fn prompt_f64(prompt: &str, default: f64) -> f64 {
    print!("{}", prompt);
    if io::stdout().flush().is_err() {
        return default;
    }

    let mut input = String::new();
    if io::stdin().lock().read_line(&mut input).is_err() {
        return default;
    }

    input.trim().parse().unwrap_or(default)
}

fn load_input(path: &Path) -> CalcResult<EstimateInput> {
    let json = std::fs::read_to_string(path).map_err(|e| {
        CalcError::invalid_input("input", path.display().to_string(), e.to_string())
    })?;
    EstimateInput::from_json(&json)
}

/// Gallon coverage for the coating report: an explicit value wins, then the
/// brand catalogue, then the default input's coverage.
fn coverage_per_gallon(coverage: Option<f64>, brand: Option<&str>) -> f64 {
    match (coverage, brand) {
        (Some(coverage), _) => coverage,
        (None, Some(brand)) => topcoat_coverage_for(brand),
        (None, None) => CoatingInput::default().coverage_per_gallon,
    }
}

/// Gallon-calculator pricing from `--brand` and `--gallon-price`.
fn brand_pricing(brand: Option<&str>, gallon_price: Option<f64>) -> Option<MaterialPricing> {
    brand
        .zip(gallon_price)
        .map(|(name, price)| MaterialPricing::gallon_for_brand(name, price))
}

fn main() {
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(cli.log_level()));
    fmt().with_env_filter(filter).with_target(false).init();

    let result = match cli.command {
        Commands::Estimate {
            input,
            area,
            json,
            strict,
            brand,
            gallon_price,
        } => {
            let pricing = brand_pricing(brand.as_deref(), gallon_price);
            run_estimate(input.as_deref(), area, pricing, json, strict)
        }
        Commands::Coating {
            vs,
            dft,
            method,
            gallon_price,
            coverage,
            brand,
            temp,
            rh,
            json,
        } => {
            let input = CoatingInput {
                gallon_price,
                coverage_per_gallon: coverage_per_gallon(coverage, brand.as_deref()),
                ..CoatingInput::default()
            }
            .with_film(vs, dft)
            .with_method(method)
            .with_conditions(temp, rh);
            run_coating(&input, json)
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        if let Ok(json) = serde_json::to_string_pretty(&e) {
            eprintln!();
            eprintln!("Error JSON:");
            eprintln!("{}", json);
        }
        std::process::exit(1);
    }
}

fn run_estimate(
    input: Option<&Path>,
    area: Option<f64>,
    pricing_override: Option<MaterialPricing>,
    json: bool,
    strict: bool,
) -> CalcResult<()> {
    let mut estimate_input = match input {
        Some(path) => load_input(path)?,
        None => EstimateInput::default(),
    };

    if let Some(pricing) = pricing_override {
        estimate_input.material.include_materials = true;
        estimate_input.material.pricing = pricing;
    }

    match area {
        Some(area) => estimate_input.project.area = area,
        None if input.is_none() && !json => {
            println!("Paintwise CLI - Painting Cost Estimator");
            println!("=======================================");
            println!();
            let default_area = estimate_input.project.area;
            let prompt = format!("Enter area to paint (m²) [{:.1}]: ", default_area);
            estimate_input.project.area = prompt_f64(&prompt, default_area);
            println!();
        }
        None => {}
    }

    if let Err(e) = estimate_input.validate() {
        if strict {
            return Err(e);
        }
        tracing::warn!(code = e.error_code(), "{}", e);
    }

    let result = estimate_input.estimate();

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        print_estimate(&estimate_input, &result);
        println!();
        println!("JSON Output:");
        println!("{}", serde_json::to_string_pretty(&result)?);
    }
    Ok(())
}

fn print_estimate(input: &EstimateInput, result: &CostResult) {
    let project = &input.project;
    let generated = chrono::Local::now().format("%Y-%m-%d %H:%M");

    println!("═══════════════════════════════════════");
    println!("  PAINTING ESTIMATE  ({})", generated);
    println!("═══════════════════════════════════════");
    println!();
    println!("Project:");
    println!("  Surface:     {}", project.surface_type);
    println!("  Environment: {}", project.work_environment);
    println!("  Area:        {:.1} m²", project.area);
    println!(
        "  Labor:       {} ({:.2}/h)",
        input.labor.rate.model_name(),
        result.hourly_rate
    );
    if let LaborRate::CompositeCrew(crew) = &input.labor.rate {
        let parts = crew.hourly_components(input.labor.working_hours);
        println!(
            "               painter {:.2}, helper {:.2}, foreman {:.2}",
            parts.painter, parts.helper, parts.foreman
        );
        println!(
            "               admin {:.2}, transport {:.2}",
            parts.admin, parts.transport
        );
    }
    if input.material.include_materials {
        println!("  Materials:   {}", input.material.pricing.mode_name());
    } else {
        println!("  Materials:   supplied by client");
    }
    println!();
    println!("Stages:");
    for stage in &result.stage_breakdown {
        println!(
            "  {:<24} {:.3} h/m²  {:>8.2}/m²  ({})",
            stage.stage, stage.hours, stage.cost, stage.description
        );
    }
    println!();
    println!("Cost per m²:");
    println!("  Basic labor:  {:>10.2}", result.breakdown.basic_labor);
    println!("  Labor burden: {:>10.2}", result.breakdown.labor_burden);
    println!(
        "  Materials:    {:>10.2}  ({} coats × {:.2})",
        result.breakdown.materials, result.total_coats, result.material_price_per_coat
    );
    println!("  Overhead:     {:>10.2}", result.breakdown.overhead);
    println!("  Profit:       {:>10.2}", result.breakdown.profit);
    println!();
    println!("Schedule:");
    match (result.daily_productivity, result.days_required) {
        (Some(per_day), Some(days)) => {
            println!("  Productivity: {:.1} m²/day {}", per_day, status_icon(true));
            println!("  Duration:     {:.1} days", days);
        }
        _ => println!("  No labor hours to schedule {}", status_icon(false)),
    }
    println!();
    println!("═══════════════════════════════════════");
    println!(
        "  PRICE: {:.2} per m², {:.2} total",
        result.suggested_price_per_sqm, result.total_project_cost
    );
    println!("═══════════════════════════════════════");
}

fn run_coating(input: &CoatingInput, json: bool) -> CalcResult<()> {
    let report = input.evaluate();

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    print_coating(input, &report);
    println!();
    println!("JSON Output:");
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

fn print_coating(input: &CoatingInput, report: &CoatingReport) {
    println!("═══════════════════════════════════════");
    println!("  COATING REPORT");
    println!("═══════════════════════════════════════");
    println!();
    println!("Input:");
    println!("  Volume solids: {:.0}%", input.volume_solids * 100.0);
    println!("  DFT:           {}", Microns(input.dft_microns));
    println!("  Method:        {}", input.application_method);
    println!("  Gallon:        {:.2} for {:.1} m²", input.gallon_price, input.coverage_per_gallon);
    println!();
    println!("Consumption:");
    println!("  Theoretical spread: {:.3} m²/L", report.theoretical_spread_rate);
    println!("  Practical spread:   {:.3} m²/L", report.practical_spread_rate);
    println!("  Per coat:           {:.3} L/m²", report.liters_per_sqm_per_coat);
    println!("  Wet film:           {}", Microns(report.wet_film_thickness_microns));
    println!();
    println!("Price per m² per coat:");
    println!("  From gallon coverage: {:.2}", report.cost_per_sqm_from_gallon);
    println!("  From engineering:     {:.2}", report.engineering_price_per_sqm);
    println!();
    let dew = &report.dew_point;
    println!(
        "Dew point: {:.1} °C at {:.1} °C / {:.0}% RH, margin {:.1} °C {}",
        dew.dew_point_c,
        input.surface_temp_c,
        input.relative_humidity_pct,
        dew.margin_c,
        status_icon(dew.safe)
    );
}

fn status_icon(pass: bool) -> &'static str {
    if pass { "[OK]" } else { "[FAIL]" }
}

#[cfg(test)]
mod tests {
    use super::*;
    use paint_core::coatings::brands::DEFAULT_TOPCOAT_COVERAGE;

    #[test]
    fn test_coverage_prefers_explicit_value() {
        assert_eq!(coverage_per_gallon(Some(22.0), Some("jotun")), 22.0);
    }

    #[test]
    fn test_coverage_from_brand_catalogue() {
        assert_eq!(coverage_per_gallon(None, Some("Nippon")), 17.0);
        assert_eq!(coverage_per_gallon(None, Some("acme")), DEFAULT_TOPCOAT_COVERAGE);
        assert_eq!(coverage_per_gallon(None, None), 40.0);
    }

    #[test]
    fn test_cli_accepts_unknown_brand() {
        let cli = Cli::try_parse_from(["paint_cli", "coating", "--brand", "acme"]).unwrap();
        match cli.command {
            Commands::Coating { brand, .. } => assert_eq!(brand.as_deref(), Some("acme")),
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_estimate_brand_needs_gallon_price() {
        assert!(Cli::try_parse_from(["paint_cli", "estimate", "--brand", "dulux"]).is_err());

        let cli = Cli::try_parse_from([
            "paint_cli",
            "estimate",
            "--brand",
            "dulux",
            "--gallon-price",
            "60",
            "--area",
            "50",
        ])
        .unwrap();
        match cli.command {
            Commands::Estimate {
                brand,
                gallon_price,
                ..
            } => {
                assert_eq!(
                    brand_pricing(brand.as_deref(), gallon_price),
                    Some(MaterialPricing::GallonCalculator {
                        gallon_price: 60.0,
                        coverage_per_gallon: 15.0,
                    })
                );
            }
            other => panic!("unexpected command {:?}", other),
        }
    }
}
