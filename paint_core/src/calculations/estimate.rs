//! # Cost Estimation
//!
//! Turns labor, material, project and business snapshots into a per-m² price
//! and a schedule.
//!
//! ## Steps
//!
//! 1. Hourly labor rate from the wage model
//! 2. Hours per m² for every enabled stage ([`stage_hours`])
//! 3. Labor per m² = hours × rate, plus burden
//! 4. Material per m² = price per coat × waste factor × total coats
//! 5. Overhead on cost, then profit on cost plus overhead
//! 6. Daily productivity and days required
//!
//! ## Degenerate schedules
//!
//! With no enabled stages (or a non-positive working day) there are no labor
//! hours to divide by. The cost figures are still computed, but
//! `daily_productivity` and `days_required` are `None` rather than infinity
//! or NaN. Callers that would rather reject such input up front can run
//! [`EstimateInput::validate`](crate::project::EstimateInput::validate) first.
//!
//! ## Example
//!
//! ```rust
//! use paint_core::calculations::{estimate, LaborConfig, LaborRate, MaterialConfig};
//! use paint_core::project::{
//!     BusinessConfig, ProjectConfig, StageKind, StageSpec, SurfaceType, WorkEnvironment,
//! };
//!
//! let labor = LaborConfig::default().with_rate(LaborRate::Simple { daily_wage: 200.0 });
//! let material = MaterialConfig::excluded();
//! let project = ProjectConfig::new(SurfaceType::Walls, WorkEnvironment::Interior, 100.0)
//!     .with_stage(StageSpec::new(StageKind::Primer));
//! let business = BusinessConfig::default();
//!
//! let result = estimate(&labor, &material, &project, &business);
//! assert!((result.suggested_price_per_sqm - 2.0).abs() < 1e-9);
//! assert!((result.total_project_cost - 200.0).abs() < 1e-9);
//! assert_eq!(result.days_required.map(|d| d.round()), Some(1.0));
//! ```

use serde::{Deserialize, Serialize};

use crate::calculations::labor::LaborConfig;
use crate::calculations::materials::MaterialConfig;
use crate::calculations::productivity::{stage_hours, ProductivitySource};
use crate::project::{BusinessConfig, ProjectConfig, StageKind};

/// Labor for one enabled stage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StageResult {
    /// Display label of the stage
    pub stage: String,
    pub name: StageKind,
    pub coats: u32,
    /// Labor hours per m²
    pub hours: f64,
    /// Basic labor cost per m² (before burden)
    pub cost: f64,
    /// Coats and productivity source, e.g. "2 coats - 12 m²/h - 0.083 h/m²"
    pub description: String,
    pub source: ProductivitySource,
}

/// Per-m² cost components.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct CostBreakdown {
    pub basic_labor: f64,
    pub labor_burden: f64,
    pub materials: f64,
    pub overhead: f64,
    pub profit: f64,
}

/// Results of one estimation pass.
///
/// ## JSON Example
///
/// ```json
/// {
///   "stage_breakdown": [
///     { "stage": "Primer (base coat)", "name": "primer", "coats": 1,
///       "hours": 0.08, "cost": 2.0,
///       "description": "1 coat - scientific standard - 0.080 h/m²",
///       "source": { "type": "Scientific" } }
///   ],
///   "total_hours": 0.08,
///   "hourly_rate": 25.0,
///   "total_coats": 1,
///   "material_price_per_coat": 0.0,
///   "labor_cost_per_sqm": 2.0,
///   "material_cost_per_sqm": 0.0,
///   "total_cost_per_sqm": 2.0,
///   "suggested_price_per_sqm": 2.0,
///   "total_project_cost": 200.0,
///   "daily_productivity": 100.0,
///   "days_required": 1.0,
///   "breakdown": { "basic_labor": 2.0, "labor_burden": 0.0, "materials": 0.0,
///                  "overhead": 0.0, "profit": 0.0 }
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CostResult {
    /// Enabled stages, in display order
    pub stage_breakdown: Vec<StageResult>,

    /// Labor hours per m² across all enabled stages
    pub total_hours: f64,

    /// Cost of one labor hour
    pub hourly_rate: f64,

    /// Coats across all enabled stages
    pub total_coats: u64,

    /// Material price of one coat per m² from the active pricing strategy
    pub material_price_per_coat: f64,

    /// Basic labor plus burden, per m²
    pub labor_cost_per_sqm: f64,

    pub material_cost_per_sqm: f64,

    /// Labor plus material, per m²
    pub total_cost_per_sqm: f64,

    /// Total cost with overhead and profit, per m²
    pub suggested_price_per_sqm: f64,

    /// Suggested price × area
    pub total_project_cost: f64,

    /// m² one worker covers per working day; `None` when there are no hours
    pub daily_productivity: Option<f64>,

    /// Working days for the whole area; `None` when there are no hours
    pub days_required: Option<f64>,

    pub breakdown: CostBreakdown,
}

impl CostResult {
    /// Whether a schedule could be derived
    pub fn is_schedulable(&self) -> bool {
        self.days_required.is_some()
    }

    /// Days required, treating a missing schedule as 0
    pub fn total_days_or_zero(&self) -> f64 {
        self.days_required.unwrap_or(0.0)
    }

    /// Overhead plus profit, per m²
    pub fn margin_per_sqm(&self) -> f64 {
        self.breakdown.overhead + self.breakdown.profit
    }

    /// Labor's share of total cost (0-1); 0 when there is no cost
    pub fn labor_share(&self) -> f64 {
        if self.total_cost_per_sqm > 0.0 {
            self.labor_cost_per_sqm / self.total_cost_per_sqm
        } else {
            0.0
        }
    }
}

fn coats_text(coats: u32) -> String {
    if coats == 1 {
        "1 coat".to_string()
    } else {
        format!("{} coats", coats)
    }
}

fn describe(coats: u32, hours: f64, source: ProductivitySource, working_hours: f64) -> String {
    let coats = coats_text(coats);
    match source {
        ProductivitySource::Scientific => {
            format!("{} - scientific standard - {:.3} h/m²", coats, hours)
        }
        ProductivitySource::CustomHourly { area_per_hour } => {
            format!("{} - {} m²/h - {:.3} h/m²", coats, area_per_hour, 1.0 / area_per_hour)
        }
        ProductivitySource::CustomDaily { area_per_day } => {
            let per_coat = if working_hours > 0.0 {
                working_hours / area_per_day
            } else {
                0.0
            };
            format!("{} - {} m²/day - {:.3} h/m²", coats, area_per_day, per_coat)
        }
    }
}

/// Estimate cost and duration for a painting project.
///
/// Pure and total: identical inputs always give identical results, and no
/// input makes it fail. Disabled stages are skipped; stage order does not
/// affect any total.
///
/// # Arguments
///
/// * `labor` - Wage model, working day, burden and productivity mode
/// * `material` - Material pricing strategy, waste and on/off switch
/// * `project` - Surface, environment, area and stage list
/// * `business` - Overhead and profit percentages
pub fn estimate(
    labor: &LaborConfig,
    material: &MaterialConfig,
    project: &ProjectConfig,
    business: &BusinessConfig,
) -> CostResult {
    // === Step 1: Hourly rate ===
    let hourly_rate = labor.hourly_rate();

    // === Step 2: Per-stage time ===
    let mut total_hours = 0.0;
    let mut stage_breakdown = Vec::with_capacity(project.stages.len());
    for stage in project.enabled_stages() {
        let timing = stage_hours(
            stage,
            labor.productivity_mode,
            project.surface_type,
            project.work_environment,
            labor.working_hours,
        );
        let hours = timing.hours_per_sqm;
        total_hours += hours;
        stage_breakdown.push(StageResult {
            stage: stage.label.clone(),
            name: stage.name,
            coats: stage.coats,
            hours,
            cost: hours * hourly_rate,
            description: describe(stage.coats, hours, timing.source, labor.working_hours),
            source: timing.source,
        });
    }

    // === Step 3: Labor ===
    let basic_labor = total_hours * hourly_rate;
    let labor_burden = basic_labor * labor.labor_burden_pct / 100.0;
    let labor_cost_per_sqm = basic_labor + labor_burden;

    // === Step 4: Materials ===
    let total_coats = project.total_coats();
    let material_price_per_coat = material.price_per_coat();
    let material_cost_per_sqm = material.cost_at(material_price_per_coat, total_coats);

    // === Step 5: Overhead and profit ===
    let total_cost_per_sqm = labor_cost_per_sqm + material_cost_per_sqm;
    let overhead = total_cost_per_sqm * business.overhead_pct / 100.0;
    let cost_with_overhead = total_cost_per_sqm + overhead;
    let profit = cost_with_overhead * business.profit_margin_pct / 100.0;
    let suggested_price_per_sqm = cost_with_overhead + profit;

    // === Step 6: Schedule ===
    let schedulable =
        total_hours > 0.0 && labor.working_hours.is_finite() && labor.working_hours > 0.0;
    let daily_productivity = schedulable.then(|| labor.working_hours / total_hours);
    let days_required = daily_productivity.map(|per_day| project.area / per_day);
    if !schedulable {
        tracing::warn!(
            enabled_stages = stage_breakdown.len(),
            working_hours = labor.working_hours,
            "no labor hours to schedule, productivity and days are not applicable"
        );
    }

    let total_project_cost = suggested_price_per_sqm * project.area;

    tracing::debug!(
        stages = stage_breakdown.len(),
        total_hours,
        hourly_rate,
        suggested_price_per_sqm,
        total_project_cost,
        "estimate computed"
    );

    CostResult {
        stage_breakdown,
        total_hours,
        hourly_rate,
        total_coats,
        material_price_per_coat,
        labor_cost_per_sqm,
        material_cost_per_sqm,
        total_cost_per_sqm,
        suggested_price_per_sqm,
        total_project_cost,
        daily_productivity,
        days_required,
        breakdown: CostBreakdown {
            basic_labor,
            labor_burden,
            materials: material_cost_per_sqm,
            overhead,
            profit,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculations::labor::{CrewRates, LaborRate, ProductivityMode};
    use crate::calculations::materials::MaterialPricing;
    use crate::calculations::productivity::base_rate;
    use crate::project::{EstimateInput, StageSpec, SurfaceType, WorkEnvironment};

    const TOL: f64 = 1e-9;

    fn simple_labor() -> LaborConfig {
        LaborConfig::default().with_rate(LaborRate::Simple { daily_wage: 200.0 })
    }

    fn primer_only() -> ProjectConfig {
        ProjectConfig::new(SurfaceType::Walls, WorkEnvironment::Interior, 100.0)
            .with_stage(StageSpec::new(StageKind::Primer))
    }

    #[test]
    fn test_single_primer_scenario() {
        let result = estimate(
            &simple_labor(),
            &MaterialConfig::excluded(),
            &primer_only(),
            &BusinessConfig::default(),
        );

        assert!((result.total_hours - 0.08).abs() < TOL);
        assert!((result.hourly_rate - 25.0).abs() < TOL);
        assert!((result.labor_cost_per_sqm - 2.0).abs() < TOL);
        assert_eq!(result.material_cost_per_sqm, 0.0);
        assert!((result.suggested_price_per_sqm - 2.0).abs() < TOL);
        assert!((result.total_project_cost - 200.0).abs() < TOL);
        assert!((result.daily_productivity.unwrap() - 100.0).abs() < TOL);
        assert!((result.days_required.unwrap() - 1.0).abs() < TOL);

        assert_eq!(result.stage_breakdown.len(), 1);
        let stage = &result.stage_breakdown[0];
        assert_eq!(stage.stage, "Primer (base coat)");
        assert_eq!(stage.description, "1 coat - scientific standard - 0.080 h/m²");
        assert!((stage.cost - 2.0).abs() < TOL);
    }

    #[test]
    fn test_composite_crew_rate_flows_through() {
        let labor =
            LaborConfig::default().with_rate(LaborRate::CompositeCrew(CrewRates::default()));
        let result = estimate(
            &labor,
            &MaterialConfig::excluded(),
            &primer_only(),
            &BusinessConfig::default(),
        );
        assert!((result.hourly_rate - 62.5625).abs() < TOL);
        assert!((result.labor_cost_per_sqm - 0.08 * 62.5625).abs() < TOL);
    }

    #[test]
    fn test_cost_invariants() {
        let input = EstimateInput {
            labor: LaborConfig::default().with_burden(12.0),
            material: MaterialConfig::default().with_waste(7.5),
            project: ProjectConfig {
                surface_type: SurfaceType::Textured,
                work_environment: WorkEnvironment::Exterior,
                area: 340.0,
                stages: ProjectConfig::default_stages(),
            },
            business: BusinessConfig::new(15.0, 20.0),
        };
        let r = input.estimate();

        let cost_sum = r.labor_cost_per_sqm + r.material_cost_per_sqm;
        assert!((r.total_cost_per_sqm - cost_sum).abs() < TOL);
        let expected_price = r.total_cost_per_sqm * 1.15 * 1.20;
        assert!((r.suggested_price_per_sqm - expected_price).abs() < 1e-6);
        assert_eq!(r.total_project_cost, r.suggested_price_per_sqm * 340.0);
        assert!((r.breakdown.labor_burden - r.breakdown.basic_labor * 0.12).abs() < TOL);
        let margin = r.suggested_price_per_sqm - r.total_cost_per_sqm;
        assert!((r.margin_per_sqm() - margin).abs() < 1e-6);

        for value in [
            r.total_hours,
            r.labor_cost_per_sqm,
            r.material_cost_per_sqm,
            r.suggested_price_per_sqm,
            r.total_project_cost,
        ] {
            assert!(value.is_finite() && value >= 0.0);
        }
    }

    #[test]
    fn test_estimate_is_idempotent() {
        let input = EstimateInput::default();
        let first = input.estimate();
        let second = input.estimate();
        assert_eq!(first, second);
        assert_eq!(first.total_hours.to_bits(), second.total_hours.to_bits());
        assert_eq!(
            serde_json::to_string(&first).unwrap(),
            serde_json::to_string(&second).unwrap()
        );
    }

    #[test]
    fn test_stage_order_does_not_change_totals() {
        let forward = EstimateInput::default();
        let mut reversed = forward.clone();
        reversed.project.stages.reverse();

        let a = forward.estimate();
        let b = reversed.estimate();
        assert!((a.total_hours - b.total_hours).abs() < TOL);
        assert!((a.total_project_cost - b.total_project_cost).abs() < 1e-6);
        assert_eq!(a.stage_breakdown[0].name, StageKind::Primer);
        assert_eq!(b.stage_breakdown[0].name, StageKind::Finishing);
    }

    #[test]
    fn test_extra_coat_adds_factored_base_rate() {
        let mut input = EstimateInput::default();
        input.project.surface_type = SurfaceType::Ceilings;
        input.project.work_environment = WorkEnvironment::ExteriorHeight;
        let before = input.estimate();

        // Index 1 is skimcoat1
        input.project.stages[1].coats += 1;
        let after = input.estimate();

        let expected = base_rate(StageKind::Skimcoat1, SurfaceType::Ceilings) * 1.25 * 1.60;
        assert!((after.total_hours - before.total_hours - expected).abs() < TOL);
    }

    #[test]
    fn test_topcoat_second_coat_discount() {
        let project = ProjectConfig::new(SurfaceType::Walls, WorkEnvironment::Interior, 10.0)
            .with_stage(StageSpec::new(StageKind::Topcoat).with_coats(2));
        let result = estimate(
            &simple_labor(),
            &MaterialConfig::excluded(),
            &project,
            &BusinessConfig::default(),
        );
        // 0.10 + 0.8 × 0.10
        assert!((result.total_hours - 0.18).abs() < TOL);
    }

    #[test]
    fn test_disabled_stages_are_excluded() {
        let mut input = EstimateInput::default();
        let all = input.estimate();
        input.project.stages[0].enabled = false;
        let fewer = input.estimate();

        assert_eq!(fewer.stage_breakdown.len(), all.stage_breakdown.len() - 1);
        assert_eq!(fewer.total_coats, all.total_coats - 1);
        assert!((all.total_hours - fewer.total_hours - 0.08).abs() < TOL);
    }

    #[test]
    fn test_material_cost_uses_every_enabled_coat() {
        let project = ProjectConfig::new(SurfaceType::Walls, WorkEnvironment::Interior, 10.0)
            .with_stage(StageSpec::new(StageKind::Primer))
            .with_stage(StageSpec::new(StageKind::Topcoat).with_coats(2))
            .with_stage(StageSpec::new(StageKind::Topcoat));
        let material = MaterialConfig::default()
            .with_pricing(MaterialPricing::Direct { price_per_sqm: 1.5 })
            .with_waste(20.0);
        let result = estimate(&simple_labor(), &material, &project, &BusinessConfig::default());

        assert_eq!(result.total_coats, 4);
        assert_eq!(result.material_price_per_coat, 1.5);
        assert!((result.material_cost_per_sqm - 1.5 * 1.2 * 4.0).abs() < TOL);
        assert_eq!(result.breakdown.materials, result.material_cost_per_sqm);
    }

    #[test]
    fn test_engineering_material_cost() {
        let project = primer_only();
        let result = estimate(
            &simple_labor(),
            &MaterialConfig::default(),
            &project,
            &BusinessConfig::default(),
        );
        assert!((result.material_cost_per_sqm - 190.4).abs() < 0.1);
    }

    #[test]
    fn test_custom_hourly_mode() {
        let labor = simple_labor().with_mode(ProductivityMode::Hourly);
        let project = ProjectConfig::new(SurfaceType::Metal, WorkEnvironment::Exterior, 10.0)
            .with_stage(
                StageSpec::new(StageKind::Topcoat)
                    .with_coats(2)
                    .with_hourly_productivity(12.0),
            )
            .with_stage(StageSpec::new(StageKind::Primer));
        let result = estimate(
            &labor,
            &MaterialConfig::excluded(),
            &project,
            &BusinessConfig::default(),
        );

        let topcoat = &result.stage_breakdown[0];
        assert!((topcoat.hours - 2.0 / 12.0).abs() < TOL);
        assert_eq!(topcoat.description, "2 coats - 12 m²/h - 0.083 h/m²");

        // The primer has no override and uses scientific rates with factors
        let primer = &result.stage_breakdown[1];
        assert!((primer.hours - 0.08 * 1.30 * 1.35).abs() < TOL);
        assert_eq!(primer.source, ProductivitySource::Scientific);
    }

    #[test]
    fn test_custom_daily_mode_description() {
        let labor = simple_labor().with_mode(ProductivityMode::Daily);
        let project = ProjectConfig::new(SurfaceType::Walls, WorkEnvironment::Interior, 10.0)
            .with_stage(StageSpec::new(StageKind::Sealer).with_daily_productivity(100.0));
        let result = estimate(
            &labor,
            &MaterialConfig::excluded(),
            &project,
            &BusinessConfig::default(),
        );

        let sealer = &result.stage_breakdown[0];
        assert!((sealer.hours - 0.08).abs() < TOL);
        assert_eq!(sealer.description, "1 coat - 100 m²/day - 0.080 h/m²");
    }

    #[test]
    fn test_no_enabled_stages_has_no_schedule() {
        let project = ProjectConfig::new(SurfaceType::Walls, WorkEnvironment::Interior, 100.0)
            .with_stage(StageSpec::new(StageKind::Primer).disabled());
        let result = estimate(
            &simple_labor(),
            &MaterialConfig::default(),
            &project,
            &BusinessConfig::new(10.0, 10.0),
        );

        assert_eq!(result.total_hours, 0.0);
        assert_eq!(result.total_coats, 0);
        assert_eq!(result.daily_productivity, None);
        assert_eq!(result.days_required, None);
        assert!(!result.is_schedulable());
        assert_eq!(result.total_days_or_zero(), 0.0);
        assert_eq!(result.suggested_price_per_sqm, 0.0);
        assert_eq!(result.total_project_cost, 0.0);

        let json = serde_json::to_string(&result).unwrap();
        assert!(json.contains("\"days_required\":null"));
    }

    #[test]
    fn test_zero_coat_stages_contribute_nothing() {
        let project = ProjectConfig::new(SurfaceType::Walls, WorkEnvironment::Interior, 100.0)
            .with_stage(StageSpec::new(StageKind::Topcoat).with_coats(0))
            .with_stage(StageSpec::new(StageKind::Primer).with_coats(0));
        let material = MaterialConfig::default()
            .with_pricing(MaterialPricing::Direct { price_per_sqm: 2.5 });
        let result = estimate(&simple_labor(), &material, &project, &BusinessConfig::default());

        assert_eq!(result.stage_breakdown.len(), 2);
        assert_eq!(result.total_hours, 0.0);
        assert_eq!(result.total_coats, 0);
        assert_eq!(result.material_price_per_coat, 2.5);
        assert_eq!(result.material_cost_per_sqm, 0.0);
        assert_eq!(result.daily_productivity, None);
        assert_eq!(result.days_required, None);
        assert_eq!(
            result.stage_breakdown[0].description,
            "0 coats - scientific standard - 0.000 h/m²"
        );
    }

    #[test]
    fn test_coat_counts_beyond_u32_stay_exact() {
        let project = ProjectConfig::new(SurfaceType::Walls, WorkEnvironment::Interior, 10.0)
            .with_stage(StageSpec::new(StageKind::Primer).with_coats(3_000_000_000))
            .with_stage(StageSpec::new(StageKind::Topcoat).with_coats(3_000_000_000));
        let material = MaterialConfig::default()
            .with_pricing(MaterialPricing::Direct { price_per_sqm: 0.5 });
        let result = estimate(&simple_labor(), &material, &project, &BusinessConfig::default());

        assert_eq!(result.total_coats, 6_000_000_000);
        assert_eq!(result.material_cost_per_sqm, 3_000_000_000.0);
        assert_eq!(
            result.material_cost_per_sqm,
            result.material_price_per_coat * result.total_coats as f64
        );
        assert!(result.total_hours.is_finite() && result.total_hours > 0.0);
        assert!(result.total_project_cost.is_finite());
    }

    #[test]
    fn test_zero_working_hours_has_no_schedule() {
        let labor = simple_labor().with_working_hours(0.0);
        let result = estimate(
            &labor,
            &MaterialConfig::excluded(),
            &primer_only(),
            &BusinessConfig::default(),
        );

        // Hours still accrue from the scientific table, but cost nothing
        assert!((result.total_hours - 0.08).abs() < TOL);
        assert_eq!(result.hourly_rate, 0.0);
        assert_eq!(result.labor_cost_per_sqm, 0.0);
        assert_eq!(result.daily_productivity, None);
        assert_eq!(result.days_required, None);
    }

    #[test]
    fn test_labor_share() {
        let result = estimate(
            &simple_labor(),
            &MaterialConfig::default().with_pricing(MaterialPricing::Direct { price_per_sqm: 2.0 }),
            &primer_only(),
            &BusinessConfig::default(),
        );
        // Labor 2.0, material 2.0
        assert!((result.labor_share() - 0.5).abs() < TOL);
    }

    #[test]
    fn test_result_serialization() {
        let result = EstimateInput::default().estimate();
        let json = serde_json::to_string_pretty(&result).unwrap();

        assert!(json.contains("stage_breakdown"));
        assert!(json.contains("suggested_price_per_sqm"));
        assert!(json.contains("\"type\": \"Scientific\""));

        let roundtrip: CostResult = serde_json::from_str(&json).unwrap();
        assert!((roundtrip.total_project_cost - result.total_project_cost).abs() < 1e-6);
        assert_eq!(roundtrip.stage_breakdown.len(), 6);
    }
}
