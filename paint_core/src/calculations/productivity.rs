//! # Stage Productivity
//!
//! Hours of labor per m² for one stage.
//!
//! ## Scientific mode
//!
//! ```text
//! hours = base_rate(stage, surface) × coats × surface_factor × environment_factor
//! ```
//!
//! The topcoat is the exception: coats after the first take 80% of the base
//! rate (repaint over a sealed surface goes faster).
//!
//! ## Custom modes
//!
//! ```text
//! hourly: hours = (1 / m²_per_hour) × coats
//! daily:  hours = (working_hours / m²_per_day) × coats
//! ```
//!
//! Custom rates are observed on site, so surface and environment factors are
//! not applied on top of them.
//!
//! ## Base rate table (h/m²)
//!
//! | Stage      | Walls | Ceilings | Textured |
//! |------------|-------|----------|----------|
//! | sanding    | 0.20  | 0.25     | 0.30     |
//! | sealer     | 0.10  | 0.15     | 0.18     |
//! | primer     | 0.08  | 0.12     | 0.15     |
//! | skimcoat1  | 0.25  | 0.30     | 0.35     |
//! | skimcoat2  | 0.20  | 0.25     | 0.30     |
//! | basecoat   | 0.12  | 0.18     | 0.22     |
//! | topcoat    | 0.10  | 0.15     | 0.18     |
//! | finishing  | 0.05  | 0.08     | 0.10     |
//! | custom     | 0.10  | 0.15     | 0.18     |
//!
//! Timber and metal use the walls column.

use serde::{Deserialize, Serialize};

use crate::calculations::labor::ProductivityMode;
use crate::project::{StageKind, StageSpec, SurfaceType, WorkEnvironment};

/// Share of the base rate taken by each topcoat after the first
pub const TOPCOAT_REPEAT_FACTOR: f64 = 0.8;

/// Base rates (h/m²) of one stage kind by surface column.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StageRates {
    pub walls: f64,
    pub ceilings: f64,
    pub textured: f64,
}

impl StageRates {
    const fn new(walls: f64, ceilings: f64, textured: f64) -> Self {
        StageRates {
            walls,
            ceilings,
            textured,
        }
    }

    /// Rate for a surface; surfaces without their own column use walls
    pub fn for_surface(&self, surface: SurfaceType) -> f64 {
        match surface {
            SurfaceType::Ceilings => self.ceilings,
            SurfaceType::Textured => self.textured,
            SurfaceType::Walls | SurfaceType::Timber | SurfaceType::Metal => self.walls,
        }
    }
}

/// Base production rates for a stage kind.
pub fn stage_rates(kind: StageKind) -> StageRates {
    match kind {
        StageKind::Sanding => StageRates::new(0.20, 0.25, 0.30),
        StageKind::Sealer => StageRates::new(0.10, 0.15, 0.18),
        StageKind::Primer => StageRates::new(0.08, 0.12, 0.15),
        StageKind::Skimcoat1 => StageRates::new(0.25, 0.30, 0.35),
        StageKind::Skimcoat2 => StageRates::new(0.20, 0.25, 0.30),
        StageKind::Basecoat => StageRates::new(0.12, 0.18, 0.22),
        StageKind::Topcoat => StageRates::new(0.10, 0.15, 0.18),
        StageKind::Finishing => StageRates::new(0.05, 0.08, 0.10),
        StageKind::Custom => StageRates::new(0.10, 0.15, 0.18),
    }
}

/// Base rate (h/m² for one coat) before any factors.
pub fn base_rate(kind: StageKind, surface: SurfaceType) -> f64 {
    stage_rates(kind).for_surface(surface)
}

/// Where a stage's hours came from.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ProductivitySource {
    /// Base-rate table with surface and environment factors
    Scientific,
    /// Operator's m² per hour
    CustomHourly { area_per_hour: f64 },
    /// Operator's m² per working day
    CustomDaily { area_per_day: f64 },
}

/// Hours per m² for a stage and the source used to derive them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StageHours {
    pub hours_per_sqm: f64,
    pub source: ProductivitySource,
}

/// Scientific-mode hours per m² for `coats` applications.
pub fn scientific_hours(
    kind: StageKind,
    coats: u32,
    surface: SurfaceType,
    environment: WorkEnvironment,
) -> f64 {
    let base = base_rate(kind, surface);
    let coat_hours = if kind == StageKind::Topcoat && coats > 1 {
        base + f64::from(coats - 1) * base * TOPCOAT_REPEAT_FACTOR
    } else {
        base * f64::from(coats)
    };
    coat_hours * surface.time_factor() * environment.time_factor()
}

/// Hours per m² for a stage under the selected productivity mode.
///
/// Hourly and daily modes use the stage's own override when it has a usable
/// one and fall through to scientific otherwise. A non-positive working day
/// makes a daily-mode stage take 0 hours.
pub fn stage_hours(
    stage: &StageSpec,
    mode: ProductivityMode,
    surface: SurfaceType,
    environment: WorkEnvironment,
    working_hours: f64,
) -> StageHours {
    let coats = f64::from(stage.coats);
    match (mode, stage.hourly_override(), stage.daily_override()) {
        (ProductivityMode::Hourly, Some(area_per_hour), _) => StageHours {
            hours_per_sqm: (1.0 / area_per_hour) * coats,
            source: ProductivitySource::CustomHourly { area_per_hour },
        },
        (ProductivityMode::Daily, _, Some(area_per_day)) => {
            let per_coat = if working_hours.is_finite() && working_hours > 0.0 {
                working_hours / area_per_day
            } else {
                0.0
            };
            StageHours {
                hours_per_sqm: per_coat * coats,
                source: ProductivitySource::CustomDaily { area_per_day },
            }
        }
        _ => StageHours {
            hours_per_sqm: scientific_hours(stage.name, stage.coats, surface, environment),
            source: ProductivitySource::Scientific,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOL: f64 = 1e-12;

    #[test]
    fn test_every_kind_has_rates() {
        for kind in StageKind::ALL {
            let rates = stage_rates(kind);
            assert!(rates.walls > 0.0);
            // Ceilings and textured are never faster than walls
            assert!(rates.ceilings >= rates.walls);
            assert!(rates.textured >= rates.ceilings);
        }
    }

    #[test]
    fn test_surface_columns() {
        assert_eq!(base_rate(StageKind::Primer, SurfaceType::Walls), 0.08);
        assert_eq!(base_rate(StageKind::Primer, SurfaceType::Ceilings), 0.12);
        assert_eq!(base_rate(StageKind::Primer, SurfaceType::Textured), 0.15);
        assert_eq!(base_rate(StageKind::Primer, SurfaceType::Timber), 0.08);
        assert_eq!(base_rate(StageKind::Primer, SurfaceType::Metal), 0.08);
        assert_eq!(
            stage_rates(StageKind::Custom),
            stage_rates(StageKind::Topcoat)
        );
    }

    #[test]
    fn test_scientific_single_coat() {
        let hours = scientific_hours(
            StageKind::Primer,
            1,
            SurfaceType::Walls,
            WorkEnvironment::Interior,
        );
        assert!((hours - 0.08).abs() < TOL);
    }

    #[test]
    fn test_scientific_factors_apply() {
        // Metal uses the walls rate, then 1.30 surface and 1.60 environment
        let hours = scientific_hours(
            StageKind::Sanding,
            1,
            SurfaceType::Metal,
            WorkEnvironment::ExteriorHeight,
        );
        assert!((hours - 0.20 * 1.30 * 1.60).abs() < TOL);
    }

    #[test]
    fn test_additional_coat_adds_one_factored_base_rate() {
        for kind in StageKind::ALL {
            if kind == StageKind::Topcoat {
                continue;
            }
            for surface in SurfaceType::ALL {
                for env in WorkEnvironment::ALL {
                    let two = scientific_hours(kind, 2, surface, env);
                    let three = scientific_hours(kind, 3, surface, env);
                    let expected =
                        base_rate(kind, surface) * surface.time_factor() * env.time_factor();
                    assert!((three - two - expected).abs() < 1e-9);
                }
            }
        }
    }

    #[test]
    fn test_zero_coats_take_no_time() {
        for kind in [StageKind::Topcoat, StageKind::Primer] {
            let hours = scientific_hours(kind, 0, SurfaceType::Textured, WorkEnvironment::Exterior);
            assert_eq!(hours, 0.0);
        }
    }

    #[test]
    fn test_topcoat_repeat_discount() {
        let env = WorkEnvironment::Exterior;
        let surface = SurfaceType::Ceilings;
        let one = scientific_hours(StageKind::Topcoat, 1, surface, env);
        let two = scientific_hours(StageKind::Topcoat, 2, surface, env);
        let three = scientific_hours(StageKind::Topcoat, 3, surface, env);
        assert!((two - one - 0.8 * one).abs() < 1e-9);
        assert!((three - two - 0.8 * one).abs() < 1e-9);
    }

    #[test]
    fn test_hourly_override() {
        let stage = StageSpec::new(StageKind::Primer)
            .with_coats(2)
            .with_hourly_productivity(10.0);
        let result = stage_hours(
            &stage,
            ProductivityMode::Hourly,
            SurfaceType::Textured,
            WorkEnvironment::ExteriorHeight,
            8.0,
        );
        // Factors are not applied to observed rates
        assert!((result.hours_per_sqm - 0.2).abs() < TOL);
        assert_eq!(
            result.source,
            ProductivitySource::CustomHourly { area_per_hour: 10.0 }
        );
    }

    #[test]
    fn test_daily_override() {
        let stage = StageSpec::new(StageKind::Topcoat)
            .with_coats(3)
            .with_daily_productivity(80.0);
        let result = stage_hours(
            &stage,
            ProductivityMode::Daily,
            SurfaceType::Walls,
            WorkEnvironment::Interior,
            8.0,
        );
        // No topcoat discount in custom modes
        assert!((result.hours_per_sqm - 0.3).abs() < TOL);
        assert_eq!(result.source, ProductivitySource::CustomDaily { area_per_day: 80.0 });
    }

    #[test]
    fn test_daily_override_with_no_working_hours() {
        let stage = StageSpec::new(StageKind::Primer).with_daily_productivity(80.0);
        let result = stage_hours(
            &stage,
            ProductivityMode::Daily,
            SurfaceType::Walls,
            WorkEnvironment::Interior,
            0.0,
        );
        assert_eq!(result.hours_per_sqm, 0.0);
    }

    #[test]
    fn test_custom_mode_falls_through_without_override() {
        let stage = StageSpec::new(StageKind::Primer).with_daily_productivity(80.0);
        // Hourly mode, but only a daily override is set
        let result = stage_hours(
            &stage,
            ProductivityMode::Hourly,
            SurfaceType::Walls,
            WorkEnvironment::Exterior,
            8.0,
        );
        assert_eq!(result.source, ProductivitySource::Scientific);
        assert!((result.hours_per_sqm - 0.08 * 1.35).abs() < TOL);
    }

    #[test]
    fn test_scientific_mode_ignores_overrides() {
        let stage = StageSpec::new(StageKind::Primer)
            .with_hourly_productivity(10.0)
            .with_daily_productivity(80.0);
        let result = stage_hours(
            &stage,
            ProductivityMode::Scientific,
            SurfaceType::Walls,
            WorkEnvironment::Interior,
            8.0,
        );
        assert_eq!(result.source, ProductivitySource::Scientific);
    }
}
