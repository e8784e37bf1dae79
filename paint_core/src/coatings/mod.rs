//! # Coating Physics
//!
//! Pure functions that turn a coating's data sheet (volume solids, dry film
//! thickness, price) and the application method into consumption and price
//! per square meter, plus the dew point check done before painting.
//!
//! This module is a leaf: it depends on nothing else in the crate except the
//! unit helpers and error type.
//!
//! ## Example
//!
//! ```rust
//! use paint_core::coatings::{ApplicationMethod, CoatingInput};
//!
//! let report = CoatingInput::default()
//!     .with_method(ApplicationMethod::Airless)
//!     .evaluate();
//!
//! assert!(report.practical_spread_rate > 0.0);
//! assert!(report.dew_point.safe);
//! ```

pub mod brands;
pub mod dew_point;
pub mod physics;

pub use brands::{BrandCoverage, PaintBrand, PaintProduct};
pub use dew_point::{dew_point_celsius, dew_point_safety, DewPointCheck};
pub use physics::{
    liters_per_sqm_per_coat, material_cost_per_area, practical_spread_rate,
    price_from_engineering, price_from_gallon, theoretical_spread_rate,
    wet_film_thickness_from_dry,
};

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

/// How the coating is applied. Each method has a fixed transfer-loss factor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case", from = "String")]
pub enum ApplicationMethod {
    /// Airless spray (0.90)
    Airless,
    /// Roller (0.85)
    #[default]
    Roller,
    /// Brush (0.82)
    Brush,
}

impl ApplicationMethod {
    /// All methods for UI selection
    pub const ALL: [ApplicationMethod; 3] = [
        ApplicationMethod::Airless,
        ApplicationMethod::Roller,
        ApplicationMethod::Brush,
    ];

    /// Fraction of the applied paint that ends up on the surface
    pub fn loss_factor(&self) -> f64 {
        match self {
            ApplicationMethod::Airless => 0.90,
            ApplicationMethod::Roller => 0.85,
            ApplicationMethod::Brush => 0.82,
        }
    }

    /// Short code used in JSON and on the command line
    pub fn code(&self) -> &'static str {
        match self {
            ApplicationMethod::Airless => "airless",
            ApplicationMethod::Roller => "roller",
            ApplicationMethod::Brush => "brush",
        }
    }

    /// Parse from common string representations
    pub fn from_str_flexible(s: &str) -> CalcResult<Self> {
        match s.trim().to_lowercase().replace([' ', '-'], "_").as_str() {
            "airless" | "airless_spray" | "spray" => Ok(ApplicationMethod::Airless),
            "roller" | "roll" => Ok(ApplicationMethod::Roller),
            "brush" => Ok(ApplicationMethod::Brush),
            _ => Err(CalcError::unknown_value("application method", s)),
        }
    }

    /// Parse, falling back to [`ApplicationMethod::Roller`] for unknown input
    pub fn parse_or_default(s: &str) -> Self {
        Self::from_str_flexible(s).unwrap_or_else(|_| {
            tracing::warn!(value = s, "unknown application method, using roller");
            Self::default()
        })
    }
}

impl FromStr for ApplicationMethod {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_str_flexible(s)
    }
}

impl From<String> for ApplicationMethod {
    fn from(s: String) -> Self {
        Self::parse_or_default(&s)
    }
}

impl std::fmt::Display for ApplicationMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Engineering data for a single coating plus site conditions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CoatingInput {
    /// Volume solids as a fraction (0-1)
    pub volume_solids: f64,
    /// Target dry film thickness (µm)
    pub dft_microns: f64,
    pub application_method: ApplicationMethod,
    /// Price of one gallon
    pub gallon_price: f64,
    /// Manufacturer's coverage for one gallon (m²)
    pub coverage_per_gallon: f64,
    /// Surface temperature (°C)
    pub surface_temp_c: f64,
    /// Relative humidity (%)
    pub relative_humidity_pct: f64,
}

impl Default for CoatingInput {
    fn default() -> Self {
        CoatingInput {
            volume_solids: 0.4,
            dft_microns: 35.0,
            application_method: ApplicationMethod::Roller,
            gallon_price: 70.0,
            coverage_per_gallon: 40.0,
            surface_temp_c: 30.0,
            relative_humidity_pct: 55.0,
        }
    }
}

impl CoatingInput {
    pub fn with_method(mut self, method: ApplicationMethod) -> Self {
        self.application_method = method;
        self
    }

    pub fn with_film(mut self, volume_solids: f64, dft_microns: f64) -> Self {
        self.volume_solids = volume_solids;
        self.dft_microns = dft_microns;
        self
    }

    pub fn with_conditions(mut self, surface_temp_c: f64, relative_humidity_pct: f64) -> Self {
        self.surface_temp_c = surface_temp_c;
        self.relative_humidity_pct = relative_humidity_pct;
        self
    }

    /// Run every coating formula over this input.
    pub fn evaluate(&self) -> CoatingReport {
        let tsr = theoretical_spread_rate(self.volume_solids, self.dft_microns);
        let psr = practical_spread_rate(tsr, self.application_method.loss_factor());
        CoatingReport {
            theoretical_spread_rate: tsr,
            practical_spread_rate: psr,
            liters_per_sqm_per_coat: liters_per_sqm_per_coat(psr),
            wet_film_thickness_microns: wet_film_thickness_from_dry(
                self.dft_microns,
                self.volume_solids,
            ),
            cost_per_sqm_from_gallon: material_cost_per_area(
                self.gallon_price,
                self.coverage_per_gallon,
            ),
            engineering_price_per_sqm: price_from_engineering(
                self.volume_solids,
                self.dft_microns,
                self.application_method,
                self.gallon_price,
            ),
            dew_point: dew_point_safety(self.surface_temp_c, self.relative_humidity_pct),
        }
    }
}

/// Derived coating figures.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct CoatingReport {
    /// m²/L with no losses
    pub theoretical_spread_rate: f64,
    /// m²/L after application losses
    pub practical_spread_rate: f64,
    pub liters_per_sqm_per_coat: f64,
    pub wet_film_thickness_microns: f64,
    /// gallon price / gallon coverage
    pub cost_per_sqm_from_gallon: f64,
    /// Price per m² per coat from the engineering data
    pub engineering_price_per_sqm: f64,
    pub dew_point: DewPointCheck,
}
