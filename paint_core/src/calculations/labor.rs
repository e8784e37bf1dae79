//! # Labor Rates
//!
//! Hourly labor cost under either wage model:
//!
//! ```text
//! Simple:         rate = daily_wage / H
//! Composite crew: rate = painter/H + r_helper·helper/H + r_foreman·foreman/H
//!                        + admin/H + transport/H
//! ```
//!
//! where `H` is the number of working hours per day.
//!
//! ## Example
//!
//! ```rust
//! use paint_core::calculations::labor::{CrewRates, LaborConfig, LaborRate};
//!
//! let labor = LaborConfig::default().with_rate(LaborRate::Simple { daily_wage: 200.0 });
//! assert_eq!(labor.hourly_rate(), 25.0);
//!
//! let crew = LaborConfig::default().with_rate(LaborRate::CompositeCrew(CrewRates::default()));
//! assert!((crew.hourly_rate() - 62.5625).abs() < 1e-9);
//! ```

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::{require_non_negative, require_positive, CalcError, CalcResult};

/// How per-stage time per m² is derived.
///
/// The custom modes only apply to stages that carry a usable override;
/// every other stage falls through to the scientific table.
/// Unknown values deserialize to scientific.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case", from = "String")]
pub enum ProductivityMode {
    /// Base-rate table scaled by surface and environment factors
    #[default]
    Scientific,
    /// Operator-observed m² per hour
    Hourly,
    /// Operator-observed m² per working day
    Daily,
}

impl ProductivityMode {
    pub const ALL: [ProductivityMode; 3] = [
        ProductivityMode::Scientific,
        ProductivityMode::Hourly,
        ProductivityMode::Daily,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            ProductivityMode::Scientific => "scientific",
            ProductivityMode::Hourly => "hourly",
            ProductivityMode::Daily => "daily",
        }
    }

    /// Parse from common string representations
    pub fn from_str_flexible(s: &str) -> CalcResult<Self> {
        match s.trim().to_lowercase().as_str() {
            "scientific" | "standard" => Ok(ProductivityMode::Scientific),
            "hourly" | "hour" => Ok(ProductivityMode::Hourly),
            "daily" | "day" => Ok(ProductivityMode::Daily),
            _ => Err(CalcError::unknown_value("productivity mode", s)),
        }
    }

    /// Parse, falling back to [`ProductivityMode::Scientific`] for unknown input
    pub fn parse_or_default(s: &str) -> Self {
        Self::from_str_flexible(s).unwrap_or_else(|_| {
            tracing::warn!(value = s, "unknown productivity mode, using scientific");
            Self::default()
        })
    }
}

impl FromStr for ProductivityMode {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_str_flexible(s)
    }
}

impl From<String> for ProductivityMode {
    fn from(s: String) -> Self {
        Self::parse_or_default(&s)
    }
}

impl std::fmt::Display for ProductivityMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Daily costs and support ratios of a painting crew.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CrewRates {
    pub painter_daily: f64,
    pub helper_daily: f64,
    pub foreman_daily: f64,
    /// Site administration cost per day
    pub admin_daily: f64,
    pub transport_daily: f64,
    /// Helper hours per painter hour
    pub helper_ratio: f64,
    /// Foreman hours per painter hour
    pub foreman_ratio: f64,
}

impl Default for CrewRates {
    fn default() -> Self {
        CrewRates {
            painter_daily: 220.0,
            helper_daily: 160.0,
            foreman_daily: 350.0,
            admin_daily: 100.0,
            transport_daily: 80.0,
            helper_ratio: 0.30,
            foreman_ratio: 0.15,
        }
    }
}

/// Per-painter-hour cost contributions of each crew component.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct CrewHourlyRate {
    pub painter: f64,
    pub helper: f64,
    pub foreman: f64,
    pub admin: f64,
    pub transport: f64,
}

impl CrewHourlyRate {
    /// Blended hourly rate
    pub fn total(&self) -> f64 {
        self.painter + self.helper + self.foreman + self.admin + self.transport
    }
}

impl CrewRates {
    /// Split the crew cost into per-painter-hour components.
    ///
    /// All components are 0 when `working_hours` is not positive.
    pub fn hourly_components(&self, working_hours: f64) -> CrewHourlyRate {
        if !(working_hours.is_finite() && working_hours > 0.0) {
            return CrewHourlyRate::default();
        }
        let h = working_hours;
        CrewHourlyRate {
            painter: self.painter_daily / h,
            helper: self.helper_ratio * self.helper_daily / h,
            foreman: self.foreman_ratio * self.foreman_daily / h,
            admin: self.admin_daily / h,
            transport: self.transport_daily / h,
        }
    }

    fn validate(&self) -> CalcResult<()> {
        require_non_negative("painter_daily", self.painter_daily)?;
        require_non_negative("helper_daily", self.helper_daily)?;
        require_non_negative("foreman_daily", self.foreman_daily)?;
        require_non_negative("admin_daily", self.admin_daily)?;
        require_non_negative("transport_daily", self.transport_daily)?;
        require_non_negative("helper_ratio", self.helper_ratio)?;
        require_non_negative("foreman_ratio", self.foreman_ratio)
    }
}

/// Wage model.
///
/// ## JSON Serialization
///
/// ```json
/// { "type": "Simple", "daily_wage": 200.0 }
/// { "type": "CompositeCrew", "painter_daily": 220.0, "helper_daily": 160.0, ... }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum LaborRate {
    /// A single daily wage spread over the working day
    Simple { daily_wage: f64 },
    /// Painter plus helper, foreman, admin and transport overheads
    CompositeCrew(CrewRates),
}

impl Default for LaborRate {
    fn default() -> Self {
        LaborRate::CompositeCrew(CrewRates::default())
    }
}

impl LaborRate {
    /// Hourly rate for the given working day length; 0 if `working_hours` is not positive.
    pub fn hourly_rate(&self, working_hours: f64) -> f64 {
        match self {
            LaborRate::Simple { daily_wage } => {
                if working_hours.is_finite() && working_hours > 0.0 {
                    daily_wage / working_hours
                } else {
                    0.0
                }
            }
            LaborRate::CompositeCrew(crew) => crew.hourly_components(working_hours).total(),
        }
    }

    /// Short name of the wage model
    pub fn model_name(&self) -> &'static str {
        match self {
            LaborRate::Simple { .. } => "Simple",
            LaborRate::CompositeCrew(_) => "Composite crew",
        }
    }
}

/// Labor settings for an estimate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LaborConfig {
    pub rate: LaborRate,

    /// Working hours per day
    pub working_hours: f64,

    /// Surcharge on basic labor (%) for insurance, tools, etc.
    pub labor_burden_pct: f64,

    pub productivity_mode: ProductivityMode,
}

impl Default for LaborConfig {
    fn default() -> Self {
        LaborConfig {
            rate: LaborRate::default(),
            working_hours: 8.0,
            labor_burden_pct: 0.0,
            productivity_mode: ProductivityMode::Scientific,
        }
    }
}

impl LaborConfig {
    pub fn with_rate(mut self, rate: LaborRate) -> Self {
        self.rate = rate;
        self
    }

    pub fn with_working_hours(mut self, hours: f64) -> Self {
        self.working_hours = hours;
        self
    }

    pub fn with_burden(mut self, burden_pct: f64) -> Self {
        self.labor_burden_pct = burden_pct;
        self
    }

    pub fn with_mode(mut self, mode: ProductivityMode) -> Self {
        self.productivity_mode = mode;
        self
    }

    /// Cost of one labor hour under the configured wage model.
    pub fn hourly_rate(&self) -> f64 {
        if !(self.working_hours.is_finite() && self.working_hours > 0.0) {
            tracing::warn!(
                working_hours = self.working_hours,
                "working hours not positive, hourly rate is 0"
            );
            return 0.0;
        }
        self.rate.hourly_rate(self.working_hours)
    }

    /// Validate labor parameters.
    pub fn validate(&self) -> CalcResult<()> {
        require_positive("working_hours", self.working_hours)?;
        require_non_negative("labor_burden_pct", self.labor_burden_pct)?;
        match &self.rate {
            LaborRate::Simple { daily_wage } => require_non_negative("daily_wage", *daily_wage),
            LaborRate::CompositeCrew(crew) => crew.validate(),
        }
    }
}
