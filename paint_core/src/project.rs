//! # Project Data Structures
//!
//! Immutable configuration snapshots handed to the estimation engine.
//!
//! ## Structure
//!
//! ```text
//! EstimateInput
//! ├── labor: LaborConfig       (wage model, burden, productivity mode)
//! ├── material: MaterialConfig (pricing strategy, waste, on/off)
//! ├── project: ProjectConfig   (surface, environment, area, stages)
//! └── business: BusinessConfig (overhead, profit)
//! ```
//!
//! The presentation layer owns a mutable copy of these, and on every change
//! builds a fresh snapshot and calls [`estimate`](crate::calculations::estimate).
//! Nothing here is persisted.
//!
//! ## Example
//!
//! ```rust
//! use paint_core::project::{EstimateInput, StageKind, StageSpec, SurfaceType};
//!
//! let mut input = EstimateInput::default();
//! input.project.surface_type = SurfaceType::Ceilings;
//! input.project.stages.push(StageSpec::new(StageKind::Sealer).with_coats(2));
//!
//! let json = serde_json::to_string_pretty(&input).unwrap();
//! let parsed = EstimateInput::from_json(&json).unwrap();
//! assert_eq!(parsed.project.stages.len(), 7);
//! ```

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::calculations::{estimate, CostResult, LaborConfig, MaterialConfig};
use crate::errors::{require_non_negative, require_positive, CalcError, CalcResult};

// ============================================================================
// Stage Kinds
// ============================================================================

/// One step of the painting process.
///
/// Unknown names deserialize to [`StageKind::Custom`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case", from = "String")]
pub enum StageKind {
    /// Surface preparation
    Sanding,
    /// First sealing coat over fresh plaster
    Sealer,
    /// Base/primer coat
    Primer,
    /// First skim coat (leveling)
    Skimcoat1,
    /// Second skim coat
    Skimcoat2,
    Basecoat,
    /// Finish coat
    Topcoat,
    /// Touch-up and inspection
    Finishing,
    /// Operator-defined stage
    #[default]
    Custom,
}

impl StageKind {
    /// All stage kinds, in typical process order
    pub const ALL: [StageKind; 9] = [
        StageKind::Sanding,
        StageKind::Sealer,
        StageKind::Primer,
        StageKind::Skimcoat1,
        StageKind::Skimcoat2,
        StageKind::Basecoat,
        StageKind::Topcoat,
        StageKind::Finishing,
        StageKind::Custom,
    ];

    /// Code used in JSON
    pub fn code(&self) -> &'static str {
        match self {
            StageKind::Sanding => "sanding",
            StageKind::Sealer => "sealer",
            StageKind::Primer => "primer",
            StageKind::Skimcoat1 => "skimcoat1",
            StageKind::Skimcoat2 => "skimcoat2",
            StageKind::Basecoat => "basecoat",
            StageKind::Topcoat => "topcoat",
            StageKind::Finishing => "finishing",
            StageKind::Custom => "custom",
        }
    }

    /// Label a new stage of this kind starts with
    pub fn default_label(&self) -> &'static str {
        match self {
            StageKind::Sanding => "Sanding (surface preparation)",
            StageKind::Sealer => "Sealer",
            StageKind::Primer => "Primer (base coat)",
            StageKind::Skimcoat1 => "Skim coat 1 (first leveling)",
            StageKind::Skimcoat2 => "Skim coat 2 (second leveling)",
            StageKind::Basecoat => "Base coat",
            StageKind::Topcoat => "Topcoat (main finish)",
            StageKind::Finishing => "Finishing (final touch)",
            StageKind::Custom => "New stage",
        }
    }

    /// Parse from common string representations
    pub fn from_str_flexible(s: &str) -> CalcResult<Self> {
        let normalized = s.trim().to_lowercase().replace([' ', '_', '-'], "");
        StageKind::ALL
            .into_iter()
            .find(|kind| kind.code() == normalized)
            .ok_or_else(|| CalcError::unknown_value("stage", s))
    }

    /// Parse, falling back to [`StageKind::Custom`] for unknown input
    pub fn parse_or_default(s: &str) -> Self {
        Self::from_str_flexible(s).unwrap_or_else(|_| {
            tracing::warn!(value = s, "unknown stage name, treating as custom");
            Self::default()
        })
    }
}

impl FromStr for StageKind {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_str_flexible(s)
    }
}

impl From<String> for StageKind {
    fn from(s: String) -> Self {
        Self::parse_or_default(&s)
    }
}

impl std::fmt::Display for StageKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

// ============================================================================
// Surface and Environment
// ============================================================================

/// Substrate being painted. Unknown values deserialize to walls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case", from = "String")]
pub enum SurfaceType {
    #[default]
    Walls,
    /// Overhead work
    Ceilings,
    Timber,
    Metal,
    Textured,
}

impl SurfaceType {
    pub const ALL: [SurfaceType; 5] = [
        SurfaceType::Walls,
        SurfaceType::Ceilings,
        SurfaceType::Timber,
        SurfaceType::Metal,
        SurfaceType::Textured,
    ];

    /// Time multiplier relative to plain walls
    pub fn time_factor(&self) -> f64 {
        match self {
            SurfaceType::Walls => 1.0,
            SurfaceType::Ceilings => 1.25,
            SurfaceType::Timber => 1.20,
            SurfaceType::Metal => 1.30,
            SurfaceType::Textured => 1.45,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            SurfaceType::Walls => "walls",
            SurfaceType::Ceilings => "ceilings",
            SurfaceType::Timber => "timber",
            SurfaceType::Metal => "metal",
            SurfaceType::Textured => "textured",
        }
    }

    /// Parse from common string representations
    pub fn from_str_flexible(s: &str) -> CalcResult<Self> {
        match s.trim().to_lowercase().as_str() {
            "walls" | "wall" => Ok(SurfaceType::Walls),
            "ceilings" | "ceiling" => Ok(SurfaceType::Ceilings),
            "timber" | "wood" => Ok(SurfaceType::Timber),
            "metal" | "steel" => Ok(SurfaceType::Metal),
            "textured" => Ok(SurfaceType::Textured),
            _ => Err(CalcError::unknown_value("surface type", s)),
        }
    }

    /// Parse, falling back to [`SurfaceType::Walls`] for unknown input
    pub fn parse_or_default(s: &str) -> Self {
        Self::from_str_flexible(s).unwrap_or_else(|_| {
            tracing::warn!(value = s, "unknown surface type, using walls");
            Self::default()
        })
    }
}

impl FromStr for SurfaceType {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_str_flexible(s)
    }
}

impl From<String> for SurfaceType {
    fn from(s: String) -> Self {
        Self::parse_or_default(&s)
    }
}

impl std::fmt::Display for SurfaceType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Where the work takes place. Unknown values deserialize to interior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case", from = "String")]
pub enum WorkEnvironment {
    #[default]
    Interior,
    /// Heat, sun and wind exposure
    Exterior,
    /// Exterior work at height (scaffolds, safety gear)
    ExteriorHeight,
}

impl WorkEnvironment {
    pub const ALL: [WorkEnvironment; 3] = [
        WorkEnvironment::Interior,
        WorkEnvironment::Exterior,
        WorkEnvironment::ExteriorHeight,
    ];

    /// Time multiplier relative to interior work
    pub fn time_factor(&self) -> f64 {
        match self {
            WorkEnvironment::Interior => 1.0,
            WorkEnvironment::Exterior => 1.35,
            WorkEnvironment::ExteriorHeight => 1.60,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            WorkEnvironment::Interior => "interior",
            WorkEnvironment::Exterior => "exterior",
            WorkEnvironment::ExteriorHeight => "exterior_height",
        }
    }

    /// Parse from common string representations
    pub fn from_str_flexible(s: &str) -> CalcResult<Self> {
        match s.trim().to_lowercase().replace([' ', '-'], "_").as_str() {
            "interior" | "indoor" => Ok(WorkEnvironment::Interior),
            "exterior" | "outdoor" => Ok(WorkEnvironment::Exterior),
            "exterior_height" | "height" => Ok(WorkEnvironment::ExteriorHeight),
            _ => Err(CalcError::unknown_value("work environment", s)),
        }
    }

    /// Parse, falling back to [`WorkEnvironment::Interior`] for unknown input
    pub fn parse_or_default(s: &str) -> Self {
        Self::from_str_flexible(s).unwrap_or_else(|_| {
            tracing::warn!(value = s, "unknown work environment, using interior");
            Self::default()
        })
    }
}

impl FromStr for WorkEnvironment {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_str_flexible(s)
    }
}

impl From<String> for WorkEnvironment {
    fn from(s: String) -> Self {
        Self::parse_or_default(&s)
    }
}

impl std::fmt::Display for WorkEnvironment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

// ============================================================================
// Stages
// ============================================================================

/// One stage of the painting process as configured by the operator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StageSpec {
    /// Stage kind; selects the scientific base rate
    pub name: StageKind,

    /// Display label (e.g. "Primer (base coat)")
    pub label: String,

    /// Disabled stages are left out of every total
    pub enabled: bool,

    /// Number of applications
    pub coats: u32,

    /// Observed productivity override (m² per hour), used in hourly mode
    pub custom_productivity_hour: Option<f64>,

    /// Observed productivity override (m² per working day), used in daily mode
    pub custom_productivity_day: Option<f64>,
}

impl Default for StageSpec {
    fn default() -> Self {
        StageSpec::new(StageKind::Custom)
    }
}

impl StageSpec {
    /// Enabled, single-coat stage with the kind's default label.
    pub fn new(name: StageKind) -> Self {
        StageSpec {
            name,
            label: name.default_label().to_string(),
            enabled: true,
            coats: 1,
            custom_productivity_hour: None,
            custom_productivity_day: None,
        }
    }

    pub fn with_coats(mut self, coats: u32) -> Self {
        self.coats = coats;
        self
    }

    pub fn with_hourly_productivity(mut self, sqm_per_hour: f64) -> Self {
        self.custom_productivity_hour = Some(sqm_per_hour);
        self
    }

    pub fn with_daily_productivity(mut self, sqm_per_day: f64) -> Self {
        self.custom_productivity_day = Some(sqm_per_day);
        self
    }

    pub fn disabled(mut self) -> Self {
        self.enabled = false;
        self
    }

    /// Hourly override, if set to a usable (positive, finite) value
    pub fn hourly_override(&self) -> Option<f64> {
        self.custom_productivity_hour
            .filter(|rate| rate.is_finite() && *rate > 0.0)
    }

    /// Daily override, if set to a usable (positive, finite) value
    pub fn daily_override(&self) -> Option<f64> {
        self.custom_productivity_day
            .filter(|rate| rate.is_finite() && *rate > 0.0)
    }

    /// Validate stage parameters.
    pub fn validate(&self) -> CalcResult<()> {
        if self.enabled && self.coats == 0 {
            return Err(CalcError::invalid_input(
                format!("stages[{}].coats", self.name),
                "0",
                "An enabled stage needs at least one coat",
            ));
        }
        Ok(())
    }
}

// ============================================================================
// Project and Business Settings
// ============================================================================

/// The job being priced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectConfig {
    pub surface_type: SurfaceType,
    pub work_environment: WorkEnvironment,

    /// Area to paint (m²)
    pub area: f64,

    /// Ordered stage list; order only matters for display
    pub stages: Vec<StageSpec>,
}

impl Default for ProjectConfig {
    fn default() -> Self {
        ProjectConfig {
            surface_type: SurfaceType::Walls,
            work_environment: WorkEnvironment::Interior,
            area: 100.0,
            stages: Self::default_stages(),
        }
    }
}

impl ProjectConfig {
    /// The standard interior repaint sequence.
    pub fn default_stages() -> Vec<StageSpec> {
        [
            StageKind::Primer,
            StageKind::Skimcoat1,
            StageKind::Skimcoat2,
            StageKind::Sanding,
            StageKind::Topcoat,
            StageKind::Finishing,
        ]
        .into_iter()
        .map(StageSpec::new)
        .collect()
    }

    /// Project with no stages, for building a stage list from scratch.
    pub fn new(surface_type: SurfaceType, work_environment: WorkEnvironment, area: f64) -> Self {
        ProjectConfig {
            surface_type,
            work_environment,
            area,
            stages: Vec::new(),
        }
    }

    pub fn with_stage(mut self, stage: StageSpec) -> Self {
        self.stages.push(stage);
        self
    }

    /// Stages that count towards totals, in display order
    pub fn enabled_stages(&self) -> impl Iterator<Item = &StageSpec> {
        self.stages.iter().filter(|stage| stage.enabled)
    }

    /// Sum of coats over enabled stages (not deduplicated by kind)
    pub fn total_coats(&self) -> u64 {
        self.enabled_stages().map(|stage| u64::from(stage.coats)).sum()
    }

    /// Validate project parameters.
    pub fn validate(&self) -> CalcResult<()> {
        require_positive("area", self.area)?;
        if self.enabled_stages().next().is_none() {
            return Err(CalcError::invalid_input(
                "stages",
                format!("{} stages, none enabled", self.stages.len()),
                "At least one stage must be enabled",
            ));
        }
        for stage in &self.stages {
            stage.validate()?;
        }
        Ok(())
    }
}

/// Business markup, applied in sequence (overhead first, then profit on top).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BusinessConfig {
    /// Overhead (%)
    pub overhead_pct: f64,
    /// Profit margin (%), applied to cost plus overhead
    pub profit_margin_pct: f64,
}

impl BusinessConfig {
    pub fn new(overhead_pct: f64, profit_margin_pct: f64) -> Self {
        BusinessConfig {
            overhead_pct,
            profit_margin_pct,
        }
    }

    /// Validate business parameters.
    pub fn validate(&self) -> CalcResult<()> {
        require_non_negative("overhead_pct", self.overhead_pct)?;
        require_non_negative("profit_margin_pct", self.profit_margin_pct)
    }
}

// ============================================================================
// Estimate Input Bundle
// ============================================================================

/// Everything one estimation pass needs, as a single serializable snapshot.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EstimateInput {
    pub labor: LaborConfig,
    pub material: MaterialConfig,
    pub project: ProjectConfig,
    pub business: BusinessConfig,
}

impl EstimateInput {
    /// Decode from JSON. Missing sections and fields take their defaults.
    pub fn from_json(json: &str) -> CalcResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Encode as pretty-printed JSON.
    pub fn to_json_pretty(&self) -> CalcResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Strict pre-check for callers that want to reject degenerate input
    /// (no enabled stages, zero working hours, negative percentages, ...)
    /// instead of receiving a not-applicable schedule.
    pub fn validate(&self) -> CalcResult<()> {
        self.labor.validate()?;
        self.material.validate()?;
        self.project.validate()?;
        self.business.validate()
    }

    /// Run the estimation engine over this snapshot.
    pub fn estimate(&self) -> CostResult {
        estimate(&self.labor, &self.material, &self.project, &self.business)
    }
}
