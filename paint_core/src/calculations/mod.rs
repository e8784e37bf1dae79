//! # Cost Calculations
//!
//! Everything the estimator needs to turn a project description into a price.
//! Each part is a set of JSON-serializable configuration types plus pure
//! functions over them:
//!
//! - [`labor`] - Wage models, working day, burden and productivity mode
//! - [`productivity`] - Scientific base rates and per-stage hours
//! - [`materials`] - Material pricing strategies and waste
//! - [`estimate`](mod@estimate) - The estimation pass and its results
//!
//! ## Quick Start
//!
//! ```rust
//! use paint_core::project::EstimateInput;
//!
//! let result = EstimateInput::default().estimate();
//! assert_eq!(result.stage_breakdown.len(), 6);
//! assert!(result.suggested_price_per_sqm > 0.0);
//! ```

pub mod estimate;
pub mod labor;
pub mod materials;
pub mod productivity;

// Re-export commonly used types
pub use estimate::{estimate, CostBreakdown, CostResult, StageResult};
pub use labor::{CrewHourlyRate, CrewRates, LaborConfig, LaborRate, ProductivityMode};
pub use materials::{MaterialConfig, MaterialPricing};
pub use productivity::{ProductivitySource, StageHours};
