//! # paint_core - Painting Cost Estimation Engine
//!
//! `paint_core` prices painting work per square meter. It takes the crew's
//! wage model, the material pricing strategy, the surface and the ordered list
//! of work stages, and returns a cost breakdown, a suggested selling price and
//! a schedule. All inputs and outputs are JSON-serializable.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: The estimator is a pure function of its four config snapshots
//! - **JSON-First**: All types implement Serialize/Deserialize
//! - **Total**: Degenerate input yields zeros or `None`, never a panic or NaN
//! - **Rich Errors**: Optional up-front validation with structured errors
//!
//! ## Quick Start
//!
//! ```rust
//! use paint_core::project::EstimateInput;
//!
//! let input = EstimateInput::default();
//! let result = input.estimate();
//!
//! println!("{:.2} per m²", result.suggested_price_per_sqm);
//! let json = serde_json::to_string_pretty(&result).unwrap();
//! assert!(json.contains("total_project_cost"));
//! ```
//!
//! ## Modules
//!
//! - [`project`] - Stages, surface, environment, area and business settings
//! - [`calculations`] - Labor, productivity, materials and the estimator
//! - [`coatings`] - Coating physics, brand coverage and dew point check
//! - [`units`] - Type-safe unit wrappers
//! - [`errors`] - Structured error types

pub mod calculations;
pub mod coatings;
pub mod errors;
pub mod project;
pub mod units;

// Re-export commonly used types at crate root for convenience
pub use calculations::{estimate, CostResult, LaborConfig, MaterialConfig};
pub use errors::{CalcError, CalcResult};
pub use project::{BusinessConfig, EstimateInput, ProjectConfig, StageSpec};
