//! # Unit Types
//!
//! Lightweight newtype wrappers for the coating units that cross module
//! boundaries. Serialization stays clean (just numbers) via `#[serde(transparent)]`.
//!
//! Paintwise works in metric area units (square meters) with paint sold by
//! the US gallon, so the one conversion that matters is gallons to liters.
//!
//! ## Example
//!
//! ```rust
//! use paint_core::units::{Gallons, Liters};
//!
//! let can = Gallons(1.0);
//! let liters: Liters = can.into();
//! assert!((liters.0 - 3.785).abs() < 1e-12);
//! ```

use serde::{Deserialize, Serialize};

/// Liters in one US gallon, as used on paint price lists
pub const LITERS_PER_GALLON: f64 = 3.785;

/// Volume in US gallons
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Gallons(pub f64);

/// Volume in liters
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Liters(pub f64);

impl From<Gallons> for Liters {
    fn from(gal: Gallons) -> Self {
        Liters(gal.0 * LITERS_PER_GALLON)
    }
}

impl From<Liters> for Gallons {
    fn from(l: Liters) -> Self {
        Gallons(l.0 / LITERS_PER_GALLON)
    }
}

/// Film thickness in microns (µm)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Microns(pub f64);

impl std::fmt::Display for Microns {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.0} µm", self.0)
    }
}

/// Convert a per-gallon price into a per-liter price.
///
/// Returns 0 for a non-finite price.
pub fn price_per_liter(gallon_price: f64) -> f64 {
    if !gallon_price.is_finite() {
        return 0.0;
    }
    gallon_price / Liters::from(Gallons(1.0)).0
}
