//! Dew point and condensation safety.
//!
//! Uses the Magnus approximation:
//!
//! ```text
//! γ  = (a·T)/(b + T) + ln(RH/100)
//! Td = (b·γ)/(a − γ)          a = 17.62, b = 243.12 °C
//! ```
//!
//! Coating work is considered safe when the surface sits at least 3 °C above
//! the dew point.

use serde::{Deserialize, Serialize};

const MAGNUS_A: f64 = 17.62;
const MAGNUS_B: f64 = 243.12;

/// Minimum surface temperature margin above dew point (°C)
pub const SAFETY_MARGIN_C: f64 = 3.0;

/// Dew point (°C) for an air temperature and relative humidity (%).
///
/// Returns NaN if RH is outside (0, 100] or either input is non-finite.
///
/// ```rust
/// use paint_core::coatings::dew_point::dew_point_celsius;
///
/// let dp = dew_point_celsius(30.0, 55.0);
/// assert!((dp - 19.97).abs() < 0.05);
/// assert!(dew_point_celsius(30.0, 0.0).is_nan());
/// ```
pub fn dew_point_celsius(temp_c: f64, relative_humidity_pct: f64) -> f64 {
    if !temp_c.is_finite()
        || !relative_humidity_pct.is_finite()
        || relative_humidity_pct <= 0.0
        || relative_humidity_pct > 100.0
    {
        return f64::NAN;
    }
    let gamma = (MAGNUS_A * temp_c) / (MAGNUS_B + temp_c) + (relative_humidity_pct / 100.0).ln();
    (MAGNUS_B * gamma) / (MAGNUS_A - gamma)
}

/// Outcome of a condensation safety check.
///
/// `dew_point_c` and `margin_c` are NaN when the inputs were out of domain;
/// `safe` is then always false.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct DewPointCheck {
    /// True when the surface is at least [`SAFETY_MARGIN_C`] above dew point
    pub safe: bool,
    /// Dew point (°C)
    pub dew_point_c: f64,
    /// Surface temperature minus dew point (°C)
    pub margin_c: f64,
}

/// Check a surface temperature against the dew point of the surrounding air.
pub fn dew_point_safety(surface_temp_c: f64, relative_humidity_pct: f64) -> DewPointCheck {
    let dew_point_c = dew_point_celsius(surface_temp_c, relative_humidity_pct);
    if !dew_point_c.is_finite() {
        return DewPointCheck {
            safe: false,
            dew_point_c: f64::NAN,
            margin_c: f64::NAN,
        };
    }
    let margin_c = surface_temp_c - dew_point_c;
    DewPointCheck {
        safe: margin_c >= SAFETY_MARGIN_C,
        dew_point_c,
        margin_c,
    }
}
