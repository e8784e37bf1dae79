//! Coating consumption physics.
//!
//! Spread rate, film thickness and per-area material price formulas. Every
//! function here is total: a non-finite or out-of-domain input yields 0
//! instead of NaN or infinity, so a half-filled form never poisons a cost
//! figure downstream.
//!
//! ```text
//! TSR  = (VS × 10) / DFT            m²/L, VS as a fraction, DFT in µm
//! PSR  = TSR × loss factor          m²/L after application losses
//! L/m² = 1 / PSR                    per coat
//! WFT  = DFT / VS                   µm
//! ```

use crate::coatings::ApplicationMethod;
use crate::units::price_per_liter;

/// Converts a volume-solids fraction over a micron thickness into m² per liter.
const SPREAD_RATE_CONSTANT: f64 = 10.0;

/// Loss factor used when the supplied one is not in (0, 1]
pub const DEFAULT_LOSS_FACTOR: f64 = 0.85;

fn positive(x: f64) -> bool {
    x.is_finite() && x > 0.0
}

/// Theoretical spread rate (m²/L) with no application losses.
///
/// Returns 0 unless both inputs are finite and positive.
///
/// ```rust
/// use paint_core::coatings::physics::theoretical_spread_rate;
///
/// let tsr = theoretical_spread_rate(0.4, 35.0);
/// assert!((tsr - 0.4 * 10.0 / 35.0).abs() < 1e-12);
/// assert_eq!(theoretical_spread_rate(0.0, 35.0), 0.0);
/// ```
pub fn theoretical_spread_rate(volume_solids: f64, dft_microns: f64) -> f64 {
    if !positive(volume_solids) || !positive(dft_microns) {
        return 0.0;
    }
    (volume_solids * SPREAD_RATE_CONSTANT) / dft_microns
}

/// The loss factor actually applied: the supplied one if finite and in (0, 1],
/// otherwise [`DEFAULT_LOSS_FACTOR`].
pub fn effective_loss_factor(loss_factor: f64) -> f64 {
    if positive(loss_factor) && loss_factor <= 1.0 {
        loss_factor
    } else {
        DEFAULT_LOSS_FACTOR
    }
}

/// Practical spread rate (m²/L) after application losses.
pub fn practical_spread_rate(theoretical_rate: f64, loss_factor: f64) -> f64 {
    if !positive(theoretical_rate) {
        return 0.0;
    }
    theoretical_rate * effective_loss_factor(loss_factor)
}

/// Liters needed per square meter for a single coat.
pub fn liters_per_sqm_per_coat(practical_rate: f64) -> f64 {
    if !positive(practical_rate) {
        return 0.0;
    }
    1.0 / practical_rate
}

/// Wet film thickness (µm) to apply to reach the given dry film thickness.
pub fn wet_film_thickness_from_dry(dft_microns: f64, volume_solids: f64) -> f64 {
    if !positive(dft_microns) || !positive(volume_solids) {
        return 0.0;
    }
    dft_microns / volume_solids
}

/// Material cost per m² from a gallon price and the coverage of one gallon.
///
/// Returns 0 if coverage is not positive or either input is non-finite.
pub fn material_cost_per_area(gallon_price: f64, coverage_per_gallon: f64) -> f64 {
    if !gallon_price.is_finite() || !positive(coverage_per_gallon) {
        return 0.0;
    }
    gallon_price / coverage_per_gallon
}

/// Price per m² per coat derived from the coating's engineering data.
///
/// Chains TSR, PSR (with the method's loss factor) and liters per m², then
/// prices those liters at `gallon_price / 3.785`.
///
/// ```rust
/// use paint_core::coatings::ApplicationMethod;
/// use paint_core::coatings::physics::price_from_engineering;
///
/// let price = price_from_engineering(0.4, 35.0, ApplicationMethod::Roller, 70.0);
/// assert!((price - 190.4).abs() < 0.1);
/// ```
pub fn price_from_engineering(
    volume_solids: f64,
    dft_microns: f64,
    method: ApplicationMethod,
    gallon_price: f64,
) -> f64 {
    let tsr = theoretical_spread_rate(volume_solids, dft_microns);
    let psr = practical_spread_rate(tsr, method.loss_factor());
    liters_per_sqm_per_coat(psr) * price_per_liter(gallon_price)
}

/// Price per m² from a gallon price and gallon coverage.
pub fn price_from_gallon(gallon_price: f64, coverage_per_gallon: f64) -> f64 {
    material_cost_per_area(gallon_price, coverage_per_gallon)
}
