//! # Material Pricing
//!
//! Material cost per m² for a whole stage list:
//!
//! ```text
//! cost = price_per_coat × (1 + waste%/100) × Σ coats of enabled stages
//! ```
//!
//! `price_per_coat` comes from one of three strategies, each carrying only the
//! fields it needs:
//!
//! - **Engineering** - volume solids, DFT, application method and gallon price
//!   through the coating physics chain
//! - **GallonCalculator** - gallon price over gallon coverage
//! - **Direct** - an operator-entered price per m²

use serde::{Deserialize, Serialize};

use crate::coatings::brands::topcoat_coverage_for;
use crate::coatings::physics::{price_from_engineering, price_from_gallon};
use crate::coatings::ApplicationMethod;
use crate::errors::{require_non_negative, CalcResult};

/// Strategy for deriving the price of one coat per m².
///
/// ## JSON Serialization
///
/// ```json
/// { "mode": "Engineering", "volume_solids": 0.4, "dft_microns": 35.0,
///   "application_method": "roller", "gallon_price": 70.0 }
/// { "mode": "GallonCalculator", "gallon_price": 64.0, "coverage_per_gallon": 16.0 }
/// { "mode": "Direct", "price_per_sqm": 3.5 }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode")]
pub enum MaterialPricing {
    Engineering {
        /// Volume solids fraction (0-1)
        volume_solids: f64,
        /// Dry film thickness (µm)
        dft_microns: f64,
        #[serde(default)]
        application_method: ApplicationMethod,
        gallon_price: f64,
    },
    GallonCalculator {
        gallon_price: f64,
        /// m² covered by one gallon
        coverage_per_gallon: f64,
    },
    Direct { price_per_sqm: f64 },
}

impl Default for MaterialPricing {
    fn default() -> Self {
        MaterialPricing::Engineering {
            volume_solids: 0.4,
            dft_microns: 35.0,
            application_method: ApplicationMethod::Roller,
            gallon_price: 70.0,
        }
    }
}

impl MaterialPricing {
    /// Gallon calculator prefilled with a brand's topcoat coverage.
    ///
    /// Brands outside the catalogue get
    /// [`DEFAULT_TOPCOAT_COVERAGE`](crate::coatings::brands::DEFAULT_TOPCOAT_COVERAGE).
    pub fn gallon_for_brand(brand_name: &str, gallon_price: f64) -> Self {
        MaterialPricing::GallonCalculator {
            gallon_price,
            coverage_per_gallon: topcoat_coverage_for(brand_name),
        }
    }

    /// Price of one coat per m². Invalid inputs yield 0.
    pub fn price_per_sqm_per_coat(&self) -> f64 {
        match *self {
            MaterialPricing::Engineering {
                volume_solids,
                dft_microns,
                application_method,
                gallon_price,
            } => price_from_engineering(
                volume_solids,
                dft_microns,
                application_method,
                gallon_price,
            ),
            MaterialPricing::GallonCalculator {
                gallon_price,
                coverage_per_gallon,
            } => price_from_gallon(gallon_price, coverage_per_gallon),
            MaterialPricing::Direct { price_per_sqm } => {
                if price_per_sqm.is_finite() {
                    price_per_sqm
                } else {
                    0.0
                }
            }
        }
    }

    /// Short name of the strategy
    pub fn mode_name(&self) -> &'static str {
        match self {
            MaterialPricing::Engineering { .. } => "Engineering",
            MaterialPricing::GallonCalculator { .. } => "Gallon calculator",
            MaterialPricing::Direct { .. } => "Direct",
        }
    }
}

/// Material settings for an estimate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MaterialConfig {
    /// Master switch; when off, material cost is 0
    pub include_materials: bool,

    /// Waste allowance (%)
    pub waste_pct: f64,

    pub pricing: MaterialPricing,
}

impl Default for MaterialConfig {
    fn default() -> Self {
        MaterialConfig {
            include_materials: true,
            waste_pct: 0.0,
            pricing: MaterialPricing::default(),
        }
    }
}

impl MaterialConfig {
    /// Materials supplied by the client
    pub fn excluded() -> Self {
        MaterialConfig {
            include_materials: false,
            ..MaterialConfig::default()
        }
    }

    pub fn with_pricing(mut self, pricing: MaterialPricing) -> Self {
        self.pricing = pricing;
        self
    }

    pub fn with_waste(mut self, waste_pct: f64) -> Self {
        self.waste_pct = waste_pct;
        self
    }

    /// Multiplier for the waste allowance
    pub fn waste_factor(&self) -> f64 {
        1.0 + self.waste_pct / 100.0
    }

    /// Price of one coat per m²; 0 when materials are excluded.
    pub fn price_per_coat(&self) -> f64 {
        if !self.include_materials {
            return 0.0;
        }
        self.pricing.price_per_sqm_per_coat()
    }

    /// Material cost per m² at a known per-coat price, with waste.
    pub fn cost_at(&self, price_per_coat: f64, total_coats: u64) -> f64 {
        if !self.include_materials {
            return 0.0;
        }
        // u64 -> f64 loses precision only past 2^53 coats
        price_per_coat * self.waste_factor() * total_coats as f64
    }

    /// Material cost per m² for the given total number of coats.
    pub fn cost_per_sqm(&self, total_coats: u64) -> f64 {
        self.cost_at(self.price_per_coat(), total_coats)
    }

    /// Validate material parameters.
    pub fn validate(&self) -> CalcResult<()> {
        require_non_negative("waste_pct", self.waste_pct)?;
        match self.pricing {
            MaterialPricing::Engineering {
                volume_solids,
                dft_microns,
                gallon_price,
                ..
            } => {
                require_non_negative("volume_solids", volume_solids)?;
                require_non_negative("dft_microns", dft_microns)?;
                require_non_negative("gallon_price", gallon_price)
            }
            MaterialPricing::GallonCalculator {
                gallon_price,
                coverage_per_gallon,
            } => {
                require_non_negative("gallon_price", gallon_price)?;
                require_non_negative("coverage_per_gallon", coverage_per_gallon)
            }
            MaterialPricing::Direct { price_per_sqm } => {
                require_non_negative("price_per_sqm", price_per_sqm)
            }
        }
    }
}
