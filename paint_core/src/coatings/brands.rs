//! Paint brand coverage catalogue.
//!
//! Typical coverage per gallon (m²) quoted by the common Gulf-market brands,
//! used to prefill the gallon calculator.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

/// Coverage used when a brand is not in the catalogue (m²/gal)
pub const DEFAULT_TOPCOAT_COVERAGE: f64 = 16.0;

/// Paint manufacturers with catalogued coverage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum PaintBrand {
    #[default]
    Jotun,
    Dulux,
    Nippon,
    Asian,
    Berger,
}

/// Product line within a brand
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaintProduct {
    Primer,
    Topcoat,
    Gloss,
}

/// Coverage per gallon (m²) for each product line of a brand
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BrandCoverage {
    pub primer: f64,
    pub topcoat: f64,
    pub gloss: f64,
}

impl BrandCoverage {
    /// Coverage for one product line
    pub fn for_product(&self, product: PaintProduct) -> f64 {
        match product {
            PaintProduct::Primer => self.primer,
            PaintProduct::Topcoat => self.topcoat,
            PaintProduct::Gloss => self.gloss,
        }
    }
}

impl PaintBrand {
    /// All brands for UI selection
    pub const ALL: [PaintBrand; 5] = [
        PaintBrand::Jotun,
        PaintBrand::Dulux,
        PaintBrand::Nippon,
        PaintBrand::Asian,
        PaintBrand::Berger,
    ];

    /// Catalogue coverage for this brand
    pub fn coverage(&self) -> BrandCoverage {
        let (primer, topcoat, gloss) = match self {
            PaintBrand::Jotun => (12.0, 16.0, 14.0),
            PaintBrand::Dulux => (11.0, 15.0, 13.0),
            PaintBrand::Nippon => (13.0, 17.0, 15.0),
            PaintBrand::Asian => (10.0, 14.0, 12.0),
            PaintBrand::Berger => (11.0, 15.0, 13.0),
        };
        BrandCoverage { primer, topcoat, gloss }
    }

    /// Coverage per gallon (m²) for a product line of this brand
    pub fn coverage_per_gallon(&self, product: PaintProduct) -> f64 {
        self.coverage().for_product(product)
    }

    /// Display name
    pub fn display_name(&self) -> &'static str {
        match self {
            PaintBrand::Jotun => "Jotun",
            PaintBrand::Dulux => "Dulux",
            PaintBrand::Nippon => "Nippon",
            PaintBrand::Asian => "Asian Paints",
            PaintBrand::Berger => "Berger",
        }
    }

    /// Parse from common string representations
    pub fn from_str_flexible(s: &str) -> CalcResult<Self> {
        match s.trim().to_lowercase().as_str() {
            "jotun" => Ok(PaintBrand::Jotun),
            "dulux" => Ok(PaintBrand::Dulux),
            "nippon" => Ok(PaintBrand::Nippon),
            "asian" | "asian paints" | "asian_paints" => Ok(PaintBrand::Asian),
            "berger" => Ok(PaintBrand::Berger),
            _ => Err(CalcError::unknown_value("paint brand", s)),
        }
    }
}

impl FromStr for PaintBrand {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_str_flexible(s)
    }
}

impl std::fmt::Display for PaintBrand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Topcoat coverage for a brand given by name, falling back to
/// [`DEFAULT_TOPCOAT_COVERAGE`] for brands outside the catalogue.
pub fn topcoat_coverage_for(brand_name: &str) -> f64 {
    match PaintBrand::from_str_flexible(brand_name) {
        Ok(brand) => brand.coverage_per_gallon(PaintProduct::Topcoat),
        Err(_) => {
            tracing::warn!(brand = brand_name, "unknown paint brand, using default coverage");
            DEFAULT_TOPCOAT_COVERAGE
        }
    }
}
