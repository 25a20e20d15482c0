//! Catalog Record Types
//!
//! Crop, district and government-scheme records plus the categorical tags
//! they are described with. Records borrow `'static` data so the embedded
//! tables can be declared as plain `static` slices.

use serde::Serialize;
use std::fmt;
use std::str::FromStr;

use crate::error::CatalogError;

// ============================================================================
// Categorical Tags
// ============================================================================

/// Implements the string form of a tag enum: `ALL`, `as_str`, `Display`
/// and an exact, case-sensitive `FromStr`.
macro_rules! tag_enum {
    ($ty:ident, $kind:literal, [$($variant:ident => $text:literal),+ $(,)?]) => {
        impl $ty {
            pub const ALL: &'static [$ty] = &[$($ty::$variant),+];

            pub fn as_str(&self) -> &'static str {
                match self {
                    $($ty::$variant => $text),+
                }
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $ty {
            type Err = CatalogError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($text => Ok($ty::$variant),)+
                    _ => Err(CatalogError::unknown_tag($kind, s)),
                }
            }
        }
    };
}

/// Soil types offered by the input wizard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SoilType {
    /// Black cotton soil (regur), clay-rich and moisture retentive
    Black,
    Red,
    /// River-deposited loams
    Alluvial,
    Laterite,
    Sandy,
    Clay,
}

tag_enum!(SoilType, "soil", [
    Black => "black",
    Red => "red",
    Alluvial => "alluvial",
    Laterite => "laterite",
    Sandy => "sandy",
    Clay => "clay",
]);

/// Indian cropping seasons
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Season {
    /// Monsoon sowing (June-October)
    Kharif,
    /// Winter sowing (October-March)
    Rabi,
    /// Short summer season between rabi and kharif
    Zaid,
}

tag_enum!(Season, "season", [
    Kharif => "kharif",
    Rabi => "rabi",
    Zaid => "zaid",
]);

/// How much water a crop needs over its season
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum WaterRequirement {
    Low,
    Medium,
    /// Only viable with assured irrigation
    High,
}

tag_enum!(WaterRequirement, "water requirement", [
    Low => "low",
    Medium => "medium",
    High => "high",
]);

/// Direction of the market price relative to its average
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PriceTrend {
    Increasing,
    Stable,
    Decreasing,
}

tag_enum!(PriceTrend, "price trend", [
    Increasing => "increasing",
    Stable => "stable",
    Decreasing => "decreasing",
]);

/// Display languages carried by every localized field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    /// Marathi
    Mr,
}

tag_enum!(Language, "language", [
    En => "en",
    Mr => "mr",
]);

// ============================================================================
// Localized Text
// ============================================================================

/// Pre-translated text pair. Both languages are always present.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Localized {
    pub en: &'static str,
    pub mr: &'static str,
}

impl Localized {
    pub const fn new(en: &'static str, mr: &'static str) -> Self {
        Self { en, mr }
    }

    pub fn get(&self, lang: Language) -> &'static str {
        match lang {
            Language::En => self.en,
            Language::Mr => self.mr,
        }
    }

    /// True when either language is blank
    pub fn has_blank(&self) -> bool {
        self.en.trim().is_empty() || self.mr.trim().is_empty()
    }
}

// ============================================================================
// Records
// ============================================================================

/// Output range in quintals per acre
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct YieldRange {
    pub min: f64,
    pub max: f64,
}

/// Per-acre input costs in whole rupees
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CropCosts {
    pub seed: u32,
    pub fertilizer: u32,
    pub pesticide: u32,
    pub irrigation: u32,
    pub labor: u32,
}

impl CropCosts {
    pub fn total(&self) -> u64 {
        [self.seed, self.fertilizer, self.pesticide, self.irrigation, self.labor]
            .iter()
            .map(|&c| u64::from(c))
            .sum()
    }

    /// Cost lines in display order, keyed by a stable label id
    pub fn items(&self) -> [(&'static str, u32); 5] {
        [
            ("seed", self.seed),
            ("fertilizer", self.fertilizer),
            ("pesticide", self.pesticide),
            ("irrigation", self.irrigation),
            ("labor", self.labor),
        ]
    }
}

/// Market price per quintal at the nearest mandi (regulated market yard)
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MarketPrice {
    pub current: f64,
    pub average: f64,
    pub trend: PriceTrend,
    pub mandi: Localized,
}

/// A crop that can be recommended
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Crop {
    pub id: &'static str,
    pub name: Localized,
    pub emoji: &'static str,
    pub suitable_soils: &'static [SoilType],
    pub seasons: &'static [Season],
    pub water_requirement: WaterRequirement,
    pub yield_per_acre: YieldRange,
    pub costs: CropCosts,
    pub market_price: MarketPrice,
    pub description: Localized,
}

impl Crop {
    pub fn grows_in(&self, soil: SoilType) -> bool {
        self.suitable_soils.contains(&soil)
    }

    pub fn grows_during(&self, season: Season) -> bool {
        self.seasons.contains(&season)
    }
}

/// Administrative district. Display-only: never used for eligibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct District {
    pub id: &'static str,
    pub name: Localized,
}

/// Government support scheme shown alongside recommendations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GovernmentScheme {
    pub id: &'static str,
    pub name: Localized,
    pub description: Localized,
    /// Free-form: an amount ("₹6,000"), a rate ("2%") or a label ("Free")
    pub benefit: &'static str,
    pub emoji: &'static str,
    pub link: &'static str,
}
