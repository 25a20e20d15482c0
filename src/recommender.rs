//! Crop Recommender
//!
//! Filters the catalog down to crops compatible with a farmer's soil, season
//! and water availability, then ranks them by per-acre net profit.
//!
//! ## Eligibility
//! A crop is recommended only when all three clauses hold:
//! 1. Soil: the crop lists the farmer's soil type (exact tag match)
//! 2. Season: the crop lists the farmer's season (exact tag match)
//! 3. Water: the farmer has irrigation, or the crop is not high-water
//!
//! District is carried for display only and never narrows the result.
//!
//! ## Ranking
//! Descending net profit. The sort is stable, so crops with equal profit keep
//! catalog order and repeated calls return the same list.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::catalog::{Catalog, Crop, Season, SoilType, WaterRequirement};
use crate::error::CatalogError;
use crate::profit::{compute_profit_loss, ProfitBreakdown};

// ============================================================================
// Farmer Input
// ============================================================================

/// Water source declared by the farmer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WaterAvailability {
    /// Rain only: high-water crops are excluded
    Rainfed,
    /// Assured irrigation: any water requirement is acceptable
    Irrigation,
}

impl WaterAvailability {
    pub fn as_str(&self) -> &'static str {
        match self {
            WaterAvailability::Rainfed => "rainfed",
            WaterAvailability::Irrigation => "irrigation",
        }
    }
}

impl fmt::Display for WaterAvailability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WaterAvailability {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "rainfed" => Ok(WaterAvailability::Rainfed),
            "irrigation" => Ok(WaterAvailability::Irrigation),
            _ => Err(CatalogError::unknown_tag("water availability", s)),
        }
    }
}

/// Raw answers collected from the farmer, one request's worth.
///
/// Tags arrive as strings from the selection flow and are matched exactly.
/// Missing fields deserialize as empty strings, which match no crop.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FarmerInput {
    pub district: String,
    pub soil_type: String,
    pub water_availability: String,
    pub season: String,
}

impl FarmerInput {
    pub fn new(district: &str, soil_type: &str, water_availability: &str, season: &str) -> Self {
        Self {
            district: district.to_string(),
            soil_type: soil_type.to_string(),
            water_availability: water_availability.to_string(),
            season: season.to_string(),
        }
    }

    /// Parse into typed growing conditions.
    ///
    /// Returns `None` if the soil or season tag is unknown. Any water tag other
    /// than `irrigation` counts as rainfed.
    pub fn conditions(&self) -> Option<Conditions> {
        let soil: SoilType = self.soil_type.parse().ok()?;
        let season: Season = self.season.parse().ok()?;
        let water = match self.water_availability.parse::<WaterAvailability>() {
            Ok(WaterAvailability::Irrigation) => WaterAvailability::Irrigation,
            _ => WaterAvailability::Rainfed,
        };

        Some(Conditions { soil, season, water })
    }
}

/// The three inputs that decide eligibility
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Conditions {
    pub soil: SoilType,
    pub season: Season,
    pub water: WaterAvailability,
}

// ============================================================================
// Eligibility
// ============================================================================

/// Apply the soil, season and water clauses to one crop
pub fn is_eligible(crop: &Crop, conditions: &Conditions) -> bool {
    let soil_match = crop.grows_in(conditions.soil);
    let season_match = crop.grows_during(conditions.season);
    let water_match = conditions.water == WaterAvailability::Irrigation
        || crop.water_requirement != WaterRequirement::High;

    soil_match && season_match && water_match
}

// ============================================================================
// Ranking
// ============================================================================

/// An eligible crop paired with the breakdown it was ranked by
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Recommendation<'a> {
    pub crop: &'a Crop,
    pub profit: ProfitBreakdown,
}

/// Eligible crops from `crops`, most profitable first
pub fn recommend_from<'a>(crops: &'a [Crop], conditions: &Conditions) -> Vec<Recommendation<'a>> {
    let mut ranked: Vec<Recommendation<'a>> = crops
        .iter()
        .filter(|crop| is_eligible(crop, conditions))
        .map(|crop| Recommendation {
            crop,
            profit: compute_profit_loss(crop),
        })
        .collect();

    // sort_by is stable: equal profits keep catalog order
    ranked.sort_by(|a, b| {
        b.profit
            .net_profit
            .partial_cmp(&a.profit.net_profit)
            .unwrap_or(Ordering::Equal)
    });

    ranked
}

/// Ranked recommendations with their profit breakdowns.
///
/// Unknown soil or season tags give an empty list, not an error.
pub fn recommend_with_profit(
    catalog: &Catalog,
    input: &FarmerInput,
) -> Vec<Recommendation<'static>> {
    let ranked = match input.conditions() {
        Some(conditions) => recommend_from(catalog.crops(), &conditions),
        None => Vec::new(),
    };

    tracing::debug!(
        "Recommend soil={} season={} water={} district={}: {} match(es)",
        input.soil_type,
        input.season,
        input.water_availability,
        input.district,
        ranked.len()
    );

    ranked
}

/// Ranked crops for a farmer's input, most profitable first
pub fn recommend(catalog: &Catalog, input: &FarmerInput) -> Vec<&'static Crop> {
    recommend_with_profit(catalog, input)
        .into_iter()
        .map(|rec| rec.crop)
        .collect()
}

/// Recommend for many inputs in parallel. Output order follows input order.
pub fn recommend_batch(
    catalog: &Catalog,
    inputs: &[FarmerInput],
) -> Vec<Vec<Recommendation<'static>>> {
    inputs
        .par_iter()
        .map(|input| recommend_with_profit(catalog, input))
        .collect()
}
