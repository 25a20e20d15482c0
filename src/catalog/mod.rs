//! Crop Catalog
//!
//! Immutable, process-wide set of crop, district and government-scheme
//! records. The tables are embedded in the binary; `Catalog` adds O(1) id
//! lookups on top of them and exposes read-only accessors only.
//!
//! ## Architecture
//! - `types.rs` - Record structs and categorical tags
//! - `crops.rs` - Embedded crop table (catalog order = tie-break order)
//! - `districts.rs` - Embedded district table (display only)
//! - `schemes.rs` - Embedded government scheme table

pub mod types;
pub mod crops;
pub mod districts;
pub mod schemes;

pub use types::{
    Crop, CropCosts, District, GovernmentScheme, Language, Localized, MarketPrice, PriceTrend,
    Season, SoilType, WaterRequirement, YieldRange,
};

use rustc_hash::{FxHashMap, FxHashSet};
use std::sync::OnceLock;

use crate::error::CatalogError;

/// Read-only view over the crop, district and scheme tables
#[derive(Debug)]
pub struct Catalog {
    crops: &'static [Crop],
    districts: &'static [District],
    schemes: &'static [GovernmentScheme],

    /// Crop id → position in `crops`
    crop_index: FxHashMap<&'static str, usize>,

    /// District id → position in `districts`
    district_index: FxHashMap<&'static str, usize>,
}

static GLOBAL: OnceLock<Catalog> = OnceLock::new();

impl Catalog {
    /// Build a catalog over the given tables.
    ///
    /// Does not validate; call `validate()` for that. With duplicate ids the
    /// index keeps the first occurrence.
    pub fn new(
        crops: &'static [Crop],
        districts: &'static [District],
        schemes: &'static [GovernmentScheme],
    ) -> Self {
        let mut crop_index = FxHashMap::default();
        for (idx, crop) in crops.iter().enumerate() {
            crop_index.entry(crop.id).or_insert(idx);
        }

        let mut district_index = FxHashMap::default();
        for (idx, district) in districts.iter().enumerate() {
            district_index.entry(district.id).or_insert(idx);
        }

        Self {
            crops,
            districts,
            schemes,
            crop_index,
            district_index,
        }
    }

    /// The embedded catalog, built on first use and shared for the process
    pub fn global() -> &'static Catalog {
        GLOBAL.get_or_init(|| {
            Catalog::new(crops::CROPS, districts::DISTRICTS, schemes::SCHEMES)
        })
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// All crops in catalog order
    pub fn crops(&self) -> &'static [Crop] {
        self.crops
    }

    pub fn districts(&self) -> &'static [District] {
        self.districts
    }

    pub fn schemes(&self) -> &'static [GovernmentScheme] {
        self.schemes
    }

    pub fn crop(&self, id: &str) -> Option<&'static Crop> {
        self.crop_index.get(id).map(|&idx| &self.crops[idx])
    }

    pub fn district(&self, id: &str) -> Option<&'static District> {
        self.district_index.get(id).map(|&idx| &self.districts[idx])
    }

    /// Localized district name, or the raw id when the district is unknown
    pub fn district_name<'a>(&self, id: &'a str, lang: Language) -> &'a str {
        match self.district(id) {
            Some(district) => district.name.get(lang),
            None => id,
        }
    }

    // ========================================================================
    // Validation
    // ========================================================================

    /// Check every record invariant, returning the first violation
    pub fn validate(&self) -> Result<(), CatalogError> {
        let mut seen = FxHashSet::default();
        for crop in self.crops {
            check_label("crop", crop.id, &[crop.name, crop.description, crop.market_price.mandi])?;
            if !seen.insert(crop.id) {
                return Err(CatalogError::DuplicateId { table: "crop", id: crop.id.to_string() });
            }
            if crop.suitable_soils.is_empty() {
                return Err(CatalogError::MissingAttribute {
                    crop: crop.id.to_string(),
                    attribute: "suitable soils",
                });
            }
            if crop.seasons.is_empty() {
                return Err(CatalogError::MissingAttribute {
                    crop: crop.id.to_string(),
                    attribute: "seasons",
                });
            }
            let range = crop.yield_per_acre;
            // Negated so NaN bounds fail too
            if !(range.min > 0.0 && range.min <= range.max) {
                return Err(CatalogError::InvalidYield {
                    crop: crop.id.to_string(),
                    min: range.min,
                    max: range.max,
                });
            }
        }

        let mut seen = FxHashSet::default();
        for district in self.districts {
            check_label("district", district.id, &[district.name])?;
            if !seen.insert(district.id) {
                return Err(CatalogError::DuplicateId {
                    table: "district",
                    id: district.id.to_string(),
                });
            }
        }

        let mut seen = FxHashSet::default();
        for scheme in self.schemes {
            check_label("scheme", scheme.id, &[scheme.name, scheme.description])?;
            if !seen.insert(scheme.id) {
                return Err(CatalogError::DuplicateId {
                    table: "scheme",
                    id: scheme.id.to_string(),
                });
            }
        }

        Ok(())
    }
}

fn check_label(table: &'static str, id: &str, labels: &[Localized]) -> Result<(), CatalogError> {
    if id.trim().is_empty() || labels.iter().any(Localized::has_blank) {
        return Err(CatalogError::EmptyLabel { table, id: id.to_string() });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_catalog_is_valid() {
        assert_eq!(Catalog::global().validate(), Ok(()));
    }

    #[test]
    fn test_table_sizes() {
        let catalog = Catalog::global();
        assert_eq!(catalog.crops().len(), 14);
        assert_eq!(catalog.districts().len(), 20);
        assert_eq!(catalog.schemes().len(), 5);
    }

    #[test]
    fn test_global_is_shared() {
        assert!(std::ptr::eq(Catalog::global(), Catalog::global()));
    }

    #[test]
    fn test_crop_lookup() {
        let catalog = Catalog::global();
        let onion = catalog.crop("onion").unwrap();
        assert_eq!(onion.name.en, "Onion");
        assert_eq!(onion.market_price.trend, PriceTrend::Increasing);
        assert!(catalog.crop("potato").is_none());
    }

    #[test]
    fn test_district_name() {
        let catalog = Catalog::global();
        assert_eq!(catalog.district_name("osmanabad", Language::En), "Dharashiv");
        assert_eq!(catalog.district_name("pune", Language::Mr), "पुणे");
        // Unknown ids fall back to the raw id
        assert_eq!(catalog.district_name("mumbai", Language::En), "mumbai");
    }

    static DUPLICATE_DISTRICTS: &[District] = &[
        District { id: "pune", name: Localized::new("Pune", "पुणे") },
        District { id: "pune", name: Localized::new("Pune again", "पुणे") },
    ];

    #[test]
    fn test_duplicate_district_rejected() {
        let catalog = Catalog::new(crops::CROPS, DUPLICATE_DISTRICTS, schemes::SCHEMES);
        assert_eq!(
            catalog.validate(),
            Err(CatalogError::DuplicateId { table: "district", id: "pune".to_string() })
        );
        // First occurrence wins in the index
        assert_eq!(catalog.district_name("pune", Language::En), "Pune");
    }

    static NO_SEASON: &[Crop] = &[Crop {
        id: "fallow",
        name: Localized::new("Fallow", "पडीक"),
        emoji: "🟫",
        suitable_soils: &[SoilType::Black],
        seasons: &[],
        water_requirement: WaterRequirement::Low,
        yield_per_acre: YieldRange { min: 1.0, max: 1.0 },
        costs: CropCosts { seed: 0, fertilizer: 0, pesticide: 0, irrigation: 0, labor: 0 },
        market_price: MarketPrice {
            current: 0.0,
            average: 0.0,
            trend: PriceTrend::Stable,
            mandi: Localized::new("None", "नाही"),
        },
        description: Localized::new("Resting land", "विश्रांती"),
    }];

    #[test]
    fn test_missing_season_rejected() {
        let catalog = Catalog::new(NO_SEASON, &[], &[]);
        assert_eq!(
            catalog.validate(),
            Err(CatalogError::MissingAttribute {
                crop: "fallow".to_string(),
                attribute: "seasons",
            })
        );
    }

    static INVERTED_YIELD: &[Crop] = &[Crop {
        id: "bad",
        name: Localized::new("Bad", "वाईट"),
        emoji: "❌",
        suitable_soils: &[SoilType::Red],
        seasons: &[Season::Rabi],
        water_requirement: WaterRequirement::Low,
        yield_per_acre: YieldRange { min: 8.0, max: 4.0 },
        costs: CropCosts { seed: 1, fertilizer: 1, pesticide: 1, irrigation: 1, labor: 1 },
        market_price: MarketPrice {
            current: 100.0,
            average: 100.0,
            trend: PriceTrend::Decreasing,
            mandi: Localized::new("Pune APMC", "पुणे APMC"),
        },
        description: Localized::new("Inverted range", "उलटी श्रेणी"),
    }];

    #[test]
    fn test_inverted_yield_rejected() {
        let catalog = Catalog::new(INVERTED_YIELD, &[], &[]);
        assert!(matches!(catalog.validate(), Err(CatalogError::InvalidYield { .. })));
    }

    const fn fixture_crop(id: &'static str, soils: &'static [SoilType]) -> Crop {
        Crop {
            id,
            name: Localized::new("Millet", "बाजरी"),
            emoji: "🌾",
            suitable_soils: soils,
            seasons: &[Season::Kharif],
            water_requirement: WaterRequirement::Low,
            yield_per_acre: YieldRange { min: 4.0, max: 6.0 },
            costs: CropCosts { seed: 500, fertilizer: 0, pesticide: 0, irrigation: 0, labor: 0 },
            market_price: MarketPrice {
                current: 2000.0,
                average: 2000.0,
                trend: PriceTrend::Stable,
                mandi: Localized::new("Solapur APMC", "सोलापूर APMC"),
            },
            description: Localized::new("Hardy grain", "काटक धान्य"),
        }
    }

    static NO_SOIL: &[Crop] = &[fixture_crop("rootless", &[])];

    static DUPLICATE_CROPS: &[Crop] = &[
        fixture_crop("millet", &[SoilType::Sandy]),
        fixture_crop("millet", &[SoilType::Red]),
    ];

    static BLANK_DISTRICT_NAME: &[District] =
        &[District { id: "satara", name: Localized::new("Satara", " ") }];

    static DUPLICATE_SCHEMES: &[GovernmentScheme] = &[
        GovernmentScheme {
            id: "soil-card",
            name: Localized::new("Soil Health Card", "मृदा आरोग्य पत्रिका"),
            description: Localized::new("Free soil testing", "मोफत माती परीक्षण"),
            benefit: "Free",
            emoji: "🧪",
            link: "https://soilhealth.dac.gov.in/",
        },
        GovernmentScheme {
            id: "soil-card",
            name: Localized::new("Soil Health Card", "मृदा आरोग्य पत्रिका"),
            description: Localized::new("Second copy", "दुसरी प्रत"),
            benefit: "Free",
            emoji: "🧪",
            link: "https://soilhealth.dac.gov.in/",
        },
    ];

    #[test]
    fn test_missing_soils_rejected() {
        let catalog = Catalog::new(NO_SOIL, &[], &[]);
        assert_eq!(
            catalog.validate(),
            Err(CatalogError::MissingAttribute {
                crop: "rootless".to_string(),
                attribute: "suitable soils",
            })
        );
    }

    #[test]
    fn test_duplicate_crop_rejected() {
        let catalog = Catalog::new(DUPLICATE_CROPS, &[], &[]);
        assert_eq!(
            catalog.validate(),
            Err(CatalogError::DuplicateId { table: "crop", id: "millet".to_string() })
        );
        // First occurrence wins in the index
        assert_eq!(catalog.crop("millet").unwrap().suitable_soils, &[SoilType::Sandy]);
    }

    #[test]
    fn test_blank_label_rejected() {
        let catalog = Catalog::new(&[], BLANK_DISTRICT_NAME, &[]);
        assert_eq!(
            catalog.validate(),
            Err(CatalogError::EmptyLabel { table: "district", id: "satara".to_string() })
        );
    }

    #[test]
    fn test_duplicate_scheme_rejected() {
        let catalog = Catalog::new(&[], &[], DUPLICATE_SCHEMES);
        assert_eq!(
            catalog.validate(),
            Err(CatalogError::DuplicateId { table: "scheme", id: "soil-card".to_string() })
        );
    }
}
