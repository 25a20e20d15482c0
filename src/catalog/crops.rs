//! Embedded Crop Table
//!
//! Hand-curated Maharashtra crop records: suitability tags, yield range per
//! acre, per-acre input costs and the latest mandi price per quintal.
//! Order matters: it is the tie-break order for recommendations.

use super::types::{
    Crop, CropCosts, Localized, MarketPrice, PriceTrend, Season, SoilType, WaterRequirement,
    YieldRange,
};

// ============================================================================
// EMBEDDED CROP DATA
// ============================================================================

pub static CROPS: &[Crop] = &[
    Crop {
        id: "soybean",
        name: Localized::new("Soybean", "सोयाबीन"),
        emoji: "🫘",
        suitable_soils: &[SoilType::Black, SoilType::Alluvial],
        seasons: &[Season::Kharif],
        water_requirement: WaterRequirement::Medium,
        yield_per_acre: YieldRange { min: 6.0, max: 8.0 },
        costs: CropCosts {
            seed: 2200,
            fertilizer: 3500,
            pesticide: 2000,
            irrigation: 1500,
            labor: 5000,
        },
        market_price: MarketPrice {
            current: 4800.0,
            average: 4500.0,
            trend: PriceTrend::Increasing,
            mandi: Localized::new("Latur APMC", "लातूर APMC"),
        },
        description: Localized::new(
            "High-protein oilseed, excellent for black soil regions",
            "उच्च प्रथिनयुक्त तेलबिया, काळ्या मातीसाठी उत्कृष्ट",
        ),
    },
    Crop {
        id: "cotton",
        name: Localized::new("Cotton", "कापूस"),
        emoji: "☁️",
        suitable_soils: &[SoilType::Black, SoilType::Red],
        seasons: &[Season::Kharif],
        water_requirement: WaterRequirement::Medium,
        yield_per_acre: YieldRange { min: 6.0, max: 10.0 },
        costs: CropCosts {
            seed: 2800,
            fertilizer: 4500,
            pesticide: 4000,
            irrigation: 3000,
            labor: 7000,
        },
        market_price: MarketPrice {
            current: 7200.0,
            average: 6800.0,
            trend: PriceTrend::Stable,
            mandi: Localized::new("Jalgaon APMC", "जळगाव APMC"),
        },
        description: Localized::new(
            "Major cash crop, good returns with proper care",
            "प्रमुख नगदी पीक, योग्य काळजीने चांगला नफा",
        ),
    },
    Crop {
        id: "rice",
        name: Localized::new("Rice (Paddy)", "भात"),
        emoji: "🌾",
        suitable_soils: &[SoilType::Alluvial, SoilType::Clay],
        seasons: &[Season::Kharif],
        water_requirement: WaterRequirement::High,
        yield_per_acre: YieldRange { min: 15.0, max: 20.0 },
        costs: CropCosts {
            seed: 1800,
            fertilizer: 3000,
            pesticide: 1500,
            irrigation: 4000,
            labor: 6000,
        },
        market_price: MarketPrice {
            current: 2300.0,
            average: 2200.0,
            trend: PriceTrend::Stable,
            mandi: Localized::new("Nagpur APMC", "नागपूर APMC"),
        },
        description: Localized::new(
            "Staple food crop, needs ample water supply",
            "मुख्य अन्नधान्य पीक, भरपूर पाणी लागते",
        ),
    },
    Crop {
        id: "jowar",
        name: Localized::new("Jowar (Sorghum)", "ज्वारी"),
        emoji: "🌿",
        suitable_soils: &[SoilType::Black, SoilType::Red],
        seasons: &[Season::Kharif, Season::Rabi],
        water_requirement: WaterRequirement::Low,
        yield_per_acre: YieldRange { min: 5.0, max: 8.0 },
        costs: CropCosts {
            seed: 1200,
            fertilizer: 2500,
            pesticide: 1000,
            irrigation: 800,
            labor: 4000,
        },
        market_price: MarketPrice {
            current: 3400.0,
            average: 3200.0,
            trend: PriceTrend::Increasing,
            mandi: Localized::new("Solapur APMC", "सोलापूर APMC"),
        },
        description: Localized::new(
            "Drought-resistant millet, grows in low water",
            "दुष्काळ सहन करणारे पीक, कमी पाण्यात येते",
        ),
    },
    Crop {
        id: "bajra",
        name: Localized::new("Bajra (Pearl Millet)", "बाजरी"),
        emoji: "🌾",
        suitable_soils: &[SoilType::Sandy, SoilType::Red],
        seasons: &[Season::Kharif],
        water_requirement: WaterRequirement::Low,
        yield_per_acre: YieldRange { min: 4.0, max: 6.0 },
        costs: CropCosts {
            seed: 1000,
            fertilizer: 2000,
            pesticide: 800,
            irrigation: 500,
            labor: 3500,
        },
        market_price: MarketPrice {
            current: 2500.0,
            average: 2350.0,
            trend: PriceTrend::Stable,
            mandi: Localized::new("Ahmednagar APMC", "अहमदनगर APMC"),
        },
        description: Localized::new(
            "Hardy crop for sandy soils with low rainfall",
            "वाळूच्या मातीत कमी पावसात येणारे पीक",
        ),
    },
    Crop {
        id: "tur",
        name: Localized::new("Tur Dal (Pigeon Pea)", "तूर"),
        emoji: "🫘",
        suitable_soils: &[SoilType::Black, SoilType::Red],
        seasons: &[Season::Kharif],
        water_requirement: WaterRequirement::Low,
        yield_per_acre: YieldRange { min: 4.0, max: 6.0 },
        costs: CropCosts {
            seed: 2500,
            fertilizer: 2800,
            pesticide: 1500,
            irrigation: 1000,
            labor: 4500,
        },
        market_price: MarketPrice {
            current: 7500.0,
            average: 7000.0,
            trend: PriceTrend::Increasing,
            mandi: Localized::new("Latur APMC", "लातूर APMC"),
        },
        description: Localized::new(
            "High-value pulse crop with good market demand",
            "चांगल्या बाजारभावाचे कडधान्य पीक",
        ),
    },
    Crop {
        id: "sugarcane",
        name: Localized::new("Sugarcane", "ऊस"),
        emoji: "🎋",
        suitable_soils: &[SoilType::Alluvial, SoilType::Black, SoilType::Clay],
        seasons: &[Season::Kharif],
        water_requirement: WaterRequirement::High,
        yield_per_acre: YieldRange { min: 350.0, max: 450.0 },
        costs: CropCosts {
            seed: 8000,
            fertilizer: 6000,
            pesticide: 3000,
            irrigation: 8000,
            labor: 12000,
        },
        market_price: MarketPrice {
            current: 315.0,
            average: 300.0,
            trend: PriceTrend::Stable,
            mandi: Localized::new("Kolhapur Sugar Factory", "कोल्हापूर साखर कारखाना"),
        },
        description: Localized::new(
            "Perennial cash crop, needs heavy irrigation",
            "बहुवार्षिक नगदी पीक, जास्त पाणी लागते",
        ),
    },
    Crop {
        id: "groundnut",
        name: Localized::new("Groundnut", "भुईमूग"),
        emoji: "🥜",
        suitable_soils: &[SoilType::Sandy, SoilType::Red, SoilType::Laterite],
        seasons: &[Season::Kharif],
        water_requirement: WaterRequirement::Medium,
        yield_per_acre: YieldRange { min: 6.0, max: 9.0 },
        costs: CropCosts {
            seed: 3500,
            fertilizer: 2500,
            pesticide: 1500,
            irrigation: 2000,
            labor: 5000,
        },
        market_price: MarketPrice {
            current: 6200.0,
            average: 5800.0,
            trend: PriceTrend::Increasing,
            mandi: Localized::new("Sangli APMC", "सांगली APMC"),
        },
        description: Localized::new(
            "Oilseed crop with good returns on light soils",
            "हलक्या मातीत चांगला नफा देणारे तेलबिया पीक",
        ),
    },
    Crop {
        id: "wheat",
        name: Localized::new("Wheat", "गहू"),
        emoji: "🌾",
        suitable_soils: &[SoilType::Alluvial, SoilType::Black],
        seasons: &[Season::Rabi],
        water_requirement: WaterRequirement::Medium,
        yield_per_acre: YieldRange { min: 10.0, max: 14.0 },
        costs: CropCosts {
            seed: 2000,
            fertilizer: 3500,
            pesticide: 1200,
            irrigation: 3000,
            labor: 5000,
        },
        market_price: MarketPrice {
            current: 2400.0,
            average: 2275.0,
            trend: PriceTrend::Stable,
            mandi: Localized::new("Pune APMC", "पुणे APMC"),
        },
        description: Localized::new("Major rabi food grain crop", "प्रमुख रब्बी अन्नधान्य पीक"),
    },
    Crop {
        id: "gram",
        name: Localized::new("Gram (Chickpea)", "हरभरा"),
        emoji: "🫘",
        suitable_soils: &[SoilType::Black, SoilType::Red],
        seasons: &[Season::Rabi],
        water_requirement: WaterRequirement::Low,
        yield_per_acre: YieldRange { min: 5.0, max: 7.0 },
        costs: CropCosts {
            seed: 2800,
            fertilizer: 2200,
            pesticide: 1500,
            irrigation: 1200,
            labor: 4000,
        },
        market_price: MarketPrice {
            current: 5600.0,
            average: 5400.0,
            trend: PriceTrend::Stable,
            mandi: Localized::new("Latur APMC", "लातूर APMC"),
        },
        description: Localized::new(
            "Important rabi pulse, good for soil health",
            "महत्त्वाचे रब्बी कडधान्य, मातीच्या आरोग्यासाठी चांगले",
        ),
    },
    Crop {
        id: "onion",
        name: Localized::new("Onion", "कांदा"),
        emoji: "🧅",
        suitable_soils: &[SoilType::Alluvial, SoilType::Black],
        seasons: &[Season::Rabi],
        water_requirement: WaterRequirement::Medium,
        yield_per_acre: YieldRange { min: 60.0, max: 80.0 },
        costs: CropCosts {
            seed: 4000,
            fertilizer: 5000,
            pesticide: 3000,
            irrigation: 4000,
            labor: 8000,
        },
        market_price: MarketPrice {
            current: 2500.0,
            average: 2000.0,
            trend: PriceTrend::Increasing,
            mandi: Localized::new("Nashik APMC (Lasalgaon)", "नाशिक APMC (लासलगाव)"),
        },
        description: Localized::new(
            "High-value vegetable crop with volatile prices",
            "चढ-उतार भावाचे मूल्यवान भाजीपाला पीक",
        ),
    },
    Crop {
        id: "sunflower",
        name: Localized::new("Sunflower", "सूर्यफूल"),
        emoji: "🌻",
        suitable_soils: &[SoilType::Black, SoilType::Alluvial],
        seasons: &[Season::Rabi],
        water_requirement: WaterRequirement::Medium,
        yield_per_acre: YieldRange { min: 4.0, max: 6.0 },
        costs: CropCosts {
            seed: 1800,
            fertilizer: 2500,
            pesticide: 1200,
            irrigation: 2000,
            labor: 4000,
        },
        market_price: MarketPrice {
            current: 6500.0,
            average: 6200.0,
            trend: PriceTrend::Stable,
            mandi: Localized::new("Solapur APMC", "सोलापूर APMC"),
        },
        description: Localized::new(
            "Oilseed crop with moderate water needs",
            "मध्यम पाण्याची गरज असलेले तेलबिया पीक",
        ),
    },
    Crop {
        id: "watermelon",
        name: Localized::new("Watermelon", "कलिंगड"),
        emoji: "🍉",
        suitable_soils: &[SoilType::Sandy, SoilType::Alluvial],
        seasons: &[Season::Zaid],
        water_requirement: WaterRequirement::Medium,
        yield_per_acre: YieldRange { min: 80.0, max: 120.0 },
        costs: CropCosts {
            seed: 3000,
            fertilizer: 3500,
            pesticide: 2000,
            irrigation: 4000,
            labor: 6000,
        },
        market_price: MarketPrice {
            current: 800.0,
            average: 700.0,
            trend: PriceTrend::Increasing,
            mandi: Localized::new("Pune APMC", "पुणे APMC"),
        },
        description: Localized::new("Profitable summer fruit crop", "नफा देणारे उन्हाळी फळ पीक"),
    },
    Crop {
        id: "moong",
        name: Localized::new("Moong (Green Gram)", "मूग"),
        emoji: "🫛",
        suitable_soils: &[SoilType::Sandy, SoilType::Red, SoilType::Alluvial],
        seasons: &[Season::Zaid, Season::Kharif],
        water_requirement: WaterRequirement::Low,
        yield_per_acre: YieldRange { min: 3.0, max: 5.0 },
        costs: CropCosts {
            seed: 2000,
            fertilizer: 1800,
            pesticide: 1000,
            irrigation: 1500,
            labor: 3500,
        },
        market_price: MarketPrice {
            current: 8200.0,
            average: 7800.0,
            trend: PriceTrend::Increasing,
            mandi: Localized::new("Ahmednagar APMC", "अहमदनगर APMC"),
        },
        description: Localized::new(
            "Short-duration pulse with high market value",
            "कमी कालावधीचे उच्च बाजारभावाचे कडधान्य",
        ),
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_crop_count() {
        assert_eq!(CROPS.len(), 14);
    }

    #[test]
    fn test_high_water_crops() {
        let high: Vec<&str> = CROPS
            .iter()
            .filter(|c| c.water_requirement == WaterRequirement::High)
            .map(|c| c.id)
            .collect();
        assert_eq!(high, vec!["rice", "sugarcane"]);
    }

    #[test]
    fn test_no_sandy_rabi_crop() {
        assert!(!CROPS
            .iter()
            .any(|c| c.grows_in(SoilType::Sandy) && c.grows_during(Season::Rabi)));
    }
}
