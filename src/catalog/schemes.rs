//! Embedded Government Scheme Table
//!
//! Independent reference list: schemes are not linked to crops or districts.

use super::types::{GovernmentScheme, Localized};

pub static SCHEMES: &[GovernmentScheme] = &[
    GovernmentScheme {
        id: "pm-kisan",
        name: Localized::new("PM-KISAN", "पीएम-किसान"),
        description: Localized::new(
            "Direct income support of ₹6,000/year to farmer families in three installments",
            "शेतकरी कुटुंबांना तीन हप्त्यांत ₹6,000/वर्ष थेट उत्पन्न सहाय्य",
        ),
        benefit: "₹6,000",
        emoji: "💰",
        link: "https://pmkisan.gov.in/",
    },
    GovernmentScheme {
        id: "fasal-bima",
        name: Localized::new("PM Fasal Bima Yojana", "पीएम फसल बिमा योजना"),
        description: Localized::new(
            "Crop insurance scheme to protect farmers against crop loss due to natural calamities",
            "नैसर्गिक आपत्तींमुळे पीक नुकसानापासून शेतकऱ्यांचे संरक्षण करणारी पीक विमा योजना",
        ),
        benefit: "2%",
        emoji: "🛡️",
        link: "https://pmfby.gov.in/",
    },
    GovernmentScheme {
        id: "soil-health",
        name: Localized::new("Soil Health Card", "मृदा आरोग्य कार्ड"),
        description: Localized::new(
            "Free soil testing and nutrient recommendations for better crop yield",
            "चांगल्या पीक उत्पादनासाठी मोफत माती तपासणी आणि पोषक तत्व शिफारशी",
        ),
        benefit: "Free",
        emoji: "📋",
        link: "https://soilhealth.dac.gov.in/",
    },
    GovernmentScheme {
        id: "krishi-sinchai",
        name: Localized::new("PM Krishi Sinchai Yojana", "पीएम कृषी सिंचन योजना"),
        description: Localized::new(
            "Subsidy on micro-irrigation systems like drip and sprinkler irrigation",
            "ठिबक आणि तुषार सिंचनासारख्या सूक्ष्म सिंचन प्रणालीवर अनुदान",
        ),
        benefit: "55-80%",
        emoji: "💧",
        link: "https://pmksy.gov.in/",
    },
    GovernmentScheme {
        id: "nanaji-deshmukh",
        name: Localized::new("Nanaji Deshmukh Krushi Sanjivani", "नानाजी देशमुख कृषी संजीवनी"),
        description: Localized::new(
            "Climate-resilient agriculture project for drought-prone areas of Maharashtra",
            "महाराष्ट्रातील दुष्काळग्रस्त भागांसाठी हवामान अनुकूल शेती प्रकल्प",
        ),
        benefit: "Various",
        emoji: "🌱",
        link: "https://mahapocra.gov.in/",
    },
];
