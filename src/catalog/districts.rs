//! Embedded District Table
//!
//! Maharashtra districts offered in the location step. Ids are stable even
//! where the display name has changed (osmanabad → Dharashiv).

use super::types::{District, Localized};

pub static DISTRICTS: &[District] = &[
    District { id: "pune", name: Localized::new("Pune", "पुणे") },
    District { id: "nashik", name: Localized::new("Nashik", "नाशिक") },
    District { id: "ahmednagar", name: Localized::new("Ahmednagar", "अहमदनगर") },
    District { id: "solapur", name: Localized::new("Solapur", "सोलापूर") },
    District { id: "kolhapur", name: Localized::new("Kolhapur", "कोल्हापूर") },
    District { id: "satara", name: Localized::new("Satara", "सातारा") },
    District { id: "sangli", name: Localized::new("Sangli", "सांगली") },
    District { id: "sambhajinagar", name: Localized::new("Chh. Sambhajinagar", "छ. संभाजीनगर") },
    District { id: "jalna", name: Localized::new("Jalna", "जालना") },
    District { id: "beed", name: Localized::new("Beed", "बीड") },
    District { id: "latur", name: Localized::new("Latur", "लातूर") },
    District { id: "osmanabad", name: Localized::new("Dharashiv", "धाराशिव") },
    District { id: "nagpur", name: Localized::new("Nagpur", "नागपूर") },
    District { id: "wardha", name: Localized::new("Wardha", "वर्धा") },
    District { id: "amravati", name: Localized::new("Amravati", "अमरावती") },
    District { id: "akola", name: Localized::new("Akola", "अकोला") },
    District { id: "yavatmal", name: Localized::new("Yavatmal", "यवतमाळ") },
    District { id: "buldhana", name: Localized::new("Buldhana", "बुलडाणा") },
    District { id: "nanded", name: Localized::new("Nanded", "नांदेड") },
    District { id: "parbhani", name: Localized::new("Parbhani", "परभणी") },
];
