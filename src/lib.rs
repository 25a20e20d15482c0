//! Crop Advisor
//!
//! Recommends which crop a farmer should plant from four answers (district,
//! soil type, water availability, season) and estimates per-acre profit.
//!
//! - `catalog/`: Embedded crop, district and government-scheme tables
//! - `profit`: Per-acre profit/loss breakdown for one crop
//! - `recommender`: Eligibility filter and profit ranking
//! - `utils/`: Rupee formatting for presentation layers
//! - `api_server`: Read-only JSON API (feature `api`)

pub mod catalog;
pub mod config;
pub mod error;
pub mod profit;
pub mod recommender;
pub mod utils;

#[cfg(feature = "api")]
pub mod api_server;

// Re-export commonly used types
pub use catalog::{Catalog, Crop, District, GovernmentScheme, Language, Localized};
pub use error::CatalogError;
pub use profit::{compute_profit_loss, ProfitBreakdown};
pub use recommender::{
    is_eligible, recommend, recommend_batch, recommend_from, recommend_with_profit, Conditions,
    FarmerInput, Recommendation, WaterAvailability,
};
pub use utils::{format_inr, format_inr_compact};

#[cfg(feature = "api")]
pub use api_server::{create_router, AppState};
