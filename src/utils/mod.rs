//! Utility modules shared by the CLI and the HTTP API
//!
//! - Currency: integer-rupee formatting with Indian digit grouping

pub mod currency;

// Re-export commonly used functions
pub use currency::{format_inr, format_inr_compact};
