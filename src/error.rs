//! Catalog Errors
//!
//! Raised when parsing a categorical tag or when the embedded catalog breaks
//! one of its record invariants. The recommendation path never surfaces these:
//! an unknown tag simply matches no crop.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum CatalogError {
    /// A tag string outside its vocabulary (e.g. soil "loamy")
    #[error("unknown {kind} tag: '{value}'")]
    UnknownTag { kind: &'static str, value: String },

    #[error("duplicate {table} id: '{id}'")]
    DuplicateId { table: &'static str, id: String },

    /// Crop with an empty soil or season list
    #[error("crop '{crop}' has no {attribute}")]
    MissingAttribute { crop: String, attribute: &'static str },

    #[error("crop '{crop}' has invalid yield range {min}-{max}")]
    InvalidYield { crop: String, min: f64, max: f64 },

    /// Empty id, or a localized label missing one of its languages
    #[error("{table} '{id}' has an empty label")]
    EmptyLabel { table: &'static str, id: String },
}

impl CatalogError {
    pub(crate) fn unknown_tag(kind: &'static str, value: &str) -> Self {
        CatalogError::UnknownTag {
            kind,
            value: value.to_string(),
        }
    }
}
