//! Catalog configuration errors.
//!
//! A malformed catalog is a deployment error caught when the document loads,
//! never a runtime failure surfaced to the user.

use thiserror::Error;

/// Errors found while loading or validating a catalog document.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[cfg_attr(feature = "native", derive(uniffi::Error))]
#[cfg_attr(feature = "native", uniffi(flat_error))]
pub enum CatalogError {
    #[error("Invalid catalog JSON: {0}")]
    Json(String),

    #[error("Duplicate artwork id: {0}")]
    DuplicateId(String),

    #[error("Artwork {0} has an empty title")]
    EmptyTitle(String),

    #[error("Artwork {0} carries no categories")]
    EmptyCategories(String),

    #[error("Artwork {0} carries a label missing from the category list: {1}")]
    UnknownCategory(String, String),

    #[error("Artwork {0} carries the reserved \"All\" sentinel as a tag")]
    ReservedSentinel(String),

    #[error("Category list must begin with the \"All\" sentinel")]
    MissingSentinel,

    #[error("Duplicate category label: {0}")]
    DuplicateCategory(String),
}

impl From<serde_json::Error> for CatalogError {
    fn from(err: serde_json::Error) -> Self {
        CatalogError::Json(err.to_string())
    }
}
