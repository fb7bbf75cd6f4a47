//! atelier-catalog: Artwork catalog domain model.
//!
//! The catalog is static configuration: an ordered sequence of artwork
//! records plus an authored, ordered list of category labels. It is loaded
//! once at startup and never mutated. Filtering and selection live in
//! `atelier-core`; rendering lives in the native presentation layer that
//! consumes these crates via UniFFI.

#[cfg(feature = "native")]
uniffi::setup_scaffolding!();

pub mod artwork;
pub mod catalog;
pub mod category;
pub mod error;

pub use artwork::*;
pub use catalog::*;
pub use category::*;
pub use error::*;

/// Parse and validate a catalog document, discarding the result.
///
/// Lets the presentation layer surface configuration errors at startup
/// without holding the catalog on the Rust side.
#[cfg(feature = "native")]
#[uniffi::export]
pub fn validate_catalog_json(input: String) -> Result<(), CatalogError> {
    Catalog::from_json(&input).map(|_| ())
}
