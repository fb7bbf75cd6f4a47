//! atelier-core: Gallery logic for the atelier portfolio apps.
//!
//! This library provides pure Rust implementations of:
//! - Catalog filtering (active category + free-text search)
//! - Detail-view selection state machine with the two-zone dismiss contract
//! - Derived purchase/inquiry mailto links
//! - The explicit view-state struct the presentation layer threads through
//!
//! The presentation layer (Swift/JS) owns the state and drives every
//! transition; the core holds nothing mutable between calls. These
//! implementations are exposed to native UIs via UniFFI bindings behind the
//! `native` feature.

pub mod filter;
pub mod inquiry;
pub mod selection;
pub mod state;

pub use filter::{filter_artworks, normalize_query, ViewFilter};
pub use inquiry::{inquiry_link, InquiryConfig};
pub use selection::{DismissZone, Selection, SelectionError};
pub use state::GalleryState;

// Setup UniFFI - proc macros only, no UDL file (native only)
#[cfg(feature = "native")]
uniffi::setup_scaffolding!();

/// Returns the version of atelier-core
#[cfg(feature = "native")]
#[uniffi::export]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

// ===== FFI wrappers =====
// Core types stay plain Rust; the FFI surface is flat strings.

/// FFI-safe error for catalog-consuming functions.
#[cfg(feature = "native")]
#[derive(uniffi::Error, Debug, Clone)]
#[uniffi(flat_error)]
pub enum FfiError {
    InvalidCatalog { message: String },
}

#[cfg(feature = "native")]
impl std::fmt::Display for FfiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FfiError::InvalidCatalog { message } => write!(f, "{}", message),
        }
    }
}

#[cfg(feature = "native")]
impl std::error::Error for FfiError {}

#[cfg(feature = "native")]
impl From<atelier_catalog::CatalogError> for FfiError {
    fn from(err: atelier_catalog::CatalogError) -> Self {
        FfiError::InvalidCatalog {
            message: err.to_string(),
        }
    }
}

/// Filter a catalog document and return the visible artwork ids in order.
///
/// `active_category` is an authored label; `"All"` means no restriction.
#[cfg(feature = "native")]
#[uniffi::export]
pub fn visible_artwork_ids(
    catalog_json: String,
    active_category: String,
    search_text: String,
) -> Result<Vec<String>, FfiError> {
    use atelier_catalog::{Catalog, CategoryFilter};

    let catalog = Catalog::from_json(&catalog_json)?;
    let view = ViewFilter {
        active_category: CategoryFilter::from_label(&active_category),
        search_text,
    };
    Ok(filter_artworks(&catalog, &view)
        .into_iter()
        .map(|a| a.id.clone())
        .collect())
}

/// Build the pre-filled inquiry mailto link for an artwork title.
#[cfg(feature = "native")]
#[uniffi::export]
pub fn artwork_inquiry_link(recipient: String, subject_prefix: String, title: String) -> String {
    let config = InquiryConfig {
        recipient,
        subject_prefix,
    };
    inquiry::inquiry_link_for_title(&config, &title)
}
