//! The explicit gallery view state.
//!
//! The presentation layer owns one `GalleryState` per session and threads it
//! through explicit calls; there is no ambient mutable state in the core.
//! The filter pair and the selection change independently.

use crate::filter::{filter_artworks, ViewFilter};
use crate::inquiry::{inquiry_link, InquiryConfig};
use crate::selection::{DismissZone, Selection, SelectionError};
use atelier_catalog::{Artwork, Catalog, CategoryFilter};
use serde::{Deserialize, Serialize};

/// Transient UI state for one gallery session.
///
/// Created at session start with no restriction and nothing selected,
/// mutated only by direct user interaction, discarded at session end.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GalleryState {
    pub filter: ViewFilter,
    pub selection: Selection,
}

impl GalleryState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Category click: replace the active category constraint.
    pub fn set_category(&mut self, category: CategoryFilter) {
        self.filter.active_category = category;
    }

    /// Search input change: replace the query text.
    pub fn set_search(&mut self, text: &str) {
        self.filter.search_text = text.to_string();
    }

    /// The artworks to display under the current filter, in catalog order.
    pub fn visible<'a>(&self, catalog: &'a Catalog) -> Vec<&'a Artwork> {
        filter_artworks(catalog, &self.filter)
    }

    /// Count for the "N works" heading.
    pub fn visible_count(&self, catalog: &Catalog) -> usize {
        self.visible(catalog).len()
    }

    /// Open the detail view on an artwork.
    pub fn select(&mut self, catalog: &Catalog, id: &str) -> Result<(), SelectionError> {
        self.selection.select(catalog, id)
    }

    /// Dismissal gesture attributed to a hit zone.
    pub fn dismiss(&mut self, zone: DismissZone) {
        self.selection.dismiss(zone);
    }

    /// Explicit close action.
    pub fn close(&mut self) {
        self.selection.close();
    }

    /// Resolve the open selection against the catalog.
    pub fn selected_artwork<'a>(&self, catalog: &'a Catalog) -> Option<&'a Artwork> {
        self.selection.artwork_id().and_then(|id| catalog.artwork(id))
    }

    /// The inquiry mailto link for the open selection, if any.
    pub fn inquiry(&self, catalog: &Catalog, config: &InquiryConfig) -> Option<String> {
        self.selected_artwork(catalog)
            .map(|artwork| inquiry_link(config, artwork))
    }
}
