//! Detail-view selection state machine.
//!
//! Two states, cycling for the whole session: `Closed`, or `Open` on exactly
//! one artwork. Selection is independent of the filter fields; changing the
//! category or search never touches it.

use atelier_catalog::Catalog;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors from selection transitions.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectionError {
    /// The caller asked to open an id the catalog does not contain. The
    /// presentation layer must only select from the rendered filtered set,
    /// so this is a contract violation, not a user-facing condition.
    #[error("Unknown artwork id: {0}")]
    UnknownArtwork(String),
}

/// Where a dismissal gesture landed relative to the detail view.
///
/// The detail view declares two hit zones: its content region and everything
/// outside it. Only gestures attributed to the outside zone dismiss; the
/// presentation layer attributes the zone instead of relying on a
/// framework's event bubbling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DismissZone {
    /// Inside the detail content; must not dismiss.
    Content,
    /// The backdrop around the detail content; dismisses.
    Outside,
}

/// The detail-view selection.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Selection {
    #[default]
    Closed,
    Open { artwork_id: String },
}

impl Selection {
    pub fn is_open(&self) -> bool {
        matches!(self, Selection::Open { .. })
    }

    /// The open artwork's id, if any.
    pub fn artwork_id(&self) -> Option<&str> {
        match self {
            Selection::Closed => None,
            Selection::Open { artwork_id } => Some(artwork_id),
        }
    }

    /// Open the detail view on an artwork.
    ///
    /// Selecting while already open replaces the selection directly, with no
    /// intermediate `Closed` state.
    pub fn select(&mut self, catalog: &Catalog, id: &str) -> Result<(), SelectionError> {
        if !catalog.contains(id) {
            return Err(SelectionError::UnknownArtwork(id.to_string()));
        }
        *self = Selection::Open {
            artwork_id: id.to_string(),
        };
        Ok(())
    }

    /// Handle a dismissal gesture for the given hit zone.
    ///
    /// Gestures inside the detail content leave the view open.
    pub fn dismiss(&mut self, zone: DismissZone) {
        if zone == DismissZone::Outside {
            *self = Selection::Closed;
        }
    }

    /// Explicit close action (the detail view's close button).
    pub fn close(&mut self) {
        *self = Selection::Closed;
    }
}
