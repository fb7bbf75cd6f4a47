//! Category labels and the active-filter sentinel.

use crate::artwork::Artwork;
use serde::{Deserialize, Serialize};

/// The sentinel label meaning "no category restriction".
///
/// The authored category list always carries it as its first entry; no
/// artwork ever carries it as a tag.
pub const ALL_CATEGORY: &str = "All";

/// The active category constraint for the gallery view.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[cfg_attr(feature = "native", derive(uniffi::Enum))]
pub enum CategoryFilter {
    /// No restriction; every artwork passes.
    #[default]
    All,
    /// Only artworks carrying this label pass.
    Label(String),
}

impl CategoryFilter {
    /// Map an authored label to a filter, treating the sentinel specially.
    pub fn from_label(label: &str) -> Self {
        if label == ALL_CATEGORY {
            Self::All
        } else {
            Self::Label(label.to_string())
        }
    }

    /// The label as the presentation layer displays it.
    pub fn label(&self) -> &str {
        match self {
            Self::All => ALL_CATEGORY,
            Self::Label(label) => label,
        }
    }

    /// Whether the artwork passes this category constraint.
    ///
    /// Membership test, not set equality: an artwork tagged both
    /// `Portrait` and `Cubist/Abstract` passes either label.
    pub fn matches(&self, artwork: &Artwork) -> bool {
        match self {
            Self::All => true,
            Self::Label(label) => artwork.has_category(label),
        }
    }
}
