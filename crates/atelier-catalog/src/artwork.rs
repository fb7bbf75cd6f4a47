//! Artwork domain model.

use serde::{Deserialize, Serialize};

/// One physical piece in the portfolio catalog.
///
/// Records are authored data: the `id` is assigned at authoring time (never
/// generated), and all fields are immutable after the catalog loads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "native", derive(uniffi::Record))]
pub struct Artwork {
    pub id: String,
    pub title: String,
    pub year: i32,
    pub medium: String,
    pub size: String,
    /// Category labels; an artwork may carry more than one.
    #[serde(rename = "category")]
    pub categories: Vec<String>,
    /// Path or URL of the single display image.
    pub image: String,
}

impl Artwork {
    /// Create an artwork with the given authored id and title.
    pub fn new(id: &str, title: &str) -> Self {
        Self {
            id: id.to_string(),
            title: title.to_string(),
            year: 0,
            medium: String::new(),
            size: String::new(),
            categories: Vec::new(),
            image: String::new(),
        }
    }

    /// Whether this artwork carries the given category label.
    pub fn has_category(&self, label: &str) -> bool {
        self.categories.iter().any(|c| c == label)
    }

    /// The searchable text for this artwork: title, medium, size, then all
    /// category labels, joined by single spaces in that order.
    ///
    /// Search runs over the joined string, so a query may span a field
    /// boundary (end of title into start of medium).
    pub fn search_haystack(&self) -> String {
        let mut haystack = String::with_capacity(
            self.title.len() + self.medium.len() + self.size.len() + 16,
        );
        haystack.push_str(&self.title);
        haystack.push(' ');
        haystack.push_str(&self.medium);
        haystack.push(' ');
        haystack.push_str(&self.size);
        for label in &self.categories {
            haystack.push(' ');
            haystack.push_str(label);
        }
        haystack
    }
}
