//! The static portfolio catalog.

use crate::artwork::Artwork;
use crate::category::ALL_CATEGORY;
use crate::error::CatalogError;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// The fixed, ordered collection of artworks and authored category labels.
///
/// Construction validates the configuration invariants (unique ids,
/// non-empty category sets, labels drawn from the authored list); a
/// `Catalog` value is therefore always well formed. Order is authored and
/// stable for the whole session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "CatalogDocument", into = "CatalogDocument")]
pub struct Catalog {
    artworks: Vec<Artwork>,
    categories: Vec<String>,
}

/// On-disk shape of the catalog document.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct CatalogDocument {
    artworks: Vec<Artwork>,
    categories: Vec<String>,
}

impl TryFrom<CatalogDocument> for Catalog {
    type Error = CatalogError;

    fn try_from(doc: CatalogDocument) -> Result<Self, Self::Error> {
        Catalog::new(doc.artworks, doc.categories)
    }
}

impl From<Catalog> for CatalogDocument {
    fn from(catalog: Catalog) -> Self {
        Self {
            artworks: catalog.artworks,
            categories: catalog.categories,
        }
    }
}

impl Catalog {
    /// Build a catalog from authored data, validating it.
    pub fn new(artworks: Vec<Artwork>, categories: Vec<String>) -> Result<Self, CatalogError> {
        let catalog = Self { artworks, categories };
        catalog.validate()?;
        Ok(catalog)
    }

    /// Parse and validate a catalog JSON document.
    pub fn from_json(input: &str) -> Result<Self, CatalogError> {
        let doc: CatalogDocument = serde_json::from_str(input)?;
        Self::try_from(doc)
    }

    /// Serialize the catalog back to a JSON document.
    pub fn to_json(&self) -> Result<String, CatalogError> {
        serde_json::to_string_pretty(self).map_err(CatalogError::from)
    }

    /// The ordered artwork sequence.
    pub fn artworks(&self) -> &[Artwork] {
        &self.artworks
    }

    /// The authored category labels, sentinel first.
    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    /// Look up an artwork by its authored id.
    pub fn artwork(&self, id: &str) -> Option<&Artwork> {
        self.artworks.iter().find(|a| a.id == id)
    }

    /// Whether an artwork with this id exists.
    pub fn contains(&self, id: &str) -> bool {
        self.artwork(id).is_some()
    }

    pub fn len(&self) -> usize {
        self.artworks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.artworks.is_empty()
    }

    /// Check the configuration invariants.
    ///
    /// The authored list may carry labels no artwork uses yet; the converse,
    /// an artwork label missing from the list, is an error.
    fn validate(&self) -> Result<(), CatalogError> {
        match self.categories.first() {
            Some(first) if first == ALL_CATEGORY => {}
            _ => return Err(CatalogError::MissingSentinel),
        }

        let mut labels = HashSet::new();
        for label in &self.categories {
            if !labels.insert(label.as_str()) {
                return Err(CatalogError::DuplicateCategory(label.clone()));
            }
        }

        let mut ids = HashSet::new();
        for artwork in &self.artworks {
            if !ids.insert(artwork.id.as_str()) {
                return Err(CatalogError::DuplicateId(artwork.id.clone()));
            }
            if artwork.title.is_empty() {
                return Err(CatalogError::EmptyTitle(artwork.id.clone()));
            }
            if artwork.categories.is_empty() {
                return Err(CatalogError::EmptyCategories(artwork.id.clone()));
            }
            for label in &artwork.categories {
                if label == ALL_CATEGORY {
                    return Err(CatalogError::ReservedSentinel(artwork.id.clone()));
                }
                if !labels.contains(label.as_str()) {
                    return Err(CatalogError::UnknownCategory(
                        artwork.id.clone(),
                        label.clone(),
                    ));
                }
            }
        }

        Ok(())
    }
}
