//! Catalog filtering for the gallery view.
//!
//! Reduces the full artwork sequence to the visible subset under the current
//! `(active category, search text)` pair. Filtering is a pure function:
//! order-preserving, recomputed on every change, independent of the detail
//! selection, and cheap enough to run per keystroke as a linear scan.

use atelier_catalog::{Artwork, Catalog, CategoryFilter};
use serde::{Deserialize, Serialize};

/// The transient filter state for the gallery view.
///
/// Defaults to no restriction: the `All` sentinel and an empty query.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ViewFilter {
    pub active_category: CategoryFilter,
    pub search_text: String,
}

impl ViewFilter {
    /// A filter that passes the whole catalog through.
    pub fn unrestricted() -> Self {
        Self::default()
    }

    /// Whether this filter matches everything.
    pub fn is_empty(&self) -> bool {
        self.active_category == CategoryFilter::All && normalize_query(&self.search_text).is_empty()
    }

    /// Whether the artwork passes both the category and search constraints.
    pub fn matches(&self, artwork: &Artwork) -> bool {
        self.active_category.matches(artwork) && search_matches(&self.search_text, artwork)
    }
}

/// Normalize a query: trim surrounding whitespace, then lowercase.
///
/// Codepoint-wise case folding; no Unicode/diacritic normalization. Both
/// query and haystack go through the same lowercasing, so matching is
/// deterministic and case-insensitive.
pub fn normalize_query(query: &str) -> String {
    query.trim().to_lowercase()
}

/// Whether the query matches the artwork's joined searchable text.
///
/// An empty query (after trimming) vacuously matches; search is opt-in.
/// Matching is a literal substring test over the space-joined
/// title/medium/size/categories haystack, so a query may legitimately span
/// a field boundary. No tokenization, no fuzzy matching.
fn search_matches(query: &str, artwork: &Artwork) -> bool {
    let needle = normalize_query(query);
    if needle.is_empty() {
        return true;
    }
    artwork.search_haystack().to_lowercase().contains(&needle)
}

/// Filter the catalog, preserving its authored order.
///
/// An empty result is a normal terminal state, not an error; the
/// presentation layer renders "no results" for it.
pub fn filter_artworks<'a>(catalog: &'a Catalog, filter: &ViewFilter) -> Vec<&'a Artwork> {
    catalog
        .artworks()
        .iter()
        .filter(|artwork| filter.matches(artwork))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn artwork(id: &str, title: &str, labels: &[&str]) -> Artwork {
        Artwork {
            medium: "Acrylic on canvas".to_string(),
            size: "60×80 cm".to_string(),
            categories: labels.iter().map(|l| l.to_string()).collect(),
            ..Artwork::new(id, title)
        }
    }

    fn catalog() -> Catalog {
        Catalog::new(
            vec![
                artwork("w1", "Work 1", &["Portrait"]),
                artwork("w2", "Work 2", &["Cubist/Abstract"]),
                artwork("w3", "Work 3", &["Cubist/Abstract", "Portrait"]),
            ],
            vec![
                "All".to_string(),
                "Portrait".to_string(),
                "Cubist/Abstract".to_string(),
            ],
        )
        .unwrap()
    }

    #[test]
    fn unrestricted_filter_is_identity() {
        let catalog = catalog();
        let visible = filter_artworks(&catalog, &ViewFilter::unrestricted());
        assert_eq!(visible.len(), 3);
    }

    #[test]
    fn category_constraint_uses_membership() {
        let catalog = catalog();
        let filter = ViewFilter {
            active_category: CategoryFilter::from_label("Portrait"),
            ..ViewFilter::default()
        };
        let ids: Vec<&str> = filter_artworks(&catalog, &filter)
            .iter()
            .map(|a| a.id.as_str())
            .collect();
        assert_eq!(ids, vec!["w1", "w3"]);
    }

    #[test]
    fn search_is_case_insensitive() {
        let catalog = catalog();
        for query in ["work 3", "WORK 3", "Work 3"] {
            let filter = ViewFilter {
                search_text: query.to_string(),
                ..ViewFilter::default()
            };
            let visible = filter_artworks(&catalog, &filter);
            assert_eq!(visible.len(), 1, "query {:?}", query);
            assert_eq!(visible[0].id, "w3");
        }
    }

    #[test]
    fn search_trims_surrounding_whitespace() {
        let catalog = catalog();
        let filter = ViewFilter {
            search_text: "  work 2  ".to_string(),
            ..ViewFilter::default()
        };
        assert_eq!(filter_artworks(&catalog, &filter).len(), 1);
    }

    #[test]
    fn blank_search_matches_everything() {
        let catalog = catalog();
        let filter = ViewFilter {
            search_text: "   ".to_string(),
            ..ViewFilter::default()
        };
        assert_eq!(filter_artworks(&catalog, &filter).len(), 3);
    }

    #[test]
    fn query_may_span_field_boundary() {
        // "1 acrylic" crosses from the end of the title into the medium;
        // the haystack is one joined string, so it matches.
        let catalog = catalog();
        let filter = ViewFilter {
            search_text: "1 Acrylic".to_string(),
            ..ViewFilter::default()
        };
        let visible = filter_artworks(&catalog, &filter);
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].id, "w1");
    }

    #[test]
    fn search_covers_category_labels() {
        let catalog = catalog();
        let filter = ViewFilter {
            search_text: "cubist".to_string(),
            ..ViewFilter::default()
        };
        assert_eq!(filter_artworks(&catalog, &filter).len(), 2);
    }

    #[test]
    fn no_match_yields_empty_result() {
        let catalog = catalog();
        let filter = ViewFilter {
            search_text: "xyz".to_string(),
            ..ViewFilter::default()
        };
        assert!(filter_artworks(&catalog, &filter).is_empty());
    }

    #[test]
    fn constraints_combine_with_and() {
        let catalog = catalog();
        let filter = ViewFilter {
            active_category: CategoryFilter::from_label("Cubist/Abstract"),
            search_text: "work 3".to_string(),
        };
        let visible = filter_artworks(&catalog, &filter);
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].id, "w3");
    }

    #[test]
    fn is_empty_accounts_for_whitespace_query() {
        assert!(ViewFilter::unrestricted().is_empty());
        assert!(ViewFilter {
            search_text: "  ".to_string(),
            ..ViewFilter::default()
        }
        .is_empty());
        assert!(!ViewFilter {
            active_category: CategoryFilter::from_label("Portrait"),
            ..ViewFilter::default()
        }
        .is_empty());
    }

    #[test]
    fn normalize_query_trims_and_lowercases() {
        assert_eq!(normalize_query("  Cubist/ABSTRACT "), "cubist/abstract");
        assert_eq!(normalize_query(""), "");
    }
}
