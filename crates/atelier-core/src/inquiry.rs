//! Derived purchase/inquiry action for the open detail view.
//!
//! A pure function of `(recipient, title)`: computed on demand while the
//! detail view is open, never stored.

use atelier_catalog::Artwork;
use serde::{Deserialize, Serialize};

/// Recipient and subject configuration for artwork inquiries.
///
/// The recipient address is external configuration, not a literal baked into
/// the core.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InquiryConfig {
    /// Email address inquiries are sent to.
    pub recipient: String,
    /// Fixed prefix the artwork title is appended to.
    #[serde(default = "default_subject_prefix")]
    pub subject_prefix: String,
}

fn default_subject_prefix() -> String {
    "Artwork inquiry: ".to_string()
}

impl InquiryConfig {
    /// Configuration with the default subject prefix.
    pub fn new(recipient: &str) -> Self {
        Self {
            recipient: recipient.to_string(),
            subject_prefix: default_subject_prefix(),
        }
    }
}

/// Build the pre-filled mailto link for an artwork inquiry.
///
/// The subject is `subject_prefix + title`, percent-encoded for transport.
pub fn inquiry_link(config: &InquiryConfig, artwork: &Artwork) -> String {
    inquiry_link_for_title(config, &artwork.title)
}

/// Same derivation from a bare title, for callers that flattened the artwork.
pub(crate) fn inquiry_link_for_title(config: &InquiryConfig, title: &str) -> String {
    let subject = format!("{}{}", config.subject_prefix, title);
    format!(
        "mailto:{}?subject={}",
        config.recipient,
        urlencoding::encode(&subject)
    )
}
