use crate::error::DocketError;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Item-header pattern for manual marker extraction, where no vendor
/// profile supplies one. Accepts the common leading forms: "Line: 7",
/// "7.", "7 ".
pub const GENERIC_ITEM_HEADER: &str = r"^(?:Line:?\s*)?\d+[\s.]";

/// A vendor profile: how to recognize one vendor's quote documents and
/// how to cut their line items out of the page text.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VendorProfile {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    /// Case-insensitive substrings; any occurrence in the document
    /// text claims it for this vendor.
    pub detect_keywords: Vec<String>,
    /// The item region starts at the first line containing this
    /// substring (inclusive).
    pub start_marker: String,
    /// The item region ends at the first later line containing this
    /// substring (exclusive).
    pub end_marker: String,
    /// Regex marking a line that opens a new item segment.
    pub item_header_pattern: String,
    /// Field labels blanked out of segment text before tokenizing.
    #[serde(default)]
    pub strip_labels: Vec<String>,
}

impl VendorProfile {
    /// Profile for caller-supplied markers, bypassing detection.
    pub fn manual(start_marker: &str, end_marker: &str) -> Self {
        VendorProfile {
            name: "manual".to_string(),
            description: None,
            detect_keywords: Vec::new(),
            start_marker: start_marker.to_string(),
            end_marker: end_marker.to_string(),
            item_header_pattern: GENERIC_ITEM_HEADER.to_string(),
            strip_labels: Vec::new(),
        }
    }

    /// Compile the item header pattern.
    pub fn header_regex(&self) -> Result<Regex, DocketError> {
        Regex::new(&self.item_header_pattern).map_err(|e| {
            DocketError::ProfileInvalid(format!(
                "profile '{}' has invalid item_header_pattern: {}",
                self.name, e
            ))
        })
    }
}
