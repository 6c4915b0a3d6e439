use crate::error::DocketError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

/// How the segmenter should treat one page.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PageLayout {
    FullPage,
    /// Split into left/right columns at `width * ratio`.
    TwoColumn { ratio: f32 },
}

/// Map of page ordinal (1-based) to layout. Pages without an entry are
/// extracted as a single full-page block.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LayoutRules {
    #[serde(default)]
    pub pages: BTreeMap<usize, PageLayout>,
}

impl LayoutRules {
    /// Rules with a single two-column page, the common report shape.
    pub fn single_split(page: usize, ratio: f32) -> Self {
        let mut pages = BTreeMap::new();
        pages.insert(page, PageLayout::TwoColumn { ratio });
        LayoutRules { pages }
    }

    pub fn layout_for(&self, page: usize) -> PageLayout {
        self.pages
            .get(&page)
            .copied()
            .unwrap_or(PageLayout::FullPage)
    }
}

/// Configuration for a raw-mode extraction run.
///
/// Always passed explicitly; there is no global default shared between
/// calls, so concurrent runs with different configurations cannot
/// interfere. `Default` reproduces the standard report deployment:
/// boilerplate header/footer phrases ignored, page 3 split down the
/// middle into as-found / as-left columns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtractConfig {
    #[serde(default)]
    pub ignore_phrases: Vec<String>,
    #[serde(default)]
    pub layout: LayoutRules,
}

impl Default for ExtractConfig {
    fn default() -> Self {
        ExtractConfig {
            ignore_phrases: [
                "ABN 99 657 158 524",
                "6/23 Ashtan Pl",
                "admin@accurateindustries.com.au",
                "www.accurateindustries.com.au",
                "1300 101 666",
                "Accurate Industries",
                "Page",
            ]
            .iter()
            .map(|s| s.to_string())
            .collect(),
            layout: LayoutRules::single_split(3, 0.5),
        }
    }
}

/// Load an extraction config from a JSON file.
pub fn load_config(path: &Path) -> Result<ExtractConfig, DocketError> {
    let content = std::fs::read_to_string(path)?;
    let config: ExtractConfig = serde_json::from_str(&content)?;
    validate_config(&config)?;
    Ok(config)
}

/// Validate that a config is well-formed.
pub fn validate_config(config: &ExtractConfig) -> Result<(), DocketError> {
    for (&page, layout) in &config.layout.pages {
        if page == 0 {
            return Err(DocketError::ConfigInvalid(
                "page ordinals are 1-based; 0 is not a valid page".into(),
            ));
        }
        if let PageLayout::TwoColumn { ratio } = layout {
            if !(*ratio > 0.0 && *ratio < 1.0) {
                return Err(DocketError::ConfigInvalid(format!(
                    "split ratio for page {} must be between 0 and 1 (exclusive), got {}",
                    page, ratio
                )));
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_splits_page_3() {
        let config = ExtractConfig::default();
        assert_eq!(
            config.layout.layout_for(3),
            PageLayout::TwoColumn { ratio: 0.5 }
        );
        assert_eq!(config.layout.layout_for(1), PageLayout::FullPage);
        assert_eq!(config.layout.layout_for(4), PageLayout::FullPage);
    }

    #[test]
    fn test_default_ignores_company_boilerplate() {
        let config = ExtractConfig::default();
        assert!(config
            .ignore_phrases
            .iter()
            .any(|p| p == "Accurate Industries"));
        assert!(config.ignore_phrases.iter().any(|p| p == "Page"));
    }

    #[test]
    fn test_parse_config_json() {
        let json = r#"{
            "ignore_phrases": ["Confidential"],
            "layout": { "pages": { "2": { "two_column": { "ratio": 0.4 } } } }
        }"#;
        let config: ExtractConfig = serde_json::from_str(json).unwrap();
        validate_config(&config).unwrap();
        assert_eq!(config.ignore_phrases, vec!["Confidential"]);
        assert_eq!(
            config.layout.layout_for(2),
            PageLayout::TwoColumn { ratio: 0.4 }
        );
    }

    #[test]
    fn test_empty_config_is_valid() {
        let config: ExtractConfig = serde_json::from_str("{}").unwrap();
        validate_config(&config).unwrap();
        assert!(config.ignore_phrases.is_empty());
        assert_eq!(config.layout.layout_for(3), PageLayout::FullPage);
    }

    #[test]
    fn test_ratio_out_of_range_rejected() {
        for ratio in [0.0, 1.0, -0.5, 1.5] {
            let config = ExtractConfig {
                ignore_phrases: vec![],
                layout: LayoutRules::single_split(3, ratio),
            };
            assert!(validate_config(&config).is_err(), "ratio {ratio}");
        }
    }

    #[test]
    fn test_page_zero_rejected() {
        let config = ExtractConfig {
            ignore_phrases: vec![],
            layout: LayoutRules::single_split(0, 0.5),
        };
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_config_roundtrip() {
        let config = ExtractConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        let back: ExtractConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
    }
}
