use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Layout role of a text block within its page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BlockLabel {
    FullPage,
    LeftColumn,
    RightColumn,
}

impl fmt::Display for BlockLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BlockLabel::FullPage => write!(f, "Full Page"),
            BlockLabel::LeftColumn => write!(f, "As Found (Left)"),
            BlockLabel::RightColumn => write!(f, "As Left (Right)"),
        }
    }
}

/// Raw text extracted from one region of one page.
///
/// Produced by the page segmenter, consumed by the line normalizer.
#[derive(Debug, Clone)]
pub struct TextBlock {
    pub page: usize,
    pub label: BlockLabel,
    pub raw_text: String,
}

/// One cleaned block of page text, the raw-mode output record.
///
/// `content` is newline-joined with continuation lines already folded
/// into the numbered comment that owns them. For a split page the left
/// column precedes the right.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CleanedSection {
    pub page: usize,
    #[serde(rename = "type")]
    pub label: String,
    pub content: String,
}

/// A single parsed quote/report line item.
///
/// Fields that cannot be confidently extracted are left as None and
/// serialize as null; a bad segment never aborts the batch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    #[serde(rename = "line_item")]
    pub line_number: Option<u32>,
    pub part_id: Option<String>,
    pub description: String,
    pub qty: Option<i64>,
    pub price: Option<Decimal>,
}

/// Smart-mode output: the detected vendor and the items parsed from its
/// marker-bounded region.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemExtraction {
    pub vendor: String,
    pub items: Vec<LineItem>,
}

impl ItemExtraction {
    pub fn count(&self) -> usize {
        self.items.len()
    }
}
