pub mod poppler;

use crate::error::DocketError;

/// Axis-aligned rectangle in PDF points, origin at the page's top-left.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BBox {
    pub x0: f32,
    pub y0: f32,
    pub x1: f32,
    pub y1: f32,
}

impl BBox {
    pub fn width(&self) -> f32 {
        self.x1 - self.x0
    }

    pub fn height(&self) -> f32 {
        self.y1 - self.y0
    }
}

/// Geometry of a single page as reported by the extraction backend.
#[derive(Debug, Clone, Copy)]
pub struct PageInfo {
    /// 1-based page ordinal.
    pub number: usize,
    /// Width in PDF points.
    pub width: f32,
    /// Height in PDF points.
    pub height: f32,
}

impl PageInfo {
    pub fn full_bbox(&self) -> BBox {
        BBox {
            x0: 0.0,
            y0: 0.0,
            x1: self.width,
            y1: self.height,
        }
    }
}

/// Trait for PDF text extraction backends.
pub trait PdfExtractor: Send + Sync {
    /// Open a document from raw PDF bytes, probing its page geometry.
    ///
    /// An unreadable or corrupt document fails here, before any text is
    /// extracted, so extraction is never partially applied.
    fn open(&self, pdf_bytes: &[u8]) -> Result<Box<dyn PdfDocument>, DocketError>;

    /// Name of this extraction backend (for diagnostics).
    fn backend_name(&self) -> &str;
}

/// An opened document from which page text can be pulled on demand.
pub trait PdfDocument: Send + Sync {
    /// Pages in document order.
    fn pages(&self) -> &[PageInfo];

    /// Extract the text of one page, optionally restricted to a crop
    /// region. An empty or whitespace-only crop yields an empty string,
    /// never an error.
    fn extract_text(&self, page: usize, crop: Option<BBox>) -> Result<String, DocketError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_bbox_covers_page() {
        let page = PageInfo {
            number: 1,
            width: 595.0,
            height: 842.0,
        };
        let bbox = page.full_bbox();
        assert_eq!(bbox.width(), 595.0);
        assert_eq!(bbox.height(), 842.0);
        assert_eq!(bbox.x0, 0.0);
    }
}
