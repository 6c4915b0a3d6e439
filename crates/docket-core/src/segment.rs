use crate::config::PageLayout;
use crate::error::DocketError;
use crate::extraction::{BBox, PageInfo, PdfDocument};
use crate::model::{BlockLabel, TextBlock};

/// Split one page into labeled raw text blocks according to its layout.
///
/// A full page yields a single "Full Page" block. A two-column page
/// yields the left and right crops as independent blocks, left first,
/// labeled "As Found (Left)" and "As Left (Right)". The crops share the
/// vertical edge at `width * ratio`; each is extracted on its own with
/// no shared state.
pub fn segment(
    doc: &dyn PdfDocument,
    page: &PageInfo,
    layout: PageLayout,
) -> Result<Vec<TextBlock>, DocketError> {
    match layout {
        PageLayout::FullPage => {
            let raw_text = doc.extract_text(page.number, None)?;
            Ok(vec![TextBlock {
                page: page.number,
                label: BlockLabel::FullPage,
                raw_text,
            }])
        }
        PageLayout::TwoColumn { ratio } => {
            let (left, right) = column_bboxes(page, ratio);
            let left_text = doc.extract_text(page.number, Some(left))?;
            let right_text = doc.extract_text(page.number, Some(right))?;
            Ok(vec![
                TextBlock {
                    page: page.number,
                    label: BlockLabel::LeftColumn,
                    raw_text: left_text,
                },
                TextBlock {
                    page: page.number,
                    label: BlockLabel::RightColumn,
                    raw_text: right_text,
                },
            ])
        }
    }
}

/// Left and right column rectangles sharing the split edge.
fn column_bboxes(page: &PageInfo, ratio: f32) -> (BBox, BBox) {
    let split_x = page.width * ratio;
    (
        BBox {
            x0: 0.0,
            y0: 0.0,
            x1: split_x,
            y1: page.height,
        },
        BBox {
            x0: split_x,
            y0: 0.0,
            x1: page.width,
            y1: page.height,
        },
    )
}
