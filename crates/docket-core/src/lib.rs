pub mod config;
pub mod error;
pub mod extraction;
pub mod model;
pub mod parsing;
pub mod segment;
pub mod vendors;

use config::ExtractConfig;
use error::DocketError;
use extraction::PdfExtractor;
use model::{CleanedSection, ItemExtraction};
use vendors::schema::VendorProfile;

/// Explicit region markers, overriding vendor detection.
#[derive(Debug, Clone)]
pub struct ManualMarkers {
    pub start: String,
    pub end: String,
}

/// Options for item extraction.
#[derive(Debug, Clone, Default)]
pub struct ItemOptions {
    pub markers: Option<ManualMarkers>,
}

/// Main API entry point for page extraction: every page of the document
/// as cleaned text sections.
///
/// Pages configured with a two-column layout yield two sections, left
/// column first; all others yield one. Each section's text is filtered
/// against the ignore phrases and has numbered-comment continuation
/// lines folded in.
pub fn extract_pages(
    pdf_bytes: &[u8],
    extractor: &dyn PdfExtractor,
    config: &ExtractConfig,
) -> Result<Vec<CleanedSection>, DocketError> {
    config::validate_config(config)?;

    let doc = extractor.open(pdf_bytes)?;
    tracing::debug!(
        backend = extractor.backend_name(),
        pages = doc.pages().len(),
        "extracting cleaned page text"
    );

    let mut sections = Vec::new();
    for page in doc.pages() {
        let layout = config.layout.layout_for(page.number);
        for block in segment::segment(doc.as_ref(), page, layout)? {
            let content = parsing::normalize(&block.raw_text, &config.ignore_phrases);
            sections.push(CleanedSection {
                page: block.page,
                label: block.label.to_string(),
                content,
            });
        }
    }

    Ok(sections)
}

/// Main API entry point for item extraction: quote line items from a
/// vendor's marker-bounded region.
///
/// With no explicit markers the vendor is detected from the document
/// text against `profiles`, in order; no match is an error. Explicit
/// markers skip detection and report the vendor as "manual". A document
/// where the start marker never occurs yields zero items, not an error.
pub fn extract_items(
    pdf_bytes: &[u8],
    extractor: &dyn PdfExtractor,
    profiles: &[VendorProfile],
    options: &ItemOptions,
) -> Result<ItemExtraction, DocketError> {
    let doc = extractor.open(pdf_bytes)?;

    // Whole document, unfiltered; detection and markers see every line
    let mut full_text = String::new();
    for page in doc.pages() {
        let text = doc.extract_text(page.number, None)?;
        if !full_text.is_empty() {
            full_text.push('\n');
        }
        full_text.push_str(&text);
    }

    let manual;
    let profile = match &options.markers {
        Some(markers) => {
            manual = VendorProfile::manual(&markers.start, &markers.end);
            &manual
        }
        None => vendors::detect(&full_text, profiles).ok_or(DocketError::UnknownVendor)?,
    };
    tracing::debug!(vendor = %profile.name, "extracting line items");

    let header = profile.header_regex()?;
    let lines: Vec<&str> = full_text.lines().collect();
    let region = parsing::extract_region(&lines, &profile.start_marker, &profile.end_marker);
    let items = parsing::parse_items(region, &header, &profile.strip_labels);

    Ok(ItemExtraction {
        vendor: profile.name.clone(),
        items,
    })
}
