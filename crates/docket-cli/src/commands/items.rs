use docket_core::extraction::poppler::PopplerExtractor;
use docket_core::vendors::schema::VendorProfile;
use docket_core::vendors::{self, builtin};
use docket_core::{ItemOptions, ManualMarkers};
use std::path::PathBuf;

use crate::output;

pub fn run(
    pdf_file: PathBuf,
    presets: Vec<String>,
    profile_files: Vec<PathBuf>,
    start_marker: Option<String>,
    end_marker: Option<String>,
    output_format: &str,
    output_file: Option<PathBuf>,
) -> Result<(), docket_core::error::DocketError> {
    // Default to every built-in profile if none were named. Presets
    // come first, so built-ins outrank custom files during detection.
    let mut profiles: Vec<VendorProfile> = Vec::new();
    if presets.is_empty() && profile_files.is_empty() {
        profiles = builtin::all_presets()?;
    } else {
        for preset in &presets {
            profiles.push(builtin::load_preset(preset)?);
        }
        for path in &profile_files {
            profiles.push(vendors::load_profile(path)?);
        }
    }
    tracing::debug!(profiles = profiles.len(), "vendor profiles loaded");

    let options = ItemOptions {
        markers: match (start_marker, end_marker) {
            (Some(start), Some(end)) => Some(ManualMarkers { start, end }),
            _ => None,
        },
    };

    let pdf_bytes = std::fs::read(&pdf_file)?;
    let extractor = PopplerExtractor::new();
    let result = docket_core::extract_items(&pdf_bytes, &extractor, &profiles, &options)?;

    match output_file {
        Some(path) => {
            // Always write JSON when saving to file
            let json = serde_json::to_string_pretty(&result)?;
            std::fs::write(&path, json)?;
            eprintln!(
                "Extracted {} item(s) for vendor '{}', written to {}",
                result.count(),
                result.vendor,
                path.display()
            );
        }
        None => match output_format {
            "json" => output::json::print_items(&result)?,
            _ => print!("{}", output::table::format_items(&result)),
        },
    }

    Ok(())
}
