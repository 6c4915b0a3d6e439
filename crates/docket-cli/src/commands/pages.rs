use docket_core::config::{self, ExtractConfig, LayoutRules};
use docket_core::extraction::poppler::PopplerExtractor;
use std::path::PathBuf;

use crate::output;

pub fn run(
    pdf_file: PathBuf,
    config_file: Option<PathBuf>,
    ignore: Vec<String>,
    split_page: Option<usize>,
    split_ratio: Option<f32>,
    output_format: &str,
    output_file: Option<PathBuf>,
) -> Result<(), docket_core::error::DocketError> {
    let mut config = match config_file {
        Some(ref path) => {
            tracing::debug!(path = %path.display(), "loading extraction config");
            config::load_config(path)?
        }
        None => ExtractConfig::default(),
    };

    // Command-line flags override whatever the config carried
    if !ignore.is_empty() {
        config.ignore_phrases = ignore;
    }
    if let Some(page) = split_page {
        config.layout = LayoutRules::single_split(page, split_ratio.unwrap_or(0.5));
    }

    let pdf_bytes = std::fs::read(&pdf_file)?;
    let extractor = PopplerExtractor::new();
    let sections = docket_core::extract_pages(&pdf_bytes, &extractor, &config)?;

    match output_file {
        Some(path) => {
            // Always write JSON when saving to file
            let json = serde_json::to_string_pretty(&sections)?;
            std::fs::write(&path, json)?;
            eprintln!(
                "Extracted {} section(s), written to {}",
                sections.len(),
                path.display()
            );
        }
        None => match output_format {
            "json" => output::json::print_sections(&sections)?,
            _ => print!("{}", output::table::format_sections(&sections)),
        },
    }

    Ok(())
}
