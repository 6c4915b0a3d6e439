use docket_core::error::DocketError;
use docket_core::model::{CleanedSection, ItemExtraction};

pub fn print_sections(sections: &[CleanedSection]) -> Result<(), DocketError> {
    let json = serde_json::to_string_pretty(sections)?;
    println!("{json}");
    Ok(())
}

pub fn print_items(result: &ItemExtraction) -> Result<(), DocketError> {
    let json = serde_json::to_string_pretty(result)?;
    println!("{json}");
    Ok(())
}
