use docket_core::vendors::{self, builtin};
use std::path::Path;

pub fn list() -> Result<(), docket_core::error::DocketError> {
    println!("Available vendor profiles:\n");
    for name in builtin::PRESETS {
        let profile = builtin::load_preset(name)?;
        println!(
            "  {:<8} region: '{}' .. '{}'",
            name, profile.start_marker, profile.end_marker
        );
        if let Some(ref desc) = profile.description {
            println!("           {}", desc);
        }
        println!();
    }
    Ok(())
}

pub fn explain(name: &str) -> Result<(), docket_core::error::DocketError> {
    let profile = builtin::load_preset(name)?;

    println!("{}\n", profile.name);

    if let Some(ref desc) = profile.description {
        println!("{}\n", desc);
    }

    println!("Detection keywords (case-insensitive substring, any match claims");
    println!("the document; profiles are tried in listed order):");
    for keyword in &profile.detect_keywords {
        println!("  - {}", keyword);
    }
    println!();

    println!("Item region:");
    println!(
        "  starts at the first line containing '{}' (that line included)",
        profile.start_marker
    );
    println!(
        "  ends at the next line containing '{}' (that line excluded)",
        profile.end_marker
    );
    println!("  a missing start marker means the document has no items;");
    println!("  a missing end marker extends the region to the last line");
    println!();

    println!("Item segmentation:");
    println!(
        "  a line matching /{}/ opens a new item and following",
        profile.item_header_pattern
    );
    println!("  non-matching lines extend it until the next match");

    if !profile.strip_labels.is_empty() {
        println!();
        println!("Field labels removed before value parsing:");
        for label in &profile.strip_labels {
            println!("  - {}", label);
        }
    }
    println!();

    Ok(())
}

pub fn schema() -> Result<(), docket_core::error::DocketError> {
    print!(
        r#"JSON Vendor Profile Schema
==========================

A vendor profile tells `docket items` how to recognize one vendor's
quote documents and how to cut their line items out of the page text.

Fields:
  name          (string, required)  Short identifier, reported in the
                                    output as the detected vendor
  description   (string, optional)  What kind of documents this profile
                                    is for. Shown by `docket vendors list`.
  detect_keywords
                (array, required)   Case-insensitive substrings. If any
                                    of them occurs anywhere in the
                                    document text, the profile claims the
                                    document. Profiles are tried in the
                                    order given on the command line.
  start_marker  (string, required)  The item region starts at the first
                                    line containing this substring
                                    (case-sensitive, line included).
                                    If it never occurs, the document has
                                    no items (not an error).
  end_marker    (string, required)  The region ends at the first LATER
                                    line containing this substring (line
                                    excluded). If it never occurs, the
                                    region runs to the end of the text.
  item_header_pattern
                (string, required)  Regex. A region line matching it
                                    opens a new line item; following
                                    non-matching lines belong to that
                                    item. Example: "^Line:?\\s*\\d+\\b"
  strip_labels  (array, optional)   Field labels (e.g. "Part ID:")
                                    blanked out of an item's text before
                                    quantity/price/part parsing, matched
                                    case-insensitively.

Example:
{{
  "name": "acme",
  "description": "ACME Industrial quotes, columnar layout",
  "detect_keywords": ["acme industrial"],
  "start_marker": "Item",
  "end_marker": "Total",
  "item_header_pattern": "^\\d+\\s",
  "strip_labels": []
}}

Within an item, the parser takes a leading number as the line number,
the first letters-and-digits token as the part id, the last two numeric
tokens as quantity and price, and everything else as the description.
Fields that cannot be extracted are left null.
"#
    );
    Ok(())
}

pub fn validate(file: &Path) -> Result<(), docket_core::error::DocketError> {
    let profile = vendors::load_profile(file)?;

    println!("Profile '{}' is valid.", profile.name);
    println!("  Keywords: {}", profile.detect_keywords.join(", "));
    println!(
        "  Region: '{}' .. '{}'",
        profile.start_marker, profile.end_marker
    );
    println!("  Item header pattern: {}", profile.item_header_pattern);

    // Check for potential issues (warnings, not errors)
    let mut warnings = Vec::new();
    if profile.start_marker == profile.end_marker {
        warnings.push(
            "start_marker equals end_marker; the region closes at its next occurrence".to_string(),
        );
    }
    for keyword in &profile.detect_keywords {
        if keyword.trim().len() < 4 {
            warnings.push(format!(
                "keyword '{}' is very short and may claim unrelated documents",
                keyword
            ));
        }
    }

    if !warnings.is_empty() {
        println!("\nWarnings:");
        for w in &warnings {
            println!("  - {}", w);
        }
    }

    Ok(())
}
