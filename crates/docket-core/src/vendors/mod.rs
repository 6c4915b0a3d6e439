pub mod builtin;
pub mod schema;

use crate::error::DocketError;
use schema::VendorProfile;
use std::path::Path;

/// Load a vendor profile from a JSON file.
pub fn load_profile(path: &Path) -> Result<VendorProfile, DocketError> {
    let content = std::fs::read_to_string(path).map_err(|e| DocketError::ProfileLoad {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    parse_profile(&content, path)
}

/// Parse a vendor profile from a JSON string.
pub fn parse_profile(json: &str, source: &Path) -> Result<VendorProfile, DocketError> {
    let profile: VendorProfile = serde_json::from_str(json).map_err(|e| DocketError::ProfileLoad {
        path: source.to_path_buf(),
        reason: e.to_string(),
    })?;
    validate_profile(&profile)?;
    Ok(profile)
}

/// Parse a vendor profile from a JSON string (no file path context).
pub fn parse_profile_str(json: &str) -> Result<VendorProfile, DocketError> {
    let profile: VendorProfile = serde_json::from_str(json).map_err(DocketError::Json)?;
    validate_profile(&profile)?;
    Ok(profile)
}

/// Validate that a vendor profile is well-formed.
pub fn validate_profile(profile: &VendorProfile) -> Result<(), DocketError> {
    if profile.name.is_empty() {
        return Err(DocketError::ProfileInvalid(
            "profile name must not be empty".into(),
        ));
    }

    if !profile.detect_keywords.iter().any(|k| !k.trim().is_empty()) {
        return Err(DocketError::ProfileInvalid(format!(
            "profile '{}' has no detection keywords",
            profile.name
        )));
    }

    if profile.start_marker.is_empty() {
        return Err(DocketError::ProfileInvalid(format!(
            "profile '{}' has an empty start_marker",
            profile.name
        )));
    }

    if profile.end_marker.is_empty() {
        return Err(DocketError::ProfileInvalid(format!(
            "profile '{}' has an empty end_marker",
            profile.name
        )));
    }

    profile.header_regex()?;

    Ok(())
}

/// Pick the vendor profile for a document.
///
/// Profiles are tried in the order given; the first whose keywords
/// occur anywhere in the text (case-insensitive) wins, so the caller's
/// ordering decides ties.
pub fn detect<'a>(full_text: &str, profiles: &'a [VendorProfile]) -> Option<&'a VendorProfile> {
    let haystack = full_text.to_lowercase();
    for profile in profiles {
        let hit = profile
            .detect_keywords
            .iter()
            .filter(|k| !k.trim().is_empty())
            .any(|k| haystack.contains(&k.to_lowercase()));
        if hit {
            tracing::debug!(vendor = %profile.name, "matched vendor profile");
            return Some(profile);
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile(name: &str, keywords: &[&str]) -> VendorProfile {
        VendorProfile {
            name: name.to_string(),
            description: None,
            detect_keywords: keywords.iter().map(|k| k.to_string()).collect(),
            start_marker: "Start".to_string(),
            end_marker: "End".to_string(),
            item_header_pattern: r"^\d+\s".to_string(),
            strip_labels: Vec::new(),
        }
    }

    #[test]
    fn test_parse_valid_profile() {
        let json = r#"{
            "name": "acme",
            "detect_keywords": ["acme industrial"],
            "start_marker": "Item",
            "end_marker": "Total",
            "item_header_pattern": "^\\d+\\s"
        }"#;
        let p = parse_profile_str(json).unwrap();
        assert_eq!(p.name, "acme");
        assert_eq!(p.detect_keywords, vec!["acme industrial"]);
        assert!(p.strip_labels.is_empty());
    }

    #[test]
    fn test_empty_name_rejected() {
        let json = r#"{
            "name": "",
            "detect_keywords": ["x"],
            "start_marker": "Item",
            "end_marker": "Total",
            "item_header_pattern": "^\\d"
        }"#;
        assert!(parse_profile_str(json).is_err());
    }

    #[test]
    fn test_no_keywords_rejected() {
        let json = r#"{
            "name": "acme",
            "detect_keywords": ["  "],
            "start_marker": "Item",
            "end_marker": "Total",
            "item_header_pattern": "^\\d"
        }"#;
        assert!(parse_profile_str(json).is_err());
    }

    #[test]
    fn test_empty_marker_rejected() {
        let json = r#"{
            "name": "acme",
            "detect_keywords": ["acme"],
            "start_marker": "",
            "end_marker": "Total",
            "item_header_pattern": "^\\d"
        }"#;
        assert!(parse_profile_str(json).is_err());
    }

    #[test]
    fn test_bad_header_pattern_rejected() {
        let json = r#"{
            "name": "acme",
            "detect_keywords": ["acme"],
            "start_marker": "Item",
            "end_marker": "Total",
            "item_header_pattern": "[unclosed"
        }"#;
        assert!(parse_profile_str(json).is_err());
    }

    #[test]
    fn test_detect_is_case_insensitive() {
        let profiles = vec![profile("acme", &["Acme Industrial"])];
        let found = detect("Quote from ACME INDUSTRIAL Pty Ltd", &profiles);
        assert_eq!(found.map(|p| p.name.as_str()), Some("acme"));
    }

    #[test]
    fn test_detect_first_profile_wins() {
        // Both match; order decides.
        let profiles = vec![profile("first", &["supply"]), profile("second", &["supply"])];
        let found = detect("Industrial Supply Co", &profiles);
        assert_eq!(found.map(|p| p.name.as_str()), Some("first"));
    }

    #[test]
    fn test_detect_any_keyword_suffices() {
        let profiles = vec![profile("acme", &["acme engineering", "acme industrial"])];
        let found = detect("ACME Industrial quote 123", &profiles);
        assert_eq!(found.map(|p| p.name.as_str()), Some("acme"));
    }

    #[test]
    fn test_detect_no_match_returns_none() {
        let profiles = vec![profile("acme", &["acme"])];
        assert!(detect("Generic Hardware Pty Ltd", &profiles).is_none());
    }

    #[test]
    fn test_manual_profile_compiles() {
        let p = VendorProfile::manual("Line: 1", "Total");
        assert_eq!(p.name, "manual");
        assert!(p.detect_keywords.is_empty());
        let re = p.header_regex().unwrap();
        assert!(re.is_match("Line: 1 AB123 Widget"));
        assert!(re.is_match("3. something"));
        assert!(!re.is_match("Widget 3"));
    }
}
