use crate::parsing::group::{group_by_header, Grouped};
use regex::Regex;
use std::sync::LazyLock;

/// A comment header: one or more digits, an optional period, then
/// whitespace ("1. Inspected unit", "12 Found OK").
static COMMENT_HEADER: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\d+\.?\s").unwrap());

pub fn is_comment_header(line: &str) -> bool {
    COMMENT_HEADER.is_match(line)
}

/// Clean one raw text block.
///
/// Drops lines containing any ignore phrase (case-insensitive substring
/// match) and blank lines, trims the survivors, then folds continuation
/// lines into the numbered comment that owns them: a header line starts
/// a comment, following non-header lines are appended with single
/// spaces, and a non-header line with no comment open passes through
/// verbatim as its own record. Records come out newline-joined in
/// encounter order.
///
/// Running the output back through with the same phrases leaves it
/// unchanged: merged continuations no longer exist as separate lines.
pub fn normalize(raw_text: &str, ignore_phrases: &[String]) -> String {
    let kept = filter_lines(raw_text, ignore_phrases);

    let records: Vec<String> = group_by_header(&kept, is_comment_header)
        .into_iter()
        .map(|grouped| match grouped {
            Grouped::Loose(line) => line.to_string(),
            Grouped::Run {
                header,
                continuations,
            } => {
                let mut record = header.to_string();
                for cont in continuations {
                    record.push(' ');
                    record.push_str(cont);
                }
                record
            }
        })
        .collect();

    records.join("\n")
}

/// Filtering step of `normalize`: phrase check on the raw line, then
/// trim, then drop blanks.
fn filter_lines<'a>(raw_text: &'a str, ignore_phrases: &[String]) -> Vec<&'a str> {
    let lowered: Vec<String> = ignore_phrases
        .iter()
        .filter(|p| !p.is_empty())
        .map(|p| p.to_lowercase())
        .collect();

    raw_text
        .lines()
        .filter(|line| {
            let line_lower = line.to_lowercase();
            !lowered.iter().any(|p| line_lower.contains(p.as_str()))
        })
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn phrases(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_continuation_folds_into_comment() {
        let raw = "1. Inspection done. The unit\nwas unable to be tested.\n2. Found OK.";
        let cleaned = normalize(raw, &[]);
        assert_eq!(
            cleaned,
            "1. Inspection done. The unit was unable to be tested.\n2. Found OK."
        );
    }

    #[test]
    fn test_ignore_phrase_drops_line() {
        let raw = "Accurate Industries — Page 3";
        let cleaned = normalize(raw, &phrases(&["Accurate Industries", "Page"]));
        assert_eq!(cleaned, "");
    }

    #[test]
    fn test_ignore_phrase_is_case_insensitive_substring() {
        let raw = "sent to ADMIN@ACCURATEINDUSTRIES.COM.AU today\n1. Unit ok.";
        let cleaned = normalize(raw, &phrases(&["admin@accurateindustries.com.au"]));
        assert_eq!(cleaned, "1. Unit ok.");
    }

    #[test]
    fn test_blank_lines_dropped_and_survivors_trimmed() {
        let raw = "   1. Checked belt tension   \n\n   \nok after adjustment  ";
        let cleaned = normalize(raw, &[]);
        assert_eq!(cleaned, "1. Checked belt tension ok after adjustment");
    }

    #[test]
    fn test_passthrough_line_keeps_own_record() {
        let raw = "Technician: J Smith\n1. Greased bearings.\nre-torqued bolts\nSite: Plant 2";
        let cleaned = normalize(raw, &[]);
        // The trailing non-header line belongs to the open comment; the
        // leading one precedes any comment and stays alone.
        assert_eq!(
            cleaned,
            "Technician: J Smith\n1. Greased bearings. re-torqued bolts Site: Plant 2"
        );
    }

    #[test]
    fn test_leading_orphan_is_never_merged_forward() {
        let raw = "loose note\nanother note";
        let cleaned = normalize(raw, &[]);
        assert_eq!(cleaned, "loose note\nanother note");
    }

    #[test]
    fn test_header_without_period() {
        let raw = "2 Found corrosion on frame\nrecoated on site";
        let cleaned = normalize(raw, &[]);
        assert_eq!(cleaned, "2 Found corrosion on frame recoated on site");
    }

    #[test]
    fn test_digits_without_following_space_is_not_a_header() {
        // "12.5mm" must not open a comment
        let raw = "1. Shaft diameter\n12.5mm measured";
        let cleaned = normalize(raw, &[]);
        assert_eq!(cleaned, "1. Shaft diameter 12.5mm measured");
    }

    #[test]
    fn test_idempotent_on_own_output() {
        let raw = "1. Inspection done. The unit\nwas unable to be tested.\n2. Found OK.";
        let once = normalize(raw, &[]);
        let twice = normalize(&once, &[]);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_every_kept_line_survives_somewhere() {
        let raw = "preamble\n1. First comment\ncontinues here\n2. Second\nPage 4 of 9";
        let ignore = phrases(&["Page"]);
        let cleaned = normalize(raw, &ignore);
        for kept in ["preamble", "1. First comment", "continues here", "2. Second"] {
            assert!(cleaned.contains(kept), "lost line: {kept}");
        }
        assert!(!cleaned.contains("Page 4"));
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(normalize("", &[]), "");
        assert_eq!(normalize("\n\n", &[]), "");
    }
}
