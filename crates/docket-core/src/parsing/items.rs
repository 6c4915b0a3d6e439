use crate::model::LineItem;
use crate::parsing::group::{group_by_header, Grouped};
use crate::parsing::values::{is_numeric_token, parse_price, parse_qty};
use regex::{Regex, RegexBuilder};
use std::sync::LazyLock;

/// Leading line-number forms on a segment's first line: "Line: 7",
/// "7.", "7 ". Digits immediately followed by a letter ("14782A") are
/// a part id, not a line number.
static LINE_NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:Line:?\s*)?(\d+)\b\.?\s*").unwrap());

/// Parse the lines of a marker-bounded region into line items.
///
/// Grouping has the same shape as comment reconstruction: a line
/// matching `header` opens an item segment and following non-matching
/// lines extend it. Lines ahead of the first header (a column header
/// row, say) belong to no item. If the region is non-empty but no line
/// matches at all, the whole region forms one segment, since the start
/// marker denotes the first record.
///
/// Field misses leave None; one malformed segment never aborts the
/// rest.
pub fn parse_items(region: &[&str], header: &Regex, strip_labels: &[String]) -> Vec<LineItem> {
    let kept: Vec<&str> = region
        .iter()
        .map(|l| l.trim())
        .filter(|l| !l.is_empty())
        .collect();
    if kept.is_empty() {
        return Vec::new();
    }

    let mut segments: Vec<(&str, Vec<&str>)> = group_by_header(&kept, |l| header.is_match(l))
        .into_iter()
        .filter_map(|grouped| match grouped {
            Grouped::Run {
                header,
                continuations,
            } => Some((header, continuations)),
            Grouped::Loose(_) => None,
        })
        .collect();

    if segments.is_empty() {
        segments.push((kept[0], kept[1..].to_vec()));
    }

    let label_patterns = compile_labels(strip_labels);

    segments
        .into_iter()
        .enumerate()
        .map(|(i, (first, rest))| build_item(i + 1, first, &rest, &label_patterns))
        .collect()
}

/// Extract the fields of one completed segment.
fn build_item(ordinal: usize, first_line: &str, rest: &[&str], labels: &[Regex]) -> LineItem {
    // Leading line number, falling back to the segment's 1-based
    // position in the region.
    let (line_number, first_rest) = match LINE_NUMBER.captures(first_line) {
        Some(caps) => {
            let number = caps.get(1).and_then(|m| m.as_str().parse().ok());
            let end = caps.get(0).map_or(0, |m| m.end());
            (number, &first_line[end..])
        }
        None => (None, first_line),
    };
    let line_number = line_number.or(Some(ordinal as u32));

    let mut text = first_rest.to_string();
    for line in rest {
        text.push(' ');
        text.push_str(line);
    }
    let text = remove_labels(&text, labels);

    let tokens: Vec<&str> = text.split_whitespace().collect();

    let part_idx = tokens.iter().position(|t| is_part_id(t));
    let part_id = part_idx.map(|i| tokens[i].to_string());

    // The last two numeric tokens: second-last is the quantity, last is
    // the price. Fragile when trailing description text embeds numbers;
    // kept as observed vendor behavior.
    let numeric_idx: Vec<usize> = tokens
        .iter()
        .enumerate()
        .filter(|(_, t)| is_numeric_token(t))
        .map(|(i, _)| i)
        .collect();
    let (qty_idx, price_idx) = match numeric_idx.len() {
        0 => (None, None),
        1 => (None, Some(numeric_idx[0])),
        n => (Some(numeric_idx[n - 2]), Some(numeric_idx[n - 1])),
    };
    let qty = qty_idx.and_then(|i| parse_qty(tokens[i]));
    let price = price_idx.and_then(|i| parse_price(tokens[i]));

    let description = tokens
        .iter()
        .enumerate()
        .filter(|(i, _)| Some(*i) != part_idx && Some(*i) != qty_idx && Some(*i) != price_idx)
        .map(|(_, t)| *t)
        .collect::<Vec<_>>()
        .join(" ");

    LineItem {
        line_number,
        part_id,
        description,
        qty,
        price,
    }
}

/// A part id: letters and digits (hyphens allowed), at least one of
/// each, at least three characters. "AB123", "R04-123", "14782A".
fn is_part_id(token: &str) -> bool {
    token.len() >= 3
        && token
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-')
        && token.chars().any(|c| c.is_ascii_alphabetic())
        && token.chars().any(|c| c.is_ascii_digit())
}

fn compile_labels(strip_labels: &[String]) -> Vec<Regex> {
    strip_labels
        .iter()
        .filter(|l| !l.trim().is_empty())
        .filter_map(|l| {
            RegexBuilder::new(&regex::escape(l))
                .case_insensitive(true)
                .build()
                .ok()
        })
        .collect()
}

/// Blank out vendor field labels such as "Part ID:" or "Quantity"
/// before tokenizing, so they reach neither the fields nor the
/// description.
fn remove_labels(text: &str, labels: &[Regex]) -> String {
    let mut out = text.to_string();
    for label in labels {
        out = label.replace_all(&out, " ").into_owned();
    }
    out
}
