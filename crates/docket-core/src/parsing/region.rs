/// Isolate the lines between a start and an end marker.
///
/// The region begins at the first line containing `start_marker` as a
/// substring (that line included) and ends at the first subsequent line
/// containing `end_marker` (that line excluded). A start marker that
/// never occurs yields an empty region; "no matching section" is a
/// normal outcome, not a fault. An end marker that never occurs extends
/// the region to the end of input.
pub fn extract_region<'a, 'b>(
    lines: &'b [&'a str],
    start_marker: &str,
    end_marker: &str,
) -> &'b [&'a str] {
    let Some(start) = lines.iter().position(|l| l.contains(start_marker)) else {
        return &[];
    };

    let end = lines[start + 1..]
        .iter()
        .position(|l| l.contains(end_marker))
        .map(|i| start + 1 + i)
        .unwrap_or(lines.len());

    &lines[start..end]
}
