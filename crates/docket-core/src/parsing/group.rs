/// One output unit of `group_by_header`.
#[derive(Debug, Clone, PartialEq)]
pub enum Grouped<'a> {
    /// A line seen while no run is open; it owns no continuations.
    Loose(&'a str),
    /// A header line plus the continuation lines that follow it.
    Run {
        header: &'a str,
        continuations: Vec<&'a str>,
    },
}

/// Group ordered lines into runs keyed by a header predicate.
///
/// Single pass: a header line closes any open run and opens a new one;
/// a non-header line extends the open run, or comes out `Loose` when no
/// run is open. The last run is flushed at end of input. Comment
/// merging (`normalize`) and item segmentation (`parse_items`) are both
/// instances of this pattern with different predicates.
pub fn group_by_header<'a, F>(lines: &[&'a str], is_header: F) -> Vec<Grouped<'a>>
where
    F: Fn(&str) -> bool,
{
    let mut out = Vec::new();
    let mut open: Option<(&'a str, Vec<&'a str>)> = None;

    for &line in lines {
        if is_header(line) {
            if let Some((header, continuations)) = open.take() {
                out.push(Grouped::Run {
                    header,
                    continuations,
                });
            }
            open = Some((line, Vec::new()));
        } else {
            match open {
                Some((_, ref mut continuations)) => continuations.push(line),
                None => out.push(Grouped::Loose(line)),
            }
        }
    }

    if let Some((header, continuations)) = open {
        out.push(Grouped::Run {
            header,
            continuations,
        });
    }

    out
}
