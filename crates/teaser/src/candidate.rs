use crate::error::Result;
use crate::locate::locate;
use crate::split_type::{SplitSide, SplitType};

/// A concrete, scored proposal for where to split one segment.
///
/// `before` and `after` are slices of the segment text; concatenating them
/// always reconstructs it exactly, with the boundary separator kept on the
/// side the split type dictates.
#[derive(Debug, PartialEq)]
pub(crate) struct SplitCandidate<'a> {
    pub before: &'a str,
    pub after: &'a str,
    pub cost: f64,
    pub label: &'static str,
}

/// Scores up to two candidates for one split type: the boundary at or
/// before the remaining budget, and the one immediately past it.
///
/// The second, over-budget candidate matters: a sentence end two characters
/// past the cutoff should beat a mid-word cut two characters before it, so
/// the search must be allowed to look slightly beyond the limit.
pub(crate) fn evaluate<'a>(
    split_type: &SplitType,
    text: &'a str,
    remaining: usize,
    target: usize,
    first_segment: bool,
) -> Result<Vec<SplitCandidate<'a>>> {
    let location = locate(&split_type.pattern, text, remaining)?;
    let mut candidates = Vec::with_capacity(2);

    let (before, after) = match location.within {
        Some(range) => split_at(split_type, text, range),
        None => ("", text),
    };
    // An empty visible part on the very first segment would hide everything.
    if !(first_segment && before.is_empty()) {
        candidates.push(scored(split_type, before, after, remaining, target));
    }

    let (before, after) = match location.beyond {
        Some(range) => split_at(split_type, text, range),
        None => (text, ""),
    };
    candidates.push(scored(split_type, before, after, remaining, target));

    Ok(candidates)
}

fn split_at<'a>(split_type: &SplitType, text: &'a str, range: (usize, usize)) -> (&'a str, &'a str) {
    match split_type.side {
        SplitSide::Before => (&text[..range.0], &text[range.0..]),
        SplitSide::After => (&text[..range.1], &text[range.1..]),
    }
}

fn scored<'a>(
    split_type: &SplitType,
    before: &'a str,
    after: &'a str,
    remaining: usize,
    target: usize,
) -> SplitCandidate<'a> {
    // Structural quality plus distance from the budget, both in percent of
    // the target length so the two terms weigh against each other directly.
    let distance = (remaining as f64 - before.chars().count() as f64).abs();
    SplitCandidate {
        before,
        after,
        cost: split_type.structural_cost + 100.0 * distance / target as f64,
        label: split_type.label,
    }
}
