use std::borrow::Cow;

use tracing::{debug, trace};

use crate::candidate::{SplitCandidate, evaluate};
use crate::config::{TruncateOptions, WhitespaceMode};
use crate::error::Result;
use crate::normalize::normalize;
use crate::split_type::SPLIT_TYPES;

/// Where one call is in its pass over the segment sequence.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
enum Phase {
    /// Budget remains; segments are consumed whole until one overflows.
    Accumulating,
    /// The single split decision has been made; the rest stays hidden.
    PassingThrough,
}

/// Splits `segments` into visible/hidden pairs around a single split point
/// chosen near `options.length` visible characters.
///
/// Split points are scored by structural quality (sentence boundary beats
/// punctuation beats word boundary beats mid-word) combined with distance
/// from the target length, and the cheapest candidate wins. At most one
/// segment is split: everything before it is fully visible, everything
/// after it fully hidden.
///
/// `on_segment` is invoked once per retained segment, in input order, with
/// the visible and hidden parts; its return values are collected
/// positionally. With [`WhitespaceMode::Normalize`] (the default) each
/// segment is whitespace-collapsed first and segments that become empty are
/// dropped without a callback invocation.
pub fn truncate<S, F, R>(
    segments: &[S],
    options: &TruncateOptions,
    mut on_segment: F,
) -> Result<Vec<R>>
where
    S: AsRef<str>,
    F: FnMut(&str, &str) -> R,
{
    options.validate()?;

    let target = options.length;
    let mut remaining = target;
    let mut phase = Phase::Accumulating;
    let mut first_segment = true;
    let mut results = Vec::with_capacity(segments.len());

    for segment in segments {
        let text: Cow<'_, str> = match options.whitespace {
            WhitespaceMode::Normalize => {
                let collapsed = normalize(segment.as_ref());
                if collapsed.is_empty() {
                    continue;
                }
                Cow::Owned(collapsed)
            }
            WhitespaceMode::Preserve => Cow::Borrowed(segment.as_ref()),
        };
        let len = text.chars().count();

        match phase {
            Phase::Accumulating if len <= remaining => {
                remaining -= len;
                results.push(on_segment(&text, ""));
            }
            // A prior segment consumed the budget exactly; no boundary
            // search can improve on hiding this segment whole.
            Phase::Accumulating if remaining == 0 => {
                results.push(on_segment("", &text));
            }
            Phase::Accumulating => {
                let decision = decide(&text, remaining, target, first_segment)?;
                debug!(
                    label = decision.label,
                    cost = decision.cost,
                    visible = decision.before.chars().count(),
                    "split decision made"
                );
                results.push(on_segment(decision.before, decision.after));
                remaining = 0;
                phase = Phase::PassingThrough;
            }
            Phase::PassingThrough => {
                results.push(on_segment("", &text));
            }
        }
        first_segment = false;
    }

    Ok(results)
}

/// Single-string convenience for the common one-segment case.
///
/// Returns the visible and hidden parts as owned strings; both are empty
/// when the input normalizes to nothing.
pub fn truncate_text(text: &str, options: &TruncateOptions) -> Result<(String, String)> {
    let mut pairs = truncate(&[text], options, |visible, hidden| {
        (visible.to_string(), hidden.to_string())
    })?;
    Ok(pairs.pop().unwrap_or_default())
}

/// Pools the candidates of every split type and picks the cheapest.
fn decide<'a>(
    text: &'a str,
    remaining: usize,
    target: usize,
    first_segment: bool,
) -> Result<SplitCandidate<'a>> {
    let mut pool = Vec::with_capacity(SPLIT_TYPES.len() * 2);
    for split_type in SPLIT_TYPES.iter() {
        let candidates = evaluate(split_type, text, remaining, target, first_segment)?;
        trace!(label = split_type.label, count = candidates.len(), "scored split candidates");
        pool.extend(candidates);
    }

    // Stable sort keeps catalog order as the tie-break.
    pool.sort_by(|a, b| a.cost.total_cmp(&b.cost));
    Ok(pool
        .into_iter()
        .next()
        .expect("the mid-word fallback always yields a candidate"))
}
