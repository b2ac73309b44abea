use lazy_static::lazy_static;
use regex::Regex;

/// Which side of the matched boundary the cut lands on.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub(crate) enum SplitSide {
    /// Cut before the match; the match text opens the hidden side.
    Before,
    /// Cut after the match; the match text closes the visible side.
    After,
}

/// One category of split boundary with a structural quality cost.
///
/// Lower cost is structurally preferred. The cost unit is percent of the
/// target length, so a cost gap of 40 means the search will accept up to a
/// 40% length over/under-shoot to land on the better boundary.
#[derive(Debug)]
pub(crate) struct SplitType {
    pub pattern: Regex,
    pub structural_cost: f64,
    pub side: SplitSide,
    pub label: &'static str,
}

lazy_static! {
    /// The catalog, strongest boundaries first. Enumeration order is the
    /// tie-break when two candidates score identically.
    pub(crate) static ref SPLIT_TYPES: Vec<SplitType> = vec![
        SplitType {
            pattern: Regex::new(r"\r?\n").unwrap(),
            structural_cost: 0.0,
            side: SplitSide::Before,
            label: "sentence-start",
        },
        SplitType {
            pattern: Regex::new(r"[.!?]+\s+").unwrap(),
            structural_cost: 0.0,
            side: SplitSide::After,
            label: "sentence-end",
        },
        SplitType {
            pattern: Regex::new(r"\s[-\u{2013}\u{2014}:;]+\s").unwrap(),
            structural_cost: 10.0,
            side: SplitSide::Before,
            label: "punctuation",
        },
        SplitType {
            pattern: Regex::new(r"\s+").unwrap(),
            structural_cost: 40.0,
            side: SplitSide::Before,
            label: "word",
        },
        // Matches any single character, so a boundary always exists and a
        // mid-word cut is the worst case rather than a failure.
        SplitType {
            pattern: Regex::new(r"(?s).").unwrap(),
            structural_cost: 90.0,
            side: SplitSide::Before,
            label: "mid-word",
        },
    ];
}
