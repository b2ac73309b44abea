use regex::Regex;

use crate::error::{Error, Result};

/// Byte ranges of the boundary matches found by a limit-bounded scan.
#[derive(Debug, Default, PartialEq, Eq)]
pub(crate) struct Location {
    /// The last match whose preceding text fits within the limit.
    pub within: Option<(usize, usize)>,
    /// The first match past `within` (or past the limit when nothing fit).
    pub beyond: Option<(usize, usize)>,
}

/// Finds the rightmost boundary at or before `limit` and the boundary
/// immediately following it.
///
/// `limit` is a character count; the returned ranges are byte offsets into
/// `text`. A match is accepted while the text strictly before it is at most
/// `limit` characters long, so the scan greedily advances through every
/// boundary that fits and then records the first one that does not. Both
/// fields are `None` when the pattern never matches: the split type
/// contributes no boundary.
///
/// Callers must only ask about text that is longer than `limit`; a limit
/// that already covers the whole text means no split was needed and is
/// reported as `Error::LimitOutOfRange`.
pub(crate) fn locate(pattern: &Regex, text: &str, limit: usize) -> Result<Location> {
    let len = text.chars().count();
    if limit >= len {
        return Err(Error::LimitOutOfRange { limit, len });
    }

    let mut location = Location::default();
    // Chars in text[..cursor]; advanced incrementally so the scan stays
    // linear even though match offsets are in bytes.
    let mut preceding = 0;
    let mut cursor = 0;
    for found in pattern.find_iter(text) {
        preceding += text[cursor..found.start()].chars().count();
        cursor = found.start();
        if preceding <= limit {
            location.within = Some((found.start(), found.end()));
        } else {
            location.beyond = Some((found.start(), found.end()));
            break;
        }
    }
    Ok(location)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn word_boundary() -> Regex {
        Regex::new(r"\s+").unwrap()
    }

    #[test]
    fn test_limit_covering_the_text_is_an_error() {
        let actual = locate(&word_boundary(), "abc", 3);

        assert_eq!(actual, Err(Error::LimitOutOfRange { limit: 3, len: 3 }));
    }

    #[test]
    fn test_finds_last_fitting_match_and_the_next() {
        let fixture = "badgers must win!";

        let actual = locate(&word_boundary(), fixture, 10).unwrap();

        assert_eq!(actual, Location { within: Some((7, 8)), beyond: Some((12, 13)) });
    }

    #[test]
    fn test_no_match_anywhere() {
        let actual = locate(&word_boundary(), "unbroken", 4).unwrap();

        assert_eq!(actual, Location { within: None, beyond: None });
    }

    #[test]
    fn test_first_match_already_past_the_limit() {
        let fixture = "customerfeedback here";

        let actual = locate(&word_boundary(), fixture, 3).unwrap();

        assert_eq!(actual, Location { within: None, beyond: Some((16, 17)) });
    }

    #[test]
    fn test_limit_is_counted_in_chars_not_bytes() {
        // "héllo" is 5 chars but 6 bytes; byte offsets shift accordingly.
        let fixture = "héllo wörld encore";

        let actual = locate(&word_boundary(), fixture, 10).unwrap();

        assert_eq!(actual, Location { within: Some((6, 7)), beyond: Some((13, 14)) });
    }

    #[test]
    fn test_single_char_pattern_stops_right_past_the_limit() {
        let any = Regex::new(r"(?s).").unwrap();

        let actual = locate(&any, "abcdef", 3).unwrap();

        assert_eq!(actual, Location { within: Some((3, 4)), beyond: Some((4, 5)) });
    }
}
