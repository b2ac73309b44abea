use derive_setters::Setters;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

use crate::error::{Error, Result};

/// Whitespace handling applied to each segment before lengths are counted.
#[derive(
    Debug, Copy, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum WhitespaceMode {
    /// Collapse whitespace runs to a single space and trim both ends.
    /// Segments that become empty are dropped from the output entirely.
    #[default]
    Normalize,
    /// Leave segment text exactly as supplied.
    Preserve,
}

/// Options for one truncation call.
///
/// `length` is the target number of visible characters across all segments
/// and must be positive. The option set is closed: deserializing an object
/// with any other key is an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Setters)]
#[serde(deny_unknown_fields)]
#[setters(into)]
pub struct TruncateOptions {
    pub length: usize,
    #[serde(default)]
    pub whitespace: WhitespaceMode,
}

impl TruncateOptions {
    pub fn new(length: usize) -> Self {
        Self { length, whitespace: WhitespaceMode::default() }
    }

    /// Checked before any segment is processed.
    pub fn validate(&self) -> Result<()> {
        if self.length == 0 {
            return Err(Error::InvalidLength);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_default_whitespace_is_normalize() {
        let actual = TruncateOptions::new(20);

        assert_eq!(actual.whitespace, WhitespaceMode::Normalize);
    }

    #[test]
    fn test_zero_length_is_rejected() {
        let fixture = TruncateOptions::new(0);

        let actual = fixture.validate();

        assert_eq!(actual, Err(Error::InvalidLength));
    }

    #[test]
    fn test_positive_length_is_accepted() {
        let fixture = TruncateOptions::new(1).whitespace(WhitespaceMode::Preserve);

        assert_eq!(fixture.validate(), Ok(()));
    }

    #[test]
    fn test_unknown_option_key_is_rejected() {
        let actual = serde_json::from_str::<TruncateOptions>(r#"{"length": 10, "suffix": "…"}"#);

        assert!(actual.is_err());
    }

    #[test]
    fn test_length_is_required() {
        let actual = serde_json::from_str::<TruncateOptions>(r#"{"whitespace": "preserve"}"#);

        assert!(actual.is_err());
    }

    #[test]
    fn test_whitespace_defaults_when_omitted() {
        let actual = serde_json::from_str::<TruncateOptions>(r#"{"length": 10}"#).unwrap();

        assert_eq!(actual, TruncateOptions::new(10));
    }

    #[test]
    fn test_options_round_trip() {
        let fixture = TruncateOptions::new(40).whitespace(WhitespaceMode::Preserve);

        let json = serde_json::to_string(&fixture).unwrap();
        let actual = serde_json::from_str::<TruncateOptions>(&json).unwrap();

        assert_eq!(actual, fixture);
    }

    #[test]
    fn test_whitespace_mode_parses_from_str() {
        let actual = "preserve".parse::<WhitespaceMode>().unwrap();

        assert_eq!(actual, WhitespaceMode::Preserve);
        assert_eq!(WhitespaceMode::Normalize.to_string(), "normalize");
    }
}
