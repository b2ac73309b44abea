//! Human-friendly text truncation.
//!
//! Finds the best nearby point at which to cut text that is too long to
//! display in full, producing a visible prefix and a hidden remainder per
//! input segment. Candidate split points are scored by structural quality
//! (sentence boundary beats punctuation beats word boundary beats mid-word)
//! combined with their distance from the target length, so a slightly
//! over-long cut at a sentence end wins over an on-target cut inside a word.
//!
//! ```
//! use teaser::{TruncateOptions, truncate_text};
//!
//! let (visible, hidden) = truncate_text("badgers must win!", &TruncateOptions::new(10))?;
//! assert_eq!(visible, "badgers must");
//! assert_eq!(hidden, " win!");
//! # Ok::<(), teaser::Error>(())
//! ```

mod candidate;
mod config;
mod error;
mod locate;
mod normalize;
mod split_type;
mod truncate;

pub use config::{TruncateOptions, WhitespaceMode};
pub use error::{Error, Result};
pub use truncate::{truncate, truncate_text};
