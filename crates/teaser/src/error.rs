#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The configured target length must be a positive number of characters.
    #[error("truncation length must be a positive number of characters")]
    InvalidLength,

    /// A boundary search was requested for text that already fits within the
    /// limit. Raised only by internal misuse; `truncate` never asks for a
    /// boundary when no split is needed.
    #[error("boundary search limit {limit} must be below the text length {len}")]
    LimitOutOfRange { limit: usize, len: usize },
}

pub type Result<T> = std::result::Result<T, Error>;
