//! Error types for the normalization passes.

use thiserror::Error;

/// Failures raised while normalizing a line sequence.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum NormalizeError {
    /// A `#`-prefixed line inside a ranked section did not parse, and the
    /// configured policy is [`MalformedPolicy::Reject`](crate::config::MalformedPolicy::Reject).
    #[error("line {line}: malformed ranked entry inside section: {content:?}")]
    MalformedEntry {
        /// 1-based line number.
        line: usize,
        content: String,
    },
}
