//! Grammar construction errors.
//!
//! These are raised while building a combinator tree, never while parsing.
//! Parse failures are reported in-band on [`crate::ParseResult`].

use thiserror::Error;

/// An error building a matcher or combinator.
#[derive(Debug, Error)]
pub enum GrammarError {
    /// A terminal pattern is not a valid regular expression.
    #[error("invalid pattern '{pattern}': {source}")]
    InvalidPattern {
        /// The rejected pattern.
        pattern: String,
        /// The regex compiler's complaint.
        source: regex::Error,
    },

    /// An unbounded repetition wraps a matcher that can match the empty string.
    #[error("'{name}' can succeed without consuming input and cannot be repeated without bound")]
    ZeroWidthRepetition {
        /// Name of the offending matcher.
        name: String,
    },

    /// A repetition's minimum exceeds its maximum.
    #[error("invalid repetition bounds: min {min} > max {max}")]
    InvalidBounds {
        /// Requested minimum.
        min: usize,
        /// Requested maximum.
        max: usize,
    },
}
