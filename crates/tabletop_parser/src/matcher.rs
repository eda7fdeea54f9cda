//! Matchers: the unit every combinator is built from.
//!
//! A matcher is either a [`Terminal`] (an anchored regular expression over the
//! raw text) or a composite (any [`Combinator`]). Terminals only ever match at
//! the start of the remaining input; they never scan forward.

use std::fmt;
use std::sync::Arc;

use regex::Regex;

use crate::combinator::Combinator;
use crate::error::GrammarError;
use crate::result::{Child, Failure, ParseResult};

/// An anchored pattern over raw text.
#[derive(Clone)]
pub struct Terminal {
    pattern: Arc<str>,
    regex: Regex,
}

impl Terminal {
    /// Compiles a terminal from a regular expression.
    ///
    /// The pattern is anchored to the start of the input whether or not it
    /// begins with `^`.
    ///
    /// # Errors
    /// Returns an error if the pattern is not a valid regular expression.
    pub fn new(pattern: &str) -> Result<Self, GrammarError> {
        let regex =
            Regex::new(&format!("^(?:{pattern})")).map_err(|source| GrammarError::InvalidPattern {
                pattern: pattern.to_string(),
                source,
            })?;
        Ok(Self {
            pattern: pattern.into(),
            regex,
        })
    }

    /// Compiles a terminal that matches `text` exactly.
    ///
    /// # Errors
    /// Returns an error if the escaped text does not compile, which only
    /// happens for inputs past the regex size limit.
    pub fn literal(text: &str) -> Result<Self, GrammarError> {
        Self::new(&regex::escape(text))
    }

    /// The pattern as written, without the added anchor.
    #[must_use]
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// Returns true if the pattern can match the empty string.
    #[must_use]
    pub fn nullable(&self) -> bool {
        self.regex.is_match("")
    }

    /// Matches the pattern at the start of `input`.
    #[must_use]
    pub fn parse(&self, input: &str) -> ParseResult {
        match self.regex.find(input) {
            Some(m) => {
                let text = m.as_str();
                ParseResult::success(
                    Arc::clone(&self.pattern),
                    vec![Child::Text(text.to_string())],
                    text.len(),
                )
            }
            None => ParseResult::failure(
                Arc::clone(&self.pattern),
                Failure::NoMatch(self.pattern.to_string()),
            ),
        }
    }
}

impl fmt::Debug for Terminal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Terminal(/{}/)", self.pattern)
    }
}

/// A terminal pattern or a nested combinator.
#[derive(Clone, Debug)]
pub enum Matcher {
    /// Anchored pattern over raw text.
    Terminal(Terminal),
    /// Another combinator.
    Composite(Arc<dyn Combinator>),
}

impl Matcher {
    /// Wraps a combinator as a matcher.
    pub fn composite(combinator: impl Combinator + 'static) -> Self {
        Self::Composite(Arc::new(combinator))
    }

    /// The identity reported as the producer of this matcher's results.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Terminal(terminal) => terminal.pattern(),
            Self::Composite(combinator) => combinator.name(),
        }
    }

    /// Returns true if this matcher can succeed without consuming input.
    #[must_use]
    pub fn nullable(&self) -> bool {
        match self {
            Self::Terminal(terminal) => terminal.nullable(),
            Self::Composite(combinator) => combinator.nullable(),
        }
    }

    /// Applies the matcher at the start of `input`.
    #[must_use]
    pub fn parse(&self, input: &str) -> ParseResult {
        match self {
            Self::Terminal(terminal) => terminal.parse(input),
            Self::Composite(combinator) => combinator.parse(input),
        }
    }
}

impl From<Terminal> for Matcher {
    fn from(terminal: Terminal) -> Self {
        Self::Terminal(terminal)
    }
}

impl From<Arc<dyn Combinator>> for Matcher {
    fn from(combinator: Arc<dyn Combinator>) -> Self {
        Self::Composite(combinator)
    }
}

/// Applies `matcher` to `input` and returns the result with the remaining input.
///
/// On failure the remainder is `input` unchanged.
///
/// # Panics
/// Panics if a combinator reports consuming more input than it was given, or
/// stopping inside a UTF-8 character. Both mean the combinator is broken.
#[must_use]
pub fn match_prefix<'a>(matcher: &Matcher, input: &'a str) -> (ParseResult, &'a str) {
    let result = matcher.parse(input);
    let Some(rest) = input.get(result.length()..) else {
        panic!(
            "matcher '{}' reported consuming {} bytes of a {}-byte input",
            matcher.name(),
            result.length(),
            input.len()
        );
    };
    (result, rest)
}
