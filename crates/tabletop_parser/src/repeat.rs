//! Bounded repetition and separated lists.
//!
//! [`Repeat`] is the one repetition primitive. `Optional`, `Many` and `Many1`
//! are constructors on it, and [`SepBy`] is a sequence of repeats whose output
//! is flattened to the list items.

use std::sync::Arc;

use crate::combinator::{Combinator, Sequence, combinator_common};
use crate::error::GrammarError;
use crate::matcher::{Matcher, match_prefix};
use crate::result::{Child, Failure, ParseResult};

combinator_common!(Repeat, SepBy);

/// Matches a matcher greedily between `min` and `max` times.
///
/// An unbounded repeat over a matcher that can match the empty string would
/// never terminate, so construction rejects it.
#[derive(Debug)]
pub struct Repeat {
    name: Arc<str>,
    min: usize,
    max: Option<usize>,
    matcher: Matcher,
}

impl Repeat {
    /// Creates a repetition of at least `min` and at most `max` matches.
    ///
    /// # Errors
    /// Returns an error if `min > max`, or if `max` is `None` and the matcher
    /// can succeed without consuming input.
    pub fn new(min: usize, max: Option<usize>, matcher: Matcher) -> Result<Self, GrammarError> {
        match max {
            Some(max) if min > max => return Err(GrammarError::InvalidBounds { min, max }),
            None if matcher.nullable() => {
                return Err(GrammarError::ZeroWidthRepetition {
                    name: matcher.name().to_string(),
                });
            }
            _ => {}
        }
        Ok(Self {
            name: "Repeat".into(),
            min,
            max,
            matcher,
        })
    }

    /// Zero or one match. Always succeeds.
    #[must_use]
    pub fn optional(matcher: Matcher) -> Self {
        Self {
            name: "Optional".into(),
            min: 0,
            max: Some(1),
            matcher,
        }
    }

    /// Zero or more matches.
    ///
    /// # Errors
    /// Returns an error if the matcher can succeed without consuming input.
    pub fn many(matcher: Matcher) -> Result<Self, GrammarError> {
        Ok(Self::new(0, None, matcher)?.named("Many"))
    }

    /// One or more matches.
    ///
    /// # Errors
    /// Returns an error if the matcher can succeed without consuming input.
    pub fn many1(matcher: Matcher) -> Result<Self, GrammarError> {
        Ok(Self::new(1, None, matcher)?.named("Many1"))
    }
}

impl Combinator for Repeat {
    fn name(&self) -> &str {
        &self.name
    }

    fn parse(&self, input: &str) -> ParseResult {
        let mut rest = input;
        let mut children = Vec::new();
        let mut length = 0;

        while self.max.is_none_or(|max| children.len() < max) {
            let (result, remainder) = match_prefix(&self.matcher, rest);
            if !result.is_ok() {
                break;
            }
            let consumed = result.length();
            length += consumed;
            children.push(Child::Node(result));
            rest = remainder;
            // Only reachable through a combinator that misreports `nullable`.
            if consumed == 0 && self.max.is_none() {
                break;
            }
        }

        let got = children.len();
        if got >= self.min {
            ParseResult::success(Arc::clone(&self.name), children, length)
        } else {
            ParseResult::failure(
                Arc::clone(&self.name),
                Failure::RepeatCount {
                    min: self.min,
                    max: self.max,
                    got,
                },
            )
        }
    }

    fn nullable(&self) -> bool {
        self.min == 0 || self.matcher.nullable()
    }
}

/// One or more items separated by a separator; separators are dropped.
///
/// Equivalent to `Sequence(item, Many(Sequence(separator, item)))`, with the
/// result flattened so its children are exactly the matched items in order.
#[derive(Debug)]
pub struct SepBy {
    name: Arc<str>,
    list: Sequence,
}

impl SepBy {
    /// Creates a separated list.
    ///
    /// # Errors
    /// Returns an error if both the separator and the item can match the
    /// empty string.
    pub fn new(separator: Matcher, item: Matcher) -> Result<Self, GrammarError> {
        let tail = Repeat::many(Sequence::new(vec![separator, item.clone()]).into())?;
        Ok(Self {
            name: "SepBy".into(),
            list: Sequence::new(vec![item, tail.into()]),
        })
    }
}

impl Combinator for SepBy {
    fn name(&self) -> &str {
        &self.name
    }

    fn parse(&self, input: &str) -> ParseResult {
        let result = self.list.parse(input);
        if let Some(failure) = result.failure_reason() {
            return ParseResult::failure(Arc::clone(&self.name), failure.clone());
        }

        let length = result.length();
        let mut parts = result.into_children().into_iter();
        let mut items = Vec::new();
        items.extend(parts.next());
        if let Some(Child::Node(tail)) = parts.next() {
            for pair in tail.into_children() {
                if let Child::Node(pair) = pair {
                    items.extend(pair.into_children().into_iter().nth(1));
                }
            }
        }

        ParseResult::success(Arc::clone(&self.name), items, length)
    }

    fn nullable(&self) -> bool {
        self.list.nullable()
    }
}
