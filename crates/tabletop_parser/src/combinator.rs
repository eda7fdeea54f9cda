//! Combinators: ways of composing matchers.
//!
//! Every combinator is a pure function of its input. None keeps state between
//! calls, so a built grammar can be shared freely across threads.
//!
//! The three disjunctions differ only in how they pick a winner:
//!
//! | Combinator    | Tries                     | Succeeds when              |
//! |---------------|---------------------------|----------------------------|
//! | [`OneOf`]     | every alternative         | exactly one matches        |
//! | [`FirstOf`]   | in order, stops at a hit  | any matches (first wins)   |
//! | [`LongestOf`] | every alternative         | any matches (longest wins) |
//!
//! A disjunction's result has the winning match as its only child, so
//! extraction can see which alternative was taken.

use std::fmt;
use std::sync::Arc;

use crate::matcher::{Matcher, match_prefix};
use crate::result::{Child, Failure, ParseResult};

/// A composition strategy over one or more matchers.
pub trait Combinator: Send + Sync + fmt::Debug {
    /// The identity reported as the producer of this combinator's results.
    fn name(&self) -> &str;

    /// Parses a prefix of `input`.
    fn parse(&self, input: &str) -> ParseResult;

    /// Returns true if this combinator can succeed without consuming input.
    fn nullable(&self) -> bool;
}

/// Implements the shared naming plumbing and `Matcher` conversion.
macro_rules! combinator_common {
    ($($ty:ident),* $(,)?) => {
        $(
            impl $ty {
                /// Gives this combinator a name, reported as the producer of its results.
                #[must_use]
                pub fn named(mut self, name: impl Into<Arc<str>>) -> Self {
                    self.name = name.into();
                    self
                }
            }

            impl From<$ty> for Matcher {
                fn from(combinator: $ty) -> Self {
                    Matcher::composite(combinator)
                }
            }
        )*
    };
}

pub(crate) use combinator_common;

combinator_common!(Sequence, OneOf, FirstOf, LongestOf);

/// Matches every matcher in order, each starting where the previous stopped.
#[derive(Debug)]
pub struct Sequence {
    name: Arc<str>,
    matchers: Vec<Matcher>,
}

impl Sequence {
    /// Creates a sequence of matchers.
    #[must_use]
    pub fn new(matchers: Vec<Matcher>) -> Self {
        Self {
            name: "Sequence".into(),
            matchers,
        }
    }
}

impl Combinator for Sequence {
    fn name(&self) -> &str {
        &self.name
    }

    fn parse(&self, input: &str) -> ParseResult {
        let mut rest = input;
        let mut children = Vec::with_capacity(self.matchers.len());
        let mut failures = Vec::new();
        let mut length = 0;

        // A failed element consumes nothing; later elements still run so every
        // failure is reported.
        for matcher in &self.matchers {
            let (result, remainder) = match_prefix(matcher, rest);
            match result.failure_reason() {
                Some(failure) => failures.push(failure.clone()),
                None => {
                    length += result.length();
                    children.push(Child::Node(result));
                    rest = remainder;
                }
            }
        }

        match failures.len() {
            0 => ParseResult::success(Arc::clone(&self.name), children, length),
            1 => ParseResult::failure(Arc::clone(&self.name), failures.remove(0)),
            _ => ParseResult::failure(Arc::clone(&self.name), Failure::All(failures)),
        }
    }

    fn nullable(&self) -> bool {
        self.matchers.iter().all(Matcher::nullable)
    }
}

/// Succeeds only if exactly one alternative matches at the current position.
#[derive(Debug)]
pub struct OneOf {
    name: Arc<str>,
    matchers: Vec<Matcher>,
}

impl OneOf {
    /// Creates an exactly-one disjunction.
    #[must_use]
    pub fn new(matchers: Vec<Matcher>) -> Self {
        Self {
            name: "OneOf".into(),
            matchers,
        }
    }
}

impl Combinator for OneOf {
    fn name(&self) -> &str {
        &self.name
    }

    fn parse(&self, input: &str) -> ParseResult {
        let mut hits: Vec<ParseResult> = self
            .matchers
            .iter()
            .map(|matcher| matcher.parse(input))
            .filter(ParseResult::is_ok)
            .collect();

        match hits.len() {
            0 => ParseResult::failure(Arc::clone(&self.name), Failure::NoAlternatives),
            1 => {
                let hit = hits.remove(0);
                let length = hit.length();
                ParseResult::success(Arc::clone(&self.name), vec![Child::Node(hit)], length)
            }
            _ => ParseResult::failure(
                Arc::clone(&self.name),
                Failure::MultipleAlternatives(
                    hits.iter().map(|hit| hit.producer().to_string()).collect(),
                ),
            ),
        }
    }

    fn nullable(&self) -> bool {
        self.matchers.iter().any(Matcher::nullable)
    }
}

/// Returns the first alternative that matches, in declaration order.
#[derive(Debug)]
pub struct FirstOf {
    name: Arc<str>,
    matchers: Vec<Matcher>,
}

impl FirstOf {
    /// Creates a first-match disjunction.
    #[must_use]
    pub fn new(matchers: Vec<Matcher>) -> Self {
        Self {
            name: "FirstOf".into(),
            matchers,
        }
    }
}

impl Combinator for FirstOf {
    fn name(&self) -> &str {
        &self.name
    }

    fn parse(&self, input: &str) -> ParseResult {
        self.matchers
            .iter()
            .map(|matcher| matcher.parse(input))
            .find(ParseResult::is_ok)
            .map_or_else(
                || ParseResult::failure(Arc::clone(&self.name), Failure::NoAlternatives),
                |hit| {
                    let length = hit.length();
                    ParseResult::success(Arc::clone(&self.name), vec![Child::Node(hit)], length)
                },
            )
    }

    fn nullable(&self) -> bool {
        self.matchers.iter().any(Matcher::nullable)
    }
}

/// Returns the alternative that consumes the most input.
///
/// Ties go to the earliest alternative.
#[derive(Debug)]
pub struct LongestOf {
    name: Arc<str>,
    matchers: Vec<Matcher>,
}

impl LongestOf {
    /// Creates a longest-match disjunction.
    #[must_use]
    pub fn new(matchers: Vec<Matcher>) -> Self {
        Self {
            name: "LongestOf".into(),
            matchers,
        }
    }
}

impl Combinator for LongestOf {
    fn name(&self) -> &str {
        &self.name
    }

    fn parse(&self, input: &str) -> ParseResult {
        let mut best: Option<ParseResult> = None;
        for matcher in &self.matchers {
            let result = matcher.parse(input);
            if !result.is_ok() {
                continue;
            }
            if best.as_ref().is_none_or(|b| result.length() > b.length()) {
                best = Some(result);
            }
        }

        match best {
            Some(hit) => {
                let length = hit.length();
                ParseResult::success(Arc::clone(&self.name), vec![Child::Node(hit)], length)
            }
            None => ParseResult::failure(Arc::clone(&self.name), Failure::NoAlternatives),
        }
    }

    fn nullable(&self) -> bool {
        self.matchers.iter().any(Matcher::nullable)
    }
}
