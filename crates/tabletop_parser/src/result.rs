//! Parse-tree nodes.
//!
//! Every matcher application yields a [`ParseResult`]: who produced it, what it
//! matched, how many bytes it consumed, and whether it succeeded. Failures are
//! in-band values; they carry no children and consume nothing.

use std::fmt;
use std::sync::Arc;

/// A child of a parse-tree node.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Child {
    /// Raw text matched by a terminal.
    Text(String),
    /// A nested parse result.
    Node(ParseResult),
}

impl Child {
    /// Number of input bytes this child covers.
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::Text(text) => text.len(),
            Self::Node(node) => node.length(),
        }
    }

    /// Returns true if this child covers no input.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Why a matcher did not match.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Failure {
    /// A terminal pattern did not match at the current position.
    NoMatch(String),
    /// No alternative of a disjunction matched.
    NoAlternatives,
    /// More than one alternative of an exactly-one disjunction matched.
    MultipleAlternatives(Vec<String>),
    /// A repetition matched too few times.
    RepeatCount {
        /// Minimum number of matches required.
        min: usize,
        /// Maximum number of matches allowed, `None` for unbounded.
        max: Option<usize>,
        /// Number of matches found.
        got: usize,
    },
    /// Every failing element of a sequence, in order.
    All(Vec<Failure>),
    /// The grammar matched, but input was left over.
    Unconsumed {
        /// Bytes the grammar consumed.
        consumed: usize,
        /// Total bytes of input.
        total: usize,
    },
}

impl fmt::Display for Failure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoMatch(pattern) => write!(f, "NoMatch({pattern})"),
            Self::NoAlternatives => write!(f, "NoAlternatives"),
            Self::MultipleAlternatives(names) => {
                write!(f, "MultipleAlternatives({})", names.join(", "))
            }
            Self::RepeatCount { min, max, got } => match max {
                Some(max) => write!(f, "Expected {min} to {max} matches, got {got}"),
                None => write!(f, "Expected {min} to ∞ matches, got {got}"),
            },
            Self::All(failures) => {
                for (i, failure) in failures.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{failure}")?;
                }
                Ok(())
            }
            Self::Unconsumed { consumed, total } => {
                write!(f, "Unconsumed({} of {total} bytes)", total - consumed)
            }
        }
    }
}

/// Outcome of applying a matcher.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Status {
    /// The matcher matched.
    Ok,
    /// The matcher did not match.
    Fail(Failure),
}

/// An immutable parse-tree node.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseResult {
    producer: Arc<str>,
    children: Vec<Child>,
    length: usize,
    status: Status,
}

impl ParseResult {
    /// Creates a successful node.
    ///
    /// `length` may exceed the children's total when the producer consumed
    /// input it chose not to keep, such as list separators.
    #[must_use]
    pub fn success(producer: Arc<str>, children: Vec<Child>, length: usize) -> Self {
        debug_assert!(children.iter().map(Child::len).sum::<usize>() <= length);
        Self {
            producer,
            children,
            length,
            status: Status::Ok,
        }
    }

    /// Creates a failed node. Failures never carry children or length.
    #[must_use]
    pub fn failure(producer: Arc<str>, failure: Failure) -> Self {
        Self {
            producer,
            children: Vec::new(),
            length: 0,
            status: Status::Fail(failure),
        }
    }

    /// Name of the matcher that produced this node.
    #[must_use]
    pub fn producer(&self) -> &str {
        &self.producer
    }

    /// Children in match order.
    #[must_use]
    pub fn children(&self) -> &[Child] {
        &self.children
    }

    /// Number of input bytes consumed.
    #[must_use]
    pub const fn length(&self) -> usize {
        self.length
    }

    /// Success or failure.
    #[must_use]
    pub const fn status(&self) -> &Status {
        &self.status
    }

    /// Returns true if the matcher matched.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        matches!(self.status, Status::Ok)
    }

    /// Returns the failure reason, if any.
    #[must_use]
    pub const fn failure_reason(&self) -> Option<&Failure> {
        match &self.status {
            Status::Ok => None,
            Status::Fail(failure) => Some(failure),
        }
    }

    /// Returns the child node at `index`, if that child is a node.
    #[must_use]
    pub fn node(&self, index: usize) -> Option<&ParseResult> {
        match self.children.get(index) {
            Some(Child::Node(node)) => Some(node),
            _ => None,
        }
    }

    /// Iterates over the child nodes, skipping raw text.
    pub fn nodes(&self) -> impl Iterator<Item = &ParseResult> {
        self.children.iter().filter_map(|child| match child {
            Child::Node(node) => Some(node),
            Child::Text(_) => None,
        })
    }

    /// Concatenation of every piece of text matched beneath this node.
    ///
    /// Text consumed but dropped from the tree (list separators) is not included.
    #[must_use]
    pub fn text(&self) -> String {
        let mut out = String::with_capacity(self.length);
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        for child in &self.children {
            match child {
                Child::Text(text) => out.push_str(text),
                Child::Node(node) => node.collect_text(out),
            }
        }
    }

    /// Takes the children out of this node.
    pub(crate) fn into_children(self) -> Vec<Child> {
        self.children
    }
}
