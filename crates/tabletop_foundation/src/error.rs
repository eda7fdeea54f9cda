//! Error types for the Tabletop system.
//!
//! Uses `thiserror` for ergonomic error definition with rich context.
//! Only recoverable failures live here; a grammar or extractor that is
//! internally inconsistent panics instead.

use std::fmt;

use thiserror::Error;

use crate::types::Arity;

/// The main error type for Tabletop operations.
#[derive(Debug, Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
    /// Optional context about where the error occurred.
    pub context: Option<ErrorContext>,
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            context: None,
        }
    }

    /// Adds context to this error.
    #[must_use]
    pub fn with_context(mut self, context: ErrorContext) -> Self {
        self.context = Some(context);
        self
    }

    /// Creates a parse error for a configuration value that a grammar rejected.
    #[must_use]
    pub fn parse(
        grammar: impl Into<String>,
        input: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self::new(ErrorKind::Parse {
            grammar: grammar.into(),
            input: input.into(),
            reason: reason.into(),
        })
    }

    /// Creates an error for a configuration value with trailing, unparsed text.
    #[must_use]
    pub fn incomplete(grammar: impl Into<String>, input: impl Into<String>, consumed: usize) -> Self {
        Self::new(ErrorKind::Incomplete {
            grammar: grammar.into(),
            input: input.into(),
            consumed,
        })
    }

    /// Creates an unknown action error.
    #[must_use]
    pub fn unknown_action(name: impl Into<String>) -> Self {
        Self::new(ErrorKind::UnknownAction(name.into()))
    }

    /// Creates an arity mismatch error.
    #[must_use]
    pub fn arity_mismatch(action: impl Into<String>, expected: Arity, actual: usize) -> Self {
        Self::new(ErrorKind::ArityMismatch {
            action: action.into(),
            expected,
            actual,
        })
    }

    /// Creates an unresolved reference error.
    #[must_use]
    pub fn unresolved_reference(id: impl Into<String>, attribute: impl Into<String>) -> Self {
        Self::new(ErrorKind::UnresolvedReference {
            id: id.into(),
            attribute: attribute.into(),
        })
    }

    /// Creates a semantic limit exceeded error.
    #[must_use]
    pub fn limit_exceeded(limit: SemanticLimit) -> Self {
        Self::new(ErrorKind::LimitExceeded(limit))
    }

    /// Returns true if this error came from a grammar rejecting its input.
    #[must_use]
    pub fn is_parse_failure(&self) -> bool {
        matches!(
            self.kind,
            ErrorKind::Parse { .. } | ErrorKind::Incomplete { .. }
        )
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, Error)]
pub enum ErrorKind {
    /// A grammar rejected a configuration value.
    #[error("invalid {grammar} '{input}': {reason}")]
    Parse {
        /// Name of the grammar entry point.
        grammar: String,
        /// The rejected input.
        input: String,
        /// The in-band failure reason reported by the parser.
        reason: String,
    },

    /// A grammar matched a prefix but left input unconsumed.
    #[error("invalid {grammar} '{input}': unexpected trailing input at byte {consumed}")]
    Incomplete {
        /// Name of the grammar entry point.
        grammar: String,
        /// The rejected input.
        input: String,
        /// Number of bytes the grammar did consume.
        consumed: usize,
    },

    /// An event binding named an action nobody registered.
    #[error("unknown action: {0}")]
    UnknownAction(String),

    /// Wrong number of arguments to an action.
    #[error("arity mismatch for {action}: expected {expected}, got {actual}")]
    ArityMismatch {
        /// The action being bound.
        action: String,
        /// The arity the action accepts.
        expected: Arity,
        /// Actual number of arguments.
        actual: usize,
    },

    /// A value reference points at an element or attribute that does not exist.
    #[error("unresolved reference: {id}:{attribute}")]
    UnresolvedReference {
        /// The element id that was looked up.
        id: String,
        /// The attribute name that was looked up.
        attribute: String,
    },

    /// Semantic limit exceeded (kill switch triggered).
    #[error("limit exceeded: {0}")]
    LimitExceeded(SemanticLimit),
}

/// Semantic limits (kill switches) that can be exceeded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SemanticLimit {
    /// A roll asked for more dice than the resolver allows.
    MaxDice {
        /// The configured limit.
        limit: u32,
        /// The number of dice the roll asked for.
        requested: u64,
    },
}

impl fmt::Display for SemanticLimit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MaxDice { limit, requested } => {
                write!(f, "max dice ({limit}) exceeded: roll needs {requested}")
            }
        }
    }
}

/// Context about where an error occurred.
#[derive(Debug, Clone)]
pub struct ErrorContext {
    /// Element id or configuration key the value came from.
    pub source: Option<String>,
    /// Chain of bindings or references being resolved.
    pub stack: Vec<String>,
}

impl ErrorContext {
    /// Creates a new empty context.
    #[must_use]
    pub fn new() -> Self {
        Self {
            source: None,
            stack: Vec::new(),
        }
    }

    /// Sets the source label.
    #[must_use]
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Adds a stack frame.
    #[must_use]
    pub fn with_frame(mut self, frame: impl Into<String>) -> Self {
        self.stack.push(frame.into());
        self
    }
}

impl Default for ErrorContext {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(source) = &self.source {
            write!(f, "at {source}")?;
        }
        if !self.stack.is_empty() {
            writeln!(f)?;
            for frame in &self.stack {
                writeln!(f, "  in {frame}")?;
            }
        }
        Ok(())
    }
}
