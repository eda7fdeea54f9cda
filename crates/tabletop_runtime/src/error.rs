//! Errors raised by the command layer.

use thiserror::Error;

/// An error running a REPL or CLI command.
#[derive(Debug, Error)]
pub enum CommandError {
    /// The first word is not a known command.
    #[error("unknown command '{0}' (try 'help')")]
    UnknownCommand(String),

    /// A command was given without a required argument.
    #[error("'{command}' needs {argument}")]
    MissingArgument {
        /// The command being run.
        command: &'static str,
        /// Description of what is missing.
        argument: &'static str,
    },

    /// `tree` was asked for a grammar that does not exist.
    #[error("unknown grammar '{0}' (expected one of: {names})", names = crate::command::GrammarName::NAMES.join(", "))]
    UnknownGrammar(String),

    /// Parsing or resolution failed.
    #[error(transparent)]
    Engine(#[from] tabletop_foundation::Error),

    /// The terminal could not be read.
    #[error("line editor: {0}")]
    Editor(String),
}

/// Result type for the command layer.
pub type Result<T> = std::result::Result<T, CommandError>;
