//! REPL and CLI for Tabletop.
//!
//! This crate provides:
//! - [`Repl`] - Interactive read-eval-print loop over the command set
//! - [`Command`] / [`Session`] - Commands shared by the REPL and one-shot CLI
//! - [`RuntimeConfig`] - Prompt, banner, tracing and engine settings
//! - [`init_tracing`] - Structured logging setup

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod command;
pub mod config;
pub mod editor;
pub mod error;
pub mod highlight;
pub mod repl;

pub use command::{Command, GrammarName, Session};
pub use config::RuntimeConfig;
pub use editor::{LineEditor, ReadResult, RustylineEditor};
pub use error::{CommandError, Result};
pub use repl::Repl;

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Installs a `tracing` subscriber writing to stderr.
///
/// Filtering follows `RUST_LOG`. Without `RUST_LOG` nothing is installed
/// unless `force` is set, in which case everything at `debug` and above is
/// shown. Only the first call has any effect.
pub fn init_tracing(force: bool) {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{EnvFilter, fmt, prelude::*};

        let filter = match EnvFilter::try_from_default_env() {
            Ok(filter) => filter,
            Err(_) if force => EnvFilter::new("debug"),
            Err(_) => return,
        };
        tracing_subscriber::registry()
            .with(fmt::layer().with_writer(std::io::stderr).with_target(true))
            .with(filter)
            .init();
    });
}
