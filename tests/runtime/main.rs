//! Integration tests for Layer 3: Runtime
//!
//! Tests for the command layer shared by the CLI and the REPL.

mod commands;
