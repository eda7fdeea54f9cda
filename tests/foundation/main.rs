//! Integration tests for Layer 0: Foundation
//!
//! Tests for typed configuration values and errors.

mod config_values;
mod error_kinds;
