//! Integration tests for Layer 1: Parser
//!
//! Tests for the combinator engine and the configuration grammars.

mod combinators;
mod grammars;
mod properties;
