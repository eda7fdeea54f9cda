//! Integration tests for Layer 2: Engine
//!
//! Tests for roll resolution, event bindings, and value references.

mod bindings;
mod references;
mod rolls;
