//! Tabletop - Typed grammars for tabletop game configuration
//!
//! This crate re-exports all layers of the Tabletop system for convenient access.
//! For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 3: tabletop_runtime    - REPL, CLI, tracing setup
//! Layer 2: tabletop_engine     - Roll resolution, event bindings, references
//! Layer 1: tabletop_parser     - Combinators, grammars, extraction
//! Layer 0: tabletop_foundation - Typed values (RollSpec, EventKeySpec, Error)
//! ```

pub use tabletop_engine as engine;
pub use tabletop_foundation as foundation;
pub use tabletop_parser as parser;
pub use tabletop_runtime as runtime;
