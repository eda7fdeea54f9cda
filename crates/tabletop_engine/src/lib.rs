//! Roll resolution, event bindings, and value references for Tabletop.
//!
//! This crate provides:
//! - [`RollResolver`] - Rolling parsed dice expressions, with a dice limit
//! - [`EventBindings`] - Validated event actions and exact-match dispatch
//! - [`ActionRegistry`] - The actions bindings may name
//! - [`ValueReference`] - `id:attribute` references with defaults filled in
//! - [`EngineConfig`] - Roll mode, seed, and limits

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod action;
pub mod binding;
pub mod config;
pub mod reference;
pub mod roll;

pub use action::{ActionRegistry, ActionSignature};
pub use binding::{EventBindings, Invocation};
pub use config::{DEFAULT_MAX_DICE, EngineConfig, RollMode};
pub use reference::{AttributeSource, DEFAULT_ATTRIBUTE, MapSource, ValueReference};
pub use roll::{DieRoller, MaxRoller, MinRoller, RandomRoller, RollOutcome, RollResolver, TermOutcome};
