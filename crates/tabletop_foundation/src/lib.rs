//! Typed configuration values and errors for Tabletop.
//!
//! This crate provides:
//! - [`RollSpec`] - A parsed dice-roll expression (`2d6+1d4-3`)
//! - [`IdAttrRef`] - An entity/attribute reference (`hero.1:hp`)
//! - [`EventKeySpec`] / [`EventActionSpec`] - Event bindings (`click[ctrl]:roll(str)`)
//! - [`InputEvent`] - A snapshot of an incoming interaction event
//! - [`Error`] - Rich error types with context

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod event;
pub mod reference;
pub mod roll;
pub mod types;

pub use error::{Error, ErrorContext, ErrorKind, SemanticLimit};
pub use event::{EventActionSpec, EventKeySpec, EventKind, InputEvent, ModifierKey};
pub use reference::IdAttrRef;
pub use roll::{RollSpec, RollTerm, Sign};
pub use types::Arity;

/// Result type alias using the Tabletop error type.
pub type Result<T> = std::result::Result<T, Error>;
