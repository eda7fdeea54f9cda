//! Parser combinators and configuration grammars for Tabletop.
//!
//! This crate provides:
//! - [`Terminal`] / [`Matcher`] - Anchored regex tokens and the matcher sum type
//! - [`Sequence`], [`OneOf`], [`FirstOf`], [`LongestOf`], [`Repeat`], [`SepBy`] - Combinators
//! - [`ParseResult`] - Immutable parse trees with in-band failures
//! - [`Grammars`] - The roll, reference and event grammars, built once
//! - [`pretty`] - Indented parse-tree rendering
//!
//! # Example
//!
//! ```
//! use tabletop_parser::parse_roll;
//!
//! let roll = parse_roll("2d6+1d4-3").unwrap();
//! assert_eq!(roll.terms().len(), 3);
//! assert_eq!(roll.to_string(), "2d6+d4-3");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod combinator;
pub mod error;
pub mod extract;
pub mod grammar;
pub mod matcher;
pub mod pretty;
pub mod repeat;
pub mod result;

pub use combinator::{Combinator, FirstOf, LongestOf, OneOf, Sequence};
pub use error::GrammarError;
pub use grammar::{Grammar, Grammars, grammars, rules};
pub use matcher::{Matcher, Terminal, match_prefix};
pub use repeat::{Repeat, SepBy};
pub use result::{Child, Failure, ParseResult, Status};

use tabletop_foundation::{EventActionSpec, EventKeySpec, IdAttrRef, Result, RollSpec};

/// Parses a dice-roll expression such as `2d6+1d4-3`.
///
/// # Errors
/// Returns an error unless the whole input is a valid roll.
pub fn parse_roll(input: &str) -> Result<RollSpec> {
    grammars().roll.parse_str(input)
}

/// Parses an `id:attribute` reference such as `hero.1:hp`.
///
/// # Errors
/// Returns an error unless the whole input is a valid reference.
pub fn parse_id_attr(input: &str) -> Result<IdAttrRef> {
    grammars().id_attr.parse_str(input)
}

/// Parses space-separated `id:attribute` references.
///
/// # Errors
/// Returns an error unless the whole input is a valid reference list.
pub fn parse_id_attrs(input: &str) -> Result<Vec<IdAttrRef>> {
    grammars().id_attrs.parse_str(input)
}

/// Parses an event with modifier keys such as `click[ctrl,shift]`.
///
/// # Errors
/// Returns an error unless the whole input is a valid event.
pub fn parse_event_keys(input: &str) -> Result<EventKeySpec> {
    grammars().event_with_keys.parse_str(input)
}

/// Parses space-separated events with modifier keys.
///
/// # Errors
/// Returns an error unless the whole input is a valid event list.
pub fn parse_events_with_keys(input: &str) -> Result<Vec<EventKeySpec>> {
    grammars().events_with_keys.parse_str(input)
}

/// Parses an event action such as `click[ctrl]:roll(str,Mod,2d6+3)`.
///
/// # Errors
/// Returns an error unless the whole input is a valid event action.
pub fn parse_event_action(input: &str) -> Result<EventActionSpec> {
    grammars().event_action.parse_str(input)
}

/// Parses space-separated event actions.
///
/// # Errors
/// Returns an error unless the whole input is a valid event action list.
pub fn parse_event_actions(input: &str) -> Result<Vec<EventActionSpec>> {
    grammars().event_actions.parse_str(input)
}
