//! Integration tests for Error types
//!
//! Tests error construction, display, context, and error kinds.

use tabletop_foundation::{Arity, Error, ErrorContext, ErrorKind, SemanticLimit};

// =============================================================================
// Error Construction
// =============================================================================

#[test]
fn error_incomplete() {
    let err = Error::incomplete("roll", "2d7", 1);
    assert!(matches!(err.kind, ErrorKind::Incomplete { consumed: 1, .. }));
    assert!(err.is_parse_failure());
    let msg = format!("{err}");
    assert!(msg.contains("2d7"));
    assert!(msg.contains("byte 1"));
}

#[test]
fn error_arity_mismatch() {
    let err = Error::arity_mismatch("roll", Arity::Range(1, 2), 3);
    let msg = format!("{err}");
    assert!(msg.contains("roll"));
    assert!(msg.contains("1..=2"));
    assert!(msg.contains('3'));
    assert!(!err.is_parse_failure());
}

#[test]
fn error_unresolved_reference() {
    let err = Error::unresolved_reference("hero", "mana");
    assert_eq!(format!("{err}"), "unresolved reference: hero:mana");
}

#[test]
fn error_limit_exceeded() {
    let err = Error::limit_exceeded(SemanticLimit::MaxDice {
        limit: 1000,
        requested: 5000,
    });
    let msg = format!("{err}");
    assert!(msg.contains("1000"));
    assert!(msg.contains("5000"));
}

// =============================================================================
// Error Context
// =============================================================================

#[test]
fn context_renders_frames() {
    let context = ErrorContext::new()
        .with_source("goblin-1")
        .with_frame("click:fly");
    let err = Error::unknown_action("fly").with_context(context);
    let rendered = err.context.as_ref().unwrap().to_string();
    assert!(rendered.starts_with("at goblin-1"));
    assert!(rendered.contains("in click:fly"));
}
