//! Integration tests for the combinator engine
//!
//! Tests composition of user-built grammars through the public API.

use tabletop_parser::{
    Combinator, FirstOf, GrammarError, LongestOf, Matcher, OneOf, ParseResult, Repeat, SepBy, Sequence,
    Terminal, match_prefix,
};

fn t(pattern: &str) -> Matcher {
    Terminal::new(pattern).unwrap().into()
}

// =============================================================================
// Disjunctions
// =============================================================================

#[test]
fn one_of_rejects_ambiguity() {
    let letters_or_digits = OneOf::new(vec![t("[a-z]+"), t("[0-9]+")]);
    let result = letters_or_digits.parse("abc");
    assert!(result.is_ok());

    let overlapping: Matcher = OneOf::new(vec![t("[a-z]+"), t("abc")]).into();
    let result = overlapping.parse("abc");
    assert_eq!(
        result.failure_reason().map(ToString::to_string),
        Some("MultipleAlternatives([a-z]+, abc)".to_string())
    );
}

#[test]
fn disjunction_strategies_differ() {
    let alternatives = || vec![t("d1"), t("d10"), t("d100")];
    let first: Matcher = FirstOf::new(alternatives()).into();
    let longest: Matcher = LongestOf::new(alternatives()).into();
    let one: Matcher = OneOf::new(alternatives()).into();

    assert_eq!(first.parse("d100").length(), 2);
    assert_eq!(longest.parse("d100").length(), 4);
    assert!(!one.parse("d100").is_ok());
}

// =============================================================================
// Repetition
// =============================================================================

#[test]
fn repeat_stops_at_max() {
    let matcher: Matcher = Repeat::new(2, Some(4), t("a")).unwrap().into();
    let (result, rest) = match_prefix(&matcher, "aaaaa");
    assert_eq!(result.length(), 4);
    assert_eq!(rest, "a");
}

#[test]
fn many1_needs_one() {
    let matcher: Matcher = Repeat::many1(t("x")).unwrap().into();
    assert_eq!(
        matcher.parse("y").failure_reason().map(ToString::to_string),
        Some("Expected 1 to ∞ matches, got 0".to_string())
    );
}

#[test]
fn unbounded_nullable_repeat_is_refused() {
    let nullable_sequence: Matcher = Sequence::new(vec![t("a?"), t("b*")]).into();
    assert!(matches!(
        Repeat::many(nullable_sequence),
        Err(GrammarError::ZeroWidthRepetition { .. })
    ));
    assert!(matches!(
        SepBy::new(t(",?"), t("[0-9]*")),
        Err(GrammarError::ZeroWidthRepetition { .. })
    ));
}

#[test]
fn sep_by_yields_items_only() {
    let list: Matcher = SepBy::new(t(","), t("[0-9]+")).unwrap().into();
    let result = list.parse("1,2,3");
    assert_eq!(result.length(), 5);
    let items: Vec<String> = result.nodes().map(ParseResult::text).collect();
    assert_eq!(items, vec!["1", "2", "3"]);
}

// =============================================================================
// Naming
// =============================================================================

#[test]
fn named_rules_are_producers() {
    let pair: Matcher = Sequence::new(vec![t("[a-z]+"), t("=")])
        .named("Assignment")
        .into();
    let result = pair.parse("x=1");
    assert_eq!(result.producer(), "Assignment");
    assert_eq!(result.node(0).map(ParseResult::producer), Some("[a-z]+"));
}
