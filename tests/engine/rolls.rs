//! Integration tests for roll resolution
//!
//! Tests roll modes, seeding, bounds, and the dice limit.

use proptest::prelude::*;
use tabletop_engine::{EngineConfig, RollMode, RollResolver};
use tabletop_foundation::{ErrorKind, SemanticLimit};
use tabletop_parser::parse_roll;

fn resolver(mode: RollMode) -> RollResolver {
    RollResolver::from_config(&EngineConfig::default().with_roll_mode(mode))
}

// =============================================================================
// Modes
// =============================================================================

#[test]
fn example_roll_bounds() {
    let spec = parse_roll("2d6+1d4-3").unwrap();
    assert_eq!(resolver(RollMode::Min).resolve(&spec).unwrap().total, 0);
    assert_eq!(resolver(RollMode::Max).resolve(&spec).unwrap().total, 13);
}

#[test]
fn flat_only_roll_needs_no_dice() {
    let mut resolver = RollResolver::from_config(&EngineConfig::default().with_max_dice(0));
    let outcome = resolver.resolve_str("5-2").unwrap();
    assert_eq!(outcome.total, 3);
    assert!(outcome.terms.iter().all(|term| term.rolls.is_empty()));
}

#[test]
fn limit_counts_every_term() {
    let mut resolver = RollResolver::from_config(&EngineConfig::default());
    let err = resolver.resolve_str("999d6+2d4").unwrap_err();
    assert!(matches!(
        err.kind,
        ErrorKind::LimitExceeded(SemanticLimit::MaxDice {
            limit: 1000,
            requested: 1001
        })
    ));
}

// =============================================================================
// Properties
// =============================================================================

fn roll_expression() -> impl Strategy<Value = String> {
    let face = prop::sample::select(vec![4u32, 6, 8, 10, 12, 20, 100]);
    let term = prop_oneof![
        (1u32..10, face).prop_map(|(count, die)| format!("{count}d{die}")),
        (1u32..50).prop_map(|n| n.to_string()),
    ];
    let signed = (prop_oneof![Just("+"), Just("-")], term.clone())
        .prop_map(|(sign, term)| format!("{sign}{term}"));
    (term, prop::collection::vec(signed, 0..5)).prop_map(|(first, rest)| first + &rest.concat())
}

proptest! {
    /// Seeded rolls repeat and stay within the roll's bounds.
    #[test]
    fn seeded_rolls_are_bounded(input in roll_expression(), seed in any::<u64>()) {
        let spec = parse_roll(&input).unwrap();
        let config = EngineConfig::seeded(seed);
        let first = RollResolver::from_config(&config).resolve(&spec).unwrap();
        let second = RollResolver::from_config(&config).resolve(&spec).unwrap();
        prop_assert_eq!(&first, &second);
        prop_assert!(first.total >= spec.lowest_roll_total());
        prop_assert!(first.total <= spec.highest_roll_total());
    }
}
