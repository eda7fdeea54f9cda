//! Integration tests for typed configuration values
//!
//! Tests rendering, derived totals and the exact-match law.

use proptest::prelude::*;
use tabletop_foundation::{
    Arity, EventActionSpec, EventKeySpec, EventKind, IdAttrRef, InputEvent, ModifierKey, RollSpec,
    RollTerm, Sign,
};

// =============================================================================
// Rolls
// =============================================================================

#[test]
fn roll_display_omits_single_count() {
    let spec = RollSpec::from_terms(vec![
        RollTerm::new(2, 6, Sign::Plus),
        RollTerm::new(1, 4, Sign::Plus),
        RollTerm::flat(3, Sign::Minus),
    ])
    .unwrap();
    assert_eq!(spec.to_string(), "2d6+d4-3");
}

#[test]
fn roll_totals() {
    let spec = RollSpec::from_terms(vec![
        RollTerm::new(2, 6, Sign::Plus),
        RollTerm::new(1, 4, Sign::Minus),
        RollTerm::flat(3, Sign::Plus),
    ])
    .unwrap();
    assert_eq!(spec.dice_count(), 3);
    assert_eq!(spec.lowest_roll_total(), 2 - 4 + 3);
    assert_eq!(spec.highest_roll_total(), 12 - 1 + 3);
}

#[test]
fn empty_roll_is_rejected() {
    assert!(RollSpec::from_terms(vec![]).is_none());
}

#[test]
fn default_check_is_d20() {
    assert_eq!(RollSpec::d20().to_string(), "d20");
}

// =============================================================================
// References and Events
// =============================================================================

#[test]
fn id_attr_display() {
    let reference = IdAttrRef::new(Some("hero.1".into()), None);
    assert_eq!(reference.to_string(), "hero.1:");
    assert_eq!(IdAttrRef::default().to_string(), ":");
}

#[test]
fn event_names_round_trip() {
    for kind in EventKind::ALL {
        assert_eq!(kind.as_str().parse::<EventKind>(), Ok(kind));
    }
    assert!("hover".parse::<EventKind>().is_err());
    assert!("meta".parse::<ModifierKey>().is_err());
}

#[test]
fn only_context_menu_prevents_default() {
    let preventing: Vec<EventKind> = EventKind::ALL
        .into_iter()
        .filter(|kind| kind.prevents_default())
        .collect();
    assert_eq!(preventing, vec![EventKind::ContextMenu]);
}

#[test]
fn event_action_display() {
    let spec = EventActionSpec {
        key_spec: EventKeySpec::new(EventKind::Click).with_key(ModifierKey::Ctrl),
        action: "roll".into(),
        args: vec!["str".into(), "Mod".into(), "2d6+3".into()],
    };
    assert_eq!(spec.to_string(), "click[ctrl]:roll(str,Mod,2d6+3)");
}

#[test]
fn arity_display() {
    assert_eq!(Arity::Exact(1).to_string(), "1");
    assert_eq!(Arity::Range(1, 2).to_string(), "1..=2");
    assert!(Arity::Variadic(1).accepts(7));
    assert!(!Arity::Range(1, 2).accepts(3));
}

fn with_keys(event: EventKind, alt: bool, ctrl: bool, shift: bool) -> (EventKeySpec, InputEvent) {
    let mut spec = EventKeySpec::new(event);
    let mut input = InputEvent::new(event);
    for (on, key) in [(alt, ModifierKey::Alt), (ctrl, ModifierKey::Ctrl), (shift, ModifierKey::Shift)] {
        if on {
            spec = spec.with_key(key);
            input = input.with_key(key);
        }
    }
    (spec, input)
}

proptest! {
    /// A spec matches an event iff every flag is equal.
    #[test]
    fn exact_match_law(
        spec_keys in any::<(bool, bool, bool)>(),
        event_keys in any::<(bool, bool, bool)>(),
    ) {
        let (spec, _) = with_keys(EventKind::Click, spec_keys.0, spec_keys.1, spec_keys.2);
        let (_, event) = with_keys(EventKind::Click, event_keys.0, event_keys.1, event_keys.2);
        prop_assert_eq!(spec.matches(&event), spec_keys == event_keys);
    }
}
