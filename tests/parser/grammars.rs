//! Integration tests for the configuration grammars
//!
//! Tests extraction of every documented example and the failure surface.

use tabletop_foundation::{
    ErrorKind, EventActionSpec, EventKeySpec, EventKind, IdAttrRef, ModifierKey, RollTerm, Sign,
};
use tabletop_parser::{
    Failure, grammars, parse_event_action, parse_event_actions, parse_event_keys,
    parse_events_with_keys, parse_id_attr, parse_id_attrs, parse_roll,
};

// =============================================================================
// Roll
// =============================================================================

#[test]
fn roll_examples() {
    assert_eq!(
        parse_roll("2d6+1d4-3").unwrap().terms(),
        &[
            RollTerm::new(2, 6, Sign::Plus),
            RollTerm::new(1, 4, Sign::Plus),
            RollTerm::flat(3, Sign::Minus),
        ]
    );
    assert_eq!(
        parse_roll("d20").unwrap().terms(),
        &[RollTerm::new(1, 20, Sign::Plus)]
    );
    assert_eq!(parse_roll("5").unwrap().terms(), &[RollTerm::flat(5, Sign::Plus)]);
}

#[test]
fn every_face_is_accepted() {
    for face in RollTerm::FACES {
        let spec = parse_roll(&format!("3d{face}")).unwrap();
        assert_eq!(spec.terms(), &[RollTerm::new(3, face, Sign::Plus)]);
    }
}

#[test]
fn d100_beats_d10() {
    assert_eq!(parse_roll("d100").unwrap().terms()[0].die, 100);
    assert_eq!(parse_roll("d10+1").unwrap().terms()[0].die, 10);
}

#[test]
fn malformed_rolls_are_rejected() {
    for input in ["", "+2d6", "2d", "2d7", "0d6", "2d6+", "2d6 + 1", "d20-", "1234567890"] {
        let err = parse_roll(input).unwrap_err();
        assert!(err.is_parse_failure(), "{input:?} gave {err}");
    }
}

#[test]
fn trailing_input_is_incomplete() {
    let err = parse_roll("2d6 extra").unwrap_err();
    assert!(matches!(err.kind, ErrorKind::Incomplete { consumed: 3, .. }));
}

// =============================================================================
// IdAttr
// =============================================================================

#[test]
fn id_attr_examples() {
    assert_eq!(
        parse_id_attr("hero.1:hp").unwrap(),
        IdAttrRef::new(Some("hero.1".into()), Some("hp".into()))
    );
    assert_eq!(
        parse_id_attr(":initiative").unwrap(),
        IdAttrRef::new(None, Some("initiative".into()))
    );
    assert_eq!(
        parse_id_attr("target:").unwrap(),
        IdAttrRef::new(Some("target".into()), None)
    );
}

#[test]
fn attributes_cannot_contain_dots() {
    assert!(parse_id_attr("hero:hp.max").is_err());
    assert!(parse_id_attr("1hero:hp").is_err());
}

#[test]
fn id_attr_lists() {
    let refs = parse_id_attrs("hero:str :dex goblin.2:").unwrap();
    assert_eq!(refs.len(), 3);
    assert_eq!(refs[1].attribute(), Some("dex"));
    assert!(parse_id_attrs("hero:str  :dex").is_err());
}

// =============================================================================
// Events
// =============================================================================

#[test]
fn event_keys_example() {
    let spec = parse_event_keys("click[ctrl,shift]").unwrap();
    assert_eq!(
        spec,
        EventKeySpec {
            event: EventKind::Click,
            alt: false,
            ctrl: true,
            shift: true
        }
    );
}

#[test]
fn every_event_name_parses() {
    for kind in EventKind::ALL {
        assert_eq!(parse_event_keys(kind.as_str()).unwrap(), EventKeySpec::new(kind));
    }
    assert!(parse_event_keys("hover").is_err());
    assert!(parse_event_keys("click[]").is_err());
    assert!(parse_event_keys("click[meta]").is_err());
}

#[test]
fn event_lists() {
    let specs = parse_events_with_keys("click dblclick[alt]").unwrap();
    assert_eq!(
        specs,
        vec![
            EventKeySpec::new(EventKind::Click),
            EventKeySpec::new(EventKind::DblClick).with_key(ModifierKey::Alt),
        ]
    );
}

#[test]
fn event_action_example() {
    assert_eq!(
        parse_event_action("click[ctrl]:roll(str,Mod,2d6+3)").unwrap(),
        EventActionSpec {
            key_spec: EventKeySpec::new(EventKind::Click).with_key(ModifierKey::Ctrl),
            action: "roll".into(),
            args: vec!["str".into(), "Mod".into(), "2d6+3".into()],
        }
    );
}

#[test]
fn empty_argument_list_is_rejected() {
    assert!(parse_event_action("click:roll()").is_err());
    assert!(parse_event_action("click:roll(str,)").is_err());
}

#[test]
fn event_action_lists() {
    let specs = parse_event_actions("click:roll(str) contextmenu:prompt(hp)").unwrap();
    assert_eq!(specs.len(), 2);
    assert_eq!(specs[1].key_spec.event, EventKind::ContextMenu);
}

// =============================================================================
// Raw trees
// =============================================================================

#[test]
fn parse_complete_reports_unconsumed_bytes() {
    let result = grammars().id_attr.parse_complete("hero:hp!");
    assert_eq!(
        result.failure_reason().map(ToString::to_string),
        Some("Unconsumed(1 of 8 bytes)".to_string())
    );
    assert!(matches!(
        result.failure_reason(),
        Some(Failure::Unconsumed { .. })
    ));
}

#[test]
fn parsing_is_idempotent() {
    let g = grammars();
    for input in ["click[ctrl]:roll(str,Mod,2d6+3)", "click:", "nope"] {
        assert_eq!(g.event_action.parse(input), g.event_action.parse(input));
    }
}
