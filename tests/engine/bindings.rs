//! Integration tests for event bindings
//!
//! Tests bind-time validation and exact-match dispatch.

use tabletop_engine::{ActionRegistry, ActionSignature, EventBindings};
use tabletop_foundation::{Arity, ErrorKind, EventKind, InputEvent, ModifierKey};

#[test]
fn ctrl_only_click_does_not_match_ctrl_shift_binding() {
    let bindings = EventBindings::bind("click[ctrl,shift]:roll(str,Mod,2d6+3)").unwrap();
    let ctrl = InputEvent::new(EventKind::Click).with_key(ModifierKey::Ctrl);
    assert!(bindings.dispatch(&ctrl).is_empty());

    let invocations = bindings.dispatch(&ctrl.with_key(ModifierKey::Shift));
    assert_eq!(invocations.len(), 1);
    assert_eq!(invocations[0].args, vec!["str", "Mod", "2d6+3"]);
}

#[test]
fn roll_with_attribute_only_uses_default_roll() {
    assert!(EventBindings::bind("dblclick:roll(initiative)").is_ok());
}

#[test]
fn bad_roll_argument_fails_at_bind_time() {
    let err = EventBindings::bind("click:roll(str,3d5)").unwrap_err();
    assert!(err.is_parse_failure());
    assert_eq!(
        err.context.unwrap().source.as_deref(),
        Some("click:roll(str,3d5)")
    );
}

#[test]
fn arity_is_checked() {
    let err = EventBindings::bind("click:input").unwrap_err();
    assert!(matches!(err.kind, ErrorKind::ArityMismatch { actual: 0, .. }));
}

#[test]
fn custom_registry() {
    let mut registry = ActionRegistry::new();
    registry.register(ActionSignature::new("log", Arity::Variadic(0)));
    let bindings = EventBindings::bind_with("auxclick:log(a,b,c) click:log", &registry).unwrap();
    assert_eq!(bindings.bindings().len(), 2);
    assert!(EventBindings::bind_with("click:roll(str)", &registry).is_err());
}
