//! Turning successful parse trees into typed values.
//!
//! Extraction walks a tree positionally; the grammar fixes where every piece
//! sits. A tree that does not have that shape was not produced by the
//! matching grammar, which is a programming error, so these functions panic
//! instead of returning `Result`.

use tabletop_foundation::{
    EventActionSpec, EventKeySpec, EventKind, IdAttrRef, ModifierKey, RollSpec, RollTerm, Sign,
};

use crate::grammar::rules;
use crate::result::ParseResult;

fn expect_rule<'a>(tree: &'a ParseResult, rule: &str) -> &'a ParseResult {
    assert!(
        tree.is_ok() && tree.producer() == rule,
        "expected a successful {rule} node, found {} ({:?})",
        tree.producer(),
        tree.failure_reason()
    );
    tree
}

fn child<'a>(tree: &'a ParseResult, index: usize) -> &'a ParseResult {
    match tree.node(index) {
        Some(node) => node,
        None => panic!("{} node has no child node at {index}", tree.producer()),
    }
}

/// Text of an `Optional` node's single match, if present.
fn optional_text(tree: &ParseResult) -> Option<String> {
    tree.node(0).map(ParseResult::text)
}

fn number(text: &str) -> u32 {
    text.parse()
        .unwrap_or_else(|err| panic!("'{text}' is not a valid count: {err}"))
}

/// Extracts a roll from a `Roll` tree.
///
/// The first term is always positive.
///
/// # Panics
/// Panics if `tree` is not a successful `Roll` node.
#[must_use]
pub fn roll(tree: &ParseResult) -> RollSpec {
    let roll = expect_rule(tree, rules::ROLL);
    let mut terms = vec![roll_term(child(roll, 0), Sign::Plus)];
    for signed in child(roll, 1).nodes() {
        let sign_text = child(signed, 0).text();
        let mut chars = sign_text.chars();
        let sign = match (chars.next().and_then(Sign::from_char), chars.next()) {
            (Some(sign), None) => sign,
            _ => panic!("'{sign_text}' is not a roll sign"),
        };
        terms.push(roll_term(child(signed, 1), sign));
    }
    match RollSpec::from_terms(terms) {
        Some(spec) => spec,
        None => unreachable!("a roll always has a first term"),
    }
}

fn roll_term(value: &ParseResult, sign: Sign) -> RollTerm {
    let value = expect_rule(value, rules::ROLL_VALUE);
    let winner = child(value, 0);
    if winner.producer() == rules::DIE {
        let count = optional_text(child(winner, 0)).map_or(1, |text| number(&text));
        let die = number(&child(winner, 2).text());
        RollTerm::new(count, die, sign)
    } else {
        RollTerm::flat(number(&winner.text()), sign)
    }
}

/// Extracts a reference from an `IdAttr` tree. Absent parts stay `None`.
///
/// # Panics
/// Panics if `tree` is not a successful `IdAttr` node.
#[must_use]
pub fn id_attr(tree: &ParseResult) -> IdAttrRef {
    let node = expect_rule(tree, rules::ID_ATTR);
    IdAttrRef::new(
        optional_text(child(node, 0)),
        optional_text(child(node, 2)),
    )
}

/// Extracts every reference from an `IdAttrs` tree.
///
/// # Panics
/// Panics if `tree` is not a successful `IdAttrs` node.
#[must_use]
pub fn id_attrs(tree: &ParseResult) -> Vec<IdAttrRef> {
    expect_rule(tree, rules::ID_ATTRS)
        .nodes()
        .map(id_attr)
        .collect()
}

/// Extracts an event key spec from an `EventWithKeys` tree.
///
/// Modifier keys not listed stay released; a repeated key is the same as
/// listing it once.
///
/// # Panics
/// Panics if `tree` is not a successful `EventWithKeys` node.
#[must_use]
pub fn event_keys(tree: &ParseResult) -> EventKeySpec {
    let node = expect_rule(tree, rules::EVENT_WITH_KEYS);
    let name = child(node, 0).text();
    let event: EventKind = name
        .parse()
        .unwrap_or_else(|err| panic!("event name '{name}' rejected: {err}"));

    let mut spec = EventKeySpec::new(event);
    if let Some(key_list) = child(node, 1).node(0) {
        for key in child(key_list, 1).nodes() {
            let key_name = key.text();
            let key: ModifierKey = key_name
                .parse()
                .unwrap_or_else(|err| panic!("modifier key '{key_name}' rejected: {err}"));
            spec = spec.with_key(key);
        }
    }
    spec
}

/// Extracts every event key spec from an `EventsWithKeys` tree.
///
/// # Panics
/// Panics if `tree` is not a successful `EventsWithKeys` node.
#[must_use]
pub fn events_with_keys(tree: &ParseResult) -> Vec<EventKeySpec> {
    expect_rule(tree, rules::EVENTS_WITH_KEYS)
        .nodes()
        .map(event_keys)
        .collect()
}

/// Extracts an event action from an `EventAction` tree.
///
/// Arguments are kept verbatim, including surrounding whitespace.
///
/// # Panics
/// Panics if `tree` is not a successful `EventAction` node.
#[must_use]
pub fn event_action(tree: &ParseResult) -> EventActionSpec {
    let node = expect_rule(tree, rules::EVENT_ACTION);
    let args = child(node, 3)
        .node(0)
        .map(|args| child(args, 1).nodes().map(ParseResult::text).collect())
        .unwrap_or_default();
    EventActionSpec {
        key_spec: event_keys(child(node, 0)),
        action: child(node, 2).text(),
        args,
    }
}

/// Extracts every event action from an `EventActions` tree.
///
/// # Panics
/// Panics if `tree` is not a successful `EventActions` node.
#[must_use]
pub fn event_actions(tree: &ParseResult) -> Vec<EventActionSpec> {
    expect_rule(tree, rules::EVENT_ACTIONS)
        .nodes()
        .map(event_action)
        .collect()
}
