//! Property tests for the grammars
//!
//! Tests that rendered values parse back and that ranges hold.

use proptest::prelude::*;
use tabletop_foundation::{EventKeySpec, EventKind, ModifierKey};
use tabletop_parser::{parse_events_with_keys, parse_id_attr};

fn event_spec() -> impl Strategy<Value = EventKeySpec> {
    (
        prop::sample::select(EventKind::ALL.to_vec()),
        any::<(bool, bool, bool)>(),
    )
        .prop_map(|(kind, (alt, ctrl, shift))| {
            let mut spec = EventKeySpec::new(kind);
            for (on, key) in [(alt, ModifierKey::Alt), (ctrl, ModifierKey::Ctrl), (shift, ModifierKey::Shift)] {
                if on {
                    spec = spec.with_key(key);
                }
            }
            spec
        })
}

proptest! {
    /// Rendered event lists parse back to the same specs.
    #[test]
    fn event_lists_reparse(specs in prop::collection::vec(event_spec(), 1..5)) {
        let rendered = specs.iter().map(ToString::to_string).collect::<Vec<_>>().join(" ");
        prop_assert_eq!(parse_events_with_keys(&rendered).unwrap(), specs);
    }

    /// Any identifier and attribute pair survives a round trip.
    #[test]
    fn id_attr_reparses(id in "[a-z_][a-z0-9_.]{0,8}", attribute in "[a-z_][a-z0-9_]{0,8}") {
        let reference = parse_id_attr(&format!("{id}:{attribute}")).unwrap();
        prop_assert_eq!(reference.id(), Some(id.as_str()));
        prop_assert_eq!(reference.attribute(), Some(attribute.as_str()));
    }
}
