//! Integration tests for value references
//!
//! Tests default filling and resolution against an attribute source.

use tabletop_engine::{AttributeSource, MapSource, ValueReference};
use tabletop_foundation::ErrorKind;

/// A source where every element has every attribute, named after both.
struct Echo;

impl AttributeSource for Echo {
    fn attribute(&self, id: &str, name: &str) -> Option<String> {
        Some(format!("{id}.{name}"))
    }
}

#[test]
fn custom_sources_resolve() {
    let reference = ValueReference::from_config(":hp", "hero").unwrap();
    assert_eq!(reference.resolve(&Echo).unwrap(), "hero.hp");

    let dynamic: &dyn AttributeSource = &Echo;
    assert_eq!(reference.resolve(dynamic).unwrap(), "hero.hp");
}

#[test]
fn resolve_all_stops_at_first_missing() {
    let source = MapSource::new().with("hero", "str", "14");
    let err = ValueReference::resolve_all("hero:str hero:dex hero:con", "hero", &source).unwrap_err();
    assert!(matches!(
        err.kind,
        ErrorKind::UnresolvedReference { ref attribute, .. } if attribute == "dex"
    ));
}

#[test]
fn malformed_reference_fails_before_lookup() {
    let err = ValueReference::resolve_all("hero:str,hero:dex", "hero", &Echo).unwrap_err();
    assert!(err.is_parse_failure());
}
