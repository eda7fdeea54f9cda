//! Event bindings: which actions an element runs for which input events.

use tabletop_foundation::{Error, ErrorContext, EventActionSpec, InputEvent, Result};
use tracing::debug;

use crate::action::ActionRegistry;

/// An action to run in response to an input event.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Invocation {
    /// Action name.
    pub action: String,
    /// Arguments, verbatim from the binding.
    pub args: Vec<String>,
    /// Whether the event's default behaviour should be suppressed.
    pub prevent_default: bool,
}

/// A validated set of event actions for one element.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EventBindings {
    bindings: Vec<EventActionSpec>,
}

impl EventBindings {
    /// Parses and validates an event action list against the built-in actions.
    ///
    /// # Errors
    /// Returns a parse error for malformed configuration, or the first
    /// validation error of any binding.
    pub fn bind(config: &str) -> Result<Self> {
        Self::bind_with(config, &ActionRegistry::standard())
    }

    /// Parses and validates an event action list against `registry`.
    ///
    /// # Errors
    /// Returns a parse error for malformed configuration, or the first
    /// validation error of any binding, with the binding as context.
    pub fn bind_with(config: &str, registry: &ActionRegistry) -> Result<Self> {
        let bindings = tabletop_parser::parse_event_actions(config)?;
        for binding in &bindings {
            registry.validate(binding).map_err(|err| {
                debug!(config, binding = %binding, error = %err, "binding rejected");
                err.with_context(
                    ErrorContext::new()
                        .with_source(config)
                        .with_frame(format!("binding {binding}")),
                )
            })?;
        }
        debug!(config, count = bindings.len(), "bound event actions");
        Ok(Self { bindings })
    }

    /// Wraps bindings that were validated elsewhere.
    #[must_use]
    pub fn from_specs(bindings: Vec<EventActionSpec>) -> Self {
        Self { bindings }
    }

    /// The bindings in declaration order.
    #[must_use]
    pub fn bindings(&self) -> &[EventActionSpec] {
        &self.bindings
    }

    /// Returns true if there are no bindings.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Returns the invocations for every binding that matches `event` exactly,
    /// in declaration order.
    #[must_use]
    pub fn dispatch(&self, event: &InputEvent) -> Vec<Invocation> {
        let invocations: Vec<Invocation> = self
            .bindings
            .iter()
            .filter(|binding| binding.key_spec.matches(event))
            .map(|binding| Invocation {
                action: binding.action.clone(),
                args: binding.args.clone(),
                prevent_default: binding.key_spec.event.prevents_default(),
            })
            .collect();
        debug!(event = ?event, matched = invocations.len(), "dispatched event");
        invocations
    }
}

impl TryFrom<&str> for EventBindings {
    type Error = Error;

    fn try_from(config: &str) -> Result<Self> {
        Self::bind(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tabletop_foundation::{ErrorKind, EventKind, ModifierKey};

    #[test]
    fn dispatch_is_exact_and_ordered() {
        let bindings =
            EventBindings::bind("click:roll(str) click[ctrl]:reset(str) click:prompt(str)").unwrap();

        let plain: Vec<String> = bindings
            .dispatch(&InputEvent::new(EventKind::Click))
            .into_iter()
            .map(|inv| inv.action)
            .collect();
        assert_eq!(plain, vec!["roll", "prompt"]);

        let ctrl = bindings.dispatch(&InputEvent::new(EventKind::Click).with_key(ModifierKey::Ctrl));
        assert_eq!(ctrl.len(), 1);
        assert_eq!(ctrl[0].action, "reset");

        let ctrl_shift = InputEvent::new(EventKind::Click)
            .with_key(ModifierKey::Ctrl)
            .with_key(ModifierKey::Shift);
        assert!(bindings.dispatch(&ctrl_shift).is_empty());
    }

    #[test]
    fn roll_with_modifier_and_roll_dispatches_on_ctrl_click() {
        let bindings = EventBindings::bind("click[ctrl]:roll(str,Mod,2d6+3)").unwrap();

        let ctrl = bindings.dispatch(&InputEvent::new(EventKind::Click).with_key(ModifierKey::Ctrl));
        assert_eq!(
            ctrl,
            vec![Invocation {
                action: "roll".to_string(),
                args: vec!["str".to_string(), "Mod".to_string(), "2d6+3".to_string()],
                prevent_default: false,
            }]
        );
        assert!(bindings.dispatch(&InputEvent::new(EventKind::Click)).is_empty());
    }

    #[test]
    fn context_menu_prevents_default() {
        let bindings = EventBindings::bind("contextmenu:prompt(hp) click:prompt(hp)").unwrap();
        let menu = bindings.dispatch(&InputEvent::new(EventKind::ContextMenu));
        assert!(menu[0].prevent_default);
        let click = bindings.dispatch(&InputEvent::new(EventKind::Click));
        assert!(!click[0].prevent_default);
    }

    #[test]
    fn bind_fails_on_first_bad_binding() {
        let err = EventBindings::bind("click:roll(str) dblclick:launch(str)").unwrap_err();
        assert!(matches!(err.kind, ErrorKind::UnknownAction(_)));
        let context = err.context.unwrap();
        assert_eq!(context.stack, vec!["binding dblclick:launch(str)"]);
    }

    #[test]
    fn bind_rejects_malformed_config() {
        assert!(EventBindings::bind("click:roll(str) ").unwrap_err().is_parse_failure());
        assert!(EventBindings::try_from("hover:roll(str)").is_err());
    }
}
