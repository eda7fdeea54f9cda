//! Known actions and their argument signatures.

use std::collections::HashMap;

use tabletop_foundation::{Arity, Error, EventActionSpec, Result};

/// The signature of an action an event may trigger.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ActionSignature {
    /// Action name as written in bindings.
    pub name: String,
    /// Accepted argument counts.
    pub arity: Arity,
    /// Whether the last argument is a roll expression when more than one
    /// argument is given.
    pub trailing_roll: bool,
}

impl ActionSignature {
    /// Creates a signature with no roll argument.
    #[must_use]
    pub fn new(name: impl Into<String>, arity: Arity) -> Self {
        Self {
            name: name.into(),
            arity,
            trailing_roll: false,
        }
    }

    /// Marks the last of two or more arguments as a roll expression.
    #[must_use]
    pub const fn with_trailing_roll(mut self) -> Self {
        self.trailing_roll = true;
        self
    }

    /// Checks a binding's arguments against this signature.
    ///
    /// A trailing roll is checked with surrounding whitespace trimmed.
    ///
    /// # Errors
    /// Returns `ArityMismatch` for a wrong argument count, or a parse error
    /// for an invalid roll argument.
    pub fn check(&self, args: &[String]) -> Result<()> {
        if !self.arity.accepts(args.len()) {
            return Err(Error::arity_mismatch(&self.name, self.arity, args.len()));
        }
        let trailing = self.trailing_roll && args.len() > 1;
        if let Some(roll) = args.last().filter(|_| trailing) {
            tabletop_parser::parse_roll(roll.trim())?;
        }
        Ok(())
    }
}

/// Registry of actions that bindings may name.
#[derive(Clone, Debug, Default)]
pub struct ActionRegistry {
    actions: HashMap<String, ActionSignature>,
}

impl ActionRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry of the built-in actions:
    ///
    /// - `roll(attribute[, modifier][, roll])` rolls for an attribute, `d20`
    ///   by default; the roll is always the last argument
    /// - `input(attribute)` asks for a new value
    /// - `reset(attribute)` restores the initial value
    /// - `prompt(attribute)` shows the value
    #[must_use]
    pub fn standard() -> Self {
        let mut registry = Self::new();
        registry.register(ActionSignature::new("roll", Arity::Range(1, 3)).with_trailing_roll());
        registry.register(ActionSignature::new("input", Arity::Exact(1)));
        registry.register(ActionSignature::new("reset", Arity::Exact(1)));
        registry.register(ActionSignature::new("prompt", Arity::Exact(1)));
        registry
    }

    /// Registers an action, replacing any earlier one of the same name.
    pub fn register(&mut self, signature: ActionSignature) {
        self.actions.insert(signature.name.clone(), signature);
    }

    /// Looks up an action by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&ActionSignature> {
        self.actions.get(name)
    }

    /// Returns true if an action with this name is registered.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.actions.contains_key(name)
    }

    /// Registered action names, sorted.
    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.actions.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Checks that a binding names a known action with valid arguments.
    ///
    /// # Errors
    /// Returns `UnknownAction`, `ArityMismatch`, or a roll parse error.
    pub fn validate(&self, spec: &EventActionSpec) -> Result<()> {
        self.get(&spec.action)
            .ok_or_else(|| Error::unknown_action(&spec.action))?
            .check(&spec.args)
    }
}
