//! Event bindings: which interaction event, with which modifier keys, runs
//! which action.
//!
//! Matching is exact. A spec of `click[ctrl]` fires for a click with only
//! ctrl held; a click with ctrl and shift held does not match it.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Interaction events a binding can listen for.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum EventKind {
    /// Primary button click.
    Click,
    /// Double click.
    DblClick,
    /// Non-primary button click.
    AuxClick,
    /// Context-menu request (usually a right click).
    ContextMenu,
}

impl EventKind {
    /// Every event kind, in the order the grammar lists them.
    pub const ALL: [Self; 4] = [Self::Click, Self::DblClick, Self::AuxClick, Self::ContextMenu];

    /// Returns the configuration name of this event.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Click => "click",
            Self::DblClick => "dblclick",
            Self::AuxClick => "auxclick",
            Self::ContextMenu => "contextmenu",
        }
    }

    /// Returns true if handling this event should suppress the native behavior.
    #[must_use]
    pub const fn prevents_default(self) -> bool {
        matches!(self, Self::ContextMenu)
    }
}

impl FromStr for EventKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| format!("unknown event '{s}'"))
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Modifier keys a binding can require.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ModifierKey {
    /// The alt/option key.
    Alt,
    /// The control key.
    Ctrl,
    /// The shift key.
    Shift,
}

impl ModifierKey {
    /// Every modifier key.
    pub const ALL: [Self; 3] = [Self::Alt, Self::Ctrl, Self::Shift];

    /// Returns the configuration name of this key.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Alt => "alt",
            Self::Ctrl => "ctrl",
            Self::Shift => "shift",
        }
    }
}

impl FromStr for ModifierKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|key| key.as_str() == s)
            .ok_or_else(|| format!("unknown modifier key '{s}'"))
    }
}

/// A snapshot of an interaction event delivered by the presentation layer.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct InputEvent {
    /// Which event fired.
    pub event: EventKind,
    /// Whether alt was held.
    pub alt: bool,
    /// Whether ctrl was held.
    pub ctrl: bool,
    /// Whether shift was held.
    pub shift: bool,
}

impl InputEvent {
    /// Creates an event with no modifier keys held.
    #[must_use]
    pub const fn new(event: EventKind) -> Self {
        Self {
            event,
            alt: false,
            ctrl: false,
            shift: false,
        }
    }

    /// Marks a modifier key as held.
    #[must_use]
    pub const fn with_key(mut self, key: ModifierKey) -> Self {
        match key {
            ModifierKey::Alt => self.alt = true,
            ModifierKey::Ctrl => self.ctrl = true,
            ModifierKey::Shift => self.shift = true,
        }
        self
    }
}

/// An event name plus the exact set of modifier keys it requires.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct EventKeySpec {
    /// Which event to listen for.
    pub event: EventKind,
    /// Alt must be held (true) or released (false).
    pub alt: bool,
    /// Ctrl must be held (true) or released (false).
    pub ctrl: bool,
    /// Shift must be held (true) or released (false).
    pub shift: bool,
}

impl EventKeySpec {
    /// Creates a spec with every modifier required to be released.
    #[must_use]
    pub const fn new(event: EventKind) -> Self {
        Self {
            event,
            alt: false,
            ctrl: false,
            shift: false,
        }
    }

    /// Requires a modifier key to be held.
    #[must_use]
    pub const fn with_key(mut self, key: ModifierKey) -> Self {
        match key {
            ModifierKey::Alt => self.alt = true,
            ModifierKey::Ctrl => self.ctrl = true,
            ModifierKey::Shift => self.shift = true,
        }
        self
    }

    /// Returns true iff the event is the same kind and every modifier flag is equal.
    #[must_use]
    pub fn matches(&self, event: &InputEvent) -> bool {
        self.event == event.event
            && self.alt == event.alt
            && self.ctrl == event.ctrl
            && self.shift == event.shift
    }
}

impl fmt::Display for EventKeySpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.event)?;
        let held: Vec<&str> = [
            (self.alt, ModifierKey::Alt),
            (self.ctrl, ModifierKey::Ctrl),
            (self.shift, ModifierKey::Shift),
        ]
        .into_iter()
        .filter(|(on, _)| *on)
        .map(|(_, key)| key.as_str())
        .collect();
        if !held.is_empty() {
            write!(f, "[{}]", held.join(","))?;
        }
        Ok(())
    }
}

/// An event binding that runs a named action with positional arguments.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct EventActionSpec {
    /// The triggering event and modifier keys.
    pub key_spec: EventKeySpec,
    /// Name of the action to run.
    pub action: String,
    /// Untyped positional arguments, possibly empty.
    pub args: Vec<String>,
}

impl fmt::Display for EventActionSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.key_spec, self.action)?;
        if !self.args.is_empty() {
            write!(f, "({})", self.args.join(","))?;
        }
        Ok(())
    }
}
