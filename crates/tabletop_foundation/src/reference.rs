//! Entity/attribute references such as `hero.1:hp`.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A reference to an attribute of an element, either side optional.
///
/// `":hp"` leaves the id open and `"hero:"` leaves the attribute open. Filling
/// the gaps is up to whoever consumes the reference.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct IdAttrRef {
    /// Element id, if given.
    pub id: Option<String>,
    /// Attribute name, if given.
    pub attribute: Option<String>,
}

impl IdAttrRef {
    /// Creates a reference from its optional parts.
    #[must_use]
    pub fn new(id: Option<String>, attribute: Option<String>) -> Self {
        Self { id, attribute }
    }

    /// Returns the id, if given.
    #[must_use]
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    /// Returns the attribute name, if given.
    #[must_use]
    pub fn attribute(&self) -> Option<&str> {
        self.attribute.as_deref()
    }
}

impl fmt::Display for IdAttrRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{}",
            self.id().unwrap_or_default(),
            self.attribute().unwrap_or_default()
        )
    }
}
