//! Resolving `id:attribute` references against live element state.

use std::collections::HashMap;
use std::fmt;

use tabletop_foundation::{Error, IdAttrRef, Result};
use tracing::debug;

/// Attribute read when a reference names none.
pub const DEFAULT_ATTRIBUTE: &str = "value";

/// Read access to element attributes, provided by the presentation layer.
pub trait AttributeSource {
    /// Returns the attribute's current value, or `None` if the element or
    /// attribute does not exist.
    fn attribute(&self, id: &str, name: &str) -> Option<String>;
}

/// An in-memory [`AttributeSource`].
#[derive(Clone, Debug, Default)]
pub struct MapSource {
    values: HashMap<(String, String), String>,
}

impl MapSource {
    /// Creates an empty source.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method to add an attribute value.
    #[must_use]
    pub fn with(mut self, id: &str, name: &str, value: &str) -> Self {
        self.insert(id, name, value);
        self
    }

    /// Sets an attribute value.
    pub fn insert(&mut self, id: &str, name: &str, value: &str) {
        self.values
            .insert((id.to_string(), name.to_string()), value.to_string());
    }
}

impl AttributeSource for MapSource {
    fn attribute(&self, id: &str, name: &str) -> Option<String> {
        self.values
            .get(&(id.to_string(), name.to_string()))
            .cloned()
    }
}

/// A fully specified reference to one attribute of one element.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ValueReference {
    /// Element id.
    pub id: String,
    /// Attribute name.
    pub attribute: String,
}

impl ValueReference {
    /// Creates a reference.
    #[must_use]
    pub fn new(id: impl Into<String>, attribute: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            attribute: attribute.into(),
        }
    }

    /// Fills the gaps of a parsed reference: a missing id is the referring
    /// element itself and a missing attribute is [`DEFAULT_ATTRIBUTE`].
    #[must_use]
    pub fn from_ref(reference: &IdAttrRef, self_id: &str) -> Self {
        Self::new(
            reference.id().unwrap_or(self_id),
            reference.attribute().unwrap_or(DEFAULT_ATTRIBUTE),
        )
    }

    /// Parses a reference such as `hero:hp` and fills its gaps.
    ///
    /// # Errors
    /// Returns a parse error unless `config` is a valid reference.
    pub fn from_config(config: &str, self_id: &str) -> Result<Self> {
        let reference = tabletop_parser::parse_id_attr(config)?;
        Ok(Self::from_ref(&reference, self_id))
    }

    /// Parses a space-separated reference list and fills every gap.
    ///
    /// # Errors
    /// Returns a parse error unless `config` is a valid reference list.
    pub fn all_from_config(config: &str, self_id: &str) -> Result<Vec<Self>> {
        Ok(tabletop_parser::parse_id_attrs(config)?
            .iter()
            .map(|reference| Self::from_ref(reference, self_id))
            .collect())
    }

    /// Reads the referenced value.
    ///
    /// # Errors
    /// Returns `UnresolvedReference` if the source has no such value.
    pub fn resolve<S: AttributeSource + ?Sized>(&self, source: &S) -> Result<String> {
        source.attribute(&self.id, &self.attribute).ok_or_else(|| {
            debug!(reference = %self, "unresolved reference");
            Error::unresolved_reference(&self.id, &self.attribute)
        })
    }

    /// Parses a reference list and reads every value, in order.
    ///
    /// # Errors
    /// Returns a parse error, or the first `UnresolvedReference`.
    pub fn resolve_all<S: AttributeSource + ?Sized>(
        config: &str,
        self_id: &str,
        source: &S,
    ) -> Result<Vec<String>> {
        Self::all_from_config(config, self_id)?
            .iter()
            .map(|reference| reference.resolve(source))
            .collect()
    }
}

impl fmt::Display for ValueReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.id, self.attribute)
    }
}
