//! Binding specs and the VarMap configuration structure.
//!
//! A [`BindingSpec`] maps one attribute to one or two style slots through a
//! normalization kind. A [`VarMap`] collects the binding specs for one
//! element type; its key set is exactly the element's observed attribute
//! set.
//!
//! VarMaps are plain data: built once with the fluent [`VarMap::bind`]
//! builder (or deserialized from the declarative JSON shape) and never
//! mutated after they are handed to the element factory.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::normalize::NormalizeKind;

/// Declarative rule mapping one attribute to style slots.
///
/// A spec targets a custom-property slot (`var`), a standard-property slot
/// (`prop`), or both; both targets receive the same normalized value. A
/// spec with neither target is legal but has no observable effect.
///
/// The serde field names match the declarative configuration shape:
/// `{ "type": "raw", "var": "--sw-sticky-top", "prop": "top" }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BindingSpec {
    #[serde(rename = "type")]
    kind: NormalizeKind,
    #[serde(rename = "var", default, skip_serializing_if = "Option::is_none")]
    style_variable: Option<String>,
    #[serde(rename = "prop", default, skip_serializing_if = "Option::is_none")]
    style_property: Option<String>,
}

impl BindingSpec {
    /// Creates a spec with no targets. Combine with [`BindingSpec::with_variable`]
    /// or [`BindingSpec::with_property`].
    pub fn new(kind: NormalizeKind) -> Self {
        Self {
            kind,
            style_variable: None,
            style_property: None,
        }
    }

    /// Creates a spec targeting a custom property (a `--` variable).
    ///
    /// # Example
    ///
    /// ```rust
    /// use starwind::{BindingSpec, NormalizeKind};
    ///
    /// let spec = BindingSpec::variable("--sw-sticky-top", NormalizeKind::Raw);
    /// assert_eq!(spec.style_variable(), Some("--sw-sticky-top"));
    /// ```
    pub fn variable(name: impl Into<String>, kind: NormalizeKind) -> Self {
        Self::new(kind).with_variable(name)
    }

    /// Creates a spec targeting a standard style property.
    pub fn property(name: impl Into<String>, kind: NormalizeKind) -> Self {
        Self::new(kind).with_property(name)
    }

    /// Adds (or replaces) the custom-property target.
    pub fn with_variable(mut self, name: impl Into<String>) -> Self {
        self.style_variable = Some(name.into());
        self
    }

    /// Adds (or replaces) the standard-property target.
    pub fn with_property(mut self, name: impl Into<String>) -> Self {
        self.style_property = Some(name.into());
        self
    }

    /// The normalization kind applied to the raw attribute value.
    pub fn kind(&self) -> NormalizeKind {
        self.kind
    }

    /// The custom-property target, if any.
    pub fn style_variable(&self) -> Option<&str> {
        self.style_variable.as_deref()
    }

    /// The standard-property target, if any.
    pub fn style_property(&self) -> Option<&str> {
        self.style_property.as_deref()
    }

    /// Returns true if the spec targets at least one style slot.
    pub fn is_observable(&self) -> bool {
        self.style_variable.is_some() || self.style_property.is_some()
    }
}

/// Error returned when VarMap validation fails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VarMapError {
    /// An attribute key is not a well-formed attribute name.
    InvalidAttributeName { name: String },
}

impl std::fmt::Display for VarMapError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            VarMapError::InvalidAttributeName { name } => {
                write!(f, "invalid attribute name '{}': expected a lowercase name like 'top' or 'scroll-margin'", name)
            }
        }
    }
}

impl std::error::Error for VarMapError {}

/// The full set of binding specs for one element type.
///
/// Keys are attribute names and must be unique; insertion order is
/// irrelevant. The element factory treats the key set as the element's
/// observed attributes.
///
/// # Example
///
/// ```rust
/// use starwind::{BindingSpec, NormalizeKind, VarMap};
///
/// let vars = VarMap::new()
///     .bind("top", BindingSpec::variable("--sw-sticky-top", NormalizeKind::Raw))
///     .bind("z", BindingSpec::variable("--sw-sticky-z", NormalizeKind::Raw));
///
/// assert!(vars.observes("top"));
/// assert_eq!(vars.len(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VarMap {
    bindings: BTreeMap<String, BindingSpec>,
}

impl VarMap {
    /// Creates an empty VarMap.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a binding, returning the updated map for chaining.
    ///
    /// Binding the same attribute twice replaces the earlier spec.
    pub fn bind(mut self, attribute: impl Into<String>, spec: BindingSpec) -> Self {
        self.bindings.insert(attribute.into(), spec);
        self
    }

    /// Looks up the spec for an attribute.
    pub fn get(&self, attribute: &str) -> Option<&BindingSpec> {
        self.bindings.get(attribute)
    }

    /// Returns true if the attribute is part of this map's key set.
    pub fn observes(&self, attribute: &str) -> bool {
        self.bindings.contains_key(attribute)
    }

    /// Iterates over the observed attribute names.
    pub fn attributes(&self) -> impl Iterator<Item = &str> {
        self.bindings.keys().map(|s| s.as_str())
    }

    /// Iterates over `(attribute, spec)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &BindingSpec)> {
        self.bindings.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Returns the number of bindings.
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    /// Returns true if no bindings are present.
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Validates that every key is a well-formed attribute name.
    ///
    /// A well-formed name starts with a lowercase ASCII letter and contains
    /// only lowercase letters, digits, and hyphens. Specs without a target
    /// are legal (they simply have no effect) and are only noted at debug
    /// level.
    ///
    /// Validation is optional: the factory accepts any VarMap, and this
    /// check exists for early error detection at definition time.
    pub fn validate(&self) -> Result<(), VarMapError> {
        for (name, spec) in self.iter() {
            if !is_valid_attribute_name(name) {
                return Err(VarMapError::InvalidAttributeName {
                    name: name.to_string(),
                });
            }
            if !spec.is_observable() {
                log::debug!("binding for '{}' targets no style slot", name);
            }
        }
        Ok(())
    }
}

fn is_valid_attribute_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_lowercase() => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
}
