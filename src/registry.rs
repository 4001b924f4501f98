//! Element registry with idempotent registration.
//!
//! [`ElementRegistry`] is the process-wide name → type table made explicit:
//! rather than a hidden global, callers own a registry and pass it where
//! definitions happen. [`ElementRegistry::define`] is register-if-absent,
//! so loading the same element module twice is harmless.

use std::collections::HashMap;

use crate::element::{Element, ElementType};

/// Tag-name → element-type table.
///
/// # Example
///
/// ```rust
/// use starwind::{create_element_type, BindingSpec, ElementRegistry, NormalizeKind, VarMap};
///
/// let sticky = create_element_type(
///     VarMap::new().bind("top", BindingSpec::variable("--sw-sticky-top", NormalizeKind::Raw)),
/// );
///
/// let mut registry = ElementRegistry::new();
/// assert!(registry.define("sw-sticky", sticky.clone()));
/// assert!(!registry.define("sw-sticky", sticky)); // duplicate: silent no-op
///
/// let el = registry.create("sw-sticky").unwrap();
/// assert!(el.style().is_empty());
/// ```
#[derive(Debug, Clone, Default)]
pub struct ElementRegistry {
    definitions: HashMap<String, ElementType>,
}

impl ElementRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers an element type under a tag name, if absent.
    ///
    /// Returns true if the type was newly registered. A tag that is already
    /// defined is left untouched: no error, no overwrite. This protects
    /// against the same element module being loaded more than once.
    pub fn define(&mut self, tag_name: impl Into<String>, element_type: ElementType) -> bool {
        let tag_name = tag_name.into();
        if self.definitions.contains_key(&tag_name) {
            log::debug!("element '{}' already defined, keeping first registration", tag_name);
            return false;
        }

        self.definitions.insert(tag_name, element_type);
        true
    }

    /// Looks up the type registered under a tag name.
    pub fn get(&self, tag_name: &str) -> Option<&ElementType> {
        self.definitions.get(tag_name)
    }

    /// Returns true if the tag name has a registration.
    pub fn is_defined(&self, tag_name: &str) -> bool {
        self.definitions.contains_key(tag_name)
    }

    /// Instantiates a fresh element of a registered type.
    pub fn create(&self, tag_name: &str) -> Option<Element> {
        self.definitions.get(tag_name).map(ElementType::instantiate)
    }

    /// Iterates over the registered tag names.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.definitions.keys().map(|s| s.as_str())
    }

    /// Returns the number of registrations.
    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    /// Returns true if nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }
}
