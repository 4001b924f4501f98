//! The attribute-reactive element factory.
//!
//! [`create_element_type`] turns a [`VarMap`] into an [`ElementType`]: a
//! shared, immutable element definition whose observed attributes are
//! exactly the VarMap's key set. [`ElementType::instantiate`] produces
//! [`Element`] instances, each owning an independent attribute set and
//! [`InlineStyle`].
//!
//! # Reactivity contract
//!
//! On activation ([`Element::connected`]) and on every change to an
//! observed attribute, the element synchronously recomputes and re-applies
//! ALL of its bindings, not just the changed one. The full recompute is
//! intentional: style state is a pure function of the current attribute
//! values and the VarMap, so it can never drift. Re-application is
//! idempotent, recomputation writes only style slots (never attributes),
//! and no operation can fail: malformed values degrade to slot removal.

use std::sync::Arc;

use crate::binding::VarMap;
use crate::style::InlineStyle;

/// Creates an element type from a declarative attribute → style mapping.
///
/// The returned type observes exactly the VarMap's key set. The factory is
/// infallible; use [`VarMap::validate`] for early detection of malformed
/// attribute names.
///
/// # Example
///
/// ```rust
/// use starwind::{create_element_type, BindingSpec, NormalizeKind, VarMap};
///
/// let sticky = create_element_type(
///     VarMap::new()
///         .bind("top", BindingSpec::variable("--sw-sticky-top", NormalizeKind::Raw)),
/// );
///
/// let mut el = sticky.instantiate();
/// el.set_attribute("top", "10px");
/// el.connected();
/// assert_eq!(el.style().get_property("--sw-sticky-top"), Some("10px"));
/// ```
pub fn create_element_type(var_map: VarMap) -> ElementType {
    ElementType::new(var_map)
}

/// A shared element definition produced by [`create_element_type`].
///
/// Cloning is cheap: instances share one immutable VarMap.
#[derive(Debug, Clone)]
pub struct ElementType {
    var_map: Arc<VarMap>,
}

impl ElementType {
    /// Creates an element type from a VarMap.
    pub fn new(var_map: VarMap) -> Self {
        Self {
            var_map: Arc::new(var_map),
        }
    }

    /// The attributes instances of this type react to.
    pub fn observed_attributes(&self) -> impl Iterator<Item = &str> {
        self.var_map.attributes()
    }

    /// The underlying binding configuration.
    pub fn var_map(&self) -> &VarMap {
        &self.var_map
    }

    /// Creates a fresh, unconnected instance with no attributes set.
    pub fn instantiate(&self) -> Element {
        Element {
            ty: self.clone(),
            attributes: Vec::new(),
            style: InlineStyle::new(),
            connected: false,
        }
    }
}

/// A live element instance: attribute set plus derived inline style.
///
/// Instances are independent; nothing is shared between them except the
/// immutable definition.
#[derive(Debug, Clone)]
pub struct Element {
    ty: ElementType,
    attributes: Vec<(String, String)>,
    style: InlineStyle,
    connected: bool,
}

impl Element {
    /// Sets an attribute value.
    ///
    /// Changing an observed attribute triggers a synchronous full
    /// recompute of every binding. Unobserved attributes are stored but
    /// have no style effect.
    pub fn set_attribute(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();

        match self.attributes.iter_mut().find(|(n, _)| *n == name) {
            Some(entry) => entry.1 = value,
            None => self.attributes.push((name.clone(), value)),
        }

        if self.ty.var_map.observes(&name) {
            self.apply_all();
        }
    }

    /// Removes an attribute.
    ///
    /// For observed attributes this behaves like setting the empty value:
    /// the full recompute clears the affected slots.
    pub fn remove_attribute(&mut self, name: &str) {
        let had = self.attributes.iter().any(|(n, _)| n == name);
        self.attributes.retain(|(n, _)| n != name);

        if had && self.ty.var_map.observes(name) {
            self.apply_all();
        }
    }

    /// Looks up an attribute's current value.
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Activation hook: the element was inserted into a live document.
    ///
    /// Recomputes all bindings so attributes set before activation take
    /// effect immediately.
    pub fn connected(&mut self) {
        self.connected = true;
        self.apply_all();
    }

    /// Deactivation hook. Inline style state is kept, matching host
    /// behavior for a removed element.
    pub fn disconnected(&mut self) {
        self.connected = false;
    }

    /// Returns true between [`Element::connected`] and
    /// [`Element::disconnected`].
    pub fn is_connected(&self) -> bool {
        self.connected
    }

    /// The element's current inline style state.
    pub fn style(&self) -> &InlineStyle {
        &self.style
    }

    /// The element's definition.
    pub fn element_type(&self) -> &ElementType {
        &self.ty
    }

    /// Recomputes every binding from the current attribute values.
    ///
    /// A missing attribute normalizes like the empty string, clearing its
    /// target slots.
    fn apply_all(&mut self) {
        for (attr, spec) in self.ty.var_map.clone().iter() {
            let raw = self.attribute(attr).unwrap_or("");
            let value = spec.kind().normalize(raw);

            if let Some(var) = spec.style_variable() {
                self.style.apply(var, &value);
            }
            if let Some(prop) = spec.style_property() {
                self.style.apply(prop, &value);
            }
        }
    }
}
