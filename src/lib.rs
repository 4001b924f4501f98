//! Attribute-reactive layout elements.
//!
//! starwind elements are declarative: every element is a fixed mapping
//! from attribute names to style slots (custom properties or standard
//! properties), and the element's inline style is always a pure function
//! of its current attribute values. Attribute values run through one of
//! four normalization kinds before they reach a slot; an empty normalized
//! value clears the slot instead of writing garbage.
//!
//! The crate provides:
//!
//! - [`create_element_type`]: the factory turning a [`VarMap`] into an
//!   element type
//! - [`Element`] / [`ElementType`]: instances and shared definitions
//! - [`ElementRegistry`]: explicit tag → type table with idempotent
//!   registration
//! - [`normalize`](crate::normalize): the pure normalization helpers
//! - [`elements`]: the concrete element catalog (`sw-sticky`,
//!   `sw-stacked`, `sw-frame`)
//! - [`build`]: build configuration resolution for element packages
//!
//! # Quick start
//!
//! ```rust
//! use starwind::{elements, ElementRegistry};
//!
//! let mut registry = ElementRegistry::new();
//! elements::define_all(&mut registry);
//!
//! let mut sticky = registry.create("sw-sticky").unwrap();
//! sticky.set_attribute("top", "10px");
//! sticky.connected();
//!
//! assert_eq!(sticky.style().css_text(), "--sw-sticky-top: 10px");
//!
//! // Clearing the attribute removes the style slot again.
//! sticky.set_attribute("top", "");
//! assert!(sticky.style().is_empty());
//! ```
//!
//! # Custom elements
//!
//! ```rust
//! use starwind::{create_element_type, BindingSpec, NormalizeKind, VarMap};
//!
//! let callout = create_element_type(
//!     VarMap::new()
//!         .bind("inset", BindingSpec::variable("--sw-callout-inset", NormalizeKind::Space))
//!         .bind("ratio", BindingSpec::property("aspect-ratio", NormalizeKind::Ratio)),
//! );
//!
//! let mut el = callout.instantiate();
//! el.set_attribute("inset", "s-m");
//! assert_eq!(
//!     el.style().get_property("--sw-callout-inset"),
//!     Some("var(--sw-space-s-m)"),
//! );
//! ```

mod binding;
pub mod build;
mod element;
pub mod elements;
pub mod normalize;
mod registry;
mod style;

pub use binding::{BindingSpec, VarMap, VarMapError};
pub use element::{create_element_type, Element, ElementType};
pub use normalize::{
    is_safe_token, normalize_number, normalize_ratio, normalize_raw, normalize_space,
    NormalizeKind, SPACE_VAR_PREFIX,
};
pub use registry::ElementRegistry;
pub use style::InlineStyle;
