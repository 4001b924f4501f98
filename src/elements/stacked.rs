//! Stacked flow layout element.
//!
//! `<sw-stacked gap="s-m">` spaces its children through the
//! `--sw-stacked-gap` custom property. The `gap` attribute is a space
//! binding: spacing-scale tokens resolve through the scale
//! (`gap="s"` → `var(--sw-space-s)`), and literal lengths pass through
//! (`gap="12px"`).

use crate::binding::{BindingSpec, VarMap};
use crate::element::{create_element_type, ElementType};
use crate::normalize::NormalizeKind;
use crate::registry::ElementRegistry;

/// Tag name for the stacked layout element.
pub const STACKED_TAG: &str = "sw-stacked";

/// The stacked layout element type.
pub fn stacked_element_type() -> ElementType {
    create_element_type(VarMap::new().bind(
        "gap",
        BindingSpec::variable("--sw-stacked-gap", NormalizeKind::Space),
    ))
}

/// Registers `sw-stacked`; a no-op if already defined.
pub fn define_stacked(registry: &mut ElementRegistry) {
    registry.define(STACKED_TAG, stacked_element_type());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gap_token_resolves_through_scale() {
        let mut el = stacked_element_type().instantiate();
        el.set_attribute("gap", "s-m");
        assert_eq!(
            el.style().get_property("--sw-stacked-gap"),
            Some("var(--sw-space-s-m)")
        );
    }

    #[test]
    fn test_gap_literal_passes_through() {
        let mut el = stacked_element_type().instantiate();
        el.set_attribute("gap", "12px");
        assert_eq!(el.style().get_property("--sw-stacked-gap"), Some("12px"));
    }

    #[test]
    fn test_empty_gap_clears() {
        let mut el = stacked_element_type().instantiate();
        el.set_attribute("gap", "m");
        el.set_attribute("gap", "");
        assert!(el.style().is_empty());
    }
}
