//! Sticky positioning element.
//!
//! `<sw-sticky top="10px" z="3">` exposes its offsets as custom properties
//! consumed by the sticky stylesheet: `top` → `--sw-sticky-top`, `z` →
//! `--sw-sticky-z`. Both are raw bindings; any CSS length or expression is
//! accepted as-is.

use crate::binding::{BindingSpec, VarMap};
use crate::element::{create_element_type, ElementType};
use crate::normalize::NormalizeKind;
use crate::registry::ElementRegistry;

/// Tag name for the sticky element.
pub const STICKY_TAG: &str = "sw-sticky";

/// The sticky element type.
pub fn sticky_element_type() -> ElementType {
    create_element_type(
        VarMap::new()
            .bind("top", BindingSpec::variable("--sw-sticky-top", NormalizeKind::Raw))
            .bind("z", BindingSpec::variable("--sw-sticky-z", NormalizeKind::Raw)),
    )
}

/// Registers `sw-sticky`; a no-op if already defined.
pub fn define_sticky(registry: &mut ElementRegistry) {
    registry.define(STICKY_TAG, sticky_element_type());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sticky_binds_top_and_z() {
        let mut el = sticky_element_type().instantiate();
        el.set_attribute("top", "10px");
        el.set_attribute("z", "30");
        el.connected();

        assert_eq!(el.style().get_property("--sw-sticky-top"), Some("10px"));
        assert_eq!(el.style().get_property("--sw-sticky-z"), Some("30"));
    }

    #[test]
    fn test_sticky_observes_only_its_attributes() {
        let ty = sticky_element_type();
        let mut observed: Vec<&str> = ty.observed_attributes().collect();
        observed.sort_unstable();
        assert_eq!(observed, vec!["top", "z"]);
    }
}
