//! Aspect-ratio frame element.
//!
//! `<sw-frame ratio="16/9">` constrains its box to a fixed aspect ratio.
//! The `ratio` attribute is a ratio binding targeting both the
//! `--sw-frame-ratio` custom property (for the frame stylesheet) and the
//! standard `aspect-ratio` property, so the element works with or without
//! the stylesheet loaded.

use crate::binding::{BindingSpec, VarMap};
use crate::element::{create_element_type, ElementType};
use crate::normalize::NormalizeKind;
use crate::registry::ElementRegistry;

/// Tag name for the frame element.
pub const FRAME_TAG: &str = "sw-frame";

/// The frame element type.
pub fn frame_element_type() -> ElementType {
    create_element_type(VarMap::new().bind(
        "ratio",
        BindingSpec::variable("--sw-frame-ratio", NormalizeKind::Ratio)
            .with_property("aspect-ratio"),
    ))
}

/// Registers `sw-frame`; a no-op if already defined.
pub fn define_frame(registry: &mut ElementRegistry) {
    registry.define(FRAME_TAG, frame_element_type());
}
