//! Concrete element catalog.
//!
//! Each element here is configuration, not logic: a fixed [`VarMap`] handed
//! to the factory plus a tag constant and a `define_*` helper that
//! registers it (idempotently) on an [`ElementRegistry`].
//!
//! [`VarMap`]: crate::VarMap
//! [`ElementRegistry`]: crate::ElementRegistry

mod frame;
mod stacked;
mod sticky;

pub use frame::{define_frame, frame_element_type, FRAME_TAG};
pub use stacked::{define_stacked, stacked_element_type, STACKED_TAG};
pub use sticky::{define_sticky, sticky_element_type, STICKY_TAG};

use crate::registry::ElementRegistry;

/// Registers the whole element catalog.
pub fn define_all(registry: &mut ElementRegistry) {
    define_sticky(registry);
    define_stacked(registry);
    define_frame(registry);
}
