//! Inline style slot map.
//!
//! [`InlineStyle`] models a host element's inline style declaration: a map
//! from slot name to value, where a slot is either a standard property
//! (`top`, `aspect-ratio`) or a custom property beginning with `--`.
//!
//! The one piece of behavior beyond a plain map is [`InlineStyle::apply`]:
//! an empty value removes the slot, a non-empty value overwrites it. Both
//! directions are idempotent.

use std::collections::BTreeMap;

/// An element's inline style state.
///
/// Slots are kept in a sorted map so [`InlineStyle::css_text`] is
/// deterministic regardless of write order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InlineStyle {
    properties: BTreeMap<String, String>,
}

impl InlineStyle {
    /// Creates an empty style map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a slot, overwriting any prior value.
    pub fn set_property(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.properties.insert(name.into(), value.into());
    }

    /// Removes a slot, returning its prior value.
    ///
    /// Removing an absent slot is a no-op.
    pub fn remove_property(&mut self, name: &str) -> Option<String> {
        self.properties.remove(name)
    }

    /// Looks up a slot's value.
    pub fn get_property(&self, name: &str) -> Option<&str> {
        self.properties.get(name).map(|s| s.as_str())
    }

    /// Applies a normalized binding value to a slot.
    ///
    /// An empty value clears the slot; anything else overwrites it. This is
    /// the single write path used by element recomputation.
    pub fn apply(&mut self, name: &str, value: &str) {
        if value.is_empty() {
            self.properties.remove(name);
            return;
        }

        self.properties
            .insert(name.to_string(), value.to_string());
    }

    /// Iterates over `(name, value)` pairs in sorted name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.properties
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Returns the number of set slots.
    pub fn len(&self) -> usize {
        self.properties.len()
    }

    /// Returns true if no slots are set.
    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    /// Serializes the style state as `name: value; name: value`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use starwind::InlineStyle;
    ///
    /// let mut style = InlineStyle::new();
    /// style.set_property("--sw-sticky-top", "10px");
    /// style.set_property("top", "0");
    /// assert_eq!(style.css_text(), "--sw-sticky-top: 10px; top: 0");
    /// ```
    pub fn css_text(&self) -> String {
        self.properties
            .iter()
            .map(|(k, v)| format!("{}: {}", k, v))
            .collect::<Vec<_>>()
            .join("; ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_and_get() {
        let mut style = InlineStyle::new();
        style.set_property("--sw-sticky-top", "10px");
        assert_eq!(style.get_property("--sw-sticky-top"), Some("10px"));
        assert_eq!(style.get_property("top"), None);
    }

    #[test]
    fn test_set_overwrites() {
        let mut style = InlineStyle::new();
        style.set_property("top", "1px");
        style.set_property("top", "2px");
        assert_eq!(style.get_property("top"), Some("2px"));
        assert_eq!(style.len(), 1);
    }

    #[test]
    fn test_apply_empty_removes() {
        let mut style = InlineStyle::new();
        style.apply("--sw-sticky-top", "10px");
        assert_eq!(style.get_property("--sw-sticky-top"), Some("10px"));

        style.apply("--sw-sticky-top", "");
        assert_eq!(style.get_property("--sw-sticky-top"), None);
        assert!(style.is_empty());
    }

    #[test]
    fn test_apply_remove_is_idempotent() {
        let mut style = InlineStyle::new();
        style.apply("top", "");
        style.apply("top", "");
        assert!(style.is_empty());
    }

    #[test]
    fn test_apply_same_value_twice_is_idempotent() {
        let mut style = InlineStyle::new();
        style.apply("top", "1px");
        let first = style.clone();
        style.apply("top", "1px");
        assert_eq!(style, first);
    }

    #[test]
    fn test_remove_property_returns_prior() {
        let mut style = InlineStyle::new();
        style.set_property("top", "1px");
        assert_eq!(style.remove_property("top"), Some("1px".to_string()));
        assert_eq!(style.remove_property("top"), None);
    }

    #[test]
    fn test_css_text_deterministic_order() {
        let mut a = InlineStyle::new();
        a.set_property("z-index", "2");
        a.set_property("--sw-a", "1");

        let mut b = InlineStyle::new();
        b.set_property("--sw-a", "1");
        b.set_property("z-index", "2");

        assert_eq!(a.css_text(), b.css_text());
        assert_eq!(a.css_text(), "--sw-a: 1; z-index: 2");
    }

    #[test]
    fn test_css_text_empty() {
        assert_eq!(InlineStyle::new().css_text(), "");
    }
}
