//! Pure normalization helpers for attribute values.
//!
//! Every attribute binding runs its raw value through one of four
//! normalization kinds before the result reaches a style slot:
//!
//! - [`NormalizeKind::Space`]: spacing-scale tokens become `var()` references
//! - [`NormalizeKind::Ratio`]: aspect-ratio fractions get canonical spacing
//! - [`NormalizeKind::Number`]: anything non-numeric is discarded
//! - [`NormalizeKind::Raw`]: trimmed passthrough
//!
//! All helpers are pure `&str -> String` functions. An empty output always
//! means "clear the style slot"; normalization never fails.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Prefix for spacing-scale custom properties.
///
/// A safe token `t` rewrites to `var(--sw-space-t)`, resolved by the
/// accompanying stylesheets.
pub const SPACE_VAR_PREFIX: &str = "--sw-space-";

/// One or more lowercase ASCII letter runs joined by single hyphens.
static SAFE_TOKEN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-z]+(?:-[a-z]+)*$").expect("safe-token regex is valid")
});

/// Optional minus sign, ASCII digits, optional decimal fraction. Digits
/// are spelled `[0-9]` rather than `\d`, which would also admit Unicode
/// decimal digits that CSS cannot consume.
static NUMBER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^-?[0-9]+(?:\.[0-9]+)?$").expect("number regex is valid"));

/// Any whitespace surrounding a `/` separator.
static RATIO_SLASH: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s*/\s*").expect("ratio-slash regex is valid"));

/// How a raw attribute value is normalized before it reaches a style slot.
///
/// The serialized names (`"space"`, `"ratio"`, `"number"`, `"raw"`) match
/// the declarative configuration vocabulary used when binding specs are
/// loaded from JSON.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NormalizeKind {
    /// Spacing-scale token or literal CSS length (see [`normalize_space`]).
    Space,
    /// Aspect-ratio fraction (see [`normalize_ratio`]).
    Ratio,
    /// Plain decimal number (see [`normalize_number`]).
    Number,
    /// Trimmed passthrough (see [`normalize_raw`]).
    Raw,
}

impl NormalizeKind {
    /// Normalizes a raw attribute value according to this kind.
    ///
    /// An empty result means the target style slot should be cleared.
    pub fn normalize(self, raw: &str) -> String {
        match self {
            NormalizeKind::Space => normalize_space(raw),
            NormalizeKind::Ratio => normalize_ratio(raw),
            NormalizeKind::Number => normalize_number(raw),
            NormalizeKind::Raw => normalize_raw(raw),
        }
    }
}

/// Returns true if `value` is a safe spacing-scale token.
///
/// The grammar is anchored start-to-end: one or more lowercase ASCII letter
/// runs joined by single hyphens (`s`, `s-m`, `inverse-s-m`).
///
/// # Example
///
/// ```rust
/// use starwind::is_safe_token;
///
/// assert!(is_safe_token("s-m"));
/// assert!(!is_safe_token("12px"));
/// assert!(!is_safe_token("s--m"));
/// ```
pub fn is_safe_token(value: &str) -> bool {
    SAFE_TOKEN.is_match(value)
}

/// Normalizes a spacing-like value.
///
/// Safe tokens become spacing-scale variable references; anything else is
/// treated as a literal CSS length or expression and passed through
/// trimmed. Token pairs like `s-m` and inverse pairs like `m-s` are plain
/// tokens to this function; the scale itself gives them meaning.
///
/// # Example
///
/// ```rust
/// use starwind::normalize_space;
///
/// assert_eq!(normalize_space("s-m"), "var(--sw-space-s-m)");
/// assert_eq!(normalize_space("12px"), "12px");
/// assert_eq!(normalize_space("   "), "");
/// ```
pub fn normalize_space(value: &str) -> String {
    let v = value.trim();
    if v.is_empty() {
        return String::new();
    }

    if is_safe_token(v) {
        return format!("var({}{})", SPACE_VAR_PREFIX, v);
    }

    v.to_string()
}

/// Normalizes an aspect-ratio value.
///
/// Makes `16/9` usable as `16 / 9`: whitespace around every `/` is
/// rewritten to exactly one space per side. Values without a slash pass
/// through trimmed.
///
/// # Example
///
/// ```rust
/// use starwind::normalize_ratio;
///
/// assert_eq!(normalize_ratio("16/9"), "16 / 9");
/// assert_eq!(normalize_ratio("16 /  9"), "16 / 9");
/// assert_eq!(normalize_ratio("auto"), "auto");
/// ```
pub fn normalize_ratio(value: &str) -> String {
    let v = value.trim();
    if v.is_empty() {
        return String::new();
    }

    if v.contains('/') {
        return RATIO_SLASH.replace_all(v, " / ").into_owned();
    }

    v.to_string()
}

/// Normalizes a plain decimal number.
///
/// Accepts an optional leading minus sign, digits, and an optional decimal
/// fraction. Anything else yields the empty string, clearing the target
/// slot rather than propagating garbage into a stylesheet.
///
/// # Example
///
/// ```rust
/// use starwind::normalize_number;
///
/// assert_eq!(normalize_number("-3.5"), "-3.5");
/// assert_eq!(normalize_number("abc"), "");
/// ```
pub fn normalize_number(value: &str) -> String {
    let v = value.trim();
    if v.is_empty() {
        return String::new();
    }

    if NUMBER.is_match(v) {
        v.to_string()
    } else {
        log::debug!("discarding non-numeric attribute value {:?}", v);
        String::new()
    }
}

/// Trims the value and passes it through unchanged.
pub fn normalize_raw(value: &str) -> String {
    value.trim().to_string()
}
