//! Build configuration resolution against real filesystem fixtures.

use std::fs;
use std::path::Path;

use starwind::build::{BuildConfig, BuildError};
use tempfile::TempDir;

fn write_manifest(root: &Path, contents: &str) {
    fs::write(root.join("package.json"), contents).unwrap();
}

fn write_entry(root: &Path, name: &str) {
    let src = root.join("src");
    fs::create_dir_all(&src).unwrap();
    fs::write(src.join(name), "export {};\n").unwrap();
}

#[test]
fn resolves_single_entry_package() {
    let dir = TempDir::new().unwrap();
    write_manifest(dir.path(), r#"{ "name": "starwind-sticky" }"#);
    write_entry(dir.path(), "starwind.layout.sticky.js");

    let config = BuildConfig::resolve(dir.path()).unwrap();

    assert_eq!(config.slug(), "sticky");
    assert_eq!(config.base_name(), "starwind.layout.sticky");
    assert_eq!(config.out_dir(), dir.path().join("sticky"));
    assert_eq!(
        config.entry(),
        dir.path().join("src/starwind.layout.sticky.js")
    );
}

#[test]
fn preferred_base_name_wins_among_candidates() {
    let dir = TempDir::new().unwrap();
    write_manifest(dir.path(), r#"{ "name": "starwind-stacked" }"#);
    write_entry(dir.path(), "starwind.layout.stacked.js");
    write_entry(dir.path(), "starwind.elements.util.js");

    let config = BuildConfig::resolve(dir.path()).unwrap();
    assert_eq!(config.base_name(), "starwind.layout.stacked");
}

#[test]
fn ambiguous_entries_without_override_are_fatal() {
    let dir = TempDir::new().unwrap();
    write_manifest(dir.path(), r#"{ "name": "starwind-multi" }"#);
    write_entry(dir.path(), "starwind.layout.a.js");
    write_entry(dir.path(), "starwind.layout.b.js");

    let err = BuildConfig::resolve(dir.path()).unwrap_err();
    match err {
        BuildError::AmbiguousEntry { candidates, .. } => {
            assert_eq!(candidates.len(), 2);
        }
        other => panic!("expected AmbiguousEntry, got {:?}", other),
    }
}

#[test]
fn entry_override_disambiguates() {
    let dir = TempDir::new().unwrap();
    write_manifest(
        dir.path(),
        r#"{
            "name": "starwind-multi",
            "starwind": { "entry": "src/starwind.layout.b.js" }
        }"#,
    );
    write_entry(dir.path(), "starwind.layout.a.js");
    write_entry(dir.path(), "starwind.layout.b.js");

    let config = BuildConfig::resolve(dir.path()).unwrap();
    assert_eq!(config.entry(), dir.path().join("src/starwind.layout.b.js"));
    assert_eq!(config.base_name(), "starwind.layout.b");
}

#[test]
fn entry_override_with_other_extension_keeps_full_base_name() {
    let dir = TempDir::new().unwrap();
    write_manifest(
        dir.path(),
        r#"{
            "name": "starwind-sticky",
            "starwind": { "entry": "src/starwind.layout.sticky.mjs" }
        }"#,
    );
    write_entry(dir.path(), "starwind.layout.sticky.mjs");

    let config = BuildConfig::resolve(dir.path()).unwrap();

    // Only a literal `.js` suffix is stripped when deriving the base name.
    assert_eq!(config.base_name(), "starwind.layout.sticky.mjs");
}

#[test]
fn missing_entry_is_fatal() {
    let dir = TempDir::new().unwrap();
    write_manifest(dir.path(), r#"{ "name": "starwind-empty" }"#);
    fs::create_dir_all(dir.path().join("src")).unwrap();

    let err = BuildConfig::resolve(dir.path()).unwrap_err();
    assert!(matches!(err, BuildError::EntryNotFound { .. }));
}

#[test]
fn missing_manifest_is_fatal() {
    let dir = TempDir::new().unwrap();
    let err = BuildConfig::resolve(dir.path()).unwrap_err();
    assert!(matches!(err, BuildError::ManifestNotFound { .. }));
}

#[test]
fn manifest_without_name_is_fatal() {
    let dir = TempDir::new().unwrap();
    write_manifest(dir.path(), r#"{ "version": "1.0.0" }"#);

    let err = BuildConfig::resolve(dir.path()).unwrap_err();
    assert!(matches!(err, BuildError::MissingPackageName { .. }));
}

#[test]
fn malformed_manifest_is_fatal() {
    let dir = TempDir::new().unwrap();
    write_manifest(dir.path(), "{ not json");

    let err = BuildConfig::resolve(dir.path()).unwrap_err();
    assert!(matches!(err, BuildError::ManifestInvalid { .. }));
}

#[test]
fn overrides_replace_every_default() {
    let dir = TempDir::new().unwrap();
    write_manifest(
        dir.path(),
        r#"{
            "name": "@acme/starwind-sticky",
            "starwind": {
                "slug": "pin",
                "outDir": "dist",
                "entry": "src/starwind.layout.sticky.js"
            }
        }"#,
    );
    write_entry(dir.path(), "starwind.layout.sticky.js");

    let config = BuildConfig::resolve(dir.path()).unwrap();
    assert_eq!(config.slug(), "pin");
    assert_eq!(config.out_dir(), dir.path().join("dist"));
}

#[test]
fn plan_skips_css_when_stylesheet_missing() {
    let dir = TempDir::new().unwrap();
    write_manifest(dir.path(), r#"{ "name": "starwind-sticky" }"#);
    write_entry(dir.path(), "starwind.layout.sticky.js");

    let config = BuildConfig::resolve(dir.path()).unwrap();
    let plan = config.plan();

    assert_eq!(
        plan.out_js,
        dir.path().join("sticky/starwind.layout.sticky.js")
    );
    assert_eq!(
        plan.out_js_min,
        dir.path().join("sticky/starwind.layout.sticky.min.js")
    );
    assert!(plan.css.is_none());
}

#[test]
fn plan_includes_css_when_stylesheet_exists() {
    let dir = TempDir::new().unwrap();
    write_manifest(dir.path(), r#"{ "name": "starwind-sticky" }"#);
    write_entry(dir.path(), "starwind.layout.sticky.js");

    let out_dir = dir.path().join("sticky");
    fs::create_dir_all(&out_dir).unwrap();
    fs::write(out_dir.join("starwind.layout.sticky.css"), "sw-sticky{}\n").unwrap();

    let plan = BuildConfig::resolve(dir.path()).unwrap().plan();
    let css = plan.css.expect("css plan");
    assert_eq!(css.input, out_dir.join("starwind.layout.sticky.css"));
    assert_eq!(css.output_min, out_dir.join("starwind.layout.sticky.min.css"));
}
