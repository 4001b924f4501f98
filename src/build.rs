//! Build configuration resolution for starwind element packages.
//!
//! An element package is built from a `package.json` manifest at its root.
//! This module resolves everything the packaging step needs before any
//! bundling happens: the package slug, the output directory, the entry
//! module, and the base output filename. The byte-level bundling and
//! minification themselves are handled by external tooling; what is
//! specified here is the configuration surface and its error taxonomy.
//!
//! # Resolution rules
//!
//! - `name` is required in the manifest; everything else has a default.
//! - The slug is the last path segment of the package name with a leading
//!   `starwind-` prefix stripped, unless overridden.
//! - The entry module is the explicit `starwind.entry` override when set;
//!   otherwise the `src/` directory is scanned for `starwind.*.js` files,
//!   preferring `<baseName>.js` (default `starwind.layout.<slug>.js`).
//!   Zero or multiple candidates without an override is a fatal
//!   configuration error.
//! - A conventional stylesheet at `<outDir>/<baseName>.css` is optional:
//!   when missing, CSS output is skipped with a warning, never an error.
//!
//! # Manifest shape
//!
//! ```json
//! {
//!   "name": "starwind-sticky",
//!   "starwind": {
//!     "slug": "sticky",
//!     "outDir": "sticky",
//!     "entry": "src/starwind.layout.sticky.js",
//!     "baseName": "starwind.layout.sticky"
//!   }
//! }
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

/// Error returned when build configuration cannot be resolved.
///
/// All variants are fatal: the operator must fix the package before a
/// build can proceed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BuildError {
    /// No `package.json` at the package root.
    ManifestNotFound { path: PathBuf },
    /// `package.json` exists but could not be read or parsed.
    ManifestInvalid { path: PathBuf, message: String },
    /// `package.json` has no `name` field.
    MissingPackageName { path: PathBuf },
    /// No `starwind.*.js` entry candidate in the source directory.
    EntryNotFound { dir: PathBuf },
    /// Multiple entry candidates and no override to disambiguate.
    AmbiguousEntry {
        dir: PathBuf,
        candidates: Vec<PathBuf>,
    },
}

impl std::fmt::Display for BuildError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BuildError::ManifestNotFound { path } => {
                write!(f, "package.json not found at {}", path.display())
            }
            BuildError::ManifestInvalid { path, message } => {
                write!(f, "failed to read {}: {}", path.display(), message)
            }
            BuildError::MissingPackageName { path } => {
                write!(
                    f,
                    "{} missing required field: name",
                    path.display()
                )
            }
            BuildError::EntryNotFound { dir } => {
                write!(
                    f,
                    "no entry JS found in {}. Expected a file like \"starwind.*.js\" \
                     (e.g. \"starwind.layout.stacked.js\").",
                    dir.display()
                )
            }
            BuildError::AmbiguousEntry { dir, candidates } => {
                writeln!(f, "multiple entry JS files found in {}:", dir.display())?;
                for candidate in candidates {
                    if let Some(name) = candidate.file_name() {
                        writeln!(f, "- {}", name.to_string_lossy())?;
                    }
                }
                write!(
                    f,
                    "Add package.json config: {{ \"starwind\": {{ \"entry\": \"src/<file>.js\" }} }}"
                )
            }
        }
    }
}

impl std::error::Error for BuildError {}

/// The optional `starwind` override table in `package.json`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Overrides {
    slug: Option<String>,
    out_dir: Option<String>,
    entry: Option<String>,
    base_name: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
struct Manifest {
    name: Option<String>,
    #[serde(default)]
    starwind: Overrides,
}

/// Fully resolved build configuration for one element package.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildConfig {
    root: PathBuf,
    slug: String,
    out_dir: PathBuf,
    entry: PathBuf,
    base_name: String,
}

impl BuildConfig {
    /// Resolves the build configuration for the package at `root`.
    ///
    /// # Errors
    ///
    /// Returns a [`BuildError`] when the manifest is missing, unreadable,
    /// nameless, or when the entry module cannot be resolved unambiguously.
    pub fn resolve(root: impl AsRef<Path>) -> Result<Self, BuildError> {
        let root = root.as_ref().to_path_buf();
        let manifest_path = root.join("package.json");

        let raw = match fs::read_to_string(&manifest_path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(BuildError::ManifestNotFound {
                    path: manifest_path,
                })
            }
            Err(e) => {
                return Err(BuildError::ManifestInvalid {
                    path: manifest_path,
                    message: e.to_string(),
                })
            }
        };

        let manifest: Manifest =
            serde_json::from_str(&raw).map_err(|e| BuildError::ManifestInvalid {
                path: manifest_path.clone(),
                message: e.to_string(),
            })?;

        let name = manifest.name.ok_or(BuildError::MissingPackageName {
            path: manifest_path,
        })?;

        let overrides = manifest.starwind;
        let slug = overrides.slug.unwrap_or_else(|| derive_slug(&name));
        let out_dir = root.join(overrides.out_dir.as_deref().unwrap_or(&slug));

        let preferred_base = overrides
            .base_name
            .unwrap_or_else(|| format!("starwind.layout.{}", slug));

        let entry = match overrides.entry {
            Some(entry) => root.join(entry),
            None => find_single_entry(&root.join("src"), &preferred_base)?,
        };

        // Only a literal `.js` is stripped; any other extension stays part
        // of the base name.
        let file_name = entry
            .file_name()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| preferred_base.clone());
        let base_name = file_name
            .strip_suffix(".js")
            .map(str::to_string)
            .unwrap_or(file_name);

        Ok(Self {
            root,
            slug,
            out_dir,
            entry,
            base_name,
        })
    }

    /// The package root the configuration was resolved from.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// The package slug (`starwind-sticky` → `sticky`).
    pub fn slug(&self) -> &str {
        &self.slug
    }

    /// Directory the bundle outputs land in.
    pub fn out_dir(&self) -> &Path {
        &self.out_dir
    }

    /// The entry module to bundle.
    pub fn entry(&self) -> &Path {
        &self.entry
    }

    /// Base filename for all outputs (entry filename without `.js`).
    pub fn base_name(&self) -> &str {
        &self.base_name
    }

    /// Computes the output plan for this configuration.
    ///
    /// The conventional stylesheet (`<outDir>/<baseName>.css`) is checked
    /// on disk: when absent, the plan carries no CSS step and a warning is
    /// logged.
    pub fn plan(&self) -> BuildPlan {
        let out_js = self.out_dir.join(format!("{}.js", self.base_name));
        let out_js_min = self.out_dir.join(format!("{}.min.js", self.base_name));

        let css_input = self.out_dir.join(format!("{}.css", self.base_name));
        let css = if css_input.is_file() {
            Some(CssPlan {
                output_min: self.out_dir.join(format!("{}.min.css", self.base_name)),
                input: css_input,
            })
        } else {
            log::warn!(
                "CSS not found at {} (skipping CSS minify)",
                css_input.display()
            );
            None
        };

        BuildPlan {
            out_js,
            out_js_min,
            css,
        }
    }
}

/// CSS minification step of a build plan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CssPlan {
    /// The stylesheet to minify.
    pub input: PathBuf,
    /// Where the minified stylesheet goes.
    pub output_min: PathBuf,
}

/// Output paths for one package build.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildPlan {
    /// Unminified module bundle.
    pub out_js: PathBuf,
    /// Minified module bundle.
    pub out_js_min: PathBuf,
    /// CSS step, absent when the conventional stylesheet is missing.
    pub css: Option<CssPlan>,
}

/// Derives the package slug from its manifest name.
///
/// Takes the last `/`-separated segment (dropping any scope) and strips a
/// leading `starwind-` prefix.
///
/// # Example
///
/// ```rust
/// use starwind::build::derive_slug;
///
/// assert_eq!(derive_slug("starwind-sticky"), "sticky");
/// assert_eq!(derive_slug("@acme/starwind-frame"), "frame");
/// assert_eq!(derive_slug("other"), "other");
/// ```
pub fn derive_slug(package_name: &str) -> String {
    let base = package_name
        .rsplit('/')
        .next()
        .unwrap_or(package_name);
    base.strip_prefix("starwind-").unwrap_or(base).to_string()
}

/// Resolves a single entry module in `src_dir`.
///
/// Candidates are files matching `starwind.*.js`. When `<preferred_base>.js`
/// exists it wins outright; otherwise exactly one candidate is required.
fn find_single_entry(src_dir: &Path, preferred_base: &str) -> Result<PathBuf, BuildError> {
    let preferred = src_dir.join(format!("{}.js", preferred_base));
    if preferred.is_file() {
        return Ok(preferred);
    }

    let mut candidates: Vec<PathBuf> = list_files(src_dir)
        .into_iter()
        .filter(|name| name.starts_with("starwind.") && name.ends_with(".js"))
        .map(|name| src_dir.join(name))
        .collect();
    candidates.sort();

    match candidates.len() {
        1 => Ok(candidates.remove(0)),
        0 => Err(BuildError::EntryNotFound {
            dir: src_dir.to_path_buf(),
        }),
        _ => Err(BuildError::AmbiguousEntry {
            dir: src_dir.to_path_buf(),
            candidates,
        }),
    }
}

/// Lists file names in a directory; an unreadable directory is simply empty.
fn list_files(dir: &Path) -> Vec<String> {
    let Ok(entries) = fs::read_dir(dir) else {
        return Vec::new();
    };

    entries
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.path().is_file())
        .map(|entry| entry.file_name().to_string_lossy().into_owned())
        .collect()
}
