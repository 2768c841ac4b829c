//! Translation tables, bundles, and resource loading.
//!
//! A [`Bundle`] is the analog of an application resource bundle: a set of
//! named [`StringTable`]s, each mapping synthesized keys to raw templates.
//! The lookup boundary is the [`TranslationLookup`] trait; the formatting
//! pipeline treats a miss as "use the key itself as the template", never
//! as an error.

use std::collections::HashMap;
use std::path::Path;
use std::sync::OnceLock;

use globset::Glob;
use ignore::WalkBuilder;
use thiserror::Error;

/// Table consulted when the caller gives no table override.
pub const DEFAULT_TABLE: &str = "Localizable";

/// Errors from loading bundle resources.
#[derive(Error, Debug)]
pub enum BundleError {
    /// A table file could not be read.
    #[error("failed to read table file: {0}")]
    Io(#[from] std::io::Error),

    /// A table file was not a flat JSON object of key/template pairs.
    #[error("failed to parse table JSON: {0}")]
    Parse(#[from] serde_json::Error),

    /// The table file pattern did not compile.
    #[error("invalid table file pattern: {0}")]
    Pattern(String),

    /// The bundle directory could not be walked.
    #[error("failed to walk bundle directory: {0}")]
    Walk(String),
}

/// Resolves a synthesized key to a raw template.
///
/// `None` means "no entry for this key"; the caller then applies the
/// fallback-to-key contract. Implementations must not signal absence with
/// an empty string.
pub trait TranslationLookup {
    /// Look up `key` in `table`, or in [`DEFAULT_TABLE`] when `None`.
    fn lookup(&self, key: &str, table: Option<&str>) -> Option<&str>;
}

/// A flat key → template map, the unit a translator authors.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StringTable {
    /// Synthesized key → raw template.
    entries: HashMap<String, String>,
}

impl StringTable {
    /// Create an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a key/template pair.
    ///
    /// The template must be authored in the same placeholder dialect as
    /// the key it translates.
    pub fn insert(&mut self, key: impl Into<String>, template: impl Into<String>) {
        self.entries.insert(key.into(), template.into());
    }

    /// Look up a template by key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over all keys in this table.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Parse a table from a flat JSON object of key/template pairs.
    ///
    /// # Errors
    /// Returns [`BundleError::Parse`] when the input is not a flat string
    /// map.
    pub fn from_json_str(json: &str) -> Result<Self, BundleError> {
        let entries: HashMap<String, String> = serde_json::from_str(json)?;
        Ok(Self { entries })
    }
}

impl FromIterator<(String, String)> for StringTable {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self { entries: iter.into_iter().collect() }
    }
}

/// A set of named translation tables.
#[derive(Debug, Clone, Default)]
pub struct Bundle {
    /// Table name → table.
    tables: HashMap<String, StringTable>,
}

impl Bundle {
    /// Create an empty bundle. Every lookup misses, so formatting against
    /// it reduces to fallback-to-key.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add (or replace) a table under `name`.
    pub fn add_table(&mut self, name: impl Into<String>, table: StringTable) {
        self.tables.insert(name.into(), table);
    }

    /// Borrow a table by name.
    #[must_use]
    pub fn table(&self, name: &str) -> Option<&StringTable> {
        self.tables.get(name)
    }

    /// All table names in this bundle.
    pub fn table_names(&self) -> impl Iterator<Item = &str> {
        self.tables.keys().map(String::as_str)
    }

    /// Load every `*.json` file directly under `dir` as one table named by
    /// its file stem (`Localizable.json` becomes the default table).
    ///
    /// Unreadable entries abort the load; files with unusable names are
    /// skipped with a warning.
    ///
    /// # Errors
    /// Returns [`BundleError`] when the directory walk, a file read, or a
    /// JSON parse fails.
    pub fn load_dir(dir: &Path) -> Result<Self, BundleError> {
        let table_files = Glob::new("*.json")
            .map_err(|e| BundleError::Pattern(e.to_string()))?
            .compile_matcher();

        let mut bundle = Self::new();
        for entry in WalkBuilder::new(dir).max_depth(Some(1)).build() {
            let entry = entry.map_err(|e| BundleError::Walk(e.to_string()))?;
            if entry.file_type().is_none_or(|ft| !ft.is_file()) {
                continue;
            }
            let path = entry.path();
            let Some(name) = path.file_name() else {
                continue;
            };
            if !table_files.is_match(name) {
                continue;
            }
            let Some(stem) = path.file_stem().and_then(|s| s.to_str()) else {
                tracing::warn!(path = %path.display(), "Skipping table file with unusable name");
                continue;
            };
            let json = std::fs::read_to_string(path)?;
            let table = StringTable::from_json_str(&json)?;
            tracing::debug!(table = stem, entries = table.len(), "Loaded table file");
            bundle.add_table(stem, table);
        }
        Ok(bundle)
    }
}

impl TranslationLookup for Bundle {
    fn lookup(&self, key: &str, table: Option<&str>) -> Option<&str> {
        self.tables.get(table.unwrap_or(DEFAULT_TABLE)).and_then(|t| t.get(key))
    }
}

/// Process-wide default bundle, installed once at startup.
static DEFAULT_BUNDLE: OnceLock<Bundle> = OnceLock::new();

/// Install the process-wide default bundle.
///
/// Succeeds only once. Install it before the first formatting call; the
/// `OnceLock` provides the happens-before ordering for readers.
///
/// # Errors
/// Returns the rejected bundle when a default is already installed.
pub fn set_default_bundle(bundle: Bundle) -> Result<(), Bundle> {
    DEFAULT_BUNDLE.set(bundle)
}

/// The process-wide default bundle, if one has been installed.
#[must_use]
pub fn default_bundle() -> Option<&'static Bundle> {
    DEFAULT_BUNDLE.get()
}
