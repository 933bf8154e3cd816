//! Shared configuration loader for the refrange tools.
//!
//! `defaults/refrange.default.toml` is embedded into every binary so that docs and
//! runtime behavior stay in sync. Applications layer user-specific files on top
//! of those defaults via [`Loader`] before deserializing into [`RefrangeConfig`].
//!
//! The document table is how the resolver learns its bounds: `document.verse_counts`
//! holds one verse count per chapter and becomes a [`VerseTable`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use refrange_parser::VerseTable;
use serde::Deserialize;
use std::path::Path;

const DEFAULT_TOML: &str = include_str!("../defaults/refrange.default.toml");

/// Top-level configuration consumed by refrange applications.
#[derive(Debug, Clone, Deserialize)]
pub struct RefrangeConfig {
    pub document: DocumentConfig,
    pub output: OutputConfig,
}

impl RefrangeConfig {
    /// Bounds for resolution, built from `document.verse_counts`.
    pub fn verse_table(&self) -> VerseTable {
        VerseTable::new(self.document.verse_counts.clone())
    }
}

/// Shape of the addressed document.
#[derive(Debug, Clone, Deserialize)]
pub struct DocumentConfig {
    pub verse_counts: Vec<usize>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    pub format: OutputFormat,
    pub one_based: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OutputFormat {
    Text,
    Json,
    Yaml,
}

/// Helper for layering user overrides over the built-in defaults.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    /// Start a loader seeded with the embedded defaults.
    pub fn new() -> Self {
        let builder = Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml));
        Self { builder }
    }

    /// Layer a configuration file. Missing files trigger an error.
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(true);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Apply a single key/value override (useful for CLI settings).
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Replace the verse table, e.g. from a `--verse-counts` flag.
    pub fn with_verse_counts(self, verse_counts: &[usize]) -> Result<Self, ConfigError> {
        let values: Vec<config::Value> = verse_counts
            .iter()
            .map(|&count| config::Value::from(count as u64))
            .collect();
        self.set_override("document.verse_counts", values)
    }

    /// Finalize the builder and deserialize the resulting configuration.
    pub fn build(self) -> Result<RefrangeConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<RefrangeConfig, ConfigError> {
    Loader::new().build()
}
