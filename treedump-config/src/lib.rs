//! Shared configuration loader for treedump.
//!
//! `defaults/treedump.default.toml` is embedded into every binary so that docs
//! and runtime behavior stay in sync. Applications layer user-specific files on
//! top of those defaults via [`Loader`] before deserializing into
//! [`TreedumpConfig`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use serde::Deserialize;
use std::path::Path;

const DEFAULT_TOML: &str = include_str!("../defaults/treedump.default.toml");

/// Top-level configuration consumed by treedump applications.
#[derive(Debug, Clone, Deserialize)]
pub struct TreedumpConfig {
    pub dump: DumpConfig,
    pub output: OutputConfig,
}

/// Knobs of the indentation dump.
#[derive(Debug, Clone, Deserialize)]
pub struct DumpConfig {
    pub indent_unit: String,
    pub max_depth: usize,
}

impl DumpConfig {
    /// The depth guard, with `0` meaning "no limit".
    pub fn depth_limit(&self) -> Option<usize> {
        (self.max_depth > 0).then_some(self.max_depth)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    pub format: String,
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

    /// Layer an optional configuration file (ignored if the file is absent).
    pub fn with_optional_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(false);
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

    /// Finalize the builder and deserialize the resulting configuration.
    pub fn build(self) -> Result<TreedumpConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<TreedumpConfig, ConfigError> {
    Loader::new().build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn loads_default_config() {
        let config = load_defaults().expect("defaults to deserialize");
        assert_eq!(config.dump.indent_unit, " ");
        assert_eq!(config.dump.depth_limit(), None);
        assert_eq!(config.output.format, "dump");
    }

    #[test]
    fn supports_overrides() {
        let config = Loader::new()
            .set_override("dump.indent_unit", "..")
            .expect("override to apply")
            .set_override("dump.max_depth", 16i64)
            .expect("override to apply")
            .build()
            .expect("config to build");
        assert_eq!(config.dump.indent_unit, "..");
        assert_eq!(config.dump.depth_limit(), Some(16));
    }

    #[test]
    fn layers_user_file_over_defaults() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file to be created");
        writeln!(file, "[output]\nformat = \"treeviz\"").unwrap();

        let config = Loader::new()
            .with_file(file.path())
            .build()
            .expect("config to build");
        assert_eq!(config.output.format, "treeviz");
        // untouched keys keep their defaults
        assert_eq!(config.dump.indent_unit, " ");
    }

    #[test]
    fn missing_optional_file_is_ignored() {
        let config = Loader::new()
            .with_optional_file("does/not/exist.toml")
            .build()
            .expect("config to build");
        assert_eq!(config.output.format, "dump");
    }

    #[test]
    fn missing_required_file_fails() {
        let result = Loader::new().with_file("does/not/exist.toml").build();
        assert!(result.is_err());
    }
}
