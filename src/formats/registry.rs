//! Format registry for tree serialization
//!
//! Every output format implements [`Formatter`] and is looked up by name in a
//! [`FormatRegistry`]. Registries built with [`FormatRegistry::with_options`]
//! share one set of [`DumpOptions`] across the formats that indent.

use crate::ast::Node;
use crate::dump::{DumpError, DumpOptions};
use once_cell::sync::Lazy;
use std::collections::BTreeMap;
use thiserror::Error;

/// Registry with the built-in formatters and default dump options
pub static DEFAULT_REGISTRY: Lazy<FormatRegistry> = Lazy::new(FormatRegistry::with_defaults);

/// Error that can occur during formatting
#[derive(Debug, Error)]
pub enum FormatError {
    /// Format not found in registry
    #[error("Format '{0}' not found")]
    FormatNotFound(String),
    /// Error during serialization
    #[error("Serialization error: {0}")]
    SerializationError(String),
    #[error(transparent)]
    Dump(#[from] DumpError),
}

/// Trait for tree formatters
///
/// Implementors provide a way to serialize a tree to a string representation.
pub trait Formatter: Send + Sync {
    /// The name of this format (e.g., "dump", "treeviz")
    fn name(&self) -> &str;

    /// Serialize a tree to this format
    fn serialize(&self, root: &Node) -> Result<String, FormatError>;

    /// Optional description of this format
    fn description(&self) -> &str {
        ""
    }
}

/// Formatters keyed by name, iterated in name order
pub struct FormatRegistry {
    formatters: BTreeMap<String, Box<dyn Formatter>>,
}

impl FormatRegistry {
    pub fn new() -> Self {
        FormatRegistry {
            formatters: BTreeMap::new(),
        }
    }

    /// Register a formatter under its own name, returning the one it replaces
    pub fn register<F: Formatter + 'static>(&mut self, formatter: F) -> Option<Box<dyn Formatter>> {
        let name = formatter.name().to_string();
        log::debug!("registering `{name}` format");
        self.formatters.insert(name, Box::new(formatter))
    }

    pub fn get(&self, name: &str) -> Option<&dyn Formatter> {
        self.formatters.get(name).map(|f| f.as_ref())
    }

    pub fn has(&self, name: &str) -> bool {
        self.formatters.contains_key(name)
    }

    /// Render `root` in the named format
    pub fn serialize(&self, root: &Node, format: &str) -> Result<String, FormatError> {
        let formatter = self
            .get(format)
            .ok_or_else(|| FormatError::FormatNotFound(format.to_string()))?;
        formatter.serialize(root)
    }

    pub fn list_formats(&self) -> Vec<String> {
        self.formatters.keys().cloned().collect()
    }

    pub fn formatters(&self) -> impl Iterator<Item = &dyn Formatter> {
        self.formatters.values().map(|f| f.as_ref())
    }

    /// Registry with the built-in formatters, dumping with `options`
    pub fn with_options(options: &DumpOptions) -> Self {
        let mut registry = Self::new();

        registry.register(super::DumpFormatter::new(options.clone()));
        registry.register(super::TreevizFormatter);
        registry.register(super::JsonFormatter);

        registry
    }

    pub fn with_defaults() -> Self {
        Self::with_options(&DumpOptions::default())
    }
}

impl Default for FormatRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}
