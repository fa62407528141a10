//! Output formats for trees
//!
//! This module contains the formatters a tree can be rendered with:
//! - dump: the indentation dump, one line per node
//! - treeviz: box-drawing connectors with per-kind icons
//! - json: the tree description read by the [loader](crate::loader)

pub mod indent;
pub mod json;
pub mod registry;
pub mod treeviz;

pub use indent::DumpFormatter;
pub use json::JsonFormatter;
pub use registry::{FormatError, FormatRegistry, Formatter, DEFAULT_REGISTRY};
pub use treeviz::{to_treeviz_str, TreevizFormatter};
