//! The indentation dump as a registry format

use super::registry::{FormatError, Formatter};
use crate::ast::Node;
use crate::dump::{dump_to_string, DumpOptions};

/// Formatter producing the indentation dump, one newline-terminated line per node
#[derive(Debug, Clone, Default)]
pub struct DumpFormatter {
    options: DumpOptions,
}

impl DumpFormatter {
    pub fn new(options: DumpOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &DumpOptions {
        &self.options
    }
}

impl Formatter for DumpFormatter {
    fn name(&self) -> &str {
        "dump"
    }

    fn serialize(&self, root: &Node) -> Result<String, FormatError> {
        Ok(dump_to_string(root, &self.options)?)
    }

    fn description(&self) -> &str {
        "Indentation-nested dump, one line per node in pre-order"
    }
}
