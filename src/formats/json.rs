//! JSON tree description format

use super::registry::{FormatError, Formatter};
use crate::ast::Node;
use crate::loader::to_json_string;

/// Formatter emitting the JSON tree description understood by the loader
pub struct JsonFormatter;

impl Formatter for JsonFormatter {
    fn name(&self) -> &str {
        "json"
    }

    fn serialize(&self, root: &Node) -> Result<String, FormatError> {
        to_json_string(root)
            .map(|mut json| {
                json.push('\n');
                json
            })
            .map_err(|e| FormatError::SerializationError(e.to_string()))
    }

    fn description(&self) -> &str {
        "Pretty-printed JSON tree description"
    }
}
