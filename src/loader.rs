//! Tree descriptions
//!
//! Builds [`Node`] trees from JSON or YAML descriptions, and back. A description
//! is a nested record per node:
//!
//! ```yaml
//! kind: start
//! children:
//!   - kind: add
//!     children:
//!       - { kind: integer, value: 2 }
//!       - { kind: identifier, value: x }
//! ```
//!
//! The specialized kinds are matched case-insensitively. Any other kind name is
//! kept verbatim as [`NodeKind::Other`]. Written descriptions spell such nodes
//! as `{ kind: other, name: <kind> }`, so a kind named like a specialized one
//! (`add`, `Start`) reloads unchanged.

use crate::ast::{Node, NodeKind};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {}: {}", .path.display(), .source)]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid JSON tree description: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid YAML tree description: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("unsupported tree description {} (expected .json, .yaml or .yml)", .0.display())]
    UnsupportedExtension(PathBuf),
    #[error("`{kind}` node requires a value")]
    MissingValue { kind: String },
    #[error("`{kind}` node requires a name")]
    MissingName { kind: String },
    #[error("invalid value `{value}` for `{kind}` node")]
    InvalidValue { kind: String, value: String },
}

/// Serialized form of a node
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeRecord {
    pub kind: String,
    /// Kind name of an `other` node
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<RecordValue>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<NodeRecord>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RecordValue {
    Int(i64),
    Text(String),
}

impl RecordValue {
    fn as_text(&self) -> String {
        match self {
            RecordValue::Int(value) => value.to_string(),
            RecordValue::Text(text) => text.clone(),
        }
    }
}

impl TryFrom<NodeRecord> for Node {
    type Error = LoadError;

    fn try_from(record: NodeRecord) -> Result<Self, Self::Error> {
        let kind = kind_from_record(&record.kind, record.name, record.value)?;
        let children = record
            .children
            .into_iter()
            .map(Node::try_from)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Node::new(kind, children))
    }
}

fn kind_from_record(
    kind: &str,
    name: Option<String>,
    value: Option<RecordValue>,
) -> Result<NodeKind, LoadError> {
    let missing = || LoadError::MissingValue {
        kind: kind.to_string(),
    };
    let invalid = |value: &RecordValue| LoadError::InvalidValue {
        kind: kind.to_string(),
        value: value.as_text(),
    };

    match kind.to_ascii_lowercase().as_str() {
        "start" => Ok(NodeKind::Start),
        "add" => Ok(NodeKind::Add),
        "multiply" => Ok(NodeKind::Multiply),
        "identifier" => match value.ok_or_else(missing)? {
            RecordValue::Text(name) => Ok(NodeKind::Identifier(name)),
            other => Err(invalid(&other)),
        },
        "integer" => match value.ok_or_else(missing)? {
            RecordValue::Int(value) => Ok(NodeKind::Integer(value)),
            RecordValue::Text(text) => text
                .trim()
                .parse()
                .map(NodeKind::Integer)
                .map_err(|_| invalid(&RecordValue::Text(text))),
        },
        "other" => {
            if value.is_some() {
                log::debug!("ignoring value of `{kind}` node");
            }
            name.map(NodeKind::Other).ok_or_else(|| LoadError::MissingName {
                kind: kind.to_string(),
            })
        }
        _ => {
            if value.is_some() || name.is_some() {
                log::debug!("ignoring value and name of `{kind}` node");
            }
            Ok(NodeKind::Other(kind.to_string()))
        }
    }
}

impl From<&Node> for NodeRecord {
    fn from(node: &Node) -> Self {
        let (name, value) = match &node.kind {
            NodeKind::Identifier(name) => (None, Some(RecordValue::Text(name.clone()))),
            NodeKind::Integer(value) => (None, Some(RecordValue::Int(*value))),
            NodeKind::Other(name) => (Some(name.clone()), None),
            NodeKind::Start | NodeKind::Add | NodeKind::Multiply => (None, None),
        };
        NodeRecord {
            kind: record_kind(&node.kind).to_string(),
            name,
            value,
            children: node.children.iter().map(NodeRecord::from).collect(),
        }
    }
}

fn record_kind(kind: &NodeKind) -> &'static str {
    match kind {
        NodeKind::Start => "start",
        NodeKind::Add => "add",
        NodeKind::Multiply => "multiply",
        NodeKind::Identifier(_) => "identifier",
        NodeKind::Integer(_) => "integer",
        NodeKind::Other(_) => "other",
    }
}

pub fn from_json_str(source: &str) -> Result<Node, LoadError> {
    let record: NodeRecord = serde_json::from_str(source)?;
    Node::try_from(record)
}

pub fn from_yaml_str(source: &str) -> Result<Node, LoadError> {
    let record: NodeRecord = serde_yaml::from_str(source)?;
    Node::try_from(record)
}

pub fn to_json_string(root: &Node) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&NodeRecord::from(root))
}

/// Load a tree description, picking the format from the file extension
pub fn load_path(path: impl AsRef<Path>) -> Result<Node, LoadError> {
    let path = path.as_ref();
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase);

    let parse: fn(&str) -> Result<Node, LoadError> = match extension.as_deref() {
        Some("json") => from_json_str,
        Some("yaml") | Some("yml") => from_yaml_str,
        _ => return Err(LoadError::UnsupportedExtension(path.to_path_buf())),
    };

    let source = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    log::debug!("loading tree description from {}", path.display());
    parse(&source)
}
