//! Treeviz formatter for trees
//!
//! Treeviz is a one line per node view that draws the structure with box
//! connectors instead of plain indentation, which makes sibling runs easy to
//! follow in deep trees.
//!
//! So the format is :
//! <prefix><connector> <icon> <label> (label truncated to 30 characters)
//!
//! Example:
//!
//! ⧉ Start
//! └─ + Add
//!   ├─ # Integer(2)
//!   └─ × Multiply
//!     ├─ ◦ Identifier(x)
//!     └─ ○ Literal
//!
//! Icons
//!     Start: ⧉
//!     Add: +
//!     Multiply: ×
//!     Identifier: ◦
//!     Integer: #
//!     Anything else: ○

use super::registry::{FormatError, Formatter};
use crate::ast::{Node, NodeKind};

fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() > max_chars {
        let mut truncated = s.chars().take(max_chars).collect::<String>();
        truncated.push_str("...");
        truncated
    } else {
        s.to_string()
    }
}

/// Get the icon for a node kind
fn get_icon(kind: &NodeKind) -> &'static str {
    match kind {
        NodeKind::Start => "⧉",
        NodeKind::Add => "+",
        NodeKind::Multiply => "×",
        NodeKind::Identifier(_) => "◦",
        NodeKind::Integer(_) => "#",
        NodeKind::Other(_) => "○",
    }
}

fn format_node(output: &mut String, node: &Node, prefix: &str, is_last: bool) {
    let connector = if is_last { "└─" } else { "├─" };

    output.push_str(&format!(
        "{}{} {} {}\n",
        prefix,
        connector,
        get_icon(&node.kind),
        truncate(&node.display_label(), 30)
    ));

    let child_prefix = format!("{}{}", prefix, if is_last { "  " } else { "│ " });
    format_children(output, node.children(), &child_prefix);
}

fn format_children(output: &mut String, children: &[Node], prefix: &str) {
    for (i, child) in children.iter().enumerate() {
        let is_last = i == children.len() - 1;
        format_node(output, child, prefix, is_last);
    }
}

pub fn to_treeviz_str(root: &Node) -> String {
    let mut output = format!(
        "{} {}\n",
        get_icon(&root.kind),
        truncate(&root.display_label(), 30)
    );
    format_children(&mut output, root.children(), "");
    output
}

/// Formatter implementation for treeviz format
pub struct TreevizFormatter;

impl Formatter for TreevizFormatter {
    fn name(&self) -> &str {
        "treeviz"
    }

    fn serialize(&self, root: &Node) -> Result<String, FormatError> {
        Ok(to_treeviz_str(root))
    }

    fn description(&self) -> &str {
        "Visual tree representation with box connectors and Unicode icons"
    }
}
