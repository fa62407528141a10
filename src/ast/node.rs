//! Node
//!
//! A node is one element of the tree: its kind plus the ordered children it
//! owns. The label shown for a node is derived from its kind:
//!
//!     Start
//!     Add
//!     Multiply
//!     Identifier(<name>)
//!     Integer(<value>)
//!     <name>                  (any other kind)

use super::traits::{visit_children, Visitor};
use std::fmt;

/// The kind of a node, which selects the visitor operation it is dispatched to
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Start,
    Add,
    Multiply,
    Identifier(String),
    Integer(i64),
    /// Any kind without a specialized visitor operation
    Other(String),
}

impl NodeKind {
    /// Name of the kind, without payload
    pub fn name(&self) -> &str {
        match self {
            NodeKind::Start => "Start",
            NodeKind::Add => "Add",
            NodeKind::Multiply => "Multiply",
            NodeKind::Identifier(_) => "Identifier",
            NodeKind::Integer(_) => "Integer",
            NodeKind::Other(name) => name,
        }
    }

    /// Whether visitors have a dedicated operation for this kind
    pub fn is_specialized(&self) -> bool {
        !matches!(self, NodeKind::Other(_))
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NodeKind::Identifier(name) => write!(f, "Identifier({name})"),
            NodeKind::Integer(value) => write!(f, "Integer({value})"),
            other => f.write_str(other.name()),
        }
    }
}

/// A tree node owning its children
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    pub kind: NodeKind,
    pub children: Vec<Node>,
}

impl Node {
    pub fn new(kind: NodeKind, children: Vec<Node>) -> Self {
        Self { kind, children }
    }

    pub fn leaf(kind: NodeKind) -> Self {
        Self::new(kind, Vec::new())
    }

    pub fn start(children: Vec<Node>) -> Self {
        Self::new(NodeKind::Start, children)
    }

    pub fn add(children: Vec<Node>) -> Self {
        Self::new(NodeKind::Add, children)
    }

    pub fn multiply(children: Vec<Node>) -> Self {
        Self::new(NodeKind::Multiply, children)
    }

    pub fn identifier(name: impl Into<String>) -> Self {
        Self::leaf(NodeKind::Identifier(name.into()))
    }

    pub fn integer(value: i64) -> Self {
        Self::leaf(NodeKind::Integer(value))
    }

    pub fn other(name: impl Into<String>, children: Vec<Node>) -> Self {
        Self::new(NodeKind::Other(name.into()), children)
    }

    /// Append a child, builder style
    pub fn with_child(mut self, child: Node) -> Self {
        self.children.push(child);
        self
    }

    pub fn node_type(&self) -> &str {
        self.kind.name()
    }

    pub fn display_label(&self) -> String {
        self.kind.to_string()
    }

    pub fn children(&self) -> &[Node] {
        &self.children
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Number of nodes in this subtree, this node included
    pub fn count(&self) -> usize {
        1 + self.children.iter().map(Node::count).sum::<usize>()
    }

    /// Number of levels in this subtree; a leaf has height 1
    pub fn height(&self) -> usize {
        1 + self.children.iter().map(Node::height).max().unwrap_or(0)
    }

    /// Dispatch `visitor` to the operation registered for this node's kind.
    ///
    /// Kinds without a specialized operation go to [`Visitor::visit_node`].
    pub fn accept<D, V>(&self, visitor: &mut V, data: D) -> Result<D, V::Error>
    where
        V: Visitor<D> + ?Sized,
    {
        match &self.kind {
            NodeKind::Start => visitor.visit_start(self, data),
            NodeKind::Add => visitor.visit_add(self, data),
            NodeKind::Multiply => visitor.visit_multiply(self, data),
            NodeKind::Identifier(_) => visitor.visit_identifier(self, data),
            NodeKind::Integer(_) => visitor.visit_integer(self, data),
            NodeKind::Other(_) => visitor.visit_node(self, data),
        }
    }

    /// Accept `visitor` on every child in order, threading `data` through.
    pub fn accept_children<D, V>(&self, visitor: &mut V, data: D) -> Result<D, V::Error>
    where
        V: Visitor<D> + ?Sized,
    {
        visit_children(visitor, &self.children, data)
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.kind, f)
    }
}
