//! AST definitions and the visitor dispatch
//!
//!     A tree is a [`Node`] owning an ordered list of child nodes. Each node has a
//!     [`NodeKind`], which picks the visitor operation a node is dispatched to,
//!     and a display label produced from that kind.
//!
//!     The kind set is open: besides the specialized kinds (start, add, multiply,
//!     identifier and integer) any other kind is carried as [`NodeKind::Other`]
//!     and routed to the visitor's generic [`Visitor::visit_node`] operation.
//!
//!     Trees are built by the caller (see the [loader](crate::loader) module for
//!     building them from descriptions). Traversals only ever read them.

pub mod node;
pub mod traits;

pub use node::{Node, NodeKind};
pub use traits::{visit_children, Visitor};
