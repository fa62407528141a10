//! AST traits - dispatch interface for traversing the tree
//!
//! A [`Visitor`] has one operation per specialized node kind plus a generic
//! [`Visitor::visit_node`] operation. Nodes route themselves to the matching
//! operation through [`Node::accept`](super::Node::accept).

use super::node::Node;

/// Visitor trait for traversing the AST
///
/// Every operation receives the node and an accumulator `data`, and returns the
/// (possibly updated) accumulator. Specialized operations default to
/// [`visit_node`](Visitor::visit_node), so a visitor only has to implement the
/// generic operation and override the kinds it cares about.
///
/// Visitors decide themselves whether to descend, usually by calling
/// [`Node::accept_children`](super::Node::accept_children).
///
/// # Example
///
/// ```ignore
/// struct Counter;
///
/// impl Visitor<usize> for Counter {
///     type Error = std::convert::Infallible;
///
///     fn visit_node(&mut self, node: &Node, data: usize) -> Result<usize, Self::Error> {
///         node.accept_children(self, data + 1)
///     }
/// }
///
/// let count = root.accept(&mut Counter, 0)?;
/// ```
pub trait Visitor<D> {
    type Error;

    /// Generic operation, reached by kinds without a specialized operation and
    /// by every specialized operation the visitor does not override.
    fn visit_node(&mut self, node: &Node, data: D) -> Result<D, Self::Error>;

    fn visit_start(&mut self, node: &Node, data: D) -> Result<D, Self::Error> {
        self.visit_node(node, data)
    }

    fn visit_add(&mut self, node: &Node, data: D) -> Result<D, Self::Error> {
        self.visit_node(node, data)
    }

    fn visit_multiply(&mut self, node: &Node, data: D) -> Result<D, Self::Error> {
        self.visit_node(node, data)
    }

    fn visit_identifier(&mut self, node: &Node, data: D) -> Result<D, Self::Error> {
        self.visit_node(node, data)
    }

    fn visit_integer(&mut self, node: &Node, data: D) -> Result<D, Self::Error> {
        self.visit_node(node, data)
    }
}

/// Accept `visitor` on each node of `children`, left to right, feeding the
/// accumulator returned by one child into the next.
///
/// Stops at the first error. With no children `data` is returned untouched.
pub fn visit_children<D, V>(visitor: &mut V, children: &[Node], data: D) -> Result<D, V::Error>
where
    V: Visitor<D> + ?Sized,
{
    children
        .iter()
        .try_fold(data, |data, child| child.accept(&mut *visitor, data))
}
