//! # treedump
//!
//! Indentation-nested debug dumps of abstract syntax trees.
//!
//! Layout
//!
//! The crate is split along the flow of a dump:
//!   ├── ast       The node model and the visitor dispatch (`accept`, `visit_children`)
//!   ├── dump      The indentation dump visitor and its line sinks
//!   ├── formats   Pluggable formatters (dump, treeviz, json) behind a registry
//!   └── loader    Builds trees from JSON / YAML tree descriptions
//!
//! A dump of `Start → [Add → [Integer(2), Integer(3)]]` with the default
//! one-space indentation unit reads:
//!
//!     Start
//!      Add
//!       Integer(2)
//!       Integer(3)
//!
//! Node kinds the visitor has no specialized handler for are still dumped, with
//! a [`FALLBACK_SUFFIX`](dump::FALLBACK_SUFFIX) flagging the missing handler.

pub mod ast;
pub mod dump;
pub mod formats;
pub mod loader;

pub use ast::{visit_children, Node, NodeKind, Visitor};
pub use dump::{
    dump_lines, dump_to_string, dump_to_writer, dump_with, DumpError, DumpOptions, DumpVisitor,
    LineSink, WriteSink, FALLBACK_SUFFIX,
};
