//! Indentation dump of a tree
//!
//!     The dump prints one line per node, depth-first pre-order. Each line is the
//!     indentation unit repeated once per level of depth, followed by the node's
//!     display label:
//!
//!         Start
//!          Add
//!           Integer(2)
//!           Integer(3)
//!
//!     Nodes dispatched to the generic visitor operation get [`FALLBACK_SUFFIX`]
//!     appended. That happens for every kind without a specialized operation and
//!     usually means a kind was added to the grammar without a dump handler. The
//!     children of such nodes are dumped as usual.
//!
//!     Lines go to a [`LineSink`]. A sink failure aborts the dump at once: nothing
//!     is emitted after the failing line and the error is returned to the caller.
//!
//!     The depth counter lives in a [`DumpVisitor`], and every entry point below
//!     creates its own, so concurrent dumps never share indentation state.

use crate::ast::{Node, Visitor};
use std::io::{self, Write};
use thiserror::Error;
use treedump_config::DumpConfig;

/// Appended to the line of a node that reached the generic operation
pub const FALLBACK_SUFFIX: &str = ": no specialized handler for this node kind";

pub const DEFAULT_INDENT_UNIT: &str = " ";

#[derive(Debug, Error)]
pub enum DumpError {
    #[error("failed to write dump output: {0}")]
    Io(#[from] io::Error),
    #[error("malformed tree: node at depth {depth} exceeds the depth limit of {limit}")]
    TooDeep { depth: usize, limit: usize },
}

/// Destination of dump lines
pub trait LineSink {
    fn emit(&mut self, line: &str) -> Result<(), DumpError>;
}

impl LineSink for Vec<String> {
    fn emit(&mut self, line: &str) -> Result<(), DumpError> {
        self.push(line.to_string());
        Ok(())
    }
}

/// Newline-terminated lines appended to the string
impl LineSink for String {
    fn emit(&mut self, line: &str) -> Result<(), DumpError> {
        self.push_str(line);
        self.push('\n');
        Ok(())
    }
}

impl<S: LineSink + ?Sized> LineSink for &mut S {
    fn emit(&mut self, line: &str) -> Result<(), DumpError> {
        (**self).emit(line)
    }
}

/// Sink writing newline-terminated lines to an [`io::Write`]
#[derive(Debug)]
pub struct WriteSink<W: Write> {
    writer: W,
}

impl<W: Write> WriteSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> LineSink for WriteSink<W> {
    fn emit(&mut self, line: &str) -> Result<(), DumpError> {
        writeln!(self.writer, "{line}")?;
        Ok(())
    }
}

/// Caller-chosen dump settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DumpOptions {
    /// Repeated once per level of depth in front of each label
    pub indent_unit: String,
    /// Deepest accepted node depth (root = 0); `None` disables the guard
    pub max_depth: Option<usize>,
}

impl DumpOptions {
    pub fn with_indent_unit(mut self, unit: impl Into<String>) -> Self {
        self.indent_unit = unit.into();
        self
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = Some(max_depth);
        self
    }
}

impl Default for DumpOptions {
    fn default() -> Self {
        Self {
            indent_unit: DEFAULT_INDENT_UNIT.to_string(),
            max_depth: None,
        }
    }
}

impl From<&DumpConfig> for DumpOptions {
    fn from(config: &DumpConfig) -> Self {
        Self {
            indent_unit: config.indent_unit.clone(),
            max_depth: config.depth_limit(),
        }
    }
}

/// Visitor emitting the indentation dump into a [`LineSink`]
///
/// The accumulator is passed through untouched, so the visitor works with any
/// data type the caller threads through the traversal.
pub struct DumpVisitor<S> {
    sink: S,
    indent_unit: String,
    max_depth: Option<usize>,
    indent: usize,
}

impl<S: LineSink> DumpVisitor<S> {
    pub fn new(sink: S, options: &DumpOptions) -> Self {
        Self {
            sink,
            indent_unit: options.indent_unit.clone(),
            max_depth: options.max_depth,
            indent: 0,
        }
    }

    /// Current depth; back at its starting value once a visit returns
    pub fn indent(&self) -> usize {
        self.indent
    }

    pub fn into_sink(self) -> S {
        self.sink
    }

    fn indent_string(&self) -> String {
        self.indent_unit.repeat(self.indent)
    }

    fn dump_node<D>(&mut self, node: &Node, suffix: &str, data: D) -> Result<D, DumpError> {
        if let Some(limit) = self.max_depth {
            if self.indent > limit {
                return Err(DumpError::TooDeep {
                    depth: self.indent,
                    limit,
                });
            }
        }

        let line = format!("{}{}{}", self.indent_string(), node.display_label(), suffix);
        self.sink.emit(&line)?;

        // restored before the result is inspected, so errors leave depth intact
        self.indent += 1;
        let result = node.accept_children(self, data);
        self.indent -= 1;
        result
    }
}

impl<S: LineSink, D> Visitor<D> for DumpVisitor<S> {
    type Error = DumpError;

    fn visit_node(&mut self, node: &Node, data: D) -> Result<D, DumpError> {
        log::warn!(
            "no specialized dump handler for node kind `{}`",
            node.node_type()
        );
        self.dump_node(node, FALLBACK_SUFFIX, data)
    }

    fn visit_start(&mut self, node: &Node, data: D) -> Result<D, DumpError> {
        self.dump_node(node, "", data)
    }

    fn visit_add(&mut self, node: &Node, data: D) -> Result<D, DumpError> {
        self.dump_node(node, "", data)
    }

    fn visit_multiply(&mut self, node: &Node, data: D) -> Result<D, DumpError> {
        self.dump_node(node, "", data)
    }

    fn visit_identifier(&mut self, node: &Node, data: D) -> Result<D, DumpError> {
        self.dump_node(node, "", data)
    }

    fn visit_integer(&mut self, node: &Node, data: D) -> Result<D, DumpError> {
        self.dump_node(node, "", data)
    }
}

/// Dump `root` into `sink`, threading `data` through the traversal.
///
/// Returns the final accumulator together with the sink.
pub fn dump_with<S, D>(
    root: &Node,
    options: &DumpOptions,
    sink: S,
    data: D,
) -> Result<(D, S), DumpError>
where
    S: LineSink,
{
    log::debug!("dumping tree rooted at `{}`", root.display_label());
    let mut visitor = DumpVisitor::new(sink, options);
    let data = root.accept(&mut visitor, data)?;
    debug_assert_eq!(visitor.indent(), 0);
    log::debug!("dump of `{}` finished", root.display_label());
    Ok((data, visitor.into_sink()))
}

/// Dump with the default options into a list of lines
pub fn dump_lines(root: &Node) -> Vec<String> {
    match dump_with(root, &DumpOptions::default(), Vec::new(), ()) {
        Ok((_, lines)) => lines,
        // in-memory sinks never fail and the default options set no depth limit
        Err(err) => unreachable!("in-memory dump failed: {err}"),
    }
}

pub fn dump_to_string(root: &Node, options: &DumpOptions) -> Result<String, DumpError> {
    let (_, output) = dump_with(root, options, String::new(), ())?;
    Ok(output)
}

/// Stream the dump into `writer`, returning it once the dump is complete
pub fn dump_to_writer<W: Write>(
    root: &Node,
    options: &DumpOptions,
    writer: W,
) -> Result<W, DumpError> {
    let (_, sink) = dump_with(root, options, WriteSink::new(writer), ())?;
    let mut writer = sink.into_inner();
    writer.flush()?;
    Ok(writer)
}
