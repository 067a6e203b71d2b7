//! ASDL Formatter
//!
//! Generic pretty-printer for anything implementing [`NodeView`].
//!
//! # Architecture
//!
//! Rendering is a two-pass process:
//!
//! 1. **Flatten Pass** ([`tree`]): walk the instance through its four read
//!    queries and build a homogeneous tree of labels and leaf strings
//! 2. **Layout Pass** ([`layout`]): bottom-up, collapse every subtree that
//!    fits within the column budget into one line; break the rest into the
//!    indented block form
//!
//! Core principle: render inline if it fits, break otherwise. The decision
//! is greedy and local, never revisited once a child has been laid out.
//!
//! # Modules
//!
//! - [`tree`]: Flattening and the width pre-filter
//! - [`layout`]: Fit decisions and block emission
//! - [`emitter`]: Output abstraction
//! - [`config`]: Column budget, indentation and leaf styles

pub mod config;
pub mod emitter;
mod error;
pub mod layout;
pub mod tree;

#[cfg(test)]
mod test_support;

pub use asdl_ir::{FieldValue, NodeView};
pub use config::{EnumStyle, FormatConfig, UnsetPolicy, INDENT_WIDTH, MAX_LINE_WIDTH};
pub use emitter::{Emitter, StringEmitter};
pub use error::FormatError;
pub use layout::{emit_layout, layout, layout_at, Layout};
pub use tree::{build_tree, build_value_tree, TreeNode};

/// Render an instance to a string.
///
/// The result has no trailing newline.
#[tracing::instrument(level = "trace", skip_all, fields(type_name = node.type_name()))]
pub fn format_node(node: &dyn NodeView, config: &FormatConfig) -> Result<String, FormatError> {
    let tree = build_tree(node, config)?;
    Ok(format_tree(&tree, config))
}

/// Render a standalone value.
///
/// Records render as trees; integers, strings and enum values as their
/// plain text.
pub fn format_value(value: &FieldValue<'_>, config: &FormatConfig) -> Result<String, FormatError> {
    let tree = build_value_tree(value, config)?;
    Ok(format_tree(&tree, config))
}

/// Lay out and render an already flattened tree.
pub fn format_tree(tree: &TreeNode, config: &FormatConfig) -> String {
    let mut out = StringEmitter::new();
    emit_layout(&layout(tree, config), 0, config, &mut out);
    out.output()
}

/// Render an instance into an existing emitter.
///
/// The first line continues from the emitter's current column and is
/// budgeted accordingly; any following lines start at column 0.
pub fn write_node<E: Emitter>(
    node: &dyn NodeView,
    config: &FormatConfig,
    out: &mut E,
) -> Result<(), FormatError> {
    let tree = build_tree(node, config)?;
    emit_layout(&layout_at(&tree, config, out.column()), 0, config, out);
    Ok(())
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::expect_used,
    reason = "test assertions use unwrap/expect for clarity"
)]
mod tests;
