//! Layout Pass
//!
//! Decides, per node, between `(label child child ...)` on one line and the
//! indented block form:
//!
//! ```text
//! (label
//!   child
//!   child
//! )
//! ```
//!
//! # Algorithm
//!
//! 1. Lay out children first, each against the budget one indent level deeper
//! 2. If any child stayed a block, this node is a block too
//! 3. If the flat width already exceeds the budget, this node is a block
//! 4. Otherwise try the single-line form, abandoning it as soon as it overflows
//!    or meets a leaf that spans several lines
//!
//! A node that fits collapses into an opaque line for its parent. Children
//! are either all inline or all on their own lines; there is no partial
//! filling. Each node is measured once, so the pass is linear in tree size.

use asdl_stack::ensure_sufficient_stack;

use crate::config::FormatConfig;
use crate::emitter::{Emitter, StringEmitter};
use crate::tree::TreeNode;

/// Result of the fit decision for one node.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Layout {
    /// Fits on one line.
    Line(String),
    /// Label on its own line, children indented below.
    Block { label: String, children: Vec<Layout> },
}

impl Layout {
    #[inline]
    pub fn is_line(&self) -> bool {
        matches!(self, Layout::Line(_))
    }
}

/// Lay out a tree whose first line starts at column 0.
pub fn layout(tree: &TreeNode, config: &FormatConfig) -> Layout {
    layout_at(tree, config, 0)
}

/// Lay out a tree whose first line starts at `column`.
///
/// Only the root's single-line form is charged for the columns already in
/// use; block children start on fresh lines and keep the full width.
pub fn layout_at(tree: &TreeNode, config: &FormatConfig, column: usize) -> Layout {
    let budget = config.max_width;
    LayoutEngine { config }
        .lay_out(tree, budget, budget.saturating_sub(column))
        .0
}

/// Write a layout to an emitter at the given indentation.
pub fn emit_layout<E: Emitter>(layout: &Layout, indent: usize, config: &FormatConfig, out: &mut E) {
    match layout {
        Layout::Line(text) => {
            out.emit_indent(indent);
            out.emit(text);
        }
        Layout::Block { label, children } => ensure_sufficient_stack(|| {
            out.emit_indent(indent);
            out.emit("(");
            out.emit(label);
            for child in children {
                out.emit_newline();
                emit_layout(child, indent + config.indent_size, config, out);
            }
            out.emit_newline();
            out.emit_indent(indent);
            out.emit(")");
        }),
    }
}

struct LayoutEngine<'a> {
    config: &'a FormatConfig,
}

impl LayoutEngine<'_> {
    /// Returns the layout and the flat width of `tree`.
    ///
    /// `budget` bounds the lines below this node; `first_line` bounds the
    /// single-line form, which may start mid-line.
    fn lay_out(&self, tree: &TreeNode, budget: usize, first_line: usize) -> (Layout, usize) {
        match tree {
            TreeNode::Leaf(text) => (Layout::Line(text.clone()), text.chars().count()),
            TreeNode::Node { label, children } if children.is_empty() => {
                (Layout::Line(format!("({label})")), label.chars().count())
            }
            TreeNode::Node { label, children } => ensure_sufficient_stack(|| {
                let child_budget = budget.saturating_sub(self.config.indent_size);
                let mut laid = Vec::with_capacity(children.len());
                let mut flat = label.chars().count();
                let mut all_lines = true;

                for child in children {
                    let (child_layout, child_flat) =
                        self.lay_out(child, child_budget, child_budget);
                    flat += child_flat;
                    all_lines &= child_layout.is_line();
                    laid.push(child_layout);
                }

                if all_lines && flat <= first_line {
                    if let Some(line) = try_single_line(label, &laid, first_line) {
                        return (Layout::Line(line), flat);
                    }
                }

                tracing::trace!(label = %label, budget = first_line, flat, "breaking node");
                let layout = Layout::Block {
                    label: label.clone(),
                    children: laid,
                };
                (layout, flat)
            }),
        }
    }
}

/// Render `(label c1 c2 ...)` into a scratch buffer.
///
/// Returns `None` once the text exceeds `budget`, or when a child is not a
/// line or carries a line break; the partial buffer is dropped.
fn try_single_line(label: &str, children: &[Layout], budget: usize) -> Option<String> {
    let mut scratch = StringEmitter::with_capacity(budget.min(256));
    scratch.emit("(");
    scratch.emit(label);
    if scratch.column() > budget {
        return None;
    }

    for child in children {
        let Layout::Line(text) = child else {
            return None;
        };
        if text.contains('\n') {
            return None;
        }
        scratch.emit_space();
        scratch.emit(text);
        if scratch.column() > budget {
            return None;
        }
    }

    scratch.emit(")");
    if scratch.column() > budget {
        return None;
    }
    Some(scratch.output())
}

#[cfg(test)]
mod tests;
