//! Flatten Pass
//!
//! Converts any [`NodeView`] into a homogeneous [`TreeNode`]: a label plus a
//! list of children, each either a leaf string or another node.
//!
//! | Field descriptor | Children produced |
//! |------------------|-------------------|
//! | `int` | decimal leaf |
//! | `string` | the string itself |
//! | simple sum | constructor name (or tag, or a bare integer tag) |
//! | product / compound sum | one nested node |
//! | `T*` | one child per element, spliced in place |
//! | `T?` absent | nothing |
//! | unset | `field:?` placeholder, or an error |

use asdl_ir::{Desc, FieldValue, NodeView};
use asdl_stack::ensure_sufficient_stack;

use crate::config::{FormatConfig, UnsetPolicy};
use crate::error::FormatError;

/// Intermediate tree form.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TreeNode {
    /// Opaque text; never broken across lines.
    Leaf(String),
    /// `(label child child ...)`
    Node {
        label: String,
        children: Vec<TreeNode>,
    },
}

impl TreeNode {
    pub fn leaf(text: impl Into<String>) -> Self {
        TreeNode::Leaf(text.into())
    }

    pub fn node(label: impl Into<String>, children: Vec<TreeNode>) -> Self {
        TreeNode::Node {
            label: label.into(),
            children,
        }
    }

    /// Sum of label and leaf widths, ignoring parentheses and separators.
    ///
    /// A lower bound on the single-line width; if it already exceeds the
    /// budget, the single-line attempt can be skipped.
    pub fn flat_width(&self) -> usize {
        match self {
            TreeNode::Leaf(text) => text.chars().count(),
            TreeNode::Node { label, children } => ensure_sufficient_stack(|| {
                children
                    .iter()
                    .fold(label.chars().count(), |acc, child| acc + child.flat_width())
            }),
        }
    }
}

/// Flatten an instance into a [`TreeNode`].
pub fn build_tree(node: &dyn NodeView, config: &FormatConfig) -> Result<TreeNode, FormatError> {
    ensure_sufficient_stack(|| {
        let type_name = node.type_name();
        let mut children = Vec::with_capacity(node.field_names().len());

        for field in node.field_names() {
            let Some(desc) = node.field_desc(field) else {
                return Err(FormatError::malformed(
                    format!("{type_name}.{field}"),
                    "field has no descriptor",
                ));
            };
            let mut flattener = FieldFlattener {
                type_name,
                field,
                config,
                out: &mut children,
            };
            flattener.push(desc, node.field_value(field))?;
        }

        Ok(TreeNode::Node {
            label: type_name.to_string(),
            children,
        })
    })
}

/// Flatten a value standing on its own, outside any field.
///
/// Records become nodes; primitives and enum values become leaves.
pub fn build_value_tree(
    value: &FieldValue<'_>,
    config: &FormatConfig,
) -> Result<TreeNode, FormatError> {
    match value {
        FieldValue::Node(node) => build_tree(*node, config),
        FieldValue::Int(n) => Ok(TreeNode::Leaf(n.to_string())),
        FieldValue::Str(s) => Ok(TreeNode::leaf(*s)),
        FieldValue::Enum { tag, name } => Ok(TreeNode::Leaf(config.enum_leaf(*tag, name))),
        FieldValue::Unset | FieldValue::Absent | FieldValue::Array(_) => Err(
            FormatError::malformed("<root>", format!("cannot render {} on its own", kind(value))),
        ),
    }
}

/// Children produced by one field.
struct FieldFlattener<'c> {
    type_name: &'c str,
    field: &'c str,
    config: &'c FormatConfig,
    out: &'c mut Vec<TreeNode>,
}

impl FieldFlattener<'_> {
    fn push(&mut self, desc: &Desc, value: FieldValue<'_>) -> Result<(), FormatError> {
        match (desc, value) {
            (_, FieldValue::Unset) => match self.config.unset {
                UnsetPolicy::Placeholder => {
                    self.out.push(TreeNode::Leaf(format!("{}:?", self.field)));
                }
                UnsetPolicy::Reject => {
                    return Err(FormatError::UnsetField {
                        type_name: self.type_name.to_string(),
                        field: self.field.to_string(),
                    });
                }
            },
            (Desc::Maybe(_), FieldValue::Absent) => {}
            (Desc::Maybe(inner), value) => self.push(inner, value)?,
            (Desc::Array(inner), FieldValue::Array(items)) => {
                for item in items {
                    self.push(inner, item)?;
                }
            }
            (Desc::Int, FieldValue::Int(n)) => self.out.push(TreeNode::Leaf(n.to_string())),
            (Desc::Str, FieldValue::Str(s)) => self.out.push(TreeNode::leaf(s)),
            (Desc::Sum(sum), FieldValue::Enum { tag, name }) if sum.is_simple() => {
                self.out.push(TreeNode::Leaf(self.config.enum_leaf(tag, name)));
            }
            // bare tag stored in place of an enum value
            (Desc::Sum(sum), FieldValue::Int(n)) if sum.is_simple() => {
                self.out.push(TreeNode::Leaf(n.to_string()));
            }
            (Desc::Sum(sum), FieldValue::Node(child)) if !sum.is_simple() => {
                self.out.push(build_tree(child, self.config)?);
            }
            (Desc::Product(_), FieldValue::Node(child)) => {
                self.out.push(build_tree(child, self.config)?);
            }
            (desc, value) => {
                return Err(FormatError::malformed(
                    format!("{}.{}", self.type_name, self.field),
                    format!("expected {desc}, found {}", kind(&value)),
                ));
            }
        }
        Ok(())
    }
}

fn kind(value: &FieldValue<'_>) -> &'static str {
    match value {
        FieldValue::Unset => "unset value",
        FieldValue::Absent => "absent value",
        FieldValue::Int(_) => "integer",
        FieldValue::Str(_) => "string",
        FieldValue::Enum { .. } => "enum value",
        FieldValue::Node(_) => "node",
        FieldValue::Array(_) => "array",
    }
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::expect_used,
    reason = "test assertions use unwrap/expect for clarity"
)]
