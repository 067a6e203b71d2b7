//! Renderer errors.

use thiserror::Error;

/// Failure while flattening an instance into a tree.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    /// A value that is neither a renderable primitive nor a node, or one that
    /// contradicts its field descriptor.
    #[error("malformed tree at {at}: {reason}")]
    MalformedTree { at: String, reason: String },

    /// An unset field under [`UnsetPolicy::Reject`](crate::UnsetPolicy::Reject).
    #[error("field `{field}` of `{type_name}` is unset")]
    UnsetField { type_name: String, field: String },
}

impl FormatError {
    pub(crate) fn malformed(at: impl Into<String>, reason: impl Into<String>) -> Self {
        FormatError::MalformedTree {
            at: at.into(),
            reason: reason.into(),
        }
    }
}
