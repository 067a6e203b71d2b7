//! Schema and construction errors.
//!
//! Every variant reports programmer misuse: a malformed schema or a caller
//! building instances wrongly. They propagate to the caller unrecovered.

use thiserror::Error;

/// Errors raised by synthesis and by the instance model.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MetaError {
    /// Fields without defaults left unassigned after a non-empty construction.
    #[error("`{type_name}` is missing required fields: {}", .fields.join(", "))]
    MissingRequiredField {
        type_name: String,
        fields: Vec<String>,
    },

    #[error("field `{field}` of `{type_name}` is assigned twice")]
    DuplicateField { type_name: String, field: String },

    #[error("`{type_name}` has no field `{field}`")]
    UnknownField { type_name: String, field: String },

    /// Reported by [`Obj::ensure_complete`](crate::Obj::ensure_complete).
    #[error("`{type_name}` has unassigned fields: {}", .fields.join(", "))]
    IncompleteObject {
        type_name: String,
        fields: Vec<String>,
    },

    /// The schema cannot be synthesized. No types are published.
    #[error("malformed definition `{definition}`: {reason}")]
    MalformedDescriptor {
        definition: String,
        reason: MalformedReason,
    },

    /// A value rejected by the field's type check.
    #[error("field `{field}` of `{type_name}` expects {expected}")]
    TypeMismatch {
        type_name: String,
        field: String,
        expected: String,
    },

    #[error("`{type_name}` takes at most {expected} positional arguments, got {given}")]
    TooManyArguments {
        type_name: String,
        expected: usize,
        given: usize,
    },
}

/// Why a definition was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MalformedReason {
    #[error("field `{field}` is both optional and repeated")]
    OptionalAndRepeated { field: String },

    #[error("field `{field}` refers to undefined type `{type_name}`")]
    UndefinedType { field: String, type_name: String },

    #[error("field `{field}` is declared twice")]
    DuplicateFieldName { field: String },

    #[error("name `{name}` is already bound")]
    DuplicateName { name: String },
}

impl MetaError {
    pub(crate) fn malformed(definition: &str, reason: MalformedReason) -> Self {
        MetaError::MalformedDescriptor {
            definition: definition.to_string(),
            reason,
        }
    }
}
