//! Descriptor algebra.
//!
//! A descriptor is a schema-level type: one of the two primitives, a
//! user-defined sum or product, or one of those wrapped in the array (`*`)
//! or maybe (`?`) modifier.

use std::fmt;
use std::sync::Arc;

/// Schema-level type of a field or definition.
#[derive(Clone, Debug)]
pub enum Desc {
    /// `int`
    Int,
    /// `string`
    Str,
    /// Zero or more values of the inner descriptor (`T*`).
    Array(Box<Desc>),
    /// Zero or one value of the inner descriptor (`T?`).
    Maybe(Box<Desc>),
    /// Untagged fixed record.
    Product(Arc<Product>),
    /// Tagged union.
    Sum(Arc<Sum>),
}

impl Desc {
    /// Whether the field gets a value before any explicit assignment.
    ///
    /// Maybe fields default to absent, array fields to an empty sequence.
    #[inline]
    pub fn has_default(&self) -> bool {
        matches!(self, Desc::Array(_) | Desc::Maybe(_))
    }

    /// True for a sum whose constructors carry no fields.
    pub fn is_simple_sum(&self) -> bool {
        matches!(self, Desc::Sum(sum) if sum.is_simple())
    }

    /// The wrapped descriptor of an array or maybe, `None` otherwise.
    pub fn inner(&self) -> Option<&Desc> {
        match self {
            Desc::Array(inner) | Desc::Maybe(inner) => Some(inner),
            _ => None,
        }
    }
}

impl fmt::Display for Desc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Desc::Int => f.write_str("int"),
            Desc::Str => f.write_str("string"),
            Desc::Array(inner) => write!(f, "{inner}*"),
            Desc::Maybe(inner) => write!(f, "{inner}?"),
            Desc::Product(product) => f.write_str(&product.name),
            Desc::Sum(sum) => f.write_str(&sum.name),
        }
    }
}

/// Resolve a primitive type name.
///
/// Returns `None` for anything that must be looked up among the module's
/// own definitions.
pub fn primitive(type_name: &str) -> Option<Desc> {
    match type_name {
        "int" => Some(Desc::Int),
        "string" => Some(Desc::Str),
        _ => None,
    }
}

/// A named field as written in the schema.
///
/// `type_name` is unresolved; `optional` and `repeated` must not both be set.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Field {
    pub name: String,
    pub type_name: String,
    pub optional: bool,
    pub repeated: bool,
}

impl Field {
    /// `type_name name`
    pub fn required(name: impl Into<String>, type_name: impl Into<String>) -> Self {
        Field {
            name: name.into(),
            type_name: type_name.into(),
            optional: false,
            repeated: false,
        }
    }

    /// `type_name? name`
    pub fn optional(name: impl Into<String>, type_name: impl Into<String>) -> Self {
        Field {
            optional: true,
            ..Field::required(name, type_name)
        }
    }

    /// `type_name* name`
    pub fn repeated(name: impl Into<String>, type_name: impl Into<String>) -> Self {
        Field {
            repeated: true,
            ..Field::required(name, type_name)
        }
    }
}

/// One alternative of a sum.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Constructor {
    pub name: String,
    pub fields: Vec<Field>,
}

impl Constructor {
    pub fn new(name: impl Into<String>, fields: Vec<Field>) -> Self {
        Constructor {
            name: name.into(),
            fields,
        }
    }

    /// A constructor without fields.
    pub fn unit(name: impl Into<String>) -> Self {
        Constructor::new(name, Vec::new())
    }
}

/// Product definition: `name = (field, field, ...)`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Product {
    pub name: String,
    pub fields: Vec<Field>,
}

/// Sum definition: `name = A(...) | B | ...`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Sum {
    pub name: String,
    pub constructors: Vec<Constructor>,
}

impl Sum {
    /// A sum is simple when no constructor has fields; it degrades to an enum.
    pub fn is_simple(&self) -> bool {
        self.constructors.iter().all(|c| c.fields.is_empty())
    }

    /// Position of a constructor, in declaration order.
    pub fn position(&self, constructor: &str) -> Option<usize> {
        self.constructors.iter().position(|c| c.name == constructor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn op_sum() -> Arc<Sum> {
        Arc::new(Sum {
            name: "op".to_string(),
            constructors: vec![Constructor::unit("Plus"), Constructor::unit("Minus")],
        })
    }

    #[test]
    fn simple_sum_has_no_fields() {
        assert!(op_sum().is_simple());

        let expr = Sum {
            name: "expr".to_string(),
            constructors: vec![
                Constructor::new("Const", vec![Field::required("n", "int")]),
                Constructor::unit("Empty"),
            ],
        };
        assert!(!expr.is_simple());
    }

    #[test]
    fn empty_sum_is_simple() {
        let sum = Sum {
            name: "never".to_string(),
            constructors: Vec::new(),
        };
        assert!(sum.is_simple());
    }

    #[test]
    fn defaults_only_for_modifiers() {
        assert!(Desc::Maybe(Box::new(Desc::Int)).has_default());
        assert!(Desc::Array(Box::new(Desc::Str)).has_default());
        assert!(!Desc::Int.has_default());
        assert!(!Desc::Sum(op_sum()).has_default());
    }

    #[test]
    fn display_uses_asdl_notation() {
        assert_eq!(Desc::Int.to_string(), "int");
        assert_eq!(Desc::Array(Box::new(Desc::Str)).to_string(), "string*");
        assert_eq!(Desc::Maybe(Box::new(Desc::Sum(op_sum()))).to_string(), "op?");
    }

    #[test]
    fn primitive_names() {
        assert!(matches!(primitive("int"), Some(Desc::Int)));
        assert!(matches!(primitive("string"), Some(Desc::Str)));
        assert!(primitive("expr").is_none());
    }

    #[test]
    fn field_modifiers() {
        let f = Field::optional("name", "string");
        assert!(f.optional && !f.repeated);
        let f = Field::repeated("words", "word");
        assert!(f.repeated && !f.optional);
    }

    #[test]
    fn constructor_position() {
        let sum = op_sum();
        assert_eq!(sum.position("Minus"), Some(1));
        assert_eq!(sum.position("Times"), None);
    }
}
