//! Value type checking.
//!
//! Assignments are checked against the field descriptor by a pluggable
//! [`ValueChecker`]. Synthesis installs [`DescriptorChecker`] unless the
//! options switch checking off.

use std::fmt;
use std::sync::Arc;

use asdl_ir::Desc;

use crate::types::Origin;
use crate::value::Value;

/// Decides whether a value may be stored in a field.
pub trait ValueChecker: fmt::Debug + Send + Sync {
    fn check(&self, value: &Value, desc: &Desc) -> bool;
}

/// Structural check against the resolved descriptor.
#[derive(Clone, Copy, Debug, Default)]
pub struct DescriptorChecker;

impl ValueChecker for DescriptorChecker {
    fn check(&self, value: &Value, desc: &Desc) -> bool {
        conforms(value, desc)
    }
}

/// Whether `value` is of type `desc`.
///
/// - `T?` accepts an absent value or a `T`
/// - `T*` accepts an array whose every element is a `T`
/// - a product accepts instances generated from that very definition
/// - a simple sum accepts its own enum values or a bare tag in range
/// - a compound sum accepts instances of any of its constructors
pub fn conforms(value: &Value, desc: &Desc) -> bool {
    match (desc, value) {
        (Desc::Maybe(_), Value::Absent)
        | (Desc::Int, Value::Int(_))
        | (Desc::Str, Value::Str(_)) => true,
        (Desc::Maybe(inner), value) => conforms(value, inner),
        (Desc::Array(inner), Value::Array(items)) => items.iter().all(|item| conforms(item, inner)),
        (Desc::Product(product), Value::Obj(obj)) => {
            matches!(obj.ty().origin(), Origin::Product(p) if Arc::ptr_eq(p, product))
        }
        (Desc::Sum(sum), Value::Enum(e)) => sum.is_simple() && Arc::ptr_eq(sum, e.sum()),
        (Desc::Sum(sum), Value::Int(n)) => {
            sum.is_simple()
                && usize::try_from(*n).is_ok_and(|tag| (1..=sum.constructors.len()).contains(&tag))
        }
        (Desc::Sum(sum), Value::Obj(obj)) => {
            !sum.is_simple()
                && matches!(obj.ty().origin(), Origin::Constructor { sum: s, .. } if Arc::ptr_eq(s, sum))
        }
        _ => false,
    }
}
