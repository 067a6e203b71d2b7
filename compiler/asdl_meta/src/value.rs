//! Field values.

use asdl_fmt::{format_value, FormatConfig, FormatError};
use asdl_ir::FieldValue;

use crate::obj::Obj;
use crate::types::EnumValue;

/// A value stored in an instance field.
///
/// A present maybe value is stored as the inner value itself; only
/// [`Value::Absent`] marks its absence.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Value {
    Int(i64),
    Str(String),
    Enum(EnumValue),
    Obj(Obj),
    Array(Vec<Value>),
    Absent,
}

impl Value {
    /// Borrow as the renderer's view.
    pub fn view(&self) -> FieldValue<'_> {
        match self {
            Value::Int(n) => FieldValue::Int(*n),
            Value::Str(s) => FieldValue::Str(s),
            Value::Enum(e) => FieldValue::Enum {
                tag: e.tag(),
                name: e.name(),
            },
            Value::Obj(obj) => FieldValue::Node(obj),
            Value::Array(items) => FieldValue::Array(items.iter().map(Value::view).collect()),
            Value::Absent => FieldValue::Absent,
        }
    }

    /// Render this value on its own.
    pub fn render(&self, config: &FormatConfig) -> Result<String, FormatError> {
        format_value(&self.view(), config)
    }

    pub fn as_obj(&self) -> Option<&Obj> {
        match self {
            Value::Obj(obj) => Some(obj),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&[Value]> {
        match self {
            Value::Array(items) => Some(items),
            _ => None,
        }
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Int(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Int(i64::from(n))
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Str(s)
    }
}

impl From<EnumValue> for Value {
    fn from(e: EnumValue) -> Self {
        Value::Enum(e)
    }
}

impl From<Obj> for Value {
    fn from(obj: Obj) -> Self {
        Value::Obj(obj)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::Array(items)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Value::Absent, Into::into)
    }
}
