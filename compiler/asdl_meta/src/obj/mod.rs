//! Record Instances
//!
//! An [`Obj`] is an instance of a product or of a compound-sum constructor.
//! It keeps one slot per field of its [`CompoundType`] and a bitset of which
//! fields were explicitly assigned.
//!
//! # Construction
//!
//! - [`Obj::new`]: nothing assigned, defaults applied; fields can be set later
//! - [`Obj::construct`] / [`Obj::builder`]: positional then named arguments;
//!   if any argument is given, every field without a default must be covered
//!
//! Maybe fields default to [`Value::Absent`], array fields to an empty array.
//! Assigning a field twice is an error, including a positional and a named
//! argument for the same field.
//!
//! Comparison, cloning and teardown follow nested instances to any depth
//! without overflowing the stack.

use std::fmt;
use std::sync::Arc;

use asdl_fmt::{format_node, FormatConfig, FormatError};
use asdl_ir::{Desc, FieldValue, NodeView};
use asdl_stack::ensure_sufficient_stack;

use crate::error::MetaError;
use crate::field_set::FieldSet;
use crate::types::{CompoundType, SumType};
use crate::value::Value;

/// A record instance.
pub struct Obj {
    ty: Arc<CompoundType>,
    /// `None` until assigned, unless the field has a default.
    slots: Vec<Option<Value>>,
    assigned: FieldSet,
}

impl Obj {
    /// Create an instance with defaults applied and nothing assigned.
    pub fn new(ty: &Arc<CompoundType>) -> Self {
        let slots = (0..ty.len())
            .map(|i| match ty.desc_at(i) {
                Desc::Maybe(_) => Some(Value::Absent),
                Desc::Array(_) => Some(Value::Array(Vec::new())),
                _ => None,
            })
            .collect();
        Obj {
            ty: Arc::clone(ty),
            slots,
            assigned: FieldSet::with_len(ty.len()),
        }
    }

    /// Create an instance from positional and named arguments.
    ///
    /// Positional values bind to fields in declaration order. When at least
    /// one argument is supplied, all fields without defaults must end up
    /// assigned; every missing one is reported at once.
    pub fn construct<I, N>(
        ty: &Arc<CompoundType>,
        positional: Vec<Value>,
        named: I,
    ) -> Result<Self, MetaError>
    where
        I: IntoIterator<Item = (N, Value)>,
        N: AsRef<str>,
    {
        if positional.len() > ty.len() {
            return Err(MetaError::TooManyArguments {
                type_name: ty.name().to_string(),
                expected: ty.len(),
                given: positional.len(),
            });
        }

        let mut obj = Obj::new(ty);
        let mut supplied = !positional.is_empty();
        for (index, value) in positional.into_iter().enumerate() {
            obj.assign_at(index, value)?;
        }
        for (name, value) in named {
            supplied = true;
            obj.set(name.as_ref(), value)?;
        }

        if supplied {
            let missing = obj.check_unassigned();
            if !missing.is_empty() {
                return Err(MetaError::MissingRequiredField {
                    type_name: ty.name().to_string(),
                    fields: missing.into_iter().map(str::to_string).collect(),
                });
            }
        }
        Ok(obj)
    }

    /// Start building an instance argument by argument.
    pub fn builder(ty: &Arc<CompoundType>) -> ObjBuilder {
        ObjBuilder {
            ty: Arc::clone(ty),
            positional: Vec::new(),
            named: Vec::new(),
        }
    }

    /// Assign a field by name.
    pub fn set(&mut self, field: &str, value: impl Into<Value>) -> Result<(), MetaError> {
        let Some(index) = self.ty.field_index(field) else {
            return Err(MetaError::UnknownField {
                type_name: self.ty.name().to_string(),
                field: field.to_string(),
            });
        };
        self.assign_at(index, value.into())
    }

    fn assign_at(&mut self, index: usize, value: Value) -> Result<(), MetaError> {
        let field = &self.ty.field_names()[index];
        if self.assigned.contains(index) {
            return Err(MetaError::DuplicateField {
                type_name: self.ty.name().to_string(),
                field: field.clone(),
            });
        }

        let desc = self.ty.desc_at(index);
        if let Some(checker) = self.ty.checker() {
            if !checker.check(&value, desc) {
                return Err(MetaError::TypeMismatch {
                    type_name: self.ty.name().to_string(),
                    field: field.clone(),
                    expected: desc.to_string(),
                });
            }
        }

        self.slots[index] = Some(value);
        self.assigned.insert(index);
        Ok(())
    }

    /// Current value of a field; `None` if unset or not a field.
    pub fn get(&self, field: &str) -> Option<&Value> {
        let index = self.ty.field_index(field)?;
        self.slots[index].as_ref()
    }

    /// Whether the field was explicitly assigned (defaults do not count).
    pub fn is_assigned(&self, field: &str) -> bool {
        self.ty
            .field_index(field)
            .is_some_and(|index| self.assigned.contains(index))
    }

    /// Fields still lacking a value, in declaration order.
    ///
    /// Maybe and array fields always have one, so they are never listed.
    pub fn check_unassigned(&self) -> Vec<&str> {
        self.ty
            .field_names()
            .iter()
            .zip(&self.slots)
            .filter(|(_, slot)| slot.is_none())
            .map(|(name, _)| name.as_str())
            .collect()
    }

    /// Fail with [`MetaError::IncompleteObject`] if any field lacks a value.
    pub fn ensure_complete(&self) -> Result<(), MetaError> {
        let missing = self.check_unassigned();
        if missing.is_empty() {
            return Ok(());
        }
        Err(MetaError::IncompleteObject {
            type_name: self.ty.name().to_string(),
            fields: missing.into_iter().map(str::to_string).collect(),
        })
    }

    pub fn ty(&self) -> &Arc<CompoundType> {
        &self.ty
    }

    pub fn type_name(&self) -> &str {
        self.ty.name()
    }

    /// Constructor tag, `None` for product instances.
    pub fn tag(&self) -> Option<u32> {
        self.ty.tag()
    }

    /// Whether this is some variant of `sum`.
    pub fn is_variant_of(&self, sum: &SumType) -> bool {
        sum.contains(self)
    }

    /// Render with an explicit configuration.
    pub fn render(&self, config: &FormatConfig) -> Result<String, FormatError> {
        format_node(self, config)
    }
}

impl PartialEq for Obj {
    /// Same generated type (hence same tag) and equal slots, recursively.
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.ty, &other.ty) && ensure_sufficient_stack(|| self.slots == other.slots)
    }
}

impl Eq for Obj {}

impl Clone for Obj {
    fn clone(&self) -> Self {
        ensure_sufficient_stack(|| Obj {
            ty: Arc::clone(&self.ty),
            slots: self.slots.clone(),
            assigned: self.assigned.clone(),
        })
    }
}

impl Drop for Obj {
    /// Unlinks nested instances into a worklist so that dropping a deep
    /// chain never recurses.
    fn drop(&mut self) {
        let mut pending = Vec::new();
        detach_nested(&mut self.slots, &mut pending);
        while let Some(value) = pending.pop() {
            match value {
                Value::Obj(mut obj) => detach_nested(&mut obj.slots, &mut pending),
                Value::Array(items) => pending.extend(items),
                _ => {}
            }
        }
    }
}

/// Move every slot holding an instance or an array into `out`.
fn detach_nested(slots: &mut [Option<Value>], out: &mut Vec<Value>) {
    for slot in slots {
        if matches!(slot, Some(Value::Obj(_) | Value::Array(_))) {
            out.extend(slot.take());
        }
    }
}

impl NodeView for Obj {
    fn type_name(&self) -> &str {
        self.ty.name()
    }

    fn field_names(&self) -> &[String] {
        self.ty.field_names()
    }

    fn field_desc(&self, field: &str) -> Option<&Desc> {
        self.ty.field_desc(field)
    }

    fn field_value(&self, field: &str) -> FieldValue<'_> {
        match self.ty.field_index(field).and_then(|i| self.slots[i].as_ref()) {
            Some(value) => value.view(),
            None => FieldValue::Unset,
        }
    }
}

impl fmt::Display for Obj {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match format_node(self, &FormatConfig::default()) {
            Ok(text) => f.write_str(&text),
            Err(err) => write!(f, "<{}: {err}>", self.type_name()),
        }
    }
}

impl fmt::Debug for Obj {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ensure_sufficient_stack(|| {
            let mut s = f.debug_struct(self.ty.name());
            for (name, slot) in self.ty.field_names().iter().zip(&self.slots) {
                match slot {
                    Some(value) => s.field(name, value),
                    None => s.field(name, &format_args!("<unset>")),
                };
            }
            s.finish_non_exhaustive()
        })
    }
}

/// Accumulates arguments for [`Obj::construct`].
#[derive(Debug)]
#[must_use = "call `build` to create the instance"]
pub struct ObjBuilder {
    ty: Arc<CompoundType>,
    positional: Vec<Value>,
    named: Vec<(String, Value)>,
}

impl ObjBuilder {
    /// Next positional argument.
    pub fn arg(mut self, value: impl Into<Value>) -> Self {
        self.positional.push(value.into());
        self
    }

    /// Named argument.
    pub fn field(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.named.push((name.into(), value.into()));
        self
    }

    pub fn build(self) -> Result<Obj, MetaError> {
        Obj::construct(&self.ty, self.positional, self.named)
    }
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::expect_used,
    reason = "test assertions use unwrap/expect for clarity"
)]
