//! Generated types.
//!
//! Synthesis maps every schema definition onto one of three shapes:
//!
//! | Definition | Generated |
//! |------------|-----------|
//! | simple sum | [`EnumType`] with one shared [`EnumValue`] per constructor |
//! | compound sum | [`SumType`] base plus one [`CompoundType`] per constructor |
//! | product | one [`CompoundType`] |

use std::fmt;
use std::sync::Arc;

use asdl_ir::{Desc, Product, Sum};
use rustc_hash::FxHashMap;

use crate::check::ValueChecker;
use crate::obj::Obj;

/// A generated type bound under a name.
#[derive(Clone, Debug)]
pub enum GeneratedType {
    Enum(Arc<EnumType>),
    Sum(Arc<SumType>),
    Compound(Arc<CompoundType>),
}

impl GeneratedType {
    pub fn name(&self) -> &str {
        match self {
            GeneratedType::Enum(ty) => ty.name(),
            GeneratedType::Sum(ty) => ty.name(),
            GeneratedType::Compound(ty) => ty.name(),
        }
    }
}

// -- Simple sums --

/// Closed enumeration generated from a simple sum.
#[derive(Debug)]
pub struct EnumType {
    sum: Arc<Sum>,
    values: Vec<EnumValue>,
}

impl EnumType {
    pub(crate) fn new(sum: &Arc<Sum>) -> Self {
        let values = sum
            .constructors
            .iter()
            .enumerate()
            .map(|(i, c)| {
                EnumValue(Arc::new(EnumEntry {
                    sum: Arc::clone(sum),
                    tag: tag_for(i),
                    name: c.name.clone(),
                }))
            })
            .collect();
        EnumType {
            sum: Arc::clone(sum),
            values,
        }
    }

    pub fn name(&self) -> &str {
        &self.sum.name
    }

    /// The shared value for a constructor, e.g. `op.value("Plus")`.
    ///
    /// Every call returns a handle to the same instance.
    pub fn value(&self, constructor: &str) -> Option<EnumValue> {
        self.values.iter().find(|v| v.name() == constructor).cloned()
    }

    pub fn by_tag(&self, tag: u32) -> Option<EnumValue> {
        let index = usize::try_from(tag).ok()?.checked_sub(1)?;
        self.values.get(index).cloned()
    }

    /// All values in declaration order.
    pub fn values(&self) -> &[EnumValue] {
        &self.values
    }

    pub fn desc(&self) -> &Arc<Sum> {
        &self.sum
    }
}

#[derive(Debug)]
struct EnumEntry {
    sum: Arc<Sum>,
    tag: u32,
    name: String,
}

/// One constructor of a simple sum, shared by identity.
#[derive(Clone)]
pub struct EnumValue(Arc<EnumEntry>);

impl EnumValue {
    #[inline]
    pub fn tag(&self) -> u32 {
        self.0.tag
    }

    pub fn name(&self) -> &str {
        &self.0.name
    }

    pub fn sum_name(&self) -> &str {
        &self.0.sum.name
    }

    pub fn sum(&self) -> &Arc<Sum> {
        &self.0.sum
    }

    /// Whether both handles point at the same shared value.
    pub fn ptr_eq(&self, other: &EnumValue) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl PartialEq for EnumValue {
    fn eq(&self, other: &Self) -> bool {
        self.tag() == other.tag() && Arc::ptr_eq(self.sum(), other.sum())
    }
}

impl Eq for EnumValue {}

impl fmt::Debug for EnumValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{} {} {}>", self.sum_name(), self.name(), self.tag())
    }
}

impl fmt::Display for EnumValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// -- Compound sums and products --

/// Where a compound type came from.
#[derive(Clone, Debug)]
pub enum Origin {
    Product(Arc<Product>),
    Constructor { sum: Arc<Sum>, tag: u32 },
}

/// Record type with a resolved field table.
pub struct CompoundType {
    name: String,
    origin: Origin,
    fields: Vec<String>,
    descs: Vec<Desc>,
    index: FxHashMap<String, usize>,
    checker: Option<Arc<dyn ValueChecker>>,
}

impl CompoundType {
    pub(crate) fn new(
        name: &str,
        origin: Origin,
        fields: Vec<(String, Desc)>,
        checker: Option<Arc<dyn ValueChecker>>,
    ) -> Self {
        let index = fields
            .iter()
            .enumerate()
            .map(|(i, (field, _))| (field.clone(), i))
            .collect();
        let (fields, descs) = fields.into_iter().unzip();
        CompoundType {
            name: name.to_string(),
            origin,
            fields,
            descs,
            index,
            checker,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Constructor tag, `None` for products.
    pub fn tag(&self) -> Option<u32> {
        match self.origin {
            Origin::Product(_) => None,
            Origin::Constructor { tag, .. } => Some(tag),
        }
    }

    pub fn origin(&self) -> &Origin {
        &self.origin
    }

    /// Field names in positional order.
    pub fn field_names(&self) -> &[String] {
        &self.fields
    }

    pub fn field_index(&self, field: &str) -> Option<usize> {
        self.index.get(field).copied()
    }

    pub fn field_desc(&self, field: &str) -> Option<&Desc> {
        self.field_index(field).map(|i| &self.descs[i])
    }

    pub(crate) fn desc_at(&self, index: usize) -> &Desc {
        &self.descs[index]
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub(crate) fn checker(&self) -> Option<&dyn ValueChecker> {
        self.checker.as_deref()
    }

    /// Whether values are type-checked on assignment.
    pub fn is_checked(&self) -> bool {
        self.checker.is_some()
    }
}

impl fmt::Debug for CompoundType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CompoundType")
            .field("name", &self.name)
            .field("tag", &self.tag())
            .field("fields", &self.fields)
            .field("checked", &self.is_checked())
            .finish_non_exhaustive()
    }
}

/// Abstract base of a compound sum. Has no fields of its own.
#[derive(Debug)]
pub struct SumType {
    sum: Arc<Sum>,
    constructors: Vec<Arc<CompoundType>>,
    tags: TagTable,
}

impl SumType {
    pub(crate) fn new(sum: &Arc<Sum>, constructors: Vec<Arc<CompoundType>>) -> Self {
        let tags = TagTable::new(
            format!("{}_e", sum.name),
            constructors
                .iter()
                .filter_map(|c| Some((c.name().to_string(), c.tag()?)))
                .collect(),
        );
        SumType {
            sum: Arc::clone(sum),
            constructors,
            tags,
        }
    }

    pub fn name(&self) -> &str {
        &self.sum.name
    }

    pub fn constructor(&self, name: &str) -> Option<&Arc<CompoundType>> {
        self.constructors.iter().find(|c| c.name() == name)
    }

    pub fn constructors(&self) -> &[Arc<CompoundType>] {
        &self.constructors
    }

    /// Whether `obj` is some variant of this sum.
    pub fn contains(&self, obj: &Obj) -> bool {
        matches!(obj.ty().origin(), Origin::Constructor { sum, .. } if Arc::ptr_eq(sum, &self.sum))
    }

    pub fn tags(&self) -> &TagTable {
        &self.tags
    }

    pub fn desc(&self) -> &Arc<Sum> {
        &self.sum
    }
}

/// Constructor name to tag, e.g. `expr_e`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TagTable {
    name: String,
    entries: Vec<(String, u32)>,
}

impl TagTable {
    pub(crate) fn new(name: String, entries: Vec<(String, u32)>) -> Self {
        TagTable { name, entries }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn get(&self, constructor: &str) -> Option<u32> {
        self.entries
            .iter()
            .find_map(|(name, tag)| (name == constructor).then_some(*tag))
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> {
        self.entries.iter().map(|(name, tag)| (name.as_str(), *tag))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Tag of the constructor at `index`; 0 is never used.
#[expect(
    clippy::cast_possible_truncation,
    reason = "constructor counts are far below u32::MAX"
)]
pub(crate) fn tag_for(index: usize) -> u32 {
    (index + 1) as u32
}
