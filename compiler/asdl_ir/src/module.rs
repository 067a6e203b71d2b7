//! Schema modules.
//!
//! A `Module` is the ordered list of definitions produced by an ASDL parser.
//! It is immutable once built.

use std::sync::Arc;

use rustc_hash::FxHashMap;

use crate::desc::{Constructor, Desc, Field, Product, Sum};

/// Right-hand side of a definition.
#[derive(Clone, Debug)]
pub enum TypeDef {
    Sum(Arc<Sum>),
    Product(Arc<Product>),
}

impl TypeDef {
    /// The descriptor a field referencing this definition resolves to.
    pub fn desc(&self) -> Desc {
        match self {
            TypeDef::Sum(sum) => Desc::Sum(Arc::clone(sum)),
            TypeDef::Product(product) => Desc::Product(Arc::clone(product)),
        }
    }
}

/// `name = value`
#[derive(Clone, Debug)]
pub struct Definition {
    pub name: String,
    pub value: TypeDef,
}

/// Ordered collection of named definitions.
#[derive(Clone, Debug)]
pub struct Module {
    name: String,
    definitions: Vec<Definition>,
    index: FxHashMap<String, usize>,
}

impl Module {
    /// Build a module from definitions in declaration order.
    ///
    /// When a name is defined twice, `get` finds the first definition; the
    /// synthesizer reports the duplicate.
    pub fn new(name: impl Into<String>, definitions: Vec<Definition>) -> Self {
        let mut index = FxHashMap::default();
        for (i, def) in definitions.iter().enumerate() {
            index.entry(def.name.clone()).or_insert(i);
        }
        Module {
            name: name.into(),
            definitions,
            index,
        }
    }

    /// Start building a module.
    pub fn builder(name: impl Into<String>) -> ModuleBuilder {
        ModuleBuilder {
            name: name.into(),
            definitions: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn definitions(&self) -> &[Definition] {
        &self.definitions
    }

    /// Look up a definition by name.
    pub fn get(&self, name: &str) -> Option<&TypeDef> {
        self.index.get(name).map(|&i| &self.definitions[i].value)
    }

    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }
}

/// Incremental construction of a [`Module`].
///
/// Stands in for the schema-text parser: it records definitions as given and
/// performs no validation.
#[derive(Debug)]
pub struct ModuleBuilder {
    name: String,
    definitions: Vec<Definition>,
}

impl ModuleBuilder {
    /// `name = (fields)`
    #[must_use]
    pub fn product(mut self, name: impl Into<String>, fields: Vec<Field>) -> Self {
        let name = name.into();
        let product = Product {
            name: name.clone(),
            fields,
        };
        self.definitions.push(Definition {
            name,
            value: TypeDef::Product(Arc::new(product)),
        });
        self
    }

    /// `name = C1(fields) | C2 | ...`
    #[must_use]
    pub fn sum(mut self, name: impl Into<String>, constructors: Vec<Constructor>) -> Self {
        let name = name.into();
        let sum = Sum {
            name: name.clone(),
            constructors,
        };
        self.definitions.push(Definition {
            name,
            value: TypeDef::Sum(Arc::new(sum)),
        });
        self
    }

    /// `name = A | B | ...` with field-less constructors.
    #[must_use]
    pub fn simple_sum(self, name: impl Into<String>, constructors: &[&str]) -> Self {
        let constructors = constructors.iter().map(|c| Constructor::unit(*c)).collect();
        self.sum(name, constructors)
    }

    pub fn build(self) -> Module {
        Module::new(self.name, self.definitions)
    }
}
