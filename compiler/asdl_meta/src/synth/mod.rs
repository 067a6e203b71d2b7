//! Type Synthesis
//!
//! Turns a schema [`Module`] into a [`Namespace`] of generated types.
//!
//! # Per Definition
//!
//! - **Simple sum**: one [`EnumType`]; each constructor becomes a shared
//!   [`EnumValue`](crate::EnumValue) with tag `index + 1`
//! - **Compound sum**: a [`SumType`] base, one [`CompoundType`] per
//!   constructor (tag `index + 1`, bound at the root and under the sum) and
//!   a `<name>_e` [`TagTable`]
//! - **Product**: one [`CompoundType`] without a tag
//!
//! # Field Resolution
//!
//! Each field's type name resolves to a primitive or to another definition
//! of the same module, then gets wrapped in `Maybe` (optional) or `Array`
//! (repeated).
//!
//! Any malformed definition aborts the whole module: nothing is published.

use std::sync::Arc;

use asdl_ir::{primitive, Desc, Field, Module, TypeDef};
use rustc_hash::FxHashMap;

use crate::check::{DescriptorChecker, ValueChecker};
use crate::error::{MalformedReason, MetaError};
use crate::types::{tag_for, CompoundType, EnumType, GeneratedType, Origin, SumType, TagTable};

/// Options applied to every generated type.
#[derive(Clone, Debug)]
pub struct SynthesisOptions {
    /// Check run on every field assignment; `None` disables checking.
    pub checker: Option<Arc<dyn ValueChecker>>,
}

impl Default for SynthesisOptions {
    fn default() -> Self {
        SynthesisOptions {
            checker: Some(Arc::new(DescriptorChecker)),
        }
    }
}

impl SynthesisOptions {
    pub fn without_type_check() -> Self {
        SynthesisOptions { checker: None }
    }

    pub fn with_checker(checker: impl ValueChecker + 'static) -> Self {
        SynthesisOptions {
            checker: Some(Arc::new(checker)),
        }
    }
}

/// Receives generated types.
///
/// Implemented by [`Namespace`]; callers can install into their own
/// registries with [`synthesize_into`].
pub trait Install {
    fn install_type(&mut self, name: &str, ty: GeneratedType);

    fn install_tags(&mut self, table: TagTable);
}

/// Generated types by name, in definition order.
#[derive(Clone, Debug, Default)]
pub struct Namespace {
    types: Vec<GeneratedType>,
    type_index: FxHashMap<String, usize>,
    tags: Vec<TagTable>,
    tag_index: FxHashMap<String, usize>,
}

impl Namespace {
    pub fn get(&self, name: &str) -> Option<&GeneratedType> {
        self.type_index.get(name).map(|&i| &self.types[i])
    }

    /// A product or constructor type.
    pub fn compound(&self, name: &str) -> Option<&Arc<CompoundType>> {
        match self.get(name)? {
            GeneratedType::Compound(ty) => Some(ty),
            _ => None,
        }
    }

    /// The enum generated from a simple sum.
    pub fn enum_type(&self, name: &str) -> Option<&Arc<EnumType>> {
        match self.get(name)? {
            GeneratedType::Enum(ty) => Some(ty),
            _ => None,
        }
    }

    /// The base type of a compound sum.
    pub fn sum(&self, name: &str) -> Option<&Arc<SumType>> {
        match self.get(name)? {
            GeneratedType::Sum(ty) => Some(ty),
            _ => None,
        }
    }

    /// Tag table by its bound name, e.g. `expr_e`.
    pub fn tags(&self, name: &str) -> Option<&TagTable> {
        self.tag_index.get(name).map(|&i| &self.tags[i])
    }

    /// Bound type names in binding order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.types.iter().map(GeneratedType::name)
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    /// Hand every type and tag table to `target`, in binding order.
    pub fn install_into<T: Install + ?Sized>(self, target: &mut T) {
        for ty in self.types {
            let name = ty.name().to_owned();
            target.install_type(&name, ty);
        }
        for table in self.tags {
            target.install_tags(table);
        }
    }

    fn is_bound(&self, name: &str) -> bool {
        self.type_index.contains_key(name) || self.tag_index.contains_key(name)
    }

    /// Bind a new name, rejecting collisions with types and tag tables.
    fn bind(&mut self, definition: &str, ty: GeneratedType) -> Result<(), MetaError> {
        if self.is_bound(ty.name()) {
            return Err(duplicate(definition, ty.name()));
        }
        self.type_index.insert(ty.name().to_string(), self.types.len());
        self.types.push(ty);
        Ok(())
    }

    fn bind_tags(&mut self, definition: &str, table: TagTable) -> Result<(), MetaError> {
        if self.is_bound(table.name()) {
            return Err(duplicate(definition, table.name()));
        }
        self.tag_index.insert(table.name().to_string(), self.tags.len());
        self.tags.push(table);
        Ok(())
    }
}

impl Install for Namespace {
    fn install_type(&mut self, name: &str, ty: GeneratedType) {
        if let Some(&i) = self.type_index.get(name) {
            self.types[i] = ty;
        } else {
            self.type_index.insert(name.to_string(), self.types.len());
            self.types.push(ty);
        }
    }

    fn install_tags(&mut self, table: TagTable) {
        if let Some(&i) = self.tag_index.get(table.name()) {
            self.tags[i] = table;
        } else {
            self.tag_index.insert(table.name().to_string(), self.tags.len());
            self.tags.push(table);
        }
    }
}

fn duplicate(definition: &str, name: &str) -> MetaError {
    MetaError::malformed(
        definition,
        MalformedReason::DuplicateName {
            name: name.to_string(),
        },
    )
}

/// Synthesize a module with type checking on.
pub fn synthesize(module: &Module) -> Result<Namespace, MetaError> {
    synthesize_with(module, &SynthesisOptions::default())
}

/// Synthesize a module.
#[tracing::instrument(level = "debug", skip_all, fields(module = module.name(), definitions = module.len()))]
pub fn synthesize_with(module: &Module, options: &SynthesisOptions) -> Result<Namespace, MetaError> {
    let mut ns = Namespace::default();

    for def in module.definitions() {
        match &def.value {
            TypeDef::Sum(sum) if sum.is_simple() => {
                tracing::debug!(name = %def.name, constructors = sum.constructors.len(), "enum");
                ns.bind(&def.name, GeneratedType::Enum(Arc::new(EnumType::new(sum))))?;
            }
            TypeDef::Sum(sum) => {
                tracing::debug!(name = %def.name, constructors = sum.constructors.len(), "sum");
                let mut constructors = Vec::with_capacity(sum.constructors.len());
                for (i, cons) in sum.constructors.iter().enumerate() {
                    let fields = resolve_fields(module, &def.name, &cons.fields)?;
                    let origin = Origin::Constructor {
                        sum: Arc::clone(sum),
                        tag: tag_for(i),
                    };
                    constructors.push(Arc::new(CompoundType::new(
                        &cons.name,
                        origin,
                        fields,
                        options.checker.clone(),
                    )));
                }

                let base = Arc::new(SumType::new(sum, constructors));
                ns.bind(&def.name, GeneratedType::Sum(Arc::clone(&base)))?;
                for cons in base.constructors() {
                    ns.bind(&def.name, GeneratedType::Compound(Arc::clone(cons)))?;
                }
                ns.bind_tags(&def.name, base.tags().clone())?;
            }
            TypeDef::Product(product) => {
                tracing::debug!(name = %def.name, fields = product.fields.len(), "product");
                let fields = resolve_fields(module, &def.name, &product.fields)?;
                let ty = CompoundType::new(
                    &def.name,
                    Origin::Product(Arc::clone(product)),
                    fields,
                    options.checker.clone(),
                );
                ns.bind(&def.name, GeneratedType::Compound(Arc::new(ty)))?;
            }
        }
    }

    tracing::debug!(types = ns.len(), "module synthesized");
    Ok(ns)
}

/// Synthesize a module and install the result into `target`.
///
/// `target` is untouched if synthesis fails.
pub fn synthesize_into<T: Install + ?Sized>(
    module: &Module,
    options: &SynthesisOptions,
    target: &mut T,
) -> Result<(), MetaError> {
    synthesize_with(module, options)?.install_into(target);
    Ok(())
}

/// Resolve and wrap the descriptors of one field list.
fn resolve_fields(
    module: &Module,
    definition: &str,
    fields: &[Field],
) -> Result<Vec<(String, Desc)>, MetaError> {
    let mut resolved: Vec<(String, Desc)> = Vec::with_capacity(fields.len());

    for field in fields {
        if field.optional && field.repeated {
            return Err(MetaError::malformed(
                definition,
                MalformedReason::OptionalAndRepeated {
                    field: field.name.clone(),
                },
            ));
        }
        if resolved.iter().any(|(name, _)| *name == field.name) {
            return Err(MetaError::malformed(
                definition,
                MalformedReason::DuplicateFieldName {
                    field: field.name.clone(),
                },
            ));
        }

        let Some(base) =
            primitive(&field.type_name).or_else(|| module.get(&field.type_name).map(TypeDef::desc))
        else {
            return Err(MetaError::malformed(
                definition,
                MalformedReason::UndefinedType {
                    field: field.name.clone(),
                    type_name: field.type_name.clone(),
                },
            ));
        };

        let desc = if field.optional {
            Desc::Maybe(Box::new(base))
        } else if field.repeated {
            Desc::Array(Box::new(base))
        } else {
            base
        };
        tracing::trace!(definition, field = %field.name, desc = %desc, "resolved field");
        resolved.push((field.name.clone(), desc));
    }

    Ok(resolved)
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::expect_used,
    reason = "test assertions use unwrap/expect for clarity"
)]
