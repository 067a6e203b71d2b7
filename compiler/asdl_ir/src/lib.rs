//! ASDL IR - Schema Descriptor Types
//!
//! This crate contains the schema-level vocabulary shared by the rest of the
//! workspace:
//! - Descriptors (`Desc`) for primitives, sums, products and the array/maybe modifiers
//! - The `Module` value an ASDL parser hands over, plus a builder for it
//! - The read-only `NodeView` contract the renderer uses to walk instances
//!
//! # Design Philosophy
//!
//! - **Share Definitions**: `Sum` and `Product` live behind `Arc` so that a
//!   resolved field descriptor and the module definition are the same object.
//! - **Names, Not Pointers**: fields refer to other definitions by name, so
//!   recursive schemas never form reference cycles.
//! - **Interface Segregation**: the renderer sees four queries, never the
//!   concrete instance type.

mod desc;
mod module;
pub mod view;

pub use desc::{primitive, Constructor, Desc, Field, Product, Sum};
pub use module::{Definition, Module, ModuleBuilder, TypeDef};
pub use view::{FieldValue, NodeView};
