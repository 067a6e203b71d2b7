//! ASDL Object Model
//!
//! Synthesizes runtime types from a schema [`Module`](asdl_ir::Module) and
//! provides the instances built from them.
//!
//! # Architecture
//!
//! - [`synth`]: schema definitions to [`GeneratedType`]s in a [`Namespace`]
//! - [`obj`]: record instances with required/duplicate/default bookkeeping
//! - [`check`]: per-assignment type checking
//!
//! Instances implement [`NodeView`](asdl_ir::NodeView), so they render
//! through `asdl_fmt`; `Display` uses the default [`FormatConfig`].
//!
//! ```text
//! Module --synthesize--> Namespace --Obj::construct--> Obj --render--> "(Point 1 2)"
//! ```

pub mod check;
mod error;
mod field_set;
pub mod obj;
pub mod synth;
mod types;
mod value;

use std::sync::Once;

pub use asdl_fmt::{EnumStyle, FormatConfig, FormatError, UnsetPolicy};
pub use check::{conforms, DescriptorChecker, ValueChecker};
pub use error::{MalformedReason, MetaError};
pub use obj::{Obj, ObjBuilder};
pub use synth::{synthesize, synthesize_into, synthesize_with, Install, Namespace, SynthesisOptions};
pub use types::{CompoundType, EnumType, EnumValue, GeneratedType, Origin, SumType, TagTable};
pub use value::Value;

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debugging synthesis and layout.
///
/// Call once at startup; later calls are no-ops. Nothing is installed
/// unless `RUST_LOG` is set, e.g. `RUST_LOG=asdl_meta=debug,asdl_fmt=trace`.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .init();
        }
    });
}
