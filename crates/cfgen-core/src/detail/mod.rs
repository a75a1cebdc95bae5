//! # Detail Namespace
//!
//! Everything generated accessor code references lives here. The compiler
//! emits fully qualified paths (`::cfgen_core::detail::adapt::<...>`), so a
//! project that wants its own helpers can point `--detail-namespace` at any
//! module exposing the same names.

mod adaptor;
mod range;
mod validate;

pub use adaptor::{
    adapt, lookup, make_optional, Adaptor, BoolAdaptor, DoubleAdaptor, FloatAdaptor, Int16Adaptor,
    Int32Adaptor, Int64Adaptor, Int8Adaptor, StringViewAdaptor, UInt16Adaptor, UInt32Adaptor,
    UInt64Adaptor, UInt8Adaptor,
};
pub use range::{Range, RangeIter};
pub use validate::{compile_schema, validate, EmbeddedSchema};

pub use crate::error::{SchemaError, ValidationViolations, Violation};
pub use serde_json::Value;
