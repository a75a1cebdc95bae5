//! # cfgen-schema — Schema Compiler
//!
//! Compiles a JSON Schema description of a configuration file into Rust
//! accessor types that read values out of a `serde_json::Value` tree.
//!
//! ## Pipeline
//!
//! 1. [`load`] parses the schema document (JSON or YAML) into a tree.
//! 2. [`model`] turns the tree into a typed [`SchemaRoot`].
//! 3. [`resolve`] decides each property's Rust type, using [`numeric`] to
//!    pick the narrowest integer that fits the declared bounds.
//! 4. [`codegen`] writes one accessor struct per schema object, nested
//!    types first.
//! 5. [`embed`] optionally appends the schema text and a validating
//!    `make_config` factory.
//!
//! [`generate`] runs steps 2–5 and returns the generated source.
//!
//! ## Supported Subset
//!
//! `object` (with `properties` and `required`), single-schema `array`
//! `items`, `string`, `integer`, `number` (with `minimum`,
//! `exclusiveMinimum`, `maximum`, `exclusiveMaximum`, `multipleOf`) and
//! `boolean`. `$ref`, `enum`, tuple arrays, `additionalProperties` and the
//! composition keywords produce no accessor.

pub mod codegen;
pub mod embed;
pub mod error;
pub mod load;
pub mod model;
pub mod naming;
pub mod numeric;
pub mod options;
pub mod resolve;

pub use codegen::{emit_class, generate};
pub use error::CodegenError;
pub use load::{load_schema_document, yaml_to_json_value};
pub use model::{ArraySchema, NumberSchema, ObjectSchema, SchemaKind, SchemaNode, SchemaRoot, SchemaType};
pub use naming::UniqueNames;
pub use numeric::{select_numeric_repr, NumericRepr};
pub use options::GeneratorOptions;
pub use resolve::{ResolvedType, TypeResolver};
