//! # Schema Embedding
//!
//! Appends the schema, as a compact JSON string literal, and a `make_config`
//! factory that validates a tree against it before handing out the root
//! accessor. The embedded schema is compiled once per process on first use.

use std::fmt::Write;

use serde_json::Value;

use crate::error::CodegenError;
use crate::naming::escape_string_literal;
use crate::options::GeneratorOptions;

/// Compact JSON text of `schema`, escaped for a Rust string literal.
pub fn embedded_schema_literal(schema: &Value) -> Result<String, CodegenError> {
    let text = serde_json::to_string(schema)?;
    Ok(escape_string_literal(&text))
}

/// Writes the `make_config` factory for the root accessor into `out`.
pub fn emit_factory(
    schema: &Value,
    options: &GeneratorOptions,
    out: &mut String,
) -> Result<(), CodegenError> {
    let literal = embedded_schema_literal(schema)?;
    let root = &options.config_class;
    let embedded = options.detail("EmbeddedSchema");

    writeln!(out, "/// Validates `obj` against the embedded schema and returns its accessor.")?;
    writeln!(
        out,
        "pub fn make_config(obj: &{}) -> ::std::result::Result<{root}<'_>, {}> {{",
        options.detail("Value"),
        options.detail("SchemaError"),
    )?;
    writeln!(out, "    static SCHEMA: {embedded} = {embedded}::new(\"{literal}\");")?;
    writeln!(out, "    SCHEMA.validate(obj)?;")?;
    writeln!(out, "    ::std::result::Result::Ok({root}::new(obj))")?;
    writeln!(out, "}}")?;

    tracing::debug!(bytes = literal.len(), "embedded schema");
    Ok(())
}
