//! Schema validation for generated factories.
//!
//! Validation is delegated to the `jsonschema` crate. Cross-schema `$ref`
//! resolution is not supported by the compiler, so validators are built
//! with a retriever that refuses every external URI instead of reaching for
//! the network or the filesystem.

use jsonschema::{Retrieve, Uri, Validator};
use once_cell::sync::OnceCell;
use serde_json::Value;

use crate::error::{SchemaError, ValidationViolations, Violation};

/// Retriever that resolves nothing.
struct OfflineRetriever;

impl Retrieve for OfflineRetriever {
    fn retrieve(
        &self,
        uri: &Uri<&str>,
    ) -> Result<Value, Box<dyn std::error::Error + Send + Sync>> {
        Err(format!("external schema references are not supported: {}", uri.as_str()).into())
    }
}

/// Compiles a schema tree into a reusable validator.
///
/// # Errors
///
/// Returns `SchemaError::InvalidSchema` if the schema is not a valid JSON
/// Schema document.
pub fn compile_schema(schema: &Value) -> Result<Validator, SchemaError> {
    let mut opts = jsonschema::options();
    opts.with_retriever(OfflineRetriever);
    opts.build(schema).map_err(|e| SchemaError::InvalidSchema {
        reason: e.to_string(),
    })
}

fn check(validator: &Validator, instance: &Value) -> Result<(), SchemaError> {
    let errors: Vec<Violation> = validator
        .iter_errors(instance)
        .map(|e| Violation {
            instance_path: e.instance_path.to_string(),
            schema_path: e.schema_path.to_string(),
            message: e.to_string(),
        })
        .collect();

    if errors.is_empty() {
        Ok(())
    } else {
        Err(SchemaError::ValidationFailed {
            violations: ValidationViolations::new(errors),
        })
    }
}

/// One-shot validation of `instance` against `schema`.
///
/// # Errors
///
/// Returns `SchemaError::ValidationFailed` listing every violation, or
/// `SchemaError::InvalidSchema` if `schema` cannot be compiled.
pub fn validate(schema: &Value, instance: &Value) -> Result<(), SchemaError> {
    let validator = compile_schema(schema)?;
    check(&validator, instance)
}

/// A schema compiled into generated code as compact JSON text.
///
/// Declared as a `static` inside the generated factory. The text is parsed
/// and compiled on the first call to [`EmbeddedSchema::validate`] and the
/// validator is shared by every later call on every thread.
pub struct EmbeddedSchema {
    text: &'static str,
    validator: OnceCell<Validator>,
}

impl EmbeddedSchema {
    /// Wraps embedded schema text. Nothing is parsed until first use.
    pub const fn new(text: &'static str) -> Self {
        Self {
            text,
            validator: OnceCell::new(),
        }
    }

    /// Returns the compiled validator, building it on first use.
    ///
    /// The text was written by the compiler from a schema it had already
    /// parsed, so a failure here is a defect in the generated code rather
    /// than bad input. The process is aborted.
    pub fn validator(&self) -> &Validator {
        self.validator
            .get_or_init(|| match compile_embedded(self.text) {
                Ok(validator) => validator,
                Err(err) => {
                    tracing::error!(%err, "embedded schema does not compile; generated code is corrupt");
                    std::process::abort()
                }
            })
    }

    /// Validates `instance` against the embedded schema.
    ///
    /// # Errors
    ///
    /// Returns `SchemaError::ValidationFailed` listing every violation.
    pub fn validate(&self, instance: &Value) -> Result<(), SchemaError> {
        check(self.validator(), instance)
    }
}

fn compile_embedded(text: &str) -> Result<Validator, SchemaError> {
    let schema: Value = serde_json::from_str(text).map_err(|e| SchemaError::InvalidSchema {
        reason: format!("embedded schema is not valid JSON: {e}"),
    })?;
    compile_schema(&schema)
}
