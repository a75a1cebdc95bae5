//! # Schema Document Loading
//!
//! Schema documents are JSON or YAML. The format is chosen from the file
//! extension (`.yaml`/`.yml` for YAML, anything else is JSON) and YAML is
//! converted to the same `serde_json::Value` tree the rest of the compiler
//! works on. Key order is preserved in both cases, so accessor methods come
//! out in the order the schema author wrote the properties.

use std::path::Path;

use serde_json::Value;

use crate::error::CodegenError;

/// Read and parse the schema document at `path`.
///
/// # Errors
///
/// Returns `CodegenError::SchemaLoad` if the file cannot be read or is not
/// valid JSON/YAML.
pub fn load_schema_document(path: &Path) -> Result<Value, CodegenError> {
    let load_error = |reason: String| CodegenError::SchemaLoad {
        path: path.display().to_string(),
        reason,
    };

    let content = std::fs::read_to_string(path)
        .map_err(|e| load_error(format!("cannot read file: {e}")))?;

    let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");

    let value = match ext {
        "yaml" | "yml" => {
            let yaml_value: serde_yaml::Value = serde_yaml::from_str(&content)
                .map_err(|e| load_error(format!("invalid YAML: {e}")))?;
            yaml_to_json_value(&yaml_value)
                .map_err(|e| load_error(format!("YAML-to-JSON conversion failed: {e}")))?
        }
        _ => serde_json::from_str(&content).map_err(|e| load_error(format!("invalid JSON: {e}")))?,
    };

    tracing::debug!(path = %path.display(), "loaded schema document");
    Ok(value)
}

/// Convert a `serde_yaml::Value` to a `serde_json::Value`.
///
/// Tags are dropped, non-string keys are stringified, and floats JSON cannot
/// represent (NaN, infinities) are rejected.
pub fn yaml_to_json_value(yaml: &serde_yaml::Value) -> Result<Value, String> {
    match yaml {
        serde_yaml::Value::Null => Ok(Value::Null),
        serde_yaml::Value::Bool(b) => Ok(Value::Bool(*b)),
        serde_yaml::Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                Ok(Value::Number(serde_json::Number::from(i)))
            } else if let Some(u) = n.as_u64() {
                Ok(Value::Number(serde_json::Number::from(u)))
            } else if let Some(f) = n.as_f64() {
                serde_json::Number::from_f64(f)
                    .map(Value::Number)
                    .ok_or_else(|| format!("cannot represent float {f} in JSON"))
            } else {
                Err(format!("unsupported YAML number: {n:?}"))
            }
        }
        serde_yaml::Value::String(s) => Ok(Value::String(s.clone())),
        serde_yaml::Value::Sequence(seq) => {
            let items: Result<Vec<Value>, String> = seq.iter().map(yaml_to_json_value).collect();
            Ok(Value::Array(items?))
        }
        serde_yaml::Value::Mapping(map) => {
            let mut json_map = serde_json::Map::new();
            for (k, v) in map {
                let key = match k {
                    serde_yaml::Value::String(s) => s.clone(),
                    serde_yaml::Value::Number(n) => n.to_string(),
                    serde_yaml::Value::Bool(b) => b.to_string(),
                    other => return Err(format!("unsupported YAML map key type: {other:?}")),
                };
                json_map.insert(key, yaml_to_json_value(v)?);
            }
            Ok(Value::Object(json_map))
        }
        serde_yaml::Value::Tagged(tagged) => yaml_to_json_value(&tagged.value),
    }
}
