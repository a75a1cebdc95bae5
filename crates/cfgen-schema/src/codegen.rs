//! # Class Emission
//!
//! Writes one accessor struct per schema object. Each struct wraps a
//! borrowed `&'a Value` and exposes one method per property, in document
//! order. Required properties return their resolved type; optional ones
//! return `Option` of it, `Some` exactly when the key is present.
//!
//! Nested objects and array element objects become their own structs,
//! written before the struct that refers to them.

use std::fmt::{self, Write};

use serde_json::Value;

use crate::embed::emit_factory;
use crate::error::CodegenError;
use crate::model::{ObjectSchema, SchemaRoot};
use crate::naming::{method_ident, UniqueNames};
use crate::options::GeneratorOptions;
use crate::resolve::TypeResolver;

/// First line of every generated file.
pub const GENERATED_HEADER: &str = "// Machine generated by cfgen. DO NOT EDIT.";

/// Generates accessor code for the schema document `schema`.
///
/// # Errors
///
/// Returns `CodegenError::Serialization` if the schema cannot be serialized
/// for embedding, or `CodegenError::Format` if writing the output fails.
pub fn generate(schema: &Value, options: &GeneratorOptions) -> Result<String, CodegenError> {
    let root = SchemaRoot::from_value(schema);

    let mut names = UniqueNames::new();
    let root_name = names.claim(&options.config_class, "");

    let mut out = String::new();
    writeln!(out, "{GENERATED_HEADER}")?;
    writeln!(out)?;
    emit_class(
        &root.object,
        &root_name,
        &root_doc_lines(&root),
        options,
        &mut names,
        &mut out,
    )?;

    if options.embed_schema {
        emit_factory(schema, options, &mut out)?;
    }

    tracing::info!(
        config_class = %options.config_class,
        properties = root.object.properties.len(),
        embed_schema = options.embed_schema,
        bytes = out.len(),
        "generated accessors"
    );
    Ok(out)
}

/// Writes the accessor struct `name` for `object` into `out`, preceded by
/// every nested type its properties need.
///
/// `name` must already be claimed in `names`; nested types claim theirs
/// from the same set. Two properties whose method identifiers coincide
/// (`a-b` and `a_b`) get numeric suffixes in document order.
pub fn emit_class(
    object: &ObjectSchema,
    name: &str,
    docs: &[String],
    options: &GeneratorOptions,
    names: &mut UniqueNames,
    out: &mut String,
) -> fmt::Result {
    let value = options.detail("Value");
    let mut nested = String::new();
    let mut methods = String::new();
    let mut method_names = UniqueNames::new();
    method_names.claim("new", "_");
    method_names.claim("node", "_");

    {
        let mut resolver = TypeResolver::new(options, names, &mut nested, name);
        for (key, property) in &object.properties {
            let Some(resolved) = resolver.resolve(key, property)? else {
                tracing::debug!(class = name, property = %key, "no accessor for property");
                continue;
            };

            writeln!(methods)?;
            if let Some(description) = property.description.as_deref() {
                write_docs(&mut methods, "    ", &doc_lines(None, Some(description)))?;
            }
            let method = method_names.claim(&method_ident(key), "_");
            if object.is_required(key) {
                writeln!(methods, "    pub fn {method}(&self) -> {} {{", resolved.return_type)?;
                writeln!(
                    methods,
                    "        {}::<{}>({}(self.obj, {key:?}))",
                    options.detail("adapt"),
                    resolved.adaptor,
                    options.detail("lookup"),
                )?;
            } else {
                writeln!(
                    methods,
                    "    pub fn {method}(&self) -> ::std::option::Option<{}> {{",
                    resolved.return_type
                )?;
                writeln!(
                    methods,
                    "        {}::<{}>(self.obj.get({key:?}))",
                    options.detail("make_optional"),
                    resolved.adaptor,
                )?;
            }
            writeln!(methods, "    }}")?;
        }
    }

    out.push_str(&nested);

    write_docs(out, "", docs)?;
    writeln!(out, "#[derive(Debug, Clone, Copy)]")?;
    writeln!(out, "pub struct {name}<'a> {{")?;
    writeln!(out, "    obj: &'a {value},")?;
    writeln!(out, "}}")?;
    writeln!(out)?;

    writeln!(out, "impl<'a> {}<'a> for {name}<'a> {{", options.detail("Adaptor"))?;
    writeln!(out, "    type Output = Self;")?;
    writeln!(out)?;
    writeln!(out, "    fn adapt(node: &'a {value}) -> Self {{")?;
    writeln!(out, "        Self::new(node)")?;
    writeln!(out, "    }}")?;
    writeln!(out, "}}")?;
    writeln!(out)?;

    writeln!(out, "#[allow(non_snake_case)]")?;
    writeln!(out, "impl<'a> {name}<'a> {{")?;
    writeln!(out, "    pub fn new(obj: &'a {value}) -> Self {{")?;
    writeln!(out, "        Self {{ obj }}")?;
    writeln!(out, "    }}")?;
    writeln!(out)?;
    writeln!(out, "    pub fn node(&self) -> &'a {value} {{")?;
    writeln!(out, "        self.obj")?;
    writeln!(out, "    }}")?;
    out.push_str(&methods);
    writeln!(out, "}}")?;
    writeln!(out)?;

    tracing::debug!(class = name, "emitted accessor");
    Ok(())
}

/// Doc comment lines for a type or method: the title, then the
/// description, separated by a blank line.
pub(crate) fn doc_lines(title: Option<&str>, description: Option<&str>) -> Vec<String> {
    let mut lines = Vec::new();
    if let Some(title) = title {
        lines.extend(title.lines().map(str::to_string));
    }
    if let Some(description) = description {
        if !lines.is_empty() {
            lines.push(String::new());
        }
        lines.extend(description.lines().map(str::to_string));
    }
    lines
}

fn root_doc_lines(root: &SchemaRoot) -> Vec<String> {
    let mut lines = doc_lines(root.title.as_deref(), root.description.as_deref());
    let identity = [("Schema id", &root.id), ("Schema dialect", &root.schema)];
    for (label, value) in identity {
        if let Some(value) = value {
            if !lines.is_empty() {
                lines.push(String::new());
            }
            lines.push(format!("{label}: `{value}`"));
        }
    }
    lines
}

/// Rewrites schema text so rustdoc never compiles it as a doctest.
///
/// Fenced blocks are re-tagged as `text`, and runs of indented lines
/// (which markdown reads as code) are wrapped in a `text` fence.
fn fence_code_blocks(lines: &[String]) -> Vec<String> {
    let mut fenced = Vec::with_capacity(lines.len());
    let mut open_fence: Option<&'static str> = None;
    let mut in_indented = false;

    for line in lines {
        let trimmed = line.trim_start();
        if let Some(marker) = open_fence {
            if trimmed.starts_with(marker) {
                open_fence = None;
            }
            fenced.push(line.clone());
            continue;
        }

        let marker = ["```", "~~~"]
            .into_iter()
            .find(|marker| trimmed.starts_with(marker));
        if let Some(marker) = marker {
            if in_indented {
                fenced.push("```".to_string());
                in_indented = false;
            }
            let indent = &line[..line.len() - trimmed.len()];
            fenced.push(format!("{indent}{marker}text"));
            open_fence = Some(marker);
            continue;
        }

        let indented = line.starts_with("    ") || line.starts_with('\t');
        if indented && !in_indented {
            fenced.push("```text".to_string());
            in_indented = true;
        } else if !indented && in_indented {
            fenced.push("```".to_string());
            in_indented = false;
        }
        fenced.push(line.clone());
    }

    if let Some(marker) = open_fence {
        fenced.push(marker.to_string());
    } else if in_indented {
        fenced.push("```".to_string());
    }
    fenced
}

fn write_docs(out: &mut String, indent: &str, lines: &[String]) -> fmt::Result {
    for line in &fence_code_blocks(lines) {
        let line = line.trim_end();
        if line.is_empty() {
            writeln!(out, "{indent}///")?;
        } else {
            writeln!(out, "{indent}/// {line}")?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn generate_default(schema: Value) -> String {
        generate(&schema, &GeneratorOptions::default()).unwrap()
    }

    #[test]
    fn test_header_first() {
        let code = generate_default(json!({"type": "object"}));
        assert!(code.starts_with(GENERATED_HEADER));
    }

    #[test]
    fn test_required_and_optional_methods() {
        let code = generate_default(json!({
            "type": "object",
            "properties": {
                "name": {"type": "string"},
                "port": {"type": "integer", "minimum": 0, "maximum": 255}
            },
            "required": ["name"]
        }));
        assert!(code.contains("    pub fn name(&self) -> &'a str {"));
        assert!(code.contains(
            "::cfgen_core::detail::adapt::<::cfgen_core::detail::StringViewAdaptor>(::cfgen_core::detail::lookup(self.obj, \"name\"))"
        ));
        assert!(code.contains("    pub fn port(&self) -> ::std::option::Option<u8> {"));
        assert!(code.contains(
            "::cfgen_core::detail::make_optional::<::cfgen_core::detail::UInt8Adaptor>(self.obj.get(\"port\"))"
        ));
    }

    #[test]
    fn test_methods_follow_document_order() {
        let code = generate_default(json!({
            "type": "object",
            "properties": {
                "zeta": {"type": "string"},
                "alpha": {"type": "string"}
            }
        }));
        let zeta = code.find("pub fn zeta").unwrap();
        let alpha = code.find("pub fn alpha").unwrap();
        assert!(zeta < alpha);
    }

    #[test]
    fn test_property_description_becomes_doc_comment() {
        let code = generate_default(json!({
            "type": "object",
            "properties": {
                "host": {"type": "string", "description": "Bind address.\nIPv4 or IPv6."}
            }
        }));
        assert!(code.contains("    /// Bind address.\n    /// IPv4 or IPv6.\n    pub fn host"));
    }

    #[test]
    fn test_root_doc_comment() {
        let code = generate_default(json!({
            "$id": "https://example.com/app.json",
            "title": "App",
            "description": "Application settings.",
            "type": "object"
        }));
        assert!(code.contains(
            "/// App\n///\n/// Application settings.\n///\n/// Schema id: `https://example.com/app.json`\n#[derive(Debug, Clone, Copy)]\npub struct Config<'a>"
        ));
    }

    #[test]
    fn test_keys_are_escaped_and_identifiers_sanitized() {
        let code = generate_default(json!({
            "type": "object",
            "properties": {
                "listen-port": {"type": "integer"},
                "type": {"type": "string"},
                "quo\"te": {"type": "boolean"}
            }
        }));
        assert!(code.contains("pub fn listen_port(&self)"));
        assert!(code.contains("self.obj.get(\"listen-port\")"));
        assert!(code.contains("pub fn r#type(&self)"));
        assert!(code.contains("pub fn quo_te(&self)"));
        assert!(code.contains("self.obj.get(\"quo\\\"te\")"));
    }

    #[test]
    fn test_custom_config_class() {
        let options = GeneratorOptions::default().with_config_class("ServerConfig");
        let code = generate(&json!({"type": "object"}), &options).unwrap();
        assert!(code.contains("pub struct ServerConfig<'a>"));
        assert!(code.contains("for ServerConfig<'a>"));
    }

    #[test]
    fn test_no_factory_by_default() {
        let code = generate_default(json!({"type": "object"}));
        assert!(!code.contains("make_config"));
    }

    #[test]
    fn test_colliding_method_identifiers_get_suffixes() {
        let code = generate_default(json!({
            "type": "object",
            "properties": {
                "a-b": {"type": "string"},
                "a_b": {"type": "integer"},
                "new_": {"type": "boolean"},
                "new": {"type": "boolean"}
            }
        }));
        assert_eq!(code.matches("pub fn a_b(&self)").count(), 1);
        assert!(code.contains("pub fn a_b_2(&self) -> ::std::option::Option<i64>"));
        assert!(code.contains("self.obj.get(\"a_b\")"));
        assert!(code.contains("pub fn new_(&self)"));
        assert!(code.contains("pub fn new__2(&self)"));
        assert_eq!(code.matches("pub fn new(").count(), 1);
    }

    #[test]
    fn test_fenced_description_is_not_a_doctest() {
        let lines = doc_lines(None, Some("Example:\n```\npanic!();\n```\nAfter."));
        assert_eq!(
            fence_code_blocks(&lines),
            vec!["Example:", "```text", "panic!();", "```", "After."]
        );
    }

    #[test]
    fn test_rust_tagged_fence_is_retagged() {
        let lines = doc_lines(None, Some("  ```rust\nlet x = 1;\n  ```"));
        assert_eq!(
            fence_code_blocks(&lines),
            vec!["  ```text", "let x = 1;", "  ```"]
        );
    }

    #[test]
    fn test_indented_description_is_fenced() {
        let lines = doc_lines(None, Some("Usage:\n\n    cfgen schema.json\n    cfgen -e s.json\nDone."));
        assert_eq!(
            fence_code_blocks(&lines),
            vec![
                "Usage:",
                "",
                "```text",
                "    cfgen schema.json",
                "    cfgen -e s.json",
                "```",
                "Done."
            ]
        );
    }

    #[test]
    fn test_unclosed_fence_is_closed() {
        let lines = doc_lines(None, Some("~~~\nloose"));
        assert_eq!(fence_code_blocks(&lines), vec!["~~~text", "loose", "~~~"]);
    }

    #[test]
    fn test_doc_lines() {
        assert!(doc_lines(None, None).is_empty());
        assert_eq!(doc_lines(Some("T"), None), vec!["T"]);
        assert_eq!(doc_lines(Some("T"), Some("D")), vec!["T", "", "D"]);
    }
}
