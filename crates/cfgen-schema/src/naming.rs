//! # Identifier Naming
//!
//! Schema property names are arbitrary strings; generated code needs Rust
//! identifiers. The original property name is always kept as the lookup key,
//! only the identifier is rewritten.

use heck::ToUpperCamelCase;
use indexmap::IndexSet;

/// Suffix of every nested accessor type.
pub const CLASS_SUFFIX: &str = "Class";

/// Suffix appended to an array property's name to name its element.
pub const ITEM_SUFFIX: &str = "Item";

/// Strict and reserved keywords that can be written as raw identifiers.
const RAW_KEYWORDS: &[&str] = &[
    "abstract", "as", "async", "await", "become", "box", "break", "const", "continue", "do",
    "dyn", "else", "enum", "extern", "false", "final", "fn", "for", "gen", "if", "impl", "in",
    "let", "loop", "macro", "match", "mod", "move", "mut", "override", "priv", "pub", "ref",
    "return", "static", "struct", "trait", "true", "try", "type", "typeof", "unsafe", "unsized",
    "use", "virtual", "where", "while", "yield",
];

/// Names that cannot be raw identifiers, or that would shadow the
/// generated `new` constructor and `node` getter.
const SUFFIXED_NAMES: &[&str] = &["self", "Self", "super", "crate", "new", "node"];

/// Replaces every character outside `[A-Za-z0-9_]` with `_` and prefixes a
/// leading digit with `_`. An empty name becomes `_`.
pub fn sanitize_identifier(name: &str) -> String {
    let mut ident: String = name
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '_' { c } else { '_' })
        .collect();
    if ident.is_empty() || ident.starts_with(|c: char| c.is_ascii_digit()) {
        ident.insert(0, '_');
    }
    ident
}

/// The accessor method name for property `name`.
pub fn method_ident(name: &str) -> String {
    let ident = sanitize_identifier(name);
    if ident == "_" {
        "__".to_string()
    } else if SUFFIXED_NAMES.contains(&ident.as_str()) {
        format!("{ident}_")
    } else if RAW_KEYWORDS.contains(&ident.as_str()) {
        format!("r#{ident}")
    } else {
        ident
    }
}

/// The type name of the nested accessor for `member` inside `parent`.
///
/// `parent` is already a type name; `member` is a property name (or an
/// array property name with [`ITEM_SUFFIX`] appended).
pub fn nested_type_name(parent: &str, member: &str) -> String {
    let camel = sanitize_identifier(member).to_upper_camel_case();
    format!("{parent}{camel}{CLASS_SUFFIX}")
}

/// The member name used to resolve the elements of array property `name`.
pub fn item_member_name(name: &str) -> String {
    format!("{name}{ITEM_SUFFIX}")
}

/// Names already declared in one scope.
///
/// Sanitizing and case conversion are lossy (`fooBar` and `foo_bar` both
/// become `FooBar`), so every generated name is claimed here first. A name
/// that is already taken gets the first free numeric suffix, starting at 2.
#[derive(Debug, Clone, Default)]
pub struct UniqueNames {
    taken: IndexSet<String>,
}

impl UniqueNames {
    /// An empty scope.
    pub fn new() -> Self {
        Self::default()
    }

    /// Claims `base`, or `{base}{separator}{n}` for the smallest free `n`.
    pub fn claim(&mut self, base: &str, separator: &str) -> String {
        let mut name = base.to_string();
        let mut n = 2;
        while self.taken.contains(&name) {
            name = format!("{base}{separator}{n}");
            n += 1;
        }
        self.taken.insert(name.clone());
        name
    }
}

/// Escapes `text` for a Rust string literal: `\` first, then `"`, then
/// newline.
pub fn escape_string_literal(text: &str) -> String {
    text.replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\n', "\\n")
}
