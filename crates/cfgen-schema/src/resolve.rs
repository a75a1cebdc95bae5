//! # Type Resolution
//!
//! Decides the Rust type an accessor method returns and the runtime adaptor
//! that converts a tree node into it. Object and array properties need new
//! types; those are emitted into the enclosing class's nested-types buffer
//! as a side effect of resolving them, so they are declared before the
//! class that refers to them.

use std::fmt;

use crate::codegen::{doc_lines, emit_class};
use crate::model::{NumberSchema, SchemaNode, SchemaType};
use crate::naming::{item_member_name, nested_type_name, UniqueNames};
use crate::numeric::select_numeric_repr;
use crate::options::GeneratorOptions;

/// The resolved type of one property.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedType {
    /// Type the accessor method returns, written with the `'a` lifetime.
    pub return_type: String,
    /// Fully qualified adaptor type converting a node to `return_type`.
    pub adaptor: String,
}

impl ResolvedType {
    fn scalar(return_type: &str, adaptor: String) -> Self {
        Self {
            return_type: return_type.to_string(),
            adaptor,
        }
    }

    /// A type that is its own adaptor (accessors and ranges).
    fn self_adapting(return_type: String) -> Self {
        Self {
            adaptor: return_type.clone(),
            return_type,
        }
    }
}

/// Resolves the properties of one object schema.
///
/// `scope` is the name of the class being emitted; nested types are named
/// after it and claimed in `names`, which spans the whole generated file.
pub struct TypeResolver<'o> {
    options: &'o GeneratorOptions,
    names: &'o mut UniqueNames,
    types: &'o mut String,
    scope: &'o str,
}

impl<'o> TypeResolver<'o> {
    /// Creates a resolver writing nested types into `types`.
    pub fn new(
        options: &'o GeneratorOptions,
        names: &'o mut UniqueNames,
        types: &'o mut String,
        scope: &'o str,
    ) -> Self {
        Self {
            options,
            names,
            types,
            scope,
        }
    }

    /// Resolves property `member` with schema `node`.
    ///
    /// Returns `Ok(None)` when the property cannot be expressed; no method
    /// should be emitted for it.
    pub fn resolve(
        &mut self,
        member: &str,
        node: &SchemaNode,
    ) -> Result<Option<ResolvedType>, fmt::Error> {
        let resolved = match &node.ty {
            SchemaType::String => Some(ResolvedType::scalar(
                "&'a str",
                self.options.detail("StringViewAdaptor"),
            )),
            SchemaType::Boolean => Some(ResolvedType::scalar(
                "bool",
                self.options.detail("BoolAdaptor"),
            )),
            SchemaType::Integer(number) => Some(self.numeric(number, true)),
            SchemaType::Number(number) => Some(self.numeric(number, false)),
            SchemaType::Object(object) => {
                let name = self.names.claim(&nested_type_name(self.scope, member), "");
                let docs = doc_lines(node.title.as_deref(), node.description.as_deref());
                emit_class(object, &name, &docs, self.options, self.names, self.types)?;
                Some(ResolvedType::self_adapting(format!("{name}<'a>")))
            }
            SchemaType::Array(array) => match &array.items {
                Some(items) => self.resolve(&item_member_name(member), items)?.map(|item| {
                    ResolvedType::self_adapting(format!(
                        "{}<'a, {}>",
                        self.options.detail("Range"),
                        item.adaptor
                    ))
                }),
                None => {
                    tracing::debug!(member, "skipping array without a single items schema");
                    None
                }
            },
        };
        Ok(resolved)
    }

    fn numeric(&self, number: &NumberSchema, is_integer: bool) -> ResolvedType {
        let repr = select_numeric_repr(number, is_integer);
        ResolvedType::scalar(repr.rust_type(), self.options.detail(repr.adaptor()))
    }
}
