//! # Schema Model
//!
//! A typed view of the schema document. Each node is classified once, from
//! its `type` keyword, through the [`SCHEMA_KINDS`] table; the kind never
//! changes afterwards. Reading is pure: absent optional keywords become
//! `None`, and a node whose kind cannot be classified is not built at all.

use indexmap::{IndexMap, IndexSet};
use serde_json::Value;

/// The kinds of schema node the compiler understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SchemaKind {
    /// A JSON object with named properties.
    Object,
    /// A homogeneous JSON array.
    Array,
    /// A JSON string.
    String,
    /// An integer: a number that increments in units of 1.
    Integer,
    /// A JSON boolean.
    Boolean,
    /// A JSON number.
    Number,
}

/// Mapping from `type` keyword values to kinds, in lookup order.
pub const SCHEMA_KINDS: [(&str, SchemaKind); 6] = [
    ("object", SchemaKind::Object),
    ("array", SchemaKind::Array),
    ("string", SchemaKind::String),
    ("integer", SchemaKind::Integer),
    ("boolean", SchemaKind::Boolean),
    ("number", SchemaKind::Number),
];

impl SchemaKind {
    /// Looks up the kind for a `type` keyword value.
    pub fn from_name(name: &str) -> Option<Self> {
        SCHEMA_KINDS
            .iter()
            .find(|(key, _)| *key == name)
            .map(|(_, kind)| *kind)
    }
}

/// Range and step constraints of a `number` or `integer` schema.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct NumberSchema {
    /// Valid values are `>=` this.
    pub minimum: Option<f64>,
    /// Valid values are `>` this.
    pub exclusive_minimum: Option<f64>,
    /// Valid values are `<=` this.
    pub maximum: Option<f64>,
    /// Valid values are `<` this.
    pub exclusive_maximum: Option<f64>,
    /// Valid values are multiples of this.
    pub multiple_of: Option<f64>,
}

impl NumberSchema {
    /// Reads the numeric keywords of `node`. Non-numeric values (such as the
    /// draft-04 boolean `exclusiveMinimum`) are ignored.
    pub fn from_value(node: &Value) -> Self {
        let number = |key: &str| node.get(key).and_then(Value::as_f64);
        Self {
            minimum: number("minimum"),
            exclusive_minimum: number("exclusiveMinimum"),
            maximum: number("maximum"),
            exclusive_maximum: number("exclusiveMaximum"),
            multiple_of: number("multipleOf"),
        }
    }
}

/// An `array` schema.
///
/// Only a single `items` schema describing every element is supported.
/// `items` given as a list (a tuple) or of an unknown kind reads as `None`.
#[derive(Debug, Clone, PartialEq)]
pub struct ArraySchema {
    /// Schema of every element.
    pub items: Option<Box<SchemaNode>>,
}

impl ArraySchema {
    fn from_value(node: &Value) -> Self {
        let items = node
            .get("items")
            .filter(|items| items.is_object())
            .and_then(SchemaNode::from_value)
            .map(Box::new);
        Self { items }
    }
}

/// An `object` schema.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ObjectSchema {
    /// Declared properties, in document order.
    pub properties: IndexMap<String, SchemaNode>,
    /// Names listed in `required`. Not checked against `properties`.
    pub required: IndexSet<String>,
}

impl ObjectSchema {
    /// Reads `properties` and `required` from `node`.
    ///
    /// Properties whose schema cannot be classified are left out.
    pub fn from_value(node: &Value) -> Self {
        let mut properties = IndexMap::new();
        if let Some(props) = node.get("properties").and_then(Value::as_object) {
            for (name, prop) in props {
                match SchemaNode::from_value(prop) {
                    Some(schema) => {
                        properties.insert(name.clone(), schema);
                    }
                    None => {
                        tracing::debug!(property = %name, "skipping property with unsupported schema");
                    }
                }
            }
        }

        let required = node
            .get("required")
            .and_then(Value::as_array)
            .map(|names| {
                names
                    .iter()
                    .filter_map(Value::as_str)
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default();

        Self {
            properties,
            required,
        }
    }

    /// Returns true if `name` is listed in `required`.
    pub fn is_required(&self, name: &str) -> bool {
        self.required.contains(name)
    }
}

/// Kind-specific part of a schema node.
#[derive(Debug, Clone, PartialEq)]
pub enum SchemaType {
    /// `type: object`.
    Object(ObjectSchema),
    /// `type: array`.
    Array(ArraySchema),
    /// `type: string`.
    String,
    /// `type: integer`.
    Integer(NumberSchema),
    /// `type: boolean`.
    Boolean,
    /// `type: number`.
    Number(NumberSchema),
}

/// One node of the schema tree.
#[derive(Debug, Clone, PartialEq)]
pub struct SchemaNode {
    /// The `title` keyword.
    pub title: Option<String>,
    /// The `description` keyword.
    pub description: Option<String>,
    /// The kind and its keywords.
    pub ty: SchemaType,
}

impl SchemaNode {
    /// Classifies `node` by its `type` keyword and reads it.
    ///
    /// Returns `None` when `type` is missing, not a string, or names a kind
    /// the compiler does not support (`null`, or a list of types).
    pub fn from_value(node: &Value) -> Option<Self> {
        let kind = node
            .get("type")
            .and_then(Value::as_str)
            .and_then(SchemaKind::from_name)?;

        let ty = match kind {
            SchemaKind::Object => SchemaType::Object(ObjectSchema::from_value(node)),
            SchemaKind::Array => SchemaType::Array(ArraySchema::from_value(node)),
            SchemaKind::String => SchemaType::String,
            SchemaKind::Integer => SchemaType::Integer(NumberSchema::from_value(node)),
            SchemaKind::Boolean => SchemaType::Boolean,
            SchemaKind::Number => SchemaType::Number(NumberSchema::from_value(node)),
        };

        Some(Self {
            title: string_keyword(node, "title"),
            description: string_keyword(node, "description"),
            ty,
        })
    }

    /// The kind of this node.
    pub fn kind(&self) -> SchemaKind {
        match self.ty {
            SchemaType::Object(_) => SchemaKind::Object,
            SchemaType::Array(_) => SchemaKind::Array,
            SchemaType::String => SchemaKind::String,
            SchemaType::Integer(_) => SchemaKind::Integer,
            SchemaType::Boolean => SchemaKind::Boolean,
            SchemaType::Number(_) => SchemaKind::Number,
        }
    }
}

/// The root of a schema document: an object schema plus its identity.
#[derive(Debug, Clone, PartialEq)]
pub struct SchemaRoot {
    /// The `$schema` keyword, naming the JSON Schema dialect.
    pub schema: Option<String>,
    /// The `$id` keyword.
    pub id: Option<String>,
    /// The `title` keyword.
    pub title: Option<String>,
    /// The `description` keyword.
    pub description: Option<String>,
    /// The root object.
    pub object: ObjectSchema,
}

impl SchemaRoot {
    /// Reads the root of a schema document.
    ///
    /// The root is read as an object whatever its `type` keyword says.
    pub fn from_value(node: &Value) -> Self {
        Self {
            schema: string_keyword(node, "$schema"),
            id: string_keyword(node, "$id"),
            title: string_keyword(node, "title"),
            description: string_keyword(node, "description"),
            object: ObjectSchema::from_value(node),
        }
    }
}

fn string_keyword(node: &Value, key: &str) -> Option<String> {
    node.get(key).and_then(Value::as_str).map(str::to_string)
}
