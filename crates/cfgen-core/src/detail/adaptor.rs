//! Value adaptors: how a tree node becomes a Rust value.
//!
//! An adaptor is a type-level conversion. It is never instantiated; the
//! generated code names it as a type argument (`adapt::<Int8Adaptor>(node)`)
//! and the node is converted on the spot. Conversions never fail: a node of
//! the wrong kind converts to the type's zero value, and out-of-range
//! integers are truncated with `as`. Schema validation is where wrong kinds
//! get rejected.

use serde_json::Value;

/// Conversion from a borrowed tree node to an accessor result.
pub trait Adaptor<'a> {
    /// The value produced for a node.
    type Output;

    /// Converts `node`.
    fn adapt(node: &'a Value) -> Self::Output;
}

/// Converts `node` with the adaptor `A`.
pub fn adapt<'a, A: Adaptor<'a>>(node: &'a Value) -> A::Output {
    A::adapt(node)
}

/// Looks up `key` in an object node.
///
/// Returns the shared null node when `node` is not an object or has no such
/// key, so required accessors over a tree that skipped validation read zero
/// values instead of panicking.
pub fn lookup<'a>(node: &'a Value, key: &str) -> &'a Value {
    &node[key]
}

/// Converts a node with `A` if it exists.
pub fn make_optional<'a, A: Adaptor<'a>>(node: Option<&'a Value>) -> Option<A::Output> {
    node.map(A::adapt)
}

/// Exposes a string node as a `&str` borrowed from the tree.
///
/// Non-string nodes read as the empty string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StringViewAdaptor;

impl<'a> Adaptor<'a> for StringViewAdaptor {
    type Output = &'a str;

    fn adapt(node: &'a Value) -> &'a str {
        node.as_str().unwrap_or("")
    }
}

/// Exposes a node as a `bool`. Numbers are true when non-zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoolAdaptor;

impl<'a> Adaptor<'a> for BoolAdaptor {
    type Output = bool;

    fn adapt(node: &'a Value) -> bool {
        match node {
            Value::Bool(b) => *b,
            Value::Number(_) => to_f64(node) != 0.0,
            _ => false,
        }
    }
}

fn to_i64(node: &Value) -> i64 {
    match node {
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_u64().map(|u| u as i64))
            .or_else(|| n.as_f64().map(|f| f as i64))
            .unwrap_or(0),
        Value::Bool(b) => i64::from(*b),
        _ => 0,
    }
}

fn to_u64(node: &Value) -> u64 {
    match node {
        Value::Number(n) => n
            .as_u64()
            .or_else(|| n.as_i64().map(|i| i as u64))
            .or_else(|| n.as_f64().map(|f| f as u64))
            .unwrap_or(0),
        Value::Bool(b) => u64::from(*b),
        _ => 0,
    }
}

fn to_f64(node: &Value) -> f64 {
    match node {
        Value::Number(n) => n.as_f64().unwrap_or(0.0),
        Value::Bool(b) => f64::from(u8::from(*b)),
        _ => 0.0,
    }
}

macro_rules! number_adaptor {
    ($(#[$doc:meta])* $name:ident => $ty:ty, $conv:ident) => {
        $(#[$doc])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq)]
        pub struct $name;

        impl<'a> Adaptor<'a> for $name {
            type Output = $ty;

            fn adapt(node: &'a Value) -> $ty {
                $conv(node) as $ty
            }
        }
    };
}

number_adaptor!(
    /// Exposes a node as an `i64`.
    Int64Adaptor => i64, to_i64
);
number_adaptor!(
    /// Exposes a node as an `i32`, truncating.
    Int32Adaptor => i32, to_i64
);
number_adaptor!(
    /// Exposes a node as an `i16`, truncating.
    Int16Adaptor => i16, to_i64
);
number_adaptor!(
    /// Exposes a node as an `i8`, truncating.
    Int8Adaptor => i8, to_i64
);
number_adaptor!(
    /// Exposes a node as a `u64`.
    UInt64Adaptor => u64, to_u64
);
number_adaptor!(
    /// Exposes a node as a `u32`, truncating.
    UInt32Adaptor => u32, to_u64
);
number_adaptor!(
    /// Exposes a node as a `u16`, truncating.
    UInt16Adaptor => u16, to_u64
);
number_adaptor!(
    /// Exposes a node as a `u8`, truncating.
    UInt8Adaptor => u8, to_u64
);
number_adaptor!(
    /// Exposes a node as an `f32`.
    FloatAdaptor => f32, to_f64
);
number_adaptor!(
    /// Exposes a node as an `f64`.
    DoubleAdaptor => f64, to_f64
);


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Integer adaptors agree with an `as` cast of the stored value.
        #[test]
        fn integer_adaptors_match_casts(n in any::<i64>()) {
            let node = Value::from(n);
            prop_assert_eq!(adapt::<Int64Adaptor>(&node), n);
            prop_assert_eq!(adapt::<Int32Adaptor>(&node), n as i32);
            prop_assert_eq!(adapt::<Int16Adaptor>(&node), n as i16);
            prop_assert_eq!(adapt::<Int8Adaptor>(&node), n as i8);
            prop_assert_eq!(adapt::<UInt64Adaptor>(&node), n as u64);
            prop_assert_eq!(adapt::<UInt8Adaptor>(&node), n as u8);
        }

        /// Optional lookup is `Some` exactly when the key exists.
        #[test]
        fn optional_lookup_tracks_presence(key in "[a-z]{1,8}", other in "[A-Z]{1,8}", n in any::<u8>()) {
            let mut tree = Value::Object(serde_json::Map::new());
            tree[key.as_str()] = Value::from(n);
            prop_assert_eq!(make_optional::<UInt8Adaptor>(tree.get(&key)), Some(n));
            prop_assert_eq!(make_optional::<UInt8Adaptor>(tree.get(&other)), None);
        }
    }
}
