//! # Numeric Width Selection
//!
//! Picks the Rust representation of a `number` or `integer` property from its
//! declared bounds.
//!
//! A property is integral when its kind is `integer`, or when it is a
//! `number` whose `multipleOf` is a whole non-negative value. Integral
//! properties are tried against a fixed ladder of integer types and the
//! **last** one whose range holds the declared bounds is chosen, so
//! `[0, 200]` becomes `u8` rather than `i16`. Everything else is `f64`.

use crate::model::NumberSchema;

/// Rust representation chosen for a numeric property.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumericRepr {
    I64,
    U64,
    I32,
    U32,
    I16,
    U16,
    I8,
    U8,
    /// Not integral: `f64`.
    F64,
}

/// Integer candidates in trial order with their inclusive ranges.
const LADDER: [(NumericRepr, i128, i128); 8] = [
    (NumericRepr::I64, i64::MIN as i128, i64::MAX as i128),
    (NumericRepr::U64, 0, u64::MAX as i128),
    (NumericRepr::I32, i32::MIN as i128, i32::MAX as i128),
    (NumericRepr::U32, 0, u32::MAX as i128),
    (NumericRepr::I16, i16::MIN as i128, i16::MAX as i128),
    (NumericRepr::U16, 0, u16::MAX as i128),
    (NumericRepr::I8, i8::MIN as i128, i8::MAX as i128),
    (NumericRepr::U8, 0, u8::MAX as i128),
];

impl NumericRepr {
    /// The Rust type the accessor method returns.
    pub fn rust_type(self) -> &'static str {
        match self {
            Self::I64 => "i64",
            Self::U64 => "u64",
            Self::I32 => "i32",
            Self::U32 => "u32",
            Self::I16 => "i16",
            Self::U16 => "u16",
            Self::I8 => "i8",
            Self::U8 => "u8",
            Self::F64 => "f64",
        }
    }

    /// The runtime adaptor converting a tree node to this type.
    pub fn adaptor(self) -> &'static str {
        match self {
            Self::I64 => "Int64Adaptor",
            Self::U64 => "UInt64Adaptor",
            Self::I32 => "Int32Adaptor",
            Self::U32 => "UInt32Adaptor",
            Self::I16 => "Int16Adaptor",
            Self::U16 => "UInt16Adaptor",
            Self::I8 => "Int8Adaptor",
            Self::U8 => "UInt8Adaptor",
            Self::F64 => "DoubleAdaptor",
        }
    }
}

/// Returns true if `multiple_of` forces whole-number values.
///
/// The step must survive a round trip through `u64`: zero counts as
/// integral, negative, fractional and non-finite steps do not.
fn is_whole_step(multiple_of: f64) -> bool {
    (multiple_of as u64) as f64 == multiple_of
}

/// Effective `[lower, upper]` bounds of an integral property.
///
/// Both bounds start at the full `i64` range and are only ever narrowed.
/// Exclusive bounds narrow exactly like inclusive ones.
pub fn effective_bounds(schema: &NumberSchema) -> (i64, i64) {
    let mut lower = i64::MIN;
    let mut upper = i64::MAX;
    for bound in [schema.minimum, schema.exclusive_minimum].into_iter().flatten() {
        // `as` saturates out-of-range floats.
        lower = lower.max(bound as i64);
    }
    for bound in [schema.maximum, schema.exclusive_maximum].into_iter().flatten() {
        upper = upper.min(bound as i64);
    }
    (lower, upper)
}

/// Selects the representation for a numeric property.
///
/// `is_integer` is true for `type: integer`.
pub fn select_numeric_repr(schema: &NumberSchema, is_integer: bool) -> NumericRepr {
    let integral = is_integer || schema.multiple_of.is_some_and(is_whole_step);
    if !integral {
        return NumericRepr::F64;
    }

    let (lower, upper) = effective_bounds(schema);
    let (lower, upper) = (i128::from(lower), i128::from(upper));

    let mut chosen = NumericRepr::I64;
    for (repr, min, max) in LADDER {
        if min <= lower && upper <= max {
            chosen = repr;
        }
    }
    chosen
}
