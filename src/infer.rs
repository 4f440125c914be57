//! Type inference over a single JSON sample value.
//!
//! One value in, one signature out. No lattice, no merging across
//! samples: a field's type is whatever its sample value looks like,
//! and arrays are judged by their first element alone.

use std::fmt;

use serde_json::Value;

/// The inferred type expression for a field.
///
/// Primitives, `any`, or array-of-T (recursive, so arrays of arrays are
/// representable). Nested objects do not get their own shape: they
/// collapse to [`TypeSignature::Any`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeSignature {
    String,
    Number,
    Boolean,
    Any,
    Array(Box<TypeSignature>),
}

impl TypeSignature {
    /// Infer the signature for one JSON value.
    ///
    /// Arrays recurse on their first element; an empty array infers
    /// `any[]`. Both objects and `null` map to `any` — null classifies
    /// as object-like here, deliberately, so it never becomes a
    /// nullable-of-inferred-type.
    pub fn infer(value: &Value) -> Self {
        match value {
            Value::Array(items) => {
                let elem = items.first().map(Self::infer).unwrap_or(Self::Any);
                Self::Array(Box::new(elem))
            }
            Value::String(_) => Self::String,
            Value::Number(_) => Self::Number,
            Value::Bool(_) => Self::Boolean,
            Value::Null | Value::Object(_) => Self::Any,
        }
    }

    /// The literal expression substituted when a value of this type must
    /// be synthesized. Every array type defaults to `[]` regardless of
    /// its element type; `any` (and therefore nested objects and null)
    /// defaults to `{}`.
    pub fn default_literal(&self) -> &'static str {
        match self {
            Self::Number => "0",
            Self::String => "''",
            Self::Boolean => "false",
            Self::Array(_) => "[]",
            Self::Any => "{}",
        }
    }
}

impl fmt::Display for TypeSignature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::String => f.write_str("string"),
            Self::Number => f.write_str("number"),
            Self::Boolean => f.write_str("boolean"),
            Self::Any => f.write_str("any"),
            Self::Array(elem) => write!(f, "{elem}[]"),
        }
    }
}
