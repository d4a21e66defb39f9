//! Field type definitions.
//!
//! [`Type`] is the closed set of shapes a field can take. Generators match on
//! it exhaustively, so adding a variant is a compile error in every backend.

use crate::schema::{EnumId, StructId};
use serde::{Deserialize, Serialize};

/// FlatBuffers scalar kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ScalarKind {
    /// Union discriminant (unsigned 8-bit).
    UType,
    /// Boolean stored in one byte.
    Bool,
    /// Signed 8-bit integer.
    Int8,
    /// Unsigned 8-bit integer.
    UInt8,
    /// Signed 16-bit integer.
    Int16,
    /// Unsigned 16-bit integer.
    UInt16,
    /// Signed 32-bit integer.
    Int32,
    /// Unsigned 32-bit integer.
    UInt32,
    /// Signed 64-bit integer.
    Int64,
    /// Unsigned 64-bit integer.
    UInt64,
    /// 32-bit floating point.
    Float32,
    /// 64-bit floating point.
    Float64,
}

impl ScalarKind {
    /// All scalar kinds, in declaration order.
    pub const ALL: [ScalarKind; 12] = [
        Self::UType,
        Self::Bool,
        Self::Int8,
        Self::UInt8,
        Self::Int16,
        Self::UInt16,
        Self::Int32,
        Self::UInt32,
        Self::Int64,
        Self::UInt64,
        Self::Float32,
        Self::Float64,
    ];

    /// Returns the size of the scalar in bytes.
    #[must_use]
    pub const fn size(&self) -> usize {
        match self {
            Self::UType | Self::Bool | Self::Int8 | Self::UInt8 => 1,
            Self::Int16 | Self::UInt16 => 2,
            Self::Int32 | Self::UInt32 | Self::Float32 => 4,
            Self::Int64 | Self::UInt64 | Self::Float64 => 8,
        }
    }
}

/// Type of a field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Type {
    /// Inline scalar.
    Scalar(ScalarKind),
    /// Length-prefixed byte string.
    String,
    /// Vector of the element type.
    Vector(Box<Type>),
    /// Struct or table reference.
    Struct(StructId),
    /// Union value; the enum lists the variants.
    Union(EnumId),
}

impl Type {
    /// Creates a vector type.
    #[must_use]
    pub fn vector_of(element: Type) -> Self {
        Self::Vector(Box::new(element))
    }

    /// Returns the scalar kind, if scalar.
    #[must_use]
    pub const fn scalar(&self) -> Option<ScalarKind> {
        match self {
            Self::Scalar(kind) => Some(*kind),
            _ => None,
        }
    }

    /// Returns the element type of a vector.
    #[must_use]
    pub fn element(&self) -> Option<&Type> {
        match self {
            Self::Vector(element) => Some(element.as_ref()),
            _ => None,
        }
    }

    /// Returns a short description of the type tag, for diagnostics.
    #[must_use]
    pub fn tag(&self) -> String {
        match self {
            Self::Scalar(kind) => format!("{kind:?}"),
            Self::String => "string".to_string(),
            Self::Vector(element) => format!("vector<{}>", element.tag()),
            Self::Struct(id) => format!("struct #{}", id.0),
            Self::Union(id) => format!("union #{}", id.0),
        }
    }
}
