//! Mapping from schema types to Go spellings and runtime method names.

use crate::error::CodegenError;
use crate::go::namespace::EmitContext;
use flatgo_schema::{ScalarKind, Schema, Type, make_camel};

/// Size in bytes of an offset stored inline (strings, vectors, tables, unions).
pub const UOFFSET_SIZE: usize = 4;

/// Returns the Go spelling of a scalar kind.
#[must_use]
pub const fn scalar_spelling(kind: ScalarKind) -> &'static str {
    match kind {
        ScalarKind::UType => "byte",
        ScalarKind::Bool => "bool",
        ScalarKind::Int8 => "int8",
        ScalarKind::UInt8 => "byte",
        ScalarKind::Int16 => "int16",
        ScalarKind::UInt16 => "uint16",
        ScalarKind::Int32 => "int32",
        ScalarKind::UInt32 => "uint32",
        ScalarKind::Int64 => "int64",
        ScalarKind::UInt64 => "uint64",
        ScalarKind::Float32 => "float32",
        ScalarKind::Float64 => "float64",
    }
}

/// Returns the Go type an accessor exposes for `ty`.
///
/// Vectors map to their element type because they are read one element at
/// a time. Struct references from other namespaces are qualified and
/// recorded as imports.
///
/// # Errors
/// Returns `CodegenError::Schema` for a dangling struct reference.
pub fn type_name(ctx: &mut EmitContext<'_>, ty: &Type) -> Result<String, CodegenError> {
    match ty {
        Type::Scalar(kind) => Ok(scalar_spelling(*kind).to_string()),
        Type::String => Ok("[]byte".to_string()),
        Type::Vector(element) => type_name(ctx, element),
        Type::Struct(id) => {
            let def = ctx.schema().struct_def(*id)?;
            Ok(ctx.qualified_name(&def.namespace, &def.name))
        }
        Type::Union(_) => Ok("*flatbuffers.Table".to_string()),
    }
}

/// Returns the receiver method reading a value of `ty`.
#[must_use]
pub fn getter_name(ty: &Type) -> String {
    match ty {
        Type::String => "rcv._tab.ByteVector".to_string(),
        Type::Union(_) => "rcv._tab.Union".to_string(),
        Type::Vector(element) => getter_name(element),
        Type::Scalar(kind) => format!("rcv._tab.Get{}", make_camel(scalar_spelling(*kind), true)),
        Type::Struct(_) => "rcv._tab.GetUOffsetT".to_string(),
    }
}

/// Returns the method suffix used by `Prepend*` builder calls.
#[must_use]
pub fn builder_method_name(ty: &Type) -> String {
    match ty {
        Type::Scalar(kind) => make_camel(scalar_spelling(*kind), true),
        Type::Struct(_) => "Struct".to_string(),
        Type::String | Type::Vector(_) | Type::Union(_) => "UOffsetT".to_string(),
    }
}

/// Returns the number of bytes `ty` occupies inline in its container.
///
/// # Errors
/// Returns `CodegenError::Schema` for a dangling struct reference.
pub fn inline_size(schema: &Schema, ty: &Type) -> Result<usize, CodegenError> {
    match ty {
        Type::Scalar(kind) => Ok(kind.size()),
        Type::Struct(id) => {
            let def = schema.struct_def(*id)?;
            Ok(if def.fixed { def.bytesize } else { UOFFSET_SIZE })
        }
        Type::String | Type::Vector(_) | Type::Union(_) => Ok(UOFFSET_SIZE),
    }
}

/// Returns the alignment `ty` requires inline in its container.
///
/// # Errors
/// Returns `CodegenError::Schema` for a dangling struct reference.
pub fn inline_alignment(schema: &Schema, ty: &Type) -> Result<usize, CodegenError> {
    match ty {
        Type::Scalar(kind) => Ok(kind.size()),
        Type::Struct(id) => {
            let def = schema.struct_def(*id)?;
            Ok(if def.fixed { def.minalign } else { UOFFSET_SIZE })
        }
        Type::String | Type::Vector(_) | Type::Union(_) => Ok(UOFFSET_SIZE),
    }
}

/// Returns the Go literal for a default value declared in the schema.
#[must_use]
pub fn default_literal(kind: ScalarKind, constant: &str) -> String {
    match kind {
        ScalarKind::Bool => match constant.trim() {
            "" | "0" | "false" => "false".to_string(),
            _ => "true".to_string(),
        },
        _ => constant.to_string(),
    }
}

/// Returns the Go zero value of a scalar kind.
#[must_use]
pub const fn zero_literal(kind: ScalarKind) -> &'static str {
    match kind {
        ScalarKind::Bool => "false",
        _ => "0",
    }
}
