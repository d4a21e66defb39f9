//! # flatgo Schema
//!
//! Read-only AST of a validated FlatBuffers schema.
//!
//! This crate provides:
//! - Namespaces with per-target base-path overrides
//! - Enum, struct and table definitions with precomputed layout
//! - The closed [`Type`] sum type used by the generator
//! - JSON loading for ASTs dumped by an external schema front end

pub mod error;
pub mod naming;
pub mod schema;
pub mod types;

pub use error::SchemaError;
pub use naming::make_camel;
pub use schema::{
    EnumDef, EnumId, EnumVal, FieldDef, Namespace, Schema, StructDef, StructId,
    field_index_to_offset,
};
pub use types::{ScalarKind, Type};
