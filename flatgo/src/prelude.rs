//! Prelude module for convenient imports.
//!
//! ```ignore
//! use flatgo::prelude::*;
//! ```

// Schema types
pub use flatgo_schema::{
    EnumDef, EnumId, EnumVal, FieldDef, Namespace, ScalarKind, Schema, SchemaError, StructDef,
    StructId, Type,
};

// Generation
pub use flatgo_codegen::{
    CodegenError, DirectorySink, Generator, GeneratorConfig, MemorySink, OutputSink, OutputUnit,
};
