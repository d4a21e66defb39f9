//! # FlatGo
//!
//! Go source generation from FlatBuffers schemas.
//!
//! FlatGo turns a validated FlatBuffers schema into Go files that read and
//! build FlatBuffers messages without copying.
//!
//! ## Features
//!
//! - **Zero-copy accessors** - Getters read straight from the message buffer
//! - **In-place mutation** - Scalar fields can be rewritten without rebuilding
//! - **Builders** - Struct constructors and table slot functions
//! - **Namespace aware** - One Go package per namespace with computed imports
//!
//! ## Quick Start
//!
//! ```ignore
//! use flatgo::prelude::*;
//!
//! let schema = Schema::from_json_file(Path::new("monster.json"))?;
//! let mut sink = DirectorySink::new("generated");
//! let written = Generator::new(&schema).write_to(&mut sink)?;
//! ```
//!
//! ## Crate Organization
//!
//! - [`schema`] - Schema AST and JSON decoding
//! - [`codegen`] - Go code generation and output sinks

pub mod prelude;

/// Schema AST and decoding.
pub mod schema {
    pub use flatgo_schema::*;
}

/// Go code generation.
pub mod codegen {
    pub use flatgo_codegen::*;
}

// Re-export commonly used items at the crate root
pub use flatgo_codegen::{
    CodegenError, DirectorySink, Generator, GeneratorConfig, MemorySink, OutputSink, OutputUnit,
    generate_from_file, generate_from_json, generate_from_schema,
};
pub use flatgo_schema::{Schema, SchemaError};
