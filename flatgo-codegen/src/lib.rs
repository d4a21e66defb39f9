//! # FlatGo Codegen
//!
//! Go code generation from FlatBuffers schemas.
//!
//! This crate provides:
//! - Zero-copy field accessors and in-place scalar mutators
//! - Struct constructors and table builder functions
//! - Enum constant blocks and name lookup tables
//! - Namespace-aware package qualification and import paths
//! - Output to memory or to a directory tree

pub mod config;
pub mod error;
pub mod generator;
pub mod go;
pub mod output;

#[cfg(test)]
pub(crate) mod fixtures;

pub use config::GeneratorConfig;
pub use error::CodegenError;
pub use generator::Generator;
pub use output::{DirectorySink, MemorySink, OutputSink, OutputUnit};

use flatgo_schema::Schema;
use std::path::Path;

/// Generates Go files for a schema with the default configuration.
///
/// # Arguments
/// * `schema` - Validated schema
///
/// # Returns
/// One unit per generated enum, struct and table.
///
/// # Errors
/// Returns `CodegenError` if generation fails.
pub fn generate_from_schema(schema: &Schema) -> Result<Vec<OutputUnit>, CodegenError> {
    Generator::new(schema).generate()
}

/// Generates Go files from a schema serialized as JSON.
///
/// # Arguments
/// * `json` - Schema JSON document
///
/// # Errors
/// Returns `CodegenError` if decoding or generation fails.
pub fn generate_from_json(json: &str) -> Result<Vec<OutputUnit>, CodegenError> {
    let schema = Schema::from_json(json)?;
    generate_from_schema(&schema)
}

/// Generates Go files from a schema JSON file.
///
/// # Arguments
/// * `path` - Path to the schema JSON file
///
/// # Errors
/// Returns `CodegenError` if reading, decoding, or generation fails.
pub fn generate_from_file(path: &Path) -> Result<Vec<OutputUnit>, CodegenError> {
    let json = std::fs::read_to_string(path)?;
    generate_from_json(&json)
}
