//! Error types for code generation.

use std::path::PathBuf;
use thiserror::Error;

/// Error type for code generation operations.
#[derive(Debug, Error)]
pub enum CodegenError {
    /// Schema loading or lookup error.
    #[error("schema error: {0}")]
    Schema(#[from] flatgo_schema::SchemaError),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Two namespaces declare different base output paths.
    #[error("conflicting base paths for target '{target}': '{first}' and '{second}'")]
    ConflictingBaseOverride {
        /// Target identifier the overrides are keyed by.
        target: String,
        /// First override seen.
        first: String,
        /// Conflicting override.
        second: String,
    },

    /// A type shape the generator cannot express.
    #[error("unsupported type '{tag}' in field '{field}'")]
    UnsupportedType {
        /// Offending type tag.
        tag: String,
        /// Qualified field name.
        field: String,
    },

    /// Writing a generated file failed.
    #[error("failed to write '{}': {source}", path.display())]
    Write {
        /// Destination path.
        path: PathBuf,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
    },
}

impl CodegenError {
    /// Creates an unsupported type error.
    pub fn unsupported(tag: impl Into<String>, field: impl Into<String>) -> Self {
        Self::UnsupportedType {
            tag: tag.into(),
            field: field.into(),
        }
    }
}
