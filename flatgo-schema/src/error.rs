//! Error types for schema loading and lookups.

use thiserror::Error;

/// Error type for schema operations.
#[derive(Debug, Error)]
pub enum SchemaError {
    /// JSON decoding error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A type references a struct index that does not exist.
    #[error("struct reference #{id} does not exist")]
    UnknownStruct {
        /// Referenced index.
        id: usize,
    },

    /// A type references an enum index that does not exist.
    #[error("enum reference #{id} does not exist")]
    UnknownEnum {
        /// Referenced index.
        id: usize,
    },
}
