//! # Error Types
//!
//! Failures the compiler can report. Unsupported schema constructs are not
//! errors: they are skipped and produce no accessor.

use thiserror::Error;

/// Error raised while loading a schema or generating code from it.
#[derive(Error, Debug)]
pub enum CodegenError {
    /// The schema document could not be read or parsed.
    #[error("schema load error for '{path}': {reason}")]
    SchemaLoad {
        /// Path to the schema document.
        path: String,
        /// Reason the document could not be loaded.
        reason: String,
    },

    /// The schema could not be serialized for embedding.
    #[error("schema serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Writing to the output buffer failed.
    #[error("formatting error: {0}")]
    Format(#[from] std::fmt::Error),

    /// IO error.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
