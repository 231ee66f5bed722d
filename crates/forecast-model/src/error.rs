//! Error types for model loading and inference.

use std::path::PathBuf;

use thiserror::Error;

/// Errors from artifact loading or classifier invocation.
#[derive(Debug, Error)]
pub enum ModelError {
    /// Artifact file could not be read.
    #[error("Failed to read artifact {path}: {source}")]
    ArtifactRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Artifact file is not valid JSON for the expected schema.
    #[error("Failed to parse artifact {path}: {source}")]
    ArtifactParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Artifact parsed but fails structural validation.
    #[error("Corrupt model artifact: {0}")]
    CorruptArtifact(String),

    /// Classifier invoked with input it cannot evaluate.
    #[error("Invalid classifier input: {0}")]
    InvalidInput(String),

    /// Class code outside the decoder vocabulary.
    #[error("Unknown class code: {0}")]
    UnknownClass(usize),
}
