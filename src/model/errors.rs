//! # Model Errors

use thiserror::Error;

/// Result type for model registry operations
pub type ModelResult<T> = Result<T, ModelError>;

/// Errors raised while loading or registering request models.
///
/// Validation itself never produces an error; a failed validation is an
/// ordinary `Verdict` with `valid: false`.
#[derive(Debug, Error)]
pub enum ModelError {
    #[error("Model not found: {0}")]
    NotFound(String),

    #[error("Model already registered: {0}")]
    AlreadyRegistered(String),

    #[error("Malformed model file '{path}': {reason}")]
    Malformed { path: String, reason: String },

    #[error("Invalid model '{name}': {reason}")]
    Invalid { name: String, reason: String },

    #[error("I/O error on '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}
