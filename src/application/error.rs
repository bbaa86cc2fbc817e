//! Application-level errors

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading items or settings.
///
/// The tree store itself never fails; these only come from the edges.
#[derive(Error, Debug)]
pub enum ApplicationError {
    #[error("invalid items file {path}: {message}")]
    ItemsFile { path: PathBuf, message: String },

    #[error("config error: {message}")]
    Config { message: String },

    #[error("operation failed: {context}")]
    OperationFailed {
        context: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

/// Result type for application layer operations.
pub type ApplicationResult<T> = Result<T, ApplicationError>;
