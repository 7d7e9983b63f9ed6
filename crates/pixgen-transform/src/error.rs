//! Error types for pixgen-transform

use thiserror::Error;

/// Errors that can occur while transforming or clipping
#[derive(Debug, Error, Clone, PartialEq)]
pub enum TransformError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] pixgen_core::Error),

    /// Invalid transformation parameters
    #[error("invalid parameters: {0}")]
    InvalidParameters(String),
}

/// Result type for transform operations
pub type TransformResult<T> = Result<T, TransformError>;
