//! Error types for pixgen-draw

use thiserror::Error;

/// Errors that can occur during rasterization
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DrawError {
    /// Core library error (unknown algorithm tag, malformed parameter list)
    #[error("core error: {0}")]
    Core(#[from] pixgen_core::Error),

    /// Invalid rasterization parameters
    #[error("invalid parameters: {0}")]
    InvalidParameters(String),
}

/// Result type for rasterization operations
pub type DrawResult<T> = Result<T, DrawError>;

impl DrawError {
    /// Return `true` for malformed-input errors, whichever crate raised them
    pub fn is_invalid_parameters(&self) -> bool {
        matches!(
            self,
            Self::InvalidParameters(_) | Self::Core(pixgen_core::Error::InvalidParameters(_))
        )
    }
}
