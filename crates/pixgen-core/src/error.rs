//! Error types for pixgen-core
//!
//! Provides the error type shared by the data model: parsing algorithm
//! tags, validating parameter lists, and indexing point arrays.
//!
//! Geometry that is well defined for every input (degenerate lines,
//! zero-radius circles) never produces an error; only malformed
//! descriptions do.

use thiserror::Error;

/// pixgen core error type
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Algorithm tag not recognized for the given primitive kind
    #[error("invalid algorithm '{tag}' for {kind}")]
    InvalidAlgorithm { kind: &'static str, tag: String },

    /// Primitive kind tag not recognized
    #[error("invalid primitive kind: '{0}'")]
    InvalidKind(String),

    /// Malformed parameter list (wrong arity, non-positive axes, ...)
    #[error("invalid parameters: {0}")]
    InvalidParameters(String),

    /// Index out of bounds
    #[error("index out of bounds: {index} >= {len}")]
    IndexOutOfBounds { index: usize, len: usize },
}

/// Result type alias for pixgen core operations
pub type Result<T> = std::result::Result<T, Error>;
