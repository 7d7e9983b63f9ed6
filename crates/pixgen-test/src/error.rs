//! Error types for the test framework

use thiserror::Error;

/// Errors reported by a finished regression test
#[derive(Debug, Error)]
pub enum TestError {
    /// One or more comparisons failed
    #[error("{test_name}_reg: {count} comparison(s) failed; first: {first}")]
    Failures {
        test_name: String,
        count: usize,
        first: String,
    },

    /// Core library error raised while building test input
    #[error("core error: {0}")]
    Core(#[from] pixgen_core::Error),
}

/// Result type for test operations
pub type TestResult<T> = Result<T, TestError>;
