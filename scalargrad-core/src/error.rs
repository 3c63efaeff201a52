use thiserror::Error;

/// Custom error type for the ScalarGrad engine.
#[derive(Error, Debug, PartialEq, Clone)] // PartialEq for easier testing
pub enum ScalarGradError {
    #[error("power of non-positive base {base} with non-integer exponent {exponent} is undefined")]
    InvalidPower { base: f64, exponent: f64 },

    #[error("shape mismatch: expected {expected} inputs, got {actual} during operation {operation}")]
    ShapeMismatch {
        expected: usize,
        actual: usize,
        operation: String,
    },

    #[error("backward called on a root whose gradient is already {grad}; zero gradients between passes")]
    StaleGradient { grad: f64 },

    #[error("invalid network architecture: {reason}")]
    InvalidArchitecture { reason: String },

    #[error("cannot compute a loss over an empty batch")]
    EmptyBatch,

    #[error("unsupported reduction: {0}")]
    UnsupportedReduction(String),
}
