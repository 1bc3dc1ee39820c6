use thiserror::Error;

/// Custom error type for the machina network core.
#[derive(Error, Debug, PartialEq, Eq, Clone)]
pub enum MachinaError {
    #[error("Invalid dimension: {field} must be at least 1, got {value}")]
    InvalidDimension { field: &'static str, value: usize },

    #[error("Length mismatch during {operation}: expected {expected}, got {actual}")]
    LengthMismatch {
        expected: usize,
        actual: usize,
        operation: &'static str,
    },

    #[error("Layer index {index} out of bounds for network of {len} layers")]
    LayerOutOfBounds { index: usize, len: usize },
}
