use thiserror::Error;

/// Custom error type for the milligrad workspace.
///
/// Numeric edge cases (NaN, infinities) are never reported here; they propagate
/// through node values and gradients as plain floating-point results.
#[derive(Error, Debug, PartialEq, Clone)]
pub enum MilligradError {
    #[error("Dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    #[error("Length mismatch during {operation}: {left} vs {right}")]
    LengthMismatch {
        operation: String,
        left: usize,
        right: usize,
    },

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Node handle {index} does not refer to a live node of this graph")]
    StaleNode { index: usize },

    #[error("Checkpoint at length {len} was invalidated by an earlier rewind")]
    StaleCheckpoint { len: usize },

    #[error("Initialization error: {0}")]
    Initialization(String),
}
