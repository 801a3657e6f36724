use thiserror::Error;

/// Errors that can occur during fitting, diagnostics, and reporting
#[derive(Error, Debug)]
pub enum LmError {
    // Input validation errors
    #[error("Insufficient data: need at least {needed} usable observations, found {actual}")]
    InsufficientData { needed: usize, actual: usize },

    #[error("Insufficient data: {0}")]
    InsufficientDataMsg(String),

    #[error("Degenerate response: all {n} y values are identical, total sum of squares is zero")]
    DegenerateResponse { n: usize },

    #[error("All rows filtered due to NaN/infinite values")]
    NoValidData,

    #[error("Dimension mismatch: expected {expected} observations, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Result type for model operations
pub type LmResult<T> = Result<T, LmError>;
