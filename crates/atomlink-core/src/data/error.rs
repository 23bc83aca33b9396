use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DataError {
    #[error("Invalid labels: {0}")]
    InvalidLabels(String),

    #[error("Block values have {actual} dimensions, labels require {expected}")]
    MismatchedDimensions { expected: usize, actual: usize },

    #[error("Axis '{axis}' has extent {actual}, labels require {expected}")]
    MismatchedShape {
        axis: String,
        expected: usize,
        actual: usize,
    },

    #[error("Gradient '{parameter}' is already defined for this block")]
    DuplicateGradient { parameter: String },

    #[error("Mismatched input: {0}")]
    MismatchedInput(String),
}
