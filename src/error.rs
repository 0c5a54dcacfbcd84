use thiserror::Error;

/// Errors reported by fitting, prediction, evaluation and encoding.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum RegressionError {
    #[error("method {0} not available for training linear regression")]
    InvalidMethod(String),

    #[error("model not fitted, call fit() first")]
    NotFitted,

    #[error("number of samples in X ({x_rows}) and y ({y_len}) must match")]
    DimensionMismatch { x_rows: usize, y_len: usize },

    #[error("y_true and y_pred must have the same length ({expected} != {got})")]
    LengthMismatch { expected: usize, got: usize },

    #[error("number of features in X ({got}) doesn't match training data ({expected})")]
    FeatureMismatch { expected: usize, got: usize },

    #[error("feature input must be 1D or 2D, got {ndim} dimensions")]
    InvalidShape { ndim: usize },

    #[error("X must have at least one sample")]
    EmptyInput,

    #[error("matrix is singular and cannot be inverted")]
    SingularMatrix,

    #[error("column index {index} out of bounds for array with {ncols} columns")]
    ColumnOutOfBounds { index: usize, ncols: usize },

    #[error("value at row {row}, column {col} is not numeric")]
    NonNumeric { row: usize, col: usize },
}

pub type Result<T> = std::result::Result<T, RegressionError>;
