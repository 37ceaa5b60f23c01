use thiserror::Error;

pub type Result<T> = std::result::Result<T, MatrixError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MatrixError {
    #[error(
        "Matrices must have the same dimensions: left is {}x{}, right is {}x{}",
        .left.0, .left.1, .right.0, .right.1
    )]
    DimensionMismatch {
        left: (usize, usize),
        right: (usize, usize),
    },

    #[error("Index ({row}, {col}) out of range for {rows}x{cols} matrix")]
    IndexOutOfRange {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },

    #[error("Dimensions {rows}x{cols} overflow the addressable cell count")]
    DimensionOverflow { rows: usize, cols: usize },

    #[error("Expected {expected} values, got {actual}")]
    ValueCountMismatch { expected: usize, actual: usize },

    #[error("Grid row {row} has {actual} values, expected {expected}")]
    RaggedGrid {
        row: usize,
        expected: usize,
        actual: usize,
    },
}
