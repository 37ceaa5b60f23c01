use num_traits::Zero;
use std::fmt::{Debug, Display};

use crate::dynamic_matrix::DynamicMatrix;
use crate::error::{MatrixError, Result};
use crate::ops;

/// Numeric types a matrix can hold.
/// `Zero` provides both the value new cells start at and the `+` used by addition.
pub trait Element: Copy + Debug + Display + PartialEq + Zero {}

impl<T> Element for T where T: Copy + Debug + Display + PartialEq + Zero {}

pub(crate) mod private {
    /// Restricts `Matrix` to the variants defined in this crate.
    pub trait Sealed {}
}

/// Generic trait representing a matrix.
/// Implemented by [`FixedMatrix`](crate::FixedMatrix) (shape in the type, inline storage) and
/// [`DynamicMatrix`] (shape chosen at construction, owned heap buffer).
/// The trait is object safe, so `&dyn Matrix<Value = T>` can mix both variants.
///
/// The set of variants is closed; other crates cannot implement the trait:
///
/// ```compile_fail
/// use matrix_core::{Matrix, Result};
///
/// #[derive(Debug)]
/// struct Ragged;
///
/// impl Matrix for Ragged {
///     type Value = i32;
///     fn dims(&self) -> (usize, usize) { (1, 3) }
///     fn row(&self, _row: usize) -> Option<&[i32]> { Some(&[]) }
///     fn load_values(&mut self, _values: &[i32]) -> Result<()> { Ok(()) }
/// }
/// ```
pub trait Matrix: Debug + private::Sealed {
    /// The underlying numeric type of the matrix elements (e.g., f32, i32).
    type Value: Element;

    /// Returns the dimensions of the matrix as (rows, columns).
    fn dims(&self) -> (usize, usize);

    /// Returns the number of rows.
    fn rows(&self) -> usize {
        self.dims().0
    }

    /// Returns the number of columns.
    fn cols(&self) -> usize {
        self.dims().1
    }

    /// Checks if the matrix is square.
    fn is_square(&self) -> bool {
        let (rows, cols) = self.dims();
        rows == cols
    }

    /// Returns the values of row `row`, or `None` past the last row.
    fn row(&self, row: usize) -> Option<&[Self::Value]>;

    /// Gets the element at the specified row and column.
    /// Returns None if indices are out of bounds.
    fn get(&self, row: usize, col: usize) -> Option<Self::Value> {
        self.row(row).and_then(|values| values.get(col)).copied()
    }

    /// Gets the element at the specified row and column.
    ///
    /// # Errors
    /// Returns `MatrixError::IndexOutOfRange` unless `row < rows` and `col < cols`.
    fn element_at(&self, row: usize, col: usize) -> Result<Self::Value> {
        let (rows, cols) = self.dims();
        self.get(row, col).ok_or(MatrixError::IndexOutOfRange {
            row,
            col,
            rows,
            cols,
        })
    }

    /// Overwrites every cell from `values`, taken in row-major order.
    ///
    /// # Errors
    /// Returns `MatrixError::ValueCountMismatch` if `values.len() != rows * cols`.
    /// The matrix is left untouched in that case.
    fn load_values(&mut self, values: &[Self::Value]) -> Result<()>;

    /// Renders the matrix one row per line, as `| v | v |`.
    /// Each value is written with its `Display` impl, so floats use Rust's shortest
    /// round-trip form (`0.1 + 0.2` shows as `0.30000000000000004`).
    fn render(&self) -> String {
        let mut out = String::new();
        for row in 0..self.rows() {
            let Some(values) = self.row(row) else {
                break;
            };
            out.push('|');
            for (col, value) in values.iter().enumerate() {
                if col > 0 {
                    out.push('|');
                }
                out.push_str(&format!(" {value} "));
            }
            out.push_str("|\n");
        }
        out
    }

    /// Element-wise sum of `self` and `other`.
    /// The result is always a [`DynamicMatrix`], whatever the operand variants are.
    ///
    /// # Errors
    /// Returns `MatrixError::DimensionMismatch` when the shapes differ; nothing is allocated.
    fn add(&self, other: &dyn Matrix<Value = Self::Value>) -> Result<DynamicMatrix<Self::Value>> {
        ops::add_matrices(self, other)
    }
}
