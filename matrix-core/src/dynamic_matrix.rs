use std::fmt;
use std::ops::{Index, IndexMut};

use crate::error::{MatrixError, Result};
use crate::fixed_matrix::FixedMatrix;
use crate::traits::private::Sealed;
use crate::traits::{Element, Matrix};

/// Represents a dense matrix stored in row-major order in an owned heap buffer.
///
/// The buffer is never shared: `clone` deep-copies it and [`take`](Self::take) hands it over,
/// leaving an empty 0x0 matrix behind.
#[derive(Debug, PartialEq)]
pub struct DynamicMatrix<T: Element> {
    rows: usize,
    cols: usize,
    data: Vec<T>, // Data stored row-major: data[row * cols + col]
}

impl<T: Element> DynamicMatrix<T> {
    /// Creates a new DynamicMatrix filled with zeros.
    pub fn new(rows: usize, cols: usize) -> Self {
        log::debug!("Dynamic matrix created ({}x{})", rows, cols);
        Self {
            rows,
            cols,
            data: vec![T::zero(); rows * cols],
        }
    }

    /// Creates a new DynamicMatrix from raw data, assuming row-major order.
    ///
    /// # Errors
    /// Returns `MatrixError::DimensionOverflow` if `rows * cols` does not fit in `usize`, and
    /// `MatrixError::ValueCountMismatch` if `data` does not hold exactly `rows * cols` values.
    pub fn from_vec(rows: usize, cols: usize, data: Vec<T>) -> Result<Self> {
        let expected = rows
            .checked_mul(cols)
            .ok_or(MatrixError::DimensionOverflow { rows, cols })?;
        if data.len() != expected {
            return Err(MatrixError::ValueCountMismatch {
                expected,
                actual: data.len(),
            });
        }
        log::debug!("Dynamic matrix created ({}x{})", rows, cols);
        Ok(Self { rows, cols, data })
    }

    /// Creates a DynamicMatrix from a rectangular grid of rows.
    /// The column count is taken from the first row; every other row must match it.
    pub fn from_rows<R: AsRef<[T]>>(grid: &[R]) -> Result<Self> {
        let cols = grid.first().map_or(0, |row| row.as_ref().len());
        let mut matrix = Self::new(grid.len(), cols);
        matrix.load_rows(grid)?;
        Ok(matrix)
    }

    /// Creates a DynamicMatrix holding a copy of any other matrix.
    pub fn from_matrix<M: Matrix<Value = T> + ?Sized>(source: &M) -> Self {
        let (rows, cols) = source.dims();
        let mut matrix = Self::new(rows, cols);
        for row in 0..rows {
            if let Some(values) = source.row(row) {
                matrix.row_mut(row).copy_from_slice(values);
            }
        }
        matrix
    }

    /// Overwrites every cell from a grid of rows.
    /// The grid is validated in full before anything is written.
    pub fn load_rows<R: AsRef<[T]>>(&mut self, grid: &[R]) -> Result<()> {
        if grid.len() != self.rows {
            return Err(MatrixError::ValueCountMismatch {
                expected: self.rows * self.cols,
                actual: grid.iter().map(|row| row.as_ref().len()).sum(),
            });
        }
        if let Some((row, values)) = grid
            .iter()
            .enumerate()
            .find(|(_, values)| values.as_ref().len() != self.cols)
        {
            return Err(MatrixError::RaggedGrid {
                row,
                expected: self.cols,
                actual: values.as_ref().len(),
            });
        }
        for (row, values) in grid.iter().enumerate() {
            self.row_mut(row).copy_from_slice(values.as_ref());
        }
        Ok(())
    }

    /// Moves the buffer out into a new matrix, leaving `self` empty (0x0, no buffer).
    pub fn take(&mut self) -> Self {
        log::trace!("Moving {}x{} dynamic matrix buffer", self.rows, self.cols);
        std::mem::take(self)
    }

    /// True when the matrix holds no cells.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns a slice view of the underlying data vector.
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Returns a mutable slice view of the underlying data vector.
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    /// Consumes the matrix, returning the row-major buffer.
    pub fn into_vec(mut self) -> Vec<T> {
        std::mem::take(&mut self.data)
    }

    /// Gets the element at the specified row and column (mutable).
    /// Returns None if indices are out of bounds.
    pub fn get_mut(&mut self, row: usize, col: usize) -> Option<&mut T> {
        let offset = self.offset(row, col)?;
        self.data.get_mut(offset)
    }

    /// Sets a single cell.
    pub fn set(&mut self, row: usize, col: usize, value: T) -> Result<()> {
        let (rows, cols) = (self.rows, self.cols);
        let cell = self.get_mut(row, col).ok_or(MatrixError::IndexOutOfRange {
            row,
            col,
            rows,
            cols,
        })?;
        *cell = value;
        Ok(())
    }

    fn offset(&self, row: usize, col: usize) -> Option<usize> {
        if row < self.rows && col < self.cols {
            Some(row * self.cols + col)
        } else {
            None
        }
    }

    // Callers guarantee row < self.rows
    fn row_mut(&mut self, row: usize) -> &mut [T] {
        let start = row * self.cols;
        &mut self.data[start..start + self.cols]
    }
}

impl<T: Element> Default for DynamicMatrix<T> {
    /// The empty 0x0 matrix, owning no buffer.
    fn default() -> Self {
        Self {
            rows: 0,
            cols: 0,
            data: Vec::new(),
        }
    }
}

impl<T: Element> Clone for DynamicMatrix<T> {
    fn clone(&self) -> Self {
        log::trace!("Deep-copying {}x{} dynamic matrix", self.rows, self.cols);
        Self {
            rows: self.rows,
            cols: self.cols,
            data: self.data.clone(),
        }
    }

    // Reuses the existing allocation when it is large enough.
    fn clone_from(&mut self, source: &Self) {
        self.rows = source.rows;
        self.cols = source.cols;
        self.data.clone_from(&source.data);
    }
}

impl<T: Element> Drop for DynamicMatrix<T> {
    fn drop(&mut self) {
        if !self.data.is_empty() {
            log::trace!("Releasing {}x{} dynamic matrix buffer", self.rows, self.cols);
        }
    }
}

impl<T: Element> Sealed for DynamicMatrix<T> {}

impl<T: Element> Matrix for DynamicMatrix<T> {
    type Value = T;

    fn dims(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    fn row(&self, row: usize) -> Option<&[T]> {
        if row >= self.rows {
            return None;
        }
        let start = row * self.cols;
        self.data.get(start..start + self.cols)
    }

    fn load_values(&mut self, values: &[T]) -> Result<()> {
        if values.len() != self.data.len() {
            return Err(MatrixError::ValueCountMismatch {
                expected: self.data.len(),
                actual: values.len(),
            });
        }
        self.data.copy_from_slice(values);
        Ok(())
    }
}

impl<T: Element, const R: usize, const C: usize> From<FixedMatrix<T, R, C>> for DynamicMatrix<T> {
    fn from(fixed: FixedMatrix<T, R, C>) -> Self {
        Self::from_matrix(&fixed)
    }
}

impl<T: Element> Index<(usize, usize)> for DynamicMatrix<T> {
    type Output = T;

    fn index(&self, (row, col): (usize, usize)) -> &T {
        match self.offset(row, col) {
            Some(offset) => &self.data[offset],
            None => panic!(
                "index ({}, {}) out of range for {}x{} matrix",
                row, col, self.rows, self.cols
            ),
        }
    }
}

impl<T: Element> IndexMut<(usize, usize)> for DynamicMatrix<T> {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut T {
        match self.offset(row, col) {
            Some(offset) => &mut self.data[offset],
            None => panic!(
                "index ({}, {}) out of range for {}x{} matrix",
                row, col, self.rows, self.cols
            ),
        }
    }
}

impl<T: Element> fmt::Display for DynamicMatrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}
