use std::fmt;
use std::ops::{Index, IndexMut};

use crate::error::{MatrixError, Result};
use crate::traits::private::Sealed;
use crate::traits::{Element, Matrix};

/// A matrix whose shape is part of its type, stored inline as `R` rows of `C` values.
///
/// No heap allocation is involved; copying the matrix copies the grid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedMatrix<T: Element, const R: usize, const C: usize> {
    data: [[T; C]; R],
}

impl<T: Element, const R: usize, const C: usize> FixedMatrix<T, R, C> {
    /// Creates a new FixedMatrix filled with zeros.
    pub fn new() -> Self {
        log::debug!("Fixed matrix created ({}x{})", R, C);
        Self {
            data: [[T::zero(); C]; R],
        }
    }

    /// Creates a FixedMatrix from a grid of rows.
    pub fn from_rows(rows: [[T; C]; R]) -> Self {
        let mut matrix = Self::new();
        matrix.load_rows(rows);
        matrix
    }

    /// Overwrites every cell from a grid of rows. The shape is checked by the type.
    pub fn load_rows(&mut self, rows: [[T; C]; R]) {
        self.data = rows;
    }

    /// Gets the element at the specified row and column (mutable).
    /// Returns None if indices are out of bounds.
    pub fn get_mut(&mut self, row: usize, col: usize) -> Option<&mut T> {
        self.data.get_mut(row).and_then(|values| values.get_mut(col))
    }

    /// Sets a single cell.
    pub fn set(&mut self, row: usize, col: usize, value: T) -> Result<()> {
        let cell = self.get_mut(row, col).ok_or(MatrixError::IndexOutOfRange {
            row,
            col,
            rows: R,
            cols: C,
        })?;
        *cell = value;
        Ok(())
    }

    /// Returns the inline grid.
    pub fn as_rows(&self) -> &[[T; C]; R] {
        &self.data
    }
}

impl<T: Element, const R: usize, const C: usize> Default for FixedMatrix<T, R, C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Element, const R: usize, const C: usize> Sealed for FixedMatrix<T, R, C> {}

impl<T: Element, const R: usize, const C: usize> Matrix for FixedMatrix<T, R, C> {
    type Value = T;

    fn dims(&self) -> (usize, usize) {
        (R, C)
    }

    fn row(&self, row: usize) -> Option<&[T]> {
        self.data.get(row).map(|values| values.as_slice())
    }

    fn load_values(&mut self, values: &[T]) -> Result<()> {
        if values.len() != R * C {
            return Err(MatrixError::ValueCountMismatch {
                expected: R * C,
                actual: values.len(),
            });
        }
        // chunks_exact(0) panics, and an empty grid has nothing to load anyway
        if C == 0 {
            return Ok(());
        }
        for (dst, src) in self.data.iter_mut().zip(values.chunks_exact(C)) {
            dst.copy_from_slice(src);
        }
        Ok(())
    }
}

impl<T: Element, const R: usize, const C: usize> Index<(usize, usize)> for FixedMatrix<T, R, C> {
    type Output = T;

    fn index(&self, (row, col): (usize, usize)) -> &T {
        &self.data[row][col]
    }
}

impl<T: Element, const R: usize, const C: usize> IndexMut<(usize, usize)> for FixedMatrix<T, R, C> {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut T {
        &mut self.data[row][col]
    }
}

impl<T: Element, const R: usize, const C: usize> fmt::Display for FixedMatrix<T, R, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}
