//! Element-wise addition shared by every matrix variant.
//!
//! Whatever the operands are (fixed + fixed, fixed + dynamic, dynamic + dynamic, or trait objects),
//! a successful sum is a fresh [`DynamicMatrix`] owned by the caller. A fixed-size result type
//! cannot be named for operands of different fixed types, so the runtime-sized variant is the one
//! result type.

use std::ops::Add;

use crate::dynamic_matrix::DynamicMatrix;
use crate::error::{MatrixError, Result};
use crate::fixed_matrix::FixedMatrix;
use crate::traits::{Element, Matrix};

/// Computes `left + right` cell by cell.
///
/// # Errors
/// Returns `MatrixError::DimensionMismatch` when `left.dims() != right.dims()`. The shapes are
/// compared before the result is allocated, so a rejected addition allocates nothing.
pub fn add_matrices<A, B>(left: &A, right: &B) -> Result<DynamicMatrix<A::Value>>
where
    A: Matrix + ?Sized,
    B: Matrix<Value = A::Value> + ?Sized,
{
    if left.dims() != right.dims() {
        let err = MatrixError::DimensionMismatch {
            left: left.dims(),
            right: right.dims(),
        };
        log::warn!("Addition rejected: {}", err);
        return Err(err);
    }

    let (rows, cols) = left.dims();
    let mut result = DynamicMatrix::new(rows, cols);
    for row in 0..rows {
        for col in 0..cols {
            let sum = left.element_at(row, col)? + right.element_at(row, col)?;
            result.set(row, col, sum)?;
        }
    }
    Ok(result)
}

impl<'a, 'b, T, M> Add<&'b M> for &'a DynamicMatrix<T>
where
    T: Element,
    M: Matrix<Value = T> + ?Sized,
{
    type Output = Result<DynamicMatrix<T>>;

    fn add(self, rhs: &'b M) -> Self::Output {
        add_matrices(self, rhs)
    }
}

impl<'a, 'b, T, M, const R: usize, const C: usize> Add<&'b M> for &'a FixedMatrix<T, R, C>
where
    T: Element,
    M: Matrix<Value = T> + ?Sized,
{
    type Output = Result<DynamicMatrix<T>>;

    fn add(self, rhs: &'b M) -> Self::Output {
        add_matrices(self, rhs)
    }
}

impl<'a, 'b, T, M> Add<&'b M> for &'a dyn Matrix<Value = T>
where
    T: Element,
    M: Matrix<Value = T> + ?Sized,
{
    type Output = Result<DynamicMatrix<T>>;

    fn add(self, rhs: &'b M) -> Self::Output {
        add_matrices(self, rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::add_matrices;
    use crate::{DynamicMatrix, FixedMatrix, Matrix, MatrixError};

    #[test]
    fn test_add_dynamic_plus_fixed() {
        let a = DynamicMatrix::<f32>::from_rows(&[[1.5, 2.0], [0.0, 1.0], [4.5, 3.0]]).unwrap();
        let b = FixedMatrix::from_rows([[0.5f32, 1.0], [2.0, 3.0], [1.0, 1.0]]);

        let c: DynamicMatrix<f32> = (&a + &b).unwrap();
        assert_eq!(c.dims(), (3, 2));
        assert_eq!(c.as_slice(), &[2.0, 3.0, 2.0, 4.0, 5.5, 4.0]);
    }

    #[test]
    fn test_add_fixed_plus_fixed_is_dynamic() {
        let a = FixedMatrix::from_rows([[1, 2], [3, 4]]);
        let b = FixedMatrix::from_rows([[10, 20], [30, 40]]);

        let sum: DynamicMatrix<i32> = a.add(&b).unwrap();
        assert_eq!(sum.into_vec(), vec![11, 22, 33, 44]);
    }

    #[test]
    fn test_add_through_trait_objects() {
        let d = DynamicMatrix::<i32>::from_rows(&[[5, 10], [15, 20]]).unwrap();
        let e = FixedMatrix::from_rows([[1, 2], [3, 4]]);
        let left: &dyn Matrix<Value = i32> = &d;
        let right: &dyn Matrix<Value = i32> = &e;

        let by_operator = (left + right).unwrap();
        let by_method = left.add(right).unwrap();
        assert_eq!(by_operator, by_method);
        assert_eq!(by_operator.as_slice(), &[6, 12, 18, 24]);
    }

    #[test]
    fn test_add_dimension_mismatch() {
        let small = FixedMatrix::<i32, 2, 2>::new();
        let tall = DynamicMatrix::<i32>::new(3, 2);

        match add_matrices(&small, &tall) {
            Err(MatrixError::DimensionMismatch { left, right }) => {
                assert_eq!(left, (2, 2));
                assert_eq!(right, (3, 2));
            }
            other => panic!("Expected DimensionMismatch error, got {:?}", other),
        }
        assert!((&tall + &small).is_err());
    }

    #[test]
    fn test_add_empty_matrices() {
        let a = DynamicMatrix::<i32>::new(0, 0);
        let b = FixedMatrix::<i32, 0, 0>::new();
        let sum = add_matrices(&a, &b).unwrap();
        assert!(sum.is_empty());
        assert_eq!(sum.dims(), (0, 0));
    }
}
