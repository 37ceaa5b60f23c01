//! # Matrix Core Library
//!
//! Two storage strategies behind one [`Matrix`] trait:
//!
//! - [`FixedMatrix`]: shape fixed by the type (`FixedMatrix<T, R, C>`), stored inline, plain value semantics.
//! - [`DynamicMatrix`]: shape chosen at construction, one contiguous row-major buffer owned exclusively.
//!
//! Any two matrices with the same element type can be added, in any combination of variants.
//! The sum is always a new [`DynamicMatrix`]; mismatched shapes give
//! [`MatrixError::DimensionMismatch`] instead of a result.
//!
//! ```
//! use matrix_core::{DynamicMatrix, FixedMatrix, Matrix};
//!
//! let a = DynamicMatrix::<i32>::from_rows(&[[5, 10], [15, 20]]).unwrap();
//! let b = FixedMatrix::from_rows([[1, 2], [3, 4]]);
//!
//! let c = (&a + &b).unwrap();
//! assert_eq!(c.render(), "| 6 | 12 |\n| 18 | 24 |\n");
//! ```

// Declare modules
pub mod dynamic_matrix;
pub mod error;
pub mod fixed_matrix;
pub mod ops;
pub mod traits;

// Re-export public types
pub use dynamic_matrix::DynamicMatrix;
pub use error::{MatrixError, Result};
pub use fixed_matrix::FixedMatrix;
pub use ops::add_matrices;
pub use traits::{Element, Matrix};
