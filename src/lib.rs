//! # mtl
//!
//! Generic dense matrix container with a type-level declared shape and a
//! runtime logical shape. `no_std` compatible (requires `alloc`).
//!
//! ## Quick start
//!
//! ```
//! use mtl::{matrix, Matrix};
//!
//! let mut a = matrix![[1, 2], [3, 4]];
//! a.power(2).unwrap();
//! assert_eq!(a, matrix![[7, 10], [15, 22]]);
//!
//! let b: Matrix<f64, 3, 3> = Matrix::from_fn(|i, j| (i * 3 + j) as f64);
//! assert_eq!(b.determinant(), Ok(0.0));
//! ```
//!
//! ## Modules
//!
//! - [`matrix`]: `Matrix<T, I, J>` with const-generic declared shape.
//!   Heap-allocated row-major storage whose logical shape may diverge from
//!   `(I, J)` after [`Matrix::reallocate`] or a shape-changing product.
//!   Includes arithmetic, indexing, row accessors and iteration. Every
//!   operation consults the logical shape.
//!
//! - [`storage`]: [`Storage<T>`], the owned `Vec<T>` buffer plus logical
//!   shape and resize flag.
//!
//! - [`linalg`]: Determinant kernels: cofactor expansion for integers
//!   (modulo `2^bits` for unsigned types), Gaussian elimination with
//!   partial pivoting for floats.
//!
//! - [`traits`]: Element trait hierarchy:
//!   - [`Scalar`]: all matrix elements (`Copy + PartialEq + PartialOrd + Debug + Num`)
//!   - [`FloatScalar`]: real floats (`Scalar + Float`)
//!   - [`MatrixRef`] / [`MatrixMut`]: generic read/write access for algorithms
//!
//! - [`error`]: [`MatrixError`] and its [`ErrorKind`] classification.
//!
//! ## Errors
//!
//! Fallible methods return [`MatrixResult`]. Operator traits (`+`, `*`,
//! `[(r, c)]`, ...) panic with the error message instead.
//!
//! ## Logging
//!
//! Diagnostics go through the [`log`] facade: `debug` on reallocation and
//! shape-changing products, `warn` on the `set_elements` fallback, `trace`
//! in the determinant kernels. Install any logger to see them.
//!
//! ## Cargo features
//!
//! | Feature | Default | Description |
//! |---------|---------|-------------|
//! | `std`   | yes     | Hardware FPU via system libm, `std::error::Error` impls |
//!
//! Without `std` the float kernels use the pure-Rust `libm` port, which is
//! always linked through `num-traits`.

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod error;
pub mod linalg;
pub mod matrix;
pub mod storage;
pub mod traits;

pub use error::{ErrorKind, MatrixError, MatrixResult};
pub use matrix::aliases::{
    ColumnMatrix, Matrix1, Matrix2, Matrix2x3, Matrix3, Matrix3x2, Matrix3x4, Matrix4, Matrix4x3,
    RowMatrix,
};
pub use matrix::iter::{Iter, IterMut};
pub use matrix::row::{RowSnapshot, RowView};
pub use matrix::Matrix;
pub use storage::Storage;
pub use traits::{FloatScalar, MatrixMut, MatrixRef, Scalar};

/// Build a [`Matrix`] from nested row literals; the declared shape is
/// inferred from the literal.
///
/// ```
/// use mtl::matrix;
/// let m = matrix![[1, 2, 3], [4, 5, 6]];
/// assert_eq!(m.size(), (2, 3));
/// assert_eq!(m[(1, 2)], 6);
/// ```
#[macro_export]
macro_rules! matrix {
    ($([$($x:expr),* $(,)?]),+ $(,)?) => {
        $crate::Matrix::new([$([$($x),*]),+])
    };
}
