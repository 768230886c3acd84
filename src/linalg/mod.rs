//! Determinant kernels.
//!
//! [`cofactor`] expands exactly and suits integer element types; [`gauss`]
//! eliminates with partial pivoting and suits floats. The kernel for a
//! given element type is chosen by [`Scalar::determinant`].
//!
//! [`Scalar::determinant`]: crate::traits::Scalar::determinant

pub mod cofactor;
pub mod gauss;

use alloc::vec::Vec;

use crate::traits::MatrixRef;
use crate::Storage;

/// Copy any matrix-like value into a fresh scratch [`Storage`].
pub(crate) fn to_storage<T: Copy>(a: &impl MatrixRef<T>) -> Storage<T> {
    let (m, n) = (a.nrows(), a.ncols());
    let mut data = Vec::with_capacity(m * n);
    for i in 0..m {
        for j in 0..n {
            data.push(*a.get(i, j));
        }
    }
    Storage::from_vec(m, n, data)
}
