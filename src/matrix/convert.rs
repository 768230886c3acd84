use alloc::vec::Vec;

use num_traits::AsPrimitive;

use crate::error::{MatrixError, MatrixResult};
use crate::storage::Storage;
use crate::traits::Scalar;
use crate::Matrix;

/// Compile-time guard: a conversion target must be at least as large as
/// the source in both declared dimensions.
struct AssertFits<const I: usize, const J: usize, const A: usize, const B: usize>;

impl<const I: usize, const J: usize, const A: usize, const B: usize> AssertFits<I, J, A, B> {
    const OK: () = assert!(
        I >= A && J >= B,
        "conversion target must have at least as many rows and columns as the source"
    );
}

impl<T: Scalar, const I: usize, const J: usize> Matrix<T, I, J> {
    /// Convert from a matrix of another element type and a smaller or
    /// equal declared shape.
    ///
    /// Each source cell is cast with `as` semantics and copied to the same
    /// `(row, col)`; cells outside the source are zero. Shrinking the
    /// declared shape does not compile. If the source has been resized
    /// beyond `(I, J)` this fails with
    /// [`DimensionMismatch`](MatrixError::DimensionMismatch).
    ///
    /// ```
    /// use mtl::{matrix, Matrix};
    /// let small = matrix![[1_i32, 2], [3, 4]];
    /// let big: Matrix<f64, 3, 3> = Matrix::from_matrix(&small).unwrap();
    /// assert_eq!(big[(1, 1)], 4.0);
    /// assert_eq!(big[(2, 2)], 0.0);
    /// ```
    ///
    /// ```compile_fail
    /// use mtl::{matrix, Matrix};
    /// let big: Matrix<i32, 3, 3> = Matrix::zeros();
    /// let _small: Matrix<i32, 2, 2> = Matrix::from_matrix(&big).unwrap();
    /// ```
    pub fn from_matrix<U, const A: usize, const B: usize>(
        src: &Matrix<U, A, B>,
    ) -> MatrixResult<Self>
    where
        U: Scalar + AsPrimitive<T>,
    {
        #[allow(clippy::let_unit_value)]
        let () = AssertFits::<I, J, A, B>::OK;

        let (rows, cols) = src.size();
        if rows > I || cols > J {
            return Err(MatrixError::DimensionMismatch {
                op: "conversion",
                lhs: (I, J),
                rhs: (rows, cols),
            });
        }
        let mut out = Self::zeros();
        for i in 0..rows {
            let dst = out.storage.row_slice_mut(i);
            for (d, &s) in dst.iter_mut().zip(src.storage.row_slice(i)) {
                *d = s.as_();
            }
        }
        Ok(out)
    }

    /// Same-shape conversion to another element type, with `as` semantics.
    ///
    /// ```
    /// use mtl::matrix;
    /// let m = matrix![[1.7_f64, -2.2]];
    /// assert_eq!(m.cast::<i32>(), matrix![[1, -2]]);
    /// ```
    pub fn cast<U>(&self) -> Matrix<U, I, J>
    where
        U: Scalar,
        T: AsPrimitive<U>,
    {
        let (rows, cols) = self.size();
        let data: Vec<U> = self.iter().map(|&x| x.as_()).collect();
        Matrix::from_storage(Storage::from_vec(rows, cols, data))
    }

    /// Compare with a matrix of another element type.
    ///
    /// `==` needs both sides to share `T`. Here each cell of `other` is
    /// cast to `T` with `as` semantics first; logical shapes must match.
    ///
    /// ```
    /// use mtl::matrix;
    /// let a = matrix![[1, 2], [3, 4]];
    /// assert!(a.eq_as(&matrix![[1.0, 2.0], [3.0, 4.0]]));
    /// assert!(!a.eq_as(&matrix![[1.0, 2.0, 3.0]]));
    /// ```
    pub fn eq_as<U, const A: usize, const B: usize>(&self, other: &Matrix<U, A, B>) -> bool
    where
        U: Scalar + AsPrimitive<T>,
    {
        self.size() == other.size()
            && self
                .iter()
                .zip(other.iter())
                .all(|(&t, &u)| u.as_() == t)
    }
}
