use core::any::type_name;
use core::ops::BitXor;

use log::trace;
use num_traits::Zero;

use crate::error::{MatrixError, MatrixResult};
use crate::storage::Storage;
use crate::traits::Scalar;
use crate::Matrix;

fn identity<T: Scalar>(n: usize) -> Storage<T> {
    let mut s = Storage::allocate(n, n);
    for i in 0..n {
        s.row_slice_mut(i)[i] = T::one();
    }
    s
}

impl<T: Scalar, const N: usize> Matrix<T, N, N> {
    /// Identity matrix.
    ///
    /// ```
    /// use mtl::Matrix;
    /// let id: Matrix<i32, 3, 3> = Matrix::eye();
    /// assert_eq!(id[(1, 1)], 1);
    /// assert_eq!(id[(0, 2)], 0);
    /// ```
    pub fn eye() -> Self {
        Self {
            storage: identity(N),
        }
    }
}

impl<T: Scalar, const I: usize, const J: usize> Matrix<T, I, J> {
    fn require_square(&self, op: &'static str) -> MatrixResult<usize> {
        let (rows, cols) = self.size();
        if rows != cols {
            return Err(MatrixError::NotSquare { op, rows, cols });
        }
        Ok(rows)
    }

    /// Determinant of a square matrix.
    ///
    /// Integer types use exact cofactor expansion; floats use Gaussian
    /// elimination with partial pivoting, rounded to
    /// [`DET_DECIMALS`](crate::linalg::gauss::DET_DECIMALS) decimals. The
    /// determinant of a `0x0` matrix is `1`.
    ///
    /// ```
    /// use mtl::matrix;
    /// assert_eq!(matrix![[2, 3], [4, 5]].determinant(), Ok(-2));
    /// assert_eq!(matrix![[6.0, 1.0, 1.0], [4.0, -2.0, 5.0], [2.0, 8.0, 7.0]].determinant(), Ok(-306.0));
    /// assert!(matrix![[1, 2, 3]].determinant().is_err());
    /// ```
    pub fn determinant(&self) -> MatrixResult<T> {
        let n = self.require_square("determinant")?;
        trace!("determinant of {}x{} {} matrix", n, n, type_name::<T>());
        Ok(T::determinant(self))
    }

    /// True iff the matrix is square and every off-diagonal cell is zero.
    ///
    /// Non-square matrices are never diagonal.
    pub fn is_diagonal(&self) -> bool {
        let Ok(n) = self.require_square("is_diagonal") else {
            return false;
        };
        for i in 0..n {
            for (j, x) in self.storage.row_slice(i).iter().enumerate() {
                if i != j && !x.is_zero() {
                    return false;
                }
            }
        }
        true
    }

    /// Raise to the `n`th power in place.
    ///
    /// `power(0)` sets the identity, `power(1)` leaves the matrix as is,
    /// otherwise the original value is multiplied in `n - 1` times.
    ///
    /// ```
    /// use mtl::matrix;
    /// let mut m = matrix![[1, 2], [3, 4]];
    /// m.power(2).unwrap();
    /// assert_eq!(m, matrix![[7, 10], [15, 22]]);
    /// ```
    pub fn power(&mut self, n: u32) -> MatrixResult<()> {
        let size = self.require_square("power")?;
        match n {
            0 => {
                let was_resized = self.storage.is_resized();
                self.storage = identity(size);
                if was_resized || (size, size) != (I, J) {
                    self.storage.mark_resized();
                }
            }
            1 => {}
            _ => {
                let base = self.clone();
                for _ in 1..n {
                    self.try_mul_assign(&base)?;
                }
            }
        }
        Ok(())
    }

    /// Value-returning [`power`](Matrix::power).
    pub fn pow(&self, n: u32) -> MatrixResult<Self> {
        let mut out = self.clone();
        out.power(n)?;
        Ok(out)
    }
}

// `m ^ n` is the matrix power. Panics if `m` is not square.

impl<T: Scalar, const I: usize, const J: usize> BitXor<u32> for &Matrix<T, I, J> {
    type Output = Matrix<T, I, J>;

    fn bitxor(self, n: u32) -> Matrix<T, I, J> {
        self.pow(n).unwrap_or_else(|e| panic!("{e}"))
    }
}

impl<T: Scalar, const I: usize, const J: usize> BitXor<u32> for Matrix<T, I, J> {
    type Output = Self;

    fn bitxor(self, n: u32) -> Self {
        (&self).bitxor(n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn eye() {
        let id: Matrix<f64, 3, 3> = Matrix::eye();
        assert!(id.is_diagonal());
        assert_eq!(id.iter().filter(|&&x| x == 1.0).count(), 3);
    }

    #[test]
    fn det_base_cases() {
        assert_eq!(Matrix::new([[1]]).determinant(), Ok(1));
        assert_eq!(Matrix::new([[2, 3], [4, 5]]).determinant(), Ok(-2));
    }

    #[test]
    fn det_3x3() {
        let m = Matrix::new([[6.0_f64, 1.0, 1.0], [4.0, -2.0, 5.0], [2.0, 8.0, 7.0]]);
        assert_eq!(m.determinant(), Ok(-306.0));

        let m = Matrix::new([[6_i64, 1, 1], [4, -2, 5], [2, 8, 7]]);
        assert_eq!(m.determinant(), Ok(-306));
    }

    #[test]
    fn det_identity() {
        let id: Matrix<f64, 4, 4> = Matrix::eye();
        assert_eq!(id.determinant(), Ok(1.0));
    }

    #[test]
    fn det_singular() {
        let m = Matrix::new([[1.0_f64, 2.0], [2.0, 4.0]]);
        assert_eq!(m.determinant(), Ok(0.0));
    }

    #[test]
    fn det_not_square() {
        let m: Matrix<i32, 2, 3> = Matrix::zeros();
        let err = m.determinant().unwrap_err();
        assert_eq!(
            err,
            MatrixError::NotSquare {
                op: "determinant",
                rows: 2,
                cols: 3
            }
        );
        assert_eq!(err.kind(), ErrorKind::Logic);
    }

    #[test]
    fn det_follows_logical_shape() {
        let mut m: Matrix<f64, 2, 3> = Matrix::zeros();
        m.reallocate(2, 2);
        // all ones
        assert_eq!(m.determinant(), Ok(0.0));
    }

    #[test]
    fn det_empty() {
        let mut m = Matrix::new([[5]]);
        let _ = m.take();
        assert_eq!(m.determinant(), Ok(1));
    }

    #[test]
    fn is_diagonal() {
        assert!(Matrix::new([[1, 0], [0, 1]]).is_diagonal());
        assert!(Matrix::new([[3, 0], [0, 0]]).is_diagonal());
        assert!(!Matrix::new([[1, 2], [0, 1]]).is_diagonal());
        assert!(!Matrix::new([[1, 0, 0], [0, 1, 0]]).is_diagonal());
    }

    #[test]
    fn power() {
        let mut m = Matrix::new([[1.0, 1.0], [0.0, 1.0]]);
        m.power(3).unwrap();
        assert_eq!(m, Matrix::new([[1.0, 3.0], [0.0, 1.0]]));
        assert!(!m.is_reallocated());
    }

    #[test]
    fn power_zero_and_one() {
        let m = Matrix::new([[2, 3], [4, 5]]);
        assert_eq!(m.pow(0), Ok(Matrix::eye()));
        assert_eq!(m.pow(1), Ok(m.clone()));
    }

    #[test]
    fn power_zero_keeps_reallocated_flag() {
        let mut m: Matrix<i32, 2, 2> = Matrix::zeros();
        m.reallocate(2, 2);
        m.power(0).unwrap();
        assert!(m.is_reallocated());
        assert_eq!(m, Matrix::<i32, 2, 2>::eye());

        let mut m: Matrix<i32, 3, 3> = Matrix::zeros();
        m.reallocate(2, 2);
        m.power(0).unwrap();
        assert!(m.is_reallocated());
        assert_eq!(m.size(), (2, 2));

        let mut m = Matrix::new([[2, 3], [4, 5]]);
        m.power(0).unwrap();
        assert!(!m.is_reallocated());
    }

    #[test]
    fn unsigned_determinant_with_negative_minor() {
        let m = Matrix::new([[3_u8, 0, 1], [1, 3, 2], [1, 1, 1]]);
        assert_eq!(m.determinant(), Ok(1));
        let m = Matrix::new([[1_u32, 2], [3, 4]]);
        assert_eq!(m.determinant(), Ok(2_u32.wrapping_neg()));
    }

    #[test]
    fn float_determinant_of_large_entries() {
        let m = Matrix::new([[1e152_f64, 0.0], [0.0, 1e152]]);
        let d = m.determinant().unwrap();
        assert!(d.is_finite());
        assert_eq!(d, 1e152 * 1e152);

        let m = Matrix::new([[1e17_f32, 0.0], [0.0, 1e17]]);
        assert!(m.determinant().unwrap().is_finite());
    }

    #[test]
    fn power_not_square() {
        let mut m = Matrix::new([[1, 2, 3], [4, 5, 6]]);
        assert!(m.power(2).is_err());
        assert_eq!(m, Matrix::new([[1, 2, 3], [4, 5, 6]]));
    }

    #[test]
    fn bitxor_power() {
        let m = Matrix::new([[1, 2], [3, 4]]);
        assert_eq!(&m ^ 2, Matrix::new([[7, 10], [15, 22]]));
        assert_eq!(m ^ 0, Matrix::<i32, 2, 2>::eye());
    }

    #[test]
    #[should_panic(expected = "requires a square matrix")]
    fn bitxor_not_square_panics() {
        let m = Matrix::new([[1, 2]]);
        let _ = &m ^ 2;
    }
}
