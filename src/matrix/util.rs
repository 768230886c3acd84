use alloc::vec::Vec;
use core::fmt;

use crate::matrix::row::write_values;
use crate::storage::Storage;
use crate::Matrix;

// ── Constructors ────────────────────────────────────────────────────

impl<T, const I: usize, const J: usize> Matrix<T, I, J> {
    /// Create a matrix by calling `f(row, col)` for each element.
    ///
    /// ```
    /// use mtl::Matrix;
    /// let m: Matrix<f64, 3, 3> = Matrix::from_fn(|i, j| {
    ///     if i == j { 1.0 } else { 0.0 }
    /// });
    /// assert_eq!(m, Matrix::<f64, 3, 3>::eye());
    /// ```
    pub fn from_fn(f: impl Fn(usize, usize) -> T) -> Self {
        let mut data = Vec::with_capacity(I * J);
        for i in 0..I {
            for j in 0..J {
                data.push(f(i, j));
            }
        }
        Self {
            storage: Storage::from_vec(I, J, data),
        }
    }

    /// Apply a function to every element, producing a new matrix of the
    /// same logical shape.
    ///
    /// ```
    /// use mtl::matrix;
    /// let m = matrix![[1, 4], [9, 16]];
    /// let r = m.map(|x| x * 2);
    /// assert_eq!(r, matrix![[2, 8], [18, 32]]);
    /// ```
    pub fn map<U>(&self, f: impl Fn(T) -> U) -> Matrix<U, I, J>
    where
        T: Copy,
    {
        let (rows, cols) = self.size();
        let data: Vec<U> = self.iter().map(|&x| f(x)).collect();
        Matrix::from_storage(Storage::from_vec(rows, cols, data))
    }
}

// ── Display ─────────────────────────────────────────────────────────
// One line per row, values separated by a single space.

impl<T: fmt::Display, const I: usize, const J: usize> fmt::Display for Matrix<T, I, J> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for i in 0..self.row_size() {
            if i > 0 {
                writeln!(f)?;
            }
            write_values(f, self.storage.row_slice(i))?;
        }
        Ok(())
    }
}
