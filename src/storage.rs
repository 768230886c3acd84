//! Owned row-major buffer backing every [`Matrix`](crate::Matrix).
//!
//! A `Storage` tracks the *logical* shape of the matrix it backs. The
//! declared shape lives only in the `Matrix` type; once a storage has been
//! reallocated its own `(rows, cols)` is the only shape that matters.

use alloc::vec;
use alloc::vec::Vec;

use log::debug;

use crate::error::{MatrixError, MatrixResult};
use crate::traits::{MatrixMut, MatrixRef, Scalar};

/// Contiguous row-major element buffer with a runtime shape.
///
/// Invariant: `data.len() == rows * cols`.
///
/// ```
/// use mtl::Storage;
///
/// let mut s: Storage<i32> = Storage::allocate(2, 3);
/// assert_eq!(s.shape(), (2, 3));
/// assert_eq!(s.as_slice(), &[0; 6]);
///
/// s.reallocate(3, 1);
/// assert_eq!(s.as_slice(), &[1, 1, 1]);
/// assert!(s.is_resized());
/// ```
#[derive(Debug, Clone)]
pub struct Storage<T> {
    data: Vec<T>,
    rows: usize,
    cols: usize,
    resized: bool,
}

impl<T> Storage<T> {
    /// A storage with no buffer and shape `(0, 0)`.
    pub const fn empty() -> Self {
        Self {
            data: Vec::new(),
            rows: 0,
            cols: 0,
            resized: false,
        }
    }

    /// Wrap an existing row-major buffer.
    ///
    /// Panics if `data.len() != rows * cols`.
    pub(crate) fn from_vec(rows: usize, cols: usize, data: Vec<T>) -> Self {
        assert_eq!(
            data.len(),
            rows * cols,
            "vec length {} does not match {}x{} storage",
            data.len(),
            rows,
            cols,
        );
        Self {
            data,
            rows,
            cols,
            resized: false,
        }
    }

    /// Free the buffer. The shape becomes `(0, 0)`.
    ///
    /// Releasing an empty storage is a no-op.
    pub fn release(&mut self) {
        self.data = Vec::new();
        self.rows = 0;
        self.cols = 0;
    }

    /// Logical `(rows, cols)`.
    #[inline]
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Whether the logical shape has been set independently of the
    /// declared one.
    #[inline]
    pub fn is_resized(&self) -> bool {
        self.resized
    }

    #[inline]
    pub(crate) fn mark_resized(&mut self) {
        self.resized = true;
    }

    /// True when the storage holds no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Row-major index of `(row, col)`, checked against the logical shape.
    #[inline]
    pub fn index_of(&self, row: usize, col: usize) -> MatrixResult<usize> {
        if row >= self.rows {
            return Err(MatrixError::RowOutOfRange {
                index: row,
                rows: self.rows,
            });
        }
        if col >= self.cols {
            return Err(MatrixError::ColOutOfRange {
                index: col,
                cols: self.cols,
            });
        }
        Ok(row * self.cols + col)
    }

    pub fn get(&self, row: usize, col: usize) -> MatrixResult<&T> {
        let idx = self.index_of(row, col)?;
        Ok(&self.data[idx])
    }

    pub fn get_mut(&mut self, row: usize, col: usize) -> MatrixResult<&mut T> {
        let idx = self.index_of(row, col)?;
        Ok(&mut self.data[idx])
    }

    /// Check `row` against the logical row count.
    #[inline]
    pub(crate) fn check_row(&self, row: usize) -> MatrixResult<()> {
        if row >= self.rows {
            Err(MatrixError::RowOutOfRange {
                index: row,
                rows: self.rows,
            })
        } else {
            Ok(())
        }
    }

    /// Row `row` as a slice. Panics if out of range.
    #[inline]
    pub fn row_slice(&self, row: usize) -> &[T] {
        let start = row * self.cols;
        &self.data[start..start + self.cols]
    }

    /// Row `row` as a mutable slice. Panics if out of range.
    #[inline]
    pub fn row_slice_mut(&mut self, row: usize) -> &mut [T] {
        let start = row * self.cols;
        &mut self.data[start..start + self.cols]
    }

    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }
}

impl<T: Scalar> Storage<T> {
    /// Allocate a `rows x cols` buffer of zeros.
    pub fn allocate(rows: usize, cols: usize) -> Self {
        Self::filled(rows, cols, T::zero())
    }

    /// Allocate a `rows x cols` buffer with every cell set to `value`.
    pub fn filled(rows: usize, cols: usize, value: T) -> Self {
        Self {
            data: vec![value; rows * cols],
            rows,
            cols,
            resized: false,
        }
    }

    /// Replace the buffer with a fresh `rows x cols` one filled with `1`.
    ///
    /// Sets the resized flag: from here on the logical shape governs.
    pub fn reallocate(&mut self, rows: usize, cols: usize) {
        debug!(
            "reallocating storage {}x{} -> {}x{}",
            self.rows, self.cols, rows, cols
        );
        self.release();
        self.data = vec![T::one(); rows * cols];
        self.rows = rows;
        self.cols = cols;
        self.resized = true;
    }

    /// Overwrite every cell with `value`.
    pub fn fill(&mut self, value: T) {
        for x in self.data.iter_mut() {
            *x = value;
        }
    }
}

impl<T> MatrixRef<T> for Storage<T> {
    #[inline]
    fn nrows(&self) -> usize {
        self.rows
    }

    #[inline]
    fn ncols(&self) -> usize {
        self.cols
    }

    #[inline]
    fn get(&self, row: usize, col: usize) -> &T {
        &self.data[row * self.cols + col]
    }
}

impl<T> MatrixMut<T> for Storage<T> {
    #[inline]
    fn get_mut(&mut self, row: usize, col: usize) -> &mut T {
        &mut self.data[row * self.cols + col]
    }

    fn swap_rows(&mut self, a: usize, b: usize) {
        if a != b {
            let n = self.cols;
            for j in 0..n {
                self.data.swap(a * n + j, b * n + j);
            }
        }
    }
}

impl<T> Default for Storage<T> {
    fn default() -> Self {
        Self::empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn allocate_zeros() {
        let s: Storage<f64> = Storage::allocate(2, 3);
        assert_eq!(s.shape(), (2, 3));
        assert!(s.as_slice().iter().all(|&x| x == 0.0));
        assert!(!s.is_resized());
    }

    #[test]
    fn reallocate_fills_ones() {
        let mut s = Storage::filled(2, 2, 7);
        s.reallocate(1, 3);
        assert_eq!(s.shape(), (1, 3));
        assert_eq!(s.as_slice(), &[1, 1, 1]);
        assert!(s.is_resized());
    }

    #[test]
    fn release_twice() {
        let mut s: Storage<i32> = Storage::allocate(3, 3);
        s.release();
        assert_eq!(s.shape(), (0, 0));
        assert!(s.is_empty());
        s.release();
        assert_eq!(s.shape(), (0, 0));
    }

    #[test]
    fn bounds() {
        let s: Storage<i32> = Storage::allocate(2, 3);
        assert_eq!(
            s.get(2, 0),
            Err(MatrixError::RowOutOfRange { index: 2, rows: 2 })
        );
        assert_eq!(
            s.get(0, 3),
            Err(MatrixError::ColOutOfRange { index: 3, cols: 3 })
        );
        assert_eq!(s.index_of(1, 2), Ok(5));
    }

    #[test]
    fn bounds_follow_logical_shape() {
        let mut s: Storage<i32> = Storage::allocate(2, 2);
        s.reallocate(4, 1);
        assert!(s.get(3, 0).is_ok());
        assert!(s.get(0, 1).is_err());
    }

    #[test]
    fn rows_and_swap() {
        let mut s = Storage::from_vec(2, 2, vec![1, 2, 3, 4]);
        assert_eq!(s.row_slice(1), &[3, 4]);
        s.swap_rows(0, 1);
        assert_eq!(s.as_slice(), &[3, 4, 1, 2]);
        s.row_slice_mut(0)[1] = 9;
        assert_eq!(*MatrixRef::get(&s, 0, 1), 9);
    }

    #[test]
    #[should_panic(expected = "vec length")]
    fn from_vec_wrong_length() {
        let _ = Storage::from_vec(2, 2, vec![1, 2, 3]);
    }
}
