pub mod aliases;
mod convert;
pub mod iter;
mod ops;
pub mod row;
mod square;
mod util;

use core::ops::{Index, IndexMut};

use log::warn;

use crate::error::{MatrixError, MatrixResult};
use crate::storage::Storage;
use crate::traits::{MatrixMut, MatrixRef, Scalar};

/// Matrix with a declared shape of `I` rows and `J` columns.
///
/// Elements live in a heap-allocated, row-major [`Storage`]. The declared
/// shape is the construction default; the *logical* shape reported by
/// [`size`](Matrix::size) is what every access, bounds check, arithmetic
/// operation and iteration uses. The two diverge after
/// [`reallocate`](Matrix::reallocate) or a shape-changing product.
///
/// # Examples
///
/// ```
/// use mtl::{matrix, Matrix};
///
/// let a = matrix![[1, 2], [3, 4]];
/// assert_eq!(a[(0, 1)], 2);
/// assert_eq!(a.size(), (2, 2));
///
/// let b: Matrix<f64, 3, 3> = Matrix::eye();
/// assert_eq!(b.at(0, 0), Ok(1.0));
/// assert!(b.at(3, 0).is_err());
/// ```
#[derive(Debug, Clone)]
pub struct Matrix<T, const I: usize, const J: usize> {
    pub(crate) storage: Storage<T>,
}

// ── Constructors ────────────────────────────────────────────────────

impl<T: Scalar, const I: usize, const J: usize> Matrix<T, I, J> {
    /// Create a matrix from a row-major 2D array.
    ///
    /// The shape is checked by the type system, so this cannot fail.
    /// The [`matrix!`](crate::matrix) macro expands to this.
    pub fn new(rows: [[T; J]; I]) -> Self {
        Self {
            storage: Storage::from_vec(I, J, rows.as_flattened().to_vec()),
        }
    }

    /// Create a matrix filled with zeros.
    pub fn zeros() -> Self {
        Self {
            storage: Storage::allocate(I, J),
        }
    }

    /// Create a matrix with every cell set to `value`.
    ///
    /// ```
    /// use mtl::Matrix;
    /// let m: Matrix<i32, 2, 3> = Matrix::filled(7);
    /// assert!(m.iter().all(|&x| x == 7));
    /// ```
    pub fn filled(value: T) -> Self {
        Self {
            storage: Storage::filled(I, J, value),
        }
    }

    /// Create a matrix filled with `value` cast from another arithmetic
    /// type, with `as` semantics.
    ///
    /// ```
    /// use mtl::Matrix;
    /// let m: Matrix<f32, 2, 2> = Matrix::filled_from(3_u8);
    /// assert_eq!(m[(1, 1)], 3.0);
    /// ```
    pub fn filled_from<U>(value: U) -> Self
    where
        U: num_traits::AsPrimitive<T>,
    {
        Self::filled(value.as_())
    }

    /// Create a matrix from a flat row-major list.
    ///
    /// The list must hold exactly `I * J` elements.
    ///
    /// ```
    /// use mtl::{Matrix, ErrorKind};
    /// let m: Matrix<i32, 2, 2> = Matrix::from_flat(&[1, 0, 0, 1]).unwrap();
    /// assert!(m.is_diagonal());
    ///
    /// let err = Matrix::<i32, 2, 2>::from_flat(&[1, 2, 3]).unwrap_err();
    /// assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    /// ```
    pub fn from_flat(elems: &[T]) -> MatrixResult<Self> {
        if elems.len() != I * J {
            return Err(MatrixError::ElementCount {
                rows: I,
                cols: J,
                got: elems.len(),
            });
        }
        Ok(Self {
            storage: Storage::from_vec(I, J, elems.to_vec()),
        })
    }

    /// Create a matrix from a list of rows.
    ///
    /// Only the total element count must equal `I * J`; elements are
    /// consumed in row-major order regardless of how they are split
    /// between the inner lists.
    ///
    /// ```
    /// use mtl::Matrix;
    /// let m: Matrix<i32, 2, 3> = Matrix::from_nested(&[vec![1, 2, 3], vec![4, 5, 6]]).unwrap();
    /// assert_eq!(m[(1, 0)], 4);
    /// ```
    pub fn from_nested<R: AsRef<[T]>>(rows: &[R]) -> MatrixResult<Self> {
        let total: usize = rows.iter().map(|r| r.as_ref().len()).sum();
        if total != I * J {
            return Err(MatrixError::ElementCount {
                rows: I,
                cols: J,
                got: total,
            });
        }
        let mut data = alloc::vec::Vec::with_capacity(total);
        for row in rows {
            data.extend_from_slice(row.as_ref());
        }
        Ok(Self {
            storage: Storage::from_vec(I, J, data),
        })
    }

    /// Overwrite every logical cell from a flat row-major list.
    ///
    /// On a length mismatch the matrix is filled with `1` and
    /// [`MatrixError::ElementCount`] is returned; it is never left
    /// partially written.
    pub fn set_elements(&mut self, elems: &[T]) -> MatrixResult<()> {
        let (rows, cols) = self.size();
        if elems.len() != rows * cols {
            warn!(
                "cannot initialize {}x{} matrix with {} elements, filling with ones",
                rows,
                cols,
                elems.len()
            );
            self.storage.fill(T::one());
            return Err(MatrixError::ElementCount {
                rows,
                cols,
                got: elems.len(),
            });
        }
        self.storage.as_mut_slice().copy_from_slice(elems);
        Ok(())
    }

    /// Discard the contents and switch to a `rows x cols` logical shape
    /// with every cell set to `1`.
    ///
    /// ```
    /// use mtl::Matrix;
    /// let mut m: Matrix<i32, 2, 2> = Matrix::zeros();
    /// m.reallocate(3, 1);
    /// assert_eq!(m.size(), (3, 1));
    /// assert!(m.is_reallocated());
    /// assert_eq!(m.underlying_array(), &[1, 1, 1]);
    /// ```
    pub fn reallocate(&mut self, rows: usize, cols: usize) {
        self.storage.reallocate(rows, cols);
    }

    /// Set every logical cell to `value`.
    pub fn insert(&mut self, value: T) {
        for x in self.iter_mut() {
            *x = value;
        }
    }
}

impl<T, const I: usize, const J: usize> Matrix<T, I, J> {
    /// Wrap a storage, flagging it as resized if its shape differs from
    /// the declared one.
    pub(crate) fn from_storage(mut storage: Storage<T>) -> Self {
        if storage.shape() != (I, J) {
            storage.mark_resized();
        }
        Self { storage }
    }

    /// Logical `(rows, cols)`.
    #[inline]
    pub fn size(&self) -> (usize, usize) {
        self.storage.shape()
    }

    /// Logical number of rows.
    #[inline]
    pub fn row_size(&self) -> usize {
        self.storage.rows()
    }

    /// Logical number of columns.
    #[inline]
    pub fn col_size(&self) -> usize {
        self.storage.cols()
    }

    /// Type-level `(I, J)`.
    #[inline]
    pub const fn declared_size(&self) -> (usize, usize) {
        (I, J)
    }

    #[inline]
    pub fn is_square(&self) -> bool {
        self.storage.rows() == self.storage.cols()
    }

    /// True when the matrix holds no elements (e.g. after [`take`](Matrix::take)).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.storage.is_empty()
    }

    /// Whether the logical shape has been set independently of the
    /// declared shape.
    #[inline]
    pub fn is_reallocated(&self) -> bool {
        self.storage.is_resized()
    }

    /// The raw row-major buffer.
    #[inline]
    pub fn underlying_array(&self) -> &[T] {
        self.storage.as_slice()
    }

    /// The raw row-major buffer, mutably.
    #[inline]
    pub fn underlying_array_mut(&mut self) -> &mut [T] {
        self.storage.as_mut_slice()
    }

    /// The backing storage.
    #[inline]
    pub fn storage(&self) -> &Storage<T> {
        &self.storage
    }

    /// Move the contents out, leaving `self` empty with shape `(0, 0)`.
    ///
    /// ```
    /// use mtl::matrix;
    /// let mut a = matrix![[1, 2], [3, 4]];
    /// let b = a.take();
    /// assert_eq!(a.size(), (0, 0));
    /// assert!(a.underlying_array().is_empty());
    /// assert_eq!(b, matrix![[1, 2], [3, 4]]);
    /// ```
    pub fn take(&mut self) -> Self {
        let storage = core::mem::take(&mut self.storage);
        self.storage.mark_resized();
        Self { storage }
    }

    /// Bounds-checked reference to `(row, col)`.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> MatrixResult<&T> {
        self.storage.get(row, col)
    }

    /// Bounds-checked mutable reference to `(row, col)`.
    #[inline]
    pub fn get_mut(&mut self, row: usize, col: usize) -> MatrixResult<&mut T> {
        self.storage.get_mut(row, col)
    }

    /// Bounds-checked copy of `(row, col)`.
    #[inline]
    pub fn at(&self, row: usize, col: usize) -> MatrixResult<T>
    where
        T: Copy,
    {
        self.storage.get(row, col).copied()
    }
}

impl<T: Scalar, const I: usize, const J: usize> Default for Matrix<T, I, J> {
    fn default() -> Self {
        Self::zeros()
    }
}

impl<T: Scalar, const I: usize, const J: usize> From<[[T; J]; I]> for Matrix<T, I, J> {
    fn from(rows: [[T; J]; I]) -> Self {
        Self::new(rows)
    }
}

// ── Equality ────────────────────────────────────────────────────────

impl<T: PartialEq, const I: usize, const J: usize, const A: usize, const B: usize>
    PartialEq<Matrix<T, A, B>> for Matrix<T, I, J>
{
    /// Equal iff the logical shapes match and every cell is equal.
    /// Declared shapes and resize history are ignored.
    fn eq(&self, other: &Matrix<T, A, B>) -> bool {
        self.storage.shape() == other.storage.shape()
            && self.storage.as_slice() == other.storage.as_slice()
    }
}

impl<T: Eq, const I: usize, const J: usize> Eq for Matrix<T, I, J> {}

// ── MatrixRef / MatrixMut ───────────────────────────────────────────

impl<T, const I: usize, const J: usize> MatrixRef<T> for Matrix<T, I, J> {
    #[inline]
    fn nrows(&self) -> usize {
        self.storage.rows()
    }

    #[inline]
    fn ncols(&self) -> usize {
        self.storage.cols()
    }

    #[inline]
    fn get(&self, row: usize, col: usize) -> &T {
        MatrixRef::get(&self.storage, row, col)
    }
}

impl<T, const I: usize, const J: usize> MatrixMut<T> for Matrix<T, I, J> {
    #[inline]
    fn get_mut(&mut self, row: usize, col: usize) -> &mut T {
        MatrixMut::get_mut(&mut self.storage, row, col)
    }

    #[inline]
    fn swap_rows(&mut self, a: usize, b: usize) {
        self.storage.swap_rows(a, b);
    }
}

// ── Index by (row, col) tuple ───────────────────────────────────────
// Bounds-checked against the logical shape; panics with the
// `MatrixError` message.

impl<T, const I: usize, const J: usize> Index<(usize, usize)> for Matrix<T, I, J> {
    type Output = T;

    #[inline]
    fn index(&self, (row, col): (usize, usize)) -> &T {
        match self.storage.get(row, col) {
            Ok(x) => x,
            Err(e) => panic!("{e}"),
        }
    }
}

impl<T, const I: usize, const J: usize> IndexMut<(usize, usize)> for Matrix<T, I, J> {
    #[inline]
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut T {
        match self.storage.get_mut(row, col) {
            Ok(x) => x,
            Err(e) => panic!("{e}"),
        }
    }
}

pub use aliases::*;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn zeros_and_default() {
        let z: Matrix<f64, 3, 3> = Matrix::zeros();
        assert_eq!(z.size(), (3, 3));
        assert!(z.iter().all(|&x| x == 0.0));
        assert_eq!(z, Matrix::<f64, 3, 3>::default());
        assert!(!z.is_reallocated());
    }

    #[test]
    fn new_and_index() {
        let m = Matrix::new([[1.0, 2.0], [3.0, 4.0]]);
        assert_eq!(m[(0, 0)], 1.0);
        assert_eq!(m[(0, 1)], 2.0);
        assert_eq!(m[(1, 0)], 3.0);
        assert_eq!(m[(1, 1)], 4.0);
    }

    #[test]
    fn index_mut() {
        let mut m: Matrix<f64, 2, 2> = Matrix::zeros();
        m[(0, 1)] = 5.0;
        assert_eq!(m[(0, 1)], 5.0);
        *m.get_mut(1, 1).unwrap() = 6.0;
        assert_eq!(m.at(1, 1), Ok(6.0));
    }

    #[test]
    #[should_panic(expected = "column index 2 out of range")]
    fn index_out_of_range_panics() {
        let m: Matrix<i32, 2, 2> = Matrix::zeros();
        let _ = m[(0, 2)];
    }

    #[test]
    fn non_square() {
        let m: Matrix<f64, 2, 3> = Matrix::zeros();
        assert_eq!(m.row_size(), 2);
        assert_eq!(m.col_size(), 3);
        assert!(!m.is_square());
    }

    #[test]
    fn filled_from_other_type() {
        let m: Matrix<i64, 2, 2> = Matrix::filled_from(2.9_f64);
        assert!(m.iter().all(|&x| x == 2));
    }

    #[test]
    fn flat_mismatch() {
        let err = Matrix::<i32, 2, 3>::from_flat(&[1, 2, 3, 4, 5, 6, 7]).unwrap_err();
        assert_eq!(err, MatrixError::ElementCount { rows: 2, cols: 3, got: 7 });
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    }

    #[test]
    fn nested_ragged_total() {
        let m: Matrix<i32, 2, 2> = Matrix::from_nested(&[&[1, 2, 3][..], &[4][..]]).unwrap();
        assert_eq!(m, Matrix::new([[1, 2], [3, 4]]));

        let err = Matrix::<i32, 2, 2>::from_nested(&[[1, 2], [3, 4], [5, 6]]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    }

    #[test]
    fn set_elements_falls_back_to_ones() {
        let mut m = Matrix::new([[5, 6], [7, 8]]);
        assert!(m.set_elements(&[1, 2, 3]).is_err());
        assert!(m.iter().all(|&x| x == 1));

        m.set_elements(&[9, 8, 7, 6]).unwrap();
        assert_eq!(m, Matrix::new([[9, 8], [7, 6]]));
    }

    #[test]
    fn reallocate_changes_shape() {
        let mut m: Matrix<i32, 2, 2> = Matrix::zeros();
        m.reallocate(2, 5);
        assert_eq!(m.size(), (2, 5));
        assert_eq!(m.declared_size(), (2, 2));
        assert!(m.is_reallocated());
        assert!(m.iter().all(|&x| x == 1));
        assert!(m.get(1, 4).is_ok());
        assert!(m.get(2, 0).is_err());
    }

    #[test]
    fn insert_fills() {
        let mut m: Matrix<i32, 3, 3> = Matrix::zeros();
        m.insert(2);
        assert_eq!(m, Matrix::<i32, 3, 3>::filled(2));
    }

    #[test]
    fn take_leaves_empty() {
        let mut a = Matrix::new([[1, 2], [3, 4]]);
        let b = a.take();
        assert_eq!(a.size(), (0, 0));
        assert!(a.is_empty());
        assert!(a.underlying_array().is_empty());
        assert!(a.get(0, 0).is_err());
        assert_eq!(b, Matrix::new([[1, 2], [3, 4]]));
        assert!(!b.is_reallocated());
    }

    #[test]
    fn clone_is_independent() {
        let a = Matrix::new([[1, 2], [3, 4]]);
        let mut b = a.clone();
        assert_eq!(a, b);
        b[(0, 0)] = 10;
        assert_ne!(a, b);
        assert_eq!(a[(0, 0)], 1);
    }

    #[test]
    fn equality_across_declared_shapes() {
        let a: Matrix<i32, 2, 2> = Matrix::filled(1);
        let mut b: Matrix<i32, 3, 3> = Matrix::zeros();
        assert_ne!(a, b);
        b.reallocate(2, 2);
        assert_eq!(a, b);
    }

    #[test]
    fn raw_buffer_writes_are_visible() {
        let mut m = Matrix::new([[1, 2], [3, 4]]);
        m.underlying_array_mut()[3] = 9;
        m.underlying_array_mut()[0] += 10;
        assert_eq!(m[(1, 1)], 9);
        assert_eq!(m.underlying_array(), &[11, 2, 3, 9]);
    }

    #[test]
    fn storage_reports_logical_shape() {
        let mut m: Matrix<i32, 2, 3> = Matrix::zeros();
        assert_eq!(m.storage().shape(), (2, 3));
        assert!(!m.storage().is_resized());

        m.reallocate(4, 1);
        let s = m.storage();
        assert_eq!(s.shape(), (4, 1));
        assert!(s.is_resized());
        assert_eq!(s.as_slice(), &[1, 1, 1, 1]);
    }

    #[test]
    fn matrix_ref_trait() {
        let m = Matrix::new([[1.0, 2.0], [3.0, 4.0]]);

        fn trace_generic<T: Scalar>(m: &impl MatrixRef<T>) -> T {
            let mut sum = T::zero();
            let n = m.nrows().min(m.ncols());
            for i in 0..n {
                sum = sum + *m.get(i, i);
            }
            sum
        }

        assert_eq!(trace_generic(&m), 5.0);
    }
}
