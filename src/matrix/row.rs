//! Row accessors.
//!
//! [`RowSnapshot`] is an owned copy of one row, safe to keep after the
//! matrix changes. [`RowView`] borrows the row mutably: reads and writes go
//! straight to the matrix, and the borrow checker keeps the matrix locked
//! for as long as the view lives.

use alloc::vec::Vec;
use core::fmt;
use core::ops::{Index, IndexMut};

use crate::error::{MatrixError, MatrixResult};
use crate::Matrix;

/// Write values separated by a single space.
pub(crate) fn write_values<T: fmt::Display>(
    f: &mut fmt::Formatter<'_>,
    values: &[T],
) -> fmt::Result {
    for (j, x) in values.iter().enumerate() {
        if j > 0 {
            f.write_str(" ")?;
        }
        write!(f, "{x}")?;
    }
    Ok(())
}

#[inline]
fn check_col(col: usize, cols: usize) -> MatrixResult<()> {
    if col >= cols {
        return Err(MatrixError::ColOutOfRange { index: col, cols });
    }
    Ok(())
}

// ── Snapshot ────────────────────────────────────────────────────────

/// Owned copy of one matrix row.
#[derive(Debug, Clone, PartialEq)]
pub struct RowSnapshot<T> {
    index: usize,
    values: Vec<T>,
}

impl<T: Copy> RowSnapshot<T> {
    /// Row index this snapshot was taken from.
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Bounds-checked copy of column `col`.
    pub fn get(&self, col: usize) -> MatrixResult<T> {
        check_col(col, self.values.len())?;
        Ok(self.values[col])
    }

    pub fn as_slice(&self) -> &[T] {
        &self.values
    }

    pub fn iter(&self) -> core::slice::Iter<'_, T> {
        self.values.iter()
    }

    pub fn into_vec(self) -> Vec<T> {
        self.values
    }
}

impl<T> Index<usize> for RowSnapshot<T> {
    type Output = T;

    fn index(&self, col: usize) -> &T {
        if let Err(e) = check_col(col, self.values.len()) {
            panic!("{e}");
        }
        &self.values[col]
    }
}

impl<T: PartialEq> PartialEq<[T]> for RowSnapshot<T> {
    fn eq(&self, other: &[T]) -> bool {
        self.values == other
    }
}

impl<T: PartialEq> PartialEq<&[T]> for RowSnapshot<T> {
    fn eq(&self, other: &&[T]) -> bool {
        self.values == *other
    }
}

impl<T: PartialEq, const N: usize> PartialEq<[T; N]> for RowSnapshot<T> {
    fn eq(&self, other: &[T; N]) -> bool {
        self.values == other
    }
}

impl<T: fmt::Display> fmt::Display for RowSnapshot<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_values(f, &self.values)
    }
}

// ── Live view ───────────────────────────────────────────────────────

/// Mutable borrow of one matrix row.
///
/// ```
/// use mtl::matrix;
/// let mut m = matrix![[1, 2], [3, 4]];
/// {
///     let mut row = m.row_mut(1).unwrap();
///     row.set(0, 30).unwrap();
///     row[1] = 40;
/// }
/// assert_eq!(m, matrix![[1, 2], [30, 40]]);
/// ```
#[derive(Debug)]
pub struct RowView<'a, T> {
    index: usize,
    values: &'a mut [T],
}

impl<'a, T: Copy> RowView<'a, T> {
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Bounds-checked copy of column `col`.
    pub fn get(&self, col: usize) -> MatrixResult<T> {
        check_col(col, self.values.len())?;
        Ok(self.values[col])
    }

    pub fn get_mut(&mut self, col: usize) -> MatrixResult<&mut T> {
        check_col(col, self.values.len())?;
        Ok(&mut self.values[col])
    }

    /// Write `value` into column `col` of the matrix.
    pub fn set(&mut self, col: usize, value: T) -> MatrixResult<()> {
        *self.get_mut(col)? = value;
        Ok(())
    }

    /// Overwrite the whole row. `values` must be exactly as long as the row.
    pub fn assign(&mut self, values: &[T]) -> MatrixResult<()> {
        if values.len() != self.values.len() {
            return Err(MatrixError::RowLength {
                expected: self.values.len(),
                got: values.len(),
            });
        }
        self.values.copy_from_slice(values);
        Ok(())
    }

    /// Owned copy of the current row values.
    pub fn snapshot(&self) -> RowSnapshot<T> {
        RowSnapshot {
            index: self.index,
            values: self.values.to_vec(),
        }
    }

    pub fn as_slice(&self) -> &[T] {
        &*self.values
    }

    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut *self.values
    }
}

impl<T> Index<usize> for RowView<'_, T> {
    type Output = T;

    fn index(&self, col: usize) -> &T {
        if let Err(e) = check_col(col, self.values.len()) {
            panic!("{e}");
        }
        &self.values[col]
    }
}

impl<T> IndexMut<usize> for RowView<'_, T> {
    fn index_mut(&mut self, col: usize) -> &mut T {
        if let Err(e) = check_col(col, self.values.len()) {
            panic!("{e}");
        }
        &mut self.values[col]
    }
}

impl<T: fmt::Display> fmt::Display for RowView<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_values(f, &*self.values)
    }
}

// ── Matrix entry points ─────────────────────────────────────────────

impl<T: Copy, const I: usize, const J: usize> Matrix<T, I, J> {
    /// Owned copy of row `r`.
    ///
    /// ```
    /// use mtl::{matrix, ErrorKind};
    /// let m = matrix![[1, 2], [3, 4]];
    /// assert_eq!(m.row(1).unwrap(), [3, 4]);
    /// assert_eq!(m.row(2).unwrap_err().kind(), ErrorKind::OutOfRange);
    /// ```
    pub fn row(&self, r: usize) -> MatrixResult<RowSnapshot<T>> {
        self.storage.check_row(r)?;
        Ok(RowSnapshot {
            index: r,
            values: self.storage.row_slice(r).to_vec(),
        })
    }

    /// Live, writable view of row `r`.
    pub fn row_mut(&mut self, r: usize) -> MatrixResult<RowView<'_, T>> {
        self.storage.check_row(r)?;
        Ok(RowView {
            index: r,
            values: self.storage.row_slice_mut(r),
        })
    }
}
