//! Row-major traversal over the logical buffer.
//!
//! Both iterators carry a `(row, col)` cursor. Advancing wraps from the
//! last column to the next row; once exhausted the cursor sits at
//! `(rows, 0)`, matching [`Matrix::end_position`].

use core::fmt;
use core::iter::FusedIterator;
use core::ptr;
use core::slice;

use crate::storage::Storage;
use crate::Matrix;

#[inline]
fn cursor(idx: usize, rows: usize, cols: usize) -> (usize, usize) {
    if cols == 0 {
        (rows, 0)
    } else {
        (idx / cols, idx % cols)
    }
}

/// Immutable row-major iterator over a matrix.
///
/// Double-ended: `.rev()` walks from the last cell of the last row.
pub struct Iter<'a, T> {
    storage: &'a Storage<T>,
    front: usize,
    back: usize,
}

impl<'a, T> Iter<'a, T> {
    fn new(storage: &'a Storage<T>) -> Self {
        Self {
            storage,
            front: 0,
            back: storage.as_slice().len(),
        }
    }

    /// `(row, col)` of the next element, or `(rows, 0)` once exhausted.
    pub fn position(&self) -> (usize, usize) {
        if self.front >= self.back {
            return (self.storage.rows(), 0);
        }
        cursor(self.front, self.storage.rows(), self.storage.cols())
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<&'a T> {
        if self.front >= self.back {
            return None;
        }
        let storage: &'a Storage<T> = self.storage;
        let item = &storage.as_slice()[self.front];
        self.front += 1;
        Some(item)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.back - self.front;
        (n, Some(n))
    }
}

impl<'a, T> DoubleEndedIterator for Iter<'a, T> {
    #[inline]
    fn next_back(&mut self) -> Option<&'a T> {
        if self.front >= self.back {
            return None;
        }
        self.back -= 1;
        let storage: &'a Storage<T> = self.storage;
        Some(&storage.as_slice()[self.back])
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self {
            storage: self.storage,
            front: self.front,
            back: self.back,
        }
    }
}

/// Two iterators are equal when they walk the same matrix and sit at the
/// same cursor position.
impl<T> PartialEq for Iter<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        ptr::eq(self.storage, other.storage) && self.position() == other.position()
    }
}

impl<T> fmt::Debug for Iter<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Iter")
            .field("position", &self.position())
            .field("remaining", &(self.back - self.front))
            .finish()
    }
}

/// Mutable row-major iterator over a matrix.
pub struct IterMut<'a, T> {
    inner: slice::IterMut<'a, T>,
    rows: usize,
    cols: usize,
    front: usize,
}

impl<'a, T> IterMut<'a, T> {
    fn new(storage: &'a mut Storage<T>) -> Self {
        let (rows, cols) = storage.shape();
        Self {
            inner: storage.as_mut_slice().iter_mut(),
            rows,
            cols,
            front: 0,
        }
    }

    /// `(row, col)` of the next element, or `(rows, 0)` once exhausted.
    pub fn position(&self) -> (usize, usize) {
        if self.inner.len() == 0 {
            return (self.rows, 0);
        }
        cursor(self.front, self.rows, self.cols)
    }
}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    #[inline]
    fn next(&mut self) -> Option<&'a mut T> {
        let item = self.inner.next()?;
        self.front += 1;
        Some(item)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<'a, T> DoubleEndedIterator for IterMut<'a, T> {
    #[inline]
    fn next_back(&mut self) -> Option<&'a mut T> {
        self.inner.next_back()
    }
}

impl<T> ExactSizeIterator for IterMut<'_, T> {}

impl<T> FusedIterator for IterMut<'_, T> {}

// ── Matrix entry points ─────────────────────────────────────────────

impl<T, const I: usize, const J: usize> Matrix<T, I, J> {
    /// Iterate over all elements in row-major order.
    ///
    /// ```
    /// use mtl::matrix;
    /// let m = matrix![[1, 2], [3, 4]];
    /// let v: Vec<i32> = m.iter().copied().collect();
    /// assert_eq!(v, [1, 2, 3, 4]);
    /// ```
    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(&self.storage)
    }

    /// Iterate mutably over all elements in row-major order.
    #[inline]
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut::new(&mut self.storage)
    }

    /// Cursor position of an exhausted iterator: `(rows, 0)`.
    #[inline]
    pub fn end_position(&self) -> (usize, usize) {
        (self.storage.rows(), 0)
    }
}

impl<'a, T, const I: usize, const J: usize> IntoIterator for &'a Matrix<T, I, J> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T, const I: usize, const J: usize> IntoIterator for &'a mut Matrix<T, I, J> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    #[test]
    fn row_major_order() {
        let m = Matrix::new([[1, 2, 3], [4, 5, 6]]);
        let v: Vec<i32> = m.iter().copied().collect();
        assert_eq!(v, [1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn cursor_wraps_rows() {
        let m = Matrix::new([[1, 2], [3, 4]]);
        let mut it = m.iter();
        assert_eq!(it.position(), (0, 0));
        it.next();
        assert_eq!(it.position(), (0, 1));
        it.next();
        assert_eq!(it.position(), (1, 0));
        it.next();
        it.next();
        assert_eq!(it.position(), m.end_position());
        assert_eq!(it.position(), (2, 0));
        assert_eq!(it.next(), None);
    }

    #[test]
    fn iterator_equality() {
        let a = Matrix::new([[1, 2], [3, 4]]);
        let b = a.clone();

        let mut x = a.iter();
        let y = a.iter();
        assert!(x == y);
        x.next();
        assert!(x != y);

        // Same position, different matrix
        assert!(a.iter() != b.iter());
    }

    #[test]
    fn follows_logical_shape_after_reallocate() {
        let mut m: Matrix<i32, 2, 2> = Matrix::zeros();
        m.reallocate(3, 3);
        assert_eq!(m.iter().count(), 9);
        assert_eq!(m.end_position(), (3, 0));
    }

    #[test]
    fn reverse() {
        let m = Matrix::new([[1, 2], [3, 4]]);
        let v: Vec<i32> = m.iter().rev().copied().collect();
        assert_eq!(v, [4, 3, 2, 1]);
    }

    #[test]
    fn meet_in_the_middle() {
        let m = Matrix::new([[1, 2, 3]]);
        let mut it = m.iter();
        assert_eq!(it.next(), Some(&1));
        assert_eq!(it.next_back(), Some(&3));
        assert_eq!(it.len(), 1);
        assert_eq!(it.next(), Some(&2));
        assert_eq!(it.next_back(), None);
        assert_eq!(it.position(), (1, 0));
    }

    #[test]
    fn algorithms() {
        let m = Matrix::new([[1, 2], [3, 4]]);
        let sum: i32 = m.iter().sum();
        assert_eq!(sum, 10);
        let product = m.iter().fold(1, |acc, &x| acc * x);
        assert_eq!(product, 24);
        assert_eq!(m.iter().max(), Some(&4));
    }

    #[test]
    fn for_loops() {
        let mut m = Matrix::new([[1, 2], [3, 4]]);
        for x in &mut m {
            *x += 10;
        }
        let mut sum = 0;
        for &x in &m {
            sum += x;
        }
        assert_eq!(sum, 50);
    }

    #[test]
    fn iter_mut_cursor() {
        let mut m: Matrix<i32, 2, 3> = Matrix::zeros();
        let mut it = m.iter_mut();
        for _ in 0..4 {
            it.next();
        }
        assert_eq!(it.position(), (1, 1));
        it.next();
        it.next();
        assert_eq!(it.position(), (2, 0));
    }

    #[test]
    fn empty_matrix() {
        let mut m = Matrix::new([[1, 2]]);
        let _ = m.take();
        assert_eq!(m.iter().next(), None);
        assert_eq!(m.iter().position(), (0, 0));
    }
}
