use alloc::vec::Vec;
use core::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use log::debug;

use crate::error::{MatrixError, MatrixResult};
use crate::storage::Storage;
use crate::traits::{MatrixRef, Scalar};
use crate::Matrix;

/// `DimensionMismatch` unless both operands have the same logical shape.
fn check_same_shape(
    op: &'static str,
    lhs: (usize, usize),
    rhs: (usize, usize),
) -> MatrixResult<()> {
    if lhs != rhs {
        return Err(MatrixError::DimensionMismatch { op, lhs, rhs });
    }
    Ok(())
}

/// Row-major product buffer of `a * b`. Inner dimensions must agree.
fn product<T: Scalar>(a: &impl MatrixRef<T>, b: &impl MatrixRef<T>) -> Storage<T> {
    let (m, n, p) = (a.nrows(), a.ncols(), b.ncols());
    let mut data = Vec::with_capacity(m * p);
    for i in 0..m {
        for j in 0..p {
            let mut sum = T::zero();
            for k in 0..n {
                sum = sum + *a.get(i, k) * *b.get(k, j);
            }
            data.push(sum);
        }
    }
    Storage::from_vec(m, p, data)
}

// ── Fallible in-place arithmetic ────────────────────────────────────

impl<T: Scalar, const I: usize, const J: usize> Matrix<T, I, J> {
    /// Element-wise `self += rhs`.
    ///
    /// Both logical shapes must be equal; declared shapes may differ.
    ///
    /// ```
    /// use mtl::{matrix, ErrorKind, Matrix};
    /// let mut a = matrix![[1, 2], [3, 4]];
    /// a.try_add_assign(&matrix![[10, 10], [10, 10]]).unwrap();
    /// assert_eq!(a, matrix![[11, 12], [13, 14]]);
    ///
    /// let b: Matrix<i32, 3, 3> = Matrix::zeros();
    /// assert_eq!(a.try_add_assign(&b).unwrap_err().kind(), ErrorKind::Logic);
    /// ```
    pub fn try_add_assign<const A: usize, const B: usize>(
        &mut self,
        rhs: &Matrix<T, A, B>,
    ) -> MatrixResult<()> {
        check_same_shape("addition", self.size(), rhs.size())?;
        for (x, &y) in self.iter_mut().zip(rhs.iter()) {
            *x = *x + y;
        }
        Ok(())
    }

    /// Element-wise `self -= rhs`. Same shape rules as
    /// [`try_add_assign`](Matrix::try_add_assign).
    pub fn try_sub_assign<const A: usize, const B: usize>(
        &mut self,
        rhs: &Matrix<T, A, B>,
    ) -> MatrixResult<()> {
        check_same_shape("subtraction", self.size(), rhs.size())?;
        for (x, &y) in self.iter_mut().zip(rhs.iter()) {
            *x = *x - y;
        }
        Ok(())
    }

    /// Matrix product `self = self * rhs`.
    ///
    /// Requires `self.col_size() == rhs.row_size()`. The logical shape
    /// becomes `(self.row_size(), rhs.col_size())`; when that differs from
    /// the current shape the storage is reallocated and
    /// [`is_reallocated`](Matrix::is_reallocated) turns true.
    ///
    /// ```
    /// use mtl::matrix;
    /// let mut a = matrix![[1, 2, 3], [4, 5, 6]];
    /// a.try_mul_assign(&matrix![[1], [1], [1]]).unwrap();
    /// assert_eq!(a.size(), (2, 1));
    /// assert_eq!(a.underlying_array(), &[6, 15]);
    /// ```
    pub fn try_mul_assign<const A: usize, const B: usize>(
        &mut self,
        rhs: &Matrix<T, A, B>,
    ) -> MatrixResult<()> {
        if self.col_size() != rhs.row_size() {
            return Err(MatrixError::DimensionMismatch {
                op: "multiplication",
                lhs: self.size(),
                rhs: rhs.size(),
            });
        }
        let out = product(&*self, rhs);
        if out.shape() == self.size() {
            self.storage.as_mut_slice().copy_from_slice(out.as_slice());
        } else {
            debug!(
                "product changes shape {}x{} -> {}x{}",
                self.row_size(),
                self.col_size(),
                out.rows(),
                out.cols()
            );
            self.storage = out;
            self.storage.mark_resized();
        }
        Ok(())
    }

    /// Value-returning `self + rhs`.
    pub fn checked_add<const A: usize, const B: usize>(
        &self,
        rhs: &Matrix<T, A, B>,
    ) -> MatrixResult<Self> {
        let mut out = self.clone();
        out.try_add_assign(rhs)?;
        Ok(out)
    }

    /// Value-returning `self - rhs`.
    pub fn checked_sub<const A: usize, const B: usize>(
        &self,
        rhs: &Matrix<T, A, B>,
    ) -> MatrixResult<Self> {
        let mut out = self.clone();
        out.try_sub_assign(rhs)?;
        Ok(out)
    }

    /// Value-returning `self * rhs`, declared as `I x B`.
    pub fn checked_mul<const A: usize, const B: usize>(
        &self,
        rhs: &Matrix<T, A, B>,
    ) -> MatrixResult<Matrix<T, I, B>> {
        if self.col_size() != rhs.row_size() {
            return Err(MatrixError::DimensionMismatch {
                op: "multiplication",
                lhs: self.size(),
                rhs: rhs.size(),
            });
        }
        Ok(Matrix::from_storage(product(self, rhs)))
    }

    /// Matrix-vector product: `out[i] = Σ_j self[(i, j)] * v[j]`.
    ///
    /// ```
    /// use mtl::matrix;
    /// let a = matrix![[1, 2, 3], [4, 5, 6]];
    /// assert_eq!(a.vecmul(&[7, 8, 9]).unwrap(), vec![50, 122]);
    /// assert!(a.vecmul(&[1, 2]).is_err());
    /// ```
    pub fn vecmul(&self, v: &[T]) -> MatrixResult<Vec<T>> {
        let (rows, cols) = self.size();
        if v.len() != cols {
            return Err(MatrixError::VectorLength {
                expected: cols,
                got: v.len(),
            });
        }
        let mut out = Vec::with_capacity(rows);
        for r in 0..rows {
            let mut sum = T::zero();
            for (&a, &b) in self.storage.row_slice(r).iter().zip(v) {
                sum = sum + a * b;
            }
            out.push(sum);
        }
        Ok(out)
    }

    /// Replace `self` with the column `self * v`, of shape `(rows, 1)`.
    pub fn try_mul_assign_vector(&mut self, v: &[T]) -> MatrixResult<()> {
        let out = self.vecmul(v)?;
        let rows = out.len();
        if (rows, 1) != self.size() {
            debug!(
                "vector product changes shape {}x{} -> {}x1",
                self.row_size(),
                self.col_size(),
                rows
            );
        }
        self.storage = Storage::from_vec(rows, 1, out);
        self.storage.mark_resized();
        Ok(())
    }

    /// Transpose: logical `(rows, cols)` → `(cols, rows)`.
    ///
    /// ```
    /// use mtl::matrix;
    /// let a = matrix![[1, 2, 3], [4, 5, 6]];
    /// let t = a.transpose();
    /// assert_eq!(t.size(), (3, 2));
    /// assert_eq!(t[(2, 1)], 6);
    /// assert_eq!(t.transpose(), a);
    /// ```
    pub fn transpose(&self) -> Matrix<T, J, I> {
        let (rows, cols) = self.size();
        let mut data = Vec::with_capacity(rows * cols);
        for j in 0..cols {
            for i in 0..rows {
                data.push(*MatrixRef::get(self, i, j));
            }
        }
        Matrix::from_storage(Storage::from_vec(cols, rows, data))
    }
}

// ── Operator wrappers ───────────────────────────────────────────────
// Panic with the `MatrixError` message on shape mismatch.

impl<T: Scalar, const I: usize, const J: usize, const A: usize, const B: usize>
    AddAssign<&Matrix<T, A, B>> for Matrix<T, I, J>
{
    fn add_assign(&mut self, rhs: &Matrix<T, A, B>) {
        self.try_add_assign(rhs).unwrap_or_else(|e| panic!("{e}"));
    }
}

impl<T: Scalar, const I: usize, const J: usize, const A: usize, const B: usize>
    SubAssign<&Matrix<T, A, B>> for Matrix<T, I, J>
{
    fn sub_assign(&mut self, rhs: &Matrix<T, A, B>) {
        self.try_sub_assign(rhs).unwrap_or_else(|e| panic!("{e}"));
    }
}

impl<T: Scalar, const I: usize, const J: usize, const A: usize, const B: usize>
    MulAssign<&Matrix<T, A, B>> for Matrix<T, I, J>
{
    fn mul_assign(&mut self, rhs: &Matrix<T, A, B>) {
        self.try_mul_assign(rhs).unwrap_or_else(|e| panic!("{e}"));
    }
}

macro_rules! forward_owned_assign {
    ($Op:ident, $method:ident) => {
        impl<T: Scalar, const I: usize, const J: usize, const A: usize, const B: usize>
            $Op<Matrix<T, A, B>> for Matrix<T, I, J>
        {
            fn $method(&mut self, rhs: Matrix<T, A, B>) {
                self.$method(&rhs);
            }
        }
    };
}

forward_owned_assign!(AddAssign, add_assign);
forward_owned_assign!(SubAssign, sub_assign);
forward_owned_assign!(MulAssign, mul_assign);

// Binary forms clone the left operand and delegate to the checked
// methods; operands are never mutated.

macro_rules! forward_ref_binop {
    ($Op:ident, $method:ident, $checked:ident) => {
        impl<T: Scalar, const I: usize, const J: usize, const A: usize, const B: usize>
            $Op<&Matrix<T, A, B>> for &Matrix<T, I, J>
        {
            type Output = Matrix<T, I, J>;
            fn $method(self, rhs: &Matrix<T, A, B>) -> Matrix<T, I, J> {
                self.$checked(rhs).unwrap_or_else(|e| panic!("{e}"))
            }
        }

        impl<T: Scalar, const I: usize, const J: usize, const A: usize, const B: usize>
            $Op<Matrix<T, A, B>> for &Matrix<T, I, J>
        {
            type Output = Matrix<T, I, J>;
            fn $method(self, rhs: Matrix<T, A, B>) -> Matrix<T, I, J> {
                self.$method(&rhs)
            }
        }

        impl<T: Scalar, const I: usize, const J: usize, const A: usize, const B: usize>
            $Op<&Matrix<T, A, B>> for Matrix<T, I, J>
        {
            type Output = Matrix<T, I, J>;
            fn $method(self, rhs: &Matrix<T, A, B>) -> Matrix<T, I, J> {
                (&self).$method(rhs)
            }
        }

        impl<T: Scalar, const I: usize, const J: usize, const A: usize, const B: usize>
            $Op<Matrix<T, A, B>> for Matrix<T, I, J>
        {
            type Output = Matrix<T, I, J>;
            fn $method(self, rhs: Matrix<T, A, B>) -> Matrix<T, I, J> {
                (&self).$method(&rhs)
            }
        }
    };
}

forward_ref_binop!(Add, add, checked_add);
forward_ref_binop!(Sub, sub, checked_sub);

// ── Matrix multiplication: (I×A) * (A×B) → (I×B) ───────────────────

impl<T: Scalar, const I: usize, const J: usize, const A: usize, const B: usize>
    Mul<&Matrix<T, A, B>> for &Matrix<T, I, J>
{
    type Output = Matrix<T, I, B>;
    fn mul(self, rhs: &Matrix<T, A, B>) -> Matrix<T, I, B> {
        self.checked_mul(rhs).unwrap_or_else(|e| panic!("{e}"))
    }
}

impl<T: Scalar, const I: usize, const J: usize, const A: usize, const B: usize>
    Mul<Matrix<T, A, B>> for &Matrix<T, I, J>
{
    type Output = Matrix<T, I, B>;
    fn mul(self, rhs: Matrix<T, A, B>) -> Matrix<T, I, B> {
        self.mul(&rhs)
    }
}

impl<T: Scalar, const I: usize, const J: usize, const A: usize, const B: usize>
    Mul<&Matrix<T, A, B>> for Matrix<T, I, J>
{
    type Output = Matrix<T, I, B>;
    fn mul(self, rhs: &Matrix<T, A, B>) -> Matrix<T, I, B> {
        (&self).mul(rhs)
    }
}

impl<T: Scalar, const I: usize, const J: usize, const A: usize, const B: usize>
    Mul<Matrix<T, A, B>> for Matrix<T, I, J>
{
    type Output = Matrix<T, I, B>;
    fn mul(self, rhs: Matrix<T, A, B>) -> Matrix<T, I, B> {
        (&self).mul(&rhs)
    }
}

// ── Scalar multiplication ───────────────────────────────────────────

impl<T: Scalar, const I: usize, const J: usize> MulAssign<T> for Matrix<T, I, J> {
    fn mul_assign(&mut self, rhs: T) {
        for x in self.iter_mut() {
            *x = *x * rhs;
        }
    }
}

impl<T: Scalar, const I: usize, const J: usize> Mul<T> for Matrix<T, I, J> {
    type Output = Self;

    fn mul(mut self, rhs: T) -> Self {
        self *= rhs;
        self
    }
}

impl<T: Scalar, const I: usize, const J: usize> Mul<T> for &Matrix<T, I, J> {
    type Output = Matrix<T, I, J>;
    fn mul(self, rhs: T) -> Matrix<T, I, J> {
        self.clone().mul(rhs)
    }
}

// scalar * matrix (concrete impls to avoid orphan rules)
macro_rules! impl_scalar_mul {
    ($($t:ty),*) => {
        $(
            impl<const I: usize, const J: usize> Mul<Matrix<$t, I, J>> for $t {
                type Output = Matrix<$t, I, J>;

                fn mul(self, rhs: Matrix<$t, I, J>) -> Matrix<$t, I, J> {
                    rhs * self
                }
            }

            impl<const I: usize, const J: usize> Mul<&Matrix<$t, I, J>> for $t {
                type Output = Matrix<$t, I, J>;

                fn mul(self, rhs: &Matrix<$t, I, J>) -> Matrix<$t, I, J> {
                    rhs * self
                }
            }
        )*
    };
}

impl_scalar_mul!(f32, f64, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

// ── Negation ────────────────────────────────────────────────────────

impl<T: Scalar + Neg<Output = T>, const I: usize, const J: usize> Neg for Matrix<T, I, J> {
    type Output = Self;

    fn neg(mut self) -> Self {
        for x in self.iter_mut() {
            *x = -*x;
        }
        self
    }
}

impl<T: Scalar + Neg<Output = T>, const I: usize, const J: usize> Neg for &Matrix<T, I, J> {
    type Output = Matrix<T, I, J>;

    fn neg(self) -> Matrix<T, I, J> {
        self.clone().neg()
    }
}
