use core::fmt::Debug;
use num_traits::{Float, Num, One, Zero};

use crate::linalg;

/// Trait for types that can be used as matrix elements.
///
/// Implemented for every primitive numeric type: `i8`..`i128`, `isize`,
/// `u8`..`u128`, `usize`, `f32` and `f64`.
///
/// The determinant kernel is selected here, per element type: signed
/// integers use cofactor expansion, unsigned integers the same expansion
/// modulo `2^bits`, floats Gaussian elimination with partial pivoting.
pub trait Scalar: Copy + PartialEq + PartialOrd + Debug + Zero + One + Num + 'static {
    /// Determinant of a square matrix-like value.
    ///
    /// Callers must check squareness first; [`Matrix::determinant`] does.
    ///
    /// [`Matrix::determinant`]: crate::Matrix::determinant
    fn determinant(m: &impl MatrixRef<Self>) -> Self {
        linalg::cofactor::det(m)
    }
}

/// Trait for floating-point matrix elements.
///
/// Required by the elimination kernel (`abs`, `round`, division).
pub trait FloatScalar: Scalar + Float {}

impl<T: Scalar + Float> FloatScalar for T {}

macro_rules! impl_scalar_exact {
    ($($t:ty),*) => {
        $(
            impl Scalar for $t {}
        )*
    };
}

impl_scalar_exact!(i8, i16, i32, i64, i128, isize);

macro_rules! impl_scalar_unsigned {
    ($($t:ty),*) => {
        $(
            impl Scalar for $t {
                #[inline]
                fn determinant(m: &impl MatrixRef<$t>) -> $t {
                    linalg::cofactor::det_wrapping(m)
                }
            }
        )*
    };
}

impl_scalar_unsigned!(u8, u16, u32, u64, u128, usize);

macro_rules! impl_scalar_float {
    ($($t:ty),*) => {
        $(
            impl Scalar for $t {
                #[inline]
                fn determinant(m: &impl MatrixRef<$t>) -> $t {
                    linalg::gauss::det(m)
                }
            }
        )*
    };
}

impl_scalar_float!(f32, f64);

/// Read-only access to a matrix-like type.
///
/// Lets the determinant kernels operate over both [`Matrix`] and the
/// scratch [`Storage`] buffers they build minors in. Indices are
/// unchecked at this level; out-of-range access panics.
///
/// [`Matrix`]: crate::Matrix
/// [`Storage`]: crate::Storage
pub trait MatrixRef<T> {
    fn nrows(&self) -> usize;
    fn ncols(&self) -> usize;
    fn get(&self, row: usize, col: usize) -> &T;
}

/// Mutable access to a matrix-like type.
pub trait MatrixMut<T>: MatrixRef<T> {
    fn get_mut(&mut self, row: usize, col: usize) -> &mut T;

    /// Swap two rows in place.
    fn swap_rows(&mut self, a: usize, b: usize);
}
