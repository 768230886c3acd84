use num_traits::{WrappingAdd, WrappingMul, WrappingSub};

use crate::traits::{MatrixMut, MatrixRef, Scalar};
use crate::Storage;

/// Element arithmetic used by the expansion.
trait Arith<T> {
    fn add(x: T, y: T) -> T;
    fn sub(x: T, y: T) -> T;
    fn mul(x: T, y: T) -> T;
}

/// Plain operators; overflow panics in debug builds.
enum Exact {}

impl<T: Scalar> Arith<T> for Exact {
    #[inline]
    fn add(x: T, y: T) -> T {
        x + y
    }

    #[inline]
    fn sub(x: T, y: T) -> T {
        x - y
    }

    #[inline]
    fn mul(x: T, y: T) -> T {
        x * y
    }
}

/// Modular arithmetic, for unsigned element types.
enum Wrapped {}

impl<T: Scalar + WrappingAdd + WrappingSub + WrappingMul> Arith<T> for Wrapped {
    #[inline]
    fn add(x: T, y: T) -> T {
        x.wrapping_add(&y)
    }

    #[inline]
    fn sub(x: T, y: T) -> T {
        x.wrapping_sub(&y)
    }

    #[inline]
    fn mul(x: T, y: T) -> T {
        x.wrapping_mul(&y)
    }
}

/// Determinant by recursive cofactor expansion along the first row.
///
/// Exact for integer element types. The 1x1 and 2x2 cases use closed
/// forms; the empty matrix has determinant `1`.
pub fn det<T: Scalar>(a: &impl MatrixRef<T>) -> T {
    expand::<T, Exact>(a)
}

/// Cofactor expansion modulo `2^bits`.
///
/// Unsigned element types use this: negative intermediate minors wrap
/// around instead of overflowing, and the result is the true determinant
/// whenever that fits in `T`.
pub fn det_wrapping<T>(a: &impl MatrixRef<T>) -> T
where
    T: Scalar + WrappingAdd + WrappingSub + WrappingMul,
{
    expand::<T, Wrapped>(a)
}

fn expand<T: Scalar, A: Arith<T>>(a: &impl MatrixRef<T>) -> T {
    let n = a.nrows();
    debug_assert_eq!(n, a.ncols(), "cofactor expansion requires a square matrix");

    match n {
        0 => T::one(),
        1 => *a.get(0, 0),
        2 => A::sub(
            A::mul(*a.get(0, 0), *a.get(1, 1)),
            A::mul(*a.get(0, 1), *a.get(1, 0)),
        ),
        _ => {
            let mut minor = Storage::allocate(n - 1, n - 1);
            let mut acc = T::zero();
            for m in 0..n {
                fill_minor(a, m, &mut minor);
                let term = A::mul(*a.get(0, m), expand::<T, A>(&minor));
                // Cofactor sign alternates along row 0
                acc = if m % 2 == 0 {
                    A::add(acc, term)
                } else {
                    A::sub(acc, term)
                };
            }
            acc
        }
    }
}

/// Copy `a` without row 0 and column `skip_col` into `minor`.
fn fill_minor<T: Copy>(a: &impl MatrixRef<T>, skip_col: usize, minor: &mut impl MatrixMut<T>) {
    let n = a.nrows();
    for row in 1..n {
        let mut mj = 0;
        for col in 0..n {
            if col == skip_col {
                continue;
            }
            *minor.get_mut(row - 1, mj) = *a.get(row, col);
            mj += 1;
        }
    }
}
