use log::trace;
use num_traits::Float;

use crate::traits::{FloatScalar, MatrixMut, MatrixRef};

/// Number of decimal digits the floating-point determinant is rounded to.
///
/// Elimination leaves noise in the last bits (`-2.0000000000000004`);
/// rounding brings exact-valued inputs back to exact results.
pub const DET_DECIMALS: i32 = 5;

/// Determinant by Gaussian elimination with partial pivoting.
///
/// Works on a scratch copy of `a`. The result is rounded to
/// [`DET_DECIMALS`] decimal digits.
pub fn det<T: FloatScalar>(a: &impl MatrixRef<T>) -> T {
    let mut scratch = super::to_storage(a);
    round_to(eliminate(&mut scratch), DET_DECIMALS)
}

/// Reduce `a` to upper-triangular form in place and return the product of
/// its pivots, with one sign flip per row swap.
///
/// Returns zero as soon as a column has no nonzero pivot candidate.
pub fn eliminate<T: FloatScalar>(a: &mut impl MatrixMut<T>) -> T {
    let n = a.nrows();
    debug_assert_eq!(n, a.ncols(), "elimination requires a square matrix");

    let mut det = T::one();

    for col in 0..n {
        // Partial pivoting: largest magnitude in this column
        let mut max_row = col;
        let mut max_val = a.get(col, col).abs();
        for row in (col + 1)..n {
            let val = a.get(row, col).abs();
            if val > max_val {
                max_val = val;
                max_row = row;
            }
        }

        if max_val == T::zero() {
            trace!("no nonzero pivot in column {col}, matrix is singular");
            return T::zero();
        }

        if max_row != col {
            a.swap_rows(col, max_row);
            det = -det;
        }

        let pivot = *a.get(col, col);
        for row in (col + 1)..n {
            let factor = *a.get(row, col) / pivot;
            for j in (col + 1)..n {
                let val = *a.get(col, j);
                *a.get_mut(row, j) = *a.get(row, j) - factor * val;
            }
            *a.get_mut(row, col) = T::zero();
        }

        det = det * pivot;
    }

    det
}

/// Round `x` to `decimals` decimal digits.
///
/// Values too large to carry fractional bits, and values whose scaled form
/// would overflow, are returned unchanged.
pub(crate) fn round_to<T: Float>(x: T, decimals: i32) -> T {
    if !x.is_finite() || x.abs() >= T::one() / T::epsilon() {
        return x;
    }
    let Some(scale) = T::from(Float::powi(10.0_f64, decimals)) else {
        return x;
    };
    let y = x * scale;
    if !y.is_finite() {
        return x;
    }
    y.round() / scale
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Storage;

    fn storage(n: usize, data: &[f64]) -> Storage<f64> {
        Storage::from_vec(n, n, data.to_vec())
    }

    #[test]
    fn det_2x2() {
        assert_eq!(det(&storage(2, &[2.0, 3.0, 4.0, 5.0])), -2.0);
        assert_eq!(det(&storage(2, &[3.0, 8.0, 4.0, 6.0])), -14.0);
    }

    #[test]
    fn det_3x3() {
        let a = storage(3, &[6.0, 1.0, 1.0, 4.0, -2.0, 5.0, 2.0, 8.0, 7.0]);
        assert_eq!(det(&a), -306.0);
    }

    #[test]
    fn det_needs_pivot_swap() {
        // Zero in the leading position forces a row swap
        let a = storage(3, &[0.0, 1.0, 2.0, 1.0, 0.0, 3.0, 4.0, -3.0, 8.0]);
        assert_eq!(det(&a), -2.0);
    }

    #[test]
    fn singular_column() {
        let a = storage(3, &[0.0, 1.0, 2.0, 0.0, 3.0, 4.0, 0.0, 5.0, 6.0]);
        assert_eq!(det(&a), 0.0);
    }

    #[test]
    fn singular_rows() {
        let a = storage(3, &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0]);
        assert_eq!(det(&a), 0.0);
    }

    #[test]
    fn empty_and_single() {
        assert_eq!(det(&storage(0, &[])), 1.0);
        assert_eq!(det(&storage(1, &[-4.5])), -4.5);
    }

    #[test]
    fn rounding() {
        assert_eq!(round_to(1.234_567_f64, 5), 1.23457);
        assert_eq!(round_to(-2.000_000_000_000_000_4_f64, 5), -2.0);
        assert_eq!(round_to(0.5_f32, 5), 0.5);
    }

    #[test]
    fn rounding_keeps_large_values_finite() {
        assert_eq!(round_to(1e304_f64, 5), 1e304);
        assert_eq!(round_to(-1e34_f32, 5), -1e34);
        assert_eq!(round_to(f64::MAX, 5), f64::MAX);
        assert!(round_to(f64::INFINITY, 5).is_infinite());
        assert!(round_to(f32::NAN, 5).is_nan());
    }

    #[test]
    fn det_large_diagonal() {
        let a = storage(2, &[1e152, 0.0, 0.0, 1e152]);
        let d = det(&a);
        assert!(d.is_finite());
        assert_eq!(d, 1e152 * 1e152);

        let a = Storage::from_vec(2, 2, alloc::vec![1e17_f32, 0.0, 0.0, 1e17]);
        let d = det(&a);
        assert!(d.is_finite());
        assert_eq!(d, 1e17_f32 * 1e17_f32);
    }

    #[test]
    fn eliminate_leaves_upper_triangle() {
        let mut a = storage(2, &[1.0, 2.0, 3.0, 4.0]);
        let d = eliminate(&mut a);
        assert!((d - (-2.0)).abs() < 1e-12);
        assert_eq!(*MatrixRef::get(&a, 1, 0), 0.0);
    }
}
