//! Pre-defined type aliases for common matrix shapes.

use crate::Matrix;

// ── Square ─────────────────────────────────────────────────────────

/// 1×1 matrix.
pub type Matrix1<T> = Matrix<T, 1, 1>;
/// 2×2 matrix.
pub type Matrix2<T> = Matrix<T, 2, 2>;
/// 3×3 matrix.
pub type Matrix3<T> = Matrix<T, 3, 3>;
/// 4×4 matrix.
pub type Matrix4<T> = Matrix<T, 4, 4>;

// ── Rectangular ────────────────────────────────────────────────────

/// 2×3 matrix.
pub type Matrix2x3<T> = Matrix<T, 2, 3>;
/// 3×2 matrix.
pub type Matrix3x2<T> = Matrix<T, 3, 2>;
/// 3×4 matrix.
pub type Matrix3x4<T> = Matrix<T, 3, 4>;
/// 4×3 matrix.
pub type Matrix4x3<T> = Matrix<T, 4, 3>;

// ── Row and column shapes ──────────────────────────────────────────

/// 1×N row matrix.
pub type RowMatrix<T, const N: usize> = Matrix<T, 1, N>;
/// N×1 column matrix, the shape produced by a vector product.
pub type ColumnMatrix<T, const N: usize> = Matrix<T, N, 1>;
