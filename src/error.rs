use thiserror::Error;

/// Broad category of a [`MatrixError`].
///
/// Lets callers match on the class of failure without enumerating every
/// variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A row or column index beyond the logical shape.
    OutOfRange,
    /// Malformed input length (initializer lists, row assignment, vectors).
    InvalidArgument,
    /// Shape incompatibility between operands, or a non-square matrix
    /// where a square one is required.
    Logic,
}

/// Errors raised by matrix construction, access, and arithmetic.
///
/// ```
/// use mtl::{matrix, ErrorKind, MatrixError};
///
/// let m = matrix![[1, 2], [3, 4]];
/// let err = m.at(2, 0).unwrap_err();
/// assert_eq!(err, MatrixError::RowOutOfRange { index: 2, rows: 2 });
/// assert_eq!(err.kind(), ErrorKind::OutOfRange);
/// ```
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatrixError {
    #[error("row index {index} out of range for matrix with {rows} rows")]
    RowOutOfRange { index: usize, rows: usize },

    #[error("column index {index} out of range for matrix with {cols} columns")]
    ColOutOfRange { index: usize, cols: usize },

    #[error("cannot initialize {rows}x{cols} matrix with incorrect number of elements ({got})")]
    ElementCount { rows: usize, cols: usize, got: usize },

    #[error("row assignment expects {expected} values, got {got}")]
    RowLength { expected: usize, got: usize },

    #[error("vector of length {got} cannot multiply a matrix with {expected} columns")]
    VectorLength { expected: usize, got: usize },

    #[error("dimension mismatch in {op}: {}x{} and {}x{}", .lhs.0, .lhs.1, .rhs.0, .rhs.1)]
    DimensionMismatch {
        op: &'static str,
        lhs: (usize, usize),
        rhs: (usize, usize),
    },

    #[error("{op} requires a square matrix, got {rows}x{cols}")]
    NotSquare {
        op: &'static str,
        rows: usize,
        cols: usize,
    },
}

impl MatrixError {
    /// The category this error belongs to.
    pub fn kind(&self) -> ErrorKind {
        match self {
            MatrixError::RowOutOfRange { .. } | MatrixError::ColOutOfRange { .. } => {
                ErrorKind::OutOfRange
            }
            MatrixError::ElementCount { .. }
            | MatrixError::RowLength { .. }
            | MatrixError::VectorLength { .. } => ErrorKind::InvalidArgument,
            MatrixError::DimensionMismatch { .. } | MatrixError::NotSquare { .. } => {
                ErrorKind::Logic
            }
        }
    }
}

pub type MatrixResult<T> = Result<T, MatrixError>;

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn kinds() {
        assert_eq!(
            MatrixError::ColOutOfRange { index: 3, cols: 3 }.kind(),
            ErrorKind::OutOfRange
        );
        assert_eq!(
            MatrixError::RowLength { expected: 2, got: 3 }.kind(),
            ErrorKind::InvalidArgument
        );
        assert_eq!(
            MatrixError::NotSquare { op: "determinant", rows: 2, cols: 3 }.kind(),
            ErrorKind::Logic
        );
    }

    #[test]
    fn messages() {
        let err = MatrixError::DimensionMismatch {
            op: "addition",
            lhs: (2, 3),
            rhs: (3, 2),
        };
        assert_eq!(err.to_string(), "dimension mismatch in addition: 2x3 and 3x2");

        let err = MatrixError::ElementCount { rows: 2, cols: 2, got: 3 };
        assert!(err.to_string().contains("incorrect number of elements"));
    }
}
