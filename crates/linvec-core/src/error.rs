//! Error types shared by the vector and matrix containers.

use std::error::Error;
use std::fmt;

use crate::shape::Shape;

/// The arithmetic or construction step that rejected its operands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Op {
    /// Elementwise addition (`+`, `+=`).
    Add,
    /// Dot product of two vectors.
    Dot,
    /// Matrix-matrix multiplication.
    MatMul,
    /// Matrix-vector multiplication.
    MatVec,
    /// Building a matrix from a flat row-major vector.
    FromVector,
}

impl fmt::Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Add => "addition",
            Self::Dot => "dot product",
            Self::MatMul => "matrix multiplication",
            Self::MatVec => "matrix-vector multiplication",
            Self::FromVector => "construction from vector",
        };
        f.write_str(name)
    }
}

/// Errors that can occur when building or combining containers.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LinalgError {
    /// A requested length or dimension does not fit the `u32` range.
    ///
    /// Raised before any allocation is attempted.
    AllocationFailed {
        /// Number of elements (or rows/columns) requested.
        requested: u64,
        /// Largest accepted value.
        limit: u64,
    },
    /// Operand shapes are incompatible for the requested operation.
    DimensionMismatch {
        /// The operation that was attempted.
        op: Op,
        /// Shape of the left-hand operand.
        left: Shape,
        /// Shape of the right-hand operand.
        right: Shape,
    },
    /// Checked element access past the end of a vector.
    OutOfBounds {
        /// The offending index.
        index: usize,
        /// Number of valid elements.
        len: usize,
    },
    /// Checked element access outside a matrix.
    CoordOutOfBounds {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
        /// Shape of the matrix.
        shape: Shape,
    },
}

impl fmt::Display for LinalgError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AllocationFailed { requested, limit } => {
                write!(
                    f,
                    "allocation failed: requested {requested} elements, limit {limit}"
                )
            }
            Self::DimensionMismatch { op, left, right } => {
                write!(f, "dimension mismatch in {op}: {left} vs {right}")
            }
            Self::OutOfBounds { index, len } => {
                write!(f, "index {index} out of bounds for length {len}")
            }
            Self::CoordOutOfBounds { row, col, shape } => {
                write!(f, "coordinate ({row}, {col}) out of bounds for {shape} matrix")
            }
        }
    }
}

impl Error for LinalgError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mismatch_message_names_op_and_shapes() {
        let err = LinalgError::DimensionMismatch {
            op: Op::MatMul,
            left: Shape::new(2, 3),
            right: Shape::new(4, 2),
        };
        assert_eq!(
            err.to_string(),
            "dimension mismatch in matrix multiplication: 2x3 vs 4x2"
        );
    }

    #[test]
    fn out_of_bounds_message() {
        let err = LinalgError::OutOfBounds { index: 7, len: 3 };
        assert_eq!(err.to_string(), "index 7 out of bounds for length 3");
    }

    #[test]
    fn allocation_message() {
        let err = LinalgError::AllocationFailed {
            requested: 5_000_000_000,
            limit: u64::from(u32::MAX),
        };
        assert!(err.to_string().contains("5000000000"));
    }
}
