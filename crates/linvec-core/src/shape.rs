//! Shape descriptors and the `u32` length guard.
//!
//! Every container length, matrix dimension, and flat element count must
//! fit in a `u32`. The checks here run before any allocation so that an
//! oversized request fails cleanly instead of aborting on OOM.

use std::fmt;

use crate::error::LinalgError;

/// Largest number of elements a container may hold.
pub const MAX_LEN: usize = u32::MAX as usize;

/// Logical `rows x cols` dimensions of an operand.
///
/// Vectors report themselves as `len x 1` column shapes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Shape {
    /// Number of rows.
    pub rows: usize,
    /// Number of columns.
    pub cols: usize,
}

impl Shape {
    /// Create a shape from explicit dimensions.
    pub const fn new(rows: usize, cols: usize) -> Self {
        Self { rows, cols }
    }

    /// Shape of a column vector with `len` elements.
    pub const fn column(len: usize) -> Self {
        Self { rows: len, cols: 1 }
    }

    /// Total number of elements, or `None` on `usize` overflow.
    pub fn checked_elements(&self) -> Option<usize> {
        self.rows.checked_mul(self.cols)
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.rows, self.cols)
    }
}

/// Validate a requested container length.
///
/// Returns the length narrowed to `u32`, or
/// [`LinalgError::AllocationFailed`] if it exceeds [`MAX_LEN`].
pub fn checked_len(len: usize) -> Result<u32, LinalgError> {
    u32::try_from(len).map_err(|_| LinalgError::AllocationFailed {
        requested: len as u64,
        limit: u64::from(u32::MAX),
    })
}

/// Validate matrix dimensions and their flat element count.
///
/// Each dimension must fit in `u32`, and so must `rows * cols` since the
/// elements live in a single flat buffer. Returns the narrowed
/// `(rows, cols, rows * cols)` triple.
pub fn checked_shape(rows: usize, cols: usize) -> Result<(u32, u32, u32), LinalgError> {
    let r = checked_len(rows)?;
    let c = checked_len(cols)?;
    let total = u64::from(r) * u64::from(c);
    let total = u32::try_from(total).map_err(|_| LinalgError::AllocationFailed {
        requested: total,
        limit: u64::from(u32::MAX),
    })?;
    Ok((r, c, total))
}
