//! The [`Matrix`] container: construction, access, and layout queries.

use std::fmt;
use std::ops::{Index, IndexMut};

use linvec_core::{checked_shape, LinalgError, Op, Scalar, Shape};
use linvec_vector::Vector;

/// A dense `n_row x n_col` matrix stored row-major in one [`Vector`].
///
/// Element `(r, c)` lives at flat index `r * n_col + c`. Both dimensions
/// are limited to `u32::MAX`, and so is their product: the elements share
/// one `Vector`, whose length has the same bound. A `65536 x 65536` matrix
/// is therefore rejected even though each side fits.
///
/// # Examples
///
/// ```
/// use linvec_matrix::Matrix;
///
/// let m = Matrix::from_vec(2, 3, vec![1, 2, 3, 4, 5, 6]).unwrap();
/// assert_eq!(m.shape(), (2, 3));
/// assert_eq!(m.get(1, 2), 6);
/// ```
pub struct Matrix<T> {
    pub(crate) data: Vector<T>,
    pub(crate) n_row: u32,
    pub(crate) n_col: u32,
}

impl<T> Matrix<T> {
    /// Wrap a flat buffer whose length is already known to be `rows * cols`.
    pub(crate) fn from_parts(data: Vector<T>, n_row: u32, n_col: u32) -> Self {
        debug_assert_eq!(data.len(), n_row as usize * n_col as usize);
        Self { data, n_row, n_col }
    }

    /// Number of rows.
    #[inline]
    pub fn n_row(&self) -> usize {
        self.n_row as usize
    }

    /// Number of columns.
    #[inline]
    pub fn n_col(&self) -> usize {
        self.n_col as usize
    }

    /// Returns `(rows, cols)`.
    #[inline]
    pub fn shape(&self) -> (usize, usize) {
        (self.n_row(), self.n_col())
    }

    /// The shape as a [`Shape`], for error reporting.
    pub fn dims(&self) -> Shape {
        Shape::new(self.n_row(), self.n_col())
    }

    /// All elements in row-major order.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        self.data.as_slice()
    }

    /// All elements in row-major order, mutably.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        self.data.as_mut_slice()
    }

    /// Row `row` as a slice.
    ///
    /// # Panics
    ///
    /// Panics if `row >= n_row`.
    pub fn row(&self, row: usize) -> &[T] {
        let n_col = self.n_col();
        &self.as_slice()[row * n_col..(row + 1) * n_col]
    }

    /// Row `row` as a mutable slice.
    ///
    /// # Panics
    ///
    /// Panics if `row >= n_row`.
    pub fn row_mut(&mut self, row: usize) -> &mut [T] {
        let n_col = self.n_col();
        &mut self.as_mut_slice()[row * n_col..(row + 1) * n_col]
    }

    /// Consume the matrix, returning its row-major elements.
    pub fn into_vector(self) -> Vector<T> {
        self.data
    }

    #[inline]
    fn flat_index(&self, row: usize, col: usize) -> usize {
        debug_assert!(col < self.n_col(), "column {col} out of range");
        row * self.n_col() + col
    }
}

impl<T: Default> Matrix<T> {
    /// Create a `rows x cols` matrix of default-valued elements.
    ///
    /// # Errors
    ///
    /// Returns [`LinalgError::AllocationFailed`] if either dimension or
    /// `rows * cols` exceeds `u32::MAX`. The product bound is stricter
    /// than a per-dimension limit alone and follows from the flat storage.
    pub fn new(rows: usize, cols: usize) -> Result<Self, LinalgError> {
        let (r, c, total) = checked_shape(rows, cols)?;
        Ok(Self::from_parts(Vector::with_len(total as usize)?, r, c))
    }
}

impl<T: Clone> Matrix<T> {
    /// Create a `rows x cols` matrix with every element set to `value`.
    ///
    /// # Errors
    ///
    /// Returns [`LinalgError::AllocationFailed`] if either dimension or
    /// `rows * cols` exceeds `u32::MAX`.
    pub fn filled(rows: usize, cols: usize, value: T) -> Result<Self, LinalgError> {
        let (r, c, total) = checked_shape(rows, cols)?;
        Ok(Self::from_parts(Vector::filled(total as usize, value)?, r, c))
    }

    /// Create a matrix by copying a flat row-major vector.
    ///
    /// # Errors
    ///
    /// Returns [`LinalgError::AllocationFailed`] for oversized dimensions,
    /// or [`LinalgError::DimensionMismatch`] if `source.len() != rows * cols`.
    pub fn from_vector(rows: usize, cols: usize, source: &Vector<T>) -> Result<Self, LinalgError> {
        let (r, c, total) = checked_shape(rows, cols)?;
        if source.len() != total as usize {
            return Err(LinalgError::DimensionMismatch {
                op: Op::FromVector,
                left: Shape::new(rows, cols),
                right: Shape::column(source.len()),
            });
        }
        Ok(Self::from_parts(Vector::from_slice(source.as_slice())?, r, c))
    }
}

impl<T> Matrix<T> {
    /// Create a matrix that adopts a row-major `Vec` without copying.
    ///
    /// # Errors
    ///
    /// Same as [`Matrix::from_vector`].
    pub fn from_vec(rows: usize, cols: usize, data: Vec<T>) -> Result<Self, LinalgError> {
        let (r, c, total) = checked_shape(rows, cols)?;
        if data.len() != total as usize {
            return Err(LinalgError::DimensionMismatch {
                op: Op::FromVector,
                left: Shape::new(rows, cols),
                right: Shape::column(data.len()),
            });
        }
        Ok(Self::from_parts(Vector::try_from(data)?, r, c))
    }
}

impl<T: Scalar> Matrix<T> {
    /// Copy of element `(row, col)`. Unchecked beyond slice indexing.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> T {
        self[(row, col)]
    }

    /// Bounds-checked copy of element `(row, col)`.
    ///
    /// # Errors
    ///
    /// Returns [`LinalgError::CoordOutOfBounds`] if either coordinate is
    /// out of range.
    pub fn try_get(&self, row: usize, col: usize) -> Result<T, LinalgError> {
        if row >= self.n_row() || col >= self.n_col() {
            return Err(LinalgError::CoordOutOfBounds {
                row,
                col,
                shape: self.dims(),
            });
        }
        Ok(self.get(row, col))
    }

    /// Column `col` copied into a new vector.
    ///
    /// # Panics
    ///
    /// Panics if `col >= n_col`.
    pub fn column(&self, col: usize) -> Vector<T> {
        assert!(col < self.n_col(), "column {col} out of range");
        (0..self.n_row()).map(|r| self.get(r, col)).collect()
    }

    /// The transposed `n_col x n_row` matrix.
    pub fn transpose(&self) -> Self {
        let (rows, cols) = self.shape();
        let mut out = Vector::filled(rows * cols, T::zero())
            .expect("transpose has the same element count as its source");
        for r in 0..rows {
            for c in 0..cols {
                out[c * rows + r] = self.get(r, c);
            }
        }
        Self::from_parts(out, self.n_col, self.n_row)
    }
}

/// Deep copy of the element buffer.
impl<T: Clone + Default> Clone for Matrix<T> {
    fn clone(&self) -> Self {
        Self {
            data: self.data.clone(),
            n_row: self.n_row,
            n_col: self.n_col,
        }
    }
}

/// Equal when shapes match and all elements match.
impl<T: PartialEq> PartialEq for Matrix<T> {
    fn eq(&self, other: &Self) -> bool {
        self.n_row == other.n_row && self.n_col == other.n_col && self.data == other.data
    }
}

impl<T: Eq> Eq for Matrix<T> {}

impl<T: fmt::Debug> fmt::Debug for Matrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut list = f.debug_list();
        for r in 0..self.n_row() {
            list.entry(&self.row(r));
        }
        list.finish()
    }
}

/// One row per line, elements space-separated.
impl<T: fmt::Display> fmt::Display for Matrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for r in 0..self.n_row() {
            if r > 0 {
                f.write_str("\n")?;
            }
            for (c, x) in self.row(r).iter().enumerate() {
                if c > 0 {
                    f.write_str(" ")?;
                }
                x.fmt(f)?;
            }
        }
        Ok(())
    }
}

/// Unchecked fast path: `m[(row, col)]`.
///
/// Only the flat index is checked (by slice indexing); a column past
/// `n_col` is caught by a debug assertion only.
impl<T> Index<(usize, usize)> for Matrix<T> {
    type Output = T;

    #[inline]
    fn index(&self, (row, col): (usize, usize)) -> &T {
        &self.data[self.flat_index(row, col)]
    }
}

impl<T> IndexMut<(usize, usize)> for Matrix<T> {
    #[inline]
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut T {
        let i = self.flat_index(row, col);
        &mut self.data[i]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_is_default_filled() {
        let m: Matrix<f64> = Matrix::new(2, 3).unwrap();
        assert_eq!(m.shape(), (2, 3));
        assert!(m.as_slice().iter().all(|&x| x == 0.0));
    }

    #[test]
    fn filled_sets_every_element() {
        let m = Matrix::filled(3, 3, 0.1).unwrap();
        assert!(m.as_slice().iter().all(|&x| x == 0.1));
    }

    #[test]
    fn from_vector_is_row_major() {
        let flat = Vector::from_slice(&[1, 2, 3, 4, 5, 6]).unwrap();
        let m = Matrix::from_vector(2, 3, &flat).unwrap();
        assert_eq!(m.get(0, 2), 3);
        assert_eq!(m.get(1, 0), 4);
        assert_eq!(m.row(1), &[4, 5, 6]);
    }

    #[test]
    fn from_vector_length_mismatch() {
        let flat = Vector::from_slice(&[1, 2, 3]).unwrap();
        let err = Matrix::from_vector(2, 2, &flat).unwrap_err();
        assert_eq!(
            err,
            LinalgError::DimensionMismatch {
                op: Op::FromVector,
                left: Shape::new(2, 2),
                right: Shape::column(3),
            }
        );
    }

    #[test]
    fn oversized_product_fails_before_allocating() {
        assert!(Matrix::<u8>::new(1 << 16, 1).is_ok());
        assert!(Matrix::<u8>::new(1, 1 << 16).is_ok());
        let result = Matrix::<u8>::new(1 << 16, 1 << 16);
        assert_eq!(
            result.unwrap_err(),
            LinalgError::AllocationFailed {
                requested: 1 << 32,
                limit: u64::from(u32::MAX),
            }
        );
    }

    #[cfg(target_pointer_width = "64")]
    #[test]
    fn oversized_dimension_fails() {
        let result = Matrix::filled(linvec_core::MAX_LEN + 1, 0, 1u8);
        assert!(matches!(result, Err(LinalgError::AllocationFailed { .. })));
    }

    #[test]
    fn index_mut_writes_in_place() {
        let mut m = Matrix::filled(3, 3, 0.1).unwrap();
        m[(1, 1)] = 1.1;
        assert_eq!(m.get(1, 1), 1.1);
        assert_eq!(m.get(1, 0), 0.1);
    }

    #[test]
    fn try_get_checks_both_coordinates() {
        let m = Matrix::filled(2, 3, 5).unwrap();
        assert_eq!(m.try_get(1, 2), Ok(5));
        assert_eq!(
            m.try_get(0, 3),
            Err(LinalgError::CoordOutOfBounds {
                row: 0,
                col: 3,
                shape: Shape::new(2, 3),
            })
        );
        assert!(m.try_get(2, 0).is_err());
    }

    #[test]
    fn column_and_transpose() {
        let m = Matrix::from_vec(2, 3, vec![1, 2, 3, 4, 5, 6]).unwrap();
        assert_eq!(m.column(1).as_slice(), &[2, 5]);
        let t = m.transpose();
        assert_eq!(t.shape(), (3, 2));
        assert_eq!(t.as_slice(), &[1, 4, 2, 5, 3, 6]);
    }

    #[test]
    fn equality_requires_same_shape() {
        let a = Matrix::from_vec(2, 3, vec![1, 2, 3, 4, 5, 6]).unwrap();
        let b = Matrix::from_vec(3, 2, vec![1, 2, 3, 4, 5, 6]).unwrap();
        assert_ne!(a, b);
        assert_eq!(a, a.clone());
    }

    #[test]
    fn display_one_row_per_line() {
        let m = Matrix::from_vec(2, 2, vec![1, 0, 0, 1]).unwrap();
        assert_eq!(m.to_string(), "1 0\n0 1");
        assert_eq!(format!("{m:?}"), "[[1, 0], [0, 1]]");
    }

    #[test]
    fn zero_sized_matrices() {
        let m: Matrix<i32> = Matrix::new(0, 4).unwrap();
        assert_eq!(m.shape(), (0, 4));
        assert!(m.as_slice().is_empty());
        assert_eq!(m.to_string(), "");
    }
}
