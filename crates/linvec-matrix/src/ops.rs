//! Matrix arithmetic: elementwise add, scalar multiply, and products.
//!
//! Checked methods return [`LinalgError`]; the `std::ops` impls delegate
//! to them and panic with the error's message on a shape mismatch.

use std::ops::{Add, AddAssign, Mul, MulAssign};

use linvec_core::{checked_shape, impl_scalar_lhs_mul, LinalgError, Op, Scalar, Shape};
use linvec_vector::Vector;

use crate::kernel;
use crate::matrix::Matrix;

impl<T: Scalar> Matrix<T> {
    fn check_same_shape(&self, other: &Self) -> Result<(), LinalgError> {
        if self.shape() != other.shape() {
            return Err(LinalgError::DimensionMismatch {
                op: Op::Add,
                left: self.dims(),
                right: other.dims(),
            });
        }
        Ok(())
    }

    /// Elementwise sum into a freshly allocated matrix.
    ///
    /// # Errors
    ///
    /// Returns [`LinalgError::DimensionMismatch`] unless both operands
    /// have the same shape.
    pub fn checked_add(&self, other: &Self) -> Result<Self, LinalgError> {
        self.check_same_shape(other)?;
        let sum = self.data.checked_add(&other.data)?;
        Ok(Self::from_parts(sum, self.n_row, self.n_col))
    }

    /// Elementwise sum in place. `self` is untouched on error.
    ///
    /// # Errors
    ///
    /// Returns [`LinalgError::DimensionMismatch`] unless both operands
    /// have the same shape.
    pub fn add_assign_checked(&mut self, other: &Self) -> Result<(), LinalgError> {
        self.check_same_shape(other)?;
        for (a, &b) in self.as_mut_slice().iter_mut().zip(other.as_slice()) {
            *a += b;
        }
        Ok(())
    }

    /// Multiply every element by `scalar` into a freshly allocated matrix.
    pub fn scale(&self, scalar: T) -> Self {
        Self::from_parts(self.data.scale(scalar), self.n_row, self.n_col)
    }

    /// Multiply every element by `scalar` in place.
    pub fn scale_in_place(&mut self, scalar: T) {
        for x in self.as_mut_slice() {
            *x *= scalar;
        }
    }

    /// Matrix product `self * other` via the 2x2 blocked kernel.
    ///
    /// The result has shape `(self.n_row, other.n_col)`.
    ///
    /// # Errors
    ///
    /// Returns [`LinalgError::DimensionMismatch`] if
    /// `self.n_col != other.n_row`, or [`LinalgError::AllocationFailed`]
    /// if the result would exceed `u32::MAX` elements.
    pub fn matmul(&self, other: &Self) -> Result<Self, LinalgError> {
        if self.n_col() != other.n_row() {
            return Err(LinalgError::DimensionMismatch {
                op: Op::MatMul,
                left: self.dims(),
                right: other.dims(),
            });
        }
        let (m, k, n) = (self.n_row(), self.n_col(), other.n_col());
        let (r, c, total) = checked_shape(m, n)?;
        let mut out = Vector::with_len(total as usize)?;
        kernel::matmul_blocked(
            self.as_slice(),
            other.as_slice(),
            out.as_mut_slice(),
            m,
            k,
            n,
        );
        Ok(Self::from_parts(out, r, c))
    }

    /// Matrix-vector product, returned as an `n_row x 1` column matrix.
    ///
    /// # Errors
    ///
    /// Returns [`LinalgError::DimensionMismatch`] if
    /// `self.n_col != vector.len()`.
    pub fn matvec(&self, vector: &Vector<T>) -> Result<Self, LinalgError> {
        if self.n_col() != vector.len() {
            return Err(LinalgError::DimensionMismatch {
                op: Op::MatVec,
                left: self.dims(),
                right: Shape::column(vector.len()),
            });
        }
        let (m, k) = self.shape();
        let mut out = Vector::with_len(m)?;
        kernel::matvec(self.as_slice(), vector.as_slice(), out.as_mut_slice(), m, k);
        Ok(Self::from_parts(out, self.n_row, 1))
    }
}

/// # Panics
///
/// Panics if the shapes differ. Use [`Matrix::checked_add`] to handle the
/// mismatch as an error.
impl<T: Scalar> Add<&Matrix<T>> for &Matrix<T> {
    type Output = Matrix<T>;

    fn add(self, rhs: &Matrix<T>) -> Matrix<T> {
        self.checked_add(rhs).unwrap_or_else(|e| panic!("{e}"))
    }
}

/// # Panics
///
/// Panics if the shapes differ.
impl<T: Scalar> Add for Matrix<T> {
    type Output = Matrix<T>;

    fn add(mut self, rhs: Matrix<T>) -> Matrix<T> {
        self += &rhs;
        self
    }
}

/// # Panics
///
/// Panics if the shapes differ. Use [`Matrix::add_assign_checked`] to
/// handle the mismatch as an error.
impl<T: Scalar> AddAssign<&Matrix<T>> for Matrix<T> {
    fn add_assign(&mut self, rhs: &Matrix<T>) {
        if let Err(e) = self.add_assign_checked(rhs) {
            panic!("{e}");
        }
    }
}

/// # Panics
///
/// Panics if the inner dimensions differ. Use [`Matrix::matmul`] to
/// handle the mismatch as an error.
impl<T: Scalar> Mul<&Matrix<T>> for &Matrix<T> {
    type Output = Matrix<T>;

    fn mul(self, rhs: &Matrix<T>) -> Matrix<T> {
        self.matmul(rhs).unwrap_or_else(|e| panic!("{e}"))
    }
}

/// # Panics
///
/// Panics if the inner dimensions differ.
impl<T: Scalar> Mul for Matrix<T> {
    type Output = Matrix<T>;

    fn mul(self, rhs: Matrix<T>) -> Matrix<T> {
        &self * &rhs
    }
}

/// # Panics
///
/// Panics if `n_col` differs from the vector's length. Use
/// [`Matrix::matvec`] to handle the mismatch as an error.
impl<T: Scalar> Mul<&Vector<T>> for &Matrix<T> {
    type Output = Matrix<T>;

    fn mul(self, rhs: &Vector<T>) -> Matrix<T> {
        self.matvec(rhs).unwrap_or_else(|e| panic!("{e}"))
    }
}

// `matrix * scalar` is stamped per primitive type so it cannot collide
// with the generic matrix and vector right-hand sides above.
macro_rules! impl_scalar_rhs_mul {
    ($($t:ty),* $(,)?) => {
        $(
            impl Mul<$t> for &Matrix<$t> {
                type Output = Matrix<$t>;

                #[inline]
                fn mul(self, scalar: $t) -> Matrix<$t> {
                    self.scale(scalar)
                }
            }

            impl Mul<$t> for Matrix<$t> {
                type Output = Matrix<$t>;

                #[inline]
                fn mul(mut self, scalar: $t) -> Matrix<$t> {
                    self.scale_in_place(scalar);
                    self
                }
            }

            impl MulAssign<$t> for Matrix<$t> {
                #[inline]
                fn mul_assign(&mut self, scalar: $t) {
                    self.scale_in_place(scalar);
                }
            }
        )*
    };
}

impl_scalar_rhs_mul!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64);

impl_scalar_lhs_mul!(
    Matrix; i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64
);
