//! Elementwise and scalar arithmetic for [`Vector`].
//!
//! The checked methods return [`LinalgError::DimensionMismatch`] on a
//! length mismatch. The operator impls (`+`, `+=`) delegate to them and
//! panic with the error's message instead, since `std::ops` traits cannot
//! return `Result`.

use std::ops::{Add, AddAssign, Mul, MulAssign};

use linvec_core::{impl_scalar_lhs_mul, LinalgError, Op, Scalar, Shape};

use crate::vector::Vector;

impl<T: Scalar> Vector<T> {
    fn check_same_len(&self, other: &Self, op: Op) -> Result<(), LinalgError> {
        if self.len() != other.len() {
            return Err(LinalgError::DimensionMismatch {
                op,
                left: Shape::column(self.len()),
                right: Shape::column(other.len()),
            });
        }
        Ok(())
    }

    /// Elementwise sum into a freshly allocated vector.
    ///
    /// # Errors
    ///
    /// Returns [`LinalgError::DimensionMismatch`] if the lengths differ.
    pub fn checked_add(&self, other: &Self) -> Result<Self, LinalgError> {
        self.check_same_len(other, Op::Add)?;
        let data: Box<[T]> = self
            .iter()
            .zip(other.iter())
            .map(|(&a, &b)| a + b)
            .collect();
        Ok(Self::from_boxed(data, self.policy()))
    }

    /// Elementwise sum in place. `self` is untouched on error.
    ///
    /// # Errors
    ///
    /// Returns [`LinalgError::DimensionMismatch`] if the lengths differ.
    pub fn add_assign_checked(&mut self, other: &Self) -> Result<(), LinalgError> {
        self.check_same_len(other, Op::Add)?;
        for (a, &b) in self.iter_mut().zip(other.iter()) {
            *a += b;
        }
        Ok(())
    }

    /// Multiply every element by `scalar` into a freshly allocated vector.
    pub fn scale(&self, scalar: T) -> Self {
        let data: Box<[T]> = self.iter().map(|&x| x * scalar).collect();
        Self::from_boxed(data, self.policy())
    }

    /// Multiply every element by `scalar` in place.
    pub fn scale_in_place(&mut self, scalar: T) {
        for x in self.iter_mut() {
            *x *= scalar;
        }
    }

    /// Inner product of two equal-length vectors.
    ///
    /// # Errors
    ///
    /// Returns [`LinalgError::DimensionMismatch`] if the lengths differ.
    pub fn dot(&self, other: &Self) -> Result<T, LinalgError> {
        self.check_same_len(other, Op::Dot)?;
        let mut acc = T::zero();
        for (&a, &b) in self.iter().zip(other.iter()) {
            acc += a * b;
        }
        Ok(acc)
    }
}

/// # Panics
///
/// Panics if the lengths differ. Use [`Vector::checked_add`] to handle
/// the mismatch as an error.
impl<T: Scalar> Add<&Vector<T>> for &Vector<T> {
    type Output = Vector<T>;

    fn add(self, rhs: &Vector<T>) -> Vector<T> {
        self.checked_add(rhs).unwrap_or_else(|e| panic!("{e}"))
    }
}

/// # Panics
///
/// Panics if the lengths differ.
impl<T: Scalar> Add for Vector<T> {
    type Output = Vector<T>;

    fn add(mut self, rhs: Vector<T>) -> Vector<T> {
        self += &rhs;
        self
    }
}

/// # Panics
///
/// Panics if the lengths differ. Use [`Vector::add_assign_checked`] to
/// handle the mismatch as an error.
impl<T: Scalar> AddAssign<&Vector<T>> for Vector<T> {
    fn add_assign(&mut self, rhs: &Vector<T>) {
        if let Err(e) = self.add_assign_checked(rhs) {
            panic!("{e}");
        }
    }
}

impl<T: Scalar> Mul<T> for &Vector<T> {
    type Output = Vector<T>;

    fn mul(self, scalar: T) -> Vector<T> {
        self.scale(scalar)
    }
}

impl<T: Scalar> Mul<T> for Vector<T> {
    type Output = Vector<T>;

    fn mul(mut self, scalar: T) -> Vector<T> {
        self.scale_in_place(scalar);
        self
    }
}

impl<T: Scalar> MulAssign<T> for Vector<T> {
    fn mul_assign(&mut self, scalar: T) {
        self.scale_in_place(scalar);
    }
}

impl_scalar_lhs_mul!(
    Vector; i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64
);
