//! Proptest strategies for linvec containers.
//!
//! Element values are kept small so integer products over the generated
//! shapes never overflow.

use linvec_matrix::Matrix;
use linvec_vector::Vector;
use proptest::prelude::*;

/// Largest dimension produced by [`any_dims`].
pub const MAX_DIM: usize = 9;

/// Small integer element.
pub fn small_int() -> impl Strategy<Value = i64> {
    -50i64..=50
}

/// A `(rows, cols)` pair, either side possibly zero.
pub fn any_dims() -> impl Strategy<Value = (usize, usize)> {
    (0..=MAX_DIM, 0..=MAX_DIM)
}

/// A vector of exactly `len` small integers.
pub fn vector_of_len(len: usize) -> impl Strategy<Value = Vector<i64>> {
    prop::collection::vec(small_int(), len)
        .prop_map(|items| Vector::try_from(items).expect("small vector fits"))
}

/// A matrix of exactly `rows x cols` small integers.
pub fn matrix_of_shape(rows: usize, cols: usize) -> impl Strategy<Value = Matrix<i64>> {
    prop::collection::vec(small_int(), rows * cols)
        .prop_map(move |data| Matrix::from_vec(rows, cols, data).expect("small matrix fits"))
}

/// Two matrices whose inner dimensions agree, `m x k` and `k x n`.
pub fn conformable_pair() -> impl Strategy<Value = (Matrix<i64>, Matrix<i64>)> {
    (0..=MAX_DIM, 0..=MAX_DIM, 0..=MAX_DIM)
        .prop_flat_map(|(m, k, n)| (matrix_of_shape(m, k), matrix_of_shape(k, n)))
}

/// Two matrices of one shared shape.
pub fn same_shape_pair() -> impl Strategy<Value = (Matrix<i64>, Matrix<i64>)> {
    any_dims().prop_flat_map(|(r, c)| (matrix_of_shape(r, c), matrix_of_shape(r, c)))
}
