//! Integration test: the blocked kernel against the naive reference.
//!
//! Shapes cover every combination of even and odd row and column counts,
//! including zero-sized dimensions.

use linvec_core::{LinalgError, Op};
use linvec_matrix::Matrix;
use linvec_test_utils::reference::{identity, naive_matmul, naive_matvec};
use linvec_test_utils::strategies::{
    conformable_pair, matrix_of_shape, same_shape_pair, small_int, vector_of_len,
};
use linvec_test_utils::{random_matrix, SEED};
use linvec_vector::Vector;
use proptest::prelude::*;

proptest! {
    #[test]
    fn blocked_matches_naive((a, b) in conformable_pair()) {
        let blocked = a.matmul(&b).unwrap();
        prop_assert_eq!(blocked.shape(), (a.n_row(), b.n_col()));
        prop_assert_eq!(blocked, naive_matmul(&a, &b));
    }

    #[test]
    fn operator_agrees_with_checked((a, b) in conformable_pair()) {
        prop_assert_eq!(&a * &b, a.matmul(&b).unwrap());
    }

    #[test]
    fn identity_is_neutral(a in (0usize..8, 0usize..8).prop_flat_map(|(r, c)| matrix_of_shape(r, c))) {
        let left = identity(a.n_row(), 1i64);
        let right = identity(a.n_col(), 1i64);
        prop_assert_eq!(&left * &a, a.clone());
        prop_assert_eq!(&a * &right, a);
    }

    #[test]
    fn scaling_distributes_over_add((a, b) in same_shape_pair(), s in small_int()) {
        let lhs = s * &(&a + &b);
        let rhs = &(s * &a) + &(&b * s);
        prop_assert_eq!(lhs, rhs);
    }

    #[test]
    fn add_commutes((a, b) in same_shape_pair()) {
        prop_assert_eq!(&a + &b, &b + &a);
    }

    #[test]
    fn matvec_matches_naive(
        (a, v) in (0usize..8, 0usize..8)
            .prop_flat_map(|(r, c)| (matrix_of_shape(r, c), vector_of_len(c)))
    ) {
        let col = a.matvec(&v).unwrap();
        prop_assert_eq!(col.shape(), (a.n_row(), 1));
        let expected = naive_matvec(&a, &v);
        prop_assert_eq!(col.as_slice(), expected.as_slice());
    }

    #[test]
    fn transpose_reverses_product((a, b) in conformable_pair()) {
        let ab_t = a.matmul(&b).unwrap().transpose();
        let bt_at = b.transpose().matmul(&a.transpose()).unwrap();
        prop_assert_eq!(ab_t, bt_at);
    }

    #[test]
    fn mismatched_inner_dims_rejected(
        (a, b) in (1usize..6, 1usize..6, 1usize..6, 1usize..6)
            .prop_filter("inner dims must differ", |(_, k1, k2, _)| k1 != k2)
            .prop_flat_map(|(m, k1, k2, n)| (matrix_of_shape(m, k1), matrix_of_shape(k2, n)))
    ) {
        let err = a.matmul(&b).unwrap_err();
        prop_assert!(
            matches!(err, LinalgError::DimensionMismatch { op: Op::MatMul, .. }),
            "unexpected error: {:?}",
            err
        );
    }
}

#[test]
fn float_product_close_to_reference() {
    let a = random_matrix(17, 13, SEED);
    let b = random_matrix(13, 11, SEED + 1);
    let blocked = a.matmul(&b).unwrap();
    let naive = naive_matmul(&a, &b);
    for (x, y) in blocked.as_slice().iter().zip(naive.as_slice()) {
        assert!((x - y).abs() < 1e-12, "{x} vs {y}");
    }
}

#[test]
fn scenario_identity_and_threes() {
    let flat = Vector::from_slice(&[1, 0, 0, 1]).unwrap();
    let id = Matrix::from_vector(2, 2, &flat).unwrap();
    let threes = Matrix::filled(2, 2, 3).unwrap();
    assert_eq!(format!("{}", &threes * &id), "3 3\n3 3");
    assert_eq!(format!("{}", &id * &threes), "3 3\n3 3");

    let twos = Vector::filled(2, 2).unwrap();
    let col = &id * &twos;
    assert_eq!(col.shape(), (2, 1));
    assert_eq!(format!("{col}"), "2\n2");
}

#[test]
fn scenario_half_scale() {
    let mut m1 = Matrix::filled(3, 3, 0.1f64).unwrap();
    m1[(1, 1)] = 1.1;
    let half = 0.5 * &m1;
    assert!((half.get(1, 1) - 0.55).abs() < 1e-12);
    assert!((half.get(2, 0) - 0.05).abs() < 1e-12);
    assert_eq!(m1.get(1, 1), 1.1);
}
