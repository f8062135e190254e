//! Straightforward reference implementations.
//!
//! These are the textbook triple loop and nothing more, so a disagreement
//! with the blocked kernel points at the kernel.

use linvec_core::Scalar;
use linvec_matrix::Matrix;
use linvec_vector::Vector;

/// Naive `a * b`. Panics on mismatched inner dimensions.
pub fn naive_matmul<T: Scalar>(a: &Matrix<T>, b: &Matrix<T>) -> Matrix<T> {
    let (m, k) = a.shape();
    let (k2, n) = b.shape();
    assert_eq!(k, k2, "inner dimensions differ: {k} vs {k2}");

    let mut out = Matrix::new(m, n).expect("reference result fits");
    for i in 0..m {
        for j in 0..n {
            let mut acc = T::zero();
            for h in 0..k {
                acc += a[(i, h)] * b[(h, j)];
            }
            out[(i, j)] = acc;
        }
    }
    out
}

/// Naive `a * v` as a plain `Vec`.
pub fn naive_matvec<T: Scalar>(a: &Matrix<T>, v: &Vector<T>) -> Vec<T> {
    assert_eq!(a.n_col(), v.len(), "vector length differs from column count");
    (0..a.n_row())
        .map(|i| {
            let mut acc = T::zero();
            for (&x, &y) in a.row(i).iter().zip(v.iter()) {
                acc += x * y;
            }
            acc
        })
        .collect()
}

/// `n x n` identity with `one` on the diagonal.
pub fn identity<T: Scalar>(n: usize, one: T) -> Matrix<T> {
    let mut m = Matrix::new(n, n).expect("identity fits");
    for i in 0..n {
        m[(i, i)] = one;
    }
    m
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_diagonal() {
        let id = identity(3, 1i32);
        assert_eq!(id.as_slice(), &[1, 0, 0, 0, 1, 0, 0, 0, 1]);
    }

    #[test]
    fn naive_matmul_small() {
        let a = Matrix::from_vec(1, 2, vec![2, 3]).unwrap();
        let b = Matrix::from_vec(2, 1, vec![4, 5]).unwrap();
        assert_eq!(naive_matmul(&a, &b).as_slice(), &[23]);
    }

    #[test]
    fn naive_matvec_small() {
        let a = Matrix::from_vec(2, 2, vec![1, 2, 3, 4]).unwrap();
        let v = Vector::from_slice(&[1, 1]).unwrap();
        assert_eq!(naive_matvec(&a, &v), vec![3, 7]);
    }
}
