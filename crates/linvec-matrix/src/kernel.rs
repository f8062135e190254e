//! Multiplication kernels over flat row-major slices.
//!
//! [`matmul_blocked`] computes the product in 2x2 output blocks: one pass
//! over the shared dimension feeds four accumulators, so each loaded
//! element of `a` and `b` contributes to two outputs instead of one.
//!
//! ```text
//!            cols of out (step 2)         odd trailing column
//!          ┌──────────┬──────────┬─┐
//! rows     │ t00  t01 │ t00  t01 │c│   c: plain dot product per row
//! (step 2) │ t10  t11 │ t10  t11 │c│
//!          ├──────────┼──────────┼─┤
//!          │ r    r   │ r    r   │r│   r: odd trailing row, plain dot
//!          └──────────┴──────────┴─┘      product per column
//! ```
//!
//! When both dimensions are odd the bottom-right element is produced by
//! both edge passes; the second write stores the same value.

use linvec_core::Scalar;

/// Multiply `a` (`m x k`) by `b` (`k x n`) into `out` (`m x n`).
///
/// Every accumulator starts at `T::zero()`, so `k == 0` yields zeros.
///
/// # Panics
///
/// Panics if a slice length does not match its stated dimensions.
pub fn matmul_blocked<T: Scalar>(a: &[T], b: &[T], out: &mut [T], m: usize, k: usize, n: usize) {
    assert_eq!(a.len(), m * k, "lhs length does not match {m}x{k}");
    assert_eq!(b.len(), k * n, "rhs length does not match {k}x{n}");
    assert_eq!(out.len(), m * n, "output length does not match {m}x{n}");

    let row_rem = m % 2;
    let col_rem = n % 2;
    log::trace!(
        "matmul {m}x{k} * {k}x{n}: odd_rows={} odd_cols={}",
        row_rem == 1,
        col_rem == 1
    );

    for i in (0..m - row_rem).step_by(2) {
        let a0 = &a[i * k..(i + 1) * k];
        let a1 = &a[(i + 1) * k..(i + 2) * k];
        for j in (0..n - col_rem).step_by(2) {
            let mut t00 = T::zero();
            let mut t01 = T::zero();
            let mut t10 = T::zero();
            let mut t11 = T::zero();
            for h in 0..k {
                let b0 = b[h * n + j];
                let b1 = b[h * n + j + 1];
                t00 += a0[h] * b0;
                t01 += a0[h] * b1;
                t10 += a1[h] * b0;
                t11 += a1[h] * b1;
            }
            out[i * n + j] = t00;
            out[i * n + j + 1] = t01;
            out[(i + 1) * n + j] = t10;
            out[(i + 1) * n + j + 1] = t11;
        }
    }

    if col_rem == 1 {
        let j = n - 1;
        for i in 0..m {
            out[i * n + j] = column_dot(&a[i * k..(i + 1) * k], b, j, n);
        }
    }

    if row_rem == 1 {
        let i = m - 1;
        let a_row = &a[i * k..(i + 1) * k];
        for j in 0..n {
            out[i * n + j] = column_dot(a_row, b, j, n);
        }
    }
}

/// Multiply `a` (`m x k`) by the length-`k` vector `v` into `out` (length `m`).
///
/// # Panics
///
/// Panics if a slice length does not match its stated dimensions.
pub fn matvec<T: Scalar>(a: &[T], v: &[T], out: &mut [T], m: usize, k: usize) {
    assert_eq!(a.len(), m * k, "lhs length does not match {m}x{k}");
    assert_eq!(v.len(), k, "vector length does not match {k}");
    assert_eq!(out.len(), m, "output length does not match {m}");

    for (i, slot) in out.iter_mut().enumerate() {
        let mut acc = T::zero();
        for (&x, &y) in a[i * k..(i + 1) * k].iter().zip(v) {
            acc += x * y;
        }
        *slot = acc;
    }
}

/// Dot product of `row` with column `col` of the row-major `b` (`k x n`).
#[inline]
fn column_dot<T: Scalar>(row: &[T], b: &[T], col: usize, n: usize) -> T {
    let mut acc = T::zero();
    for (h, &x) in row.iter().enumerate() {
        acc += x * b[h * n + col];
    }
    acc
}
