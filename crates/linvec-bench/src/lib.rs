//! Benchmark workloads and utilities for linvec.
//!
//! - [`push_workload`]: grow a vector one element at a time
//! - [`reserved_push_workload`]: the same pushes after an exact reservation
//! - [`square_operands`]: seeded `n x n` operands for product benchmarks
//! - [`MATMUL_SIZES`]: edge lengths exercised by the product benchmarks

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use linvec::prelude::*;
use linvec_test_utils::{random_matrix, SEED};

/// Edge lengths for square product benchmarks. Odd sizes exercise the
/// kernel's trailing row and column passes.
pub const MATMUL_SIZES: [usize; 4] = [16, 33, 64, 127];

/// Push `0..n` onto an empty vector, growing by the default policy.
pub fn push_workload(n: usize) -> Vector<u64> {
    let mut v = Vector::new();
    for i in 0..n as u64 {
        v.push(i);
    }
    v
}

/// Push `0..n` after reserving exactly `n` slots up front.
pub fn reserved_push_workload(n: usize) -> Vector<u64> {
    let mut v = Vector::new();
    v.reserve(n).expect("benchmark size fits");
    for i in 0..n as u64 {
        v.push(i);
    }
    v
}

/// Seeded `n x n` left and right operands.
pub fn square_operands(n: usize) -> (Matrix<f64>, Matrix<f64>) {
    (random_matrix(n, n, SEED), random_matrix(n, n, SEED ^ 1))
}
