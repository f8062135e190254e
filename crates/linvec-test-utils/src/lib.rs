//! Test utilities for linvec development.
//!
//! - [`reference`]: naive kernels the blocked code is checked against.
//! - [`strategies`]: proptest strategies for vectors and matrices.
//! - [`fixtures`]: seeded random operands for benchmarks and scenarios.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;
pub mod reference;
pub mod strategies;

pub use fixtures::{random_int_matrix, random_matrix, random_vector, SEED};
pub use reference::{identity, naive_matmul, naive_matvec};
