//! Row-major dense matrix with a 2x2 blocked multiplication kernel.
//!
//! [`Matrix<T>`] stores `n_row * n_col` elements in a single
//! [`Vector<T>`](linvec_vector::Vector), row after row. Arithmetic:
//!
//! | Operation | Checked method | Operator |
//! |-----------|----------------|----------|
//! | elementwise add | [`Matrix::checked_add`], [`Matrix::add_assign_checked`] | `&a + &b`, `a += &b` |
//! | scalar multiply | [`Matrix::scale`], [`Matrix::scale_in_place`] | `&a * s`, `s * &a`, `a *= s` |
//! | matrix product | [`Matrix::matmul`] | `&a * &b` |
//! | matrix-vector product | [`Matrix::matvec`] | `&a * &v` |
//!
//! Checked methods return [`LinalgError`](linvec_core::LinalgError);
//! operators panic on a shape mismatch. Results are always freshly
//! allocated and never alias an operand.
//!
//! The product kernels live in [`kernel`] and operate on plain slices.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod kernel;
pub mod matrix;
mod ops;

pub use matrix::Matrix;
