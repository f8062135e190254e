//! Core types and traits for the linvec containers.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the pieces shared by `linvec-vector` and `linvec-matrix`: the error
//! type, shape descriptors with the `u32` length guard, and the
//! [`Scalar`] element trait.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod scalar;
pub mod shape;

pub use error::{LinalgError, Op};
pub use scalar::Scalar;
pub use shape::{checked_len, checked_shape, Shape, MAX_LEN};
