//! linvec: dense vector and matrix containers with a blocked product kernel.
//!
//! This is the facade crate that re-exports the public API of the linvec
//! sub-crates. Adding `linvec` as a single dependency is enough for most
//! users.
//!
//! # Quick start
//!
//! ```rust
//! use linvec::prelude::*;
//!
//! let mut v: Vector<f64> = Vector::new();
//! v.push(1.0);
//! v.push(2.0);
//! assert_eq!(v.capacity(), 2);
//!
//! let w = 6.0 * &v;
//! assert_eq!(format!("{w}"), "6 12");
//!
//! let id = Matrix::from_vec(2, 2, vec![1.0, 0.0, 0.0, 1.0]).unwrap();
//! let threes = Matrix::filled(2, 2, 3.0).unwrap();
//! assert_eq!(&id * &threes, threes);
//!
//! let col = &id * &v;
//! assert_eq!(col.shape(), (2, 1));
//!
//! let err = id.matmul(&Matrix::new(3, 1).unwrap()).unwrap_err();
//! assert!(matches!(err, LinalgError::DimensionMismatch { .. }));
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `linvec-core` | Errors, shapes, size limits, the `Scalar` trait |
//! | [`vector`] | `linvec-vector` | Growable `Vector<T>` and its growth policy |
//! | [`matrix`] | `linvec-matrix` | Row-major `Matrix<T>` and the product kernels |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Errors, shapes, and size limits (`linvec-core`).
///
/// [`types::LinalgError`] is the single error type returned by every
/// checked operation.
pub use linvec_core as types;

/// Growable contiguous vector (`linvec-vector`).
///
/// [`vector::Vector`] reserves exactly on request and grows by
/// [`vector::GrowthPolicy`] on push.
pub use linvec_vector as vector;

/// Row-major matrix (`linvec-matrix`).
///
/// [`matrix::Matrix`] for the container, [`matrix::kernel`] for the
/// slice-level product routines.
pub use linvec_matrix as matrix;

/// Common imports for typical linvec usage.
///
/// ```rust
/// use linvec::prelude::*;
/// ```
pub mod prelude {
    pub use linvec_core::{LinalgError, Scalar, Shape};
    pub use linvec_matrix::Matrix;
    pub use linvec_vector::{GrowthPolicy, Vector};
}
