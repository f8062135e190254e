//! Growable contiguous numeric vector with explicit capacity management.
//!
//! [`Vector<T>`] owns a single boxed buffer whose length is the vector's
//! capacity. Growth is explicit and exact:
//!
//! ```text
//! Vector<T>
//! ├── data: Box<[T]>      (capacity slots, spare slots = T::default())
//! ├── len: u32            (valid prefix of data)
//! └── policy: GrowthPolicy (push overflow → max(cap * factor, floor))
//! ```
//!
//! - `reserve(n)` reallocates to exactly `n` slots when `n > capacity`.
//! - `push` grows by the [`GrowthPolicy`] (doubling with a floor of 1).
//! - `resize` shrinks capacity when truncating, reserves when growing
//!   past capacity, and reuses spare slots otherwise.
//! - `clear` releases the buffer.
//! - `take` transfers the buffer out, leaving the source empty.
//!
//! All sizes are bounded by `u32::MAX`; oversized requests fail with
//! [`LinalgError::AllocationFailed`](linvec_core::LinalgError) before
//! anything is allocated.
//!
//! Reallocations are reported at `debug` level through the `log` facade.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

mod buffer;
pub mod config;
mod iter;
mod ops;
pub mod vector;

pub use config::GrowthPolicy;
pub use vector::Vector;
