//! The element trait for arithmetic containers.

use std::fmt::Debug;
use std::ops::{Add, AddAssign, Mul, MulAssign};

/// A numeric element usable in container arithmetic.
///
/// `Default::default()` must be the additive identity; every primitive
/// integer and float satisfies this. Blanket-implemented for any type
/// with the required operator and marker impls.
pub trait Scalar:
    Copy
    + Default
    + PartialEq
    + Debug
    + Add<Output = Self>
    + AddAssign
    + Mul<Output = Self>
    + MulAssign
{
    /// The additive identity, used to seed every accumulator.
    #[inline]
    fn zero() -> Self {
        Self::default()
    }
}

impl<T> Scalar for T where
    T: Copy
        + Default
        + PartialEq
        + Debug
        + Add<Output = T>
        + AddAssign
        + Mul<Output = T>
        + MulAssign
{
}

/// Implement `scalar * container` for concrete primitive element types.
///
/// Coherence rules forbid a generic `impl<T> Mul<C<T>> for T`, so the
/// left-hand scalar form is stamped out per type and delegates to the
/// container's own `container * scalar` impl.
///
/// ```ignore
/// linvec_core::impl_scalar_lhs_mul!(Vector; i32, f64);
/// ```
#[macro_export]
macro_rules! impl_scalar_lhs_mul {
    ($container:ident; $($t:ty),* $(,)?) => {
        $(
            impl ::core::ops::Mul<$container<$t>> for $t {
                type Output = $container<$t>;

                #[inline]
                fn mul(self, rhs: $container<$t>) -> $container<$t> {
                    rhs * self
                }
            }

            impl<'a> ::core::ops::Mul<&'a $container<$t>> for $t {
                type Output = $container<$t>;

                #[inline]
                fn mul(self, rhs: &'a $container<$t>) -> $container<$t> {
                    rhs * self
                }
            }
        )*
    };
}
