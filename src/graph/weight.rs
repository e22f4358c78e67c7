//! Numeric edge weights.
//!
//! Shortest-path traversals are generic over the [`Weight`] trait, which is
//! implemented for all primitive integer and floating point types. Unreachable
//! nodes are represented by the absence of a distance instead of a sentinel
//! value, so integer weights do not need to reserve a maximum for "infinity".

use std::fmt;

/// A numeric type usable as an edge weight and path distance.
///
/// Implementations must provide an additive identity, a unit step (used for
/// edges that carry no explicit weight) and an addition that reports
/// overflow instead of wrapping.
pub trait Weight: Copy + PartialOrd + fmt::Debug + Send + Sync + 'static {
    /// The additive identity, used as the distance of the source.
    fn zero() -> Self;

    /// The weight assumed for an edge without an explicit weight.
    fn one() -> Self;

    /// Adds two weights, returning `None` on overflow.
    ///
    /// Floating point implementations never overflow; they saturate to infinity.
    fn checked_add(self, other: Self) -> Option<Self>;

    /// Returns `true` if the weight is strictly below zero.
    fn is_negative(self) -> bool {
        self < Self::zero()
    }

    /// Returns `false` for infinities and NaN. Integers are always finite.
    fn is_finite(self) -> bool {
        true
    }
}

macro_rules! impl_integer_weight {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Weight for $ty {
                #[inline]
                fn zero() -> Self {
                    0
                }

                #[inline]
                fn one() -> Self {
                    1
                }

                #[inline]
                fn checked_add(self, other: Self) -> Option<Self> {
                    <$ty>::checked_add(self, other)
                }
            }
        )*
    };
}

macro_rules! impl_float_weight {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Weight for $ty {
                #[inline]
                fn zero() -> Self {
                    0.0
                }

                #[inline]
                fn one() -> Self {
                    1.0
                }

                #[inline]
                fn checked_add(self, other: Self) -> Option<Self> {
                    Some(self + other)
                }

                #[inline]
                fn is_finite(self) -> bool {
                    <$ty>::is_finite(self)
                }
            }
        )*
    };
}

impl_integer_weight!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
impl_float_weight!(f32, f64);
