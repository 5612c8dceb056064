//! Floating-point abstraction shared by every value container and quantity.

use crate::unit::Convertible;
use crate::value::Payload;
use core::fmt::{Debug, Display, LowerExp};
use core::iter::Sum;
use num_traits::{Float, NumAssign};

/// Real number type a quantity is stored in.
///
/// Implemented for `f32` and `f64`; `f64` is the default everywhere a quantity takes a numeric
/// parameter. Unit conversion factors are `f64` constants and are narrowed with
/// [`Number::from_f64`]. Every number is also a [`Payload`], so a bare scalar can be stored in a
/// quantity.
pub trait Number:
    Float
    + NumAssign
    + Default
    + Debug
    + Display
    + LowerExp
    + Sum
    + Convertible
    + Payload
    + Send
    + Sync
    + 'static
{
    /// Narrows (or passes through) an `f64`.
    fn from_f64(value: f64) -> Self;

    /// Widens (or passes through) to `f64`.
    fn as_f64(self) -> f64;

    /// Bit pattern used for hashing: `-0.0` maps to the pattern of `0.0` so that equal values hash
    /// alike.
    #[inline]
    fn hash_bits(self) -> u64 {
        let value = self.as_f64();
        if value == 0.0 {
            0.0_f64.to_bits()
        } else {
            value.to_bits()
        }
    }
}

impl Number for f32 {
    #[inline]
    fn from_f64(value: f64) -> Self {
        value as f32
    }

    #[inline]
    fn as_f64(self) -> f64 {
        f64::from(self)
    }
}

impl Number for f64 {
    #[inline]
    fn from_f64(value: f64) -> Self {
        value
    }

    #[inline]
    fn as_f64(self) -> f64 {
        self
    }
}
