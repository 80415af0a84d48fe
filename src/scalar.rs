//! Scalar type underlying every geometric value.

use num_traits::{Float, FloatConst};
use std::fmt::{Debug, Display};

/// A floating-point scalar usable as a component of geometric values.
///
/// Implemented for `f32` and `f64`. Trigonometry, `floor`, `ceil` and `sqrt`
/// come from [`Float`], so the right math routine is picked at compile time.
pub trait Scalar: Float + FloatConst + Debug + Display + Default + 'static {
    /// Converts an `f64` literal into this scalar type.
    fn literal(value: f64) -> Self;

    /// Returns `2`.
    #[inline]
    fn two() -> Self {
        Self::one() + Self::one()
    }

    /// Returns `0.5`.
    #[inline]
    fn half() -> Self {
        Self::one() / Self::two()
    }

    /// Returns π.
    #[inline]
    fn pi() -> Self {
        Self::PI()
    }

    /// Returns 2π.
    #[inline]
    fn two_pi() -> Self {
        Self::PI() * Self::two()
    }
}

impl Scalar for f32 {
    #[inline]
    fn literal(value: f64) -> Self {
        value as f32
    }
}

impl Scalar for f64 {
    #[inline]
    fn literal(value: f64) -> Self {
        value
    }
}
