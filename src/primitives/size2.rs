//! 2D size type.

use super::{Size2D, TwoDimensional};
use crate::dimensional::MultiDimensional;
use crate::impl_dimensional_ops;
use crate::scalar::Scalar;
use std::fmt;

/// A 2D extent with a width and a height.
///
/// Index 0 is `width`, index 1 is `height`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Size2<F> {
    pub width: F,
    pub height: F,
}

impl<F: Scalar> Size2<F> {
    /// Creates a new size.
    #[inline]
    pub fn new(width: F, height: F) -> Self {
        Self { width, height }
    }

    /// Creates a zero size.
    #[inline]
    pub fn zero() -> Self {
        Self {
            width: F::zero(),
            height: F::zero(),
        }
    }
}

impl<F: Scalar> MultiDimensional for Size2<F> {
    type Scalar = F;

    #[inline]
    fn dimensions(&self) -> usize {
        2
    }

    #[inline]
    fn component(&self, index: usize) -> &F {
        match index {
            0 => &self.width,
            1 => &self.height,
            _ => panic!("index {index} out of bounds for Size2"),
        }
    }

    #[inline]
    fn component_mut(&mut self, index: usize) -> &mut F {
        match index {
            0 => &mut self.width,
            1 => &mut self.height,
            _ => panic!("index {index} out of bounds for Size2"),
        }
    }
}

impl<F: Scalar> TwoDimensional for Size2<F> {
    #[inline]
    fn from_pair(width: F, height: F) -> Self {
        Self { width, height }
    }
}

impl<F: Scalar> Size2D for Size2<F> {}

impl_dimensional_ops!(Size2);

impl<F: Scalar> From<(F, F)> for Size2<F> {
    fn from((width, height): (F, F)) -> Self {
        Self { width, height }
    }
}

impl<F: Scalar> fmt::Display for Size2<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} x {}", self.width, self.height)
    }
}
