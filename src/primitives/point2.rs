//! 2D point type.

use super::{Point2D, TwoDimensional};
use crate::dimensional::MultiDimensional;
use crate::impl_dimensional_ops;
use crate::scalar::Scalar;
use std::fmt;

/// A 2D point with x and y coordinates.
///
/// Generic over floating-point types (`f32` or `f64`). Index 0 is `x`,
/// index 1 is `y`. Geometry (distances, rotation, segment distance) comes
/// from the [`Point2D`] and [`TwoDimensional`] traits.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point2<F> {
    pub x: F,
    pub y: F,
}

impl<F: Scalar> Point2<F> {
    /// Creates a new point.
    #[inline]
    pub fn new(x: F, y: F) -> Self {
        Self { x, y }
    }

    /// Creates a point at the origin (0, 0).
    #[inline]
    pub fn origin() -> Self {
        Self {
            x: F::zero(),
            y: F::zero(),
        }
    }
}

impl<F: Scalar> MultiDimensional for Point2<F> {
    type Scalar = F;

    #[inline]
    fn dimensions(&self) -> usize {
        2
    }

    #[inline]
    fn component(&self, index: usize) -> &F {
        match index {
            0 => &self.x,
            1 => &self.y,
            _ => panic!("index {index} out of bounds for Point2"),
        }
    }

    #[inline]
    fn component_mut(&mut self, index: usize) -> &mut F {
        match index {
            0 => &mut self.x,
            1 => &mut self.y,
            _ => panic!("index {index} out of bounds for Point2"),
        }
    }
}

impl<F: Scalar> TwoDimensional for Point2<F> {
    #[inline]
    fn from_pair(x: F, y: F) -> Self {
        Self { x, y }
    }
}

impl<F: Scalar> Point2D for Point2<F> {}

impl_dimensional_ops!(Point2);

impl<F: Scalar> From<(F, F)> for Point2<F> {
    fn from((x, y): (F, F)) -> Self {
        Self { x, y }
    }
}

impl<F: Scalar> From<Point2<F>> for (F, F) {
    fn from(p: Point2<F>) -> Self {
        (p.x, p.y)
    }
}

impl<F: Scalar> fmt::Display for Point2<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
