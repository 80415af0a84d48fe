//! 2D line segment type.

use super::{Point2, Point2D, TwoDimensional};
use crate::dimensional::MultiDimensional;
use crate::scalar::Scalar;

/// A 2D line segment defined by two endpoints.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment2<F> {
    pub start: Point2<F>,
    pub end: Point2<F>,
}

impl<F: Scalar> Segment2<F> {
    /// Creates a new segment from two points.
    #[inline]
    pub fn new(start: Point2<F>, end: Point2<F>) -> Self {
        Self { start, end }
    }

    /// Creates a segment from coordinate pairs.
    #[inline]
    pub fn from_coords(x1: F, y1: F, x2: F, y2: F) -> Self {
        Self {
            start: Point2::new(x1, y1),
            end: Point2::new(x2, y2),
        }
    }

    /// Returns `end - start`.
    #[inline]
    pub fn direction(self) -> Point2<F> {
        self.end - self.start
    }

    /// Squared length. Avoids the square root.
    #[inline]
    pub fn length_squared(self) -> F {
        self.start.distance_squared(&self.end)
    }

    /// Distance between the endpoints.
    #[inline]
    pub fn length(self) -> F {
        self.start.distance(&self.end)
    }

    /// Returns the midpoint of the segment.
    #[inline]
    pub fn midpoint(self) -> Point2<F> {
        self.start.midpoint(self.end)
    }

    /// Returns the point at parameter `t` along the segment.
    ///
    /// - `t = 0` returns `start`
    /// - `t = 1` returns `end`
    /// - Values outside [0, 1] extrapolate beyond the segment
    #[inline]
    pub fn point_at(self, t: F) -> Point2<F> {
        self.start.lerp(self.end, t)
    }

    /// Returns the reversed segment (start and end swapped).
    #[inline]
    pub fn reversed(self) -> Self {
        Self {
            start: self.end,
            end: self.start,
        }
    }

    /// Computes the closest point on the segment to `p`.
    #[inline]
    pub fn closest_point<P>(self, p: &P) -> Point2<F>
    where
        P: Point2D<Scalar = F>,
    {
        p.closest_point_on_segment(self.start, self.end)
    }

    /// Computes the distance from `p` to this segment.
    #[inline]
    pub fn distance_to_point<P>(self, p: &P) -> F
    where
        P: Point2D<Scalar = F>,
    {
        p.distance_to_segment(self.start, self.end)
    }

    /// Returns `true` if both endpoints are the same point.
    #[inline]
    pub fn is_degenerate(self) -> bool {
        self.start.same_components(&self.end)
    }
}

impl<F: Scalar> From<(Point2<F>, Point2<F>)> for Segment2<F> {
    fn from((start, end): (Point2<F>, Point2<F>)) -> Self {
        Self::new(start, end)
    }
}

impl<F: Scalar> From<Segment2<F>> for (Point2<F>, Point2<F>) {
    fn from(segment: Segment2<F>) -> Self {
        (segment.start, segment.end)
    }
}
