//! Origin-and-size rectangle.

use super::{Point2, Size2, Size2D};
use crate::dimensional::{lerp, MultiDimensional};
use crate::scalar::Scalar;
use std::ops::{Add, AddAssign, Mul, MulAssign, Sub, SubAssign};

/// A 2D rectangle described by its origin corner and its size.
///
/// The origin is the corner with the smallest coordinates when the size is
/// non-negative. Negative sizes are kept as given.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect<F> {
    pub origin: Point2<F>,
    pub size: Size2<F>,
}

impl<F: Scalar> Rect<F> {
    /// Creates a new rectangle.
    #[inline]
    pub fn new(origin: Point2<F>, size: Size2<F>) -> Self {
        Self { origin, size }
    }

    /// Creates a rectangle from coordinates and extents.
    #[inline]
    pub fn from_xywh(x: F, y: F, width: F, height: F) -> Self {
        Self::new(Point2::new(x, y), Size2::new(width, height))
    }

    /// Creates a rectangle of the given size at the origin.
    #[inline]
    pub fn from_size(size: Size2<F>) -> Self {
        Self::new(Point2::origin(), size)
    }

    /// Creates a rectangle of the given size centered on `center`.
    #[inline]
    pub fn from_center(center: Point2<F>, size: Size2<F>) -> Self {
        Self::new(center - size / F::two(), size)
    }

    /// Horizontal extent.
    #[inline]
    pub fn width(self) -> F {
        self.size.width
    }

    /// Vertical extent.
    #[inline]
    pub fn height(self) -> F {
        self.size.height
    }

    /// Left edge.
    #[inline]
    pub fn min_x(self) -> F {
        self.origin.x
    }

    /// Top edge, the smaller y coordinate.
    #[inline]
    pub fn min_y(self) -> F {
        self.origin.y
    }

    /// Right edge.
    #[inline]
    pub fn max_x(self) -> F {
        self.origin.x + self.size.width
    }

    /// Bottom edge, the larger y coordinate.
    #[inline]
    pub fn max_y(self) -> F {
        self.origin.y + self.size.height
    }

    /// Returns the center point.
    #[inline]
    pub fn center(self) -> Point2<F> {
        self.origin + self.size * F::half()
    }

    /// Moves the rectangle so its center is at `center`. The size is kept.
    #[inline]
    pub fn set_center(&mut self, center: Point2<F>) {
        self.origin = center - self.size * F::half();
    }

    /// Returns a copy moved to `origin`.
    #[inline]
    pub fn with_origin(self, origin: Point2<F>) -> Self {
        Self::new(origin, self.size)
    }

    /// Returns a copy resized to `size`, keeping the origin.
    #[inline]
    pub fn with_size(self, size: Size2<F>) -> Self {
        Self::new(self.origin, size)
    }

    /// Returns a copy moved so its center is at `center`.
    #[inline]
    pub fn with_center(self, center: Point2<F>) -> Self {
        Self::from_center(center, self.size)
    }

    /// Returns the area of the rectangle.
    #[inline]
    pub fn area(self) -> F {
        self.size.area()
    }

    /// The smaller of width and height.
    #[inline]
    pub fn min_extent(self) -> F {
        self.size.min_extent()
    }

    /// The larger of width and height.
    #[inline]
    pub fn max_extent(self) -> F {
        self.size.max_extent()
    }

    /// Checks if a point is inside or on the boundary.
    #[inline]
    pub fn contains_point(self, p: Point2<F>) -> bool {
        p.x >= self.min_x() && p.x <= self.max_x() && p.y >= self.min_y() && p.y <= self.max_y()
    }

    /// Checks if `other` lies entirely inside this rectangle.
    #[inline]
    pub fn contains(self, other: Self) -> bool {
        other.min_x() >= self.min_x()
            && other.max_x() <= self.max_x()
            && other.min_y() >= self.min_y()
            && other.max_y() <= self.max_y()
    }

    /// Checks if two rectangles overlap (including touching).
    #[inline]
    pub fn intersects(self, other: Self) -> bool {
        self.min_x() <= other.max_x()
            && self.max_x() >= other.min_x()
            && self.min_y() <= other.max_y()
            && self.max_y() >= other.min_y()
    }

    /// Checks if this rectangle lies entirely above `other`.
    ///
    /// y grows downwards, so "above" means a smaller y. Touching edges do not
    /// count.
    #[inline]
    pub fn is_above(self, other: Self) -> bool {
        self.max_y() < other.min_y()
    }

    /// Checks if this rectangle lies entirely below `other`.
    #[inline]
    pub fn is_below(self, other: Self) -> bool {
        self.min_y() > other.max_y()
    }

    /// Checks if this rectangle lies entirely left of `other`.
    #[inline]
    pub fn is_left_of(self, other: Self) -> bool {
        self.max_x() < other.min_x()
    }

    /// Checks if this rectangle lies entirely right of `other`.
    #[inline]
    pub fn is_right_of(self, other: Self) -> bool {
        self.min_x() > other.max_x()
    }

    /// Interpolates origin and size independently.
    ///
    /// `factor` is not clamped.
    #[inline]
    pub fn lerp(self, upper: Self, factor: F) -> Self {
        lerp_rect(self, upper, factor)
    }
}

/// Linearly interpolates two rectangles by interpolating their origins and
/// sizes.
#[inline]
pub fn lerp_rect<F: Scalar>(lower: Rect<F>, upper: Rect<F>, factor: F) -> Rect<F> {
    Rect::new(
        lerp(lower.origin, upper.origin, factor),
        lerp(lower.size, upper.size, factor),
    )
}

// Rect + Point2 = translated Rect
impl<F: Scalar> Add<Point2<F>> for Rect<F> {
    type Output = Self;

    #[inline]
    fn add(self, offset: Point2<F>) -> Self {
        Self::new(self.origin + offset, self.size)
    }
}

impl<F: Scalar> Sub<Point2<F>> for Rect<F> {
    type Output = Self;

    #[inline]
    fn sub(self, offset: Point2<F>) -> Self {
        Self::new(self.origin - offset, self.size)
    }
}

impl<F: Scalar> AddAssign<Point2<F>> for Rect<F> {
    #[inline]
    fn add_assign(&mut self, offset: Point2<F>) {
        self.origin += offset;
    }
}

impl<F: Scalar> SubAssign<Point2<F>> for Rect<F> {
    #[inline]
    fn sub_assign(&mut self, offset: Point2<F>) {
        self.origin -= offset;
    }
}

// Rect + Size2 = grown Rect, origin kept
impl<F: Scalar> Add<Size2<F>> for Rect<F> {
    type Output = Self;

    #[inline]
    fn add(self, growth: Size2<F>) -> Self {
        Self::new(self.origin, self.size + growth)
    }
}

impl<F: Scalar> Sub<Size2<F>> for Rect<F> {
    type Output = Self;

    #[inline]
    fn sub(self, shrink: Size2<F>) -> Self {
        Self::new(self.origin, self.size - shrink)
    }
}

impl<F: Scalar> AddAssign<Size2<F>> for Rect<F> {
    #[inline]
    fn add_assign(&mut self, growth: Size2<F>) {
        self.size += growth;
    }
}

impl<F: Scalar> SubAssign<Size2<F>> for Rect<F> {
    #[inline]
    fn sub_assign(&mut self, shrink: Size2<F>) {
        self.size -= shrink;
    }
}

// Rect * factor scales the size around the center
impl<F: Scalar> Mul<F> for Rect<F> {
    type Output = Self;

    #[inline]
    fn mul(self, factor: F) -> Self {
        Self::from_center(self.center(), self.size.scaled(factor))
    }
}

impl<F: Scalar> MulAssign<F> for Rect<F> {
    #[inline]
    fn mul_assign(&mut self, factor: F) {
        *self = *self * factor;
    }
}

impl Mul<Rect<f32>> for f32 {
    type Output = Rect<f32>;

    #[inline]
    fn mul(self, rect: Rect<f32>) -> Rect<f32> {
        rect * self
    }
}

impl Mul<Rect<f64>> for f64 {
    type Output = Rect<f64>;

    #[inline]
    fn mul(self, rect: Rect<f64>) -> Rect<f64> {
        rect * self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_from_center() {
        let r: Rect<f64> = Rect::from_center(Point2::new(5.0, 5.0), Size2::new(4.0, 2.0));
        assert_eq!(r.origin, Point2::new(3.0, 4.0));
        assert_eq!(r.center(), Point2::new(5.0, 5.0));
    }

    #[test]
    fn test_extents() {
        let r: Rect<f64> = Rect::from_xywh(1.0, 2.0, 3.0, 4.0);
        assert_eq!(r.min_x(), 1.0);
        assert_eq!(r.min_y(), 2.0);
        assert_eq!(r.max_x(), 4.0);
        assert_eq!(r.max_y(), 6.0);
        assert_eq!(r.width(), 3.0);
        assert_eq!(r.height(), 4.0);
        assert_eq!(r.area(), 12.0);
    }

    #[test]
    fn test_set_center() {
        let mut r: Rect<f64> = Rect::from_size(Size2::new(2.0, 2.0));
        r.set_center(Point2::new(10.0, 10.0));
        assert_eq!(r.origin, Point2::new(9.0, 9.0));
        assert_eq!(r.with_center(Point2::new(1.0, 1.0)).origin, Point2::origin());
    }

    #[test]
    fn test_contains_and_intersects() {
        let r: Rect<f64> = Rect::from_xywh(0.0, 0.0, 10.0, 10.0);
        assert!(r.contains_point(Point2::new(5.0, 5.0)));
        assert!(r.contains_point(Point2::new(10.0, 0.0)));
        assert!(!r.contains_point(Point2::new(10.5, 0.0)));

        assert!(r.contains(Rect::from_xywh(1.0, 1.0, 2.0, 2.0)));
        assert!(!r.contains(Rect::from_xywh(9.0, 9.0, 2.0, 2.0)));

        assert!(r.intersects(Rect::from_xywh(9.0, 9.0, 2.0, 2.0)));
        assert!(r.intersects(Rect::from_xywh(10.0, 0.0, 1.0, 1.0)));
        assert!(!r.intersects(Rect::from_xywh(11.0, 0.0, 1.0, 1.0)));
    }

    #[test]
    fn test_lerp() {
        let a: Rect<f64> = Rect::from_xywh(0.0, 0.0, 10.0, 10.0);
        let b = Rect::from_xywh(10.0, 20.0, 30.0, 40.0);

        assert_eq!(a.lerp(b, 0.0), a);
        assert_eq!(a.lerp(b, 1.0), b);

        let mid = lerp_rect(a, b, 0.5);
        assert_relative_eq!(mid.origin.x, 5.0);
        assert_relative_eq!(mid.origin.y, 10.0);
        assert_relative_eq!(mid.size.width, 20.0);
        assert_relative_eq!(mid.size.height, 25.0);
    }

    #[test]
    fn test_operators() {
        let r: Rect<f64> = Rect::from_xywh(1.0, 1.0, 2.0, 2.0);
        assert_eq!(r + Point2::new(1.0, 2.0), Rect::from_xywh(2.0, 3.0, 2.0, 2.0));
        assert_eq!(r - Point2::new(1.0, 1.0), Rect::from_xywh(0.0, 0.0, 2.0, 2.0));
        assert_eq!(r + Size2::new(1.0, 1.0), Rect::from_xywh(1.0, 1.0, 3.0, 3.0));
        assert_eq!(r - Size2::new(1.0, 1.0), Rect::from_xywh(1.0, 1.0, 1.0, 1.0));

        let mut moved = r;
        moved += Point2::new(1.0, 1.0);
        moved -= Point2::new(0.5, 0.5);
        assert_eq!(moved.origin, Point2::new(1.5, 1.5));
    }

    #[test]
    fn test_scale_around_center() {
        let r: Rect<f64> = Rect::from_xywh(0.0, 0.0, 4.0, 2.0);
        let scaled = r * 2.0;
        assert_eq!(scaled.center(), r.center());
        assert_eq!(scaled.size, Size2::new(8.0, 4.0));
        assert_eq!(scaled.origin, Point2::new(-2.0, -1.0));

        assert_eq!(2.0 * r, scaled);

        let mut in_place = r;
        in_place *= 2.0;
        assert_eq!(in_place, scaled);

        let small: Rect<f32> = Rect::from_xywh(1.0, 1.0, 2.0, 2.0);
        assert_eq!(0.5f32 * small, Rect::from_xywh(1.5, 1.5, 1.0, 1.0));
    }

    #[test]
    fn test_grow_and_shrink_in_place() {
        let mut r: Rect<f64> = Rect::from_xywh(1.0, 1.0, 2.0, 2.0);
        r += Size2::new(3.0, 1.0);
        assert_eq!(r, Rect::from_xywh(1.0, 1.0, 5.0, 3.0));
        r -= Size2::new(1.0, 2.0);
        assert_eq!(r, Rect::from_xywh(1.0, 1.0, 4.0, 1.0));
    }

    #[test]
    fn test_extents_follow_size() {
        let r: Rect<f64> = Rect::from_xywh(-5.0, 2.0, 3.0, 7.0);
        assert_eq!(r.min_extent(), 3.0);
        assert_eq!(r.max_extent(), 7.0);
    }

    #[test]
    fn test_relative_position() {
        let r: Rect<f64> = Rect::from_xywh(0.0, 0.0, 2.0, 2.0);
        let lower = Rect::from_xywh(0.0, 5.0, 2.0, 2.0);
        let right = Rect::from_xywh(5.0, 0.0, 2.0, 2.0);

        assert!(r.is_above(lower));
        assert!(lower.is_below(r));
        assert!(!lower.is_above(r));
        assert!(!r.is_below(lower));

        assert!(r.is_left_of(right));
        assert!(right.is_right_of(r));
        assert!(!right.is_left_of(r));
        assert!(!r.is_right_of(right));

        let touching = Rect::from_xywh(2.0, 0.0, 2.0, 2.0);
        assert!(!r.is_left_of(touching));
        assert!(!r.is_above(r));
    }
}
