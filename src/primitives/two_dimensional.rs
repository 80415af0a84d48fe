//! Two-component values: the shared 2D algebra plus point and size flavours.
//!
//! [`TwoDimensional`] covers anything with exactly two components.
//! [`Point2D`] names them `x`/`y` and adds the point geometry (segment
//! distance, rotation, translation). [`Size2D`] names them `width`/`height`.
//! All geometry lives in provided methods, so a host type only needs to
//! implement indexed access and a constructor.

use crate::dimensional::{lerp, MultiDimensional};
use crate::log::debug;
use crate::scalar::Scalar;
use num_traits::{Float, One, Zero};

/// A [`MultiDimensional`] value with exactly two components.
///
/// Implementors must report `dimensions() == 2`.
pub trait TwoDimensional: MultiDimensional {
    /// Builds a value from its component at index 0 and index 1.
    fn from_pair(first: Self::Scalar, second: Self::Scalar) -> Self;

    /// Component at index 0.
    #[inline]
    fn first(&self) -> Self::Scalar {
        *self.component(0)
    }

    /// Component at index 1.
    #[inline]
    fn second(&self) -> Self::Scalar {
        *self.component(1)
    }

    /// Builds a value from any other 2D value with the same scalar type.
    #[inline]
    fn convert_from<T>(other: &T) -> Self
    where
        T: TwoDimensional<Scalar = Self::Scalar>,
    {
        Self::from_pair(other.first(), other.second())
    }

    /// Returns the components as a tuple.
    #[inline]
    fn to_pair(&self) -> (Self::Scalar, Self::Scalar) {
        (self.first(), self.second())
    }

    /// Dot product: `a0 * b0 + a1 * b1`.
    #[inline]
    fn dot<T>(&self, other: &T) -> Self::Scalar
    where
        T: TwoDimensional<Scalar = Self::Scalar>,
    {
        self.first() * other.first() + self.second() * other.second()
    }

    /// 2D cross product: `a0 * b1 - a1 * b0`.
    ///
    /// This is the signed area of the parallelogram spanned by the two values.
    /// Positive means `other` is counter-clockwise from `self`.
    #[inline]
    fn cross<T>(&self, other: &T) -> Self::Scalar
    where
        T: TwoDimensional<Scalar = Self::Scalar>,
    {
        self.first() * other.second() - self.second() * other.first()
    }

    /// Squared Euclidean distance. Avoids the square root.
    #[inline]
    fn distance_squared<T>(&self, other: &T) -> Self::Scalar
    where
        T: TwoDimensional<Scalar = Self::Scalar>,
    {
        let d0 = self.first() - other.first();
        let d1 = self.second() - other.second();
        d0 * d0 + d1 * d1
    }

    /// Euclidean distance.
    #[inline]
    fn distance<T>(&self, other: &T) -> Self::Scalar
    where
        T: TwoDimensional<Scalar = Self::Scalar>,
    {
        self.distance_squared(other).sqrt()
    }
}

/// A 2D point with `x` (index 0) and `y` (index 1).
pub trait Point2D: TwoDimensional {
    /// Horizontal coordinate.
    #[inline]
    fn x(&self) -> Self::Scalar {
        self.first()
    }

    /// Vertical coordinate.
    #[inline]
    fn y(&self) -> Self::Scalar {
        self.second()
    }

    /// Sets the horizontal coordinate.
    #[inline]
    fn set_x(&mut self, x: Self::Scalar) {
        *self.component_mut(0) = x;
    }

    /// Sets the vertical coordinate.
    #[inline]
    fn set_y(&mut self, y: Self::Scalar) {
        *self.component_mut(1) = y;
    }

    /// Creates a point from coordinates.
    #[inline]
    fn from_xy(x: Self::Scalar, y: Self::Scalar) -> Self {
        Self::from_pair(x, y)
    }

    /// Creates a point on the x axis.
    #[inline]
    fn from_x(x: Self::Scalar) -> Self {
        Self::from_pair(x, Self::Scalar::zero())
    }

    /// Creates a point on the y axis.
    #[inline]
    fn from_y(y: Self::Scalar) -> Self {
        Self::from_pair(Self::Scalar::zero(), y)
    }

    /// Creates the point `(width, height)`.
    #[inline]
    fn from_size<S>(size: &S) -> Self
    where
        S: Size2D<Scalar = Self::Scalar>,
    {
        Self::from_pair(size.width(), size.height())
    }

    /// Returns a copy with `x` replaced.
    #[inline]
    fn with_x(self, x: Self::Scalar) -> Self {
        Self::from_pair(x, self.y())
    }

    /// Returns a copy with `y` replaced.
    #[inline]
    fn with_y(self, y: Self::Scalar) -> Self {
        Self::from_pair(self.x(), y)
    }

    /// Applies `f` to both coordinates.
    #[inline]
    fn map<G>(self, f: G) -> Self
    where
        G: FnMut(Self::Scalar) -> Self::Scalar,
    {
        self.map_components(f)
    }

    /// Returns the point halfway to `other`.
    #[inline]
    fn midpoint(self, other: Self) -> Self {
        lerp(self, other, Self::Scalar::half())
    }

    /// Angle in radians of the direction from `self` to `other`, in `[-π, π]`.
    #[inline]
    fn angle_to<P>(&self, other: &P) -> Self::Scalar
    where
        P: Point2D<Scalar = Self::Scalar>,
    {
        (other.y() - self.y()).atan2(other.x() - self.x())
    }

    /// Returns the point of segment `v`–`w` closest to `self`.
    ///
    /// The point is projected onto the line through the endpoints at
    /// `t = dot(p - v, w - v) / |w - v|²`. For `t < 0` the closest point is
    /// `v`, for `t > 1` it is `w`, otherwise the projection. Coinciding
    /// endpoints return `v`.
    fn closest_point_on_segment<P>(&self, v: P, w: P) -> P
    where
        P: Point2D<Scalar = Self::Scalar>,
    {
        if v.same_components(&w) {
            debug!("degenerate segment, falling back to point distance");
            return v;
        }

        let p = P::convert_from(self);
        let segment = w.subtracted(&v);
        let l2 = v.distance_squared(&w);
        let t = p.subtracted(&v).dot(&segment) / l2;

        if t < Self::Scalar::zero() {
            v
        } else if t > Self::Scalar::one() {
            w
        } else {
            lerp(v, w, t)
        }
    }

    /// Minimum distance from `self` to the segment `v`–`w`.
    ///
    /// # Example
    ///
    /// ```
    /// use geometry::{Point2, Point2D};
    ///
    /// let p = Point2::new(0.0, 0.0);
    /// let d = p.distance_to_segment(Point2::new(1.0, 0.0), Point2::new(1.0, 1.0));
    /// assert_eq!(d, 1.0);
    /// ```
    #[inline]
    fn distance_to_segment<P>(&self, v: P, w: P) -> Self::Scalar
    where
        P: Point2D<Scalar = Self::Scalar>,
    {
        self.distance(&self.closest_point_on_segment(v, w))
    }

    /// Same as [`distance_to_segment`](Self::distance_to_segment) with the
    /// endpoints given as a tuple.
    #[inline]
    fn distance_to_line_segment<P>(&self, segment: (P, P)) -> Self::Scalar
    where
        P: Point2D<Scalar = Self::Scalar>,
    {
        self.distance_to_segment(segment.0, segment.1)
    }

    /// Rotates in place by `theta` radians counter-clockwise around `center`.
    fn rotate<P>(&mut self, theta: Self::Scalar, center: &P)
    where
        P: Point2D<Scalar = Self::Scalar>,
    {
        let (sin_theta, cos_theta) = theta.sin_cos();
        let dx = self.x() - center.x();
        let dy = self.y() - center.y();

        self.set_x(center.x() + (dx * cos_theta - dy * sin_theta));
        self.set_y(center.y() + (dx * sin_theta + dy * cos_theta));
    }

    /// Returns the point rotated by `theta` radians counter-clockwise around
    /// the origin.
    #[inline]
    fn rotated(self, theta: Self::Scalar) -> Self {
        let (sin_theta, cos_theta) = theta.sin_cos();
        Self::from_pair(
            self.x() * cos_theta - self.y() * sin_theta,
            self.x() * sin_theta + self.y() * cos_theta,
        )
    }

    /// Returns the point rotated by `theta` radians counter-clockwise around
    /// `center`.
    #[inline]
    fn rotated_around(self, theta: Self::Scalar, center: Self) -> Self {
        self.subtracted(&center).rotated(theta).added(&center)
    }

    /// Adds `dx` to `x` and `dy` to `y`. A `None` delta leaves its
    /// coordinate untouched.
    fn translate(&mut self, dx: Option<Self::Scalar>, dy: Option<Self::Scalar>) {
        if let Some(dx) = dx {
            self.set_x(self.x() + dx);
        }
        if let Some(dy) = dy {
            self.set_y(self.y() + dy);
        }
    }

    /// Returns a translated copy. See [`translate`](Self::translate).
    #[inline]
    fn translated(mut self, dx: Option<Self::Scalar>, dy: Option<Self::Scalar>) -> Self {
        self.translate(dx, dy);
        self
    }

    /// Returns `true` if `other` lies strictly within `precision` of `self`.
    #[inline]
    fn approx_eq<P>(&self, other: &P, precision: Self::Scalar) -> bool
    where
        P: Point2D<Scalar = Self::Scalar>,
    {
        self.distance(other) < precision.abs()
    }

    /// Rounds both coordinates to `decimals` decimal places.
    ///
    /// Negative `decimals` are treated as zero.
    fn rounded(self, decimals: i32) -> Self {
        let decimals = decimals.max(0);
        if decimals == 0 {
            return self.map(|c| c.round());
        }
        let factor = Self::Scalar::literal(10.0).powi(decimals);
        self.map(|c| (c * factor).round() / factor)
    }
}

/// A 2D size with `width` (index 0) and `height` (index 1).
pub trait Size2D: TwoDimensional {
    /// Horizontal extent.
    #[inline]
    fn width(&self) -> Self::Scalar {
        self.first()
    }

    /// Vertical extent.
    #[inline]
    fn height(&self) -> Self::Scalar {
        self.second()
    }

    /// Sets the horizontal extent.
    #[inline]
    fn set_width(&mut self, width: Self::Scalar) {
        *self.component_mut(0) = width;
    }

    /// Sets the vertical extent.
    #[inline]
    fn set_height(&mut self, height: Self::Scalar) {
        *self.component_mut(1) = height;
    }

    /// Creates a size from its extents.
    #[inline]
    fn from_wh(width: Self::Scalar, height: Self::Scalar) -> Self {
        Self::from_pair(width, height)
    }

    /// Creates the size `(x, y)`.
    #[inline]
    fn from_point<P>(point: &P) -> Self
    where
        P: Point2D<Scalar = Self::Scalar>,
    {
        Self::from_pair(point.x(), point.y())
    }

    /// Returns a copy with `width` replaced.
    #[inline]
    fn with_width(self, width: Self::Scalar) -> Self {
        Self::from_pair(width, self.height())
    }

    /// Returns a copy with `height` replaced.
    #[inline]
    fn with_height(self, height: Self::Scalar) -> Self {
        Self::from_pair(self.width(), height)
    }

    /// Applies `f` to both extents.
    #[inline]
    fn map<G>(self, f: G) -> Self
    where
        G: FnMut(Self::Scalar) -> Self::Scalar,
    {
        self.map_components(f)
    }

    /// `width * height`.
    #[inline]
    fn area(&self) -> Self::Scalar {
        self.width() * self.height()
    }

    /// The smaller of the two extents.
    #[inline]
    fn min_extent(&self) -> Self::Scalar {
        self.width().min(self.height())
    }

    /// The larger of the two extents.
    #[inline]
    fn max_extent(&self) -> Self::Scalar {
        self.width().max(self.height())
    }
}

/// Rotates `point` by `radians` counter-clockwise around `center`.
#[inline]
pub fn rotate_point<P: Point2D>(point: P, radians: P::Scalar, center: &P) -> P {
    let mut p = point;
    p.rotate(radians, center);
    p
}
