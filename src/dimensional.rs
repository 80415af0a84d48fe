//! Fixed-dimension values and their component-wise algebra.
//!
//! [`MultiDimensional`] only asks an implementor for its dimension count and
//! indexed access to its components. Everything else (addition, scaling,
//! negation, equality, interpolation) is provided once here and shared by
//! every concrete type. [`impl_dimensional_ops!`](crate::impl_dimensional_ops)
//! then maps the provided methods onto Rust's operator traits.

use crate::scalar::Scalar;
use num_traits::One;

/// A value made of a fixed number of scalar components.
///
/// Components are addressed by index `0..dimensions()`. Indexing outside that
/// range is a caller bug and panics.
pub trait MultiDimensional: Copy {
    /// The scalar type of each component.
    type Scalar: Scalar;

    /// Number of components. Fixed for a given type.
    fn dimensions(&self) -> usize;

    /// Returns a reference to the component at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= self.dimensions()`.
    fn component(&self, index: usize) -> &Self::Scalar;

    /// Returns a mutable reference to the component at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= self.dimensions()`.
    fn component_mut(&mut self, index: usize) -> &mut Self::Scalar;

    /// Returns an iterator over the components in index order.
    fn components(&self) -> Components<'_, Self> {
        Components {
            value: self,
            index: 0,
        }
    }

    /// Overwrites the leading components with `scalars`.
    ///
    /// Components past `scalars.len()` keep their current value.
    ///
    /// # Panics
    ///
    /// Panics if more scalars than dimensions are given.
    fn set_components(&mut self, scalars: &[Self::Scalar]) {
        for (i, &s) in scalars.iter().enumerate() {
            *self.component_mut(i) = s;
        }
    }

    /// Component-wise sum with any value of the same scalar type.
    ///
    /// Only the first `min(self.dimensions(), rhs.dimensions())` components
    /// are combined. Components beyond that keep `self`'s value, and extra
    /// components of `rhs` are never read.
    fn added<M>(self, rhs: &M) -> Self
    where
        M: MultiDimensional<Scalar = Self::Scalar>,
    {
        let mut result = self;
        for i in 0..self.dimensions().min(rhs.dimensions()) {
            *result.component_mut(i) = *self.component(i) + *rhs.component(i);
        }
        result
    }

    /// Component-wise difference; truncates like [`added`](Self::added).
    fn subtracted<M>(self, rhs: &M) -> Self
    where
        M: MultiDimensional<Scalar = Self::Scalar>,
    {
        let mut result = self;
        for i in 0..self.dimensions().min(rhs.dimensions()) {
            *result.component_mut(i) = *self.component(i) - *rhs.component(i);
        }
        result
    }

    /// Multiplies every component by `factor`.
    fn scaled(self, factor: Self::Scalar) -> Self {
        self.map_components(|c| c * factor)
    }

    /// Divides every component by `divisor`.
    ///
    /// A zero divisor yields infinities or `NaN`, as with plain floats.
    fn divided(self, divisor: Self::Scalar) -> Self {
        self.map_components(|c| c / divisor)
    }

    /// Negates every component.
    fn negated(self) -> Self {
        self.map_components(|c| -c)
    }

    /// Applies `f` to every component.
    fn map_components<G>(self, mut f: G) -> Self
    where
        G: FnMut(Self::Scalar) -> Self::Scalar,
    {
        let mut result = self;
        for i in 0..self.dimensions() {
            *result.component_mut(i) = f(*self.component(i));
        }
        result
    }

    /// Returns `true` if both values have the same dimension count and equal
    /// components at every index.
    fn same_components<M>(&self, other: &M) -> bool
    where
        M: MultiDimensional<Scalar = Self::Scalar>,
    {
        self.dimensions() == other.dimensions()
            && (0..self.dimensions()).all(|i| self.component(i) == other.component(i))
    }

    /// Linearly interpolates between `self` and `upper`.
    ///
    /// See [`lerp`].
    fn lerp(self, upper: Self, factor: Self::Scalar) -> Self {
        lerp(self, upper, factor)
    }
}

/// Iterator over the components of a [`MultiDimensional`] value.
#[derive(Debug, Clone)]
pub struct Components<'a, M: ?Sized> {
    value: &'a M,
    index: usize,
}

impl<M: MultiDimensional> Iterator for Components<'_, M> {
    type Item = M::Scalar;

    fn next(&mut self) -> Option<M::Scalar> {
        if self.index < self.value.dimensions() {
            let c = *self.value.component(self.index);
            self.index += 1;
            Some(c)
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.value.dimensions().saturating_sub(self.index);
        (remaining, Some(remaining))
    }
}

impl<M: MultiDimensional> ExactSizeIterator for Components<'_, M> {}

/// Component-wise sum. The result has the type of `lhs`.
#[inline]
pub fn add<L, R>(lhs: L, rhs: &R) -> L
where
    L: MultiDimensional,
    R: MultiDimensional<Scalar = L::Scalar>,
{
    lhs.added(rhs)
}

/// Component-wise difference. The result has the type of `lhs`.
#[inline]
pub fn sub<L, R>(lhs: L, rhs: &R) -> L
where
    L: MultiDimensional,
    R: MultiDimensional<Scalar = L::Scalar>,
{
    lhs.subtracted(rhs)
}

/// Scales every component of `value` by `factor`.
#[inline]
pub fn scale<M: MultiDimensional>(value: M, factor: M::Scalar) -> M {
    value.scaled(factor)
}

/// Divides every component of `value` by `divisor`.
#[inline]
pub fn divide<M: MultiDimensional>(value: M, divisor: M::Scalar) -> M {
    value.divided(divisor)
}

/// Negates every component of `value`.
#[inline]
pub fn negate<M: MultiDimensional>(value: M) -> M {
    value.negated()
}

/// Structural equality across possibly different concrete types.
#[inline]
pub fn same_components<L, R>(lhs: &L, rhs: &R) -> bool
where
    L: MultiDimensional,
    R: MultiDimensional<Scalar = L::Scalar>,
{
    lhs.same_components(rhs)
}

/// Linear interpolation: `lower * (1 - factor) + upper * factor`.
///
/// `factor` is not clamped. Values outside `[0, 1]` extrapolate.
///
/// # Example
///
/// ```
/// use geometry::dimensional::lerp;
/// use geometry::Point2;
///
/// let a = Point2::new(0.0, 0.0);
/// let b = Point2::new(10.0, 20.0);
/// assert_eq!(lerp(a, b, 0.5), Point2::new(5.0, 10.0));
/// assert_eq!(lerp(a, b, 2.0), Point2::new(20.0, 40.0));
/// ```
#[inline]
pub fn lerp<M: MultiDimensional>(lower: M, upper: M, factor: M::Scalar) -> M {
    lower
        .scaled(M::Scalar::one() - factor)
        .added(&upper.scaled(factor))
}

/// Implements indexing and the arithmetic operators for a generic
/// `MultiDimensional` type `$ty<F>`.
///
/// Addition and subtraction accept any right-hand side with the same scalar
/// type, following [`MultiDimensional::added`]. Scalar-on-the-left
/// multiplication is provided for `f32` and `f64`.
#[macro_export]
macro_rules! impl_dimensional_ops {
    ($ty:ident $(, const $n:ident)?) => {
        impl<F: $crate::Scalar $(, const $n: usize)?> ::std::ops::Index<usize> for $ty<F $(, $n)?> {
            type Output = F;

            #[inline]
            fn index(&self, index: usize) -> &F {
                $crate::MultiDimensional::component(self, index)
            }
        }

        impl<F: $crate::Scalar $(, const $n: usize)?> ::std::ops::IndexMut<usize> for $ty<F $(, $n)?> {
            #[inline]
            fn index_mut(&mut self, index: usize) -> &mut F {
                $crate::MultiDimensional::component_mut(self, index)
            }
        }

        impl<F, M $(, const $n: usize)?> ::std::ops::Add<M> for $ty<F $(, $n)?>
        where
            F: $crate::Scalar,
            M: $crate::MultiDimensional<Scalar = F>,
        {
            type Output = Self;

            #[inline]
            fn add(self, rhs: M) -> Self {
                $crate::MultiDimensional::added(self, &rhs)
            }
        }

        impl<F, M $(, const $n: usize)?> ::std::ops::Sub<M> for $ty<F $(, $n)?>
        where
            F: $crate::Scalar,
            M: $crate::MultiDimensional<Scalar = F>,
        {
            type Output = Self;

            #[inline]
            fn sub(self, rhs: M) -> Self {
                $crate::MultiDimensional::subtracted(self, &rhs)
            }
        }

        impl<F, M $(, const $n: usize)?> ::std::ops::AddAssign<M> for $ty<F $(, $n)?>
        where
            F: $crate::Scalar,
            M: $crate::MultiDimensional<Scalar = F>,
        {
            #[inline]
            fn add_assign(&mut self, rhs: M) {
                *self = $crate::MultiDimensional::added(*self, &rhs);
            }
        }

        impl<F, M $(, const $n: usize)?> ::std::ops::SubAssign<M> for $ty<F $(, $n)?>
        where
            F: $crate::Scalar,
            M: $crate::MultiDimensional<Scalar = F>,
        {
            #[inline]
            fn sub_assign(&mut self, rhs: M) {
                *self = $crate::MultiDimensional::subtracted(*self, &rhs);
            }
        }

        impl<F: $crate::Scalar $(, const $n: usize)?> ::std::ops::Mul<F> for $ty<F $(, $n)?> {
            type Output = Self;

            #[inline]
            fn mul(self, factor: F) -> Self {
                $crate::MultiDimensional::scaled(self, factor)
            }
        }

        impl<F: $crate::Scalar $(, const $n: usize)?> ::std::ops::Div<F> for $ty<F $(, $n)?> {
            type Output = Self;

            #[inline]
            fn div(self, divisor: F) -> Self {
                $crate::MultiDimensional::divided(self, divisor)
            }
        }

        impl<F: $crate::Scalar $(, const $n: usize)?> ::std::ops::MulAssign<F> for $ty<F $(, $n)?> {
            #[inline]
            fn mul_assign(&mut self, factor: F) {
                *self = $crate::MultiDimensional::scaled(*self, factor);
            }
        }

        impl<F: $crate::Scalar $(, const $n: usize)?> ::std::ops::DivAssign<F> for $ty<F $(, $n)?> {
            #[inline]
            fn div_assign(&mut self, divisor: F) {
                *self = $crate::MultiDimensional::divided(*self, divisor);
            }
        }

        impl<F: $crate::Scalar $(, const $n: usize)?> ::std::ops::Neg for $ty<F $(, $n)?> {
            type Output = Self;

            #[inline]
            fn neg(self) -> Self {
                $crate::MultiDimensional::negated(self)
            }
        }

        impl $(<const $n: usize>)? ::std::ops::Mul<$ty<f32 $(, $n)?>> for f32 {
            type Output = $ty<f32 $(, $n)?>;

            #[inline]
            fn mul(self, rhs: $ty<f32 $(, $n)?>) -> $ty<f32 $(, $n)?> {
                $crate::MultiDimensional::scaled(rhs, self)
            }
        }

        impl $(<const $n: usize>)? ::std::ops::Mul<$ty<f64 $(, $n)?>> for f64 {
            type Output = $ty<f64 $(, $n)?>;

            #[inline]
            fn mul(self, rhs: $ty<f64 $(, $n)?>) -> $ty<f64 $(, $n)?> {
                $crate::MultiDimensional::scaled(rhs, self)
            }
        }
    };
}
