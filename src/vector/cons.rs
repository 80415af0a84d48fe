//! Fixed-length vectors built by type-level recursion.
//!
//! A vector of length `k` is a head scalar paired with a tail of length
//! `k - 1`, ending in [`EmptyVector`]. The nesting depth is the length, so
//! `Vector<Vector<Vector<EmptyVector<f64>>>>` is always a 3-vector and every
//! operation is resolved at compile time by recursing through the types.
//!
//! ```
//! use geometry::vector::{cons, Vector3, VectorType};
//! use geometry::vector;
//!
//! let a: Vector3<f64> = vector![3.0, 4.0, 5.0];
//! let b: Vector3<f64> = cons(6.0, cons(7.0, 8.0));
//! assert_eq!(a.dot(&b), 86.0);
//! assert_eq!(a + b, vector![9.0, 11.0, 13.0]);
//! assert_eq!(a.to_string(), "3 ⋮ 4 ⋮ 5");
//! ```

use super::VectorN;
use crate::error::GeometryError;
use crate::scalar::Scalar;
use num_traits::{Float, Zero};
use std::fmt;
use std::marker::PhantomData;
use std::ops::{
    Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign,
};

/// Operations shared by every recursive vector, including the empty one.
pub trait VectorType: Copy + Default + PartialEq + fmt::Debug + fmt::Display {
    /// The scalar type of each element.
    type Scalar: Scalar;

    /// Number of elements; equals the nesting depth.
    fn len(&self) -> usize;

    /// Returns `true` for [`EmptyVector`].
    #[inline]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns a reference to the element at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= self.len()`.
    fn component(&self, index: usize) -> &Self::Scalar;

    /// Returns a mutable reference to the element at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= self.len()`.
    fn component_mut(&mut self, index: usize) -> &mut Self::Scalar;

    /// Sum of the element-wise products. Zero for the empty vector.
    fn dot(&self, other: &Self) -> Self::Scalar;

    /// Element-wise sum.
    fn added(self, other: Self) -> Self;

    /// Element-wise difference.
    fn subtracted(self, other: Self) -> Self;

    /// Negates every element.
    fn negated(self) -> Self;

    /// Multiplies every element by `factor`.
    fn scaled(self, factor: Self::Scalar) -> Self;

    /// Divides every element by `divisor`.
    fn divided(self, divisor: Self::Scalar) -> Self;

    /// Squared Euclidean length.
    #[inline]
    fn magnitude_squared(&self) -> Self::Scalar {
        self.dot(self)
    }

    /// Euclidean length.
    #[inline]
    fn magnitude(&self) -> Self::Scalar {
        self.magnitude_squared().sqrt()
    }

    /// Returns a vector one element longer with `head` in front.
    #[inline]
    fn prepend(self, head: Self::Scalar) -> Vector<Self> {
        Vector::new(head, self)
    }

    /// Iterates over the elements from head to last.
    #[inline]
    fn iter(&self) -> Iter<'_, Self> {
        Iter {
            vector: self,
            index: 0,
        }
    }

    /// Copies the elements into a const-generic [`VectorN`].
    ///
    /// Fails if `N` differs from the length of this vector.
    fn to_vector_n<const N: usize>(&self) -> Result<VectorN<Self::Scalar, N>, GeometryError> {
        let elements: Vec<Self::Scalar> = self.iter().collect();
        VectorN::try_from_slice(&elements)
    }
}

/// The zero-length vector that terminates every [`Vector`].
///
/// Holds no scalar. All arithmetic on it returns another `EmptyVector`.
#[derive(Clone, Copy, PartialEq, Eq, Default)]
pub struct EmptyVector<F> {
    _scalar: PhantomData<F>,
}

impl<F: Scalar> EmptyVector<F> {
    /// Creates the empty vector.
    #[inline]
    pub fn new() -> Self {
        Self {
            _scalar: PhantomData,
        }
    }
}

impl<F: Scalar> VectorType for EmptyVector<F> {
    type Scalar = F;

    #[inline]
    fn len(&self) -> usize {
        0
    }

    fn component(&self, index: usize) -> &F {
        panic!("index {index} out of bounds for EmptyVector")
    }

    fn component_mut(&mut self, index: usize) -> &mut F {
        panic!("index {index} out of bounds for EmptyVector")
    }

    #[inline]
    fn dot(&self, _other: &Self) -> F {
        F::zero()
    }

    #[inline]
    fn added(self, _other: Self) -> Self {
        self
    }

    #[inline]
    fn subtracted(self, _other: Self) -> Self {
        self
    }

    #[inline]
    fn negated(self) -> Self {
        self
    }

    #[inline]
    fn scaled(self, _factor: F) -> Self {
        self
    }

    #[inline]
    fn divided(self, _divisor: F) -> Self {
        self
    }
}

impl<F> fmt::Debug for EmptyVector<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("EmptyVector()")
    }
}

impl<F> fmt::Display for EmptyVector<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("EmptyVector()")
    }
}

/// A head scalar followed by a shorter vector.
#[derive(Clone, Copy, PartialEq)]
pub struct Vector<T: VectorType> {
    /// First element.
    pub head: T::Scalar,
    /// Remaining elements.
    pub tail: T,
}

/// A one-element vector.
pub type Vector1<F> = Vector<EmptyVector<F>>;
/// A two-element vector.
pub type Vector2<F> = Vector<Vector1<F>>;
/// A three-element vector.
pub type Vector3<F> = Vector<Vector2<F>>;
/// A four-element vector.
pub type Vector4<F> = Vector<Vector3<F>>;

impl<T: VectorType> Vector<T> {
    /// Creates a vector from its first element and the remaining ones.
    #[inline]
    pub fn new(head: T::Scalar, tail: T) -> Self {
        Self { head, tail }
    }

    /// Creates a vector with the given head and a zero tail.
    #[inline]
    pub fn with_head(head: T::Scalar) -> Self {
        Self::new(head, T::default())
    }
}

impl<T: VectorType> Default for Vector<T> {
    /// A zero head followed by a zero tail.
    fn default() -> Self {
        Self::new(T::Scalar::zero(), T::default())
    }
}

impl<T: VectorType> VectorType for Vector<T> {
    type Scalar = T::Scalar;

    #[inline]
    fn len(&self) -> usize {
        self.tail.len() + 1
    }

    #[inline]
    fn component(&self, index: usize) -> &T::Scalar {
        if index == 0 {
            &self.head
        } else {
            self.tail.component(index - 1)
        }
    }

    #[inline]
    fn component_mut(&mut self, index: usize) -> &mut T::Scalar {
        if index == 0 {
            &mut self.head
        } else {
            self.tail.component_mut(index - 1)
        }
    }

    #[inline]
    fn dot(&self, other: &Self) -> T::Scalar {
        self.head * other.head + self.tail.dot(&other.tail)
    }

    #[inline]
    fn added(self, other: Self) -> Self {
        Self::new(self.head + other.head, self.tail.added(other.tail))
    }

    #[inline]
    fn subtracted(self, other: Self) -> Self {
        Self::new(self.head - other.head, self.tail.subtracted(other.tail))
    }

    #[inline]
    fn negated(self) -> Self {
        Self::new(-self.head, self.tail.negated())
    }

    #[inline]
    fn scaled(self, factor: T::Scalar) -> Self {
        Self::new(self.head * factor, self.tail.scaled(factor))
    }

    #[inline]
    fn divided(self, divisor: T::Scalar) -> Self {
        Self::new(self.head / divisor, self.tail.divided(divisor))
    }
}

impl<T: VectorType> fmt::Debug for Vector<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.tail.len() {
            0 => write!(f, "Vector({:?}, tail: EmptyVector())", self.head),
            1 => write!(f, "{:?} ⋮ {:?}", self.head, self.tail.component(0)),
            _ => write!(f, "{:?} ⋮ {:?}", self.head, self.tail),
        }
    }
}

impl<T: VectorType> fmt::Display for Vector<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.tail.len() {
            0 => write!(f, "Vector({}, tail: EmptyVector())", self.head),
            1 => write!(f, "{} ⋮ {}", self.head, self.tail.component(0)),
            _ => write!(f, "{} ⋮ {}", self.head, self.tail),
        }
    }
}

/// Iterator over the elements of a [`VectorType`].
#[derive(Debug, Clone)]
pub struct Iter<'a, V> {
    vector: &'a V,
    index: usize,
}

impl<V: VectorType> Iterator for Iter<'_, V> {
    type Item = V::Scalar;

    fn next(&mut self) -> Option<V::Scalar> {
        if self.index < self.vector.len() {
            let c = *self.vector.component(self.index);
            self.index += 1;
            Some(c)
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.vector.len().saturating_sub(self.index);
        (remaining, Some(remaining))
    }
}

impl<V: VectorType> ExactSizeIterator for Iter<'_, V> {}

/// Something that can sit on the right-hand side of [`cons`]: a scalar
/// (which becomes a one-element vector) or a vector.
pub trait IntoVector<F: Scalar> {
    /// The resulting vector type.
    type Vector: VectorType<Scalar = F>;

    /// Converts `self` into a vector. A scalar becomes a one-element vector.
    fn into_vector(self) -> Self::Vector;
}

impl<F: Scalar> IntoVector<F> for EmptyVector<F> {
    type Vector = Self;

    #[inline]
    fn into_vector(self) -> Self {
        self
    }
}

impl<T: VectorType> IntoVector<T::Scalar> for Vector<T> {
    type Vector = Self;

    #[inline]
    fn into_vector(self) -> Self {
        self
    }
}

impl IntoVector<f32> for f32 {
    type Vector = Vector1<f32>;

    #[inline]
    fn into_vector(self) -> Vector1<f32> {
        Vector::with_head(self)
    }
}

impl IntoVector<f64> for f64 {
    type Vector = Vector1<f64>;

    #[inline]
    fn into_vector(self) -> Vector1<f64> {
        Vector::with_head(self)
    }
}

/// Prepends `head` to `rest`, where `rest` is a scalar or a vector.
///
/// Chaining builds a vector whose type encodes its length:
/// `cons(3.0, cons(4.0, 5.0))` is a [`Vector3<f64>`].
#[inline]
pub fn cons<F, R>(head: F, rest: R) -> Vector<R::Vector>
where
    F: Scalar,
    R: IntoVector<F>,
{
    Vector::new(head, rest.into_vector())
}

/// Builds a recursive [`Vector`] from a list of scalars.
///
/// `vector![]` is an [`EmptyVector`]; `vector![a, b, c]` is a 3-vector.
#[macro_export]
macro_rules! vector {
    () => {
        $crate::vector::EmptyVector::new()
    };
    ($head:expr $(, $tail:expr)* $(,)?) => {
        $crate::vector::Vector::new($head, $crate::vector![$($tail),*])
    };
}

impl<T: VectorType> Index<usize> for Vector<T> {
    type Output = T::Scalar;

    #[inline]
    fn index(&self, index: usize) -> &T::Scalar {
        self.component(index)
    }
}

impl<T: VectorType> IndexMut<usize> for Vector<T> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut T::Scalar {
        self.component_mut(index)
    }
}

impl<F: Scalar> Index<usize> for EmptyVector<F> {
    type Output = F;

    #[inline]
    fn index(&self, index: usize) -> &F {
        self.component(index)
    }
}

impl<F: Scalar> IndexMut<usize> for EmptyVector<F> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut F {
        self.component_mut(index)
    }
}

impl<T: VectorType> Add for Vector<T> {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        self.added(other)
    }
}

impl<T: VectorType> Sub for Vector<T> {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        self.subtracted(other)
    }
}

impl<T: VectorType> AddAssign for Vector<T> {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        *self = self.added(other);
    }
}

impl<T: VectorType> SubAssign for Vector<T> {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        *self = self.subtracted(other);
    }
}

impl<T: VectorType> Neg for Vector<T> {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        self.negated()
    }
}

impl<T: VectorType> Mul<T::Scalar> for Vector<T> {
    type Output = Self;

    #[inline]
    fn mul(self, factor: T::Scalar) -> Self {
        self.scaled(factor)
    }
}

impl<T: VectorType> Div<T::Scalar> for Vector<T> {
    type Output = Self;

    #[inline]
    fn div(self, divisor: T::Scalar) -> Self {
        self.divided(divisor)
    }
}

impl<T: VectorType> MulAssign<T::Scalar> for Vector<T> {
    #[inline]
    fn mul_assign(&mut self, factor: T::Scalar) {
        *self = self.scaled(factor);
    }
}

impl<T: VectorType> DivAssign<T::Scalar> for Vector<T> {
    #[inline]
    fn div_assign(&mut self, divisor: T::Scalar) {
        *self = self.divided(divisor);
    }
}

impl<T: VectorType<Scalar = f32>> Mul<Vector<T>> for f32 {
    type Output = Vector<T>;

    #[inline]
    fn mul(self, vector: Vector<T>) -> Vector<T> {
        vector.scaled(self)
    }
}

impl<T: VectorType<Scalar = f64>> Mul<Vector<T>> for f64 {
    type Output = Vector<T>;

    #[inline]
    fn mul(self, vector: Vector<T>) -> Vector<T> {
        vector.scaled(self)
    }
}

impl<F: Scalar> Add for EmptyVector<F> {
    type Output = Self;

    #[inline]
    fn add(self, _other: Self) -> Self {
        self
    }
}

impl<F: Scalar> Sub for EmptyVector<F> {
    type Output = Self;

    #[inline]
    fn sub(self, _other: Self) -> Self {
        self
    }
}

impl<F: Scalar> Neg for EmptyVector<F> {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        self
    }
}

impl<F: Scalar> Mul<F> for EmptyVector<F> {
    type Output = Self;

    #[inline]
    fn mul(self, _factor: F) -> Self {
        self
    }
}

impl<F: Scalar> Div<F> for EmptyVector<F> {
    type Output = Self;

    #[inline]
    fn div(self, _divisor: F) -> Self {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_element() {
        let v: Vector1<f64> = Vector::new(3.0, EmptyVector::new());
        assert_eq!(v.len(), 1);
        assert_eq!(v[0], 3.0);
        assert_eq!(format!("{v:?}"), "Vector(3.0, tail: EmptyVector())");
    }

    #[test]
    fn test_cons_builds_nested_type() {
        let v: Vector3<f64> = cons(3.0, cons(4.0, 5.0));
        assert_eq!(v.len(), 3);
        assert_eq!(v, vector![3.0, 4.0, 5.0]);
        assert_eq!(v, 5.0f64.into_vector().prepend(4.0).prepend(3.0));
    }

    #[test]
    fn test_index() {
        let mut v: Vector3<f64> = vector![3.0, 4.0, 5.0];
        assert_eq!(v[0], 3.0);
        assert_eq!(v[1], 4.0);
        assert_eq!(v[2], 5.0);
        v[2] = 9.0;
        assert_eq!(v.tail.tail.head, 9.0);
    }

    #[test]
    #[should_panic(expected = "out of bounds for EmptyVector")]
    fn test_index_past_end() {
        let v: Vector2<f64> = vector![1.0, 2.0];
        let _value = v[2];
    }

    #[test]
    #[should_panic(expected = "index 0 out of bounds for EmptyVector")]
    fn test_index_empty() {
        let mut v: EmptyVector<f32> = EmptyVector::new();
        v[0] = 1.0;
    }

    #[test]
    fn test_default_is_zero() {
        let v: Vector3<f64> = Vector::default();
        assert_eq!(v, vector![0.0, 0.0, 0.0]);
        let w: Vector2<f64> = Vector::with_head(7.0);
        assert_eq!(w, vector![7.0, 0.0]);
    }

    #[test]
    fn test_dot_product() {
        let a: Vector3<f64> = vector![3.0, 4.0, 5.0];
        let b = vector![6.0, 7.0, 8.0];
        assert_eq!(a.dot(&b), 86.0);
        assert_eq!(EmptyVector::<f64>::new().dot(&EmptyVector::new()), 0.0);
    }

    #[test]
    fn test_arithmetic() {
        let a: Vector3<f64> = vector![3.0, 4.0, 5.0];
        let b = vector![6.0, 7.0, 8.0];

        assert_eq!(a + b, vector![9.0, 11.0, 13.0]);
        assert_eq!(b - a, vector![3.0, 3.0, 3.0]);
        assert_eq!(2.0 * a, vector![6.0, 8.0, 10.0]);
        assert_eq!(a * 2.0, vector![6.0, 8.0, 10.0]);
        assert_eq!(a / 2.0, vector![1.5, 2.0, 2.5]);
        assert_eq!(-a, vector![-3.0, -4.0, -5.0]);
    }

    #[test]
    fn test_assign_ops() {
        let mut v: Vector2<f32> = vector![1.0, 2.0];
        v += vector![1.0, 1.0];
        v -= vector![0.5, 0.5];
        v *= 4.0;
        v /= 2.0;
        assert_eq!(v, vector![3.0, 5.0]);
    }

    #[test]
    fn test_empty_vector_is_identity() {
        let e: EmptyVector<f64> = vector![];
        assert_eq!(e + e, e);
        assert_eq!(e - e, e);
        assert_eq!(-e, e);
        assert_eq!(e * 3.0, e);
        assert_eq!(e / 0.0, e);
        assert!(e.is_empty());
    }

    #[test]
    fn test_magnitude() {
        let v: Vector2<f64> = vector![3.0, 4.0];
        assert_eq!(v.magnitude_squared(), 25.0);
        assert_eq!(v.magnitude(), 5.0);
    }

    #[test]
    fn test_iter() {
        let v: Vector4<f64> = vector![1.0, 2.0, 3.0, 4.0];
        let elements: Vec<f64> = v.iter().collect();
        assert_eq!(elements, vec![1.0, 2.0, 3.0, 4.0]);
        assert_eq!(v.iter().len(), 4);
    }

    #[test]
    fn test_formatting() {
        let v: Vector3<f64> = vector![3.0, 4.0, 5.0];
        assert_eq!(format!("{v:?}"), "3.0 ⋮ 4.0 ⋮ 5.0");
        assert_eq!(v.to_string(), "3 ⋮ 4 ⋮ 5");

        let w: Vector2<f64> = vector![1.5, 2.0];
        assert_eq!(w.to_string(), "1.5 ⋮ 2");
    }

    #[test]
    fn test_to_vector_n() {
        let v: Vector3<f64> = vector![3.0, 4.0, 5.0];
        let n = v.to_vector_n::<3>().unwrap();
        assert_eq!(n, VectorN::new([3.0, 4.0, 5.0]));

        let err = v.to_vector_n::<2>().unwrap_err();
        assert_eq!(
            err,
            GeometryError::DimensionMismatch {
                expected: 2,
                found: 3
            }
        );
    }
}
