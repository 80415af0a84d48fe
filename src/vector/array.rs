//! Const-generic fixed-size vector.

use crate::dimensional::MultiDimensional;
use crate::error::GeometryError;
use crate::impl_dimensional_ops;
use crate::log::warn;
use crate::scalar::Scalar;
use std::fmt;

/// A vector of exactly `N` scalars stored inline.
///
/// Same static-length guarantee as the recursive [`Vector`](super::Vector)
/// without the nested types. Implements [`MultiDimensional`], so it mixes
/// with the 2D types in component-wise arithmetic.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VectorN<F, const N: usize> {
    /// Elements in index order.
    pub components: [F; N],
}

impl<F: Scalar, const N: usize> VectorN<F, N> {
    /// Creates a vector from an array of components.
    #[inline]
    pub fn new(components: [F; N]) -> Self {
        Self { components }
    }

    /// Creates the zero vector.
    #[inline]
    pub fn zero() -> Self {
        Self {
            components: [F::zero(); N],
        }
    }

    /// Creates a vector from a slice of exactly `N` scalars.
    pub fn try_from_slice(slice: &[F]) -> Result<Self, GeometryError> {
        let components: [F; N] = slice.try_into().map_err(|_| {
            warn!(expected = N, found = slice.len(), "vector length mismatch");
            GeometryError::DimensionMismatch {
                expected: N,
                found: slice.len(),
            }
        })?;
        Ok(Self { components })
    }

    /// Computes the dot product with another vector.
    #[inline]
    pub fn dot(&self, other: &Self) -> F {
        self.components
            .iter()
            .zip(&other.components)
            .fold(F::zero(), |acc, (&a, &b)| acc + a * b)
    }

    /// Returns the squared magnitude (length squared).
    #[inline]
    pub fn magnitude_squared(&self) -> F {
        self.dot(self)
    }

    /// Returns the magnitude (length) of the vector.
    #[inline]
    pub fn magnitude(&self) -> F {
        self.magnitude_squared().sqrt()
    }

    /// Returns the components as an array.
    #[inline]
    pub fn into_array(self) -> [F; N] {
        self.components
    }
}

impl<F: Scalar, const N: usize> MultiDimensional for VectorN<F, N> {
    type Scalar = F;

    #[inline]
    fn dimensions(&self) -> usize {
        N
    }

    #[inline]
    fn component(&self, index: usize) -> &F {
        match self.components.get(index) {
            Some(c) => c,
            None => panic!("index {index} out of bounds for VectorN<{N}>"),
        }
    }

    #[inline]
    fn component_mut(&mut self, index: usize) -> &mut F {
        match self.components.get_mut(index) {
            Some(c) => c,
            None => panic!("index {index} out of bounds for VectorN<{N}>"),
        }
    }
}

impl_dimensional_ops!(VectorN, const N);

impl<F: Scalar, const N: usize> Default for VectorN<F, N> {
    fn default() -> Self {
        Self::zero()
    }
}

impl<F: Scalar, const N: usize> From<[F; N]> for VectorN<F, N> {
    fn from(components: [F; N]) -> Self {
        Self { components }
    }
}

impl<F: Scalar, const N: usize> TryFrom<&[F]> for VectorN<F, N> {
    type Error = GeometryError;

    fn try_from(slice: &[F]) -> Result<Self, GeometryError> {
        Self::try_from_slice(slice)
    }
}

impl<F: Scalar, const N: usize> fmt::Display for VectorN<F, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("(")?;
        for (i, c) in self.components.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{c}")?;
        }
        f.write_str(")")
    }
}
