//! Fixed-length vectors.
//!
//! Two encodings of the same idea: [`Vector`]/[`EmptyVector`] nest one type
//! per element, and [`VectorN`] stores `[F; N]` inline. Both fix the length
//! at compile time.

mod array;
mod cons;

pub use array::VectorN;
pub use cons::{
    cons, EmptyVector, IntoVector, Iter, Vector, Vector1, Vector2, Vector3, Vector4, VectorType,
};
