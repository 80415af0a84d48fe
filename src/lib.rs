//! geometry - Generic 2D values, angles and fixed-length vectors
//!
//! Points, sizes and rectangles over any float scalar, with the component-wise
//! algebra defined once in [`MultiDimensional`] and shared by every type.
//!
//! ```
//! use geometry::{Point2, Point2D, TwoDimensional};
//! use std::f64::consts::PI;
//!
//! let p = Point2::new(2.0, 0.0);
//! let q = p.rotated_around(PI, Point2::new(1.0, 0.0));
//! assert!(q.distance(&Point2::new(0.0, 0.0)) < 1e-12);
//! ```

mod log;

pub mod angle;
pub mod dimensional;
pub mod error;
pub mod primitives;
pub mod scalar;
pub mod vector;

#[cfg(test)]
mod test_support;

pub use angle::{
    angle_between, degrees_to_radians, normalize_angle, normalize_radians, radians_to_degrees,
};
pub use dimensional::{lerp, MultiDimensional};
pub use error::GeometryError;
pub use primitives::{Point2, Point2D, Rect, Segment2, Size2, Size2D, TwoDimensional};
pub use scalar::Scalar;
pub use vector::{cons, EmptyVector, Vector, VectorN, VectorType};
