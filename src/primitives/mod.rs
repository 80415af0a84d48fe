//! Two-dimensional value types and the traits that give them geometry.

mod point2;
mod rect;
mod segment2;
mod size2;
mod two_dimensional;

pub use point2::Point2;
pub use rect::{lerp_rect, Rect};
pub use segment2::Segment2;
pub use size2::Size2;
pub use two_dimensional::{rotate_point, Point2D, Size2D, TwoDimensional};
