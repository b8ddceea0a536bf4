//! Pixel-space geometry: scalars, vectors, intervals, rectangles, and the
//! [`Direction`] abstraction that every relational check is built on.

pub mod direction;
pub mod extent;
pub mod interval;
pub mod rectangle;
pub mod scalar;
pub mod vector;

pub use direction::Direction;
pub use extent::{ExtentGiving, Metric, OriginCorner, ORIGIN_CORNER};
pub use interval::{interval, Interval};
pub use rectangle::{GeometryError, Padding, Rectangle};
pub use scalar::{scalar, Scalar};
pub use vector::{vector, Vector};
