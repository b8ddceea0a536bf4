//! Axis-aligned rectangles in page pixel space.
//!
//! A [`Rectangle`] is stored as two points: the `origin` (top-left corner)
//! and the `corner` (bottom-right corner).  Page coordinates grow to the
//! right and downwards, exactly like the browser's layout viewport:
//!
//! ```text
//!   origin (x1, y1) ┌───────────────┐
//!                   │               │  height = y2 - y1
//!                   └───────────────┘ corner (x2, y2)
//!                     width = x2 - x1
//! ```
//!
//! All edge-based questions ("where does this rectangle begin when walking
//! leftward?") are answered by [`Direction`], never by hand-written per-axis
//! code here.  The rectangle only knows how to project itself onto an axis.

use std::fmt;

use serde::Serialize;
use thiserror::Error;

use super::direction::Direction;
use super::interval::Interval;
use super::scalar::Scalar;
use super::vector::Vector;

/// Errors raised while building a rectangle from untrusted input.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GeometryError {
    /// A width or height below zero was supplied.
    #[error("rectangle extent must not be negative (width {width}, height {height})")]
    NegativeExtent { width: i32, height: i32 },

    /// The far edge of the rectangle lies outside the `i32` coordinate range.
    #[error("rectangle at ({x}, {y}) with size {width} x {height} exceeds the coordinate range")]
    CoordinateOverflow {
        x: i32,
        y: i32,
        width: i32,
        height: i32,
    },
}

/// An immutable axis-aligned rectangle with `origin <= corner` on both axes.
///
/// Zero-width and zero-height rectangles are legal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Rectangle {
    origin: Vector,
    corner: Vector,
}

impl Rectangle {
    /// Creates a rectangle spanning the two points.
    ///
    /// The points may be given in any order; the result is normalised so the
    /// origin is the top-left corner.
    pub fn new(a: Vector, b: Vector) -> Self {
        Self {
            origin: Vector::new(a.x.min(b.x), a.y.min(b.y)),
            corner: Vector::new(a.x.max(b.x), a.y.max(b.y)),
        }
    }

    /// Creates a rectangle from its four edge coordinates.
    pub fn from_bounds(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self::new(
            Vector::new(Scalar::new(left), Scalar::new(top)),
            Vector::new(Scalar::new(right), Scalar::new(bottom)),
        )
    }

    /// Creates a rectangle from a top-left point and a size, which is how
    /// element geometry is usually reported.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::NegativeExtent`] if `width` or `height` is
    /// below zero, and [`GeometryError::CoordinateOverflow`] if the right or
    /// bottom edge does not fit in an `i32`.
    pub fn from_origin_and_size(
        x: i32,
        y: i32,
        width: i32,
        height: i32,
    ) -> Result<Self, GeometryError> {
        if width < 0 || height < 0 {
            return Err(GeometryError::NegativeExtent { width, height });
        }
        match (x.checked_add(width), y.checked_add(height)) {
            (Some(right), Some(bottom)) => Ok(Self::from_bounds(x, y, right, bottom)),
            _ => Err(GeometryError::CoordinateOverflow {
                x,
                y,
                width,
                height,
            }),
        }
    }

    pub const fn origin(&self) -> Vector {
        self.origin
    }

    pub const fn corner(&self) -> Vector {
        self.corner
    }

    pub fn width(&self) -> Scalar {
        self.corner.x - self.origin.x
    }

    pub fn height(&self) -> Scalar {
        self.corner.y - self.origin.y
    }

    /// Projects the rectangle onto the axis of `direction`.
    ///
    /// LEFT and RIGHT share the horizontal axis; UP and DOWN share the
    /// vertical one.  The interval is always normalised (`begin <= end`).
    pub fn interval(&self, direction: Direction) -> Interval {
        Interval::new(direction.begin(self), direction.end(self))
    }

    pub fn x_interval(&self) -> Interval {
        self.interval(Direction::Right)
    }

    pub fn y_interval(&self) -> Interval {
        self.interval(Direction::Down)
    }

    /// Returns `true` if `other` lies entirely within this rectangle.
    ///
    /// Shared edges count as contained.
    pub fn contains(&self, other: &Rectangle) -> bool {
        Direction::AXES
            .iter()
            .all(|d| self.interval(*d).contains(&other.interval(*d)))
    }

    /// Returns `true` if the two rectangles share an area of non-zero size.
    ///
    /// Rectangles that only touch along an edge or a corner do not intersect.
    pub fn intersects(&self, other: &Rectangle) -> bool {
        Direction::AXES
            .iter()
            .all(|d| self.interval(*d).intersects(&other.interval(*d)))
    }

    /// Grows the rectangle outwards by a per-edge padding.
    pub fn inflate(&self, padding: &Padding) -> Rectangle {
        Rectangle::new(
            self.origin - Vector::new(padding.left, padding.top),
            self.corner + Vector::new(padding.right, padding.bottom),
        )
    }
}

impl fmt::Display for Rectangle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.origin, self.corner)
    }
}

/// Per-edge distances, listed in CSS order (top, right, bottom, left).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Padding {
    pub top: Scalar,
    pub right: Scalar,
    pub bottom: Scalar,
    pub left: Scalar,
}

impl Padding {
    pub fn new(top: i32, right: i32, bottom: i32, left: i32) -> Self {
        Self {
            top: Scalar::new(top),
            right: Scalar::new(right),
            bottom: Scalar::new(bottom),
            left: Scalar::new(left),
        }
    }

    /// The same padding on all four edges.
    pub fn uniform(value: i32) -> Self {
        Self::new(value, value, value, value)
    }
}
