//! Extent capabilities: measuring a rectangle along an axis or as a whole.
//!
//! Width, height, and size checks share one algorithm body.  The only thing
//! that differs is *what* gets measured and what the measurement is called:
//!
//! - a [`Direction`] is an **axis extent**: it measures a [`Scalar`]
//!   (width for LEFT/RIGHT, height for UP/DOWN);
//! - [`OriginCorner`] is the **corner extent**: it measures the full
//!   [`Vector`] `(width, height)` from origin to corner.
//!
//! Both implement [`ExtentGiving`], so a check such as "same extent as" is
//! written once and instantiated with either.

use std::fmt;

use super::direction::Direction;
use super::rectangle::Rectangle;
use super::scalar::Scalar;
use super::vector::Vector;

/// A measured quantity that can be compared and reported with units.
pub trait Metric: Copy + PartialEq + fmt::Debug + fmt::Display {
    fn to_string_with_units(&self, units: &str) -> String;
}

impl Metric for Scalar {
    fn to_string_with_units(&self, units: &str) -> String {
        Scalar::to_string_with_units(*self, units)
    }
}

impl Metric for Vector {
    fn to_string_with_units(&self, units: &str) -> String {
        Vector::to_string_with_units(*self, units)
    }
}

/// Something that can measure a rectangle.
pub trait ExtentGiving: Copy {
    /// The type of the measurement.
    type Metric: Metric;

    fn extent(&self, rectangle: &Rectangle) -> Self::Metric;

    /// Human-readable name of the measurement (`"width"`, `"height"`, `"size"`).
    fn extent_name(&self) -> &'static str;
}

impl ExtentGiving for Direction {
    type Metric = Scalar;

    fn extent(&self, rectangle: &Rectangle) -> Scalar {
        if self.is_horizontal() {
            rectangle.width()
        } else {
            rectangle.height()
        }
    }

    fn extent_name(&self) -> &'static str {
        if self.is_horizontal() {
            "width"
        } else {
            "height"
        }
    }
}

/// Measures a rectangle diagonally, from origin to corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OriginCorner;

pub const ORIGIN_CORNER: OriginCorner = OriginCorner;

impl ExtentGiving for OriginCorner {
    type Metric = Vector;

    fn extent(&self, rectangle: &Rectangle) -> Vector {
        rectangle.corner() - rectangle.origin()
    }

    fn extent_name(&self) -> &'static str {
        "size"
    }
}
