//! One-dimensional closed intervals.

use serde::{Deserialize, Serialize};

use super::scalar::Scalar;

/// A `[begin, end]` range along one axis, with `begin <= end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Interval {
    begin: Scalar,
    end: Scalar,
}

impl Interval {
    /// Creates an interval from two bounds in either order.
    pub fn new(a: Scalar, b: Scalar) -> Self {
        Self {
            begin: a.min(b),
            end: a.max(b),
        }
    }

    pub const fn begin(&self) -> Scalar {
        self.begin
    }

    pub const fn end(&self) -> Scalar {
        self.end
    }

    pub fn length(&self) -> Scalar {
        self.end - self.begin
    }

    /// Returns `true` if the two intervals share a range of non-zero length.
    ///
    /// Touching intervals (`[0, 10]` and `[10, 20]`) do not intersect.
    pub fn intersects(&self, other: &Interval) -> bool {
        self.begin.max(other.begin) < self.end.min(other.end)
    }

    /// Returns `true` if `other` lies within this interval (bounds inclusive).
    pub fn contains(&self, other: &Interval) -> bool {
        self.begin <= other.begin && other.end <= self.end
    }

    /// Returns `true` if `value` lies within this interval (bounds inclusive).
    pub fn contains_value(&self, value: Scalar) -> bool {
        self.begin <= value && value <= self.end
    }
}

/// Shorthand constructor from raw pixel values.
pub fn interval(begin: i32, end: i32) -> Interval {
    Interval::new(Scalar::new(begin), Scalar::new(end))
}
