//! One-dimensional pixel quantity.

use std::fmt;
use std::ops::{Add, Neg, Sub};

use serde::{Deserialize, Serialize};

/// A single coordinate or extent in pixel space.
///
/// Browsers report element geometry in whole CSS pixels, so the value is an
/// `i32`.  Coordinates may be negative (an element scrolled above the
/// viewport has a negative top edge).
///
/// Arithmetic saturates at the `i32` bounds instead of overflowing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Scalar(i32);

impl Scalar {
    pub const ZERO: Scalar = Scalar(0);

    pub const fn new(value: i32) -> Self {
        Self(value)
    }

    /// Returns the raw pixel value.
    pub const fn value(self) -> i32 {
        self.0
    }

    pub fn is_greater_or_equal_to(self, other: Scalar) -> bool {
        self >= other
    }

    pub fn is_less_or_equal_to(self, other: Scalar) -> bool {
        self <= other
    }

    /// Renders the value followed by `units`, e.g. `12px`.
    pub fn to_string_with_units(self, units: &str) -> String {
        format!("{}{units}", self.0)
    }
}

/// Shorthand constructor used heavily in tests and fixtures.
pub const fn scalar(value: i32) -> Scalar {
    Scalar(value)
}

impl From<i32> for Scalar {
    fn from(value: i32) -> Self {
        Self(value)
    }
}

impl Add for Scalar {
    type Output = Scalar;

    fn add(self, rhs: Scalar) -> Scalar {
        Scalar(self.0.saturating_add(rhs.0))
    }
}

impl Sub for Scalar {
    type Output = Scalar;

    fn sub(self, rhs: Scalar) -> Scalar {
        Scalar(self.0.saturating_sub(rhs.0))
    }
}

impl Neg for Scalar {
    type Output = Scalar;

    fn neg(self) -> Scalar {
        Scalar(self.0.saturating_neg())
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
