//! Two-dimensional points and sizes.

use std::fmt;
use std::ops::{Add, Sub};

use serde::{Deserialize, Serialize};

use super::scalar::Scalar;

/// An `(x, y)` pair of [`Scalar`]s.
///
/// Used both as a point (rectangle origin / corner) and as a size
/// (`width`, `height`) when the corner extent of a rectangle is taken.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Vector {
    pub x: Scalar,
    pub y: Scalar,
}

impl Vector {
    pub const fn new(x: Scalar, y: Scalar) -> Self {
        Self { x, y }
    }

    pub const fn x(&self) -> Scalar {
        self.x
    }

    pub const fn y(&self) -> Scalar {
        self.y
    }

    pub fn plus(self, other: Vector) -> Vector {
        self + other
    }

    pub fn minus(self, other: Vector) -> Vector {
        self - other
    }

    /// Renders the vector as a size, e.g. `20px x 10px`.
    pub fn to_string_with_units(self, units: &str) -> String {
        format!(
            "{} x {}",
            self.x.to_string_with_units(units),
            self.y.to_string_with_units(units)
        )
    }
}

/// Builds a vector from raw pixel values.
pub const fn vector(x: i32, y: i32) -> Vector {
    Vector::new(Scalar::new(x), Scalar::new(y))
}

impl Add for Vector {
    type Output = Vector;

    fn add(self, rhs: Vector) -> Vector {
        Vector::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Vector {
    type Output = Vector;

    fn sub(self, rhs: Vector) -> Vector {
        Vector::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl fmt::Display for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vector_add_and_subtract_are_component_wise() {
        assert_eq!(vector(1, 2) + vector(10, 20), vector(11, 22));
        assert_eq!(vector(1, 2).minus(vector(10, 20)), vector(-9, -18));
    }

    #[test]
    fn test_vector_renders_as_point_and_as_size() {
        assert_eq!(vector(3, 4).to_string(), "(3, 4)");
        assert_eq!(vector(20, 10).to_string_with_units("px"), "20px x 10px");
    }
}
