//! The four axis-aligned walking directions.
//!
//! Every relational question the engine asks ("is B to the right of A?",
//! "do A and B share a bottom edge?", "how far is A from the page's left
//! edge?") is phrased as one generic computation parameterised by a
//! [`Direction`].  The direction supplies three things:
//!
//! - **begin / end** – the near and far coordinate of a rectangle when you
//!   walk across it in that direction.  Walking RIGHT you enter at the left
//!   edge and leave at the right edge; walking LEFT it is the other way round.
//! - **extent** – the rectangle's length along the direction's axis
//!   (width for LEFT/RIGHT, height for UP/DOWN).
//! - **signed distance** – `b - a` measured along the direction, so a
//!   positive value always means "b lies further in this direction than a".
//!
//! Because of the sign convention, "margin to the right neighbour" and
//! "margin to the left neighbour" are the same formula evaluated with
//! opposite directions.
//!
//! ```text
//!            UP (begin = bottom, end = top)
//!                      ▲
//!   LEFT  ◄────────────┼────────────►  RIGHT
//!   (begin = right,    │     (begin = left,
//!    end = left)       ▼      end = right)
//!          DOWN (begin = top, end = bottom)
//! ```

use serde::{Deserialize, Serialize};

use super::rectangle::Rectangle;
use super::scalar::Scalar;

/// One of the four axis-aligned directions in page space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    /// All four directions.
    pub const ALL: [Direction; 4] = [
        Direction::Left,
        Direction::Right,
        Direction::Up,
        Direction::Down,
    ];

    /// One representative direction per axis (horizontal, vertical).
    pub const AXES: [Direction; 2] = [Direction::Right, Direction::Down];

    /// LEFT↔RIGHT, UP↔DOWN.
    pub const fn opposite(self) -> Direction {
        match self {
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
        }
    }

    pub const fn is_horizontal(self) -> bool {
        matches!(self, Direction::Left | Direction::Right)
    }

    /// The coordinate at which a walk in this direction enters `rectangle`.
    pub fn begin(self, rectangle: &Rectangle) -> Scalar {
        self.opposite().end(rectangle)
    }

    /// The coordinate at which a walk in this direction leaves `rectangle`.
    pub fn end(self, rectangle: &Rectangle) -> Scalar {
        match self {
            Direction::Left => rectangle.origin().x,
            Direction::Right => rectangle.corner().x,
            Direction::Up => rectangle.origin().y,
            Direction::Down => rectangle.corner().y,
        }
    }

    /// Distance from `a` to `b` measured along this direction.
    ///
    /// Positive when `b` lies further in this direction than `a`.
    pub fn signed_distance(self, a: Scalar, b: Scalar) -> Scalar {
        match self {
            Direction::Right | Direction::Down => b - a,
            Direction::Left | Direction::Up => a - b,
        }
    }

    /// Name of the edge a walk in this direction ends at (`"left"`, `"top"`, ...).
    pub const fn end_name(self) -> &'static str {
        match self {
            Direction::Left => "left",
            Direction::Right => "right",
            Direction::Up => "top",
            Direction::Down => "bottom",
        }
    }

    /// Name of the edge a walk in this direction starts at.
    pub const fn begin_name(self) -> &'static str {
        self.opposite().end_name()
    }

    /// Capitalised name of an element found after walking in this direction,
    /// as used in successor violation messages (`"Left"`, `"Below"`, ...).
    pub const fn after_name(self) -> &'static str {
        match self {
            Direction::Left => "Left",
            Direction::Right => "Right",
            Direction::Up => "Above",
            Direction::Down => "Below",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::geometry::extent::ExtentGiving;
    use crate::domain::geometry::scalar::scalar;

    fn sample() -> Rectangle {
        Rectangle::from_bounds(10, 20, 40, 80)
    }

    #[test]
    fn test_begin_and_end_pick_the_expected_edges() {
        let r = sample();
        assert_eq!(Direction::Right.begin(&r), scalar(10));
        assert_eq!(Direction::Right.end(&r), scalar(40));
        assert_eq!(Direction::Left.begin(&r), scalar(40));
        assert_eq!(Direction::Left.end(&r), scalar(10));
        assert_eq!(Direction::Down.begin(&r), scalar(20));
        assert_eq!(Direction::Down.end(&r), scalar(80));
        assert_eq!(Direction::Up.begin(&r), scalar(80));
        assert_eq!(Direction::Up.end(&r), scalar(20));
    }

    #[test]
    fn test_opposite_is_an_involution() {
        for d in Direction::ALL {
            assert_ne!(d.opposite(), d);
            assert_eq!(d.opposite().opposite(), d);
        }
    }

    #[test]
    fn test_signed_distance_is_positive_in_walking_direction() {
        assert_eq!(Direction::Right.signed_distance(scalar(10), scalar(15)), scalar(5));
        assert_eq!(Direction::Left.signed_distance(scalar(10), scalar(15)), scalar(-5));
        assert_eq!(Direction::Down.signed_distance(scalar(0), scalar(7)), scalar(7));
        assert_eq!(Direction::Up.signed_distance(scalar(7), scalar(0)), scalar(7));
    }

    #[test]
    fn test_walk_across_rectangle_covers_its_extent_in_every_direction() {
        let r = sample();
        for d in Direction::ALL {
            let walked = d.signed_distance(d.begin(&r), d.end(&r));
            assert!(walked >= Scalar::ZERO, "{d:?} walked backwards");
            assert_eq!(walked, d.extent(&r));
        }
    }

    #[test]
    fn test_edge_names() {
        assert_eq!(Direction::Up.end_name(), "top");
        assert_eq!(Direction::Up.begin_name(), "bottom");
        assert_eq!(Direction::Right.begin_name(), "left");
        assert_eq!(Direction::Down.after_name(), "Below");
    }
}
