//! Threshold conditions and the unit context they are evaluated in.
//!
//! Callers express expectations such as "margin between 5 and 7" or "width
//! at least 300".  The numbers are interpreted in the current [`Units`]:
//! plain pixels, or a percentage of the page extent along the axis being
//! checked.  Converting is the job of [`Context`]; the measured geometry is
//! never rescaled, only the thresholds are.

use serde::{Deserialize, Serialize};

use super::geometry::{Direction, ExtentGiving, Rectangle, Scalar};

const PIXELS: &str = "px";

/// How threshold numbers supplied by the caller are interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Units {
    /// Thresholds are CSS pixels.
    #[default]
    #[serde(rename = "px", alias = "pixels")]
    Pixels,
    /// Thresholds are a percentage of the page width (horizontal checks) or
    /// height (vertical checks).
    Percent,
}

/// Evaluation context for conditions: the units mode and the page frame
/// that percentages refer to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Context {
    units: Units,
    page: Rectangle,
}

impl Context {
    pub fn new(units: Units, page: Rectangle) -> Self {
        Self { units, page }
    }

    /// A pixel context.  The page is irrelevant for pixel conversions.
    pub fn pixels() -> Self {
        Self::new(Units::Pixels, Rectangle::from_bounds(0, 0, 0, 0))
    }

    pub fn units(&self) -> Units {
        self.units
    }

    pub fn page(&self) -> &Rectangle {
        &self.page
    }

    /// Returns a copy of this context using `units`.
    pub fn with_units(self, units: Units) -> Self {
        Self { units, ..self }
    }

    /// Converts a caller-supplied threshold into pixels for a check running
    /// along `direction`.
    ///
    /// Percentages are scaled in `i64` and clamped back into the `i32`
    /// range, so an oversized threshold never overflows.
    pub fn to_pixels(&self, value: i32, direction: Direction) -> Scalar {
        match self.units {
            Units::Pixels => Scalar::new(value),
            Units::Percent => {
                let page_extent = i64::from(direction.extent(&self.page).value());
                let pixels = i64::from(value) * page_extent / 100;
                let clamped = pixels.clamp(i64::from(i32::MIN), i64::from(i32::MAX));
                Scalar::new(i32::try_from(clamped).unwrap_or(i32::MAX))
            }
        }
    }
}

impl Default for Context {
    fn default() -> Self {
        Self::pixels()
    }
}

/// A predicate over a single measured value, together with a description.
///
/// Bounds are inclusive and expressed in the context's [`Units`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Condition {
    GreaterOrEqual(i32),
    LessOrEqual(i32),
    Between(i32, i32),
    EqualTo(i32),
}

impl Condition {
    pub fn at_least(min: i32) -> Self {
        Condition::GreaterOrEqual(min)
    }

    pub fn at_most(max: i32) -> Self {
        Condition::LessOrEqual(max)
    }

    /// Inclusive range.  Bounds given in the wrong order are swapped.
    pub fn between(min: i32, max: i32) -> Self {
        Condition::Between(min.min(max), min.max(max))
    }

    pub fn exactly(value: i32) -> Self {
        Condition::EqualTo(value)
    }

    /// Evaluates the condition against `value`, converting the thresholds
    /// for a check along `direction`.
    pub fn is_satisfied_by(&self, value: Scalar, context: &Context, direction: Direction) -> bool {
        let px = |n: i32| context.to_pixels(n, direction);
        match *self {
            Condition::GreaterOrEqual(min) => value.is_greater_or_equal_to(px(min)),
            Condition::LessOrEqual(max) => value.is_less_or_equal_to(px(max)),
            Condition::Between(min, max) => {
                value.is_greater_or_equal_to(px(min)) && value.is_less_or_equal_to(px(max))
            }
            Condition::EqualTo(expected) => value == px(expected),
        }
    }

    /// Renders the condition with thresholds converted to pixels, e.g.
    /// `between 5px and 7px`.
    pub fn describe(&self, context: &Context, direction: Direction) -> String {
        let px = |n: i32| context.to_pixels(n, direction).to_string_with_units(PIXELS);
        match *self {
            Condition::GreaterOrEqual(min) => format!("greater than or equal to {}", px(min)),
            Condition::LessOrEqual(max) => format!("less than or equal to {}", px(max)),
            Condition::Between(min, max) => format!("between {} and {}", px(min), px(max)),
            Condition::EqualTo(expected) => format!("equal to {}", px(expected)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::geometry::scalar;

    fn percent_context() -> Context {
        Context::new(Units::Percent, Rectangle::from_bounds(0, 0, 1000, 500))
    }

    #[test]
    fn test_pixel_context_leaves_thresholds_unchanged() {
        let ctx = Context::pixels();
        assert_eq!(ctx.to_pixels(42, Direction::Right), scalar(42));
        assert_eq!(ctx.to_pixels(42, Direction::Up), scalar(42));
    }

    #[test]
    fn test_percent_context_scales_by_page_extent_of_the_axis() {
        let ctx = percent_context();
        assert_eq!(ctx.to_pixels(10, Direction::Left), scalar(100));
        assert_eq!(ctx.to_pixels(10, Direction::Down), scalar(50));
    }

    #[test]
    fn test_percent_conversion_uses_integer_division() {
        let ctx = Context::new(Units::Percent, Rectangle::from_bounds(0, 0, 333, 10));
        assert_eq!(ctx.to_pixels(10, Direction::Right), scalar(33));
    }

    #[test]
    fn test_large_percent_threshold_is_scaled_without_overflow() {
        // Arrange
        let ctx = Context::new(Units::Percent, Rectangle::from_bounds(0, 0, 100_000, 100));
        let condition = Condition::at_least(30_000);

        // Act / Assert
        assert_eq!(ctx.to_pixels(30_000, Direction::Right), scalar(30_000_000));
        assert!(!condition.is_satisfied_by(scalar(5), &ctx, Direction::Right));
        assert_eq!(
            condition.describe(&ctx, Direction::Right),
            "greater than or equal to 30000000px"
        );
    }

    #[test]
    fn test_percent_threshold_past_i32_range_is_clamped() {
        let ctx = Context::new(Units::Percent, Rectangle::from_bounds(0, 0, 100_000, 100));
        assert_eq!(ctx.to_pixels(i32::MAX, Direction::Left), scalar(i32::MAX));
        assert_eq!(ctx.to_pixels(i32::MIN, Direction::Left), scalar(i32::MIN));
    }

    #[test]
    fn test_between_is_inclusive() {
        let ctx = Context::pixels();
        let c = Condition::between(5, 7);
        assert!(c.is_satisfied_by(scalar(5), &ctx, Direction::Right));
        assert!(c.is_satisfied_by(scalar(7), &ctx, Direction::Right));
        assert!(!c.is_satisfied_by(scalar(8), &ctx, Direction::Right));
        assert!(!c.is_satisfied_by(scalar(4), &ctx, Direction::Right));
    }

    #[test]
    fn test_between_swaps_reversed_bounds() {
        assert_eq!(Condition::between(9, 3), Condition::Between(3, 9));
    }

    #[test]
    fn test_single_bound_conditions() {
        let ctx = Context::pixels();
        assert!(Condition::at_least(3).is_satisfied_by(scalar(3), &ctx, Direction::Down));
        assert!(!Condition::at_most(3).is_satisfied_by(scalar(4), &ctx, Direction::Down));
        assert!(Condition::exactly(0).is_satisfied_by(scalar(0), &ctx, Direction::Down));
    }

    #[test]
    fn test_condition_evaluated_in_percent_units() {
        let ctx = percent_context();
        // 10% of a 500px high page is 50px.
        assert!(Condition::at_least(10).is_satisfied_by(scalar(50), &ctx, Direction::Up));
        assert!(!Condition::at_least(10).is_satisfied_by(scalar(49), &ctx, Direction::Up));
    }

    #[test]
    fn test_describe_renders_pixel_thresholds() {
        let ctx = percent_context();
        assert_eq!(
            Condition::between(1, 2).describe(&ctx, Direction::Right),
            "between 10px and 20px"
        );
        assert_eq!(
            Condition::at_least(5).describe(&Context::pixels(), Direction::Right),
            "greater than or equal to 5px"
        );
    }

    #[test]
    fn test_units_deserialize_from_short_names() {
        let units: Units = serde_json::from_str("\"px\"").expect("px alias");
        assert_eq!(units, Units::Pixels);
        let units: Units = serde_json::from_str("\"percent\"").expect("percent");
        assert_eq!(units, Units::Percent);
    }
}
