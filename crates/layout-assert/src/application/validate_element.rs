//! ElementValidator: chained checks rooted at one element.
//!
//! ```no_run
//! # use layout_assert::ElementValidator;
//! # use layout_assert_core::{Rectangle, UiElement};
//! # let page = UiElement::new("page", Rectangle::from_bounds(0, 0, 1280, 800));
//! # let logo = UiElement::new("logo", Rectangle::from_bounds(20, 20, 120, 60));
//! # let menu = UiElement::new("menu", Rectangle::from_bounds(140, 20, 600, 60));
//! let mut validator = ElementValidator::new(logo, page);
//! validator
//!     .is_left_of_with_margin(&menu, 10, 30)
//!     .is_top_aligned_with(&menu)
//!     .min_offset(20, 20, 20, 20);
//! assert!(validator.validate());
//! ```
//!
//! Every call evaluates immediately and appends to the validator's own
//! [`Errors`] sink; nothing short-circuits.  Thresholds are read in the
//! current [`Units`], which [`ElementValidator::change_units_to`] switches
//! for all later calls.

use layout_assert_core::{Condition, Context, Direction, Errors, Padding, UiElement, Units};
use tracing::{debug, info};

/// Fluent validator for a single root element.
#[derive(Debug)]
pub struct ElementValidator {
    root: UiElement,
    page: UiElement,
    context: Context,
    errors: Errors,
}

impl ElementValidator {
    /// Creates a validator checking `root` against `page`, in pixels.
    pub fn new(root: UiElement, page: UiElement) -> Self {
        let context = Context::new(Units::Pixels, *page.rectangle());
        debug!(element = root.name(), "element validator created");
        Self {
            root,
            page,
            context,
            errors: Errors::new(),
        }
    }

    pub fn root(&self) -> &UiElement {
        &self.root
    }

    pub fn errors(&self) -> &Errors {
        &self.errors
    }

    pub fn into_errors(self) -> Errors {
        self.errors
    }

    /// Interprets every later threshold in `units`.
    pub fn change_units_to(&mut self, units: Units) -> &mut Self {
        self.context = self.context.with_units(units);
        self
    }

    // ── Relative position ─────────────────────────────────────────────────────

    pub fn is_left_of(&mut self, element: &UiElement) -> &mut Self {
        self.root.validate_is_left_of(element, &mut self.errors);
        self
    }

    pub fn is_left_of_with_margin(&mut self, element: &UiElement, min: i32, max: i32) -> &mut Self {
        self.root.validate_is_left_of_with_margin(
            element,
            &Condition::between(min, max),
            &self.context,
            &mut self.errors,
        );
        self
    }

    pub fn is_right_of(&mut self, element: &UiElement) -> &mut Self {
        self.root.validate_is_right_of(element, &mut self.errors);
        self
    }

    pub fn is_right_of_with_margin(&mut self, element: &UiElement, min: i32, max: i32) -> &mut Self {
        self.root.validate_is_right_of_with_margin(
            element,
            &Condition::between(min, max),
            &self.context,
            &mut self.errors,
        );
        self
    }

    pub fn is_above(&mut self, element: &UiElement) -> &mut Self {
        self.root.validate_is_above(element, &mut self.errors);
        self
    }

    pub fn is_above_with_margin(&mut self, element: &UiElement, min: i32, max: i32) -> &mut Self {
        self.root.validate_is_above_with_margin(
            element,
            &Condition::between(min, max),
            &self.context,
            &mut self.errors,
        );
        self
    }

    pub fn is_below(&mut self, element: &UiElement) -> &mut Self {
        self.root.validate_is_below(element, &mut self.errors);
        self
    }

    pub fn is_below_with_margin(&mut self, element: &UiElement, min: i32, max: i32) -> &mut Self {
        self.root.validate_is_below_with_margin(
            element,
            &Condition::between(min, max),
            &self.context,
            &mut self.errors,
        );
        self
    }

    // ── Containment and overlap ───────────────────────────────────────────────

    pub fn is_inside_of(&mut self, container: &UiElement) -> &mut Self {
        self.root.validate_inside_of_container(container, &mut self.errors);
        self
    }

    /// Paddings are always pixels.
    pub fn is_inside_of_with_padding(&mut self, container: &UiElement, padding: Padding) -> &mut Self {
        self.root
            .validate_inside_of_container_with_padding(container, &padding, &mut self.errors);
        self
    }

    pub fn is_overlapping(&mut self, element: &UiElement) -> &mut Self {
        self.root.validate_overlapping_with(element, &mut self.errors);
        self
    }

    pub fn is_not_overlapping(&mut self, element: &UiElement) -> &mut Self {
        self.root.validate_not_overlapping_with(element, &mut self.errors);
        self
    }

    pub fn is_not_overlapping_with_all(&mut self, elements: &[UiElement]) -> &mut Self {
        for element in elements {
            self.root.validate_not_overlapping_with(element, &mut self.errors);
        }
        self
    }

    // ── Alignment ─────────────────────────────────────────────────────────────

    pub fn is_left_aligned_with(&mut self, element: &UiElement) -> &mut Self {
        self.aligned_with_all(Direction::Left, std::slice::from_ref(element))
    }

    pub fn is_left_aligned_with_all(&mut self, elements: &[UiElement]) -> &mut Self {
        self.aligned_with_all(Direction::Left, elements)
    }

    pub fn is_right_aligned_with(&mut self, element: &UiElement) -> &mut Self {
        self.aligned_with_all(Direction::Right, std::slice::from_ref(element))
    }

    pub fn is_right_aligned_with_all(&mut self, elements: &[UiElement]) -> &mut Self {
        self.aligned_with_all(Direction::Right, elements)
    }

    pub fn is_top_aligned_with(&mut self, element: &UiElement) -> &mut Self {
        self.aligned_with_all(Direction::Up, std::slice::from_ref(element))
    }

    pub fn is_top_aligned_with_all(&mut self, elements: &[UiElement]) -> &mut Self {
        self.aligned_with_all(Direction::Up, elements)
    }

    pub fn is_bottom_aligned_with(&mut self, element: &UiElement) -> &mut Self {
        self.aligned_with_all(Direction::Down, std::slice::from_ref(element))
    }

    pub fn is_bottom_aligned_with_all(&mut self, elements: &[UiElement]) -> &mut Self {
        self.aligned_with_all(Direction::Down, elements)
    }

    fn aligned_with_all(&mut self, direction: Direction, elements: &[UiElement]) -> &mut Self {
        for element in elements {
            self.root.validate_equal_end(direction, element, &mut self.errors);
        }
        self
    }

    // ── Size ──────────────────────────────────────────────────────────────────

    pub fn same_width_as(&mut self, element: &UiElement) -> &mut Self {
        self.root.validate_same_width(element, &mut self.errors);
        self
    }

    pub fn same_width_as_all(&mut self, elements: &[UiElement]) -> &mut Self {
        for element in elements {
            self.root.validate_same_width(element, &mut self.errors);
        }
        self
    }

    pub fn same_height_as(&mut self, element: &UiElement) -> &mut Self {
        self.root.validate_same_height(element, &mut self.errors);
        self
    }

    pub fn same_height_as_all(&mut self, elements: &[UiElement]) -> &mut Self {
        for element in elements {
            self.root.validate_same_height(element, &mut self.errors);
        }
        self
    }

    pub fn same_size_as(&mut self, element: &UiElement) -> &mut Self {
        self.root.validate_same_size(element, &mut self.errors);
        self
    }

    pub fn same_size_as_all(&mut self, elements: &[UiElement]) -> &mut Self {
        for element in elements {
            self.root.validate_same_size(element, &mut self.errors);
        }
        self
    }

    pub fn not_same_size_as(&mut self, element: &UiElement) -> &mut Self {
        self.root.validate_not_same_size(element, &mut self.errors);
        self
    }

    pub fn min_width(&mut self, width: i32) -> &mut Self {
        self.width(Condition::at_least(width))
    }

    pub fn max_width(&mut self, width: i32) -> &mut Self {
        self.width(Condition::at_most(width))
    }

    pub fn width_between(&mut self, min: i32, max: i32) -> &mut Self {
        self.width(Condition::between(min, max))
    }

    pub fn min_height(&mut self, height: i32) -> &mut Self {
        self.height(Condition::at_least(height))
    }

    pub fn max_height(&mut self, height: i32) -> &mut Self {
        self.height(Condition::at_most(height))
    }

    pub fn height_between(&mut self, min: i32, max: i32) -> &mut Self {
        self.height(Condition::between(min, max))
    }

    pub fn width(&mut self, condition: Condition) -> &mut Self {
        self.root.validate_width(&condition, &self.context, &mut self.errors);
        self
    }

    pub fn height(&mut self, condition: Condition) -> &mut Self {
        self.root.validate_height(&condition, &self.context, &mut self.errors);
        self
    }

    // ── Page offsets ──────────────────────────────────────────────────────────

    /// Requires at least the given distance between each edge and the page edge.
    pub fn min_offset(&mut self, top: i32, right: i32, bottom: i32, left: i32) -> &mut Self {
        self.offsets(top, right, bottom, left, Condition::at_least)
    }

    /// Requires at most the given distance between each edge and the page edge.
    pub fn max_offset(&mut self, top: i32, right: i32, bottom: i32, left: i32) -> &mut Self {
        self.offsets(top, right, bottom, left, Condition::at_most)
    }

    pub fn offset(&mut self, direction: Direction, condition: Condition) -> &mut Self {
        self.root
            .validate_offset(direction, &condition, &self.page, &self.context, &mut self.errors);
        self
    }

    fn offsets(
        &mut self,
        top: i32,
        right: i32,
        bottom: i32,
        left: i32,
        condition: fn(i32) -> Condition,
    ) -> &mut Self {
        self.offset(Direction::Up, condition(top))
            .offset(Direction::Right, condition(right))
            .offset(Direction::Down, condition(bottom))
            .offset(Direction::Left, condition(left))
    }

    // ── Centring ──────────────────────────────────────────────────────────────

    pub fn centered_on_page_vertically(&mut self) -> &mut Self {
        self.root
            .validate_centered_on_vertically(&self.page, &mut self.errors);
        self
    }

    pub fn centered_on_page_horizontally(&mut self) -> &mut Self {
        self.root
            .validate_centered_on_horizontally(&self.page, &mut self.errors);
        self
    }

    pub fn centered_on_page(&mut self) -> &mut Self {
        self.centered_on_page_vertically()
            .centered_on_page_horizontally()
    }

    // ── CSS ───────────────────────────────────────────────────────────────────

    pub fn has_css_value(&mut self, property: &str, values: &[&str]) -> &mut Self {
        self.root
            .validate_has_css_value(property, values, &mut self.errors);
        self
    }

    pub fn does_not_have_css_value(&mut self, property: &str, values: &[&str]) -> &mut Self {
        self.root
            .validate_does_not_have_css_value(property, values, &mut self.errors);
        self
    }

    /// Returns `true` if no check recorded a violation.
    pub fn validate(&self) -> bool {
        let passed = !self.errors.has_errors();
        info!(
            element = self.root.name(),
            violations = self.errors.len(),
            passed,
            "element validation finished"
        );
        passed
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use layout_assert_core::Rectangle;

    fn element(name: &str, x1: i32, y1: i32, x2: i32, y2: i32) -> UiElement {
        UiElement::new(name, Rectangle::from_bounds(x1, y1, x2, y2))
    }

    fn page() -> UiElement {
        element("page", 0, 0, 1000, 500)
    }

    #[test]
    fn test_validate_passes_when_every_check_holds() {
        // Arrange
        let logo = element("logo", 20, 20, 120, 60);
        let menu = element("menu", 140, 20, 600, 60);
        let mut validator = ElementValidator::new(logo, page());

        // Act
        validator
            .is_left_of_with_margin(&menu, 10, 30)
            .is_top_aligned_with(&menu)
            .is_bottom_aligned_with(&menu)
            .is_not_overlapping(&menu)
            .same_height_as(&menu)
            .min_offset(20, 20, 20, 20)
            .is_inside_of(&page());

        // Assert
        assert!(validator.validate());
        assert!(validator.errors().is_empty());
    }

    #[test]
    fn test_failures_accumulate_in_call_order() {
        // Arrange
        let button = element("button", 10, 10, 60, 40);
        let label = element("label", 30, 10, 90, 40);
        let mut validator = ElementValidator::new(button, page());

        // Act
        validator
            .is_left_of(&label)
            .is_not_overlapping(&label)
            .same_width_as(&label);

        // Assert
        assert!(!validator.validate());
        let messages = validator.errors().messages();
        assert_eq!(messages.len(), 3);
        assert!(messages[0].starts_with("Right element 'label'"));
        assert!(messages[1].starts_with("Element 'button' is overlapped"));
        assert!(messages[2].starts_with("Element 'button' has not the same width"));
    }

    #[test]
    fn test_max_offset_checks_all_four_sides() {
        let box_ = element("box", 100, 10, 960, 400);
        let mut validator = ElementValidator::new(box_, page());

        validator.max_offset(50, 50, 50, 50);

        // Left is 100 and bottom is 100.
        let messages = validator.errors().messages();
        assert_eq!(
            messages,
            vec![
                "Expected bottom offset of element 'box' to be less than or equal to 50px. Actual bottom offset is: 100px",
                "Expected left offset of element 'box' to be less than or equal to 50px. Actual left offset is: 100px",
            ]
        );
    }

    #[test]
    fn test_change_units_applies_to_later_thresholds_only() {
        let banner = element("banner", 0, 0, 500, 50);
        let mut validator = ElementValidator::new(banner, page());

        validator
            .min_width(400)
            .change_units_to(Units::Percent)
            .min_width(50)
            .max_width(40);

        assert_eq!(
            validator.errors().messages(),
            vec!["Expected width of element 'banner' to be less than or equal to 400px. Actual width is: 500px"]
        );
    }

    #[test]
    fn test_centered_on_page_checks_both_axes() {
        let dialog = element("dialog", 300, 100, 700, 350);
        let mut validator = ElementValidator::new(dialog, page());

        validator.centered_on_page();

        assert_eq!(validator.errors().len(), 1);
        assert!(validator.errors().messages()[0].contains("top and bottom"));
    }

    #[test]
    fn test_aligned_with_all_reports_each_misaligned_element() {
        let root = element("root", 10, 0, 50, 10);
        let others = vec![
            element("same", 10, 20, 50, 30),
            element("off", 12, 40, 50, 50),
            element("far", 30, 60, 50, 70),
        ];
        let mut validator = ElementValidator::new(root, page());

        validator.is_left_aligned_with_all(&others).is_right_aligned_with_all(&others);

        assert_eq!(validator.errors().len(), 2);
    }

    #[test]
    fn test_list_forms_check_every_element_in_order() {
        // Arrange
        let card = element("card", 0, 0, 100, 50);
        let others = vec![
            element("twin", 200, 0, 300, 50),
            element("wide", 10, 10, 160, 50),
            element("tall", 400, 0, 500, 80),
        ];
        let mut validator = ElementValidator::new(card, page());

        // Act
        validator
            .is_not_overlapping_with_all(&others)
            .same_width_as_all(&others)
            .same_height_as_all(&others);

        // Assert
        let messages = validator.errors().messages();
        assert_eq!(messages.len(), 4);
        assert!(messages[0].starts_with("Element 'card' is overlapped"));
        assert!(messages[1].starts_with("Element 'card' has not the same width as element 'wide'"));
        assert!(messages[2].starts_with("Element 'card' has not the same height as element 'wide'"));
        assert!(messages[3].starts_with("Element 'card' has not the same height as element 'tall'"));
    }

    #[test]
    fn test_into_errors_hands_over_the_sink() {
        let mut validator = ElementValidator::new(element("a", 0, 0, 10, 10), page());
        validator.height_between(20, 30);

        let errors = validator.into_errors();

        assert_eq!(errors.len(), 1);
    }
}
