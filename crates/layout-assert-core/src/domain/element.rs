//! UI element relational layer.
//!
//! A [`UiElement`] is a named rectangle taken from a single rendered
//! snapshot, plus a way to look up its computed CSS.  It answers two kinds
//! of questions:
//!
//! - **Predicates** (`has_*`, `overlaps`, `contains`, `offset`, ...) are
//!   pure and return a value.
//! - **Validations** (`validate_*`) evaluate a predicate and, on failure,
//!   append one human-readable message to an [`Errors`] sink.  They never
//!   return early or panic, so one failed check never hides the next.
//!
//! # One algorithm per relation
//!
//! Every directional relation is implemented once, parameterised by a
//! [`Direction`].  The named variants are thin wrappers that fix the
//! direction, and mirror-image relations swap receiver and argument instead
//! of duplicating logic:
//!
//! ```text
//! a.has_right_element(b)  ==  a.has_successor(RIGHT, b)
//! a.has_left_element(b)   ==  b.has_successor(RIGHT, a)
//! ```

use std::fmt;
use std::sync::Arc;

use super::condition::{Condition, Context};
use super::css::{hex_to_rgba, CssSource, NoCssSource};
use super::errors::Errors;
use super::geometry::{
    Direction, ExtentGiving, Interval, Metric, Padding, Rectangle, Scalar, Vector, ORIGIN_CORNER,
};

const PIXELS: &str = "px";

/// A named, immutable element rectangle from one layout snapshot.
#[derive(Clone)]
pub struct UiElement {
    name: String,
    rectangle: Rectangle,
    css: Arc<dyn CssSource>,
    quote_name: bool,
}

impl UiElement {
    /// Creates a synthetic element without styles (e.g. the page frame).
    pub fn new(name: impl Into<String>, rectangle: Rectangle) -> Self {
        Self::with_css_source(name, rectangle, Arc::new(NoCssSource))
    }

    pub fn with_css_source(
        name: impl Into<String>,
        rectangle: Rectangle,
        css: Arc<dyn CssSource>,
    ) -> Self {
        Self {
            name: name.into(),
            rectangle,
            css,
            quote_name: true,
        }
    }

    /// Renames the elements `#1:<rectangle>`, `#2:<rectangle>`, ... so a
    /// group can be reported without caller-supplied names.
    pub fn as_numbered_list(elements: &[UiElement]) -> Vec<UiElement> {
        elements
            .iter()
            .enumerate()
            .map(|(i, element)| UiElement {
                name: format!("#{}:{}", i + 1, element.rectangle),
                rectangle: element.rectangle,
                css: Arc::clone(&element.css),
                quote_name: false,
            })
            .collect()
    }

    // ── Accessors ─────────────────────────────────────────────────────────────

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The name as it appears in violation messages.
    pub fn quoted_name(&self) -> String {
        if self.quote_name {
            format!("'{}'", self.name)
        } else {
            self.name.clone()
        }
    }

    pub fn rectangle(&self) -> &Rectangle {
        &self.rectangle
    }

    pub fn css_value(&self, property: &str) -> String {
        self.css.css_value(property)
    }

    pub fn begin(&self, direction: Direction) -> Scalar {
        direction.begin(&self.rectangle)
    }

    pub fn end(&self, direction: Direction) -> Scalar {
        direction.end(&self.rectangle)
    }

    pub fn extent<E: ExtentGiving>(&self, extent: E) -> E::Metric {
        extent.extent(&self.rectangle)
    }

    pub fn origin(&self) -> Vector {
        self.rectangle.origin()
    }

    pub fn corner(&self) -> Vector {
        self.rectangle.corner()
    }

    pub fn x(&self) -> Scalar {
        self.origin().x
    }

    pub fn y(&self) -> Scalar {
        self.origin().y
    }

    pub fn width(&self) -> Scalar {
        self.extent(Direction::Right)
    }

    pub fn height(&self) -> Scalar {
        self.extent(Direction::Down)
    }

    pub fn size(&self) -> Vector {
        self.extent(ORIGIN_CORNER)
    }

    pub fn interval(&self, direction: Direction) -> Interval {
        self.rectangle.interval(direction)
    }

    pub fn x_interval(&self) -> Interval {
        self.interval(Direction::Right)
    }

    pub fn y_interval(&self) -> Interval {
        self.interval(Direction::Down)
    }

    // ── Pairwise predicates ───────────────────────────────────────────────────

    pub fn has_equal_begin(&self, other: &UiElement, direction: Direction) -> bool {
        self.begin(direction) == other.begin(direction)
    }

    pub fn has_equal_end(&self, other: &UiElement, direction: Direction) -> bool {
        self.end(direction) == other.end(direction)
    }

    pub fn has_equal_left_offset_as(&self, other: &UiElement) -> bool {
        self.has_equal_begin(other, Direction::Right)
    }

    pub fn has_equal_right_offset_as(&self, other: &UiElement) -> bool {
        self.has_equal_begin(other, Direction::Left)
    }

    pub fn has_equal_top_offset_as(&self, other: &UiElement) -> bool {
        self.has_equal_begin(other, Direction::Down)
    }

    pub fn has_equal_bottom_offset_as(&self, other: &UiElement) -> bool {
        self.has_equal_begin(other, Direction::Up)
    }

    pub fn has_equal_extent_as<E: ExtentGiving>(&self, other: &UiElement, extent: E) -> bool {
        self.extent(extent) == other.extent(extent)
    }

    pub fn has_same_width_as(&self, other: &UiElement) -> bool {
        self.has_equal_extent_as(other, Direction::Right)
    }

    pub fn has_same_height_as(&self, other: &UiElement) -> bool {
        self.has_equal_extent_as(other, Direction::Down)
    }

    pub fn has_same_size_as(&self, other: &UiElement) -> bool {
        self.has_equal_extent_as(other, ORIGIN_CORNER)
    }

    pub fn overlaps(&self, other: &UiElement) -> bool {
        self.rectangle.intersects(&other.rectangle)
    }

    pub fn contains(&self, other: &UiElement) -> bool {
        self.rectangle.contains(&other.rectangle)
    }

    pub fn contains_rectangle(&self, other: &Rectangle) -> bool {
        self.rectangle.contains(other)
    }

    // ── Page-relative offsets ─────────────────────────────────────────────────

    /// Distance from this element's far edge in `direction` to the page's
    /// far edge in the same direction.
    pub fn offset(&self, direction: Direction, page: &UiElement) -> Scalar {
        direction.signed_distance(self.end(direction), page.end(direction))
    }

    pub fn left_offset(&self, page: &UiElement) -> Scalar {
        self.offset(Direction::Left, page)
    }

    pub fn right_offset(&self, page: &UiElement) -> Scalar {
        self.offset(Direction::Right, page)
    }

    pub fn top_offset(&self, page: &UiElement) -> Scalar {
        self.offset(Direction::Up, page)
    }

    pub fn bottom_offset(&self, page: &UiElement) -> Scalar {
        self.offset(Direction::Down, page)
    }

    /// `true` if the element sits centred on `page` along `direction`'s axis.
    pub fn has_equal_opposite_offsets(&self, direction: Direction, page: &UiElement) -> bool {
        self.offset(direction, page) == self.offset(direction.opposite(), page)
    }

    // ── Succession ────────────────────────────────────────────────────────────

    /// Gap between this element's far edge and `successor`'s near edge,
    /// walking in `direction`.  Negative when they overlap along that axis.
    pub fn signed_distance_to_successor(&self, direction: Direction, successor: &UiElement) -> Scalar {
        direction.signed_distance(self.end(direction), successor.begin(direction))
    }

    /// `true` if `candidate` starts at or after the point where this element
    /// ends, walking in `direction`.
    pub fn has_successor(&self, direction: Direction, candidate: &UiElement) -> bool {
        self.signed_distance_to_successor(direction, candidate) >= Scalar::ZERO
    }

    pub fn has_right_element(&self, right_element: &UiElement) -> bool {
        self.has_successor(Direction::Right, right_element)
    }

    pub fn has_left_element(&self, left_element: &UiElement) -> bool {
        left_element.has_successor(Direction::Right, self)
    }

    pub fn has_below_element(&self, below_element: &UiElement) -> bool {
        self.has_successor(Direction::Down, below_element)
    }

    pub fn has_above_element(&self, above_element: &UiElement) -> bool {
        above_element.has_successor(Direction::Down, self)
    }

    // ── Validations: alignment ────────────────────────────────────────────────

    pub fn validate_left_aligned_with(&self, element: &UiElement, errors: &mut Errors) {
        self.validate_equal_end(Direction::Left, element, errors);
    }

    pub fn validate_right_aligned_with(&self, element: &UiElement, errors: &mut Errors) {
        self.validate_equal_end(Direction::Right, element, errors);
    }

    pub fn validate_top_aligned_with(&self, element: &UiElement, errors: &mut Errors) {
        self.validate_equal_end(Direction::Up, element, errors);
    }

    pub fn validate_bottom_aligned_with(&self, element: &UiElement, errors: &mut Errors) {
        self.validate_equal_end(Direction::Down, element, errors);
    }

    pub fn validate_equal_end(&self, direction: Direction, element: &UiElement, errors: &mut Errors) {
        if !self.has_equal_end(element, direction) {
            errors.add_with_element(
                format!(
                    "Element {} has not the same {} offset as element {}. {} edge of {} is at {}, {} edge of {} is at {}",
                    self.quoted_name(),
                    direction.end_name(),
                    element.quoted_name(),
                    capitalize(direction.end_name()),
                    self.quoted_name(),
                    self.end(direction).to_string_with_units(PIXELS),
                    direction.end_name(),
                    element.quoted_name(),
                    element.end(direction).to_string_with_units(PIXELS),
                ),
                element,
            );
        }
    }

    // ── Validations: extent ───────────────────────────────────────────────────

    pub fn validate_same_width(&self, element: &UiElement, errors: &mut Errors) {
        self.validate_same_extent(Direction::Right, element, errors);
    }

    pub fn validate_same_height(&self, element: &UiElement, errors: &mut Errors) {
        self.validate_same_extent(Direction::Down, element, errors);
    }

    pub fn validate_same_size(&self, element: &UiElement, errors: &mut Errors) {
        self.validate_same_extent(ORIGIN_CORNER, element, errors);
    }

    pub fn validate_not_same_width(&self, element: &UiElement, errors: &mut Errors) {
        self.validate_not_same_extent(Direction::Right, element, errors);
    }

    pub fn validate_not_same_height(&self, element: &UiElement, errors: &mut Errors) {
        self.validate_not_same_extent(Direction::Down, element, errors);
    }

    pub fn validate_not_same_size(&self, element: &UiElement, errors: &mut Errors) {
        self.validate_not_same_extent(ORIGIN_CORNER, element, errors);
    }

    pub fn validate_same_extent<E: ExtentGiving>(&self, extent: E, element: &UiElement, errors: &mut Errors) {
        if !self.has_equal_extent_as(element, extent) {
            errors.add_with_element(self.extent_comparison("has not the same", extent, element), element);
        }
    }

    pub fn validate_not_same_extent<E: ExtentGiving>(
        &self,
        extent: E,
        element: &UiElement,
        errors: &mut Errors,
    ) {
        if self.has_equal_extent_as(element, extent) {
            errors.add_with_element(self.extent_comparison("has the same", extent, element), element);
        }
    }

    fn extent_comparison<E: ExtentGiving>(&self, relation: &str, extent: E, element: &UiElement) -> String {
        let name = extent.extent_name();
        format!(
            "Element {} {relation} {name} as element {}. {} of {} is {}. {} of {} is {}",
            self.quoted_name(),
            element.quoted_name(),
            capitalize(name),
            self.quoted_name(),
            self.extent(extent).to_string_with_units(PIXELS),
            capitalize(name),
            element.quoted_name(),
            element.extent(extent).to_string_with_units(PIXELS),
        )
    }

    pub fn validate_width(&self, condition: &Condition, context: &Context, errors: &mut Errors) {
        self.validate_extent(Direction::Right, condition, context, errors);
    }

    pub fn validate_height(&self, condition: &Condition, context: &Context, errors: &mut Errors) {
        self.validate_extent(Direction::Down, condition, context, errors);
    }

    pub fn validate_extent(
        &self,
        direction: Direction,
        condition: &Condition,
        context: &Context,
        errors: &mut Errors,
    ) {
        let actual = self.extent(direction);
        if !condition.is_satisfied_by(actual, context, direction) {
            let name = direction.extent_name();
            errors.add_with_element(
                format!(
                    "Expected {name} of element {} to be {}. Actual {name} is: {}",
                    self.quoted_name(),
                    condition.describe(context, direction),
                    actual.to_string_with_units(PIXELS),
                ),
                self,
            );
        }
    }

    // ── Validations: succession ───────────────────────────────────────────────

    pub fn validate_is_left_of(&self, right_element: &UiElement, errors: &mut Errors) {
        self.validate_successor(Direction::Right, right_element, errors);
    }

    pub fn validate_is_right_of(&self, left_element: &UiElement, errors: &mut Errors) {
        self.validate_successor(Direction::Left, left_element, errors);
    }

    pub fn validate_is_above(&self, below_element: &UiElement, errors: &mut Errors) {
        self.validate_successor(Direction::Down, below_element, errors);
    }

    pub fn validate_is_below(&self, above_element: &UiElement, errors: &mut Errors) {
        self.validate_successor(Direction::Up, above_element, errors);
    }

    pub fn validate_is_left_of_with_margin(
        &self,
        right_element: &UiElement,
        margin: &Condition,
        context: &Context,
        errors: &mut Errors,
    ) {
        self.validate_successor_margin(Direction::Right, right_element, margin, context, errors);
    }

    pub fn validate_is_right_of_with_margin(
        &self,
        left_element: &UiElement,
        margin: &Condition,
        context: &Context,
        errors: &mut Errors,
    ) {
        self.validate_successor_margin(Direction::Left, left_element, margin, context, errors);
    }

    pub fn validate_is_above_with_margin(
        &self,
        below_element: &UiElement,
        margin: &Condition,
        context: &Context,
        errors: &mut Errors,
    ) {
        self.validate_successor_margin(Direction::Down, below_element, margin, context, errors);
    }

    pub fn validate_is_below_with_margin(
        &self,
        above_element: &UiElement,
        margin: &Condition,
        context: &Context,
        errors: &mut Errors,
    ) {
        self.validate_successor_margin(Direction::Up, above_element, margin, context, errors);
    }

    /// Requires `successor` to start at or after this element's far edge.
    pub fn validate_successor(&self, direction: Direction, successor: &UiElement, errors: &mut Errors) {
        self.validate_successor_margin(
            direction,
            successor,
            &Condition::at_least(0),
            &Context::pixels(),
            errors,
        );
    }

    /// Requires the gap to `successor` along `direction` to satisfy `margin`.
    pub fn validate_successor_margin(
        &self,
        direction: Direction,
        successor: &UiElement,
        margin: &Condition,
        context: &Context,
        errors: &mut Errors,
    ) {
        let distance = self.signed_distance_to_successor(direction, successor);
        if !margin.is_satisfied_by(distance, context, direction) {
            errors.add_with_element(
                format!(
                    "{} element {} aligned not properly relative to element {}. Expected margin should be {}. Actual margin is {}",
                    direction.after_name(),
                    successor.quoted_name(),
                    self.quoted_name(),
                    margin.describe(context, direction),
                    distance.to_string_with_units(PIXELS),
                ),
                successor,
            );
        }
    }

    // ── Validations: overlap and containment ──────────────────────────────────

    pub fn validate_overlapping_with(&self, element: &UiElement, errors: &mut Errors) {
        if !self.overlaps(element) {
            errors.add_with_element(
                format!(
                    "Element {} is not overlapped with element {} but should be",
                    self.quoted_name(),
                    element.quoted_name()
                ),
                element,
            );
        }
    }

    pub fn validate_not_overlapping_with(&self, element: &UiElement, errors: &mut Errors) {
        if self.overlaps(element) {
            errors.add_with_element(
                format!(
                    "Element {} is overlapped with element {} but should not",
                    self.quoted_name(),
                    element.quoted_name()
                ),
                element,
            );
        }
    }

    pub fn validate_inside_of_container(&self, container: &UiElement, errors: &mut Errors) {
        if !container.contains(self) {
            errors.add_with_element(
                format!(
                    "Element '{}' is not inside of '{}'",
                    self.name(),
                    container.name()
                ),
                container,
            );
        }
    }

    /// Requires `container` to hold this element with at least `padding`
    /// pixels of room on every edge.
    pub fn validate_inside_of_container_with_padding(
        &self,
        container: &UiElement,
        padding: &Padding,
        errors: &mut Errors,
    ) {
        let padded = self.rectangle.inflate(padding);
        if !container.contains_rectangle(&padded) {
            let leading = self.origin() - container.origin();
            let trailing = container.corner() - self.corner();
            errors.add_with_element(
                format!(
                    "Padding of element {} is incorrect. Expected padding: top[{}], right[{}], bottom[{}], left[{}]. Actual padding: top[{}], right[{}], bottom[{}], left[{}]",
                    self.quoted_name(),
                    padding.top,
                    padding.right,
                    padding.bottom,
                    padding.left,
                    leading.y,
                    trailing.x,
                    trailing.y,
                    leading.x,
                ),
                container,
            );
        }
    }

    // ── Validations: page offsets and centring ────────────────────────────────

    pub fn validate_left_offset(&self, condition: &Condition, page: &UiElement, context: &Context, errors: &mut Errors) {
        self.validate_offset(Direction::Left, condition, page, context, errors);
    }

    pub fn validate_right_offset(&self, condition: &Condition, page: &UiElement, context: &Context, errors: &mut Errors) {
        self.validate_offset(Direction::Right, condition, page, context, errors);
    }

    pub fn validate_top_offset(&self, condition: &Condition, page: &UiElement, context: &Context, errors: &mut Errors) {
        self.validate_offset(Direction::Up, condition, page, context, errors);
    }

    pub fn validate_bottom_offset(&self, condition: &Condition, page: &UiElement, context: &Context, errors: &mut Errors) {
        self.validate_offset(Direction::Down, condition, page, context, errors);
    }

    pub fn validate_offset(
        &self,
        direction: Direction,
        condition: &Condition,
        page: &UiElement,
        context: &Context,
        errors: &mut Errors,
    ) {
        let offset = self.offset(direction, page);
        if !condition.is_satisfied_by(offset, context, direction) {
            errors.add_with_element(
                format!(
                    "Expected {} offset of element {} to be {}. Actual {} offset is: {}",
                    direction.end_name(),
                    self.quoted_name(),
                    condition.describe(context, direction),
                    direction.end_name(),
                    offset.to_string_with_units(PIXELS),
                ),
                self,
            );
        }
    }

    /// Equal left and right offsets on `page`.
    pub fn validate_centered_on_vertically(&self, page: &UiElement, errors: &mut Errors) {
        self.validate_centered(Direction::Right, page, errors);
    }

    /// Equal top and bottom offsets on `page`.
    pub fn validate_centered_on_horizontally(&self, page: &UiElement, errors: &mut Errors) {
        self.validate_centered(Direction::Down, page, errors);
    }

    pub fn validate_centered(&self, direction: Direction, page: &UiElement, errors: &mut Errors) {
        if !self.has_equal_opposite_offsets(direction, page) {
            let opposite = direction.opposite();
            errors.add_with_element(
                format!(
                    "Element {} has not equal {} and {} offset. {} offset is {}, {} is {}",
                    self.quoted_name(),
                    opposite.end_name(),
                    direction.end_name(),
                    capitalize(opposite.end_name()),
                    self.offset(opposite, page).to_string_with_units(PIXELS),
                    direction.end_name(),
                    self.offset(direction, page).to_string_with_units(PIXELS),
                ),
                self,
            );
        }
    }

    // ── Validations: CSS ──────────────────────────────────────────────────────

    /// Requires the computed value of `property` to contain every one of
    /// `values`.  Hex colours are matched in their `rgba(...)` form.
    pub fn validate_has_css_value(&self, property: &str, values: &[&str], errors: &mut Errors) {
        let Some(actual) = self.present_css_value(property, errors) else {
            return;
        };
        for expected in values.iter().map(|v| normalise_css_value(v)) {
            if !actual.contains(expected.as_str()) {
                errors.add(format!(
                    "Expected value of '{property}' is '{expected}'. Actual value is '{actual}'"
                ));
            }
        }
    }

    /// Requires the computed value of `property` to contain none of `values`.
    pub fn validate_does_not_have_css_value(&self, property: &str, values: &[&str], errors: &mut Errors) {
        let Some(actual) = self.present_css_value(property, errors) else {
            return;
        };
        for unwanted in values.iter().map(|v| normalise_css_value(v)) {
            if actual.contains(unwanted.as_str()) {
                errors.add(format!(
                    "CSS property '{property}' should not contain value '{unwanted}'. Actual value is '{actual}'"
                ));
            }
        }
    }

    fn present_css_value(&self, property: &str, errors: &mut Errors) -> Option<String> {
        let value = self.css_value(property);
        if value.is_empty() {
            errors.add(format!(
                "Element {} does not have css property '{property}'",
                self.quoted_name()
            ));
            return None;
        }
        Some(value)
    }
}

impl fmt::Debug for UiElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UiElement")
            .field("name", &self.name)
            .field("rectangle", &self.rectangle)
            .field("quote_name", &self.quote_name)
            .finish_non_exhaustive()
    }
}

fn normalise_css_value(value: &str) -> String {
    if value.starts_with('#') {
        hex_to_rgba(value).unwrap_or_else(|| value.to_string())
    } else {
        value.to_string()
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
