//! ChunkValidator: chained checks over an ordered list of elements.
//!
//! A "chunk" is whatever a locator returned for one query: menu items, grid
//! cards, form fields.  The list order is the traversal order the grid
//! algorithm relies on (left to right, top to bottom).
//!
//! # Empty lists
//!
//! A query that matched nothing is usually a broken locator rather than a
//! valid layout.  Unless the validator was built with
//! [`ChunkValidator::allowing_empty`], an empty list records the single
//! violation `No elements to validate` and every later check is skipped.

use layout_assert_core::domain::group;
use layout_assert_core::{Condition, Context, Errors, UiElement, Units};
use tracing::{debug, info, warn};

/// Message recorded when a chunk is unexpectedly empty.
pub const NO_ELEMENTS_MESSAGE: &str = "No elements to validate";

/// Fluent validator for an ordered group of elements.
#[derive(Debug)]
pub struct ChunkValidator {
    elements: Vec<UiElement>,
    page: UiElement,
    context: Context,
    errors: Errors,
    skip_checks: bool,
}

impl ChunkValidator {
    /// Creates a validator for `elements`.  An empty list is a violation.
    pub fn new(elements: Vec<UiElement>, page: UiElement) -> Self {
        Self::build(elements, page, false)
    }

    /// Creates a validator that treats an empty list as a valid layout.
    pub fn allowing_empty(elements: Vec<UiElement>, page: UiElement) -> Self {
        Self::build(elements, page, true)
    }

    /// Creates a validator whose elements are renamed `#1:<rect>`, `#2:<rect>`,
    /// ... for reporting.
    pub fn numbered(elements: &[UiElement], page: UiElement, allow_empty: bool) -> Self {
        Self::build(UiElement::as_numbered_list(elements), page, allow_empty)
    }

    fn build(elements: Vec<UiElement>, page: UiElement, allow_empty: bool) -> Self {
        let context = Context::new(Units::Pixels, *page.rectangle());
        let mut errors = Errors::new();
        let skip_checks = elements.is_empty() && !allow_empty;
        if skip_checks {
            warn!("chunk validator created with no elements");
            errors.add(NO_ELEMENTS_MESSAGE);
        }
        debug!(elements = elements.len(), allow_empty, "chunk validator created");
        Self {
            elements,
            page,
            context,
            errors,
            skip_checks,
        }
    }

    pub fn elements(&self) -> &[UiElement] {
        &self.elements
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

    pub fn context(&self) -> &Context {
        &self.context
    }

    fn check<F>(&mut self, name: &str, run: F) -> &mut Self
    where
        F: FnOnce(&[UiElement], &UiElement, &mut Errors),
    {
        if self.skip_checks {
            debug!(check = name, "skipped, chunk has no elements");
            return self;
        }
        let before = self.errors.len();
        run(&self.elements, &self.page, &mut self.errors);
        debug!(check = name, violations = self.errors.len() - before, "chunk check ran");
        self
    }

    // ── Pairwise ──────────────────────────────────────────────────────────────

    pub fn do_not_overlap(&mut self) -> &mut Self {
        self.check("do_not_overlap", |elements, _, errors| {
            group::do_not_overlap(elements, errors)
        })
    }

    pub fn have_equal_size(&mut self) -> &mut Self {
        self.check("have_equal_size", |elements, _, errors| {
            group::have_equal_size(elements, errors)
        })
    }

    pub fn have_equal_width(&mut self) -> &mut Self {
        self.check("have_equal_width", |elements, _, errors| {
            group::have_equal_width(elements, errors)
        })
    }

    pub fn have_equal_height(&mut self) -> &mut Self {
        self.check("have_equal_height", |elements, _, errors| {
            group::have_equal_height(elements, errors)
        })
    }

    pub fn have_different_sizes(&mut self) -> &mut Self {
        self.check("have_different_sizes", |elements, _, errors| {
            group::have_different_sizes(elements, errors)
        })
    }

    pub fn have_different_widths(&mut self) -> &mut Self {
        self.check("have_different_widths", |elements, _, errors| {
            group::have_different_widths(elements, errors)
        })
    }

    pub fn have_different_heights(&mut self) -> &mut Self {
        self.check("have_different_heights", |elements, _, errors| {
            group::have_different_heights(elements, errors)
        })
    }

    pub fn are_left_aligned(&mut self) -> &mut Self {
        self.check("are_left_aligned", |elements, _, errors| {
            group::are_left_aligned(elements, errors)
        })
    }

    pub fn are_right_aligned(&mut self) -> &mut Self {
        self.check("are_right_aligned", |elements, _, errors| {
            group::are_right_aligned(elements, errors)
        })
    }

    pub fn are_top_aligned(&mut self) -> &mut Self {
        self.check("are_top_aligned", |elements, _, errors| {
            group::are_top_aligned(elements, errors)
        })
    }

    pub fn are_bottom_aligned(&mut self) -> &mut Self {
        self.check("are_bottom_aligned", |elements, _, errors| {
            group::are_bottom_aligned(elements, errors)
        })
    }

    pub fn are_centered_on_page_vertically(&mut self) -> &mut Self {
        self.check("are_centered_on_page_vertically", |elements, page, errors| {
            group::are_centered_on_page_vertically(elements, page, errors)
        })
    }

    pub fn are_centered_on_page_horizontally(&mut self) -> &mut Self {
        self.check("are_centered_on_page_horizontally", |elements, page, errors| {
            group::are_centered_on_page_horizontally(elements, page, errors)
        })
    }

    pub fn are_inside_of(&mut self, container: &UiElement) -> &mut Self {
        self.check("are_inside_of", |elements, _, errors| {
            group::are_inside_of(elements, container, errors)
        })
    }

    /// Every element's width must satisfy `condition`, in the current units.
    pub fn have_width(&mut self, condition: Condition) -> &mut Self {
        let context = self.context;
        self.check("have_width", |elements, _, errors| {
            for element in elements {
                element.validate_width(&condition, &context, errors);
            }
        })
    }

    /// Every element's height must satisfy `condition`, in the current units.
    pub fn have_height(&mut self, condition: Condition) -> &mut Self {
        let context = self.context;
        self.check("have_height", |elements, _, errors| {
            for element in elements {
                element.validate_height(&condition, &context, errors);
            }
        })
    }

    // ── Grid ──────────────────────────────────────────────────────────────────

    /// Rows of `columns` cells; the last row may be partially filled.
    pub fn aligned_as_grid(&mut self, columns: usize) -> &mut Self {
        self.check("aligned_as_grid", |elements, _, errors| {
            group::aligned_as_grid(elements, columns, None, errors)
        })
    }

    /// Exactly `rows` rows of `columns` cells.
    pub fn aligned_as_grid_with_rows(&mut self, columns: usize, rows: usize) -> &mut Self {
        self.check("aligned_as_grid_with_rows", |elements, _, errors| {
            group::aligned_as_grid(elements, columns, Some(rows), errors)
        })
    }

    /// Grid with the column count taken from the first row.
    pub fn are_aligned_as_grid_cells(&mut self) -> &mut Self {
        self.check("are_aligned_as_grid_cells", |elements, _, errors| {
            group::aligned_as_grid_cells(elements, errors)
        })
    }

    /// Returns `true` if no check recorded a violation.
    pub fn validate(&self) -> bool {
        let passed = !self.errors.has_errors();
        info!(
            elements = self.elements.len(),
            violations = self.errors.len(),
            passed,
            "chunk validation finished"
        );
        passed
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
