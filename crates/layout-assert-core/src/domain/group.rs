//! Collection and grid validation engine.
//!
//! Two families of checks over an ordered slice of [`UiElement`]s:
//!
//! - **Pairwise uniformity**: every unordered pair `(i, j)` with `i < j` is
//!   run through one element validation, so a group of `n` elements yields
//!   at most `n·(n-1)/2` violations per check.
//! - **Grid regularity**: the elements are partitioned into rows in
//!   traversal order, then row lengths, in-row ordering and column edges are
//!   checked.
//!
//! # Row partitioning
//!
//! ```text
//!  ┌───┐┌───┐┌───┐   row 1   every candidate overlaps the first
//!  └───┘└───┘└───┘           element's vertical interval
//!  ┌───┐┌───┐        row 2   touching edges start a new row
//!  └───┘└───┘
//! ```
//!
//! A candidate joins the current row when its vertical interval overlaps the
//! row's first element with non-zero measure, or when both share the same top
//! edge.

use tracing::debug;

use super::element::UiElement;
use super::errors::Errors;
use super::geometry::{Direction, ORIGIN_CORNER};

// ── Pairwise uniformity ───────────────────────────────────────────────────────

pub fn do_not_overlap(elements: &[UiElement], errors: &mut Errors) {
    for_each_pair(elements, |a, b| a.validate_not_overlapping_with(b, errors));
}

pub fn have_equal_size(elements: &[UiElement], errors: &mut Errors) {
    for_each_pair(elements, |a, b| a.validate_same_extent(ORIGIN_CORNER, b, errors));
}

pub fn have_equal_width(elements: &[UiElement], errors: &mut Errors) {
    for_each_pair(elements, |a, b| a.validate_same_extent(Direction::Right, b, errors));
}

pub fn have_equal_height(elements: &[UiElement], errors: &mut Errors) {
    for_each_pair(elements, |a, b| a.validate_same_extent(Direction::Down, b, errors));
}

pub fn have_different_sizes(elements: &[UiElement], errors: &mut Errors) {
    for_each_pair(elements, |a, b| a.validate_not_same_extent(ORIGIN_CORNER, b, errors));
}

pub fn have_different_widths(elements: &[UiElement], errors: &mut Errors) {
    for_each_pair(elements, |a, b| a.validate_not_same_extent(Direction::Right, b, errors));
}

pub fn have_different_heights(elements: &[UiElement], errors: &mut Errors) {
    for_each_pair(elements, |a, b| a.validate_not_same_extent(Direction::Down, b, errors));
}

pub fn are_left_aligned(elements: &[UiElement], errors: &mut Errors) {
    are_aligned(Direction::Left, elements, errors);
}

pub fn are_right_aligned(elements: &[UiElement], errors: &mut Errors) {
    are_aligned(Direction::Right, elements, errors);
}

pub fn are_top_aligned(elements: &[UiElement], errors: &mut Errors) {
    are_aligned(Direction::Up, elements, errors);
}

pub fn are_bottom_aligned(elements: &[UiElement], errors: &mut Errors) {
    are_aligned(Direction::Down, elements, errors);
}

/// Every pair must share the same edge on the `direction` side.
pub fn are_aligned(direction: Direction, elements: &[UiElement], errors: &mut Errors) {
    for_each_pair(elements, |a, b| a.validate_equal_end(direction, b, errors));
}

/// Each element must have equal left and right offsets on `page`.
pub fn are_centered_on_page_vertically(elements: &[UiElement], page: &UiElement, errors: &mut Errors) {
    for element in elements {
        element.validate_centered_on_vertically(page, errors);
    }
}

/// Each element must have equal top and bottom offsets on `page`.
pub fn are_centered_on_page_horizontally(elements: &[UiElement], page: &UiElement, errors: &mut Errors) {
    for element in elements {
        element.validate_centered_on_horizontally(page, errors);
    }
}

pub fn are_inside_of(elements: &[UiElement], container: &UiElement, errors: &mut Errors) {
    for element in elements {
        element.validate_inside_of_container(container, errors);
    }
}

fn for_each_pair<F>(elements: &[UiElement], mut check: F)
where
    F: FnMut(&UiElement, &UiElement),
{
    for (i, first) in elements.iter().enumerate() {
        for second in &elements[i + 1..] {
            check(first, second);
        }
    }
}

// ── Grid regularity ───────────────────────────────────────────────────────────

/// Splits `elements` into consecutive rows, preserving traversal order.
pub fn partition_rows(elements: &[UiElement]) -> Vec<&[UiElement]> {
    let mut rows = Vec::new();
    let mut start = 0;
    for (i, candidate) in elements.iter().enumerate().skip(1) {
        if !shares_row(&elements[start], candidate) {
            rows.push(&elements[start..i]);
            start = i;
        }
    }
    if !elements.is_empty() {
        rows.push(&elements[start..]);
    }
    debug!(elements = elements.len(), rows = rows.len(), "partitioned elements into grid rows");
    rows
}

fn shares_row(first: &UiElement, candidate: &UiElement) -> bool {
    first.y_interval().intersects(&candidate.y_interval())
        || first.begin(Direction::Down) == candidate.begin(Direction::Down)
}

/// Checks that `elements` tile into rows of `columns` cells, and into
/// exactly `rows` rows when a row count is given.
///
/// Every row but the last must be full; the last may be partially filled.
/// Inside a row elements must run strictly left to right, and elements in
/// the same column of consecutive rows must share left and right edges.
pub fn aligned_as_grid(elements: &[UiElement], columns: usize, rows: Option<usize>, errors: &mut Errors) {
    if columns == 0 {
        errors.add("Grid must have at least one column");
        return;
    }
    let partition = partition_rows(elements);

    if let Some(expected_rows) = rows {
        if partition.len() != expected_rows {
            errors.add(format!(
                "Expected {expected_rows} rows in grid. Actual row count is {}",
                partition.len()
            ));
        }
    }

    validate_row_lengths(&partition, columns, errors);
    validate_row_order(&partition, errors);
    validate_columns(&partition, errors);
}

/// Grid check with the column count taken from the first row.  An empty
/// slice, a single row and a single column are all valid grids.
pub fn aligned_as_grid_cells(elements: &[UiElement], errors: &mut Errors) {
    let partition = partition_rows(elements);
    let Some(first_row) = partition.first() else {
        return;
    };
    let columns = first_row.len();
    debug!(columns, "inferred grid column count from first row");

    validate_row_lengths(&partition, columns, errors);
    validate_row_order(&partition, errors);
    validate_columns(&partition, errors);
}

fn validate_row_lengths(partition: &[&[UiElement]], columns: usize, errors: &mut Errors) {
    let last = partition.len().saturating_sub(1);
    for (index, row) in partition.iter().enumerate() {
        let Some(first) = row.first() else {
            continue;
        };
        if index < last && row.len() != columns {
            errors.add_with_element(
                format!(
                    "Row {} of grid has {} elements. Expected {} elements",
                    index + 1,
                    row.len(),
                    columns
                ),
                first,
            );
        } else if index == last && row.len() > columns {
            errors.add_with_element(
                format!(
                    "Row {} of grid has {} elements. Expected at most {} elements",
                    index + 1,
                    row.len(),
                    columns
                ),
                first,
            );
        }
    }
}

fn validate_row_order(partition: &[&[UiElement]], errors: &mut Errors) {
    for (index, row) in partition.iter().enumerate() {
        for (column, pair) in row.windows(2).enumerate() {
            let (left, right) = (&pair[0], &pair[1]);
            if !left.has_successor(Direction::Right, right) {
                errors.add_with_element(
                    format!(
                        "Element {} in row {}, column {} is not right of element {}. Gap between them is {}px",
                        right.quoted_name(),
                        index + 1,
                        column + 2,
                        left.quoted_name(),
                        left.signed_distance_to_successor(Direction::Right, right),
                    ),
                    right,
                );
            }
        }
    }
}

fn validate_columns(partition: &[&[UiElement]], errors: &mut Errors) {
    for (index, rows) in partition.windows(2).enumerate() {
        let (upper, lower) = (rows[0], rows[1]);
        for (column, (above, below)) in upper.iter().zip(lower.iter()).enumerate() {
            if below.has_equal_left_offset_as(above) && below.has_equal_right_offset_as(above) {
                continue;
            }
            errors.add_with_element(
                format!(
                    "Element {} in row {}, column {} is not aligned with element {} in row {}. Left and right edges are {}px and {}px, expected {}px and {}px",
                    below.quoted_name(),
                    index + 2,
                    column + 1,
                    above.quoted_name(),
                    index + 1,
                    below.begin(Direction::Right),
                    below.end(Direction::Right),
                    above.begin(Direction::Right),
                    above.end(Direction::Right),
                ),
                below,
            );
        }
    }
}
