//! Domain model for layout assertions.
//!
//! Everything here is pure: rectangles in, booleans or violation messages
//! out.  Nothing touches a browser, the file system, or a clock.
//!
//! # Layers inside the domain (for beginners)
//!
//! - **`geometry`** – scalars, vectors, intervals, rectangles and the
//!   [`geometry::Direction`] abstraction.  A direction knows where a
//!   rectangle begins and ends along its axis, so one algorithm covers all
//!   four sides.
//! - **`condition`** – thresholds such as "between 5 and 7" and the unit
//!   context (pixels or percent of the page) they are evaluated in.
//! - **`errors`** – the append-only violation sink a run writes into.
//! - **`css`** – the narrow CSS lookup seam an element carries.
//! - **`element`** – [`element::UiElement`], the relational predicates and
//!   their `validate_*` counterparts.
//! - **`group`** – pairwise checks over element lists and the grid
//!   regularity algorithm.

pub mod condition;
pub mod css;
pub mod element;
pub mod errors;
pub mod geometry;

/// Collection and grid validation engine.
///
/// See [`group::aligned_as_grid`] for the grid algorithm.
pub mod group;
