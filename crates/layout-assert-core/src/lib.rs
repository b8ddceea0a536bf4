//! # layout-assert-core
//!
//! Geometry and relational validation engine for asserting on the layout of
//! rendered UI elements.
//!
//! The crate has no I/O.  Callers hand it the screen-space rectangles of
//! elements (and, optionally, a CSS lookup per element) and get back either
//! booleans from predicates or human-readable violations collected in an
//! [`Errors`] sink.
//!
//! # Architecture overview (for beginners)
//!
//! Layout checks come in mirror-image families: *left of* and *right of*,
//! *above* and *below*, *same width* and *same height*.  Instead of writing
//! each one by hand, every check is written once against a [`Direction`].
//! A direction knows which rectangle edge is its "begin" and which is its
//! "end", how to measure the distance between two coordinates walking that
//! way, and what to call things in messages.  `is left of` is then simply
//! "has a successor walking RIGHT", and `is right of` swaps the receiver and
//! the argument.
//!
//! ```text
//!            UP
//!             ▲
//!   LEFT ◄────┼────► RIGHT        begin(RIGHT) = left edge
//!             ▼                   end(RIGHT)   = right edge
//!           DOWN
//! ```
//!
//! - **`domain::geometry`** – the pixel-space primitives.
//! - **`domain::element`** – [`UiElement`] and its predicates/validations.
//! - **`domain::group`** – checks over lists of elements, including grids.

pub mod domain;

// Re-export the most-used types at the crate root so callers can write
// `layout_assert_core::UiElement` instead of the full module path.
pub use domain::condition::{Condition, Context, Units};
pub use domain::css::{CssSource, MapCssSource, NoCssSource};
pub use domain::element::UiElement;
pub use domain::errors::{Errors, Violation};
pub use domain::geometry::{
    scalar, vector, Direction, ExtentGiving, GeometryError, Interval, Padding, Rectangle, Scalar,
    Vector, ORIGIN_CORNER,
};
