//! Application layer: fluent validators.
//!
//! # What is the "application" layer? (for beginners)
//!
//! The domain crate answers single questions ("is A left of B?").  Test
//! authors usually want to state a whole expectation about one element, or
//! about a list of them, in one chained expression and then ask "did it all
//! hold?".  The validators here own the violation sink for one run, keep the
//! current unit mode, and forward each chained call to the domain.
//!
//! They contain no file system or browser access; elements arrive already
//! resolved (see `infrastructure::snapshot`).
//!
//! # Sub-modules
//!
//! - **`validate_element`** – [`validate_element::ElementValidator`], checks
//!   rooted at one element.
//! - **`validate_chunk`** – [`validate_chunk::ChunkValidator`], checks over an
//!   ordered element list, including grid regularity.

pub mod validate_chunk;
pub mod validate_element;
