//! layout-assert library entry point.
//!
//! Builds on `layout_assert_core` with the pieces a test suite actually
//! touches: fluent validators for one element or a group of elements,
//! loading element snapshots, TOML configuration, logging set-up and a
//! serialisable summary of each validation run.
//!
//! Integration tests in `tests/` use the same module tree.

pub mod application;
pub mod infrastructure;

pub use application::validate_chunk::ChunkValidator;
pub use application::validate_element::ElementValidator;
