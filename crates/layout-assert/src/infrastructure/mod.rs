//! Infrastructure layer: adapters around the validators.
//!
//! Loads element snapshots and configuration from disk, installs the
//! logging subscriber, and turns a finished run into a serialisable summary.
//!
//! **Dependency rule**: this layer may depend on `application` and
//! `layout_assert_core`, but MUST NOT be imported by the `application` layer
//! or the core crate.

pub mod logging;
pub mod report;
pub mod snapshot;
pub mod storage;
