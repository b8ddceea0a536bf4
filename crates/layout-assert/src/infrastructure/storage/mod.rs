//! Storage infrastructure: configuration file persistence.
//!
//! The `config` sub-module reads and writes the validator's TOML settings
//! and falls back to defaults when no file exists yet.

pub mod config;
