//! Tracing subscriber initialisation.
//!
//! The libraries only emit `tracing` events; nothing is printed until a
//! subscriber is installed.  Test harnesses and tools call [`init_tracing`]
//! once at start-up with the level from the config file.  `RUST_LOG`, when
//! set, takes precedence over that level.

use tracing_subscriber::EnvFilter;

/// Installs a formatted, env-filtered subscriber as the global default.
///
/// Returns `false` if a global subscriber was already installed, in which
/// case nothing changes.  Safe to call from every test.
pub fn init_tracing(level: &str) -> bool {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init()
        .is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_tracing_second_call_is_a_no_op() {
        // The first call may already have happened in another test of this
        // binary, so only the second outcome is deterministic.
        init_tracing("debug");
        assert!(!init_tracing("info"));
    }
}
