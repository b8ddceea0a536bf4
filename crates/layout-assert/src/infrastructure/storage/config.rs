//! TOML-based configuration for layout validation runs.
//!
//! Example file:
//!
//! ```toml
//! [validation]
//! units = "percent"
//! allow_empty = false
//! page_width = 1440
//! page_height = 900
//!
//! [logging]
//! log_level = "debug"
//! ```
//!
//! # Serde default values
//!
//! Every field is annotated with `#[serde(default = "some_fn")]` and both
//! sections with `#[serde(default)]`, so an empty file, a file with only one
//! section, or a file written by an older version all load cleanly.

use std::path::{Path, PathBuf};

use layout_assert_core::{Rectangle, Units};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info};

/// Error type for configuration file operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A file system I/O error occurred.
    #[error("I/O error accessing config at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The TOML content could not be parsed.
    #[error("failed to parse config TOML: {0}")]
    Parse(#[from] toml::de::Error),

    /// The config could not be serialized to TOML.
    #[error("failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
}

// ── Config schema types ───────────────────────────────────────────────────────

/// Top-level validator configuration stored on disk.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ValidatorConfig {
    #[serde(default)]
    pub validation: ValidationConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// How thresholds are read and which layouts count as valid.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ValidationConfig {
    /// Units for caller-supplied thresholds: `"px"` or `"percent"`.
    #[serde(default)]
    pub units: Units,
    /// Whether an empty element group is a valid layout.
    #[serde(default = "default_false")]
    pub allow_empty: bool,
    /// Page width in pixels, used when a snapshot carries no page frame.
    #[serde(default = "default_page_width")]
    pub page_width: u32,
    /// Page height in pixels, used when a snapshot carries no page frame.
    #[serde(default = "default_page_height")]
    pub page_height: u32,
}

/// Logging settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoggingConfig {
    /// `tracing` log level: `"error"`, `"warn"`, `"info"`, `"debug"`, `"trace"`.
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

// ── Default helpers ───────────────────────────────────────────────────────────

fn default_false() -> bool {
    false
}
fn default_page_width() -> u32 {
    1920
}
fn default_page_height() -> u32 {
    1080
}
fn default_log_level() -> String {
    "info".to_string()
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            units: Units::default(),
            allow_empty: default_false(),
            page_width: default_page_width(),
            page_height: default_page_height(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

impl ValidationConfig {
    /// The fallback page frame, anchored at the origin.
    pub fn page_rectangle(&self) -> Rectangle {
        Rectangle::from_bounds(
            0,
            0,
            i32::try_from(self.page_width).unwrap_or(i32::MAX),
            i32::try_from(self.page_height).unwrap_or(i32::MAX),
        )
    }
}

// ── Config repository ─────────────────────────────────────────────────────────

/// Loads `ValidatorConfig` from `path`, returning the default config if the
/// file does not exist.
///
/// # Errors
///
/// Returns [`ConfigError::Io`] for file-system errors other than "not found",
/// and [`ConfigError::Parse`] if the TOML is malformed.
pub fn load_config(path: &Path) -> Result<ValidatorConfig, ConfigError> {
    match std::fs::read_to_string(path) {
        Ok(content) => {
            let cfg: ValidatorConfig = toml::from_str(&content)?;
            debug!(path = %path.display(), "loaded validator config");
            Ok(cfg)
        }
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            info!(path = %path.display(), "no config file, using defaults");
            Ok(ValidatorConfig::default())
        }
        Err(e) => Err(ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        }),
    }
}

/// Persists `config` to `path`.
///
/// Creates the parent directory if it does not exist.
///
/// # Errors
///
/// Returns [`ConfigError::Io`] for file-system failures or
/// [`ConfigError::Serialize`] if serialization fails.
pub fn save_config(path: &Path, config: &ValidatorConfig) -> Result<(), ConfigError> {
    if let Some(dir) = path.parent() {
        std::fs::create_dir_all(dir).map_err(|source| ConfigError::Io {
            path: dir.to_path_buf(),
            source,
        })?;
    }

    let content = toml::to_string_pretty(config)?;
    std::fs::write(path, content).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(())
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    // ── Defaults ──────────────────────────────────────────────────────────────

    #[test]
    fn test_validator_config_default_values() {
        // Arrange / Act
        let cfg = ValidatorConfig::default();

        // Assert
        assert_eq!(cfg.validation.units, Units::Pixels);
        assert!(!cfg.validation.allow_empty);
        assert_eq!(cfg.validation.page_width, 1920);
        assert_eq!(cfg.validation.page_height, 1080);
        assert_eq!(cfg.logging.log_level, "info");
    }

    #[test]
    fn test_page_rectangle_uses_configured_size() {
        let cfg = ValidationConfig {
            page_width: 800,
            page_height: 600,
            ..ValidationConfig::default()
        };
        assert_eq!(cfg.page_rectangle(), Rectangle::from_bounds(0, 0, 800, 600));
    }

    // ── TOML parsing ──────────────────────────────────────────────────────────

    #[test]
    fn test_deserialize_empty_toml_uses_defaults() {
        let cfg: ValidatorConfig = toml::from_str("").expect("deserialize empty");
        assert_eq!(cfg, ValidatorConfig::default());
    }

    #[test]
    fn test_deserialize_partial_validation_overrides_defaults() {
        // Arrange
        let toml_str = r#"
[validation]
units = "percent"
page_width = 1440
"#;

        // Act
        let cfg: ValidatorConfig = toml::from_str(toml_str).expect("deserialize partial");

        // Assert
        assert_eq!(cfg.validation.units, Units::Percent);
        assert_eq!(cfg.validation.page_width, 1440);
        // Unspecified fields keep their defaults
        assert_eq!(cfg.validation.page_height, 1080);
        assert_eq!(cfg.logging.log_level, "info");
    }

    #[test]
    fn test_serialized_units_use_short_name() {
        let toml_str = toml::to_string_pretty(&ValidatorConfig::default()).expect("serialize");
        assert!(toml_str.contains(r#"units = "px""#), "{toml_str}");
    }

    #[test]
    fn test_deserialize_unknown_units_returns_parse_error() {
        let result: Result<ValidatorConfig, toml::de::Error> =
            toml::from_str("[validation]\nunits = \"em\"\n");
        assert!(result.is_err());
    }

    // ── load_config / save_config ─────────────────────────────────────────────

    #[test]
    fn test_load_config_returns_default_when_file_absent() {
        let path = std::env::temp_dir()
            .join(format!("layout_assert_missing_{}", Uuid::new_v4()))
            .join("config.toml");

        let cfg = load_config(&path).expect("missing file is not an error");

        assert_eq!(cfg, ValidatorConfig::default());
    }

    #[test]
    fn test_save_and_load_config_round_trip_via_temp_dir() {
        // Arrange
        let dir = std::env::temp_dir().join(format!("layout_assert_test_{}", Uuid::new_v4()));
        let path = dir.join("nested").join("config.toml");
        let mut cfg = ValidatorConfig::default();
        cfg.validation.allow_empty = true;
        cfg.validation.units = Units::Percent;
        cfg.logging.log_level = "debug".to_string();

        // Act
        save_config(&path, &cfg).expect("save");
        let loaded = load_config(&path).expect("load");

        // Assert
        assert_eq!(loaded, cfg);

        // Cleanup
        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_load_config_reports_parse_error() {
        let dir = std::env::temp_dir().join(format!("layout_assert_bad_{}", Uuid::new_v4()));
        std::fs::create_dir_all(&dir).expect("create temp dir");
        let path = dir.join("config.toml");
        std::fs::write(&path, "[[[ not valid toml").expect("write");

        let result = load_config(&path);

        assert!(matches!(result, Err(ConfigError::Parse(_))));
        std::fs::remove_dir_all(&dir).ok();
    }
}
