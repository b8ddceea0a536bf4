//! Integration tests for a complete validation run.
//!
//! These exercise the layout-assert crate end-to-end the way a test suite
//! uses it: load a config, load an element snapshot, run element and group
//! validators, and summarise the result.
//!
//! ```text
//! config.toml ──► ValidatorConfig ─┐
//!                                  ├─► ElementValidator / ChunkValidator ─► ValidationSummary
//! snapshot.json ─► Snapshot ───────┘
//! ```

use std::path::PathBuf;

use layout_assert::application::validate_chunk::NO_ELEMENTS_MESSAGE;
use layout_assert::infrastructure::logging::init_tracing;
use layout_assert::infrastructure::report::ValidationSummary;
use layout_assert::infrastructure::snapshot::{JsonSnapshotSource, SnapshotSource};
use layout_assert::infrastructure::storage::config::{load_config, save_config, ValidatorConfig};
use layout_assert::{ChunkValidator, ElementValidator};
use layout_assert_core::{Padding, Units};
use uuid::Uuid;

const PAGE_SNAPSHOT: &str = r##"{
    "page": { "x": 0, "y": 0, "width": 1000, "height": 800 },
    "elements": [
        { "name": "header", "x": 0, "y": 0, "width": 1000, "height": 80,
          "css": { "background-color": "rgba(34, 34, 34, 1)" } },
        { "name": "logo", "x": 20, "y": 20, "width": 100, "height": 40 },
        { "name": "search", "x": 400, "y": 20, "width": 200, "height": 40 },
        { "name": "card-1", "x": 100, "y": 200, "width": 200, "height": 150 },
        { "name": "card-2", "x": 400, "y": 200, "width": 200, "height": 150 },
        { "name": "card-3", "x": 700, "y": 200, "width": 200, "height": 150 },
        { "name": "card-4", "x": 100, "y": 400, "width": 200, "height": 150 },
        { "name": "card-5", "x": 410, "y": 400, "width": 200, "height": 150 }
    ]
}"##;

/// A fresh directory under the system temp dir, removed on drop.
struct TempDir(PathBuf);

impl TempDir {
    fn new() -> Self {
        let dir = std::env::temp_dir().join(format!("layout_assert_it_{}", Uuid::new_v4()));
        std::fs::create_dir_all(&dir).expect("create temp dir");
        Self(dir)
    }

    fn file(&self, name: &str, content: &str) -> PathBuf {
        let path = self.0.join(name);
        std::fs::write(&path, content).expect("write fixture");
        path
    }
}

impl Drop for TempDir {
    fn drop(&mut self) {
        std::fs::remove_dir_all(&self.0).ok();
    }
}

#[test]
fn test_header_checks_pass_on_sample_page() {
    // Arrange
    init_tracing("debug");
    let dir = TempDir::new();
    let snapshot = JsonSnapshotSource::new(dir.file("snapshot.json", PAGE_SNAPSHOT))
        .load()
        .expect("load snapshot");
    let cfg = ValidatorConfig::default();
    let page = snapshot.page(cfg.validation.page_rectangle());
    let header = snapshot.element("header").expect("header").clone();
    let logo = snapshot.element("logo").expect("logo").clone();
    let search = snapshot.element("search").expect("search").clone();

    // Act
    let mut validator = ElementValidator::new(logo, page.clone());
    validator
        .is_inside_of_with_padding(&header, Padding::uniform(20))
        .is_left_of_with_margin(&search, 200, 300)
        .is_top_aligned_with(&search)
        .same_height_as(&search);
    let mut header_validator = ElementValidator::new(header, page);
    header_validator
        .has_css_value("background-color", &["#222222"])
        .centered_on_page_vertically();

    // Assert
    assert!(validator.validate(), "{:?}", validator.errors().messages());
    assert!(header_validator.validate(), "{:?}", header_validator.errors().messages());
}

#[test]
fn test_card_grid_reports_shifted_card_in_summary() {
    // Arrange
    let snapshot = JsonSnapshotSource::parse(PAGE_SNAPSHOT).expect("parse");
    let page = snapshot.page(ValidatorConfig::default().validation.page_rectangle());
    let cards = snapshot.elements_with_prefix("card-");

    // Act
    let mut validator = ChunkValidator::new(cards, page);
    validator
        .aligned_as_grid_with_rows(3, 2)
        .do_not_overlap()
        .have_equal_size();
    let passed = validator.validate();
    let summary = ValidationSummary::from_errors("cards", validator.errors());

    // Assert
    assert!(!passed);
    assert_eq!(summary.violations.len(), 1);
    assert!(summary.violations[0].message.starts_with("Element 'card-5' in row 2, column 2"));
    let bounds = summary.violations[0].element.expect("card bounds");
    assert_eq!((bounds.x, bounds.y), (410, 400));
}

#[test]
fn test_config_drives_units_and_empty_groups() {
    // Arrange
    let dir = TempDir::new();
    let config_path = dir.0.join("conf").join("validator.toml");
    let mut cfg = ValidatorConfig::default();
    cfg.validation.units = Units::Percent;
    cfg.validation.allow_empty = false;
    save_config(&config_path, &cfg).expect("save config");
    let cfg = load_config(&config_path).expect("load config");
    let snapshot = JsonSnapshotSource::parse(PAGE_SNAPSHOT).expect("parse");
    let page = snapshot.page(cfg.validation.page_rectangle());
    let search = snapshot.element("search").expect("search").clone();

    // Act
    let mut validator = ElementValidator::new(search, page.clone());
    // 20% of a 1000px page is exactly the search box width.
    validator.change_units_to(cfg.validation.units).width_between(20, 20);
    let mut empty = if cfg.validation.allow_empty {
        ChunkValidator::allowing_empty(snapshot.elements_with_prefix("footer-"), page)
    } else {
        ChunkValidator::new(snapshot.elements_with_prefix("footer-"), page)
    };
    empty.change_units_to(cfg.validation.units).are_aligned_as_grid_cells();

    // Assert
    assert!(validator.validate());
    assert_eq!(empty.errors().messages(), vec![NO_ELEMENTS_MESSAGE]);
}

#[test]
fn test_summary_json_is_consumable() {
    let snapshot = JsonSnapshotSource::parse(PAGE_SNAPSHOT).expect("parse");
    let page = snapshot.page(ValidatorConfig::default().validation.page_rectangle());
    let logo = snapshot.element("logo").expect("logo").clone();

    let mut validator = ElementValidator::new(logo, page);
    validator.centered_on_page_vertically();
    let json = ValidationSummary::from_errors("logo", validator.errors())
        .to_json()
        .expect("serialize");

    let value: serde_json::Value = serde_json::from_str(&json).expect("parse summary");
    assert_eq!(value["subject"], "logo");
    assert_eq!(value["violations"][0]["element"]["width"], 100);
}
