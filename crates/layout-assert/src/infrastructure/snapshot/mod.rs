//! Element snapshot boundary.
//!
//! Whatever drives the browser or device (excluded from this workspace)
//! resolves locators into rectangles and computed styles and hands them over
//! as a [`Snapshot`].  Everything downstream works on that frozen copy, so a
//! validation run never observes the page changing under it.
//!
//! The JSON form read by [`JsonSnapshotSource`]:
//!
//! ```json
//! {
//!   "page": { "x": 0, "y": 0, "width": 1280, "height": 800 },
//!   "elements": [
//!     { "name": "logo", "x": 20, "y": 20, "width": 100, "height": 40,
//!       "css": { "color": "rgba(0, 0, 0, 1)" } }
//!   ]
//! }
//! ```
//!
//! `page` and `css` are optional.  An element without a `name` is named
//! after its `tag`, `id`, `class` and `text` fields and its bounds, e.g.
//! `with properties: tag=[a], id=[home], class=[nav], text=[Home], coord=[0,0], size=[80,20]`.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use layout_assert_core::{GeometryError, MapCssSource, Rectangle, UiElement};
use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

/// Error type for snapshot loading.
#[derive(Debug, Error)]
pub enum SnapshotError {
    /// The snapshot file could not be read.
    #[error("I/O error reading snapshot at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The snapshot is not valid JSON or does not match the expected shape.
    #[error("failed to parse snapshot JSON: {0}")]
    Parse(#[from] serde_json::Error),

    /// An element's reported geometry cannot form a rectangle.
    #[error("invalid geometry for element '{name}': {source}")]
    InvalidGeometry {
        name: String,
        #[source]
        source: GeometryError,
    },
}

/// Produces the element snapshot for one validation run.
#[cfg_attr(test, mockall::automock)]
pub trait SnapshotSource {
    /// # Errors
    ///
    /// Returns a [`SnapshotError`] if the snapshot cannot be read or is
    /// malformed.
    fn load(&self) -> Result<Snapshot, SnapshotError>;
}

/// Resolved elements of one rendered page.
#[derive(Debug, Clone)]
pub struct Snapshot {
    page: Option<Rectangle>,
    elements: Vec<UiElement>,
}

impl Snapshot {
    pub fn new(page: Option<Rectangle>, elements: Vec<UiElement>) -> Self {
        Self { page, elements }
    }

    /// The page frame, or `fallback` when the snapshot did not record one.
    pub fn page(&self, fallback: Rectangle) -> UiElement {
        UiElement::new("page", self.page.unwrap_or(fallback))
    }

    pub fn elements(&self) -> &[UiElement] {
        &self.elements
    }

    /// First element called `name`.
    pub fn element(&self, name: &str) -> Option<&UiElement> {
        self.elements.iter().find(|e| e.name() == name)
    }

    /// All elements whose name starts with `prefix`, in snapshot order.
    pub fn elements_with_prefix(&self, prefix: &str) -> Vec<UiElement> {
        self.elements
            .iter()
            .filter(|e| e.name().starts_with(prefix))
            .cloned()
            .collect()
    }
}

// ── JSON source ───────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
struct SnapshotRecord {
    #[serde(default)]
    page: Option<BoundsRecord>,
    elements: Vec<ElementRecord>,
}

#[derive(Debug, Deserialize)]
struct BoundsRecord {
    x: i32,
    y: i32,
    width: i32,
    height: i32,
}

#[derive(Debug, Deserialize)]
struct ElementRecord {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    tag: Option<String>,
    #[serde(default)]
    id: Option<String>,
    #[serde(default)]
    class: Option<String>,
    #[serde(default)]
    text: Option<String>,
    #[serde(flatten)]
    bounds: BoundsRecord,
    #[serde(default)]
    css: HashMap<String, String>,
}

/// Longest element text shown in a derived name, ellipsis included.
const MAX_TEXT_CHARS: usize = 13;
const ELLIPSIS: &str = "...";

impl ElementRecord {
    /// The given name, or one built from the element's properties.
    fn display_name(&self) -> String {
        if let Some(name) = &self.name {
            return name.clone();
        }
        let field = |value: &Option<String>| value.clone().unwrap_or_default();
        format!(
            "with properties: tag=[{}], id=[{}], class=[{}], text=[{}], coord=[{},{}], size=[{},{}]",
            field(&self.tag),
            field(&self.id),
            field(&self.class),
            shorten_text(self.text.as_deref().unwrap_or_default()),
            self.bounds.x,
            self.bounds.y,
            self.bounds.width,
            self.bounds.height,
        )
    }
}

fn shorten_text(text: &str) -> String {
    if text.chars().count() <= MAX_TEXT_CHARS {
        return text.to_string();
    }
    let kept: String = text.chars().take(MAX_TEXT_CHARS - ELLIPSIS.len()).collect();
    format!("{kept}{ELLIPSIS}")
}

impl BoundsRecord {
    fn to_rectangle(&self, name: &str) -> Result<Rectangle, SnapshotError> {
        Rectangle::from_origin_and_size(self.x, self.y, self.width, self.height).map_err(|source| {
            SnapshotError::InvalidGeometry {
                name: name.to_string(),
                source,
            }
        })
    }
}

/// Reads a snapshot from a JSON file on every [`SnapshotSource::load`].
#[derive(Debug, Clone)]
pub struct JsonSnapshotSource {
    path: PathBuf,
}

impl JsonSnapshotSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Parses a snapshot from JSON text.
    ///
    /// # Errors
    ///
    /// Returns [`SnapshotError::Parse`] for malformed JSON and
    /// [`SnapshotError::InvalidGeometry`] for negative sizes or edges past
    /// the `i32` range.
    pub fn parse(json: &str) -> Result<Snapshot, SnapshotError> {
        let record: SnapshotRecord = serde_json::from_str(json)?;

        let page = record
            .page
            .as_ref()
            .map(|bounds| bounds.to_rectangle("page"))
            .transpose()?;

        let elements = record
            .elements
            .into_iter()
            .map(|element| {
                let name = element.display_name();
                let rectangle = element.bounds.to_rectangle(&name)?;
                let css = Arc::new(MapCssSource::new(element.css));
                Ok(UiElement::with_css_source(name, rectangle, css))
            })
            .collect::<Result<Vec<_>, SnapshotError>>()?;

        debug!(elements = elements.len(), has_page = page.is_some(), "parsed snapshot");
        Ok(Snapshot::new(page, elements))
    }
}

impl SnapshotSource for JsonSnapshotSource {
    fn load(&self) -> Result<Snapshot, SnapshotError> {
        let content = std::fs::read_to_string(&self.path).map_err(|source| SnapshotError::Io {
            path: self.path.clone(),
            source,
        })?;
        Self::parse(&content)
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
