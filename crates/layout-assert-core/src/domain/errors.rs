//! The violation sink.
//!
//! One [`Errors`] value is created per validation run and passed by `&mut`
//! through every check.  Checks only ever append; nothing is removed and no
//! check aborts the run, so a single pass surfaces every independent
//! problem.

use serde::Serialize;
use tracing::trace;

use super::element::UiElement;
use super::geometry::Rectangle;

/// A single failed assertion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Violation {
    message: String,
    /// Geometry of the offending element, kept for screenshot annotation.
    #[serde(skip_serializing_if = "Option::is_none")]
    element: Option<Rectangle>,
}

impl Violation {
    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn element(&self) -> Option<&Rectangle> {
        self.element.as_ref()
    }
}

/// Ordered, append-only collection of violations produced by one run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Errors {
    violations: Vec<Violation>,
}

impl Errors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a violation that is not tied to a particular element.
    pub fn add(&mut self, message: impl Into<String>) {
        self.push(message.into(), None);
    }

    /// Records a violation and remembers the offending element's geometry.
    pub fn add_with_element(&mut self, message: impl Into<String>, element: &UiElement) {
        self.push(message.into(), Some(*element.rectangle()));
    }

    fn push(&mut self, message: String, element: Option<Rectangle>) {
        trace!(%message, "layout violation recorded");
        self.violations.push(Violation { message, element });
    }

    pub fn has_errors(&self) -> bool {
        !self.violations.is_empty()
    }

    pub fn len(&self) -> usize {
        self.violations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }

    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }

    pub fn iter(&self) -> impl Iterator<Item = &Violation> {
        self.violations.iter()
    }

    /// Messages in the order they were recorded.
    pub fn messages(&self) -> Vec<&str> {
        self.violations.iter().map(Violation::message).collect()
    }

    pub fn last_message(&self) -> Option<&str> {
        self.violations.last().map(Violation::message)
    }
}

impl<'a> IntoIterator for &'a Errors {
    type Item = &'a Violation;
    type IntoIter = std::slice::Iter<'a, Violation>;

    fn into_iter(self) -> Self::IntoIter {
        self.violations.iter()
    }
}
