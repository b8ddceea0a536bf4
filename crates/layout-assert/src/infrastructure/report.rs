//! Serialisable summary of one validation run.
//!
//! HTML/JSON report rendering and screenshot annotation live outside this
//! workspace.  They receive a [`ValidationSummary`]: the run's identity, the
//! subject under test, the verdict, and every violation with the geometry
//! of the element it concerns.

use layout_assert_core::{Errors, Rectangle, Violation};
use serde::Serialize;
use tracing::info;
use uuid::Uuid;

/// Screen-space box of an offending element, in report form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ElementBounds {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl From<&Rectangle> for ElementBounds {
    fn from(rectangle: &Rectangle) -> Self {
        Self {
            x: rectangle.origin().x.value(),
            y: rectangle.origin().y.value(),
            width: rectangle.width().value(),
            height: rectangle.height().value(),
        }
    }
}

/// One violation in report form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ViolationRecord {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub element: Option<ElementBounds>,
}

impl From<&Violation> for ViolationRecord {
    fn from(violation: &Violation) -> Self {
        Self {
            message: violation.message().to_string(),
            element: violation.element().map(ElementBounds::from),
        }
    }
}

/// Outcome of one validation run.
#[derive(Debug, Clone, Serialize)]
pub struct ValidationSummary {
    pub run_id: Uuid,
    pub subject: String,
    pub passed: bool,
    pub violations: Vec<ViolationRecord>,
}

impl ValidationSummary {
    /// Builds a summary for `subject` from a finished run's sink.
    pub fn from_errors(subject: impl Into<String>, errors: &Errors) -> Self {
        let summary = Self {
            run_id: Uuid::new_v4(),
            subject: subject.into(),
            passed: !errors.has_errors(),
            violations: errors.iter().map(ViolationRecord::from).collect(),
        };
        info!(
            run_id = %summary.run_id,
            subject = %summary.subject,
            passed = summary.passed,
            violations = summary.violations.len(),
            "validation run summarised"
        );
        summary
    }

    /// # Errors
    ///
    /// Returns a `serde_json` error if serialisation fails.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
