//! Validation issues with severity classification.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Severity of a validation issue.
///
/// Errors block transformation; warnings are recorded and never block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
}

/// One issue found while validating a row.
///
/// `row` is the 1-based physical row in the original file (header row = 1),
/// so users can locate the offending row without tooling.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationIssue {
    pub row: u32,
    /// Source header of the offending column, if the issue is field-scoped.
    pub field: Option<String>,
    pub severity: Severity,
    pub message: String,
}

impl ValidationIssue {
    pub fn error(row: u32, field: Option<&str>, message: impl Into<String>) -> Self {
        Self {
            row,
            field: field.map(str::to_string),
            severity: Severity::Error,
            message: message.into(),
        }
    }

    pub fn warning(row: u32, field: Option<&str>, message: impl Into<String>) -> Self {
        Self {
            row,
            field: field.map(str::to_string),
            severity: Severity::Warning,
            message: message.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}
