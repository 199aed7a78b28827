//! Import result contract.
//!
//! `ImportResult` is the sole externally visible output of an import call.
//! Its shape is stable and parsed structurally by downstream writers; do not
//! change it without a version field.

use serde::{Deserialize, Serialize};

use crate::record::ProjectRecord;

/// Row counts for one import run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportStats {
    /// Data rows parsed from the source (blank rows excluded).
    pub total: usize,
    /// Rows that produced a canonical record.
    pub valid: usize,
    /// Rows that did not.
    pub invalid: usize,
}

/// Self-describing outcome of one import call.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ImportResult {
    /// True iff `errors` is empty after the full run.
    pub success: bool,
    pub records: Vec<ProjectRecord>,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
    pub stats: ImportStats,
}

impl ImportResult {
    /// A run that failed before producing any records.
    pub fn failure(errors: Vec<String>, warnings: Vec<String>, total: usize) -> Self {
        Self {
            success: false,
            records: Vec::new(),
            errors,
            warnings,
            stats: ImportStats {
                total,
                valid: 0,
                invalid: total,
            },
        }
    }
}
