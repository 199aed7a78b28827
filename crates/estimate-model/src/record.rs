//! Canonical destination records produced by the import pipeline.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Provenance tag stamped on every imported record.
pub const IMPORT_SOURCE: &str = "estimate-spreadsheet";

/// Workflow status of a project record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectStatus {
    /// Freshly imported, not yet reviewed. Initial status for all imports.
    PendingReview,
    Approved,
    InProduction,
    Delivered,
    Cancelled,
}

/// One imported project, typed per the field catalog and ready for the
/// downstream writer. Ownership passes to the caller; the pipeline keeps no
/// reference after returning it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectRecord {
    pub project_name: String,
    pub customer_name: String,
    pub quote_number: Option<String>,
    pub project_type: Option<String>,
    pub priority: Option<String>,
    /// Resolved dealer id; `None` when the code was absent or unmatched.
    pub dealer_id: Option<i64>,
    /// Resolved estimator user id; `None` when the name was absent or unmatched.
    pub estimator_id: Option<i64>,
    /// Canonical factory label, or the raw code passed through unchanged.
    pub factory: Option<String>,
    pub quote_date: Option<NaiveDate>,
    pub delivery_date: Option<NaiveDate>,
    pub total_amount: Option<f64>,
    pub unit_count: Option<i64>,
    pub tax_exempt: bool,
    pub rush_order: bool,
    pub notes: Option<String>,
    pub status: ProjectStatus,
    /// Provenance: always [`IMPORT_SOURCE`].
    pub imported_from: String,
    pub imported_at: DateTime<Utc>,
    /// 1-based physical row in the source file this record came from.
    pub source_row: u32,
}
