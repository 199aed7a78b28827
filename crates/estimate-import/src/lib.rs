//! Spreadsheet import/export pipeline for estimating-system project exports.
//!
//! The host application hands this crate already-read file content (CSV text
//! or an XLSX workbook) plus its dealer and user reference collections; the
//! pipeline parses, validates, and transforms the rows into canonical
//! [`ProjectRecord`]s and returns a self-describing [`ImportResult`]. The
//! inverse direction, generating a fillable template, lives behind
//! [`TemplateGenerator`]. No network, persistence, or file I/O happens here.

pub mod pipeline;

pub use estimate_model::{
    DealerRef, FieldCatalog, FieldCategory, FieldMapEntry, IMPORT_SOURCE, ImportResult,
    ImportStats, ProjectRecord, ProjectStatus, ReferenceIndex, Severity, UserRef, ValidationIssue,
    headers,
};
pub use estimate_template::{TemplateError, TemplateGenerator};
pub use pipeline::{ImportOptions, Importer, import};
