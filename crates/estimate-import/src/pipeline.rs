//! Import orchestration: parse, validate all, transform all, assemble.
//!
//! The batch is all-or-nothing at the row-error level: one row error rejects
//! the whole file. A partially imported batch is considered more dangerous
//! than asking the user to fix the file and resubmit.

use std::panic::{AssertUnwindSafe, catch_unwind};

use estimate_ingest::RawRow;
use estimate_model::{
    DealerRef, FieldCatalog, ImportResult, ImportStats, ProjectRecord, ReferenceIndex, UserRef,
    ValidationIssue,
};
use estimate_transform::{RecordTransformer, TransformOutcome};
use estimate_validate::RowValidator;

/// Per-call import options supplied by the host application.
#[derive(Debug, Clone, Default)]
pub struct ImportOptions {
    pub dealers: Vec<DealerRef>,
    pub users: Vec<UserRef>,
    /// Factory code applied when a row leaves the factory column empty.
    pub default_factory: Option<String>,
}

/// The import pipeline entry point.
///
/// Holds only the field catalog; all per-call state (rows, issues, lookup
/// references) lives and dies within one [`Importer::import`] invocation.
#[derive(Debug, Clone)]
pub struct Importer {
    catalog: FieldCatalog,
}

impl Default for Importer {
    fn default() -> Self {
        Self::new()
    }
}

impl Importer {
    /// An importer over the standard catalog.
    pub fn new() -> Self {
        Self {
            catalog: FieldCatalog::standard(),
        }
    }

    /// An importer over a caller-supplied catalog, mainly for tests.
    pub fn with_catalog(catalog: FieldCatalog) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &FieldCatalog {
        &self.catalog
    }

    /// Run the full pipeline over already-read file content.
    pub fn import(&self, content: &[u8], options: &ImportOptions) -> ImportResult {
        // 1. Parse; structural failures abort before any row is looked at
        let table = match estimate_ingest::parse(content) {
            Ok(table) => table,
            Err(error) => {
                tracing::warn!(%error, "import aborted on structural parse failure");
                return ImportResult::failure(vec![error.to_string()], Vec::new(), 0);
            }
        };
        let total = table.rows.len();

        // 2. Validate every row, accumulating warnings regardless of outcome
        let validator = RowValidator::new(&self.catalog);
        let report = validator.validate_all(&table.rows);
        let mut warnings = report.warnings;

        // 3. Fail closed: any row error rejects the whole batch untransformed
        if !report.is_valid {
            tracing::warn!(
                total,
                errors = report.errors.len(),
                "import rejected by validation"
            );
            return ImportResult::failure(
                issues_to_messages(&report.errors),
                issues_to_messages(&sorted_by_row(warnings)),
                total,
            );
        }

        // 4. Transform rows independently; a failing row is reported and
        //    skipped, the rest of the batch continues
        let refs = ReferenceIndex::new(options.dealers.clone(), options.users.clone());
        let transformer = RecordTransformer::new(&refs, options.default_factory.clone());
        let (records, transform_warnings, errors) =
            transform_rows(&table.rows, |row| transformer.transform(row));
        warnings.extend(transform_warnings);

        // 5. Assemble the result
        let stats = ImportStats {
            total,
            valid: records.len(),
            invalid: total - records.len(),
        };
        let success = errors.is_empty();
        tracing::info!(
            total,
            valid = stats.valid,
            invalid = stats.invalid,
            success,
            "import complete"
        );

        ImportResult {
            success,
            records,
            errors,
            warnings: issues_to_messages(&sorted_by_row(warnings)),
            stats,
        }
    }
}

/// Import with the standard catalog.
pub fn import(content: &[u8], options: &ImportOptions) -> ImportResult {
    Importer::new().import(content, options)
}

/// Transform rows one at a time, isolating each row behind `catch_unwind` so
/// an unexpected panic becomes a row-scoped error instead of taking down the
/// batch. Generic over the transform so the isolation itself is testable.
fn transform_rows<F>(
    rows: &[RawRow],
    mut transform: F,
) -> (Vec<ProjectRecord>, Vec<ValidationIssue>, Vec<String>)
where
    F: FnMut(&RawRow) -> TransformOutcome,
{
    let mut records = Vec::with_capacity(rows.len());
    let mut warnings = Vec::new();
    let mut errors = Vec::new();

    for row in rows {
        match catch_unwind(AssertUnwindSafe(|| transform(row))) {
            Ok(outcome) => {
                warnings.extend(outcome.warnings);
                records.push(outcome.record);
            }
            Err(_) => {
                tracing::error!(row = row.number(), "row transformation panicked");
                errors.push(format!(
                    "Row {}: transformation failed unexpectedly",
                    row.number()
                ));
            }
        }
    }

    (records, warnings, errors)
}

/// Stable sort keeps same-row issues in rule order.
fn sorted_by_row(mut issues: Vec<ValidationIssue>) -> Vec<ValidationIssue> {
    issues.sort_by_key(|issue| issue.row);
    issues
}

fn issues_to_messages(issues: &[ValidationIssue]) -> Vec<String> {
    issues.iter().map(|issue| issue.message.clone()).collect()
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use estimate_model::headers;

    use super::*;

    fn row(number: u32) -> RawRow {
        let mut cells = HashMap::new();
        cells.insert(headers::PROJECT_NAME.to_string(), "P".to_string());
        cells.insert(headers::CUSTOMER_NAME.to_string(), "C".to_string());
        RawRow::new(number, cells)
    }

    #[test]
    fn panicking_row_is_reported_and_batch_continues() {
        let rows = vec![row(2), row(3), row(4)];
        let transformer = RecordTransformer::new(&ReferenceIndex::default(), None);

        let (records, warnings, errors) = transform_rows(&rows, |row| {
            assert!(row.number() != 3, "induced failure");
            transformer.transform(row)
        });

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].source_row, 2);
        assert_eq!(records[1].source_row, 4);
        assert!(warnings.is_empty());
        assert_eq!(
            errors,
            vec!["Row 3: transformation failed unexpectedly".to_string()]
        );
    }

    #[test]
    fn well_behaved_rows_produce_no_transform_errors() {
        let rows = vec![row(2), row(3)];
        let transformer = RecordTransformer::new(&ReferenceIndex::default(), None);

        let (records, _, errors) = transform_rows(&rows, |row| transformer.transform(row));

        assert_eq!(records.len(), 2);
        assert!(errors.is_empty());
    }
}
