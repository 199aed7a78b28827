//! Row validation against the field catalog.
//!
//! Rules run per row in a fixed order so message order is stable:
//! required fields, enumerations, numerics, dates, format hints. Only
//! missing required fields and malformed required primitives are errors;
//! unknown enumeration values and format-hint mismatches are always
//! warnings and never block import.

use std::collections::HashMap;

use regex::Regex;

use estimate_ingest::RawRow;
use estimate_model::{FieldCatalog, FieldCategory, FieldMapEntry, ValidationIssue};
use estimate_transform::coerce;

/// Issues found in a single row.
#[derive(Debug, Clone, Default)]
pub struct RowReport {
    pub errors: Vec<ValidationIssue>,
    pub warnings: Vec<ValidationIssue>,
}

impl RowReport {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Aggregated issues across all rows of one import.
#[derive(Debug, Clone, Default)]
pub struct BatchReport {
    pub is_valid: bool,
    pub errors: Vec<ValidationIssue>,
    pub warnings: Vec<ValidationIssue>,
}

/// Applies catalog rules to raw rows without mutating them.
#[derive(Debug)]
pub struct RowValidator<'a> {
    catalog: &'a FieldCatalog,
    /// Compiled format-hint patterns, keyed by source header.
    hints: HashMap<String, Regex>,
}

impl<'a> RowValidator<'a> {
    pub fn new(catalog: &'a FieldCatalog) -> Self {
        let mut hints = HashMap::new();
        for entry in catalog.entries() {
            let Some(pattern) = entry.format_hint.as_deref() else {
                continue;
            };
            match Regex::new(pattern) {
                Ok(regex) => {
                    hints.insert(entry.source_header.clone(), regex);
                }
                Err(error) => {
                    // A broken hint in catalog config must not take down
                    // validation; the hint check is advisory anyway.
                    tracing::warn!(
                        header = entry.source_header.as_str(),
                        %error,
                        "ignoring unparseable format hint"
                    );
                }
            }
        }
        Self { catalog, hints }
    }

    /// Validate one row, producing classified issues.
    pub fn validate_row(&self, row: &RawRow) -> RowReport {
        let mut report = RowReport::default();

        for entry in self.catalog.entries() {
            self.check_required(entry, row, &mut report);
        }
        for entry in self.catalog.entries() {
            self.check_enumeration(entry, row, &mut report);
        }
        for entry in self.catalog.entries() {
            self.check_numeric(entry, row, &mut report);
        }
        for entry in self.catalog.entries() {
            self.check_date(entry, row, &mut report);
        }
        for entry in self.catalog.entries() {
            self.check_format_hint(entry, row, &mut report);
        }

        report
    }

    /// Validate every row and aggregate, plus a global error when there is
    /// nothing to validate at all.
    pub fn validate_all(&self, rows: &[RawRow]) -> BatchReport {
        let mut report = BatchReport::default();

        if rows.is_empty() {
            report.errors.push(ValidationIssue::error(
                1,
                None,
                "No data rows found in file",
            ));
            return report;
        }

        for row in rows {
            let row_report = self.validate_row(row);
            report.errors.extend(row_report.errors);
            report.warnings.extend(row_report.warnings);
        }

        report.is_valid = report.errors.is_empty();
        report
    }

    fn check_required(&self, entry: &FieldMapEntry, row: &RawRow, report: &mut RowReport) {
        if entry.required && row.is_blank(&entry.source_header) {
            report.errors.push(ValidationIssue::error(
                row.number(),
                Some(&entry.source_header),
                format!(
                    "Row {}: Missing required field \"{}\"",
                    row.number(),
                    entry.source_header
                ),
            ));
        }
    }

    fn check_enumeration(&self, entry: &FieldMapEntry, row: &RawRow, report: &mut RowReport) {
        if entry.allowed_values.is_empty() {
            return;
        }
        let value = row.text(&entry.source_header);
        if value.is_empty() || entry.accepts(value) {
            return;
        }
        // Unknown enum values never block import; stored as-is
        report.warnings.push(ValidationIssue::warning(
            row.number(),
            Some(&entry.source_header),
            format!(
                "Row {}: Unrecognized {} \"{}\" will be stored as-is",
                row.number(),
                entry.source_header,
                value
            ),
        ));
    }

    fn check_numeric(&self, entry: &FieldMapEntry, row: &RawRow, report: &mut RowReport) {
        if !entry.category.is_numeric() {
            return;
        }
        let value = row.text(&entry.source_header);
        if value.is_empty() {
            return;
        }
        let parses = match entry.category {
            FieldCategory::NumericInteger => coerce::parse_int(value).is_some(),
            _ => coerce::parse_float(value).is_some(),
        };
        if parses {
            return;
        }
        if entry.required {
            report.errors.push(ValidationIssue::error(
                row.number(),
                Some(&entry.source_header),
                format!(
                    "Row {}: Invalid numeric value \"{}\" for \"{}\"",
                    row.number(),
                    value,
                    entry.source_header
                ),
            ));
        } else {
            report.warnings.push(ValidationIssue::warning(
                row.number(),
                Some(&entry.source_header),
                format!(
                    "Row {}: Non-numeric value \"{}\" for \"{}\" will import as blank",
                    row.number(),
                    value,
                    entry.source_header
                ),
            ));
        }
    }

    fn check_date(&self, entry: &FieldMapEntry, row: &RawRow, report: &mut RowReport) {
        if entry.category != FieldCategory::Date {
            return;
        }
        let value = row.text(&entry.source_header);
        if value.is_empty() || coerce::parse_date(value).is_some() {
            return;
        }
        if entry.required {
            report.errors.push(ValidationIssue::error(
                row.number(),
                Some(&entry.source_header),
                format!(
                    "Row {}: Invalid date \"{}\" for \"{}\"",
                    row.number(),
                    value,
                    entry.source_header
                ),
            ));
        } else {
            report.warnings.push(ValidationIssue::warning(
                row.number(),
                Some(&entry.source_header),
                format!(
                    "Row {}: Unparseable date \"{}\" for \"{}\" will import as blank",
                    row.number(),
                    value,
                    entry.source_header
                ),
            ));
        }
    }

    fn check_format_hint(&self, entry: &FieldMapEntry, row: &RawRow, report: &mut RowReport) {
        let Some(regex) = self.hints.get(&entry.source_header) else {
            return;
        };
        let value = row.text(&entry.source_header);
        if value.is_empty() || regex.is_match(value) {
            return;
        }
        report.warnings.push(ValidationIssue::warning(
            row.number(),
            Some(&entry.source_header),
            format!(
                "Row {}: {} \"{}\" does not match the expected format",
                row.number(),
                entry.source_header,
                value
            ),
        ));
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use estimate_model::headers;

    use super::*;

    fn row(number: u32, pairs: &[(&str, &str)]) -> RawRow {
        let cells: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        RawRow::new(number, cells)
    }

    fn complete_row(number: u32) -> RawRow {
        row(
            number,
            &[
                (headers::PROJECT_NAME, "Elm Street Duplex"),
                (headers::CUSTOMER_NAME, "Acme Builders"),
            ],
        )
    }

    #[test]
    fn complete_row_is_valid() {
        let catalog = FieldCatalog::standard();
        let validator = RowValidator::new(&catalog);
        let report = validator.validate_row(&complete_row(2));
        assert!(report.is_valid(), "unexpected errors: {:?}", report.errors);
        assert!(report.warnings.is_empty());
    }

    #[test]
    fn missing_required_field_is_error() {
        let catalog = FieldCatalog::standard();
        let validator = RowValidator::new(&catalog);
        let report = validator.validate_row(&row(4, &[(headers::PROJECT_NAME, "P")]));

        assert!(!report.is_valid());
        assert_eq!(
            report.errors[0].message,
            "Row 4: Missing required field \"Customer Name\""
        );
    }

    #[test]
    fn unknown_enum_value_is_warning_only() {
        let catalog = FieldCatalog::standard();
        let validator = RowValidator::new(&catalog);
        let mut pairs = vec![
            (headers::PROJECT_NAME, "P"),
            (headers::CUSTOMER_NAME, "C"),
            (headers::PRIORITY, "Urgent"),
        ];
        let report = validator.validate_row(&row(3, &pairs));
        assert!(report.is_valid());
        assert_eq!(report.warnings.len(), 1);
        assert!(report.warnings[0].message.contains("will be stored as-is"));

        // Accepted values, any case, produce nothing
        pairs[2] = (headers::PRIORITY, "HIGH");
        let report = validator.validate_row(&row(3, &pairs));
        assert!(report.warnings.is_empty());
    }

    #[test]
    fn malformed_optional_numeric_is_warning_not_error() {
        let catalog = FieldCatalog::standard();
        let validator = RowValidator::new(&catalog);
        let report = validator.validate_row(&row(
            2,
            &[
                (headers::PROJECT_NAME, "P"),
                (headers::CUSTOMER_NAME, "C"),
                (headers::TOTAL_AMOUNT, "about twelve"),
            ],
        ));
        assert!(report.is_valid());
        assert_eq!(report.warnings.len(), 1);
        assert!(report.warnings[0].message.contains("will import as blank"));
    }

    #[test]
    fn malformed_optional_date_is_warning_not_error() {
        let catalog = FieldCatalog::standard();
        let validator = RowValidator::new(&catalog);
        let report = validator.validate_row(&row(
            2,
            &[
                (headers::PROJECT_NAME, "P"),
                (headers::CUSTOMER_NAME, "C"),
                (headers::QUOTE_DATE, "sometime in spring"),
            ],
        ));
        assert!(report.is_valid());
        assert_eq!(report.warnings.len(), 1);
    }

    #[test]
    fn quote_number_format_mismatch_is_warning() {
        let catalog = FieldCatalog::standard();
        let validator = RowValidator::new(&catalog);
        let report = validator.validate_row(&row(
            2,
            &[
                (headers::PROJECT_NAME, "P"),
                (headers::CUSTOMER_NAME, "C"),
                (headers::QUOTE_NUMBER, "quote-1"),
            ],
        ));
        assert!(report.is_valid());
        assert_eq!(report.warnings.len(), 1);
        assert!(
            report.warnings[0]
                .message
                .contains("does not match the expected format")
        );
    }

    #[test]
    fn message_order_follows_rule_order() {
        let catalog = FieldCatalog::standard();
        let validator = RowValidator::new(&catalog);
        // Missing required field and a bad enum value in the same row:
        // the required error is produced first
        let report = validator.validate_row(&row(
            5,
            &[
                (headers::PROJECT_NAME, "P"),
                (headers::PRIORITY, "Urgent"),
            ],
        ));
        assert!(report.errors[0].message.contains("Missing required field"));
        assert!(report.warnings[0].message.contains("stored as-is"));
    }

    #[test]
    fn validate_all_aggregates_in_row_order() {
        let catalog = FieldCatalog::standard();
        let validator = RowValidator::new(&catalog);
        let rows = vec![
            complete_row(2),
            row(3, &[(headers::PROJECT_NAME, "Only name")]),
            row(4, &[(headers::CUSTOMER_NAME, "Only customer")]),
        ];
        let report = validator.validate_all(&rows);

        assert!(!report.is_valid);
        assert_eq!(report.errors.len(), 2);
        assert_eq!(report.errors[0].row, 3);
        assert_eq!(report.errors[1].row, 4);
    }

    // A catalog where the numeric and date columns are themselves required,
    // unlike the standard catalog where only the name columns are.
    fn strict_catalog() -> FieldCatalog {
        let entries = vec![
            FieldMapEntry {
                source_header: "Unit Count".to_string(),
                target_field: "unit_count".to_string(),
                category: FieldCategory::NumericInteger,
                required: true,
                allowed_values: Vec::new(),
                format_hint: None,
                example: "12".to_string(),
            },
            FieldMapEntry {
                source_header: "Quote Date".to_string(),
                target_field: "quote_date".to_string(),
                category: FieldCategory::Date,
                required: true,
                allowed_values: Vec::new(),
                format_hint: None,
                example: "2026-03-15".to_string(),
            },
        ];
        FieldCatalog::new(entries).expect("strict catalog is well-formed")
    }

    #[test]
    fn malformed_required_numeric_is_error() {
        let catalog = strict_catalog();
        let validator = RowValidator::new(&catalog);
        let report = validator.validate_row(&row(
            2,
            &[("Unit Count", "dozen"), ("Quote Date", "2026-03-15")],
        ));

        assert!(!report.is_valid());
        assert_eq!(report.errors.len(), 1);
        assert_eq!(
            report.errors[0].message,
            "Row 2: Invalid numeric value \"dozen\" for \"Unit Count\""
        );
        assert!(report.warnings.is_empty());
    }

    #[test]
    fn malformed_required_date_is_error() {
        let catalog = strict_catalog();
        let validator = RowValidator::new(&catalog);
        let report = validator.validate_row(&row(
            2,
            &[("Unit Count", "12"), ("Quote Date", "next week")],
        ));

        assert!(!report.is_valid());
        assert_eq!(report.errors.len(), 1);
        assert_eq!(
            report.errors[0].message,
            "Row 2: Invalid date \"next week\" for \"Quote Date\""
        );
    }

    #[test]
    fn malformed_required_primitives_block_the_batch() {
        let catalog = strict_catalog();
        let validator = RowValidator::new(&catalog);
        let rows = vec![
            row(2, &[("Unit Count", "12"), ("Quote Date", "2026-03-15")]),
            row(3, &[("Unit Count", "12.5"), ("Quote Date", "2026-03-16")]),
        ];
        let report = validator.validate_all(&rows);

        assert!(!report.is_valid);
        assert_eq!(report.errors.len(), 1);
        assert_eq!(report.errors[0].row, 3);
        assert!(report.errors[0].message.contains("Invalid numeric value"));
    }

    #[test]
    fn empty_row_set_is_global_error() {
        let catalog = FieldCatalog::standard();
        let validator = RowValidator::new(&catalog);
        let report = validator.validate_all(&[]);

        assert!(!report.is_valid);
        assert_eq!(report.errors.len(), 1);
        assert_eq!(report.errors[0].message, "No data rows found in file");
    }

    #[test]
    fn warnings_do_not_block_validity() {
        let catalog = FieldCatalog::standard();
        let validator = RowValidator::new(&catalog);
        let rows = vec![row(
            2,
            &[
                (headers::PROJECT_NAME, "P"),
                (headers::CUSTOMER_NAME, "C"),
                (headers::PROJECT_TYPE, "Industrial"),
                (headers::UNIT_COUNT, "12.5"),
            ],
        )];
        let report = validator.validate_all(&rows);
        assert!(report.is_valid);
        assert_eq!(report.warnings.len(), 2);
    }
}
