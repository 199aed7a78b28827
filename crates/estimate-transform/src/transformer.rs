//! Raw row to canonical project record transformation.

use chrono::Utc;
use estimate_ingest::RawRow;
use estimate_model::{
    IMPORT_SOURCE, ProjectRecord, ProjectStatus, ReferenceIndex, ValidationIssue, headers,
};

use crate::coerce;
use crate::resolve::ReferenceResolver;

/// A transformed record plus any lookup warnings raised while building it.
#[derive(Debug, Clone)]
pub struct TransformOutcome {
    pub record: ProjectRecord,
    pub warnings: Vec<ValidationIssue>,
}

/// Turns one validated raw row into one canonical record.
///
/// Infallible by contract: every coercion degrades to `None`/`false` rather
/// than failing, so a row that passed validation always produces a record.
#[derive(Debug, Clone)]
pub struct RecordTransformer {
    resolver: ReferenceResolver,
    default_factory: Option<String>,
}

impl RecordTransformer {
    pub fn new(refs: &ReferenceIndex, default_factory: Option<String>) -> Self {
        Self {
            resolver: ReferenceResolver::new(refs),
            default_factory,
        }
    }

    pub fn transform(&self, row: &RawRow) -> TransformOutcome {
        let mut warnings = Vec::new();

        // Lookup columns: a present but unmatched code stays None and warns
        let dealer_id = self.resolve_dealer(row, &mut warnings);
        let estimator_id = self.resolve_estimator(row, &mut warnings);
        let factory = self.resolve_factory(row);

        let record = ProjectRecord {
            project_name: coerce::parse_string(row.text(headers::PROJECT_NAME))
                .unwrap_or_default(),
            customer_name: coerce::parse_string(row.text(headers::CUSTOMER_NAME))
                .unwrap_or_default(),
            quote_number: coerce::parse_string(row.text(headers::QUOTE_NUMBER)),
            project_type: coerce::parse_string(row.text(headers::PROJECT_TYPE)),
            priority: coerce::parse_string(row.text(headers::PRIORITY)),
            dealer_id,
            estimator_id,
            factory,
            quote_date: coerce::parse_date(row.text(headers::QUOTE_DATE)),
            delivery_date: coerce::parse_date(row.text(headers::DELIVERY_DATE)),
            total_amount: coerce::parse_float(row.text(headers::TOTAL_AMOUNT)),
            unit_count: coerce::parse_int(row.text(headers::UNIT_COUNT)),
            tax_exempt: coerce::parse_bool(row.text(headers::TAX_EXEMPT)),
            rush_order: coerce::parse_bool(row.text(headers::RUSH_ORDER)),
            notes: coerce::parse_string(row.text(headers::NOTES)),
            status: ProjectStatus::PendingReview,
            imported_from: IMPORT_SOURCE.to_string(),
            imported_at: Utc::now(),
            source_row: row.number(),
        };

        TransformOutcome { record, warnings }
    }

    fn resolve_dealer(&self, row: &RawRow, warnings: &mut Vec<ValidationIssue>) -> Option<i64> {
        let code = row.text(headers::DEALER_CODE);
        if code.is_empty() {
            return None;
        }
        let resolved = self.resolver.dealer(code);
        if resolved.is_none() {
            warnings.push(ValidationIssue::warning(
                row.number(),
                Some(headers::DEALER_CODE),
                format!("Row {}: Unknown dealer code \"{code}\"", row.number()),
            ));
        }
        resolved
    }

    fn resolve_estimator(&self, row: &RawRow, warnings: &mut Vec<ValidationIssue>) -> Option<i64> {
        let name = row.text(headers::ESTIMATOR);
        if name.is_empty() {
            return None;
        }
        let resolved = self.resolver.estimator(name);
        if resolved.is_none() {
            warnings.push(ValidationIssue::warning(
                row.number(),
                Some(headers::ESTIMATOR),
                format!("Row {}: Unknown estimator \"{name}\"", row.number()),
            ));
        }
        resolved
    }

    fn resolve_factory(&self, row: &RawRow) -> Option<String> {
        let code = row.text(headers::FACTORY);
        if !code.is_empty() {
            return Some(ReferenceResolver::factory(code));
        }
        self.default_factory
            .as_deref()
            .map(ReferenceResolver::factory)
    }
}
