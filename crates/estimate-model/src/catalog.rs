//! Field mapping catalog: the canonical column set for the estimating export.
//!
//! The catalog is the single source of truth shared by the parser, validator,
//! transformer, and template generator. It is explicit read-only configuration
//! passed into each component, never ambient global state, so tests can
//! substitute alternate catalogs.

use serde::{Deserialize, Serialize};

use crate::error::{CatalogError, Result};

/// Well-known source headers of the standard catalog.
///
/// The transformer uses these to assign typed record fields without
/// stringly-typed lookups scattered through the code.
pub mod headers {
    pub const PROJECT_NAME: &str = "Project Name";
    pub const CUSTOMER_NAME: &str = "Customer Name";
    pub const QUOTE_NUMBER: &str = "Quote Number";
    pub const PROJECT_TYPE: &str = "Project Type";
    pub const PRIORITY: &str = "Priority";
    pub const DEALER_CODE: &str = "Dealer Code";
    pub const ESTIMATOR: &str = "Estimator";
    pub const FACTORY: &str = "Factory";
    pub const QUOTE_DATE: &str = "Quote Date";
    pub const DELIVERY_DATE: &str = "Delivery Date";
    pub const TOTAL_AMOUNT: &str = "Total Amount";
    pub const UNIT_COUNT: &str = "Unit Count";
    pub const TAX_EXEMPT: &str = "Tax Exempt";
    pub const RUSH_ORDER: &str = "Rush Order";
    pub const NOTES: &str = "Notes";
}

/// Semantic type of a column, governing coercion and validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FieldCategory {
    String,
    Boolean,
    NumericInteger,
    NumericFloat,
    Date,
    LookupDealer,
    LookupEstimator,
    LookupFactory,
}

impl FieldCategory {
    pub fn is_numeric(self) -> bool {
        matches!(self, Self::NumericInteger | Self::NumericFloat)
    }

    pub fn is_lookup(self) -> bool {
        matches!(
            self,
            Self::LookupDealer | Self::LookupEstimator | Self::LookupFactory
        )
    }

    /// Human-readable type name used in the template instructions sheet.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::String => "Text",
            Self::Boolean => "Yes/No",
            Self::NumericInteger => "Whole number",
            Self::NumericFloat => "Number",
            Self::Date => "Date (YYYY-MM-DD)",
            Self::LookupDealer => "Dealer code",
            Self::LookupEstimator => "Estimator name",
            Self::LookupFactory => "Factory code",
        }
    }
}

/// One column of the catalog: source header, target field, and its rules.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldMapEntry {
    /// Exact header string expected in the spreadsheet (row 1).
    pub source_header: String,
    /// Destination field name on the canonical record.
    pub target_field: String,
    pub category: FieldCategory,
    pub required: bool,
    /// Accepted enumeration values; empty means unconstrained.
    #[serde(default)]
    pub allowed_values: Vec<String>,
    /// Expected-format regex; mismatches warn, never error.
    #[serde(default)]
    pub format_hint: Option<String>,
    /// Illustrative value used for the template sample row.
    pub example: String,
}

impl FieldMapEntry {
    fn new(
        source_header: &str,
        target_field: &str,
        category: FieldCategory,
        example: &str,
    ) -> Self {
        Self {
            source_header: source_header.to_string(),
            target_field: target_field.to_string(),
            category,
            required: false,
            allowed_values: Vec::new(),
            format_hint: None,
            example: example.to_string(),
        }
    }

    fn required(mut self) -> Self {
        self.required = true;
        self
    }

    fn allowed(mut self, values: &[&str]) -> Self {
        self.allowed_values = values.iter().map(|v| (*v).to_string()).collect();
        self
    }

    fn hint(mut self, pattern: &str) -> Self {
        self.format_hint = Some(pattern.to_string());
        self
    }

    /// Case-insensitive membership test against `allowed_values`.
    pub fn accepts(&self, value: &str) -> bool {
        self.allowed_values.is_empty()
            || self
                .allowed_values
                .iter()
                .any(|allowed| allowed.eq_ignore_ascii_case(value))
    }
}

/// Ordered, validated set of field mappings.
///
/// Entry order defines template column order. Headers and target fields are
/// unique across the catalog; `new` rejects duplicates.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldCatalog {
    entries: Vec<FieldMapEntry>,
}

impl FieldCatalog {
    pub fn new(entries: Vec<FieldMapEntry>) -> Result<Self> {
        for (idx, entry) in entries.iter().enumerate() {
            for earlier in &entries[..idx] {
                if earlier.source_header == entry.source_header {
                    return Err(CatalogError::DuplicateHeader {
                        header: entry.source_header.clone(),
                    });
                }
                if earlier.target_field == entry.target_field {
                    return Err(CatalogError::DuplicateTarget {
                        field: entry.target_field.clone(),
                    });
                }
            }
        }
        Ok(Self { entries })
    }

    /// The standard project-export catalog of the estimating system.
    pub fn standard() -> Self {
        use crate::catalog::FieldCategory as Cat;
        use crate::catalog::headers as h;

        let entries = vec![
            FieldMapEntry::new(h::PROJECT_NAME, "project_name", Cat::String, "Elm Street Duplex")
                .required(),
            FieldMapEntry::new(h::CUSTOMER_NAME, "customer_name", Cat::String, "Acme Builders")
                .required(),
            FieldMapEntry::new(h::QUOTE_NUMBER, "quote_number", Cat::String, "Q-10421")
                .hint(r"^[A-Z]{1,3}-\d{3,}$"),
            FieldMapEntry::new(h::PROJECT_TYPE, "project_type", Cat::String, "Residential")
                .allowed(&["Residential", "Commercial", "Renovation"]),
            FieldMapEntry::new(h::PRIORITY, "priority", Cat::String, "Medium")
                .allowed(&["Low", "Medium", "High"]),
            FieldMapEntry::new(h::DEALER_CODE, "dealer_code", Cat::LookupDealer, "D-100"),
            FieldMapEntry::new(h::ESTIMATOR, "estimator_name", Cat::LookupEstimator, "Pat Larsen"),
            FieldMapEntry::new(h::FACTORY, "factory_code", Cat::LookupFactory, "LIN"),
            FieldMapEntry::new(h::QUOTE_DATE, "quote_date", Cat::Date, "2026-03-15"),
            FieldMapEntry::new(h::DELIVERY_DATE, "delivery_date", Cat::Date, "2026-05-01"),
            FieldMapEntry::new(h::TOTAL_AMOUNT, "total_amount", Cat::NumericFloat, "18450.75"),
            FieldMapEntry::new(h::UNIT_COUNT, "unit_count", Cat::NumericInteger, "12"),
            FieldMapEntry::new(h::TAX_EXEMPT, "tax_exempt", Cat::Boolean, "No"),
            FieldMapEntry::new(h::RUSH_ORDER, "rush_order", Cat::Boolean, "Yes"),
            FieldMapEntry::new(h::NOTES, "notes", Cat::String, "Deliver to rear entrance"),
        ];

        // The standard catalog is statically well-formed.
        match Self::new(entries) {
            Ok(catalog) => catalog,
            Err(_) => unreachable!("standard catalog has unique headers and targets"),
        }
    }

    pub fn entries(&self) -> &[FieldMapEntry] {
        &self.entries
    }

    /// Headers in template column order.
    pub fn headers(&self) -> Vec<&str> {
        self.entries
            .iter()
            .map(|entry| entry.source_header.as_str())
            .collect()
    }

    /// Look up an entry by its exact source header.
    pub fn by_header(&self, header: &str) -> Option<&FieldMapEntry> {
        self.entries
            .iter()
            .find(|entry| entry.source_header == header)
    }

    pub fn required_entries(&self) -> impl Iterator<Item = &FieldMapEntry> {
        self.entries.iter().filter(|entry| entry.required)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_catalog_headers_are_unique() {
        let catalog = FieldCatalog::standard();
        let headers = catalog.headers();
        let mut deduped = headers.clone();
        deduped.sort_unstable();
        deduped.dedup();
        assert_eq!(headers.len(), deduped.len());
    }

    #[test]
    fn standard_catalog_order_is_stable() {
        let first = FieldCatalog::standard();
        let second = FieldCatalog::standard();
        assert_eq!(first.headers(), second.headers());
        assert_eq!(first.headers()[0], headers::PROJECT_NAME);
    }

    #[test]
    fn duplicate_header_is_rejected() {
        let entries = vec![
            FieldMapEntry::new("Name", "name_a", FieldCategory::String, "x"),
            FieldMapEntry::new("Name", "name_b", FieldCategory::String, "y"),
        ];
        let result = FieldCatalog::new(entries);
        assert!(matches!(result, Err(CatalogError::DuplicateHeader { .. })));
    }

    #[test]
    fn duplicate_target_is_rejected() {
        let entries = vec![
            FieldMapEntry::new("Name A", "name", FieldCategory::String, "x"),
            FieldMapEntry::new("Name B", "name", FieldCategory::String, "y"),
        ];
        let result = FieldCatalog::new(entries);
        assert!(matches!(result, Err(CatalogError::DuplicateTarget { .. })));
    }

    #[test]
    fn accepts_is_case_insensitive() {
        let catalog = FieldCatalog::standard();
        let entry = catalog.by_header(headers::PRIORITY).unwrap();
        assert!(entry.accepts("HIGH"));
        assert!(entry.accepts("low"));
        assert!(!entry.accepts("urgent"));
    }

    #[test]
    fn unconstrained_entry_accepts_anything() {
        let catalog = FieldCatalog::standard();
        let entry = catalog.by_header(headers::NOTES).unwrap();
        assert!(entry.accepts("anything at all"));
    }
}
