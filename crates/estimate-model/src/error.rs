//! Error types for the estimate data model.

use thiserror::Error;

/// Errors raised while constructing a field catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Two entries share the same source header.
    #[error("duplicate source header in catalog: {header}")]
    DuplicateHeader { header: String },

    /// Two entries share the same target field.
    #[error("duplicate target field in catalog: {field}")]
    DuplicateTarget { field: String },
}

/// Result type for model operations.
pub type Result<T> = std::result::Result<T, CatalogError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = CatalogError::DuplicateHeader {
            header: "Project Name".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "duplicate source header in catalog: Project Name"
        );
    }
}
