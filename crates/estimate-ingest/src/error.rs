//! Error types for tabular ingestion.
//!
//! Every variant here is a structural failure: the shape of the input file is
//! wrong, as opposed to the content of a valid row. Structural failures halt
//! further processing before any row is validated.

use thiserror::Error;

/// Errors that can occur while decoding tabular input.
#[derive(Debug, Error)]
pub enum ParseError {
    /// Input is zero bytes or contains no cells at all.
    #[error("input file is empty")]
    EmptyInput,

    /// Header row present but no data rows followed it.
    #[error("file must contain a header row and at least one data row")]
    TooFewRows,

    /// Delimited input was not valid UTF-8.
    #[error("input is not valid UTF-8: {source}")]
    NotUtf8 {
        #[source]
        source: std::str::Utf8Error,
    },

    /// The csv reader rejected the input.
    #[error("failed to parse delimited input: {source}")]
    Csv {
        #[source]
        source: csv::Error,
    },

    /// The workbook could not be opened or decoded.
    #[error("failed to open workbook: {source}")]
    Workbook {
        #[source]
        source: calamine::XlsxError,
    },

    /// The workbook contains no worksheets.
    #[error("workbook has no worksheets")]
    NoWorksheet,
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, ParseError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(ParseError::EmptyInput.to_string(), "input file is empty");
        assert_eq!(
            ParseError::TooFewRows.to_string(),
            "file must contain a header row and at least one data row"
        );
    }
}
