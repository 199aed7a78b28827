//! Tabular ingestion for the estimate import pipeline.
//!
//! Converts raw spreadsheet content (CSV text or an XLSX workbook) into an
//! ordered sequence of [`RawRow`]s keyed by header, preserving the physical
//! row number of every row for traceability. Pure over its input: no file or
//! network I/O happens here, the caller supplies already-read bytes.

pub mod delimited;
pub mod error;
pub mod row;
pub mod workbook;

pub use delimited::parse_delimited;
pub use error::{ParseError, Result};
pub use row::{ParsedTable, RawRow};
pub use workbook::parse_workbook;

/// XLSX files are ZIP archives; this magic prefix distinguishes them from text.
const ZIP_MAGIC: [u8; 4] = [0x50, 0x4B, 0x03, 0x04];

/// Parse tabular content, detecting the format from the bytes themselves.
pub fn parse(content: &[u8]) -> Result<ParsedTable> {
    if content.starts_with(&ZIP_MAGIC) {
        return parse_workbook(content);
    }
    let text = std::str::from_utf8(content).map_err(|e| ParseError::NotUtf8 { source: e })?;
    parse_delimited(text)
}
