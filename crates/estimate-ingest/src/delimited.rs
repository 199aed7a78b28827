//! Delimited-text (CSV) decoding.

use std::collections::HashMap;

use csv::ReaderBuilder;

use crate::error::{ParseError, Result};
use crate::row::{ParsedTable, RawRow};

/// Parse CSV text into headers and raw rows.
///
/// Row 1 is the header row; every later physical row becomes one [`RawRow`]
/// numbered by its position in the file. Rows whose cells are all blank after
/// trimming are skipped without renumbering the rows that follow them.
pub fn parse_delimited(text: &str) -> Result<ParsedTable> {
    // Strip a UTF-8 BOM if present
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);

    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(text.as_bytes());

    let mut headers: Option<Vec<String>> = None;
    let mut rows = Vec::new();
    let mut skipped = 0usize;

    for (record_idx, record) in reader.records().enumerate() {
        let record = record.map_err(|e| ParseError::Csv { source: e })?;
        // Physical line the record starts on; the csv reader skips fully
        // empty lines but keeps line numbers physical.
        let number = record
            .position()
            .map_or(record_idx as u32 + 1, |p| p.line() as u32);

        match &headers {
            None => {
                headers = Some(record.iter().map(|c| c.trim().to_string()).collect());
            }
            Some(columns) => {
                if record.iter().all(|cell| cell.trim().is_empty()) {
                    skipped += 1;
                    continue;
                }
                let mut cells = HashMap::with_capacity(columns.len());
                for (idx, header) in columns.iter().enumerate() {
                    if header.is_empty() {
                        continue;
                    }
                    let value = record.get(idx).unwrap_or_default();
                    cells.insert(header.clone(), value.to_string());
                }
                rows.push(RawRow::new(number, cells));
            }
        }
    }

    let Some(headers) = headers else {
        return Err(ParseError::EmptyInput);
    };
    if headers.iter().all(String::is_empty) {
        return Err(ParseError::EmptyInput);
    }
    if rows.is_empty() && skipped == 0 {
        return Err(ParseError::TooFewRows);
    }

    tracing::debug!(
        columns = headers.len(),
        rows = rows.len(),
        skipped,
        "parsed delimited input"
    );

    Ok(ParsedTable { headers, rows })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_headers_and_rows() {
        let table = parse_delimited("A,B,C\n1,2,3\n4,5,6\n").unwrap();
        assert_eq!(table.headers, vec!["A", "B", "C"]);
        assert_eq!(table.rows.len(), 2);
        assert_eq!(table.rows[0].number(), 2);
        assert_eq!(table.rows[0].get("B"), Some("2"));
        assert_eq!(table.rows[1].number(), 3);
    }

    #[test]
    fn empty_input_is_structural_error() {
        assert!(matches!(parse_delimited(""), Err(ParseError::EmptyInput)));
        assert!(matches!(parse_delimited("   "), Err(ParseError::EmptyInput)));
    }

    #[test]
    fn header_only_is_structural_error() {
        let result = parse_delimited("A,B,C\n");
        assert!(matches!(result, Err(ParseError::TooFewRows)));
    }

    #[test]
    fn blank_rows_are_skipped_without_renumbering() {
        let table = parse_delimited("A,B\n1,2\n,\n3,4\n").unwrap();
        assert_eq!(table.rows.len(), 2);
        assert_eq!(table.rows[0].number(), 2);
        assert_eq!(table.rows[1].number(), 4);
    }

    #[test]
    fn bom_is_stripped_from_first_header() {
        let table = parse_delimited("\u{feff}A,B\n1,2\n").unwrap();
        assert_eq!(table.headers, vec!["A", "B"]);
    }

    #[test]
    fn header_whitespace_is_trimmed() {
        let table = parse_delimited(" A , B \n1,2\n").unwrap();
        assert_eq!(table.headers, vec!["A", "B"]);
        assert_eq!(table.rows[0].get("A"), Some("1"));
    }

    #[test]
    fn short_rows_leave_cells_absent() {
        let table = parse_delimited("A,B,C\n1,2\n").unwrap();
        assert_eq!(table.rows[0].get("C"), Some(""));
    }
}
