//! Binary workbook (XLSX) decoding via calamine.
//!
//! Only the first worksheet is read; the rest of the workbook is ignored.

use std::collections::HashMap;
use std::io::Cursor;

use calamine::{Data, Reader, Xlsx};

use crate::error::{ParseError, Result};
use crate::row::{ParsedTable, RawRow};

/// Parse the first sheet of an XLSX workbook into headers and raw rows.
///
/// Numbering matches what the user sees in a spreadsheet application: the
/// header row keeps its physical 1-based position even when the used range
/// does not start at the top of the sheet.
pub fn parse_workbook(bytes: &[u8]) -> Result<ParsedTable> {
    let mut workbook: Xlsx<_> =
        Xlsx::new(Cursor::new(bytes)).map_err(|e| ParseError::Workbook { source: e })?;

    let range = workbook
        .worksheet_range_at(0)
        .ok_or(ParseError::NoWorksheet)?
        .map_err(|e| ParseError::Workbook { source: e })?;

    let Some((first_row, _)) = range.start() else {
        return Err(ParseError::EmptyInput);
    };

    let mut row_iter = range.rows();
    let Some(header_cells) = row_iter.next() else {
        return Err(ParseError::EmptyInput);
    };
    let headers: Vec<String> = header_cells
        .iter()
        .map(|cell| cell_text(cell).trim().to_string())
        .collect();
    if headers.iter().all(String::is_empty) {
        return Err(ParseError::EmptyInput);
    }

    let mut rows = Vec::new();
    let mut skipped = 0usize;

    for (idx, cells) in row_iter.enumerate() {
        // Physical row: range offset + header + this row's position after it
        let number = first_row + 2 + idx as u32;
        let texts: Vec<String> = cells.iter().map(cell_text).collect();
        if texts.iter().all(|text| text.trim().is_empty()) {
            skipped += 1;
            continue;
        }
        let mut mapped = HashMap::with_capacity(headers.len());
        for (col, header) in headers.iter().enumerate() {
            if header.is_empty() {
                continue;
            }
            let value = texts.get(col).cloned().unwrap_or_default();
            mapped.insert(header.clone(), value);
        }
        rows.push(RawRow::new(number, mapped));
    }

    if rows.is_empty() && skipped == 0 {
        return Err(ParseError::TooFewRows);
    }

    tracing::debug!(
        columns = headers.len(),
        rows = rows.len(),
        skipped,
        "parsed workbook input"
    );

    Ok(ParsedTable { headers, rows })
}

/// Render one cell to the raw string form the rest of the pipeline expects.
fn cell_text(cell: &Data) -> String {
    match cell {
        Data::Empty | Data::Error(_) => String::new(),
        Data::String(s) => s.clone(),
        Data::Int(i) => i.to_string(),
        Data::Float(f) => {
            // Integral floats render without a decimal point so "12" in a
            // numeric cell does not come back as "12.0"
            if f.fract() == 0.0 && f.is_finite() && f.abs() < i64::MAX as f64 {
                (*f as i64).to_string()
            } else {
                f.to_string()
            }
        }
        Data::Bool(b) => (if *b { "TRUE" } else { "FALSE" }).to_string(),
        Data::DateTime(dt) => dt
            .as_datetime()
            .map(|naive| naive.format("%Y-%m-%d").to_string())
            .unwrap_or_else(|| dt.as_f64().to_string()),
        Data::DateTimeIso(s) => s.chars().take(10).collect(),
        Data::DurationIso(s) => s.clone(),
    }
}
