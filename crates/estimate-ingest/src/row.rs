//! Raw row abstraction: header-keyed cells plus physical row traceability.

use std::collections::HashMap;

/// One data row as parsed from the source, immutable once built.
///
/// `number` is the 1-based physical row in the original file, counting the
/// header row as row 1 and matching spreadsheet conventions. Skipped blank
/// rows keep their slot, so numbering never shifts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawRow {
    number: u32,
    cells: HashMap<String, String>,
}

impl RawRow {
    pub fn new(number: u32, cells: HashMap<String, String>) -> Self {
        Self { number, cells }
    }

    /// 1-based physical row number in the source file.
    pub fn number(&self) -> u32 {
        self.number
    }

    /// Raw cell value for a header, if the column exists.
    pub fn get(&self, header: &str) -> Option<&str> {
        self.cells.get(header).map(String::as_str)
    }

    /// Trimmed cell value, empty string when the column is absent.
    pub fn text(&self, header: &str) -> &str {
        self.get(header).map(str::trim).unwrap_or_default()
    }

    /// True when the cell is absent or blank after trimming.
    pub fn is_blank(&self, header: &str) -> bool {
        self.text(header).is_empty()
    }
}

/// Output of the tabular parser: header order plus data rows.
#[derive(Debug, Clone, Default)]
pub struct ParsedTable {
    pub headers: Vec<String>,
    pub rows: Vec<RawRow>,
}
