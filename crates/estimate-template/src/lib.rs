//! Import template generation, the inverse of ingestion.
//!
//! Emits a blank tabular file whose headers exactly match the field catalog
//! in catalog order, for producers of estimating exports to fill in. The CSV
//! variant carries one illustrative sample row; the workbook variant adds an
//! instructions sheet documenting required fields, accepted values, and
//! formatting conventions. Neither variant exposes provenance or other
//! internal fields.

use csv::WriterBuilder;
use rust_xlsxwriter::{Format, Workbook};
use thiserror::Error;

use estimate_model::FieldCatalog;

/// Errors raised while rendering a template file.
#[derive(Debug, Error)]
pub enum TemplateError {
    #[error("failed to write CSV template: {source}")]
    Csv {
        #[source]
        source: csv::Error,
    },

    #[error("failed to finish CSV template: {source}")]
    CsvFlush {
        #[source]
        source: std::io::Error,
    },

    #[error("failed to build workbook template: {source}")]
    Workbook {
        #[source]
        source: rust_xlsxwriter::XlsxError,
    },
}

impl From<rust_xlsxwriter::XlsxError> for TemplateError {
    fn from(source: rust_xlsxwriter::XlsxError) -> Self {
        Self::Workbook { source }
    }
}

/// Result type for template operations.
pub type Result<T> = std::result::Result<T, TemplateError>;

/// Renders import templates from a field catalog.
#[derive(Debug, Clone)]
pub struct TemplateGenerator<'a> {
    catalog: &'a FieldCatalog,
}

impl<'a> TemplateGenerator<'a> {
    pub fn new(catalog: &'a FieldCatalog) -> Self {
        Self { catalog }
    }

    /// CSV template: header row plus one sample data row.
    pub fn csv(&self) -> Result<Vec<u8>> {
        let mut writer = WriterBuilder::new().from_writer(Vec::new());

        writer
            .write_record(self.catalog.headers())
            .map_err(|e| TemplateError::Csv { source: e })?;
        writer
            .write_record(self.catalog.entries().iter().map(|entry| &entry.example))
            .map_err(|e| TemplateError::Csv { source: e })?;

        writer
            .into_inner()
            .map_err(|e| TemplateError::CsvFlush { source: e.into_error() })
    }

    /// XLSX template: a data sheet with headers and the sample row, plus an
    /// instructions sheet.
    pub fn xlsx(&self) -> Result<Vec<u8>> {
        let mut workbook = Workbook::new();
        let bold = Format::new().set_bold();

        let sheet = workbook.add_worksheet();
        sheet.set_name("Projects")?;
        for (col, header) in self.catalog.headers().iter().enumerate() {
            sheet.write_string_with_format(0, col as u16, *header, &bold)?;
            sheet.set_column_width(col as u16, 18)?;
        }
        for (col, entry) in self.catalog.entries().iter().enumerate() {
            sheet.write_string(1, col as u16, &entry.example)?;
        }

        self.write_instructions(&mut workbook, &bold)?;

        workbook.save_to_buffer().map_err(TemplateError::from)
    }

    fn write_instructions(&self, workbook: &mut Workbook, bold: &Format) -> Result<()> {
        let sheet = workbook.add_worksheet();
        sheet.set_name("Instructions")?;

        for (col, title) in ["Column", "Required", "Type", "Accepted values"]
            .iter()
            .enumerate()
        {
            sheet.write_string_with_format(0, col as u16, *title, bold)?;
        }
        sheet.set_column_width(0, 20)?;
        sheet.set_column_width(2, 20)?;
        sheet.set_column_width(3, 40)?;

        for (idx, entry) in self.catalog.entries().iter().enumerate() {
            let row = idx as u32 + 1;
            sheet.write_string(row, 0, &entry.source_header)?;
            sheet.write_string(row, 1, if entry.required { "Yes" } else { "No" })?;
            sheet.write_string(row, 2, entry.category.as_str())?;
            if !entry.allowed_values.is_empty() {
                sheet.write_string(row, 3, entry.allowed_values.join(", "))?;
            }
        }

        let notes_row = self.catalog.entries().len() as u32 + 2;
        sheet.write_string_with_format(notes_row, 0, "Formatting", bold)?;
        sheet.write_string(
            notes_row + 1,
            0,
            "Dates: YYYY-MM-DD (e.g. 2026-03-15). MM/DD/YYYY is also accepted.",
        )?;
        sheet.write_string(
            notes_row + 2,
            0,
            "Yes/No columns: Yes, Y, 1, X or TRUE mean yes; anything else means no.",
        )?;
        sheet.write_string(
            notes_row + 3,
            0,
            "Leave optional cells empty rather than entering placeholders.",
        )?;

        Ok(())
    }
}
