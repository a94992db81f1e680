//! CSV extraction.

use std::path::Path;

use csv::ReaderBuilder;
use roster_model::{CellValue, RawTable, Record, SourceMetadata};

use crate::error::{IngestError, Result};
use crate::util::{normalize_cell, source_name};

/// Reads a CSV file into a table of text cells.
///
/// The first non-blank record is the header row. Data rows shorter than the
/// header are padded with empty cells and cells past the last header are
/// dropped. Fully blank rows are skipped. A file with no header row at all
/// (empty, or blank on every line) fails with [`IngestError::EmptySource`].
pub fn extract_csv(path: &Path) -> Result<(RawTable, SourceMetadata)> {
    let csv_err = |e: csv::Error| IngestError::Csv {
        path: path.to_path_buf(),
        source: e,
    };

    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)
        .map_err(csv_err)?;

    let mut raw_rows: Vec<Vec<String>> = Vec::new();
    for record in reader.records() {
        let record = record.map_err(csv_err)?;
        let row: Vec<String> = record.iter().map(normalize_cell).collect();
        if row.iter().all(String::is_empty) {
            continue;
        }
        raw_rows.push(row);
    }

    let mut rows = raw_rows.into_iter();
    let Some(headers) = rows.next() else {
        return Err(IngestError::EmptySource {
            path: path.to_path_buf(),
        });
    };

    let metadata = SourceMetadata {
        source: source_name(path),
        sheets: None,
    };

    let mut table = RawTable::new(headers);
    for cells in rows {
        let mut row = Record::new();
        for (idx, header) in table.headers.iter().enumerate() {
            let value = cells.get(idx).map(String::as_str).unwrap_or("");
            let cell = if value.is_empty() {
                CellValue::Empty
            } else {
                CellValue::text(value)
            };
            row.insert(header.clone(), cell);
        }
        table.push_row(row);
    }

    Ok((table, metadata))
}
