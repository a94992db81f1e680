//! Workbook extraction (.xls and .xlsx).
//!
//! Every sheet is read with its own header row and the sheets are combined
//! into a single table, so one workbook can carry several club rosters.

use std::path::Path;

use calamine::{Data, Range, Reader, open_workbook_auto};
use chrono::NaiveTime;
use roster_model::{CellValue, RawTable, Record, SourceMetadata, fields};

use crate::error::{IngestError, Result};
use crate::util::{normalize_cell, source_name};

/// Reads every sheet of a workbook into one combined table.
pub fn extract_workbook(path: &Path) -> Result<(RawTable, SourceMetadata)> {
    let mut workbook = open_workbook_auto(path).map_err(|e| IngestError::Workbook {
        path: path.to_path_buf(),
        source: e,
    })?;

    let sheets = workbook.worksheets();
    let (table, sheet_names) = table_from_sheets(&sheets);

    let metadata = SourceMetadata {
        source: source_name(path),
        sheets: Some(sheet_names),
    };
    Ok((table, metadata))
}

/// Combines parsed sheets into one table, appending a provenance column
/// that names the sheet each row came from.
///
/// Headers are the union across sheets in first-seen order. A row from a
/// sheet that lacks one of those columns carries an empty cell there.
pub fn table_from_sheets(sheets: &[(String, Range<Data>)]) -> (RawTable, Vec<String>) {
    let mut sheet_names = Vec::new();
    let mut headers: Vec<String> = Vec::new();
    let mut parsed: Vec<(&str, Vec<String>, Vec<Vec<CellValue>>)> = Vec::new();

    for (name, range) in sheets {
        sheet_names.push(name.clone());
        let Some((sheet_headers, rows)) = sheet_rows(range) else {
            continue;
        };
        for header in &sheet_headers {
            if !header.is_empty() && !headers.contains(header) {
                headers.push(header.clone());
            }
        }
        parsed.push((name.as_str(), sheet_headers, rows));
    }

    let mut table_headers = headers.clone();
    table_headers.push(fields::SHEET_COLUMN.to_string());
    let mut table = RawTable::new(table_headers);

    for (name, sheet_headers, rows) in parsed {
        for cells in rows {
            let mut row = Record::new();
            for header in &headers {
                row.insert(header.clone(), CellValue::Empty);
            }
            for (idx, header) in sheet_headers.iter().enumerate() {
                if header.is_empty() {
                    continue;
                }
                if let Some(cell) = cells.get(idx) {
                    row.insert(header.clone(), cell.clone());
                }
            }
            row.insert(fields::SHEET_COLUMN.to_string(), CellValue::text(name));
            table.push_row(row);
        }
    }

    (table, sheet_names)
}

/// Header row and data rows of one sheet, blank rows skipped.
///
/// Returns `None` when the sheet has no non-blank row at all.
fn sheet_rows(range: &Range<Data>) -> Option<(Vec<String>, Vec<Vec<CellValue>>)> {
    let mut rows = range.rows();

    let header_cells = loop {
        let cells: Vec<CellValue> = rows.next()?.iter().map(convert_cell).collect();
        if cells.iter().any(|cell| !cell.is_blank()) {
            break cells;
        }
    };
    let headers: Vec<String> = header_cells
        .iter()
        .map(|cell| normalize_cell(&cell.to_string()))
        .collect();

    let mut data = Vec::new();
    for row in rows {
        let cells: Vec<CellValue> = row.iter().map(convert_cell).collect();
        if cells.iter().all(CellValue::is_blank) {
            continue;
        }
        data.push(cells);
    }

    Some((headers, data))
}

/// Maps a workbook cell onto the pipeline's loose cell model.
///
/// Date cells render as ISO text, date-only when the time component is
/// midnight, so they satisfy the accepted birth-date layouts downstream.
fn convert_cell(cell: &Data) -> CellValue {
    match cell {
        Data::Empty | Data::Error(_) => CellValue::Empty,
        Data::String(value) => {
            let trimmed = value.trim();
            if trimmed.is_empty() {
                CellValue::Empty
            } else {
                CellValue::text(trimmed)
            }
        }
        Data::Int(value) => CellValue::Int(*value),
        Data::Float(value) => CellValue::Float(*value),
        Data::Bool(value) => CellValue::Bool(*value),
        Data::DateTime(value) => match value.as_datetime() {
            Some(datetime) if datetime.time() == NaiveTime::MIN => {
                CellValue::text(datetime.format("%Y-%m-%d").to_string())
            }
            Some(datetime) => CellValue::text(datetime.format("%Y-%m-%d %H:%M:%S").to_string()),
            None => CellValue::Float(value.as_f64()),
        },
        Data::DateTimeIso(value) | Data::DurationIso(value) => CellValue::text(value.clone()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sheet(cells: &[(u32, u32, Data)]) -> Range<Data> {
        let max_row = cells.iter().map(|(r, _, _)| *r).max().unwrap_or(0);
        let max_col = cells.iter().map(|(_, c, _)| *c).max().unwrap_or(0);
        let mut range = Range::new((0, 0), (max_row, max_col));
        for (row, col, value) in cells {
            range.set_value((*row, *col), value.clone());
        }
        range
    }

    #[test]
    fn test_single_sheet_keeps_typed_cells() {
        let range = sheet(&[
            (0, 0, Data::String("email".into())),
            (0, 1, Data::String("rating".into())),
            (1, 0, Data::String("mara@example.com".into())),
            (1, 1, Data::Float(1500.0)),
        ]);
        let sheets = vec![("Club A".to_string(), range)];

        let (table, names) = table_from_sheets(&sheets);
        assert_eq!(names, vec!["Club A"]);
        assert_eq!(table.headers, vec!["email", "rating", "__sheet"]);
        assert_eq!(table.len(), 1);
        assert_eq!(table.rows[0].get("rating"), Some(&CellValue::Float(1500.0)));
        assert_eq!(table.rows[0].get("__sheet"), Some(&CellValue::text("Club A")));
    }

    #[test]
    fn test_sheets_union_headers_in_first_seen_order() {
        let first = sheet(&[
            (0, 0, Data::String("email".into())),
            (0, 1, Data::String("rating".into())),
            (1, 0, Data::String("a1@x.io".into())),
            (1, 1, Data::Int(900)),
            (2, 0, Data::String("a2@x.io".into())),
            (2, 1, Data::Int(1100)),
        ]);
        let second = sheet(&[
            (0, 0, Data::String("email".into())),
            (0, 1, Data::String("phone_number".into())),
            (1, 0, Data::String("b@x.io".into())),
            (1, 1, Data::String("123456".into())),
        ]);
        let sheets = vec![("One".to_string(), first), ("Two".to_string(), second)];

        let (table, names) = table_from_sheets(&sheets);
        assert_eq!(names, vec!["One", "Two"]);
        assert_eq!(
            table.headers,
            vec!["email", "rating", "phone_number", "__sheet"]
        );
        // Sheet order first, row order within each sheet.
        assert_eq!(table.len(), 3);
        assert_eq!(table.rows[0].get("email"), Some(&CellValue::text("a1@x.io")));
        assert_eq!(table.rows[1].get("email"), Some(&CellValue::text("a2@x.io")));
        assert_eq!(table.rows[2].get("email"), Some(&CellValue::text("b@x.io")));
        // Columns absent from a sheet are filled with empty cells.
        assert_eq!(table.rows[0].get("phone_number"), Some(&CellValue::Empty));
        assert_eq!(table.rows[2].get("rating"), Some(&CellValue::Empty));
        assert_eq!(table.rows[2].get("__sheet"), Some(&CellValue::text("Two")));
    }

    #[test]
    fn test_blank_rows_and_empty_sheets_are_skipped() {
        let range = sheet(&[
            // Leading blank row, then the header.
            (1, 0, Data::String("email".into())),
            (2, 0, Data::Empty),
            (3, 0, Data::String("a@x.io".into())),
        ]);
        let empty = Range::new((0, 0), (0, 0));
        let sheets = vec![("Main".to_string(), range), ("Blank".to_string(), empty)];

        let (table, names) = table_from_sheets(&sheets);
        assert_eq!(names, vec!["Main", "Blank"]);
        assert_eq!(table.headers, vec!["email", "__sheet"]);
        assert_eq!(table.len(), 1);
        assert_eq!(table.rows[0].get("email"), Some(&CellValue::text("a@x.io")));
    }

    #[test]
    fn test_convert_cell() {
        assert_eq!(convert_cell(&Data::Empty), CellValue::Empty);
        assert_eq!(convert_cell(&Data::String("  x  ".into())), CellValue::text("x"));
        assert_eq!(convert_cell(&Data::String("   ".into())), CellValue::Empty);
        assert_eq!(convert_cell(&Data::Int(7)), CellValue::Int(7));
        assert_eq!(convert_cell(&Data::Float(7.5)), CellValue::Float(7.5));
        assert_eq!(convert_cell(&Data::Bool(true)), CellValue::Bool(true));
        assert_eq!(
            convert_cell(&Data::DateTimeIso("1990-03-15".into())),
            CellValue::text("1990-03-15")
        );
    }
}
