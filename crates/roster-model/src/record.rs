use std::collections::BTreeMap;

use crate::value::CellValue;

/// One row of a source file, keyed by canonical header name.
pub type Record = BTreeMap<String, CellValue>;

/// Rows extracted from one source file, with headers in source order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawTable {
    pub headers: Vec<String>,
    pub rows: Vec<Record>,
}

impl RawTable {
    pub fn new(headers: Vec<String>) -> Self {
        Self {
            headers,
            rows: Vec::new(),
        }
    }

    pub fn push_row(&mut self, row: Record) {
        self.rows.push(row);
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }
}

/// Provenance for an extracted table.
#[derive(Debug, Clone, PartialEq)]
pub struct SourceMetadata {
    /// File name of the source, without its directory.
    pub source: String,
    /// Sheet names that contributed rows, for workbook sources only.
    pub sheets: Option<Vec<String>>,
}

/// A row that failed validation, with every message it accumulated.
#[derive(Debug, Clone, PartialEq)]
pub struct RejectedRecord {
    pub record: Record,
    pub errors: Vec<String>,
}

impl RejectedRecord {
    /// All messages joined into the single string written to error artifacts.
    pub fn joined_errors(&self) -> String {
        self.errors.join("; ")
    }
}
