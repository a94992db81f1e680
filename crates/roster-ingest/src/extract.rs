//! Format dispatch for a single source file.

use std::path::Path;

use roster_model::{RawTable, SourceMetadata};
use tracing::debug;

use crate::csv_file::extract_csv;
use crate::discovery::SourceFormat;
use crate::error::{IngestError, Result};
use crate::workbook::extract_workbook;

/// Extracts one source file, choosing the reader by extension.
pub fn extract(path: &Path) -> Result<(RawTable, SourceMetadata)> {
    let format = SourceFormat::from_path(path).ok_or_else(|| IngestError::UnsupportedFormat {
        path: path.to_path_buf(),
    })?;

    let (table, metadata) = match format {
        SourceFormat::Csv => extract_csv(path)?,
        SourceFormat::Xls | SourceFormat::Xlsx => extract_workbook(path)?,
    };

    debug!(
        source = %metadata.source,
        rows = table.len(),
        columns = table.headers.len(),
        "extracted source file"
    );
    Ok((table, metadata))
}
