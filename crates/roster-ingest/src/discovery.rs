//! Input-file discovery.

use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use crate::error::{IngestError, Result};

/// Source formats the pipeline can extract.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceFormat {
    Csv,
    Xls,
    Xlsx,
}

impl SourceFormat {
    /// Classifies a path by extension, case-insensitive.
    pub fn from_path(path: &Path) -> Option<SourceFormat> {
        let extension = path.extension().and_then(OsStr::to_str)?;
        if extension.eq_ignore_ascii_case("csv") {
            Some(SourceFormat::Csv)
        } else if extension.eq_ignore_ascii_case("xls") {
            Some(SourceFormat::Xls)
        } else if extension.eq_ignore_ascii_case("xlsx") {
            Some(SourceFormat::Xlsx)
        } else {
            None
        }
    }

    pub fn is_workbook(self) -> bool {
        matches!(self, SourceFormat::Xls | SourceFormat::Xlsx)
    }
}

/// Lists all importable files in a directory.
///
/// Returns files sorted by filename so runs are deterministic.
pub fn list_input_files(dir: &Path) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Err(IngestError::DirectoryNotFound {
            path: dir.to_path_buf(),
        });
    }

    let mut files = Vec::new();

    let entries = std::fs::read_dir(dir).map_err(|e| IngestError::DirectoryRead {
        path: dir.to_path_buf(),
        source: e,
    })?;

    for entry_result in entries {
        let entry = entry_result.map_err(|e| IngestError::DirectoryRead {
            path: dir.to_path_buf(),
            source: e,
        })?;

        let path = entry.path();

        // Skip directories
        if !path.is_file() {
            continue;
        }

        if SourceFormat::from_path(&path).is_some() {
            files.push(path);
        }
    }

    files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));

    Ok(files)
}
