//! Error types for source-file extraction.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while discovering and extracting source files.
#[derive(Debug, Error)]
pub enum IngestError {
    // === File System Errors ===
    /// Input directory missing or not a directory.
    #[error("directory not found: {path}")]
    DirectoryNotFound { path: PathBuf },

    /// Failed to read directory entries.
    #[error("failed to read directory {path}: {source}")]
    DirectoryRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to open or read a source file.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // === Format Errors ===
    /// Extension is not one of the supported source formats.
    #[error("unsupported source format: {path}")]
    UnsupportedFormat { path: PathBuf },

    /// Failed to parse a CSV file.
    #[error("failed to parse CSV {path}: {source}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// The file yields no header row, so there is nothing to parse.
    #[error("no columns to parse in {path}")]
    EmptySource { path: PathBuf },

    /// Failed to open or read a workbook.
    #[error("failed to read workbook {path}: {source}")]
    Workbook {
        path: PathBuf,
        #[source]
        source: calamine::Error,
    },
}

/// Result type for extraction operations.
pub type Result<T> = std::result::Result<T, IngestError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = IngestError::UnsupportedFormat {
            path: PathBuf::from("/import/players.pdf"),
        };
        assert_eq!(
            err.to_string(),
            "unsupported source format: /import/players.pdf"
        );
    }
}
