//! Error types for loading and artifact writing.

use std::path::PathBuf;
use thiserror::Error;

use roster_store::StoreError;

/// Errors that can occur while persisting a valid cohort or writing
/// rejected-record artifacts.
#[derive(Debug, Error)]
pub enum LoadError {
    // === Persistence Errors ===
    /// A batch commit failed. Batches committed earlier stay committed;
    /// `committed` counts the records that made it in before the abort.
    #[error("batch {batch_index} failed after {committed} committed records: {source}")]
    Batch {
        committed: usize,
        batch_index: usize,
        #[source]
        source: StoreError,
    },

    // === Artifact Errors ===
    /// Failed to write the tabular artifact.
    #[error("failed to write error artifact {path}: {source}")]
    ArtifactCsv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// Failed to serialize the record-oriented artifact.
    #[error("failed to serialize error artifact {path}: {source}")]
    ArtifactJson {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Failed to flush an artifact to disk.
    #[error("failed to write error artifact {path}: {source}")]
    ArtifactIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl LoadError {
    /// Records committed before the failure, for run accounting.
    pub fn committed(&self) -> usize {
        match self {
            LoadError::Batch { committed, .. } => *committed,
            _ => 0,
        }
    }
}

/// Result type for loader operations.
pub type Result<T> = std::result::Result<T, LoadError>;
