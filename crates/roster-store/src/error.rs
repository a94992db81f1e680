//! Error types for the player store.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised by store implementations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Failed to open the database.
    #[error("failed to open player store {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: rusqlite::Error,
    },

    /// Failed to initialize the schema.
    #[error("failed to initialize player store schema: {source}")]
    Schema {
        #[source]
        source: rusqlite::Error,
    },

    /// A statement or transaction failed.
    #[error("player store error: {source}")]
    Query {
        #[source]
        source: rusqlite::Error,
    },

    /// The email uniqueness constraint was violated.
    #[error("email already registered: {email}")]
    UniqueEmail { email: String },
}

/// Result type for store operations.
pub type Result<T> = std::result::Result<T, StoreError>;
