//! Player persistence.
//!
//! The loader talks to [`PlayerStore`], a narrow interface over the
//! relational store: batched inserts committed one transaction each, plus
//! the lookups the pipeline needs. [`SqliteStore`] is the real backend;
//! [`MemoryStore`] is an in-memory fake with the same uniqueness rule.

mod error;
mod memory;
mod sqlite;

use roster_model::NewPlayer;

pub use error::{Result, StoreError};
pub use memory::MemoryStore;
pub use sqlite::SqliteStore;

/// Narrow persistence interface the loader runs against.
pub trait PlayerStore {
    /// Inserts a batch of players inside one transaction and returns the
    /// store-assigned identifiers in batch order. On failure nothing from
    /// the batch is kept.
    fn insert_players(&mut self, batch: &[NewPlayer]) -> Result<Vec<i64>>;

    /// Whether a player with this email is already stored.
    fn email_exists(&self, email: &str) -> Result<bool>;

    /// Number of stored players.
    fn player_count(&self) -> Result<u64>;
}
