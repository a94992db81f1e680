//! In-memory store fake.

use roster_model::NewPlayer;

use crate::PlayerStore;
use crate::error::{Result, StoreError};

/// Keeps players in a `Vec` and enforces the same email uniqueness rule the
/// relational store would, with all-or-nothing batch semantics.
#[derive(Debug, Default)]
pub struct MemoryStore {
    players: Vec<NewPlayer>,
    batch_sizes: Vec<usize>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stored players in insertion order.
    pub fn players(&self) -> &[NewPlayer] {
        &self.players
    }

    /// Sizes of the successfully committed batches, in commit order.
    pub fn batch_sizes(&self) -> &[usize] {
        &self.batch_sizes
    }
}

impl PlayerStore for MemoryStore {
    fn insert_players(&mut self, batch: &[NewPlayer]) -> Result<Vec<i64>> {
        // Check the whole batch before keeping any of it.
        let mut seen: Vec<&str> = Vec::new();
        for player in batch {
            let duplicate = seen.contains(&player.email.as_str())
                || self
                    .players
                    .iter()
                    .any(|existing| existing.email == player.email);
            if duplicate {
                return Err(StoreError::UniqueEmail {
                    email: player.email.clone(),
                });
            }
            seen.push(&player.email);
        }

        let start = self.players.len() as i64;
        self.players.extend_from_slice(batch);
        self.batch_sizes.push(batch.len());
        Ok((start + 1..=start + batch.len() as i64).collect())
    }

    fn email_exists(&self, email: &str) -> Result<bool> {
        Ok(self.players.iter().any(|player| player.email == email))
    }

    fn player_count(&self) -> Result<u64> {
        Ok(self.players.len() as u64)
    }
}
