//! Loading stage of the import pipeline.
//!
//! Takes the two cohorts a transform produces and lands each where it
//! belongs: valid records go to the player store in fixed-size transactional
//! batches, rejected records go to per-source error artifacts on disk.

mod artifacts;
mod error;
mod loader;

// === Persistence ===
pub use loader::{BATCH_SIZE, bulk_insert_players, record_to_player};

// === Artifacts ===
pub use artifacts::{ErrorArtifacts, save_errors};

// === Errors ===
pub use error::{LoadError, Result};
