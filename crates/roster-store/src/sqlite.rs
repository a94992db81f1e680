//! SQLite-backed player store.

use std::path::{Path, PathBuf};

use roster_model::NewPlayer;
use rusqlite::{Connection, params};
use tracing::debug;

use crate::PlayerStore;
use crate::error::{Result, StoreError};

/// SQLite implementation of [`PlayerStore`]. One connection per run.
pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    /// Opens a database file, creating it and the schema if needed.
    pub fn open(path: &Path) -> Result<Self> {
        let conn = Connection::open(path).map_err(|e| StoreError::Open {
            path: path.to_path_buf(),
            source: e,
        })?;
        init_schema(&conn)?;
        Ok(Self { conn })
    }

    /// In-memory store, used by tests.
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory().map_err(|e| StoreError::Open {
            path: PathBuf::from(":memory:"),
            source: e,
        })?;
        init_schema(&conn)?;
        Ok(Self { conn })
    }
}

fn init_schema(conn: &Connection) -> Result<()> {
    conn.execute(
        r#"
        CREATE TABLE IF NOT EXISTS players (
            player_id INTEGER PRIMARY KEY AUTOINCREMENT,
            first_name TEXT NOT NULL,
            last_name TEXT NOT NULL,
            email TEXT NOT NULL UNIQUE,
            rating INTEGER,
            phone_number TEXT,
            date_of_birth TEXT
        )
        "#,
        [],
    )
    .map_err(|e| StoreError::Schema { source: e })?;
    Ok(())
}

/// Distinguishes a duplicate email from any other statement failure.
fn map_insert_error(email: &str, err: rusqlite::Error) -> StoreError {
    if let rusqlite::Error::SqliteFailure(failure, _) = &err {
        if failure.extended_code == rusqlite::ffi::SQLITE_CONSTRAINT_UNIQUE {
            return StoreError::UniqueEmail {
                email: email.to_string(),
            };
        }
    }
    StoreError::Query { source: err }
}

impl PlayerStore for SqliteStore {
    fn insert_players(&mut self, batch: &[NewPlayer]) -> Result<Vec<i64>> {
        let tx = self
            .conn
            .transaction()
            .map_err(|e| StoreError::Query { source: e })?;

        let mut ids = Vec::with_capacity(batch.len());
        {
            let mut stmt = tx
                .prepare(
                    "INSERT INTO players \
                     (first_name, last_name, email, rating, phone_number, date_of_birth) \
                     VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
                )
                .map_err(|e| StoreError::Query { source: e })?;
            for player in batch {
                // Dropping the transaction on the error path rolls the
                // whole batch back.
                stmt.execute(params![
                    player.first_name,
                    player.last_name,
                    player.email,
                    player.rating,
                    player.phone_number,
                    player.date_of_birth,
                ])
                .map_err(|e| map_insert_error(&player.email, e))?;
                ids.push(tx.last_insert_rowid());
            }
        }
        tx.commit().map_err(|e| StoreError::Query { source: e })?;

        debug!(inserted = ids.len(), "committed player batch");
        Ok(ids)
    }

    fn email_exists(&self, email: &str) -> Result<bool> {
        let mut stmt = self
            .conn
            .prepare("SELECT 1 FROM players WHERE email = ?1 LIMIT 1")
            .map_err(|e| StoreError::Query { source: e })?;
        stmt.exists(params![email])
            .map_err(|e| StoreError::Query { source: e })
    }

    fn player_count(&self) -> Result<u64> {
        self.conn
            .query_row("SELECT COUNT(*) FROM players", [], |row| row.get(0))
            .map_err(|e| StoreError::Query { source: e })
    }
}
