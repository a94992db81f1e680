//! Batched persistence of the valid cohort.

use roster_model::{CellValue, NewPlayer, Record, fields};
use roster_store::PlayerStore;
use tracing::{debug, warn};

use crate::error::{LoadError, Result};

/// Number of records committed per transaction.
pub const BATCH_SIZE: usize = 200;

/// Maps a validated record onto the store entity.
///
/// `rating` is carried only when coercion produced an integer cell;
/// `phone_number` and `date_of_birth` pass through as validated text.
pub fn record_to_player(record: &Record) -> NewPlayer {
    let text = |field: &str| {
        record
            .get(field)
            .map(ToString::to_string)
            .unwrap_or_default()
    };
    let optional = |field: &str| {
        record.get(field).and_then(|cell| {
            if cell.is_blank() {
                None
            } else {
                Some(cell.to_string())
            }
        })
    };

    NewPlayer {
        first_name: text(fields::FIRST_NAME),
        last_name: text(fields::LAST_NAME),
        email: text(fields::EMAIL),
        rating: match record.get(fields::RATING) {
            Some(CellValue::Int(value)) => Some(*value),
            _ => None,
        },
        phone_number: optional(fields::PHONE_NUMBER),
        date_of_birth: optional(fields::DATE_OF_BIRTH),
    }
}

/// Inserts the valid cohort in fixed-size batches, one transaction per
/// batch, preserving cohort order. Batch boundaries never split: batch `i`
/// holds rows `[200·i, 200·(i+1))`.
///
/// On a batch failure the remaining batches are abandoned; the error
/// carries how many records were committed before the abort.
pub fn bulk_insert_players(store: &mut dyn PlayerStore, records: &[Record]) -> Result<usize> {
    let mut created = 0;

    for (batch_index, chunk) in records.chunks(BATCH_SIZE).enumerate() {
        let batch: Vec<NewPlayer> = chunk.iter().map(record_to_player).collect();
        match store.insert_players(&batch) {
            Ok(ids) => {
                created += ids.len();
                debug!(batch = batch_index, size = ids.len(), "batch committed");
            }
            Err(source) => {
                warn!(
                    batch = batch_index,
                    committed = created,
                    "batch failed, aborting load"
                );
                return Err(LoadError::Batch {
                    committed: created,
                    batch_index,
                    source,
                });
            }
        }
    }

    Ok(created)
}

#[cfg(test)]
mod tests {
    use super::*;
    use roster_store::MemoryStore;

    fn valid_record(index: usize) -> Record {
        let mut record = Record::new();
        record.insert("first_name".to_string(), CellValue::text(format!("P{index}")));
        record.insert("last_name".to_string(), CellValue::text("Tester"));
        record.insert("email".to_string(), CellValue::text(format!("p{index}@x.io")));
        record.insert("rating".to_string(), CellValue::Int(1000 + index as i64));
        record
    }

    #[test]
    fn test_450_records_commit_in_three_batches() {
        let records: Vec<Record> = (0..450).map(valid_record).collect();
        let mut store = MemoryStore::new();

        let created = bulk_insert_players(&mut store, &records).unwrap();
        assert_eq!(created, 450);
        assert_eq!(store.batch_sizes(), &[200, 200, 50]);
        assert_eq!(store.player_count().unwrap(), 450);
        // Order survives batching.
        assert_eq!(store.players()[200].email, "p200@x.io");
    }

    #[test]
    fn test_failed_batch_keeps_earlier_batches() {
        let mut records: Vec<Record> = (0..410).map(valid_record).collect();
        // Row 250 duplicates row 10, so the second batch aborts the load.
        records[250].insert("email".to_string(), CellValue::text("p10@x.io"));
        let mut store = MemoryStore::new();

        let err = bulk_insert_players(&mut store, &records).unwrap_err();
        match &err {
            LoadError::Batch {
                committed,
                batch_index,
                ..
            } => {
                assert_eq!(*committed, 200);
                assert_eq!(*batch_index, 1);
            }
            other => panic!("unexpected error: {other}"),
        }
        assert_eq!(err.committed(), 200);
        assert_eq!(store.player_count().unwrap(), 200);
        assert_eq!(store.batch_sizes(), &[200]);
    }

    #[test]
    fn test_record_to_player_mapping() {
        let mut record = valid_record(1);
        record.insert("phone_number".to_string(), CellValue::text("+49 170 1234567"));
        record.insert("date_of_birth".to_string(), CellValue::text("1990-03-15"));
        record.insert("club".to_string(), CellValue::text("SC Mitte"));

        let player = record_to_player(&record);
        assert_eq!(player.first_name, "P1");
        assert_eq!(player.email, "p1@x.io");
        assert_eq!(player.rating, Some(1001));
        assert_eq!(player.phone_number.as_deref(), Some("+49 170 1234567"));
        assert_eq!(player.date_of_birth.as_deref(), Some("1990-03-15"));
    }

    #[test]
    fn test_blank_optional_fields_map_to_none() {
        let mut record = valid_record(2);
        record.insert("rating".to_string(), CellValue::Empty);
        record.insert("phone_number".to_string(), CellValue::Empty);

        let player = record_to_player(&record);
        assert_eq!(player.rating, None);
        assert_eq!(player.phone_number, None);
        assert_eq!(player.date_of_birth, None);
    }

    #[test]
    fn test_empty_cohort_creates_nothing() {
        let mut store = MemoryStore::new();
        assert_eq!(bulk_insert_players(&mut store, &[]).unwrap(), 0);
        assert!(store.batch_sizes().is_empty());
    }
}
