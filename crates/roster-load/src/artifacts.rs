//! Error artifacts for rejected records.
//!
//! Every source file with rejects gets a CSV and a JSON file named after the
//! source stem, `errors_<stem>.csv` and `errors_<stem>.json`. Both carry the
//! source columns plus an `_errors` column holding the joined messages for
//! each row. Sources with no rejects get no files at all.

use std::fs;
use std::path::{Path, PathBuf};

use roster_model::{RejectedRecord, fields};
use serde_json::{Map, Value};
use tracing::debug;

use crate::error::{LoadError, Result};

/// Paths of the artifact pair written for one source file.
#[derive(Debug, Clone, PartialEq)]
pub struct ErrorArtifacts {
    pub csv: PathBuf,
    pub json: PathBuf,
}

/// Writes the artifact pair for one source, or nothing when there are no
/// rejects. Existing artifacts for the same stem are overwritten.
pub fn save_errors(
    errors_dir: &Path,
    source_stem: &str,
    headers: &[String],
    rejected: &[RejectedRecord],
) -> Result<Option<ErrorArtifacts>> {
    if rejected.is_empty() {
        return Ok(None);
    }

    fs::create_dir_all(errors_dir).map_err(|source| LoadError::ArtifactIo {
        path: errors_dir.to_path_buf(),
        source,
    })?;

    let csv_path = errors_dir.join(format!("errors_{source_stem}.csv"));
    let json_path = errors_dir.join(format!("errors_{source_stem}.json"));
    write_csv(&csv_path, headers, rejected)?;
    write_json(&json_path, headers, rejected)?;
    debug!(
        source = source_stem,
        records = rejected.len(),
        "error artifacts written"
    );

    Ok(Some(ErrorArtifacts {
        csv: csv_path,
        json: json_path,
    }))
}

fn write_csv(path: &Path, headers: &[String], rejected: &[RejectedRecord]) -> Result<()> {
    let csv_err = |source: csv::Error| LoadError::ArtifactCsv {
        path: path.to_path_buf(),
        source,
    };

    let mut writer = csv::Writer::from_path(path).map_err(csv_err)?;

    let mut header_row: Vec<&str> = headers.iter().map(String::as_str).collect();
    header_row.push(fields::ERRORS_COLUMN);
    writer.write_record(&header_row).map_err(csv_err)?;

    for item in rejected {
        let mut row: Vec<String> = Vec::with_capacity(headers.len() + 1);
        for header in headers {
            // Cells absent from the record render as empty strings.
            row.push(
                item.record
                    .get(header)
                    .map(ToString::to_string)
                    .unwrap_or_default(),
            );
        }
        row.push(item.joined_errors());
        writer.write_record(&row).map_err(csv_err)?;
    }

    writer.flush().map_err(|source| LoadError::ArtifactIo {
        path: path.to_path_buf(),
        source,
    })
}

fn write_json(path: &Path, headers: &[String], rejected: &[RejectedRecord]) -> Result<()> {
    let mut entries = Vec::with_capacity(rejected.len());
    for item in rejected {
        let mut entry = Map::new();
        for header in headers {
            let value = match item.record.get(header) {
                Some(cell) => serde_json::to_value(cell).map_err(|source| {
                    LoadError::ArtifactJson {
                        path: path.to_path_buf(),
                        source,
                    }
                })?,
                None => Value::Null,
            };
            entry.insert(header.clone(), value);
        }
        entry.insert(
            fields::ERRORS_COLUMN.to_string(),
            Value::String(item.joined_errors()),
        );
        entries.push(Value::Object(entry));
    }

    let body =
        serde_json::to_string_pretty(&entries).map_err(|source| LoadError::ArtifactJson {
            path: path.to_path_buf(),
            source,
        })?;
    fs::write(path, body).map_err(|source| LoadError::ArtifactIo {
        path: path.to_path_buf(),
        source,
    })
}
