//! Import run orchestration with explicit stages.
//!
//! Each discovered file moves through these stages in order:
//! 1. **Extract**: read the source into a raw table
//! 2. **Transform**: normalize headers, validate rows into cohorts
//! 3. **Load**: insert the valid cohort in transactional batches
//! 4. **Artifacts**: write rejected rows to per-source error files
//! 5. **Archive**: move the imported file into the processed directory
//!
//! Extraction and artifact failures are contained to the file they occur
//! in; a batch-commit failure aborts the rest of the run because continuing
//! would reorder inserts around the failed batch.

use std::ffi::OsStr;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::{debug, error, info, info_span, warn};

use roster_ingest::{extract, list_input_files};
use roster_load::{bulk_insert_players, save_errors};
use roster_store::PlayerStore;
use roster_transform::transform_players;

// ============================================================================
// Run layout
// ============================================================================

/// The four directories one import run works with.
#[derive(Debug, Clone)]
pub struct RunDirs {
    /// Drop directory scanned for source files.
    pub input: PathBuf,
    /// Holds run outputs such as the database file.
    pub output: PathBuf,
    /// Imported source files are moved here.
    pub processed: PathBuf,
    /// Error artifacts for rejected records land here.
    pub errors: PathBuf,
}

impl RunDirs {
    /// Derives the conventional layout around an input directory: sibling
    /// `output/`, `processed/` and `errors/` directories unless overridden.
    pub fn resolve(
        input: PathBuf,
        output: Option<PathBuf>,
        processed: Option<PathBuf>,
        errors: Option<PathBuf>,
    ) -> Self {
        let base = input
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from("."));
        Self {
            output: output.unwrap_or_else(|| base.join("output")),
            processed: processed.unwrap_or_else(|| base.join("processed")),
            errors: errors.unwrap_or_else(|| base.join("errors")),
            input,
        }
    }

    /// Creates any missing run directory, the input directory included, so
    /// a first run against a fresh layout starts from a valid empty state.
    pub fn ensure(&self) -> io::Result<()> {
        for dir in [&self.input, &self.output, &self.processed, &self.errors] {
            fs::create_dir_all(dir)?;
        }
        Ok(())
    }
}

// ============================================================================
// Run results
// ============================================================================

/// Aggregate counters and per-file outcomes of one import run.
#[derive(Debug, Default)]
pub struct RunSummary {
    /// Files fully imported (and, barring archive problems, moved away).
    pub files_processed: usize,
    /// Files that failed extraction, artifact writing or loading.
    pub files_failed: usize,
    /// Records durably committed to the store.
    pub records_created: usize,
    /// Rejected records written to error artifacts.
    pub records_rejected: usize,
    /// Per-file outcomes in processing order.
    pub files: Vec<FileOutcome>,
}

/// Terminal state of one source file within a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileStatus {
    Imported,
    Failed,
}

/// What happened to a single source file.
#[derive(Debug)]
pub struct FileOutcome {
    /// Source file name, without its directory.
    pub file: String,
    pub status: FileStatus,
    /// Records from this file committed to the store.
    pub created: usize,
    /// Records from this file that failed validation.
    pub rejected: usize,
    /// Failure description for `Failed` outcomes.
    pub error: Option<String>,
    /// Whether the file was moved to the processed directory.
    pub archived: bool,
}

impl FileOutcome {
    fn failed(file: String, created: usize, rejected: usize, error: String) -> Self {
        Self {
            file,
            status: FileStatus::Failed,
            created,
            rejected,
            error: Some(error),
            archived: false,
        }
    }
}

// ============================================================================
// Orchestration
// ============================================================================

/// Runs one full import over every file in the input directory.
///
/// Always returns a summary when the run itself could start; per-file
/// failures and an aborted load are reported through `files_failed` and the
/// per-file outcomes rather than as an `Err`.
pub fn run(dirs: &RunDirs, store: &mut dyn PlayerStore) -> Result<RunSummary> {
    let run_start = Instant::now();
    dirs.ensure().context("create run directories")?;

    let files = list_input_files(&dirs.input).context("list input files")?;
    if files.is_empty() {
        info!(input_dir = %dirs.input.display(), "no input files found");
        return Ok(RunSummary::default());
    }
    info!(
        input_dir = %dirs.input.display(),
        file_count = files.len(),
        "import run started"
    );

    let mut summary = RunSummary::default();
    for path in &files {
        let file = file_label(path);
        let span = info_span!("import_file", file = %file);
        let _guard = span.enter();
        let file_start = Instant::now();

        let (table, metadata) = match extract(path) {
            Ok(extracted) => extracted,
            Err(e) => {
                warn!(error = %e, "extraction failed, file skipped");
                summary.files_failed += 1;
                summary.files.push(FileOutcome::failed(file, 0, 0, e.to_string()));
                continue;
            }
        };
        if let Some(sheets) = &metadata.sheets {
            debug!(sheets = ?sheets, "workbook sheets merged");
        }

        let outcome = transform_players(&table);
        let rejected = outcome.invalid.len();

        let created = if outcome.valid.is_empty() {
            0
        } else {
            match bulk_insert_players(store, &outcome.valid) {
                Ok(count) => count,
                Err(e) => {
                    let committed = e.committed();
                    error!(committed, error = %e, "load failed, aborting run");
                    summary.records_created += committed;
                    summary.files_failed += 1;
                    summary
                        .files
                        .push(FileOutcome::failed(file, committed, rejected, e.to_string()));
                    break;
                }
            }
        };
        summary.records_created += created;

        if !outcome.invalid.is_empty() {
            let stem = source_stem(path);
            if let Err(e) = save_errors(&dirs.errors, &stem, &outcome.headers, &outcome.invalid) {
                warn!(error = %e, "artifact write failed, file skipped");
                summary.files_failed += 1;
                summary
                    .files
                    .push(FileOutcome::failed(file, created, rejected, e.to_string()));
                continue;
            }
        }
        summary.records_rejected += rejected;

        let archived = match archive_file(path, &dirs.processed) {
            Ok(()) => true,
            Err(e) => {
                warn!(error = %e, "archive failed, file left in input");
                false
            }
        };

        summary.files_processed += 1;
        summary.files.push(FileOutcome {
            file,
            status: FileStatus::Imported,
            created,
            rejected,
            error: None,
            archived,
        });
        debug!(
            created,
            rejected,
            archived,
            duration_ms = file_start.elapsed().as_millis(),
            "file imported"
        );
    }

    info!(
        files_processed = summary.files_processed,
        files_failed = summary.files_failed,
        records_created = summary.records_created,
        records_rejected = summary.records_rejected,
        duration_ms = run_start.elapsed().as_millis(),
        "import run complete"
    );
    Ok(summary)
}

// ============================================================================
// Helper functions
// ============================================================================

fn file_label(path: &Path) -> String {
    path.file_name()
        .and_then(OsStr::to_str)
        .unwrap_or("unknown")
        .to_string()
}

fn source_stem(path: &Path) -> String {
    path.file_stem()
        .and_then(OsStr::to_str)
        .unwrap_or("unknown")
        .to_string()
}

/// Moves an imported file into the processed directory, overwriting any
/// leftover of the same name from an earlier run.
fn archive_file(path: &Path, processed_dir: &Path) -> io::Result<()> {
    let file_name = path
        .file_name()
        .ok_or_else(|| io::Error::other("source path has no file name"))?;
    fs::rename(path, processed_dir.join(file_name))
}
