use std::path::PathBuf;

use roster_cli::pipeline::RunSummary;

/// Everything the end-of-run report needs.
#[derive(Debug)]
pub struct ImportResult {
    pub summary: RunSummary,
    /// Database file the run committed to.
    pub database: PathBuf,
    /// Directory holding this run's error artifacts.
    pub errors_dir: PathBuf,
}
