use std::fs;

use anyhow::{Context, Result};
use comfy_table::Table;

use roster_cli::pipeline::{self, RunDirs};
use roster_store::SqliteStore;
use roster_transform::HEADER_ALIASES;

use crate::cli::RunArgs;
use crate::summary::apply_table_style;
use crate::types::ImportResult;

pub fn run_import(args: &RunArgs) -> Result<ImportResult> {
    let dirs = RunDirs::resolve(
        args.input_dir.clone(),
        args.output_dir.clone(),
        args.processed_dir.clone(),
        args.errors_dir.clone(),
    );
    dirs.ensure().context("create run directories")?;

    let database = args
        .db
        .clone()
        .unwrap_or_else(|| dirs.output.join("roster.db"));
    if let Some(parent) = database.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("create database directory {}", parent.display()))?;
    }
    let mut store = SqliteStore::open(&database)
        .with_context(|| format!("open player database {}", database.display()))?;

    let summary = pipeline::run(&dirs, &mut store)?;
    Ok(ImportResult {
        summary,
        database,
        errors_dir: dirs.errors,
    })
}

pub fn run_aliases() {
    let mut table = Table::new();
    table.set_header(vec!["Header", "Imported as"]);
    apply_table_style(&mut table);
    for (alias, canonical) in HEADER_ALIASES {
        table.add_row(vec![alias, canonical]);
    }
    println!("{table}");
}
