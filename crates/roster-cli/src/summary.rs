//! End-of-run report printed to stdout.

use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use roster_cli::pipeline::FileStatus;

use crate::types::ImportResult;

pub fn print_summary(result: &ImportResult) {
    let summary = &result.summary;
    println!("Database: {}", result.database.display());
    if summary.records_rejected > 0 {
        println!("Error artifacts: {}", result.errors_dir.display());
    }
    if summary.files.is_empty() {
        println!("No input files found.");
        return;
    }

    let mut table = Table::new();
    table.set_header(vec![
        header_cell("File"),
        header_cell("Status"),
        header_cell("Created"),
        header_cell("Rejected"),
        header_cell("Archived"),
        header_cell("Error"),
    ]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Center);
    align_column(&mut table, 2, CellAlignment::Right);
    align_column(&mut table, 3, CellAlignment::Right);
    align_column(&mut table, 4, CellAlignment::Center);
    for outcome in &summary.files {
        table.add_row(vec![
            Cell::new(&outcome.file),
            status_cell(outcome.status),
            Cell::new(outcome.created),
            count_cell(outcome.rejected),
            flag_cell(outcome.archived),
            match &outcome.error {
                Some(message) => Cell::new(message).fg(Color::Red),
                None => dim_cell("-"),
            },
        ]);
    }
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new(format!(
            "{}/{}",
            summary.files_processed,
            summary.files.len()
        ))
        .add_attribute(Attribute::Bold),
        Cell::new(summary.records_created).add_attribute(Attribute::Bold),
        count_cell(summary.records_rejected).add_attribute(Attribute::Bold),
        dim_cell("-"),
        dim_cell("-"),
    ]);
    println!("{table}");
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn status_cell(status: FileStatus) -> Cell {
    match status {
        FileStatus::Imported => Cell::new("imported").fg(Color::Green),
        FileStatus::Failed => Cell::new("failed")
            .fg(Color::Red)
            .add_attribute(Attribute::Bold),
    }
}

fn count_cell(count: usize) -> Cell {
    if count > 0 {
        Cell::new(count).fg(Color::Yellow)
    } else {
        dim_cell(count)
    }
}

fn flag_cell(set: bool) -> Cell {
    if set {
        Cell::new("✓").fg(Color::Green)
    } else {
        dim_cell("-")
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
