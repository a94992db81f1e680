//! Source-file discovery and extraction.
//!
//! This crate finds importable files in a drop directory and reads them into
//! loosely typed tables: CSV files as text cells, Excel workbooks sheet by
//! sheet with a provenance column naming the sheet each row came from.
//!
//! ```ignore
//! use roster_ingest::{extract, list_input_files};
//!
//! for path in list_input_files(input_dir)? {
//!     let (table, metadata) = extract(&path)?;
//!     // normalize, validate, load ...
//! }
//! ```

mod csv_file;
mod discovery;
mod error;
mod extract;
mod util;
mod workbook;

// === Error Types ===
pub use error::{IngestError, Result};

// === Discovery ===
pub use discovery::{SourceFormat, list_input_files};

// === Extraction ===
pub use csv_file::extract_csv;
pub use extract::extract;
pub use workbook::{extract_workbook, table_from_sheets};
