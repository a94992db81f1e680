//! Canonical column names shared across the pipeline.

pub const FIRST_NAME: &str = "first_name";
pub const LAST_NAME: &str = "last_name";
pub const EMAIL: &str = "email";
pub const PHONE_NUMBER: &str = "phone_number";
pub const DATE_OF_BIRTH: &str = "date_of_birth";
pub const RATING: &str = "rating";

/// Provenance column added to workbook rows during extraction.
pub const SHEET_COLUMN: &str = "__sheet";

/// Column appended last to rejected-record artifacts.
pub const ERRORS_COLUMN: &str = "_errors";

/// Fields that must be present and non-blank for a row to import.
pub const REQUIRED_FIELDS: [&str; 3] = [FIRST_NAME, LAST_NAME, EMAIL];
