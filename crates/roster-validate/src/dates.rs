//! Birth-date parsing.
//!
//! Accepts a small set of layouts and tries them in a fixed order, so an
//! ambiguous value like `04/05/2023` always resolves the same way (here:
//! day-first, 2023-05-04).

use chrono::NaiveDate;

/// Accepted layouts, tried in order.
const DATE_FORMATS: [&str; 4] = ["%Y-%m-%d", "%d.%m.%Y", "%Y/%m/%d", "%d/%m/%Y"];

/// Parse a birth date, returning the first layout that matches.
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    let trimmed = value.trim();
    for fmt in &DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(trimmed, fmt) {
            return Some(date);
        }
    }
    None
}

pub fn is_valid_date(value: &str) -> bool {
    parse_date(value).is_some()
}
