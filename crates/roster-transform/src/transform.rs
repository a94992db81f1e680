//! Row normalization, validation and cohort partitioning.

use roster_model::{CellValue, RawTable, Record, RejectedRecord, fields};
use roster_validate::{is_valid_date, is_valid_email, is_valid_phone};

use crate::aliases::normalize_headers;
use crate::issue::ValidationIssue;

/// Valid and rejected cohorts of one source table.
///
/// Every row lands in exactly one cohort. `headers` are the canonical
/// headers in source order, with duplicates collapsed to their first
/// occurrence; error artifacts use them to keep column order stable.
#[derive(Debug, Clone, Default)]
pub struct TransformOutcome {
    pub headers: Vec<String>,
    pub valid: Vec<Record>,
    pub invalid: Vec<RejectedRecord>,
}

/// Normalizes headers, validates every row and splits the table into
/// valid and rejected cohorts, preserving row order within each.
pub fn transform_players(table: &RawTable) -> TransformOutcome {
    let header_map = normalize_headers(&table.headers);

    let mut headers: Vec<String> = Vec::new();
    for (_, canonical) in &header_map {
        if !headers.contains(canonical) {
            headers.push(canonical.clone());
        }
    }

    let mut outcome = TransformOutcome {
        headers,
        valid: Vec::new(),
        invalid: Vec::new(),
    };

    for row in &table.rows {
        // When two source columns collapse onto one canonical name, the
        // later column wins, matching source order.
        let mut record = Record::new();
        for (original, canonical) in &header_map {
            if let Some(cell) = row.get(original) {
                record.insert(canonical.clone(), cell.clone());
            }
        }

        let issues = validate_record(&mut record);
        if issues.is_empty() {
            outcome.valid.push(record);
        } else {
            outcome.invalid.push(RejectedRecord {
                record,
                errors: issues.iter().map(ToString::to_string).collect(),
            });
        }
    }

    outcome
}

/// Applies the field rules in a fixed order, mutating the record where the
/// rules normalize values (trimmed names, coerced rating).
fn validate_record(record: &mut Record) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();

    for field in [fields::FIRST_NAME, fields::LAST_NAME] {
        if let Some(CellValue::Text(value)) = record.get_mut(field) {
            let trimmed = value.trim();
            if trimmed.len() != value.len() {
                *value = trimmed.to_owned();
            }
        }
    }

    for field in fields::REQUIRED_FIELDS {
        if record.get(field).is_none_or(CellValue::is_blank) {
            issues.push(ValidationIssue::MissingRequired {
                field: field.to_string(),
            });
        }
    }

    // The format check runs whenever the column exists, so a blank email
    // accumulates "email is required" and "invalid email" together.
    if let Some(cell) = record.get(fields::EMAIL) {
        if !is_valid_email(&cell.to_string()) {
            issues.push(ValidationIssue::InvalidEmail);
        }
    }

    if let Some(cell) = record.get(fields::PHONE_NUMBER) {
        if !cell.is_blank() && !is_valid_phone(&cell.to_string()) {
            issues.push(ValidationIssue::InvalidPhone);
        }
    }

    if let Some(cell) = record.get(fields::DATE_OF_BIRTH) {
        if !cell.is_blank() && !is_valid_date(&cell.to_string()) {
            issues.push(ValidationIssue::InvalidBirthDate);
        }
    }

    if let Some(cell) = record.get(fields::RATING) {
        if !cell.is_blank() {
            match coerce_rating(cell) {
                Some(rating) => {
                    record.insert(fields::RATING.to_string(), CellValue::Int(rating));
                    if rating < 0 {
                        issues.push(ValidationIssue::RatingNegative);
                    }
                }
                None => issues.push(ValidationIssue::RatingNotInteger),
            }
        }
    }

    issues
}

/// Integer coercion for the rating cell. Floats truncate toward zero;
/// text must parse as a whole number.
fn coerce_rating(cell: &CellValue) -> Option<i64> {
    match cell {
        CellValue::Int(value) => Some(*value),
        CellValue::Float(value) => {
            if value.is_finite() && value.abs() < 9_007_199_254_740_992.0 {
                Some(value.trunc() as i64)
            } else {
                None
            }
        }
        CellValue::Bool(value) => Some(i64::from(*value)),
        CellValue::Text(value) => value.trim().parse::<i64>().ok(),
        CellValue::Empty => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(headers: &[&str], rows: &[&[&str]]) -> RawTable {
        let mut table = RawTable::new(headers.iter().map(ToString::to_string).collect());
        for cells in rows {
            let mut row = Record::new();
            for (header, value) in headers.iter().zip(cells.iter()) {
                let cell = if value.is_empty() {
                    CellValue::Empty
                } else {
                    CellValue::text(*value)
                };
                row.insert((*header).to_string(), cell);
            }
            table.push_row(row);
        }
        table
    }

    #[test]
    fn test_complete_row_is_valid() {
        let table = table(
            &["First Name", "Last Name", "E-Mail", "rating"],
            &[&["Mara", "Voss", "mara@example.com", "1500"]],
        );
        let outcome = transform_players(&table);

        assert_eq!(
            outcome.headers,
            vec!["first_name", "last_name", "email", "rating"]
        );
        assert_eq!(outcome.valid.len(), 1);
        assert!(outcome.invalid.is_empty());
        let record = &outcome.valid[0];
        assert_eq!(record.get("first_name"), Some(&CellValue::text("Mara")));
        // Coercion replaces the raw text with the parsed integer.
        assert_eq!(record.get("rating"), Some(&CellValue::Int(1500)));
    }

    #[test]
    fn test_missing_required_fields_name_each_field() {
        let table = table(
            &["first_name", "last_name", "email"],
            &[&["", "Lee", "a@b.com"]],
        );
        let outcome = transform_players(&table);

        assert!(outcome.valid.is_empty());
        assert_eq!(outcome.invalid.len(), 1);
        assert_eq!(outcome.invalid[0].errors, vec!["first_name is required"]);
    }

    #[test]
    fn test_blank_email_collects_both_messages() {
        let table = table(
            &["first_name", "last_name", "email"],
            &[&["Mara", "Voss", ""]],
        );
        let outcome = transform_players(&table);

        assert_eq!(
            outcome.invalid[0].errors,
            vec!["email is required", "invalid email"]
        );
    }

    #[test]
    fn test_email_shape() {
        let rows: &[&[&str]] = &[
            &["Ana", "Ruiz", "a@b"],
            &["Ben", "Okafor", "a@b.co"],
        ];
        let outcome = transform_players(&table(&["first_name", "last_name", "email"], rows));

        assert_eq!(outcome.valid.len(), 1);
        assert_eq!(outcome.valid[0].get("email"), Some(&CellValue::text("a@b.co")));
        assert_eq!(outcome.invalid.len(), 1);
        assert_eq!(outcome.invalid[0].errors, vec!["invalid email"]);
    }

    #[test]
    fn test_rating_rules() {
        let rows: &[&[&str]] = &[
            &["Ana", "Ruiz", "ana@x.io", "abc"],
            &["Ben", "Okafor", "ben@x.io", "-5"],
            &["Cleo", "Brandt", "cleo@x.io", "7"],
            &["Dana", "Ito", "dana@x.io", ""],
        ];
        let outcome = transform_players(&table(
            &["first_name", "last_name", "email", "rating"],
            rows,
        ));

        assert_eq!(outcome.invalid.len(), 2);
        assert_eq!(outcome.invalid[0].errors, vec!["rating must be integer"]);
        assert_eq!(outcome.invalid[1].errors, vec!["rating must be non-negative"]);
        // The negative rating is still coerced on the rejected record.
        assert_eq!(
            outcome.invalid[1].record.get("rating"),
            Some(&CellValue::Int(-5))
        );

        assert_eq!(outcome.valid.len(), 2);
        assert_eq!(outcome.valid[0].get("rating"), Some(&CellValue::Int(7)));
        // Blank rating is kept blank, not coerced.
        assert_eq!(outcome.valid[1].get("rating"), Some(&CellValue::Empty));
    }

    #[test]
    fn test_float_ratings_truncate_toward_zero() {
        let mut table = RawTable::new(vec![
            "first_name".to_string(),
            "last_name".to_string(),
            "email".to_string(),
            "rating".to_string(),
        ]);
        let mut row = Record::new();
        row.insert("first_name".to_string(), CellValue::text("Mara"));
        row.insert("last_name".to_string(), CellValue::text("Voss"));
        row.insert("email".to_string(), CellValue::text("mara@example.com"));
        row.insert("rating".to_string(), CellValue::Float(7.9));
        table.push_row(row);

        let outcome = transform_players(&table);
        assert_eq!(outcome.valid.len(), 1);
        assert_eq!(outcome.valid[0].get("rating"), Some(&CellValue::Int(7)));
    }

    #[test]
    fn test_text_float_rating_is_rejected() {
        let table = table(
            &["first_name", "last_name", "email", "rating"],
            &[&["Mara", "Voss", "mara@example.com", "7.5"]],
        );
        let outcome = transform_players(&table);
        assert_eq!(outcome.invalid[0].errors, vec!["rating must be integer"]);
    }

    #[test]
    fn test_phone_and_birth_date_checked_only_when_non_blank() {
        let rows: &[&[&str]] = &[
            &["Ana", "Ruiz", "ana@x.io", "", ""],
            &["Ben", "Okafor", "ben@x.io", "12345", "1990-13-40"],
            &["Cleo", "Brandt", "cleo@x.io", "+49 170 1234567", "15.03.1990"],
        ];
        let outcome = transform_players(&table(
            &["first_name", "last_name", "email", "phone_number", "date_of_birth"],
            rows,
        ));

        assert_eq!(outcome.valid.len(), 2);
        assert_eq!(outcome.invalid.len(), 1);
        assert_eq!(
            outcome.invalid[0].errors,
            vec!["invalid phone", "invalid date_of_birth"]
        );
    }

    #[test]
    fn test_names_are_trimmed_on_both_cohorts() {
        let rows: &[&[&str]] = &[
            &["  Mara  ", "Voss", "mara@example.com"],
            &["  Jon ", "Li", "broken-email"],
        ];
        let mut table = RawTable::new(vec![
            "first_name".to_string(),
            "last_name".to_string(),
            "email".to_string(),
        ]);
        for cells in rows {
            let mut row = Record::new();
            row.insert("first_name".to_string(), CellValue::text(cells[0]));
            row.insert("last_name".to_string(), CellValue::text(cells[1]));
            row.insert("email".to_string(), CellValue::text(cells[2]));
            table.push_row(row);
        }

        let outcome = transform_players(&table);
        assert_eq!(
            outcome.valid[0].get("first_name"),
            Some(&CellValue::text("Mara"))
        );
        assert_eq!(
            outcome.invalid[0].record.get("first_name"),
            Some(&CellValue::text("Jon"))
        );
    }

    #[test]
    fn test_duplicate_canonical_columns_later_wins() {
        let mut table = RawTable::new(vec![
            "first_name".to_string(),
            "last_name".to_string(),
            "Phone".to_string(),
            "phone_number".to_string(),
            "email".to_string(),
        ]);
        let mut row = Record::new();
        row.insert("first_name".to_string(), CellValue::text("Mara"));
        row.insert("last_name".to_string(), CellValue::text("Voss"));
        row.insert("Phone".to_string(), CellValue::text("111111"));
        row.insert("phone_number".to_string(), CellValue::text("222222"));
        row.insert("email".to_string(), CellValue::text("mara@example.com"));
        table.push_row(row);

        let outcome = transform_players(&table);
        assert_eq!(
            outcome.headers,
            vec!["first_name", "last_name", "phone_number", "email"]
        );
        assert_eq!(
            outcome.valid[0].get("phone_number"),
            Some(&CellValue::text("222222"))
        );
    }

    #[test]
    fn test_every_row_lands_in_exactly_one_cohort() {
        let rows: &[&[&str]] = &[
            &["Ana", "Ruiz", "ana@x.io", "1200"],
            &["", "", "", ""],
            &["Ben", "Okafor", "not-an-email", "abc"],
            &["Cleo", "Brandt", "cleo@x.io", ""],
        ];
        let table = table(&["first_name", "last_name", "email", "rating"], rows);
        let outcome = transform_players(&table);

        assert_eq!(outcome.valid.len() + outcome.invalid.len(), table.len());
        assert_eq!(outcome.valid.len(), 2);
        assert_eq!(
            outcome.invalid[0].errors,
            vec![
                "first_name is required",
                "last_name is required",
                "email is required",
                "invalid email"
            ]
        );
        assert_eq!(
            outcome.invalid[1].errors,
            vec!["invalid email", "rating must be integer"]
        );
    }
}
