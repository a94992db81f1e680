//! Header alias table.
//!
//! Source files arrive with whatever column labels the exporting club tool
//! used. Labels are trimmed, lower-cased and looked up here; anything outside
//! the table passes through lower-cased, unchanged in meaning.

use roster_model::fields;

/// Alias table applied to lower-cased, trimmed headers.
pub const HEADER_ALIASES: [(&str, &str); 9] = [
    ("firstname", fields::FIRST_NAME),
    ("first name", fields::FIRST_NAME),
    ("lastname", fields::LAST_NAME),
    ("last name", fields::LAST_NAME),
    ("e-mail", fields::EMAIL),
    ("phone", fields::PHONE_NUMBER),
    ("phone number", fields::PHONE_NUMBER),
    ("dob", fields::DATE_OF_BIRTH),
    ("date of birth", fields::DATE_OF_BIRTH),
];

/// Canonical name for one raw header.
pub fn canonical_header(raw: &str) -> String {
    let key = raw.trim().to_lowercase();
    for (alias, canonical) in HEADER_ALIASES {
        if key == alias {
            return canonical.to_string();
        }
    }
    key
}

/// Maps each raw header to its canonical name, preserving source order.
pub fn normalize_headers(headers: &[String]) -> Vec<(String, String)> {
    headers
        .iter()
        .map(|header| (header.clone(), canonical_header(header)))
        .collect()
}
