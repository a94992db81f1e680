use std::sync::LazyLock;

use regex::Regex;

/// Optional leading `+`, then digits with dashes, spaces and parentheses
/// allowed in the middle. Must start and end on a digit and be at least six
/// characters long overall.
static PHONE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\+?\d[\d\-\s()]{4,}\d$").expect("invalid phone regex")
});

/// Whether the trimmed value looks like a phone number.
pub fn is_valid_phone(value: &str) -> bool {
    PHONE_REGEX.is_match(value.trim())
}
