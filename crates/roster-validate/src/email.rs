use std::sync::LazyLock;

use regex::Regex;

/// Deliberately loose shape check: something before the `@`, something after,
/// and at least one dot in the domain part. No whitespace anywhere.
static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("invalid email regex")
});

/// Whether the trimmed value looks like an email address.
pub fn is_valid_email(value: &str) -> bool {
    EMAIL_REGEX.is_match(value.trim())
}
