//! Validation issue types.
//!
//! Each variant renders the operator-facing message that is recorded on the
//! rejected record; validation never raises, it only accumulates these.

use std::fmt;

/// One field-level finding on one row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationIssue {
    // Presence checks
    /// Required field is missing or blank.
    MissingRequired { field: String },

    // Format checks
    /// Email does not match the local@domain.tld shape.
    InvalidEmail,
    /// Phone number does not match the accepted shape.
    InvalidPhone,
    /// Birth date matches none of the accepted layouts.
    InvalidBirthDate,

    // Rating checks
    /// Rating could not be coerced to an integer.
    RatingNotInteger,
    /// Rating parsed to an integer but is negative.
    RatingNegative,
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationIssue::MissingRequired { field } => write!(f, "{field} is required"),
            ValidationIssue::InvalidEmail => f.write_str("invalid email"),
            ValidationIssue::InvalidPhone => f.write_str("invalid phone"),
            ValidationIssue::InvalidBirthDate => f.write_str("invalid date_of_birth"),
            ValidationIssue::RatingNotInteger => f.write_str("rating must be integer"),
            ValidationIssue::RatingNegative => f.write_str("rating must be non-negative"),
        }
    }
}
