use std::fmt;

use serde::{Deserialize, Serialize};

/// Largest float magnitude below which every integral value is exact.
const MAX_EXACT_INT_FLOAT: f64 = 9_007_199_254_740_992.0;

/// A single cell as read from a source file.
///
/// CSV extraction only ever produces `Text` and `Empty`; workbook extraction
/// keeps the typed values the sheet stores, so a numeric rating column stays
/// numeric instead of round-tripping through strings.
///
/// Serializes untagged: `Empty` becomes JSON `null`, numbers and booleans
/// keep their native JSON form, and text stays a string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CellValue {
    /// Missing or blank cell.
    Empty,
    /// Whole-number cell.
    Int(i64),
    /// Floating-point cell.
    Float(f64),
    /// Boolean cell.
    Bool(bool),
    /// Free text, including every field read from CSV.
    Text(String),
}

impl CellValue {
    pub fn text(value: impl Into<String>) -> Self {
        CellValue::Text(value.into())
    }

    /// True when the cell carries no usable value: `Empty`, or text that is
    /// empty after trimming whitespace.
    pub fn is_blank(&self) -> bool {
        match self {
            CellValue::Empty => true,
            CellValue::Text(value) => value.trim().is_empty(),
            _ => false,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            CellValue::Text(value) => Some(value),
            _ => None,
        }
    }
}

impl fmt::Display for CellValue {
    /// Renders the cell the way it appears in error artifacts and validation:
    /// integral floats collapse to their integer form (`7.0` renders as `7`),
    /// empty cells render as the empty string.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Empty => Ok(()),
            CellValue::Text(value) => f.write_str(value),
            CellValue::Int(value) => write!(f, "{value}"),
            CellValue::Float(value) => {
                if value.is_finite() && value.fract() == 0.0 && value.abs() < MAX_EXACT_INT_FLOAT {
                    write!(f, "{}", *value as i64)
                } else {
                    write!(f, "{value}")
                }
            }
            CellValue::Bool(value) => write!(f, "{value}"),
        }
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        CellValue::Text(value.to_string())
    }
}

impl From<String> for CellValue {
    fn from(value: String) -> Self {
        CellValue::Text(value)
    }
}
