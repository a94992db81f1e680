use std::ffi::OsStr;
use std::path::Path;

/// Trims whitespace and a UTF-8 byte-order mark from a raw value.
pub(crate) fn normalize_cell(raw: &str) -> String {
    raw.trim().trim_matches('\u{feff}').to_string()
}

/// File name component of a path, for provenance metadata.
pub(crate) fn source_name(path: &Path) -> String {
    path.file_name()
        .and_then(OsStr::to_str)
        .unwrap_or("")
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_cell() {
        assert_eq!(normalize_cell("  value  "), "value");
        assert_eq!(normalize_cell("\u{feff}email"), "email");
        assert_eq!(normalize_cell(""), "");
    }

    #[test]
    fn test_source_name() {
        assert_eq!(source_name(Path::new("/import/players.csv")), "players.csv");
    }
}
