use std::fs;
use std::path::Path;

/// Whole file as UTF-8; invalid UTF-8 surfaces as an `InvalidData` io error.
pub(super) fn extract(path: &Path) -> std::io::Result<String> {
    fs::read_to_string(path)
}
