//! Comma-separated export of the parameter collection.
//!
//! Fields are written as-is: embedded commas, quotes and newlines are not
//! escaped, so a value containing one of them produces a malformed row.

use crate::HEADERS;
use crate::parameter::Parameter;

#[cfg(test)]
#[path = "csv_test.rs"]
mod csv_test;

pub const FALLBACK_FILE_NAME: &str = "download.csv";
pub const MIME_TYPE: &str = "text/csv";

/// Header line followed by one line per parameter, joined with `\n`.
#[must_use]
pub fn to_csv(parameters: &[Parameter]) -> String {
    let mut lines = Vec::with_capacity(parameters.len() + 1);
    lines.push(HEADERS.join(","));
    lines.extend(parameters.iter().map(|p| {
        format!("{},{},{},{}", p.id, p.name, p.kind, p.value)
    }));
    lines.join("\n")
}

/// File name to offer for the download, falling back when `requested` is empty.
#[must_use]
pub fn resolve_file_name(requested: &str) -> &str {
    if requested.is_empty() {
        FALLBACK_FILE_NAME
    } else {
        requested
    }
}
