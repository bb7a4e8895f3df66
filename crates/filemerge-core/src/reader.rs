//! Delimited text reader
//!
//! Loads a whole delimited file into a [`RecordSet`]. Header resolution:
//!
//! | override headers | no_headers | headers used          | first row |
//! |------------------|------------|-----------------------|-----------|
//! | yes              | false      | override list         | skipped   |
//! | yes              | true       | override list         | data      |
//! | no               | true       | `col_1..col_N`        | data      |
//! | no               | false      | first row             | headers   |

use crate::error::{FilemergeError, Result};
use crate::record::{Record, RecordSet};
use log::debug;
use std::path::Path;

/// Options controlling how rows become records
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReadOptions {
    pub override_headers: Option<Vec<String>>,
    pub no_headers: bool,
    pub delimiter: char,
}

impl Default for ReadOptions {
    fn default() -> Self {
        Self {
            override_headers: None,
            no_headers: false,
            delimiter: ',',
        }
    }
}

/// Translate a user-supplied delimiter into the literal character
///
/// Accepts a single ASCII character or one of the escape tokens `\t`,
/// `\n`, `\r`.
pub fn parse_delimiter(raw: &str) -> Result<char> {
    let delimiter = match raw {
        "\\t" => '\t',
        "\\n" => '\n',
        "\\r" => '\r',
        _ => {
            let mut chars = raw.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => c,
                _ => return Err(FilemergeError::InvalidDelimiter(raw.to_string())),
            }
        }
    };

    if !delimiter.is_ascii() {
        return Err(FilemergeError::InvalidDelimiter(raw.to_string()));
    }
    Ok(delimiter)
}

/// Split a comma-separated header list, trimming names and dropping empty ones
pub fn parse_headers(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|h| !h.is_empty())
        .map(str::to_string)
        .collect()
}

/// Read `path` into a record set
///
/// # Errors
///
/// - `Io` if the file cannot be read
/// - `Encoding` if the file is not UTF-8
/// - `CsvParse` if the delimited data is malformed
/// - `EmptyInput` if the file holds no rows
/// - `InvalidDelimiter` if the delimiter is not ASCII
pub fn read(path: &Path, options: &ReadOptions) -> Result<RecordSet> {
    let bytes = std::fs::read(path).map_err(|e| FilemergeError::io(path, e))?;
    let content = String::from_utf8(bytes).map_err(|e| FilemergeError::Encoding {
        path: path.to_path_buf(),
        reason: e.utf8_error().to_string(),
    })?;

    let rows = parse_rows(path, &content, options.delimiter)?;
    debug!("Read {} row(s) from {}", rows.len(), path.display());
    build_record_set(path, rows, options)
}

/// Split `content` into raw rows without any header handling
fn parse_rows(path: &Path, content: &str, delimiter: char) -> Result<Vec<Vec<String>>> {
    if !delimiter.is_ascii() {
        return Err(FilemergeError::InvalidDelimiter(delimiter.to_string()));
    }

    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter as u8)
        .has_headers(false)
        .flexible(true)
        .from_reader(content.as_bytes());

    let mut rows = Vec::new();
    for (row_idx, result) in reader.records().enumerate() {
        let record = result.map_err(|e| FilemergeError::CsvParse {
            path: path.to_path_buf(),
            reason: format!("row {}: {}", row_idx + 1, e),
        })?;
        let mut row: Vec<String> = record.iter().map(str::to_string).collect();
        // A line-terminator delimiter turns the final newline into an empty last field
        if matches!(delimiter, '\n' | '\r')
            && row.len() > 1
            && row.last().is_some_and(String::is_empty)
        {
            row.pop();
        }
        rows.push(row);
    }
    Ok(rows)
}

fn build_record_set(
    path: &Path,
    mut rows: Vec<Vec<String>>,
    options: &ReadOptions,
) -> Result<RecordSet> {
    if rows.is_empty() {
        return Err(FilemergeError::EmptyInput {
            path: path.to_path_buf(),
        });
    }

    let headers = match (&options.override_headers, options.no_headers) {
        (Some(headers), false) => {
            rows.remove(0);
            headers.clone()
        }
        (Some(headers), true) => headers.clone(),
        (None, true) => (1..=rows[0].len()).map(|n| format!("col_{}", n)).collect(),
        (None, false) => rows.remove(0),
    };

    let records = rows.iter().map(|row| to_record(&headers, row)).collect();
    Ok(RecordSet::new(headers, records))
}

fn to_record(headers: &[String], row: &[String]) -> Record {
    let mut record = Record::new();
    for (j, header) in headers.iter().enumerate() {
        let value = row.get(j).map(String::as_str).unwrap_or("");
        record.insert(header.as_str(), value);
    }
    record
}
