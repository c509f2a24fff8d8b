//! CSV file loading with encoding detection.
//!
//! Reads the whole file, decodes it to UTF-8 and parses it into a [`Table`]
//! using the first record as the header. Comma delimiter, RFC 4180 quoting.

use std::path::Path;

use crate::error::{CsvError, CsvResult};
use crate::models::Table;

/// Result of parsing with metadata
#[derive(Debug, Clone)]
pub struct ParseResult {
    pub table: Table,
    /// Detected or assumed encoding
    pub encoding: String,
}

/// Detect the encoding of raw bytes. Valid UTF-8 short-circuits the detector.
pub fn detect_encoding(bytes: &[u8]) -> String {
    if std::str::from_utf8(bytes).is_ok() {
        return "utf-8".to_string();
    }

    let charset = chardet::detect(bytes).0;

    // Normalize charset names
    match charset.to_lowercase().as_str() {
        "ascii" | "utf-8" | "utf8" => "utf-8".to_string(),
        "iso-8859-1" | "iso-8859-15" | "latin-1" | "latin1" => "iso-8859-1".to_string(),
        "windows-1252" | "cp1252" => "windows-1252".to_string(),
        other => other.to_string(),
    }
}

/// Decode bytes to a string using the given encoding label.
pub fn decode_content(bytes: &[u8], encoding: &str) -> String {
    let decoded = match encoding_rs::Encoding::for_label(encoding.as_bytes()) {
        Some(enc) => enc.decode(bytes).0.into_owned(),
        None => String::from_utf8_lossy(bytes).into_owned(),
    };

    match decoded.strip_prefix('\u{feff}') {
        Some(rest) => rest.to_string(),
        None => decoded,
    }
}

/// Parse CSV text into a table.
///
/// Blank lines, including lines holding only spaces or tabs, are skipped. Rows shorter than the header are padded with
/// empty cells; longer rows are rejected.
///
/// # Example
/// ```
/// use tmua_grades::parser::parse_csv;
///
/// let table = parse_csv("College ID,TMUA score\n1234567,6.5\n").unwrap();
/// assert_eq!(table.headers, vec!["College ID", "TMUA score"]);
/// assert_eq!(table.get(0, "TMUA score"), Some("6.5"));
/// ```
pub fn parse_csv(content: &str) -> CsvResult<Table> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(content.as_bytes());

    let mut records = reader
        .records()
        .filter(|record| !matches!(record, Ok(r) if is_blank(r)));

    let header = match records.next() {
        Some(record) => record.map_err(parse_error)?,
        None => return Err(CsvError::EmptyFile),
    };
    let mut table = Table::new(header.iter().map(str::to_string).collect());

    for record in records {
        let record = record.map_err(parse_error)?;
        if record.len() > table.headers.len() {
            return Err(CsvError::TooManyFields {
                line: record.position().map(|p| p.line()).unwrap_or(0),
                expected: table.headers.len(),
                found: record.len(),
            });
        }
        table.push_row(record.iter().map(str::to_string).collect());
    }

    Ok(table)
}

/// A line with no separators and nothing but whitespace.
fn is_blank(record: &csv::StringRecord) -> bool {
    record.len() == 1 && record[0].trim().is_empty()
}

/// Parse raw CSV bytes, detecting their encoding.
pub fn parse_bytes(bytes: &[u8]) -> CsvResult<ParseResult> {
    let encoding = detect_encoding(bytes);
    let content = decode_content(bytes, &encoding);
    let table = parse_csv(&content)?;

    Ok(ParseResult { table, encoding })
}

/// Read and parse a CSV file.
pub fn parse_csv_file<P: AsRef<Path>>(path: P) -> CsvResult<ParseResult> {
    let path = path.as_ref();
    let bytes = std::fs::read(path).map_err(|source| CsvError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    parse_bytes(&bytes)
}

fn parse_error(err: csv::Error) -> CsvError {
    let line = err.position().map(|p| p.line()).unwrap_or(0);
    CsvError::Parse {
        line,
        message: err.to_string(),
    }
}
