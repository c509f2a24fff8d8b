//! CSV output.
//!
//! Tables are written with a header row, `\n` line endings and quoting only
//! where a field needs it. Files are staged next to the destination and
//! renamed into place, so the destination is either the previous file or the
//! complete new one.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::{WriteError, WriteResult};
use crate::models::Table;

/// Serialize a table to any writer.
pub fn write_table<W: Write>(table: &Table, writer: W) -> csv::Result<()> {
    let mut csv_writer = csv::WriterBuilder::new()
        .terminator(csv::Terminator::Any(b'\n'))
        .quote_style(csv::QuoteStyle::Necessary)
        .from_writer(writer);

    csv_writer.write_record(&table.headers)?;
    for row in &table.rows {
        csv_writer.write_record(row)?;
    }
    csv_writer.flush()?;
    Ok(())
}

/// Render a table as CSV text.
pub fn to_csv_string(table: &Table) -> csv::Result<String> {
    let mut buf = Vec::new();
    write_table(table, &mut buf)?;
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

/// Write a table to `path`, creating or replacing it.
pub fn write_csv_file<P: AsRef<Path>>(table: &Table, path: P) -> WriteResult<()> {
    let path = path.as_ref();
    let temp_path = staging_path(path);

    let file = fs::File::create(&temp_path).map_err(|source| WriteError::Create {
        path: path.to_path_buf(),
        source,
    })?;

    if let Err(source) = write_table(table, file) {
        let _ = fs::remove_file(&temp_path);
        return Err(WriteError::Csv {
            path: path.to_path_buf(),
            source,
        });
    }

    fs::rename(&temp_path, path).map_err(|source| {
        let _ = fs::remove_file(&temp_path);
        WriteError::Persist {
            path: path.to_path_buf(),
            source,
        }
    })
}

/// Hidden sibling of `path` used while writing, e.g. `out/.scores.csv.tmp`.
fn staging_path(path: &Path) -> PathBuf {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "output".to_string());
    path.with_file_name(format!(".{}.tmp", name))
}
