use std::borrow::Cow;
use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::record::{KeyOrder, Record};

/// Errors that can occur while writing a rendered table to disk.
#[derive(Debug, Error)]
pub enum WriteError {
    /// Failed to write the output file.
    #[error("failed to write output file: {0}")]
    Io(#[from] std::io::Error),
}

/// Formatting switches for the delimited table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TableOptions {
    /// Emit a blank row after every data row (never after the header).
    pub blank_row_after_record: bool,
    /// Suppress the header row of column names.
    pub skip_header: bool,
}

/// Render records into a semicolon-delimited table, one row per record with
/// one cell per key in `keys` order. Missing keys render as empty cells.
///
/// Returns `None` when there is nothing to render (no records or no keys);
/// callers must not create an output file in that case.
pub fn render(records: &[Record], keys: &KeyOrder, options: &TableOptions) -> Option<String> {
    if records.is_empty() || keys.is_empty() {
        return None;
    }

    let mut out = String::new();

    if !options.skip_header {
        push_row(&mut out, keys.iter().map(escape_cell));
    }

    for record in records {
        push_row(
            &mut out,
            keys.iter()
                .map(|key| escape_cell(record.get(key).unwrap_or(""))),
        );
        if options.blank_row_after_record {
            out.push('\n');
        }
    }

    Some(out)
}

/// Render the table and write it to `path`, overwriting any existing file.
///
/// Returns `Ok(false)` without touching the filesystem when there is nothing
/// to render. No partial-write recovery: a failure mid-write leaves whatever
/// the OS got to.
pub fn write_file(
    records: &[Record],
    keys: &KeyOrder,
    options: &TableOptions,
    path: &Path,
) -> Result<bool, WriteError> {
    match render(records, keys, options) {
        Some(table) => {
            fs::write(path, table)?;
            Ok(true)
        }
        None => Ok(false),
    }
}

fn push_row<'a>(out: &mut String, cells: impl Iterator<Item = Cow<'a, str>>) {
    let row: Vec<Cow<'_, str>> = cells.collect();
    out.push_str(&row.join(";"));
    out.push('\n');
}

/// Quote a cell only when it would otherwise break the row structure.
/// Embedded quotes are doubled, CSV style.
fn escape_cell(cell: &str) -> Cow<'_, str> {
    if cell.contains([';', '"', '\n', '\r']) {
        Cow::Owned(format!("\"{}\"", cell.replace('"', "\"\"")))
    } else {
        Cow::Borrowed(cell)
    }
}

#[cfg(test)]
mod tests {
    use super::escape_cell;

    #[test]
    fn escape_cell_quotes_only_when_needed() {
        assert_eq!(escape_cell("plain"), "plain");
        assert_eq!(escape_cell("a;b"), "\"a;b\"");
        assert_eq!(escape_cell("say \"hi\""), "\"say \"\"hi\"\"\"");
    }
}
