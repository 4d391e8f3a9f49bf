//! CSV file reading into raw text rows.

use std::fs::File;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord, Trim};

use crate::error::{IngestError, Result};

/// Header plus data rows read from one CSV file.
///
/// Every row in `rows` has exactly `header.len()` values. Rows that did not
/// match the header width were dropped while reading and are counted in
/// `skipped_rows`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CsvTable {
    /// Column names from the first line, in file order.
    pub header: Vec<String>,
    /// Raw cell values, one vector per retained row.
    pub rows: Vec<Vec<String>>,
    /// Number of ragged rows that were skipped.
    pub skipped_rows: usize,
}

impl CsvTable {
    /// Returns the number of columns.
    pub fn width(&self) -> usize {
        self.header.len()
    }

    /// Returns true if no data rows were retained.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Reads a CSV file into a header and equal-width text rows.
///
/// The first record is the header and is mandatory. Later records may have
/// any number of fields; records whose field count differs from the header
/// are skipped with a warning. Values are kept verbatim (no trimming).
pub fn read_csv_rows(path: &Path) -> Result<CsvTable> {
    let file = File::open(path).map_err(|e| IngestError::from_open(path, e))?;

    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(Trim::None)
        .from_reader(file);
    let mut records = reader.records();

    let header = match records.next() {
        Some(record) => header_names(&record.map_err(|e| csv_error(path, &e))?),
        None => {
            return Err(IngestError::EmptyCsv {
                path: path.to_path_buf(),
            });
        }
    };

    let mut rows: Vec<Vec<String>> = Vec::new();
    let mut skipped_rows = 0usize;
    for record_result in records {
        let record = record_result.map_err(|e| csv_error(path, &e))?;
        if record.len() != header.len() {
            skipped_rows += 1;
            let line = record.position().map(csv::Position::line);
            tracing::warn!(
                path = %path.display(),
                line = ?line,
                expected = header.len(),
                found = record.len(),
                "skipping row with mismatched field count"
            );
            tracing::debug!(path = %path.display(), row = ?record, "skipped row values");
            continue;
        }
        rows.push(record.iter().map(str::to_owned).collect());
    }

    tracing::debug!(
        path = %path.display(),
        columns = header.len(),
        rows = rows.len(),
        skipped_rows,
        "read csv"
    );

    Ok(CsvTable {
        header,
        rows,
        skipped_rows,
    })
}

/// Converts the header record into column names.
fn header_names(record: &StringRecord) -> Vec<String> {
    record
        .iter()
        .enumerate()
        .map(|(idx, name)| {
            // Skip BOM if present
            if idx == 0 {
                name.strip_prefix('\u{feff}').unwrap_or(name).to_owned()
            } else {
                name.to_owned()
            }
        })
        .collect()
}

fn csv_error(path: &Path, err: &csv::Error) -> IngestError {
    IngestError::CsvParse {
        path: path.to_path_buf(),
        message: err.to_string(),
    }
}
