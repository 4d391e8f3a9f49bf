//! CSV file discovery and table naming.

use std::path::{Path, PathBuf};

use crate::error::{IngestError, Result};

/// File name suffix that marks a loadable CSV file.
pub const CSV_SUFFIX: &str = ".csv";

/// Lists all CSV files in a directory.
///
/// Only regular files whose name ends with `.csv` are returned. The result
/// is sorted by file name so processing order does not depend on the
/// platform's directory enumeration order.
pub fn list_csv_files(dir: &Path) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Err(IngestError::DirectoryNotFound {
            path: dir.to_path_buf(),
        });
    }

    let mut files = Vec::new();

    let entries = std::fs::read_dir(dir).map_err(|e| IngestError::DirectoryRead {
        path: dir.to_path_buf(),
        source: e,
    })?;

    for entry_result in entries {
        let entry = entry_result.map_err(|e| IngestError::DirectoryRead {
            path: dir.to_path_buf(),
            source: e,
        })?;

        let path = entry.path();

        // Skip directories
        if !path.is_file() {
            continue;
        }

        let is_csv = path
            .file_name()
            .and_then(|name| name.to_str())
            .is_some_and(|name| name.ends_with(CSV_SUFFIX));

        if is_csv {
            files.push(path);
        } else {
            tracing::debug!(path = %path.display(), "ignoring non-csv file");
        }
    }

    files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));

    Ok(files)
}

/// Derives a table name from a CSV file name.
///
/// Strips the trailing `.csv` and replaces every `-` with `_`, so
/// `sales-2023.csv` becomes `sales_2023`.
pub fn table_stem(file_name: &str) -> String {
    file_name
        .strip_suffix(CSV_SUFFIX)
        .unwrap_or(file_name)
        .replace('-', "_")
}

/// Derives a table name from the file name component of `path`.
pub fn table_stem_for_path(path: &Path) -> Result<String> {
    path.file_name()
        .and_then(|name| name.to_str())
        .filter(|name| name.ends_with(CSV_SUFFIX))
        .map(table_stem)
        .ok_or_else(|| IngestError::NotCsvFile {
            path: path.to_path_buf(),
        })
}
