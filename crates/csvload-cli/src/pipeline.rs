//! Batch driver: discover, read, and load every CSV file in a folder.
//!
//! Files are processed one at a time in file-name order. The first error
//! aborts the batch; tables loaded before it stay loaded and later files are
//! not touched.

use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::{info, info_span};

use csvload_ingest::{list_csv_files, read_csv_rows, table_stem_for_path};
use csvload_load::{TableLoad, TableSink, build_table};

/// Outcome of loading one file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileLoad {
    pub path: PathBuf,
    pub load: TableLoad,
    /// Ragged rows dropped while reading.
    pub skipped_rows: usize,
}

/// Outcome of a complete batch.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchResult {
    pub csv_folder: PathBuf,
    pub files: Vec<FileLoad>,
}

impl BatchResult {
    pub fn tables_created(&self) -> usize {
        self.files.iter().filter(|f| !f.load.is_skipped()).count()
    }

    pub fn rows_inserted(&self) -> usize {
        self.files.iter().map(|f| f.load.rows_inserted()).sum()
    }
}

/// Loads every `.csv` file in `folder` through `sink`.
pub fn load_folder<S>(folder: &Path, sink: &mut S) -> Result<BatchResult>
where
    S: TableSink + ?Sized,
{
    let files = list_csv_files(folder)
        .with_context(|| format!("list CSV files in {}", folder.display()))?;
    info!(folder = %folder.display(), file_count = files.len(), "found CSV files");

    let mut result = BatchResult {
        csv_folder: folder.to_path_buf(),
        files: Vec::with_capacity(files.len()),
    };
    for path in files {
        result.files.push(load_file(&path, sink)?);
    }
    Ok(result)
}

/// Reads one CSV file and loads it into the table named after it.
pub fn load_file<S>(path: &Path, sink: &mut S) -> Result<FileLoad>
where
    S: TableSink + ?Sized,
{
    let table = table_stem_for_path(path)?;
    let span = info_span!("table", table = %table);
    let _guard = span.enter();
    let start = Instant::now();
    info!(file = %path.display(), "handling");

    let csv = read_csv_rows(path).with_context(|| format!("read {}", path.display()))?;
    let load = build_table(sink, &table, &csv.header, &csv.rows)
        .with_context(|| format!("load {} into table {table}", path.display()))?;

    info!(
        rows = load.rows_inserted(),
        skipped_rows = csv.skipped_rows,
        duration_ms = start.elapsed().as_millis(),
        "done"
    );
    Ok(FileLoad {
        path: path.to_path_buf(),
        load,
        skipped_rows: csv.skipped_rows,
    })
}
