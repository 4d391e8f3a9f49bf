//! CSV ingestion utilities.
//!
//! This crate finds CSV files in a folder, derives a table name for each,
//! and reads them into raw text rows ready for type inference.
//!
//! # Features
//!
//! - **File Discovery**: List `.csv` files in a folder, sorted by name
//! - **Table Naming**: Derive a table stem from a file name (`sales-2023.csv` -> `sales_2023`)
//! - **CSV Reading**: Read a header plus equal-width rows, skipping ragged rows
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use csvload_ingest::{list_csv_files, read_csv_rows, table_stem_for_path};
//!
//! for path in list_csv_files(Path::new("./csv"))? {
//!     let table = table_stem_for_path(&path)?;
//!     let csv = read_csv_rows(&path)?;
//!     println!("{table}: {} columns, {} rows", csv.width(), csv.rows.len());
//! }
//! ```

mod discovery;
mod error;
mod reader;

// === Error Types ===
pub use error::{IngestError, Result};

// === CSV Reading ===
pub use reader::{CsvTable, read_csv_rows};

// === File Discovery ===
pub use discovery::{CSV_SUFFIX, list_csv_files, table_stem, table_stem_for_path};
