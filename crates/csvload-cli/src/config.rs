//! Run configuration.

use std::path::PathBuf;

use csvload_load::DbConfig;

/// Everything a load run needs, built once from the command line.
#[derive(Debug, Clone)]
pub struct LoadConfig {
    /// Folder scanned for `.csv` files.
    pub csv_folder: PathBuf,
    /// Destination database.
    pub db: DbConfig,
    /// Log statements instead of executing them.
    pub dry_run: bool,
}
