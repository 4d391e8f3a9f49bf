//! CLI argument definitions for the CSV loader.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use clap_verbosity_flag::{InfoLevel, Verbosity};
use colorchoice_clap::Color;

use csvload_cli::config::LoadConfig;
use csvload_load::DbConfig;

#[derive(Parser)]
#[command(
    name = "csvload",
    version,
    about = "Load every CSV file in a folder into its own MySQL table",
    long_about = "Load every CSV file in a folder into its own MySQL table.\n\n\
                  Each file becomes a table named after the file (extension removed,\n\
                  '-' replaced by '_'). Column types are inferred from the first data\n\
                  row and existing tables are dropped and recreated."
)]
pub struct Cli {
    /// Folder to scan for CSV files.
    #[arg(
        long = "csv-folder",
        value_name = "DIR",
        env = "CSVLOAD_CSV_FOLDER",
        default_value = "./csv"
    )]
    pub csv_folder: PathBuf,

    /// Database username.
    #[arg(long = "db-username", env = "CSVLOAD_DB_USERNAME", default_value = "suicord")]
    pub db_username: String,

    /// Database password.
    #[arg(
        long = "db-password",
        env = "CSVLOAD_DB_PASSWORD",
        default_value = "suicord",
        hide_env_values = true
    )]
    pub db_password: String,

    /// Database host, optionally with a port (host:port).
    #[arg(long = "db-host", env = "CSVLOAD_DB_HOST", default_value = "localhost")]
    pub db_host: String,

    /// Database name.
    #[arg(long = "db-name", env = "CSVLOAD_DB_NAME", default_value = "suicord")]
    pub db_name: String,

    /// Infer schemas and log statements without connecting to the database.
    #[arg(long = "dry-run")]
    pub dry_run: bool,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for warnings only).
    #[command(flatten)]
    pub verbosity: Verbosity<InfoLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(long = "log-format", value_enum, default_value = "pretty")]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

impl Cli {
    /// Builds the immutable run configuration from parsed flags.
    pub fn load_config(&self) -> LoadConfig {
        LoadConfig {
            csv_folder: self.csv_folder.clone(),
            db: DbConfig {
                host: self.db_host.clone(),
                username: self.db_username.clone(),
                password: self.db_password.clone(),
                database: self.db_name.clone(),
            },
            dry_run: self.dry_run,
        }
    }
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["csvload"]).unwrap();
        let config = cli.load_config();

        assert_eq!(config.csv_folder, PathBuf::from("./csv"));
        assert_eq!(config.db.host, "localhost");
        assert_eq!(config.db.username, "suicord");
        assert_eq!(config.db.password, "suicord");
        assert_eq!(config.db.database, "suicord");
        assert!(!config.dry_run);
    }

    #[test]
    fn test_overrides() {
        let cli = Cli::try_parse_from([
            "csvload",
            "--csv-folder",
            "/data/exports",
            "--db-host",
            "db:3307",
            "--db-name",
            "metrics",
            "--dry-run",
        ])
        .unwrap();
        let config = cli.load_config();

        assert_eq!(config.csv_folder, PathBuf::from("/data/exports"));
        assert_eq!(config.db.host, "db:3307");
        assert_eq!(config.db.database, "metrics");
        assert!(config.dry_run);
    }
}
