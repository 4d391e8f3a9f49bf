//! Command execution: choose a sink and run the batch.

use anyhow::{Context, Result};
use tracing::{info, info_span};

use csvload_cli::config::LoadConfig;
use csvload_cli::pipeline::{BatchResult, load_folder};
use csvload_load::{DryRunSink, MySqlSink};

pub fn run_load(config: &LoadConfig) -> Result<BatchResult> {
    let span = info_span!("load", folder = %config.csv_folder.display());
    let _guard = span.enter();

    if config.dry_run {
        info!("dry run: statements are logged, not executed");
        let mut sink = DryRunSink::new();
        let result = load_folder(&config.csv_folder, &mut sink)?;
        info!(
            ddl_statements = sink.ddl_statements(),
            inserts = sink.inserted_rows(),
            "dry run complete"
        );
        return Ok(result);
    }

    let mut sink = MySqlSink::connect(&config.db).with_context(|| {
        format!(
            "connect to database {} at {} as {}",
            config.db.database, config.db.host, config.db.username
        )
    })?;
    let result = load_folder(&config.csv_folder, &mut sink);
    sink.close();
    result
}
