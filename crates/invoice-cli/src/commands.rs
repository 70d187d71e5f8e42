use std::time::{Duration, Instant};

use anyhow::{Context, Result, anyhow};
use tracing::{debug, info, info_span};

use invoice_core::{MigrationOptions, Migrator};
use invoice_ingest::load_invoices;
use invoice_store::{MemoryStore, RestStore, StoreConfig};

use crate::cli::Cli;
use invoice_cli::types::{RunResult, RunSummary};

pub fn run_migration(cli: &Cli) -> Result<RunSummary> {
    let run_span = info_span!("run", input = %cli.input.display(), table = %cli.table);
    let _run_guard = run_span.enter();

    let load_start = Instant::now();
    let dataset = load_invoices(&cli.input)
        .with_context(|| format!("load invoice dataset {}", cli.input.display()))?;
    info!(
        records = dataset.len(),
        sha256 = %dataset.sha256,
        duration_ms = load_start.elapsed().as_millis(),
        "dataset loaded"
    );

    let options = MigrationOptions::default()
        .with_table(cli.table.clone())
        .with_batch_size(cli.batch_size);

    let result = if cli.dry_run {
        // Planning never reaches the store.
        let migrator = Migrator::new(MemoryStore::new()).with_options(options);
        let plan = migrator.plan(&dataset.records).context("plan migration")?;
        debug!(batches = plan.batch_count(), "dry run planned");
        RunResult::Plan {
            batch_sizes: plan.batch_sizes,
        }
    } else {
        let store = build_store(cli)?;
        let migrator = Migrator::new(store).with_options(options);
        RunResult::Migration(migrator.migrate(&dataset.records))
    };

    Ok(RunSummary {
        input: cli.input.clone(),
        table: cli.table.clone(),
        sha256: dataset.sha256,
        records: dataset.records.len(),
        result,
    })
}

fn build_store(cli: &Cli) -> Result<RestStore> {
    let url = cli
        .url
        .clone()
        .ok_or_else(|| anyhow!("store URL missing: pass --url or set SUPABASE_URL"))?;
    let api_key = cli
        .api_key
        .clone()
        .ok_or_else(|| anyhow!("API key missing: pass --api-key or set SUPABASE_KEY"))?;
    let config =
        StoreConfig::new(url, api_key).with_timeout(Duration::from_secs(cli.timeout_secs));
    debug!(?config, "connecting to store");
    RestStore::new(config).context("create store client")
}
