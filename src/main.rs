use anyhow::Context;
use chrono::Utc;
use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use tracing::Instrument;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};
use uuid::Uuid;

use order_etl::config::Cli;
use order_etl::pipeline::{FilterSpec, Pipeline};
use order_etl::reader;
use order_etl::report::RunReport;
use order_etl::sinks::{CsvFileSink, PostgresSink, PostgresSinkConfig, Sink};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Default to INFO, overridable with RUST_LOG
    // Example: RUST_LOG=order_etl=trace order_etl Complete O
    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true))
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,order_etl=debug")),
        )
        .init();

    let filter = match cli.filter_spec() {
        Ok(filter) => filter,
        Err(e) => Cli::command().error(ErrorKind::ValueValidation, e).exit(),
    };

    let run_id = Uuid::new_v4();
    let span = tracing::info_span!("run", run_id = %run_id);

    let report = run(&cli, filter, run_id).instrument(span).await?;

    tracing::info!(
        run_id = %report.run_id,
        orders = report.counts.orders_aggregated,
        elapsed_ms = report.elapsed_ms(),
        "Run complete"
    );

    Ok(())
}

/// load -> transform -> write, aborting on the first failure.
async fn run(cli: &Cli, filter: FilterSpec, run_id: Uuid) -> anyhow::Result<RunReport> {
    let started_at = Utc::now();
    tracing::info!(
        orders = %cli.orders.display(),
        items = %cli.items.display(),
        filter = %filter,
        "Starting order totals run"
    );

    // === 1. Extract ===
    let raw_orders = reader::read_rows(&cli.orders).await?;
    let raw_items = reader::read_rows(&cli.items).await?;

    // === 2. Transform ===
    let output = Pipeline::new(filter).run(&raw_orders, &raw_items)?;

    // === 3. Load ===
    // Sinks are built only once the full result exists.
    let mut sinks: Vec<Box<dyn Sink>> = vec![Box::new(CsvFileSink::new(&cli.output))];

    match &cli.database_url {
        Some(url) => {
            let config = PostgresSinkConfig::new(url.as_str(), cli.table.as_str())?;
            let sink = PostgresSink::connect(config)
                .await
                .context("Failed to connect to PostgreSQL")?;
            sinks.push(Box::new(sink));
        }
        None => tracing::info!("DATABASE_URL not set, skipping database sink"),
    }

    let mut report = RunReport::new(run_id, started_at, filter, output.counts);

    for sink in sinks.iter_mut() {
        let written = sink
            .write(&output.aggregates)
            .await
            .with_context(|| format!("Sink {} failed", sink.name()))?;
        tracing::info!(sink = sink.name(), rows = written, "Sink written");
        report.record_sink(sink.name(), written);
    }

    let report = report.finish();
    if let Some(path) = &cli.report {
        report.write_json(path).await?;
        tracing::debug!(path = %path.display(), "Run report written");
    }

    Ok(report)
}
