use clap::Parser;
use roster_ocr::cli::Args;
use roster_ocr::config::Config;
use roster_ocr::engines;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Initialize tracing; stdout is reserved for the final message
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| args.log_level.clone().into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = Config::from(args);

    tracing::info!("Starting roster-ocr v{}", env!("CARGO_PKG_VERSION"));

    roster_ocr::validate_input(&config)?;
    let engine = engines::create_engine(&config)?;
    let summary = roster_ocr::run(&config, engine)?;

    tracing::info!(
        "{} records from {}/{} files",
        summary.outcome.records.len(),
        summary.outcome.files_processed,
        summary.outcome.files_matched
    );

    println!(
        "Player names with dates exported to {}",
        config.output.display()
    );

    Ok(())
}
