//! CLI entry point for the population rollup tool.
//!
//! Reads a tract-level census file and writes one summary row per core area.

use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::Parser;
use population_rollup::rollup::RollupProcess;
use tracing::info;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{
    EnvFilter, Layer,
    filter::LevelFilter,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

#[derive(Parser)]
#[command(name = "population_rollup", version)]
#[command(about = "Roll census tract population records up to core areas", long_about = None)]
struct Cli {
    /// Tract-level input file; the first line is treated as a header
    #[arg(value_name = "INPUT")]
    input: PathBuf,

    /// File to write core-area summary rows to
    #[arg(value_name = "OUTPUT")]
    output: PathBuf,
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let _log_guard = init_logging();

    let cli = Cli::parse();
    info!(input = %cli.input.display(), output = %cli.output.display(), "Starting rollup");

    let written = RollupProcess::new(cli.input, cli.output).run()?;

    info!(rows = written, "Rollup complete");
    Ok(())
}

/// Colored stderr logging, plus a JSON log file when `LOG_FILE_PATH` is set.
///
/// The returned guard must stay alive until exit so buffered file lines are flushed.
fn init_logging() -> Option<WorkerGuard> {
    let stderr_layer = fmt::layer()
        .with_target(true)
        .with_span_events(FmtSpan::CLOSE)
        .with_ansi(true)
        .with_writer(std::io::stderr)
        .with_filter(EnvFilter::from_env("RUST_LOG").add_directive(LevelFilter::INFO.into()));

    let (json_layer, guard) = match std::env::var("LOG_FILE_PATH") {
        Ok(log_file_path) => {
            let path = Path::new(&log_file_path);
            let log_dir = path.parent().unwrap_or(Path::new("."));
            let log_file_name = path
                .file_name()
                .unwrap_or(OsStr::new("population_rollup.log"));

            let file_appender = tracing_appender::rolling::never(log_dir, log_file_name);
            let (non_blocking_file, guard) = tracing_appender::non_blocking(file_appender);

            let layer = fmt::layer()
                .json()
                .with_current_span(true)
                .with_span_list(true)
                .with_writer(non_blocking_file)
                .with_filter(
                    EnvFilter::from_env("RUST_LOG_JSON").add_directive(LevelFilter::DEBUG.into()),
                );
            (Some(layer), Some(guard))
        }
        Err(_) => (None, None),
    };

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(json_layer)
        .init();

    guard
}
