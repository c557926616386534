use anyhow::Context;
use clap::Parser;
use gnorm::{Batch, Config, WriterReporter};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "gnorm", about = "Normalize test reports for golden-file comparison")]
struct Cli {
    /// Files to normalize. `NAME.txt` is written to `NAME.norm.txt`.
    #[arg(required = true)]
    files: Vec<PathBuf>,

    /// TOML file layered over the built-in configuration.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Write debug logs to stderr (filter with RUST_LOG).
    #[arg(long)]
    debug: bool,

    /// Print a JSON summary of every normalized file to stdout.
    #[arg(long)]
    summary: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.debug {
        tracing_subscriber::fmt()
            .with_writer(std::io::stderr)
            .with_ansi(false)
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_env("RUST_LOG")
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug")),
            )
            .init();
        tracing::debug!(files = cli.files.len(), "gnorm debug log started");
    }

    let config = Config::load(cli.config.as_deref()).context("failed to load configuration")?;
    let batch = Batch::new(config);
    let mut reporter = WriterReporter::stderr();
    let mut reports = Vec::with_capacity(cli.files.len());
    for input in &cli.files {
        let report = batch
            .run_file(input, &mut reporter)
            .with_context(|| format!("failed to normalize {}", input.display()))?;
        reports.push(report);
    }

    if cli.summary {
        println!("{}", serde_json::to_string_pretty(&reports)?);
    }
    Ok(())
}
