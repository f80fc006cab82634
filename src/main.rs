//! qrcontent - classify decoded QR payloads from the command line.
//!
//! Prints one JSON presentation per payload on stdout. Logs go to stderr.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use qrcontent::{classify, present, LabelProvider, LogFormat, QrConfig};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "qrcontent", version, about = "Classify decoded QR code payloads")]
struct Cli {
    /// YAML configuration file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Payloads to classify; reads one per stdin line when omitted
    payloads: Vec<String>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => QrConfig::from_file(path)
            .with_context(|| format!("loading {}", path.display()))?,
        None => QrConfig::default(),
    };
    init_tracing(&config);

    let labels = config.label_catalog()?;
    tracing::info!(
        name = config.name.as_deref().unwrap_or("default"),
        overrides = labels.len(),
        "config_loaded"
    );

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if cli.payloads.is_empty() {
        emit_lines(io::stdin().lock(), &mut out, &config, &labels)?;
    } else {
        for raw in &cli.payloads {
            emit(&mut out, raw, &config, &labels)?;
        }
    }
    out.flush()?;
    Ok(())
}

/// One JSON line per input line.
fn emit_lines(
    input: impl BufRead,
    out: &mut impl Write,
    config: &QrConfig,
    labels: &dyn LabelProvider,
) -> anyhow::Result<()> {
    for line in input.lines() {
        emit(out, &line?, config, labels)?;
    }
    Ok(())
}

fn emit(
    out: &mut impl Write,
    raw: &str,
    config: &QrConfig,
    labels: &dyn LabelProvider,
) -> anyhow::Result<()> {
    let content = classify(raw, &config.classifier);
    serde_json::to_writer(&mut *out, &present(&content, labels))?;
    writeln!(out)?;
    Ok(())
}

fn init_tracing(config: &QrConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr);
    match config.log_format {
        LogFormat::Json => builder.json().init(),
        LogFormat::Pretty => builder.init(),
    }
}
