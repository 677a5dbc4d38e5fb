//! anota: turn one Portuguese sentence into a transaction record.
//!
//! Usage:
//!   anota "paguei 45,90 na farmácia ontem"
//!   anota --today 2025-06-10 --installments comprei tv em 10x

use anota_extract::{ExtractOptions, Extractor};
use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

const VERSION: &str = concat!(env!("CARGO_PKG_VERSION"), " (", env!("ANOTA_BUILD_SHA"), ")");

#[derive(Parser, Debug)]
#[command(
    name = "anota",
    version = VERSION,
    about = "Extract type, amount, category and date from a Portuguese sentence"
)]
struct Cli {
    /// Sentence describing an income or expense (words are joined with spaces)
    #[arg(required = true, num_args = 1.., allow_hyphen_values = true, allow_negative_numbers = true)]
    text: Vec<String>,

    /// Reference date for "ontem", "amanhã", "dia N" and the default (YYYY-MM-DD)
    #[arg(long)]
    today: Option<NaiveDate>,

    /// Also detect installments ("em 3x") and add an `installments` key
    #[arg(long)]
    installments: bool,

    /// Pretty-print the JSON record
    #[arg(long)]
    pretty: bool,

    /// Debug logging on stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // RUST_LOG > --verbose > warn. Logs go to stderr; stdout is the record.
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .compact(),
        )
        .init();

    let text = cli.text.join(" ");
    let today = cli.today.unwrap_or_else(|| Local::now().date_naive());
    tracing::debug!(%today, input = %text, "reference date");

    let extractor = Extractor::with_options(ExtractOptions {
        installments: cli.installments,
    })
    .context("building extractor")?;

    let record = extractor.extract(&text, today);

    let json = if cli.pretty {
        serde_json::to_string_pretty(&record)
    } else {
        serde_json::to_string(&record)
    }
    .context("serializing record")?;

    println!("{}", json);
    Ok(())
}
