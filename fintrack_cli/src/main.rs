mod charts;
mod commands;
mod export;
mod output;
mod xml_output;

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};
use fintrack_lib::{MarketData, Settings};
use tracing_subscriber::EnvFilter;

use crate::output::OutputFormat;

#[derive(Parser)]
#[command(name = "fintrack")]
#[command(about = "Fetch company financials and classify recent stock price trends")]
struct Cli {
    /// Output format: table, json, csv, markdown, or xml
    #[arg(long, default_value = "table", global = true)]
    output: String,

    /// Path to a TOML settings file (overrides FINTRACK_CONFIG)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Company info, statements, holders, charts, and trend analysis
    Fetch(commands::fetch::FetchArgs),
    /// Trend classification of daily closing prices
    Analyze(commands::analyze::AnalyzeArgs),
    /// Daily OHLCV bars, optionally exported to CSV
    History(commands::history::HistoryArgs),
    /// Statement highlights, dividends, analyst trend, options, and holders
    Walkthrough(commands::walkthrough::WalkthroughArgs),
}

async fn run(cli: &Cli, format: &OutputFormat) -> Result<()> {
    let settings = Settings::load(cli.config.as_deref())?;
    let data = MarketData::new(&settings)?;

    match &cli.command {
        Commands::Fetch(args) => commands::fetch::run(args, &data, &settings, format).await,
        Commands::Analyze(args) => commands::analyze::run(args, &data, &settings, format).await,
        Commands::History(args) => commands::history::run(args, &data, &settings, format).await,
        Commands::Walkthrough(args) => {
            commands::walkthrough::run(args, &data, &settings, format).await
        }
    }
}

fn main() -> ExitCode {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("fintrack=info")),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let format = OutputFormat::parse(&cli.output);

    let runtime = match tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
    {
        Ok(rt) => rt,
        Err(e) => {
            eprintln!("Failed to start runtime: {}", e);
            return ExitCode::FAILURE;
        }
    };

    match runtime.block_on(run(&cli, &format)) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Failed to fetch data: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
