use anyhow::Result;
use clap::Args;
use fintrack_lib::trend::{self, TrendOutcome};
use fintrack_lib::{MarketData, Settings};
use serde::Serialize;

use super::{resolve_period, resolve_ticker, with_spinner};
use crate::output::{
    analysis_text, build_analysis_row, print_csv, print_json, print_xml, OutputFormat,
};

#[derive(Args)]
pub struct AnalyzeArgs {
    /// Stock ticker symbol (e.g. AAPL, BRK-B, ^GSPC)
    pub ticker: String,

    /// History period: 1d, 5d, 1mo, 3mo, 6mo, 1y, 2y, 5y, 10y, ytd, max
    #[arg(long)]
    pub period: Option<String>,
}

/// JSON/XML shape of an analysis: the outcome plus what it was computed for.
#[derive(Serialize)]
pub struct AnalysisReport<'a> {
    pub ticker: &'a str,
    pub period: &'a str,
    #[serde(flatten)]
    pub outcome: &'a TrendOutcome,
}

pub async fn run(
    args: &AnalyzeArgs,
    data: &MarketData,
    settings: &Settings,
    format: &OutputFormat,
) -> Result<()> {
    let ticker = resolve_ticker(Some(&args.ticker), settings)?;
    let period = resolve_period(args.period.as_deref(), settings)?;

    let history = with_spinner(
        format,
        format!("Fetching {} history for {}...", period, ticker),
        data.history(&ticker, &period),
    )
    .await?;
    let outcome = trend::analyze(&history.series);
    print_analysis(&ticker, &period, &outcome, format)
}

pub fn print_analysis(
    ticker: &str,
    period: &str,
    outcome: &TrendOutcome,
    format: &OutputFormat,
) -> Result<()> {
    let report = AnalysisReport {
        ticker,
        period,
        outcome,
    };
    match format {
        OutputFormat::Table | OutputFormat::Markdown => {
            println!("{}", analysis_text(ticker, period, outcome))
        }
        OutputFormat::Json => print_json(&report),
        OutputFormat::Csv => print_csv(&[build_analysis_row(ticker, period, outcome)])?,
        OutputFormat::Xml => print_xml("analysis", &report)?,
    }
    Ok(())
}
