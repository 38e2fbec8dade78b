use std::path::PathBuf;

use anyhow::{bail, Result};
use chrono::{NaiveDate, Utc};
use clap::Args;
use fintrack_lib::{MarketData, Settings};

use super::{resolve_period, resolve_ticker, with_spinner};
use crate::export::export_history;
use crate::output::{
    build_price_rows, print_csv, print_json, print_rows_xml, render_rows, OutputFormat,
};

#[derive(Args)]
pub struct HistoryArgs {
    /// Stock ticker symbol
    pub ticker: String,

    /// History period: 1d, 5d, 1mo, 3mo, 6mo, 1y, 2y, 5y, 10y, ytd, max
    #[arg(long, conflicts_with = "start")]
    pub period: Option<String>,

    /// First day of a custom range (YYYY-MM-DD), instead of --period
    #[arg(long)]
    pub start: Option<NaiveDate>,

    /// Last day of a custom range, inclusive (YYYY-MM-DD, default: today)
    #[arg(long, requires = "start")]
    pub end: Option<NaiveDate>,

    /// Also write the bars to this CSV file
    #[arg(long)]
    pub export: Option<PathBuf>,
}

pub async fn run(
    args: &HistoryArgs,
    data: &MarketData,
    settings: &Settings,
    format: &OutputFormat,
) -> Result<()> {
    let ticker = resolve_ticker(Some(&args.ticker), settings)?;

    let (label, history) = match resolve_range(args.start, args.end, Utc::now().date_naive())? {
        Some((start, end)) => {
            let label = format!("{} to {}", start, end);
            let history = with_spinner(
                format,
                format!("Fetching {} history from {}...", ticker, label),
                data.history_between(&ticker, start, end),
            )
            .await?;
            (label, history)
        }
        None => {
            let period = resolve_period(args.period.as_deref(), settings)?;
            let history = with_spinner(
                format,
                format!("Fetching {} history for {}...", period, ticker),
                data.history(&ticker, &period),
            )
            .await?;
            (period, history)
        }
    };

    if history.series.is_empty() {
        eprintln!("No price history returned for {}", ticker);
    } else {
        eprintln!("{} daily bars for {} ({})", history.series.len(), ticker, label);
    }

    let rows = build_price_rows(history.series.bars());
    match format {
        OutputFormat::Table | OutputFormat::Markdown => println!("{}", render_rows(&rows, format)),
        OutputFormat::Json => print_json(&rows),
        OutputFormat::Csv => print_csv(&rows)?,
        OutputFormat::Xml => print_rows_xml("history", "bar", &rows)?,
    }

    if let Some(path) = &args.export {
        export_history(&history.series, path)?;
        eprintln!("Exported to {}", path.display());
    }
    Ok(())
}

/// A custom date range, when `--start` was given. The end defaults to `today`.
fn resolve_range(
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
    today: NaiveDate,
) -> Result<Option<(NaiveDate, NaiveDate)>> {
    let Some(start) = start else {
        return Ok(None);
    };
    let end = end.unwrap_or(today);
    if end < start {
        bail!("--end {} is before --start {}", end, start);
    }
    Ok(Some((start, end)))
}
