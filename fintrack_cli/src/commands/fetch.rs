use anyhow::Result;
use clap::Args;
use fintrack_lib::trend::TrendOutcome;
use fintrack_lib::validation;
use fintrack_lib::{ChartSet, MarketData, Settings, StockSnapshot};
use serde::Serialize;

use super::{resolve_period, resolve_ticker, section_text, with_spinner};
use crate::charts;
use crate::output::{
    analysis_text, build_dividend_rows, build_holder_rows, build_price_rows, build_profile_rows,
    print_csv, print_heading, print_json, print_subheading, print_xml, render_grid, render_rows,
    statement_grid, OutputFormat,
};

const RECENT_ROWS: usize = 5;

#[derive(Args)]
pub struct FetchArgs {
    /// Stock ticker symbol (defaults to the configured ticker, AAPL out of the box)
    pub ticker: Option<String>,

    /// History period: 1d, 5d, 1mo, 3mo, 6mo, 1y, 2y, 5y, 10y, ytd, max
    #[arg(long)]
    pub period: Option<String>,

    /// Number of institutions in the ownership chart (1-50)
    #[arg(long)]
    pub top_holders: Option<usize>,
}

#[derive(Serialize)]
struct DashboardReport<'a> {
    snapshot: &'a StockSnapshot,
    charts: &'a ChartSet,
    analysis: &'a TrendOutcome,
}

pub async fn run(
    args: &FetchArgs,
    data: &MarketData,
    settings: &Settings,
    format: &OutputFormat,
) -> Result<()> {
    let ticker = resolve_ticker(args.ticker.as_deref(), settings)?;
    let period = resolve_period(args.period.as_deref(), settings)?;
    let top_n = validation::validate_top_holders(args.top_holders.unwrap_or(settings.top_holders))?;

    let snapshot = with_spinner(
        format,
        format!("Fetching data for {}...", ticker),
        data.fetch_snapshot(&ticker, &period),
    )
    .await?;
    let charts = ChartSet::from_snapshot(&snapshot, top_n);
    let analysis = snapshot.analysis();

    match format {
        OutputFormat::Table | OutputFormat::Markdown => {
            print_dashboard(&snapshot, &charts, &analysis, format)
        }
        OutputFormat::Json => print_json(&DashboardReport {
            snapshot: &snapshot,
            charts: &charts,
            analysis: &analysis,
        }),
        OutputFormat::Csv => print_csv(&build_price_rows(snapshot.history.bars()))?,
        OutputFormat::Xml => print_xml(
            "dashboard",
            &DashboardReport {
                snapshot: &snapshot,
                charts: &charts,
                analysis: &analysis,
            },
        )?,
    }
    Ok(())
}

fn print_dashboard(
    snapshot: &StockSnapshot,
    charts: &ChartSet,
    analysis: &TrendOutcome,
    format: &OutputFormat,
) {
    print_heading("Financial Data", format);

    print_subheading("Company Information", format);
    println!("{}", render_rows(&build_profile_rows(&snapshot.profile), format));

    print_subheading("Recent Price Data", format);
    if snapshot.history.is_empty() {
        println!("No price history available");
    } else {
        let rows = build_price_rows(snapshot.history.tail(RECENT_ROWS));
        println!("{}", render_rows(&rows, format));
    }

    print_subheading("Income Statement", format);
    println!(
        "{}",
        section_text(&snapshot.income_statement, "income statement", |t| {
            render_grid(statement_grid(&t.head(RECENT_ROWS)), format)
        })
    );

    print_subheading("Recent Dividends", format);
    let dividends = snapshot.recent_dividends(RECENT_ROWS);
    if dividends.is_empty() {
        println!("No dividend history available");
    } else {
        println!("{}", render_rows(&build_dividend_rows(dividends), format));
    }

    print_subheading("Institutional Holders", format);
    println!(
        "{}",
        section_text(&snapshot.holders, "institutional holder", |h| {
            render_rows(&build_holder_rows(h), format)
        })
    );

    print_heading("Visual Analysis", format);
    let mut drawn = 0;
    for chart in charts.charts() {
        println!("{}\n", charts::render(chart));
        drawn += 1;
    }
    if drawn == 0 {
        println!("No chart data available");
    }

    print_heading("Analysis", format);
    println!("{}", analysis_text(&snapshot.ticker, &snapshot.period, analysis));
}
