use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use fintrack_lib::financials::{
    StatementTable, FREE_CASH_FLOW, NET_INCOME, TOTAL_ASSETS, TOTAL_LIABILITIES, TOTAL_REVENUE,
};
use fintrack_lib::options::OptionChain;
use fintrack_lib::recommendations;
use fintrack_lib::{MarketData, Section, Settings, StockSnapshot};
use serde::Serialize;

use super::{resolve_ticker, section_text, with_spinner};
use crate::export::{default_path, export_history};
use crate::output::{
    build_dividend_rows, build_holder_rows, build_price_rows, build_recommendation_rows,
    option_rows, print_csv, print_json, print_subheading, print_xml, render_grid, render_rows,
    statement_grid, OutputFormat,
};

/// The walkthrough always covers one year of history.
const WALKTHROUGH_PERIOD: &str = "1y";
const TAIL_ROWS: usize = 5;

#[derive(Args)]
pub struct WalkthroughArgs {
    /// Stock ticker symbol (defaults to the configured ticker)
    pub ticker: Option<String>,

    /// CSV file for the price history (default: <TICKER>_historical.csv)
    #[arg(long)]
    pub export: Option<PathBuf>,
}

#[derive(Serialize)]
struct WalkthroughReport<'a> {
    snapshot: &'a StockSnapshot,
    options: &'a Section<OptionChain>,
}

pub async fn run(
    args: &WalkthroughArgs,
    data: &MarketData,
    settings: &Settings,
    format: &OutputFormat,
) -> Result<()> {
    let ticker = resolve_ticker(args.ticker.as_deref(), settings)?;

    let (snapshot, options) = with_spinner(format, format!("Fetching data for {}...", ticker), async {
        let snapshot = data.fetch_snapshot(&ticker, WALKTHROUGH_PERIOD).await?;
        let options = data.fetch_options(&ticker).await;
        anyhow::Ok((snapshot, options))
    })
    .await?;

    match format {
        OutputFormat::Table | OutputFormat::Markdown => print_walkthrough(&snapshot, &options, format),
        OutputFormat::Json => print_json(&WalkthroughReport {
            snapshot: &snapshot,
            options: &options,
        }),
        OutputFormat::Csv => print_csv(&build_price_rows(snapshot.history.bars()))?,
        OutputFormat::Xml => print_xml(
            "walkthrough",
            &WalkthroughReport {
                snapshot: &snapshot,
                options: &options,
            },
        )?,
    }

    let path = args.export.clone().unwrap_or_else(|| default_path(&ticker));
    export_history(&snapshot.history, &path)?;
    eprintln!("Historical data exported to {}", path.display());
    Ok(())
}

fn statement_text(
    section: &Section<StatementTable>,
    what: &str,
    labels: &[&str],
    format: &OutputFormat,
) -> String {
    section_text(section, what, |t| {
        render_grid(statement_grid(&t.select(labels)), format)
    })
}

fn print_walkthrough(snapshot: &StockSnapshot, options: &Section<OptionChain>, format: &OutputFormat) {
    print_subheading("Historical Prices", format);
    if snapshot.history.is_empty() {
        println!("No price history available");
    } else {
        println!("{} daily bars, latest:", snapshot.history.len());
        println!("{}", render_rows(&build_price_rows(snapshot.history.tail(TAIL_ROWS)), format));
    }

    print_subheading("Income Statement", format);
    println!(
        "{}",
        statement_text(&snapshot.income_statement, "income statement", &[TOTAL_REVENUE, NET_INCOME], format)
    );

    print_subheading("Balance Sheet", format);
    println!(
        "{}",
        statement_text(&snapshot.balance_sheet, "balance sheet", &[TOTAL_ASSETS, TOTAL_LIABILITIES], format)
    );

    print_subheading("Cash Flow", format);
    println!(
        "{}",
        statement_text(&snapshot.cash_flow, "cash flow", &[FREE_CASH_FLOW], format)
    );

    print_subheading("Last 5 dividends", format);
    let dividends = snapshot.recent_dividends(TAIL_ROWS);
    if dividends.is_empty() {
        println!("No dividend history available");
    } else {
        println!("{}", render_rows(&build_dividend_rows(dividends), format));
    }

    print_subheading("Analyst Recommendations Summary", format);
    println!(
        "{}",
        section_text(&snapshot.recommendations, "analyst recommendations", |periods| {
            render_rows(
                &build_recommendation_rows(recommendations::tail(periods, TAIL_ROWS)),
                format,
            )
        })
    );

    let (calls, puts) = match options.available() {
        Some(chain) => option_rows(chain, TAIL_ROWS),
        None => (Vec::new(), Vec::new()),
    };
    print_subheading("Call options", format);
    println!("{}", section_text(options, "call options", |_| render_rows(&calls, format)));
    print_subheading("Put options", format);
    println!("{}", section_text(options, "put options", |_| render_rows(&puts, format)));

    print_subheading("Top institutional holders", format);
    println!(
        "{}",
        section_text(&snapshot.holders, "institutional holder", |h| {
            render_rows(&build_holder_rows(h), format)
        })
    );
}
