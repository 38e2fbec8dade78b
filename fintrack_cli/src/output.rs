use std::io::Write;

use anyhow::Result;
use fintrack_lib::financials::StatementTable;
use fintrack_lib::options::OptionChain;
use fintrack_lib::ownership::Holder;
use fintrack_lib::trend::TrendOutcome;
use fintrack_lib::types::{OptionContract, RecommendationPeriod};
use fintrack_lib::validation::period_title;
use fintrack_lib::{CompanyProfile, Dividend, PriceBar};
use serde::Serialize;
use tabled::builder::Builder;
use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::xml_output;

#[derive(Clone, Debug, PartialEq)]
pub enum OutputFormat {
    Table,
    Json,
    Csv,
    Markdown,
    Xml,
}

impl OutputFormat {
    pub fn parse(value: &str) -> Self {
        match value {
            "json" => Self::Json,
            "csv" => Self::Csv,
            "md" | "markdown" => Self::Markdown,
            "xml" => Self::Xml,
            _ => Self::Table,
        }
    }
}

pub const NOT_AVAILABLE: &str = "N/A";

#[derive(Tabled, Serialize)]
pub struct FieldRow {
    #[tabled(rename = "Field")]
    #[serde(rename = "Field")]
    field: String,
    #[tabled(rename = "Value")]
    #[serde(rename = "Value")]
    value: String,
}

#[derive(Tabled, Serialize)]
pub struct PriceRow {
    #[tabled(rename = "Date")]
    #[serde(rename = "Date")]
    date: String,
    #[tabled(rename = "Open")]
    #[serde(rename = "Open")]
    open: f64,
    #[tabled(rename = "High")]
    #[serde(rename = "High")]
    high: f64,
    #[tabled(rename = "Low")]
    #[serde(rename = "Low")]
    low: f64,
    #[tabled(rename = "Close")]
    #[serde(rename = "Close")]
    close: f64,
    #[tabled(rename = "Adj Close")]
    #[serde(rename = "Adj Close")]
    adj_close: f64,
    #[tabled(rename = "Volume")]
    #[serde(rename = "Volume")]
    volume: u64,
}

#[derive(Tabled, Serialize)]
pub struct DividendRow {
    #[tabled(rename = "Date")]
    #[serde(rename = "Date")]
    date: String,
    #[tabled(rename = "Dividend")]
    #[serde(rename = "Dividend")]
    amount: f64,
}

#[derive(Tabled, Serialize)]
pub struct HolderRow {
    #[tabled(rename = "Holder")]
    #[serde(rename = "Holder")]
    holder: String,
    #[tabled(rename = "Shares")]
    #[serde(rename = "Shares")]
    shares: String,
    #[tabled(rename = "Value")]
    #[serde(rename = "Value")]
    value: String,
}

#[derive(Tabled, Serialize)]
pub struct RecommendationRow {
    #[tabled(rename = "Period")]
    #[serde(rename = "Period")]
    period: String,
    #[tabled(rename = "Strong Buy")]
    #[serde(rename = "Strong Buy")]
    strong_buy: i64,
    #[tabled(rename = "Buy")]
    #[serde(rename = "Buy")]
    buy: i64,
    #[tabled(rename = "Hold")]
    #[serde(rename = "Hold")]
    hold: i64,
    #[tabled(rename = "Sell")]
    #[serde(rename = "Sell")]
    sell: i64,
    #[tabled(rename = "Strong Sell")]
    #[serde(rename = "Strong Sell")]
    strong_sell: i64,
}

#[derive(Tabled, Serialize)]
pub struct OptionRow {
    #[tabled(rename = "Strike")]
    #[serde(rename = "Strike")]
    strike: f64,
    #[tabled(rename = "Last Price")]
    #[serde(rename = "Last Price")]
    last_price: f64,
}

#[derive(Tabled, Serialize)]
pub struct AnalysisRow {
    #[tabled(rename = "Ticker")]
    #[serde(rename = "Ticker")]
    ticker: String,
    #[tabled(rename = "Period")]
    #[serde(rename = "Period")]
    period: String,
    #[tabled(rename = "Trend")]
    #[serde(rename = "Trend")]
    trend: String,
    #[tabled(rename = "Mean Return")]
    #[serde(rename = "Mean Return")]
    mean_return: String,
    #[tabled(rename = "Volatility")]
    #[serde(rename = "Volatility")]
    volatility: String,
    #[tabled(rename = "Suggestion")]
    #[serde(rename = "Suggestion")]
    suggestion: String,
}

// -- Row builders --

pub fn build_profile_rows(profile: &CompanyProfile) -> Vec<FieldRow> {
    let text = |v: &Option<String>| v.clone().unwrap_or_else(|| NOT_AVAILABLE.to_string());
    let fields = [
        ("Company", text(&profile.name)),
        ("Symbol", profile.symbol.clone()),
        ("Sector", text(&profile.sector)),
        ("Industry", text(&profile.industry)),
        ("Currency", text(&profile.currency)),
        (
            "Current Price",
            profile
                .current_price
                .map(|p| format!("{:.2}", p))
                .unwrap_or_else(|| NOT_AVAILABLE.to_string()),
        ),
        ("Market Cap", format_money(profile.market_cap)),
    ];
    fields
        .into_iter()
        .map(|(field, value)| FieldRow {
            field: field.to_string(),
            value,
        })
        .collect()
}

pub fn build_price_rows(bars: &[PriceBar]) -> Vec<PriceRow> {
    bars.iter()
        .map(|b| PriceRow {
            date: b.date().format("%Y-%m-%d").to_string(),
            open: b.open,
            high: b.high,
            low: b.low,
            close: b.close,
            adj_close: b.adj_close,
            volume: b.volume,
        })
        .collect()
}

pub fn build_dividend_rows(dividends: &[Dividend]) -> Vec<DividendRow> {
    dividends
        .iter()
        .map(|d| DividendRow {
            date: d.date.to_string(),
            amount: d.amount,
        })
        .collect()
}

pub fn build_holder_rows(holders: &[Holder]) -> Vec<HolderRow> {
    holders
        .iter()
        .map(|h| HolderRow {
            holder: h.name.clone(),
            shares: format_count(h.shares),
            value: format_money(h.value),
        })
        .collect()
}

pub fn build_recommendation_rows(periods: &[RecommendationPeriod]) -> Vec<RecommendationRow> {
    periods
        .iter()
        .map(|p| RecommendationRow {
            period: p.period.clone(),
            strong_buy: p.strong_buy,
            buy: p.buy,
            hold: p.hold,
            sell: p.sell,
            strong_sell: p.strong_sell,
        })
        .collect()
}

pub fn build_option_rows(contracts: &[OptionContract]) -> Vec<OptionRow> {
    contracts
        .iter()
        .map(|c| OptionRow {
            strike: c.strike,
            last_price: c.last_price,
        })
        .collect()
}

pub fn build_analysis_row(ticker: &str, period: &str, outcome: &TrendOutcome) -> AnalysisRow {
    let (trend, mean_return, volatility, suggestion) = match outcome {
        TrendOutcome::Analyzed(a) => (
            a.trend.to_string(),
            format!("{:.4}", a.mean_return),
            format_optional_ratio(a.volatility),
            a.suggestion.text().to_string(),
        ),
        TrendOutcome::NoData => (
            NOT_AVAILABLE.to_string(),
            NOT_AVAILABLE.to_string(),
            NOT_AVAILABLE.to_string(),
            NO_HISTORY_MESSAGE.to_string(),
        ),
    };
    AnalysisRow {
        ticker: ticker.to_string(),
        period: period.to_string(),
        trend,
        mean_return,
        volatility,
        suggestion,
    }
}

/// Statement rows as a grid: one column per period, newest first.
pub fn statement_grid(table: &StatementTable) -> Vec<Vec<String>> {
    let mut header = vec![String::new()];
    header.extend(table.periods.iter().map(|p| match p {
        Some(date) => date.to_string(),
        None => NOT_AVAILABLE.to_string(),
    }));
    let mut grid = vec![header];
    for row in &table.rows {
        let mut line = vec![row.label.clone()];
        line.extend(row.values.iter().map(|v| format_money(*v)));
        grid.push(line);
    }
    grid
}

// -- Analysis text --

pub const NO_HISTORY_MESSAGE: &str = "No historical data available for analysis.";

pub fn analysis_text(ticker: &str, period: &str, outcome: &TrendOutcome) -> String {
    match outcome {
        TrendOutcome::NoData => NO_HISTORY_MESSAGE.to_string(),
        TrendOutcome::Analyzed(a) => format!(
            "Analysis for {}:\n\nTrend (last {}): {}\nAverage Daily Return: {:.4}\nVolatility (Std Dev): {}\n\nSuggestion: {}",
            ticker,
            period_title(period),
            a.trend,
            a.mean_return,
            format_optional_ratio(a.volatility),
            a.suggestion.text(),
        ),
    }
}

// -- Table output --

pub fn render_rows<T: Tabled>(rows: &[T], format: &OutputFormat) -> String {
    let mut table = Table::new(rows);
    if *format == OutputFormat::Markdown {
        table.with(Style::markdown());
    }
    table.to_string()
}

pub fn render_grid(grid: Vec<Vec<String>>, format: &OutputFormat) -> String {
    let mut builder = Builder::default();
    for record in grid {
        builder.push_record(record);
    }
    let mut table = builder.build();
    if *format == OutputFormat::Markdown {
        table.with(Style::markdown());
    }
    table.to_string()
}

pub fn print_heading(title: &str, format: &OutputFormat) {
    match format {
        OutputFormat::Markdown => println!("\n## {}\n", title),
        _ => println!("\n=== {} ===\n", title),
    }
}

pub fn print_subheading(title: &str, format: &OutputFormat) {
    match format {
        OutputFormat::Markdown => println!("\n### {}\n", title),
        _ => println!("\n{}:", title),
    }
}

// -- CSV output --

/// Writes the header row even when `rows` is empty.
pub fn write_csv<T: Tabled + Serialize, W: Write>(rows: &[T], writer: W) -> Result<()> {
    let mut wtr = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);
    wtr.write_record(T::headers().iter().map(|h| h.as_bytes()))?;
    for row in rows {
        wtr.serialize(row)?;
    }
    wtr.flush()?;
    Ok(())
}

pub fn print_csv<T: Tabled + Serialize>(rows: &[T]) -> Result<()> {
    write_csv(rows, std::io::stdout())
}

// -- XML output --

pub fn print_xml<T: Serialize>(root_tag: &str, item: &T) -> Result<()> {
    println!("{}", xml_output::to_xml(root_tag, item)?);
    Ok(())
}

pub fn print_rows_xml<T: Serialize>(root_tag: &str, item_tag: &str, rows: &[T]) -> Result<()> {
    println!("{}", xml_output::items_to_xml(root_tag, item_tag, rows)?);
    Ok(())
}

// -- JSON output --

pub fn print_json<T: serde::Serialize>(data: &T) {
    match serde_json::to_string_pretty(data) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Failed to serialize to JSON: {}", e),
    }
}

// -- Formatting --

pub fn format_money(value: Option<f64>) -> String {
    let Some(value) = value else {
        return NOT_AVAILABLE.to_string();
    };
    let sign = if value < 0.0 { "-" } else { "" };
    let abs = value.abs();
    if abs >= 1e12 {
        format!("{}${:.2}T", sign, abs / 1e12)
    } else if abs >= 1e9 {
        format!("{}${:.2}B", sign, abs / 1e9)
    } else if abs >= 1e6 {
        format!("{}${:.2}M", sign, abs / 1e6)
    } else if abs >= 1e3 {
        format!("{}${:.1}K", sign, abs / 1e3)
    } else {
        format!("{}${:.2}", sign, abs)
    }
}

pub fn format_count(value: Option<f64>) -> String {
    match value {
        Some(v) => {
            let digits = format!("{:.0}", v.abs());
            let mut out = String::with_capacity(digits.len() + digits.len() / 3);
            for (i, c) in digits.chars().enumerate() {
                if i > 0 && (digits.len() - i) % 3 == 0 {
                    out.push(',');
                }
                out.push(c);
            }
            if v < 0.0 {
                format!("-{}", out)
            } else {
                out
            }
        }
        None => NOT_AVAILABLE.to_string(),
    }
}

fn format_optional_ratio(value: Option<f64>) -> String {
    value
        .map(|v| format!("{:.4}", v))
        .unwrap_or_else(|| NOT_AVAILABLE.to_string())
}

/// The `n` first calls and puts as two row sets.
pub fn option_rows(chain: &OptionChain, n: usize) -> (Vec<OptionRow>, Vec<OptionRow>) {
    (
        build_option_rows(chain.head_calls(n)),
        build_option_rows(chain.head_puts(n)),
    )
}

#[cfg(test)]
#[path = "output_tests.rs"]
mod tests;
