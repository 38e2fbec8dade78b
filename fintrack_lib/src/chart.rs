//! Chart data for the dashboard.
//!
//! The library produces the points; the CLI decides how to draw them.

use serde::Serialize;

use crate::ownership::top_holders;
use crate::recommendations;
use crate::series::PriceBar;
use crate::snapshot::StockSnapshot;
use crate::validation::period_title;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ChartKind {
    Line,
    Bar,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartPoint {
    pub label: String,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Chart {
    pub title: String,
    pub y_label: String,
    pub kind: ChartKind,
    pub points: Vec<ChartPoint>,
}

/// The four dashboard charts. A chart is absent when its data is.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ChartSet {
    pub price: Option<Chart>,
    pub volume: Option<Chart>,
    pub holders: Option<Chart>,
    pub analyst: Option<Chart>,
}

impl ChartSet {
    pub fn from_snapshot(snapshot: &StockSnapshot, top_n: usize) -> Self {
        let bars = snapshot.history.bars();

        let price = (!bars.is_empty()).then(|| Chart {
            title: format!("Price History ({})", period_title(&snapshot.period)),
            y_label: "Price".to_string(),
            kind: ChartKind::Line,
            points: dated(bars, |b| b.close),
        });

        let volume = (!bars.is_empty()).then(|| Chart {
            title: "Trading Volume".to_string(),
            y_label: "Volume".to_string(),
            kind: ChartKind::Bar,
            points: dated(bars, |b| b.volume as f64),
        });

        let holders = snapshot
            .holders
            .available()
            .map(|h| top_holders(h, top_n))
            .filter(|top| !top.is_empty())
            .map(|top| Chart {
                title: "Top Institutional Holders".to_string(),
                y_label: "% of top holders".to_string(),
                kind: ChartKind::Bar,
                points: top
                    .into_iter()
                    .map(|s| ChartPoint {
                        label: s.name,
                        value: s.pct_of_top,
                    })
                    .collect(),
            });

        let analyst = snapshot
            .recommendations
            .available()
            .and_then(|periods| recommendations::latest(periods))
            .map(|latest| Chart {
                title: "Analyst Recommendations".to_string(),
                y_label: "Count".to_string(),
                kind: ChartKind::Bar,
                points: recommendations::category_counts(latest)
                    .into_iter()
                    .map(|c| ChartPoint {
                        label: c.category.to_string(),
                        value: c.count as f64,
                    })
                    .collect(),
            });

        Self {
            price,
            volume,
            holders,
            analyst,
        }
    }

    pub fn charts(&self) -> impl Iterator<Item = &Chart> {
        [&self.price, &self.volume, &self.holders, &self.analyst]
            .into_iter()
            .flatten()
    }
}

fn dated(bars: &[PriceBar], value: impl Fn(&PriceBar) -> f64) -> Vec<ChartPoint> {
    bars.iter()
        .map(|b| ChartPoint {
            label: b.date().to_string(),
            value: value(b),
        })
        .collect()
}
