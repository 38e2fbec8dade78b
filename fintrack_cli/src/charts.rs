//! Terminal rendering for dashboard charts.

use fintrack_lib::{Chart, ChartKind};

const SPARK: [char; 8] = ['▁', '▂', '▃', '▄', '▅', '▆', '▇', '█'];
const BAR_WIDTH: usize = 40;
const SPARK_WIDTH: usize = 60;
/// Bar charts with more points than this are drawn as a sparkline.
const MAX_BARS: usize = 20;

pub fn render(chart: &Chart) -> String {
    let body = match chart.kind {
        ChartKind::Bar if chart.points.len() <= MAX_BARS => bars(chart),
        _ => sparkline(chart),
    };
    format!("{}\n{}", chart.title, body)
}

/// Mean of each of `width` equal buckets, so long series fit one line.
fn downsample(values: &[f64], width: usize) -> Vec<f64> {
    if values.len() <= width {
        return values.to_vec();
    }
    (0..width)
        .map(|i| {
            let start = i * values.len() / width;
            let end = ((i + 1) * values.len() / width).max(start + 1);
            let bucket = &values[start..end];
            bucket.iter().sum::<f64>() / bucket.len() as f64
        })
        .collect()
}

fn sparkline(chart: &Chart) -> String {
    let values: Vec<f64> = chart.points.iter().map(|p| p.value).collect();
    let Some((first, last)) = chart.points.first().zip(chart.points.last()) else {
        return String::new();
    };
    let sampled = downsample(&values, SPARK_WIDTH);
    let min = sampled.iter().cloned().fold(f64::INFINITY, f64::min);
    let max = sampled.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
    let span = max - min;
    let line: String = sampled
        .iter()
        .map(|v| {
            if span <= 0.0 {
                SPARK[SPARK.len() / 2]
            } else {
                let idx = ((v - min) / span * (SPARK.len() - 1) as f64).round() as usize;
                SPARK[idx.min(SPARK.len() - 1)]
            }
        })
        .collect();
    format!(
        "{}\n{} .. {}  ({}: min {:.2}, max {:.2})",
        line, first.label, last.label, chart.y_label, min, max
    )
}

fn bars(chart: &Chart) -> String {
    let label_width = chart
        .points
        .iter()
        .map(|p| p.label.chars().count())
        .max()
        .unwrap_or(0);
    let max = chart.points.iter().map(|p| p.value).fold(0.0, f64::max);
    chart
        .points
        .iter()
        .map(|p| {
            let len = if max > 0.0 {
                (p.value / max * BAR_WIDTH as f64).round() as usize
            } else {
                0
            };
            format!(
                "{:<width$} | {} {:.2}",
                p.label,
                "█".repeat(len),
                p.value,
                width = label_width
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}
