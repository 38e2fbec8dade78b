//! CLI subcommand implementations.

pub mod analyze;
pub mod fetch;
pub mod history;
pub mod walkthrough;

use std::future::Future;
use std::time::Duration;

use anyhow::Result;
use fintrack_lib::validation;
use fintrack_lib::{Section, Settings};
use indicatif::{ProgressBar, ProgressStyle};

use crate::output::OutputFormat;

/// Runs `fut` behind a stderr spinner in table mode.
pub async fn with_spinner<T>(
    format: &OutputFormat,
    message: String,
    fut: impl Future<Output = T>,
) -> T {
    let pb = (*format == OutputFormat::Table).then(|| {
        let pb = ProgressBar::new_spinner();
        if let Ok(style) = ProgressStyle::with_template("{spinner:.cyan} {msg}") {
            pb.set_style(style);
        }
        pb.set_message(message);
        pb.enable_steady_tick(Duration::from_millis(100));
        pb
    });
    let out = fut.await;
    if let Some(pb) = pb {
        pb.finish_and_clear();
    }
    out
}

pub fn resolve_ticker(arg: Option<&str>, settings: &Settings) -> Result<String> {
    Ok(validation::validate_ticker(
        arg.unwrap_or(&settings.default_ticker),
    )?)
}

pub fn resolve_period(arg: Option<&str>, settings: &Settings) -> Result<String> {
    Ok(validation::validate_period(
        arg.unwrap_or(&settings.default_period),
    )?)
}

/// Text for a snapshot section: the rendered data, a placeholder when the
/// provider had none, or the failure cause.
pub fn section_text<T>(section: &Section<T>, what: &str, render: impl FnOnce(&T) -> String) -> String {
    match section {
        Section::Available(value) => render(value),
        Section::Empty => format!("No {} data available", what),
        Section::Failed(reason) => format!("{} data unavailable ({})", what, reason),
    }
}
