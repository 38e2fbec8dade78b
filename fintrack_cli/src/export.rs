use std::fs::File;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use fintrack_lib::PriceSeries;

use crate::output::{build_price_rows, write_csv};

/// `<ticker>_historical.csv` in the working directory.
pub fn default_path(ticker: &str) -> PathBuf {
    PathBuf::from(format!("{}_historical.csv", ticker))
}

/// Writes the series as `Date,Open,High,Low,Close,Adj Close,Volume` rows.
pub fn export_history(series: &PriceSeries, path: &Path) -> Result<()> {
    let file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
    write_csv(&build_price_rows(series.bars()), file)?;
    tracing::info!("Exported {} rows to {}", series.len(), path.display());
    Ok(())
}
