//! Option chains for a single expiration.

use chrono::NaiveDate;
use serde::Serialize;

use crate::types::{OptionChainResult, OptionContract};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OptionChain {
    pub underlying: String,
    pub expiration: Option<NaiveDate>,
    pub calls: Vec<OptionContract>,
    pub puts: Vec<OptionContract>,
}

impl OptionChain {
    /// The first expiration in the response. `None` when the provider listed
    /// no contracts at all.
    pub fn from_result(result: OptionChainResult) -> Option<Self> {
        let set = result.options.into_iter().next()?;
        if set.calls.is_empty() && set.puts.is_empty() {
            return None;
        }
        Some(Self {
            underlying: result.underlying_symbol,
            expiration: chrono::DateTime::from_timestamp(set.expiration_date, 0)
                .map(|dt| dt.date_naive()),
            calls: set.calls,
            puts: set.puts,
        })
    }

    pub fn head_calls(&self, n: usize) -> &[OptionContract] {
        &self.calls[..n.min(self.calls.len())]
    }

    pub fn head_puts(&self, n: usize) -> &[OptionContract] {
        &self.puts[..n.min(self.puts.len())]
    }
}
