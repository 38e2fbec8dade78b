//! Institutional holders and the top-holder ownership split.

use chrono::NaiveDate;
use serde::Serialize;

use crate::types::InstitutionOwnership;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Holder {
    pub name: String,
    pub shares: Option<f64>,
    pub value: Option<f64>,
    /// Fraction of shares outstanding (0.08 = 8%).
    pub pct_held: Option<f64>,
    pub report_date: Option<NaiveDate>,
}

/// One slice of the top-holder chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HolderShare {
    pub name: String,
    pub shares: f64,
    /// Percentage of the shares held by the top holders together.
    pub pct_of_top: f64,
}

/// Flattens the ownership module, keeping the provider's order.
pub fn holders_from(ownership: &InstitutionOwnership) -> Vec<Holder> {
    ownership
        .ownership_list
        .iter()
        .map(|h| Holder {
            name: h.organization.clone(),
            shares: h.shares(),
            value: h.value(),
            pct_held: h.pct_held(),
            report_date: h.report_date.as_ref().and_then(|d| d.date()),
        })
        .collect()
}

/// The first `n` holders with each one's share of their combined position.
///
/// Holders without a share count contribute zero. When the combined
/// position is zero every percentage is zero.
pub fn top_holders(holders: &[Holder], n: usize) -> Vec<HolderShare> {
    let top = &holders[..n.min(holders.len())];
    let total: f64 = top.iter().filter_map(|h| h.shares).sum();
    top.iter()
        .map(|h| {
            let shares = h.shares.unwrap_or(0.0);
            HolderShare {
                name: h.name.clone(),
                shares,
                pct_of_top: if total > 0.0 { shares / total * 100.0 } else { 0.0 },
            }
        })
        .collect()
}
