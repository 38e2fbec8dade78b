//! The `/v7/finance/options/{symbol}` response.

use serde::{Deserialize, Serialize};

use super::meta::Envelope;

#[derive(Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct OptionChainResponse {
    pub option_chain: Envelope<OptionChainResult>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct OptionChainResult {
    pub underlying_symbol: String,
    /// Unix timestamps of every listed expiration.
    #[serde(default)]
    pub expiration_dates: Vec<i64>,
    #[serde(default)]
    pub strikes: Vec<f64>,
    /// One entry per requested expiration; the nearest one when none was requested.
    #[serde(default)]
    pub options: Vec<OptionSet>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct OptionSet {
    pub expiration_date: i64,
    #[serde(default)]
    pub calls: Vec<OptionContract>,
    #[serde(default)]
    pub puts: Vec<OptionContract>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OptionContract {
    pub contract_symbol: String,
    pub strike: f64,
    pub currency: Option<String>,
    #[serde(default)]
    pub last_price: f64,
    pub change: Option<f64>,
    pub percent_change: Option<f64>,
    pub volume: Option<i64>,
    pub open_interest: Option<i64>,
    pub bid: Option<f64>,
    pub ask: Option<f64>,
    pub implied_volatility: Option<f64>,
    #[serde(default)]
    pub in_the_money: bool,
    pub expiration: Option<i64>,
    pub last_trade_date: Option<i64>,
}
