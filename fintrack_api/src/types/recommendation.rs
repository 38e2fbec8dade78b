use serde::{Deserialize, Serialize};

/// The `recommendationTrend` module.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct RecommendationTrend {
    #[serde(default)]
    pub trend: Vec<RecommendationPeriod>,
}

/// Analyst rating counts for one monthly period. `period` is relative to
/// now: `0m` is the current month, `-1m` the previous one, and so on.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationPeriod {
    pub period: String,
    #[serde(default)]
    pub strong_buy: i64,
    #[serde(default)]
    pub buy: i64,
    #[serde(default)]
    pub hold: i64,
    #[serde(default)]
    pub sell: i64,
    #[serde(default)]
    pub strong_sell: i64,
}

impl RecommendationPeriod {
    pub fn total(&self) -> i64 {
        self.strong_buy + self.buy + self.hold + self.sell + self.strong_sell
    }
}
