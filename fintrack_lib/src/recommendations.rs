//! Analyst recommendation counts.

use serde::Serialize;

use crate::types::RecommendationPeriod;

/// Rating categories, strongest buy first.
pub const CATEGORIES: [&str; 5] = ["strongBuy", "buy", "hold", "sell", "strongSell"];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryCount {
    pub category: &'static str,
    pub count: i64,
}

/// The current month (`0m`), or the first period when no current month is listed.
pub fn latest(periods: &[RecommendationPeriod]) -> Option<&RecommendationPeriod> {
    periods
        .iter()
        .find(|p| p.period == "0m")
        .or_else(|| periods.first())
}

/// Counts for one period in [`CATEGORIES`] order.
pub fn category_counts(period: &RecommendationPeriod) -> Vec<CategoryCount> {
    let counts = [
        period.strong_buy,
        period.buy,
        period.hold,
        period.sell,
        period.strong_sell,
    ];
    CATEGORIES
        .iter()
        .zip(counts)
        .map(|(&category, count)| CategoryCount { category, count })
        .collect()
}

/// The last `n` periods, as listed by the provider.
pub fn tail(periods: &[RecommendationPeriod], n: usize) -> &[RecommendationPeriod] {
    &periods[periods.len().saturating_sub(n)..]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn period(label: &str, strong_buy: i64) -> RecommendationPeriod {
        RecommendationPeriod {
            period: label.to_string(),
            strong_buy,
            buy: 20,
            hold: 6,
            sell: 1,
            strong_sell: 0,
        }
    }

    #[test]
    fn latest_prefers_current_month() {
        let periods = vec![period("-1m", 10), period("0m", 11), period("-2m", 9)];
        assert_eq!(latest(&periods).unwrap().strong_buy, 11);
    }

    #[test]
    fn latest_falls_back_to_first() {
        let periods = vec![period("-1m", 10), period("-2m", 9)];
        assert_eq!(latest(&periods).unwrap().period, "-1m");
        assert!(latest(&[]).is_none());
    }

    #[test]
    fn counts_are_in_category_order() {
        let counts = category_counts(&period("0m", 11));
        let labels: Vec<&str> = counts.iter().map(|c| c.category).collect();
        assert_eq!(labels, CATEGORIES.to_vec());
        assert_eq!(counts[0].count, 11);
        assert_eq!(counts[3].count, 1);
    }

    #[test]
    fn tail_is_bounded() {
        let periods = vec![period("0m", 1), period("-1m", 2), period("-2m", 3)];
        assert_eq!(tail(&periods, 2)[0].period, "-1m");
        assert_eq!(tail(&periods, 10).len(), 3);
    }
}
