use std::sync::OnceLock;

use regex::Regex;

use crate::error::FinTrackError;

pub const MAX_TICKER_LENGTH: usize = 12;
pub const MAX_TOP_HOLDERS: usize = 50;

/// History periods the chart endpoint accepts, with their display titles.
pub const VALID_PERIODS: &[(&str, &str)] = &[
    ("1d", "1 Day"),
    ("5d", "5 Days"),
    ("1mo", "1 Month"),
    ("3mo", "3 Months"),
    ("6mo", "6 Months"),
    ("1y", "1 Year"),
    ("2y", "2 Years"),
    ("5y", "5 Years"),
    ("10y", "10 Years"),
    ("ytd", "Year to Date"),
    ("max", "Max"),
];

fn ticker_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    // Index symbols carry a leading caret (^GSPC); share classes and
    // exchanges use '.', '-' or '=' (BRK-B, SHOP.TO, EURUSD=X).
    PATTERN.get_or_init(|| Regex::new(r"^\^?[A-Z0-9][A-Z0-9.\-=]*$").expect("valid ticker regex"))
}

/// Validate a ticker symbol: trim, uppercase, enforce length and charset.
pub fn validate_ticker(input: &str) -> Result<String, FinTrackError> {
    let upper = input.trim().to_uppercase();
    if upper.is_empty() {
        return Err(FinTrackError::InvalidInput(
            "please enter a stock ticker symbol".to_string(),
        ));
    }
    if upper.len() > MAX_TICKER_LENGTH {
        return Err(FinTrackError::InvalidInput(format!(
            "ticker exceeds maximum length of {} characters",
            MAX_TICKER_LENGTH
        )));
    }
    if !ticker_pattern().is_match(&upper) {
        return Err(FinTrackError::InvalidInput(format!(
            "'{}' is not a valid ticker symbol",
            input.trim()
        )));
    }
    Ok(upper)
}

/// Validate a history period such as `1y` or `ytd`, case-insensitive.
pub fn validate_period(input: &str) -> Result<String, FinTrackError> {
    let lower = input.trim().to_lowercase();
    if VALID_PERIODS.iter().any(|(code, _)| *code == lower) {
        Ok(lower)
    } else {
        let codes: Vec<&str> = VALID_PERIODS.iter().map(|(code, _)| *code).collect();
        Err(FinTrackError::InvalidInput(format!(
            "unknown period '{}'. Valid periods: {}",
            input,
            codes.join(", ")
        )))
    }
}

/// Display title for a period code, e.g. `1y` -> `1 Year`. Unknown codes are returned as-is.
pub fn period_title(period: &str) -> &str {
    VALID_PERIODS
        .iter()
        .find(|(code, _)| *code == period)
        .map(|(_, title)| *title)
        .unwrap_or(period)
}

/// Validate the number of holders shown in the ownership chart (1..=50).
pub fn validate_top_holders(n: usize) -> Result<usize, FinTrackError> {
    if !(1..=MAX_TOP_HOLDERS).contains(&n) {
        return Err(FinTrackError::InvalidInput(format!(
            "top holders must be between 1 and {}",
            MAX_TOP_HOLDERS
        )));
    }
    Ok(n)
}

#[cfg(test)]
mod tests {
    use super::*;

    // -- ticker --

    #[test]
    fn ticker_is_trimmed_and_uppercased() {
        assert_eq!(validate_ticker("  aapl ").unwrap(), "AAPL");
    }

    #[test]
    fn ticker_share_class_and_exchange_suffix() {
        assert_eq!(validate_ticker("brk-b").unwrap(), "BRK-B");
        assert_eq!(validate_ticker("shop.to").unwrap(), "SHOP.TO");
        assert_eq!(validate_ticker("EURUSD=X").unwrap(), "EURUSD=X");
    }

    #[test]
    fn ticker_index_caret() {
        assert_eq!(validate_ticker("^gspc").unwrap(), "^GSPC");
    }

    #[test]
    fn ticker_empty() {
        let err = validate_ticker("   ").unwrap_err();
        assert!(err.to_string().contains("please enter a stock ticker symbol"));
    }

    #[test]
    fn ticker_too_long() {
        assert!(validate_ticker("ABCDEFGHIJKLM").is_err());
    }

    #[test]
    fn ticker_bad_chars() {
        assert!(validate_ticker("AA PL").is_err());
        assert!(validate_ticker("AAPL;DROP").is_err());
        assert!(validate_ticker("-AAPL").is_err());
    }

    // -- period --

    #[test]
    fn period_valid() {
        assert_eq!(validate_period("1y").unwrap(), "1y");
        assert_eq!(validate_period("YTD").unwrap(), "ytd");
        assert_eq!(validate_period(" 3mo ").unwrap(), "3mo");
    }

    #[test]
    fn period_invalid() {
        let err = validate_period("7w").unwrap_err();
        assert!(err.to_string().contains("Valid periods"));
    }

    #[test]
    fn period_titles() {
        assert_eq!(period_title("1y"), "1 Year");
        assert_eq!(period_title("ytd"), "Year to Date");
        assert_eq!(period_title("weird"), "weird");
    }

    // -- top holders --

    #[test]
    fn top_holders_bounds() {
        assert_eq!(validate_top_holders(5).unwrap(), 5);
        assert!(validate_top_holders(0).is_err());
        assert!(validate_top_holders(51).is_err());
    }
}
