//! Error types for the library layer.

use std::fmt;

use crate::yahoo::YahooError;

/// Errors produced by the library layer, wrapping upstream provider errors
/// and adding configuration and input validation failures.
#[derive(Debug)]
pub enum FinTrackError {
    /// An error from the `quoteSummary`/`options` API client.
    Api(fintrack_api::Error),
    /// An error from the chart (price history) provider.
    Yahoo(YahooError),
    /// User-provided input failed validation.
    InvalidInput(String),
    /// The configuration file could not be read or parsed.
    Config(String),
}

impl fmt::Display for FinTrackError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Api(e) => write!(f, "API error: {}", e),
            Self::Yahoo(e) => write!(f, "Price history error: {}", e),
            Self::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            Self::Config(msg) => write!(f, "Configuration error: {}", msg),
        }
    }
}

impl std::error::Error for FinTrackError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Api(e) => Some(e),
            Self::Yahoo(e) => Some(e),
            _ => None,
        }
    }
}

impl From<fintrack_api::Error> for FinTrackError {
    fn from(e: fintrack_api::Error) -> Self {
        Self::Api(e)
    }
}

impl From<YahooError> for FinTrackError {
    fn from(e: YahooError) -> Self {
        Self::Yahoo(e)
    }
}
