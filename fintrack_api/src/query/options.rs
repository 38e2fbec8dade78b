//! Query builder for the `options` endpoint.

use chrono::NaiveDate;
use url::Url;

use super::common::Query;

/// Options chain query. Without an expiration, Yahoo returns the nearest one.
#[derive(Clone, Copy, Debug, Default)]
pub struct OptionsQuery {
    /// Expiration as a unix timestamp at UTC midnight.
    pub expiration: Option<i64>,
}

impl OptionsQuery {
    pub fn with_expiration(mut self, expiration: i64) -> Self {
        self.expiration = Some(expiration);
        self
    }

    pub fn with_expiration_date(self, date: NaiveDate) -> Self {
        let ts = date
            .and_hms_opt(0, 0, 0)
            .map(|dt| dt.and_utc().timestamp())
            .unwrap_or_default();
        self.with_expiration(ts)
    }
}

impl Query for OptionsQuery {
    fn add_to_url(&self, url: &Url) -> Url {
        let mut url = url.clone();
        if let Some(expiration) = self.expiration {
            url.query_pairs_mut()
                .append_pair("date", &expiration.to_string());
        }
        url
    }
}
