//! HTTP client for the Yahoo Finance JSON API.

use std::sync::Mutex;
use std::time::Duration;

use serde::de::DeserializeOwned;
use url::Url;

use crate::{
    query::{OptionsQuery, Query, SummaryQuery},
    types::{
        OptionChainResponse, OptionChainResult, QuoteSummaryResponse, QuoteSummaryResult,
        UpstreamError,
    },
    user_agent::get_user_agent,
    Error,
};

const DEFAULT_BASE_URL: &str = "https://query2.finance.yahoo.com";
const DEFAULT_COOKIE_URL: &str = "https://fc.yahoo.com";
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// HTTP client for the Yahoo Finance `quoteSummary` and `options` endpoints.
///
/// Yahoo only answers these endpoints for requests that carry a session
/// cookie and the matching crumb. The client primes the cookie jar and
/// fetches the crumb on first use, then reuses both for its lifetime.
pub struct Client {
    http: reqwest::Client,
    /// Base URL for the API. Defaults to `https://query2.finance.yahoo.com`.
    base_api_url: String,
    cookie_url: String,
    crumb: Mutex<Option<String>>,
}

impl Client {
    /// Creates a new client pointing at the production Yahoo Finance API.
    pub fn new() -> Result<Self, Error> {
        Self::build(DEFAULT_BASE_URL, DEFAULT_COOKIE_URL, DEFAULT_TIMEOUT)
    }

    /// Creates a new client with a custom base URL. Used for testing with wiremock.
    pub fn with_base_url(base_url: &str) -> Result<Self, Error> {
        Self::with_options(base_url, DEFAULT_TIMEOUT)
    }

    /// Creates a new client with a custom base URL and request timeout.
    /// The session cookie is requested from the base URL itself.
    pub fn with_options(base_url: &str, timeout: Duration) -> Result<Self, Error> {
        let base = base_url.trim_end_matches('/');
        Self::build(base, base, timeout)
    }

    /// Creates a production client with a custom request timeout.
    pub fn with_timeout(timeout: Duration) -> Result<Self, Error> {
        Self::build(DEFAULT_BASE_URL, DEFAULT_COOKIE_URL, timeout)
    }

    fn build(base_url: &str, cookie_url: &str, timeout: Duration) -> Result<Self, Error> {
        let http = reqwest::Client::builder()
            .user_agent(get_user_agent())
            .cookie_store(true)
            .timeout(timeout)
            .build()
            .map_err(|e| {
                tracing::error!("Failed to build HTTP client: {}", e);
                Error::RequestFailed
            })?;
        Ok(Self {
            http,
            base_api_url: base_url.to_string(),
            cookie_url: cookie_url.to_string(),
            crumb: Mutex::new(None),
        })
    }

    async fn crumb(&self) -> Result<String, Error> {
        let cached = self
            .crumb
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clone();
        if let Some(crumb) = cached {
            return Ok(crumb);
        }

        // The cookie endpoint answers 404 but still sets the session cookie.
        if let Err(e) = self.http.get(&self.cookie_url).send().await {
            tracing::warn!("Failed to prime session cookie: {}", e);
        }

        let url = format!("{}/v1/test/getcrumb", self.base_api_url);
        let resp = self.http.get(url).send().await.map_err(|e| {
            tracing::error!("Failed to request crumb: {}", e);
            Error::RequestFailed
        })?;
        let status = resp.status();
        let body = resp.text().await.map_err(|e| {
            tracing::error!("Failed to read crumb body: {}", e);
            Error::RequestFailed
        })?;
        if !status.is_success() {
            tracing::error!("Crumb request failed with status {}", status);
            return Err(Error::HttpStatus {
                status: status.as_u16(),
                body: truncate_body(&body),
            });
        }

        let crumb = body.trim();
        if crumb.is_empty() || crumb.contains(&['<', '{', ' '][..]) {
            return Err(Error::MissingCrumb);
        }
        let crumb = crumb.to_string();
        *self.crumb.lock().unwrap_or_else(|e| e.into_inner()) = Some(crumb.clone());
        Ok(crumb)
    }

    fn get_url(&self, segments: &[&str], query: &impl Query, crumb: &str) -> Result<Url, Error> {
        let mut url = Url::parse(&self.base_api_url).map_err(|e| {
            tracing::error!("Invalid URL constructed: {}", e);
            Error::RequestFailed
        })?;
        url.path_segments_mut()
            .map_err(|_| {
                tracing::error!("Base URL cannot carry a path: {}", self.base_api_url);
                Error::RequestFailed
            })?
            .pop_if_empty()
            .extend(segments);
        let mut url = query.add_to_url(&url);
        url.query_pairs_mut().append_pair("crumb", crumb);
        Ok(url)
    }

    async fn get<T, Q>(&self, segments: &[&str], query: &Q) -> Result<T, Error>
    where
        T: DeserializeOwned,
        Q: Query,
    {
        let crumb = self.crumb().await?;
        let url = self.get_url(segments, query, &crumb)?;
        tracing::debug!("GET {}", url);

        let resp = self
            .http
            .get(url)
            .header("accept", "application/json, text/plain, */*")
            .header("accept-language", "en-US,en;q=0.9")
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Failed to get resource: {}", e);
                Error::RequestFailed
            })?;

        let status = resp.status();
        let body = resp.text().await.map_err(|e| {
            tracing::error!("Failed to read response body: {}", e);
            Error::RequestFailed
        })?;

        if !status.is_success() {
            if let Some(err) = upstream_error(&body) {
                tracing::error!("Upstream error {}: {}", err.code, err.description);
                return Err(Error::Upstream {
                    code: err.code,
                    description: err.description,
                });
            }
            let snippet = truncate_body(&body);
            tracing::error!("Request failed with status {}: {}", status, snippet);
            return Err(Error::HttpStatus {
                status: status.as_u16(),
                body: snippet,
            });
        }

        serde_json::from_str::<T>(&body).map_err(|e| {
            let snippet = truncate_body(&body);
            tracing::error!("Failed to parse resource: {} | body: {}", e, snippet);
            Error::InvalidResponse(e.to_string())
        })
    }

    /// Fetches the requested `quoteSummary` modules for one symbol.
    pub async fn get_quote_summary(
        &self,
        symbol: &str,
        query: &SummaryQuery,
    ) -> Result<QuoteSummaryResult, Error> {
        let resp = self
            .get::<QuoteSummaryResponse, SummaryQuery>(
                &["v10", "finance", "quoteSummary", symbol],
                query,
            )
            .await?;
        resp.quote_summary.into_first()
    }

    /// Fetches the option chain for one symbol.
    pub async fn get_options(
        &self,
        symbol: &str,
        query: &OptionsQuery,
    ) -> Result<OptionChainResult, Error> {
        let resp = self
            .get::<OptionChainResponse, OptionsQuery>(&["v7", "finance", "options", symbol], query)
            .await?;
        resp.option_chain.into_first()
    }
}

/// Finds the `error` object inside whichever envelope the body carries.
fn upstream_error(body: &str) -> Option<UpstreamError> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    value
        .as_object()?
        .values()
        .find_map(|envelope| serde_json::from_value(envelope.get("error")?.clone()).ok())
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 2000;
    if body.len() <= MAX {
        body.to_string()
    } else {
        let mut end = MAX;
        while !body.is_char_boundary(end) {
            end -= 1;
        }
        format!("{}...[truncated]", &body[..end])
    }
}
