//! Error types for the API client.

/// Errors that can occur when making API requests.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// An HTTP request failed (network error, timeout, or unexpected response).
    #[error("Request failed")]
    RequestFailed,
    /// The API returned a non-success status with a body snippet.
    #[error("Request failed with status {status}")]
    HttpStatus { status: u16, body: String },
    /// The API answered with its own error envelope, e.g. an unknown symbol.
    #[error("{code}: {description}")]
    Upstream { code: String, description: String },
    /// The response envelope carried neither a result nor an error.
    #[error("Response contained no result")]
    EmptyResult,
    /// No session crumb could be obtained.
    #[error("Could not obtain a session crumb")]
    MissingCrumb,
    /// The response body did not match the expected shape.
    #[error("Failed to parse response: {0}")]
    InvalidResponse(String),
}
