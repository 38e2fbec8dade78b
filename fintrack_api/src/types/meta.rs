use serde::{Deserialize, Serialize};

use crate::Error;

/// Error object Yahoo embeds in its response envelopes.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct UpstreamError {
    pub code: String,
    #[serde(default)]
    pub description: String,
}

/// The `{"result": [...], "error": ...}` wrapper shared by Yahoo endpoints.
#[derive(Serialize, Deserialize, Debug)]
pub struct Envelope<T> {
    pub result: Option<Vec<T>>,
    pub error: Option<UpstreamError>,
}

impl<T> Envelope<T> {
    /// Returns the first result, or the envelope's error.
    pub fn into_first(self) -> Result<T, Error> {
        if let Some(err) = self.error {
            return Err(Error::Upstream {
                code: err.code,
                description: err.description,
            });
        }
        self.result
            .and_then(|results| results.into_iter().next())
            .ok_or(Error::EmptyResult)
    }
}
