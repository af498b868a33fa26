use thiserror::Error;
use wayfare_net::NetError;

/// Centralized error type for wayfare-fetch.
///
/// Every variant resolves to a terminal `Failed` fetch state; nothing
/// propagates past the owning model.
#[derive(Debug, Error, Clone)]
pub enum FetchError {
    #[error("invalid request URL: {reason}")]
    Url { reason: String },
    #[error("transport failed: {0}")]
    Transport(#[from] NetError),
    #[error("empty response body")]
    EmptyBody,
    #[error("failed to decode response: {reason}")]
    Decode { reason: String },
}

impl FetchError {
    /// Creates a URL construction error.
    pub fn url<E: std::fmt::Display>(err: E) -> Self {
        Self::Url {
            reason: err.to_string(),
        }
    }

    /// Creates a decode error from a serde failure.
    pub fn decode(err: serde_json::Error) -> Self {
        Self::Decode {
            reason: err.to_string(),
        }
    }

    /// Whether this error came from response decoding.
    pub fn is_decode(&self) -> bool {
        matches!(self, FetchError::Decode { .. })
    }
}

pub type FetchResult<T> = Result<T, FetchError>;
