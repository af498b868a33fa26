use async_trait::async_trait;
use bytes::Bytes;
use url::Url;

use crate::{error::NetError, types::Headers};

/// Transport seam for one-shot resource fetches.
///
/// Fetch models hold a `dyn Net` so tests can substitute an in-process
/// transport for the real [`HttpClient`](crate::HttpClient).
#[async_trait]
pub trait Net: Send + Sync {
    /// Get all bytes from a URL.
    async fn get_bytes(&self, url: Url, headers: Option<Headers>) -> Result<Bytes, NetError>;
}
