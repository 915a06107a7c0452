//! HTTP client abstraction for testability

use std::future::Future;

use tracing::trace;

use super::types::UpstreamError;

/// Trait for asynchronous HTTP client operations.
///
/// This abstraction allows for dependency injection and easier testing
/// by enabling mock HTTP clients in tests.
pub trait AsyncHttpClient: Send + Sync {
    /// Performs an async HTTP GET request.
    ///
    /// # Arguments
    ///
    /// * `url` - The URL to request
    ///
    /// # Returns
    ///
    /// The response body for a 2xx response. Any other status is returned as
    /// [`UpstreamError::Unavailable`] carrying the status code; transport
    /// failures as [`UpstreamError::Unreachable`].
    fn get(&self, url: &str) -> impl Future<Output = Result<Vec<u8>, UpstreamError>> + Send;
}

/// Async HTTP client implementation using reqwest.
///
/// Every request carries the configured `User-Agent`. Tile servers such as
/// tile.openstreetmap.org block clients that do not identify themselves, so
/// the value is mandatory and comes from configuration.
///
/// No request timeout is set; a deadline belongs to whoever drives the
/// request.
#[derive(Clone, Debug)]
pub struct AsyncReqwestClient {
    client: reqwest::Client,
}

impl AsyncReqwestClient {
    /// Creates a new AsyncReqwestClient identifying itself as `user_agent`.
    ///
    /// # Errors
    ///
    /// Returns [`UpstreamError::Unreachable`] if `user_agent` is blank or the
    /// client cannot be built (e.g. TLS backend failure).
    pub fn new(user_agent: &str) -> Result<Self, UpstreamError> {
        if user_agent.trim().is_empty() {
            return Err(UpstreamError::Unreachable(
                "User-Agent must not be empty".to_string(),
            ));
        }

        let client = reqwest::Client::builder()
            .user_agent(user_agent)
            // Keep connections warm for bursts of neighbouring tiles
            .pool_idle_timeout(std::time::Duration::from_secs(90))
            .tcp_nodelay(true)
            .build()
            .map_err(|e| {
                UpstreamError::Unreachable(format!("Failed to create async HTTP client: {}", e))
            })?;

        Ok(Self { client })
    }
}

impl AsyncHttpClient for AsyncReqwestClient {
    async fn get(&self, url: &str) -> Result<Vec<u8>, UpstreamError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| UpstreamError::Unreachable(format!("Request failed: {}", e)))?;

        let status = response.status();
        trace!(url, status = status.as_u16(), "Upstream response");

        if !status.is_success() {
            return Err(UpstreamError::Unavailable {
                status: status.as_u16(),
            });
        }

        response
            .bytes()
            .await
            .map(|b| b.to_vec())
            .map_err(|e| UpstreamError::Unreachable(format!("Failed to read response: {}", e)))
    }
}
