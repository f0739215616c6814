//! HTTP client initialization.

use std::sync::Arc;
use std::time::Duration;

use reqwest::ClientBuilder;

use crate::config::Config;
use crate::error_handling::InitializationError;

/// Initializes the HTTP client used for all page fetches.
///
/// Creates a `reqwest::Client` configured with:
/// - User-Agent header from config (browser-like by default)
/// - Hard per-request timeout from config (10s by default)
/// - Redirect following enabled (reqwest default, up to 10 hops)
/// - Rustls TLS backend
/// - Certificate validation relaxed when `accept_invalid_certs` is set,
///   so sites with self-signed or misconfigured certificates can still be
///   audited
///
/// # Errors
///
/// Returns `InitializationError::HttpClientError` if client creation fails.
pub fn init_client(config: &Config) -> Result<Arc<reqwest::Client>, InitializationError> {
    let client = ClientBuilder::new()
        .timeout(Duration::from_secs(config.timeout_seconds))
        .user_agent(config.user_agent.clone())
        .danger_accept_invalid_certs(config.accept_invalid_certs)
        .build()?;
    Ok(Arc::new(client))
}
