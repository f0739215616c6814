//! Page fetching.

use log::debug;

use crate::config::MAX_RESPONSE_BODY_SIZE;
use crate::error_handling::AnalyzeError;

/// Fetches the raw HTML for a URL.
///
/// Issues a GET through the shared client (which carries the browser-like
/// User-Agent, the hard timeout, and the TLS relaxation policy) with
/// realistic browser accept headers so analyzed sites serve the same
/// markup they would serve a person.
///
/// # Errors
///
/// Any network failure, timeout, TLS error, or non-2xx status becomes
/// `AnalyzeError::Fetch` carrying the underlying cause message. No retry:
/// the caller may resubmit manually.
pub async fn fetch_html(client: &reqwest::Client, url: &str) -> Result<String, AnalyzeError> {
    debug!("Fetching {url}");

    let response = client
        .get(url)
        .header(
            reqwest::header::ACCEPT,
            "text/html,application/xhtml+xml,application/xml;q=0.9,image/avif,image/webp,*/*;q=0.8",
        )
        .header(reqwest::header::ACCEPT_LANGUAGE, "en-US,en;q=0.9")
        .send()
        .await
        .map_err(|e| AnalyzeError::Fetch(e.to_string()))?;

    let status = response.status();
    if !status.is_success() {
        return Err(AnalyzeError::Fetch(format!(
            "request returned status {status}"
        )));
    }

    // .text() decompresses and decodes per the response charset
    let body = response
        .text()
        .await
        .map_err(|e| AnalyzeError::Fetch(e.to_string()))?;

    if body.len() > MAX_RESPONSE_BODY_SIZE {
        return Err(AnalyzeError::Fetch(format!(
            "response body too large ({} bytes, limit {})",
            body.len(),
            MAX_RESPONSE_BODY_SIZE
        )));
    }

    debug!("Fetched {} bytes from {url}", body.len());
    Ok(body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use wiremock::matchers::method;
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn test_client(timeout: Duration) -> reqwest::Client {
        reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .expect("client should build")
    }

    #[tokio::test]
    async fn test_fetch_returns_body() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html><body>ok</body></html>"))
            .mount(&server)
            .await;

        let client = test_client(Duration::from_secs(5));
        let body = fetch_html(&client, &server.uri()).await.expect("fetch should succeed");
        assert_eq!(body, "<html><body>ok</body></html>");
    }

    #[tokio::test]
    async fn test_non_2xx_is_fetch_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let client = test_client(Duration::from_secs(5));
        let err = fetch_html(&client, &server.uri()).await.unwrap_err();
        match err {
            AnalyzeError::Fetch(msg) => assert!(msg.contains("404"), "got: {msg}"),
            other => panic!("expected Fetch error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_slow_site_times_out() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_delay(Duration::from_secs(30))
                    .set_body_string("too late"),
            )
            .mount(&server)
            .await;

        // Short client timeout so the test itself stays fast; the production
        // client uses the configured 10s bound the same way
        let client = test_client(Duration::from_millis(200));
        let start = std::time::Instant::now();
        let err = fetch_html(&client, &server.uri()).await.unwrap_err();
        assert!(start.elapsed() < Duration::from_secs(5), "must not hang");
        assert!(matches!(err, AnalyzeError::Fetch(_)));
    }

    #[tokio::test]
    async fn test_unreachable_host_is_fetch_error() {
        // Port 9 (discard) on localhost is almost certainly closed
        let client = test_client(Duration::from_secs(2));
        let err = fetch_html(&client, "http://127.0.0.1:9/").await.unwrap_err();
        assert!(matches!(err, AnalyzeError::Fetch(_)));
    }
}
