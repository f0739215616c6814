//! The website analysis engine.
//!
//! A deterministic, single-pass pipeline over one HTML document:
//! validate the URL, fetch the page, parse it, run the four metric
//! extractors, score the combined issue list, map issues to suggestions,
//! and assemble the final report.
//!
//! Each run is stateless and self-contained; the only shared state is the
//! immutable HTTP client. Concurrent runs for the same URL are not
//! coalesced - each triggers its own fetch.

mod fetch;
mod issues;
mod mobile_security;
mod performance;
mod report;
mod score;
mod seo;
mod social;
mod suggest;

use std::sync::Arc;

use chrono::Utc;
use log::{debug, info};
use scraper::Html;
use url::Url;

use crate::config::MAX_URL_LENGTH;
use crate::error_handling::AnalyzeError;

pub use issues::Issue;
pub use report::{AnalysisReport, ReportMetrics};

/// Validates that a URL is a well-formed absolute http(s) URL with a host.
///
/// Rejected URLs never reach the network. Length is capped to prevent DoS
/// via absurdly long inputs.
pub fn validate_url(url: &str) -> Result<(), AnalyzeError> {
    if url.len() > MAX_URL_LENGTH {
        return Err(AnalyzeError::InvalidUrl);
    }
    match Url::parse(url) {
        Ok(parsed) if matches!(parsed.scheme(), "http" | "https") && parsed.host_str().is_some() => {
            Ok(())
        }
        _ => Err(AnalyzeError::InvalidUrl),
    }
}

/// Extracts the hostname from a URL, falling back to the raw URL string if
/// hostname extraction fails.
fn extract_domain(url: &str) -> String {
    Url::parse(url)
        .ok()
        .and_then(|parsed| parsed.host_str().map(str::to_string))
        .unwrap_or_else(|| url.to_string())
}

/// The analysis engine.
///
/// Owns the shared HTTP client (User-Agent, timeout, and TLS policy are
/// configured at client construction). One `Auditor` serves any number of
/// concurrent analyses.
#[derive(Debug, Clone)]
pub struct Auditor {
    client: Arc<reqwest::Client>,
}

impl Auditor {
    /// Creates an auditor around a configured HTTP client.
    pub fn new(client: Arc<reqwest::Client>) -> Self {
        Self { client }
    }

    /// Runs the full analysis pipeline for one URL.
    ///
    /// # Errors
    ///
    /// - `AnalyzeError::InvalidUrl` if the URL fails validation (no fetch
    ///   is attempted);
    /// - `AnalyzeError::Fetch` for network/timeout/TLS/non-2xx failures.
    ///
    /// Extraction, scoring and suggestion generation are pure functions
    /// over the fetched document and do not fail.
    pub async fn analyze(&self, url: &str) -> Result<AnalysisReport, AnalyzeError> {
        validate_url(url)?;

        let html = fetch::fetch_html(&self.client, url).await?;

        // Html is not Send, so parse and all four extractors run inside a
        // block scope with no awaits
        let (metrics, issues) = {
            let document = Html::parse_document(&html);

            let seo = seo::analyze_seo(&document);
            debug!("SEO issues for {url}: {}", seo.issues.len());

            let performance = performance::analyze_performance(&html, &document);
            debug!("Performance issues for {url}: {}", performance.issues.len());

            let social = social::analyze_social(&document);
            let mobile_security = mobile_security::analyze_mobile_and_security(&document, url);

            let metrics = ReportMetrics::from_parts(&seo, &performance, &social, &mobile_security);

            // Fixed concatenation order: SEO, performance, social, mobile/security
            let mut issues = seo.issues;
            issues.extend(performance.issues);
            issues.extend(social.issues);
            issues.extend(mobile_security.issues);

            (metrics, issues)
        };

        let score = score::calculate_score(&issues);
        let suggestions = suggest::generate_suggestions(&issues);

        info!(
            "Analyzed {url}: score {score}, {} issue(s)",
            issues.len()
        );

        Ok(AnalysisReport {
            url: url.to_string(),
            domain: extract_domain(url),
            score,
            metrics,
            issues: issues.iter().map(Issue::message).collect(),
            suggestions,
            analyzed_at: Utc::now(),
        })
    }
}
