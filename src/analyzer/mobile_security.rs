//! Mobile-friendliness and transport-security extraction.

use scraper::{Html, Selector};
use std::sync::LazyLock;

use crate::utils::parse_selector_unsafe;

use super::issues::Issue;

const VIEWPORT_SELECTOR_STR: &str = "meta[name='viewport']";

static VIEWPORT_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| parse_selector_unsafe(VIEWPORT_SELECTOR_STR, "VIEWPORT_SELECTOR"));

/// Mobile and security metrics and issues for one document.
#[derive(Debug, Clone, Default)]
pub struct MobileSecurityAnalysis {
    /// Viewport meta content, if present.
    pub viewport: Option<String>,
    /// Whether the analyzed URL uses HTTPS.
    pub https: bool,
    /// Issues found, in detection order.
    pub issues: Vec<Issue>,
}

/// Analyzes a parsed document and the analyzed URL for mobile and
/// transport-security signals.
///
/// The HTTPS check is on the URL that was analyzed, not on anything in the
/// document.
pub fn analyze_mobile_and_security(document: &Html, url: &str) -> MobileSecurityAnalysis {
    let mut issues = Vec::new();

    let viewport = document
        .select(&VIEWPORT_SELECTOR)
        .next()
        .and_then(|element| element.value().attr("content"))
        .map(str::to_string)
        .filter(|value| !value.is_empty());
    let https = url.starts_with("https://");

    if viewport.is_none() {
        issues.push(Issue::MissingViewport);
    }
    if !https {
        issues.push(Issue::NotHttps);
    }

    MobileSecurityAnalysis {
        viewport,
        https,
        issues,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VIEWPORT_HTML: &str = "<html><head>\
        <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\
        </head></html>";

    #[test]
    fn test_https_with_viewport_is_clean() {
        let doc = Html::parse_document(VIEWPORT_HTML);
        let result = analyze_mobile_and_security(&doc, "https://example.com");
        assert!(result.https);
        assert_eq!(
            result.viewport.as_deref(),
            Some("width=device-width, initial-scale=1")
        );
        assert!(result.issues.is_empty());
    }

    #[test]
    fn test_http_url_flagged() {
        let doc = Html::parse_document(VIEWPORT_HTML);
        let result = analyze_mobile_and_security(&doc, "http://example.com");
        assert!(!result.https);
        assert_eq!(result.issues, vec![Issue::NotHttps]);
    }

    #[test]
    fn test_missing_viewport_flagged() {
        let doc = Html::parse_document("<html><head></head></html>");
        let result = analyze_mobile_and_security(&doc, "https://example.com");
        assert_eq!(result.issues, vec![Issue::MissingViewport]);
    }

    #[test]
    fn test_both_issues_in_order() {
        let doc = Html::parse_document("<html></html>");
        let result = analyze_mobile_and_security(&doc, "http://example.com");
        assert_eq!(result.issues, vec![Issue::MissingViewport, Issue::NotHttps]);
    }
}
