//! The analysis report: the immutable artifact of one completed run.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::mobile_security::MobileSecurityAnalysis;
use super::performance::PerformanceAnalysis;
use super::seo::SeoAnalysis;
use super::social::SocialAnalysis;

/// Flat metric map merged from all four extractors.
///
/// Field names (after camelCase renaming) are a wire contract shared with
/// persisted reports and API consumers; renaming one is a breaking change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportMetrics {
    /// Title length in characters (0 if absent).
    pub title_length: usize,
    /// Meta description length in characters (0 if absent).
    pub meta_description_length: usize,
    /// Number of `<h1>` elements.
    pub h1_count: usize,
    /// Number of `<h2>` elements.
    pub h2_count: usize,
    /// Number of `<h3>` elements.
    pub h3_count: usize,
    /// Canonical link href.
    pub canonical: Option<String>,
    /// Robots meta content.
    pub robots: Option<String>,
    /// Favicon href.
    pub favicon: Option<String>,
    /// Page size as a display string, e.g. "12.34 KB".
    pub page_size: String,
    /// Number of `<img>` elements.
    pub image_count: usize,
    /// Number of `<script>` elements.
    pub script_count: usize,
    /// Stylesheet links plus inline `<style>` blocks.
    pub style_count: usize,
    /// Sum of image, script, and style counts.
    pub resource_count: usize,
    /// Visible-text-to-HTML ratio as a percentage.
    pub text_ratio: f64,
    /// `og:title` content.
    pub og_title: Option<String>,
    /// `og:description` content.
    pub og_description: Option<String>,
    /// `og:image` content.
    pub og_image: Option<String>,
    /// `twitter:card` content.
    pub twitter_card: Option<String>,
    /// Viewport meta content.
    pub viewport: Option<String>,
    /// Whether the analyzed URL uses HTTPS.
    pub https: bool,
}

impl ReportMetrics {
    /// Merges the four extractor results under the fixed metric keys.
    ///
    /// Extractor results never reference each other, so merge order cannot
    /// affect the outcome; each key comes from exactly one extractor.
    pub(crate) fn from_parts(
        seo: &SeoAnalysis,
        performance: &PerformanceAnalysis,
        social: &SocialAnalysis,
        mobile_security: &MobileSecurityAnalysis,
    ) -> Self {
        Self {
            title_length: seo.title_length,
            meta_description_length: seo.meta_description_length,
            h1_count: seo.h1_count,
            h2_count: seo.h2_count,
            h3_count: seo.h3_count,
            canonical: seo.canonical.clone(),
            robots: seo.robots.clone(),
            favicon: seo.favicon.clone(),
            page_size: format!("{} KB", performance.page_size_kb),
            image_count: performance.image_count,
            script_count: performance.script_count,
            style_count: performance.style_count,
            resource_count: performance.resource_count,
            text_ratio: performance.text_ratio,
            og_title: social.og_title.clone(),
            og_description: social.og_description.clone(),
            og_image: social.og_image.clone(),
            twitter_card: social.twitter_card.clone(),
            viewport: mobile_security.viewport.clone(),
            https: mobile_security.https,
        }
    }
}

/// The final artifact of one analysis run.
///
/// Immutable once produced: `score` and `suggestions` are pure functions of
/// `issues`, computed exactly once by the pipeline. Persistence and
/// retrieval must never recompute them.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisReport {
    /// The analyzed URL.
    pub url: String,
    /// Hostname of the analyzed URL, or the raw URL if the hostname could
    /// not be extracted.
    pub domain: String,
    /// Overall score, 0-100 inclusive.
    pub score: u32,
    /// Merged metrics from all four extractors.
    pub metrics: ReportMetrics,
    /// All issues in extractor order: SEO, performance, social, then
    /// mobile/security.
    pub issues: Vec<String>,
    /// One suggestion per issue, in issue order.
    pub suggestions: Vec<String>,
    /// When the pipeline completed.
    pub analyzed_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metric_wire_names_are_camel_case() {
        let metrics = ReportMetrics {
            title_length: 12,
            meta_description_length: 0,
            h1_count: 1,
            h2_count: 0,
            h3_count: 0,
            canonical: None,
            robots: None,
            favicon: Some("/favicon.ico".to_string()),
            page_size: "4.88 KB".to_string(),
            image_count: 2,
            script_count: 1,
            style_count: 1,
            resource_count: 4,
            text_ratio: 23.45,
            og_title: None,
            og_description: None,
            og_image: None,
            twitter_card: None,
            viewport: Some("width=device-width".to_string()),
            https: true,
        };
        let json = serde_json::to_value(&metrics).expect("metrics should serialize");
        // The exact wire names consumers depend on
        for key in [
            "titleLength",
            "metaDescriptionLength",
            "h1Count",
            "h2Count",
            "h3Count",
            "canonical",
            "robots",
            "favicon",
            "pageSize",
            "imageCount",
            "scriptCount",
            "styleCount",
            "resourceCount",
            "textRatio",
            "ogTitle",
            "ogDescription",
            "ogImage",
            "twitterCard",
            "viewport",
            "https",
        ] {
            assert!(json.get(key).is_some(), "missing wire field {key}");
        }
        assert_eq!(json["pageSize"], "4.88 KB");
        assert_eq!(json["https"], true);
    }

    #[test]
    fn test_report_serializes_analyzed_at() {
        let report = AnalysisReport {
            url: "https://example.com".to_string(),
            domain: "example.com".to_string(),
            score: 88,
            metrics: ReportMetrics {
                title_length: 0,
                meta_description_length: 0,
                h1_count: 0,
                h2_count: 0,
                h3_count: 0,
                canonical: None,
                robots: None,
                favicon: None,
                page_size: "0.00 KB".to_string(),
                image_count: 0,
                script_count: 0,
                style_count: 0,
                resource_count: 0,
                text_ratio: 0.0,
                og_title: None,
                og_description: None,
                og_image: None,
                twitter_card: None,
                viewport: None,
                https: true,
            },
            issues: vec![],
            suggestions: vec![],
            analyzed_at: Utc::now(),
        };
        let json = serde_json::to_value(&report).expect("report should serialize");
        assert!(json.get("analyzedAt").is_some());
        assert_eq!(json["score"], 88);
    }
}
