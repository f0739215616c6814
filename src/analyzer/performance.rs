//! Performance metric extraction.
//!
//! Derives size and resource-weight signals from the raw HTML and the
//! parsed document: page size, image/script/stylesheet counts, and the
//! visible-text-to-HTML ratio.

use scraper::{Html, Selector};
use std::sync::LazyLock;

use crate::utils::parse_selector_unsafe;

use super::issues::Issue;

const IMG_SELECTOR_STR: &str = "img";
const SCRIPT_SELECTOR_STR: &str = "script";
const STYLESHEET_LINK_SELECTOR_STR: &str = "link[rel='stylesheet']";
const STYLE_SELECTOR_STR: &str = "style";

static IMG_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| parse_selector_unsafe(IMG_SELECTOR_STR, "IMG_SELECTOR"));
static SCRIPT_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| parse_selector_unsafe(SCRIPT_SELECTOR_STR, "SCRIPT_SELECTOR"));
static STYLESHEET_LINK_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    parse_selector_unsafe(STYLESHEET_LINK_SELECTOR_STR, "STYLESHEET_LINK_SELECTOR")
});
static STYLE_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| parse_selector_unsafe(STYLE_SELECTOR_STR, "STYLE_SELECTOR"));

/// Page size threshold in kilobytes.
const MAX_PAGE_SIZE_KB: f64 = 100.0;
/// Script count threshold.
const MAX_SCRIPT_COUNT: usize = 20;
/// Stylesheet count threshold (links plus inline blocks).
const MAX_STYLESHEET_COUNT: usize = 10;
/// Minimum visible-text-to-HTML ratio, in percent.
const MIN_TEXT_RATIO_PCT: f64 = 10.0;

/// Performance metrics and issues for one document.
#[derive(Debug, Clone, Default)]
pub struct PerformanceAnalysis {
    /// Page size in kilobytes, formatted to two decimals ("123.45").
    pub page_size_kb: String,
    /// Number of `<img>` elements.
    pub image_count: usize,
    /// Number of `<script>` elements.
    pub script_count: usize,
    /// Stylesheet links plus inline `<style>` blocks.
    pub style_count: usize,
    /// Sum of image, script, and style counts.
    pub resource_count: usize,
    /// Visible-text-to-HTML ratio as a percentage, two-decimal precision.
    pub text_ratio: f64,
    /// Issues found, in detection order.
    pub issues: Vec<Issue>,
}

/// Analyzes raw HTML and its parsed document for performance signals.
///
/// Page size is the byte length of the raw response body. The text ratio
/// compares the document's whitespace-collapsed visible text against the
/// raw HTML character length. Threshold comparisons use the same
/// two-decimal rounded values that land in the metrics.
pub fn analyze_performance(html: &str, document: &Html) -> PerformanceAnalysis {
    let mut issues = Vec::new();

    let page_size_bytes = html.len();
    let page_size_kb = format!("{:.2}", page_size_bytes as f64 / 1024.0);
    // Threshold checks use the rounded value so the stored metric and the
    // issue can never disagree at the boundary
    let page_size_kb_value: f64 = page_size_kb.parse().unwrap_or(0.0);

    let image_count = document.select(&IMG_SELECTOR).count();
    let script_count = document.select(&SCRIPT_SELECTOR).count();
    let style_count = document.select(&STYLESHEET_LINK_SELECTOR).count()
        + document.select(&STYLE_SELECTOR).count();

    let text_content = document
        .root_element()
        .text()
        .collect::<String>()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ");
    let html_chars = html.chars().count();
    let ratio_pct = if html_chars > 0 {
        (text_content.chars().count() as f64 / html_chars as f64) * 100.0
    } else {
        0.0
    };
    let ratio_formatted = format!("{ratio_pct:.2}");
    let text_ratio: f64 = ratio_formatted.parse().unwrap_or(0.0);

    if page_size_kb_value > MAX_PAGE_SIZE_KB {
        issues.push(Issue::PageTooLarge {
            size_kb: page_size_kb.clone(),
        });
    }

    if script_count > MAX_SCRIPT_COUNT {
        issues.push(Issue::TooManyScripts(script_count));
    }

    if style_count > MAX_STYLESHEET_COUNT {
        issues.push(Issue::TooManyStylesheets(style_count));
    }

    if text_ratio < MIN_TEXT_RATIO_PCT {
        issues.push(Issue::LowTextRatio {
            ratio: ratio_formatted,
        });
    }

    PerformanceAnalysis {
        page_size_kb,
        image_count,
        script_count,
        style_count,
        resource_count: image_count + script_count + style_count,
        text_ratio,
        issues,
    }
}
