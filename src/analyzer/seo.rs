//! SEO metric extraction.
//!
//! Reads title, meta description, heading counts, canonical/robots/favicon
//! links, and image alt coverage from a parsed document.

use scraper::{Html, Selector};
use std::sync::LazyLock;

use crate::utils::parse_selector_unsafe;

use super::issues::Issue;

// CSS selector strings
const TITLE_SELECTOR_STR: &str = "title";
const META_DESCRIPTION_SELECTOR_STR: &str = "meta[name='description']";
const META_ROBOTS_SELECTOR_STR: &str = "meta[name='robots']";
const H1_SELECTOR_STR: &str = "h1";
const H2_SELECTOR_STR: &str = "h2";
const H3_SELECTOR_STR: &str = "h3";
const CANONICAL_SELECTOR_STR: &str = "link[rel='canonical']";
const FAVICON_SELECTOR_STR: &str = "link[rel='icon']";
const FAVICON_SHORTCUT_SELECTOR_STR: &str = "link[rel='shortcut icon']";
const IMG_SELECTOR_STR: &str = "img";

static TITLE_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| parse_selector_unsafe(TITLE_SELECTOR_STR, "TITLE_SELECTOR"));
static META_DESCRIPTION_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    parse_selector_unsafe(META_DESCRIPTION_SELECTOR_STR, "META_DESCRIPTION_SELECTOR")
});
static META_ROBOTS_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| parse_selector_unsafe(META_ROBOTS_SELECTOR_STR, "META_ROBOTS_SELECTOR"));
static H1_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| parse_selector_unsafe(H1_SELECTOR_STR, "H1_SELECTOR"));
static H2_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| parse_selector_unsafe(H2_SELECTOR_STR, "H2_SELECTOR"));
static H3_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| parse_selector_unsafe(H3_SELECTOR_STR, "H3_SELECTOR"));
static CANONICAL_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| parse_selector_unsafe(CANONICAL_SELECTOR_STR, "CANONICAL_SELECTOR"));
static FAVICON_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| parse_selector_unsafe(FAVICON_SELECTOR_STR, "FAVICON_SELECTOR"));
static FAVICON_SHORTCUT_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    parse_selector_unsafe(FAVICON_SHORTCUT_SELECTOR_STR, "FAVICON_SHORTCUT_SELECTOR")
});
static IMG_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| parse_selector_unsafe(IMG_SELECTOR_STR, "IMG_SELECTOR"));

/// Title length bounds, in characters.
const TITLE_LENGTH_RANGE: std::ops::RangeInclusive<usize> = 10..=60;
/// Meta description length bounds, in characters.
const META_DESCRIPTION_LENGTH_RANGE: std::ops::RangeInclusive<usize> = 50..=160;

/// SEO metrics and issues for one document.
#[derive(Debug, Clone, Default)]
pub struct SeoAnalysis {
    /// Page title, if present and non-empty.
    pub title: Option<String>,
    /// Title length in characters (0 if absent).
    pub title_length: usize,
    /// Meta description content, if present and non-empty.
    pub meta_description: Option<String>,
    /// Meta description length in characters (0 if absent).
    pub meta_description_length: usize,
    /// Number of `<h1>` elements.
    pub h1_count: usize,
    /// Number of `<h2>` elements.
    pub h2_count: usize,
    /// Number of `<h3>` elements.
    pub h3_count: usize,
    /// Canonical link href, if present.
    pub canonical: Option<String>,
    /// Robots meta content, if present.
    pub robots: Option<String>,
    /// Favicon href from `rel="icon"` or `rel="shortcut icon"`, if present.
    pub favicon: Option<String>,
    /// Number of images without alt text.
    pub images_without_alt: usize,
    /// Issues found, in detection order.
    pub issues: Vec<Issue>,
}

/// First matching element's attribute, treating an empty value as absent.
///
/// The audit cares about meaningful values: `<meta name="description"
/// content="">` is as useless to a crawler as no tag at all, so both come
/// back as `None`.
fn first_attr(document: &Html, selector: &Selector, attr: &str) -> Option<String> {
    document
        .select(selector)
        .next()
        .and_then(|element| element.value().attr(attr))
        .map(str::to_string)
        .filter(|value| !value.is_empty())
}

/// Extracts the page title: the first `<title>` element's text content,
/// trimmed. Empty or absent titles come back as `None`.
fn extract_title(document: &Html) -> Option<String> {
    document
        .select(&TITLE_SELECTOR)
        .next()
        .map(|element| element.text().collect::<String>().trim().to_string())
        .filter(|title| !title.is_empty())
}

/// Analyzes a parsed document for SEO signals.
///
/// Pure function over the document: no network, no mutation, deterministic
/// output for identical input.
pub fn analyze_seo(document: &Html) -> SeoAnalysis {
    let mut issues = Vec::new();

    let title = extract_title(document);
    let title_length = title.as_ref().map_or(0, |t| t.chars().count());

    let meta_description = first_attr(document, &META_DESCRIPTION_SELECTOR, "content");
    let meta_description_length = meta_description
        .as_ref()
        .map_or(0, |d| d.chars().count());

    let h1_count = document.select(&H1_SELECTOR).count();
    let h2_count = document.select(&H2_SELECTOR).count();
    let h3_count = document.select(&H3_SELECTOR).count();

    let canonical = first_attr(document, &CANONICAL_SELECTOR, "href");
    let robots = first_attr(document, &META_ROBOTS_SELECTOR, "content");
    let favicon = first_attr(document, &FAVICON_SELECTOR, "href")
        .or_else(|| first_attr(document, &FAVICON_SHORTCUT_SELECTOR, "href"));

    let images_without_alt = document
        .select(&IMG_SELECTOR)
        .filter(|img| img.value().attr("alt").map_or(true, str::is_empty))
        .count();

    if title.is_none() {
        issues.push(Issue::MissingTitle);
    } else if !TITLE_LENGTH_RANGE.contains(&title_length) {
        issues.push(Issue::TitleLength);
    }

    if meta_description.is_none() {
        issues.push(Issue::MissingMetaDescription);
    } else if !META_DESCRIPTION_LENGTH_RANGE.contains(&meta_description_length) {
        issues.push(Issue::MetaDescriptionLength);
    }

    if h1_count == 0 {
        issues.push(Issue::MissingH1);
    } else if h1_count > 1 {
        issues.push(Issue::MultipleH1);
    }

    if canonical.is_none() {
        issues.push(Issue::MissingCanonical);
    }

    if favicon.is_none() {
        issues.push(Issue::MissingFavicon);
    }

    if images_without_alt > 0 {
        issues.push(Issue::ImagesMissingAlt(images_without_alt));
    }

    SeoAnalysis {
        title,
        title_length,
        meta_description,
        meta_description_length,
        h1_count,
        h2_count,
        h3_count,
        canonical,
        robots,
        favicon,
        images_without_alt,
        issues,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(html: &str) -> Html {
        Html::parse_document(html)
    }

    #[test]
    fn test_missing_title_flagged() {
        let doc = parse("<html><head></head><body></body></html>");
        let result = analyze_seo(&doc);
        assert_eq!(result.title, None);
        assert_eq!(result.title_length, 0);
        assert!(result.issues.contains(&Issue::MissingTitle));
        assert!(!result.issues.contains(&Issue::TitleLength));
    }

    #[test]
    fn test_empty_title_counts_as_missing() {
        let doc = parse("<html><head><title>   </title></head></html>");
        let result = analyze_seo(&doc);
        assert!(result.issues.contains(&Issue::MissingTitle));
    }

    #[test]
    fn test_title_length_boundaries() {
        // 10 and 60 characters are in range; 9 and 61 are not
        for (len, flagged) in [(9, true), (10, false), (60, false), (61, true)] {
            let html = format!("<html><head><title>{}</title></head></html>", "a".repeat(len));
            let result = analyze_seo(&parse(&html));
            assert_eq!(
                result.issues.contains(&Issue::TitleLength),
                flagged,
                "length {len}"
            );
            assert_eq!(result.title_length, len);
        }
    }

    #[test]
    fn test_title_length_issue_is_independent_of_other_fields() {
        let doc = parse("<html><head><title>Short</title></head><body><h1>One</h1></body></html>");
        let result = analyze_seo(&doc);
        assert!(result.issues.contains(&Issue::TitleLength));
        assert!(!result.issues.contains(&Issue::MissingTitle));
    }

    #[test]
    fn test_meta_description_rules() {
        let doc = parse("<html><head></head></html>");
        assert!(analyze_seo(&doc)
            .issues
            .contains(&Issue::MissingMetaDescription));

        let short = parse("<html><head><meta name=\"description\" content=\"too short\"></head></html>");
        assert!(analyze_seo(&short)
            .issues
            .contains(&Issue::MetaDescriptionLength));

        let ok_content = "a".repeat(80);
        let ok = parse(&format!(
            "<html><head><meta name=\"description\" content=\"{ok_content}\"></head></html>"
        ));
        let result = analyze_seo(&ok);
        assert!(!result.issues.contains(&Issue::MissingMetaDescription));
        assert!(!result.issues.contains(&Issue::MetaDescriptionLength));
        assert_eq!(result.meta_description_length, 80);
    }

    #[test]
    fn test_h1_rules() {
        let none = parse("<html><body><h2>sub</h2></body></html>");
        assert!(analyze_seo(&none).issues.contains(&Issue::MissingH1));

        let one = parse("<html><body><h1>Main</h1></body></html>");
        let result = analyze_seo(&one);
        assert!(!result.issues.contains(&Issue::MissingH1));
        assert!(!result.issues.contains(&Issue::MultipleH1));
        assert_eq!(result.h1_count, 1);

        let two = parse("<html><body><h1>One</h1><h1>Two</h1></body></html>");
        assert!(analyze_seo(&two).issues.contains(&Issue::MultipleH1));
    }

    #[test]
    fn test_heading_counts() {
        let doc = parse("<html><body><h1>a</h1><h2>b</h2><h2>c</h2><h3>d</h3><h3>e</h3><h3>f</h3></body></html>");
        let result = analyze_seo(&doc);
        assert_eq!(result.h1_count, 1);
        assert_eq!(result.h2_count, 2);
        assert_eq!(result.h3_count, 3);
    }

    #[test]
    fn test_canonical_and_robots() {
        let doc = parse(
            "<html><head>\
             <link rel=\"canonical\" href=\"https://example.com/\">\
             <meta name=\"robots\" content=\"index, follow\">\
             </head></html>",
        );
        let result = analyze_seo(&doc);
        assert_eq!(result.canonical.as_deref(), Some("https://example.com/"));
        assert_eq!(result.robots.as_deref(), Some("index, follow"));
        assert!(!result.issues.contains(&Issue::MissingCanonical));
    }

    #[test]
    fn test_favicon_both_rel_forms() {
        let icon = parse("<html><head><link rel=\"icon\" href=\"/favicon.ico\"></head></html>");
        assert_eq!(analyze_seo(&icon).favicon.as_deref(), Some("/favicon.ico"));

        let shortcut =
            parse("<html><head><link rel=\"shortcut icon\" href=\"/fav.png\"></head></html>");
        assert_eq!(analyze_seo(&shortcut).favicon.as_deref(), Some("/fav.png"));

        let none = parse("<html><head></head></html>");
        assert!(analyze_seo(&none).issues.contains(&Issue::MissingFavicon));
    }

    #[test]
    fn test_images_missing_alt() {
        let doc = parse(
            "<html><body>\
             <img src=\"a.png\" alt=\"described\">\
             <img src=\"b.png\" alt=\"\">\
             <img src=\"c.png\">\
             </body></html>",
        );
        let result = analyze_seo(&doc);
        // Empty alt counts as missing, same as no alt at all
        assert_eq!(result.images_without_alt, 2);
        assert!(result.issues.contains(&Issue::ImagesMissingAlt(2)));
    }

    #[test]
    fn test_clean_page_has_no_seo_issues() {
        let description = "a".repeat(90);
        let doc = parse(&format!(
            "<html><head>\
             <title>A perfectly reasonable title</title>\
             <meta name=\"description\" content=\"{description}\">\
             <link rel=\"canonical\" href=\"https://example.com/\">\
             <link rel=\"icon\" href=\"/favicon.ico\">\
             </head><body><h1>Main heading</h1></body></html>"
        ));
        assert!(analyze_seo(&doc).issues.is_empty());
    }

    #[test]
    fn test_malformed_html_does_not_panic() {
        let doc = parse("<html><head><title>Broken<body><h1>Unclosed");
        let result = analyze_seo(&doc);
        assert!(result.title.is_some());
        assert_eq!(result.h1_count, 1);
    }
}
