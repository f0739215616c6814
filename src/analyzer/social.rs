//! Social metadata extraction.
//!
//! Reads the Open Graph title/description/image meta tags and the Twitter
//! card tag. Missing Open Graph tags are issues; a missing Twitter card is
//! recorded as a metric only.

use scraper::{Html, Selector};
use std::sync::LazyLock;

use crate::utils::parse_selector_unsafe;

use super::issues::Issue;

const OG_TITLE_SELECTOR_STR: &str = "meta[property='og:title']";
const OG_DESCRIPTION_SELECTOR_STR: &str = "meta[property='og:description']";
const OG_IMAGE_SELECTOR_STR: &str = "meta[property='og:image']";
const TWITTER_CARD_SELECTOR_STR: &str = "meta[name='twitter:card']";

static OG_TITLE_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| parse_selector_unsafe(OG_TITLE_SELECTOR_STR, "OG_TITLE_SELECTOR"));
static OG_DESCRIPTION_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    parse_selector_unsafe(OG_DESCRIPTION_SELECTOR_STR, "OG_DESCRIPTION_SELECTOR")
});
static OG_IMAGE_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| parse_selector_unsafe(OG_IMAGE_SELECTOR_STR, "OG_IMAGE_SELECTOR"));
static TWITTER_CARD_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| parse_selector_unsafe(TWITTER_CARD_SELECTOR_STR, "TWITTER_CARD_SELECTOR"));

/// Social metadata metrics and issues for one document.
#[derive(Debug, Clone, Default)]
pub struct SocialAnalysis {
    /// `og:title` content, if present.
    pub og_title: Option<String>,
    /// `og:description` content, if present.
    pub og_description: Option<String>,
    /// `og:image` content, if present.
    pub og_image: Option<String>,
    /// `twitter:card` content, if present. Metric only, never an issue.
    pub twitter_card: Option<String>,
    /// Issues found, in detection order.
    pub issues: Vec<Issue>,
}

fn first_content(document: &Html, selector: &Selector) -> Option<String> {
    document
        .select(selector)
        .next()
        .and_then(|element| element.value().attr("content"))
        .map(str::to_string)
        .filter(|value| !value.is_empty())
}

/// Analyzes a parsed document for social sharing metadata.
pub fn analyze_social(document: &Html) -> SocialAnalysis {
    let mut issues = Vec::new();

    let og_title = first_content(document, &OG_TITLE_SELECTOR);
    let og_description = first_content(document, &OG_DESCRIPTION_SELECTOR);
    let og_image = first_content(document, &OG_IMAGE_SELECTOR);
    let twitter_card = first_content(document, &TWITTER_CARD_SELECTOR);

    if og_title.is_none() {
        issues.push(Issue::MissingOgTitle);
    }
    if og_description.is_none() {
        issues.push(Issue::MissingOgDescription);
    }
    if og_image.is_none() {
        issues.push(Issue::MissingOgImage);
    }

    SocialAnalysis {
        og_title,
        og_description,
        og_image,
        twitter_card,
        issues,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_og_tags_missing() {
        let doc = Html::parse_document("<html><head></head></html>");
        let result = analyze_social(&doc);
        assert_eq!(
            result.issues,
            vec![
                Issue::MissingOgTitle,
                Issue::MissingOgDescription,
                Issue::MissingOgImage,
            ]
        );
    }

    #[test]
    fn test_complete_og_tags() {
        let doc = Html::parse_document(
            "<html><head>\
             <meta property=\"og:title\" content=\"My Page\">\
             <meta property=\"og:description\" content=\"About my page\">\
             <meta property=\"og:image\" content=\"https://example.com/img.png\">\
             </head></html>",
        );
        let result = analyze_social(&doc);
        assert!(result.issues.is_empty());
        assert_eq!(result.og_title.as_deref(), Some("My Page"));
        assert_eq!(result.og_description.as_deref(), Some("About my page"));
        assert_eq!(
            result.og_image.as_deref(),
            Some("https://example.com/img.png")
        );
    }

    #[test]
    fn test_missing_twitter_card_is_not_an_issue() {
        let doc = Html::parse_document(
            "<html><head>\
             <meta property=\"og:title\" content=\"t\">\
             <meta property=\"og:description\" content=\"d\">\
             <meta property=\"og:image\" content=\"i\">\
             </head></html>",
        );
        let result = analyze_social(&doc);
        assert_eq!(result.twitter_card, None);
        assert!(result.issues.is_empty());
    }

    #[test]
    fn test_twitter_card_recorded_as_metric() {
        let doc = Html::parse_document(
            "<html><head><meta name=\"twitter:card\" content=\"summary_large_image\"></head></html>",
        );
        let result = analyze_social(&doc);
        assert_eq!(result.twitter_card.as_deref(), Some("summary_large_image"));
    }
}
