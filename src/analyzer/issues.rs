//! The issue vocabulary.
//!
//! Every deficiency an extractor can flag is a variant here. A variant owns
//! its public message, its scoring weight, and its remediation suggestion,
//! so the three can never drift apart the way free-floating strings would.
//! The message texts are part of the persisted report payload and must not
//! be reworded without migrating stored reports.

use std::fmt;

/// A deficiency found during extraction.
///
/// Variants carry the values interpolated into their public message (counts,
/// formatted sizes) so the message is reproducible from the variant alone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Issue {
    /// No `<title>` element, or an empty one.
    MissingTitle,
    /// Title present but outside the 10-60 character range.
    TitleLength,
    /// No `<meta name="description">`, or an empty one.
    MissingMetaDescription,
    /// Meta description present but outside the 50-160 character range.
    MetaDescriptionLength,
    /// No `<h1>` element.
    MissingH1,
    /// More than one `<h1>` element.
    MultipleH1,
    /// No `<link rel="canonical">`.
    MissingCanonical,
    /// No favicon link.
    MissingFavicon,
    /// Count of `<img>` elements without alt text.
    ImagesMissingAlt(usize),
    /// Raw HTML exceeds 100KB; carries the size as already formatted for
    /// the page-size metric ("123.45").
    PageTooLarge { size_kb: String },
    /// More than 20 `<script>` elements.
    TooManyScripts(usize),
    /// More than 10 stylesheets (stylesheet links plus inline styles).
    TooManyStylesheets(usize),
    /// Visible-text-to-HTML ratio below 10%; carries the ratio as already
    /// formatted for the text-ratio metric ("7.25").
    LowTextRatio { ratio: String },
    /// No `og:title` meta tag.
    MissingOgTitle,
    /// No `og:description` meta tag.
    MissingOgDescription,
    /// No `og:image` meta tag.
    MissingOgImage,
    /// No `<meta name="viewport">`.
    MissingViewport,
    /// The analyzed URL is not HTTPS.
    NotHttps,
}

impl Issue {
    /// The public message for this issue, exactly as it appears in the
    /// report payload.
    pub fn message(&self) -> String {
        match self {
            Issue::MissingTitle => "Missing <title> tag".to_string(),
            Issue::TitleLength => {
                "Title length should be between 10 and 60 characters".to_string()
            }
            Issue::MissingMetaDescription => "Missing meta description".to_string(),
            Issue::MetaDescriptionLength => {
                "Meta description length should be between 50 and 160 characters".to_string()
            }
            Issue::MissingH1 => "Missing <h1> tag".to_string(),
            Issue::MultipleH1 => "Multiple <h1> tags found (should be only one)".to_string(),
            Issue::MissingCanonical => "Missing canonical tag".to_string(),
            Issue::MissingFavicon => "Missing favicon".to_string(),
            Issue::ImagesMissingAlt(count) => format!("{count} images missing alt text"),
            Issue::PageTooLarge { size_kb } => {
                format!("Page size is {size_kb}KB (recommended < 100KB)")
            }
            Issue::TooManyScripts(count) => {
                format!("Too many scripts ({count}) found (recommended < 20)")
            }
            Issue::TooManyStylesheets(count) => {
                format!("Too many stylesheets ({count}) found (recommended < 10)")
            }
            Issue::LowTextRatio { ratio } => {
                format!("Low text-to-HTML ratio ({ratio}%). Add more content.")
            }
            Issue::MissingOgTitle => "Missing Open Graph Title (og:title)".to_string(),
            Issue::MissingOgDescription => {
                "Missing Open Graph Description (og:description)".to_string()
            }
            Issue::MissingOgImage => "Missing Open Graph Image (og:image)".to_string(),
            Issue::MissingViewport => {
                "Missing viewport meta tag (mobile responsiveness issue)".to_string()
            }
            Issue::NotHttps => "Website is not using HTTPS (security issue)".to_string(),
        }
    }

    /// Score deduction for this issue.
    ///
    /// Three tiers: 10 for the security issue, 5 for viewport, missing-h1
    /// and title-length, 3 for everything else. A missing title and a
    /// duplicated h1 are deliberately 3-point issues even though their
    /// 5-point siblings look more severe; changing a tier here changes
    /// every historical score comparison.
    pub fn weight(&self) -> u32 {
        match self {
            Issue::NotHttps => 10,
            Issue::MissingViewport | Issue::MissingH1 | Issue::TitleLength => 5,
            _ => 3,
        }
    }

    /// The remediation suggestion for this issue.
    ///
    /// Coverage is total: every issue maps to exactly one suggestion. The
    /// three Open Graph issues share one.
    pub fn suggestion(&self) -> &'static str {
        match self {
            Issue::MissingTitle => "Add a descriptive <title> tag to your page head.",
            Issue::TitleLength => "Optimize title length to be between 10-60 characters.",
            Issue::MissingMetaDescription => "Add a meta description to summarize page content.",
            Issue::MetaDescriptionLength => {
                "Optimize meta description length to be between 50-160 characters."
            }
            Issue::MissingH1 => "Add a main <h1> heading to structure your page.",
            Issue::MultipleH1 => "Use only one <h1> tag per page to represent the main topic.",
            Issue::ImagesMissingAlt(_) => {
                "Add descriptive alt text to all images for accessibility."
            }
            Issue::PageTooLarge { .. } => {
                "Optimize HTML size by minifying code or reducing content."
            }
            Issue::TooManyScripts(_) => "Combine or defer scripts to improve load time.",
            Issue::TooManyStylesheets(_) => "Combine stylesheets to reduce HTTP requests.",
            Issue::LowTextRatio { .. } => "Add more text content to improve SEO.",
            Issue::MissingCanonical => "Add a canonical tag to prevent duplicate content issues.",
            Issue::MissingFavicon => "Add a favicon to improve branding.",
            Issue::MissingOgTitle | Issue::MissingOgDescription | Issue::MissingOgImage => {
                "Add Open Graph tags to control how your site looks on social media."
            }
            Issue::MissingViewport => "Add a viewport meta tag for mobile responsiveness.",
            Issue::NotHttps => "Secure your site with an SSL certificate to enable HTTPS.",
        }
    }
}

impl fmt::Display for Issue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message())
    }
}
