//! Shared test helpers for storage and server tests.
//!
//! Provides an in-memory database pool with migrations applied and a
//! canned report builder.

#[cfg(test)]
use sqlx::sqlite::SqlitePoolOptions;
#[cfg(test)]
use sqlx::SqlitePool;

#[cfg(test)]
use crate::analyzer::{AnalysisReport, ReportMetrics};
#[cfg(test)]
use crate::storage::run_migrations;

/// Creates a test database pool with migrations applied.
///
/// Uses an in-memory database capped at one connection: each connection to
/// `sqlite::memory:` would otherwise get its own empty database.
#[cfg(test)]
pub async fn create_test_pool() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .expect("Failed to create test database pool");
    run_migrations(&pool)
        .await
        .expect("Failed to run migrations");
    pool
}

/// Builds a plausible completed report for the given URL.
#[cfg(test)]
pub fn sample_report(url: &str) -> AnalysisReport {
    let domain = url::Url::parse(url)
        .ok()
        .and_then(|u| u.host_str().map(str::to_string))
        .unwrap_or_else(|| url.to_string());
    AnalysisReport {
        url: url.to_string(),
        domain,
        score: 85,
        metrics: ReportMetrics {
            title_length: 24,
            meta_description_length: 96,
            h1_count: 1,
            h2_count: 3,
            h3_count: 2,
            canonical: Some(format!("{url}/")),
            robots: None,
            favicon: Some("/favicon.ico".to_string()),
            page_size: "14.62 KB".to_string(),
            image_count: 4,
            script_count: 2,
            style_count: 1,
            resource_count: 7,
            text_ratio: 22.17,
            og_title: None,
            og_description: None,
            og_image: None,
            twitter_card: None,
            viewport: Some("width=device-width, initial-scale=1".to_string()),
            https: true,
        },
        issues: vec![
            "Missing Open Graph Title (og:title)".to_string(),
            "Missing Open Graph Description (og:description)".to_string(),
            "Missing Open Graph Image (og:image)".to_string(),
        ],
        suggestions: vec![
            "Add Open Graph tags to control how your site looks on social media.".to_string();
            3
        ],
        analyzed_at: chrono::Utc::now(),
    }
}
