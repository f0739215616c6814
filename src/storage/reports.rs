//! Report persistence.
//!
//! Stores completed analysis reports and supports retrieval by id, listing
//! by owner (newest first), and deletion. Reports are written exactly as
//! the engine produced them - score and suggestions are never recomputed
//! here - and are immutable once stored.

use chrono::{DateTime, Utc};
use log::debug;
use serde::{Deserialize, Serialize};
use sqlx::{Row, SqlitePool};

use crate::analyzer::{AnalysisReport, ReportMetrics};
use crate::error_handling::DatabaseError;

/// A persisted report: the engine's output plus storage identity.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredReport {
    /// Storage-assigned identifier.
    pub id: i64,
    /// Opaque identifier of the owning user.
    pub user_id: String,
    /// The analyzed URL.
    pub url: String,
    /// Hostname of the analyzed URL.
    pub domain: String,
    /// Overall score, 0-100.
    pub score: u32,
    /// Merged extractor metrics.
    pub metrics: ReportMetrics,
    /// Issue messages in pipeline order.
    pub issues: Vec<String>,
    /// Suggestions in issue order.
    pub suggestions: Vec<String>,
    /// When the pipeline completed.
    pub analyzed_at: DateTime<Utc>,
    /// When the report was stored.
    pub created_at: DateTime<Utc>,
}

/// Serializes a value to a JSON string for a TEXT column.
fn serialize_json<T: serde::Serialize>(value: &T) -> String {
    serde_json::to_string(value).unwrap_or_else(|_| "null".to_string())
}

fn millis_to_datetime(millis: i64, column: &str) -> Result<DateTime<Utc>, DatabaseError> {
    DateTime::from_timestamp_millis(millis)
        .ok_or_else(|| DatabaseError::DecodeError(format!("{column} out of range: {millis}")))
}

fn report_from_row(row: &sqlx::sqlite::SqliteRow) -> Result<StoredReport, DatabaseError> {
    let metrics_json: String = row.get("metrics");
    let issues_json: String = row.get("issues");
    let suggestions_json: String = row.get("suggestions");

    let metrics: ReportMetrics = serde_json::from_str(&metrics_json)
        .map_err(|e| DatabaseError::DecodeError(format!("metrics: {e}")))?;
    let issues: Vec<String> = serde_json::from_str(&issues_json)
        .map_err(|e| DatabaseError::DecodeError(format!("issues: {e}")))?;
    let suggestions: Vec<String> = serde_json::from_str(&suggestions_json)
        .map_err(|e| DatabaseError::DecodeError(format!("suggestions: {e}")))?;

    let score: i64 = row.get("score");

    Ok(StoredReport {
        id: row.get("id"),
        user_id: row.get("user_id"),
        url: row.get("url"),
        domain: row.get::<Option<String>, _>("domain").unwrap_or_default(),
        score: score.clamp(0, 100) as u32,
        metrics,
        issues,
        suggestions,
        analyzed_at: millis_to_datetime(row.get("analyzed_at_ms"), "analyzed_at_ms")?,
        created_at: millis_to_datetime(row.get("created_at_ms"), "created_at_ms")?,
    })
}

/// Inserts a completed report for the given owner and returns the stored
/// form with its assigned id.
pub async fn insert_report(
    pool: &SqlitePool,
    user_id: &str,
    report: &AnalysisReport,
) -> Result<StoredReport, DatabaseError> {
    let created_at = Utc::now();

    let id: i64 = sqlx::query(
        "INSERT INTO reports (
            user_id, url, domain, score, metrics, issues, suggestions,
            analyzed_at_ms, created_at_ms
        ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)
        RETURNING id",
    )
    .bind(user_id)
    .bind(&report.url)
    .bind(&report.domain)
    .bind(i64::from(report.score))
    .bind(serialize_json(&report.metrics))
    .bind(serialize_json(&report.issues))
    .bind(serialize_json(&report.suggestions))
    .bind(report.analyzed_at.timestamp_millis())
    .bind(created_at.timestamp_millis())
    .fetch_one(pool)
    .await?
    .get(0);

    debug!("Stored report {id} for user {user_id}: {}", report.url);

    Ok(StoredReport {
        id,
        user_id: user_id.to_string(),
        url: report.url.clone(),
        domain: report.domain.clone(),
        score: report.score,
        metrics: report.metrics.clone(),
        issues: report.issues.clone(),
        suggestions: report.suggestions.clone(),
        analyzed_at: report.analyzed_at,
        created_at,
    })
}

/// Lists all reports owned by a user, newest first.
pub async fn list_reports(
    pool: &SqlitePool,
    user_id: &str,
) -> Result<Vec<StoredReport>, DatabaseError> {
    let rows = sqlx::query(
        "SELECT id, user_id, url, domain, score, metrics, issues, suggestions,
                analyzed_at_ms, created_at_ms
         FROM reports
         WHERE user_id = ?
         ORDER BY created_at_ms DESC, id DESC",
    )
    .bind(user_id)
    .fetch_all(pool)
    .await?;

    rows.iter().map(report_from_row).collect()
}

/// Fetches a single report by id, regardless of owner.
///
/// Ownership enforcement is the caller's responsibility: the caller needs
/// to distinguish "not found" from "not yours".
pub async fn get_report(
    pool: &SqlitePool,
    id: i64,
) -> Result<Option<StoredReport>, DatabaseError> {
    let row = sqlx::query(
        "SELECT id, user_id, url, domain, score, metrics, issues, suggestions,
                analyzed_at_ms, created_at_ms
         FROM reports
         WHERE id = ?",
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    row.as_ref().map(report_from_row).transpose()
}

/// Deletes a report by id. Returns the number of rows removed (0 or 1).
pub async fn delete_report(pool: &SqlitePool, id: i64) -> Result<u64, DatabaseError> {
    let result = sqlx::query("DELETE FROM reports WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected())
}
