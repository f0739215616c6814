//! API handlers.
//!
//! Error policy: invalid URLs and fetch failures are client-correctable
//! and surface verbatim as 400; everything unexpected is logged in full
//! and reported generically as 500 so internals never leak to clients.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use log::error;

use crate::storage::{self, StoredReport};

use super::auth::UserId;
use super::types::{message_response, AnalyzeRequest};
use super::AppState;

fn internal_error() -> Response {
    message_response(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
}

/// `POST /api/analyze` - run the engine and persist the report.
pub async fn analyze_handler(
    State(state): State<AppState>,
    user: UserId,
    Json(body): Json<AnalyzeRequest>,
) -> Response {
    let Some(url) = body.url.filter(|u| !u.trim().is_empty()) else {
        return message_response(StatusCode::BAD_REQUEST, "URL is required");
    };

    let report = match state.auditor.analyze(&url).await {
        Ok(report) => report,
        Err(e) if e.is_client_error() => {
            return message_response(StatusCode::BAD_REQUEST, &e.to_string());
        }
        Err(e) => {
            error!("Analysis failed for {url}: {e:#}");
            return message_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to analyze website",
            );
        }
    };

    match storage::insert_report(&state.pool, &user.0, &report).await {
        Ok(stored) => (StatusCode::OK, Json(stored)).into_response(),
        Err(e) => {
            error!("Failed to store report for {url}: {e}");
            internal_error()
        }
    }
}

/// `GET /api/reports` - the calling user's reports, newest first.
pub async fn list_reports_handler(State(state): State<AppState>, user: UserId) -> Response {
    match storage::list_reports(&state.pool, &user.0).await {
        Ok(reports) => (StatusCode::OK, Json(reports)).into_response(),
        Err(e) => {
            error!("Failed to list reports for user {}: {e}", user.0);
            internal_error()
        }
    }
}

/// Loads a report and enforces ownership: 404 when absent, 403 when owned
/// by someone else.
async fn load_owned_report(
    state: &AppState,
    user: &UserId,
    id: i64,
) -> Result<StoredReport, Response> {
    match storage::get_report(&state.pool, id).await {
        Ok(Some(report)) if report.user_id == user.0 => Ok(report),
        Ok(Some(_)) => Err(message_response(
            StatusCode::FORBIDDEN,
            "Unauthorized access to report",
        )),
        Ok(None) => Err(message_response(StatusCode::NOT_FOUND, "Report not found")),
        Err(e) => {
            error!("Failed to load report {id}: {e}");
            Err(internal_error())
        }
    }
}

/// `GET /api/reports/{id}` - a single owned report.
pub async fn get_report_handler(
    State(state): State<AppState>,
    user: UserId,
    Path(id): Path<i64>,
) -> Response {
    match load_owned_report(&state, &user, id).await {
        Ok(report) => (StatusCode::OK, Json(report)).into_response(),
        Err(response) => response,
    }
}

/// `DELETE /api/reports/{id}` - delete an owned report.
pub async fn delete_report_handler(
    State(state): State<AppState>,
    user: UserId,
    Path(id): Path<i64>,
) -> Response {
    let report = match load_owned_report(&state, &user, id).await {
        Ok(report) => report,
        Err(response) => return response,
    };

    match storage::delete_report(&state.pool, report.id).await {
        Ok(_) => message_response(StatusCode::OK, "Report deleted successfully"),
        Err(e) => {
            error!("Failed to delete report {id}: {e}");
            internal_error()
        }
    }
}
