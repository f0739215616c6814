//! Error type definitions.
//!
//! This module defines the typed errors used throughout the application,
//! including the client-facing analysis failure taxonomy.

use log::SetLoggerError;
use reqwest::Error as ReqwestError;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the HTTP client.
    #[error("HTTP client initialization error: {0}")]
    HttpClientError(#[from] ReqwestError),
}

/// Error types for database operations.
#[derive(Error, Debug)]
pub enum DatabaseError {
    /// Error creating the database file.
    #[error("Database file creation error: {0}")]
    FileCreationError(String),

    /// SQL execution error.
    #[error("SQL error: {0}")]
    SqlError(#[from] sqlx::Error),

    /// A stored report row could not be decoded back into its typed form.
    #[error("Stored report decode error: {0}")]
    DecodeError(String),
}

/// Failure taxonomy for a single analysis run.
///
/// `InvalidUrl` and `Fetch` are client-correctable (a bad or unreachable
/// target site) and are surfaced to the caller verbatim. `Internal` covers
/// unexpected faults past the fetch; the API reports those generically and
/// logs the full cause.
#[derive(Error, Debug)]
pub enum AnalyzeError {
    /// The submitted URL failed absolute-URL parsing. Raised before any
    /// network activity.
    #[error("Invalid URL provided")]
    InvalidUrl,

    /// Network failure, timeout, TLS error, or non-2xx response from the
    /// target site.
    #[error("Failed to fetch URL: {0}")]
    Fetch(String),

    /// Unexpected fault in parsing, extraction, or scoring.
    #[error("Analysis failed: {0}")]
    Internal(#[from] anyhow::Error),
}

impl AnalyzeError {
    /// Whether the caller can correct this failure by fixing the submitted
    /// URL (as opposed to an engine defect).
    pub fn is_client_error(&self) -> bool {
        matches!(self, AnalyzeError::InvalidUrl | AnalyzeError::Fetch(_))
    }
}
