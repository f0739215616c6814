//! site_audit library: website auditing engine, persistence, and API
//!
//! This library fetches a web page, derives a set of structured SEO,
//! performance, social, and mobile/security metrics from its markup,
//! converts heuristic findings into an issues list, scores the page, and
//! maps issues to remediation suggestions. Completed reports can be
//! persisted per user and served over an HTTP API.
//!
//! # Example
//!
//! ```no_run
//! use site_audit::initialization::init_client;
//! use site_audit::{Auditor, Config};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config::default();
//! let client = init_client(&config)?;
//! let auditor = Auditor::new(client);
//!
//! let report = auditor.analyze("https://example.com").await?;
//! println!("Score: {} ({} issues)", report.score, report.issues.len());
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime. Use `#[tokio::main]` in your
//! application or ensure you're calling library functions within an async
//! context.

#![warn(missing_docs)]

pub mod analyzer;
pub mod config;
mod error_handling;
pub mod initialization;
pub mod server;
pub mod storage;
mod utils;

// Re-export public API
pub use analyzer::{AnalysisReport, Auditor, ReportMetrics};
pub use config::{Config, LogFormat, LogLevel};
pub use error_handling::{AnalyzeError, DatabaseError, InitializationError};
