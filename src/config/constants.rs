//! Configuration constants.
//!
//! This module defines the operational constants used throughout the
//! application: timeouts, size limits, and default paths.

/// Default per-fetch timeout in seconds.
///
/// A single slow upstream site must not tie up request-handling capacity,
/// so every fetch is bounded. Ten seconds matches what browsers tolerate
/// before users give up on a page anyway.
pub const DEFAULT_FETCH_TIMEOUT_SECS: u64 = 10;

/// Default SQLite database path.
pub const DB_PATH: &str = "./site_audit.db";

/// Default address the API server binds to.
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:4000";

/// Maximum URL length (2048 characters) to prevent DoS via extremely long URLs.
/// This matches common browser and server limits.
pub const MAX_URL_LENGTH: usize = 2048;

/// Maximum response body size in bytes (5MB).
/// Bodies larger than this abort the analysis with a fetch failure to
/// prevent memory exhaustion from hostile or broken sites.
pub const MAX_RESPONSE_BODY_SIZE: usize = 5 * 1024 * 1024;

/// Default User-Agent string for HTTP requests.
///
/// Analyzed sites frequently serve reduced or blocked content to obvious
/// bots, which would skew every metric, so fetches identify as a current
/// desktop Chrome. Users can override this via the `--user-agent` flag.
pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/131.0.0.0 Safari/537.36";
