//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `site_audit` library that handles:
//! - Command-line argument parsing
//! - Environment variable loading (.env file)
//! - Logger initialization
//! - Server startup, or one-shot analysis output
//!
//! All core functionality is implemented in the library crate.

use anyhow::{Context, Result};
use clap::Parser;
use std::process;

use site_audit::initialization::{init_client, init_logger_with};
use site_audit::server::{start_server, AppState};
use site_audit::storage::{init_db_pool_with_path, run_migrations};
use site_audit::{Auditor, Config};

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env (if present): current directory
    // first, then next to the executable
    if dotenvy::dotenv().is_err() {
        if let Ok(exe_path) = std::env::current_exe() {
            if let Some(exe_dir) = exe_path.parent() {
                let env_path = exe_dir.join(".env");
                if env_path.exists() {
                    let _ = dotenvy::from_path(&env_path);
                }
            }
        }
    }

    let config = Config::parse();

    let log_level = config.log_level.clone();
    let log_format = config.log_format.clone();
    init_logger_with(log_level.into(), log_format).context("Failed to initialize logger")?;

    let client = init_client(&config).context("Failed to initialize HTTP client")?;
    let auditor = Auditor::new(client);

    // One-shot mode: analyze, print, exit
    if let Some(url) = config.oneshot.as_deref() {
        match auditor.analyze(url).await {
            Ok(report) => {
                let json = serde_json::to_string_pretty(&report)
                    .context("Failed to serialize report")?;
                println!("{json}");
                return Ok(());
            }
            Err(e) => {
                eprintln!("site_audit error: {e:#}");
                process::exit(1);
            }
        }
    }

    let pool = init_db_pool_with_path(&config.db_path)
        .await
        .context("Failed to initialize database pool")?;
    run_migrations(&pool)
        .await
        .context("Failed to run database migrations")?;

    let state = AppState { pool, auditor };

    if let Err(e) = start_server(&config.bind, state).await {
        eprintln!("site_audit error: {e:#}");
        process::exit(1);
    }

    Ok(())
}
