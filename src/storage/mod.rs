//! Persistence: connection pool, migrations, and report storage.

mod migrations;
mod pool;
mod reports;
#[cfg(test)]
pub mod test_helpers;

pub use migrations::run_migrations;
pub use pool::init_db_pool_with_path;
pub use reports::{delete_report, get_report, insert_report, list_reports, StoredReport};
