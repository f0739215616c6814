//! Error handling types.

mod types;

pub use types::{AnalyzeError, DatabaseError, InitializationError};
