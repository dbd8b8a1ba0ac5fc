//! CLI command implementations.
//!
//! - **analyze**: ingest a CSV dataset, derive the summary, write a report
//! - **init**: write a default `redtable.toml`

pub mod analyze;
pub mod init;

pub use analyze::{handle_analyze, AnalyzeConfig};
pub use init::init_config;
