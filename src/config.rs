//! Configuration loaded from `redtable.toml`.
//!
//! Every section is optional; a missing or unreadable file falls back to
//! defaults with a warning rather than aborting, since the CLI flags can
//! express everything the file can.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const CONFIG_FILE: &str = "redtable.toml";

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct RedtableConfig {
    #[serde(default)]
    pub dataset: DatasetConfig,
    #[serde(default)]
    pub deadline: DeadlineConfig,
    #[serde(default)]
    pub report: ReportConfig,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct DatasetConfig {
    /// Dataset to analyze when the CLI gives no path.
    pub path: Option<PathBuf>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct DeadlineConfig {
    /// Overrides the built-in Pentecost 2033 target date.
    pub date: Option<NaiveDate>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Default drill-down list length for the terminal report.
    #[serde(default = "default_top")]
    pub top: usize,
}

fn default_top() -> usize {
    10
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self { top: default_top() }
    }
}

impl RedtableConfig {
    /// Load from an explicit path, or from `redtable.toml` in the working
    /// directory when none is given.
    pub fn load(path: Option<&Path>) -> Self {
        let path = path.unwrap_or_else(|| Path::new(CONFIG_FILE));
        match std::fs::read_to_string(path) {
            Ok(text) => match toml::from_str(&text) {
                Ok(config) => {
                    log::debug!("loaded config from {}", path.display());
                    config
                }
                Err(err) => {
                    log::warn!("ignoring malformed {}: {}", path.display(), err);
                    Self::default()
                }
            },
            Err(_) => Self::default(),
        }
    }
}
