use crate::config::RedtableConfig;
use crate::countdown::{pentecost_2033, time_until};
use crate::io::output::OutputFormat;
use crate::metrics::completion_metrics;
use crate::query::{RecordQuery, SortDirection, SortKey};
use crate::summary::{derive_summary, AnalysisReport};
use anyhow::{Context, Result};
use chrono::{Local, NaiveDate, Utc};
use std::fs::File;
use std::io::Write;
use std::path::PathBuf;

/// Validated inputs for one analysis run; built by the CLI layer.
#[derive(Debug)]
pub struct AnalyzeConfig {
    pub path: Option<PathBuf>,
    pub format: OutputFormat,
    pub output: Option<PathBuf>,
    pub config: Option<PathBuf>,
    pub top: Option<usize>,
    pub filter: Option<String>,
    pub sort_by: Option<SortKey>,
    pub descending: bool,
    pub as_of: Option<NaiveDate>,
}

pub fn handle_analyze(config: AnalyzeConfig) -> Result<()> {
    let file_config = RedtableConfig::load(config.config.as_deref());

    let dataset = config
        .path
        .or(file_config.dataset.path)
        .context("no dataset given: pass a CSV path or set dataset.path in redtable.toml")?;

    let records = crate::io::ingest::read_records_from_path(&dataset)?;
    log::info!("analyzing {} records from {}", records.len(), dataset.display());

    let summary = derive_summary(&records);
    let completion = completion_metrics(&summary);

    let as_of = config.as_of.unwrap_or_else(|| Local::now().date_naive());
    let target = file_config.deadline.date.unwrap_or_else(pentecost_2033);
    let countdown = time_until(target, as_of);

    let query = build_query(
        config.filter,
        config.sort_by,
        config.descending,
        config.top.unwrap_or(file_config.report.top),
    );
    let red_shortlist = query.apply(&summary.red_set.records);

    let report = AnalysisReport {
        dataset,
        timestamp: Utc::now(),
        as_of,
        summary,
        completion,
        countdown,
        red_shortlist,
    };

    let destination: Box<dyn Write> = match &config.output {
        Some(path) => Box::new(
            File::create(path)
                .with_context(|| format!("failed to create output file {}", path.display()))?,
        ),
        None => Box::new(std::io::stdout()),
    };
    let mut writer = crate::io::output::create_writer(config.format, destination);
    writer.write_report(&report)
}

fn build_query(
    filter: Option<String>,
    sort_by: Option<SortKey>,
    descending: bool,
    limit: usize,
) -> RecordQuery {
    let mut query = RecordQuery::new().with_limit(limit);
    if let Some(needle) = filter {
        query = query.with_filter(needle);
    }
    if let Some(key) = sort_by {
        let direction = if descending {
            SortDirection::Descending
        } else {
            SortDirection::Ascending
        };
        query = query.sorted_by(key, direction);
    }
    query
}
