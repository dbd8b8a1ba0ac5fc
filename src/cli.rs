use chrono::NaiveDate;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "redtable")]
#[command(about = "All Access Goal translation progress and completion-risk analyzer", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Analyze a language dataset and report progress and risk
    Analyze {
        /// CSV dataset to analyze (falls back to the configured path)
        path: Option<PathBuf>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "terminal")]
        format: OutputFormat,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Configuration file (defaults to ./redtable.toml)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// List the top N at-risk languages
        #[arg(long)]
        top: Option<usize>,

        /// Substring filter for the at-risk list (language, country, status)
        #[arg(long)]
        filter: Option<String>,

        /// Sort key for the at-risk list
        #[arg(long, value_enum)]
        sort_by: Option<SortField>,

        /// Sort the at-risk list descending
        #[arg(long)]
        descending: bool,

        /// Countdown reference date, YYYY-MM-DD (defaults to today)
        #[arg(long)]
        as_of: Option<NaiveDate>,
    },
    /// Write a default redtable.toml
    Init {
        /// Overwrite an existing configuration file
        #[arg(long)]
        force: bool,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    Terminal,
    Json,
    Markdown,
}

impl From<OutputFormat> for crate::io::output::OutputFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Terminal => crate::io::output::OutputFormat::Terminal,
            OutputFormat::Json => crate::io::output::OutputFormat::Json,
            OutputFormat::Markdown => crate::io::output::OutputFormat::Markdown,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum SortField {
    Language,
    Country,
    Goal,
    Status,
}

impl From<SortField> for crate::query::SortKey {
    fn from(field: SortField) -> Self {
        match field {
            SortField::Language => crate::query::SortKey::LanguageName,
            SortField::Country => crate::query::SortKey::Country,
            SortField::Goal => crate::query::SortKey::ChapterGoal,
            SortField::Status => crate::query::SortKey::AccessStatus,
        }
    }
}
