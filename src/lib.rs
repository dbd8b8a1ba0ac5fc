// Export modules for library usage
pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod countdown;
pub mod io;
pub mod metrics;
pub mod query;
pub mod rules;
pub mod summary;

// Re-export commonly used types
pub use crate::core::{
    fields::{normalize_header, parse_number},
    LanguageRecord, ScopeBucket, ScopeCounts, ACCESS_STATUS, CHAPTER_GOAL, TRANSLATION_STATUS,
};

pub use crate::rules::{
    active_ldse, active_translation, goal_met, goal_not_met, in_red_set, is_fb, is_nt, is_portion,
    is_two_fb, no_activity, scope_bucket, second_language_access,
};

pub use crate::summary::{derive_summary, AnalysisReport, GroupSummary, ScopeLists, Summary};

pub use crate::countdown::{pentecost_2033, time_until, time_until_deadline, Countdown};

pub use crate::metrics::{
    completion_metrics, completion_percent, CategoryCompletion, CompletionMetrics, GoalCategory,
};

pub use crate::query::{RecordQuery, SortDirection, SortKey};

pub use crate::io::output::{create_writer, OutputFormat, OutputWriter};
