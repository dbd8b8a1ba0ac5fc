//! Summary derivation: one pass over the dataset producing the grouped,
//! bucketed counts every view renders.
//!
//! The deriver is stateless and total. It is recomputed in full whenever the
//! record list changes; there is no incremental update path and none is
//! needed at dashboard scale (a few thousand rows).

use crate::core::{LanguageRecord, ScopeBucket, ScopeCounts};
use crate::countdown::Countdown;
use crate::metrics::CompletionMetrics;
use crate::rules;
use chrono::{DateTime, NaiveDate, Utc};
use im::Vector;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Retained record lists per scope bucket, for drill-down views.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ScopeLists {
    pub portion: Vector<LanguageRecord>,
    pub nt: Vector<LanguageRecord>,
    pub fb: Vector<LanguageRecord>,
    pub two_fb: Vector<LanguageRecord>,
}

impl ScopeLists {
    pub fn get(&self, bucket: ScopeBucket) -> &Vector<LanguageRecord> {
        match bucket {
            ScopeBucket::Portion => &self.portion,
            ScopeBucket::NewTestament => &self.nt,
            ScopeBucket::FullBible => &self.fb,
            ScopeBucket::TwoFullBibles => &self.two_fb,
        }
    }

    fn push(&mut self, bucket: ScopeBucket, record: LanguageRecord) {
        match bucket {
            ScopeBucket::Portion => self.portion.push_back(record),
            ScopeBucket::NewTestament => self.nt.push_back(record),
            ScopeBucket::FullBible => self.fb.push_back(record),
            ScopeBucket::TwoFullBibles => self.two_fb.push_back(record),
        }
    }
}

/// One classification group: its per-bucket counts plus the matching records
/// in input order.
///
/// `counts.total()` can be smaller than `len()` because records with an
/// unrecognized goal size belong to the group but to no bucket.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct GroupSummary {
    pub counts: ScopeCounts,
    pub records: Vector<LanguageRecord>,
    pub by_scope: ScopeLists,
}

impl GroupSummary {
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    fn admit(&mut self, record: &LanguageRecord, bucket: Option<ScopeBucket>) {
        self.records.push_back(record.clone());
        if let Some(bucket) = bucket {
            self.counts.increment(bucket);
            self.by_scope.push(bucket, record.clone());
        }
    }
}

/// Derived, immutable snapshot of a record list.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    /// Languages with no reported translation activity.
    pub no_activity: GroupSummary,
    /// Languages with language-development or Scripture-engagement work only.
    pub active_ldse: GroupSummary,
    /// Languages with translation underway.
    pub active_translation: GroupSummary,
    /// The red table: languages at risk of missing the 2033 deadline.
    pub red_set: GroupSummary,
    /// Languages whose goal is met (directly or via a second language).
    pub goal_met: GroupSummary,
    /// The complement of `goal_met`.
    pub goal_not_met: GroupSummary,
    /// Per-bucket totals over the whole input; the denominator row for
    /// percentage displays.
    pub all: ScopeCounts,
    pub total_records: usize,
    /// How many goal-met records are met only via a second language. Some
    /// headline displays footnote these; the red-set counts are unaffected.
    pub second_language_access: usize,
}

/// Classify and aggregate a record list.
///
/// Pure and order-independent in its aggregates; the retained record lists
/// preserve input order. An empty input yields all-zero counts.
pub fn derive_summary(records: &[LanguageRecord]) -> Summary {
    let mut summary = Summary {
        total_records: records.len(),
        ..Default::default()
    };

    for record in records {
        let bucket = rules::scope_bucket(record);
        if let Some(bucket) = bucket {
            summary.all.increment(bucket);
        }

        if rules::no_activity(record) {
            summary.no_activity.admit(record, bucket);
        }
        if rules::active_ldse(record) {
            summary.active_ldse.admit(record, bucket);
        }
        if rules::active_translation(record) {
            summary.active_translation.admit(record, bucket);
        }
        if rules::in_red_set(record) {
            summary.red_set.admit(record, bucket);
        }

        if rules::goal_met(record) {
            summary.goal_met.admit(record, bucket);
            if rules::second_language_access(record) {
                summary.second_language_access += 1;
            }
        } else {
            summary.goal_not_met.admit(record, bucket);
        }
    }

    log::debug!(
        "derived summary: {} records, {} at risk, {} goal met",
        summary.total_records,
        summary.red_set.len(),
        summary.goal_met.len()
    );

    summary
}

/// Everything one analysis run produces, in a writer-agnostic shape.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub dataset: PathBuf,
    pub timestamp: DateTime<Utc>,
    /// Reference date for the countdown (normally today).
    pub as_of: NaiveDate,
    pub summary: Summary,
    pub completion: CompletionMetrics,
    pub countdown: Countdown,
    /// At-risk records after the caller's drill-down query, for listing.
    pub red_shortlist: Vec<LanguageRecord>,
}
