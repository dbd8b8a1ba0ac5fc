//! Drill-down queries over retained record lists.
//!
//! The dashboards keep filter, sort and pagination in UI state; here the
//! same interactivity is an explicit immutable configuration applied by a
//! pure function. Callers build a [`RecordQuery`] and apply it to any of the
//! summary's retained lists.

use crate::core::LanguageRecord;
use im::Vector;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortKey {
    LanguageName,
    Country,
    ChapterGoal,
    AccessStatus,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

/// Immutable filter/sort/page configuration.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RecordQuery {
    /// Case-insensitive substring matched against language name, country and
    /// both status columns.
    pub filter: Option<String>,
    pub sort_by: Option<SortKey>,
    pub direction: SortDirection,
    pub offset: usize,
    pub limit: Option<usize>,
}

impl RecordQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_filter(mut self, needle: impl Into<String>) -> Self {
        self.filter = Some(needle.into());
        self
    }

    pub fn sorted_by(mut self, key: SortKey, direction: SortDirection) -> Self {
        self.sort_by = Some(key);
        self.direction = direction;
        self
    }

    pub fn page(mut self, offset: usize, limit: usize) -> Self {
        self.offset = offset;
        self.limit = Some(limit);
        self
    }

    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    fn matches(&self, record: &LanguageRecord) -> bool {
        let Some(needle) = self.filter.as_deref() else {
            return true;
        };
        let needle = needle.to_lowercase();
        [
            record.language_name(),
            record.country(),
            record.access_status(),
            record.translation_status(),
        ]
        .iter()
        .any(|field| field.to_lowercase().contains(&needle))
    }

    fn compare(&self, a: &LanguageRecord, b: &LanguageRecord) -> Ordering {
        let ordering = match self.sort_by {
            Some(SortKey::LanguageName) => a.language_name().cmp(b.language_name()),
            Some(SortKey::Country) => a.country().cmp(b.country()),
            Some(SortKey::AccessStatus) => a.access_status().cmp(b.access_status()),
            Some(SortKey::ChapterGoal) => a
                .chapter_goal
                .partial_cmp(&b.chapter_goal)
                .unwrap_or(Ordering::Equal),
            None => Ordering::Equal,
        };
        match self.direction {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    }

    /// Apply the query to a retained list, returning owned matches.
    ///
    /// Sorting is stable, so an unsorted query preserves input order and a
    /// sorted one keeps input order within ties.
    pub fn apply(&self, records: &Vector<LanguageRecord>) -> Vec<LanguageRecord> {
        let mut matched: Vec<LanguageRecord> =
            records.iter().filter(|r| self.matches(r)).cloned().collect();
        if self.sort_by.is_some() {
            matched.sort_by(|a, b| self.compare(a, b));
        }
        let end = self
            .limit
            .map(|limit| (self.offset + limit).min(matched.len()))
            .unwrap_or(matched.len());
        let start = self.offset.min(end);
        matched[start..end].to_vec()
    }
}
