//! Completion metrics per headline goal category.
//!
//! Categories are cumulative downward: a Full-Bible translation also
//! satisfies the New Testament goal, so the NT category spans the NT, FB and
//! Two-FB buckets. Portions stand alone.

use crate::core::{ScopeBucket, ScopeCounts};
use crate::summary::Summary;
use serde::{Deserialize, Serialize};

/// Headline goal category for the completion footer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GoalCategory {
    /// FB or Two FB goals.
    FullBible,
    /// NT-or-larger goals (NT, FB, Two FB).
    NewTestament,
    /// Portion goals exactly.
    Portion,
}

impl GoalCategory {
    pub fn contains(&self, bucket: ScopeBucket) -> bool {
        match self {
            GoalCategory::FullBible => {
                matches!(bucket, ScopeBucket::FullBible | ScopeBucket::TwoFullBibles)
            }
            GoalCategory::NewTestament => matches!(
                bucket,
                ScopeBucket::NewTestament | ScopeBucket::FullBible | ScopeBucket::TwoFullBibles
            ),
            GoalCategory::Portion => matches!(bucket, ScopeBucket::Portion),
        }
    }

    fn count_in(&self, counts: &ScopeCounts) -> usize {
        ScopeBucket::ALL
            .iter()
            .filter(|b| self.contains(**b))
            .map(|b| counts.get(*b))
            .sum()
    }
}

/// Completion state of one category: how many of its languages have met
/// their goal.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CategoryCompletion {
    pub met: usize,
    pub total: usize,
    pub percent: f64,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CompletionMetrics {
    pub full_bible: CategoryCompletion,
    pub new_testament: CategoryCompletion,
    pub portion: CategoryCompletion,
}

/// `met / total * 100`, with an empty category reading as 0% rather than
/// NaN.
pub fn completion_percent(met: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        met as f64 / total as f64 * 100.0
    }
}

fn category_completion(category: GoalCategory, summary: &Summary) -> CategoryCompletion {
    let met = category.count_in(&summary.goal_met.counts);
    let total = category.count_in(&summary.all);
    CategoryCompletion {
        met,
        total,
        percent: completion_percent(met, total),
    }
}

/// Derive the completion footer numbers from an already-derived summary.
pub fn completion_metrics(summary: &Summary) -> CompletionMetrics {
    CompletionMetrics {
        full_bible: category_completion(GoalCategory::FullBible, summary),
        new_testament: category_completion(GoalCategory::NewTestament, summary),
        portion: category_completion(GoalCategory::Portion, summary),
    }
}
