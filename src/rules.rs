//! Classification rules for All Access Goal language records.
//!
//! Every rule is a pure, total predicate over a single [`LanguageRecord`]:
//! no rule inspects other records, holds state, or can fail. Missing or
//! malformed fields compare as empty text / absent numbers, so unrecognized
//! data degrades to "no membership" rather than an error.
//!
//! Status matching is case-insensitive substring containment throughout.
//! That is deliberate for the goal-met rule: the exported status column
//! carries both "Goal Met in the Language" and "Goal Met - Scripture
//! accessed via second language", and both mean the goal is met.

use crate::core::{LanguageRecord, ScopeBucket};

const LDSE_MARKERS: [&str; 3] = ["expressed need", "potential need", "limited or old scripture"];

fn status_contains(status: &str, needle: &str) -> bool {
    status.to_lowercase().contains(needle)
}

/// True unless the overall status says the goal is met (either directly or
/// via access through a second language).
pub fn goal_not_met(record: &LanguageRecord) -> bool {
    !goal_met(record)
}

/// Overall status contains "goal met".
pub fn goal_met(record: &LanguageRecord) -> bool {
    status_contains(record.access_status(), "goal met")
}

/// Goal met only through access via a second language. A subset of
/// [`goal_met`]; some headline displays carve these records out, which is a
/// presentation decision, not a classification rule.
pub fn second_language_access(record: &LanguageRecord) -> bool {
    goal_met(record) && status_contains(record.access_status(), "second language")
}

pub fn is_portion(record: &LanguageRecord) -> bool {
    record.chapter_goal == Some(25.0)
}

pub fn is_nt(record: &LanguageRecord) -> bool {
    record.chapter_goal == Some(260.0)
}

pub fn is_fb(record: &LanguageRecord) -> bool {
    record.chapter_goal == Some(1189.0)
}

pub fn is_two_fb(record: &LanguageRecord) -> bool {
    record.chapter_goal.unwrap_or(0.0) >= 2000.0
}

/// Assign the record's size-of-goal bucket, or `None` when the goal matches
/// no bucket (zero, missing, or an unrecognized size).
///
/// The exact-match tests are naturally disjoint; the open-ended `>= 2000`
/// test runs last so it cannot shadow them.
pub fn scope_bucket(record: &LanguageRecord) -> Option<ScopeBucket> {
    if is_portion(record) {
        Some(ScopeBucket::Portion)
    } else if is_nt(record) {
        Some(ScopeBucket::NewTestament)
    } else if is_fb(record) {
        Some(ScopeBucket::FullBible)
    } else if is_two_fb(record) {
        Some(ScopeBucket::TwoFullBibles)
    } else {
        None
    }
}

/// Translation work is underway.
pub fn active_translation(record: &LanguageRecord) -> bool {
    status_contains(record.translation_status(), "work in progress")
}

/// Language development or Scripture engagement activity short of
/// translation.
pub fn active_ldse(record: &LanguageRecord) -> bool {
    let status = record.translation_status().to_lowercase();
    LDSE_MARKERS.iter().any(|marker| status.contains(marker))
}

/// No translation activity reported at all.
pub fn no_activity(record: &LanguageRecord) -> bool {
    status_contains(record.access_status(), "translation not started")
}

/// The red-table membership test: at risk of not completing by the 2033
/// deadline.
///
/// Portions are categorically excluded whatever their activity state; small
/// Scripture portions are not treated as at existential risk in this model.
/// Risk also requires positive membership in one of the three activity
/// states; a record with an unrecognized status is uncategorized, not at
/// risk.
pub fn in_red_set(record: &LanguageRecord) -> bool {
    !is_portion(record)
        && goal_not_met(record)
        && (no_activity(record) || active_ldse(record) || active_translation(record))
}
