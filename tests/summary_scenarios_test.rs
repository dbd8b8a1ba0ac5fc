//! End-to-end scenarios for the classification and aggregation engine,
//! mirroring the dashboards' self-test rows.

use pretty_assertions::assert_eq;
use redtable::{derive_summary, in_red_set, LanguageRecord, RecordQuery, ScopeBucket};

fn row(status: &str, sub_status: &str, goal: Option<f64>) -> LanguageRecord {
    LanguageRecord {
        access_status: (!status.is_empty()).then(|| status.to_string()),
        translation_status: (!sub_status.is_empty()).then(|| sub_status.to_string()),
        chapter_goal: goal,
        ..Default::default()
    }
}

fn self_test_rows() -> Vec<LanguageRecord> {
    vec![
        // NT, no activity
        row("Translation Not Started", "", Some(260.0)),
        // FB, LDSE
        row("Translation in Progress", "Expressed Need", Some(1189.0)),
        // NT, active translation
        row("Translation in Progress", "Work In Progress", Some(260.0)),
        // Portion, active translation (excluded from risk)
        row("Translation in Progress", "Work In Progress", Some(25.0)),
        // FB, goal met
        row("Goal Met in the Language", "", Some(1189.0)),
        // Two FB, active translation
        row("Translation in Progress", "Work In Progress", Some(2001.0)),
    ]
}

#[test]
fn scenario_no_activity_nt_is_at_risk() {
    let r = row("Translation Not Started", "", Some(260.0));
    assert!(redtable::no_activity(&r));
    assert_eq!(redtable::scope_bucket(&r), Some(ScopeBucket::NewTestament));
    assert!(!redtable::is_portion(&r));
    assert!(in_red_set(&r));
}

#[test]
fn scenario_ldse_fb_is_at_risk() {
    let r = row("Translation in Progress", "Expressed Need", Some(1189.0));
    assert!(redtable::active_ldse(&r));
    assert_eq!(redtable::scope_bucket(&r), Some(ScopeBucket::FullBible));
    assert!(in_red_set(&r));
}

#[test]
fn scenario_portion_in_active_translation_is_not_at_risk() {
    let r = row("Translation in Progress", "Work In Progress", Some(25.0));
    assert!(redtable::active_translation(&r));
    assert_eq!(redtable::scope_bucket(&r), Some(ScopeBucket::Portion));
    assert!(!in_red_set(&r));
}

#[test]
fn scenario_goal_met_fb_counts_as_met_only() {
    let r = row("Goal Met in the Language", "", Some(1189.0));
    assert!(!redtable::goal_not_met(&r));
    assert!(!in_red_set(&r));

    let summary = derive_summary(&[r]);
    assert_eq!(summary.goal_met.len(), 1);
    assert_eq!(summary.goal_not_met.len(), 0);
    assert!(summary.no_activity.is_empty());
    assert!(summary.active_ldse.is_empty());
    assert!(summary.active_translation.is_empty());
}

#[test]
fn scenario_two_fb_active_translation_is_at_risk() {
    let r = row("Translation in Progress", "Work In Progress", Some(2001.0));
    assert_eq!(redtable::scope_bucket(&r), Some(ScopeBucket::TwoFullBibles));
    assert!(in_red_set(&r));
}

#[test]
fn self_test_rows_aggregate_as_the_dashboards_expect() {
    let summary = derive_summary(&self_test_rows());

    assert_eq!(summary.no_activity.counts.nt, 1);
    assert_eq!(summary.active_ldse.counts.fb, 1);
    assert_eq!(summary.active_translation.counts.nt, 1);
    assert_eq!(summary.red_set.counts.portion, 0);
    assert_eq!(summary.all.nt, 2);
    assert_eq!(summary.all.fb, 2);
    assert_eq!(summary.all.two_fb, 1);
    assert_eq!(summary.all.portion, 1);

    // Risk: NT no-activity, FB LDSE, NT active, Two FB active. Not the
    // portion, not the goal-met row.
    assert_eq!(summary.red_set.len(), 4);
    assert_eq!(summary.goal_met.len(), 1);
    assert_eq!(summary.goal_not_met.len(), 5);
}

#[test]
fn bucket_totals_may_undercount_the_row_count() {
    let mut rows = self_test_rows();
    rows.push(row("Translation Not Started", "", Some(500.0)));
    rows.push(row("Translation Not Started", "", None));

    let summary = derive_summary(&rows);
    assert_eq!(summary.total_records, 8);
    assert!(summary.all.total() < summary.total_records);
    assert_eq!(summary.all.total(), 6);
}

#[test]
fn empty_dataset_derives_cleanly() {
    let summary = derive_summary(&[]);
    assert_eq!(summary.total_records, 0);
    assert_eq!(summary.red_set.len(), 0);
    assert_eq!(summary.all.total(), 0);
}

#[test]
fn derive_summary_is_idempotent() {
    let rows = self_test_rows();
    assert_eq!(derive_summary(&rows), derive_summary(&rows));
}

#[test]
fn drill_down_query_over_retained_risk_list() {
    let mut rows = self_test_rows();
    for (i, r) in rows.iter_mut().enumerate() {
        r.extra.insert("Language Name".to_string(), format!("Lang{i}"));
    }
    let summary = derive_summary(&rows);

    let top_two = RecordQuery::new()
        .sorted_by(
            redtable::SortKey::ChapterGoal,
            redtable::SortDirection::Descending,
        )
        .with_limit(2)
        .apply(&summary.red_set.records);

    assert_eq!(top_two.len(), 2);
    assert_eq!(top_two[0].chapter_goal, Some(2001.0));
    assert_eq!(top_two[1].chapter_goal, Some(1189.0));
}

#[test]
fn second_language_records_are_met_and_footnoted() {
    let rows = vec![
        row(
            "Goal Met - Scripture accessed via second language",
            "",
            Some(260.0),
        ),
        row("Goal Met in the Language", "", Some(260.0)),
        row("Translation Not Started", "", Some(260.0)),
    ];
    let summary = derive_summary(&rows);
    assert_eq!(summary.goal_met.len(), 2);
    assert_eq!(summary.second_language_access, 1);
    // The carve-out never inflates the red set.
    assert_eq!(summary.red_set.len(), 1);
}
