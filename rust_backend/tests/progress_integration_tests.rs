//! Integration tests for the learner dashboard pipeline.
//!
//! These tests ensure that:
//! 1. Enrollment payloads classify into disjoint, order-preserving buckets
//! 2. Statistics and learning hours match the buckets
//! 3. Memoized classification reflects every change to the input

use lms_core::memo::Memo;
use lms_core::models::{DashboardProgress, EnrollmentStatus, ProgressTab};
use lms_core::parsing::parse_enrollments_json_str;
use lms_core::services::{
    classify, classify_enrollments, format_learning_hours, validate_enrollments,
    EnrollmentProgressClassifier,
};

// ==================== Helper Functions ====================

const LEARNER_ENROLLMENTS: &str = r#"{
    "count": 5,
    "results": [
        {"id": 1, "course": {"id": 100, "title": "Rust", "duration": 120}, "progress_percentage": 100, "is_completed": true},
        {"id": 2, "course": {"id": 101, "title": "SQL", "duration": 60}, "progress_percentage": 40},
        {"id": 3, "course": null, "progress_percentage": 0},
        {"id": 4, "course": {"id": 102, "title": "Go", "duration": 10}, "progress_percentage": 100, "completed_at": "2024-05-02T08:30:00Z"},
        {"id": 5, "course": {"id": 103, "title": "C", "duration": 0, "is_completed": true}, "progress_percentage": "60"}
    ]
}"#;

fn ids(enrollments: &[lms_core::Enrollment]) -> Vec<i64> {
    enrollments.iter().map(|e| e.id.value()).collect()
}

fn dashboard() -> DashboardProgress {
    classify_enrollments(&parse_enrollments_json_str(LEARNER_ENROLLMENTS).unwrap())
}

// ==================== Classification ====================

#[test]
fn test_buckets_from_payload() {
    let progress = dashboard();

    assert_eq!(ids(&progress.buckets.all), vec![1, 2, 3, 4, 5]);
    assert_eq!(ids(&progress.buckets.completed), vec![1, 4, 5]);
    assert_eq!(ids(&progress.buckets.in_progress), vec![2]);
    assert_eq!(ids(&progress.buckets.not_started), vec![3]);
}

#[test]
fn test_every_record_lands_in_exactly_one_bucket() {
    let progress = dashboard();
    for enrollment in &progress.buckets.all {
        let status = classify(enrollment);
        let hits = [
            EnrollmentStatus::Completed,
            EnrollmentStatus::InProgress,
            EnrollmentStatus::NotStarted,
        ]
        .iter()
        .filter(|s| progress.buckets.bucket(**s).iter().any(|e| e.id == enrollment.id))
        .count();
        assert_eq!(hits, 1, "enrollment {} found in {} buckets", enrollment.id, hits);
        assert!(progress.buckets.bucket(status).contains(enrollment));
    }
}

#[test]
fn test_stats_from_payload() {
    let stats = dashboard().stats;

    assert_eq!(stats.total_enrolled, 5);
    assert_eq!(stats.completed_count, 3);
    assert_eq!(stats.in_progress_count, 1);
    assert_eq!(stats.not_started_count, 1);
    // 120 + 60 + 10 + 0 minutes; the record without a course adds nothing
    assert_eq!(stats.total_learning_hours.value(), 190.0 / 60.0);
    assert_eq!(format_learning_hours(stats.total_learning_hours, 2), "3.17");
    assert_eq!(stats.average_progress_percentage, 60.0);
}

#[test]
fn test_tabs() {
    let progress = dashboard();
    assert_eq!(ids(progress.buckets.tab(ProgressTab::All)), vec![1, 2, 3, 4, 5]);
    assert_eq!(ids(progress.buckets.tab(ProgressTab::InProgress)), vec![2]);
    assert_eq!(ids(progress.buckets.tab(ProgressTab::Completed)), vec![1, 4, 5]);
}

#[test]
fn test_empty_payloads() {
    for json in ["null", "[]", r#"{"enrollments": []}"#, r#"{"results": null}"#] {
        let progress = classify_enrollments(&parse_enrollments_json_str(json).unwrap());
        assert_eq!(progress, DashboardProgress::default(), "payload {}", json);
        assert_eq!(progress.stats.total_learning_hours.value(), 0.0);
    }
}

#[test]
fn test_serialized_dashboard_keys() {
    let value = serde_json::to_value(dashboard()).unwrap();

    let buckets = value["buckets"].as_object().unwrap();
    for key in ["all", "inProgress", "completed", "notStarted"] {
        assert!(buckets.contains_key(key), "missing bucket {}", key);
    }
    assert_eq!(value["stats"]["total_enrolled"], 5);
}

// ==================== Memoization ====================

#[test]
fn test_memoized_dashboard_tracks_changes() {
    let memo: Memo<DashboardProgress> = Memo::default();
    let classifier = EnrollmentProgressClassifier::new();
    let mut enrollments = parse_enrollments_json_str(LEARNER_ENROLLMENTS).unwrap();

    let first = memo
        .get_or_derive(&enrollments, |e: &Vec<_>| classifier.classify(e))
        .unwrap();
    let again = memo
        .get_or_derive(&enrollments, |e: &Vec<_>| classifier.classify(e))
        .unwrap();
    assert!(std::sync::Arc::ptr_eq(&first, &again));

    // Finishing the SQL course must show up on the next render
    enrollments[1].is_completed = true;
    let updated = memo
        .get_or_derive(&enrollments, |e: &Vec<_>| classifier.classify(e))
        .unwrap();
    assert_eq!(ids(&updated.buckets.completed), vec![1, 2, 4, 5]);
    assert!(updated.buckets.in_progress.is_empty());
}

// ==================== Validation ====================

#[test]
fn test_validation_of_payload() {
    let enrollments = parse_enrollments_json_str(LEARNER_ENROLLMENTS).unwrap();
    let report = validate_enrollments(&enrollments);

    assert!(!report.has_errors());
    assert_eq!(report.valid_records, 5);
    // Only the missing course on 3; record 5 is complete through its course flag
    let warned: Vec<i64> = report.warnings.iter().map(|w| w.record_id).collect();
    assert_eq!(warned, vec![3]);
}
