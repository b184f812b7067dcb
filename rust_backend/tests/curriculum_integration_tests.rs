//! Integration tests for the curriculum page pipeline.
//!
//! These tests ensure that:
//! 1. Lesson payloads in every accepted shape group into the same sections
//! 2. Sections and lessons come out in numeric order with stable ties
//! 3. Summaries, navigation and validation agree with the grouped view

use lms_core::models::{LessonId, SectionId};
use lms_core::parsing::parse_lessons_json_str;
use lms_core::services::{
    group_lessons, navigate, next_incomplete_lesson, reading_order, summarize_curriculum,
    validate_lessons, CurriculumGrouper,
};
use lms_core::CoreConfig;

// ==================== Helper Functions ====================

const COURSE_LESSONS: &str = r#"{
    "lessons": [
        {"id": 11, "title": "Ownership", "duration": 25, "order": 2, "section": 2, "is_completed": true},
        {"id": 10, "title": "Welcome", "duration": 5, "order": 1, "section": 1, "isPreview": true, "is_completed": true},
        {"id": 12, "title": "Borrowing", "duration": 35, "order": 3, "section": 2},
        {"id": 13, "title": "Setup", "duration": 15, "order": 2, "section": 1, "is_completed": true},
        {"id": 14, "title": "Moves", "duration": 20, "order": 1, "section": 2, "is_completed": true},
        {"id": 15, "title": "Capstone", "duration": 60, "order": 1, "section": 10}
    ]
}"#;

fn titles(lessons: &[lms_core::Lesson]) -> Vec<&str> {
    lessons.iter().map(|l| l.title.as_str()).collect()
}

// ==================== Grouping ====================

#[test]
fn test_course_payload_groups_into_ordered_sections() {
    let lessons = parse_lessons_json_str(COURSE_LESSONS).unwrap();
    let sections = group_lessons(&lessons);

    let ids: Vec<SectionId> = sections.iter().map(|s| s.section).collect();
    assert_eq!(ids, vec![SectionId(1), SectionId(2), SectionId(10)]);

    let section_titles: Vec<&str> = sections.iter().map(|s| s.title.as_str()).collect();
    assert_eq!(section_titles, vec!["Section 1", "Section 2", "Section 10"]);

    assert_eq!(titles(&sections[0].lessons), vec!["Welcome", "Setup"]);
    assert_eq!(titles(&sections[1].lessons), vec!["Moves", "Ownership", "Borrowing"]);
    assert_eq!(titles(&sections[2].lessons), vec!["Capstone"]);
}

#[test]
fn test_payload_shapes_agree() {
    let bare = r#"[{"id": 1, "section": 2, "order": 1}, {"id": 2, "section": 1, "order": 1}]"#;
    let wrapped = format!(r#"{{"lessons": {}}}"#, bare);
    let paginated = format!(r#"{{"count": 2, "results": {}}}"#, bare);

    let expected = group_lessons(&parse_lessons_json_str(bare).unwrap());
    assert_eq!(group_lessons(&parse_lessons_json_str(&wrapped).unwrap()), expected);
    assert_eq!(group_lessons(&parse_lessons_json_str(&paginated).unwrap()), expected);
}

#[test]
fn test_missing_lessons_give_empty_curriculum() {
    let lessons = parse_lessons_json_str("null").unwrap();
    let sections = group_lessons(&lessons);
    assert!(sections.is_empty());

    let summary = summarize_curriculum(&sections);
    assert_eq!(summary.lesson_count, 0);
    assert_eq!(summary.completion_percentage, 0.0);
    assert_eq!(summary.formatted_duration, "0m");
    assert!(next_incomplete_lesson(&sections).is_none());
}

#[test]
fn test_ties_keep_payload_order() {
    let json = r#"[
        {"id": 1, "title": "first", "section": 3, "order": 5},
        {"id": 2, "title": "second", "section": 3, "order": 5},
        {"id": 3, "title": "head", "section": 3, "order": 1},
        {"id": 4, "title": "third", "section": 3, "order": 5}
    ]"#;

    let sections = group_lessons(&parse_lessons_json_str(json).unwrap());
    assert_eq!(
        titles(&sections[0].lessons),
        vec!["head", "first", "second", "third"]
    );
}

#[test]
fn test_configured_title_prefix() {
    let config = CoreConfig::from_toml_str("[curriculum]\nsection_title_prefix = \"Module\"").unwrap();
    let grouper = CurriculumGrouper::from_settings(&config.curriculum);

    let lessons = parse_lessons_json_str(COURSE_LESSONS).unwrap();
    let sections = grouper.group(&lessons);
    assert_eq!(sections[0].title, "Module 1");
    assert_eq!(sections[2].title, "Module 10");
}

// ==================== Summaries and Navigation ====================

#[test]
fn test_course_summary() {
    let sections = group_lessons(&parse_lessons_json_str(COURSE_LESSONS).unwrap());
    let summary = summarize_curriculum(&sections);

    assert_eq!(summary.section_count, 3);
    assert_eq!(summary.lesson_count, 6);
    assert_eq!(summary.completed_lessons, 4);
    assert_eq!(summary.preview_lessons, 1);
    assert_eq!(summary.total_duration_minutes, 160);
    assert_eq!(summary.formatted_duration, "2h 40m");

    assert_eq!(summary.sections[0].total_duration_minutes, 20);
    assert_eq!(summary.sections[1].formatted_duration, "1h 20m");
    assert_eq!(summary.sections[2].completed_lessons, 0);
}

#[test]
fn test_navigation_follows_reading_order() {
    let sections = group_lessons(&parse_lessons_json_str(COURSE_LESSONS).unwrap());

    let order: Vec<i64> = reading_order(&sections).map(|l| l.id.value()).collect();
    assert_eq!(order, vec![10, 13, 14, 11, 12, 15]);

    // Crosses the section boundary
    let nav = navigate(&sections, LessonId(13)).unwrap();
    assert_eq!(nav.previous, Some(LessonId(10)));
    assert_eq!(nav.next, Some(LessonId(14)));
    assert_eq!(nav.position, 2);
    assert_eq!(nav.total, 6);

    let last = navigate(&sections, LessonId(15)).unwrap();
    assert_eq!(last.next, None);
    assert!(navigate(&sections, LessonId(99)).is_none());

    assert_eq!(next_incomplete_lesson(&sections).unwrap().id, LessonId(12));
}

// ==================== Validation ====================

#[test]
fn test_validation_flags_what_grouping_tolerates() {
    let json = r#"[
        {"id": 1, "section": 1, "order": 1, "duration": 10},
        {"id": 2, "section": 1, "order": 1, "duration": 10},
        {"id": 2, "section": 2, "order": 1}
    ]"#;
    let lessons = parse_lessons_json_str(json).unwrap();

    // Grouping keeps every record
    let sections = group_lessons(&lessons);
    assert_eq!(reading_order(&sections).count(), 3);

    let report = validate_lessons(&lessons);
    assert_eq!(report.total_records, 3);
    assert_eq!(report.errors.len(), 1);
    assert_eq!(report.warnings.len(), 2);
}
