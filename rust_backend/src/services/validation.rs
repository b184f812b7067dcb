//! Data-quality checks for lesson and enrollment payloads.
//!
//! The derivations accept anything the parser accepts; these checks report
//! what looks wrong so it can be surfaced next to the curriculum or dashboard.
//! Records are never rejected or changed here.
//!
//! Lesson rules:
//! - duplicate lesson id (error)
//! - duplicate `order` inside a section (warning, ties keep input order)
//! - zero duration (warning)
//! - negative `order` (warning)
//!
//! Enrollment rules:
//! - duplicate enrollment id (error)
//! - progress outside 0–100 or not a number (error)
//! - missing course (warning, counted as not started)
//! - completed with progress below 100 (warning)

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::models::{Enrollment, Lesson, SectionId};

/// Severity of a validation issue
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Warning,
    Error,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Warning => "warning",
            Severity::Error => "error",
        }
    }
}

/// Issue category for grouping problems in the report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueCategory {
    Identity,
    Ordering,
    Duration,
    Course,
    Progress,
}

impl IssueCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            IssueCategory::Identity => "identity",
            IssueCategory::Ordering => "ordering",
            IssueCategory::Duration => "duration",
            IssueCategory::Course => "course",
            IssueCategory::Progress => "progress",
        }
    }
}

/// A single problem found on one record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationIssue {
    /// Position of the record in the validated slice
    pub record_index: usize,
    /// Id of the lesson or enrollment the issue belongs to
    pub record_id: i64,
    pub severity: Severity,
    pub category: IssueCategory,
    pub field_name: Option<String>,
    pub current_value: Option<String>,
    pub expected_value: Option<String>,
    pub description: String,
}

impl ValidationIssue {
    fn new(
        record_index: usize,
        record_id: i64,
        severity: Severity,
        category: IssueCategory,
        description: impl Into<String>,
    ) -> Self {
        Self {
            record_index,
            record_id,
            severity,
            category,
            field_name: None,
            current_value: None,
            expected_value: None,
            description: description.into(),
        }
    }

    fn field(mut self, name: &str, current: impl ToString) -> Self {
        self.field_name = Some(name.to_string());
        self.current_value = Some(current.to_string());
        self
    }

    fn expected(mut self, expected: impl Into<String>) -> Self {
        self.expected_value = Some(expected.into());
        self
    }
}

/// Issues found in one payload, split by severity
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ValidationReport {
    pub total_records: usize,
    /// Records without any error-level issue
    pub valid_records: usize,
    pub errors: Vec<ValidationIssue>,
    pub warnings: Vec<ValidationIssue>,
}

impl ValidationReport {
    fn from_issues(total_records: usize, issues: Vec<ValidationIssue>) -> Self {
        let (errors, warnings): (Vec<_>, Vec<_>) = issues
            .into_iter()
            .partition(|issue| issue.severity == Severity::Error);

        // Ids may repeat, so records are told apart by position
        let invalid: HashSet<usize> = errors.iter().map(|issue| issue.record_index).collect();

        Self {
            total_records,
            valid_records: total_records.saturating_sub(invalid.len()),
            errors,
            warnings,
        }
    }

    pub fn is_clean(&self) -> bool {
        self.errors.is_empty() && self.warnings.is_empty()
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// All issues, errors first.
    pub fn issues(&self) -> impl Iterator<Item = &ValidationIssue> {
        self.errors.iter().chain(self.warnings.iter())
    }
}

/// Check a lesson list for problems the curriculum page would hide.
pub fn validate_lessons(lessons: &[Lesson]) -> ValidationReport {
    let mut issues = Vec::new();
    let mut seen_ids = HashSet::new();
    let mut seen_orders: HashMap<(SectionId, i64), i64> = HashMap::new();

    for (index, lesson) in lessons.iter().enumerate() {
        let id = lesson.id.value();

        if !seen_ids.insert(lesson.id) {
            issues.push(
                ValidationIssue::new(
                    index,
                    id,
                    Severity::Error,
                    IssueCategory::Identity,
                    format!("Lesson id {} appears more than once", id),
                )
                .field("id", id),
            );
        }

        if let Some(first) = seen_orders.insert((lesson.section, lesson.order), id) {
            issues.push(
                ValidationIssue::new(
                    index,
                    id,
                    Severity::Warning,
                    IssueCategory::Ordering,
                    format!(
                        "Lesson {} shares order {} with lesson {} in section {}",
                        id, lesson.order, first, lesson.section
                    ),
                )
                .field("order", lesson.order),
            );
        }

        if lesson.order < 0 {
            issues.push(
                ValidationIssue::new(
                    index,
                    id,
                    Severity::Warning,
                    IssueCategory::Ordering,
                    format!("Lesson {} has a negative order", id),
                )
                .field("order", lesson.order)
                .expected(">= 0"),
            );
        }

        if lesson.duration_minutes == 0 {
            issues.push(
                ValidationIssue::new(
                    index,
                    id,
                    Severity::Warning,
                    IssueCategory::Duration,
                    format!("Lesson {} has no duration", id),
                )
                .field("duration", lesson.duration_minutes)
                .expected("> 0"),
            );
        }
    }

    let report = ValidationReport::from_issues(lessons.len(), issues);
    log_report("lessons", &report);
    report
}

/// Check an enrollment list for problems the dashboard would hide.
pub fn validate_enrollments(enrollments: &[Enrollment]) -> ValidationReport {
    let mut issues = Vec::new();
    let mut seen_ids = HashSet::new();

    for (index, enrollment) in enrollments.iter().enumerate() {
        let id = enrollment.id.value();
        let progress = enrollment.progress_percentage;

        if !seen_ids.insert(enrollment.id) {
            issues.push(
                ValidationIssue::new(
                    index,
                    id,
                    Severity::Error,
                    IssueCategory::Identity,
                    format!("Enrollment id {} appears more than once", id),
                )
                .field("id", id),
            );
        }

        if !(0.0..=100.0).contains(&progress) {
            issues.push(
                ValidationIssue::new(
                    index,
                    id,
                    Severity::Error,
                    IssueCategory::Progress,
                    format!("Enrollment {} has progress outside 0-100", id),
                )
                .field("progress_percentage", progress)
                .expected("0-100"),
            );
        }

        if enrollment.course.is_none() {
            issues.push(
                ValidationIssue::new(
                    index,
                    id,
                    Severity::Warning,
                    IssueCategory::Course,
                    format!("Enrollment {} has no course; shown as not started", id),
                )
                .field("course", "null"),
            );
        }

        if enrollment.is_completed && progress < 100.0 {
            issues.push(
                ValidationIssue::new(
                    index,
                    id,
                    Severity::Warning,
                    IssueCategory::Progress,
                    format!(
                        "Enrollment {} is completed but reports {}% progress",
                        id, progress
                    ),
                )
                .field("progress_percentage", progress)
                .expected("100"),
            );
        }
    }

    let report = ValidationReport::from_issues(enrollments.len(), issues);
    log_report("enrollments", &report);
    report
}

fn log_report(kind: &str, report: &ValidationReport) {
    if report.has_errors() {
        log::warn!(
            "Validated {} {}: {} errors, {} warnings",
            report.total_records,
            kind,
            report.errors.len(),
            report.warnings.len()
        );
    } else {
        log::debug!(
            "Validated {} {}: {} warnings",
            report.total_records,
            kind,
            report.warnings.len()
        );
    }
}
