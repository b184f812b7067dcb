//! Python-facing Data Transfer Objects (DTOs).
//!
//! Every `#[pyclass]` exposed through PyO3 lives here. Fields are plain
//! primitives: ids are `i64`, hours are `f64`, timestamps are RFC 3339
//! strings. Internal models keep their typed ids and `qtty` quantities.

use pyo3::prelude::*;
use serde::{Deserialize, Serialize};

use crate::models::ProgressTab;

// =========================================================
// Curriculum
// =========================================================

/// A lesson as shown on the curriculum page.
#[pyclass(module = "lms_core", get_all)]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Lesson {
    pub id: i64,
    pub title: String,
    /// Length in minutes
    pub duration: u32,
    pub order: i64,
    pub section: i64,
    pub is_preview: bool,
    pub is_completed: bool,
}

#[pymethods]
impl Lesson {
    fn __repr__(&self) -> String {
        format!(
            "Lesson(id={}, section={}, order={}, title={:?})",
            self.id, self.section, self.order, self.title
        )
    }
}

/// One numbered section with its ordered lessons.
#[pyclass(module = "lms_core", get_all)]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurriculumSection {
    pub section: i64,
    /// Display label, e.g. "Section 2"
    pub title: String,
    pub lessons: Vec<Lesson>,
    pub total_duration_minutes: u64,
    /// e.g. "1h 5m"
    pub formatted_duration: String,
}

#[pymethods]
impl CurriculumSection {
    fn __len__(&self) -> usize {
        self.lessons.len()
    }

    fn __repr__(&self) -> String {
        format!(
            "CurriculumSection(section={}, lessons={})",
            self.section,
            self.lessons.len()
        )
    }
}

/// Roll-up of one section.
#[pyclass(module = "lms_core", get_all)]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SectionSummary {
    pub section: i64,
    pub title: String,
    pub lesson_count: usize,
    pub completed_lessons: usize,
    pub preview_lessons: usize,
    pub total_duration_minutes: u64,
    pub formatted_duration: String,
}

/// Roll-up of a whole curriculum.
#[pyclass(module = "lms_core", get_all)]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CourseSummary {
    pub section_count: usize,
    pub lesson_count: usize,
    pub completed_lessons: usize,
    pub preview_lessons: usize,
    pub total_duration_minutes: u64,
    pub formatted_duration: String,
    pub total_hours: f64,
    pub completion_percentage: f64,
    pub sections: Vec<SectionSummary>,
}

#[pymethods]
impl CourseSummary {
    fn __repr__(&self) -> String {
        format!(
            "CourseSummary(sections={}, lessons={}, duration={:?}, completion={:.1}%)",
            self.section_count, self.lesson_count, self.formatted_duration, self.completion_percentage
        )
    }
}

/// Previous/next lesson around the current one.
#[pyclass(module = "lms_core", get_all)]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LessonNavigation {
    pub current: i64,
    pub previous: Option<i64>,
    pub next: Option<i64>,
    /// 1-based position in reading order
    pub position: usize,
    pub total: usize,
}

// =========================================================
// Dashboard
// =========================================================

/// An enrollment row on the dashboard.
#[pyclass(module = "lms_core", get_all)]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Enrollment {
    pub id: i64,
    pub course_id: Option<i64>,
    pub course_title: Option<String>,
    /// Course length in minutes, None without a course
    pub course_duration: Option<u32>,
    pub progress_percentage: f64,
    pub is_completed: bool,
    /// RFC 3339 timestamp
    pub completed_at: Option<String>,
    /// "completed", "in_progress" or "not_started"
    pub status: String,
}

#[pymethods]
impl Enrollment {
    fn __repr__(&self) -> String {
        format!(
            "Enrollment(id={}, course={:?}, status={})",
            self.id, self.course_title, self.status
        )
    }
}

/// Summary figures for the dashboard header.
#[pyclass(module = "lms_core", get_all)]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardStats {
    pub total_enrolled: usize,
    pub completed_count: usize,
    pub in_progress_count: usize,
    pub not_started_count: usize,
    /// Unrounded
    pub total_learning_hours: f64,
    /// Rounded for display with the configured number of decimals
    pub formatted_learning_hours: String,
    pub average_progress_percentage: f64,
}

/// Dashboard buckets and statistics.
#[pyclass(module = "lms_core", get_all)]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardProgress {
    pub all: Vec<Enrollment>,
    pub in_progress: Vec<Enrollment>,
    pub completed: Vec<Enrollment>,
    pub not_started: Vec<Enrollment>,
    pub stats: DashboardStats,
}

#[pymethods]
impl DashboardProgress {
    /// Enrollments for a dashboard tab: "all", "inProgress" or "completed".
    pub fn tab(&self, tab: &str) -> PyResult<Vec<Enrollment>> {
        let tab = tab
            .parse::<ProgressTab>()
            .map_err(|e| PyErr::new::<pyo3::exceptions::PyValueError, _>(e.to_string()))?;
        Ok(match tab {
            ProgressTab::All => self.all.clone(),
            ProgressTab::InProgress => self.in_progress.clone(),
            ProgressTab::Completed => self.completed.clone(),
        })
    }

    fn __repr__(&self) -> String {
        format!(
            "DashboardProgress(all={}, in_progress={}, completed={}, not_started={})",
            self.all.len(),
            self.in_progress.len(),
            self.completed.len(),
            self.not_started.len()
        )
    }
}

// =========================================================
// Validation
// =========================================================

/// Validation issue.
#[pyclass(module = "lms_core", get_all)]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationIssue {
    pub record_id: i64,
    pub severity: String,
    pub category: String,
    pub field_name: Option<String>,
    pub current_value: Option<String>,
    pub expected_value: Option<String>,
    pub description: String,
}

/// Validation report data.
#[pyclass(module = "lms_core", get_all)]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationReport {
    pub total_records: usize,
    pub valid_records: usize,
    pub errors: Vec<ValidationIssue>,
    pub warnings: Vec<ValidationIssue>,
}
