//! Type conversions between internal models and API DTOs.
//!
//! - `From<&InternalType> for ApiType`: infallible conversion to API types
//! - Typed ids → `i64`, `qtty::time::Hours` → `f64`
//! - `DateTime<Utc>` → RFC 3339 string

use crate::api::types as api;
use crate::models;
use crate::services::{self, classify, format_learning_hours};

// =========================================================
// Curriculum
// =========================================================

impl From<&models::Lesson> for api::Lesson {
    fn from(lesson: &models::Lesson) -> Self {
        api::Lesson {
            id: lesson.id.value(),
            title: lesson.title.clone(),
            duration: lesson.duration_minutes,
            order: lesson.order,
            section: lesson.section.value(),
            is_preview: lesson.is_preview,
            is_completed: lesson.is_completed,
        }
    }
}

impl From<&models::CurriculumSection> for api::CurriculumSection {
    fn from(section: &models::CurriculumSection) -> Self {
        let total_duration_minutes = section.total_duration_minutes();
        api::CurriculumSection {
            section: section.section.value(),
            title: section.title.clone(),
            lessons: section.lessons.iter().map(Into::into).collect(),
            total_duration_minutes,
            formatted_duration: services::format_duration(total_duration_minutes),
        }
    }
}

impl From<&models::SectionSummary> for api::SectionSummary {
    fn from(summary: &models::SectionSummary) -> Self {
        api::SectionSummary {
            section: summary.section.value(),
            title: summary.title.clone(),
            lesson_count: summary.lesson_count,
            completed_lessons: summary.completed_lessons,
            preview_lessons: summary.preview_lessons,
            total_duration_minutes: summary.total_duration_minutes,
            formatted_duration: summary.formatted_duration.clone(),
        }
    }
}

impl From<&models::CourseSummary> for api::CourseSummary {
    fn from(summary: &models::CourseSummary) -> Self {
        api::CourseSummary {
            section_count: summary.section_count,
            lesson_count: summary.lesson_count,
            completed_lessons: summary.completed_lessons,
            preview_lessons: summary.preview_lessons,
            total_duration_minutes: summary.total_duration_minutes,
            formatted_duration: summary.formatted_duration.clone(),
            total_hours: summary.total_hours.value(),
            completion_percentage: summary.completion_percentage,
            sections: summary.sections.iter().map(Into::into).collect(),
        }
    }
}

impl From<models::LessonNavigation> for api::LessonNavigation {
    fn from(nav: models::LessonNavigation) -> Self {
        api::LessonNavigation {
            current: nav.current.value(),
            previous: nav.previous.map(|id| id.value()),
            next: nav.next.map(|id| id.value()),
            position: nav.position,
            total: nav.total,
        }
    }
}

// =========================================================
// Dashboard
// =========================================================

impl From<&models::Enrollment> for api::Enrollment {
    fn from(enrollment: &models::Enrollment) -> Self {
        let course = enrollment.course.as_ref();
        api::Enrollment {
            id: enrollment.id.value(),
            course_id: course.and_then(|c| c.id).map(|id| id.value()),
            course_title: course.map(|c| c.title.clone()),
            course_duration: course.map(|c| c.duration_minutes),
            progress_percentage: enrollment.progress_percentage,
            is_completed: enrollment.is_completed,
            completed_at: enrollment.completed_at.map(|t| t.to_rfc3339()),
            status: classify(enrollment).as_str().to_string(),
        }
    }
}

/// Convert dashboard statistics, formatting hours with `decimals` places.
pub fn dashboard_stats(stats: &models::DashboardStats, decimals: usize) -> api::DashboardStats {
    api::DashboardStats {
        total_enrolled: stats.total_enrolled,
        completed_count: stats.completed_count,
        in_progress_count: stats.in_progress_count,
        not_started_count: stats.not_started_count,
        total_learning_hours: stats.total_learning_hours.value(),
        formatted_learning_hours: format_learning_hours(stats.total_learning_hours, decimals),
        average_progress_percentage: stats.average_progress_percentage,
    }
}

/// Convert a classification result for the dashboard page.
pub fn dashboard_progress(
    progress: &models::DashboardProgress,
    decimals: usize,
) -> api::DashboardProgress {
    let rows = |bucket: &[models::Enrollment]| -> Vec<api::Enrollment> {
        bucket.iter().map(Into::into).collect()
    };

    api::DashboardProgress {
        all: rows(&progress.buckets.all),
        in_progress: rows(&progress.buckets.in_progress),
        completed: rows(&progress.buckets.completed),
        not_started: rows(&progress.buckets.not_started),
        stats: dashboard_stats(&progress.stats, decimals),
    }
}

// =========================================================
// Validation
// =========================================================

impl From<&services::ValidationIssue> for api::ValidationIssue {
    fn from(issue: &services::ValidationIssue) -> Self {
        api::ValidationIssue {
            record_id: issue.record_id,
            severity: issue.severity.as_str().to_string(),
            category: issue.category.as_str().to_string(),
            field_name: issue.field_name.clone(),
            current_value: issue.current_value.clone(),
            expected_value: issue.expected_value.clone(),
            description: issue.description.clone(),
        }
    }
}

impl From<&services::ValidationReport> for api::ValidationReport {
    fn from(report: &services::ValidationReport) -> Self {
        api::ValidationReport {
            total_records: report.total_records,
            valid_records: report.valid_records,
            errors: report.errors.iter().map(Into::into).collect(),
            warnings: report.warnings.iter().map(Into::into).collect(),
        }
    }
}
