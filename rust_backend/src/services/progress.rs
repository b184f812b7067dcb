//! Enrollment classification for the learner dashboard.

use crate::models::{
    DashboardProgress, DashboardStats, Enrollment, EnrollmentStatus, ProgressBuckets,
};

use super::duration::minutes_to_hours;

/// Classify a single enrollment.
///
/// An enrollment without an embedded course is `NotStarted` regardless of its
/// own flags. Otherwise it is `Completed` when the enrollment is flagged
/// complete, carries a completion timestamp, or its course is flagged
/// complete; anything else is `InProgress`.
pub fn classify(enrollment: &Enrollment) -> EnrollmentStatus {
    match &enrollment.course {
        None => EnrollmentStatus::NotStarted,
        Some(course) => {
            if enrollment.is_completed
                || enrollment.completed_at.is_some()
                || course.is_completed
            {
                EnrollmentStatus::Completed
            } else {
                EnrollmentStatus::InProgress
            }
        }
    }
}

/// Partitions enrollments into dashboard buckets and computes statistics.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnrollmentProgressClassifier;

impl EnrollmentProgressClassifier {
    pub fn new() -> Self {
        Self
    }

    /// Single pass over `enrollments`.
    ///
    /// `all` is a copy of the input in its original order; the status buckets
    /// are stable filters of it. Learning hours sum the course minutes of
    /// every record that has a course, divided by 60, unrounded.
    pub fn classify(&self, enrollments: &[Enrollment]) -> DashboardProgress {
        let mut buckets = ProgressBuckets {
            all: enrollments.to_vec(),
            ..ProgressBuckets::default()
        };
        let mut total_minutes: u64 = 0;
        let mut progress_sum = 0.0;

        for enrollment in enrollments {
            progress_sum += enrollment.progress_percentage;
            if let Some(minutes) = enrollment.course_minutes() {
                total_minutes += u64::from(minutes);
            }

            match classify(enrollment) {
                EnrollmentStatus::Completed => buckets.completed.push(enrollment.clone()),
                EnrollmentStatus::InProgress => buckets.in_progress.push(enrollment.clone()),
                EnrollmentStatus::NotStarted => {
                    log::warn!(
                        "Enrollment {} has no course data; counting it as not started",
                        enrollment.id
                    );
                    buckets.not_started.push(enrollment.clone());
                }
            }
        }

        let total_enrolled = enrollments.len();
        let average_progress_percentage = if total_enrolled > 0 {
            progress_sum / total_enrolled as f64
        } else {
            0.0
        };

        let stats = DashboardStats {
            total_enrolled,
            completed_count: buckets.completed.len(),
            in_progress_count: buckets.in_progress.len(),
            not_started_count: buckets.not_started.len(),
            total_learning_hours: minutes_to_hours(total_minutes),
            average_progress_percentage,
        };

        log::debug!(
            "Classified {} enrollments: {} completed, {} in progress, {} not started",
            stats.total_enrolled,
            stats.completed_count,
            stats.in_progress_count,
            stats.not_started_count
        );

        DashboardProgress { buckets, stats }
    }

    /// Like [`classify`](Self::classify), treating a missing list as empty.
    pub fn classify_optional(&self, enrollments: Option<&[Enrollment]>) -> DashboardProgress {
        self.classify(enrollments.unwrap_or_default())
    }
}

/// Classify enrollments with the default classifier.
pub fn classify_enrollments(enrollments: &[Enrollment]) -> DashboardProgress {
    EnrollmentProgressClassifier::new().classify(enrollments)
}
