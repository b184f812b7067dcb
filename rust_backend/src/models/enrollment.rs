use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::parsing::loose;

crate::define_id_type!(
    /// Identifier of an enrollment record.
    EnrollmentId
);
crate::define_id_type!(
    /// Identifier of a course.
    CourseId
);

/// Course data embedded in an enrollment at fetch time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CourseSnapshot {
    #[serde(default)]
    pub id: Option<CourseId>,
    #[serde(default, deserialize_with = "loose::null_as_default")]
    pub title: String,
    /// Total course length in minutes
    #[serde(
        rename = "duration",
        default,
        deserialize_with = "loose::loose_u32_or_default"
    )]
    pub duration_minutes: u32,
    #[serde(default, deserialize_with = "loose::null_as_default")]
    pub is_completed: bool,
}

impl CourseSnapshot {
    pub fn new(title: impl Into<String>, duration_minutes: u32) -> Self {
        Self {
            id: None,
            title: title.into(),
            duration_minutes,
            is_completed: false,
        }
    }
}

/// A learner's enrollment in a course.
///
/// `course` is `None` when the API returned no course (or `null`); such a
/// record never counts towards learning hours.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Enrollment {
    pub id: EnrollmentId,
    #[serde(default)]
    pub course: Option<CourseSnapshot>,
    /// 0–100 as reported by the backend; not validated here
    #[serde(default, deserialize_with = "loose::loose_f64_or_default")]
    pub progress_percentage: f64,
    #[serde(default, deserialize_with = "loose::null_as_default")]
    pub is_completed: bool,
    #[serde(default)]
    pub completed_at: Option<DateTime<Utc>>,
}

impl Enrollment {
    pub fn new(id: i64, course: Option<CourseSnapshot>) -> Self {
        Self {
            id: EnrollmentId(id),
            course,
            progress_percentage: 0.0,
            is_completed: false,
            completed_at: None,
        }
    }

    pub fn with_progress(mut self, percentage: f64) -> Self {
        self.progress_percentage = percentage;
        self
    }

    pub fn with_completed(mut self, is_completed: bool) -> Self {
        self.is_completed = is_completed;
        self
    }

    pub fn with_completed_at(mut self, completed_at: DateTime<Utc>) -> Self {
        self.completed_at = Some(completed_at);
        self
    }

    /// Course length in minutes, `None` when the course is absent.
    pub fn course_minutes(&self) -> Option<u32> {
        self.course.as_ref().map(|c| c.duration_minutes)
    }
}
