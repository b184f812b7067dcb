//! Dashboard progress view models.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::enrollment::Enrollment;
use crate::error::CoreError;

/// Mutually exclusive classification of an enrollment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EnrollmentStatus {
    NotStarted,
    InProgress,
    Completed,
}

impl EnrollmentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            EnrollmentStatus::NotStarted => "not_started",
            EnrollmentStatus::InProgress => "in_progress",
            EnrollmentStatus::Completed => "completed",
        }
    }
}

/// Dashboard tab selecting one bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ProgressTab {
    All,
    InProgress,
    Completed,
}

impl ProgressTab {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProgressTab::All => "all",
            ProgressTab::InProgress => "inProgress",
            ProgressTab::Completed => "completed",
        }
    }
}

impl FromStr for ProgressTab {
    type Err = CoreError;

    /// Accepts the wire names as well as snake_case and kebab-case spellings.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace(['-', '_'], "").as_str() {
            "all" => Ok(ProgressTab::All),
            "inprogress" => Ok(ProgressTab::InProgress),
            "completed" => Ok(ProgressTab::Completed),
            _ => Err(CoreError::Parse {
                path: "tab".to_string(),
                message: format!(
                    "unknown progress tab '{}', expected all, inProgress or completed",
                    s
                ),
            }),
        }
    }
}

/// Enrollments partitioned for the dashboard tabs.
///
/// `all` is the input in its original order. The other three are stable
/// filters of it and together contain every record exactly once.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressBuckets {
    pub all: Vec<Enrollment>,
    pub in_progress: Vec<Enrollment>,
    pub completed: Vec<Enrollment>,
    pub not_started: Vec<Enrollment>,
}

impl ProgressBuckets {
    pub fn tab(&self, tab: ProgressTab) -> &[Enrollment] {
        match tab {
            ProgressTab::All => &self.all,
            ProgressTab::InProgress => &self.in_progress,
            ProgressTab::Completed => &self.completed,
        }
    }

    pub fn bucket(&self, status: EnrollmentStatus) -> &[Enrollment] {
        match status {
            EnrollmentStatus::NotStarted => &self.not_started,
            EnrollmentStatus::InProgress => &self.in_progress,
            EnrollmentStatus::Completed => &self.completed,
        }
    }
}

/// Summary figures shown on the learner dashboard.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardStats {
    pub total_enrolled: usize,
    pub completed_count: usize,
    pub in_progress_count: usize,
    pub not_started_count: usize,
    /// Sum of course minutes / 60, unrounded
    pub total_learning_hours: qtty::time::Hours,
    pub average_progress_percentage: f64,
}

impl Default for DashboardStats {
    fn default() -> Self {
        Self {
            total_enrolled: 0,
            completed_count: 0,
            in_progress_count: 0,
            not_started_count: 0,
            total_learning_hours: qtty::time::Hours::new(0.0),
            average_progress_percentage: 0.0,
        }
    }
}

/// Buckets and statistics from one classification pass.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DashboardProgress {
    pub buckets: ProgressBuckets,
    pub stats: DashboardStats,
}
