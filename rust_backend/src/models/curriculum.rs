//! Curriculum view models.
//!
//! These are produced by [`crate::services::curriculum`] and consumed by the
//! curriculum page and the lesson player:
//! - CurriculumSection: one numbered section with its ordered lessons
//! - SectionSummary / CourseSummary: duration and completion roll-ups
//! - LessonNavigation: previous/next lesson for the player

use serde::Serialize;

use super::lesson::{Lesson, LessonId, SectionId};

/// One numbered section of a course curriculum.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CurriculumSection {
    pub section: SectionId,
    /// Synthesized label such as "Section 3"
    pub title: String,
    /// Lessons ascending by `order`, ties in input order
    pub lessons: Vec<Lesson>,
}

impl CurriculumSection {
    pub fn total_duration_minutes(&self) -> u64 {
        self.lessons
            .iter()
            .map(|l| u64::from(l.duration_minutes))
            .sum()
    }
}

/// Roll-up of a single section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SectionSummary {
    pub section: SectionId,
    pub title: String,
    pub lesson_count: usize,
    pub completed_lessons: usize,
    pub preview_lessons: usize,
    pub total_duration_minutes: u64,
    pub formatted_duration: String,
}

/// Roll-up of a whole curriculum.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CourseSummary {
    pub section_count: usize,
    pub lesson_count: usize,
    pub completed_lessons: usize,
    pub preview_lessons: usize,
    pub total_duration_minutes: u64,
    pub formatted_duration: String,
    pub total_hours: qtty::time::Hours,
    /// 0–100, 0 when the curriculum has no lessons
    pub completion_percentage: f64,
    pub sections: Vec<SectionSummary>,
}

/// Position of a lesson in curriculum reading order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LessonNavigation {
    pub current: LessonId,
    pub previous: Option<LessonId>,
    pub next: Option<LessonId>,
    /// 1-based
    pub position: usize,
    pub total: usize,
}
