//! Curriculum grouping and roll-ups.
//!
//! Turns the flat lesson list returned by the course API into numbered
//! sections for the curriculum page, and derives the summaries and
//! navigation the lesson player needs.

use std::collections::BTreeMap;

use crate::config::CurriculumSettings;
use crate::models::{
    CourseSummary, CurriculumSection, Lesson, LessonId, LessonNavigation, SectionId,
    SectionSummary,
};

use super::duration::{format_duration, minutes_to_hours};

/// Groups lessons into ordered curriculum sections.
#[derive(Debug, Clone)]
pub struct CurriculumGrouper {
    section_title_prefix: String,
}

impl Default for CurriculumGrouper {
    fn default() -> Self {
        Self::new(CurriculumSettings::default().section_title_prefix)
    }
}

impl CurriculumGrouper {
    pub fn new(section_title_prefix: impl Into<String>) -> Self {
        Self {
            section_title_prefix: section_title_prefix.into(),
        }
    }

    pub fn from_settings(settings: &CurriculumSettings) -> Self {
        Self::new(settings.section_title_prefix.clone())
    }

    /// Label shown for a section, e.g. "Section 3".
    pub fn section_title(&self, section: SectionId) -> String {
        let prefix = self.section_title_prefix.trim();
        if prefix.is_empty() {
            section.to_string()
        } else {
            format!("{} {}", prefix, section)
        }
    }

    /// Group lessons by section id.
    ///
    /// Sections come out ascending by numeric id. Inside a section lessons are
    /// ascending by `order`; lessons sharing an `order` keep their relative
    /// input order. The input is not modified.
    pub fn group(&self, lessons: &[Lesson]) -> Vec<CurriculumSection> {
        let mut by_section: BTreeMap<SectionId, Vec<Lesson>> = BTreeMap::new();
        for lesson in lessons {
            by_section
                .entry(lesson.section)
                .or_default()
                .push(lesson.clone());
        }

        let sections: Vec<CurriculumSection> = by_section
            .into_iter()
            .map(|(section, mut lessons)| {
                // sort_by_key is stable
                lessons.sort_by_key(|l| l.order);
                CurriculumSection {
                    section,
                    title: self.section_title(section),
                    lessons,
                }
            })
            .collect();

        log::debug!(
            "Grouped {} lessons into {} curriculum sections",
            lessons.len(),
            sections.len()
        );
        sections
    }

    /// Like [`group`](Self::group), treating a missing list as empty.
    pub fn group_optional(&self, lessons: Option<&[Lesson]>) -> Vec<CurriculumSection> {
        self.group(lessons.unwrap_or_default())
    }
}

/// Group lessons with the default "Section N" titles.
pub fn group_lessons(lessons: &[Lesson]) -> Vec<CurriculumSection> {
    CurriculumGrouper::default().group(lessons)
}

/// Compute lesson, completion and duration counts for one section.
pub fn summarize_section(section: &CurriculumSection) -> SectionSummary {
    let total_duration_minutes = section.total_duration_minutes();
    SectionSummary {
        section: section.section,
        title: section.title.clone(),
        lesson_count: section.lessons.len(),
        completed_lessons: section.lessons.iter().filter(|l| l.is_completed).count(),
        preview_lessons: section.lessons.iter().filter(|l| l.is_preview).count(),
        total_duration_minutes,
        formatted_duration: format_duration(total_duration_minutes),
    }
}

/// Roll up all sections into course-level totals.
pub fn summarize_curriculum(sections: &[CurriculumSection]) -> CourseSummary {
    let summaries: Vec<SectionSummary> = sections.iter().map(summarize_section).collect();

    let lesson_count: usize = summaries.iter().map(|s| s.lesson_count).sum();
    let completed_lessons: usize = summaries.iter().map(|s| s.completed_lessons).sum();
    let preview_lessons: usize = summaries.iter().map(|s| s.preview_lessons).sum();
    let total_duration_minutes: u64 = summaries.iter().map(|s| s.total_duration_minutes).sum();

    let completion_percentage = if lesson_count > 0 {
        completed_lessons as f64 / lesson_count as f64 * 100.0
    } else {
        0.0
    };

    CourseSummary {
        section_count: sections.len(),
        lesson_count,
        completed_lessons,
        preview_lessons,
        total_duration_minutes,
        formatted_duration: format_duration(total_duration_minutes),
        total_hours: minutes_to_hours(total_duration_minutes),
        completion_percentage,
        sections: summaries,
    }
}

/// Lessons in reading order: section by section, then by `order`.
pub fn reading_order(sections: &[CurriculumSection]) -> impl Iterator<Item = &Lesson> {
    sections.iter().flat_map(|s| s.lessons.iter())
}

/// Previous and next lesson around `lesson_id`, or `None` if it is not part
/// of the curriculum.
///
/// If an id appears more than once the first occurrence is used.
pub fn navigate(sections: &[CurriculumSection], lesson_id: LessonId) -> Option<LessonNavigation> {
    let ordered: Vec<&Lesson> = reading_order(sections).collect();
    let index = ordered.iter().position(|l| l.id == lesson_id)?;

    Some(LessonNavigation {
        current: lesson_id,
        previous: index.checked_sub(1).map(|i| ordered[i].id),
        next: ordered.get(index + 1).map(|l| l.id),
        position: index + 1,
        total: ordered.len(),
    })
}

/// First lesson in reading order the learner has not completed.
pub fn next_incomplete_lesson(sections: &[CurriculumSection]) -> Option<&Lesson> {
    reading_order(sections).find(|l| !l.is_completed)
}
