use std::sync::Arc;

use once_cell::sync::Lazy;
use pyo3::prelude::*;

use crate::api::types as api;
use crate::memo::Memo;
use crate::models::{CurriculumSection, Lesson, LessonId};
use crate::parsing::parse_lessons_json_str;
use crate::services::{self, CurriculumGrouper};

use super::{cache_enabled, config, runtime_error, value_error};

/// Curriculum route function name constants
pub const GET_CURRICULUM: &str = "get_curriculum";
pub const GET_CURRICULUM_SUMMARY: &str = "get_curriculum_summary";
pub const GET_LESSON_NAVIGATION: &str = "get_lesson_navigation";
pub const GET_NEXT_LESSON: &str = "get_next_lesson";

static SECTIONS: Lazy<Memo<Vec<CurriculumSection>>> = Lazy::new(|| Memo::new(cache_enabled()));

/// Parse and group a lessons payload, reusing the last result for identical input.
fn grouped_sections(
	lessons_json: &str,
	section_title_prefix: Option<&str>,
) -> PyResult<Arc<Vec<CurriculumSection>>> {
	let lessons = parse_lessons_json_str(lessons_json).map_err(value_error)?;
	let prefix = match section_title_prefix {
		Some(prefix) => prefix,
		None => config()?.curriculum.section_title_prefix.as_str(),
	};

	SECTIONS
		.get_or_derive(&(prefix, &lessons), |&(prefix, lessons): &(&str, &Vec<Lesson>)| {
			CurriculumGrouper::new(prefix).group(lessons)
		})
		.map_err(runtime_error)
}

/// Group a course's lessons into ordered sections.
///
/// `lessons_json` is the lessons endpoint payload: a list, an object with a
/// `lessons`/`results`/`data` list, or null.
#[pyfunction]
#[pyo3(signature = (lessons_json, section_title_prefix=None))]
pub fn get_curriculum(
	lessons_json: &str,
	section_title_prefix: Option<&str>,
) -> PyResult<Vec<api::CurriculumSection>> {
	let sections = grouped_sections(lessons_json, section_title_prefix)?;
	Ok(sections.iter().map(Into::into).collect())
}

/// Lesson, completion and duration totals for a course.
#[pyfunction]
pub fn get_curriculum_summary(lessons_json: &str) -> PyResult<api::CourseSummary> {
	let sections = grouped_sections(lessons_json, None)?;
	Ok((&services::summarize_curriculum(&sections)).into())
}

/// Previous and next lesson for the lesson player; None if the lesson is not in the course.
#[pyfunction]
pub fn get_lesson_navigation(
	lessons_json: &str,
	lesson_id: i64,
) -> PyResult<Option<api::LessonNavigation>> {
	let sections = grouped_sections(lessons_json, None)?;
	Ok(services::navigate(&sections, LessonId(lesson_id)).map(Into::into))
}

/// First lesson in reading order that is not completed.
#[pyfunction]
pub fn get_next_lesson(lessons_json: &str) -> PyResult<Option<api::Lesson>> {
	let sections = grouped_sections(lessons_json, None)?;
	Ok(services::next_incomplete_lesson(&sections).map(Into::into))
}
