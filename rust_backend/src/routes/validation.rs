use pyo3::prelude::*;

use crate::api::types as api;
use crate::parsing::{parse_enrollments_json_str, parse_lessons_json_str};
use crate::services;

use super::value_error;

/// Validation route function name constants
pub const GET_LESSON_VALIDATION_REPORT: &str = "get_lesson_validation_report";
pub const GET_ENROLLMENT_VALIDATION_REPORT: &str = "get_enrollment_validation_report";

/// Data-quality report for a lessons payload.
#[pyfunction]
pub fn get_lesson_validation_report(lessons_json: &str) -> PyResult<api::ValidationReport> {
	let lessons = parse_lessons_json_str(lessons_json).map_err(value_error)?;
	Ok((&services::validate_lessons(&lessons)).into())
}

/// Data-quality report for an enrollments payload.
#[pyfunction]
pub fn get_enrollment_validation_report(
	enrollments_json: &str,
) -> PyResult<api::ValidationReport> {
	let enrollments = parse_enrollments_json_str(enrollments_json).map_err(value_error)?;
	Ok((&services::validate_enrollments(&enrollments)).into())
}
