//! Page routes exposed to Python.
//!
//! Each submodule owns the `#[pyfunction]`s for one page of the frontend
//! together with a name constant per function, so the Python side never
//! hard-codes function names.

pub mod curriculum;
pub mod dashboard;
pub mod validation;

use pyo3::prelude::*;

use crate::api::types as api;
use crate::config::{cache_enabled_or_default, get_config, CoreConfig};

/// Register all route-specific functions, classes and constants with the Python module.
pub fn register_route_functions(m: &Bound<'_, PyModule>) -> PyResult<()> {
	// Route functions
	m.add_function(wrap_pyfunction!(curriculum::get_curriculum, m)?)?;
	m.add_function(wrap_pyfunction!(curriculum::get_curriculum_summary, m)?)?;
	m.add_function(wrap_pyfunction!(curriculum::get_lesson_navigation, m)?)?;
	m.add_function(wrap_pyfunction!(curriculum::get_next_lesson, m)?)?;
	m.add_function(wrap_pyfunction!(dashboard::get_dashboard_progress, m)?)?;
	m.add_function(wrap_pyfunction!(dashboard::get_progress_tab, m)?)?;
	m.add_function(wrap_pyfunction!(validation::get_lesson_validation_report, m)?)?;
	m.add_function(wrap_pyfunction!(validation::get_enrollment_validation_report, m)?)?;

	// Route-related classes
	m.add_class::<api::Lesson>()?;
	m.add_class::<api::CurriculumSection>()?;
	m.add_class::<api::SectionSummary>()?;
	m.add_class::<api::CourseSummary>()?;
	m.add_class::<api::LessonNavigation>()?;
	m.add_class::<api::Enrollment>()?;
	m.add_class::<api::DashboardStats>()?;
	m.add_class::<api::DashboardProgress>()?;
	m.add_class::<api::ValidationIssue>()?;
	m.add_class::<api::ValidationReport>()?;

	// Route name constants
	m.add("GET_CURRICULUM", curriculum::GET_CURRICULUM)?;
	m.add("GET_CURRICULUM_SUMMARY", curriculum::GET_CURRICULUM_SUMMARY)?;
	m.add("GET_LESSON_NAVIGATION", curriculum::GET_LESSON_NAVIGATION)?;
	m.add("GET_NEXT_LESSON", curriculum::GET_NEXT_LESSON)?;
	m.add("GET_DASHBOARD_PROGRESS", dashboard::GET_DASHBOARD_PROGRESS)?;
	m.add("GET_PROGRESS_TAB", dashboard::GET_PROGRESS_TAB)?;
	m.add("GET_LESSON_VALIDATION_REPORT", validation::GET_LESSON_VALIDATION_REPORT)?;
	m.add(
		"GET_ENROLLMENT_VALIDATION_REPORT",
		validation::GET_ENROLLMENT_VALIDATION_REPORT,
	)?;

	Ok(())
}

/// Bad input from Python (malformed JSON, unknown tab).
pub(crate) fn value_error(e: impl std::fmt::Display) -> PyErr {
	PyErr::new::<pyo3::exceptions::PyValueError, _>(e.to_string())
}

/// Failure on our side (configuration, memo key).
pub(crate) fn runtime_error(e: impl std::fmt::Display) -> PyErr {
	PyErr::new::<pyo3::exceptions::PyRuntimeError, _>(e.to_string())
}

pub(crate) fn config() -> PyResult<&'static CoreConfig> {
	get_config().map_err(runtime_error)
}

/// Whether route-level memoization is on.
pub(crate) fn cache_enabled() -> bool {
	cache_enabled_or_default(get_config())
}
