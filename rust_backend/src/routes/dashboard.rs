use std::sync::Arc;

use once_cell::sync::Lazy;
use pyo3::prelude::*;

use crate::api::conversions::dashboard_progress;
use crate::api::types as api;
use crate::memo::Memo;
use crate::models::{DashboardProgress, Enrollment, ProgressTab};
use crate::parsing::parse_enrollments_json_str;
use crate::services::EnrollmentProgressClassifier;

use super::{cache_enabled, config, runtime_error, value_error};

/// Dashboard route function name constants
pub const GET_DASHBOARD_PROGRESS: &str = "get_dashboard_progress";
pub const GET_PROGRESS_TAB: &str = "get_progress_tab";

static PROGRESS: Lazy<Memo<DashboardProgress>> = Lazy::new(|| Memo::new(cache_enabled()));

fn classified(enrollments_json: &str) -> PyResult<Arc<DashboardProgress>> {
	let enrollments = parse_enrollments_json_str(enrollments_json).map_err(value_error)?;
	PROGRESS
		.get_or_derive(&enrollments, |e: &Vec<Enrollment>| {
			EnrollmentProgressClassifier::new().classify(e)
		})
		.map_err(runtime_error)
}

/// Dashboard buckets and statistics for a learner's enrollments.
#[pyfunction]
pub fn get_dashboard_progress(enrollments_json: &str) -> PyResult<api::DashboardProgress> {
	let progress = classified(enrollments_json)?;
	let decimals = config()?.dashboard.learning_hours_decimals;
	Ok(dashboard_progress(&progress, decimals))
}

/// Enrollments shown under one dashboard tab: "all", "inProgress" or "completed".
#[pyfunction]
pub fn get_progress_tab(enrollments_json: &str, tab: &str) -> PyResult<Vec<api::Enrollment>> {
	let tab: ProgressTab = tab.parse().map_err(value_error)?;
	let progress = classified(enrollments_json)?;
	Ok(progress.buckets.tab(tab).iter().map(Into::into).collect())
}
