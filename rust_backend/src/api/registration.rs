//! API registration helpers.

use pyo3::prelude::*;

use crate::services;

/// Register all API functions with the Python module.
pub fn register_api_functions(m: &Bound<'_, PyModule>) -> PyResult<()> {
    // Route-specific functions, classes and constants are registered centrally by `routes`
    crate::routes::register_route_functions(m)?;

    // Formatting helpers shared by several pages
    m.add_function(wrap_pyfunction!(format_duration, m)?)?;
    m.add_function(wrap_pyfunction!(format_learning_hours, m)?)?;

    Ok(())
}

/// Format minutes as "45m", "2h" or "1h 30m".
#[pyfunction]
pub fn format_duration(minutes: u64) -> String {
    services::format_duration(minutes)
}

/// Round learning hours for display; `decimals` defaults to the configured value.
#[pyfunction]
#[pyo3(signature = (hours, decimals=None))]
pub fn format_learning_hours(hours: f64, decimals: Option<usize>) -> PyResult<String> {
    let decimals = match decimals {
        Some(d) => d,
        None => crate::routes::config()?.dashboard.learning_hours_decimals,
    };
    Ok(services::format_learning_hours(
        qtty::time::Hours::new(hours),
        decimals,
    ))
}
