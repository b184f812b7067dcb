//! # LMS Core
//!
//! Curriculum aggregation and progress derivation for a learning platform
//! frontend.
//!
//! The crate turns the raw records returned by the course and enrollment
//! endpoints into the view models the pages render: lessons grouped into
//! numbered sections for the curriculum page, and enrollments split into
//! dashboard buckets with summary statistics.
//!
//! ## Architecture
//!
//! - [`models`]: Lesson and enrollment records plus the derived view models
//! - [`parsing`]: Tolerant JSON decoding of REST payloads
//! - [`services`]: Pure derivations (grouping, classification, summaries, validation)
//! - [`memo`]: Content-keyed memoization of derived results
//! - [`config`]: Optional `lms_core.toml` settings
//! - [`api`] / [`routes`]: Python bindings (feature `python`)
//!
//! ## Example
//!
//! ```
//! use lms_core::models::Lesson;
//! use lms_core::services::group_lessons;
//!
//! let lessons = vec![
//!     Lesson::new(1, "B", 2, 2),
//!     Lesson::new(2, "A", 1, 1),
//!     Lesson::new(3, "C", 2, 1),
//! ];
//! let sections = group_lessons(&lessons);
//! assert_eq!(sections[0].title, "Section 1");
//! assert_eq!(sections[1].lessons[0].title, "C");
//! ```

pub mod config;
pub mod error;
pub mod memo;
pub mod models;
pub mod parsing;
pub mod services;

#[cfg(feature = "python")]
pub mod api;
#[cfg(feature = "python")]
pub mod routes;

pub use config::CoreConfig;
pub use error::{CoreError, CoreResult};
pub use models::{
    CurriculumSection, DashboardProgress, DashboardStats, Enrollment, EnrollmentStatus, Lesson,
    ProgressBuckets, ProgressTab,
};
pub use services::{CurriculumGrouper, EnrollmentProgressClassifier};

#[cfg(feature = "python")]
use pyo3::prelude::*;

/// Python module entry point.
#[cfg(feature = "python")]
#[pymodule]
fn lms_core(m: &Bound<'_, PyModule>) -> PyResult<()> {
    api::register_api_functions(m)?;
    Ok(())
}
