//! Service layer for curriculum and dashboard derivations.
//!
//! Every function here is pure: it reads a snapshot of records and returns a
//! freshly built view model. Nothing is cached or mutated in place; see
//! [`crate::memo`] for optional memoization on top.

pub mod curriculum;
pub mod duration;
pub mod progress;
pub mod validation;

pub use curriculum::{
    group_lessons, navigate, next_incomplete_lesson, reading_order, summarize_curriculum,
    summarize_section, CurriculumGrouper,
};
pub use duration::{format_duration, format_learning_hours, minutes_to_hours};
pub use progress::{classify, classify_enrollments, EnrollmentProgressClassifier};
pub use validation::{validate_enrollments, validate_lessons, ValidationIssue, ValidationReport};
