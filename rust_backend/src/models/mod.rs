//! Domain models for curriculum and enrollment derivations.
//!
//! This module is organized into several submodules:
//!
//! - [`lesson`]: Lesson records as delivered by the course API
//! - [`enrollment`]: Enrollment records with an optional embedded course
//! - [`curriculum`]: Derived curriculum sections and summaries
//! - [`progress`]: Derived dashboard buckets and statistics

pub mod curriculum;
pub mod enrollment;
pub mod lesson;
pub mod macros;
pub mod progress;

pub use curriculum::{CourseSummary, CurriculumSection, LessonNavigation, SectionSummary};
pub use enrollment::{CourseId, CourseSnapshot, Enrollment, EnrollmentId};
pub use lesson::{Lesson, LessonId, SectionId};
pub use progress::{
    DashboardProgress, DashboardStats, EnrollmentStatus, ProgressBuckets, ProgressTab,
};
