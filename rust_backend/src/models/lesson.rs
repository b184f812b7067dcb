use serde::{Deserialize, Deserializer, Serialize};

use crate::parsing::loose;

crate::define_id_type!(
    /// Identifier of a lesson record.
    LessonId
);
crate::define_id_type!(
    /// Numeric section identifier. Not contiguous, not starting at a fixed value.
    SectionId
);

/// A lesson as delivered by the course API.
///
/// The core reads `section`, `order`, `duration` and `is_completed`.
/// `is_preview` is carried through untouched for the renderer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lesson {
    pub id: LessonId,
    #[serde(default, deserialize_with = "loose::null_as_default")]
    pub title: String,
    /// Length in minutes
    #[serde(
        rename = "duration",
        default,
        deserialize_with = "loose::loose_u32_or_default"
    )]
    pub duration_minutes: u32,
    /// Position inside the section; may repeat or skip values
    #[serde(default, deserialize_with = "loose::loose_i64_or_default")]
    pub order: i64,
    #[serde(default, deserialize_with = "section_or_default")]
    pub section: SectionId,
    #[serde(
        rename = "isPreview",
        alias = "is_preview",
        default,
        deserialize_with = "loose::null_as_default"
    )]
    pub is_preview: bool,
    #[serde(default, deserialize_with = "loose::null_as_default")]
    pub is_completed: bool,
}

fn section_or_default<'de, D>(deserializer: D) -> Result<SectionId, D::Error>
where
    D: Deserializer<'de>,
{
    loose::loose_i64_or_default(deserializer).map(SectionId)
}

impl Lesson {
    /// Create a lesson with zero duration that is neither a preview nor completed.
    pub fn new(id: i64, title: impl Into<String>, section: i64, order: i64) -> Self {
        Self {
            id: LessonId(id),
            title: title.into(),
            duration_minutes: 0,
            order,
            section: SectionId(section),
            is_preview: false,
            is_completed: false,
        }
    }

    pub fn with_duration(mut self, minutes: u32) -> Self {
        self.duration_minutes = minutes;
        self
    }

    pub fn with_preview(mut self, is_preview: bool) -> Self {
        self.is_preview = is_preview;
        self
    }

    pub fn with_completed(mut self, is_completed: bool) -> Self {
        self.is_completed = is_completed;
        self
    }
}
