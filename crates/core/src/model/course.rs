use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use url::Url;

use crate::model::ids::{CourseId, LessonId};

//
// ─── DIFFICULTY ────────────────────────────────────────────────────────────────
//

/// Difficulty tier of a course.
///
/// The server stores this as free text; the well-known tiers get explicit
/// variants and anything else is preserved verbatim in `Other`. Parsing is
/// case-insensitive, so `"beginner"` and `"Beginner"` are the same tier.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
    Other(String),
}

impl Difficulty {
    /// Returns the display label for the tier.
    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            Difficulty::Beginner => "Beginner",
            Difficulty::Intermediate => "Intermediate",
            Difficulty::Advanced => "Advanced",
            Difficulty::Other(raw) => raw,
        }
    }
}

impl From<String> for Difficulty {
    fn from(raw: String) -> Self {
        match raw.to_lowercase().as_str() {
            "beginner" => Difficulty::Beginner,
            "intermediate" => Difficulty::Intermediate,
            "advanced" => Difficulty::Advanced,
            _ => Difficulty::Other(raw),
        }
    }
}

impl From<Difficulty> for String {
    fn from(difficulty: Difficulty) -> Self {
        difficulty.label().to_owned()
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

//
// ─── LESSON ────────────────────────────────────────────────────────────────────
//

/// An atomic unit of content within a course.
///
/// Whether a lesson is accessible is never stored; it is derived from the
/// course's lesson order and the completed set (see `lesson_statuses`).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Lesson {
    pub id: LessonId,
    pub title: String,
    pub description: String,
    /// Plain-text lesson body.
    pub content: String,
    pub duration_minutes: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video_url: Option<Url>,
    /// One-based position as served; display order comes from the vector.
    pub order: u32,
}

//
// ─── COURSE ────────────────────────────────────────────────────────────────────
//

/// A structured collection of ordered lessons with metadata.
///
/// Courses are owned and mutated only by the remote course service; the
/// client treats them as immutable snapshots.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Course {
    pub id: CourseId,
    pub title: String,
    pub description: String,
    pub category: String,
    pub difficulty: Difficulty,
    pub duration_hours: u32,
    pub instructor: String,
    pub image_url: String,
    pub lessons: Vec<Lesson>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Course {
    /// Number of lessons in the course.
    #[must_use]
    pub fn lesson_count(&self) -> usize {
        self.lessons.len()
    }

    /// Looks up a lesson by id.
    #[must_use]
    pub fn lesson(&self, lesson_id: &LessonId) -> Option<&Lesson> {
        self.lessons.iter().find(|lesson| lesson.id == *lesson_id)
    }

    /// Position of a lesson within the ordered sequence.
    #[must_use]
    pub fn lesson_index(&self, lesson_id: &LessonId) -> Option<usize> {
        self.lessons.iter().position(|lesson| lesson.id == *lesson_id)
    }

    /// The lesson immediately before the given one, if any.
    #[must_use]
    pub fn previous_lesson(&self, lesson_id: &LessonId) -> Option<&Lesson> {
        let index = self.lesson_index(lesson_id)?;
        index.checked_sub(1).and_then(|i| self.lessons.get(i))
    }

    /// The lesson immediately after the given one, if any.
    #[must_use]
    pub fn next_lesson(&self, lesson_id: &LessonId) -> Option<&Lesson> {
        let index = self.lesson_index(lesson_id)?;
        self.lessons.get(index + 1)
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
