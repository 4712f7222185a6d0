use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::model::course::{Course, Lesson};
use crate::model::ids::{CourseId, LessonId};

//
// ─── COURSE PROGRESS ───────────────────────────────────────────────────────────
//

/// Per-course completion state.
///
/// The wire shape keeps `completed_lessons` as a list, but the semantics are
/// set membership; insertion order carries no meaning. Progress records are
/// created lazily on first completion and replaced wholesale on every write
/// (last writer wins; the client never merges).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CourseProgress {
    pub course_id: CourseId,
    pub completed_lessons: Vec<LessonId>,
    pub progress_percentage: f64,
    pub last_accessed: DateTime<Utc>,
}

impl CourseProgress {
    /// A zero-progress record, used when the server has none for the course.
    #[must_use]
    pub fn empty(course_id: CourseId, now: DateTime<Utc>) -> Self {
        Self {
            course_id,
            completed_lessons: Vec::new(),
            progress_percentage: 0.0,
            last_accessed: now,
        }
    }

    #[must_use]
    pub fn is_completed(&self, lesson_id: &LessonId) -> bool {
        self.completed_lessons.contains(lesson_id)
    }

    #[must_use]
    pub fn completed_count(&self) -> usize {
        self.completed_lessons.len()
    }

    /// Returns the record that results from completing `lesson_id`.
    ///
    /// The completed set is unioned with `{lesson_id}` (adding an
    /// already-completed lesson changes nothing), the percentage is
    /// recomputed from scratch against `total_lessons`, and `last_accessed`
    /// is stamped with `now`. The percentage is never carried over from the
    /// previous record.
    #[must_use]
    pub fn with_lesson_completed(
        &self,
        lesson_id: LessonId,
        total_lessons: usize,
        now: DateTime<Utc>,
    ) -> Self {
        let mut completed_lessons = self.completed_lessons.clone();
        if !completed_lessons.contains(&lesson_id) {
            completed_lessons.push(lesson_id);
        }
        let progress_percentage = percentage(completed_lessons.len(), total_lessons);

        Self {
            course_id: self.course_id.clone(),
            completed_lessons,
            progress_percentage,
            last_accessed: now,
        }
    }
}

/// Completion percentage for `completed` lessons out of `total`.
///
/// A course with no lessons is 0% complete, not NaN.
#[must_use]
fn percentage(completed: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    100.0 * completed as f64 / total as f64
}

//
// ─── LESSON STATUS DERIVATION ──────────────────────────────────────────────────
//

/// Derived per-lesson UI state.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LessonStatus<'a> {
    pub lesson: &'a Lesson,
    pub index: usize,
    pub is_completed: bool,
    pub is_accessible: bool,
}

/// Computes completion and accessibility for every lesson in a course.
///
/// Gating is purely sequential: the first lesson is always accessible, and
/// lesson *i* is accessible iff lesson *i−1* is in the completed set. No
/// lesson may be started before all of its predecessors are completed.
#[must_use]
pub fn lesson_statuses<'a>(course: &'a Course, progress: &CourseProgress) -> Vec<LessonStatus<'a>> {
    course
        .lessons
        .iter()
        .enumerate()
        .map(|(index, lesson)| {
            let is_completed = progress.is_completed(&lesson.id);
            let is_accessible = match index.checked_sub(1) {
                None => true,
                Some(prev) => progress.is_completed(&course.lessons[prev].id),
            };

            LessonStatus {
                lesson,
                index,
                is_completed,
                is_accessible,
            }
        })
        .collect()
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
