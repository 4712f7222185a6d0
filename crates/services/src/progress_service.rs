use std::sync::Arc;

use course_core::Clock;
use course_core::model::{Course, CourseId, CourseProgress, LessonId};

use crate::api::CourseApi;
use crate::cache::QueryCache;
use crate::error::ApiError;

/// Reads and mutates per-course completion state.
#[derive(Clone)]
pub struct ProgressService {
    api: Arc<dyn CourseApi>,
    cache: Arc<QueryCache>,
    clock: Clock,
}

impl ProgressService {
    #[must_use]
    pub fn new(api: Arc<dyn CourseApi>, cache: Arc<QueryCache>, clock: Clock) -> Self {
        Self { api, cache, clock }
    }

    /// Current progress for a course.
    ///
    /// A course the server has no record for reads as zero progress, not as
    /// an error; the record is created lazily on first completion. The
    /// zero-progress placeholder is not cached, so the first completion does
    /// not race a stale empty entry.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` for failures other than a missing record.
    pub async fn progress(&self, course_id: &CourseId) -> Result<CourseProgress, ApiError> {
        if let Some(progress) = self.cache.progress(course_id) {
            return Ok(progress);
        }

        match self.api.get_progress(course_id).await {
            Ok(progress) => {
                self.cache.set_progress(progress.clone());
                Ok(progress)
            }
            Err(ApiError::NotFound) => {
                Ok(CourseProgress::empty(course_id.clone(), self.clock.now()))
            }
            Err(err) => Err(err),
        }
    }

    /// Marks a lesson complete and submits the full replacement record.
    ///
    /// The updated record is the current completed set unioned with the
    /// lesson, with the percentage recomputed against the course's lesson
    /// count and `last_accessed` stamped from the clock. An already-completed
    /// lesson is a no-op: the current record is returned and nothing is
    /// submitted. After a successful submission the cached progress for the
    /// course is invalidated so subsequent reads refetch.
    ///
    /// The server keeps whichever record arrives last; the client never
    /// merges concurrent writers.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` when the submission fails; the cache is left
    /// untouched and the completion is not confirmed.
    pub async fn complete_lesson(
        &self,
        course: &Course,
        lesson_id: &LessonId,
    ) -> Result<CourseProgress, ApiError> {
        let current = self.progress(&course.id).await?;
        if current.is_completed(lesson_id) {
            return Ok(current);
        }

        let updated = current.with_lesson_completed(
            lesson_id.clone(),
            course.lesson_count(),
            self.clock.now(),
        );
        self.api.replace_progress(&course.id, &updated).await?;
        self.cache.invalidate_progress(&course.id);
        Ok(updated)
    }
}
