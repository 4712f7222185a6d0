//! Query cache for remote course data.
//!
//! An explicit, injectable replacement for a hidden global query cache:
//! services consult it before the network, fill it after a successful fetch,
//! and invalidate entries manually after a mutation. Entries are never locked
//! across a request, so a read racing a mutation may observe either the pre-
//! or post-mutation value.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

use course_core::model::{Course, CourseId, CourseProgress, Lesson, LessonId};

/// Cached query results, keyed by resource identity.
#[derive(Default)]
pub struct QueryCache {
    courses: Mutex<Option<Vec<Course>>>,
    courses_by_id: Mutex<HashMap<CourseId, Course>>,
    courses_by_category: Mutex<HashMap<String, Vec<Course>>>,
    lessons: Mutex<HashMap<(CourseId, LessonId), Lesson>>,
    categories: Mutex<Option<Vec<String>>>,
    progress: Mutex<HashMap<CourseId, CourseProgress>>,
}

// A poisoned slot still holds coherent data (entries are replaced wholesale),
// so recover the guard instead of propagating the poison.
fn recover<'a, T>(result: Result<MutexGuard<'a, T>, PoisonError<MutexGuard<'a, T>>>) -> MutexGuard<'a, T> {
    result.unwrap_or_else(PoisonError::into_inner)
}

impl QueryCache {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // ─── Course list ───────────────────────────────────────────────────────

    #[must_use]
    pub fn courses(&self) -> Option<Vec<Course>> {
        recover(self.courses.lock()).clone()
    }

    pub fn set_courses(&self, courses: Vec<Course>) {
        *recover(self.courses.lock()) = Some(courses);
    }

    // ─── Course by id ──────────────────────────────────────────────────────

    #[must_use]
    pub fn course(&self, course_id: &CourseId) -> Option<Course> {
        recover(self.courses_by_id.lock()).get(course_id).cloned()
    }

    pub fn set_course(&self, course: Course) {
        recover(self.courses_by_id.lock()).insert(course.id.clone(), course);
    }

    // ─── Courses by category ───────────────────────────────────────────────

    #[must_use]
    pub fn courses_in_category(&self, category: &str) -> Option<Vec<Course>> {
        recover(self.courses_by_category.lock()).get(category).cloned()
    }

    pub fn set_courses_in_category(&self, category: String, courses: Vec<Course>) {
        recover(self.courses_by_category.lock()).insert(category, courses);
    }

    // ─── Lessons ───────────────────────────────────────────────────────────

    #[must_use]
    pub fn lesson(&self, course_id: &CourseId, lesson_id: &LessonId) -> Option<Lesson> {
        recover(self.lessons.lock())
            .get(&(course_id.clone(), lesson_id.clone()))
            .cloned()
    }

    pub fn set_lesson(&self, course_id: CourseId, lesson: Lesson) {
        recover(self.lessons.lock()).insert((course_id, lesson.id.clone()), lesson);
    }

    // ─── Categories ────────────────────────────────────────────────────────

    #[must_use]
    pub fn categories(&self) -> Option<Vec<String>> {
        recover(self.categories.lock()).clone()
    }

    pub fn set_categories(&self, categories: Vec<String>) {
        *recover(self.categories.lock()) = Some(categories);
    }

    // ─── Progress ──────────────────────────────────────────────────────────

    #[must_use]
    pub fn progress(&self, course_id: &CourseId) -> Option<CourseProgress> {
        recover(self.progress.lock()).get(course_id).cloned()
    }

    pub fn set_progress(&self, progress: CourseProgress) {
        recover(self.progress.lock()).insert(progress.course_id.clone(), progress);
    }

    /// Drops the cached progress for one course so the next read refetches.
    pub fn invalidate_progress(&self, course_id: &CourseId) {
        recover(self.progress.lock()).remove(course_id);
    }

    /// Drops every cached entry.
    pub fn clear(&self) {
        *recover(self.courses.lock()) = None;
        recover(self.courses_by_id.lock()).clear();
        recover(self.courses_by_category.lock()).clear();
        recover(self.lessons.lock()).clear();
        *recover(self.categories.lock()) = None;
        recover(self.progress.lock()).clear();
    }
}
