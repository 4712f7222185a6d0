use std::sync::Arc;

use course_core::model::{Course, CourseId, Lesson, LessonId};

use crate::api::CourseApi;
use crate::cache::QueryCache;
use crate::error::ApiError;

/// Cache-first reads over the remote course catalog.
///
/// Every getter consults the injected `QueryCache` before issuing a request
/// and fills it after a successful fetch. Courses are immutable from the
/// client's perspective, so catalog entries are never invalidated; only
/// `QueryCache::clear` drops them.
#[derive(Clone)]
pub struct CourseService {
    api: Arc<dyn CourseApi>,
    cache: Arc<QueryCache>,
}

impl CourseService {
    #[must_use]
    pub fn new(api: Arc<dyn CourseApi>, cache: Arc<QueryCache>) -> Self {
        Self { api, cache }
    }

    /// All courses in the catalog.
    ///
    /// A fetch also primes the by-id slots so a subsequent detail view does
    /// not hit the network again.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` if the request fails.
    pub async fn list_courses(&self) -> Result<Vec<Course>, ApiError> {
        if let Some(courses) = self.cache.courses() {
            return Ok(courses);
        }

        let courses = self.api.list_courses().await?;
        for course in &courses {
            self.cache.set_course(course.clone());
        }
        self.cache.set_courses(courses.clone());
        Ok(courses)
    }

    /// One course with its lessons.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::NotFound` for an unknown course id.
    pub async fn get_course(&self, course_id: &CourseId) -> Result<Course, ApiError> {
        if let Some(course) = self.cache.course(course_id) {
            return Ok(course);
        }

        let course = self.api.get_course(course_id).await?;
        self.cache.set_course(course.clone());
        Ok(course)
    }

    /// Courses filtered server-side by category.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` if the request fails.
    pub async fn courses_by_category(&self, category: &str) -> Result<Vec<Course>, ApiError> {
        if let Some(courses) = self.cache.courses_in_category(category) {
            return Ok(courses);
        }

        let courses = self.api.courses_by_category(category).await?;
        self.cache
            .set_courses_in_category(category.to_owned(), courses.clone());
        Ok(courses)
    }

    /// One lesson out of a course.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::NotFound` when either the course or the lesson is
    /// unknown.
    pub async fn get_lesson(
        &self,
        course_id: &CourseId,
        lesson_id: &LessonId,
    ) -> Result<Lesson, ApiError> {
        if let Some(lesson) = self.cache.lesson(course_id, lesson_id) {
            return Ok(lesson);
        }

        let lesson = self.api.get_lesson(course_id, lesson_id).await?;
        self.cache.set_lesson(course_id.clone(), lesson.clone());
        Ok(lesson)
    }

    /// Distinct category names.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` if the request fails.
    pub async fn list_categories(&self) -> Result<Vec<String>, ApiError> {
        if let Some(categories) = self.cache.categories() {
            return Ok(categories);
        }

        let categories = self.api.list_categories().await?;
        self.cache.set_categories(categories.clone());
        Ok(categories)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::mock::MockCourseApi;
    use course_core::model::LessonId;

    #[tokio::test]
    async fn list_courses_hits_the_cache_on_the_second_read() {
        let api = Arc::new(MockCourseApi::with_sample_catalog());
        let service = CourseService::new(api.clone(), Arc::new(QueryCache::new()));

        let first = service.list_courses().await.unwrap();
        let second = service.list_courses().await.unwrap();

        assert_eq!(first, second);
        assert_eq!(api.calls("list_courses"), 1);
    }

    #[tokio::test]
    async fn list_courses_primes_the_detail_slot() {
        let api = Arc::new(MockCourseApi::with_sample_catalog());
        let service = CourseService::new(api.clone(), Arc::new(QueryCache::new()));

        service.list_courses().await.unwrap();
        let course = service.get_course(&"devops-fundamentals".into()).await.unwrap();

        assert_eq!(course.id, "devops-fundamentals".into());
        assert_eq!(api.calls("get_course"), 0);
    }

    #[tokio::test]
    async fn unknown_course_surfaces_not_found() {
        let api = Arc::new(MockCourseApi::with_sample_catalog());
        let service = CourseService::new(api, Arc::new(QueryCache::new()));

        let err = service.get_course(&"missing".into()).await.unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn lessons_are_cached_per_course_and_lesson() {
        let api = Arc::new(MockCourseApi::with_sample_catalog());
        let service = CourseService::new(api.clone(), Arc::new(QueryCache::new()));

        let course_id: CourseId = "devops-fundamentals".into();
        let lesson_id: LessonId = "lesson-1".into();

        let first = service.get_lesson(&course_id, &lesson_id).await.unwrap();
        let second = service.get_lesson(&course_id, &lesson_id).await.unwrap();

        assert_eq!(first, second);
        assert_eq!(api.calls("get_lesson"), 1);
    }

    #[tokio::test]
    async fn categories_come_from_the_envelope_once() {
        let api = Arc::new(MockCourseApi::with_sample_catalog());
        let service = CourseService::new(api.clone(), Arc::new(QueryCache::new()));

        let categories = service.list_categories().await.unwrap();
        service.list_categories().await.unwrap();

        assert!(categories.contains(&"Fundamentals".to_owned()));
        assert_eq!(api.calls("list_categories"), 1);
    }
}
