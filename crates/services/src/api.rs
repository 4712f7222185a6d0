//! Typed HTTP client for the remote course service.

use std::env;

use async_trait::async_trait;
use reqwest::{Client, Response, StatusCode};
use serde::Deserialize;
use serde::de::DeserializeOwned;

use course_core::model::{Course, CourseId, CourseProgress, Lesson, LessonId};

use crate::error::ApiError;

/// Where to reach the remote course service.
#[derive(Clone, Debug)]
pub struct ApiConfig {
    pub base_url: String,
}

impl ApiConfig {
    /// Reads the base URL from `COURSE_API_URL`, falling back to the local
    /// development server.
    #[must_use]
    pub fn from_env() -> Self {
        let base_url = env::var("COURSE_API_URL")
            .ok()
            .filter(|value| !value.trim().is_empty())
            .unwrap_or_else(|| "http://localhost:8000".into());
        Self { base_url }
    }

    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }
}

/// One operation per remote resource.
///
/// Each call issues a single HTTP request: no retries, no timeout override,
/// no batching. Object-safe so views and tests can share mock
/// implementations.
#[async_trait]
pub trait CourseApi: Send + Sync {
    async fn list_courses(&self) -> Result<Vec<Course>, ApiError>;
    async fn get_course(&self, course_id: &CourseId) -> Result<Course, ApiError>;
    async fn courses_by_category(&self, category: &str) -> Result<Vec<Course>, ApiError>;
    async fn get_lesson(
        &self,
        course_id: &CourseId,
        lesson_id: &LessonId,
    ) -> Result<Lesson, ApiError>;
    async fn list_categories(&self) -> Result<Vec<String>, ApiError>;
    async fn get_progress(&self, course_id: &CourseId) -> Result<CourseProgress, ApiError>;
    async fn replace_progress(
        &self,
        course_id: &CourseId,
        progress: &CourseProgress,
    ) -> Result<(), ApiError>;
}

/// `CourseApi` over HTTP with a shared `reqwest::Client`.
#[derive(Clone)]
pub struct HttpCourseApi {
    client: Client,
    base_url: String,
}

impl HttpCourseApi {
    #[must_use]
    pub fn new(config: ApiConfig) -> Self {
        Self {
            client: Client::new(),
            base_url: config.base_url.trim_end_matches('/').to_owned(),
        }
    }

    #[must_use]
    pub fn from_env() -> Self {
        Self::new(ApiConfig::from_env())
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let response = self.client.get(self.url(path)).send().await?;
        let response = check_status(response)?;
        Ok(response.json().await?)
    }
}

fn check_status(response: Response) -> Result<Response, ApiError> {
    match response.status() {
        StatusCode::NOT_FOUND => Err(ApiError::NotFound),
        status if !status.is_success() => Err(ApiError::Status(status)),
        _ => Ok(response),
    }
}

/// The categories endpoint wraps its list in an envelope.
#[derive(Debug, Deserialize)]
struct CategoriesResponse {
    categories: Vec<String>,
}

#[async_trait]
impl CourseApi for HttpCourseApi {
    async fn list_courses(&self) -> Result<Vec<Course>, ApiError> {
        self.get_json("/api/courses").await
    }

    async fn get_course(&self, course_id: &CourseId) -> Result<Course, ApiError> {
        self.get_json(&format!("/api/courses/{course_id}")).await
    }

    async fn courses_by_category(&self, category: &str) -> Result<Vec<Course>, ApiError> {
        self.get_json(&format!("/api/courses/category/{category}"))
            .await
    }

    async fn get_lesson(
        &self,
        course_id: &CourseId,
        lesson_id: &LessonId,
    ) -> Result<Lesson, ApiError> {
        self.get_json(&format!("/api/courses/{course_id}/lessons/{lesson_id}"))
            .await
    }

    async fn list_categories(&self) -> Result<Vec<String>, ApiError> {
        let response: CategoriesResponse = self.get_json("/api/categories").await?;
        Ok(response.categories)
    }

    async fn get_progress(&self, course_id: &CourseId) -> Result<CourseProgress, ApiError> {
        self.get_json(&format!("/api/progress/{course_id}")).await
    }

    async fn replace_progress(
        &self,
        course_id: &CourseId,
        progress: &CourseProgress,
    ) -> Result<(), ApiError> {
        let response = self
            .client
            .post(self.url(&format!("/api/progress/{course_id}")))
            .json(progress)
            .send()
            .await?;
        check_status(response)?;
        Ok(())
    }
}
