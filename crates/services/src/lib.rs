#![forbid(unsafe_code)]

pub mod api;
pub mod cache;
pub mod course_service;
pub mod error;
pub mod progress_service;

pub use course_core::Clock;

pub use api::{ApiConfig, CourseApi, HttpCourseApi};
pub use cache::QueryCache;
pub use course_service::CourseService;
pub use error::ApiError;
pub use progress_service::ProgressService;
