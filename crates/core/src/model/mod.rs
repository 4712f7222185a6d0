mod course;
mod ids;
mod progress;

pub use course::{Course, Difficulty, Lesson};
pub use ids::{CourseId, LessonId};
pub use progress::{CourseProgress, LessonStatus, lesson_statuses};
