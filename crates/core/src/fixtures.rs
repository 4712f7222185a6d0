//! Shared sample data for unit tests.

use crate::model::{Course, CourseId, Difficulty, Lesson, LessonId};
use crate::time::fixed_now;

pub(crate) fn sample_lesson(id: &str, order: u32) -> Lesson {
    Lesson {
        id: LessonId::new(id),
        title: format!("Lesson {order}"),
        description: "A lesson".to_owned(),
        content: "Body".to_owned(),
        duration_minutes: 45,
        video_url: None,
        order,
    }
}

pub(crate) fn sample_course(id: &str, lesson_ids: &[&str]) -> Course {
    let lessons = lesson_ids
        .iter()
        .enumerate()
        .map(|(i, lesson_id)| sample_lesson(lesson_id, u32::try_from(i).unwrap() + 1))
        .collect();

    Course {
        id: CourseId::new(id),
        title: "Kubernetes Basics".to_owned(),
        description: "Container orchestration from scratch".to_owned(),
        category: "Containers".to_owned(),
        difficulty: Difficulty::Beginner,
        duration_hours: 8,
        instructor: "Sarah Johnson".to_owned(),
        image_url: "https://example.com/cover.jpg".to_owned(),
        lessons,
        created_at: fixed_now(),
        updated_at: fixed_now(),
    }
}
