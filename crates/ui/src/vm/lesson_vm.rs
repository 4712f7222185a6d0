use course_core::model::{Course, CourseProgress, LessonId, lesson_statuses};

/// UI-ready representation of one row in the course content list.
#[derive(Clone, Debug, PartialEq)]
pub struct LessonRowVm {
    pub id: LessonId,
    pub title: String,
    pub description: String,
    pub duration_label: String,
    pub is_completed: bool,
    pub is_accessible: bool,
    /// Link text when the lesson can be opened; `None` renders no link.
    pub action_label: Option<&'static str>,
}

/// Map a course's lessons with their derived completion/accessibility state.
#[must_use]
pub fn map_lesson_rows(course: &Course, progress: &CourseProgress) -> Vec<LessonRowVm> {
    lesson_statuses(course, progress)
        .into_iter()
        .map(|status| {
            let action_label = if !status.is_accessible {
                None
            } else if status.is_completed {
                Some("Review")
            } else {
                Some("Start")
            };

            LessonRowVm {
                id: status.lesson.id.clone(),
                title: status.lesson.title.clone(),
                description: status.lesson.description.clone(),
                duration_label: format!("{} min", status.lesson.duration_minutes),
                is_completed: status.is_completed,
                is_accessible: status.is_accessible,
                action_label,
            }
        })
        .collect()
}

/// "Lesson 2 of 5" for the lesson page header.
#[must_use]
pub fn position_label(index: usize, total: usize) -> String {
    format!("Lesson {} of {}", index + 1, total)
}
