use course_core::model::{Course, CourseId, Difficulty};

/// UI-ready representation of a course for the catalog grid.
#[derive(Clone, Debug, PartialEq)]
pub struct CourseCardVm {
    pub id: CourseId,
    pub title: String,
    pub description: String,
    pub category: String,
    pub difficulty_label: String,
    pub difficulty_class: &'static str,
    pub instructor: String,
    pub duration_label: String,
    pub lesson_count_label: String,
    pub image_url: String,
}

/// Convert a domain course into a catalog card.
#[must_use]
pub fn map_course_card(course: &Course) -> CourseCardVm {
    CourseCardVm {
        id: course.id.clone(),
        title: course.title.clone(),
        description: course.description.clone(),
        category: course.category.clone(),
        difficulty_label: course.difficulty.label().to_owned(),
        difficulty_class: difficulty_class(&course.difficulty),
        instructor: course.instructor.clone(),
        duration_label: format!("{}h", course.duration_hours),
        lesson_count_label: lesson_count_label(course.lesson_count()),
        image_url: course.image_url.clone(),
    }
}

/// CSS class for the difficulty badge.
#[must_use]
pub fn difficulty_class(difficulty: &Difficulty) -> &'static str {
    match difficulty {
        Difficulty::Beginner => "badge badge-beginner",
        Difficulty::Intermediate => "badge badge-intermediate",
        Difficulty::Advanced => "badge badge-advanced",
        Difficulty::Other(_) => "badge badge-other",
    }
}

fn lesson_count_label(count: usize) -> String {
    if count == 1 {
        "1 lesson".to_owned()
    } else {
        format!("{count} lessons")
    }
}

/// "3 courses found" / "1 course found" for the filter bar.
#[must_use]
pub fn course_count_label(count: usize) -> String {
    if count == 1 {
        "1 course found".to_owned()
    } else {
        format!("{count} courses found")
    }
}

/// Rounded percentage for the progress bar label.
#[must_use]
pub fn percent_label(percentage: f64) -> String {
    format!("{}%", percentage.round() as i64)
}

/// Call-to-action text for a course with the given progress.
#[must_use]
pub fn continue_label(percentage: f64) -> &'static str {
    if percentage > 0.0 {
        "Continue Learning"
    } else {
        "Start Course"
    }
}
