mod course_vm;
mod lesson_vm;
mod video;

pub use course_vm::{
    CourseCardVm, continue_label, course_count_label, difficulty_class, map_course_card,
    percent_label,
};
pub use lesson_vm::{LessonRowVm, map_lesson_rows, position_label};
pub use video::youtube_embed_url;
