use dioxus::prelude::*;
use dioxus_router::Link;

use course_core::model::{Course, CourseId, CourseProgress};

use crate::context::AppContext;
use crate::routes::Route;
use crate::views::{ViewError, ViewState, view_state_from_resource};
use crate::vm::{continue_label, difficulty_class, map_lesson_rows, percent_label};

#[derive(Clone, Debug, PartialEq)]
struct CourseData {
    course: Course,
    progress: CourseProgress,
}

#[component]
pub fn CourseView(course_id: ReadOnlySignal<String>) -> Element {
    let ctx = use_context::<AppContext>();
    let course_service = ctx.course_service();
    let progress_service = ctx.progress_service();

    // The route param is a reactive prop: reading it here restarts the fetch
    // when the router swaps the id on the mounted component.
    let resource = use_resource(move || {
        let course_service = course_service.clone();
        let progress_service = progress_service.clone();
        let course_id = CourseId::new(course_id());
        async move {
            let course = course_service
                .get_course(&course_id)
                .await
                .map_err(|err| ViewError::from_api(&err))?;
            // A missing progress record already reads as zero progress.
            let progress = progress_service
                .progress(&course_id)
                .await
                .map_err(|err| ViewError::from_api(&err))?;
            Ok::<_, ViewError>(CourseData { course, progress })
        }
    });

    let state = view_state_from_resource(&resource);
    rsx! {
        div { class: "page course-page",
            Link { class: "back-link", to: Route::Home {}, "← Back to courses" }
            match state {
                ViewState::Idle => rsx! {
                    p { class: "muted", "Idle" }
                },
                ViewState::Loading => rsx! {
                    div { class: "loading", div { class: "spinner" } }
                },
                ViewState::Error(ViewError::NotFound) => rsx! {
                    p { class: "empty-state", "Course not found." }
                },
                ViewState::Error(err) => rsx! {
                    p { class: "muted", "{err.message()}" }
                },
                ViewState::Ready(data) => {
                    let course = &data.course;
                    let percentage = data.progress.progress_percentage;
                    let rows = map_lesson_rows(course, &data.progress);
                    let badge_class = difficulty_class(&course.difficulty);
                    let difficulty_label = course.difficulty.label().to_owned();
                    let percent = percent_label(percentage);
                    let cta = continue_label(percentage);
                    let course_route_id = course.id.to_string();
                    // "Continue" goes to the first lesson that is unlocked
                    // but not yet completed (or the first lesson on a fresh course).
                    let continue_lesson_id = rows
                        .iter()
                        .find(|row| row.is_accessible && !row.is_completed)
                        .or_else(|| rows.first())
                        .map(|row| row.id.to_string());

                    rsx! {
                        section { class: "course-header",
                            div { class: "course-header-media",
                                img { src: "{course.image_url}", alt: "{course.title}" }
                                div { class: "course-header-overlay",
                                    div { class: "course-header-badges",
                                        span { class: "badge badge-category", "{course.category}" }
                                        span { class: "{badge_class}", "{difficulty_label}" }
                                    }
                                    h1 { "{course.title}" }
                                    p { "{course.description}" }
                                }
                            }
                            div { class: "course-meta",
                                div { class: "course-meta-item",
                                    span { class: "muted", "Instructor" }
                                    span { "{course.instructor}" }
                                }
                                div { class: "course-meta-item",
                                    span { class: "muted", "Duration" }
                                    span { "{course.duration_hours} hours" }
                                }
                                div { class: "course-meta-item",
                                    span { class: "muted", "Lessons" }
                                    span { "{course.lesson_count()} lessons" }
                                }
                            }
                            if percentage > 0.0 {
                                div { class: "progress-block",
                                    div { class: "progress-row",
                                        span { "Progress" }
                                        span { class: "muted", "{percent}" }
                                    }
                                    div { class: "progress-track",
                                        div {
                                            class: "progress-fill",
                                            style: "width: {percentage}%",
                                        }
                                    }
                                }
                            }
                            if let Some(lesson_id) = continue_lesson_id {
                                Link {
                                    class: "btn btn-primary btn-wide",
                                    to: Route::Lesson {
                                        course_id: course_route_id.clone(),
                                        lesson_id,
                                    },
                                    "{cta}"
                                }
                            }
                        }
                        section { class: "course-content",
                            h2 { "Course Content" }
                            div { class: "lesson-list",
                                for row in rows {
                                    div {
                                        class: if row.is_accessible { "lesson-row" } else { "lesson-row lesson-row-locked" },
                                        div { class: "lesson-row-main",
                                            span {
                                                class: if row.is_completed { "lesson-marker lesson-marker-done" } else { "lesson-marker" },
                                                if row.is_completed { "✔" } else { "▶" }
                                            }
                                            div { class: "lesson-row-text",
                                                h3 { "{row.title}" }
                                                p { class: "muted", "{row.description}" }
                                            }
                                        }
                                        div { class: "lesson-row-side",
                                            span { class: "muted", "{row.duration_label}" }
                                            if let Some(action) = row.action_label {
                                                Link {
                                                    class: "btn btn-secondary",
                                                    to: Route::Lesson {
                                                        course_id: course_route_id.clone(),
                                                        lesson_id: row.id.to_string(),
                                                    },
                                                    "{action}"
                                                }
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
