use dioxus::prelude::*;
use dioxus_router::Link;

use course_core::model::{Course, CourseId, CourseProgress, Lesson, LessonId};

use crate::context::AppContext;
use crate::routes::Route;
use crate::views::{ViewError, ViewState, view_state_from_resource};
use crate::vm::{position_label, youtube_embed_url};

#[derive(Clone, Debug, PartialEq)]
struct LessonData {
    course: Course,
    lesson: Lesson,
    progress: CourseProgress,
}

/// State of the mark-complete submission. `Saved` records which lesson the
/// server acknowledged, so navigating to a sibling lesson cannot inherit the
/// confirmation. A failed submission leaves completion state untouched and
/// shows the error inline.
#[derive(Clone, Debug, PartialEq, Eq)]
enum SaveState {
    Idle,
    Saving,
    Saved(LessonId),
    Error(ViewError),
}

#[component]
pub fn LessonView(course_id: ReadOnlySignal<String>, lesson_id: ReadOnlySignal<String>) -> Element {
    let ctx = use_context::<AppContext>();
    let course_service = ctx.course_service();
    let progress_for_fetch = ctx.progress_service();
    let progress_for_save = ctx.progress_service();

    // Route params arrive as reactive props: prev/next navigation updates
    // them in place on the mounted component, and reading them here restarts
    // the fetch for the new lesson.
    let mut resource = use_resource(move || {
        let course_service = course_service.clone();
        let progress_service = progress_for_fetch.clone();
        let course_id = CourseId::new(course_id());
        let lesson_id = LessonId::new(lesson_id());
        async move {
            let course = course_service
                .get_course(&course_id)
                .await
                .map_err(|err| ViewError::from_api(&err))?;
            let lesson = course_service
                .get_lesson(&course_id, &lesson_id)
                .await
                .map_err(|err| ViewError::from_api(&err))?;
            let progress = progress_service
                .progress(&course_id)
                .await
                .map_err(|err| ViewError::from_api(&err))?;
            Ok::<_, ViewError>(LessonData {
                course,
                lesson,
                progress,
            })
        }
    });

    let mut save_state = use_signal(|| SaveState::Idle);

    // A pending or failed submission belongs to the lesson it was issued
    // for; drop it when the route param changes.
    use_effect(move || {
        lesson_id.read();
        save_state.set(SaveState::Idle);
    });

    let on_complete = use_callback(move |()| {
        if *save_state.peek() == SaveState::Saving {
            return;
        }
        let data = match resource.value().read().as_ref() {
            Some(Ok(data)) => data.clone(),
            _ => return,
        };
        let target = data.lesson.id.clone();
        let progress_service = progress_for_save.clone();
        save_state.set(SaveState::Saving);
        spawn(async move {
            match progress_service.complete_lesson(&data.course, &target).await {
                Ok(_) => {
                    save_state.set(SaveState::Saved(target));
                    // Refetch so the lesson list and progress bar pick up
                    // the invalidated cache entry.
                    resource.restart();
                }
                Err(err) => {
                    save_state.set(SaveState::Error(ViewError::from_api(&err)));
                }
            }
        });
    });

    #[cfg(test)]
    {
        let mut registered = use_signal(|| false);
        if !registered() {
            registered.set(true);
            if let Some(handles) = try_consume_context::<LessonTestHandles>() {
                handles.register(on_complete);
            }
        }
    }

    let state = view_state_from_resource(&resource);
    rsx! {
        div { class: "page lesson-page",
            match state {
                ViewState::Idle => rsx! {
                    p { class: "muted", "Idle" }
                },
                ViewState::Loading => rsx! {
                    div { class: "loading", div { class: "spinner" } }
                },
                ViewState::Error(ViewError::NotFound) => rsx! {
                    p { class: "empty-state", "Lesson not found." }
                    Link {
                        class: "back-link",
                        to: Route::Course { course_id: course_id() },
                        "Back to course"
                    }
                },
                ViewState::Error(err) => rsx! {
                    p { class: "muted", "{err.message()}" }
                },
                ViewState::Ready(data) => {
                    let course = &data.course;
                    let lesson = &data.lesson;
                    let course_route_id = course.id.to_string();
                    let index = course.lesson_index(&lesson.id).unwrap_or(0);
                    let position = position_label(index, course.lesson_count());
                    let prev = course.previous_lesson(&lesson.id).cloned();
                    let next = course.next_lesson(&lesson.id).cloned();
                    let embed = lesson.video_url.as_ref().and_then(youtube_embed_url);
                    let video_link = lesson.video_url.as_ref().map(url::Url::to_string);
                    // Only server-confirmed completion counts: either fetched
                    // with the progress record or acknowledged by the mutation
                    // for this specific lesson.
                    let confirmed_here =
                        matches!(&*save_state.read(), SaveState::Saved(saved) if *saved == lesson.id);
                    let is_completed = data.progress.is_completed(&lesson.id) || confirmed_here;
                    let saving = save_state() == SaveState::Saving;

                    rsx! {
                        div { class: "lesson-nav",
                            Link {
                                class: "back-link",
                                to: Route::Course { course_id: course_route_id.clone() },
                                "← Back to course"
                            }
                            span { class: "muted", "{position}" }
                        }
                        section { class: "lesson-header",
                            h1 { "{lesson.title}" }
                            p { class: "muted", "{lesson.description}" }
                            div { class: "lesson-header-meta",
                                span { class: "muted", "{lesson.duration_minutes} minutes" }
                                span { class: "lesson-category", "{course.category}" }
                                if is_completed {
                                    span { class: "completed-tag", "✔ Completed" }
                                }
                            }
                        }
                        if let Some(embed_url) = embed {
                            section { class: "lesson-video",
                                iframe {
                                    class: "lesson-video-frame",
                                    src: "{embed_url}",
                                    title: "{lesson.title}",
                                    allowfullscreen: true,
                                }
                                if let Some(link) = video_link {
                                    a {
                                        class: "external-link",
                                        href: "{link}",
                                        target: "_blank",
                                        "Watch on YouTube"
                                    }
                                }
                            }
                        }
                        section { class: "lesson-content",
                            h2 { "Lesson Content" }
                            p { class: "lesson-body", "{lesson.content}" }
                        }
                        section { class: "lesson-actions",
                            div {
                                if let Some(prev_lesson) = prev {
                                    Link {
                                        class: "nav-link",
                                        to: Route::Lesson {
                                            course_id: course_route_id.clone(),
                                            lesson_id: prev_lesson.id.to_string(),
                                        },
                                        "← Previous: {prev_lesson.title}"
                                    }
                                }
                            }
                            div { class: "lesson-actions-right",
                                if let SaveState::Error(err) = save_state() {
                                    span { class: "save-error", "{err.message()}" }
                                }
                                if !is_completed {
                                    button {
                                        class: "btn btn-success",
                                        r#type: "button",
                                        disabled: saving,
                                        onclick: move |_| on_complete.call(()),
                                        if saving {
                                            "Saving..."
                                        } else {
                                            "Mark Complete"
                                        }
                                    }
                                }
                                if let Some(next_lesson) = next {
                                    Link {
                                        class: "btn btn-primary",
                                        to: Route::Lesson {
                                            course_id: course_route_id.clone(),
                                            lesson_id: next_lesson.id.to_string(),
                                        },
                                        "Next: {next_lesson.title} →"
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

#[cfg(test)]
#[derive(Clone, Default)]
pub(crate) struct LessonTestHandles {
    complete: std::rc::Rc<std::cell::RefCell<Option<Callback<()>>>>,
}

#[cfg(test)]
impl LessonTestHandles {
    pub(crate) fn register(&self, complete: Callback<()>) {
        *self.complete.borrow_mut() = Some(complete);
    }

    pub(crate) fn complete(&self) -> Callback<()> {
        (*self.complete.borrow()).expect("complete callback registered")
    }
}
