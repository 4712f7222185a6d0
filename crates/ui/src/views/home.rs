use dioxus::prelude::*;
use dioxus_router::Link;

use course_core::CatalogFilter;
use course_core::model::Difficulty;

use crate::context::AppContext;
use crate::routes::Route;
use crate::views::{ViewState, view_state_from_resource};
use crate::vm::{CourseCardVm, course_count_label, map_course_card};

#[component]
pub fn HomeView() -> Element {
    let ctx = use_context::<AppContext>();
    let mut search = use_signal(String::new);
    let mut category = use_signal(|| None::<String>);
    let mut difficulty = use_signal(|| None::<Difficulty>);

    let course_service = ctx.course_service();
    let courses_resource = use_resource(move || {
        let courses = course_service.clone();
        async move {
            courses
                .list_courses()
                .await
                .map_err(|err| crate::views::ViewError::from_api(&err))
        }
    });

    let category_service = ctx.course_service();
    let categories_resource = use_resource(move || {
        let courses = category_service.clone();
        async move {
            courses
                .list_categories()
                .await
                .map_err(|err| crate::views::ViewError::from_api(&err))
        }
    });

    let state = view_state_from_resource(&courses_resource);
    // The category select degrades to "All Categories" until the list loads.
    let categories = match view_state_from_resource(&categories_resource) {
        ViewState::Ready(categories) => categories,
        _ => Vec::new(),
    };

    rsx! {
        div { class: "page home-page",
            section { class: "hero",
                h1 { "Master DevOps Skills" }
                p { "Learn from industry experts and advance your career" }
                input {
                    class: "hero-search",
                    r#type: "text",
                    placeholder: "Search courses...",
                    value: "{search}",
                    oninput: move |evt| search.set(evt.value()),
                }
            }
            match state {
                ViewState::Idle => rsx! {
                    p { class: "muted", "Idle" }
                },
                ViewState::Loading => rsx! {
                    div { class: "loading", div { class: "spinner" } }
                },
                ViewState::Error(err) => rsx! {
                    p { class: "muted", "{err.message()}" }
                },
                ViewState::Ready(courses) => {
                    let filter = CatalogFilter {
                        search: Some(search()),
                        category: category(),
                        difficulty: difficulty(),
                    };
                    let cards: Vec<CourseCardVm> = filter
                        .apply(&courses)
                        .into_iter()
                        .map(map_course_card)
                        .collect();
                    let count_label = course_count_label(cards.len());
                    let category_value = category().unwrap_or_default();
                    let difficulty_value =
                        difficulty().map(|d| d.label().to_owned()).unwrap_or_default();

                    rsx! {
                        div { class: "filter-bar",
                            span { class: "filter-label", "Filters:" }
                            select {
                                class: "filter-select",
                                value: "{category_value}",
                                onchange: move |evt| {
                                    let value = evt.value();
                                    if value.is_empty() {
                                        category.set(None);
                                    } else {
                                        category.set(Some(value));
                                    }
                                },
                                option { value: "", "All Categories" }
                                for name in categories.clone() {
                                    option { value: "{name}", "{name}" }
                                }
                            }
                            select {
                                class: "filter-select",
                                value: "{difficulty_value}",
                                onchange: move |evt| {
                                    let value = evt.value();
                                    if value.is_empty() {
                                        difficulty.set(None);
                                    } else {
                                        difficulty.set(Some(Difficulty::from(value)));
                                    }
                                },
                                option { value: "", "All Levels" }
                                option { value: "Beginner", "Beginner" }
                                option { value: "Intermediate", "Intermediate" }
                                option { value: "Advanced", "Advanced" }
                            }
                            span { class: "filter-count", "{count_label}" }
                        }
                        if cards.is_empty() {
                            p { class: "empty-state", "No courses found matching your criteria." }
                        } else {
                            div { class: "course-grid",
                                for card in cards {
                                    CourseCard { card }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn CourseCard(card: CourseCardVm) -> Element {
    rsx! {
        Link {
            class: "course-card",
            to: Route::Course { course_id: card.id.to_string() },
            div { class: "course-card-media",
                img { src: "{card.image_url}", alt: "{card.title}" }
                span { class: "{card.difficulty_class}", "{card.difficulty_label}" }
            }
            div { class: "course-card-body",
                span { class: "course-card-category", "{card.category}" }
                h3 { "{card.title}" }
                p { class: "course-card-description", "{card.description}" }
                div { class: "course-card-meta",
                    span { "{card.instructor}" }
                    span { "{card.duration_label}" }
                }
                div { class: "course-card-footer",
                    span { class: "muted", "{card.lesson_count_label}" }
                    span { class: "btn btn-primary", "Start Learning" }
                }
            }
        }
    }
}
