use dioxus::prelude::*;
use dioxus_router::{Link, Outlet, Routable};

use crate::views::{CourseView, HomeView, LessonView};

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/", HomeView)] Home {},
        #[route("/course/:course_id", CourseView)] Course { course_id: String },
        #[route("/course/:course_id/lesson/:lesson_id", LessonView)] Lesson { course_id: String, lesson_id: String },
}

#[component]
fn Layout() -> Element {
    rsx! {
        div { class: "app",
            Header {}
            main { class: "content",
                Outlet::<Route> {}
            }
        }
    }
}

#[component]
fn Header() -> Element {
    rsx! {
        header { class: "header",
            Link { class: "brand", to: Route::Home {},
                span { class: "brand-mark", "🎓" }
                span { class: "brand-name", "DevOps Academy" }
            }
            nav { class: "header-nav",
                Link { to: Route::Home {}, "Courses" }
            }
        }
    }
}
