use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use dioxus_router::{Routable, Router};

use course_core::model::{Course, CourseId, CourseProgress, Difficulty, Lesson, LessonId};
use course_core::time::fixed_clock;
use services::{ApiError, CourseApi, CourseService, ProgressService, QueryCache};

use crate::context::{UiApp, build_app_context};
use crate::views::lesson::LessonTestHandles;
use crate::views::{CourseView, HomeView, LessonView};

#[derive(Clone)]
struct TestApp {
    courses: Arc<CourseService>,
    progress: Arc<ProgressService>,
}

impl UiApp for TestApp {
    fn course_service(&self) -> Arc<CourseService> {
        Arc::clone(&self.courses)
    }

    fn progress_service(&self) -> Arc<ProgressService> {
        Arc::clone(&self.progress)
    }
}

pub struct TestRemote {
    courses: Vec<Course>,
    progress: Mutex<HashMap<CourseId, CourseProgress>>,
}

impl TestRemote {
    fn new(courses: Vec<Course>) -> Self {
        Self {
            courses,
            progress: Mutex::new(HashMap::new()),
        }
    }

    pub fn stored_progress(&self, course_id: &CourseId) -> Option<CourseProgress> {
        self.progress.lock().unwrap().get(course_id).cloned()
    }
}

#[async_trait]
impl CourseApi for TestRemote {
    async fn list_courses(&self) -> Result<Vec<Course>, ApiError> {
        Ok(self.courses.clone())
    }

    async fn get_course(&self, course_id: &CourseId) -> Result<Course, ApiError> {
        self.courses
            .iter()
            .find(|course| course.id == *course_id)
            .cloned()
            .ok_or(ApiError::NotFound)
    }

    async fn courses_by_category(&self, category: &str) -> Result<Vec<Course>, ApiError> {
        Ok(self
            .courses
            .iter()
            .filter(|course| course.category.eq_ignore_ascii_case(category))
            .cloned()
            .collect())
    }

    async fn get_lesson(
        &self,
        course_id: &CourseId,
        lesson_id: &LessonId,
    ) -> Result<Lesson, ApiError> {
        let course = self.get_course(course_id).await?;
        course.lesson(lesson_id).cloned().ok_or(ApiError::NotFound)
    }

    async fn list_categories(&self) -> Result<Vec<String>, ApiError> {
        let mut categories: Vec<String> = self
            .courses
            .iter()
            .map(|course| course.category.clone())
            .collect();
        categories.sort();
        categories.dedup();
        Ok(categories)
    }

    async fn get_progress(&self, course_id: &CourseId) -> Result<CourseProgress, ApiError> {
        self.progress
            .lock()
            .unwrap()
            .get(course_id)
            .cloned()
            .ok_or(ApiError::NotFound)
    }

    async fn replace_progress(
        &self,
        course_id: &CourseId,
        progress: &CourseProgress,
    ) -> Result<(), ApiError> {
        self.progress
            .lock()
            .unwrap()
            .insert(course_id.clone(), progress.clone());
        Ok(())
    }
}

fn lesson(id: &str, title: &str, content: &str, order: u32) -> Lesson {
    Lesson {
        id: LessonId::new(id),
        title: title.to_owned(),
        description: "A lesson".to_owned(),
        content: content.to_owned(),
        duration_minutes: 45,
        video_url: None,
        order,
    }
}

fn course(id: &str, title: &str, lessons: Vec<Lesson>) -> Course {
    let now = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
    Course {
        id: CourseId::new(id),
        title: title.to_owned(),
        description: "A course".to_owned(),
        category: "DevOps".to_owned(),
        difficulty: Difficulty::Beginner,
        duration_hours: 8,
        instructor: "Sarah Johnson".to_owned(),
        image_url: "https://example.com/cover.jpg".to_owned(),
        lessons,
        created_at: now,
        updated_at: now,
    }
}

fn sample_catalog() -> Vec<Course> {
    vec![
        course(
            "k8s",
            "Kubernetes Basics",
            vec![
                lesson(
                    "intro",
                    "Intro to Kubernetes",
                    "Kubernetes is a container orchestrator.",
                    1,
                ),
                lesson(
                    "pods",
                    "Pods and Deployments",
                    "Pods are the smallest deployable unit.",
                    2,
                ),
                lesson(
                    "services",
                    "Services and Networking",
                    "Services expose pods on the network.",
                    3,
                ),
            ],
        ),
        course(
            "tf",
            "Terraform in Practice",
            vec![lesson(
                "state",
                "State Management",
                "Terraform tracks resources in a state file.",
                1,
            )],
        ),
    ]
}

/// Which view the harness mounts at the root.
#[derive(Clone, PartialEq, Eq)]
pub enum ViewKind {
    Home,
    Course(String),
    Lesson {
        course_id: String,
        lesson_id: String,
    },
}

/// Lets a test swap the mounted view's route param in place, the way the
/// router does on a prev/next link: a prop update on the same component,
/// not a remount.
#[derive(Clone, Default)]
pub struct NavHandle {
    target: Rc<RefCell<Option<Signal<String>>>>,
}

impl NavHandle {
    fn register(&self, target: Signal<String>) {
        *self.target.borrow_mut() = Some(target);
    }

    pub fn goto(&self, id: &str) {
        let mut target = (*self.target.borrow()).expect("navigation target registered");
        target.set(id.to_owned());
    }
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<TestApp>,
    view: ViewKind,
    nav: NavHandle,
    lesson_handles: LessonTestHandles,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl Eq for ViewHarnessProps {}

#[component]
fn ViewRouterHarness(props: ViewHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    use_context_provider(|| props.view.clone());
    use_context_provider(|| props.nav.clone());
    use_context_provider(|| props.lesson_handles.clone());
    rsx! { Router::<TestRoute> {} }
}

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum TestRoute {
    #[route("/")]
    Root {},
}

#[component]
fn Root() -> Element {
    let view = use_context::<ViewKind>();
    match view {
        ViewKind::Home => rsx! { HomeView {} },
        ViewKind::Course(course_id) => rsx! {
            CourseTarget { initial: course_id }
        },
        ViewKind::Lesson {
            course_id,
            lesson_id,
        } => rsx! {
            LessonTarget { course_id, initial: lesson_id }
        },
    }
}

#[component]
fn CourseTarget(initial: String) -> Element {
    let current = use_signal(move || initial.clone());
    register_nav(current);
    rsx! { CourseView { course_id: current() } }
}

#[component]
fn LessonTarget(course_id: String, initial: String) -> Element {
    let current = use_signal(move || initial.clone());
    register_nav(current);
    rsx! { LessonView { course_id, lesson_id: current() } }
}

fn register_nav(current: Signal<String>) {
    let mut registered = use_signal(|| false);
    if !registered() {
        registered.set(true);
        if let Some(nav) = try_consume_context::<NavHandle>() {
            nav.register(current);
        }
    }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    pub remote: Arc<TestRemote>,
    pub nav: NavHandle,
    pub lesson_handles: LessonTestHandles,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub fn drive(&mut self) {
        drive_dom(&mut self.dom);
    }

    pub async fn drive_async(&mut self) {
        let _ = tokio::time::timeout(
            std::time::Duration::from_millis(50),
            self.dom.wait_for_work(),
        )
        .await;
        self.dom.render_immediate(&mut NoOpMutations);
        self.dom.process_events();
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

pub fn setup_view_harness(view: ViewKind) -> ViewHarness {
    let remote = Arc::new(TestRemote::new(sample_catalog()));
    let cache = Arc::new(QueryCache::new());
    let courses = Arc::new(CourseService::new(remote.clone(), Arc::clone(&cache)));
    let progress = Arc::new(ProgressService::new(remote.clone(), cache, fixed_clock()));
    let app = Arc::new(TestApp { courses, progress });

    let nav = NavHandle::default();
    let lesson_handles = LessonTestHandles::default();
    let dom = VirtualDom::new_with_props(
        ViewRouterHarness,
        ViewHarnessProps {
            app,
            view,
            nav: nav.clone(),
            lesson_handles: lesson_handles.clone(),
        },
    );

    ViewHarness {
        dom,
        remote,
        nav,
        lesson_handles,
    }
}
