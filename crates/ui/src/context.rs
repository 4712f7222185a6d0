use std::sync::Arc;

use services::{CourseService, ProgressService};

/// What the composition root hands to the views.
pub trait UiApp: Send + Sync {
    fn course_service(&self) -> Arc<CourseService>;
    fn progress_service(&self) -> Arc<ProgressService>;
}

#[derive(Clone)]
pub struct AppContext {
    course_service: Arc<CourseService>,
    progress_service: Arc<ProgressService>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            course_service: app.course_service(),
            progress_service: app.progress_service(),
        }
    }

    #[must_use]
    pub fn course_service(&self) -> Arc<CourseService> {
        Arc::clone(&self.course_service)
    }

    #[must_use]
    pub fn progress_service(&self) -> Arc<ProgressService> {
        Arc::clone(&self.progress_service)
    }
}

// This context is provided by the application composition root (`crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
