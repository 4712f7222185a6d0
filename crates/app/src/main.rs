use std::fmt;
use std::sync::Arc;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use services::{ApiConfig, Clock, CourseApi, CourseService, HttpCourseApi, ProgressService, QueryCache};
use ui::{App, UiApp, build_app_context};

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidApiBase { raw: String },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidApiBase { raw } => write!(f, "invalid --api-base value: {raw}"),
        }
    }
}

impl std::error::Error for ArgsError {}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    args.next().ok_or(ArgsError::MissingValue { flag })
}

struct DesktopApp {
    courses: Arc<CourseService>,
    progress: Arc<ProgressService>,
}

impl UiApp for DesktopApp {
    fn course_service(&self) -> Arc<CourseService> {
        Arc::clone(&self.courses)
    }

    fn progress_service(&self) -> Arc<ProgressService> {
        Arc::clone(&self.progress)
    }
}

struct Args {
    api_base: String,
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- [--api-base <url>]");
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  --api-base http://localhost:8000");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  COURSE_API_URL");
}

impl Args {
    fn parse(args: &mut impl Iterator<Item = String>) -> Result<Self, ArgsError> {
        let mut api_base = std::env::var("COURSE_API_URL")
            .ok()
            .filter(|value| !value.trim().is_empty())
            .unwrap_or_else(|| "http://localhost:8000".into());

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--api-base" => {
                    let value = require_value(args, "--api-base")?;
                    validate_api_base(&value)?;
                    api_base = value;
                }
                "--help" | "-h" => {
                    print_usage();
                    std::process::exit(0);
                }
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(Self { api_base })
    }
}

fn validate_api_base(raw: &str) -> Result<(), ArgsError> {
    let parsed = url::Url::parse(raw).map_err(|_| ArgsError::InvalidApiBase {
        raw: raw.to_string(),
    })?;
    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(ArgsError::InvalidApiBase {
            raw: raw.to_string(),
        });
    }
    Ok(())
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let argv: Vec<String> = std::env::args().skip(1).collect();
    let mut iter = argv.into_iter();
    let parsed = Args::parse(&mut iter).map_err(|e| {
        eprintln!("{e}");
        print_usage();
        e
    })?;

    // Wire the stack in the binary glue so core/services stay pure: one HTTP
    // client and one cache shared by both services.
    let api: Arc<dyn CourseApi> = Arc::new(HttpCourseApi::new(ApiConfig::new(parsed.api_base)));
    let cache = Arc::new(QueryCache::new());
    let courses = Arc::new(CourseService::new(Arc::clone(&api), Arc::clone(&cache)));
    let progress = Arc::new(ProgressService::new(api, cache, Clock::default_clock()));

    let app: Arc<dyn UiApp> = Arc::new(DesktopApp { courses, progress });
    let context = build_app_context(&app);

    // On macOS, Dioxus/tao can default to an always-on-top window in some dev setups.
    // Explicitly disable it so the app doesn't behave like a modal window.
    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title("DevOps Academy")
            .with_always_on_top(false),
    );

    LaunchBuilder::desktop()
        .with_cfg(desktop_cfg)
        .with_context(context)
        .launch(App);
    Ok(())
}

fn main() {
    if let Err(err) = run() {
        // At this layer (binary glue), printing once is fine.
        eprintln!("{err}");
        std::process::exit(2);
    }
}
