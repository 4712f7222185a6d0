use super::test_harness::{ViewKind, setup_view_harness};

#[tokio::test(flavor = "current_thread")]
async fn home_view_smoke_renders_catalog() {
    let mut harness = setup_view_harness(ViewKind::Home);
    harness.rebuild();
    harness.drive_async().await;

    let html = harness.render();
    assert!(html.contains("Kubernetes Basics"), "missing course card in {html}");
    assert!(html.contains("Terraform in Practice"), "missing course card in {html}");
    assert!(html.contains("2 courses found"), "missing count in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn course_view_refetches_when_the_route_id_changes() {
    let mut harness = setup_view_harness(ViewKind::Course("k8s".to_owned()));
    harness.rebuild();
    harness.drive_async().await;
    assert!(harness.render().contains("Kubernetes Basics"));

    // Swapping the route param on the mounted view must refetch, not keep
    // serving the first course's data.
    harness.nav.goto("tf");
    harness.drive();
    harness.drive_async().await;
    harness.drive_async().await;

    let html = harness.render();
    assert!(html.contains("Terraform in Practice"), "missing refetched course in {html}");
    assert!(!html.contains("Kubernetes Basics"), "stale course still rendered in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn lesson_view_refetches_on_next_navigation() {
    let mut harness = setup_view_harness(ViewKind::Lesson {
        course_id: "k8s".to_owned(),
        lesson_id: "intro".to_owned(),
    });
    harness.rebuild();
    harness.drive_async().await;

    let html = harness.render();
    assert!(html.contains("Lesson 1 of 3"), "missing position in {html}");
    assert!(
        html.contains("Kubernetes is a container orchestrator."),
        "missing first lesson body in {html}"
    );

    harness.nav.goto("pods");
    harness.drive();
    harness.drive_async().await;
    harness.drive_async().await;

    let html = harness.render();
    assert!(html.contains("Lesson 2 of 3"), "stale position label in {html}");
    assert!(
        html.contains("Pods are the smallest deployable unit."),
        "missing second lesson body in {html}"
    );
    assert!(
        !html.contains("Kubernetes is a container orchestrator."),
        "stale lesson body still rendered in {html}"
    );
}

#[tokio::test(flavor = "current_thread")]
async fn completion_confirmation_does_not_leak_to_the_next_lesson() {
    let mut harness = setup_view_harness(ViewKind::Lesson {
        course_id: "k8s".to_owned(),
        lesson_id: "intro".to_owned(),
    });
    harness.rebuild();
    harness.drive_async().await;
    assert!(harness.render().contains("Mark Complete"));

    harness.lesson_handles.complete().call(());
    harness.drive();
    harness.drive_async().await;
    harness.drive_async().await;

    let html = harness.render();
    assert!(html.contains("✔ Completed"), "missing confirmation in {html}");
    assert!(
        harness.remote.stored_progress(&"k8s".into()).is_some(),
        "completion was not submitted"
    );

    // The next lesson starts fresh: the previous lesson's confirmed save
    // must not mark it completed.
    harness.nav.goto("pods");
    harness.drive();
    harness.drive_async().await;
    harness.drive_async().await;

    let html = harness.render();
    assert!(
        html.contains("Pods are the smallest deployable unit."),
        "missing second lesson body in {html}"
    );
    assert!(
        !html.contains("✔ Completed"),
        "confirmation leaked to the next lesson in {html}"
    );
    assert!(
        html.contains("Mark Complete"),
        "missing completion action for the next lesson in {html}"
    );
}
