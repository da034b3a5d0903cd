//! Toast queue behavior.

use std::time::Duration;

use folio_engine::{Severity, TOAST_TTL, Toast, ToastQueue};

use crate::common::{fill_form, manual_app};

#[test]
fn toasts_age_out_after_their_ttl() {
    let mut queue = ToastQueue::new(false);
    queue.push(Toast::info("First", "hello"));
    queue.advance(Duration::from_secs(2));
    queue.push(Toast::info("Second", "world"));

    queue.advance(TOAST_TTL - Duration::from_secs(2));
    let titles: Vec<_> = queue.iter().map(|(t, _)| t.title.clone()).collect();
    assert_eq!(titles, vec!["Second"]);
}

#[test]
fn submission_success_and_failure_map_to_severities() {
    let (mut app, transport) = manual_app();
    fill_form(&mut app);
    app.submit_form();
    assert!(transport.resolve(Ok(())));
    app.tick();

    let (toast, _) = app.toasts().iter().next().expect("success toast");
    assert_eq!(toast.severity, Severity::Success);
    assert_eq!(toast.title, "Message Sent!");
}

#[test]
fn each_validation_failure_emits_an_error_toast() {
    let (mut app, _transport) = manual_app();
    app.submit_form();
    app.submit_form();

    // One toast per attempt, capped by the queue.
    assert_eq!(app.toasts().len(), 2);
    assert!(app.toasts().iter().all(|(t, _)| t.severity == Severity::Error));
}
