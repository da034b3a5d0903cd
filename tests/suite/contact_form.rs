//! The submit lifecycle end to end: validate, deliver, resolve.

use std::time::Duration;

use folio_engine::{DeliveryError, Severity, SubmissionStatus};
use folio_types::ContactField;

use crate::common::{fill_form, manual_app, test_app};

#[test]
fn valid_submit_walks_idle_submitting_submitted() {
    let (mut app, transport) = manual_app();
    fill_form(&mut app);

    assert_eq!(app.form().status(), SubmissionStatus::Idle);
    app.submit_form();
    assert_eq!(app.form().status(), SubmissionStatus::Submitting);
    assert_eq!(transport.deliveries(), 1);

    // Nothing resolves until the transport reports back.
    app.tick();
    assert_eq!(app.form().status(), SubmissionStatus::Submitting);

    assert!(transport.resolve(Ok(())));
    app.tick();
    assert_eq!(app.form().status(), SubmissionStatus::Submitted);
    assert!(app.form().draft().is_empty());
}

#[test]
fn transport_receives_trimmed_payload() {
    let (mut app, transport) = manual_app();
    fill_form(&mut app);
    while app.form().focus() != ContactField::Name {
        app.focus_next_field();
    }
    app.edit_field().clear_line();
    app.edit_field().paste("  Ann  ");

    app.submit_form();

    let message = transport.last_message().expect("one delivery");
    assert_eq!(message.name(), "Ann");
    assert_eq!(message.subject(), "Hi");
}

#[test]
fn submit_while_in_flight_starts_no_second_delivery() {
    let (mut app, transport) = manual_app();
    fill_form(&mut app);

    app.submit_form();
    app.submit_form();
    app.submit_form();

    assert_eq!(transport.deliveries(), 1);
    assert_eq!(app.form().status(), SubmissionStatus::Submitting);
}

#[test]
fn invalid_submit_surfaces_errors_and_stays_idle() {
    let (mut app, transport) = manual_app();

    app.submit_form();

    assert_eq!(app.form().status(), SubmissionStatus::Idle);
    assert_eq!(transport.deliveries(), 0);
    assert_eq!(app.form().errors().len(), 4);
    let (toast, _) = app.toasts().iter().next().expect("validation toast");
    assert_eq!(toast.severity, Severity::Error);
    assert_eq!(toast.title, "Validation Error");
}

#[test]
fn editing_an_invalid_field_clears_only_its_error() {
    let (mut app, _transport) = manual_app();
    app.submit_form();
    assert_eq!(app.form().errors().len(), 4);

    while app.form().focus() != ContactField::Subject {
        app.focus_next_field();
    }
    app.edit_field().insert_char('H');

    assert_eq!(app.form().errors().get(ContactField::Subject), None);
    assert_eq!(app.form().errors().len(), 3);
}

#[test]
fn delivery_failure_returns_to_idle_preserving_draft() {
    let (mut app, transport) = manual_app();
    fill_form(&mut app);

    app.submit_form();
    assert!(transport.resolve(Err(DeliveryError::Rejected("offline".to_string()))));
    app.tick();

    assert_eq!(app.form().status(), SubmissionStatus::Idle);
    assert_eq!(app.form().draft().name, "Ann");
    assert_eq!(app.form().draft().message, "Hello");
    let (toast, _) = app.toasts().iter().next().expect("failure toast");
    assert_eq!(toast.severity, Severity::Error);

    // Manual resubmit is the recovery path.
    app.submit_form();
    assert_eq!(transport.deliveries(), 2);
}

#[test]
fn send_another_message_resets_to_a_blank_draft() {
    let (mut app, transport) = manual_app();
    fill_form(&mut app);
    app.submit_form();
    assert!(transport.resolve(Ok(())));
    app.tick();
    assert_eq!(app.form().status(), SubmissionStatus::Submitted);

    app.send_another();

    assert_eq!(app.form().status(), SubmissionStatus::Idle);
    assert!(app.form().draft().is_empty());
}

#[tokio::test(start_paused = true)]
async fn simulated_transport_resolves_on_schedule() {
    let mut app = test_app();
    fill_form(&mut app);

    app.submit_form();
    assert_eq!(app.form().status(), SubmissionStatus::Submitting);
    tokio::task::yield_now().await;

    tokio::time::advance(Duration::from_millis(1000)).await;
    tokio::task::yield_now().await;
    app.tick();
    assert_eq!(app.form().status(), SubmissionStatus::Submitting);

    tokio::time::advance(Duration::from_millis(600)).await;
    tokio::task::yield_now().await;
    app.tick();
    assert_eq!(app.form().status(), SubmissionStatus::Submitted);
}
