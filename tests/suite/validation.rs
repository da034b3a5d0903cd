//! Validator behavior pinned at the integration level.

use folio_types::{ContactDraft, ContactField, validate};

fn draft(name: &str, email: &str, subject: &str, message: &str) -> ContactDraft {
    ContactDraft {
        name: name.to_string(),
        email: email.to_string(),
        subject: subject.to_string(),
        message: message.to_string(),
    }
}

#[test]
fn missing_name_reports_exactly_that_field() {
    let errors = validate(&draft("", "a@b.com", "Hi", "Hello")).expect_err("name missing");
    assert_eq!(errors.len(), 1);
    assert_eq!(errors.get(ContactField::Name), Some("Name is required"));
}

#[test]
fn malformed_email_reports_invalid_address() {
    let errors =
        validate(&draft("Ann", "not-an-email", "Hi", "Hello")).expect_err("email malformed");
    assert_eq!(errors.len(), 1);
    assert_eq!(errors.get(ContactField::Email), Some("Invalid email address"));
}

#[test]
fn message_of_1001_characters_is_too_long() {
    let long = "x".repeat(1001);
    let errors = validate(&draft("Ann", "a@b.com", "Hi", &long)).expect_err("message too long");
    assert_eq!(
        errors.get(ContactField::Message),
        Some("Message must be less than 1000 characters")
    );
}

#[test]
fn every_empty_field_is_reported_together() {
    let errors = validate(&draft("", "", "", "")).expect_err("all fields fail");
    assert_eq!(errors.len(), 4);
    assert_eq!(errors.get(ContactField::Name), Some("Name is required"));
    assert_eq!(errors.get(ContactField::Email), Some("Invalid email address"));
    assert_eq!(errors.get(ContactField::Subject), Some("Subject is required"));
    assert_eq!(errors.get(ContactField::Message), Some("Message is required"));
}

#[test]
fn values_at_the_limit_pass() {
    let ok = validate(&draft(
        &"n".repeat(100),
        "a@b.com",
        &"s".repeat(200),
        &"m".repeat(1000),
    ));
    assert!(ok.is_ok());
}

#[test]
fn surrounding_whitespace_is_ignored() {
    let message = validate(&draft("  Ann ", " a@b.com ", " Hi ", " Hello "))
        .expect("whitespace-padded draft is valid");
    assert_eq!(message.name(), "Ann");
    assert_eq!(message.email(), "a@b.com");
    assert_eq!(message.subject(), "Hi");
    assert_eq!(message.message(), "Hello");
}
