//! Pure field validation for the contact form.
//!
//! Every value is trimmed of surrounding whitespace before evaluation.
//! Rules are checked in order per field and the first failing rule
//! wins, so each field reports at most one message. There is no
//! cross-field validation.

use std::sync::LazyLock;

use regex::Regex;

use crate::contact::{ContactDraft, ContactField, FieldErrors, OutboundMessage};

// Conservative email shape: one '@', non-empty local part, and a
// dot-separated domain with no whitespace. Deliverability is the
// backend's problem, not the form's.
static EMAIL_SHAPE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid")
});

/// Validate a draft, producing the trimmed payload or the per-field
/// error record containing only the fields that failed.
pub fn validate(draft: &ContactDraft) -> Result<OutboundMessage, FieldErrors> {
    let mut errors = FieldErrors::default();

    let name = draft.name.trim();
    if name.is_empty() {
        errors.set(ContactField::Name, "Name is required");
    } else if name.chars().count() > ContactField::Name.max_len() {
        errors.set(ContactField::Name, "Name must be less than 100 characters");
    }

    // An empty email fails the shape check, so it shares the shape
    // message rather than carrying a separate "required" message.
    let email = draft.email.trim();
    if !EMAIL_SHAPE.is_match(email) {
        errors.set(ContactField::Email, "Invalid email address");
    } else if email.chars().count() > ContactField::Email.max_len() {
        errors.set(
            ContactField::Email,
            "Email must be less than 255 characters",
        );
    }

    let subject = draft.subject.trim();
    if subject.is_empty() {
        errors.set(ContactField::Subject, "Subject is required");
    } else if subject.chars().count() > ContactField::Subject.max_len() {
        errors.set(
            ContactField::Subject,
            "Subject must be less than 200 characters",
        );
    }

    let message = draft.message.trim();
    if message.is_empty() {
        errors.set(ContactField::Message, "Message is required");
    } else if message.chars().count() > ContactField::Message.max_len() {
        errors.set(
            ContactField::Message,
            "Message must be less than 1000 characters",
        );
    }

    if errors.is_empty() {
        Ok(OutboundMessage::new(name, email, subject, message))
    } else {
        Err(errors)
    }
}
