//! Contact form data model.
//!
//! The form is a fixed record of four fields. `ContactDraft` holds the
//! raw values as typed, `FieldErrors` holds at most one message per
//! field, and `SubmissionStatus` is the tri-state lifecycle marker of a
//! single form interaction.

/// One of the four contact form fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContactField {
    Name,
    Email,
    Subject,
    Message,
}

impl ContactField {
    pub const ALL: [Self; 4] = [Self::Name, Self::Email, Self::Subject, Self::Message];

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Email => "Email",
            Self::Subject => "Subject",
            Self::Message => "Message",
        }
    }

    #[must_use]
    pub const fn placeholder(self) -> &'static str {
        match self {
            Self::Name => "Your full name",
            Self::Email => "your.email@example.com",
            Self::Subject => "What's this about?",
            Self::Message => "Tell me about your project, ideas, or how I can help you...",
        }
    }

    /// Maximum accepted length of the trimmed value, in characters.
    #[must_use]
    pub const fn max_len(self) -> usize {
        match self {
            Self::Name => 100,
            Self::Email => 255,
            Self::Subject => 200,
            Self::Message => 1000,
        }
    }

    /// Whether the field accepts embedded newlines.
    #[must_use]
    pub const fn multiline(self) -> bool {
        matches!(self, Self::Message)
    }

    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Name => Self::Email,
            Self::Email => Self::Subject,
            Self::Subject => Self::Message,
            Self::Message => Self::Name,
        }
    }

    #[must_use]
    pub const fn prev(self) -> Self {
        match self {
            Self::Name => Self::Message,
            Self::Email => Self::Name,
            Self::Subject => Self::Email,
            Self::Message => Self::Subject,
        }
    }
}

/// Raw form values as typed by the user.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactDraft {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactDraft {
    #[must_use]
    pub fn get(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Subject => &self.subject,
            ContactField::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: ContactField, value: impl Into<String>) {
        let slot = match field {
            ContactField::Name => &mut self.name,
            ContactField::Email => &mut self.email,
            ContactField::Subject => &mut self.subject,
            ContactField::Message => &mut self.message,
        };
        *slot = value.into();
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        ContactField::ALL.iter().all(|f| self.get(*f).is_empty())
    }
}

/// At most one human-readable error message per field.
///
/// An absent entry means the field is currently considered valid. The
/// whole record is replaced on each validation pass; individual entries
/// are cleared eagerly when the user edits that field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    name: Option<String>,
    email: Option<String>,
    subject: Option<String>,
    message: Option<String>,
}

impl FieldErrors {
    #[must_use]
    pub fn get(&self, field: ContactField) -> Option<&str> {
        self.slot(field).as_deref()
    }

    pub fn set(&mut self, field: ContactField, message: impl Into<String>) {
        *self.slot_mut(field) = Some(message.into());
    }

    pub fn clear(&mut self, field: ContactField) {
        *self.slot_mut(field) = None;
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        ContactField::ALL.iter().all(|f| self.get(*f).is_none())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        ContactField::ALL
            .iter()
            .filter(|f| self.get(**f).is_some())
            .count()
    }

    /// Fields that currently hold an error, in form order.
    pub fn fields(&self) -> impl Iterator<Item = ContactField> + '_ {
        ContactField::ALL
            .into_iter()
            .filter(|f| self.get(*f).is_some())
    }

    fn slot(&self, field: ContactField) -> &Option<String> {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Subject => &self.subject,
            ContactField::Message => &self.message,
        }
    }

    fn slot_mut(&mut self, field: ContactField) -> &mut Option<String> {
        match field {
            ContactField::Name => &mut self.name,
            ContactField::Email => &mut self.email,
            ContactField::Subject => &mut self.subject,
            ContactField::Message => &mut self.message,
        }
    }
}

/// Lifecycle of one form interaction.
///
/// `Submitting` holds exactly while one submission effect is in flight;
/// `Submitted` is terminal until the user asks to send another message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Submitting,
    Submitted,
}

impl SubmissionStatus {
    #[must_use]
    pub const fn is_idle(self) -> bool {
        matches!(self, Self::Idle)
    }

    #[must_use]
    pub const fn is_submitting(self) -> bool {
        matches!(self, Self::Submitting)
    }

    #[must_use]
    pub const fn is_submitted(self) -> bool {
        matches!(self, Self::Submitted)
    }
}

/// A validated, trimmed message ready for delivery.
///
/// Constructed only by [`crate::validate`], so holding one proves the
/// draft passed every field rule. The submission boundary accepts this
/// type, never a raw draft.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutboundMessage {
    name: String,
    email: String,
    subject: String,
    message: String,
}

impl OutboundMessage {
    pub(crate) fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        subject: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            subject: subject.into(),
            message: message.into(),
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    #[must_use]
    pub fn subject(&self) -> &str {
        &self.subject
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

#[cfg(test)]
mod tests {
    use super::{ContactDraft, ContactField, FieldErrors, SubmissionStatus};

    #[test]
    fn field_order_cycles() {
        let mut field = ContactField::Name;
        for expected in ContactField::ALL {
            assert_eq!(field, expected);
            field = field.next();
        }
        assert_eq!(field, ContactField::Name);
        assert_eq!(ContactField::Name.prev(), ContactField::Message);
    }

    #[test]
    fn draft_get_set_roundtrip() {
        let mut draft = ContactDraft::default();
        assert!(draft.is_empty());
        draft.set(ContactField::Email, "a@b.com");
        assert_eq!(draft.get(ContactField::Email), "a@b.com");
        assert!(!draft.is_empty());
    }

    #[test]
    fn errors_track_per_field() {
        let mut errors = FieldErrors::default();
        assert!(errors.is_empty());

        errors.set(ContactField::Name, "Name is required");
        errors.set(ContactField::Message, "too long");
        assert_eq!(errors.len(), 2);
        assert_eq!(
            errors.fields().collect::<Vec<_>>(),
            vec![ContactField::Name, ContactField::Message]
        );

        errors.clear(ContactField::Name);
        assert_eq!(errors.get(ContactField::Name), None);
        assert_eq!(errors.get(ContactField::Message), Some("too long"));
    }

    #[test]
    fn status_predicates() {
        assert!(SubmissionStatus::default().is_idle());
        assert!(SubmissionStatus::Submitting.is_submitting());
        assert!(SubmissionStatus::Submitted.is_submitted());
    }
}
