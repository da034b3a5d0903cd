//! Contact form state store.
//!
//! Owns the four field drafts, the per-field error record, and the
//! submission status. All mutation goes through the operations here;
//! the renderer only reads.

use tracing::warn;

use folio_types::ui::DraftInput;
use folio_types::{
    ContactDraft, ContactField, FieldErrors, OutboundMessage, SubmissionStatus, validate,
};

use crate::submit::DeliveryResult;

/// Outcome of a submit attempt.
#[derive(Debug)]
pub enum SubmitAttempt {
    /// A submission is already in flight, or the success panel is
    /// showing. Nothing to do.
    Busy,
    /// Validation failed; the error record was replaced wholesale.
    Invalid { fields: usize },
    /// The draft validated. Status is now Submitting; deliver this.
    Accepted(OutboundMessage),
}

#[derive(Debug)]
pub struct ContactForm {
    name: DraftInput,
    email: DraftInput,
    subject: DraftInput,
    message: DraftInput,
    focus: ContactField,
    errors: FieldErrors,
    status: SubmissionStatus,
}

impl Default for ContactForm {
    fn default() -> Self {
        Self {
            name: DraftInput::default(),
            email: DraftInput::default(),
            subject: DraftInput::default(),
            message: DraftInput::default(),
            focus: ContactField::Name,
            errors: FieldErrors::default(),
            status: SubmissionStatus::Idle,
        }
    }
}

impl ContactForm {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn focus(&self) -> ContactField {
        self.focus
    }

    pub fn set_focus(&mut self, field: ContactField) {
        self.focus = field;
    }

    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn focus_prev(&mut self) {
        self.focus = self.focus.prev();
    }

    #[must_use]
    pub fn field(&self, field: ContactField) -> &DraftInput {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Subject => &self.subject,
            ContactField::Message => &self.message,
        }
    }

    #[must_use]
    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    #[must_use]
    pub fn status(&self) -> SubmissionStatus {
        self.status
    }

    /// Current raw values (as typed, untrimmed).
    #[must_use]
    pub fn draft(&self) -> ContactDraft {
        ContactDraft {
            name: self.name.text().to_string(),
            email: self.email.text().to_string(),
            subject: self.subject.text().to_string(),
            message: self.message.text().to_string(),
        }
    }

    /// Editor for the focused field. Mutations through the editor
    /// clear that field's error entry; cursor motion does not.
    pub fn edit(&mut self) -> FieldEditor<'_> {
        let field = self.focus;
        let input = match field {
            ContactField::Name => &mut self.name,
            ContactField::Email => &mut self.email,
            ContactField::Subject => &mut self.subject,
            ContactField::Message => &mut self.message,
        };
        FieldEditor {
            field,
            input,
            errors: &mut self.errors,
        }
    }

    /// Run the validator against the current draft.
    ///
    /// On errors the record is replaced wholesale and status stays
    /// Idle. On success the record is cleared and status moves to
    /// Submitting; the caller owns starting the delivery.
    pub fn submit(&mut self) -> SubmitAttempt {
        if !self.status.is_idle() {
            return SubmitAttempt::Busy;
        }
        match validate(&self.draft()) {
            Ok(message) => {
                self.errors = FieldErrors::default();
                self.status = SubmissionStatus::Submitting;
                SubmitAttempt::Accepted(message)
            }
            Err(errors) => {
                let fields = errors.len();
                self.errors = errors;
                SubmitAttempt::Invalid { fields }
            }
        }
    }

    /// Apply the delivery outcome. Success resets the draft and shows
    /// the success panel; failure returns to Idle with the values
    /// preserved so the user can resubmit manually.
    pub fn on_submission_result(&mut self, outcome: DeliveryResult) {
        if !self.status.is_submitting() {
            warn!(?outcome, "Ignoring delivery outcome with no submission in flight");
            return;
        }
        match outcome {
            Ok(()) => {
                self.status = SubmissionStatus::Submitted;
                self.name.clear();
                self.email.clear();
                self.subject.clear();
                self.message.clear();
                self.focus = ContactField::Name;
            }
            Err(_) => {
                self.status = SubmissionStatus::Idle;
            }
        }
    }

    /// "Send another message": leave the success panel for a fresh
    /// draft. Does not restore previous values.
    pub fn reset_for_draft(&mut self) {
        if self.status.is_submitted() {
            self.status = SubmissionStatus::Idle;
        }
    }
}

/// Mutable access to one field, with optimistic error clearing.
pub struct FieldEditor<'a> {
    field: ContactField,
    input: &'a mut DraftInput,
    errors: &'a mut FieldErrors,
}

impl FieldEditor<'_> {
    fn touched(&mut self) {
        self.errors.clear(self.field);
    }

    pub fn insert_char(&mut self, c: char) {
        if c == '\n' && !self.field.multiline() {
            return;
        }
        self.touched();
        self.input.enter_char(c);
    }

    pub fn insert_newline(&mut self) {
        if self.field.multiline() {
            self.touched();
            self.input.enter_newline();
        }
    }

    /// Insert pasted text. Single-line fields flatten newlines to
    /// spaces; the caller has already normalized line endings.
    pub fn paste(&mut self, text: &str) {
        if text.is_empty() {
            return;
        }
        self.touched();
        if self.field.multiline() {
            self.input.enter_text(text);
        } else {
            self.input.enter_text(&text.replace('\n', " "));
        }
    }

    pub fn backspace(&mut self) {
        self.touched();
        self.input.delete_char();
    }

    pub fn delete_forward(&mut self) {
        self.touched();
        self.input.delete_char_forward();
    }

    pub fn delete_word_backwards(&mut self) {
        self.touched();
        self.input.delete_word_backwards();
    }

    pub fn clear_line(&mut self) {
        self.touched();
        self.input.clear();
    }

    pub fn move_cursor_left(&mut self) {
        self.input.move_cursor_left();
    }

    pub fn move_cursor_right(&mut self) {
        self.input.move_cursor_right();
    }

    pub fn move_cursor_home(&mut self) {
        self.input.reset_cursor();
    }

    pub fn move_cursor_end(&mut self) {
        self.input.move_cursor_end();
    }
}

#[cfg(test)]
mod tests {
    use super::{ContactForm, SubmitAttempt};
    use crate::submit::DeliveryError;
    use folio_types::{ContactField, SubmissionStatus};

    fn filled_form() -> ContactForm {
        let mut form = ContactForm::new();
        for (field, text) in [
            (ContactField::Name, "Ann"),
            (ContactField::Email, "a@b.com"),
            (ContactField::Subject, "Hi"),
            (ContactField::Message, "Hello"),
        ] {
            form.set_focus(field);
            form.edit().paste(text);
        }
        form
    }

    #[test]
    fn submit_with_missing_name_reports_only_name() {
        let mut form = filled_form();
        form.set_focus(ContactField::Name);
        form.edit().clear_line();

        match form.submit() {
            SubmitAttempt::Invalid { fields } => assert_eq!(fields, 1),
            other => panic!("expected Invalid, got {other:?}"),
        }
        assert_eq!(
            form.errors().get(ContactField::Name),
            Some("Name is required")
        );
        assert_eq!(form.status(), SubmissionStatus::Idle);
    }

    #[test]
    fn valid_submit_moves_to_submitting_with_trimmed_payload() {
        let mut form = filled_form();
        form.set_focus(ContactField::Name);
        form.edit().clear_line();
        form.edit().paste("  Ann  ");

        match form.submit() {
            SubmitAttempt::Accepted(message) => {
                assert_eq!(message.name(), "Ann");
                assert_eq!(message.email(), "a@b.com");
            }
            other => panic!("expected Accepted, got {other:?}"),
        }
        assert_eq!(form.status(), SubmissionStatus::Submitting);
        assert!(form.errors().is_empty());
    }

    #[test]
    fn submit_while_submitting_is_a_no_op() {
        let mut form = filled_form();
        assert!(matches!(form.submit(), SubmitAttempt::Accepted(_)));
        assert!(matches!(form.submit(), SubmitAttempt::Busy));
        assert_eq!(form.status(), SubmissionStatus::Submitting);
    }

    #[test]
    fn editing_a_field_clears_only_its_error() {
        let mut form = ContactForm::new();
        assert!(matches!(
            form.submit(),
            SubmitAttempt::Invalid { fields: 4 }
        ));

        form.set_focus(ContactField::Email);
        form.edit().insert_char('a');

        assert_eq!(form.errors().get(ContactField::Email), None);
        assert_eq!(form.errors().len(), 3);
        assert!(form.errors().get(ContactField::Name).is_some());
    }

    #[test]
    fn cursor_motion_does_not_clear_errors() {
        let mut form = ContactForm::new();
        assert!(matches!(form.submit(), SubmitAttempt::Invalid { .. }));

        form.set_focus(ContactField::Name);
        form.edit().move_cursor_left();
        form.edit().move_cursor_end();

        assert!(form.errors().get(ContactField::Name).is_some());
    }

    #[test]
    fn success_resets_values_and_shows_success_panel() {
        let mut form = filled_form();
        assert!(matches!(form.submit(), SubmitAttempt::Accepted(_)));

        form.on_submission_result(Ok(()));

        assert_eq!(form.status(), SubmissionStatus::Submitted);
        assert!(form.draft().is_empty());
        assert_eq!(form.focus(), ContactField::Name);
    }

    #[test]
    fn failure_returns_to_idle_and_preserves_values() {
        let mut form = filled_form();
        assert!(matches!(form.submit(), SubmitAttempt::Accepted(_)));

        form.on_submission_result(Err(DeliveryError::Rejected("boom".to_string())));

        assert_eq!(form.status(), SubmissionStatus::Idle);
        assert_eq!(form.draft().name, "Ann");
        assert_eq!(form.draft().message, "Hello");
    }

    #[test]
    fn outcome_without_submission_in_flight_is_ignored() {
        let mut form = filled_form();
        form.on_submission_result(Ok(()));
        assert_eq!(form.status(), SubmissionStatus::Idle);
        assert_eq!(form.draft().name, "Ann");
    }

    #[test]
    fn reset_for_draft_leaves_success_panel_without_restoring() {
        let mut form = filled_form();
        assert!(matches!(form.submit(), SubmitAttempt::Accepted(_)));
        form.on_submission_result(Ok(()));

        form.reset_for_draft();

        assert_eq!(form.status(), SubmissionStatus::Idle);
        assert!(form.draft().is_empty());
    }

    #[test]
    fn reset_for_draft_from_idle_is_a_no_op() {
        let mut form = filled_form();
        form.reset_for_draft();
        assert_eq!(form.status(), SubmissionStatus::Idle);
        assert_eq!(form.draft().name, "Ann");
    }

    #[test]
    fn single_line_fields_reject_newlines() {
        let mut form = ContactForm::new();
        form.set_focus(ContactField::Name);
        form.edit().insert_char('\n');
        form.edit().insert_newline();
        form.edit().paste("two\nlines");

        assert_eq!(form.draft().name, "two lines");

        form.set_focus(ContactField::Message);
        form.edit().paste("two\nlines");
        assert_eq!(form.draft().message, "two\nlines");
    }
}
