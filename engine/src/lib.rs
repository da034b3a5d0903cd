//! Application state machine for Folio - no TUI dependencies.
//!
//! [`App`] owns all mutable state: the contact form store, the
//! in-flight submission handle, the toast queue, navigation, and view
//! state. The TUI layer renders from it and feeds input into it; the
//! CLI drives [`App::tick`] at the frame cadence.

mod form;
mod nav;
mod submit;
mod toast;
mod view;

pub use form::{ContactForm, FieldEditor, SubmitAttempt};
pub use nav::NavState;
pub use submit::{
    DeliveryError, DeliveryResult, MessageTransport, SimulatedTransport, SubmissionHandle,
};
pub use toast::{Severity, TOAST_TTL, Toast, ToastQueue};
pub use view::ViewState;

// Re-export the domain types the renderer uses alongside the app.
pub use folio_types::ui::{DraftInput, EffectKind, InputMode, UiEffect, UiOptions};
pub use folio_types::{ContactField, Section, Site, SubmissionStatus};

use std::sync::Arc;
use std::time::Instant;

use tracing::{debug, info, warn};

/// Lines scrolled per `j`/`k` press.
const SCROLL_STEP: u16 = 2;

pub struct App {
    site: Site,
    form: ContactForm,
    transport: Arc<dyn MessageTransport>,
    in_flight: Option<SubmissionHandle>,
    toasts: ToastQueue,
    view: ViewState,
    nav: NavState,
    mode: InputMode,
    should_quit: bool,
    frame: usize,
}

impl App {
    #[must_use]
    pub fn new(site: Site, ui_options: UiOptions, transport: Arc<dyn MessageTransport>) -> Self {
        Self {
            site,
            form: ContactForm::new(),
            transport,
            in_flight: None,
            toasts: ToastQueue::new(ui_options.reduced_motion),
            view: ViewState::new(ui_options),
            nav: NavState::default(),
            mode: InputMode::Browse,
            should_quit: false,
            frame: 0,
        }
    }

    // ------------------------------------------------------------------
    // Read surface for the renderer
    // ------------------------------------------------------------------

    #[must_use]
    pub fn site(&self) -> &Site {
        &self.site
    }

    #[must_use]
    pub fn form(&self) -> &ContactForm {
        &self.form
    }

    #[must_use]
    pub fn toasts(&self) -> &ToastQueue {
        &self.toasts
    }

    #[must_use]
    pub fn view(&self) -> &ViewState {
        &self.view
    }

    #[must_use]
    pub fn input_mode(&self) -> InputMode {
        self.mode
    }

    #[must_use]
    pub fn ui_options(&self) -> UiOptions {
        self.view.ui_options
    }

    /// Frame counter for spinner animation.
    #[must_use]
    pub fn tick_count(&self) -> usize {
        self.frame
    }

    #[must_use]
    pub fn active_section(&self) -> Section {
        self.nav.active(self.view.scroll(), self.view.scroll_max())
    }

    #[must_use]
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    // ------------------------------------------------------------------
    // Frame lifecycle
    // ------------------------------------------------------------------

    /// Advance per-frame state: animation timers, toast TTLs, and the
    /// in-flight submission poll.
    pub fn tick(&mut self) {
        let now = Instant::now();
        let delta = now.duration_since(self.view.last_frame);
        self.view.last_frame = now;
        self.frame = self.frame.wrapping_add(1);

        self.view.advance(delta);
        self.toasts.advance(delta);
        self.poll_submission();

        // Submitting holds exactly while one delivery is in flight.
        debug_assert_eq!(
            self.in_flight.is_some(),
            self.form.status().is_submitting()
        );
    }

    /// Called by the renderer once per frame after layout: section
    /// anchors and scroll bounds for the current width, plus any
    /// pending section jump now that its offset is known.
    pub fn layout_sync(&mut self, anchors: Vec<(Section, u16)>, scroll_max: u16, viewport: u16) {
        self.nav.set_anchors(anchors);
        self.view.set_page_metrics(scroll_max, viewport);
        if let Some(section) = self.nav.take_request()
            && let Some(offset) = self.nav.anchor(section)
        {
            self.view.jump_to(offset);
        }
    }

    fn poll_submission(&mut self) {
        let Some(handle) = self.in_flight.as_mut() else {
            return;
        };
        let Some(outcome) = handle.try_outcome() else {
            return;
        };
        self.in_flight = None;
        match outcome {
            Ok(()) => {
                info!("Message delivered");
                self.form.on_submission_result(Ok(()));
                self.view.reveal_success();
                self.toasts.push(Toast::success(
                    "Message Sent!",
                    "Thank you for your message. I'll get back to you soon.",
                ));
            }
            Err(error) => {
                warn!(%error, "Message delivery failed");
                self.form.on_submission_result(Err(error));
                self.toasts.push(Toast::error(
                    "Error",
                    "There was an error sending your message. Please try again.",
                ));
            }
        }
    }

    // ------------------------------------------------------------------
    // Mode and navigation
    // ------------------------------------------------------------------

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    /// Enter Edit mode, bringing the contact section into view.
    pub fn enter_edit_mode(&mut self) {
        self.mode = InputMode::Edit;
        self.nav.request_jump(Section::Contact);
    }

    pub fn enter_browse_mode(&mut self) {
        self.mode = InputMode::Browse;
    }

    pub fn jump_to_section(&mut self, section: Section) {
        self.nav.request_jump(section);
    }

    pub fn next_section(&mut self) {
        self.nav.request_jump(self.active_section().next());
    }

    pub fn prev_section(&mut self) {
        self.nav.request_jump(self.active_section().prev());
    }

    pub fn scroll_up(&mut self) {
        self.view.scroll_up(SCROLL_STEP);
    }

    pub fn scroll_down(&mut self) {
        self.view.scroll_down(SCROLL_STEP);
    }

    pub fn scroll_page_up(&mut self) {
        self.view.page_up();
    }

    pub fn scroll_page_down(&mut self) {
        self.view.page_down();
    }

    pub fn scroll_to_top(&mut self) {
        self.view.scroll_to_top();
    }

    pub fn scroll_to_bottom(&mut self) {
        self.view.scroll_to_bottom();
    }

    // ------------------------------------------------------------------
    // Form operations
    // ------------------------------------------------------------------

    /// Editor for the focused form field.
    pub fn edit_field(&mut self) -> FieldEditor<'_> {
        self.form.edit()
    }

    pub fn focus_next_field(&mut self) {
        self.form.focus_next();
    }

    pub fn focus_prev_field(&mut self) {
        self.form.focus_prev();
    }

    /// Run the submit lifecycle: validate, surface errors, or hand the
    /// payload to the transport. A no-op while a submission is in
    /// flight.
    pub fn submit_form(&mut self) {
        match self.form.submit() {
            SubmitAttempt::Busy => {
                debug!("Submit ignored; submission already in flight");
            }
            SubmitAttempt::Invalid { fields } => {
                warn!(fields, "Validation failed");
                self.toasts.push(Toast::error(
                    "Validation Error",
                    "Please fix the errors below and try again.",
                ));
                self.view.shake_form();
            }
            SubmitAttempt::Accepted(message) => {
                info!(subject = message.subject(), "Submitting message");
                self.in_flight = Some(self.transport.deliver(message));
            }
        }
    }

    /// "Send another message" from the success panel.
    pub fn send_another(&mut self) {
        self.form.reset_for_draft();
    }
}

#[cfg(test)]
mod tests {
    use super::{App, ContactField, InputMode, Section, Severity, SimulatedTransport, SubmissionStatus};
    use folio_types::Site;
    use folio_types::ui::UiOptions;
    use std::sync::Arc;
    use std::time::Duration;

    fn test_site() -> Site {
        toml::from_str(
            r#"
            contact_lead = "Say hello"

            [profile]
            given_name = "Hillary"
            family_name = "Mark"
            title = "Creative Professional"
            tagline = "Makes things"

            [about]
            lead = "Hi"
            paragraphs = ["One"]
            strengths_title = "Strengths"
            strengths = ["Grit"]
            mission = "Ship it"
            "#,
        )
        .expect("test site parses")
    }

    fn app() -> App {
        App::new(
            test_site(),
            UiOptions::default(),
            Arc::new(SimulatedTransport::new(Duration::from_millis(1500))),
        )
    }

    fn fill_form(app: &mut App) {
        for (field, text) in [
            (ContactField::Name, "Ann"),
            (ContactField::Email, "a@b.com"),
            (ContactField::Subject, "Hi"),
            (ContactField::Message, "Hello"),
        ] {
            while app.form().focus() != field {
                app.focus_next_field();
            }
            app.edit_field().paste(text);
        }
    }

    #[tokio::test(start_paused = true)]
    async fn full_submit_lifecycle() {
        let mut app = app();
        fill_form(&mut app);

        app.submit_form();
        assert_eq!(app.form().status(), SubmissionStatus::Submitting);
        tokio::task::yield_now().await;

        // Mid-flight: nothing resolved yet.
        tokio::time::advance(Duration::from_millis(1000)).await;
        tokio::task::yield_now().await;
        app.tick();
        assert_eq!(app.form().status(), SubmissionStatus::Submitting);

        tokio::time::advance(Duration::from_millis(600)).await;
        tokio::task::yield_now().await;
        app.tick();

        assert_eq!(app.form().status(), SubmissionStatus::Submitted);
        assert!(app.form().draft().is_empty());
        let severities: Vec<_> = app.toasts().iter().map(|(t, _)| t.severity).collect();
        assert_eq!(severities, vec![Severity::Success]);
    }

    #[tokio::test(start_paused = true)]
    async fn submit_while_submitting_spawns_nothing() {
        let mut app = app();
        fill_form(&mut app);

        app.submit_form();
        app.submit_form();
        app.submit_form();
        tokio::task::yield_now().await;

        tokio::time::advance(Duration::from_millis(1600)).await;
        tokio::task::yield_now().await;
        app.tick();
        assert_eq!(app.form().status(), SubmissionStatus::Submitted);

        // Only one delivery resolved: a second outcome would have been
        // ignored by the store and logged, and there is exactly one
        // success toast.
        assert_eq!(app.toasts().len(), 1);
    }

    #[tokio::test]
    async fn invalid_submit_stays_idle_and_toasts() {
        let mut app = app();
        app.submit_form();

        assert_eq!(app.form().status(), SubmissionStatus::Idle);
        assert_eq!(app.form().errors().len(), 4);
        let (toast, _) = app.toasts().iter().next().expect("validation toast");
        assert_eq!(toast.title, "Validation Error");
        assert!(app.view().form_fx().is_some());
    }

    #[test]
    fn edit_mode_jumps_to_contact() {
        let mut app = app();
        app.enter_edit_mode();
        assert_eq!(app.input_mode(), InputMode::Edit);

        app.layout_sync(
            vec![(Section::Hero, 0), (Section::Contact, 80)],
            120,
            30,
        );
        assert_eq!(app.view().scroll(), 80);
        assert_eq!(app.active_section(), Section::Contact);
    }

    #[test]
    fn section_cycling_requests_jump() {
        let mut app = app();
        app.layout_sync(
            vec![
                (Section::Hero, 0),
                (Section::About, 10),
                (Section::Skills, 20),
            ],
            60,
            30,
        );
        assert_eq!(app.active_section(), Section::Hero);

        app.next_section();
        app.layout_sync(
            vec![
                (Section::Hero, 0),
                (Section::About, 10),
                (Section::Skills, 20),
            ],
            60,
            30,
        );
        assert_eq!(app.active_section(), Section::About);
    }
}
