//! Shared helpers for the integration suite.
#![allow(dead_code)] // not every target uses every helper

use std::sync::{Arc, Mutex};
use std::time::Duration;

use tokio::sync::oneshot;

use folio_engine::{
    App, DeliveryResult, MessageTransport, SimulatedTransport, SubmissionHandle,
};
use folio_types::ui::UiOptions;
use folio_types::{ContactField, OutboundMessage};

/// An app over the embedded site content and the default simulated
/// transport.
pub fn test_app() -> App {
    test_app_with(UiOptions::default())
}

pub fn test_app_with(options: UiOptions) -> App {
    App::new(
        folio_content::builtin_site(),
        options,
        Arc::new(SimulatedTransport::new(Duration::from_millis(1500))),
    )
}

/// An app whose deliveries resolve only when the test says so.
pub fn manual_app() -> (App, Arc<ManualTransport>) {
    manual_app_with(UiOptions::default())
}

pub fn manual_app_with(options: UiOptions) -> (App, Arc<ManualTransport>) {
    let transport = Arc::new(ManualTransport::default());
    let app = App::new(folio_content::builtin_site(), options, transport.clone());
    (app, transport)
}

/// Rendering tests disable motion so frames are deterministic: a
/// finished zero-duration effect draws surfaces at their final
/// position and size.
pub fn reduced_motion() -> UiOptions {
    UiOptions {
        reduced_motion: true,
        ..UiOptions::default()
    }
}

/// Type a valid draft into all four fields.
pub fn fill_form(app: &mut App) {
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

/// Transport with test-controlled outcomes. Records every delivered
/// payload and holds the reporting side until `resolve` is called.
#[derive(Default)]
pub struct ManualTransport {
    pending: Mutex<Vec<oneshot::Sender<DeliveryResult>>>,
    delivered: Mutex<Vec<OutboundMessage>>,
}

impl ManualTransport {
    /// Resolve the oldest in-flight delivery. Returns false when
    /// nothing is in flight.
    pub fn resolve(&self, outcome: DeliveryResult) -> bool {
        let mut pending = self.pending.lock().unwrap();
        if pending.is_empty() {
            return false;
        }
        let tx = pending.remove(0);
        tx.send(outcome).is_ok()
    }

    /// Number of deliveries started so far.
    pub fn deliveries(&self) -> usize {
        self.delivered.lock().unwrap().len()
    }

    /// The most recently delivered payload.
    pub fn last_message(&self) -> Option<OutboundMessage> {
        self.delivered.lock().unwrap().last().cloned()
    }
}

impl MessageTransport for ManualTransport {
    fn deliver(&self, message: OutboundMessage) -> SubmissionHandle {
        let (tx, handle) = SubmissionHandle::channel();
        self.delivered.lock().unwrap().push(message);
        self.pending.lock().unwrap().push(tx);
        handle
    }
}
