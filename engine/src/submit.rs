//! The submission effect boundary.
//!
//! [`MessageTransport`] is the seam where a real backend would be
//! substituted: it accepts a validated message and must eventually
//! report exactly one success-or-failure outcome on the returned
//! handle. This build ships [`SimulatedTransport`], which waits a fixed
//! latency on the runtime clock and always succeeds.

use std::time::Duration;

use thiserror::Error;
use tokio::sync::oneshot;
use tracing::{debug, info};

use folio_types::OutboundMessage;

/// Reserved failure modes of a delivery. Unreachable with the
/// simulated transport; a real backend integration would map its
/// transport errors here.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DeliveryError {
    #[error("delivery was rejected: {0}")]
    Rejected(String),
    #[error("delivery task ended without reporting an outcome")]
    Abandoned,
}

pub type DeliveryResult = Result<(), DeliveryError>;

/// Accepts a validated message for delivery.
pub trait MessageTransport: Send + Sync {
    /// Begin delivering `message`. The transport must report exactly
    /// one outcome on the returned handle.
    fn deliver(&self, message: OutboundMessage) -> SubmissionHandle;
}

/// Receiving side of one in-flight delivery.
#[derive(Debug)]
pub struct SubmissionHandle {
    rx: oneshot::Receiver<DeliveryResult>,
}

impl SubmissionHandle {
    /// Create a handle together with its reporting side.
    #[must_use]
    pub fn channel() -> (oneshot::Sender<DeliveryResult>, Self) {
        let (tx, rx) = oneshot::channel();
        (tx, Self { rx })
    }

    /// Non-blocking poll for the outcome. A reporter that was dropped
    /// without sending counts as a failed delivery, so the form can
    /// never wedge in Submitting.
    pub fn try_outcome(&mut self) -> Option<DeliveryResult> {
        match self.rx.try_recv() {
            Ok(outcome) => Some(outcome),
            Err(oneshot::error::TryRecvError::Empty) => None,
            Err(oneshot::error::TryRecvError::Closed) => Some(Err(DeliveryError::Abandoned)),
        }
    }
}

/// The build's stand-in for a real backend.
#[derive(Debug, Clone, Copy)]
pub struct SimulatedTransport {
    latency: Duration,
}

impl SimulatedTransport {
    #[must_use]
    pub const fn new(latency: Duration) -> Self {
        Self { latency }
    }
}

impl MessageTransport for SimulatedTransport {
    fn deliver(&self, message: OutboundMessage) -> SubmissionHandle {
        let latency = self.latency;
        let (tx, handle) = SubmissionHandle::channel();
        tokio::spawn(async move {
            debug!(subject = message.subject(), "Simulated delivery started");
            tokio::time::sleep(latency).await;
            info!(subject = message.subject(), "Simulated delivery complete");
            let _ = tx.send(Ok(()));
        });
        handle
    }
}
