//! Transient toast notifications.
//!
//! Fire-and-forget: callers push a title/body/severity tuple and the
//! queue ages entries out on its own. The renderer reads the visible
//! entries plus each one's entrance animation progress.

use std::collections::VecDeque;
use std::time::Duration;

use folio_types::ui::UiEffect;

/// How long a toast stays on screen.
pub const TOAST_TTL: Duration = Duration::from_secs(4);

const MAX_VISIBLE: usize = 3;
const SLIDE_DURATION: Duration = Duration::from_millis(220);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub title: String,
    pub body: String,
    pub severity: Severity,
}

impl Toast {
    #[must_use]
    pub fn new(severity: Severity, title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
            severity,
        }
    }

    #[must_use]
    pub fn info(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self::new(Severity::Info, title, body)
    }

    #[must_use]
    pub fn success(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self::new(Severity::Success, title, body)
    }

    #[must_use]
    pub fn error(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self::new(Severity::Error, title, body)
    }
}

#[derive(Debug)]
struct ActiveToast {
    toast: Toast,
    remaining: Duration,
    entrance: UiEffect,
}

/// Bounded queue of live toasts. Oldest entries are evicted beyond the
/// visible cap; the rest age out with their TTL.
#[derive(Debug)]
pub struct ToastQueue {
    entries: VecDeque<ActiveToast>,
    reduced_motion: bool,
}

impl ToastQueue {
    #[must_use]
    pub fn new(reduced_motion: bool) -> Self {
        Self {
            entries: VecDeque::new(),
            reduced_motion,
        }
    }

    pub fn push(&mut self, toast: Toast) {
        let slide = if self.reduced_motion {
            Duration::ZERO
        } else {
            SLIDE_DURATION
        };
        self.entries.push_back(ActiveToast {
            toast,
            remaining: TOAST_TTL,
            entrance: UiEffect::slide_up(slide),
        });
        while self.entries.len() > MAX_VISIBLE {
            self.entries.pop_front();
        }
    }

    /// Age entries by `delta`, dropping the expired ones.
    pub fn advance(&mut self, delta: Duration) {
        for entry in &mut self.entries {
            entry.remaining = entry.remaining.saturating_sub(delta);
            entry.entrance.advance(delta);
        }
        self.entries.retain(|entry| !entry.remaining.is_zero());
    }

    /// Visible toasts, oldest first, with entrance progress.
    pub fn iter(&self) -> impl Iterator<Item = (&Toast, f32)> {
        self.entries
            .iter()
            .map(|entry| (&entry.toast, entry.entrance.progress()))
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }
}
