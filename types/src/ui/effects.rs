//! Animation effects for UI surfaces.
//!
//! Effects are plain timers; the renderer maps progress to rectangle
//! transforms. Reduced-motion builds construct zero-duration effects,
//! which report finished immediately.

use std::time::Duration;

/// Elapsed/total timer with normalized progress.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EffectTimer {
    elapsed: Duration,
    duration: Duration,
}

impl EffectTimer {
    #[must_use]
    pub const fn new(duration: Duration) -> Self {
        Self {
            elapsed: Duration::ZERO,
            duration,
        }
    }

    pub fn advance(&mut self, delta: Duration) {
        self.elapsed = self.elapsed.saturating_add(delta);
    }

    /// Progress in `0.0..=1.0`; a zero-duration timer is complete.
    #[must_use]
    pub fn progress(&self) -> f32 {
        if self.duration.is_zero() {
            return 1.0;
        }
        (self.elapsed.as_secs_f32() / self.duration.as_secs_f32()).clamp(0.0, 1.0)
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.elapsed >= self.duration
    }
}

/// The kind of animation applied to a surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EffectKind {
    /// Grow from the center (success panel reveal).
    PopScale,
    /// Translate up into place (toasts).
    SlideUp,
    /// Horizontal oscillation (validation failure).
    Shake,
}

/// One in-flight animation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UiEffect {
    kind: EffectKind,
    timer: EffectTimer,
}

impl UiEffect {
    #[must_use]
    pub const fn pop_scale(duration: Duration) -> Self {
        Self {
            kind: EffectKind::PopScale,
            timer: EffectTimer::new(duration),
        }
    }

    #[must_use]
    pub const fn slide_up(duration: Duration) -> Self {
        Self {
            kind: EffectKind::SlideUp,
            timer: EffectTimer::new(duration),
        }
    }

    #[must_use]
    pub const fn shake(duration: Duration) -> Self {
        Self {
            kind: EffectKind::Shake,
            timer: EffectTimer::new(duration),
        }
    }

    pub fn advance(&mut self, delta: Duration) {
        self.timer.advance(delta);
    }

    #[must_use]
    pub fn progress(&self) -> f32 {
        self.timer.progress()
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.timer.is_finished()
    }

    #[must_use]
    pub const fn kind(&self) -> EffectKind {
        self.kind
    }
}
