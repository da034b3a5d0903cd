//! View state for rendering.
//!
//! Groups the state that exists only to drive display: scroll
//! position, layout metrics reported back by the renderer, and the
//! in-flight animation effects.

use std::time::{Duration, Instant};

use folio_types::ui::{UiEffect, UiOptions};

const SHAKE_DURATION: Duration = Duration::from_millis(320);
const POP_DURATION: Duration = Duration::from_millis(240);

#[derive(Debug)]
pub struct ViewState {
    scroll: u16,
    scroll_max: u16,
    viewport: u16,
    form_fx: Option<UiEffect>,
    success_fx: Option<UiEffect>,
    /// UI options (theme, motion, glyphs).
    pub ui_options: UiOptions,
    /// Timestamp of the last frame, for animation timing.
    pub last_frame: Instant,
}

impl ViewState {
    #[must_use]
    pub fn new(ui_options: UiOptions) -> Self {
        Self {
            scroll: 0,
            scroll_max: 0,
            viewport: 0,
            form_fx: None,
            success_fx: None,
            ui_options,
            last_frame: Instant::now(),
        }
    }

    #[must_use]
    pub fn scroll(&self) -> u16 {
        self.scroll
    }

    #[must_use]
    pub fn scroll_max(&self) -> u16 {
        self.scroll_max
    }

    /// Scroll position as a percentage for the status bar.
    #[must_use]
    pub fn scroll_percent(&self) -> u8 {
        if self.scroll_max == 0 {
            return 100;
        }
        ((u32::from(self.scroll) * 100) / u32::from(self.scroll_max)) as u8
    }

    /// Called by the renderer once per frame with the laid-out page
    /// height surplus and the viewport height for the current width.
    pub fn set_page_metrics(&mut self, scroll_max: u16, viewport: u16) {
        self.scroll_max = scroll_max;
        self.viewport = viewport;
        self.scroll = self.scroll.min(scroll_max);
    }

    pub fn scroll_up(&mut self, lines: u16) {
        self.scroll = self.scroll.saturating_sub(lines);
    }

    pub fn scroll_down(&mut self, lines: u16) {
        self.scroll = self.scroll.saturating_add(lines).min(self.scroll_max);
    }

    pub fn page_up(&mut self) {
        self.scroll_up(self.viewport.saturating_sub(2).max(1));
    }

    pub fn page_down(&mut self) {
        self.scroll_down(self.viewport.saturating_sub(2).max(1));
    }

    pub fn scroll_to_top(&mut self) {
        self.scroll = 0;
    }

    pub fn scroll_to_bottom(&mut self) {
        self.scroll = self.scroll_max;
    }

    pub fn jump_to(&mut self, offset: u16) {
        self.scroll = offset.min(self.scroll_max);
    }

    /// Start the validation-failure shake on the form card.
    pub fn shake_form(&mut self) {
        self.form_fx = Some(UiEffect::shake(self.effect_duration(SHAKE_DURATION)));
    }

    /// Start the success-panel reveal.
    pub fn reveal_success(&mut self) {
        self.success_fx = Some(UiEffect::pop_scale(self.effect_duration(POP_DURATION)));
    }

    #[must_use]
    pub fn form_fx(&self) -> Option<&UiEffect> {
        self.form_fx.as_ref()
    }

    #[must_use]
    pub fn success_fx(&self) -> Option<&UiEffect> {
        self.success_fx.as_ref()
    }

    /// Advance animations, dropping the finished ones.
    pub fn advance(&mut self, delta: Duration) {
        for fx in [&mut self.form_fx, &mut self.success_fx] {
            if let Some(effect) = fx {
                effect.advance(delta);
                if effect.is_finished() {
                    *fx = None;
                }
            }
        }
    }

    fn effect_duration(&self, duration: Duration) -> Duration {
        if self.ui_options.reduced_motion {
            Duration::ZERO
        } else {
            duration
        }
    }
}
