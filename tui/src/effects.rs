//! Rectangle transforms for animation effects.
//!
//! Effects are plain timers owned by the engine; this module maps
//! their progress onto the rectangle a surface is about to render in.

use ratatui::layout::Rect;

use folio_types::ui::{EffectKind, UiEffect};

/// Transform `base` according to the effect's current progress,
/// clamped to `viewport`.
#[must_use]
pub fn apply_effect(effect: &UiEffect, base: Rect, viewport: Rect) -> Rect {
    match effect.kind() {
        EffectKind::PopScale => {
            let t = ease_out_cubic(effect.progress());
            scale_rect(base, 0.6 + 0.4 * t)
        }
        EffectKind::SlideUp => {
            let t = ease_out_cubic(effect.progress());
            let viewport_bottom = viewport.y.saturating_add(viewport.height);
            let base_bottom = base.y.saturating_add(base.height);
            let headroom = viewport_bottom.saturating_sub(base_bottom);
            let travel = headroom.min(base.height / 2).min(4);
            let offset = ((1.0 - t) * f32::from(travel)).round() as u16;
            Rect {
                y: base.y.saturating_add(offset),
                ..base
            }
        }
        EffectKind::Shake => {
            let t = effect.progress().clamp(0.0, 1.0);
            let decay = 1.0 - t;
            let offset =
                (f32::sin(t * core::f32::consts::TAU * 4.0) * 3.0 * decay).round() as i32;
            let left = i32::from(viewport.x);
            let right = left + i32::from(viewport.width);
            let max_x = (right - i32::from(base.width)).max(left);
            let x = (i32::from(base.x) + offset).clamp(left, max_x) as u16;
            Rect { x, ..base }
        }
    }
}

fn scale_rect(base: Rect, scale: f32) -> Rect {
    let width = ((f32::from(base.width) * scale).round() as u16)
        .max(1)
        .min(base.width);
    let height = ((f32::from(base.height) * scale).round() as u16)
        .max(1)
        .min(base.height);
    Rect {
        x: base.x + (base.width.saturating_sub(width) / 2),
        y: base.y + (base.height.saturating_sub(height) / 2),
        width,
        height,
    }
}

fn ease_out_cubic(t: f32) -> f32 {
    let inv = 1.0 - t.clamp(0.0, 1.0);
    1.0 - inv * inv * inv
}
