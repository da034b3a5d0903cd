//! Toast overlay rendering.
//!
//! Toasts stack from the top-right corner, oldest on top, each sliding
//! up into place as its entrance animation plays.

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Clear, Paragraph};

use folio_engine::{App, Severity};
use folio_types::truncate_with_ellipsis;

use crate::theme::{Glyphs, Palette, styles};

const TOAST_WIDTH: u16 = 42;
const TOAST_HEIGHT: u16 = 4;

pub fn draw_toasts(frame: &mut Frame, app: &App, palette: &Palette, glyphs: &Glyphs) {
    let viewport = frame.area();
    if app.toasts().is_empty() || viewport.width < TOAST_WIDTH + 2 {
        return;
    }

    let x = viewport.x + viewport.width - TOAST_WIDTH - 1;
    let mut y = viewport.y + 1;
    for (toast, progress) in app.toasts().iter() {
        if y + TOAST_HEIGHT > viewport.y + viewport.height {
            break;
        }
        let base = Rect {
            x,
            y,
            width: TOAST_WIDTH,
            height: TOAST_HEIGHT,
        };
        // Slide up into place: start a couple of rows low and ease in.
        let offset = ((1.0 - ease(progress)) * 2.0).round() as u16;
        let area = Rect {
            y: base.y.saturating_add(offset),
            ..base
        };

        let (icon, accent) = match toast.severity {
            Severity::Info => (glyphs.bullet, palette.blue),
            Severity::Success => (glyphs.check, palette.success),
            Severity::Error => (glyphs.cross, palette.error),
        };

        frame.render_widget(Clear, area);
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(accent))
            .style(Style::default().bg(palette.bg_popup));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let width = usize::from(inner.width.saturating_sub(3));
        let lines = vec![
            Line::from(vec![
                Span::styled(format!("{icon} "), Style::default().fg(accent)),
                Span::styled(
                    truncate_with_ellipsis(&toast.title, width),
                    styles::heading(palette),
                ),
            ]),
            Line::from(Span::styled(
                truncate_with_ellipsis(&toast.body, width + 2),
                Style::default().fg(palette.text_muted),
            )),
        ];
        frame.render_widget(
            Paragraph::new(lines).alignment(Alignment::Left),
            inner,
        );

        y += TOAST_HEIGHT + 1;
    }
}

fn ease(t: f32) -> f32 {
    let inv = 1.0 - t.clamp(0.0, 1.0);
    1.0 - inv * inv * inv
}
