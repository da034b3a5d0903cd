//! The scrollable single page.
//!
//! Stacks the five section line blocks, measures where each starts at
//! the current width (wrapping included), renders the visible slice,
//! and reports the layout back to the engine so scrolling and section
//! jumps use real offsets.

use ratatui::Frame;
use ratatui::layout::{Margin, Rect};
use ratatui::style::Style;
use ratatui::text::Line;
use ratatui::widgets::{Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState, Wrap};

use folio_engine::{App, Section};

use crate::sections;
use crate::theme::{Glyphs, Palette};

fn section_lines(
    app: &App,
    section: Section,
    palette: &Palette,
    glyphs: &Glyphs,
) -> Vec<Line<'static>> {
    let site = app.site();
    match section {
        Section::Hero => sections::hero(&site.profile, palette, glyphs),
        Section::About => sections::about(&site.about, palette, glyphs),
        Section::Skills => sections::skills(&site.skills, palette, glyphs),
        Section::Projects => sections::projects(&site.projects, palette, glyphs),
        Section::Contact => {
            sections::contact(&site.contact_lead, &site.contact_methods, palette, glyphs)
        }
    }
}

/// Rendered height of a line block at `width`, wrapping included.
fn rendered_height(lines: &[Line<'static>], width: u16) -> u16 {
    Paragraph::new(lines.to_vec())
        .wrap(Wrap { trim: false })
        .line_count(width) as u16
}

pub fn draw_page(frame: &mut Frame, app: &mut App, area: Rect, palette: &Palette, glyphs: &Glyphs) {
    // Horizontal padding keeps prose off the terminal edges.
    let inner = area.inner(Margin {
        horizontal: 2,
        vertical: 0,
    });

    let mut anchors = Vec::with_capacity(Section::ALL.len());
    let mut all_lines = Vec::new();
    let mut total: u16 = 0;
    for section in Section::ALL {
        let lines = section_lines(app, section, palette, glyphs);
        anchors.push((section, total));
        total = total.saturating_add(rendered_height(&lines, inner.width));
        all_lines.extend(lines);
    }

    let scroll_max = total.saturating_sub(inner.height);
    app.layout_sync(anchors, scroll_max, inner.height);
    let scroll = app.view().scroll();

    let page = Paragraph::new(all_lines)
        .wrap(Wrap { trim: false })
        .scroll((scroll, 0));
    frame.render_widget(page, inner);

    if scroll_max > 0 {
        let mut state = ScrollbarState::new(scroll_max as usize).position(scroll as usize);
        let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight)
            .track_symbol(Some(glyphs.track))
            .thumb_symbol(glyphs.thumb)
            .track_style(Style::default().fg(palette.bg_border))
            .thumb_style(Style::default().fg(palette.primary_dim));
        frame.render_stateful_widget(scrollbar, area, &mut state);
    }
}
