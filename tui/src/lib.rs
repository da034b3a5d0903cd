//! TUI rendering for Folio using ratatui.

mod effects;
mod form;
mod input;
mod page;
mod sections;
mod theme;
mod toast;

pub use effects::apply_effect;
pub use input::{InputPump, handle_events};
pub use theme::{Glyphs, Palette, glyphs, palette, spinner_frame, styles};

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use folio_engine::{App, InputMode, Section};

/// Main draw function.
pub fn draw(frame: &mut Frame, app: &mut App) {
    let options = app.ui_options();
    let palette = palette(options);
    let glyphs = glyphs(options);

    // Clear with background color.
    let bg_block = Block::default().style(Style::default().bg(palette.bg_dark));
    frame.render_widget(bg_block, frame.area());

    let chunks = Layout::vertical([
        Constraint::Length(2), // Navigation bar
        Constraint::Min(1),    // Page
        Constraint::Length(1), // Status bar
    ])
    .split(frame.area());

    draw_nav_bar(frame, app, chunks[0], &palette);
    page::draw_page(frame, app, chunks[1], &palette, &glyphs);
    draw_status_bar(frame, app, chunks[2], &palette, &glyphs);

    // The contact form overlays the page while editing.
    if app.input_mode() == InputMode::Edit {
        form::draw_contact_form(frame, app, &palette, &glyphs);
    }

    toast::draw_toasts(frame, app, &palette, &glyphs);
}

fn draw_nav_bar(frame: &mut Frame, app: &App, area: Rect, palette: &Palette) {
    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(Style::default().fg(palette.bg_border));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let profile = &app.site().profile;
    let active = app.active_section();

    let mut spans = vec![
        Span::styled(
            format!(" {} ", profile.family_name),
            Style::default()
                .fg(palette.text_primary)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            profile.given_name.clone(),
            Style::default()
                .fg(palette.primary)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("   "),
    ];
    for (index, section) in Section::ALL.iter().enumerate() {
        let style = if *section == active {
            styles::nav_active(palette)
        } else {
            styles::nav_inactive(palette)
        };
        spans.push(Span::styled(
            format!("{} ", index + 1),
            Style::default().fg(palette.text_disabled),
        ));
        spans.push(Span::styled(section.label().to_string(), style));
        spans.push(Span::raw("  "));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), inner);
}

fn draw_status_bar(frame: &mut Frame, app: &App, area: Rect, palette: &Palette, glyphs: &Glyphs) {
    let (mode_text, mode_style) = match app.input_mode() {
        InputMode::Browse => (" BROWSE ", styles::mode_browse(palette)),
        InputMode::Edit => (" EDIT ", styles::mode_edit(palette)),
    };

    let mut spans = vec![Span::styled(mode_text, mode_style), Span::raw(" ")];

    if app.form().status().is_submitting() {
        let spinner = spinner_frame(app.tick_count() / 4, app.ui_options());
        spans.push(Span::styled(
            format!("{spinner} Sending message..."),
            Style::default().fg(palette.primary),
        ));
    } else {
        let hints: &[(&str, &str)] = match app.input_mode() {
            InputMode::Browse => &[
                ("j/k", " scroll  "),
                ("1-5", " sections  "),
                ("i", " contact  "),
                ("q", " quit "),
            ],
            InputMode::Edit => &[
                ("Tab", " fields  "),
                ("Enter", " send  "),
                ("Esc", " browse "),
            ],
        };
        for (key, label) in hints {
            spans.push(Span::styled(*key, styles::key_highlight(palette)));
            spans.push(Span::styled(*label, styles::key_hint(palette)));
        }
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);

    let position = format!(
        "{} {}  {}%",
        glyphs.track,
        app.active_section().label(),
        app.view().scroll_percent()
    );
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            position,
            Style::default().fg(palette.text_muted),
        )))
        .alignment(Alignment::Right),
        area,
    );
}
