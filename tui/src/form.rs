//! The contact form card and success panel.
//!
//! Rendered as an overlay while the app is in Edit mode. Fields are
//! bound to the form store; inline error text sits under each invalid
//! field, the message field carries a character counter, and the
//! submit row reflects the submission status. Once a message is
//! delivered the card is replaced by the success panel.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Clear, Padding, Paragraph, Wrap};
use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

use folio_engine::{App, ContactField, InputMode};

use crate::effects::apply_effect;
use crate::theme::{Glyphs, Palette, spinner_frame, styles};

const FORM_WIDTH: u16 = 64;
const FORM_HEIGHT: u16 = 22;
const PANEL_WIDTH: u16 = 48;
const PANEL_HEIGHT: u16 = 9;

/// Rows of text visible inside the message box.
const MESSAGE_ROWS: u16 = 4;

fn centered(viewport: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(viewport.width.saturating_sub(2)).max(1);
    let height = height.min(viewport.height.saturating_sub(2)).max(1);
    Rect {
        x: viewport.x + (viewport.width.saturating_sub(width)) / 2,
        y: viewport.y + (viewport.height.saturating_sub(height)) / 2,
        width,
        height,
    }
}

pub fn draw_contact_form(frame: &mut Frame, app: &App, palette: &Palette, glyphs: &Glyphs) {
    let viewport = frame.area();
    if app.form().status().is_submitted() {
        draw_success_panel(frame, app, palette, glyphs);
        return;
    }

    let base = centered(viewport, FORM_WIDTH, FORM_HEIGHT);
    let area = app
        .view()
        .form_fx()
        .map_or(base, |fx| apply_effect(fx, base, viewport));

    frame.render_widget(Clear, area);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(palette.primary_dim))
        .style(Style::default().bg(palette.bg_popup))
        .title_top(Line::from(Span::styled(
            " Send Me a Message ",
            styles::heading(palette),
        )))
        .title_bottom(
            Line::from(vec![
                Span::styled(" Tab", styles::key_highlight(palette)),
                Span::styled(" fields ", styles::key_hint(palette)),
                Span::styled("Enter", styles::key_highlight(palette)),
                Span::styled(" send ", styles::key_hint(palette)),
                Span::styled("Esc", styles::key_highlight(palette)),
                Span::styled(" browse ", styles::key_hint(palette)),
            ])
            .alignment(Alignment::Right),
        )
        .padding(Padding::horizontal(1));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::vertical([
        Constraint::Length(4), // name
        Constraint::Length(4), // email
        Constraint::Length(4), // subject
        Constraint::Min(MESSAGE_ROWS + 3), // message box + error line
        Constraint::Length(1), // submit row
    ])
    .split(inner);

    draw_text_field(frame, app, rows[0], ContactField::Name, palette, glyphs);
    draw_text_field(frame, app, rows[1], ContactField::Email, palette, glyphs);
    draw_text_field(frame, app, rows[2], ContactField::Subject, palette, glyphs);
    draw_message_field(frame, app, rows[3], palette, glyphs);
    draw_submit_row(frame, app, rows[4], palette);
}

fn field_border_style(app: &App, field: ContactField, palette: &Palette) -> Style {
    if app.form().errors().get(field).is_some() {
        Style::default().fg(palette.error)
    } else if app.form().focus() == field {
        Style::default().fg(palette.primary)
    } else {
        Style::default().fg(palette.bg_border)
    }
}

fn draw_text_field(
    frame: &mut Frame,
    app: &App,
    area: Rect,
    field: ContactField,
    palette: &Palette,
    glyphs: &Glyphs,
) {
    let [box_area, error_area] =
        Layout::vertical([Constraint::Length(3), Constraint::Length(1)]).areas(area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(field_border_style(app, field, palette))
        .title(Span::styled(
            format!(" {} * ", field.label()),
            styles::field_label(palette),
        ));
    let inner = block.inner(box_area);
    frame.render_widget(block, box_area);

    let input = app.form().field(field);
    let focused = app.form().focus() == field && app.input_mode() == InputMode::Edit;

    if input.is_empty() && !focused {
        frame.render_widget(
            Paragraph::new(Span::styled(
                field.placeholder().to_string(),
                Style::default().fg(palette.text_disabled),
            )),
            inner,
        );
    } else {
        let (visible, cursor_col) =
            window_single_line(input.text(), input.byte_index(), inner.width as usize);
        frame.render_widget(
            Paragraph::new(Span::styled(
                visible,
                Style::default().fg(palette.text_primary),
            )),
            inner,
        );
        if focused && app.form().status().is_idle() {
            frame.set_cursor_position((inner.x.saturating_add(cursor_col), inner.y));
        }
    }

    draw_error_line(frame, app, error_area, field, palette, glyphs);
}

fn draw_message_field(
    frame: &mut Frame,
    app: &App,
    area: Rect,
    palette: &Palette,
    glyphs: &Glyphs,
) {
    let field = ContactField::Message;
    let [box_area, error_area] = Layout::vertical([
        Constraint::Length(area.height.saturating_sub(1)),
        Constraint::Length(1),
    ])
    .areas(area);

    let input = app.form().field(field);
    let count = input.text().chars().count();
    let counter_style = if count > field.max_len() {
        Style::default().fg(palette.warning)
    } else {
        Style::default().fg(palette.text_muted)
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(field_border_style(app, field, palette))
        .title(Span::styled(
            format!(" {} * ", field.label()),
            styles::field_label(palette),
        ))
        .title_bottom(
            Line::from(Span::styled(
                format!(" {count}/{} ", field.max_len()),
                counter_style,
            ))
            .alignment(Alignment::Right),
        );
    let inner = block.inner(box_area);
    frame.render_widget(block, box_area);

    let focused = app.form().focus() == field && app.input_mode() == InputMode::Edit;
    if input.is_empty() && !focused {
        frame.render_widget(
            Paragraph::new(Span::styled(
                field.placeholder().to_string(),
                Style::default().fg(palette.text_disabled),
            ))
            .wrap(Wrap { trim: false }),
            inner,
        );
    } else {
        let text = input.text();
        let cursor_byte = input.byte_index();
        let before = &text[..cursor_byte];
        let cursor_line = before.matches('\n').count();
        let line_start = before.rfind('\n').map_or(0, |i| i + 1);
        let col_byte = cursor_byte - line_start;

        let visible_rows = inner.height.max(1) as usize;
        let start_line = cursor_line.saturating_sub(visible_rows.saturating_sub(1));

        let mut lines = Vec::new();
        let mut cursor_pos = None;
        for (index, raw) in text.split('\n').enumerate().skip(start_line) {
            if lines.len() >= visible_rows {
                break;
            }
            if index == cursor_line {
                let (visible, cursor_col) =
                    window_single_line(raw, col_byte, inner.width as usize);
                cursor_pos = Some((
                    inner.x.saturating_add(cursor_col),
                    inner.y.saturating_add(lines.len() as u16),
                ));
                lines.push(Line::from(Span::styled(
                    visible,
                    Style::default().fg(palette.text_primary),
                )));
            } else {
                lines.push(Line::from(Span::styled(
                    raw.to_string(),
                    Style::default().fg(palette.text_primary),
                )));
            }
        }
        frame.render_widget(Paragraph::new(lines), inner);

        if focused
            && app.form().status().is_idle()
            && let Some(pos) = cursor_pos
        {
            frame.set_cursor_position(pos);
        }
    }

    draw_error_line(frame, app, error_area, field, palette, glyphs);
}

fn draw_error_line(
    frame: &mut Frame,
    app: &App,
    area: Rect,
    field: ContactField,
    palette: &Palette,
    glyphs: &Glyphs,
) {
    if let Some(message) = app.form().errors().get(field) {
        frame.render_widget(
            Paragraph::new(Span::styled(
                format!(" {} {message}", glyphs.cross),
                styles::field_error(palette),
            )),
            area,
        );
    }
}

fn draw_submit_row(frame: &mut Frame, app: &App, area: Rect, palette: &Palette) {
    let line = if app.form().status().is_submitting() {
        let spinner = spinner_frame(app.tick_count() / 4, app.ui_options());
        Line::from(Span::styled(
            format!(" {spinner} Sending... "),
            styles::button_disabled(palette),
        ))
    } else {
        Line::from(vec![
            Span::styled(" Send Message ", styles::button(palette)),
            Span::styled("  Enter", styles::key_hint(palette)),
        ])
    };
    frame.render_widget(
        Paragraph::new(line.alignment(Alignment::Center)),
        area,
    );
}

fn draw_success_panel(frame: &mut Frame, app: &App, palette: &Palette, glyphs: &Glyphs) {
    let viewport = frame.area();
    let base = centered(viewport, PANEL_WIDTH, PANEL_HEIGHT);
    let area = app
        .view()
        .success_fx()
        .map_or(base, |fx| apply_effect(fx, base, viewport));

    frame.render_widget(Clear, area);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(palette.success))
        .style(Style::default().bg(palette.bg_popup));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let lines = vec![
        Line::from(Span::styled(
            glyphs.check.to_string(),
            Style::default()
                .fg(palette.success)
                .add_modifier(Modifier::BOLD),
        ))
        .alignment(Alignment::Center),
        Line::from(Span::styled(
            "Message Sent Successfully!",
            styles::heading(palette),
        ))
        .alignment(Alignment::Center),
        Line::from(""),
        Line::from(Span::styled(
            "Thank you for reaching out. I'll review your message and get back to you within 24 hours.",
            Style::default().fg(palette.text_muted),
        ))
        .alignment(Alignment::Center),
        Line::from(""),
        Line::from(vec![
            Span::styled(" Send Another Message ", styles::button(palette)),
            Span::styled("  Enter", styles::key_hint(palette)),
        ])
        .alignment(Alignment::Center),
    ];
    frame.render_widget(
        Paragraph::new(lines).wrap(Wrap { trim: false }),
        inner,
    );
}

/// Window a single line of text so the cursor stays visible, returning
/// the visible slice and the cursor's column within it.
fn window_single_line(text: &str, cursor_byte: usize, width: usize) -> (String, u16) {
    let before = &text[..cursor_byte];
    let cursor_w = before.width();
    if width == 0 {
        return (String::new(), 0);
    }
    if cursor_w < width {
        return (text.to_string(), cursor_w as u16);
    }

    let target = cursor_w - width + 1;
    let mut skipped = 0usize;
    let mut start = text.len();
    for (index, grapheme) in text.grapheme_indices(true) {
        if skipped >= target {
            start = index;
            break;
        }
        skipped += grapheme.width();
    }
    (text[start..].to_string(), (cursor_w - skipped) as u16)
}
