//! Section renderers for the portfolio page.
//!
//! Each section builds a vector of styled lines; `page` stacks them
//! into the single scrollable page and records where each one starts.

use ratatui::layout::Alignment;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

use folio_engine::Section;
use folio_types::{About, ContactMethod, Profile, Project, SkillGroup};

use crate::theme::{Glyphs, Palette, styles};

/// Shared header: heading, divider rule, and lead text, centered.
fn section_header(
    section: Section,
    lead: &str,
    palette: &Palette,
    glyphs: &Glyphs,
) -> Vec<Line<'static>> {
    vec![
        Line::from(""),
        Line::from(Span::styled(
            section.heading().to_string(),
            styles::heading(palette),
        ))
        .alignment(Alignment::Center),
        Line::from(Span::styled(
            glyphs.divider.repeat(16),
            Style::default().fg(palette.primary),
        ))
        .alignment(Alignment::Center),
        Line::from(Span::styled(
            lead.to_string(),
            Style::default().fg(palette.text_secondary),
        ))
        .alignment(Alignment::Center),
        Line::from(""),
    ]
}

pub fn hero(profile: &Profile, palette: &Palette, glyphs: &Glyphs) -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::from(""),
        Line::from(""),
        Line::from(vec![
            Span::styled(
                format!("{} ", profile.given_name),
                Style::default()
                    .fg(palette.text_primary)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                profile.family_name.clone(),
                Style::default()
                    .fg(palette.primary)
                    .add_modifier(Modifier::BOLD),
            ),
        ])
        .alignment(Alignment::Center),
        Line::from(Span::styled(
            glyphs.divider.repeat(24),
            Style::default().fg(palette.primary_dim),
        ))
        .alignment(Alignment::Center),
        Line::from(Span::styled(
            profile.title.clone(),
            Style::default().fg(palette.text_secondary),
        ))
        .alignment(Alignment::Center),
        Line::from(""),
        Line::from(Span::styled(
            profile.tagline.clone(),
            Style::default().fg(palette.text_muted),
        ))
        .alignment(Alignment::Center),
        Line::from(""),
    ];

    if !profile.socials.is_empty() {
        let mut spans = Vec::new();
        for (index, social) in profile.socials.iter().enumerate() {
            if index > 0 {
                spans.push(Span::styled(
                    format!("  {}  ", glyphs.dot),
                    Style::default().fg(palette.text_muted),
                ));
            }
            spans.push(Span::styled(
                format!("{} {}", social.label, glyphs.link),
                Style::default().fg(palette.accent),
            ));
        }
        lines.push(Line::from(spans).alignment(Alignment::Center));
        lines.push(Line::from(""));
    }

    lines.push(
        Line::from(vec![
            Span::styled("2-5", styles::key_highlight(palette)),
            Span::styled(" explore  ", styles::key_hint(palette)),
            Span::styled("i", styles::key_highlight(palette)),
            Span::styled(" get in touch", styles::key_hint(palette)),
        ])
        .alignment(Alignment::Center),
    );
    lines.push(
        Line::from(Span::styled(
            glyphs.arrow_down.to_string(),
            Style::default().fg(palette.text_muted),
        ))
        .alignment(Alignment::Center),
    );
    lines.push(Line::from(""));
    lines
}

pub fn about(content: &About, palette: &Palette, glyphs: &Glyphs) -> Vec<Line<'static>> {
    let mut lines = section_header(Section::About, &content.lead, palette, glyphs);

    for paragraph in &content.paragraphs {
        lines.push(Line::from(Span::styled(
            paragraph.clone(),
            Style::default().fg(palette.text_secondary),
        )));
        lines.push(Line::from(""));
    }

    lines.push(Line::from(Span::styled(
        content.strengths_title.clone(),
        styles::heading(palette),
    )));
    for strength in &content.strengths {
        lines.push(Line::from(vec![
            Span::styled(
                format!("  {} ", glyphs.bullet),
                Style::default().fg(palette.primary),
            ),
            Span::styled(strength.clone(), Style::default().fg(palette.text_muted)),
        ]));
    }
    lines.push(Line::from(""));

    lines.push(Line::from(Span::styled(
        "My Mission".to_string(),
        styles::heading(palette),
    )));
    lines.push(Line::from(Span::styled(
        format!("\"{}\"", content.mission),
        Style::default()
            .fg(palette.accent)
            .add_modifier(Modifier::ITALIC),
    )));
    lines.push(Line::from(""));
    lines
}

pub fn skills(groups: &[SkillGroup], palette: &Palette, glyphs: &Glyphs) -> Vec<Line<'static>> {
    let mut lines = section_header(
        Section::Skills,
        "A comprehensive skill set built through years of experience and continuous learning",
        palette,
        glyphs,
    );

    for group in groups {
        lines.push(Line::from(vec![
            Span::styled(
                format!("{} ", glyphs.selected),
                Style::default().fg(palette.primary),
            ),
            Span::styled(group.title.clone(), styles::heading(palette)),
            Span::styled(
                format!("  {}", group.description),
                Style::default().fg(palette.text_muted),
            ),
        ]));

        let mut item_spans = vec![Span::raw("   ")];
        for (index, item) in group.items.iter().enumerate() {
            if index > 0 {
                item_spans.push(Span::styled(
                    format!("  {}  ", glyphs.dot),
                    Style::default().fg(palette.bg_border),
                ));
            }
            item_spans.push(Span::styled(
                item.clone(),
                Style::default().fg(palette.text_secondary),
            ));
        }
        lines.push(Line::from(item_spans));
        lines.push(Line::from(""));
    }
    lines
}

pub fn projects(entries: &[Project], palette: &Palette, glyphs: &Glyphs) -> Vec<Line<'static>> {
    let mut lines = section_header(
        Section::Projects,
        "A showcase of my recent work and creative solutions",
        palette,
        glyphs,
    );

    for project in entries {
        lines.push(Line::from(vec![
            Span::styled(project.title.clone(), styles::heading(palette)),
            Span::raw("  "),
            Span::styled(format!(" {} ", project.category), styles::badge(palette)),
        ]));
        lines.push(Line::from(Span::styled(
            project.description.clone(),
            Style::default().fg(palette.text_muted),
        )));

        if !project.tags.is_empty() {
            let mut tag_spans = Vec::new();
            for tag in &project.tags {
                tag_spans.push(Span::styled(format!(" {tag} "), styles::tag(palette)));
                tag_spans.push(Span::raw(" "));
            }
            lines.push(Line::from(tag_spans));
        }

        let mut link_spans = Vec::new();
        if let Some(demo) = &project.demo {
            link_spans.push(Span::styled(
                format!("{} {demo}", glyphs.link),
                Style::default().fg(palette.accent),
            ));
        }
        if let Some(repo) = &project.repo {
            if !link_spans.is_empty() {
                link_spans.push(Span::raw("   "));
            }
            link_spans.push(Span::styled(
                format!("{} {repo}", glyphs.link),
                Style::default().fg(palette.blue),
            ));
        }
        if !link_spans.is_empty() {
            lines.push(Line::from(link_spans));
        }
        lines.push(Line::from(""));
    }
    lines
}

pub fn contact(
    lead: &str,
    methods: &[ContactMethod],
    palette: &Palette,
    glyphs: &Glyphs,
) -> Vec<Line<'static>> {
    let mut lines = section_header(Section::Contact, lead, palette, glyphs);

    for method in methods {
        let mut spans = vec![
            Span::styled(
                format!("{} ", glyphs.selected),
                Style::default().fg(palette.primary),
            ),
            Span::styled(method.title.clone(), styles::heading(palette)),
            Span::styled(
                format!("  {}", method.detail),
                Style::default().fg(palette.text_muted),
            ),
        ];
        if let Some(href) = &method.href {
            spans.push(Span::styled(
                format!("  {} {href}", glyphs.link),
                Style::default().fg(palette.accent),
            ));
        } else {
            spans.push(Span::styled(
                format!("  [{}]", method.action),
                Style::default().fg(palette.text_disabled),
            ));
        }
        lines.push(Line::from(spans));
    }
    lines.push(Line::from(""));

    lines.push(
        Line::from(vec![
            Span::styled("Ready to get started? Press ", styles::key_hint(palette)),
            Span::styled("i", styles::key_highlight(palette)),
            Span::styled(
                " to send me a message right from this terminal.",
                styles::key_hint(palette),
            ),
        ])
        .alignment(Alignment::Center),
    );
    lines.push(Line::from(""));
    lines
}
