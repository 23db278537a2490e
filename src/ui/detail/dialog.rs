//! Rendering for the character detail panel.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::api::{Character, CharacterStatus};
use crate::ui::layout::centered_rect_by_size;
use crate::ui::theme::{
    ACCENT, HEADER_TEXT, MUTED_TEXT, POPUP_BORDER, STATUS_ERROR, STATUS_OK,
};

use super::state::DetailState;

const PANEL_WIDTH: u16 = 64;

/// Render the detail panel on top of `area`.
pub fn render_detail(frame: &mut Frame, state: &DetailState, area: Rect) {
    let (title, lines) = match state {
        DetailState::Hidden => return,
        DetailState::Loading { id } => (
            format!(" Character #{id} "),
            vec![Line::from(""), Line::from("  Loading...")],
        ),
        DetailState::Failed { id, message } => (
            format!(" Character #{id} "),
            vec![
                Line::from(""),
                Line::from(vec![
                    Span::styled("  Error: ", Style::default().fg(STATUS_ERROR)),
                    Span::styled(message.clone(), Style::default().fg(HEADER_TEXT)),
                ]),
            ],
        ),
        DetailState::Loaded { character } => {
            (format!(" {} ", character.name), character_lines(character))
        }
    };

    let mut lines = lines;
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "  Esc: Close",
        Style::default().fg(MUTED_TEXT),
    )));

    let height = (lines.len() as u16).saturating_add(2);
    let panel = centered_rect_by_size(area, PANEL_WIDTH, height);

    frame.render_widget(Clear, panel);
    let block = Block::default()
        .title(Span::styled(title, Style::default().fg(ACCENT)))
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(POPUP_BORDER));
    let widget = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false });
    frame.render_widget(widget, panel);
}

fn character_lines(character: &Character) -> Vec<Line<'static>> {
    let label = Style::default().fg(MUTED_TEXT);
    let value = Style::default().fg(HEADER_TEXT);
    let kind = if character.kind.is_empty() {
        "-".to_string()
    } else {
        character.kind.clone()
    };

    vec![
        Line::from(""),
        Line::from(vec![
            Span::raw("  "),
            Span::styled(
                format!(" {} ", character.status),
                status_style(character.status).add_modifier(Modifier::BOLD),
            ),
            Span::raw("  "),
            Span::styled(
                format!("{} - {}", character.species, character.gender).to_uppercase(),
                label,
            ),
        ]),
        Line::from(""),
        field_line("Type", kind, label, value),
        field_line("Origin", character.origin.name.clone(), label, value),
        field_line("Last location", character.location.name.clone(), label, value),
        field_line(
            "Episodes",
            character.episode.len().to_string(),
            label,
            value,
        ),
        field_line("Image", character.image.clone(), label, value),
    ]
}

fn field_line(name: &'static str, text: String, label: Style, value: Style) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("  {:<14}", format!("{name}:")), label),
        Span::styled(text, value),
    ])
}

/// Badge colour: green for alive, red for dead, plain otherwise.
pub(crate) fn status_style(status: CharacterStatus) -> Style {
    match status {
        CharacterStatus::Alive => Style::default().fg(STATUS_OK),
        CharacterStatus::Dead => Style::default().fg(STATUS_ERROR),
        CharacterStatus::Unknown => Style::default().fg(HEADER_TEXT),
    }
}
