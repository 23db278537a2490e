//! Rendering for the filter form overlay.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::ui::layout::centered_rect_by_size;
use crate::ui::theme::{ACCENT, ACTIVE_HIGHLIGHT, HEADER_TEXT, MUTED_TEXT, POPUP_BORDER};

use super::state::{FilterField, FilterFormState};

const DIALOG_WIDTH: u16 = 50;

/// Render the filter form on top of `area`.
pub fn render_filter_form(frame: &mut Frame, state: &FilterFormState, area: Rect) {
    let FilterFormState::Visible { values, focused } = state else {
        return;
    };

    let mut lines = vec![Line::from("")];
    for field in FilterField::ALL {
        let is_focused = field == *focused;
        let value = field.value(values);
        let shown = match field.choices() {
            Some(_) => format!("< {} >", display_choice(value)),
            None if is_focused => format!("{value}_"),
            None => value.to_string(),
        };

        let mut line = Line::from(vec![
            Span::styled(
                format!("  {:<9}", field.label()),
                Style::default().fg(MUTED_TEXT),
            ),
            Span::styled(shown, Style::default().fg(HEADER_TEXT)),
        ]);
        if is_focused {
            line = line.style(
                Style::default()
                    .bg(ACTIVE_HIGHLIGHT)
                    .add_modifier(Modifier::BOLD),
            );
        }
        lines.push(line);
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "  Tab: Next  ←/→: Change  Enter: Submit  Esc: Cancel",
        Style::default().fg(MUTED_TEXT),
    )));

    let height = (lines.len() as u16).saturating_add(2);
    let dialog = centered_rect_by_size(area, DIALOG_WIDTH, height);

    frame.render_widget(Clear, dialog);
    let block = Block::default()
        .title(Span::styled(" Filter ", Style::default().fg(ACCENT)))
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(POPUP_BORDER));
    frame.render_widget(Paragraph::new(lines).block(block), dialog);
}

/// Empty choice means "no constraint".
fn display_choice(value: &str) -> &str {
    if value.is_empty() {
        "All"
    } else {
        value
    }
}
