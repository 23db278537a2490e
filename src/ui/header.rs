use crate::characters::{ListState, LoadStatus};
use crate::ui::theme::{
    ACCENT, GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT, MUTED_TEXT, STATUS_ERROR, STATUS_OK,
    STATUS_WARN,
};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

pub struct Header;

impl Default for Header {
    fn default() -> Self {
        Self::new()
    }
}

impl Header {
    pub fn new() -> Self {
        Self
    }

    pub fn widget(&self, list: &ListState) -> Paragraph<'static> {
        let text_style = Style::default().fg(HEADER_TEXT);
        let separator_style = Style::default().fg(HEADER_SEPARATOR);
        let (status_text, status_color) = status_label(list.status());
        let filters = match list.filters() {
            Some(filters) if list.is_filtered() && !filters.is_empty() => filters.summary(),
            _ => "All characters".to_string(),
        };

        let line = Line::from(vec![
            Span::styled("  ", text_style),
            Span::styled(
                "Characters",
                Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
            ),
            Span::styled("  │  ", separator_style),
            Span::styled(format!("{} loaded", list.items().len()), text_style),
            Span::styled("  │  ", separator_style),
            Span::styled(filters, Style::default().fg(MUTED_TEXT)),
            Span::styled("  │  ", separator_style),
            Span::styled(status_text, Style::default().fg(status_color)),
        ]);

        Paragraph::new(line).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}

fn status_label(status: LoadStatus) -> (&'static str, ratatui::style::Color) {
    match status {
        LoadStatus::Idle | LoadStatus::Loading => ("Loading", STATUS_WARN),
        LoadStatus::Succeeded => ("Ready", STATUS_OK),
        LoadStatus::NotFound => ("No matches", STATUS_WARN),
        LoadStatus::Failed => ("Error", STATUS_ERROR),
    }
}
