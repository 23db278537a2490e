use crate::ui::notice::{Notice, NoticeLevel};
use crate::ui::theme::{GLOBAL_BORDER, HEADER_TEXT, STATUS_ERROR, STATUS_OK};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

const VERSION: &str = env!("CARGO_PKG_VERSION");
const HINTS: &str =
    " ↑/↓: Select │ Enter: Details │ m: More │ f: Filter │ r: Reset │ l: Retry │ q: Quit";

pub struct Footer;

impl Default for Footer {
    fn default() -> Self {
        Self::new()
    }
}

impl Footer {
    pub fn new() -> Self {
        Self
    }

    /// Key hints, replaced by the active notice while one is showing.
    pub fn widget(&self, area: Rect, notice: Option<&Notice>) -> Paragraph<'static> {
        let dim = Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM);
        let (left, left_style) = match notice {
            Some(notice) => {
                let color = match notice.level {
                    NoticeLevel::Info => STATUS_OK,
                    NoticeLevel::Error => STATUS_ERROR,
                };
                (
                    format!(" {}", notice.message),
                    Style::default().fg(color).add_modifier(Modifier::BOLD),
                )
            }
            None => (HINTS.to_string(), dim),
        };
        let version = format!("v{} ", VERSION);

        // Char count, not bytes: the hints carry arrows and box glyphs.
        let content_width = area.width.saturating_sub(2) as usize;
        let padding = content_width
            .saturating_sub(left.chars().count())
            .saturating_sub(version.chars().count());

        let line = Line::from(vec![
            Span::styled(left, left_style),
            Span::styled(" ".repeat(padding), dim),
            Span::styled(version, dim),
        ]);

        Paragraph::new(line).alignment(Alignment::Left).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}
