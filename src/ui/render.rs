use crate::api::Character;
use crate::characters::{ListState, LoadStatus};
use crate::ui::app::{App, PopupKind};
use crate::ui::detail::{render_detail, status_style};
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::filter_form::render_filter_form;
use crate::ui::layout::layout_regions;
use crate::ui::theme::{ACTIVE_HIGHLIGHT, HEADER_TEXT, MUTED_TEXT, STATUS_ERROR};
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Clear, List, ListItem, ListState as ListViewState, Paragraph};
use ratatui::Frame;

const NAME_WIDTH: usize = 32;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);

    frame.render_widget(Header::new().widget(app.list()), header);
    frame.render_widget(Clear, body);
    draw_body(frame, app, body);
    frame.render_widget(Footer::new().widget(footer, app.notice()), footer);

    match app.popup_kind() {
        Some(PopupKind::Filter) => render_filter_form(frame, app.filter_form(), body),
        Some(PopupKind::Detail) => render_detail(frame, app.detail(), body),
        None => {}
    }
}

fn draw_body(frame: &mut Frame<'_>, app: &App, body: Rect) {
    if body.height == 0 {
        return;
    }
    let list = app.list();

    if list.status() == LoadStatus::Failed {
        let lines = vec![
            Line::from(""),
            Line::from(vec![
                Span::styled("  Error: ", Style::default().fg(STATUS_ERROR)),
                Span::styled(list.error().to_string(), Style::default().fg(HEADER_TEXT)),
            ]),
            Line::from(""),
            Line::from(Span::styled(
                "  Press l to retry.",
                Style::default().fg(MUTED_TEXT),
            )),
        ];
        frame.render_widget(Paragraph::new(lines), body);
        return;
    }

    let items_area = Rect {
        height: body.height.saturating_sub(1),
        ..body
    };
    let status_area = Rect {
        y: body.y + items_area.height,
        height: body.height - items_area.height,
        ..body
    };

    let items: Vec<ListItem> = list.items().iter().map(character_item).collect();
    let widget = List::new(items)
        .highlight_style(
            Style::default()
                .bg(ACTIVE_HIGHLIGHT)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("> ");
    let mut view_state = ListViewState::default();
    if !list.items().is_empty() {
        view_state.select(Some(app.selection()));
    }
    frame.render_stateful_widget(widget, items_area, &mut view_state);

    frame.render_widget(
        Paragraph::new(Span::styled(
            status_line(list),
            Style::default().fg(MUTED_TEXT),
        )),
        status_area,
    );
}

fn character_item(character: &Character) -> ListItem<'static> {
    ListItem::new(Line::from(vec![
        Span::styled(
            format!("{:<width$}", character.name, width = NAME_WIDTH),
            Style::default().fg(HEADER_TEXT),
        ),
        Span::styled(
            format!("{:<8}", character.status.as_str()),
            status_style(character.status),
        ),
        Span::styled(character.species.clone(), Style::default().fg(MUTED_TEXT)),
    ]))
}

fn status_line(list: &ListState) -> String {
    match list.status() {
        LoadStatus::Idle | LoadStatus::Loading => "  Loading...".to_string(),
        _ if list.items().is_empty() => "  No characters.".to_string(),
        _ if list.has_next_page() => format!("  Page {} │ m: Load more", list.page()),
        _ => "  Nothing more to load.".to_string(),
    }
}
