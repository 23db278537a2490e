use crate::ui::app::{App, PopupKind};
use crate::ui::filter_form::FilterFormIntent;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'q') || is_ctrl_char(key, 'c') {
        app.request_quit();
        return;
    }

    match app.popup_kind() {
        Some(PopupKind::Filter) => handle_filter_key(app, key),
        Some(PopupKind::Detail) => {
            if matches!(
                key.code,
                KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q')
            ) {
                app.close_popup();
            }
        }
        None => handle_list_key(app, key),
    }
}

fn handle_list_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => app.request_quit(),
        KeyCode::Up | KeyCode::Char('k') => app.move_selection(-1),
        KeyCode::Down | KeyCode::Char('j') => app.move_selection(1),
        KeyCode::PageUp => app.move_selection(-10),
        KeyCode::PageDown => app.move_selection(10),
        KeyCode::Enter => app.open_selected_detail(),
        KeyCode::Char('m') => app.load_more(),
        KeyCode::Char('f') => app.open_filter_form(),
        KeyCode::Char('r') => app.reset_filters(),
        KeyCode::Char('l') => app.retry(),
        _ => {}
    }
}

fn handle_filter_key(app: &mut App, key: KeyEvent) {
    let intent = match key.code {
        KeyCode::Esc => {
            app.close_popup();
            return;
        }
        KeyCode::Enter => {
            app.submit_filter_form();
            return;
        }
        KeyCode::Tab | KeyCode::Down => FilterFormIntent::FocusNext,
        KeyCode::BackTab | KeyCode::Up => FilterFormIntent::FocusPrev,
        KeyCode::Left => FilterFormIntent::CyclePrev,
        KeyCode::Right => FilterFormIntent::CycleNext,
        KeyCode::Backspace => FilterFormIntent::Backspace,
        KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            FilterFormIntent::Input(ch)
        }
        _ => return,
    };
    app.dispatch_filter_form(intent);
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}
