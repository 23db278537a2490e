use std::time::{Duration, Instant};

use crate::api::{FetchFailure, GatewayCommand, GatewayEvent, GatewayHandle};
use crate::characters::{validate_submission, ListIntent, ListReducer, ListState, LoadStatus};
use crate::config::UiConfig;
use crate::mvi::Reducer;
use crate::ui::detail::{DetailIntent, DetailReducer, DetailState};
use crate::ui::filter_form::{FilterFormIntent, FilterFormReducer, FilterFormState};
use crate::ui::notice::{Notice, NoticeLevel};

const NOT_FOUND_NOTICE: &str = "No exact matches found.";

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum PopupKind {
    Filter,
    Detail,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Focus {
    List,
    Popup(PopupKind),
}

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

/// Application root. Owns every state container and is the only place
/// that talks to the gateway.
pub struct App {
    should_quit: bool,
    focus: Focus,
    list: ListState,
    detail: DetailState,
    filter_form: FilterFormState,
    selection: usize,
    notice: Option<Notice>,
    notice_ttl: Duration,
    gateway: Option<GatewayHandle>,
}

impl App {
    pub fn new(config: &UiConfig) -> Self {
        Self {
            should_quit: false,
            focus: Focus::List,
            list: ListState::default(),
            detail: DetailState::default(),
            filter_form: FilterFormState::default(),
            selection: 0,
            notice: None,
            notice_ttl: config.notice_duration(),
            gateway: None,
        }
    }

    pub fn attach_gateway(&mut self, gateway: GatewayHandle) {
        self.gateway = Some(gateway);
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn list(&self) -> &ListState {
        &self.list
    }

    pub fn detail(&self) -> &DetailState {
        &self.detail
    }

    pub fn filter_form(&self) -> &FilterFormState {
        &self.filter_form
    }

    pub fn selection(&self) -> usize {
        self.selection
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    pub fn popup_kind(&self) -> Option<PopupKind> {
        match self.focus {
            Focus::Popup(kind) => Some(kind),
            Focus::List => None,
        }
    }

    pub fn show_popup(&self) -> bool {
        matches!(self.focus, Focus::Popup(_))
    }

    /// Initial load, run once the UI is up.
    pub fn start(&mut self) {
        self.dispatch_list(ListIntent::Load);
    }

    /// Explicit retry after a failed load.
    pub fn retry(&mut self) {
        if self.list.status() == LoadStatus::Failed {
            self.dispatch_list(ListIntent::Load);
        }
    }

    pub fn load_more(&mut self) {
        if self.list.can_load_more() {
            self.dispatch_list(ListIntent::LoadMore);
            return;
        }
        match self.list.status() {
            LoadStatus::Failed => {
                self.notify("Last request failed. Press l to retry.", NoticeLevel::Error)
            }
            LoadStatus::Succeeded | LoadStatus::NotFound => {
                self.notify("Nothing more to load.", NoticeLevel::Info)
            }
            LoadStatus::Idle | LoadStatus::Loading => {
                self.notify("Still loading.", NoticeLevel::Info)
            }
        }
    }

    pub fn reset_filters(&mut self) {
        if self.list.is_filtered() {
            self.selection = 0;
            self.dispatch_list(ListIntent::ResetFilters);
        }
    }

    pub fn on_tick(&mut self) {
        if self
            .notice
            .as_ref()
            .is_some_and(|notice| notice.is_expired(Instant::now()))
        {
            self.notice = None;
        }
    }

    pub fn move_selection(&mut self, delta: i32) {
        let len = self.list.items().len();
        if len == 0 {
            self.selection = 0;
            return;
        }
        let current = self.selection.min(len - 1);
        self.selection = if delta.is_negative() {
            current.saturating_sub(delta.unsigned_abs() as usize)
        } else {
            (current + delta as usize).min(len - 1)
        };
    }

    pub fn close_popup(&mut self) {
        match self.focus {
            Focus::Popup(PopupKind::Filter) => {
                dispatch_mvi!(self, filter_form, FilterFormReducer, FilterFormIntent::Close);
            }
            Focus::Popup(PopupKind::Detail) => {
                dispatch_mvi!(self, detail, DetailReducer, DetailIntent::Close);
            }
            Focus::List => {}
        }
        self.focus = Focus::List;
    }

    // ========================================================================
    // Filter form
    // ========================================================================

    /// Open the form pre-filled with the active filters.
    pub fn open_filter_form(&mut self) {
        let initial = self.list.filters().cloned().unwrap_or_default();
        dispatch_mvi!(
            self,
            filter_form,
            FilterFormReducer,
            FilterFormIntent::Open { initial }
        );
        self.focus = Focus::Popup(PopupKind::Filter);
    }

    pub fn dispatch_filter_form(&mut self, intent: FilterFormIntent) {
        dispatch_mvi!(self, filter_form, FilterFormReducer, intent);
    }

    /// Validate the form and, if accepted, apply the filters.
    ///
    /// Returns `true` when a filtered request was dispatched. On rejection a
    /// notice is shown, the form stays open and nothing is sent.
    pub fn submit_filter_form(&mut self) -> bool {
        let Some(submitted) = self.filter_form.submission() else {
            return false;
        };

        match validate_submission(&submitted, &self.list) {
            Ok(filters) => {
                tracing::info!(filters = %filters.summary(), "applying filters");
                self.selection = 0;
                self.dispatch_list(ListIntent::SubmitFilters { filters });
                self.close_popup();
                true
            }
            Err(rejection) => {
                tracing::debug!(?rejection, "filter submission rejected");
                self.notify(rejection.message(), NoticeLevel::Error);
                false
            }
        }
    }

    // ========================================================================
    // Detail view
    // ========================================================================

    pub fn open_selected_detail(&mut self) {
        if let Some(id) = self.list.items().get(self.selection).map(|c| c.id) {
            self.open_detail(id);
        }
    }

    pub fn open_detail(&mut self, id: u32) {
        dispatch_mvi!(self, detail, DetailReducer, DetailIntent::Open { id });
        self.focus = Focus::Popup(PopupKind::Detail);
        if let Err(message) = self.send_command(GatewayCommand::Character { id }) {
            dispatch_mvi!(
                self,
                detail,
                DetailReducer,
                DetailIntent::Failed { id, message }
            );
        }
    }

    // ========================================================================
    // Gateway completions
    // ========================================================================

    pub fn on_gateway_event(&mut self, event: GatewayEvent) {
        match event {
            GatewayEvent::ListLoaded { id, result } => match result {
                Ok(response) => self.dispatch_list(ListIntent::Loaded { id, response }),
                Err(failure) => self.dispatch_list(ListIntent::LoadFailed { id, failure }),
            },
            GatewayEvent::CharacterLoaded { id, result } => {
                let intent = match result {
                    Ok(character) => DetailIntent::Loaded { id, character },
                    Err(message) => DetailIntent::Failed { id, message },
                };
                dispatch_mvi!(self, detail, DetailReducer, intent);
            }
        }
    }

    /// Run the list reducer and forward any newly issued request.
    pub fn dispatch_list(&mut self, intent: ListIntent) {
        let before = self.list.in_flight().map(|in_flight| in_flight.id);
        dispatch_mvi!(self, list, ListReducer, intent);

        let issued = self
            .list
            .in_flight()
            .filter(|in_flight| Some(in_flight.id) != before)
            .cloned();
        if let Some(in_flight) = issued {
            let command = GatewayCommand::List {
                id: in_flight.id,
                request: in_flight.request,
            };
            if let Err(message) = self.send_command(command) {
                self.dispatch_list(ListIntent::LoadFailed {
                    id: in_flight.id,
                    failure: FetchFailure::Failed { message },
                });
            }
        }

        if self.list.status() == LoadStatus::NotFound {
            self.notify(NOT_FOUND_NOTICE, NoticeLevel::Info);
            self.dispatch_list(ListIntent::AcknowledgeNotFound);
        }

        self.clamp_selection();
    }

    fn send_command(&mut self, command: GatewayCommand) -> Result<(), String> {
        let Some(gateway) = &self.gateway else {
            tracing::warn!(?command, "no gateway attached, dropping command");
            return Err("gateway worker is not running".to_string());
        };

        gateway.submit(command).map_err(|err| {
            tracing::error!(error = %err, "failed to queue gateway command");
            err.to_string()
        })
    }

    fn notify(&mut self, message: &str, level: NoticeLevel) {
        self.notice = Some(Notice::new(message, level, self.notice_ttl));
    }

    fn clamp_selection(&mut self) {
        let len = self.list.items().len();
        if self.selection >= len {
            self.selection = len.saturating_sub(1);
        }
    }
}
