use crate::api::{Character, FilterSet, ListRequest, RequestId};
use crate::mvi::UiState;

/// Load status of the list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadStatus {
    #[default]
    Idle,
    Loading,
    Succeeded,
    Failed,
    /// A filtered query matched nothing. Transient: the consumer
    /// acknowledges it and the list returns to `Succeeded`.
    NotFound,
}

/// Why a request was issued. Decides the extra effects on success.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestPurpose {
    Load,
    LoadMore,
    Filter,
    Reset,
}

/// The single request whose result the list is waiting for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InFlight {
    pub id: RequestId,
    pub request: ListRequest,
    pub purpose: RequestPurpose,
}

/// In-memory character list.
#[derive(Debug, Clone, PartialEq)]
pub struct ListState {
    pub(super) items: Vec<Character>,
    pub(super) page: u32,
    pub(super) has_next_page: bool,
    pub(super) is_filtered: bool,
    pub(super) filters: Option<FilterSet>,
    pub(super) prev_filters: Option<FilterSet>,
    pub(super) status: LoadStatus,
    pub(super) error: String,
    pub(super) in_flight: Option<InFlight>,
    /// The request behind the last failure, re-issued on retry.
    pub(super) failed: Option<InFlight>,
    pub(super) next_request_id: u64,
}

impl Default for ListState {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            page: 1,
            has_next_page: true,
            is_filtered: false,
            filters: None,
            prev_filters: None,
            status: LoadStatus::Idle,
            error: String::new(),
            in_flight: None,
            failed: None,
            next_request_id: 1,
        }
    }
}

impl UiState for ListState {}

impl ListState {
    /// Characters in API response order, duplicates included.
    pub fn items(&self) -> &[Character] {
        &self.items
    }

    /// Page cursor: the next page to request.
    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn has_next_page(&self) -> bool {
        self.has_next_page
    }

    pub fn is_filtered(&self) -> bool {
        self.is_filtered
    }

    pub fn filters(&self) -> Option<&FilterSet> {
        self.filters.as_ref()
    }

    pub fn prev_filters(&self) -> Option<&FilterSet> {
        self.prev_filters.as_ref()
    }

    pub fn status(&self) -> LoadStatus {
        self.status
    }

    /// Message of the last failure, empty if none.
    pub fn error(&self) -> &str {
        &self.error
    }

    pub fn in_flight(&self) -> Option<&InFlight> {
        self.in_flight.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        self.status == LoadStatus::Loading
    }

    /// True when "load more" would issue a request.
    pub fn can_load_more(&self) -> bool {
        self.status == LoadStatus::Succeeded && self.has_next_page
    }

    /// Single-slot history: the current set moves to `prev_filters`.
    pub(super) fn set_filters(&mut self, filters: Option<FilterSet>) {
        self.prev_filters = self.filters.take();
        self.filters = filters;
    }

    /// Record a new outstanding request, superseding any previous one.
    pub(super) fn issue(&mut self, request: ListRequest, purpose: RequestPurpose) {
        let id = RequestId(self.next_request_id);
        self.next_request_id += 1;
        self.in_flight = Some(InFlight {
            id,
            request,
            purpose,
        });
        self.status = LoadStatus::Loading;
        self.error.clear();
        self.failed = None;
    }

    /// Take the outstanding request if `id` matches it.
    pub(super) fn take_in_flight(&mut self, id: RequestId) -> Option<InFlight> {
        match &self.in_flight {
            Some(in_flight) if in_flight.id == id => self.in_flight.take(),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_state_is_idle_on_first_page() {
        let state = ListState::default();
        assert_eq!(state.status(), LoadStatus::Idle);
        assert_eq!(state.page(), 1);
        assert!(state.items().is_empty());
        assert!(state.has_next_page());
        assert!(!state.is_filtered());
        assert!(state.filters().is_none());
        assert!(state.prev_filters().is_none());
        assert!(state.in_flight().is_none());
    }

    #[test]
    fn issue_assigns_increasing_ids() {
        let mut state = ListState::default();
        state.issue(ListRequest::Page { page: 1 }, RequestPurpose::Load);
        let first = state.in_flight().map(|f| f.id);
        state.issue(ListRequest::Page { page: 1 }, RequestPurpose::Load);
        let second = state.in_flight().map(|f| f.id);
        assert_eq!(first, Some(RequestId(1)));
        assert_eq!(second, Some(RequestId(2)));
        assert!(state.is_loading());
    }

    #[test]
    fn take_in_flight_ignores_other_ids() {
        let mut state = ListState::default();
        state.issue(ListRequest::Page { page: 1 }, RequestPurpose::Load);
        assert!(state.take_in_flight(RequestId(9)).is_none());
        assert!(state.take_in_flight(RequestId(1)).is_some());
        assert!(state.in_flight().is_none());
    }

    #[test]
    fn set_filters_keeps_single_slot_history() {
        let a = FilterSet {
            name: "a".into(),
            ..FilterSet::default()
        };
        let b = FilterSet {
            name: "b".into(),
            ..FilterSet::default()
        };
        let mut state = ListState::default();
        state.set_filters(Some(a.clone()));
        state.set_filters(Some(b.clone()));
        state.set_filters(Some(a.clone()));
        assert_eq!(state.filters(), Some(&a));
        assert_eq!(state.prev_filters(), Some(&b));
    }
}
