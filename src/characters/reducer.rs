use crate::api::{CharacterPage, FetchFailure, FilterSet, ListRequest, ListResponse, RequestId};
use crate::mvi::Reducer;

use super::intent::ListIntent;
use super::state::{ListState, LoadStatus, RequestPurpose};

/// Reducer for the character list.
pub struct ListReducer;

impl Reducer for ListReducer {
    type State = ListState;
    type Intent = ListIntent;

    fn reduce(mut state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            ListIntent::Load => {
                match state.status {
                    LoadStatus::Idle => {
                        let page = state.page;
                        state.issue(ListRequest::Page { page }, RequestPurpose::Load);
                    }
                    // Retry exactly what failed so filtered views stay filtered
                    LoadStatus::Failed => match state.failed.take() {
                        Some(failed) => state.issue(failed.request, failed.purpose),
                        None => {
                            let page = state.page;
                            state.issue(ListRequest::Page { page }, RequestPurpose::Load);
                        }
                    },
                    _ => {}
                }
                state
            }

            ListIntent::LoadMore => {
                if !state.can_load_more() {
                    return state;
                }
                let page = state.page;
                let request = if state.is_filtered {
                    ListRequest::Filtered {
                        filters: state.filters.clone().unwrap_or_default(),
                        page: Some(page),
                        reset: false,
                    }
                } else {
                    ListRequest::Page { page }
                };
                state.issue(request, RequestPurpose::LoadMore);
                state
            }

            ListIntent::SubmitFilters { filters } => {
                state.set_filters(Some(filters.clone()));
                state.issue(
                    ListRequest::Filtered {
                        filters,
                        page: None,
                        reset: true,
                    },
                    RequestPurpose::Filter,
                );
                state
            }

            ListIntent::ResetFilters => {
                if !state.is_filtered {
                    return state;
                }
                state.issue(
                    ListRequest::Filtered {
                        filters: FilterSet::default(),
                        page: None,
                        reset: true,
                    },
                    RequestPurpose::Reset,
                );
                state
            }

            ListIntent::SetFilters { filters } => {
                state.set_filters(filters);
                state
            }

            ListIntent::AcknowledgeNotFound => {
                if state.status == LoadStatus::NotFound {
                    let previous = state.prev_filters.clone();
                    state.set_filters(previous);
                    state.status = LoadStatus::Succeeded;
                }
                state
            }

            ListIntent::Loaded { id, response } => apply_response(state, id, response),

            ListIntent::LoadFailed { id, failure } => apply_failure(state, id, failure),
        }
    }
}

fn apply_response(mut state: ListState, id: RequestId, response: ListResponse) -> ListState {
    let Some(in_flight) = state.take_in_flight(id) else {
        tracing::debug!(request = %id, "ignoring stale listing response");
        return state;
    };

    match response {
        ListResponse::Page(page) => {
            append_page(&mut state, page);
        }
        ListResponse::Filtered(filtered) => {
            if filtered.reset {
                state.page = 1;
                state.items = filtered.page.results;
                state.has_next_page = filtered.page.has_next;
                state.page += 1;
            } else {
                append_page(&mut state, filtered.page);
            }
            state.is_filtered = true;
        }
    }
    state.status = LoadStatus::Succeeded;

    if in_flight.purpose == RequestPurpose::Reset {
        state.set_filters(Some(FilterSet::default()));
        state.is_filtered = false;
    }

    state
}

fn append_page(state: &mut ListState, page: CharacterPage) {
    state.items.extend(page.results);
    state.has_next_page = page.has_next;
    state.page += 1;
}

fn apply_failure(mut state: ListState, id: RequestId, failure: FetchFailure) -> ListState {
    let Some(in_flight) = state.take_in_flight(id) else {
        tracing::debug!(request = %id, "ignoring stale listing failure");
        return state;
    };

    if failure == FetchFailure::NotFound && in_flight.request.is_filtered() {
        state.status = LoadStatus::NotFound;
    } else {
        state.error = failure.message();
        state.status = LoadStatus::Failed;
        state.failed = Some(in_flight);
    }
    state
}
