use crate::api::{FetchFailure, FilterSet, ListResponse, RequestId};
use crate::mvi::Intent;

/// Actions and gateway completions for the character list.
#[derive(Debug, Clone)]
pub enum ListIntent {
    /// Initial load, or an explicit retry after a failure.
    Load,

    /// Fetch the next page at the current cursor and append.
    LoadMore,

    /// Apply validated filters: record them and refetch from page 1.
    SubmitFilters { filters: FilterSet },

    /// Leave filtered mode by refetching with the empty filter set.
    ResetFilters,

    /// Push the current filters into the history slot and replace them.
    SetFilters { filters: Option<FilterSet> },

    /// The consumer has seen a `NotFound` outcome; roll filters back.
    AcknowledgeNotFound,

    /// A listing request completed.
    Loaded { id: RequestId, response: ListResponse },

    /// A listing request failed.
    LoadFailed { id: RequestId, failure: FetchFailure },
}

impl Intent for ListIntent {}
