//! Filter submission policy.
//!
//! Runs before any filtered request is dispatched. A rejected submission
//! issues no request and leaves the list untouched.

use crate::api::FilterSet;

use super::state::ListState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterRejection {
    /// Nothing to filter by.
    Empty,
    /// Same as the active filters or the ones just before them.
    Unchanged,
}

impl FilterRejection {
    pub fn message(&self) -> &'static str {
        match self {
            FilterRejection::Empty => "Please enter some filters or cancel.",
            FilterRejection::Unchanged => "Please try again with different filters or cancel.",
        }
    }
}

impl std::fmt::Display for FilterRejection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.message())
    }
}

impl std::error::Error for FilterRejection {}

/// Trim the submitted name and check it against the list's filter history.
pub fn validate_submission(
    submitted: &FilterSet,
    state: &ListState,
) -> Result<FilterSet, FilterRejection> {
    let candidate = submitted.normalized();

    if candidate.is_empty() {
        return Err(FilterRejection::Empty);
    }

    if state.filters() == Some(&candidate) || state.prev_filters() == Some(&candidate) {
        return Err(FilterRejection::Unchanged);
    }

    Ok(candidate)
}
