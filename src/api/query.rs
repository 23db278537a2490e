use reqwest::Url;

use crate::api::error::ApiError;
use crate::api::types::FilterSet;

/// Token identifying one listing request issued by the list reducer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RequestId(pub u64);

impl std::fmt::Display for RequestId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// The two listing shapes the gateway knows how to perform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListRequest {
    /// Unfiltered listing for `page`.
    Page { page: u32 },
    /// Filtered listing. `page: None` means page 1. `reset` is handed back
    /// with the response so the consumer knows whether to replace or append.
    Filtered {
        filters: FilterSet,
        page: Option<u32>,
        reset: bool,
    },
}

impl ListRequest {
    pub fn is_filtered(&self) -> bool {
        matches!(self, ListRequest::Filtered { .. })
    }

    pub fn query(&self) -> CharacterQuery<'_> {
        match self {
            ListRequest::Page { page } => CharacterQuery::Page { page: *page },
            ListRequest::Filtered { filters, page, .. } => CharacterQuery::Filtered {
                filters,
                page: page.unwrap_or(1),
            },
        }
    }
}

/// A single outbound GET, resolved against the configured base endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharacterQuery<'a> {
    Page { page: u32 },
    Filtered { filters: &'a FilterSet, page: u32 },
    Detail { id: u32 },
}

impl CharacterQuery<'_> {
    /// Build the request URL.
    ///
    /// `base` may or may not end with a slash; `character` is appended as a
    /// path segment so a base like `https://host/api` keeps its `/api`.
    pub fn url(&self, base: &Url) -> Result<Url, ApiError> {
        let mut url = base.clone();
        url.set_query(None);
        url.set_fragment(None);
        {
            let mut segments = url
                .path_segments_mut()
                .map_err(|_| ApiError::InvalidBaseUrl {
                    url: base.to_string(),
                })?;
            segments.pop_if_empty().push("character");
            if let CharacterQuery::Detail { id } = self {
                segments.push(&id.to_string());
            }
        }

        match self {
            CharacterQuery::Page { page } => {
                url.query_pairs_mut()
                    .append_pair("page", &page.to_string());
            }
            CharacterQuery::Filtered { filters, page } => {
                url.query_pairs_mut()
                    .append_pair("name", &filters.name)
                    .append_pair("status", &filters.status)
                    .append_pair("species", &filters.species)
                    .append_pair("gender", &filters.gender)
                    .append_pair("page", &page.to_string());
            }
            CharacterQuery::Detail { .. } => {}
        }

        Ok(url)
    }
}
