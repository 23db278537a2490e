//! Request gateway for the remote character API.
//!
//! Three read operations, all plain HTTP GET:
//! - unfiltered listing (`/character?page=N`)
//! - filtered listing (`/character?name=&status=&species=&gender=&page=N`)
//! - single character (`/character/{id}`)
//!
//! Listing responses are normalized into [`CharacterPage`]. Failures are
//! classified by [`ApiError`], with HTTP 404 kept apart from every other
//! failure because a filtered query that matches nothing is an expected
//! outcome.

pub mod client;
pub mod error;
pub mod query;
pub mod types;
pub mod worker;

pub use client::ApiClient;
pub use error::{ApiError, FetchFailure};
pub use query::{CharacterQuery, ListRequest, RequestId};
pub use types::{
    Character, CharacterPage, CharacterStatus, FilterSet, FilteredPage, ListResponse, NamedLink,
    PageInfo,
};
pub use worker::{
    execute, gateway_channel, GatewayCommand, GatewayError, GatewayEvent, GatewayHandle,
    GatewayWorker,
};
