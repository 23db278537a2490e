use std::time::Instant;

use reqwest::{Client, Url};
use serde::de::DeserializeOwned;

use crate::api::error::ApiError;
use crate::api::query::{CharacterQuery, ListRequest};
use crate::api::types::{
    Character, CharacterPage, FilterSet, FilteredPage, ListResponse, PageEnvelope,
};
use crate::config::ApiConfig;

/// HTTP client bound to one base endpoint.
///
/// Each call performs exactly one GET. Timeouts come from the transport;
/// nothing here retries.
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    base_url: Url,
}

impl ApiClient {
    pub fn new(config: &ApiConfig) -> Result<Self, ApiError> {
        let base_url = parse_base_url(&config.base_url)?;
        let client = Client::builder()
            .connect_timeout(config.connect_timeout())
            .timeout(config.request_timeout())
            .user_agent(concat!("character-browser/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(ApiError::Client)?;

        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Unfiltered listing for `page`.
    pub async fn fetch_page(&self, page: u32) -> Result<CharacterPage, ApiError> {
        let url = CharacterQuery::Page { page }.url(&self.base_url)?;
        let envelope: PageEnvelope = self.get_json(url).await?;
        Ok(CharacterPage::from(envelope))
    }

    /// Filtered listing. `page: None` requests page 1; `reset` is returned
    /// untouched.
    pub async fn fetch_filtered(
        &self,
        filters: &FilterSet,
        page: Option<u32>,
        reset: bool,
    ) -> Result<FilteredPage, ApiError> {
        let url = CharacterQuery::Filtered {
            filters,
            page: page.unwrap_or(1),
        }
        .url(&self.base_url)?;
        let envelope: PageEnvelope = self.get_json(url).await?;
        Ok(FilteredPage {
            page: CharacterPage::from(envelope),
            reset,
        })
    }

    /// Run either listing shape.
    pub async fn fetch_list(&self, request: &ListRequest) -> Result<ListResponse, ApiError> {
        match request {
            ListRequest::Page { page } => self.fetch_page(*page).await.map(ListResponse::Page),
            ListRequest::Filtered {
                filters,
                page,
                reset,
            } => self
                .fetch_filtered(filters, *page, *reset)
                .await
                .map(ListResponse::Filtered),
        }
    }

    /// Single character for the detail view.
    pub async fn fetch_character(&self, id: u32) -> Result<Character, ApiError> {
        let url = CharacterQuery::Detail { id }.url(&self.base_url)?;
        self.get_json(url).await
    }

    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T, ApiError> {
        let started = Instant::now();
        let url_str = url.to_string();

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| ApiError::transport(&url_str, e))?;

        let status = response.status();
        let body = response
            .bytes()
            .await
            .map_err(|e| ApiError::transport(&url_str, e))?;

        tracing::debug!(
            url = %url_str,
            status = status.as_u16(),
            bytes = body.len(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "API response received"
        );

        if !status.is_success() {
            return Err(ApiError::from_status(&url_str, status.as_u16(), &body));
        }

        serde_json::from_slice(&body).map_err(|source| ApiError::Decode {
            url: url_str,
            source,
        })
    }
}

fn parse_base_url(raw: &str) -> Result<Url, ApiError> {
    let invalid = || ApiError::InvalidBaseUrl {
        url: raw.to_string(),
    };
    let url = Url::parse(raw.trim()).map_err(|_| invalid())?;
    if !matches!(url.scheme(), "http" | "https") || url.cannot_be_a_base() {
        return Err(invalid());
    }
    Ok(url)
}
