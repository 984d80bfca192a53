//! `reqwest`-backed fetcher speaking the demo listing endpoint's protocol.

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use url::Url;

use crate::collection::{CollectionPage, CollectionQuery};
use crate::dto::api::ListResponse;
use crate::fetcher::CollectionFetcher;
use crate::fetcher::errors::{FetchError, FetchResult};
use crate::models::config::DashboardConfig;

/// Fetcher issuing `GET` requests against a paginated listing endpoint.
#[derive(Clone, Debug)]
pub struct HttpCollectionFetcher {
    http: reqwest::Client,
    base_url: Url,
}

impl HttpCollectionFetcher {
    pub fn new(base_url: &str) -> Result<Self, url::ParseError> {
        Ok(Self {
            http: reqwest::Client::new(),
            base_url: Url::parse(base_url)?,
        })
    }

    pub fn from_config(config: &DashboardConfig) -> Result<Self, url::ParseError> {
        Self::new(&config.api_base_url)
    }

    /// Reuses an existing client, e.g. one shared with the CMS integration.
    pub fn with_client(http: reqwest::Client, base_url: &str) -> Result<Self, url::ParseError> {
        Ok(Self {
            http,
            base_url: Url::parse(base_url)?,
        })
    }
}

/// Query parameters for `query` in the endpoint's dialect: 1-based `page`,
/// `perPage`, dotted `sortBy`, and `search` only when a filter is set.
fn wire_params(query: &CollectionQuery) -> Vec<(&'static str, String)> {
    let mut params = vec![
        ("page", (query.page + 1).to_string()),
        ("perPage", query.per_page.to_string()),
        ("sortBy", query.sort_by.wire_path().to_string()),
    ];
    if let Some(term) = &query.search {
        params.push(("search", term.clone()));
    }
    params
}

#[async_trait]
impl<T> CollectionFetcher<T> for HttpCollectionFetcher
where
    T: DeserializeOwned + Send + Sync,
{
    async fn fetch_page(&self, query: &CollectionQuery) -> FetchResult<CollectionPage<T>> {
        let response = self
            .http
            .get(self.base_url.clone())
            .query(&wire_params(query))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            return Err(FetchError::Endpoint {
                status: status.as_u16(),
                detail,
            });
        }

        let body: ListResponse<T> = response.json().await?;
        Ok(CollectionPage {
            items: body.data,
            total: body.total,
            query: query.clone(),
        })
    }
}
