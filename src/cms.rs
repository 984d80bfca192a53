//! Hosted visual-CMS integration for marketing pages.
//!
//! The CMS is an opaque collaborator: entries are fetched by URL path and
//! handed to the presentation layer as raw JSON. The client is constructed
//! explicitly with its configuration by the application entry point; there
//! is no process-wide SDK state.

use serde::{Deserialize, Serialize};

use crate::fetcher::errors::{FetchError, FetchResult};

pub const DEFAULT_CMS_BASE_URL: &str = "https://cdn.builder.io/api/v3";

/// Credentials and endpoint for one CMS space.
#[derive(Clone, Debug, Deserialize)]
pub struct CmsConfig {
    pub api_key: String,
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

fn default_base_url() -> String {
    DEFAULT_CMS_BASE_URL.to_string()
}

impl CmsConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: default_base_url(),
        }
    }
}

/// Published content entry. The `data` payload is whatever the editors
/// built; this crate never interprets it.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CmsEntry {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub data: serde_json::Value,
}

#[derive(Debug, Deserialize)]
struct CmsEntryList {
    #[serde(default)]
    results: Vec<CmsEntry>,
}

/// Client for fetching published entries from the hosted CMS.
#[derive(Clone, Debug)]
pub struct CmsClient {
    http: reqwest::Client,
    config: CmsConfig,
}

impl CmsClient {
    pub fn new(config: CmsConfig) -> Self {
        Self::with_client(reqwest::Client::new(), config)
    }

    pub fn with_client(http: reqwest::Client, config: CmsConfig) -> Self {
        Self { http, config }
    }

    /// Fetches the published entry of `model` targeting `url_path`, or
    /// `None` when no entry is published for that path.
    pub async fn fetch_entry(&self, model: &str, url_path: &str) -> FetchResult<Option<CmsEntry>> {
        let url = format!(
            "{}/content/{model}",
            self.config.base_url.trim_end_matches('/')
        );
        let response = self
            .http
            .get(url)
            .query(&[
                ("apiKey", self.config.api_key.as_str()),
                ("url", url_path),
                ("limit", "1"),
            ])
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

        let body: CmsEntryList = response.json().await?;
        Ok(body.results.into_iter().next())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entry_list_tolerates_missing_fields() {
        let body = r#"{"results":[{"id":"abc","data":{"title":"About us"}}]}"#;
        let parsed: CmsEntryList = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.results[0].id, "abc");
        assert_eq!(parsed.results[0].data["title"], "About us");

        let empty: CmsEntryList = serde_json::from_str("{}").unwrap();
        assert!(empty.results.is_empty());
    }
}
