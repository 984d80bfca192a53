//! Configuration model loaded from external sources.
//!
//! The application entry point deserializes this once and injects it into
//! whichever components need it; nothing in the crate reads configuration
//! implicitly or initializes external services at import time.

use serde::Deserialize;

use crate::SEARCH_DEBOUNCE_MS;
use crate::cms::CmsConfig;

#[derive(Clone, Debug, Deserialize)]
/// Settings for one dashboard deployment.
pub struct DashboardConfig {
    /// Base URL of the customer listing endpoint.
    pub api_base_url: String,
    /// Quiet window for search debouncing, in milliseconds.
    #[serde(default = "default_debounce_ms")]
    pub search_debounce_ms: u64,
    /// Hosted-CMS credentials; absent when marketing pages are disabled.
    #[serde(default)]
    pub cms: Option<CmsConfig>,
}

fn default_debounce_ms() -> u64 {
    SEARCH_DEBOUNCE_MS
}
