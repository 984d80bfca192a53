use serde::Deserialize;

/// Success envelope returned by the listing endpoint.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListResponse<T> {
    /// 1-based page number echoed by the endpoint.
    pub page: usize,
    pub per_page: usize,
    /// Full match count across all pages.
    pub total: usize,
    /// Rows for the requested page, in endpoint order.
    pub data: Vec<T>,
}
