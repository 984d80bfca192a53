//! Seam between the collection controller and the remote listing endpoint.

use async_trait::async_trait;

use crate::collection::{CollectionPage, CollectionQuery};
use crate::fetcher::errors::FetchResult;

pub mod errors;
pub mod http;
#[cfg(feature = "test-mocks")]
pub mod mock;

/// Executes collection queries against some remote source of rows.
///
/// The controller is generic over this trait so tests can substitute
/// in-memory fixtures for the HTTP client.
#[async_trait]
pub trait CollectionFetcher<T>: Send + Sync {
    /// Fetches the page of rows described by `query`.
    ///
    /// The returned page must echo `query` back so the controller can
    /// detect results that arrive for a superseded query.
    async fn fetch_page(&self, query: &CollectionQuery) -> FetchResult<CollectionPage<T>>;
}
