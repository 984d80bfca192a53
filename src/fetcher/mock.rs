//! Mock fetcher implementation for isolating the controller in tests.

use async_trait::async_trait;
use mockall::mock;

use crate::collection::{CollectionPage, CollectionQuery};
use crate::domain::customer::Customer;
use crate::fetcher::CollectionFetcher;
use crate::fetcher::errors::FetchResult;

mock! {
    pub Fetcher {}

    #[async_trait]
    impl CollectionFetcher<Customer> for Fetcher {
        async fn fetch_page(&self, query: &CollectionQuery) -> FetchResult<CollectionPage<Customer>>;
    }
}
