//! Paginated remote collection view: query values, fetched pages, view
//! state, and the controller orchestrating them.

use serde::Serialize;

use crate::domain::types::{PageSize, SortField};

pub mod controller;
pub mod state;

/// Immutable description of one page worth of remote data.
///
/// Built with chained setters, mirroring how views derive the next query
/// from the current one:
///
/// ```
/// use crm_dashboard::collection::CollectionQuery;
/// use crm_dashboard::domain::types::SortField;
///
/// let query = CollectionQuery::new().search("ann").sort(SortField::Email);
/// assert_eq!(query.page, 0);
/// ```
#[derive(Clone, Debug, Default, Serialize, PartialEq, Eq)]
pub struct CollectionQuery {
    /// Zero-based page index. The wire protocol is 1-based; the fetcher
    /// converts.
    pub page: usize,
    pub per_page: PageSize,
    /// Normalized search term; `None` means no filter.
    pub search: Option<String>,
    pub sort_by: SortField,
}

impl CollectionQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn page(mut self, page: usize) -> Self {
        self.page = page;
        self
    }

    pub fn per_page(mut self, per_page: PageSize) -> Self {
        self.per_page = per_page;
        self
    }

    /// Sets the search term, trimming it and treating an empty result as
    /// "no filter".
    pub fn search(mut self, term: impl Into<String>) -> Self {
        self.search = Some(term.into())
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty());
        self
    }

    pub fn sort(mut self, sort_by: SortField) -> Self {
        self.sort_by = sort_by;
        self
    }
}

/// Result of executing a [`CollectionQuery`].
#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct CollectionPage<T> {
    /// Rows for the requested page, at most `query.per_page` of them.
    pub items: Vec<T>,
    /// Total match count across all pages, as reported by the endpoint.
    pub total: usize,
    /// The query this page was fetched for, kept for staleness checks.
    pub query: CollectionQuery,
}

impl<T> CollectionPage<T> {
    /// Number of pages implied by the reported total.
    pub fn total_pages(&self) -> usize {
        self.total.div_ceil(self.query.per_page.get())
    }

    /// Largest valid zero-based page index. An empty result set still has
    /// page 0 as its only valid page.
    pub fn max_page(&self) -> usize {
        self.total_pages().saturating_sub(1)
    }
}
