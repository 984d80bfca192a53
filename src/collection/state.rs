//! View state owned by the collection controller.
//!
//! The transition functions here are pure so the fetch-triggering rules can
//! be exercised without a runtime or a rendering environment. Both apply
//! functions implement "last write wins by query identity": a result is
//! only applied when it matches the query that is current at arrival time.

use serde::Serialize;

use crate::collection::{CollectionPage, CollectionQuery};
use crate::domain::types::PageSize;
use crate::fetcher::errors::FetchError;

#[derive(Clone, Copy, Debug, Serialize, PartialEq, Eq)]
pub enum ViewStatus {
    /// Mounted, nothing fetched yet.
    Idle,
    /// A fetch for `current_query` is outstanding.
    Loading,
    /// `last_page` matches `current_query`.
    Ready,
    /// The last fetch for `current_query` failed; `error_message` says how.
    Failed,
}

/// Snapshot handed to the presentation layer.
#[derive(Clone, Debug, Serialize)]
pub struct ViewState<T> {
    pub current_query: CollectionQuery,
    pub status: ViewStatus,
    /// Most recent successful page. Kept through `Loading` and `Failed` so
    /// the view can keep showing old rows dimmed.
    pub last_page: Option<CollectionPage<T>>,
    /// Present exactly when `status` is [`ViewStatus::Failed`]; cleared as
    /// soon as a new fetch begins.
    pub error_message: Option<String>,
}

impl<T> Default for ViewState<T> {
    fn default() -> Self {
        Self {
            current_query: CollectionQuery::default(),
            status: ViewStatus::Idle,
            last_page: None,
            error_message: None,
        }
    }
}

impl<T> ViewState<T> {
    /// Marks a fetch outstanding for the current query.
    ///
    /// The previous page is kept so the view can dim old rows, but any
    /// failure message is cleared: a message is present exactly when the
    /// status is [`ViewStatus::Failed`].
    pub fn begin_loading(&mut self) {
        self.status = ViewStatus::Loading;
        self.error_message = None;
    }

    /// Applies a successful fetch result if it is still current.
    ///
    /// Returns `false` when the page belongs to a superseded query, in which
    /// case the state is left untouched and the caller drops the page.
    pub fn apply_success(&mut self, page: CollectionPage<T>) -> bool {
        if page.query != self.current_query {
            return false;
        }
        self.last_page = Some(page);
        self.status = ViewStatus::Ready;
        self.error_message = None;
        true
    }

    /// Applies a fetch failure if it concerns the current query.
    ///
    /// A prior successful page is retained so the view does not go blank on
    /// error. Returns `false` for failures of superseded queries.
    pub fn apply_failure(&mut self, query: &CollectionQuery, error: &FetchError) -> bool {
        if *query != self.current_query {
            return false;
        }
        self.status = ViewStatus::Failed;
        self.error_message = Some(error.to_string());
        true
    }

    /// Total match count from the last successful fetch, if any.
    pub fn known_total(&self) -> Option<usize> {
        self.last_page.as_ref().map(|page| page.total)
    }

    /// Clamps a requested page index against the last known total so a
    /// stale pagination control cannot drive an out-of-range request.
    /// With no total known yet the request passes through unchanged.
    pub fn clamp_page(&self, requested: usize) -> usize {
        self.clamp_page_for(requested, self.current_query.per_page)
    }

    /// Like [`clamp_page`](Self::clamp_page) but for a prospective page
    /// size, used when the size itself is about to change.
    pub fn clamp_page_for(&self, requested: usize, per_page: PageSize) -> usize {
        match self.known_total() {
            Some(total) => {
                let max_page = total.div_ceil(per_page.get()).saturating_sub(1);
                requested.min(max_page)
            }
            None => requested,
        }
    }
}
