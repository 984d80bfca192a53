//! Controller owning one collection view's state and fetch orchestration.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use crate::SEARCH_DEBOUNCE_MS;
use crate::collection::CollectionQuery;
use crate::collection::state::ViewState;
use crate::domain::types::{PageSize, SortField};
use crate::fetcher::CollectionFetcher;

/// Owner of a single collection view's [`ViewState`].
///
/// Methods are synchronous and non-blocking; each fetch runs as a spawned
/// Tokio task, so the controller must live inside a Tokio runtime. Several
/// fetches may be in flight at once: correctness comes from discarding
/// results whose query has been superseded by the time they arrive, not
/// from cancelling requests.
///
/// Construction is side-effect free: the state starts
/// [`Idle`](crate::collection::state::ViewStatus::Idle) and the embedding
/// view calls [`refresh`](Self::refresh) on mount.
pub struct CollectionController<T, F> {
    inner: Arc<Mutex<Inner<T>>>,
    fetcher: Arc<F>,
    debounce: Duration,
}

struct Inner<T> {
    state: ViewState<T>,
    /// Bumped on every search edit; a debounce task only fires if its epoch
    /// is still current, so only the last edit in a burst fetches.
    search_epoch: u64,
    /// Cleared on unmount; checked before every state write so a late
    /// response cannot mutate a torn-down view.
    mounted: bool,
}

fn lock<T>(inner: &Mutex<Inner<T>>) -> MutexGuard<'_, Inner<T>> {
    inner.lock().unwrap_or_else(PoisonError::into_inner)
}

impl<T, F> CollectionController<T, F>
where
    T: Clone + Send + 'static,
    F: CollectionFetcher<T> + 'static,
{
    pub fn new(fetcher: F) -> Self {
        Self::with_debounce(fetcher, Duration::from_millis(SEARCH_DEBOUNCE_MS))
    }

    pub fn with_debounce(fetcher: F, debounce: Duration) -> Self {
        Self {
            inner: Arc::new(Mutex::new(Inner {
                state: ViewState::default(),
                search_epoch: 0,
                mounted: true,
            })),
            fetcher: Arc::new(fetcher),
            debounce,
        }
    }

    /// Returns a snapshot of the current view state. Pure read.
    pub fn current_state(&self) -> ViewState<T> {
        lock(&self.inner).state.clone()
    }

    /// Updates the search filter and schedules a debounced fetch.
    ///
    /// Changing the filter invalidates page offsets, so the page resets to
    /// 0. Rapid successive calls within the debounce window coalesce into
    /// one fetch for the last term.
    pub fn set_search_term(&self, term: impl Into<String>) {
        let epoch = {
            let mut guard = lock(&self.inner);
            if !guard.mounted {
                return;
            }
            guard.search_epoch += 1;
            guard.state.current_query = guard.state.current_query.clone().search(term).page(0);
            guard.state.begin_loading();
            guard.search_epoch
        };

        let inner = Arc::clone(&self.inner);
        let fetcher = Arc::clone(&self.fetcher);
        let window = self.debounce;
        tokio::spawn(async move {
            tokio::time::sleep(window).await;
            let query = {
                let guard = lock(&inner);
                if !guard.mounted || guard.search_epoch != epoch {
                    // A later edit owns the fetch now.
                    return;
                }
                guard.state.current_query.clone()
            };
            Self::run_fetch(inner, fetcher, query).await;
        });
    }

    /// Changes the sort order and fetches immediately. Page resets to 0.
    pub fn set_sort_key(&self, key: SortField) {
        self.mutate_and_fetch(|query, _| query.sort(key).page(0));
    }

    /// Navigates to a page and fetches immediately.
    ///
    /// The index is clamped against the last known total so stale UI state
    /// is corrected locally instead of producing an out-of-range request.
    pub fn set_page(&self, page: usize) {
        self.mutate_and_fetch(|query, state| query.page(state.clamp_page(page)));
    }

    /// Changes the page size and fetches immediately, re-clamping the
    /// current page against the new size.
    pub fn set_page_size(&self, size: PageSize) {
        self.mutate_and_fetch(|query, state| {
            let page = state.clamp_page_for(query.page, size);
            query.per_page(size).page(page)
        });
    }

    /// Re-issues the current query. This is the explicit retry control a
    /// view offers after a failure, and the initial load on mount.
    pub fn refresh(&self) {
        self.mutate_and_fetch(|query, _| query);
    }

    /// Tears the view down. All later state writes, including resolutions
    /// of fetches still in flight, become no-ops.
    pub fn unmount(&self) {
        lock(&self.inner).mounted = false;
    }

    /// Applies a query transition and issues the fetch for it.
    ///
    /// The query update and the `Loading` mark happen under one lock so
    /// every observable snapshot satisfies "`Ready` implies the displayed
    /// page matches the current query".
    fn mutate_and_fetch(
        &self,
        transition: impl FnOnce(CollectionQuery, &ViewState<T>) -> CollectionQuery,
    ) {
        let query = {
            let mut guard = lock(&self.inner);
            if !guard.mounted {
                return;
            }
            // An immediate fetch owns the query from here; any pending
            // search debounce task cedes instead of re-fetching.
            guard.search_epoch += 1;
            let next = transition(guard.state.current_query.clone(), &guard.state);
            guard.state.current_query = next.clone();
            guard.state.begin_loading();
            next
        };

        let inner = Arc::clone(&self.inner);
        let fetcher = Arc::clone(&self.fetcher);
        tokio::spawn(Self::run_fetch(inner, fetcher, query));
    }

    async fn run_fetch(inner: Arc<Mutex<Inner<T>>>, fetcher: Arc<F>, query: CollectionQuery) {
        {
            let guard = lock(&inner);
            if !guard.mounted || guard.state.current_query != query {
                // Superseded before the request even started.
                return;
            }
        }

        let result = fetcher.fetch_page(&query).await;

        let mut guard = lock(&inner);
        if !guard.mounted {
            return;
        }
        match result {
            Ok(page) => {
                if !guard.state.apply_success(page) {
                    log::debug!("dropping page for superseded query {query:?}");
                }
            }
            Err(error) => {
                if guard.state.apply_failure(&query, &error) {
                    log::error!("collection fetch failed: {error}");
                } else {
                    log::debug!("dropping failure for superseded query {query:?}: {error}");
                }
            }
        }
    }
}
