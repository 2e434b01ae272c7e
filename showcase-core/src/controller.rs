//! Incremental paginated-list controller.
//!
//! [`PagedList`] owns the filter state, the accumulated results and the
//! loading flag for one catalog. It never performs I/O itself: every state
//! change that needs data returns a [`FetchRequest`], the caller runs it
//! against a [`ListingApi`](crate::ListingApi) and hands the outcome back to
//! [`PagedList::complete`] together with the request's token.
//!
//! Tokens carry a generation number. Only the most recently issued token is
//! current, and only until its outcome has been applied, so a slow response
//! for an old filter combination can never overwrite the results of a newer
//! one and a replayed response is never appended twice.

use crate::catalog::CatalogSpec;
use crate::error::ListingError;
use crate::filter::{FilterKey, FilterState};
use crate::item::Item;
use crate::listing::{ListingPage, ListingQuery};
use crate::sensor::{SentinelObserver, SENTINEL_THRESHOLD};
use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_INSTANCE: AtomicU64 = AtomicU64::new(1);

/// Identifies one issued fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FetchToken {
    instance: u64,
    generation: u64,
    page: u32,
}

impl FetchToken {
    /// Page this fetch was issued for.
    pub fn page(&self) -> u32 {
        self.page
    }
}

/// A fetch the caller must execute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchRequest {
    pub token: FetchToken,
    pub query: ListingQuery,
}

/// Items loaded so far plus the server-side total.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultSet<I> {
    pub items: Vec<I>,
    pub total: u64,
}

impl<I> Default for ResultSet<I> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            total: 0,
        }
    }
}

/// What [`PagedList::complete`] did with a response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Completion {
    /// Items were applied. `appended` is false for a page-1 replacement.
    Applied { received: usize, appended: bool },
    /// The fetch failed and the results were reset.
    Failed(ListingError),
    /// The token was not the latest; nothing changed.
    Stale,
}

/// Status line shown under the list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListIndicator {
    Loading,
    EndOfResults,
    Empty,
    None,
}

pub struct PagedList<I = Item> {
    spec: CatalogSpec,
    filters: FilterState,
    results: ResultSet<I>,
    loading: bool,
    instance: u64,
    generation: u64,
    sentinel: Option<SentinelObserver>,
}

impl<I> PagedList<I> {
    pub fn new(spec: CatalogSpec) -> Self {
        let filters = FilterState::new(spec.limit);
        Self {
            spec,
            filters,
            results: ResultSet::default(),
            loading: false,
            instance: NEXT_INSTANCE.fetch_add(1, Ordering::Relaxed),
            generation: 0,
            sentinel: None,
        }
    }

    pub fn spec(&self) -> &CatalogSpec {
        &self.spec
    }

    pub fn filters(&self) -> &FilterState {
        &self.filters
    }

    pub fn items(&self) -> &[I] {
        &self.results.items
    }

    pub fn total(&self) -> u64 {
        self.results.total
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// All matching items for the current filters are loaded.
    pub fn is_exhausted(&self) -> bool {
        self.filters.requested_span() >= self.results.total
    }

    /// Fetch for the default state, issued when the list is first shown.
    pub fn start(&mut self) -> FetchRequest {
        self.issue()
    }

    /// Change one filter. Always goes back to page 1 and fetches.
    pub fn set_filter(&mut self, key: FilterKey, value: impl Into<String>) -> FetchRequest {
        let value = value.into();
        if !self.spec.accepts(key) {
            tracing::warn!(catalog = %self.spec.kind, key = %key, "filter key not declared for catalog");
        }
        tracing::debug!(catalog = %self.spec.kind, key = %key, value = %value, "filter changed");
        self.filters.set(key, value);
        self.issue()
    }

    /// Request the next page, unless a fetch is outstanding or the list is
    /// exhausted.
    pub fn advance_page(&mut self) -> Option<FetchRequest> {
        if self.loading || self.is_exhausted() {
            return None;
        }
        self.filters.next_page();
        tracing::debug!(catalog = %self.spec.kind, page = self.filters.page(), "advancing page");
        Some(self.issue())
    }

    fn issue(&mut self) -> FetchRequest {
        self.generation += 1;
        self.loading = true;
        FetchRequest {
            token: FetchToken {
                instance: self.instance,
                generation: self.generation,
                page: self.filters.page(),
            },
            query: ListingQuery::from_state(&self.spec, &self.filters),
        }
    }

    /// Whether `token` belongs to the latest fetch of this list and that
    /// fetch is still outstanding.
    pub fn is_current(&self, token: &FetchToken) -> bool {
        self.loading && token.instance == self.instance && token.generation == self.generation
    }

    /// Apply the outcome of a fetch.
    pub fn complete(
        &mut self,
        token: FetchToken,
        outcome: Result<ListingPage<I>, ListingError>,
    ) -> Completion {
        if !self.is_current(&token) {
            tracing::debug!(
                catalog = %self.spec.kind,
                generation = token.generation,
                current = self.generation,
                "discarding stale listing response"
            );
            return Completion::Stale;
        }

        self.loading = false;
        if let Some(sentinel) = self.sentinel.as_mut() {
            sentinel.rearm();
        }

        match outcome {
            Ok(page) => {
                let received = page.items.len();
                let appended = token.page > 1;
                if appended {
                    self.results.items.extend(page.items);
                } else {
                    self.results.items = page.items;
                }
                self.results.total = page.total;
                Completion::Applied { received, appended }
            }
            Err(err) => {
                tracing::warn!(catalog = %self.spec.kind, page = token.page, error = %err, "listing fetch failed");
                self.results = ResultSet::default();
                Completion::Failed(err)
            }
        }
    }

    pub fn indicator(&self) -> ListIndicator {
        if self.loading {
            ListIndicator::Loading
        } else if self.results.items.is_empty() {
            ListIndicator::Empty
        } else if self.is_exhausted() {
            ListIndicator::EndOfResults
        } else {
            ListIndicator::None
        }
    }

    /// Start observing the sentinel. Replaces any previous observer.
    pub fn attach_sentinel(&mut self) {
        self.sentinel = Some(SentinelObserver::connect(SENTINEL_THRESHOLD));
    }

    pub fn detach_sentinel(&mut self) {
        self.sentinel = None;
    }

    pub fn has_sentinel(&self) -> bool {
        self.sentinel.as_ref().is_some_and(SentinelObserver::is_connected)
    }

    /// Feed the sentinel's visible fraction; fetches the next page when the
    /// observer fires.
    pub fn on_sentinel(&mut self, ratio: f32) -> Option<FetchRequest> {
        let fired = self.sentinel.as_mut()?.observe(ratio);
        if fired {
            self.advance_page()
        } else {
            None
        }
    }
}


#[cfg(test)]
mod prop_tests {
    use super::*;
    use crate::catalog::CatalogKind;
    use proptest::prelude::*;

    #[derive(Debug, Clone)]
    enum Step {
        Filter(FilterKey, String),
        Advance,
        Succeed(usize, u64),
        Fail,
    }

    fn arb_step() -> impl Strategy<Value = Step> {
        prop_oneof![
            (prop::sample::select(FilterKey::all().to_vec()), "[a-z0-9]{0,4}")
                .prop_map(|(key, value)| Step::Filter(key, value)),
            Just(Step::Advance),
            (0usize..8, 0u64..40).prop_map(|(n, total)| Step::Succeed(n, total)),
            Just(Step::Fail),
        ]
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        /// Property: loading is set exactly while the latest fetch is outstanding
        #[test]
        fn prop_loading_tracks_outstanding_fetch(steps in prop::collection::vec(arb_step(), 1..40)) {
            let mut list: PagedList<u32> = PagedList::new(CatalogKind::Websites.spec());
            let mut outstanding = Some(list.start().token);

            for step in steps {
                match step {
                    Step::Filter(key, value) => {
                        outstanding = Some(list.set_filter(key, value).token);
                        prop_assert_eq!(list.filters().page(), 1);
                    }
                    Step::Advance => {
                        let before = list.filters().clone();
                        let was_blocked = list.is_loading() || list.is_exhausted();
                        match list.advance_page() {
                            Some(request) => {
                                prop_assert!(!was_blocked);
                                prop_assert_eq!(request.query.page, before.page() + 1);
                                outstanding = Some(request.token);
                            }
                            None => {
                                prop_assert!(was_blocked);
                                prop_assert_eq!(list.filters(), &before);
                            }
                        }
                    }
                    Step::Succeed(n, total) => {
                        if let Some(token) = outstanding.take() {
                            let previous = list.items().to_vec();
                            let fresh: Vec<u32> = (0..n as u32).map(|i| 1000 + i).collect();
                            list.complete(token, Ok(ListingPage::new(fresh.clone(), total)));
                            if token.page() > 1 {
                                let mut expected = previous;
                                expected.extend(fresh);
                                prop_assert_eq!(list.items(), expected.as_slice());
                            } else {
                                prop_assert_eq!(list.items(), fresh.as_slice());
                            }
                        }
                    }
                    Step::Fail => {
                        if let Some(token) = outstanding.take() {
                            list.complete(token, Err(ListingError::transport("down")));
                            prop_assert!(list.items().is_empty());
                            prop_assert_eq!(list.total(), 0);
                        }
                    }
                }
                prop_assert_eq!(list.is_loading(), outstanding.is_some());
            }
        }
    }
}
