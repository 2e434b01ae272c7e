//! SHOWCASE Test Utilities
//!
//! Shared test infrastructure for the SHOWCASE workspace:
//! - Mock listing and reference-data APIs
//! - Proptest generators for catalog types
//! - Fixtures for common list scenarios
//! - Assertions over controller state

pub use showcase_core::{
    CatalogKind, CatalogSpec, Completion, FilterKey, Item, ItemId, ListIndicator, ListingApi,
    ListingError, ListingPage, ListingQuery, PagedList, ReferenceApi, ReferenceEntry,
    ReferenceKind,
};

use async_trait::async_trait;
use std::collections::{HashMap, VecDeque};
use std::sync::{Mutex, MutexGuard};

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

// ============================================================================
// MOCK APIS
// ============================================================================

/// A call recorded by [`MockListingApi`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedQuery {
    pub endpoint: &'static str,
    pub query: ListingQuery,
}

/// In-memory listing API serving pages out of a fixed item list.
///
/// Each call slices `items` by the query's page and limit and reports the
/// full length as the total. Failures queued with [`MockListingApi::fail_next`]
/// are returned first, one per call.
#[derive(Debug, Default)]
pub struct MockListingApi {
    items: Vec<Item>,
    reported_total: Option<u64>,
    failures: Mutex<VecDeque<ListingError>>,
    calls: Mutex<Vec<RecordedQuery>>,
}

impl MockListingApi {
    pub fn new(items: Vec<Item>) -> Self {
        Self {
            items,
            ..Self::default()
        }
    }

    /// Report `total` instead of the item count.
    pub fn with_total(mut self, total: u64) -> Self {
        self.reported_total = Some(total);
        self
    }

    pub fn fail_next(&self, err: ListingError) {
        lock(&self.failures).push_back(err);
    }

    pub fn calls(&self) -> Vec<RecordedQuery> {
        lock(&self.calls).clone()
    }

    pub fn call_count(&self) -> usize {
        lock(&self.calls).len()
    }

    /// Page the mock would serve for `query`, ignoring queued failures.
    pub fn page_for(&self, query: &ListingQuery) -> ListingPage<Item> {
        let limit = query.limit.max(1) as usize;
        let start = (query.page.max(1) as usize - 1).saturating_mul(limit);
        let items = self
            .items
            .iter()
            .skip(start)
            .take(limit)
            .cloned()
            .collect();
        let total = self.reported_total.unwrap_or(self.items.len() as u64);
        ListingPage::new(items, total)
    }
}

#[async_trait]
impl ListingApi for MockListingApi {
    async fn fetch_listing(
        &self,
        spec: &CatalogSpec,
        query: &ListingQuery,
    ) -> Result<ListingPage<Item>, ListingError> {
        lock(&self.calls).push(RecordedQuery {
            endpoint: spec.endpoint,
            query: query.clone(),
        });
        if let Some(err) = lock(&self.failures).pop_front() {
            return Err(err);
        }
        Ok(self.page_for(query))
    }
}

/// Reference-data API with a fixed answer per kind. Unset kinds fail.
#[derive(Debug, Default)]
pub struct MockReferenceApi {
    responses: HashMap<ReferenceKind, Result<Vec<ReferenceEntry>, ListingError>>,
    calls: Mutex<Vec<ReferenceKind>>,
}

impl MockReferenceApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, kind: ReferenceKind, entries: Vec<ReferenceEntry>) -> Self {
        self.responses.insert(kind, Ok(entries));
        self
    }

    pub fn with_failure(mut self, kind: ReferenceKind, err: ListingError) -> Self {
        self.responses.insert(kind, Err(err));
        self
    }

    pub fn calls(&self) -> Vec<ReferenceKind> {
        lock(&self.calls).clone()
    }
}

#[async_trait]
impl ReferenceApi for MockReferenceApi {
    async fn fetch_reference(&self, kind: ReferenceKind) -> Result<Vec<ReferenceEntry>, ListingError> {
        lock(&self.calls).push(kind);
        self.responses
            .get(&kind)
            .cloned()
            .unwrap_or_else(|| Err(ListingError::transport(format!("no mock for {:?}", kind))))
    }
}

// ============================================================================
// PROPTEST GENERATORS
// ============================================================================

pub mod generators {
    //! Proptest strategies for SHOWCASE types.

    use super::*;
    use proptest::prelude::*;

    pub fn arb_catalog_kind() -> impl Strategy<Value = CatalogKind> {
        prop::sample::select(CatalogKind::all().to_vec())
    }

    pub fn arb_filter_key() -> impl Strategy<Value = FilterKey> {
        prop::sample::select(FilterKey::all().to_vec())
    }

    pub fn arb_item_id() -> impl Strategy<Value = ItemId> {
        prop_oneof![
            (1i64..100_000).prop_map(ItemId::Number),
            "[a-z0-9-]{1,12}".prop_map(ItemId::Text),
        ]
    }

    pub fn arb_item() -> impl Strategy<Value = Item> {
        (
            arb_item_id(),
            "[A-Za-z ]{1,24}",
            prop::option::of("[a-z/]{1,16}\\.(png|jpg)"),
            prop::option::of("20[0-9]{2}-0[1-9]-[0-2][1-9]"),
        )
            .prop_map(|(id, title, thumbnail, created_at)| {
                let mut item = Item::new(id, title);
                item.thumbnail = thumbnail;
                item.created_at = created_at;
                item
            })
    }

    pub fn arb_reference_entry() -> impl Strategy<Value = ReferenceEntry> {
        (1i64..10_000, "[A-Za-zÀ-ÿ ]{1,16}").prop_map(|(id, label)| ReferenceEntry::new(id, label))
    }

    /// Filter value for `key`; empty means "cleared".
    pub fn arb_filter_value() -> impl Strategy<Value = String> {
        prop_oneof![Just(String::new()), "[a-z0-9]{1,8}"]
    }
}

// ============================================================================
// TEST FIXTURES
// ============================================================================

pub mod fixtures {
    //! Pre-built data for common scenarios.

    use super::*;

    /// `count` items with ids `1..=count` and titles `"Item n"`.
    pub fn numbered_items(count: usize) -> Vec<Item> {
        (1..=count as i64)
            .map(|n| Item::new(n, format!("Item {}", n)).with_thumbnail(format!("uploads/{}.jpg", n)))
            .collect()
    }

    /// Thirteen websites: three pages at the default page size (6, 6, 1).
    pub fn thirteen_websites() -> MockListingApi {
        MockListingApi::new(numbered_items(13))
    }

    pub fn clients() -> Vec<ReferenceEntry> {
        vec![ReferenceEntry::new(2, "Beta"), ReferenceEntry::new(1, "alpha")]
    }

    pub fn technologies() -> Vec<ReferenceEntry> {
        vec![
            ReferenceEntry::new(10, "React"),
            ReferenceEntry::new(11, "Next.js"),
            ReferenceEntry::new(12, "Élixir"),
        ]
    }

    /// Reference API answering both kinds.
    pub fn reference_api() -> MockReferenceApi {
        MockReferenceApi::new()
            .with(ReferenceKind::Clients, clients())
            .with(ReferenceKind::Technologies, technologies())
    }

    /// A listing body in the nested `data.<key>` shape.
    pub fn nested_body(key: &str, items: &[serde_json::Value], total: u64) -> serde_json::Value {
        serde_json::json!({ "data": { key: items, "total": total } })
    }
}

// ============================================================================
// CUSTOM ASSERTIONS
// ============================================================================

pub mod assertions {
    //! Assertions over controller state.

    use super::*;

    #[track_caller]
    pub fn assert_applied(completion: &Completion) {
        assert!(
            matches!(completion, Completion::Applied { .. }),
            "Expected Applied, got: {:?}",
            completion
        );
    }

    #[track_caller]
    pub fn assert_stale(completion: &Completion) {
        assert_eq!(completion, &Completion::Stale, "Expected Stale completion");
    }

    /// Loaded item ids, in order, match `expected`.
    #[track_caller]
    pub fn assert_item_ids(list: &PagedList<Item>, expected: &[i64]) {
        let ids: Vec<Option<ItemId>> = list.items().iter().map(|item| item.id.clone()).collect();
        let expected: Vec<Option<ItemId>> = expected.iter().map(|n| Some(ItemId::Number(*n))).collect();
        assert_eq!(ids, expected, "Loaded item ids differ");
    }

    /// List is reset to the empty, idle state.
    #[track_caller]
    pub fn assert_reset(list: &PagedList<Item>) {
        assert!(list.items().is_empty(), "Expected no items, got {}", list.items().len());
        assert_eq!(list.total(), 0, "Expected total 0");
        assert!(!list.is_loading(), "Expected loading to be cleared");
        assert_eq!(list.indicator(), ListIndicator::Empty);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[tokio::test]
    async fn test_mock_listing_pages_and_records() {
        let api = fixtures::thirteen_websites();
        let spec = CatalogKind::Websites.spec();
        let mut list: PagedList<Item> = PagedList::new(spec.clone());

        let mut request = Some(list.start());
        while let Some(current) = request.take() {
            let outcome = api.fetch_listing(&spec, &current.query).await;
            assertions::assert_applied(&list.complete(current.token, outcome));
            request = list.advance_page();
        }

        assert_eq!(api.call_count(), 3);
        assertions::assert_item_ids(&list, &(1..=13).collect::<Vec<_>>());
        assert_eq!(list.indicator(), ListIndicator::EndOfResults);
        assert!(api.calls().iter().all(|call| call.endpoint == "websites/listing"));
    }

    #[tokio::test]
    async fn test_mock_listing_queued_failure() {
        let api = fixtures::thirteen_websites();
        api.fail_next(ListingError::transport("offline"));
        let spec = CatalogKind::Websites.spec();
        let mut list: PagedList<Item> = PagedList::new(spec.clone());

        let request = list.start();
        let outcome = api.fetch_listing(&spec, &request.query).await;
        list.complete(request.token, outcome);
        assertions::assert_reset(&list);

        let request = list.set_filter(FilterKey::Search, "");
        let outcome = api.fetch_listing(&spec, &request.query).await;
        list.complete(request.token, outcome);
        assert_eq!(list.items().len(), 6);
    }

    #[tokio::test]
    async fn test_mock_reference_unset_kind_fails() {
        let api = MockReferenceApi::new().with(ReferenceKind::Clients, fixtures::clients());
        assert!(api.fetch_reference(ReferenceKind::Clients).await.is_ok());
        assert!(api.fetch_reference(ReferenceKind::Technologies).await.is_err());
        assert_eq!(
            api.calls(),
            vec![ReferenceKind::Clients, ReferenceKind::Technologies]
        );
    }

    #[test]
    fn test_page_for_past_end_is_empty() {
        let api = MockListingApi::new(fixtures::numbered_items(3)).with_total(40);
        let query = ListingQuery {
            page: 5,
            limit: 6,
            keyword: String::new(),
            params: Vec::new(),
        };
        let page = api.page_for(&query);
        assert!(page.items.is_empty());
        assert_eq!(page.total, 40);
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(50))]

        #[test]
        fn prop_generated_item_has_id(item in generators::arb_item()) {
            prop_assert!(item.id.is_some());
            prop_assert!(!item.title.is_empty());
        }

        #[test]
        fn prop_generated_kind_has_positive_limit(kind in generators::arb_catalog_kind()) {
            prop_assert!(kind.spec().limit >= 1);
        }
    }
}
