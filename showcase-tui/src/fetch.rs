//! Background fetch tasks.
//!
//! Every [`FetchRequest`] issued by a list controller runs on its own task
//! and reports back through the event channel. Tasks are never cancelled;
//! a result that arrives after the user moved on is dropped by the
//! controller's token check, or by the app when the catalog is gone.

use crate::events::TuiEvent;
use showcase_core::{CatalogSpec, FetchRequest, ListingApi, ReferenceApi, ReferenceKind};
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

/// A fetch paired with the catalog it was issued for.
#[derive(Debug, Clone)]
pub struct ListingFetch {
    pub spec: CatalogSpec,
    pub request: FetchRequest,
}

pub fn spawn_listing(
    api: Arc<dyn ListingApi>,
    fetch: ListingFetch,
    sender: mpsc::Sender<TuiEvent>,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        let ListingFetch { spec, request } = fetch;
        tracing::debug!(
            catalog = %spec.kind,
            page = request.query.page,
            keyword = %request.query.keyword,
            "fetching listing"
        );
        let result = api.fetch_listing(&spec, &request.query).await;
        let event = TuiEvent::Listing {
            catalog: spec.kind,
            token: request.token,
            result,
        };
        if sender.send(event).await.is_err() {
            tracing::debug!(catalog = %spec.kind, "event loop closed before listing arrived");
        }
    })
}

pub fn spawn_reference(
    api: Arc<dyn ReferenceApi>,
    kind: ReferenceKind,
    sender: mpsc::Sender<TuiEvent>,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        let result = api.fetch_reference(kind).await;
        if sender.send(TuiEvent::Reference { kind, result }).await.is_err() {
            tracing::debug!(?kind, "event loop closed before reference data arrived");
        }
    })
}

/// Fetch every reference list once.
pub fn spawn_all_references(api: Arc<dyn ReferenceApi>, sender: &mpsc::Sender<TuiEvent>) {
    for kind in ReferenceKind::all() {
        spawn_reference(Arc::clone(&api), *kind, sender.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use showcase_core::{CatalogKind, PagedList};
    use showcase_test_utils::{fixtures, Item, ListingError};

    #[tokio::test]
    async fn test_listing_result_is_sent_with_token() {
        let api = Arc::new(fixtures::thirteen_websites());
        let (tx, mut rx) = mpsc::channel(4);
        let spec = CatalogKind::Websites.spec();
        let mut list: PagedList<Item> = PagedList::new(spec.clone());
        let request = list.start();
        let token = request.token;

        spawn_listing(api.clone(), ListingFetch { spec, request }, tx)
            .await
            .unwrap();

        match rx.recv().await {
            Some(TuiEvent::Listing {
                catalog,
                token: got,
                result,
            }) => {
                assert_eq!(catalog, CatalogKind::Websites);
                assert_eq!(got, token);
                assert_eq!(result.unwrap().items.len(), 6);
            }
            other => panic!("unexpected event: {:?}", other),
        }
        assert_eq!(api.call_count(), 1);
    }

    #[tokio::test]
    async fn test_reference_failure_is_forwarded() {
        let api = Arc::new(
            showcase_test_utils::MockReferenceApi::new()
                .with_failure(ReferenceKind::Clients, ListingError::transport("down")),
        );
        let (tx, mut rx) = mpsc::channel(4);
        spawn_reference(api, ReferenceKind::Clients, tx).await.unwrap();
        assert!(matches!(
            rx.recv().await,
            Some(TuiEvent::Reference {
                kind: ReferenceKind::Clients,
                result: Err(_)
            })
        ));
    }

    #[tokio::test]
    async fn test_all_references_requested() {
        let api = Arc::new(fixtures::reference_api());
        let (tx, mut rx) = mpsc::channel(4);
        spawn_all_references(api, &tx);
        drop(tx);

        let mut kinds = Vec::new();
        while let Some(event) = rx.recv().await {
            if let TuiEvent::Reference { kind, result } = event {
                assert!(result.is_ok());
                kinds.push(kind);
            }
        }
        kinds.sort();
        assert_eq!(kinds, vec![ReferenceKind::Clients, ReferenceKind::Technologies]);
    }
}
