//! Event types for the TUI event loop.

use crossterm::event::KeyEvent;
use showcase_core::{CatalogKind, FetchToken, Item, ListingError, ListingPage, ReferenceEntry, ReferenceKind};

#[derive(Debug, Clone)]
pub enum TuiEvent {
    Input(KeyEvent),
    Resize { width: u16, height: u16 },
    /// A catalog page fetch finished.
    Listing {
        catalog: CatalogKind,
        token: FetchToken,
        result: Result<ListingPage<Item>, ListingError>,
    },
    /// A reference-data fetch finished.
    Reference {
        kind: ReferenceKind,
        result: Result<Vec<ReferenceEntry>, ListingError>,
    },
}
