//! SHOWCASE Core - Catalog Types and List Controller
//!
//! Pure data structures and state machines shared by the client crates.
//! Nothing in here performs I/O: fetches are described as [`FetchRequest`]s
//! and executed by whoever implements [`ListingApi`].

pub mod catalog;
pub mod controller;
pub mod date;
pub mod error;
pub mod filter;
pub mod item;
pub mod listing;
pub mod options;
pub mod sensor;
pub mod thumbnail;

pub use catalog::{CatalogKind, CatalogSpec, DateField, OptionSource, ReferenceKind, SelectorSpec};
pub use controller::{Completion, FetchRequest, FetchToken, ListIndicator, PagedList, ResultSet};
pub use date::format_date_dmy;
pub use error::ListingError;
pub use filter::{FilterKey, FilterState};
pub use item::{Item, ItemId, ReferenceEntry};
pub use listing::{
    extract_items, extract_page, extract_reference, ListingApi, ListingPage, ListingQuery, ReferenceApi,
};
pub use options::{derive_options, selected_option, selector_options, step_option, SelectOption};
pub use sensor::{sentinel_ratio, SentinelObserver, Viewport, SENTINEL_THRESHOLD};
pub use thumbnail::{resolve_thumbnail, PLACEHOLDER_PATH};
