//! Reusable widget components.

pub mod detail;
pub mod filter;
pub mod status;

pub use detail::{CardRow, ItemCard};
pub use filter::{FilterBar, FilterField};
pub use status::StatusTile;
