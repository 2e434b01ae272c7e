//! Navigation and view switching utilities.

use serde::{Deserialize, Serialize};
use showcase_core::CatalogKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum View {
    Home,
    Websites,
    LandingPages,
    Reels,
    CorporateVideos,
    Creatives,
}

impl View {
    pub fn title(&self) -> &'static str {
        match self {
            View::Home => "Home",
            View::Websites => "Websites",
            View::LandingPages => "Landing Pages",
            View::Reels => "Reels",
            View::CorporateVideos => "Corporate Videos",
            View::Creatives => "Creatives",
        }
    }

    pub fn all() -> &'static [View] {
        &[
            View::Home,
            View::Websites,
            View::LandingPages,
            View::Reels,
            View::CorporateVideos,
            View::Creatives,
        ]
    }

    /// Catalog listed by this view, if any.
    pub fn catalog(&self) -> Option<CatalogKind> {
        match self {
            View::Home => None,
            View::Websites => Some(CatalogKind::Websites),
            View::LandingPages => Some(CatalogKind::LandingPages),
            View::Reels => Some(CatalogKind::Reels),
            View::CorporateVideos => Some(CatalogKind::CorporateVideos),
            View::Creatives => Some(CatalogKind::Creatives),
        }
    }

    pub fn from_catalog(kind: CatalogKind) -> View {
        match kind {
            CatalogKind::Websites => View::Websites,
            CatalogKind::LandingPages => View::LandingPages,
            CatalogKind::Reels => View::Reels,
            CatalogKind::CorporateVideos => View::CorporateVideos,
            CatalogKind::Creatives => View::Creatives,
        }
    }

    pub fn index(&self) -> usize {
        Self::all()
            .iter()
            .position(|v| v == self)
            .unwrap_or(0)
    }

    pub fn from_index(index: usize) -> Option<View> {
        Self::all().get(index).copied()
    }

    pub fn next(&self) -> View {
        let all = Self::all();
        all[(self.index() + 1) % all.len()]
    }

    pub fn previous(&self) -> View {
        let idx = self.index();
        let all = Self::all();
        let prev = if idx == 0 { all.len() - 1 } else { idx - 1 };
        all[prev]
    }
}
