//! Per-catalog configuration.
//!
//! Every catalog page is the same paginated list with a different endpoint,
//! response key, page size and set of selectors. [`CatalogSpec`] captures
//! those differences so one [`PagedList`](crate::PagedList) serves them all.

use crate::filter::FilterKey;
use serde::{Deserialize, Serialize};
use std::fmt;

pub const DEFAULT_PAGE_SIZE: u32 = 6;
pub const VIDEO_PAGE_SIZE: u32 = 10;

/// Page size used for reference-data fetches; treated as "fetch all".
pub const REFERENCE_PAGE_SIZE: u32 = 100;

const FORMAT_OPTIONS: &[(&str, &str)] = &[
    ("LANDSCAPE", "Landscape"),
    ("PORTRAIT", "Portrait"),
    ("SQUARE", "Square"),
];

const CREATIVE_TYPE_OPTIONS: &[(&str, &str)] = &[("BROCHURE", "Brochure"), ("LOGO", "Logo")];

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CatalogKind {
    Websites,
    LandingPages,
    Reels,
    CorporateVideos,
    Creatives,
}

impl CatalogKind {
    pub fn all() -> &'static [CatalogKind] {
        &[
            CatalogKind::Websites,
            CatalogKind::LandingPages,
            CatalogKind::Reels,
            CatalogKind::CorporateVideos,
            CatalogKind::Creatives,
        ]
    }

    pub fn slug(&self) -> &'static str {
        match self {
            CatalogKind::Websites => "websites",
            CatalogKind::LandingPages => "landing-pages",
            CatalogKind::Reels => "reels",
            CatalogKind::CorporateVideos => "corporate-videos",
            CatalogKind::Creatives => "creatives",
        }
    }

    /// Built-in configuration for this catalog.
    pub fn spec(&self) -> CatalogSpec {
        let client = SelectorSpec {
            key: FilterKey::ClientId,
            category: "Clients",
            source: OptionSource::Reference(ReferenceKind::Clients),
        };
        let technology = SelectorSpec {
            key: FilterKey::TechnologyId,
            category: "Technologies",
            source: OptionSource::Reference(ReferenceKind::Technologies),
        };
        let format = SelectorSpec {
            key: FilterKey::Format,
            category: "Formats",
            source: OptionSource::Static(FORMAT_OPTIONS),
        };

        match self {
            CatalogKind::Websites => CatalogSpec {
                kind: *self,
                title: "Our Websites",
                noun: "websites",
                endpoint: "websites/listing",
                response_key: "websites",
                limit: DEFAULT_PAGE_SIZE,
                search_placeholder: "Search by title",
                selectors: vec![client, technology],
                fixed_params: vec![("type", "WEBSITE")],
                date_field: DateField::LaunchDate,
            },
            CatalogKind::LandingPages => CatalogSpec {
                kind: *self,
                title: "Landing Pages",
                noun: "landing pages",
                endpoint: "websites/listing",
                response_key: "websites",
                limit: DEFAULT_PAGE_SIZE,
                search_placeholder: "Search by title",
                selectors: vec![client, technology],
                fixed_params: vec![("type", "LANDING_PAGE")],
                date_field: DateField::LaunchDate,
            },
            CatalogKind::Reels => CatalogSpec {
                kind: *self,
                title: "Our Reels",
                noun: "reels",
                endpoint: "videos/listing",
                response_key: "videos",
                limit: VIDEO_PAGE_SIZE,
                search_placeholder: "Search by tags",
                selectors: vec![client, format],
                fixed_params: vec![("type", "REEL")],
                date_field: DateField::CreatedAt,
            },
            CatalogKind::CorporateVideos => CatalogSpec {
                kind: *self,
                title: "Corporate Videos",
                noun: "corporate videos",
                endpoint: "videos/listing",
                response_key: "videos",
                limit: VIDEO_PAGE_SIZE,
                search_placeholder: "Search by tags",
                selectors: vec![client, format],
                fixed_params: vec![("type", "CORPORATE_VIDEO")],
                date_field: DateField::CreatedAt,
            },
            CatalogKind::Creatives => CatalogSpec {
                kind: *self,
                title: "Creatives",
                noun: "creatives",
                endpoint: "creatives/listing",
                response_key: "creatives",
                limit: DEFAULT_PAGE_SIZE,
                search_placeholder: "Search by name",
                selectors: vec![SelectorSpec {
                    key: FilterKey::Type,
                    category: "Types",
                    source: OptionSource::Static(CREATIVE_TYPE_OPTIONS),
                }],
                fixed_params: Vec::new(),
                date_field: DateField::CreatedAt,
            },
        }
    }
}

impl fmt::Display for CatalogKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

/// Which date column a catalog shows on its cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateField {
    LaunchDate,
    CreatedAt,
}

impl DateField {
    /// Text shown when the item has no usable date.
    pub fn missing_label(&self) -> &'static str {
        match self {
            DateField::LaunchDate => "No launch date",
            DateField::CreatedAt => "No creation date",
        }
    }
}

/// Reference lists fetched once to populate categorical selectors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ReferenceKind {
    Clients,
    Technologies,
}

impl ReferenceKind {
    pub fn all() -> &'static [ReferenceKind] {
        &[ReferenceKind::Clients, ReferenceKind::Technologies]
    }

    pub fn endpoint(&self) -> &'static str {
        match self {
            ReferenceKind::Clients => "clients/listing",
            ReferenceKind::Technologies => "technologies/listing",
        }
    }

    pub fn response_key(&self) -> &'static str {
        match self {
            ReferenceKind::Clients => "clients",
            ReferenceKind::Technologies => "technologies",
        }
    }

    /// Field holding the display label in each reference row.
    pub fn label_field(&self) -> &'static str {
        match self {
            ReferenceKind::Clients => "client_name",
            ReferenceKind::Technologies => "name",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionSource {
    /// Options come from a reference-data fetch.
    Reference(ReferenceKind),
    /// Fixed `(value, label)` pairs.
    Static(&'static [(&'static str, &'static str)]),
}

/// A categorical selector shown above a catalog list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectorSpec {
    pub key: FilterKey,
    /// Plural category name used for the synthetic "All <Category>" option.
    pub category: &'static str,
    pub source: OptionSource,
}

/// Everything that distinguishes one catalog list from another.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogSpec {
    pub kind: CatalogKind,
    pub title: &'static str,
    /// Plural noun for status lines ("No more reels to load").
    pub noun: &'static str,
    /// Path relative to the API base URL.
    pub endpoint: &'static str,
    /// Key the item list is nested under in the response body.
    pub response_key: &'static str,
    pub limit: u32,
    pub search_placeholder: &'static str,
    pub selectors: Vec<SelectorSpec>,
    /// Parameters sent with every request that users cannot change.
    pub fixed_params: Vec<(&'static str, &'static str)>,
    pub date_field: DateField,
}

impl CatalogSpec {
    /// Override the page size. Zero is ignored.
    pub fn with_limit(mut self, limit: u32) -> Self {
        if limit > 0 {
            self.limit = limit;
        }
        self
    }

    /// Whether users can set `key` on this catalog.
    pub fn accepts(&self, key: FilterKey) -> bool {
        key == FilterKey::Search || self.selector(key).is_some()
    }

    pub fn selector(&self, key: FilterKey) -> Option<&SelectorSpec> {
        self.selectors.iter().find(|selector| selector.key == key)
    }

    /// Reference lists this catalog's selectors depend on.
    pub fn reference_kinds(&self) -> impl Iterator<Item = ReferenceKind> + '_ {
        self.selectors.iter().filter_map(|selector| match selector.source {
            OptionSource::Reference(kind) => Some(kind),
            OptionSource::Static(_) => None,
        })
    }
}
