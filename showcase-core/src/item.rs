//! Catalog item records.

use crate::catalog::DateField;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Server-side identifier. The listing API emits both numeric and string ids.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ItemId {
    Number(i64),
    Text(String),
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ItemId::Number(n) => write!(f, "{}", n),
            ItemId::Text(s) => f.write_str(s),
        }
    }
}

/// One card in a catalog list.
///
/// Websites and videos carry a `title`, creatives a `name`; both land in
/// [`Item::title`]. Fields the client does not display are dropped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawItem")]
pub struct Item {
    pub id: Option<ItemId>,
    pub title: String,
    pub thumbnail: Option<String>,
    pub thumbnail_public_url: Option<String>,
    pub launch_date: Option<String>,
    pub created_at: Option<String>,
    pub kind: Option<String>,
    pub file_public_url: Option<String>,
}

impl Item {
    pub fn new(id: impl Into<ItemId>, title: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            title: title.into(),
            thumbnail: None,
            thumbnail_public_url: None,
            launch_date: None,
            created_at: None,
            kind: None,
            file_public_url: None,
        }
    }

    pub fn with_thumbnail(mut self, thumbnail: impl Into<String>) -> Self {
        self.thumbnail = Some(thumbnail.into());
        self
    }

    pub fn with_created_at(mut self, created_at: impl Into<String>) -> Self {
        self.created_at = Some(created_at.into());
        self
    }

    pub fn with_launch_date(mut self, launch_date: impl Into<String>) -> Self {
        self.launch_date = Some(launch_date.into());
        self
    }

    /// Raw date string for the catalog's date column.
    pub fn date(&self, field: DateField) -> Option<&str> {
        match field {
            DateField::LaunchDate => self.launch_date.as_deref(),
            DateField::CreatedAt => self.created_at.as_deref(),
        }
    }
}

impl From<i64> for ItemId {
    fn from(value: i64) -> Self {
        ItemId::Number(value)
    }
}

impl From<&str> for ItemId {
    fn from(value: &str) -> Self {
        ItemId::Text(value.to_string())
    }
}

#[derive(Deserialize)]
struct RawItem {
    #[serde(default)]
    id: Option<ItemId>,
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    thumbnail: Option<String>,
    #[serde(default)]
    thumbnail_public_url: Option<String>,
    #[serde(default)]
    launch_date: Option<String>,
    #[serde(default)]
    created_at: Option<String>,
    #[serde(default, rename = "type")]
    kind: Option<String>,
    #[serde(default)]
    file_public_url: Option<String>,
}

impl From<RawItem> for Item {
    fn from(raw: RawItem) -> Self {
        Self {
            id: raw.id,
            title: raw.title.or(raw.name).unwrap_or_default(),
            thumbnail: raw.thumbnail,
            thumbnail_public_url: raw.thumbnail_public_url,
            launch_date: raw.launch_date,
            created_at: raw.created_at,
            kind: raw.kind,
            file_public_url: raw.file_public_url,
        }
    }
}

/// A row of reference data (a client, a technology) used to build selector options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReferenceEntry {
    pub id: ItemId,
    pub label: String,
}

impl ReferenceEntry {
    pub fn new(id: impl Into<ItemId>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_website_item_uses_title() {
        let item: Item = serde_json::from_value(json!({
            "id": 7,
            "title": "Acme Store",
            "thumbnail": "uploads/acme.png",
            "launch_date": "2024-03-01",
            "unused": {"nested": true}
        }))
        .unwrap();
        assert_eq!(item.id, Some(ItemId::Number(7)));
        assert_eq!(item.title, "Acme Store");
        assert_eq!(item.date(DateField::LaunchDate), Some("2024-03-01"));
        assert_eq!(item.date(DateField::CreatedAt), None);
    }

    #[test]
    fn test_creative_item_falls_back_to_name() {
        let item: Item = serde_json::from_value(json!({
            "id": "c-1",
            "name": "Spring Brochure",
            "type": "BROCHURE",
            "file_public_url": "https://cdn.example.com/brochure.pdf"
        }))
        .unwrap();
        assert_eq!(item.id, Some(ItemId::Text("c-1".to_string())));
        assert_eq!(item.title, "Spring Brochure");
        assert_eq!(item.kind.as_deref(), Some("BROCHURE"));
    }

    #[test]
    fn test_title_wins_over_name() {
        let item: Item = serde_json::from_value(json!({"title": "T", "name": "N"})).unwrap();
        assert_eq!(item.title, "T");
    }

    #[test]
    fn test_missing_fields_are_tolerated() {
        let item: Item = serde_json::from_value(json!({})).unwrap();
        assert!(item.id.is_none());
        assert!(item.title.is_empty());
        assert!(item.thumbnail.is_none());
    }

    #[test]
    fn test_null_thumbnail_is_none() {
        let item: Item = serde_json::from_value(json!({"id": 1, "thumbnail": null})).unwrap();
        assert!(item.thumbnail.is_none());
    }
}
