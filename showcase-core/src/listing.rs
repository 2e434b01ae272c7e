//! Listing API contract: query parameters, response extraction, and the
//! async traits client crates implement.

use crate::catalog::{CatalogSpec, ReferenceKind, REFERENCE_PAGE_SIZE};
use crate::error::ListingError;
use crate::filter::{FilterKey, FilterState};
use crate::item::{Item, ItemId, ReferenceEntry};
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;

/// One page of results as returned by the listing API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingPage<I> {
    pub items: Vec<I>,
    /// Count of all matching items server-side.
    pub total: u64,
}

impl<I> ListingPage<I> {
    pub fn new(items: Vec<I>, total: u64) -> Self {
        Self { items, total }
    }
}

/// A [`FilterState`] translated to listing API query parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingQuery {
    pub page: u32,
    pub limit: u32,
    pub keyword: String,
    /// Selector and fixed parameters. Empty selectors are omitted.
    pub params: Vec<(&'static str, String)>,
}

impl ListingQuery {
    pub fn from_state(spec: &CatalogSpec, state: &FilterState) -> Self {
        let mut params: Vec<(&'static str, String)> = state
            .active()
            .filter(|(key, _)| *key != FilterKey::Search)
            .map(|(key, value)| (key.query_name(), query_value(key, value)))
            .collect();

        for (name, value) in &spec.fixed_params {
            params.retain(|(existing, _)| existing != name);
            params.push((*name, value.to_string()));
        }

        Self {
            page: state.page(),
            limit: state.limit(),
            keyword: state.search().to_string(),
            params,
        }
    }

    /// Query used for reference-data listings.
    pub fn reference() -> Self {
        Self {
            page: 1,
            limit: REFERENCE_PAGE_SIZE,
            keyword: String::new(),
            params: Vec::new(),
        }
    }

    /// Look up a parameter by its wire name.
    pub fn get(&self, name: &str) -> Option<String> {
        match name {
            "page" => Some(self.page.to_string()),
            "limit" => Some(self.limit.to_string()),
            "keyword" => Some(self.keyword.clone()),
            _ => self
                .params
                .iter()
                .find(|(key, _)| *key == name)
                .map(|(_, value)| value.clone()),
        }
    }

    /// Flattened `(name, value)` pairs in wire order.
    pub fn to_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = vec![
            ("page".to_string(), self.page.to_string()),
            ("limit".to_string(), self.limit.to_string()),
            ("keyword".to_string(), self.keyword.clone()),
        ];
        pairs.extend(
            self.params
                .iter()
                .map(|(name, value)| (name.to_string(), value.clone())),
        );
        pairs
    }
}

fn query_value(key: FilterKey, value: &str) -> String {
    if key.is_numeric_id() {
        if let Ok(number) = value.trim().parse::<i64>() {
            return number.to_string();
        }
    }
    value.to_string()
}

/// Locate the item array in a listing response body.
///
/// Accepted shapes, in order: `{"data": {"<key>": [...]}}`, a bare array,
/// `{"data": [...]}`. Anything else yields `None`.
pub fn extract_items<'a>(body: &'a Value, key: &str) -> Option<&'a Vec<Value>> {
    body.get("data")
        .and_then(|data| data.get(key))
        .and_then(Value::as_array)
        .or_else(|| body.as_array())
        .or_else(|| body.get("data").and_then(Value::as_array))
}

fn extract_total(body: &Value) -> Option<u64> {
    let total = body.get("data")?.get("total")?;
    match total {
        Value::Number(n) => n.as_u64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// Decode a listing response body into a page of items.
///
/// A missing or zero total falls back to the number of returned items.
pub fn extract_page<I: DeserializeOwned>(
    body: &Value,
    key: &str,
) -> Result<ListingPage<I>, ListingError> {
    let items: Vec<I> = match extract_items(body, key) {
        Some(raw) => raw
            .iter()
            .map(|value| I::deserialize(value))
            .collect::<Result<_, _>>()?,
        None => Vec::new(),
    };
    let total = extract_total(body)
        .filter(|total| *total > 0)
        .unwrap_or(items.len() as u64);
    Ok(ListingPage { items, total })
}

/// Decode a reference-data response. Rows without an id are skipped.
pub fn extract_reference(body: &Value, kind: ReferenceKind) -> Vec<ReferenceEntry> {
    let Some(rows) = extract_items(body, kind.response_key()) else {
        return Vec::new();
    };
    rows.iter()
        .filter_map(|row| {
            let id = ItemId::deserialize(row.get("id")?).ok()?;
            let label = row
                .get(kind.label_field())
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_string();
            Some(ReferenceEntry { id, label })
        })
        .collect()
}

/// Source of catalog pages.
#[async_trait]
pub trait ListingApi: Send + Sync {
    async fn fetch_listing(
        &self,
        spec: &CatalogSpec,
        query: &ListingQuery,
    ) -> Result<ListingPage<Item>, ListingError>;
}

/// Source of reference data for selector options.
#[async_trait]
pub trait ReferenceApi: Send + Sync {
    async fn fetch_reference(&self, kind: ReferenceKind) -> Result<Vec<ReferenceEntry>, ListingError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::CatalogKind;
    use serde_json::json;

    #[test]
    fn test_query_from_default_state() {
        let spec = CatalogKind::Websites.spec();
        let state = FilterState::new(spec.limit);
        let query = ListingQuery::from_state(&spec, &state);

        assert_eq!(query.page, 1);
        assert_eq!(query.limit, 6);
        assert_eq!(query.keyword, "");
        assert_eq!(query.params, vec![("type", "WEBSITE".to_string())]);
    }

    #[test]
    fn test_query_sends_numeric_ids_as_numbers() {
        let spec = CatalogKind::Websites.spec();
        let mut state = FilterState::new(spec.limit);
        state.set(FilterKey::ClientId, "007");
        state.set(FilterKey::Search, "shop");
        let query = ListingQuery::from_state(&spec, &state);

        assert_eq!(query.get("client_id").as_deref(), Some("7"));
        assert_eq!(query.get("keyword").as_deref(), Some("shop"));
        assert_eq!(query.get("technology_id"), None);
    }

    #[test]
    fn test_fixed_params_override_user_values() {
        let spec = CatalogKind::Reels.spec();
        let mut state = FilterState::new(spec.limit);
        state.set(FilterKey::Type, "LOGO");
        let query = ListingQuery::from_state(&spec, &state);
        assert_eq!(query.get("type").as_deref(), Some("REEL"));
    }

    #[test]
    fn test_pairs_wire_order() {
        let spec = CatalogKind::Creatives.spec();
        let mut state = FilterState::new(spec.limit);
        state.set(FilterKey::Type, "LOGO");
        let pairs = ListingQuery::from_state(&spec, &state).to_pairs();
        let names: Vec<&str> = pairs.iter().map(|(name, _)| name.as_str()).collect();
        assert_eq!(names, vec!["page", "limit", "keyword", "type"]);
    }

    #[test]
    fn test_extract_nested_shape() {
        let body = json!({"data": {"websites": [{"id": 1, "title": "A"}], "total": 13}});
        let page: ListingPage<Item> = extract_page(&body, "websites").unwrap();
        assert_eq!(page.items.len(), 1);
        assert_eq!(page.total, 13);
    }

    #[test]
    fn test_extract_bare_array_shape() {
        let body = json!([{"id": 1, "title": "A"}, {"id": 2, "title": "B"}]);
        let page: ListingPage<Item> = extract_page(&body, "videos").unwrap();
        assert_eq!(page.items.len(), 2);
        assert_eq!(page.total, 2);
    }

    #[test]
    fn test_extract_data_array_shape() {
        let body = json!({"data": [{"id": 1, "name": "Logo"}]});
        let page: ListingPage<Item> = extract_page(&body, "creatives").unwrap();
        assert_eq!(page.items[0].title, "Logo");
    }

    #[test]
    fn test_extract_unknown_shape_is_empty() {
        let body = json!({"message": "ok"});
        let page: ListingPage<Item> = extract_page(&body, "websites").unwrap();
        assert!(page.items.is_empty());
        assert_eq!(page.total, 0);
    }

    #[test]
    fn test_zero_total_falls_back_to_item_count() {
        let body = json!({"data": {"videos": [{"id": 1}, {"id": 2}, {"id": 3}], "total": 0}});
        let page: ListingPage<Item> = extract_page(&body, "videos").unwrap();
        assert_eq!(page.total, 3);
    }

    #[test]
    fn test_string_total_is_parsed() {
        let body = json!({"data": {"videos": [], "total": "42"}});
        let page: ListingPage<Item> = extract_page(&body, "videos").unwrap();
        assert_eq!(page.total, 42);
    }

    #[test]
    fn test_malformed_item_is_decode_error() {
        let body = json!({"data": {"websites": [{"id": 1, "thumbnail": 12}]}});
        let result: Result<ListingPage<Item>, _> = extract_page(&body, "websites");
        assert!(matches!(result, Err(ListingError::Decode { .. })));
    }

    #[test]
    fn test_extract_reference_rows() {
        let body = json!({"data": {"clients": [
            {"id": 2, "client_name": "Beta"},
            {"client_name": "No id"},
            {"id": 1, "client_name": "alpha"}
        ]}});
        let rows = extract_reference(&body, ReferenceKind::Clients);
        assert_eq!(
            rows,
            vec![ReferenceEntry::new(2, "Beta"), ReferenceEntry::new(1, "alpha")]
        );
    }

    #[test]
    fn test_extract_reference_uses_kind_label_field() {
        let body = json!({"data": {"technologies": [{"id": 5, "name": "Rust"}]}});
        let rows = extract_reference(&body, ReferenceKind::Technologies);
        assert_eq!(rows, vec![ReferenceEntry::new(5, "Rust")]);
    }
}
