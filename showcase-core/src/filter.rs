//! Filter state driving a catalog listing.
//!
//! A [`FilterState`] is the full set of user-chosen search, selector and
//! pagination parameters for one list. Every filter change resets the page
//! to 1; only the controller's page advance moves it forward.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Keys a user can change on a catalog list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FilterKey {
    /// Free-text search, sent to the API as `keyword`.
    Search,
    ClientId,
    TechnologyId,
    Format,
    Type,
}

impl FilterKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            FilterKey::Search => "search",
            FilterKey::ClientId => "client_id",
            FilterKey::TechnologyId => "technology_id",
            FilterKey::Format => "format",
            FilterKey::Type => "type",
        }
    }

    /// Name of the query parameter this key is sent as.
    pub fn query_name(&self) -> &'static str {
        match self {
            FilterKey::Search => "keyword",
            other => other.as_str(),
        }
    }

    /// Identifier-valued keys are sent as numbers when they parse as one.
    pub fn is_numeric_id(&self) -> bool {
        matches!(self, FilterKey::ClientId | FilterKey::TechnologyId)
    }

    pub fn all() -> &'static [FilterKey] {
        &[
            FilterKey::Search,
            FilterKey::ClientId,
            FilterKey::TechnologyId,
            FilterKey::Format,
            FilterKey::Type,
        ]
    }
}

impl fmt::Display for FilterKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FilterKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FilterKey::all()
            .iter()
            .copied()
            .find(|key| key.as_str() == s || key.query_name() == s)
            .ok_or_else(|| format!("unknown filter key: {}", s))
    }
}

/// Current search/selector values plus page and page size.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterState {
    values: BTreeMap<FilterKey, String>,
    page: u32,
    limit: u32,
}

impl FilterState {
    /// Defaults: page 1, empty search, no selectors. A zero limit is bumped to 1.
    pub fn new(limit: u32) -> Self {
        Self {
            values: BTreeMap::new(),
            page: 1,
            limit: limit.max(1),
        }
    }

    /// Current value for `key`; empty means "no filter".
    pub fn get(&self, key: FilterKey) -> &str {
        self.values.get(&key).map(String::as_str).unwrap_or("")
    }

    pub fn search(&self) -> &str {
        self.get(FilterKey::Search)
    }

    /// Store a new value and go back to the first page.
    pub fn set(&mut self, key: FilterKey, value: impl Into<String>) {
        let value = value.into();
        if value.is_empty() {
            self.values.remove(&key);
        } else {
            self.values.insert(key, value);
        }
        self.page = 1;
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn limit(&self) -> u32 {
        self.limit
    }

    /// Number of items covered by the pages requested so far.
    pub fn requested_span(&self) -> u64 {
        u64::from(self.page) * u64::from(self.limit)
    }

    pub(crate) fn next_page(&mut self) {
        self.page = self.page.saturating_add(1);
    }

    /// Non-empty values, in key order.
    pub fn active(&self) -> impl Iterator<Item = (FilterKey, &str)> {
        self.values.iter().map(|(key, value)| (*key, value.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_starts_on_first_page() {
        let state = FilterState::new(6);
        assert_eq!(state.page(), 1);
        assert_eq!(state.limit(), 6);
        assert_eq!(state.search(), "");
        assert_eq!(state.active().count(), 0);
    }

    #[test]
    fn test_zero_limit_is_clamped() {
        assert_eq!(FilterState::new(0).limit(), 1);
    }

    #[test]
    fn test_set_resets_page() {
        let mut state = FilterState::new(6);
        state.next_page();
        state.next_page();
        assert_eq!(state.page(), 3);

        state.set(FilterKey::ClientId, "4");
        assert_eq!(state.page(), 1);
        assert_eq!(state.get(FilterKey::ClientId), "4");
    }

    #[test]
    fn test_empty_value_clears_key() {
        let mut state = FilterState::new(6);
        state.set(FilterKey::Format, "PORTRAIT");
        state.set(FilterKey::Format, "");
        assert_eq!(state.get(FilterKey::Format), "");
        assert_eq!(state.active().count(), 0);
    }

    #[test]
    fn test_filter_key_parses_both_names() {
        assert_eq!("search".parse::<FilterKey>(), Ok(FilterKey::Search));
        assert_eq!("keyword".parse::<FilterKey>(), Ok(FilterKey::Search));
        assert_eq!("technology_id".parse::<FilterKey>(), Ok(FilterKey::TechnologyId));
        assert!("colour".parse::<FilterKey>().is_err());
    }
}

#[cfg(test)]
mod prop_tests {
    use super::*;
    use proptest::prelude::*;

    fn arb_key() -> impl Strategy<Value = FilterKey> {
        prop::sample::select(FilterKey::all().to_vec())
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        /// Property: any filter change lands on page 1
        #[test]
        fn prop_set_always_resets_page(
            advances in 0u32..20,
            key in arb_key(),
            value in "[a-zA-Z0-9 ]{0,12}",
        ) {
            let mut state = FilterState::new(6);
            for _ in 0..advances {
                state.next_page();
            }
            state.set(key, value);
            prop_assert_eq!(state.page(), 1);
        }
    }
}
