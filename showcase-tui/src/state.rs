//! Application state and view state definitions.

use crate::config::TuiConfig;
use crate::fetch::ListingFetch;
use crate::keys::InputMode;
use crate::nav::View;
use crate::theme::GalleryTheme;
use showcase_core::{
    resolve_thumbnail, selected_option, selector_options, sentinel_ratio, step_option,
    CatalogKind, CatalogSpec, Completion, FetchRequest, FetchToken, FilterKey, Item, ListingError,
    ListingPage, OptionSource, PagedList, ReferenceEntry, ReferenceKind, SelectOption, SelectorSpec, Viewport,
};
use std::collections::BTreeMap;

/// Reference lists and whether each has been answered yet.
#[derive(Debug, Clone, Default)]
pub struct ReferenceData {
    entries: BTreeMap<ReferenceKind, Vec<ReferenceEntry>>,
}

impl ReferenceData {
    pub fn entries(&self, kind: ReferenceKind) -> &[ReferenceEntry] {
        self.entries.get(&kind).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn is_loaded(&self, kind: ReferenceKind) -> bool {
        self.entries.contains_key(&kind)
    }

    /// Store a fetch result. Failures degrade to an empty list.
    pub fn apply(&mut self, kind: ReferenceKind, result: Result<Vec<ReferenceEntry>, ListingError>) {
        let entries = match result {
            Ok(entries) => entries,
            Err(err) => {
                tracing::warn!(?kind, error = %err, "reference data unavailable");
                Vec::new()
            }
        };
        self.entries.insert(kind, entries);
    }
}

/// State of the catalog view currently on screen.
pub struct CatalogState {
    pub list: PagedList<Item>,
    pub selected: Option<usize>,
    /// First visible row.
    pub offset: usize,
    /// Index into the catalog's selectors.
    pub focus: usize,
    pub search_input: String,
    search_before: String,
}

impl CatalogState {
    pub fn new(spec: CatalogSpec) -> Self {
        let mut list = PagedList::new(spec);
        list.attach_sentinel();
        Self {
            list,
            selected: None,
            offset: 0,
            focus: 0,
            search_input: String::new(),
            search_before: String::new(),
        }
    }

    pub fn kind(&self) -> CatalogKind {
        self.list.spec().kind
    }

    pub fn focused_selector(&self) -> Option<&SelectorSpec> {
        self.list.spec().selectors.get(self.focus)
    }

    pub fn selected_item(&self) -> Option<&Item> {
        self.selected.and_then(|index| self.list.items().get(index))
    }

    fn fetch(&self, request: FetchRequest) -> ListingFetch {
        ListingFetch {
            spec: self.list.spec().clone(),
            request,
        }
    }

    fn set_filter(&mut self, key: FilterKey, value: String) -> ListingFetch {
        let request = self.list.set_filter(key, value);
        self.selected = None;
        self.offset = 0;
        self.fetch(request)
    }

    /// Row that must stay visible: the selection, or the sentinel once the
    /// last item is selected.
    fn anchor_row(&self) -> Option<usize> {
        let selected = self.selected?;
        if selected + 1 >= self.list.items().len() {
            Some(self.list.items().len())
        } else {
            Some(selected)
        }
    }

    fn scroll_into_view(&mut self, height: usize) {
        let Some(anchor) = self.anchor_row() else {
            return;
        };
        let height = height.max(1);
        if anchor < self.offset {
            self.offset = anchor;
        } else if anchor >= self.offset + height {
            self.offset = anchor + 1 - height;
        }
        if let Some(selected) = self.selected {
            self.offset = self.offset.min(selected);
        }
    }

    fn clamp_selection(&mut self) {
        let len = self.list.items().len();
        if len == 0 {
            self.selected = None;
            self.offset = 0;
        } else if let Some(selected) = self.selected {
            self.selected = Some(selected.min(len - 1));
        }
        self.offset = self.offset.min(len);
    }
}

pub struct App {
    pub config: TuiConfig,
    pub theme: GalleryTheme,
    pub active_view: View,
    pub catalog: Option<CatalogState>,
    pub reference: ReferenceData,
    pub input_mode: InputMode,
    pub show_help: bool,
    /// Rows available to the item list in the current terminal.
    pub viewport_height: usize,
}

impl App {
    pub fn new(config: TuiConfig) -> Self {
        Self {
            config,
            theme: GalleryTheme::gallery(),
            active_view: View::Home,
            catalog: None,
            reference: ReferenceData::default(),
            input_mode: InputMode::Normal,
            show_help: false,
            viewport_height: 1,
        }
    }

    /// Show `view`. Entering a catalog builds a fresh list and returns its
    /// first fetch; the previous catalog's list is dropped.
    pub fn switch_view(&mut self, view: View) -> Option<ListingFetch> {
        if view == self.active_view && self.catalog.is_some() {
            return None;
        }
        self.active_view = view;
        self.input_mode = InputMode::Normal;
        self.catalog = None;

        let kind = view.catalog()?;
        let mut catalog = CatalogState::new(self.config.catalog_spec(kind));
        let request = catalog.list.start();
        let fetch = catalog.fetch(request);
        self.catalog = Some(catalog);
        tracing::info!(catalog = %kind, "catalog opened");
        Some(fetch)
    }

    /// Restart the current catalog from page 1 with cleared filters.
    pub fn reload(&mut self) -> Option<ListingFetch> {
        let view = self.active_view;
        self.catalog = None;
        self.switch_view(view)
    }

    pub fn apply_listing(
        &mut self,
        catalog: CatalogKind,
        token: FetchToken,
        result: Result<ListingPage<Item>, ListingError>,
    ) -> Option<Completion> {
        let Some(state) = self.catalog.as_mut().filter(|state| state.kind() == catalog) else {
            tracing::debug!(catalog = %catalog, "listing arrived for a closed catalog");
            return None;
        };
        let completion = state.list.complete(token, result);
        state.clamp_selection();
        if let Completion::Applied { received, appended } = completion {
            tracing::debug!(
                catalog = %catalog,
                received,
                appended,
                total = state.list.total(),
                "listing applied"
            );
        }
        Some(completion)
    }

    pub fn apply_reference(&mut self, kind: ReferenceKind, result: Result<Vec<ReferenceEntry>, ListingError>) {
        self.reference.apply(kind, result);
    }

    /// Options for a selector of the active catalog.
    pub fn options_for(&self, selector: &SelectorSpec) -> Vec<SelectOption> {
        let entries: &[ReferenceEntry] = match selector.source {
            OptionSource::Reference(kind) => self.reference.entries(kind),
            OptionSource::Static(_) => &[],
        };
        selector_options(selector, entries)
    }

    /// Label of the option currently chosen for `selector`.
    pub fn selected_label(&self, selector: &SelectorSpec) -> String {
        let value = self
            .catalog
            .as_ref()
            .map(|state| state.list.filters().get(selector.key))
            .unwrap_or("");
        let options = self.options_for(selector);
        selected_option(&options, value)
            .map(|option| option.label.clone())
            .unwrap_or_default()
    }

    pub fn focus_selector(&mut self, step: isize) {
        if let Some(state) = self.catalog.as_mut() {
            let count = state.list.spec().selectors.len() as isize;
            if count > 0 {
                state.focus = (state.focus as isize + step).rem_euclid(count) as usize;
            }
        }
    }

    /// Move the focused selector `step` options forward and refetch.
    pub fn step_focused_option(&mut self, step: isize) -> Option<ListingFetch> {
        let selector = *self.catalog.as_ref()?.focused_selector()?;
        let options = self.options_for(&selector);
        let state = self.catalog.as_mut()?;
        let current = state.list.filters().get(selector.key).to_string();
        let index = step_option(&options, &current, step)?;
        let value = options.get(index)?.value.clone();
        Some(state.set_filter(selector.key, value))
    }

    /// Reset the focused selector to "All".
    pub fn clear_focused_filter(&mut self) -> Option<ListingFetch> {
        let state = self.catalog.as_mut()?;
        let key = state.focused_selector()?.key;
        if state.list.filters().get(key).is_empty() {
            return None;
        }
        Some(state.set_filter(key, String::new()))
    }

    pub fn begin_search(&mut self) {
        if let Some(state) = self.catalog.as_mut() {
            state.search_before = state.search_input.clone();
            self.input_mode = InputMode::Search;
        }
    }

    /// Each keystroke refetches, as the search box drives the filter live.
    pub fn push_search_char(&mut self, c: char) -> Option<ListingFetch> {
        let state = self.catalog.as_mut()?;
        state.search_input.push(c);
        let value = state.search_input.clone();
        Some(state.set_filter(FilterKey::Search, value))
    }

    pub fn pop_search_char(&mut self) -> Option<ListingFetch> {
        let state = self.catalog.as_mut()?;
        state.search_input.pop()?;
        let value = state.search_input.clone();
        Some(state.set_filter(FilterKey::Search, value))
    }

    /// Keep the typed text; a later cancel reverts to it.
    pub fn finish_search(&mut self) {
        self.input_mode = InputMode::Normal;
        if let Some(state) = self.catalog.as_mut() {
            state.search_before = state.search_input.clone();
        }
    }

    /// Leave search mode restoring the text from before it was opened.
    /// Outside search mode this does nothing.
    pub fn cancel_search(&mut self) -> Option<ListingFetch> {
        if self.input_mode != InputMode::Search {
            return None;
        }
        self.input_mode = InputMode::Normal;
        let state = self.catalog.as_mut()?;
        if state.search_input == state.search_before {
            return None;
        }
        state.search_input = state.search_before.clone();
        let value = state.search_input.clone();
        Some(state.set_filter(FilterKey::Search, value))
    }

    pub fn select_next(&mut self) {
        self.move_selection(1);
    }

    pub fn select_previous(&mut self) {
        self.move_selection(-1);
    }

    pub fn page_down(&mut self) {
        self.move_selection(self.viewport_height.max(1) as isize);
    }

    pub fn page_up(&mut self) {
        self.move_selection(-(self.viewport_height.max(1) as isize));
    }

    fn move_selection(&mut self, delta: isize) {
        let height = self.viewport_height;
        let Some(state) = self.catalog.as_mut() else {
            return;
        };
        let len = state.list.items().len();
        if len == 0 {
            state.selected = None;
            return;
        }
        let next = match state.selected {
            None if delta >= 0 => 0,
            None => len - 1,
            Some(current) => (current as isize + delta).clamp(0, len as isize - 1) as usize,
        };
        state.selected = Some(next);
        state.scroll_into_view(height);
    }

    pub fn set_viewport_height(&mut self, height: usize) {
        self.viewport_height = height.max(1);
        if let Some(state) = self.catalog.as_mut() {
            state.scroll_into_view(self.viewport_height);
        }
    }

    /// Current viewport over the catalog rows.
    pub fn viewport(&self) -> Viewport {
        let offset = self.catalog.as_ref().map(|state| state.offset).unwrap_or(0);
        Viewport::new(offset, self.viewport_height)
    }

    /// Check whether the sentinel row below the last item is on screen and
    /// fetch the next page when it just came into view.
    pub fn poll_sentinel(&mut self) -> Option<ListingFetch> {
        let viewport = self.viewport();
        let state = self.catalog.as_mut()?;
        let ratio = sentinel_ratio(viewport, state.list.items().len(), 1);
        let request = state.list.on_sentinel(ratio)?;
        Some(state.fetch(request))
    }

    /// Thumbnail URL for an item, resolved against the configured image base.
    pub fn thumbnail_url(&self, item: &Item) -> String {
        resolve_thumbnail(
            item.thumbnail.as_deref(),
            item.thumbnail_public_url.as_deref(),
            self.config.image_base(),
        )
    }
}
