//! Catalog Session Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::filters::{self, FilterConfiguration, FilterPatch, SortKey};
use crate::models::CatalogItem;
use crate::sync::{SyncCell, SyncState};
use crate::view::{self, RenderState};

/// State owned by one products view
#[derive(Clone, Debug, Store)]
pub struct CatalogSession {
    /// Current filter selection
    pub filters: FilterConfiguration,
    pub sort_by: SortKey,
    /// Whether the filter drawer is visible
    pub filter_open: bool,
    /// 1-based page of the grid
    pub page: usize,
    pub page_size: usize,
    /// Fetch lifecycle and fetched items
    pub sync: SyncState,
}

impl CatalogSession {
    pub fn new(page_size: usize) -> Self {
        Self {
            filters: filters::default_filters(),
            sort_by: SortKey::default(),
            filter_open: false,
            page: 1,
            page_size,
            sync: SyncState::default(),
        }
    }

    /// Whether the clear-filters button should be enabled
    pub fn can_reset(&self) -> bool {
        filters::has_deviated_from_default(&self.filters, &filters::default_filters())
    }

    pub fn on_sort(&mut self, key: SortKey) {
        self.sort_by = key;
        self.page = 1;
    }

    pub fn on_apply_filters(&mut self, patch: FilterPatch) {
        self.filters = filters::apply(&self.filters, patch);
    }

    pub fn on_reset_filters(&mut self) {
        self.filters = filters::default_filters();
    }

    pub fn on_open_filter(&mut self) {
        self.filter_open = true;
    }

    pub fn on_close_filter(&mut self) {
        self.filter_open = false;
    }

    pub fn on_page(&mut self, page: usize) {
        self.page = page.clamp(1, self.page_count());
    }

    pub fn render_state(&self) -> RenderState {
        RenderState::of(&self.sync)
    }

    pub fn page_count(&self) -> usize {
        view::page_count(self.sync.items.len(), self.page_size)
    }

    /// Cards for the current page in the current sort order
    pub fn visible_items(&self) -> Vec<CatalogItem> {
        view::visible_page(&self.sync.items, self.sort_by, self.page, self.page_size)
    }
}

/// Type alias for the store
pub type CatalogStore = Store<CatalogSession>;

impl SyncCell for CatalogStore {
    fn with_state<R>(&self, f: impl FnOnce(&mut SyncState) -> R) -> Option<R> {
        let field = self.sync();
        let mut guard = field.try_write()?;
        Some(f(&mut *guard))
    }
}
