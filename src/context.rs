//! Application Context
//!
//! Shared state provided via Leptos Context API.

use std::rc::Rc;

use leptos::prelude::*;

use crate::commands::DataStore;
use crate::config::StoreConfig;

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct CatalogContext {
    /// Data store handle (not Send, so kept in local storage)
    data_store: StoredValue<Rc<dyn DataStore>, LocalStorage>,
    /// Trigger to refetch the catalog - read
    pub reload_trigger: ReadSignal<u32>,
    /// Trigger to refetch the catalog - write
    set_reload_trigger: WriteSignal<u32>,
    /// Catalog cards per page
    pub page_size: usize,
    /// Order shown in the summary card
    pub featured_order_id: u32,
}

impl CatalogContext {
    pub fn new(data_store: Rc<dyn DataStore>, config: &StoreConfig) -> Self {
        let (reload_trigger, set_reload_trigger) = signal(0u32);
        Self {
            data_store: StoredValue::new_local(data_store),
            reload_trigger,
            set_reload_trigger,
            page_size: config.page_size,
            featured_order_id: config.featured_order_id,
        }
    }

    pub fn data_store(&self) -> Rc<dyn DataStore> {
        self.data_store.get_value()
    }

    /// Trigger a refetch of the catalog
    pub fn reload(&self) {
        self.set_reload_trigger.update(|v| *v += 1);
    }
}

/// Get the catalog context
pub fn use_catalog_context() -> CatalogContext {
    expect_context::<CatalogContext>()
}
