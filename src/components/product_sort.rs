//! Product Sort Component
//!
//! Select bound to the session sort key.

use leptos::prelude::*;

use crate::filters::SortKey;
use crate::store::{CatalogSessionStoreFields, CatalogStore};

#[component]
pub fn ProductSort(store: CatalogStore) -> impl IntoView {
    let on_change = move |ev: web_sys::Event| {
        let value = event_target_value(&ev);
        match SortKey::from_value(&value) {
            Some(key) => store.write().on_sort(key),
            None => log::warn!("[ProductSort] Unknown sort key {:?}", value),
        }
    };

    view! {
        <label class="sort-control">
            <span>"Sort By: "</span>
            <select on:change=on_change>
                {SortKey::ALL.into_iter().map(|key| view! {
                    <option
                        value=key.value()
                        prop:selected=move || store.sort_by().get() == key
                    >
                        {key.label()}
                    </option>
                }).collect_view()}
            </select>
        </label>
    }
}
