//! Pagination Component
//!
//! Previous/next and numbered page buttons for the catalog grid.

use leptos::prelude::*;

use crate::store::{CatalogSessionStoreFields, CatalogStore};

#[component]
pub fn Pagination(store: CatalogStore) -> impl IntoView {
    let page = move || store.page().get();
    let page_count = Memo::new(move |_| store.read().page_count());

    view! {
        <nav class="pagination">
            <button
                class="page-btn"
                disabled=move || page() <= 1
                on:click=move |_| { let current = store.page().get_untracked(); store.write().on_page(current.saturating_sub(1)); }
            >
                "‹"
            </button>
            {move || (1..=page_count.get()).map(|n| view! {
                <button
                    class=move || if page() == n { "page-btn active" } else { "page-btn" }
                    on:click=move |_| store.write().on_page(n)
                >
                    {n}
                </button>
            }).collect_view()}
            <button
                class="page-btn"
                disabled=move || page() >= page_count.get()
                on:click=move |_| { let current = store.page().get_untracked(); store.write().on_page(current + 1); }
            >
                "›"
            </button>
        </nav>
    }
}
