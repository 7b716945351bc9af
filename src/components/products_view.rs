//! Products View Component
//!
//! Catalog grid with loading, empty, error and populated branches.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::context::use_catalog_context;
use crate::store::{CatalogSession, CatalogSessionStoreFields, CatalogStore};
use crate::sync;
use crate::view::RenderState;

use super::{Pagination, ProductFilters, ProductItem, ProductSort};

#[component]
pub fn ProductsView() -> impl IntoView {
    let ctx = use_catalog_context();
    let store: CatalogStore = Store::new(CatalogSession::new(ctx.page_size));

    // Fetch on mount and whenever a reload is requested
    Effect::new(move |_| {
        let trigger = ctx.reload_trigger.get();
        log::debug!("[ProductsView] Loading catalog, trigger={}", trigger);
        let data_store = ctx.data_store();
        spawn_local(async move {
            sync::load(data_store.as_ref(), &store).await;
        });
    });

    let render_state = Memo::new(move |_| store.sync().with(RenderState::of));

    view! {
        <section class="products-view">
            <h2 class="page-title">"Products"</h2>
            {move || match render_state.get() {
                RenderState::Loading => view! {
                    <div class="products-placeholder">
                        <p>"Loading products..."</p>
                    </div>
                }.into_any(),
                RenderState::Error(reason) => view! {
                    <div class="products-placeholder error">
                        <p>"Could not load products."</p>
                        <p class="error-detail">{reason}</p>
                        <button class="retry-btn" on:click=move |_| ctx.reload()>"Retry"</button>
                    </div>
                }.into_any(),
                RenderState::Empty => view! {
                    <div class="products-placeholder">
                        <p>"No products found."</p>
                    </div>
                }.into_any(),
                RenderState::Populated => view! { <ProductGrid store=store /> }.into_any(),
            }}
        </section>
    }
}

/// Controls, cards and pager for a non-empty catalog
#[component]
fn ProductGrid(store: CatalogStore) -> impl IntoView {
    let ctx = use_catalog_context();
    let visible = Memo::new(move |_| store.read().visible_items());
    let stale_error = move || store.sync().read().error.clone();

    view! {
        <div class="products-toolbar">
            <ProductFilters store=store />
            <ProductSort store=store />
        </div>

        {move || stale_error().map(|reason| view! {
            <div class="stale-notice">
                <span>"Showing previously loaded products: " {reason}</span>
                <button class="retry-btn small" on:click=move |_| ctx.reload()>"Retry"</button>
            </div>
        })}

        <div class="product-grid">
            <For
                each=move || visible.get()
                key=|item| item.id
                children=move |item| view! { <ProductItem item=item /> }
            />
        </div>

        <Pagination store=store />
    }
}
