//! Storefront Dashboard App
//!
//! Header with language switcher, catalog grid and order summary.

use leptos::prelude::*;

use crate::commands;
use crate::components::{LanguagePopover, OrderSummary, ProductsView};
use crate::config::StoreConfig;
use crate::context::CatalogContext;

#[component]
pub fn App() -> impl IntoView {
    let config = StoreConfig::load();
    let ctx = CatalogContext::new(commands::connect(&config), &config);
    let locale = RwSignal::new("pt-BR");

    // Provide context to all children
    provide_context(ctx);

    view! {
        <div class="dashboard-layout">
            <header class="dashboard-header">
                <h1>"Storefront"</h1>
                <LanguagePopover locale=locale />
            </header>

            <main class="dashboard-content">
                <ProductsView />
                <aside class="dashboard-side">
                    <OrderSummary order_id=ctx.featured_order_id />
                </aside>
            </main>
        </div>
    }
}
