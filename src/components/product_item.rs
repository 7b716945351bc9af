//! Product Item Component
//!
//! Self-contained card for one catalog item.

use leptos::prelude::*;

use crate::format::format_currency;
use crate::models::CatalogItem;

use super::ImageWithFallback;

#[component]
pub fn ProductItem(item: CatalogItem) -> impl IntoView {
    let status = (!item.status.is_empty()).then(|| {
        let class = format!("product-status status-{}", item.status);
        view! { <span class=class>{item.status.clone()}</span> }
    });

    let colors = (!item.colors.is_empty()).then(|| view! {
        <div class="color-swatches">
            {item.colors.iter().map(|color| view! {
                <span class="color-dot" style=format!("background-color: {}", color)></span>
            }).collect_view()}
        </div>
    });

    let price = match item.sale_price {
        Some(sale) => view! {
            <span class="price">
                <del class="price-list">{format_currency(item.price)}</del>
                " "
                <span class="price-sale">{format_currency(sale)}</span>
            </span>
        }.into_any(),
        None => view! {
            <span class="price">{format_currency(item.price)}</span>
        }.into_any(),
    };

    view! {
        <div class="product-card">
            <div class="product-cover">
                {status}
                <ImageWithFallback src=item.cover_url.clone() alt=item.name.clone() css_class="product-cover-img" />
            </div>
            <div class="product-body">
                <span class="product-name" title=item.name.clone()>{item.name.clone()}</span>
                <div class="product-meta">
                    {colors}
                    {price}
                </div>
            </div>
        </div>
    }
}
