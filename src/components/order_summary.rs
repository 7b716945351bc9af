//! Order Summary Component
//!
//! Financial breakdown and line items for one order.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::use_catalog_context;
use crate::format::{format_currency, format_date};
use crate::models::{Order, OrderLine};

#[derive(Debug, Clone, PartialEq)]
enum OrderState {
    Loading,
    NotFound,
    Loaded(Order, Vec<OrderLine>),
}

#[component]
pub fn OrderSummary(order_id: u32) -> impl IntoView {
    let ctx = use_catalog_context();
    let (state, set_state) = signal(OrderState::Loading);

    Effect::new(move |_| {
        let data_store = ctx.data_store();
        spawn_local(async move {
            let order = match data_store.fetch_order(order_id).await {
                Ok(Some(order)) => order,
                Ok(None) => {
                    log::warn!("[OrderSummary] Order {} not found", order_id);
                    set_state.try_set(OrderState::NotFound);
                    return;
                }
                Err(e) => {
                    log::error!("[OrderSummary] Error loading order {}: {}", order_id, e);
                    set_state.try_set(OrderState::NotFound);
                    return;
                }
            };

            let lines = data_store
                .fetch_order_lines(order.api_order_id)
                .await
                .unwrap_or_else(|e| {
                    log::error!("[OrderSummary] Error loading lines for order {}: {}", order_id, e);
                    Vec::new()
                });
            set_state.try_set(OrderState::Loaded(order, lines));
        });
    });

    view! {
        <div class="order-card">
            {move || match state.get() {
                OrderState::Loading => view! {
                    <h3 class="card-header">"Loading order details..."</h3>
                }.into_any(),
                OrderState::NotFound => view! {
                    <h3 class="card-header">"Order not found."</h3>
                }.into_any(),
                OrderState::Loaded(order, lines) => view! { <OrderDetails order=order lines=lines /> }.into_any(),
            }}
        </div>
    }
}

#[component]
fn OrderDetails(order: Order, lines: Vec<OrderLine>) -> impl IntoView {
    let line_count = lines.len();

    view! {
        <h3 class="card-header">{format!("Order #{}", order.order_number)}</h3>
        <p class="card-subheader">{format!("Date: {}", format_date(&order.placed_at))}</p>

        <div class="order-totals">
            <h4>"Summary"</h4>
            <div class="order-row">
                <span>"Subtotal (products)"</span>
                <span>{format_currency(order.products_total)}</span>
            </div>
            <div class="order-row">
                <span>"Shipping"</span>
                <span>{format_currency(order.shipping)}</span>
            </div>
            <div class="order-row discount">
                <span>"Discount"</span>
                <span>{format!("-{}", format_currency(order.discount))}</span>
            </div>
            <div class="order-row total">
                <span>"Total"</span>
                <span>{format_currency(order.grand_total)}</span>
            </div>
        </div>

        <div class="order-lines">
            <h4>{format!("Items ({})", line_count)}</h4>
            {lines.into_iter().map(|line| view! {
                <div class="order-line">
                    <div class="order-line-info">
                        <span class="order-line-product">{format!("Product ID: {}", line.api_product_id)}</span>
                        <span class="order-line-qty">
                            {format!("{} x {}", line.quantity, format_currency(line.unit_price))}
                        </span>
                    </div>
                    <span class="order-line-total">{format_currency(line.line_total())}</span>
                </div>
            }).collect_view()}
        </div>
    }
}
