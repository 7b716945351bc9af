//! Product Filters Component
//!
//! Filter drawer: option groups emit patches into the session store.

use leptos::prelude::*;

use crate::filters::{self, FilterPatch, CATEGORY_OPTIONS, COLOR_OPTIONS, GENDER_OPTIONS, PRICE_OPTIONS, RATING_OPTIONS};
use crate::store::{CatalogSessionStoreFields, CatalogStore};

/// "up3Star" -> "& Up" label shown next to the stars
fn rating_stars(rating: &str) -> String {
    let count = rating
        .trim_start_matches("up")
        .trim_end_matches("Star")
        .parse::<usize>()
        .unwrap_or(0);
    format!("{} & Up", "★".repeat(count))
}

#[component]
pub fn ProductFilters(store: CatalogStore) -> impl IntoView {
    let open = move || store.filter_open().get();
    let can_reset = Memo::new(move |_| store.read().can_reset());
    let apply = move |patch: FilterPatch| store.write().on_apply_filters(patch);

    view! {
        <button class="filter-btn" class:active=move || can_reset.get() on:click=move |_| store.write().on_open_filter()>
            "Filters"
        </button>

        <Show when=open>
            <div class="filter-backdrop" on:click=move |_| store.write().on_close_filter()></div>
            <aside class="filter-drawer">
                <header class="filter-header">
                    <h3>"Filters"</h3>
                    <button
                        class="filter-reset-btn"
                        disabled=move || !can_reset.get()
                        on:click=move |_| store.write().on_reset_filters()
                    >
                        "Clear all"
                    </button>
                    <button class="filter-close-btn" on:click=move |_| store.write().on_close_filter()>"×"</button>
                </header>

                <div class="filter-group">
                    <h4>"Gender"</h4>
                    {GENDER_OPTIONS.iter().map(|(value, label)| {
                        let value = *value;
                        let checked = move || store.filters().read().gender.iter().any(|g| g == value);
                        view! {
                            <label class="filter-option">
                                <input
                                    type="checkbox"
                                    prop:checked=checked
                                    on:change=move |_| {
                                        let next = filters::toggled(&store.filters().read_untracked().gender, value);
                                        apply(FilterPatch::gender(next));
                                    }
                                />
                                {*label}
                            </label>
                        }
                    }).collect_view()}
                </div>

                <div class="filter-group">
                    <h4>"Category"</h4>
                    {CATEGORY_OPTIONS.iter().map(|(value, label)| {
                        let value = *value;
                        let is_selected = move || store.filters().read().category == value;
                        view! {
                            <button
                                class=move || if is_selected() { "option-btn active" } else { "option-btn" }
                                on:click=move |_| apply(FilterPatch::category(value))
                            >
                                {*label}
                            </button>
                        }
                    }).collect_view()}
                </div>

                <div class="filter-group">
                    <h4>"Colors"</h4>
                    <div class="color-swatches">
                        {COLOR_OPTIONS.iter().map(|color| {
                            let color = *color;
                            let is_selected = move || store.filters().read().colors.iter().any(|c| c == color);
                            view! {
                                <button
                                    class=move || if is_selected() { "color-dot selectable active" } else { "color-dot selectable" }
                                    style=format!("background-color: {}", color)
                                    title=color
                                    on:click=move |_| {
                                        let next = filters::toggled(&store.filters().read_untracked().colors, color);
                                        apply(FilterPatch::colors(next));
                                    }
                                ></button>
                            }
                        }).collect_view()}
                    </div>
                </div>

                <div class="filter-group">
                    <h4>"Price"</h4>
                    {PRICE_OPTIONS.iter().map(|(value, label)| {
                        let value = *value;
                        let is_selected = move || store.filters().read().price == value;
                        view! {
                            <button
                                class=move || if is_selected() { "option-btn active" } else { "option-btn" }
                                on:click=move |_| apply(FilterPatch::price(value))
                            >
                                {*label}
                            </button>
                        }
                    }).collect_view()}
                </div>

                <div class="filter-group">
                    <h4>"Rating"</h4>
                    {RATING_OPTIONS.iter().map(|rating| {
                        let rating = *rating;
                        let is_selected = move || store.filters().read().rating == rating;
                        view! {
                            <button
                                class=move || if is_selected() { "option-btn active" } else { "option-btn" }
                                on:click=move |_| apply(FilterPatch::rating(rating))
                            >
                                {rating_stars(rating)}
                            </button>
                        }
                    }).collect_view()}
                </div>
            </aside>
        </Show>
    }
}
