//! UI Components
//!
//! Leptos components for the catalog dashboard.

mod image_fallback;
mod language_popover;
mod order_summary;
mod pagination;
mod product_filters;
mod product_item;
mod product_sort;
mod products_view;

pub use image_fallback::ImageWithFallback;
pub use language_popover::LanguagePopover;
pub use order_summary::OrderSummary;
pub use pagination::Pagination;
pub use product_filters::ProductFilters;
pub use product_item::ProductItem;
pub use product_sort::ProductSort;
pub use products_view::ProductsView;
