//! View Composition
//!
//! Pure decisions behind the products view: which branch to render and
//! which slice of the fetched items a page shows.

use crate::filters::SortKey;
use crate::models::CatalogItem;
use crate::sync::SyncState;

/// Rendering branch of the products view
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderState {
    Loading,
    /// Last fetch failed and there is nothing to show
    Error(String),
    Empty,
    Populated,
}

impl RenderState {
    pub fn of(sync: &SyncState) -> Self {
        if sync.loading {
            return RenderState::Loading;
        }
        match (&sync.error, sync.items.is_empty()) {
            (Some(reason), true) => RenderState::Error(reason.clone()),
            (None, true) => RenderState::Empty,
            (_, false) => RenderState::Populated,
        }
    }
}

/// Number of pages needed for `total` items, never less than one
pub fn page_count(total: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 1;
    }
    total.div_ceil(page_size).max(1)
}

/// Items on 1-based `page` after ordering by `sort`.
///
/// `items` itself stays in store order.
pub fn visible_page(items: &[CatalogItem], sort: SortKey, page: usize, page_size: usize) -> Vec<CatalogItem> {
    let mut ordered: Vec<&CatalogItem> = items.iter().collect();
    match sort {
        SortKey::Featured | SortKey::Newest => {}
        SortKey::PriceAsc => ordered.sort_by(|a, b| a.effective_price().total_cmp(&b.effective_price())),
        SortKey::PriceDesc => ordered.sort_by(|a, b| b.effective_price().total_cmp(&a.effective_price())),
    }

    let page = page.clamp(1, page_count(items.len(), page_size));
    ordered
        .into_iter()
        .skip((page - 1) * page_size)
        .take(page_size)
        .cloned()
        .collect()
}
