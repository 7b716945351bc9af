//! Catalog Synchronization
//!
//! Fetch lifecycle for the catalog grid. Each fetch is tagged with a
//! generation; only the newest fetch may write its outcome back.

use crate::commands::{CatalogSource, FetchError};
use crate::models::{CatalogItem, ProductRecord};

/// Loading flag and fetched items, as observed by the view
#[derive(Debug, Clone, PartialEq)]
pub struct SyncState {
    pub loading: bool,
    pub items: Vec<CatalogItem>,
    /// Tag of the most recently started fetch
    pub generation: u64,
    /// Reason of the last failed fetch, cleared by the next success
    pub error: Option<String>,
}

impl Default for SyncState {
    fn default() -> Self {
        Self {
            loading: true,
            items: Vec::new(),
            generation: 0,
            error: None,
        }
    }
}

/// What happened to a fetch outcome handed to [`SyncState::settle`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Settle {
    Applied,
    /// A newer fetch was started; the outcome was discarded
    Superseded,
}

impl SyncState {
    /// Mark a fetch as started and return its generation tag.
    pub fn begin(&mut self) -> u64 {
        self.generation += 1;
        self.loading = true;
        self.generation
    }

    /// Install the outcome of fetch `generation` and clear `loading`.
    ///
    /// On failure `items` keeps its previous value.
    pub fn settle(&mut self, generation: u64, outcome: Result<Vec<ProductRecord>, FetchError>) -> Settle {
        if generation != self.generation {
            return Settle::Superseded;
        }
        match outcome {
            Ok(records) => {
                self.items = records.into_iter().map(CatalogItem::from).collect();
                self.error = None;
            }
            Err(e) => {
                self.error = Some(e.to_string());
            }
        }
        self.loading = false;
        Settle::Applied
    }
}

/// Somewhere a [`SyncState`] lives
pub trait SyncCell {
    /// Run `f` against the state in one write.
    ///
    /// Returns `None` when the owner is gone (e.g. the view was disposed).
    fn with_state<R>(&self, f: impl FnOnce(&mut SyncState) -> R) -> Option<R>;
}

/// Fetch the full catalog from `source` into `cell`.
///
/// Never fails: errors are logged and recorded on the state.
pub async fn load<S, C>(source: &S, cell: &C)
where
    S: CatalogSource + ?Sized,
    C: SyncCell,
{
    let Some(generation) = cell.with_state(SyncState::begin) else {
        log::debug!("[sync] View disposed before fetch started");
        return;
    };

    let outcome = source.fetch_all().await;
    match &outcome {
        Ok(records) => log::info!("[sync] Fetch #{} loaded {} products", generation, records.len()),
        Err(e) => log::error!("[sync] Fetch #{} failed: {}", generation, e),
    }

    match cell.with_state(|state| state.settle(generation, outcome)) {
        Some(Settle::Applied) => {}
        Some(Settle::Superseded) => {
            log::debug!("[sync] Discarding fetch #{}, a newer fetch is in flight", generation);
        }
        None => log::debug!("[sync] View disposed, dropping fetch #{}", generation),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::cell::RefCell;
    use std::rc::Rc;

    impl SyncCell for RefCell<SyncState> {
        fn with_state<R>(&self, f: impl FnOnce(&mut SyncState) -> R) -> Option<R> {
            Some(f(&mut *self.borrow_mut()))
        }
    }

    /// Cell whose owner has been dropped
    struct Disposed;

    impl SyncCell for Disposed {
        fn with_state<R>(&self, _f: impl FnOnce(&mut SyncState) -> R) -> Option<R> {
            None
        }
    }

    struct StubSource(Result<Vec<ProductRecord>, FetchError>);

    #[async_trait(?Send)]
    impl CatalogSource for StubSource {
        async fn fetch_all(&self) -> Result<Vec<ProductRecord>, FetchError> {
            self.0.clone()
        }
    }

    /// Starts a newer fetch on the shared state while its own is pending
    struct RacingSource {
        state: Rc<RefCell<SyncState>>,
    }

    #[async_trait(?Send)]
    impl CatalogSource for RacingSource {
        async fn fetch_all(&self) -> Result<Vec<ProductRecord>, FetchError> {
            self.state.borrow_mut().begin();
            Ok(records(5))
        }
    }

    fn records(n: u32) -> Vec<ProductRecord> {
        (1..=n)
            .map(|id| ProductRecord {
                product_id: id,
                title: Some(format!("Product {}", id)),
                list_price: Some(10.0 * f64::from(id)),
                sale_price: None,
                image_url: None,
                status: None,
                colors: None,
            })
            .collect()
    }

    fn failure() -> FetchError {
        FetchError::Status { code: 503, message: "unavailable".into() }
    }

    #[test]
    fn test_initial_state_is_loading() {
        let state = SyncState::default();
        assert!(state.loading);
        assert!(state.items.is_empty());
        assert!(state.error.is_none());
    }

    #[tokio::test]
    async fn test_load_installs_mapped_items() {
        let cell = RefCell::new(SyncState::default());
        load(&StubSource(Ok(records(3))), &cell).await;

        let state = cell.into_inner();
        assert!(!state.loading);
        assert_eq!(state.items.len(), 3);
        assert_eq!(state.items[0].id, 1);
        assert_eq!(state.items[2].name, "Product 3");
        assert!(state.items.iter().all(|item| item.colors.is_empty()));
    }

    #[tokio::test]
    async fn test_load_with_zero_records() {
        let cell = RefCell::new(SyncState::default());
        load(&StubSource(Ok(Vec::new())), &cell).await;

        let state = cell.into_inner();
        assert!(!state.loading);
        assert!(state.items.is_empty());
        assert!(state.error.is_none());
    }

    #[tokio::test]
    async fn test_failure_keeps_previous_items() {
        let cell = RefCell::new(SyncState::default());
        load(&StubSource(Ok(records(2))), &cell).await;
        let before = cell.borrow().items.clone();

        load(&StubSource(Err(failure())), &cell).await;

        let state = cell.into_inner();
        assert!(!state.loading);
        assert_eq!(state.items, before);
        assert_eq!(state.error.as_deref(), Some("data store returned 503: unavailable"));
    }

    #[tokio::test]
    async fn test_failure_on_first_load_leaves_items_empty() {
        let cell = RefCell::new(SyncState::default());
        load(&StubSource(Err(FetchError::Transport("offline".into()))), &cell).await;

        let state = cell.into_inner();
        assert!(!state.loading);
        assert!(state.items.is_empty());
        assert!(state.error.is_some());
    }

    #[tokio::test]
    async fn test_success_clears_previous_error() {
        let cell = RefCell::new(SyncState::default());
        load(&StubSource(Err(failure())), &cell).await;
        load(&StubSource(Ok(records(1))), &cell).await;

        let state = cell.into_inner();
        assert!(state.error.is_none());
        assert_eq!(state.items.len(), 1);
        assert_eq!(state.generation, 2);
    }

    #[tokio::test]
    async fn test_superseded_fetch_is_discarded() {
        let state = Rc::new(RefCell::new(SyncState::default()));
        let source = RacingSource { state: Rc::clone(&state) };

        load(&source, &*state).await;

        let state = state.borrow();
        // the newer fetch is still pending, so nothing was installed
        assert!(state.loading);
        assert!(state.items.is_empty());
        assert_eq!(state.generation, 2);
    }

    #[tokio::test]
    async fn test_disposed_cell_is_ignored() {
        load(&StubSource(Ok(records(2))), &Disposed).await;
    }

    #[test]
    fn test_settle_checks_generation() {
        let mut state = SyncState::default();
        let first = state.begin();
        let second = state.begin();

        assert_eq!(state.settle(first, Ok(records(4))), Settle::Superseded);
        assert!(state.loading);
        assert_eq!(state.settle(second, Ok(records(1))), Settle::Applied);
        assert!(!state.loading);
        assert_eq!(state.items.len(), 1);
    }
}
