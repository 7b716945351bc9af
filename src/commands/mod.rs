//! Data Store Access
//!
//! Narrow async capabilities consumed by the views, plus the REST
//! transport that implements them.

mod rest;

use std::rc::Rc;

use async_trait::async_trait;
use thiserror::Error;

use crate::config::StoreConfig;
use crate::models::{Order, OrderLine, ProductRecord};

pub use rest::RestCatalogSource;

/// Errors from a data store read
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Transport(String),

    #[error("data store returned {code}: {message}")]
    Status { code: u16, message: String },

    #[error("unexpected response shape: {0}")]
    Decode(String),
}

/// Read access to the full catalog collection
#[async_trait(?Send)]
pub trait CatalogSource {
    /// Fetch every catalog record, unfiltered
    async fn fetch_all(&self) -> Result<Vec<ProductRecord>, FetchError>;
}

/// Read access to orders and their lines
#[async_trait(?Send)]
pub trait OrderSource {
    async fn fetch_order(&self, id: u32) -> Result<Option<Order>, FetchError>;

    async fn fetch_order_lines(&self, api_order_id: u64) -> Result<Vec<OrderLine>, FetchError>;
}

/// Both capabilities behind one handle, as handed to the views
pub trait DataStore: CatalogSource + OrderSource {}

impl<T: CatalogSource + OrderSource> DataStore for T {}

/// Build the data store described by configuration
pub fn connect(config: &StoreConfig) -> Rc<dyn DataStore> {
    log::info!("[commands] Reading catalog from {}", config.endpoint);
    Rc::new(RestCatalogSource::new(config))
}
