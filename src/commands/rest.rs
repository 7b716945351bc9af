//! REST Data Store
//!
//! PostgREST-style reads (`/rest/v1/<table>?select=*`) for browser builds.

use async_trait::async_trait;
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde::de::DeserializeOwned;
use serde::Deserialize;

use super::{CatalogSource, FetchError, OrderSource};
use crate::config::StoreConfig;
use crate::models::{Order, OrderLine, ProductRecord};

/// Column joining order lines to their order
const ORDER_LINK_COLUMN: &str = "pedido_id_api";

/// Characters escaped in table, column and filter values
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC.remove(b'_').remove(b'-').remove(b'.');

/// Error body returned by the data store on non-2xx responses
#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: String,
}

pub struct RestCatalogSource {
    client: reqwest::Client,
    endpoint: String,
    api_key: String,
    products: String,
    orders: String,
    order_lines: String,
}

impl RestCatalogSource {
    pub fn new(config: &StoreConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: config.endpoint.clone(),
            api_key: config.api_key.clone(),
            products: config.collection.clone(),
            orders: config.orders_collection.clone(),
            order_lines: config.order_lines_collection.clone(),
        }
    }

    async fn rows<T: DeserializeOwned>(&self, table: &str, eq: Option<(&str, String)>) -> Result<Vec<T>, FetchError> {
        let url = rows_url(&self.endpoint, table, eq);
        log::debug!("[rest] GET {}", url);

        let response = self
            .client
            .get(&url)
            .header("apikey", &self.api_key)
            .bearer_auth(&self.api_key)
            .send()
            .await
            .map_err(|e| FetchError::Transport(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| FetchError::Transport(e.to_string()))?;

        if !status.is_success() {
            return Err(FetchError::Status {
                code: status.as_u16(),
                message: error_message(&body),
            });
        }

        serde_json::from_str(&body).map_err(|e| FetchError::Decode(e.to_string()))
    }
}

/// Build the read URL for `table`, optionally narrowed by one equality filter.
fn rows_url(endpoint: &str, table: &str, eq: Option<(&str, String)>) -> String {
    let mut url = format!(
        "{}/rest/v1/{}?select=*",
        endpoint.trim_end_matches('/'),
        utf8_percent_encode(table, COMPONENT)
    );
    if let Some((column, value)) = eq {
        url.push_str(&format!(
            "&{}=eq.{}",
            utf8_percent_encode(column, COMPONENT),
            utf8_percent_encode(&value, COMPONENT)
        ));
    }
    url
}

fn error_message(body: &str) -> String {
    serde_json::from_str::<ErrorBody>(body)
        .map(|e| e.message)
        .unwrap_or_else(|_| body.trim().to_string())
}

#[async_trait(?Send)]
impl CatalogSource for RestCatalogSource {
    async fn fetch_all(&self) -> Result<Vec<ProductRecord>, FetchError> {
        self.rows(&self.products, None).await
    }
}

#[async_trait(?Send)]
impl OrderSource for RestCatalogSource {
    async fn fetch_order(&self, id: u32) -> Result<Option<Order>, FetchError> {
        let rows: Vec<Order> = self.rows(&self.orders, Some(("id", id.to_string()))).await?;
        Ok(rows.into_iter().next())
    }

    async fn fetch_order_lines(&self, api_order_id: u64) -> Result<Vec<OrderLine>, FetchError> {
        self.rows(&self.order_lines, Some((ORDER_LINK_COLUMN, api_order_id.to_string())))
            .await
    }
}
