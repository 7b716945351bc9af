//! Frontend Models
//!
//! Raw data store records and the display-ready shapes built from them.

use serde::{Deserialize, Serialize};

/// Catalog record as stored in the `produtos` table.
///
/// Only the id is mandatory; everything else falls back to a safe default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductRecord {
    #[serde(rename = "id_produto")]
    pub product_id: u32,
    #[serde(rename = "nome", default)]
    pub title: Option<String>,
    #[serde(rename = "preco", default)]
    pub list_price: Option<f64>,
    #[serde(rename = "preco_promocional", default)]
    pub sale_price: Option<f64>,
    #[serde(rename = "imagem", default)]
    pub image_url: Option<String>,
    #[serde(rename = "situacao", default)]
    pub status: Option<String>,
    /// Not a column of the table today
    #[serde(default)]
    pub colors: Option<Vec<String>>,
}

/// Display-ready catalog item consumed by the product card
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogItem {
    pub id: u32,
    pub name: String,
    pub price: f64,
    pub sale_price: Option<f64>,
    pub cover_url: Option<String>,
    pub status: String,
    pub colors: Vec<String>,
}

impl CatalogItem {
    /// Price the customer actually pays
    pub fn effective_price(&self) -> f64 {
        self.sale_price.unwrap_or(self.price)
    }
}

impl From<ProductRecord> for CatalogItem {
    fn from(record: ProductRecord) -> Self {
        Self {
            id: record.product_id,
            name: record.title.unwrap_or_default(),
            price: record.list_price.unwrap_or(0.0),
            sale_price: record.sale_price,
            cover_url: record.image_url.filter(|url| !url.is_empty()),
            status: record.status.unwrap_or_default(),
            colors: record.colors.unwrap_or_default(),
        }
    }
}

/// Row of the `pedidos` table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: u32,
    #[serde(rename = "numero_pedido")]
    pub order_number: String,
    #[serde(rename = "data_pedido")]
    pub placed_at: String,
    #[serde(rename = "situacao", default)]
    pub status: Option<String>,
    /// Id of the order in the upstream commerce API, used to join lines
    #[serde(rename = "id_api_pedido")]
    pub api_order_id: u64,
    #[serde(rename = "valor_produtos", default)]
    pub products_total: f64,
    #[serde(rename = "valor_frete", default)]
    pub shipping: f64,
    #[serde(rename = "valor_desconto", default)]
    pub discount: f64,
    #[serde(rename = "valor_total_pedido", default)]
    pub grand_total: f64,
}

/// Row of the `itens_pedido` table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderLine {
    #[serde(rename = "id_item")]
    pub line_id: u32,
    #[serde(rename = "produto_id_api")]
    pub api_product_id: u64,
    #[serde(rename = "quantidade")]
    pub quantity: u32,
    #[serde(rename = "valor_unitario")]
    pub unit_price: f64,
}

impl OrderLine {
    pub fn line_total(&self) -> f64 {
        f64::from(self.quantity) * self.unit_price
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_record_maps_to_item() {
        let record: ProductRecord = serde_json::from_value(json!({
            "id_produto": 7,
            "nome": "Runner",
            "preco": 89.9,
            "preco_promocional": 59.9,
            "imagem": "https://cdn.example/7.png",
            "situacao": "sale",
            "colors": ["#000000"]
        }))
        .unwrap();

        let item = CatalogItem::from(record);
        assert_eq!(item.id, 7);
        assert_eq!(item.name, "Runner");
        assert_eq!(item.price, 89.9);
        assert_eq!(item.sale_price, Some(59.9));
        assert_eq!(item.cover_url.as_deref(), Some("https://cdn.example/7.png"));
        assert_eq!(item.status, "sale");
        assert_eq!(item.colors, vec!["#000000".to_string()]);
        assert_eq!(item.effective_price(), 59.9);
    }

    #[test]
    fn test_missing_fields_get_defaults() {
        let record: ProductRecord = serde_json::from_value(json!({ "id_produto": 3 })).unwrap();
        let item = CatalogItem::from(record);
        assert_eq!(item.id, 3);
        assert_eq!(item.name, "");
        assert_eq!(item.price, 0.0);
        assert!(item.sale_price.is_none());
        assert!(item.cover_url.is_none());
        assert!(item.colors.is_empty());
        assert_eq!(item.effective_price(), 0.0);
    }

    #[test]
    fn test_null_colors_become_empty() {
        let record: ProductRecord =
            serde_json::from_value(json!({ "id_produto": 1, "colors": null, "imagem": "" })).unwrap();
        let item = CatalogItem::from(record);
        assert!(item.colors.is_empty());
        assert!(item.cover_url.is_none());
    }

    #[test]
    fn test_record_without_id_is_rejected() {
        let result: Result<ProductRecord, _> = serde_json::from_value(json!({ "nome": "Orphan" }));
        assert!(result.is_err());
    }

    #[test]
    fn test_table_rows_decode() {
        let records: Vec<ProductRecord> = serde_json::from_value(json!([
            {
                "id_produto": 1,
                "nome": "Tenis",
                "preco": 99.9,
                "imagem": "x.png",
                "preco_promocional": 79.9,
                "situacao": "sale"
            },
            { "id_produto": 2, "nome": "Meia", "preco": 9.9, "imagem": null, "preco_promocional": null, "situacao": null }
        ]))
        .unwrap();

        let items: Vec<CatalogItem> = records.into_iter().map(CatalogItem::from).collect();
        assert_eq!(items[0].name, "Tenis");
        assert_eq!(items[0].price, 99.9);
        assert_eq!(items[0].sale_price, Some(79.9));
        assert_eq!(items[0].cover_url.as_deref(), Some("x.png"));
        assert!(items[0].colors.is_empty());
        assert_eq!(items[1].id, 2);
        assert!(items[1].sale_price.is_none());
        assert_eq!(items[1].status, "");
    }

    #[test]
    fn test_order_rows_decode() {
        let order: Order = serde_json::from_value(json!({
            "id": 1,
            "numero_pedido": "1042",
            "data_pedido": "2024-05-03",
            "situacao": "paid",
            "id_api_pedido": 987654,
            "valor_produtos": 150.0,
            "valor_frete": 20.0,
            "valor_desconto": 10.0,
            "valor_total_pedido": 160.0
        }))
        .unwrap();
        assert_eq!(order.order_number, "1042");
        assert_eq!(order.api_order_id, 987654);
        assert_eq!(order.grand_total, 160.0);

        let line: OrderLine = serde_json::from_value(json!({
            "id_item": 5,
            "pedido_id_api": 987654,
            "produto_id_api": 321,
            "quantidade": 2,
            "valor_unitario": 75.0
        }))
        .unwrap();
        assert_eq!(line.api_product_id, 321);
        assert_eq!(line.line_total(), 150.0);
    }

    #[test]
    fn test_order_line_total() {
        let line = OrderLine { line_id: 1, api_product_id: 99, quantity: 3, unit_price: 12.5 };
        assert_eq!(line.line_total(), 37.5);
    }
}
