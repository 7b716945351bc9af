//! Dashboard Configuration
//!
//! Data store settings, read from `catalog.toml` embedded at build time.

use serde::Deserialize;
use thiserror::Error;

/// Configuration bundled with the build
const BUNDLED: &str = include_str!("../catalog.toml");

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to parse catalog config: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Config validation failed: {message}")]
    ValidationError { message: String },
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Base URL of the REST data store
    pub endpoint: String,
    /// Public (anon) key sent with every REST read
    pub api_key: String,
    pub collection: String,
    pub orders_collection: String,
    pub order_lines_collection: String,
    /// Catalog cards per page
    pub page_size: usize,
    /// Order shown in the dashboard summary card
    pub featured_order_id: u32,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            endpoint: "http://localhost:54321".to_string(),
            api_key: String::new(),
            collection: "produtos".to_string(),
            orders_collection: "pedidos".to_string(),
            order_lines_collection: "itens_pedido".to_string(),
            page_size: 8,
            featured_order_id: 1,
        }
    }
}

impl StoreConfig {
    /// Parses and validates a TOML document.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        let config: StoreConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads the bundled configuration, falling back to defaults on error.
    pub fn load() -> Self {
        match Self::parse(BUNDLED) {
            Ok(config) => config,
            Err(e) => {
                log::error!("[config] {}; using defaults", e);
                Self::default()
            }
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.page_size == 0 {
            return Err(ConfigError::ValidationError {
                message: "page_size must be greater than zero".into(),
            });
        }
        if self.endpoint.trim().is_empty() {
            return Err(ConfigError::ValidationError {
                message: "endpoint must not be empty".into(),
            });
        }
        for (key, value) in [
            ("collection", &self.collection),
            ("orders_collection", &self.orders_collection),
            ("order_lines_collection", &self.order_lines_collection),
        ] {
            if value.trim().is_empty() {
                return Err(ConfigError::ValidationError {
                    message: format!("{} must not be empty", key),
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundled_config_is_valid() {
        assert!(StoreConfig::parse(BUNDLED).is_ok());
    }

    #[test]
    fn test_empty_document_uses_defaults() {
        let config = StoreConfig::parse("").unwrap();
        assert_eq!(config, StoreConfig::default());
        assert_eq!(config.page_size, 8);
        assert_eq!(config.endpoint, "http://localhost:54321");
    }

    #[test]
    fn test_partial_document() {
        let config = StoreConfig::parse(
            r#"
            endpoint = "https://store.example.co"
            page_size = 12
            "#,
        )
        .unwrap();
        assert_eq!(config.endpoint, "https://store.example.co");
        assert_eq!(config.page_size, 12);
        assert_eq!(config.collection, "produtos");
    }

    #[test]
    fn test_zero_page_size_rejected() {
        let err = StoreConfig::parse("page_size = 0").unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError { .. }));
    }

    #[test]
    fn test_blank_endpoint_rejected() {
        let err = StoreConfig::parse(r#"endpoint = "  ""#).unwrap_err();
        assert!(err.to_string().contains("endpoint"));
    }

    #[test]
    fn test_mistyped_value_is_parse_error() {
        let err = StoreConfig::parse(r#"page_size = "eight""#).unwrap_err();
        assert!(matches!(err, ConfigError::ParseError(_)));
    }
}
