//! Stock level payloads.

use serde::{Deserialize, Serialize};

use super::product::Product;

/// Stock record for one product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Stock {
    pub id: String,
    pub product_id: String,
    pub quantity: i64,
    pub min_quantity: i64,
    pub max_quantity: i64,
    pub last_updated: String,
    /// Expanded product record, present when the server joins it in
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product: Option<Product>,
}

/// Increase/decrease request for a product's stock.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StockAdjustment {
    pub product_id: String,
    pub quantity: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

/// Absolute quantity update, optionally adjusting the thresholds.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuantityUpdate {
    pub product_id: String,
    pub quantity: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_quantity: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_quantity: Option<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_adjustment_omits_absent_reason() {
        let adj = StockAdjustment {
            product_id: "p1".into(),
            quantity: 5,
            reason: None,
        };
        let json = serde_json::to_string(&adj).unwrap();
        assert_eq!(json, r#"{"productId":"p1","quantity":5}"#);
    }

    #[test]
    fn test_stock_without_expanded_product() {
        let json = r#"{
            "id": "s1",
            "productId": "p1",
            "quantity": 3,
            "minQuantity": 1,
            "maxQuantity": 10,
            "lastUpdated": "2025-01-01T00:00:00Z"
        }"#;
        let stock: Stock = serde_json::from_str(json).unwrap();
        assert!(stock.product.is_none());
        assert_eq!(stock.quantity, 3);
    }
}
