//! Product catalog payloads and list filters.

use serde::{Deserialize, Serialize};

/// A catalog product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub price: f64,
    pub category: String,
    pub is_active: bool,
    pub created_at: String,
    pub updated_at: String,
}

/// Creation payload for a product.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewProduct {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub price: f64,
    pub category: String,
}

/// Partial update payload; absent fields are left untouched by the server.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}

/// Filter parameters for product listing.
///
/// Only populated fields are serialized into the query string; absent
/// filters are omitted entirely, never sent as empty values.
#[derive(Debug, Clone, Default)]
pub struct ProductFilter {
    pub name: Option<String>,
    pub category: Option<String>,
    pub is_active: Option<bool>,
    pub page: Option<u32>,
    pub limit: Option<u32>,
}

impl ProductFilter {
    /// Serialize into query key/value pairs, skipping absent fields.
    pub fn to_query(&self) -> Vec<(String, String)> {
        let mut pairs = Vec::new();
        if let Some(name) = &self.name {
            pairs.push(("name".to_string(), name.clone()));
        }
        if let Some(category) = &self.category {
            pairs.push(("category".to_string(), category.clone()));
        }
        if let Some(is_active) = self.is_active {
            pairs.push(("isActive".to_string(), is_active.to_string()));
        }
        if let Some(page) = self.page {
            pairs.push(("page".to_string(), page.to_string()));
        }
        if let Some(limit) = self.limit {
            pairs.push(("limit".to_string(), limit.to_string()));
        }
        pairs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_serializes_only_populated_fields() {
        let filter = ProductFilter {
            name: Some("Widget".into()),
            is_active: Some(true),
            ..Default::default()
        };
        let pairs = filter.to_query();
        assert_eq!(
            pairs,
            vec![
                ("name".to_string(), "Widget".to_string()),
                ("isActive".to_string(), "true".to_string()),
            ]
        );
        assert!(!pairs
            .iter()
            .any(|(k, _)| k == "category" || k == "page" || k == "limit"));
    }

    #[test]
    fn test_empty_filter_produces_no_pairs() {
        assert!(ProductFilter::default().to_query().is_empty());
    }

    #[test]
    fn test_update_skips_absent_fields() {
        let patch = ProductUpdate {
            is_active: Some(false),
            ..Default::default()
        };
        let json = serde_json::to_string(&patch).unwrap();
        assert_eq!(json, r#"{"isActive":false}"#);
    }
}
