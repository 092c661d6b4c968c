//! Stock level operations.

use crate::endpoints;
use crate::error::Result;
use crate::http::HttpClient;
use crate::models::{QuantityUpdate, Stock, StockAdjustment};

/// Typed operations over the `/stock` resource.
#[derive(Clone)]
pub struct StockApi {
    http: HttpClient,
}

impl StockApi {
    pub(crate) fn new(http: HttpClient) -> Self {
        Self { http }
    }

    pub async fn list(&self) -> Result<Vec<Stock>> {
        self.http
            .get(endpoints::STOCK, &[])
            .await?
            .into_data("Failed to fetch stock")
    }

    pub async fn by_product(&self, product_id: &str) -> Result<Stock> {
        self.http
            .get(&endpoints::stock_by_product(product_id), &[])
            .await?
            .into_data("Stock not found for product")
    }

    /// Items at or below their minimum quantity.
    pub async fn low(&self) -> Result<Vec<Stock>> {
        self.http
            .get(endpoints::STOCK_LOW, &[])
            .await?
            .into_data("Failed to fetch low stock items")
    }

    pub async fn increase(&self, adjustment: &StockAdjustment) -> Result<Stock> {
        self.http
            .post(endpoints::STOCK_INCREASE, Some(adjustment))
            .await?
            .into_data("Failed to increase stock")
    }

    pub async fn decrease(&self, adjustment: &StockAdjustment) -> Result<Stock> {
        self.http
            .post(endpoints::STOCK_DECREASE, Some(adjustment))
            .await?
            .into_data("Failed to decrease stock")
    }

    /// Set an absolute quantity, optionally adjusting thresholds.
    pub async fn set_quantity(&self, update: &QuantityUpdate) -> Result<Stock> {
        self.http
            .put(endpoints::STOCK_UPDATE_QUANTITY, Some(update))
            .await?
            .into_data("Failed to update stock quantity")
    }
}
