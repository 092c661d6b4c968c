//! Order operations.

use crate::endpoints;
use crate::error::Result;
use crate::http::HttpClient;
use crate::models::{NewOrder, Order};

/// Typed operations over the `/orders` resource.
#[derive(Clone)]
pub struct OrdersApi {
    http: HttpClient,
}

impl OrdersApi {
    pub(crate) fn new(http: HttpClient) -> Self {
        Self { http }
    }

    pub async fn list(&self) -> Result<Vec<Order>> {
        self.http
            .get(endpoints::ORDERS, &[])
            .await?
            .into_data("Failed to fetch orders")
    }

    pub async fn get(&self, id: &str) -> Result<Order> {
        self.http
            .get(&endpoints::order_by_id(id), &[])
            .await?
            .into_data("Order not found")
    }

    /// Place an order; the server prices the lines and computes the total.
    pub async fn create(&self, order: &NewOrder) -> Result<Order> {
        self.http
            .post(endpoints::ORDERS, Some(order))
            .await?
            .into_data("Failed to create order")
    }
}
