//! Product catalog operations.

use crate::endpoints;
use crate::error::Result;
use crate::http::HttpClient;
use crate::models::{NewProduct, Product, ProductFilter, ProductUpdate};

/// Typed operations over the `/products` resource.
#[derive(Clone)]
pub struct ProductsApi {
    http: HttpClient,
}

impl ProductsApi {
    pub(crate) fn new(http: HttpClient) -> Self {
        Self { http }
    }

    /// List products, optionally filtered by name/category/active/pagination.
    pub async fn list(&self, filter: &ProductFilter) -> Result<Vec<Product>> {
        self.http
            .get(endpoints::PRODUCTS, &filter.to_query())
            .await?
            .into_data("Failed to fetch products")
    }

    pub async fn get(&self, id: &str) -> Result<Product> {
        self.http
            .get(&endpoints::product_by_id(id), &[])
            .await?
            .into_data("Product not found")
    }

    pub async fn by_category(&self, category: &str) -> Result<Vec<Product>> {
        self.http
            .get(&endpoints::products_by_category(category), &[])
            .await?
            .into_data("Failed to fetch products by category")
    }

    /// Search products by name.
    pub async fn search(&self, name: &str) -> Result<Vec<Product>> {
        let query = [("name".to_string(), name.to_string())];
        self.http
            .get(endpoints::PRODUCTS_SEARCH, &query)
            .await?
            .into_data("Failed to search products")
    }

    pub async fn active(&self) -> Result<Vec<Product>> {
        self.http
            .get(endpoints::PRODUCTS_ACTIVE, &[])
            .await?
            .into_data("Failed to fetch active products")
    }

    /// Products that are active and in stock.
    pub async fn available(&self) -> Result<Vec<Product>> {
        self.http
            .get(endpoints::PRODUCTS_AVAILABLE, &[])
            .await?
            .into_data("Failed to fetch available products")
    }

    pub async fn create(&self, product: &NewProduct) -> Result<Product> {
        self.http
            .post(endpoints::PRODUCTS, Some(product))
            .await?
            .into_data("Failed to create product")
    }

    pub async fn update(&self, id: &str, patch: &ProductUpdate) -> Result<Product> {
        self.http
            .put(&endpoints::product_by_id(id), Some(patch))
            .await?
            .into_data("Failed to update product")
    }

    pub async fn delete(&self, id: &str) -> Result<()> {
        self.http
            .delete::<serde_json::Value>(&endpoints::product_by_id(id))
            .await?
            .into_unit("Failed to delete product")
    }

    /// Flip a product inactive without deleting it.
    pub async fn deactivate(&self, id: &str) -> Result<Product> {
        let patch = ProductUpdate {
            is_active: Some(false),
            ..Default::default()
        };
        self.http
            .patch(&endpoints::product_by_id(id), Some(&patch))
            .await?
            .into_data("Failed to deactivate product")
    }
}
