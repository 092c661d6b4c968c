//! Stock level commands.

use tienda_cli::{OutputFormatter, Result};
use tienda_link::models::{QuantityUpdate, Stock, StockAdjustment};
use tienda_link::TiendaClient;

use crate::args::StockCommand;

const HEADERS: &[&str] = &["ID", "PRODUCT", "QTY", "MIN", "MAX", "UPDATED"];

fn row(stock: &Stock) -> Vec<String> {
    let product = stock
        .product
        .as_ref()
        .map(|p| p.name.clone())
        .unwrap_or_else(|| stock.product_id.clone());
    vec![
        stock.id.clone(),
        product,
        stock.quantity.to_string(),
        stock.min_quantity.to_string(),
        stock.max_quantity.to_string(),
        stock.last_updated.clone(),
    ]
}

fn pairs(stock: &Stock) -> Vec<(&'static str, String)> {
    vec![
        ("id", stock.id.clone()),
        ("product", stock.product_id.clone()),
        ("quantity", stock.quantity.to_string()),
        ("min", stock.min_quantity.to_string()),
        ("max", stock.max_quantity.to_string()),
        ("updated", stock.last_updated.clone()),
    ]
}

pub async fn handle(
    client: &TiendaClient,
    fmt: &OutputFormatter,
    command: &StockCommand,
) -> Result<()> {
    let api = client.stock();
    match command {
        StockCommand::List => {
            let stock = api.list().await?;
            fmt.list(&stock, HEADERS, row)
        }
        StockCommand::Product { product_id } => {
            let stock = api.by_product(product_id).await?;
            fmt.detail(&stock, pairs(&stock))
        }
        StockCommand::Low => {
            let stock = api.low().await?;
            fmt.list(&stock, HEADERS, row)
        }
        StockCommand::Increase {
            product_id,
            quantity,
            reason,
        } => {
            let stock = api
                .increase(&StockAdjustment {
                    product_id: product_id.clone(),
                    quantity: *quantity,
                    reason: reason.clone(),
                })
                .await?;
            fmt.note(&format!(
                "Stock for {} is now {}",
                stock.product_id, stock.quantity
            ));
            fmt.detail(&stock, pairs(&stock))
        }
        StockCommand::Decrease {
            product_id,
            quantity,
            reason,
        } => {
            let stock = api
                .decrease(&StockAdjustment {
                    product_id: product_id.clone(),
                    quantity: *quantity,
                    reason: reason.clone(),
                })
                .await?;
            fmt.note(&format!(
                "Stock for {} is now {}",
                stock.product_id, stock.quantity
            ));
            fmt.detail(&stock, pairs(&stock))
        }
        StockCommand::Set {
            product_id,
            quantity,
            min,
            max,
        } => {
            let stock = api
                .set_quantity(&QuantityUpdate {
                    product_id: product_id.clone(),
                    quantity: *quantity,
                    min_quantity: *min,
                    max_quantity: *max,
                })
                .await?;
            fmt.note(&format!(
                "Stock for {} set to {}",
                stock.product_id, stock.quantity
            ));
            fmt.detail(&stock, pairs(&stock))
        }
    }
}
