//! Product catalog commands.

use tienda_cli::{OutputFormatter, Result};
use tienda_link::models::{NewProduct, Product, ProductFilter, ProductUpdate};
use tienda_link::TiendaClient;

use crate::args::ProductsCommand;

const HEADERS: &[&str] = &["ID", "NAME", "CATEGORY", "PRICE", "ACTIVE"];

fn row(product: &Product) -> Vec<String> {
    vec![
        product.id.clone(),
        product.name.clone(),
        product.category.clone(),
        format!("{:.2}", product.price),
        product.is_active.to_string(),
    ]
}

fn pairs(product: &Product) -> Vec<(&'static str, String)> {
    vec![
        ("id", product.id.clone()),
        ("name", product.name.clone()),
        (
            "description",
            product.description.clone().unwrap_or_else(|| "-".into()),
        ),
        ("price", format!("{:.2}", product.price)),
        ("category", product.category.clone()),
        ("active", product.is_active.to_string()),
        ("created", product.created_at.clone()),
        ("updated", product.updated_at.clone()),
    ]
}

pub async fn handle(
    client: &TiendaClient,
    fmt: &OutputFormatter,
    command: &ProductsCommand,
) -> Result<()> {
    let api = client.products();
    match command {
        ProductsCommand::List {
            name,
            category,
            active,
            page,
            limit,
        } => {
            let filter = ProductFilter {
                name: name.clone(),
                category: category.clone(),
                is_active: *active,
                page: *page,
                limit: *limit,
            };
            let products = api.list(&filter).await?;
            fmt.list(&products, HEADERS, row)
        }
        ProductsCommand::Get { id } => {
            let product = api.get(id).await?;
            fmt.detail(&product, pairs(&product))
        }
        ProductsCommand::Search { name } => {
            let products = api.search(name).await?;
            fmt.list(&products, HEADERS, row)
        }
        ProductsCommand::Category { category } => {
            let products = api.by_category(category).await?;
            fmt.list(&products, HEADERS, row)
        }
        ProductsCommand::Active => {
            let products = api.active().await?;
            fmt.list(&products, HEADERS, row)
        }
        ProductsCommand::Available => {
            let products = api.available().await?;
            fmt.list(&products, HEADERS, row)
        }
        ProductsCommand::Create {
            name,
            description,
            price,
            category,
        } => {
            let product = api
                .create(&NewProduct {
                    name: name.clone(),
                    description: description.clone(),
                    price: *price,
                    category: category.clone(),
                })
                .await?;
            fmt.note(&format!("Created product {}", product.id));
            fmt.detail(&product, pairs(&product))
        }
        ProductsCommand::Update {
            id,
            name,
            description,
            price,
            category,
            active,
        } => {
            let patch = ProductUpdate {
                name: name.clone(),
                description: description.clone(),
                price: *price,
                category: category.clone(),
                is_active: *active,
            };
            let product = api.update(id, &patch).await?;
            fmt.note(&format!("Updated product {}", product.id));
            fmt.detail(&product, pairs(&product))
        }
        ProductsCommand::Delete { id } => {
            api.delete(id).await?;
            fmt.note(&format!("Deleted product {}", id));
            Ok(())
        }
        ProductsCommand::Deactivate { id } => {
            let product = api.deactivate(id).await?;
            fmt.note(&format!("Deactivated product {}", product.id));
            fmt.detail(&product, pairs(&product))
        }
    }
}
