//! Order commands.

use tienda_cli::{CliError, OutputFormat, OutputFormatter, Result};
use tienda_link::models::{NewOrder, NewOrderItem, Order};
use tienda_link::TiendaClient;

use crate::args::OrdersCommand;

const HEADERS: &[&str] = &["ID", "STATUS", "ITEMS", "TOTAL", "CREATED", "BY"];

fn row(order: &Order) -> Vec<String> {
    vec![
        order.id.clone(),
        order.status.to_string(),
        order.items.len().to_string(),
        format!("{:.2}", order.total),
        order.created_at.clone(),
        order.created_by.clone(),
    ]
}

/// Parse an `--item product_id:quantity` spec.
fn parse_item(spec: &str) -> Result<NewOrderItem> {
    let (product_id, quantity) = spec.split_once(':').ok_or_else(|| {
        CliError::Parse(format!(
            "invalid item '{}', expected product_id:quantity",
            spec
        ))
    })?;
    if product_id.is_empty() {
        return Err(CliError::Parse(format!(
            "invalid item '{}', product id is empty",
            spec
        )));
    }
    let quantity: i64 = quantity.parse().map_err(|_| {
        CliError::Parse(format!(
            "invalid item '{}', quantity must be an integer",
            spec
        ))
    })?;
    Ok(NewOrderItem {
        product_id: product_id.to_string(),
        quantity,
    })
}

fn print_order(fmt: &OutputFormatter, order: &Order) -> Result<()> {
    if fmt.format() == OutputFormat::Json {
        return fmt.json(order);
    }
    fmt.detail(
        order,
        vec![
            ("id", order.id.clone()),
            ("status", order.status.to_string()),
            ("total", format!("{:.2}", order.total)),
            ("created", order.created_at.clone()),
            ("by", order.created_by.clone()),
        ],
    )?;
    let rows: Vec<Vec<String>> = order
        .items
        .iter()
        .map(|item| {
            vec![
                item.product
                    .as_ref()
                    .map(|p| p.name.clone())
                    .unwrap_or_else(|| item.product_id.clone()),
                item.quantity.to_string(),
                format!("{:.2}", item.price),
                format!("{:.2}", item.total),
            ]
        })
        .collect();
    fmt.table(&["PRODUCT", "QTY", "PRICE", "TOTAL"], rows);
    Ok(())
}

pub async fn handle(
    client: &TiendaClient,
    fmt: &OutputFormatter,
    command: &OrdersCommand,
) -> Result<()> {
    let api = client.orders();
    match command {
        OrdersCommand::List => {
            let orders = api.list().await?;
            fmt.list(&orders, HEADERS, row)
        }
        OrdersCommand::Get { id } => {
            let order = api.get(id).await?;
            print_order(fmt, &order)
        }
        OrdersCommand::Create { items } => {
            let items = items
                .iter()
                .map(|spec| parse_item(spec))
                .collect::<Result<Vec<_>>>()?;
            let order = api.create(&NewOrder { items }).await?;
            fmt.note(&format!(
                "Created order {} (total {:.2})",
                order.id, order.total
            ));
            print_order(fmt, &order)
        }
    }
}
