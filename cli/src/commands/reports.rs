//! Report commands.

use tienda_cli::{OutputFormat, OutputFormatter, Result};
use tienda_link::models::ReportRange;
use tienda_link::TiendaClient;

use crate::args::ReportsCommand;

fn range(from: &str, to: &str) -> ReportRange {
    ReportRange {
        start_date: from.to_string(),
        end_date: to.to_string(),
    }
}

pub async fn handle(
    client: &TiendaClient,
    fmt: &OutputFormatter,
    command: &ReportsCommand,
) -> Result<()> {
    let api = client.reports();
    match command {
        ReportsCommand::Sales { from, to } => {
            let report = api.sales(&range(from, to)).await?;
            if fmt.format() == OutputFormat::Json {
                return fmt.json(&report);
            }

            fmt.note(&format!(
                "Sales {} .. {}",
                report.period.start_date, report.period.end_date
            ));
            fmt.note(&format!(
                "{} orders, {:.2} total, {:.2} average",
                report.total_orders, report.total_sales, report.average_order_value
            ));

            let rows = report
                .top_products
                .iter()
                .map(|p| {
                    vec![
                        p.product_name.clone(),
                        p.quantity_sold.to_string(),
                        format!("{:.2}", p.total_revenue),
                    ]
                })
                .collect();
            fmt.table(&["PRODUCT", "SOLD", "REVENUE"], rows);

            let rows = report
                .sales_by_date
                .iter()
                .map(|d| {
                    vec![
                        d.date.clone(),
                        d.orders.to_string(),
                        format!("{:.2}", d.sales),
                    ]
                })
                .collect();
            fmt.table(&["DATE", "ORDERS", "SALES"], rows);
            Ok(())
        }
        ReportsCommand::Stock => {
            let report = api.stock().await?;
            if fmt.format() == OutputFormat::Json {
                return fmt.json(&report);
            }

            fmt.note(&format!(
                "{} products, stock value {:.2}",
                report.total_products, report.total_stock_value
            ));

            let rows = report
                .low_stock_items
                .iter()
                .map(|item| {
                    vec![
                        item.product_name.clone(),
                        item.current_stock.to_string(),
                        item.min_stock.to_string(),
                        item.status.to_string(),
                    ]
                })
                .collect();
            fmt.table(&["PRODUCT", "STOCK", "MIN", "STATUS"], rows);

            let rows = report
                .stock_by_category
                .iter()
                .map(|c| {
                    vec![
                        c.category.clone(),
                        c.total_items.to_string(),
                        format!("{:.2}", c.total_value),
                    ]
                })
                .collect();
            fmt.table(&["CATEGORY", "ITEMS", "VALUE"], rows);
            Ok(())
        }
        ReportsCommand::Attendance { from, to } => {
            let report = api.attendance(&range(from, to)).await?;
            if fmt.format() == OutputFormat::Json {
                return fmt.json(&report);
            }

            fmt.note(&format!(
                "Attendance {} .. {}",
                report.period.start_date, report.period.end_date
            ));
            fmt.note(&format!(
                "{:.2} hours total, {:.2} per employee",
                report.total_hours, report.average_hours_per_employee
            ));

            let rows = report
                .employees
                .iter()
                .map(|e| {
                    vec![
                        e.user_name.clone(),
                        e.days_worked.to_string(),
                        format!("{:.2}", e.total_hours),
                    ]
                })
                .collect();
            fmt.table(&["EMPLOYEE", "DAYS", "HOURS"], rows);
            Ok(())
        }
    }
}
