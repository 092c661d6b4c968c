//! Report payloads for the date-ranged report endpoints.

use serde::{Deserialize, Serialize};

use super::attendance::Attendance;

/// Inclusive date range a report covers, `YYYY-MM-DD`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportRange {
    pub start_date: String,
    pub end_date: String,
}

/// Sales report payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SalesReport {
    pub period: ReportRange,
    pub total_sales: f64,
    pub total_orders: u64,
    pub average_order_value: f64,
    pub top_products: Vec<ProductSales>,
    pub sales_by_date: Vec<SalesByDate>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductSales {
    pub product_id: String,
    pub product_name: String,
    pub quantity_sold: i64,
    pub total_revenue: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SalesByDate {
    pub date: String,
    pub sales: f64,
    pub orders: u64,
}

/// Stock report payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StockReport {
    pub low_stock_items: Vec<StockReportItem>,
    pub total_products: u64,
    pub total_stock_value: f64,
    pub stock_by_category: Vec<StockByCategory>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StockReportItem {
    pub product_id: String,
    pub product_name: String,
    pub current_stock: i64,
    pub min_stock: i64,
    pub status: StockLevel,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StockLevel {
    InStock,
    LowStock,
    OutOfStock,
}

impl std::fmt::Display for StockLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            StockLevel::InStock => "in_stock",
            StockLevel::LowStock => "low_stock",
            StockLevel::OutOfStock => "out_of_stock",
        };
        write!(f, "{}", s)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StockByCategory {
    pub category: String,
    pub total_items: u64,
    pub total_value: f64,
}

/// Attendance report payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceReport {
    pub period: ReportRange,
    pub employees: Vec<EmployeeAttendance>,
    pub total_hours: f64,
    pub average_hours_per_employee: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeAttendance {
    pub user_id: String,
    pub user_name: String,
    pub total_hours: f64,
    pub days_worked: u32,
    pub attendances: Vec<Attendance>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stock_level_wire_values() {
        let level: StockLevel = serde_json::from_str(r#""low_stock""#).unwrap();
        assert_eq!(level, StockLevel::LowStock);
    }

    #[test]
    fn test_report_range_wire_format() {
        let range = ReportRange {
            start_date: "2025-01-01".into(),
            end_date: "2025-01-31".into(),
        };
        let json = serde_json::to_string(&range).unwrap();
        assert_eq!(json, r#"{"startDate":"2025-01-01","endDate":"2025-01-31"}"#);
    }
}
