//! Report generation operations.

use crate::endpoints;
use crate::error::Result;
use crate::http::HttpClient;
use crate::models::{AttendanceReport, ReportRange, SalesReport, StockReport};

/// Typed operations over the `/reports` endpoints.
#[derive(Clone)]
pub struct ReportsApi {
    http: HttpClient,
}

impl ReportsApi {
    pub(crate) fn new(http: HttpClient) -> Self {
        Self { http }
    }

    /// Generate a sales report for a date range.
    pub async fn sales(&self, range: &ReportRange) -> Result<SalesReport> {
        self.http
            .post(endpoints::REPORTS_SALES, Some(range))
            .await?
            .into_data("Failed to generate sales report")
    }

    /// Current stock report; not date-ranged, it reflects the present state.
    pub async fn stock(&self) -> Result<StockReport> {
        self.http
            .get(endpoints::REPORTS_STOCK, &[])
            .await?
            .into_data("Failed to generate stock report")
    }

    /// Generate an attendance report for a date range.
    pub async fn attendance(&self, range: &ReportRange) -> Result<AttendanceReport> {
        self.http
            .post(endpoints::REPORTS_ATTENDANCE, Some(range))
            .await?
            .into_data("Failed to generate attendance report")
    }
}
