//! Attendance operations.

use crate::endpoints;
use crate::error::Result;
use crate::http::HttpClient;
use crate::models::{Attendance, AttendanceQuery, ClockRequest};

/// Typed operations over the `/attendance` resource.
#[derive(Clone)]
pub struct AttendanceApi {
    http: HttpClient,
}

impl AttendanceApi {
    pub(crate) fn new(http: HttpClient) -> Self {
        Self { http }
    }

    /// Register a clock-in or clock-out for a user.
    pub async fn register(&self, request: &ClockRequest) -> Result<Attendance> {
        self.http
            .post(endpoints::ATTENDANCE_REGISTER, Some(request))
            .await?
            .into_data("Failed to register attendance")
    }

    /// List attendance records, optionally narrowed to a user and a day.
    pub async fn list(&self, query: &AttendanceQuery) -> Result<Vec<Attendance>> {
        self.http
            .get(endpoints::ATTENDANCE, &query.to_query())
            .await?
            .into_data("Failed to fetch attendance records")
    }
}
