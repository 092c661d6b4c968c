//! Attendance payloads and list filters.

use serde::{Deserialize, Serialize};

use super::user::User;

/// One attendance record (a day's clock-in, and clock-out once it happens).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Attendance {
    pub id: String,
    pub user_id: String,
    pub clock_in: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub clock_out: Option<String>,
    pub date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hours_worked: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<User>,
}

/// Which side of the clock a registration is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttendanceEvent {
    ClockIn,
    ClockOut,
}

/// Registration request body.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClockRequest {
    pub user_id: String,
    #[serde(rename = "type")]
    pub event: AttendanceEvent,
}

/// Filter for listing attendance records.
///
/// Only populated fields reach the query string.
#[derive(Debug, Clone, Default)]
pub struct AttendanceQuery {
    pub user_id: Option<String>,
    /// Day in `YYYY-MM-DD` format
    pub date: Option<String>,
}

impl AttendanceQuery {
    pub fn to_query(&self) -> Vec<(String, String)> {
        let mut pairs = Vec::new();
        if let Some(user_id) = &self.user_id {
            pairs.push(("userId".to_string(), user_id.clone()));
        }
        if let Some(date) = &self.date {
            pairs.push(("date".to_string(), date.clone()));
        }
        pairs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clock_request_wire_format() {
        let req = ClockRequest {
            user_id: "u1".into(),
            event: AttendanceEvent::ClockIn,
        };
        let json = serde_json::to_string(&req).unwrap();
        assert_eq!(json, r#"{"userId":"u1","type":"clock_in"}"#);
    }

    #[test]
    fn test_query_skips_absent_fields() {
        let query = AttendanceQuery {
            user_id: Some("u1".into()),
            date: None,
        };
        assert_eq!(
            query.to_query(),
            vec![("userId".to_string(), "u1".to_string())]
        );
        assert!(AttendanceQuery::default().to_query().is_empty());
    }
}
