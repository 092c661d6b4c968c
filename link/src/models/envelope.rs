//! The `{success, data, error}` wire envelope every endpoint returns.

use serde::{Deserialize, Serialize};

use crate::error::{Result, TiendaLinkError};

/// Uniform response wrapper for every Tienda API endpoint.
///
/// `success` is authoritative: a 2xx response carrying `success: false` is a
/// failure regardless of HTTP status. Use [`into_data`](Self::into_data) or
/// [`into_unit`](Self::into_unit) to unwrap instead of probing the optional
/// fields directly.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct ApiEnvelope<T> {
    pub success: bool,
    #[serde(default)]
    pub data: Option<T>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

impl<T> ApiEnvelope<T> {
    /// Unwrap the envelope into its payload.
    ///
    /// Returns the payload only for `success: true` with `data` present.
    /// Every other shape fails with the envelope's own `error` (preferred)
    /// or `message`, falling back to `default_msg`.
    pub fn into_data(self, default_msg: &str) -> Result<T> {
        match (self.success, self.data) {
            (true, Some(data)) => Ok(data),
            (true, None) | (false, _) => Err(TiendaLinkError::Api {
                message: pick_message(self.error, self.message, default_msg),
            }),
        }
    }

    /// Unwrap an envelope where no payload is expected (delete, logout).
    ///
    /// `success: true` is enough; a missing `data` field is not an error.
    pub fn into_unit(self, default_msg: &str) -> Result<()> {
        if self.success {
            Ok(())
        } else {
            Err(TiendaLinkError::Api {
                message: pick_message(self.error, self.message, default_msg),
            })
        }
    }

    /// The most specific failure message this envelope carries.
    pub fn error_message(&self) -> Option<&str> {
        self.error.as_deref().or(self.message.as_deref())
    }
}

fn pick_message(error: Option<String>, message: Option<String>, default_msg: &str) -> String {
    error.or(message).unwrap_or_else(|| default_msg.to_string())
}

/// Failure-shaped response body, used when the server rejects a request
/// with a non-2xx status.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorBody {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub status_code: Option<u16>,
}

/// Pagination metadata attached to paginated list responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub page: u32,
    pub limit: u32,
    pub total: u64,
    pub total_pages: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn envelope(
        success: bool,
        data: Option<i32>,
        error: Option<&str>,
        message: Option<&str>,
    ) -> ApiEnvelope<i32> {
        ApiEnvelope {
            success,
            data,
            message: message.map(String::from),
            error: error.map(String::from),
        }
    }

    #[test]
    fn test_success_returns_data_unchanged() {
        let payload = envelope(true, Some(42), None, None)
            .into_data("default")
            .unwrap();
        assert_eq!(payload, 42);
    }

    #[test]
    fn test_failure_prefers_error_field() {
        let err = envelope(false, None, Some("explicit error"), Some("a message"))
            .into_data("default")
            .unwrap_err();
        assert_eq!(err.to_string(), "explicit error");
    }

    #[test]
    fn test_failure_falls_back_to_message_then_default() {
        let err = envelope(false, None, None, Some("only message"))
            .into_data("default")
            .unwrap_err();
        assert_eq!(err.to_string(), "only message");

        let err = envelope(false, None, None, None)
            .into_data("default")
            .unwrap_err();
        assert_eq!(err.to_string(), "default");
    }

    #[test]
    fn test_success_without_data_is_failure() {
        let err = envelope(true, None, None, None)
            .into_data("missing body")
            .unwrap_err();
        assert_eq!(err.to_string(), "missing body");
    }

    #[test]
    fn test_success_false_on_2xx_is_authoritative() {
        let err = envelope(false, Some(42), Some("rejected"), None)
            .into_data("default")
            .unwrap_err();
        assert_eq!(err.to_string(), "rejected");
    }

    #[test]
    fn test_into_unit_accepts_missing_data() {
        envelope(true, None, None, None).into_unit("default").unwrap();
        let err = envelope(false, None, None, None)
            .into_unit("delete failed")
            .unwrap_err();
        assert_eq!(err.to_string(), "delete failed");
    }

    #[test]
    fn test_envelope_deserializes_without_optional_fields() {
        let env: ApiEnvelope<Vec<String>> =
            serde_json::from_str(r#"{"success":true,"data":["a"]}"#).unwrap();
        assert!(env.success);
        assert_eq!(env.data.unwrap(), vec!["a".to_string()]);

        let env: ApiEnvelope<Vec<String>> =
            serde_json::from_str(r#"{"success":false,"error":"nope"}"#).unwrap();
        assert_eq!(env.error_message(), Some("nope"));
    }
}
