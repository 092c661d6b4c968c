//! Error types for tienda-link.
//!
//! Every failure a client call can produce collapses into [`TiendaLinkError`].
//! The classification matters to callers: `status_code()` returns 0 for
//! transport failures where no response arrived, so "offline" can be told
//! apart from "server rejected".

use thiserror::Error;

/// Result type for tienda-link operations
pub type Result<T> = std::result::Result<T, TiendaLinkError>;

/// Errors returned by the Tienda client.
#[derive(Error, Debug)]
pub enum TiendaLinkError {
    /// Server responded with a non-success HTTP status
    #[error("Server error ({status_code}): {message}")]
    Server { status_code: u16, message: String },

    /// Request was sent but no response arrived (connect/timeout/transport)
    #[error("Network error: {0}")]
    Network(String),

    /// Envelope-level failure: the server answered 2xx but `success` was false
    #[error("{message}")]
    Api { message: String },

    /// The session is no longer valid and has been cleared; the caller must
    /// redirect to the login entry point
    #[error("Session expired: {0}")]
    SessionExpired(String),

    /// Client construction or local persistence error
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// JSON (de)serialization failure
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl TiendaLinkError {
    /// Classify a transport-layer failure.
    ///
    /// Three-way split, in order:
    /// 1. a response arrived with an error status -> [`Server`](Self::Server)
    /// 2. the request went out but no response came back -> [`Network`](Self::Network)
    /// 3. the request could not even be built or sent -> [`Serialization`](Self::Serialization)
    pub fn from_reqwest(err: reqwest::Error) -> Self {
        if let Some(status) = err.status() {
            return TiendaLinkError::Server {
                status_code: status.as_u16(),
                message: err.to_string(),
            };
        }
        if err.is_connect() || err.is_timeout() || err.is_request() || err.is_body() {
            return TiendaLinkError::Network(err.to_string());
        }
        TiendaLinkError::Serialization(err.to_string())
    }

    /// HTTP-like status code for this error.
    ///
    /// 0 means the request never produced a response (offline, refused,
    /// timed out). Everything without a better mapping reports 500.
    pub fn status_code(&self) -> u16 {
        match self {
            TiendaLinkError::Server { status_code, .. } => *status_code,
            TiendaLinkError::Network(_) => 0,
            TiendaLinkError::Api { .. } => 400,
            TiendaLinkError::SessionExpired(_) => 401,
            TiendaLinkError::Configuration(_) => 500,
            TiendaLinkError::Serialization(_) => 500,
        }
    }

    /// True when the failure is worth retrying at the caller's discretion
    /// (the request may never have reached the server).
    pub fn is_network(&self) -> bool {
        matches!(self, TiendaLinkError::Network(_))
    }
}

impl From<reqwest::Error> for TiendaLinkError {
    fn from(err: reqwest::Error) -> Self {
        TiendaLinkError::from_reqwest(err)
    }
}

impl From<serde_json::Error> for TiendaLinkError {
    fn from(err: serde_json::Error) -> Self {
        TiendaLinkError::Serialization(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        let err = TiendaLinkError::Server {
            status_code: 404,
            message: "Product not found".into(),
        };
        assert_eq!(err.status_code(), 404);

        let err = TiendaLinkError::Network("connection refused".into());
        assert_eq!(err.status_code(), 0);
        assert!(err.is_network());

        let err = TiendaLinkError::Serialization("bad payload".into());
        assert_eq!(err.status_code(), 500);

        let err = TiendaLinkError::SessionExpired("refresh failed".into());
        assert_eq!(err.status_code(), 401);
    }

    #[test]
    fn test_display() {
        let err = TiendaLinkError::Server {
            status_code: 500,
            message: "boom".into(),
        };
        assert_eq!(err.to_string(), "Server error (500): boom");

        let err = TiendaLinkError::Api {
            message: "Failed to fetch products".into(),
        };
        assert_eq!(err.to_string(), "Failed to fetch products");
    }
}
