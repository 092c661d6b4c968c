//! Timeout configuration for client operations.

use std::time::Duration;

/// Timeouts applied to every request the client issues.
///
/// The request timeout is a fixed per-request deadline; a request that
/// outlives it is treated as a transport failure. No per-call cancellation
/// is exposed.
///
/// # Examples
///
/// ```rust
/// use tienda_link::TiendaLinkTimeouts;
/// use std::time::Duration;
///
/// // Defaults are right for most deployments
/// let timeouts = TiendaLinkTimeouts::default();
///
/// // Local development against a server on the same machine
/// let timeouts = TiendaLinkTimeouts::fast();
///
/// // Custom
/// let timeouts = TiendaLinkTimeouts::default()
///     .with_request_timeout(Duration::from_secs(60));
/// ```
#[derive(Debug, Clone)]
pub struct TiendaLinkTimeouts {
    /// Timeout for establishing connections (TCP + TLS handshake).
    /// Default: 10 seconds
    pub connection_timeout: Duration,

    /// Deadline for a whole request/response exchange.
    /// Default: 30 seconds
    pub request_timeout: Duration,
}

impl Default for TiendaLinkTimeouts {
    fn default() -> Self {
        Self {
            connection_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(30),
        }
    }
}

impl TiendaLinkTimeouts {
    /// Timeouts optimized for localhost development.
    pub fn fast() -> Self {
        Self {
            connection_timeout: Duration::from_secs(2),
            request_timeout: Duration::from_secs(5),
        }
    }

    /// Timeouts optimized for high-latency or unreliable networks.
    pub fn relaxed() -> Self {
        Self {
            connection_timeout: Duration::from_secs(30),
            request_timeout: Duration::from_secs(120),
        }
    }

    pub fn with_connection_timeout(mut self, timeout: Duration) -> Self {
        self.connection_timeout = timeout;
        self
    }

    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }
}
