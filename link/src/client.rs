//! Main Tienda client with builder pattern.
//!
//! Provides the primary interface for talking to a Tienda backend and
//! hands out the typed resource clients.

use std::sync::Arc;
use std::time::Duration;

use log::debug;
use tokio::sync::Mutex;

use crate::auth::{AuthMode, AuthProvider};
use crate::error::{Result, TiendaLinkError};
use crate::http::HttpClient;
use crate::resources::{
    AttendanceApi, AuthApi, OrdersApi, ProductsApi, ReportsApi, StockApi, UsersApi,
};
use crate::session::{MemorySessionStore, SessionStore, SharedSessionStore};
use crate::timeouts::TiendaLinkTimeouts;

/// Main Tienda API client.
///
/// Use [`TiendaClientBuilder`] to construct instances with custom
/// configuration.
///
/// # Examples
///
/// ```rust,no_run
/// use tienda_link::TiendaClient;
/// use tienda_link::models::LoginRequest;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let client = TiendaClient::builder()
///     .base_url("http://localhost:3001/api")
///     .build()?;
///
/// let auth = client
///     .auth()
///     .login(&LoginRequest {
///         email: "admin@example.com".into(),
///         password: "secret123".into(),
///     })
///     .await?;
/// println!("Logged in as {}", auth.user.name);
///
/// let products = client.products().list(&Default::default()).await?;
/// println!("{} products", products.len());
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct TiendaClient {
    http: HttpClient,
}

impl TiendaClient {
    /// Create a new builder for configuring the client
    pub fn builder() -> TiendaClientBuilder {
        TiendaClientBuilder::new()
    }

    /// Authentication and session lifecycle operations
    pub fn auth(&self) -> AuthApi {
        AuthApi::new(self.http.clone())
    }

    /// Product catalog operations
    pub fn products(&self) -> ProductsApi {
        ProductsApi::new(self.http.clone())
    }

    /// Stock level operations
    pub fn stock(&self) -> StockApi {
        StockApi::new(self.http.clone())
    }

    /// Order operations
    pub fn orders(&self) -> OrdersApi {
        OrdersApi::new(self.http.clone())
    }

    /// User management operations
    pub fn users(&self) -> UsersApi {
        UsersApi::new(self.http.clone())
    }

    /// Attendance operations
    pub fn attendance(&self) -> AttendanceApi {
        AttendanceApi::new(self.http.clone())
    }

    /// Report generation operations
    pub fn reports(&self) -> ReportsApi {
        ReportsApi::new(self.http.clone())
    }

    /// Handle to the session store this client reads and writes.
    pub fn session_store(&self) -> SharedSessionStore {
        self.http.store().clone()
    }
}

/// Builder for configuring [`TiendaClient`] instances.
pub struct TiendaClientBuilder {
    base_url: Option<String>,
    auth_mode: AuthMode,
    timeouts: TiendaLinkTimeouts,
    store: Option<SharedSessionStore>,
}

impl TiendaClientBuilder {
    fn new() -> Self {
        Self {
            base_url: None,
            auth_mode: AuthMode::default(),
            timeouts: TiendaLinkTimeouts::default(),
            store: None,
        }
    }

    /// Set the base URL of the backend, e.g. `http://localhost:3001/api`
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Choose between bearer-token and cookie-session deployments
    pub fn auth_mode(mut self, mode: AuthMode) -> Self {
        self.auth_mode = mode;
        self
    }

    /// Set the per-request deadline, keeping the other timeouts
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeouts.request_timeout = timeout;
        self
    }

    /// Set the full timeout configuration
    pub fn timeouts(mut self, timeouts: TiendaLinkTimeouts) -> Self {
        self.timeouts = timeouts;
        self
    }

    /// Use a custom session store (file-backed, keyring, ...).
    ///
    /// Defaults to an in-memory store that forgets the session when the
    /// process exits.
    pub fn session_store<S: SessionStore + Send + 'static>(mut self, store: S) -> Self {
        self.store = Some(Arc::new(Mutex::new(store)));
        self
    }

    /// Build the client
    pub fn build(self) -> Result<TiendaClient> {
        let base_url = self
            .base_url
            .ok_or_else(|| TiendaLinkError::Configuration("base_url is required".into()))?;
        let base_url = base_url.trim_end_matches('/').to_string();

        // Pooled connections with keep-alive; one client instance is meant
        // to be shared across the whole application.
        let mut client_builder = reqwest::Client::builder()
            .timeout(self.timeouts.request_timeout)
            .connect_timeout(self.timeouts.connection_timeout)
            .pool_max_idle_per_host(10)
            .pool_idle_timeout(Duration::from_secs(90));

        if self.auth_mode == AuthMode::CookieSession {
            debug!("[CLIENT] Cookie-session mode, enabling cookie store");
            client_builder = client_builder.cookie_store(true);
        }

        let http_client = client_builder
            .build()
            .map_err(|e| TiendaLinkError::Configuration(e.to_string()))?;

        let store = self
            .store
            .unwrap_or_else(|| Arc::new(Mutex::new(MemorySessionStore::new())));

        Ok(TiendaClient {
            http: HttpClient::new(
                base_url,
                http_client,
                AuthProvider::new(self.auth_mode),
                store,
            ),
        })
    }
}
