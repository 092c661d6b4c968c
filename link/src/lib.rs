//! Client SDK for the Tienda back-office API.
//!
//! Talks to a Tienda backend over its `{success, data, error}` response
//! envelope and exposes typed clients for every resource: products, stock,
//! orders, users, attendance and reports, plus the authentication/session
//! lifecycle.
//!
//! The client supports both backend deployment flavors: bearer-token
//! (access/refresh tokens with a one-shot refresh-and-retry on 401) and
//! cookie-session (no tokens; authentication state derives from the
//! persisted user record). See [`AuthMode`].
//!
//! # Examples
//!
//! ```rust,no_run
//! use tienda_link::TiendaClient;
//! use tienda_link::models::ProductFilter;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = TiendaClient::builder()
//!     .base_url("http://localhost:3001/api")
//!     .build()?;
//!
//! let widgets = client
//!     .products()
//!     .list(&ProductFilter {
//!         name: Some("Widget".into()),
//!         is_active: Some(true),
//!         ..Default::default()
//!     })
//!     .await?;
//! println!("{} active widgets", widgets.len());
//! # Ok(())
//! # }
//! ```

pub mod auth;
pub mod client;
pub mod endpoints;
pub mod error;
mod http;
pub mod models;
pub mod resources;
pub mod session;
pub mod timeouts;

pub use auth::{AuthMode, AuthProvider};
pub use client::{TiendaClient, TiendaClientBuilder};
pub use error::{Result, TiendaLinkError};
pub use session::{MemorySessionStore, Session, SessionStore, SharedSessionStore};
pub use timeouts::TiendaLinkTimeouts;
