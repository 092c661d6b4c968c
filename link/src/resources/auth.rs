//! Authentication operations and session lifecycle.
//!
//! This is the only resource client that writes to the session store: login
//! persists the returned user and tokens, refresh rotates them, logout
//! clears them no matter what the server said.

use log::{debug, warn};

use crate::endpoints;
use crate::error::Result;
use crate::http::HttpClient;
use crate::models::{AuthResponse, LoginRequest, RegisterUserRequest, User};
use crate::session::Session;

/// Login, logout, registration and token refresh.
#[derive(Clone)]
pub struct AuthApi {
    http: HttpClient,
}

impl AuthApi {
    pub(crate) fn new(http: HttpClient) -> Self {
        Self { http }
    }

    /// Authenticate and persist the resulting session.
    ///
    /// On deployments without tokens the response carries only the user
    /// record; the session is stored tokenless and authentication state is
    /// derived from it.
    pub async fn login(&self, credentials: &LoginRequest) -> Result<AuthResponse> {
        debug!("[LOGIN] Authenticating '{}'", credentials.email);
        let auth = self
            .http
            .post::<AuthResponse, _>(endpoints::AUTH_LOGIN, Some(credentials))
            .await?
            .into_data("Login failed")?;

        self.http
            .save_session(&Session::new(
                auth.user.clone(),
                auth.access_token.clone(),
                auth.refresh_token.clone(),
            ))
            .await?;
        debug!("[LOGIN] Authenticated '{}'", auth.user.email);
        Ok(auth)
    }

    /// Create a new user account. Does not touch the stored session.
    pub async fn register(&self, request: &RegisterUserRequest) -> Result<User> {
        self.http
            .post::<User, _>(endpoints::AUTH_REGISTER, Some(request))
            .await?
            .into_data("Registration failed")
    }

    /// Exchange the stored refresh token for a new session.
    ///
    /// Fails immediately, without a network call, when no refresh token is
    /// stored. On failure the existing session is left untouched and the
    /// error propagates to the caller.
    pub async fn refresh(&self) -> Result<()> {
        self.http.refresh_session().await
    }

    /// Notify the server and clear the local session.
    ///
    /// The server call is best-effort: its failure is logged and swallowed
    /// so that local session clearance is never skipped.
    pub async fn logout(&self) -> Result<()> {
        let result = self
            .http
            .post::<serde_json::Value, ()>(endpoints::AUTH_LOGOUT, None)
            .await
            .and_then(|envelope| envelope.into_unit("Logout failed"));
        if let Err(err) = result {
            warn!("[LOGOUT] Server logout failed (ignored): {}", err);
        }
        self.http.clear_session().await;
        debug!("[LOGOUT] Local session cleared");
        Ok(())
    }

    /// The stored user record, if any.
    pub async fn current_user(&self) -> Option<User> {
        self.http.load_session().await.and_then(|s| s.user)
    }

    /// Whether a usable authenticated session is stored.
    pub async fn is_authenticated(&self) -> bool {
        self.http
            .load_session()
            .await
            .map(|s| s.is_authenticated())
            .unwrap_or(false)
    }
}
