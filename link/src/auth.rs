//! Authentication mode and header attachment.
//!
//! Deployments of the Tienda backend come in two flavors: bearer-token
//! (the server issues access/refresh tokens on login) and cookie/session
//! (the server sets an HTTP cookie and returns only the user record).
//! Which one a client talks to is a build-time configuration choice.

/// How the client authenticates against the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AuthMode {
    /// `Authorization: Bearer <token>` from the session store, with the
    /// one-shot refresh-and-retry on 401.
    #[default]
    BearerToken,

    /// Cookie-based server session; no Authorization header is attached and
    /// a 401 ends the session immediately (there is no token to refresh).
    CookieSession,
}

/// Attaches credentials to outgoing requests for a given [`AuthMode`].
#[derive(Debug, Clone, Copy)]
pub struct AuthProvider {
    mode: AuthMode,
}

impl AuthProvider {
    pub fn new(mode: AuthMode) -> Self {
        Self { mode }
    }

    pub fn mode(&self) -> AuthMode {
        self.mode
    }

    /// Whether this provider participates in the 401 refresh-and-retry path.
    pub fn supports_refresh(&self) -> bool {
        self.mode == AuthMode::BearerToken
    }

    /// Attach the appropriate Authorization header.
    ///
    /// Bearer mode with no stored token sends the request unauthenticated;
    /// cookie mode never attaches a header (the cookie jar does the work).
    pub fn apply_to_request(
        &self,
        request: reqwest::RequestBuilder,
        token: Option<&str>,
    ) -> reqwest::RequestBuilder {
        match (self.mode, token) {
            (AuthMode::BearerToken, Some(token)) => request.bearer_auth(token),
            _ => request,
        }
    }
}
