//! HTTP transport with credential attachment and the one-shot
//! refresh-and-retry interceptor.
//!
//! Requests are built fresh on every attempt (request builders with bodies
//! can't be cloned), credentials are re-read from the session store per
//! attempt, and a 401 is handled by an explicit bounded state machine so a
//! request can never be replayed more than once.

use log::{debug, warn};
use reqwest::{Method, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::auth::AuthProvider;
use crate::endpoints;
use crate::error::{Result, TiendaLinkError};
use crate::models::envelope::{ApiEnvelope, ErrorBody};
use crate::models::user::{AuthResponse, RefreshRequest};
use crate::session::{Session, SharedSessionStore};

/// Progress of the 401 recovery for one logical request.
///
/// `Idle` -> first 401 triggers a refresh -> `Retrying` while the refresh is
/// in flight -> `Done` once the request has been replayed. A 401 in `Done`
/// propagates; there is no path back to `Idle`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RetryState {
    Idle,
    Retrying,
    Done,
}

/// Issues envelope-wrapped requests against the backend.
#[derive(Clone)]
pub(crate) struct HttpClient {
    base_url: String,
    http_client: reqwest::Client,
    auth: AuthProvider,
    store: SharedSessionStore,
}

impl HttpClient {
    pub(crate) fn new(
        base_url: String,
        http_client: reqwest::Client,
        auth: AuthProvider,
        store: SharedSessionStore,
    ) -> Self {
        Self {
            base_url,
            http_client,
            auth,
            store,
        }
    }

    pub(crate) fn store(&self) -> &SharedSessionStore {
        &self.store
    }

    pub(crate) async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(String, String)],
    ) -> Result<ApiEnvelope<T>> {
        self.request(Method::GET, path, query, None).await
    }

    pub(crate) async fn post<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: Option<&B>,
    ) -> Result<ApiEnvelope<T>> {
        self.request(Method::POST, path, &[], to_body(body)?).await
    }

    pub(crate) async fn put<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: Option<&B>,
    ) -> Result<ApiEnvelope<T>> {
        self.request(Method::PUT, path, &[], to_body(body)?).await
    }

    pub(crate) async fn patch<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: Option<&B>,
    ) -> Result<ApiEnvelope<T>> {
        self.request(Method::PATCH, path, &[], to_body(body)?).await
    }

    pub(crate) async fn delete<T: DeserializeOwned>(&self, path: &str) -> Result<ApiEnvelope<T>> {
        self.request(Method::DELETE, path, &[], None).await
    }

    /// Send one logical request, recovering from at most one 401.
    async fn request<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        query: &[(String, String)],
        body: Option<serde_json::Value>,
    ) -> Result<ApiEnvelope<T>> {
        let url = format!("{}{}", self.base_url, path);
        let mut state = RetryState::Idle;

        loop {
            // Re-read the token per attempt: after a refresh the replayed
            // request must carry the refreshed credentials, never the stale
            // ones.
            let token = { self.store.lock().await.access_token() };

            let mut builder = self.http_client.request(method.clone(), &url);
            if !query.is_empty() {
                builder = builder.query(&query);
            }
            if let Some(body) = &body {
                builder = builder.json(body);
            }
            builder = self.auth.apply_to_request(builder, token.as_deref());

            debug!("[LINK_HTTP] {} {} (state={:?})", method, url, state);
            let response = builder.send().await.map_err(TiendaLinkError::from_reqwest)?;
            let status = response.status();
            debug!("[LINK_HTTP] Response: status={} url={}", status, url);

            if status == StatusCode::UNAUTHORIZED {
                match state {
                    RetryState::Idle if self.auth.supports_refresh() => {
                        state = RetryState::Retrying;
                        match self.refresh_session().await {
                            Ok(()) => {
                                debug!("[LINK_HTTP] Refresh succeeded, replaying {} {}", method, url);
                                state = RetryState::Done;
                                continue;
                            }
                            Err(err) => {
                                warn!("[LINK_HTTP] Refresh failed, forcing logout: {}", err);
                                self.clear_session().await;
                                return Err(TiendaLinkError::SessionExpired(err.to_string()));
                            }
                        }
                    }
                    RetryState::Idle => {
                        // Cookie mode: there is no token to refresh
                        warn!("[LINK_HTTP] Unauthorized in cookie mode, clearing session");
                        self.clear_session().await;
                        return Err(TiendaLinkError::SessionExpired(
                            "authentication required".to_string(),
                        ));
                    }
                    RetryState::Retrying | RetryState::Done => {
                        // Replayed request was rejected again; give up rather
                        // than loop
                        let message = read_error_message(response).await;
                        warn!("[LINK_HTTP] Still unauthorized after retry: {}", message);
                        return Err(TiendaLinkError::Server {
                            status_code: StatusCode::UNAUTHORIZED.as_u16(),
                            message,
                        });
                    }
                }
            }

            if !status.is_success() {
                let message = read_error_message(response).await;
                warn!(
                    "[LINK_HTTP] Server error: status={} message=\"{}\" url={}",
                    status, message, url
                );
                return Err(TiendaLinkError::Server {
                    status_code: status.as_u16(),
                    message,
                });
            }

            return response
                .json::<ApiEnvelope<T>>()
                .await
                .map_err(TiendaLinkError::from_reqwest);
        }
    }

    /// Exchange the stored refresh token for a fresh session.
    ///
    /// Fails without touching the network when no refresh token is stored.
    /// On failure the stored session is left as-is; forcing logout is the
    /// caller's decision.
    pub(crate) async fn refresh_session(&self) -> Result<()> {
        let refresh_token = { self.store.lock().await.refresh_token() };
        let Some(refresh_token) = refresh_token else {
            return Err(TiendaLinkError::SessionExpired(
                "no refresh token available".to_string(),
            ));
        };

        let url = format!("{}{}", self.base_url, endpoints::AUTH_REFRESH);
        debug!("[REFRESH] POST {}", url);
        let response = self
            .http_client
            .post(&url)
            .json(&RefreshRequest { refresh_token })
            .send()
            .await
            .map_err(TiendaLinkError::from_reqwest)?;

        let status = response.status();
        if !status.is_success() {
            let message = read_error_message(response).await;
            warn!("[REFRESH] Rejected: status={} message=\"{}\"", status, message);
            return Err(TiendaLinkError::Server {
                status_code: status.as_u16(),
                message,
            });
        }

        let envelope = response
            .json::<ApiEnvelope<AuthResponse>>()
            .await
            .map_err(TiendaLinkError::from_reqwest)?;
        let auth = envelope.into_data("Token refresh failed")?;

        let mut store = self.store.lock().await;
        // A rotated refresh token replaces the old one; otherwise the old
        // one stays valid for the next refresh.
        let refresh_token = auth
            .refresh_token
            .or_else(|| store.load().and_then(|s| s.refresh_token));
        store.save(&Session::new(auth.user, auth.access_token, refresh_token))?;
        debug!("[REFRESH] Session updated");
        Ok(())
    }

    /// Persist a freshly authenticated session.
    pub(crate) async fn save_session(&self, session: &Session) -> Result<()> {
        self.store.lock().await.save(session)
    }

    /// Drop the stored session, logging (not raising) persistence failures.
    pub(crate) async fn clear_session(&self) {
        if let Err(err) = self.store.lock().await.clear() {
            warn!("[SESSION] Failed to clear stored session: {}", err);
        }
    }

    pub(crate) async fn load_session(&self) -> Option<Session> {
        self.store.lock().await.load()
    }
}

fn to_body<B: Serialize + ?Sized>(body: Option<&B>) -> Result<Option<serde_json::Value>> {
    body.map(serde_json::to_value).transpose().map_err(Into::into)
}

/// Pull the most specific message out of a failed response body.
///
/// The backend answers failures with the envelope shape; fall back to the
/// raw body, then to a generic label when the body is empty or unreadable.
async fn read_error_message(response: reqwest::Response) -> String {
    let text = response.text().await.unwrap_or_default();
    if let Ok(body) = serde_json::from_str::<ErrorBody>(&text) {
        if let Some(message) = body.error.or(body.message) {
            return message;
        }
    }
    if text.trim().is_empty() {
        "API Error".to_string()
    } else {
        text
    }
}
