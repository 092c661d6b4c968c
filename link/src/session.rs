//! Session record and storage abstraction.
//!
//! The session is the client-held record of the authenticated user and its
//! optional tokens. Storage backends range from the in-memory store shipped
//! here (tests, ephemeral processes) to file-backed stores in consuming
//! applications.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;

use crate::error::Result;
use crate::models::User;

/// Session store handle shared between the client and the application.
pub type SharedSessionStore = Arc<Mutex<dyn SessionStore + Send>>;

/// The client-held authentication state.
///
/// Created on successful login, mutated on token refresh, destroyed on
/// logout or when corrupted persisted data is detected. Token fields stay
/// `None` on cookie/session deployments.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<User>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub access_token: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub refresh_token: Option<String>,
}

impl Session {
    /// Session for a freshly authenticated user.
    pub fn new(user: User, access_token: Option<String>, refresh_token: Option<String>) -> Self {
        Self {
            user: Some(user),
            access_token,
            refresh_token,
        }
    }

    /// True only when a user record is present and that user is active.
    ///
    /// No token is required: cookie/session deployments carry no tokens and
    /// derive the authenticated state from the persisted user alone. An
    /// inactive user is treated as unauthenticated even with tokens held.
    pub fn is_authenticated(&self) -> bool {
        self.user.as_ref().map(|u| u.is_active).unwrap_or(false)
    }
}

/// Storage backend for the session record.
///
/// Mutations are synchronous and immediately visible to subsequent reads;
/// there is no cache beyond the persistence medium itself. Concurrent
/// writers are last-write-wins.
pub trait SessionStore {
    /// Persist the session, replacing whatever was stored.
    fn save(&mut self, session: &Session) -> Result<()>;

    /// Load the stored session.
    ///
    /// Malformed persisted data is discarded and reported as absent rather
    /// than raised; the corruption must not resurface on later loads.
    fn load(&self) -> Option<Session>;

    /// Drop the stored session.
    fn clear(&mut self) -> Result<()>;

    /// Whether a usable authenticated session is stored.
    fn is_authenticated(&self) -> bool {
        self.load().map(|s| s.is_authenticated()).unwrap_or(false)
    }

    /// The stored bearer token, if any.
    fn access_token(&self) -> Option<String> {
        self.load().and_then(|s| s.access_token)
    }

    /// The stored refresh token, if any.
    fn refresh_token(&self) -> Option<String> {
        self.load().and_then(|s| s.refresh_token)
    }
}

/// In-memory session store.
///
/// Does not persist across restarts; used by tests and short-lived
/// processes that log in on every run.
#[derive(Debug, Default, Clone)]
pub struct MemorySessionStore {
    session: Option<Session>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemorySessionStore {
    fn save(&mut self, session: &Session) -> Result<()> {
        self.session = Some(session.clone());
        Ok(())
    }

    fn load(&self) -> Option<Session> {
        self.session.clone()
    }

    fn clear(&mut self) -> Result<()> {
        self.session = None;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::UserRole;

    fn user(active: bool) -> User {
        User {
            id: "u1".into(),
            email: "alice@example.com".into(),
            name: "Alice".into(),
            role: UserRole::Admin,
            is_active: active,
            created_at: "2025-01-01T00:00:00Z".into(),
            updated_at: "2025-01-01T00:00:00Z".into(),
        }
    }

    #[test]
    fn test_memory_store_roundtrip() {
        let mut store = MemorySessionStore::new();
        assert_eq!(store.load(), None);
        assert!(!store.is_authenticated());

        let session = Session::new(user(true), Some("tok".into()), Some("refresh".into()));
        store.save(&session).unwrap();
        assert_eq!(store.load(), Some(session));
        assert!(store.is_authenticated());
        assert_eq!(store.access_token().as_deref(), Some("tok"));
        assert_eq!(store.refresh_token().as_deref(), Some("refresh"));

        store.clear().unwrap();
        assert_eq!(store.load(), None);
        assert!(!store.is_authenticated());
    }

    #[test]
    fn test_inactive_user_is_unauthenticated() {
        let mut store = MemorySessionStore::new();
        store
            .save(&Session::new(user(false), Some("tok".into()), None))
            .unwrap();
        // A stored user failing the active check must read as anonymous
        assert!(!store.is_authenticated());
        // The tokens are still loadable for cleanup purposes
        assert_eq!(store.access_token().as_deref(), Some("tok"));
    }

    #[test]
    fn test_tokenless_session_is_authenticated() {
        let mut store = MemorySessionStore::new();
        store.save(&Session::new(user(true), None, None)).unwrap();
        assert!(store.is_authenticated());
        assert_eq!(store.access_token(), None);
    }

    #[test]
    fn test_last_write_wins() {
        let mut store = MemorySessionStore::new();
        store
            .save(&Session::new(user(true), Some("first".into()), None))
            .unwrap();
        store
            .save(&Session::new(user(true), Some("second".into()), None))
            .unwrap();
        assert_eq!(store.access_token().as_deref(), Some("second"));
    }
}
