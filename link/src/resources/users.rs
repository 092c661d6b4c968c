//! User management operations.

use crate::endpoints;
use crate::error::Result;
use crate::http::HttpClient;
use crate::models::{RegisterUserRequest, User};

/// Typed operations over the `/users` resource.
#[derive(Clone)]
pub struct UsersApi {
    http: HttpClient,
}

impl UsersApi {
    pub(crate) fn new(http: HttpClient) -> Self {
        Self { http }
    }

    pub async fn list(&self) -> Result<Vec<User>> {
        self.http
            .get(endpoints::USERS, &[])
            .await?
            .into_data("Failed to fetch users")
    }

    pub async fn get(&self, id: &str) -> Result<User> {
        self.http
            .get(&endpoints::user_by_id(id), &[])
            .await?
            .into_data("User not found")
    }

    /// Create a user directly (admin path, unlike self-registration).
    pub async fn create(&self, request: &RegisterUserRequest) -> Result<User> {
        self.http
            .post(endpoints::USERS, Some(request))
            .await?
            .into_data("Failed to create user")
    }
}
