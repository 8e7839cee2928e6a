//! Auth gateway — login, registration, token refresh, user lookup.

use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::http::{Api, ApiError};

/// Authorization tier assigned by the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    User,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Admin => f.write_str("admin"),
            Self::User => f.write_str("user"),
        }
    }
}

/// Account record returned by the user-lookup endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    pub role: Role,
}

/// Credential pair issued on login and refresh.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenPair {
    pub access_token: String,
    pub refresh_token: String,
}

/// New-account payload for registration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub password: String,
}

/// Registration result.
#[derive(Debug, Clone, Deserialize)]
pub struct RegisterReceipt {
    pub id: String,
}

/// The auth endpoints as the session manager sees them. A trait so the
/// recover-vs-propagate policy can be tested against a scripted double
/// without a live backend.
#[async_trait]
pub trait AuthGateway: Send + Sync {
    /// `POST /auth/login` — exchange credentials for a token pair.
    async fn login(&self, email: &str, password: &str) -> Result<TokenPair, ApiError>;

    /// `POST /auth/user/register` — create an account.
    async fn register(&self, new_user: &NewUser) -> Result<RegisterReceipt, ApiError>;

    /// `POST /auth/refresh-token` — mint a fresh token pair.
    async fn refresh(&self, refresh_token: &str) -> Result<TokenPair, ApiError>;

    /// `GET /auth/user/id/{id}` — look an account up by id.
    async fn user_by_id(&self, id: &str) -> Result<User, ApiError>;

    /// `GET /auth/user/email/{email}` — look an account up by email.
    async fn user_by_email(&self, email: &str) -> Result<User, ApiError>;
}

/// Gateway backed by the shared [`Api`] client.
pub struct HttpAuthGateway {
    api: Arc<Api>,
}

impl HttpAuthGateway {
    #[must_use]
    pub fn new(api: Arc<Api>) -> Self {
        Self { api }
    }
}

#[async_trait]
impl AuthGateway for HttpAuthGateway {
    async fn login(&self, email: &str, password: &str) -> Result<TokenPair, ApiError> {
        self.api
            .post_json(
                "/auth/login",
                &serde_json::json!({ "email": email, "password": password }),
            )
            .await
    }

    async fn register(&self, new_user: &NewUser) -> Result<RegisterReceipt, ApiError> {
        self.api.post_json("/auth/user/register", new_user).await
    }

    async fn refresh(&self, refresh_token: &str) -> Result<TokenPair, ApiError> {
        self.api
            .post_json(
                "/auth/refresh-token",
                &serde_json::json!({ "refreshToken": refresh_token }),
            )
            .await
    }

    async fn user_by_id(&self, id: &str) -> Result<User, ApiError> {
        self.api.get_json(&format!("/auth/user/id/{id}")).await
    }

    async fn user_by_email(&self, email: &str) -> Result<User, ApiError> {
        self.api.get_json(&format!("/auth/user/email/{email}")).await
    }
}

#[cfg(test)]
#[path = "auth_test.rs"]
mod tests;
