//! Shared HTTP client with a mutable bearer-token slot.
//!
//! ARCHITECTURE
//! ============
//! Every gateway call rides one `Api` instance, so the session manager can
//! swap the `Authorization` header in a single place. The bearer slot is
//! the only cross-cutting channel between the session and the gateways.
//!
//! ERROR HANDLING
//! ==============
//! Failures are normalized before they leave this module: a transport
//! error with no server response becomes [`ApiError::Unreachable`], a
//! non-success status becomes [`ApiError::Rejected`] carrying the server's
//! `message` body verbatim when one is present.

use std::sync::{Mutex, MutexGuard, PoisonError};

use reqwest::Method;
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::config::ApiConfig;

/// Normalized outcome of a failed API round trip.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// Transport failed before any server response arrived.
    #[error("server unreachable: {0}")]
    Unreachable(String),
    /// The server answered with a non-success status.
    #[error("{message}")]
    Rejected { status: u16, message: String },
    /// The server answered 2xx but the body did not match the expected shape.
    #[error("malformed response body: {0}")]
    BadResponse(String),
}

impl ApiError {
    /// True when no server response was received at all.
    #[must_use]
    pub fn is_unreachable(&self) -> bool {
        matches!(self, Self::Unreachable(_))
    }
}

/// Error body shape shared by every backend endpoint.
#[derive(Debug, serde::Deserialize)]
struct ErrorBody {
    message: String,
}

/// Map a non-success response body to a `Rejected` error, passing the
/// server's message through verbatim when the body parses.
fn rejection(status: u16, body: &str) -> ApiError {
    let message = serde_json::from_str::<ErrorBody>(body)
        .map_or_else(|_| format!("request failed with status {status}"), |b| b.message);
    ApiError::Rejected { status, message }
}

/// Shared client: one `reqwest::Client`, one base URL, one bearer slot.
pub struct Api {
    client: reqwest::Client,
    base_url: String,
    bearer: Mutex<Option<String>>,
}

impl Api {
    #[must_use]
    pub fn new(config: ApiConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: config.base_url,
            bearer: Mutex::new(None),
        }
    }

    fn slot(&self) -> MutexGuard<'_, Option<String>> {
        self.bearer.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Set the token attached as `Authorization: Bearer <token>` to every
    /// subsequent request.
    pub fn set_bearer(&self, token: &str) {
        *self.slot() = Some(token.to_owned());
    }

    /// Stop attaching an `Authorization` header.
    pub fn clear_bearer(&self) {
        *self.slot() = None;
    }

    /// Current bearer token, if any.
    #[must_use]
    pub fn bearer(&self) -> Option<String> {
        self.slot().clone()
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    fn request(&self, method: Method, path: &str) -> reqwest::RequestBuilder {
        let mut req = self.client.request(method, self.url(path));
        if let Some(token) = self.bearer() {
            req = req.header(reqwest::header::AUTHORIZATION, format!("Bearer {token}"));
        }
        req
    }

    async fn send<T: DeserializeOwned>(&self, req: reqwest::RequestBuilder) -> Result<T, ApiError> {
        let resp = req.send().await.map_err(|e| ApiError::Unreachable(e.to_string()))?;
        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(rejection(status.as_u16(), &body));
        }
        resp.json::<T>().await.map_err(|e| ApiError::BadResponse(e.to_string()))
    }

    /// `GET` a JSON resource.
    ///
    /// # Errors
    ///
    /// Returns a normalized [`ApiError`] for transport failures, non-2xx
    /// responses, and unparseable bodies.
    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        self.send(self.request(Method::GET, path)).await
    }

    /// `POST` a JSON body, expecting a JSON response.
    ///
    /// # Errors
    ///
    /// Same normalization as [`Api::get_json`].
    pub async fn post_json<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.send(self.request(Method::POST, path).json(body)).await
    }

    /// `PUT` a JSON body, expecting a JSON response.
    ///
    /// # Errors
    ///
    /// Same normalization as [`Api::get_json`].
    pub async fn put_json<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.send(self.request(Method::PUT, path).json(body)).await
    }

    /// `DELETE` a resource, ignoring any response body.
    ///
    /// # Errors
    ///
    /// Same normalization as [`Api::get_json`].
    pub async fn delete(&self, path: &str) -> Result<(), ApiError> {
        let resp = self
            .request(Method::DELETE, path)
            .send()
            .await
            .map_err(|e| ApiError::Unreachable(e.to_string()))?;
        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(rejection(status.as_u16(), &body));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "http_test.rs"]
mod tests;
