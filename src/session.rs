//! Session manager — the authentication state machine.
//!
//! ARCHITECTURE
//! ============
//! One `SessionManager` owns the in-memory session (current user, tokens,
//! resolving flag) and keeps three places in agreement after every
//! transition: memory, the persisted credential store, and the shared
//! client's bearer slot. Mutators take `&mut self`, so transitions are
//! serialized by the borrow checker and readers only ever observe a fully
//! settled state; a second login cannot interleave with a first.
//!
//! STATE MACHINE
//! =============
//! `Resolving -> {Authenticated, Anonymous}` via [`SessionManager::initialize`]
//! (runs once), `Anonymous -> Authenticated` via [`SessionManager::login`],
//! `Authenticated -> Anonymous` via [`SessionManager::logout`] or a failed
//! re-login.
//!
//! TRADE-OFFS
//! ==========
//! A login whose follow-up user fetch fails rolls the persisted tokens and
//! the bearer slot back to fully anonymous instead of leaving a
//! tokens-but-no-user half state behind.

use std::sync::Arc;

use crate::http::{Api, ApiError};
use crate::services::auth::{AuthGateway, TokenPair, User};
use crate::store::{ACCESS_TOKEN_KEY, CredentialStore, REFRESH_TOKEN_KEY, StoreError};
use crate::token::{self, TokenError};

#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error(transparent)]
    Api(#[from] ApiError),
    #[error(transparent)]
    Token(#[from] TokenError),
    #[error("credential store failed: {0}")]
    Store(#[from] StoreError),
}

/// Read-only view of the session, consumed by the route guard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionSnapshot {
    /// Startup resolution has not settled yet.
    pub resolving: bool,
    /// A user is signed in.
    pub authenticated: bool,
}

/// Process-wide authentication state. See the module docs for the state
/// machine.
pub struct SessionManager<G, S> {
    gateway: G,
    store: S,
    api: Arc<Api>,
    user: Option<User>,
    access_token: Option<String>,
    refresh_token: Option<String>,
    resolving: bool,
}

impl<G: AuthGateway, S: CredentialStore> SessionManager<G, S> {
    /// A fresh manager starts in the resolving state; call
    /// [`SessionManager::initialize`] before consulting the guard.
    pub fn new(api: Arc<Api>, gateway: G, store: S) -> Self {
        Self {
            gateway,
            store,
            api,
            user: None,
            access_token: None,
            refresh_token: None,
            resolving: true,
        }
    }

    /// Startup resolution: try to revive a persisted session.
    ///
    /// Runs at most once per manager and never fails. With no stored token
    /// it settles anonymous without touching the network. With one, it
    /// decodes the user id (fail-soft), sets the bearer slot, and fetches
    /// the user; any failure — undecodable token, unreachable server,
    /// rejected or vanished account — clears both stored tokens and the
    /// bearer slot. The resolving flag flips false exactly once, after the
    /// attempt settles.
    pub async fn initialize(&mut self) {
        if !self.resolving {
            return;
        }

        if let Some(stored) = self.store.get(ACCESS_TOKEN_KEY) {
            match self.resolve_user(&stored).await {
                Ok(user) => {
                    tracing::info!(user_id = %user.id, "session restored from stored token");
                    self.user = Some(user);
                    self.access_token = Some(stored);
                    self.refresh_token = self.store.get(REFRESH_TOKEN_KEY);
                }
                Err(e) => {
                    if matches!(&e, SessionError::Api(api) if api.is_unreachable()) {
                        tracing::warn!(error = %e, "server unreachable during session restore");
                    } else {
                        tracing::warn!(error = %e, "stored token rejected, clearing session");
                    }
                    self.discard_credentials();
                }
            }
        }
        self.resolving = false;
    }

    /// Authenticate with the backend.
    ///
    /// On success the session is authenticated, both tokens are persisted,
    /// and the bearer slot carries the new access token. On any failure the
    /// session is left — or rolled back to — fully anonymous and the error
    /// propagates to the caller for display; a gateway rejection carries
    /// the server's message verbatim.
    ///
    /// # Errors
    ///
    /// Returns a [`SessionError`] for gateway failures, an undecodable
    /// access token, or credential-store I/O failures.
    pub async fn login(&mut self, email: &str, password: &str) -> Result<&User, SessionError> {
        let pair = self.gateway.login(email, password).await?;

        if let Err(e) = self.persist_pair(&pair) {
            self.discard_credentials();
            return Err(e.into());
        }

        match self.resolve_user(&pair.access_token).await {
            Ok(user) => {
                self.access_token = Some(pair.access_token);
                self.refresh_token = Some(pair.refresh_token);
                Ok(self.user.insert(user))
            }
            Err(e) => {
                self.discard_credentials();
                Err(e)
            }
        }
    }

    /// End the session. Idempotent and infallible: memory, both stored
    /// keys, and the bearer slot are cleared unconditionally.
    pub fn logout(&mut self) {
        self.discard_credentials();
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    #[must_use]
    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    #[must_use]
    pub fn access_token(&self) -> Option<&str> {
        self.access_token.as_deref()
    }

    #[must_use]
    pub fn refresh_token(&self) -> Option<&str> {
        self.refresh_token.as_deref()
    }

    /// True until the startup resolution attempt has settled.
    #[must_use]
    pub fn is_resolving(&self) -> bool {
        self.resolving
    }

    #[must_use]
    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot { resolving: self.resolving, authenticated: self.is_authenticated() }
    }

    /// The underlying credential store, for inspection.
    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Decode the token's user id, point the bearer slot at it, and fetch
    /// the account it names.
    async fn resolve_user(&mut self, access_token: &str) -> Result<User, SessionError> {
        let user_id = token::decode_user_id(access_token)?;
        self.api.set_bearer(access_token);
        let user = self.gateway.user_by_id(&user_id).await?;
        Ok(user)
    }

    fn persist_pair(&mut self, pair: &TokenPair) -> Result<(), StoreError> {
        self.store.set(ACCESS_TOKEN_KEY, &pair.access_token)?;
        self.store.set(REFRESH_TOKEN_KEY, &pair.refresh_token)?;
        Ok(())
    }

    /// Drop every trace of the credentials: memory, store, bearer slot.
    /// Store failures are logged rather than raised so logout stays
    /// infallible.
    fn discard_credentials(&mut self) {
        self.user = None;
        self.access_token = None;
        self.refresh_token = None;
        for key in [ACCESS_TOKEN_KEY, REFRESH_TOKEN_KEY] {
            if let Err(e) = self.store.remove(key) {
                tracing::warn!(error = %e, key, "failed to remove stored credential");
            }
        }
        self.api.clear_bearer();
    }
}

#[cfg(test)]
#[path = "session_test.rs"]
mod tests;
