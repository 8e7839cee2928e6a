//! Route guard — navigation gate for authenticated-only views.

use crate::session::SessionSnapshot;

/// Default path of the login view.
pub const DEFAULT_LOGIN_PATH: &str = "/login";

/// What the navigation layer should do with a request for a guarded view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteDecision {
    /// Session resolution is still in flight: show a neutral placeholder
    /// and never redirect — a valid persisted token may still come through.
    Checking,
    /// Not authenticated: go to the login view. `replace` means the guarded
    /// route must not stay in history, so back-navigation cannot return to
    /// it.
    Redirect { to: String, replace: bool },
    /// Authenticated: render the requested view unchanged.
    Allow,
}

/// Gate for authenticated-only views. Authentication is the only
/// criterion; the user's role is not consulted.
#[derive(Debug, Clone)]
pub struct RouteGuard {
    login_path: String,
}

impl RouteGuard {
    #[must_use]
    pub fn new() -> Self {
        Self { login_path: DEFAULT_LOGIN_PATH.to_owned() }
    }

    #[must_use]
    pub fn with_login_path(path: &str) -> Self {
        Self { login_path: path.to_owned() }
    }

    /// Pure function of session state; re-evaluate on every navigation.
    #[must_use]
    pub fn decide(&self, session: SessionSnapshot) -> RouteDecision {
        if session.resolving {
            return RouteDecision::Checking;
        }
        if !session.authenticated {
            return RouteDecision::Redirect { to: self.login_path.clone(), replace: true };
        }
        RouteDecision::Allow
    }
}

impl Default for RouteGuard {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "guard_test.rs"]
mod tests;
