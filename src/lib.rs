//! Client SDK for the Imovia real-estate marketplace backend.
//!
//! ARCHITECTURE
//! ============
//! One shared [`http::Api`] client carries the base URL and a mutable
//! bearer-token slot. Stateless gateways ([`services`]) translate round
//! trips into typed results. The [`session::SessionManager`] owns the
//! authentication state machine and keeps three places in agreement at all
//! times: in-memory state, the persisted [`store`], and the client's bearer
//! slot. The [`guard`] turns a session snapshot into a navigation decision.

pub mod config;
pub mod guard;
pub mod http;
pub mod services;
pub mod session;
pub mod store;
pub mod token;

pub use config::ApiConfig;
pub use guard::{RouteDecision, RouteGuard};
pub use http::{Api, ApiError};
pub use session::{SessionManager, SessionSnapshot};
