//! Typed gateways over the backend's REST endpoints.
//!
//! ARCHITECTURE
//! ============
//! Gateways are stateless: each call is a single round trip whose failure
//! is normalized by the shared client. Token persistence and header
//! mutation stay with the session manager, never here.

pub mod auth;
pub mod listing;
