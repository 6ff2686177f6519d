//! Gateway Events
//!
//! Global side effects the gateway raises are modeled as explicit events the
//! application subscribes to once, instead of hidden control flow buried in
//! call sites.

/// Events broadcast by [`crate::ApiGateway`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GatewayEvent {
    /// The backend reported the credential invalid (HTTP 401) on some call.
    /// The persisted session store has already been cleared; the application
    /// should drop its in-memory session and navigate to the login entry
    /// point.
    SessionExpired,
}
