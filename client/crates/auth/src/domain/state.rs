//! Auth State
//!
//! The process-wide session state machine. Two orthogonal facts:
//! whether the first hydration (or a refresh) is still in flight, and
//! whether an identity is currently held.
//!
//! The route guard checks `loading` strictly before `logged_in`; checking
//! the other way round would treat "not yet hydrated" as "not logged in"
//! and flash a bogus login redirect at startup.

use crate::domain::entity::session::Session;

/// Combined lifecycle phase, for matching and display
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    /// Initial state, before the first hydration attempt completes
    Hydrating,
    /// No identity held
    Anonymous,
    /// Identity held; `Session` invariants apply
    Authenticated,
}

/// Snapshot of the session state machine
#[derive(Debug, Clone)]
pub struct AuthState {
    /// True during initial hydration and during an explicit refresh.
    /// While true, no authorization decision may be made.
    pub loading: bool,
    /// The held identity; `Some` iff a token is held
    pub session: Option<Session>,
}

impl AuthState {
    /// State at process start: loading, no identity
    pub fn initial() -> Self {
        Self {
            loading: true,
            session: None,
        }
    }

    /// The single authoritative logged-in flag
    #[inline]
    pub fn logged_in(&self) -> bool {
        self.session.is_some()
    }

    pub fn phase(&self) -> SessionPhase {
        match (&self.session, self.loading) {
            (None, true) => SessionPhase::Hydrating,
            (None, false) => SessionPhase::Anonymous,
            (Some(_), _) => SessionPhase::Authenticated,
        }
    }
}
