//! Route Guard
//!
//! Pure function from session state to a navigation decision. The checks
//! run in a fixed order:
//!
//! 1. still loading - render nothing, decide later
//! 2. not logged in - go to the login page, remembering where we came from
//! 3. role not allowed - go home (authorization, not authentication)
//! 4. otherwise - allow
//!
//! Loading is checked strictly first: deciding "not logged in" before
//! hydration finishes would bounce an already-authenticated visitor to
//! the login page at every startup.

use crate::domain::state::AuthState;
use crate::domain::value_object::role::Role;

/// What the shell should do with a navigation attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteDecision {
    /// Hydration in flight; render nothing and re-decide when it settles
    Pending,
    Allow,
    /// Authentication failure; `from` is the path to return to after login
    RedirectToLogin { from: String },
    /// Authorization failure (wrong or unknown role)
    RedirectHome,
}

/// Decide whether the current state may enter a route.
///
/// An empty `allowed_roles` slice means any authenticated visitor may
/// enter. A session without a recognized role fails every non-empty role
/// check; an unknown role grants nothing.
pub fn decide(state: &AuthState, allowed_roles: &[Role], requested_path: &str) -> RouteDecision {
    if state.loading {
        return RouteDecision::Pending;
    }
    let Some(session) = state.session.as_ref() else {
        return RouteDecision::RedirectToLogin {
            from: requested_path.to_string(),
        };
    };
    if allowed_roles.is_empty() || session.has_any_role(allowed_roles) {
        RouteDecision::Allow
    } else {
        RouteDecision::RedirectHome
    }
}
