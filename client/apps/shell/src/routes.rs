//! Route Table
//!
//! Every page the shell knows about, with its access rule. The guard
//! decision itself lives in the auth crate; this table only says which
//! rule applies to which path.

use auth::models::{AuthState, Role};
use auth::{RouteDecision, decide};

/// Who may enter a route
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    Public,
    /// Any signed-in visitor, whatever their role
    Authenticated,
    Only(&'static [Role]),
}

pub struct Route {
    pub path: &'static str,
    pub access: Access,
}

const JOBSEEKER: &[Role] = &[Role::JobSeeker];
const EMPLOYER: &[Role] = &[Role::Employer];

/// The full application route table. Path segments starting with `:` are
/// parameters and match any single segment.
pub const ROUTES: &[Route] = &[
    Route { path: "/", access: Access::Public },
    Route { path: "/login", access: Access::Public },
    Route { path: "/register", access: Access::Public },
    Route { path: "/password", access: Access::Public },
    Route { path: "/reset-password", access: Access::Public },
    Route { path: "/notifications", access: Access::Public },
    // Job seeker pages
    Route { path: "/profile/jobseeker", access: Access::Only(JOBSEEKER) },
    Route { path: "/jobseeker/dashboard", access: Access::Only(JOBSEEKER) },
    Route { path: "/jobs", access: Access::Only(JOBSEEKER) },
    Route { path: "/jobs/:id", access: Access::Only(JOBSEEKER) },
    Route { path: "/my-applications", access: Access::Only(JOBSEEKER) },
    Route { path: "/resumes", access: Access::Only(JOBSEEKER) },
    Route { path: "/recommendations", access: Access::Only(JOBSEEKER) },
    // Employer pages
    Route { path: "/profile/employer", access: Access::Only(EMPLOYER) },
    Route { path: "/employer/dashboard", access: Access::Only(EMPLOYER) },
    Route { path: "/employer/post-job", access: Access::Only(EMPLOYER) },
    Route { path: "/employer/jobs", access: Access::Only(EMPLOYER) },
    Route { path: "/applications/employer", access: Access::Only(EMPLOYER) },
    // Account pages for any signed-in visitor
    Route { path: "/change-password", access: Access::Authenticated },
    Route { path: "/delete-account", access: Access::Authenticated },
];

/// Find the route matching a concrete path.
pub fn find(path: &str) -> Option<&'static Route> {
    ROUTES.iter().find(|route| matches(route.path, path))
}

/// Decide what to do with a navigation attempt. `None` means no such route.
pub fn decide_for(state: &AuthState, path: &str) -> Option<RouteDecision> {
    let route = find(path)?;
    Some(match route.access {
        Access::Public => RouteDecision::Allow,
        Access::Authenticated => decide(state, &[], path),
        Access::Only(roles) => decide(state, roles, path),
    })
}

/// Paths the navigation bar should offer for the current state.
pub fn visible_links(state: &AuthState) -> Vec<&'static str> {
    ROUTES
        .iter()
        .filter(|route| {
            matches!(
                decide_for(state, route.path),
                Some(RouteDecision::Allow)
            ) && !route.path.contains(':')
        })
        .map(|route| route.path)
        .collect()
}

fn matches(pattern: &str, path: &str) -> bool {
    let mut pattern_segments = pattern.trim_matches('/').split('/');
    let mut path_segments = path.trim_matches('/').split('/');
    loop {
        match (pattern_segments.next(), path_segments.next()) {
            (None, None) => return true,
            (Some(p), Some(s)) => {
                if !p.starts_with(':') && p != s {
                    return false;
                }
            }
            _ => return false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use auth::models::Session;
    use kernel::id::UserId;

    fn state(role: Option<Role>) -> AuthState {
        AuthState {
            loading: false,
            session: Some(Session {
                token: "tok".to_string(),
                user_id: UserId::new(1),
                role,
                job_seeker_id: None,
                employer_id: None,
                email: None,
            }),
        }
    }

    #[test]
    fn test_parameter_segments_match() {
        assert!(find("/jobs/42").is_some());
        assert!(find("/jobs/42/extra").is_none());
        assert!(find("/nope").is_none());
    }

    #[test]
    fn test_public_routes_ignore_state() {
        let anonymous = AuthState {
            loading: false,
            session: None,
        };
        assert_eq!(
            decide_for(&anonymous, "/login"),
            Some(RouteDecision::Allow)
        );
        // Even while loading.
        let loading = AuthState {
            loading: true,
            session: None,
        };
        assert_eq!(decide_for(&loading, "/"), Some(RouteDecision::Allow));
    }

    #[test]
    fn test_role_gated_routes() {
        let seeker = state(Some(Role::JobSeeker));
        assert_eq!(decide_for(&seeker, "/jobs/7"), Some(RouteDecision::Allow));
        assert_eq!(
            decide_for(&seeker, "/employer/dashboard"),
            Some(RouteDecision::RedirectHome)
        );

        let employer = state(Some(Role::Employer));
        assert_eq!(
            decide_for(&employer, "/employer/dashboard"),
            Some(RouteDecision::Allow)
        );
        assert_eq!(
            decide_for(&employer, "/resumes"),
            Some(RouteDecision::RedirectHome)
        );
    }

    #[test]
    fn test_account_pages_need_any_login() {
        assert_eq!(
            decide_for(&state(None), "/change-password"),
            Some(RouteDecision::Allow)
        );
        let anonymous = AuthState {
            loading: false,
            session: None,
        };
        assert_eq!(
            decide_for(&anonymous, "/change-password"),
            Some(RouteDecision::RedirectToLogin {
                from: "/change-password".to_string()
            })
        );
    }

    #[test]
    fn test_visible_links_by_role() {
        let seeker_links = visible_links(&state(Some(Role::JobSeeker)));
        assert!(seeker_links.contains(&"/jobs"));
        assert!(seeker_links.contains(&"/change-password"));
        assert!(!seeker_links.contains(&"/employer/dashboard"));
        assert!(!seeker_links.contains(&"/jobs/:id"));

        let anonymous = AuthState {
            loading: false,
            session: None,
        };
        let public_links = visible_links(&anonymous);
        assert!(public_links.contains(&"/login"));
        assert!(!public_links.contains(&"/jobs"));
    }
}
