//! Session Entity
//!
//! The client-held record of the current authenticated identity. A value of
//! this type exists iff a token exists; "logged in" is therefore a property
//! of the surrounding [`crate::domain::state::AuthState`], not a flag here.

use kernel::id::{EmployerId, JobSeekerId, UserId};

use crate::domain::value_object::role::Role;

/// Authenticated identity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    /// Opaque bearer credential
    pub token: String,
    /// Account id
    pub user_id: UserId,
    /// Normalized role; `None` when the backend sent something unrecognized
    pub role: Option<Role>,
    /// Job-seeker profile id; `None` means the profile has not been created
    /// yet, which is a valid authenticated state
    pub job_seeker_id: Option<JobSeekerId>,
    /// Employer profile id; same absence semantics
    pub employer_id: Option<EmployerId>,
    /// Descriptive only, never used for authorization
    pub email: Option<String>,
}

impl Session {
    /// Whether the session's role is one of `allowed`.
    ///
    /// A session without a recognized role fails every check.
    pub fn has_any_role(&self, allowed: &[Role]) -> bool {
        match self.role {
            Some(role) => allowed.contains(&role),
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session(role: Option<Role>) -> Session {
        Session {
            token: "t1".to_string(),
            user_id: UserId::new(1),
            role,
            job_seeker_id: None,
            employer_id: None,
            email: None,
        }
    }

    #[test]
    fn test_has_any_role() {
        let s = session(Some(Role::JobSeeker));
        assert!(s.has_any_role(&[Role::JobSeeker]));
        assert!(s.has_any_role(&[Role::JobSeeker, Role::Employer]));
        assert!(!s.has_any_role(&[Role::Employer]));
    }

    #[test]
    fn test_no_role_fails_every_check() {
        let s = session(None);
        assert!(!s.has_any_role(&[Role::JobSeeker]));
        assert!(!s.has_any_role(&[Role::JobSeeker, Role::Employer]));
    }
}
