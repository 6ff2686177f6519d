//! Session lifecycle scenarios
//!
//! End-to-end walks through the state machine with an in-memory store
//! and a scripted gateway: cold start, login, role gating, expiry and
//! sign-out.

#[cfg(test)]
mod lifecycle_tests {
    use std::sync::{Arc, Mutex};

    use kernel::id::{EmployerId, JobSeekerId, UserId};
    use platform::store::{MemoryStore, SessionStore, keys};

    use crate::application::manager::SessionManager;
    use crate::domain::entity::identity::{AccountRecord, Identity, RegisterInput};
    use crate::domain::repository::{AccountGateway, IdentityGateway};
    use crate::domain::state::SessionPhase;
    use crate::domain::value_object::role::Role;
    use crate::error::{AuthError, AuthResult};
    use crate::presentation::guard::{RouteDecision, decide};

    /// Scripted backend: one account, optional pre-existing profiles.
    #[derive(Default)]
    struct Backend {
        token: Option<String>,
        account: Option<AccountRecord>,
        identity: Mutex<Option<AuthResult<Identity>>>,
        job_seeker_id: Option<JobSeekerId>,
        employer_id: Option<EmployerId>,
    }

    impl IdentityGateway for Backend {
        async fn login(&self, _email: &str, _password: &str) -> AuthResult<String> {
            self.token.clone().ok_or(AuthError::InvalidCredentials)
        }

        async fn fetch_identity(&self) -> AuthResult<Identity> {
            self.identity
                .lock()
                .unwrap()
                .take()
                .unwrap_or_else(|| Ok(Identity::default()))
        }

        async fn find_account_by_email(&self, email: &str) -> AuthResult<Option<AccountRecord>> {
            Ok(self
                .account
                .clone()
                .filter(|a| a.email.eq_ignore_ascii_case(email)))
        }

        async fn find_job_seeker_id(&self, _user_id: UserId) -> AuthResult<Option<JobSeekerId>> {
            Ok(self.job_seeker_id)
        }

        async fn create_job_seeker(&self, _user_id: UserId) -> AuthResult<JobSeekerId> {
            Ok(JobSeekerId::new(501))
        }

        async fn find_employer_id(&self, _user_id: UserId) -> AuthResult<Option<EmployerId>> {
            Ok(self.employer_id)
        }
    }

    impl AccountGateway for Backend {
        async fn send_otp(&self, _email: &str) -> AuthResult<()> {
            Ok(())
        }

        async fn verify_otp(&self, _email: &str, _otp: &str) -> AuthResult<bool> {
            Ok(true)
        }

        async fn register(&self, _input: &RegisterInput) -> AuthResult<()> {
            Ok(())
        }

        async fn forgot_password(&self, _email: &str) -> AuthResult<Option<String>> {
            Ok(None)
        }

        async fn reset_password(
            &self,
            _token: &str,
            _new_password: &str,
        ) -> AuthResult<Option<String>> {
            Ok(None)
        }

        async fn change_password(
            &self,
            _email: &str,
            _current_password: &str,
            _new_password: &str,
        ) -> AuthResult<Option<String>> {
            Ok(None)
        }

        async fn verify_credentials(&self, _email: &str, _password: &str) -> AuthResult<bool> {
            Ok(true)
        }

        async fn delete_user(&self, _user_id: UserId) -> AuthResult<()> {
            Ok(())
        }
    }

    fn seeker_backend() -> Backend {
        Backend {
            token: Some("tok-abc".to_string()),
            account: Some(AccountRecord {
                user_id: UserId::new(10),
                email: "seeker@example.com".to_string(),
                user_type: Some("ROLE_JOBSEEKER".to_string()),
            }),
            ..Backend::default()
        }
    }

    #[tokio::test]
    async fn test_cold_start_login_browse_logout() {
        let store = Arc::new(MemoryStore::new());
        let manager = SessionManager::new(
            Arc::new(seeker_backend()),
            store.clone() as Arc<dyn SessionStore>,
        );

        // Before hydration every guarded route is pending.
        assert_eq!(manager.snapshot().phase(), SessionPhase::Hydrating);
        assert_eq!(
            decide(&manager.snapshot(), &[Role::JobSeeker], "/jobs"),
            RouteDecision::Pending
        );

        // Nothing persisted: hydration lands in anonymous, guarded routes
        // bounce to login and remember the origin.
        manager.hydrate();
        assert_eq!(manager.snapshot().phase(), SessionPhase::Anonymous);
        assert_eq!(
            decide(&manager.snapshot(), &[Role::JobSeeker], "/jobs"),
            RouteDecision::RedirectToLogin {
                from: "/jobs".to_string()
            }
        );

        // First login: profile auto-created, role gates open.
        manager.login("seeker@example.com", "pw").await.unwrap();
        let state = manager.snapshot();
        assert_eq!(state.phase(), SessionPhase::Authenticated);
        assert_eq!(
            state.session.as_ref().unwrap().job_seeker_id,
            Some(JobSeekerId::new(501))
        );
        assert_eq!(
            decide(&state, &[Role::JobSeeker], "/jobs"),
            RouteDecision::Allow
        );
        assert_eq!(
            decide(&state, &[Role::Employer], "/employer/dashboard"),
            RouteDecision::RedirectHome
        );

        manager.logout();
        assert_eq!(manager.snapshot().phase(), SessionPhase::Anonymous);
        assert_eq!(store.read(keys::TOKEN), None);
    }

    #[tokio::test]
    async fn test_warm_start_needs_no_network() {
        let store = Arc::new(MemoryStore::with_entries([
            (keys::TOKEN, "tok-abc"),
            (keys::USER_ID, "10"),
            (keys::ROLE, "JOBSEEKER"),
            (keys::JOB_SEEKER_ID, "501"),
        ]));
        // A backend whose every identity call fails; hydration must not care.
        let backend = Backend::default();
        *backend.identity.lock().unwrap() =
            Some(Err(AuthError::Internal("network down".to_string())));

        let manager = SessionManager::new(Arc::new(backend), store as Arc<dyn SessionStore>);
        manager.hydrate();

        let state = manager.snapshot();
        assert_eq!(state.phase(), SessionPhase::Authenticated);
        assert_eq!(
            decide(&state, &[Role::JobSeeker], "/my-applications"),
            RouteDecision::Allow
        );

        // And a refresh over the broken network keeps the session.
        manager.refresh().await;
        assert_eq!(manager.snapshot().phase(), SessionPhase::Authenticated);
    }

    #[tokio::test]
    async fn test_hydrate_without_profile_id_still_passes_role_gate() {
        // A seeker session persisted before the profile existed: token and
        // role are present, the jobSeekerId key is not.
        let store = Arc::new(MemoryStore::with_entries([
            (keys::TOKEN, "tok-abc"),
            (keys::USER_ID, "10"),
            (keys::ROLE, "ROLE_JOBSEEKER"),
        ]));
        let manager = SessionManager::new(
            Arc::new(seeker_backend()),
            store as Arc<dyn SessionStore>,
        );
        manager.hydrate();

        let state = manager.snapshot();
        assert_eq!(state.phase(), SessionPhase::Authenticated);
        let session = state.session.as_ref().unwrap();
        assert_eq!(session.role, Some(Role::JobSeeker));
        assert_eq!(session.job_seeker_id, None);

        // The guard keys on role alone; a missing profile id never blocks.
        assert_eq!(
            decide(&state, &[Role::JobSeeker], "/resumes"),
            RouteDecision::Allow
        );
    }

    #[tokio::test]
    async fn test_expired_token_signs_out_on_refresh() {
        let store = Arc::new(MemoryStore::with_entries([
            (keys::TOKEN, "tok-stale"),
            (keys::USER_ID, "10"),
            (keys::ROLE, "JOBSEEKER"),
        ]));
        let backend = Backend::default();
        *backend.identity.lock().unwrap() = Some(Err(AuthError::Gateway(
            kernel::error::app_error::AppError::unauthorized("Session expired"),
        )));

        let manager =
            SessionManager::new(Arc::new(backend), store.clone() as Arc<dyn SessionStore>);
        manager.hydrate();
        assert_eq!(manager.snapshot().phase(), SessionPhase::Authenticated);

        // The transport layer wipes the store when it sees the 401; the
        // manager only sees the error and the missing token.
        store.clear_all();
        manager.refresh().await;

        let state = manager.snapshot();
        assert_eq!(state.phase(), SessionPhase::Anonymous);
        assert_eq!(
            decide(&state, &[Role::JobSeeker], "/resumes"),
            RouteDecision::RedirectToLogin {
                from: "/resumes".to_string()
            }
        );
    }

    #[tokio::test]
    async fn test_employer_without_profile_still_signs_in() {
        let backend = Backend {
            token: Some("tok-emp".to_string()),
            account: Some(AccountRecord {
                user_id: UserId::new(20),
                email: "boss@example.com".to_string(),
                user_type: Some("ROLE_EMPLOYER".to_string()),
            }),
            employer_id: None,
            ..Backend::default()
        };
        let store = Arc::new(MemoryStore::new());
        let manager =
            SessionManager::new(Arc::new(backend), store.clone() as Arc<dyn SessionStore>);
        manager.hydrate();

        manager.login("boss@example.com", "pw").await.unwrap();
        let state = manager.snapshot();
        assert_eq!(state.session.as_ref().unwrap().role, Some(Role::Employer));
        assert_eq!(state.session.as_ref().unwrap().employer_id, None);
        assert_eq!(
            decide(&state, &[Role::Employer], "/employer/post-job"),
            RouteDecision::Allow
        );

        // Creating the profile later attaches its id without a refresh.
        manager.attach_employer_id(EmployerId::new(31));
        assert_eq!(
            manager.snapshot().session.as_ref().unwrap().employer_id,
            Some(EmployerId::new(31))
        );
        assert_eq!(store.read(keys::EMPLOYER_ID).as_deref(), Some("31"));
    }
}
