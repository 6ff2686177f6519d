//! Session Manager
//!
//! Owns the process-wide [`AuthState`] and drives every transition:
//! hydration from the persisted store at startup, login, identity
//! refresh, profile-id attachment, logout and account deletion.
//!
//! Locking discipline: the state lock is `std::sync::RwLock` and is
//! never held across an `.await`. Every async operation gathers its
//! results first and applies them to the state in one short critical
//! section.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, RwLock};

use kernel::id::{EmployerId, JobSeekerId, UserId};
use platform::store::{SessionStore, keys};

use crate::domain::entity::identity::Identity;
use crate::domain::entity::session::Session;
use crate::domain::repository::{AccountGateway, IdentityGateway};
use crate::domain::state::AuthState;
use crate::domain::value_object::role::{ROLE_PREFIX, Role};
use crate::error::{AuthError, AuthResult};

/// Drives the session state machine
pub struct SessionManager<G>
where
    G: IdentityGateway + AccountGateway,
{
    gateway: Arc<G>,
    store: Arc<dyn SessionStore>,
    state: RwLock<AuthState>,
    hydrated: AtomicBool,
}

impl<G> SessionManager<G>
where
    G: IdentityGateway + AccountGateway,
{
    /// Starts in the hydrating state; call [`hydrate`](Self::hydrate) once
    /// at startup to leave it.
    pub fn new(gateway: Arc<G>, store: Arc<dyn SessionStore>) -> Self {
        Self {
            gateway,
            store,
            state: RwLock::new(AuthState::initial()),
            hydrated: AtomicBool::new(false),
        }
    }

    /// Current state snapshot
    pub fn snapshot(&self) -> AuthState {
        self.read_state(|state| state.clone())
    }

    /// Rebuild the session from the persisted store.
    ///
    /// Clears `loading` exactly once; later calls are ignored so a stray
    /// second hydration cannot flip the state back to loading.
    pub fn hydrate(&self) {
        if self.hydrated.swap(true, Ordering::SeqCst) {
            tracing::debug!("Hydration already performed, ignoring");
            return;
        }
        let session = self.read_persisted_session();
        self.write_state(|state| {
            state.session = session;
            state.loading = false;
        });
        tracing::debug!(
            logged_in = self.read_state(AuthState::logged_in),
            "Session hydrated"
        );
    }

    /// Re-fetch the canonical identity for the held token and reconcile
    /// state and store with it.
    ///
    /// A transport or server failure keeps the last known session: the
    /// token may still be perfectly valid and dropping the session on a
    /// flaky network would sign the user out spuriously. A `401` is not
    /// such a failure; the transport layer clears the store on `401`, and
    /// that clearing is observed here as a missing token.
    pub async fn refresh(&self) {
        self.write_state(|state| state.loading = true);

        let outcome = self.gateway.fetch_identity().await;
        let session = match outcome {
            Ok(identity) => match self.reconcile(identity) {
                Some(session) => Some(session),
                None => {
                    self.store.clear_all();
                    None
                }
            },
            Err(error) => {
                if let Some(token) = self.store.read(keys::TOKEN) {
                    tracing::warn!(
                        error = %error,
                        "Identity refresh failed, keeping last known session"
                    );
                    self.read_state(|state| state.session.clone())
                        .filter(|session| session.token == token)
                } else {
                    // Token revoked mid-refresh (401 handler cleared it).
                    None
                }
            }
        };

        self.write_state(|state| {
            state.session = session;
            state.loading = false;
        });
    }

    /// Exchange credentials for a session.
    ///
    /// On success the token and identity are persisted and the state
    /// becomes authenticated. Job seekers get their profile id resolved,
    /// creating an empty profile on first login; employers get a lookup
    /// only. Profile resolution is best-effort: its failure is logged and
    /// the login still succeeds, leaving the profile id unattached.
    pub async fn login(&self, email: &str, password: &str) -> AuthResult<()> {
        let token = IdentityGateway::login(&*self.gateway, email, password).await?;
        self.store.write(keys::TOKEN, &token);

        let account = self
            .gateway
            .find_account_by_email(email)
            .await?
            .ok_or(AuthError::AccountNotFound)?;

        let raw_role = account.user_type.clone().unwrap_or_default();
        let stored_role = normalize_role_text(&raw_role);
        let role = Role::normalize(&raw_role);

        self.store.write(keys::USER_ID, &account.user_id.to_string());
        self.store.write(keys::EMAIL, &account.email);
        self.store.write(keys::ROLE, &stored_role);

        let mut job_seeker_id = None;
        let mut employer_id = None;
        match role {
            Some(Role::JobSeeker) => match self.resolve_job_seeker(account.user_id).await {
                Ok(id) => {
                    self.store.write(keys::JOB_SEEKER_ID, &id.to_string());
                    job_seeker_id = Some(id);
                }
                Err(error) => {
                    tracing::warn!(error = %error, "Could not resolve job seeker profile");
                    self.store.remove(keys::JOB_SEEKER_ID);
                }
            },
            Some(Role::Employer) => match self.gateway.find_employer_id(account.user_id).await {
                Ok(Some(id)) => {
                    self.store.write(keys::EMPLOYER_ID, &id.to_string());
                    employer_id = Some(id);
                }
                Ok(None) => self.store.remove(keys::EMPLOYER_ID),
                Err(error) => {
                    tracing::warn!(error = %error, "Could not resolve employer profile");
                    self.store.remove(keys::EMPLOYER_ID);
                }
            },
            None => {
                tracing::warn!(role = %raw_role, "Unrecognized account role");
            }
        }

        self.write_state(|state| {
            state.session = Some(Session {
                token,
                user_id: account.user_id,
                role,
                job_seeker_id,
                employer_id,
                email: Some(account.email.clone()),
            });
            state.loading = false;
        });
        tracing::info!(user_id = %account.user_id, "Signed in");
        Ok(())
    }

    /// Record a job-seeker profile id created after login (e.g. by the
    /// profile page), so role-gated pages see it without a refresh.
    pub fn attach_job_seeker_id(&self, id: JobSeekerId) {
        self.store.write(keys::JOB_SEEKER_ID, &id.to_string());
        self.write_state(|state| {
            if let Some(session) = state.session.as_mut() {
                session.job_seeker_id = Some(id);
            }
        });
    }

    /// Record an employer profile id created after login.
    pub fn attach_employer_id(&self, id: EmployerId) {
        self.store.write(keys::EMPLOYER_ID, &id.to_string());
        self.write_state(|state| {
            if let Some(session) = state.session.as_mut() {
                session.employer_id = Some(id);
            }
        });
    }

    /// Drop the session and wipe the persisted store.
    ///
    /// Idempotent: signing out while already signed out is a no-op.
    pub fn logout(&self) {
        self.store.clear_all();
        let had_session = {
            let mut state = self
                .state
                .write()
                .unwrap_or_else(std::sync::PoisonError::into_inner);
            let had = state.session.is_some();
            state.session = None;
            had
        };
        if had_session {
            tracing::info!("Signed out");
        }
    }

    /// Re-verify the password, delete the account server-side, then sign
    /// out locally.
    pub async fn delete_account(&self, password: &str) -> AuthResult<()> {
        let (user_id, email) = self.read_state(|state| {
            state
                .session
                .as_ref()
                .map(|session| (session.user_id, session.email.clone()))
                .ok_or(AuthError::NotAuthenticated)
        })?;
        let email = email.ok_or(AuthError::NotAuthenticated)?;

        if !self.gateway.verify_credentials(&email, password).await? {
            return Err(AuthError::InvalidCredentials);
        }
        self.gateway.delete_user(user_id).await?;
        tracing::info!(user_id = %user_id, "Account deleted");
        self.logout();
        Ok(())
    }

    /// Change the signed-in account's password; returns the server message.
    pub async fn change_password(
        &self,
        current_password: &str,
        new_password: &str,
    ) -> AuthResult<Option<String>> {
        let email = self
            .read_state(|state| {
                state
                    .session
                    .as_ref()
                    .and_then(|session| session.email.clone())
            })
            .ok_or(AuthError::NotAuthenticated)?;
        AccountGateway::change_password(&*self.gateway, &email, current_password, new_password)
            .await
    }

    /// Rebuild a session from the persisted store, or `None` if the store
    /// holds no usable credential.
    ///
    /// No token means no session, whatever stale derived values remain. A
    /// token without a readable user id violates the data model; the store
    /// is wiped so the half-session cannot resurface on the next start.
    fn read_persisted_session(&self) -> Option<Session> {
        let token = self.store.read(keys::TOKEN).filter(|t| !t.is_empty())?;

        let user_id = match self
            .store
            .read(keys::USER_ID)
            .and_then(|raw| raw.parse::<i64>().ok())
        {
            Some(value) => UserId::new(value),
            None => {
                tracing::warn!("Persisted token has no readable user id, discarding session");
                self.store.clear_all();
                return None;
            }
        };

        Some(Session {
            token,
            user_id,
            role: self
                .store
                .read(keys::ROLE)
                .and_then(|raw| Role::normalize(&raw)),
            job_seeker_id: self
                .store
                .read(keys::JOB_SEEKER_ID)
                .and_then(|raw| raw.parse::<i64>().ok())
                .map(JobSeekerId::new),
            employer_id: self
                .store
                .read(keys::EMPLOYER_ID)
                .and_then(|raw| raw.parse::<i64>().ok())
                .map(EmployerId::new),
            email: self.store.read(keys::EMAIL).filter(|e| !e.is_empty()),
        })
    }

    /// Turn a fetched identity into a session and write it through to the
    /// store. Returns `None` when the identity is unusable (no user id) or
    /// the token vanished while the fetch was in flight.
    fn reconcile(&self, identity: Identity) -> Option<Session> {
        let Some(user_id) = identity.user_id else {
            tracing::warn!("Identity response carries no user id, signing out");
            return None;
        };
        let token = self.store.read(keys::TOKEN)?;

        let raw_role = identity.role.unwrap_or_default();
        let stored_role = normalize_role_text(&raw_role);

        self.store.write(keys::USER_ID, &user_id.to_string());
        self.store.write(keys::ROLE, &stored_role);
        match identity.job_seeker_id {
            Some(id) => self.store.write(keys::JOB_SEEKER_ID, &id.to_string()),
            None => self.store.remove(keys::JOB_SEEKER_ID),
        }
        match identity.employer_id {
            Some(id) => self.store.write(keys::EMPLOYER_ID, &id.to_string()),
            None => self.store.remove(keys::EMPLOYER_ID),
        }
        match identity.email.as_deref() {
            Some(email) => self.store.write(keys::EMAIL, email),
            None => self.store.remove(keys::EMAIL),
        }

        Some(Session {
            token,
            user_id,
            role: Role::normalize(&raw_role),
            job_seeker_id: identity.job_seeker_id,
            employer_id: identity.employer_id,
            email: identity.email,
        })
    }

    async fn resolve_job_seeker(&self, user_id: UserId) -> AuthResult<JobSeekerId> {
        match self.gateway.find_job_seeker_id(user_id).await? {
            Some(id) => Ok(id),
            None => {
                tracing::info!(user_id = %user_id, "Creating job seeker profile on first login");
                self.gateway.create_job_seeker(user_id).await
            }
        }
    }

    fn read_state<T>(&self, f: impl FnOnce(&AuthState) -> T) -> T {
        let state = self
            .state
            .read()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        f(&state)
    }

    fn write_state(&self, f: impl FnOnce(&mut AuthState)) {
        let mut state = self
            .state
            .write()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        f(&mut state);
    }
}

/// Strip the server's role prefix and upper-case, without requiring the
/// result to be a known role. This is the persisted form; [`Role::normalize`]
/// decides whether it grants anything.
fn normalize_role_text(raw: &str) -> String {
    raw.strip_prefix(ROLE_PREFIX)
        .unwrap_or(raw)
        .to_ascii_uppercase()
}
