//! Auth Error Types
//!
//! Auth-specific error variants that integrate with the unified
//! `kernel::error::AppError` system.

use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// Auth-specific result type alias
pub type AuthResult<T> = Result<T, AuthError>;

/// Auth-specific error variants
#[derive(Debug, Error)]
pub enum AuthError {
    /// Email/password pair rejected
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// No account matches the given email
    #[error("Account not found")]
    AccountNotFound,

    /// Operation requires an authenticated session
    #[error("Not signed in")]
    NotAuthenticated,

    /// OTP did not match
    #[error("Invalid verification code")]
    InvalidOtp,

    /// A multi-step flow was driven out of order
    #[error("{0}")]
    FlowState(&'static str),

    /// The backend call itself failed; carries the gateway's classification
    #[error(transparent)]
    Gateway(#[from] AppError),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AuthError {
    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            AuthError::InvalidCredentials
            | AuthError::NotAuthenticated
            | AuthError::InvalidOtp => ErrorKind::Unauthorized,
            AuthError::AccountNotFound => ErrorKind::NotFound,
            AuthError::FlowState(_) => ErrorKind::Conflict,
            AuthError::Gateway(e) => e.kind(),
            AuthError::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    /// Convert to AppError
    pub fn to_app_error(&self) -> AppError {
        AppError::new(self.kind(), self.to_string())
    }
}
