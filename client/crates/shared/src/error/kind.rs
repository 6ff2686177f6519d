//! Error Kind - Classification of errors
//!
//! Defines the [`ErrorKind`] enum that maps to and from HTTP status codes.

use serde::Serialize;

/// Error classification
///
/// Classifies every failure the client can observe. Kinds that correspond
/// to an HTTP status carry that status; the client also derives a kind from
/// a response status via [`ErrorKind::from_status`] when the backend rejects
/// a call.
///
/// ## Notes
/// * `non_exhaustive` - new variants may be added later
///
/// ## Examples
/// ```rust
/// use kernel::error::kind::ErrorKind;
///
/// let kind = ErrorKind::NotFound;
/// assert_eq!(kind.status_code(), 404);
/// assert_eq!(kind.as_str(), "Not Found");
/// assert_eq!(ErrorKind::from_status(401), ErrorKind::Unauthorized);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[non_exhaustive]
pub enum ErrorKind {
    /// 400 - Bad Request: the request was malformed
    BadRequest,
    /// 401 - Unauthorized: the credential is missing or invalid
    Unauthorized,
    /// 403 - Forbidden: authenticated but not allowed
    Forbidden,
    /// 404 - Not Found: the resource does not exist
    NotFound,
    /// 408 - Request Timeout
    RequestTimeout,
    /// 409 - Conflict: conflicts with current server state
    Conflict,
    /// 410 - Gone: the resource was deleted or expired
    Gone,
    /// 422 - Unprocessable Entity: validation failure
    UnprocessableEntity,
    /// 429 - Too Many Requests: rate limited
    TooManyRequests,
    /// 500 - Internal Server Error
    InternalServerError,
    /// 503 - Service Unavailable: also used for transport-level failures
    ServiceUnavailable,
}

impl ErrorKind {
    /// Get the HTTP status code for this kind
    ///
    /// ## Examples
    /// ```rust
    /// use kernel::error::kind::ErrorKind;
    /// assert_eq!(ErrorKind::BadRequest.status_code(), 400);
    /// assert_eq!(ErrorKind::NotFound.status_code(), 404);
    /// ```
    #[inline]
    pub const fn status_code(&self) -> u16 {
        match self {
            ErrorKind::BadRequest => 400,
            ErrorKind::Unauthorized => 401,
            ErrorKind::Forbidden => 403,
            ErrorKind::NotFound => 404,
            ErrorKind::RequestTimeout => 408,
            ErrorKind::Conflict => 409,
            ErrorKind::Gone => 410,
            ErrorKind::UnprocessableEntity => 422,
            ErrorKind::TooManyRequests => 429,
            ErrorKind::InternalServerError => 500,
            ErrorKind::ServiceUnavailable => 503,
        }
    }

    /// Derive a kind from an HTTP response status
    ///
    /// Unrecognized 4xx statuses collapse to [`ErrorKind::BadRequest`],
    /// everything else to [`ErrorKind::InternalServerError`].
    ///
    /// ## Examples
    /// ```rust
    /// use kernel::error::kind::ErrorKind;
    /// assert_eq!(ErrorKind::from_status(404), ErrorKind::NotFound);
    /// assert_eq!(ErrorKind::from_status(418), ErrorKind::BadRequest);
    /// assert_eq!(ErrorKind::from_status(502), ErrorKind::InternalServerError);
    /// ```
    #[inline]
    pub const fn from_status(status: u16) -> Self {
        match status {
            400 => ErrorKind::BadRequest,
            401 => ErrorKind::Unauthorized,
            403 => ErrorKind::Forbidden,
            404 => ErrorKind::NotFound,
            408 => ErrorKind::RequestTimeout,
            409 => ErrorKind::Conflict,
            410 => ErrorKind::Gone,
            422 => ErrorKind::UnprocessableEntity,
            429 => ErrorKind::TooManyRequests,
            500 => ErrorKind::InternalServerError,
            503 => ErrorKind::ServiceUnavailable,
            s if s >= 400 && s < 500 => ErrorKind::BadRequest,
            _ => ErrorKind::InternalServerError,
        }
    }

    /// Get the user-facing string representation
    ///
    /// ## Returns
    /// The standard HTTP reason phrase
    ///
    /// ## Examples
    /// ```rust
    /// use kernel::error::kind::ErrorKind;
    /// assert_eq!(ErrorKind::BadRequest.as_str(), "Bad Request");
    /// ```
    #[inline]
    pub const fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::BadRequest => "Bad Request",
            ErrorKind::Unauthorized => "Unauthorized",
            ErrorKind::Forbidden => "Forbidden",
            ErrorKind::NotFound => "Not Found",
            ErrorKind::RequestTimeout => "Request Timeout",
            ErrorKind::Conflict => "Conflict",
            ErrorKind::Gone => "Gone",
            ErrorKind::UnprocessableEntity => "Unprocessable Entity",
            ErrorKind::TooManyRequests => "Too Many Requests",
            ErrorKind::InternalServerError => "Internal Server Error",
            ErrorKind::ServiceUnavailable => "Service Unavailable",
        }
    }

    /// Whether this is a server-side error
    ///
    /// 5xx kinds return `true`. These should be logged.
    #[inline]
    pub const fn is_server_error(&self) -> bool {
        self.status_code() >= 500
    }

    /// Whether this is a client-side error
    ///
    /// 4xx kinds return `true`.
    #[inline]
    pub const fn is_client_error(&self) -> bool {
        let code = self.status_code();
        code >= 400 && code < 500
    }

    /// Whether this is an authentication failure (HTTP 401)
    ///
    /// The API gateway treats this kind specially: the persisted session is
    /// cleared and a session-expired event is raised.
    #[inline]
    pub const fn is_auth_failure(&self) -> bool {
        matches!(self, ErrorKind::Unauthorized)
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
