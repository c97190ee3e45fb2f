//! Identity provider error types.

use reqwest::StatusCode;
use thiserror::Error;

/// Errors that can occur during identity provider operations.
///
/// Any of these degrades the caller to the unauthenticated state; none should
/// crash the process.
#[derive(Debug, Error)]
pub enum AuthError {
    /// Wrong password, unknown account, or an expired token.
    #[error("invalid credentials")]
    InvalidCredentials,

    /// Registration attempted with an email the provider already knows.
    #[error("an account with this email already exists")]
    UserAlreadyExists,

    /// The provider rejected a one-time code.
    #[error("verification code rejected")]
    OtpRejected,

    /// Any other provider-side failure; detail has been logged.
    #[error("identity provider error (status {0})")]
    Provider(StatusCode),

    /// The provider could not be reached at all.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),
}

/// Map a non-success provider status to the matching error variant.
pub(super) fn from_status(status: StatusCode) -> AuthError {
    match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => AuthError::InvalidCredentials,
        StatusCode::CONFLICT => AuthError::UserAlreadyExists,
        StatusCode::UNPROCESSABLE_ENTITY => AuthError::OtpRejected,
        _ => AuthError::Provider(status),
    }
}
