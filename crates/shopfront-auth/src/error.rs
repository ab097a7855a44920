//! Authentication errors.

use thiserror::Error;

/// Authentication error type.
///
/// The registration variants carry the exact text the forms show inline.
#[derive(Error, Debug)]
pub enum AuthError {
    /// Invalid credentials provided.
    #[error("Invalid username or password")]
    InvalidCredentials,

    /// User already exists.
    #[error("Username already exists: {0}")]
    UserAlreadyExists(String),

    /// Registration passwords differ.
    #[error("Passwords do not match!")]
    PasswordMismatch,

    /// Password shorter than [`MIN_PASSWORD_LEN`](crate::MIN_PASSWORD_LEN).
    #[error("Password must be at least 6 characters!")]
    PasswordTooShort,

    /// A required registration field was left blank.
    #[error("{0} is required")]
    MissingField(&'static str),

    /// No session is stored.
    #[error("not logged in")]
    NotLoggedIn,

    /// The session's role may not do this.
    #[error("insufficient permissions")]
    InsufficientPermissions,

    /// Unrecognised role name.
    #[error("unknown role: {0}")]
    UnknownRole(String),

    /// Cache error.
    #[error("cache error: {0}")]
    Cache(#[from] shopfront_cache::CacheError),
}

impl AuthError {
    /// Check if this is an authentication failure.
    pub fn is_auth_failure(&self) -> bool {
        matches!(self, AuthError::InvalidCredentials | AuthError::NotLoggedIn)
    }

    /// Check if this is a permission error.
    pub fn is_permission_error(&self) -> bool {
        matches!(self, AuthError::InsufficientPermissions)
    }

    /// Check if this is a form validation error shown next to the form.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            AuthError::PasswordMismatch
                | AuthError::PasswordTooShort
                | AuthError::MissingField(_)
                | AuthError::UserAlreadyExists(_)
        )
    }
}
