//! Account Error Types
//!
//! Closed set of failure variants for the account service. Structured
//! context (user id, list kind) lives on the variants; rendering to the
//! wire-format message strings happens only at the HTTP boundary via
//! `Display`.

use axum::http::StatusCode;
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

use crate::domain::value_object::{list_kind::ListKind, user_id::UserId};

/// Account-specific result type alias
pub type AccountResult<T> = Result<T, AccountError>;

/// Account-specific error variants
#[derive(Debug, Error)]
pub enum AccountError {
    /// Password and confirmation differ at registration
    #[error("Passwords do not match")]
    PasswordMismatch,

    /// User name already exists (unique index violation)
    #[error("User Name already taken")]
    UserNameTaken,

    /// Persisting a new user failed for a non-uniqueness reason
    #[error("There was an error creating the user: {0}")]
    CreateFailed(#[source] sqlx::Error),

    /// No user with the given name (login)
    #[error("Unable to find user {user_name}")]
    UserNotFound { user_name: String },

    /// Wrong password for an existing user (login)
    #[error("Incorrect password for user {user_name}")]
    IncorrectPassword { user_name: String },

    /// No user with the given id (list reads)
    #[error("Unable to find user with id: {user_id}")]
    UserIdNotFound { user_id: UserId },

    /// List already holds the maximum number of entries
    #[error("Unable to update {list} for user with id: {user_id}")]
    ListFull { list: ListKind, user_id: UserId },

    /// List mutation failed or matched no user row
    #[error("Unable to update {list} for user with id: {user_id}")]
    ListUpdateFailed { list: ListKind, user_id: UserId },

    /// Missing, malformed, expired, or unresolvable bearer token.
    /// Only ever surfaces through the auth middleware.
    #[error("Invalid or expired bearer token")]
    TokenInvalid,

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AccountError {
    /// Get the ErrorKind for this error
    ///
    /// The mapping is deliberately flat: every service-layer failure
    /// renders as 422 on the wire, authentication failures as 401.
    pub fn kind(&self) -> ErrorKind {
        match self {
            AccountError::TokenInvalid => ErrorKind::Unauthorized,
            _ => ErrorKind::UnprocessableEntity,
        }
    }

    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            AccountError::TokenInvalid => StatusCode::UNAUTHORIZED,
            _ => StatusCode::UNPROCESSABLE_ENTITY,
        }
    }

    /// Convert to AppError
    pub fn to_app_error(&self) -> AppError {
        AppError::new(self.kind(), self.to_string())
    }

    /// Log the error with appropriate level
    pub(crate) fn log(&self) {
        match self {
            AccountError::Database(e) => {
                tracing::error!(error = %e, "Account database error");
            }
            AccountError::CreateFailed(e) => {
                tracing::error!(error = %e, "Failed to create user");
            }
            AccountError::Internal(msg) => {
                tracing::error!(message = %msg, "Account internal error");
            }
            AccountError::ListUpdateFailed { list, user_id } => {
                tracing::error!(list = %list, user_id = %user_id, "List update failed");
            }
            AccountError::IncorrectPassword { user_name } => {
                tracing::warn!(user_name = %user_name, "Invalid login attempt");
            }
            AccountError::TokenInvalid => {
                tracing::debug!("Rejected bearer token");
            }
            _ => {
                tracing::debug!(error = %self, "Account error");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_messages() {
        assert_eq!(
            AccountError::PasswordMismatch.to_string(),
            "Passwords do not match"
        );
        assert_eq!(
            AccountError::UserNameTaken.to_string(),
            "User Name already taken"
        );
        assert_eq!(
            AccountError::UserNotFound {
                user_name: "alice".to_string()
            }
            .to_string(),
            "Unable to find user alice"
        );
        assert_eq!(
            AccountError::IncorrectPassword {
                user_name: "alice".to_string()
            }
            .to_string(),
            "Incorrect password for user alice"
        );
    }

    #[test]
    fn test_list_messages_reference_user_id() {
        let user_id = UserId::new();
        let err = AccountError::ListFull {
            list: ListKind::Favourites,
            user_id,
        };
        assert_eq!(
            err.to_string(),
            format!("Unable to update favourites for user with id: {user_id}")
        );

        let err = AccountError::ListUpdateFailed {
            list: ListKind::History,
            user_id,
        };
        assert_eq!(
            err.to_string(),
            format!("Unable to update history for user with id: {user_id}")
        );
    }

    #[test]
    fn test_status_mapping_is_flat() {
        assert_eq!(
            AccountError::PasswordMismatch.status_code(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(
            AccountError::UserNameTaken.status_code(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(
            AccountError::Internal("boom".to_string()).status_code(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(
            AccountError::TokenInvalid.status_code(),
            StatusCode::UNAUTHORIZED
        );
    }

    #[test]
    fn test_to_app_error_keeps_message() {
        let err = AccountError::PasswordMismatch;
        let app = err.to_app_error();
        assert_eq!(app.status_code(), 422);
        assert_eq!(app.message(), "Passwords do not match");
    }
}
