use crate::application::ports::{AuthError, StoreError};
use crate::domain::{LifecycleOperation, LifecycleRejection, ComplaintStatus, ValidationErrors, ValueError};
use thiserror::Error;

/// Failure of any core operation.
#[derive(Debug, Error)]
pub enum AppError {
    /// Bad input; carries per-field messages. Fix and resubmit.
    #[error("validation error: {0}")]
    Validation(ValidationErrors),

    /// The actor's role does not permit this. Retrying cannot help.
    #[error("role violation: {0}")]
    RoleViolation(String),

    /// The requested change is not allowed from the current status.
    #[error("invalid transition: cannot {operation} a complaint that is {from}")]
    InvalidTransition {
        from: ComplaintStatus,
        operation: LifecycleOperation,
    },

    #[error("{entity} not found with ID {id}")]
    NotFound { entity: &'static str, id: String },

    /// The credential check failed or no one is signed in.
    #[error("authentication failed: {0}")]
    AuthenticationFailed(String),

    /// Store or auth collaborator failed. Safe to retry.
    #[error("backend unavailable: {0}")]
    BackendUnavailable(String),

    /// Stored data does not decode. Retrying reads the same row again.
    #[error("corrupt data: {0}")]
    Corrupt(String),
}

impl AppError {
    pub fn not_found(entity: &'static str, id: impl ToString) -> Self {
        AppError::NotFound {
            entity,
            id: id.to_string(),
        }
    }

    pub fn is_retryable(&self) -> bool {
        matches!(self, AppError::BackendUnavailable(_))
    }
}

impl From<StoreError> for AppError {
    fn from(e: StoreError) -> Self {
        match e {
            other @ StoreError::Unavailable(_) => AppError::BackendUnavailable(other.to_string()),
            StoreError::Corrupt(detail) => AppError::Corrupt(detail),
        }
    }
}

impl From<ValidationErrors> for AppError {
    fn from(e: ValidationErrors) -> Self {
        AppError::Validation(e)
    }
}

impl From<ValueError> for AppError {
    fn from(e: ValueError) -> Self {
        AppError::Validation(e.into())
    }
}

impl From<LifecycleRejection> for AppError {
    fn from(e: LifecycleRejection) -> Self {
        match e {
            LifecycleRejection::Transition(t) => AppError::InvalidTransition {
                from: t.from,
                operation: t.operation,
            },
            other @ (LifecycleRejection::NotStaff { .. } | LifecycleRejection::NotAssignee { .. }) => {
                AppError::RoleViolation(other.to_string())
            }
        }
    }
}

impl From<AuthError> for AppError {
    fn from(e: AuthError) -> Self {
        match e {
            AuthError::InvalidCredentials => {
                AppError::AuthenticationFailed("invalid email or password".to_string())
            }
            AuthError::NotSignedIn => AppError::AuthenticationFailed("not signed in".to_string()),
            AuthError::EmailTaken => {
                AppError::Validation(ValidationErrors::single("email", "Email is already registered"))
            }
            AuthError::Backend(store) => store.into(),
        }
    }
}

pub type AppResult<T> = std::result::Result<T, AppError>;
