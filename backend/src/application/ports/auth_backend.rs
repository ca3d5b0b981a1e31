// Driven port - Email/password auth collaborator

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use thiserror::Error;
use crate::application::ports::StoreError;
use crate::domain::{AuthUser, Email};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthSession {
    pub token: String,
    pub user: AuthUser,
    pub expires_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    #[error("invalid credentials")]
    InvalidCredentials,

    #[error("email already registered")]
    EmailTaken,

    #[error("no active session")]
    NotSignedIn,

    #[error(transparent)]
    Backend(#[from] StoreError),
}

/// The auth client keeps its own notion of "current session", the way a
/// mobile SDK does: `sign_in` sets it, `sign_out` clears it.
#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
#[async_trait]
pub trait AuthBackend: Send + Sync {
    async fn sign_in(&self, email: &Email, password: &str) -> Result<AuthSession, AuthError>;
    /// Creates the auth user only; the profile row is written separately.
    async fn sign_up(&self, email: &Email, password: &str) -> Result<AuthUser, AuthError>;
    /// Idempotent.
    async fn sign_out(&self) -> Result<(), AuthError>;
    async fn current_user(&self) -> Result<Option<AuthUser>, AuthError>;
    async fn update_password(&self, new_password: &str) -> Result<(), AuthError>;
}
