// Application ports - Driven ports (output ports implemented by infrastructure)

pub mod identity_repository;
pub mod complaint_repository;
pub mod auth_backend;

pub use identity_repository::IdentityRepository;
pub use complaint_repository::{ComplaintFilter, ComplaintRepository};
pub use auth_backend::{AuthBackend, AuthError, AuthSession};

#[cfg(any(test, feature = "testing"))]
pub use identity_repository::MockIdentityRepository;
#[cfg(any(test, feature = "testing"))]
pub use complaint_repository::MockComplaintRepository;
#[cfg(any(test, feature = "testing"))]
pub use auth_backend::MockAuthBackend;

use thiserror::Error;

/// Failure talking to the remote store.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// Transport or database failure; the write was not applied.
    #[error("store unavailable: {0}")]
    Unavailable(String),

    /// A row came back that does not decode into a domain value.
    #[error("corrupt row: {0}")]
    Corrupt(String),
}
