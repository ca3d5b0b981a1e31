// In-memory driven adapters, used when no database is configured and in tests

pub mod identity_repository;
pub mod complaint_repository;
pub mod auth_backend;

pub use identity_repository::InMemoryIdentityRepository;
pub use complaint_repository::InMemoryComplaintRepository;
pub use auth_backend::InMemoryAuthBackend;
