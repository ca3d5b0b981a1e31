// Driven adapters - implementations of the application ports

pub mod memory;
pub mod password;
pub mod persistence;

pub use memory::{InMemoryAuthBackend, InMemoryComplaintRepository, InMemoryIdentityRepository};
pub use persistence::{PostgresAuthBackend, PostgresComplaintRepository, PostgresIdentityRepository};
