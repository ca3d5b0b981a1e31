// Application layer - use cases organized by persona
// Orchestrates domain logic, depends on domain layer only

pub mod error;
pub mod ports;
pub mod student;
pub mod staff;
pub mod admin;
pub mod account;
pub mod session_gate;
pub mod lifecycle;

pub use error::{AppError, AppResult};
pub use lifecycle::{ComplaintLifecycle, StaffWorkload, STAFF_PLACEHOLDER};
pub use session_gate::SessionRoleGate;
