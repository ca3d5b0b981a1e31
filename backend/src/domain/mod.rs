// Domain layer - business rules, entities, value objects
// No dependencies on other layers

pub mod error;
pub mod entities;
pub mod value_objects;
pub mod transitions;
pub mod dashboard;
pub mod query;
pub mod session;

pub use error::*;
pub use entities::*;
pub use value_objects::*;
pub use transitions::{next_status, LifecycleOperation, TransitionRejected};
pub use dashboard::{derive_counts, staff_workload, ComplaintCounts};
pub use query::{ComplaintQuery, ComplaintSort};
pub use session::{
    resolve, select_root_screen_graph, AuthUser, AuthenticatedSession, RawAuthState, ScreenGraphId,
    Session,
};
