pub mod identity;
pub mod complaint;

pub use identity::Identity;
pub use complaint::{
    Complaint, ComplaintSubmission, LifecycleRejection, SubmitterDetails, DEFAULT_CATEGORY,
};
