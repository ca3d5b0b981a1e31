pub mod identity_id;
pub mod complaint_id;
pub mod email;
pub mod display_name;
pub mod user_role;
pub mod account_status;
pub mod complaint_status;
pub mod urgency;
pub mod password;

pub use identity_id::IdentityId;
pub use complaint_id::ComplaintId;
pub use email::Email;
pub use display_name::DisplayName;
pub use user_role::{UnknownRole, UserRole};
pub use account_status::{AccountStatus, UnknownAccountStatus};
pub use complaint_status::{ComplaintStatus, UnknownComplaintStatus};
pub use urgency::{UnknownUrgency, Urgency};
pub use password::NewPassword;
