// Driven port - Complaint store

use async_trait::async_trait;
use crate::application::ports::StoreError;
use crate::domain::{Complaint, ComplaintId, ComplaintStatus, IdentityId};

/// Server-side row filter. All set fields must match.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ComplaintFilter {
    pub status: Option<ComplaintStatus>,
    pub assigned_staff_id: Option<IdentityId>,
    pub reporter_id: Option<IdentityId>,
}

impl ComplaintFilter {
    pub fn all() -> Self {
        Self::default()
    }

    pub fn reported_by(reporter_id: IdentityId) -> Self {
        Self {
            reporter_id: Some(reporter_id),
            ..Self::default()
        }
    }

    pub fn assigned_to(staff_id: IdentityId) -> Self {
        Self {
            assigned_staff_id: Some(staff_id),
            ..Self::default()
        }
    }

    pub fn with_status(mut self, status: ComplaintStatus) -> Self {
        self.status = Some(status);
        self
    }

    pub fn matches(&self, complaint: &Complaint) -> bool {
        self.status.map_or(true, |s| complaint.status() == s)
            && self
                .assigned_staff_id
                .map_or(true, |id| complaint.assigned_staff_id() == Some(&id))
            && self.reporter_id.map_or(true, |id| complaint.reporter_id() == &id)
    }
}

#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
#[async_trait]
pub trait ComplaintRepository: Send + Sync {
    async fn find_by_id(&self, id: &ComplaintId) -> Result<Option<Complaint>, StoreError>;
    async fn insert(&self, complaint: &Complaint) -> Result<(), StoreError>;
    /// Writes `status` and `assigned_staff_id` together, atomically.
    async fn update(&self, complaint: &Complaint) -> Result<(), StoreError>;
    /// Newest first.
    async fn list(&self, filter: &ComplaintFilter) -> Result<Vec<Complaint>, StoreError>;
}
