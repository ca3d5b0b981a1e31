// ComplaintLifecycle - entry point for every role-specific screen set
//
// Owns no state besides its store handles. The rules themselves live in the
// domain transition table; this facade wires the persona commands to the
// configured adapters and adds the read-side helpers the dashboards need.

use serde::Serialize;
use std::sync::Arc;
use tracing::{debug, warn};

use crate::application::admin::commands::{assign_complaint, require_admin};
use crate::application::error::AppResult;
use crate::application::ports::{ComplaintFilter, ComplaintRepository, IdentityRepository};
use crate::application::staff::commands::update_complaint_status;
use crate::application::student::commands::submit_complaint;
use crate::domain::{
    derive_counts, staff_workload, Complaint, ComplaintCounts, ComplaintId, ComplaintQuery,
    ComplaintStatus, ComplaintSubmission, Identity, IdentityId, UserRole,
};

/// Shown when a complaint points at a staff identity that no longer exists.
pub const STAFF_PLACEHOLDER: &str = "Staff";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StaffWorkload {
    pub staff: Identity,
    pub open_complaints: usize,
}

#[derive(Clone)]
pub struct ComplaintLifecycle {
    complaints: Arc<dyn ComplaintRepository>,
    identities: Arc<dyn IdentityRepository>,
}

impl ComplaintLifecycle {
    pub fn new(
        complaints: Arc<dyn ComplaintRepository>,
        identities: Arc<dyn IdentityRepository>,
    ) -> Self {
        Self {
            complaints,
            identities,
        }
    }

    pub async fn submit(
        &self,
        reporter_id: &IdentityId,
        submission: ComplaintSubmission,
    ) -> AppResult<Complaint> {
        submit_complaint::execute(&*self.complaints, &*self.identities, reporter_id, submission)
            .await
    }

    pub async fn assign(
        &self,
        acting_admin_id: &IdentityId,
        complaint_id: &ComplaintId,
        staff_id: &IdentityId,
    ) -> AppResult<Complaint> {
        assign_complaint::execute(
            &*self.complaints,
            &*self.identities,
            acting_admin_id,
            complaint_id,
            staff_id,
        )
        .await
    }

    pub async fn update_status(
        &self,
        acting_staff_id: &IdentityId,
        complaint_id: &ComplaintId,
        new_status: ComplaintStatus,
    ) -> AppResult<Complaint> {
        update_complaint_status::execute(&*self.complaints, acting_staff_id, complaint_id, new_status)
            .await
    }

    /// Dashboard tiles over whatever list the caller already holds.
    pub fn derive_counts(complaints: &[Complaint]) -> ComplaintCounts {
        derive_counts(complaints)
    }

    /// A student's own history.
    pub async fn list_for_reporter(
        &self,
        reporter_id: &IdentityId,
        query: &ComplaintQuery,
    ) -> AppResult<Vec<Complaint>> {
        self.list(ComplaintFilter::reported_by(*reporter_id), query).await
    }

    /// Complaints currently assigned to one staff member.
    pub async fn list_assigned(
        &self,
        staff_id: &IdentityId,
        query: &ComplaintQuery,
    ) -> AppResult<Vec<Complaint>> {
        self.list(ComplaintFilter::assigned_to(*staff_id), query).await
    }

    pub async fn list_all(
        &self,
        acting_admin_id: &IdentityId,
        query: &ComplaintQuery,
    ) -> AppResult<Vec<Complaint>> {
        require_admin(&*self.identities, acting_admin_id).await?;
        self.list(ComplaintFilter::all(), query).await
    }

    /// Name of the assigned staff member, `None` while unassigned.
    pub async fn staff_display_name(&self, complaint: &Complaint) -> AppResult<Option<String>> {
        let Some(staff_id) = complaint.assigned_staff_id() else {
            return Ok(None);
        };
        match self.identities.find_by_id(staff_id).await? {
            Some(staff) => Ok(Some(staff.display_name().to_string())),
            None => {
                warn!(
                    complaint_id = %complaint.id(),
                    staff_id = %staff_id,
                    "assigned staff identity is missing"
                );
                Ok(Some(STAFF_PLACEHOLDER.to_string()))
            }
        }
    }

    /// Open complaints per staff member for the manage-staff screen, in the
    /// directory's name order. Staff with nothing open are listed with zero.
    pub async fn staff_workload(&self, acting_admin_id: &IdentityId) -> AppResult<Vec<StaffWorkload>> {
        require_admin(&*self.identities, acting_admin_id).await?;
        let staff = self.identities.list_by_role(UserRole::Staff).await?;
        let complaints = self.complaints.list(&ComplaintFilter::all()).await?;
        let counts = staff_workload(&complaints);

        Ok(staff
            .into_iter()
            .map(|member| {
                let open_complaints = counts.get(member.id()).copied().unwrap_or(0);
                StaffWorkload {
                    staff: member,
                    open_complaints,
                }
            })
            .collect())
    }

    async fn list(&self, filter: ComplaintFilter, query: &ComplaintQuery) -> AppResult<Vec<Complaint>> {
        let fetched = self.complaints.list(&filter).await?;
        debug!(fetched = fetched.len(), ?filter, "complaints listed");
        Ok(query.apply(fetched))
    }
}
