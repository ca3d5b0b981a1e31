use crate::application::error::{AppError, AppResult};
use crate::application::ports::{ComplaintRepository, IdentityRepository};
use crate::domain::{Complaint, ComplaintId, IdentityId};

/// Hands a complaint to a staff member. A pending complaint moves to
/// `In-Progress`; re-assigning keeps the current status.
pub async fn execute<C, I>(
    complaints: &C,
    identities: &I,
    acting_admin_id: &IdentityId,
    complaint_id: &ComplaintId,
    staff_id: &IdentityId,
) -> AppResult<Complaint>
where
    C: ComplaintRepository + ?Sized,
    I: IdentityRepository + ?Sized,
{
    super::require_admin(identities, acting_admin_id).await?;

    let current = complaints
        .find_by_id(complaint_id)
        .await?
        .ok_or_else(|| AppError::not_found("complaint", complaint_id))?;
    let staff = identities
        .find_by_id(staff_id)
        .await?
        .ok_or_else(|| AppError::not_found("identity", staff_id))?;

    let assigned = current.assigned_to(&staff)?;
    if assigned == current {
        tracing::debug!(complaint_id = %complaint_id, staff_id = %staff_id, "already assigned");
        return Ok(current);
    }

    complaints.update(&assigned).await?;

    tracing::info!(
        complaint_id = %complaint_id,
        staff_id = %staff_id,
        admin_id = %acting_admin_id,
        status = %assigned.status(),
        "complaint assigned"
    );
    if !staff.is_active() {
        tracing::warn!(staff_id = %staff_id, "complaint assigned to a suspended account");
    }
    Ok(assigned)
}
