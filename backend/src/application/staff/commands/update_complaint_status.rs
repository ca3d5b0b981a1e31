use crate::application::error::{AppError, AppResult};
use crate::application::ports::ComplaintRepository;
use crate::domain::{Complaint, ComplaintId, ComplaintStatus, IdentityId};

/// Moves an assigned complaint to `new_status` on behalf of the staff member
/// it is assigned to.
///
/// The stored complaint is only replaced once the write succeeds. Asking for
/// the status the complaint already has is accepted and skips the write.
pub async fn execute<C: ComplaintRepository + ?Sized>(
    complaints: &C,
    acting_staff_id: &IdentityId,
    complaint_id: &ComplaintId,
    new_status: ComplaintStatus,
) -> AppResult<Complaint> {
    let current = complaints
        .find_by_id(complaint_id)
        .await?
        .ok_or_else(|| AppError::not_found("complaint", complaint_id))?;

    let updated = current.with_status_from(acting_staff_id, new_status)?;
    if updated == current {
        tracing::debug!(complaint_id = %complaint_id, status = %new_status, "status unchanged");
        return Ok(current);
    }

    complaints.update(&updated).await?;

    tracing::info!(
        complaint_id = %complaint_id,
        staff_id = %acting_staff_id,
        from = %current.status(),
        to = %updated.status(),
        "complaint status updated"
    );
    Ok(updated)
}
