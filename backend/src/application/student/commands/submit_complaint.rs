use crate::application::error::{AppError, AppResult};
use crate::application::ports::{ComplaintRepository, IdentityRepository};
use crate::domain::{Complaint, ComplaintSubmission, IdentityId, UserRole};

/// Files a new complaint on behalf of a student. The complaint starts
/// `Pending` and unassigned.
pub async fn execute<C, I>(
    complaints: &C,
    identities: &I,
    reporter_id: &IdentityId,
    submission: ComplaintSubmission,
) -> AppResult<Complaint>
where
    C: ComplaintRepository + ?Sized,
    I: IdentityRepository + ?Sized,
{
    // Form errors are reported before any round trip.
    let complaint = Complaint::submit(*reporter_id, submission)?;

    let reporter = identities
        .find_by_id(reporter_id)
        .await?
        .ok_or_else(|| AppError::not_found("identity", reporter_id))?;
    if !reporter.has_role(UserRole::Student) {
        return Err(AppError::RoleViolation(format!(
            "only students can file complaints, {} is {}",
            reporter_id,
            reporter.role()
        )));
    }

    complaints.insert(&complaint).await?;

    tracing::info!(
        complaint_id = %complaint.id(),
        reporter_id = %reporter_id,
        urgency = %complaint.urgency(),
        "complaint submitted"
    );
    Ok(complaint)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::{MockComplaintRepository, MockIdentityRepository, StoreError};
    use crate::domain::entities::complaint::fixtures::{identity, submission};
    use crate::domain::ComplaintStatus;

    fn identities_returning(found: crate::domain::Identity) -> MockIdentityRepository {
        let mut identities = MockIdentityRepository::new();
        identities
            .expect_find_by_id()
            .returning(move |_| Ok(Some(found.clone())));
        identities
    }

    #[tokio::test]
    async fn stores_a_pending_unassigned_complaint() {
        let student = identity(UserRole::Student);
        let identities = identities_returning(student.clone());
        let mut complaints = MockComplaintRepository::new();
        complaints
            .expect_insert()
            .withf(|c| c.status() == ComplaintStatus::Pending && c.assigned_staff_id().is_none())
            .times(1)
            .returning(|_| Ok(()));

        let complaint = execute(&complaints, &identities, student.id(), submission("Broken Lab PC"))
            .await
            .unwrap();
        assert_eq!(complaint.reporter_id(), student.id());
    }

    #[tokio::test]
    async fn blank_form_never_reaches_the_store() {
        let identities = MockIdentityRepository::new();
        let complaints = MockComplaintRepository::new();
        let form = ComplaintSubmission {
            description: String::new(),
            ..submission("Broken Lab PC")
        };
        let err = execute(&complaints, &identities, &IdentityId::new(), form)
            .await
            .unwrap_err();
        match err {
            AppError::Validation(fields) => assert!(fields.contains("description")),
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn staff_cannot_file_complaints() {
        let staff = identity(UserRole::Staff);
        let identities = identities_returning(staff.clone());
        let complaints = MockComplaintRepository::new();
        let err = execute(&complaints, &identities, staff.id(), submission("Projector"))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::RoleViolation(_)));
    }

    #[tokio::test]
    async fn store_failure_surfaces_as_backend_unavailable() {
        let student = identity(UserRole::Student);
        let identities = identities_returning(student.clone());
        let mut complaints = MockComplaintRepository::new();
        complaints
            .expect_insert()
            .returning(|_| Err(StoreError::Unavailable("connection reset".into())));

        let err = execute(&complaints, &identities, student.id(), submission("Mess food"))
            .await
            .unwrap_err();
        assert!(err.is_retryable());
    }
}
